//! CSV export of bulk results.

use std::io::Write;

use anyhow::{Context, Result};
use csv::Writer;

use crate::check::bulk::BulkCheckRow;
use crate::check::score::security_score;

/// Writes one CSV row per bulk row.
///
/// Columns: `Domain,DMARC,SPF,DKIM,Security Score`. Rows for domains that
/// could not be checked keep the domain and leave the other columns empty.
///
/// Returns the number of rows written, header excluded.
pub fn write_csv<W: Write>(output: W, rows: &[BulkCheckRow]) -> Result<usize> {
    let mut writer = Writer::from_writer(output);
    writer
        .write_record(["Domain", "DMARC", "SPF", "DKIM", "Security Score"])
        .context("Failed to write CSV header")?;

    for row in rows {
        match &row.result {
            Ok(result) => writer.write_record([
                result.domain.clone(),
                result.dmarc.status().to_string(),
                result.spf.status().to_string(),
                result.dkim_status().to_string(),
                security_score(result).to_string(),
            ]),
            Err(_) => writer.write_record([row.domain.as_str(), "", "", "", ""]),
        }
        .with_context(|| format!("Failed to write CSV row for {}", row.domain))?;
    }

    writer.flush().context("Failed to flush CSV output")?;
    Ok(rows.len())
}
