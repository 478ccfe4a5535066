//! Domain input for the command line.

use std::path::Path;

use anyhow::{Context, Result};

use crate::check::parse_domain_list;

/// Domains to check: the positional arguments, then the entries of `file`.
///
/// Positional domains are kept as given so an empty argument still reaches
/// the checker and is rejected there. File contents go through
/// `parse_domain_list`.
pub fn collect_domains(domains: &[String], file: Option<&Path>) -> Result<Vec<String>> {
    let mut collected = domains.to_vec();
    if let Some(path) = file {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read domain file: {}", path.display()))?;
        collected.extend(parse_domain_list(&text));
    }
    Ok(collected)
}
