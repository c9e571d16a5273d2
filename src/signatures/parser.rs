use anyhow::{Context, Result};
use csv::ReaderBuilder;
use log::info;
use serde::{Deserialize, Serialize};

use crate::config::SignatureSettings;

/// Contents of signatures.json
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignatureSummary {
    pub total_signatures: usize,
    pub approved_signatures: usize,
    pub entries: Vec<String>,
}

/// Count every submission and keep the display names of approved ones
pub fn parse_signatures(
    csv_content: &str,
    settings: &SignatureSettings,
) -> Result<SignatureSummary> {
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .from_reader(csv_content.as_bytes());

    let headers = reader.headers().context("Failed to read CSV header")?;
    let status_col = headers
        .iter()
        .position(|h| h.trim() == settings.status_column);
    let name_col = headers.iter().position(|h| h.trim() == settings.name_column);

    let mut total = 0;
    let mut entries = Vec::new();

    for result in reader.records() {
        let record = result.context("Failed to read CSV record")?;
        total += 1;

        let status = status_col
            .and_then(|col| record.get(col))
            .unwrap_or("")
            .trim()
            .to_lowercase();
        let name = name_col
            .and_then(|col| record.get(col))
            .unwrap_or("")
            .trim();

        if settings.approved_statuses.contains(&status) && !name.is_empty() {
            entries.push(name.to_string());
        }
    }

    info!("[Signatures] Total submissions: {}", total);
    info!("[Signatures] Approved with names: {}", entries.len());

    Ok(SignatureSummary {
        total_signatures: total,
        approved_signatures: entries.len(),
        entries,
    })
}
