use anyhow::Result;
use log::info;

use crate::api::SheetsClient;
use crate::config::AppConfig;
use crate::report;
use crate::signatures::{SignatureSummary, parse_signatures};
use crate::store::JsonStore;

/// Rebuilds signatures.json from the published sheet
pub struct SignatureService<'a> {
    config: &'a AppConfig,
    store: JsonStore,
    client: SheetsClient,
}

impl<'a> SignatureService<'a> {
    pub fn new(config: &'a AppConfig) -> Result<Self> {
        Ok(Self {
            config,
            store: JsonStore::new(&config.repo_root),
            client: SheetsClient::new(&config.signatures)?,
        })
    }

    pub async fn run(&self) -> Result<SignatureSummary> {
        report::banner("MaGnetBear Signature Wall Updater");

        let csv = self.client.fetch_csv(&self.config.signatures.csv_url).await?;
        let summary = self.write(&csv)?;

        let output = &self.config.paths.signatures;
        let output_name = output
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        report::print_signatures(&summary, &output_name, self.config.signatures.preview_count);

        Ok(summary)
    }

    /// Parse the CSV export and write the summary file
    pub fn write(&self, csv: &str) -> Result<SignatureSummary> {
        let summary = parse_signatures(csv, &self.config.signatures)?;

        let output = &self.config.paths.signatures;
        self.store.save(output, &summary)?;
        info!("[Signatures] Wrote {}", self.store.path(output).display());

        Ok(summary)
    }
}
