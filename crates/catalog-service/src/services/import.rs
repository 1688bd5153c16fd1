//! Import service
//!
//! Loads tool records in the collector's JSON format into the catalog.
//! Records sharing a name (case-insensitive) are merged before writing,
//! existing upvote counters are never touched, and a run is written in one
//! transaction.

use std::collections::HashMap;

use tracing::{info, instrument, warn};
use validator::Validate;

use crate::dto::{ImportReport, ToolRecord};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Options for an import run
#[derive(Debug, Clone, Copy, Default)]
pub struct ImportOptions {
    /// Replace every tool (and drop every vote) in one transaction
    pub reset: bool,
    /// Validate and merge without writing
    pub dry_run: bool,
}

/// Import service
pub struct ImportService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ImportService<'a> {
    /// Create a new ImportService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Parse a JSON array of tool records
    pub fn parse(json: &str) -> ServiceResult<Vec<ToolRecord>> {
        serde_json::from_str(json)
            .map_err(|e| ServiceError::validation(format!("Invalid tool data: {e}")))
    }

    /// Validate and merge records, keeping first-seen order
    pub fn prepare(records: Vec<ToolRecord>) -> (Vec<ToolRecord>, ImportReport) {
        let mut report = ImportReport {
            received: records.len(),
            ..ImportReport::default()
        };

        let mut merged: Vec<ToolRecord> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for record in records {
            let record = record.normalized();
            if let Err(e) = record.validate() {
                warn!(tool = %record.name, error = %e, "Skipping invalid tool record");
                report.skipped += 1;
                continue;
            }

            match index.get(&record.name.to_lowercase()) {
                Some(&position) => {
                    merged[position].merge(record);
                    report.merged += 1;
                }
                None => {
                    index.insert(record.name.to_lowercase(), merged.len());
                    merged.push(record);
                }
            }
        }

        (merged, report)
    }

    /// Import a JSON document of tool records
    #[instrument(skip(self, json), fields(bytes = json.len()))]
    pub async fn import_json(&self, json: &str, options: ImportOptions) -> ServiceResult<ImportReport> {
        let records = Self::parse(json)?;
        self.import(records, options).await
    }

    /// Import already parsed tool records
    #[instrument(skip(self, records), fields(records = records.len()))]
    pub async fn import(
        &self,
        records: Vec<ToolRecord>,
        options: ImportOptions,
    ) -> ServiceResult<ImportReport> {
        let (records, mut report) = Self::prepare(records);

        if options.dry_run {
            info!(tools = records.len(), "Dry run, nothing written");
            return Ok(report);
        }

        let tools: Vec<_> = records.into_iter().map(ToolRecord::into_tool).collect();

        if options.reset {
            let removed = self.ctx.tool_repo().replace_all(&tools).await?;
            warn!(removed, "Catalog reset before import");
            report.reset = Some(removed);
        } else {
            self.ctx.tool_repo().upsert_all(&tools).await?;
        }
        report.imported = tools.len();

        info!(
            received = report.received,
            merged = report.merged,
            imported = report.imported,
            skipped = report.skipped,
            "Import finished"
        );

        Ok(report)
    }
}
