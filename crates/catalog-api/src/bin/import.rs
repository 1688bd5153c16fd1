//! Catalog import tool
//!
//! Loads a JSON array of tool records into the catalog database.
//!
//! ```bash
//! cargo run -p catalog-api --bin catalog-import -- tools.json --reset
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use catalog_common::{try_init_tracing_with_config, AppConfig, TracingConfig};
use catalog_db::{close_pool, create_pool, run_migrations, PgToolRepository, PgVoteRepository};
use catalog_service::{ImportOptions, ImportReport, ImportService, ServiceContextBuilder};
use clap::Parser;
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about = "Import DevOps tools into the catalog", long_about = None)]
struct Args {
    /// Path to the JSON file with tool records
    file: PathBuf,

    /// Delete every tool (and its votes) before importing
    #[arg(long)]
    reset: bool,

    /// Validate and merge records without touching the database
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let json = tokio::fs::read_to_string(&args.file)
        .await
        .with_context(|| format!("Failed to read {}", args.file.display()))?;

    if args.dry_run {
        if let Err(e) = try_init_tracing_with_config(TracingConfig::default()) {
            eprintln!("Warning: Failed to initialize tracing: {}", e);
        }
        let records = ImportService::parse(&json)?;
        let (tools, report) = ImportService::prepare(records);
        print_report(&report);
        println!("dry run: {} tools would be imported", tools.len());
        return Ok(());
    }

    let config = AppConfig::from_env().context("Failed to load configuration")?;
    if let Err(e) = try_init_tracing_with_config(TracingConfig::for_app(&config.app)) {
        eprintln!("Warning: Failed to initialize tracing: {}", e);
    }

    let pool = create_pool(&catalog_db::DatabaseConfig::from(&config.database))
        .await
        .context("Failed to connect to PostgreSQL")?;
    run_migrations(&pool).await.context("Failed to apply schema")?;

    let ctx = ServiceContextBuilder::new()
        .pool(pool.clone())
        .tool_repo(Arc::new(PgToolRepository::new(pool.clone())))
        .vote_repo(Arc::new(PgVoteRepository::new(pool.clone())))
        .page_size(config.database.page_size)
        .build()?;

    info!(file = %args.file.display(), reset = args.reset, "Importing tools");
    let options = ImportOptions {
        reset: args.reset,
        dry_run: false,
    };
    let result = ImportService::new(&ctx).import_json(&json, options).await;
    close_pool(&pool).await;

    print_report(&result?);
    Ok(())
}

fn print_report(report: &ImportReport) {
    if let Some(removed) = report.reset {
        println!("reset:    {removed} tools removed");
    }
    println!("received: {}", report.received);
    println!("merged:   {}", report.merged);
    println!("skipped:  {}", report.skipped);
    println!("imported: {}", report.imported);
}
