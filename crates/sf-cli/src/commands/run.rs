//! Run command implementation

use anyhow::{Context, Result};
use sf_core::RunContext;
use sf_load::{BatchReport, LoadRunner};

use crate::cli::{GlobalArgs, OutputFormat, RunArgs};
use crate::commands::common::{self, ExitCode, BATCH_FAILED};

/// Execute the run command
pub async fn execute(args: &RunArgs, global: &GlobalArgs) -> Result<()> {
    let config = common::load_config(global)?;
    let db = common::open_database(&config)?;
    let json_mode = args.output == OutputFormat::Json;

    let ctx = RunContext::new(args.as_of.or(config.as_of));
    let runner = LoadRunner::new(&db, &db)
        .with_schemas(config.bronze_schema.clone(), config.silver_schema.clone());

    if !json_mode {
        println!(
            "Running {} stages for '{}' ({} -> {}, as of {})...\n",
            runner.stage_names().len(),
            config.name,
            config.bronze_schema,
            config.silver_schema,
            ctx.as_of
        );
    }

    let report = runner.run(&ctx).await.context("Batch run failed")?;

    if json_mode {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_text_report(&report);
    }

    if !report.is_success() {
        return Err(ExitCode(BATCH_FAILED).into());
    }

    Ok(())
}

fn print_text_report(report: &BatchReport) {
    for stage in &report.stages {
        println!(
            "  \u{2713} {} ({} rows) [{}ms]",
            stage.name,
            stage.rows_written,
            (stage.duration_secs * 1000.0).round() as u64
        );
    }

    if let Some(failed) = &report.failure {
        let r = &failed.report;
        println!(
            "  \u{2717} {} - {} [code {}, during {}] [{}ms]",
            r.stage,
            r.message,
            r.code,
            r.state,
            (failed.duration_secs * 1000.0).round() as u64
        );
    }

    for name in &report.skipped {
        println!("  - {} (skipped: batch aborted)", name);
    }

    println!();
    println!(
        "Run {} {}: {} stages, {} rows written",
        report.run_id,
        report.status,
        report.stages.len(),
        report.rows_written()
    );
    println!("Total time: {:.3}s", report.elapsed_secs);
}
