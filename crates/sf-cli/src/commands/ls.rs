//! List command implementation

use anyhow::Result;
use serde::Serialize;
use sf_core::TableName;
use sf_transform::default_stages;

use crate::cli::{GlobalArgs, LsArgs, OutputFormat};
use crate::commands::common;

#[derive(Debug, Serialize)]
struct StageInfo {
    order: usize,
    entity: String,
    source: TableName,
    target: TableName,
    source_columns: Vec<&'static str>,
    target_columns: Vec<&'static str>,
}

/// Execute the ls command
pub async fn execute(args: &LsArgs, global: &GlobalArgs) -> Result<()> {
    let config = common::load_config(global)?;

    let stages: Vec<StageInfo> = default_stages()
        .iter()
        .enumerate()
        .map(|(idx, stage)| StageInfo {
            order: idx + 1,
            entity: stage.entity().to_string(),
            source: TableName::qualified(&config.bronze_schema, stage.name()),
            target: TableName::qualified(&config.silver_schema, stage.name()),
            source_columns: stage.source_columns().iter().map(|c| c.name).collect(),
            target_columns: stage.target_columns().iter().map(|c| c.name).collect(),
        })
        .collect();

    match args.output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&stages)?),
        OutputFormat::Text => {
            let width = stages
                .iter()
                .map(|s| s.source.len())
                .max()
                .unwrap_or(0);
            for s in &stages {
                println!(
                    "{}. {:<width$} -> {}  ({})",
                    s.order,
                    s.source.as_str(),
                    s.target,
                    s.entity,
                    width = width
                );
            }
        }
    }

    Ok(())
}
