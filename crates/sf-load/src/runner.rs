//! Sequential full-refresh of every silver table
//!
//! Stages run one after another in their fixed order. Each stage reads its
//! whole bronze table, transforms it, and replaces its whole silver table.
//! The first failing stage aborts the batch: later stages never run and
//! their silver tables keep what they held before. Stages that already
//! completed are not rolled back.

use sf_core::{RunContext, RunState, TableName};
use sf_db::{SinkWriter, SourceReader};
use sf_transform::{default_stages, TransformStage};
use std::time::Instant;

use crate::error::{LoadError, LoadResult};
use crate::report::BatchReport;

pub const DEFAULT_BRONZE_SCHEMA: &str = "bronze";
pub const DEFAULT_SILVER_SCHEMA: &str = "silver";

/// Row counts of one successful stage
struct StageCounts {
    read: usize,
    written: usize,
}

/// Drives the transform stages against a source and a sink
pub struct LoadRunner<'a> {
    source: &'a dyn SourceReader,
    sink: &'a dyn SinkWriter,
    stages: Vec<Box<dyn TransformStage>>,
    bronze_schema: String,
    silver_schema: String,
}

impl<'a> LoadRunner<'a> {
    /// Runner over the default stages and schemas
    pub fn new(source: &'a dyn SourceReader, sink: &'a dyn SinkWriter) -> Self {
        Self {
            source,
            sink,
            stages: default_stages(),
            bronze_schema: DEFAULT_BRONZE_SCHEMA.to_string(),
            silver_schema: DEFAULT_SILVER_SCHEMA.to_string(),
        }
    }

    pub fn with_schemas(mut self, bronze: impl Into<String>, silver: impl Into<String>) -> Self {
        self.bronze_schema = bronze.into();
        self.silver_schema = silver.into();
        self
    }

    pub fn with_stages(mut self, stages: Vec<Box<dyn TransformStage>>) -> Self {
        self.stages = stages;
        self
    }

    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|s| s.name()).collect()
    }

    pub fn source_table(&self, stage: &dyn TransformStage) -> TableName {
        TableName::qualified(&self.bronze_schema, stage.name())
    }

    pub fn target_table(&self, stage: &dyn TransformStage) -> TableName {
        TableName::qualified(&self.silver_schema, stage.name())
    }

    /// Run the whole batch.
    ///
    /// A stage failure is not an `Err`: it is recorded in the returned
    /// report with status `failed`. `Err` is reserved for a broken run
    /// state machine.
    pub async fn run(&self, ctx: &RunContext) -> LoadResult<BatchReport> {
        let names = self.stage_names().into_iter().map(String::from).collect();
        let mut state = RunState::new(ctx.run_id.clone(), names);
        state.start()?;

        log::info!(
            "Run {} started: {} stages, as of {}",
            ctx.run_id,
            self.stages.len(),
            ctx.as_of
        );

        for stage in &self.stages {
            let stage: &dyn TransformStage = stage.as_ref();
            state.begin_stage(stage.name())?;
            log::info!(
                "Stage '{}' started ({} -> {})",
                stage.name(),
                self.source_table(stage),
                self.target_table(stage)
            );

            let stage_start = Instant::now();
            let outcome = self.run_stage(stage, ctx).await;
            let duration_secs = stage_start.elapsed().as_secs_f64();

            match outcome {
                Ok(counts) => {
                    log::info!(
                        "Stage '{}' completed in {:.3}s: {} rows read, {} rows written",
                        stage.name(),
                        duration_secs,
                        counts.read,
                        counts.written
                    );
                    state.complete_stage(counts.read, counts.written, duration_secs)?;
                }
                Err(err) => {
                    let Some(report) = err.report() else {
                        return Err(err);
                    };
                    log::error!(
                        "Stage '{}' failed after {:.3}s: message={} code={} state={}",
                        report.stage,
                        duration_secs,
                        report.message,
                        report.code,
                        report.state
                    );
                    state.fail_stage(report, duration_secs)?;
                    break;
                }
            }
        }

        if state.failed_stage.is_none() {
            state.finish()?;
            log::info!(
                "Run {} completed in {:.3}s",
                ctx.run_id,
                state.elapsed_secs()
            );
        } else {
            log::error!(
                "Run {} aborted after {:.3}s; {} stage(s) not run: {}",
                ctx.run_id,
                state.elapsed_secs(),
                state.pending_stages.len(),
                state.pending_stages.join(", ")
            );
        }

        Ok(BatchReport::from_state(state, ctx.as_of))
    }

    async fn run_stage(
        &self,
        stage: &dyn TransformStage,
        ctx: &RunContext,
    ) -> LoadResult<StageCounts> {
        let name = stage.name();

        let bronze = self.source_table(stage);
        let rows = self
            .source
            .read_table(&bronze, stage.source_columns())
            .await
            .map_err(|source| LoadError::Read {
                stage: name.to_string(),
                source,
            })?;
        let read = rows.len();
        log::debug!("Read {} rows from {}", read, bronze);

        let clean = stage
            .transform(rows, ctx)
            .map_err(|source| LoadError::Transform {
                stage: name.to_string(),
                source,
            })?;

        let target = self.target_table(stage);
        let written = self
            .sink
            .replace_table(&target, stage.target_columns(), &clean)
            .await
            .map_err(|source| LoadError::Write {
                stage: name.to_string(),
                source,
            })?;
        log::debug!("Replaced {} with {} rows", target, written);

        Ok(StageCounts { read, written })
    }
}

#[cfg(test)]
#[path = "runner_test.rs"]
mod tests;
