//! Aggregate batch report

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use sf_core::{CompletedStage, FailedStage, RunState, RunStatus};

/// Outcome of one batch run
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub run_id: String,
    pub status: RunStatus,
    pub as_of: NaiveDate,
    pub started_at: Option<DateTime<Utc>>,
    pub finished_at: Option<DateTime<Utc>>,
    pub elapsed_secs: f64,
    pub stages: Vec<CompletedStage>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<FailedStage>,

    /// Stages never reached because the batch aborted
    pub skipped: Vec<String>,
}

impl BatchReport {
    pub(crate) fn from_state(state: RunState, as_of: NaiveDate) -> Self {
        let elapsed_secs = state.elapsed_secs();
        Self {
            run_id: state.run_id,
            status: state.status,
            as_of,
            started_at: state.started_at,
            finished_at: state.finished_at,
            elapsed_secs,
            stages: state.completed_stages,
            failure: state.failed_stage,
            skipped: state.pending_stages,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == RunStatus::Completed
    }

    pub fn rows_written(&self) -> usize {
        self.stages.iter().map(|s| s.rows_written).sum()
    }
}
