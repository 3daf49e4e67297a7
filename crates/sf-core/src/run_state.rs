//! Run context and batch state tracking
//!
//! A batch moves through `NotStarted -> Running(stage) -> ... -> Completed`,
//! or from `Running(stage)` straight to `Failed`. [`RunState`] enforces those
//! transitions and keeps the per-stage outcome; [`RunContext`] carries the
//! run-wide values every stage reads.

use chrono::{DateTime, Local, NaiveDate, Utc};
use serde::Serialize;
use std::fmt;
use uuid::Uuid;

use crate::error::{CoreError, CoreResult};

/// Run-wide values shared by every stage of one batch
#[derive(Debug, Clone)]
pub struct RunContext {
    /// Short identifier for this run
    pub run_id: String,

    /// When the batch was created
    pub started_at: DateTime<Utc>,

    /// The date treated as "today" by date rules
    pub as_of: NaiveDate,
}

impl RunContext {
    /// Create a context, defaulting `as_of` to the local date
    pub fn new(as_of: Option<NaiveDate>) -> Self {
        Self {
            run_id: Uuid::new_v4().to_string()[..8].to_string(),
            started_at: Utc::now(),
            as_of: as_of.unwrap_or_else(|| Local::now().date_naive()),
        }
    }
}

/// Status of a batch run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    NotStarted,
    Running,
    Completed,
    Failed,
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunStatus::NotStarted => write!(f, "not started"),
            RunStatus::Running => write!(f, "running"),
            RunStatus::Completed => write!(f, "completed"),
            RunStatus::Failed => write!(f, "failed"),
        }
    }
}

/// Phase of a stage in which an error was raised
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorState {
    Read,
    Transform,
    Write,
}

impl fmt::Display for ErrorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorState::Read => write!(f, "read"),
            ErrorState::Transform => write!(f, "transform"),
            ErrorState::Write => write!(f, "write"),
        }
    }
}

/// Structured failure report emitted when a stage aborts the batch
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FailureReport {
    pub stage: String,
    pub message: String,
    pub code: String,
    pub state: ErrorState,
}

impl fmt::Display for FailureReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "stage '{}' failed during {} (code {}): {}",
            self.stage, self.state, self.code, self.message
        )
    }
}

/// A stage that finished its replace
#[derive(Debug, Clone, Serialize)]
pub struct CompletedStage {
    pub name: String,
    pub rows_read: usize,
    pub rows_written: usize,
    pub duration_secs: f64,
    pub completed_at: DateTime<Utc>,
}

/// The stage that aborted the batch
#[derive(Debug, Clone, Serialize)]
pub struct FailedStage {
    pub report: FailureReport,
    pub duration_secs: f64,
    pub failed_at: DateTime<Utc>,
}

/// State of one batch run
#[derive(Debug, Clone, Serialize)]
pub struct RunState {
    pub run_id: String,
    pub status: RunStatus,

    /// Stage currently executing, only set while `Running`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_stage: Option<String>,

    pub started_at: Option<DateTime<Utc>>,
    pub finished_at: Option<DateTime<Utc>>,
    pub completed_stages: Vec<CompletedStage>,
    pub failed_stage: Option<FailedStage>,

    /// Stages not yet started, in execution order
    pub pending_stages: Vec<String>,
}

impl RunState {
    /// Create a run that has not started yet
    pub fn new(run_id: impl Into<String>, stages: Vec<String>) -> Self {
        Self {
            run_id: run_id.into(),
            status: RunStatus::NotStarted,
            current_stage: None,
            started_at: None,
            finished_at: None,
            completed_stages: Vec::new(),
            failed_stage: None,
            pending_stages: stages,
        }
    }

    fn invalid(&self, action: &str) -> CoreError {
        CoreError::InvalidTransition {
            action: action.to_string(),
            status: self.status.to_string(),
        }
    }

    /// `NotStarted -> Running`; records the start timestamp
    pub fn start(&mut self) -> CoreResult<()> {
        if self.status != RunStatus::NotStarted {
            return Err(self.invalid("start"));
        }
        self.status = RunStatus::Running;
        self.started_at = Some(Utc::now());
        Ok(())
    }

    /// Enter the next pending stage. Stages must be entered in order.
    pub fn begin_stage(&mut self, name: &str) -> CoreResult<()> {
        if self.status != RunStatus::Running || self.current_stage.is_some() {
            return Err(self.invalid(&format!("begin stage '{}'", name)));
        }
        if self.pending_stages.first().map(String::as_str) != Some(name) {
            return Err(self.invalid(&format!("begin out-of-order stage '{}'", name)));
        }
        self.pending_stages.remove(0);
        self.current_stage = Some(name.to_string());
        Ok(())
    }

    /// Record the current stage as completed
    pub fn complete_stage(
        &mut self,
        rows_read: usize,
        rows_written: usize,
        duration_secs: f64,
    ) -> CoreResult<()> {
        let Some(name) = self.current_stage.take() else {
            return Err(self.invalid("complete a stage"));
        };
        self.completed_stages.push(CompletedStage {
            name,
            rows_read,
            rows_written,
            duration_secs,
            completed_at: Utc::now(),
        });
        Ok(())
    }

    /// `Running(stage) -> Failed`; remaining stages stay pending
    pub fn fail_stage(&mut self, report: FailureReport, duration_secs: f64) -> CoreResult<()> {
        if self.current_stage.take().is_none() {
            return Err(self.invalid("fail a stage"));
        }
        let now = Utc::now();
        self.failed_stage = Some(FailedStage {
            report,
            duration_secs,
            failed_at: now,
        });
        self.status = RunStatus::Failed;
        self.finished_at = Some(now);
        Ok(())
    }

    /// `Running -> Completed` once every stage has completed
    pub fn finish(&mut self) -> CoreResult<()> {
        if self.status != RunStatus::Running
            || self.current_stage.is_some()
            || !self.pending_stages.is_empty()
        {
            return Err(self.invalid("finish"));
        }
        self.status = RunStatus::Completed;
        self.finished_at = Some(Utc::now());
        Ok(())
    }

    /// Wall-clock seconds between start and finish (or now, while running)
    pub fn elapsed_secs(&self) -> f64 {
        match self.started_at {
            Some(start) => {
                let end = self.finished_at.unwrap_or_else(Utc::now);
                (end - start).num_microseconds().unwrap_or(0) as f64 / 1_000_000.0
            }
            None => 0.0,
        }
    }

    /// Failure report of the aborting stage, if any
    pub fn failure(&self) -> Option<&FailureReport> {
        self.failed_stage.as_ref().map(|f| &f.report)
    }
}

#[cfg(test)]
#[path = "run_state_test.rs"]
mod tests;
