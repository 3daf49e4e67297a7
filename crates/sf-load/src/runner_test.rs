use super::*;
use async_trait::async_trait;
use chrono::NaiveDate;
use sf_core::{Column, ErrorState, Row, RunStatus, Value};
use sf_db::{DbError, DbResult};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

/// In-memory bronze tables; unknown tables read as empty
#[derive(Default)]
struct FakeSource {
    tables: HashMap<String, Vec<Row>>,
    missing: HashSet<String>,
    reads: Mutex<Vec<String>>,
}

impl FakeSource {
    fn with_table(mut self, table: &str, rows: Vec<Row>) -> Self {
        self.tables.insert(table.to_string(), rows);
        self
    }

    fn without(mut self, table: &str) -> Self {
        self.missing.insert(table.to_string());
        self
    }
}

#[async_trait]
impl SourceReader for FakeSource {
    async fn read_table(&self, table: &TableName, _columns: &[Column]) -> DbResult<Vec<Row>> {
        self.reads.lock().unwrap().push(table.to_string());
        if self.missing.contains(table.as_str()) {
            return Err(DbError::TableNotFound(table.to_string()));
        }
        Ok(self.tables.get(table.as_str()).cloned().unwrap_or_default())
    }
}

/// Records every replace; tables in `fail_on` reject writes
#[derive(Default)]
struct RecordingSink {
    written: Mutex<HashMap<String, Vec<Row>>>,
    order: Mutex<Vec<String>>,
    fail_on: HashSet<String>,
}

impl RecordingSink {
    fn failing_on(table: &str) -> Self {
        Self {
            fail_on: HashSet::from([table.to_string()]),
            ..Default::default()
        }
    }

    fn order(&self) -> Vec<String> {
        self.order.lock().unwrap().clone()
    }
}

#[async_trait]
impl SinkWriter for RecordingSink {
    async fn replace_table(
        &self,
        table: &TableName,
        _columns: &[Column],
        rows: &[Row],
    ) -> DbResult<usize> {
        if self.fail_on.contains(table.as_str()) {
            return Err(DbError::ExecutionError(format!("cannot write {}", table)));
        }
        self.order.lock().unwrap().push(table.to_string());
        self.written
            .lock()
            .unwrap()
            .insert(table.to_string(), rows.to_vec());
        Ok(rows.len())
    }
}

fn ctx() -> RunContext {
    RunContext::new(NaiveDate::from_ymd_opt(2024, 1, 1))
}

fn text(v: &str) -> Value {
    Value::Text(v.to_string())
}

#[tokio::test]
async fn test_all_stages_run_in_order() {
    let source = FakeSource::default();
    let sink = RecordingSink::default();

    let report = LoadRunner::new(&source, &sink).run(&ctx()).await.unwrap();

    assert!(report.is_success());
    assert_eq!(report.status, RunStatus::Completed);
    assert_eq!(report.stages.len(), 6);
    assert!(report.failure.is_none());
    assert!(report.skipped.is_empty());
    assert_eq!(
        sink.order(),
        vec![
            "silver.crm_cust_info",
            "silver.crm_prd_info",
            "silver.crm_sales_details",
            "silver.erp_cust_az12",
            "silver.erp_loc_a101",
            "silver.erp_px_cat_g1v2",
        ]
    );
}

#[tokio::test]
async fn test_stage_counts_reported() {
    let source = FakeSource::default().with_table(
        "bronze.erp_loc_a101",
        vec![
            vec![text("AW-00011000"), text("DE")],
            vec![text("AW-00011001"), Value::Null],
        ],
    );
    let sink = RecordingSink::default();

    let report = LoadRunner::new(&source, &sink).run(&ctx()).await.unwrap();

    let loc = report
        .stages
        .iter()
        .find(|s| s.name == "erp_loc_a101")
        .unwrap();
    assert_eq!(loc.rows_read, 2);
    assert_eq!(loc.rows_written, 2);
    assert_eq!(report.rows_written(), 2);

    let written = sink.written.lock().unwrap();
    assert_eq!(
        written["silver.erp_loc_a101"][0],
        vec![text("AW00011000"), text("Germany")]
    );
}

#[tokio::test]
async fn test_failed_stage_aborts_remaining() {
    let source = FakeSource::default();
    let sink = RecordingSink::failing_on("silver.crm_sales_details");

    let report = LoadRunner::new(&source, &sink).run(&ctx()).await.unwrap();

    assert!(!report.is_success());
    assert_eq!(report.status, RunStatus::Failed);
    assert_eq!(report.stages.len(), 2);
    assert_eq!(
        report.skipped,
        vec!["erp_cust_az12", "erp_loc_a101", "erp_px_cat_g1v2"]
    );

    let failure = report.failure.unwrap().report;
    assert_eq!(failure.stage, "crm_sales_details");
    assert_eq!(failure.code, "D002");
    assert_eq!(failure.state, ErrorState::Write);

    // Later stages never touched their sources or targets
    let reads = source.reads.lock().unwrap().clone();
    assert_eq!(reads.len(), 3);
    assert!(sink.order().iter().all(|t| !t.starts_with("silver.erp")));
}

#[tokio::test]
async fn test_read_failure_reported_with_read_state() {
    let source = FakeSource::default().without("bronze.crm_cust_info");
    let sink = RecordingSink::default();

    let report = LoadRunner::new(&source, &sink).run(&ctx()).await.unwrap();

    let failure = report.failure.unwrap().report;
    assert_eq!(failure.code, "D003");
    assert_eq!(failure.state, ErrorState::Read);
    assert!(sink.order().is_empty());
    assert_eq!(report.skipped.len(), 5);
}

#[tokio::test]
async fn test_malformed_product_key_fails_transform() {
    let source = FakeSource::default().with_table(
        "bronze.crm_prd_info",
        vec![vec![
            Value::Int(210),
            text("CO-RF"),
            text("HL Road Frame"),
            Value::Int(100),
            text("R"),
            Value::Null,
        ]],
    );
    let sink = RecordingSink::default();

    let report = LoadRunner::new(&source, &sink).run(&ctx()).await.unwrap();

    let failure = report.failure.unwrap().report;
    assert_eq!(failure.stage, "crm_prd_info");
    assert_eq!(failure.code, "T001");
    assert_eq!(failure.state, ErrorState::Transform);
    // Customer stage committed; the product target was never cleared
    assert_eq!(sink.order(), vec!["silver.crm_cust_info"]);
}

#[tokio::test]
async fn test_custom_schemas() {
    let source = FakeSource::default();
    let sink = RecordingSink::default();

    let report = LoadRunner::new(&source, &sink)
        .with_schemas("raw", "clean")
        .run(&ctx())
        .await
        .unwrap();

    assert!(report.is_success());
    assert!(sink.order().iter().all(|t| t.starts_with("clean.")));
    assert!(source
        .reads
        .lock()
        .unwrap()
        .iter()
        .all(|t| t.starts_with("raw.")));
}

#[tokio::test]
async fn test_report_serializes() {
    let source = FakeSource::default();
    let sink = RecordingSink::failing_on("silver.erp_px_cat_g1v2");

    let report = LoadRunner::new(&source, &sink).run(&ctx()).await.unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["status"], "failed");
    assert_eq!(json["as_of"], "2024-01-01");
    assert_eq!(json["failure"]["report"]["state"], "write");
    assert_eq!(json["stages"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn test_custom_stage_list() {
    use sf_transform::stages::ErpLocationRule;
    use sf_transform::RuleStage;

    let source = FakeSource::default();
    let sink = RecordingSink::default();
    let runner = LoadRunner::new(&source, &sink)
        .with_stages(vec![
            Box::new(RuleStage::<ErpLocationRule>::new()) as Box<dyn TransformStage>
        ]);

    assert_eq!(runner.stage_names(), vec!["erp_loc_a101"]);
    let report = runner.run(&ctx()).await.unwrap();
    assert!(report.is_success());
    assert_eq!(sink.order(), vec!["silver.erp_loc_a101"]);
}
