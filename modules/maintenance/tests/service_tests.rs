//! Integration tests for the maintenance service

use chrono::{DateTime, Duration, Utc};
use maintenance::contract::*;
use maintenance::domain::repository::{LogRepository, ScheduleRepository};
use maintenance::domain::{NoOpEventPublisher, Service};
use rust_decimal::Decimal;
use std::sync::Arc;
use uuid::Uuid;

fn print_test_header(test_name: &str, purpose: &[&str]) {
    println!("\n🧪 TEST: {}", test_name);
    if let Some(first) = purpose.first() {
        println!("📋 PURPOSE: {}", first);
    }
    for line in purpose.iter().skip(1) {
        println!("   {}", line);
    }
}

// Mock repository implementations for testing
pub mod mocks {
    use super::*;
    use assets::{Asset, AssetCategory, AssetListFilter, AssetsApi, AssetsError};
    use async_trait::async_trait;
    use parking_lot::RwLock;
    use std::collections::{HashMap, HashSet};

    #[derive(Clone, Default)]
    pub struct MockScheduleRepo {
        data: Arc<RwLock<HashMap<Uuid, MaintenanceSchedule>>>,
    }

    impl MockScheduleRepo {
        pub fn new() -> Self {
            Self::default()
        }
    }

    #[async_trait]
    impl ScheduleRepository for MockScheduleRepo {
        async fn insert(
            &self,
            schedule: &MaintenanceSchedule,
        ) -> anyhow::Result<MaintenanceSchedule> {
            self.data.write().insert(schedule.id, schedule.clone());
            Ok(schedule.clone())
        }

        async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<MaintenanceSchedule>> {
            Ok(self
                .data
                .read()
                .get(&id)
                .filter(|s| s.deleted_at.is_none())
                .cloned())
        }

        async fn list(
            &self,
            filter: &ScheduleListFilter,
            limit: u64,
            offset: u64,
        ) -> anyhow::Result<(Vec<MaintenanceSchedule>, u64)> {
            let mut matches: Vec<MaintenanceSchedule> = self
                .data
                .read()
                .values()
                .filter(|s| s.deleted_at.is_none())
                .filter(|s| match filter.asset_id {
                    Some(asset_id) => s.asset_id == asset_id,
                    None => true,
                })
                .filter(|s| match filter.active {
                    Some(active) => s.active == active,
                    None => true,
                })
                .filter(|s| match filter.due_before {
                    Some(due_before) => s.next_due_at < due_before,
                    None => true,
                })
                .cloned()
                .collect();
            matches.sort_by_key(|s| s.next_due_at);
            let total = matches.len() as u64;
            let items = matches
                .into_iter()
                .skip(offset as usize)
                .take(limit as usize)
                .collect();
            Ok((items, total))
        }

        async fn update(
            &self,
            schedule: &MaintenanceSchedule,
        ) -> anyhow::Result<MaintenanceSchedule> {
            self.data.write().insert(schedule.id, schedule.clone());
            Ok(schedule.clone())
        }

        async fn advance_bookkeeping(
            &self,
            id: Uuid,
            performed_at: DateTime<Utc>,
            next_due_at: DateTime<Utc>,
        ) -> anyhow::Result<()> {
            if let Some(schedule) = self.data.write().get_mut(&id) {
                if schedule.deleted_at.is_none()
                    && schedule.last_performed_at.map_or(true, |t| t < performed_at)
                {
                    schedule.last_performed_at = Some(performed_at);
                    schedule.next_due_at = next_due_at;
                    schedule.updated_at = Utc::now();
                }
            }
            Ok(())
        }

        async fn soft_delete(&self, id: Uuid) -> anyhow::Result<()> {
            if let Some(schedule) = self.data.write().get_mut(&id) {
                schedule.deleted_at = Some(Utc::now());
            }
            Ok(())
        }
    }

    #[derive(Clone, Default)]
    pub struct MockLogRepo {
        data: Arc<RwLock<HashMap<Uuid, MaintenanceLog>>>,
    }

    impl MockLogRepo {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn count_total(&self) -> usize {
            self.data.read().len()
        }
    }

    #[async_trait]
    impl LogRepository for MockLogRepo {
        async fn insert(&self, log: &MaintenanceLog) -> anyhow::Result<MaintenanceLog> {
            self.data.write().insert(log.id, log.clone());
            Ok(log.clone())
        }

        async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<MaintenanceLog>> {
            Ok(self
                .data
                .read()
                .get(&id)
                .filter(|l| l.deleted_at.is_none())
                .cloned())
        }

        async fn list(
            &self,
            filter: &LogListFilter,
            limit: u64,
            offset: u64,
        ) -> anyhow::Result<(Vec<MaintenanceLog>, u64)> {
            let mut matches: Vec<MaintenanceLog> = self
                .data
                .read()
                .values()
                .filter(|l| l.deleted_at.is_none())
                .filter(|l| match filter.asset_id {
                    Some(asset_id) => l.asset_id == asset_id,
                    None => true,
                })
                .filter(|l| match filter.schedule_id {
                    Some(schedule_id) => l.schedule_id == Some(schedule_id),
                    None => true,
                })
                .cloned()
                .collect();
            matches.sort_by(|a, b| b.performed_at.cmp(&a.performed_at));
            let total = matches.len() as u64;
            let items = matches
                .into_iter()
                .skip(offset as usize)
                .take(limit as usize)
                .collect();
            Ok((items, total))
        }

        async fn update(&self, log: &MaintenanceLog) -> anyhow::Result<MaintenanceLog> {
            self.data.write().insert(log.id, log.clone());
            Ok(log.clone())
        }

        async fn soft_delete(&self, id: Uuid) -> anyhow::Result<()> {
            if let Some(log) = self.data.write().get_mut(&id) {
                log.deleted_at = Some(Utc::now());
            }
            Ok(())
        }
    }

    /// Assets stub that knows a fixed set of asset ids and records the
    /// maintenance cascades pushed at it.
    #[derive(Default)]
    pub struct MockAssets {
        known: RwLock<HashSet<Uuid>>,
        pub recorded: RwLock<Vec<(Uuid, DateTime<Utc>)>>,
    }

    impl MockAssets {
        pub fn with_assets(ids: &[Uuid]) -> Self {
            Self {
                known: RwLock::new(ids.iter().copied().collect()),
                recorded: RwLock::new(Vec::new()),
            }
        }

        pub fn recorded_calls(&self) -> Vec<(Uuid, DateTime<Utc>)> {
            self.recorded.read().clone()
        }
    }

    #[async_trait]
    impl AssetsApi for MockAssets {
        async fn get_asset(&self, id: Uuid) -> Result<Asset, AssetsError> {
            Err(AssetsError::not_found("asset", id))
        }

        async fn get_category(&self, id: Uuid) -> Result<AssetCategory, AssetsError> {
            Err(AssetsError::not_found("asset category", id))
        }

        async fn list_assets(
            &self,
            _filter: AssetListFilter,
            _limit: u64,
            _offset: u64,
        ) -> Result<(Vec<Asset>, u64), AssetsError> {
            Ok((Vec::new(), 0))
        }

        async fn asset_exists(&self, id: Uuid) -> Result<bool, AssetsError> {
            Ok(self.known.read().contains(&id))
        }

        async fn record_maintenance(
            &self,
            asset_id: Uuid,
            performed_at: DateTime<Utc>,
        ) -> Result<(), AssetsError> {
            self.recorded.write().push((asset_id, performed_at));
            Ok(())
        }

        async fn count_active(&self) -> Result<u64, AssetsError> {
            Ok(self.known.read().len() as u64)
        }
    }
}

struct TestContext {
    service: Service,
    assets: Arc<mocks::MockAssets>,
    logs: Arc<mocks::MockLogRepo>,
}

fn create_test_context(asset_ids: &[Uuid]) -> TestContext {
    let schedules = Arc::new(mocks::MockScheduleRepo::new());
    let logs = Arc::new(mocks::MockLogRepo::new());
    let assets = Arc::new(mocks::MockAssets::with_assets(asset_ids));
    let service = Service::new(
        schedules,
        logs.clone(),
        assets.clone(),
        Arc::new(NoOpEventPublisher),
    );
    TestContext {
        service,
        assets,
        logs,
    }
}

fn new_schedule(asset_id: Uuid, title: &str, due_in_days: i64) -> NewSchedule {
    NewSchedule {
        asset_id,
        title: title.to_string(),
        frequency: Frequency::Monthly,
        next_due_at: Utc::now() + Duration::days(due_in_days),
        active: true,
        notes: None,
    }
}

fn new_log(asset_id: Uuid, schedule_id: Option<Uuid>, performed_at: DateTime<Utc>) -> NewLog {
    NewLog {
        asset_id,
        schedule_id,
        performed_at,
        performed_by: None,
        summary: "Filters replaced".to_string(),
        notes: None,
        cost: Some(Decimal::new(12550, 2)),
    }
}

#[tokio::test]
async fn test_create_schedule_validates_asset_reference() {
    let asset_id = Uuid::new_v4();
    let ctx = create_test_context(&[asset_id]);

    print_test_header(
        "test_create_schedule_validates_asset_reference",
        &["Verify schedules can only target assets the register knows."],
    );

    println!("\n📝 Stage 1: Unknown asset fails validation");
    let unknown = ctx
        .service
        .create_schedule(new_schedule(Uuid::new_v4(), "Filter swap", 30))
        .await;
    match unknown.unwrap_err() {
        MaintenanceError::Validation { field, .. } => assert_eq!(field, "asset_id"),
        e => panic!("Expected Validation error, got: {e:?}"),
    }

    println!("\n📝 Stage 2: Known asset passes");
    let created = ctx
        .service
        .create_schedule(new_schedule(asset_id, "Filter swap", 30))
        .await
        .expect("create should pass");
    assert_eq!(created.asset_id, asset_id);
    assert!(created.active);
    assert!(created.last_performed_at.is_none());
}

#[tokio::test]
async fn test_create_schedule_rejects_blank_title() {
    let asset_id = Uuid::new_v4();
    let ctx = create_test_context(&[asset_id]);

    print_test_header(
        "test_create_schedule_rejects_blank_title",
        &["Verify the title must carry actual text."],
    );

    let result = ctx
        .service
        .create_schedule(new_schedule(asset_id, "   ", 30))
        .await;
    match result.unwrap_err() {
        MaintenanceError::Validation { field, .. } => assert_eq!(field, "title"),
        e => panic!("Expected Validation error, got: {e:?}"),
    }
}

#[tokio::test]
async fn test_record_log_cascades_to_asset_and_schedule() {
    let asset_id = Uuid::new_v4();
    let ctx = create_test_context(&[asset_id]);

    print_test_header(
        "test_record_log_cascades_to_asset_and_schedule",
        &[
            "Verify recording planned work advances the schedule bookkeeping",
            "and pushes the last-maintained cascade at the assets module.",
        ],
    );

    let schedule = ctx
        .service
        .create_schedule(new_schedule(asset_id, "Filter swap", 5))
        .await
        .expect("seed schedule");

    println!("\n📝 Stage 1: Record the performed work against the schedule");
    let performed_at = Utc::now();
    let log = ctx
        .service
        .record_log(new_log(asset_id, Some(schedule.id), performed_at))
        .await
        .expect("record should pass");
    assert_eq!(log.schedule_id, Some(schedule.id));

    println!("\n📝 Stage 2: Schedule bookkeeping moved forward");
    let schedule = ctx
        .service
        .get_schedule(schedule.id)
        .await
        .expect("get schedule");
    assert_eq!(schedule.last_performed_at, Some(performed_at));
    assert_eq!(
        schedule.next_due_at,
        Frequency::Monthly.advance(performed_at)
    );

    println!("\n📝 Stage 3: Assets module saw the cascade");
    assert_eq!(ctx.assets.recorded_calls(), vec![(asset_id, performed_at)]);
}

#[tokio::test]
async fn test_record_log_without_schedule_still_cascades_to_asset() {
    let asset_id = Uuid::new_v4();
    let ctx = create_test_context(&[asset_id]);

    print_test_header(
        "test_record_log_without_schedule_still_cascades_to_asset",
        &["Verify unplanned work updates the asset but touches no schedule."],
    );

    let schedule = ctx
        .service
        .create_schedule(new_schedule(asset_id, "Filter swap", 5))
        .await
        .expect("seed schedule");
    let original_due = schedule.next_due_at;

    let performed_at = Utc::now();
    ctx.service
        .record_log(new_log(asset_id, None, performed_at))
        .await
        .expect("record should pass");

    let schedule = ctx
        .service
        .get_schedule(schedule.id)
        .await
        .expect("get schedule");
    assert_eq!(schedule.next_due_at, original_due);
    assert!(schedule.last_performed_at.is_none());
    assert_eq!(ctx.assets.recorded_calls(), vec![(asset_id, performed_at)]);
}

#[tokio::test]
async fn test_record_log_refuses_schedule_of_other_asset() {
    let asset_a = Uuid::new_v4();
    let asset_b = Uuid::new_v4();
    let ctx = create_test_context(&[asset_a, asset_b]);

    print_test_header(
        "test_record_log_refuses_schedule_of_other_asset",
        &["Verify a log cannot claim a schedule that plans another asset's work."],
    );

    let schedule = ctx
        .service
        .create_schedule(new_schedule(asset_a, "Belt check", 10))
        .await
        .expect("seed schedule");

    let result = ctx
        .service
        .record_log(new_log(asset_b, Some(schedule.id), Utc::now()))
        .await;
    match result.unwrap_err() {
        MaintenanceError::Validation { field, message } => {
            assert_eq!(field, "schedule_id");
            assert!(message.contains("different asset"), "got: {message}");
        }
        e => panic!("Expected Validation error, got: {e:?}"),
    }

    println!("\n📝 No log row was written and no cascade fired");
    assert_eq!(ctx.logs.count_total(), 0);
    assert!(ctx.assets.recorded_calls().is_empty());
}

#[tokio::test]
async fn test_record_log_refuses_unknown_schedule() {
    let asset_id = Uuid::new_v4();
    let ctx = create_test_context(&[asset_id]);

    print_test_header(
        "test_record_log_refuses_unknown_schedule",
        &["Verify an unknown schedule reference fails validation."],
    );

    let result = ctx
        .service
        .record_log(new_log(asset_id, Some(Uuid::new_v4()), Utc::now()))
        .await;
    match result.unwrap_err() {
        MaintenanceError::Validation { field, .. } => assert_eq!(field, "schedule_id"),
        e => panic!("Expected Validation error, got: {e:?}"),
    }
}

#[tokio::test]
async fn test_backdated_log_does_not_regress_schedule() {
    let asset_id = Uuid::new_v4();
    let ctx = create_test_context(&[asset_id]);

    print_test_header(
        "test_backdated_log_does_not_regress_schedule",
        &["Verify schedule bookkeeping only ever moves forward."],
    );

    let schedule = ctx
        .service
        .create_schedule(new_schedule(asset_id, "Filter swap", 5))
        .await
        .expect("seed schedule");

    let recent = Utc::now();
    let stale = recent - Duration::days(45);

    println!("\n📝 Stage 1: Record current work");
    ctx.service
        .record_log(new_log(asset_id, Some(schedule.id), recent))
        .await
        .expect("record");

    println!("\n📝 Stage 2: A backdated log leaves the bookkeeping alone");
    ctx.service
        .record_log(new_log(asset_id, Some(schedule.id), stale))
        .await
        .expect("record");

    let schedule = ctx
        .service
        .get_schedule(schedule.id)
        .await
        .expect("get schedule");
    assert_eq!(schedule.last_performed_at, Some(recent));
    assert_eq!(schedule.next_due_at, Frequency::Monthly.advance(recent));

    println!("\n📝 Stage 3: Both logs exist as history");
    assert_eq!(ctx.logs.count_total(), 2);
}

#[tokio::test]
async fn test_record_log_validates_cost_and_summary() {
    let asset_id = Uuid::new_v4();
    let ctx = create_test_context(&[asset_id]);

    print_test_header(
        "test_record_log_validates_cost_and_summary",
        &["Verify negative costs and blank summaries are refused."],
    );

    let mut negative = new_log(asset_id, None, Utc::now());
    negative.cost = Some(Decimal::new(-100, 2));
    match ctx.service.record_log(negative).await.unwrap_err() {
        MaintenanceError::Validation { field, .. } => assert_eq!(field, "cost"),
        e => panic!("Expected Validation error, got: {e:?}"),
    }

    let mut blank = new_log(asset_id, None, Utc::now());
    blank.summary = "  ".to_string();
    match ctx.service.record_log(blank).await.unwrap_err() {
        MaintenanceError::Validation { field, .. } => assert_eq!(field, "summary"),
        e => panic!("Expected Validation error, got: {e:?}"),
    }
}

#[tokio::test]
async fn test_list_schedules_filters() {
    let asset_a = Uuid::new_v4();
    let asset_b = Uuid::new_v4();
    let ctx = create_test_context(&[asset_a, asset_b]);

    print_test_header(
        "test_list_schedules_filters",
        &[
            "Verify asset/active/due-before filters narrow the listing",
            "and results come back soonest-due first.",
        ],
    );

    let overdue = ctx
        .service
        .create_schedule(new_schedule(asset_a, "Belt check", -10))
        .await
        .expect("seed");
    let upcoming = ctx
        .service
        .create_schedule(new_schedule(asset_a, "Filter swap", 20))
        .await
        .expect("seed");
    let paused = ctx
        .service
        .create_schedule(NewSchedule {
            active: false,
            ..new_schedule(asset_b, "Coil clean", -5)
        })
        .await
        .expect("seed");

    println!("\n📝 Stage 1: Filter by asset");
    let (for_a, total) = ctx
        .service
        .list_schedules(
            ScheduleListFilter {
                asset_id: Some(asset_a),
                ..Default::default()
            },
            50,
            0,
        )
        .await
        .expect("list");
    assert_eq!(total, 2);
    assert_eq!(for_a[0].id, overdue.id);
    assert_eq!(for_a[1].id, upcoming.id);

    println!("\n📝 Stage 2: Overdue = active and due before now");
    let now = Utc::now();
    let overdue_list = ctx
        .service
        .overdue_schedules(now, 50)
        .await
        .expect("overdue");
    assert_eq!(overdue_list.len(), 1);
    assert_eq!(overdue_list[0].id, overdue.id);
    assert_eq!(ctx.service.overdue_count(now).await.expect("count"), 1);

    println!("\n📝 Stage 3: Inactive filter still finds the paused schedule");
    let (inactive, _) = ctx
        .service
        .list_schedules(
            ScheduleListFilter {
                active: Some(false),
                ..Default::default()
            },
            50,
            0,
        )
        .await
        .expect("list");
    assert_eq!(inactive.len(), 1);
    assert_eq!(inactive[0].id, paused.id);
}

#[tokio::test]
async fn test_list_logs_filters_and_history_order() {
    let asset_a = Uuid::new_v4();
    let asset_b = Uuid::new_v4();
    let ctx = create_test_context(&[asset_a, asset_b]);

    print_test_header(
        "test_list_logs_filters_and_history_order",
        &["Verify log filters and the newest-first history ordering."],
    );

    let schedule = ctx
        .service
        .create_schedule(new_schedule(asset_a, "Belt check", 10))
        .await
        .expect("seed");

    let old = Utc::now() - Duration::days(30);
    let recent = Utc::now();
    ctx.service
        .record_log(new_log(asset_a, None, old))
        .await
        .expect("record");
    let planned = ctx
        .service
        .record_log(new_log(asset_a, Some(schedule.id), recent))
        .await
        .expect("record");
    ctx.service
        .record_log(new_log(asset_b, None, recent))
        .await
        .expect("record");

    println!("\n📝 Stage 1: Asset history is newest first");
    let history = ctx
        .service
        .asset_history(asset_a, 10)
        .await
        .expect("history");
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].performed_at, recent);
    assert_eq!(history[1].performed_at, old);

    println!("\n📝 Stage 2: Schedule filter");
    let (by_schedule, total) = ctx
        .service
        .list_logs(
            LogListFilter {
                schedule_id: Some(schedule.id),
                ..Default::default()
            },
            50,
            0,
        )
        .await
        .expect("list");
    assert_eq!(total, 1);
    assert_eq!(by_schedule[0].id, planned.id);
}

#[tokio::test]
async fn test_update_schedule_replaces_fields() {
    let asset_id = Uuid::new_v4();
    let ctx = create_test_context(&[asset_id]);

    print_test_header(
        "test_update_schedule_replaces_fields",
        &["Verify updates replace the editable fields and keep the asset."],
    );

    let schedule = ctx
        .service
        .create_schedule(new_schedule(asset_id, "Filter swap", 30))
        .await
        .expect("seed");

    let new_due = Utc::now() + Duration::days(60);
    let updated = ctx
        .service
        .update_schedule(
            schedule.id,
            UpdateSchedule {
                title: "Deep filter service".to_string(),
                frequency: Frequency::Quarterly,
                next_due_at: new_due,
                active: false,
                notes: Some("Needs two technicians".to_string()),
            },
        )
        .await
        .expect("update should pass");

    assert_eq!(updated.title, "Deep filter service");
    assert_eq!(updated.frequency, Frequency::Quarterly);
    assert_eq!(updated.next_due_at, new_due);
    assert!(!updated.active);
    assert_eq!(updated.asset_id, asset_id);

    println!("\n📝 Unknown schedule is a lookup failure");
    let missing = ctx
        .service
        .update_schedule(
            Uuid::new_v4(),
            UpdateSchedule {
                title: "x".to_string(),
                frequency: Frequency::Daily,
                next_due_at: Utc::now(),
                active: true,
                notes: None,
            },
        )
        .await;
    assert!(matches!(
        missing.unwrap_err(),
        MaintenanceError::NotFound { .. }
    ));
}

#[tokio::test]
async fn test_update_log_does_not_replay_cascades() {
    let asset_id = Uuid::new_v4();
    let ctx = create_test_context(&[asset_id]);

    print_test_header(
        "test_update_log_does_not_replay_cascades",
        &["Verify correcting a log edits the record without new cascades."],
    );

    let performed_at = Utc::now();
    let log = ctx
        .service
        .record_log(new_log(asset_id, None, performed_at))
        .await
        .expect("record");
    assert_eq!(ctx.assets.recorded_calls().len(), 1);

    let updated = ctx
        .service
        .update_log(
            log.id,
            UpdateLog {
                performed_at,
                performed_by: Some(Uuid::new_v4()),
                summary: "Filters replaced, belts tensioned".to_string(),
                notes: None,
                cost: Some(Decimal::new(19900, 2)),
            },
        )
        .await
        .expect("update should pass");

    assert_eq!(updated.summary, "Filters replaced, belts tensioned");
    assert_eq!(updated.cost, Some(Decimal::new(19900, 2)));
    assert_eq!(ctx.assets.recorded_calls().len(), 1);
}

#[tokio::test]
async fn test_soft_deleted_schedule_is_gone_from_reads() {
    let asset_id = Uuid::new_v4();
    let ctx = create_test_context(&[asset_id]);

    print_test_header(
        "test_soft_deleted_schedule_is_gone_from_reads",
        &[
            "Verify a deleted schedule disappears from gets and listings",
            "while its logs keep their reference.",
        ],
    );

    let schedule = ctx
        .service
        .create_schedule(new_schedule(asset_id, "Filter swap", 5))
        .await
        .expect("seed");
    let log = ctx
        .service
        .record_log(new_log(asset_id, Some(schedule.id), Utc::now()))
        .await
        .expect("record");

    ctx.service
        .delete_schedule(schedule.id)
        .await
        .expect("delete should pass");

    let missing = ctx.service.get_schedule(schedule.id).await;
    assert!(matches!(
        missing.unwrap_err(),
        MaintenanceError::NotFound { .. }
    ));

    let (all, total) = ctx
        .service
        .list_schedules(ScheduleListFilter::default(), 50, 0)
        .await
        .expect("list");
    assert_eq!(total, 0);
    assert!(all.is_empty());

    println!("\n📝 The log still points at the planned schedule");
    let log = ctx.service.get_log(log.id).await.expect("get log");
    assert_eq!(log.schedule_id, Some(schedule.id));

    println!("\n📝 New logs can no longer claim the deleted schedule");
    let refused = ctx
        .service
        .record_log(new_log(asset_id, Some(schedule.id), Utc::now()))
        .await;
    assert!(matches!(
        refused.unwrap_err(),
        MaintenanceError::Validation { .. }
    ));
}

#[tokio::test]
async fn test_delete_log_is_soft() {
    let asset_id = Uuid::new_v4();
    let ctx = create_test_context(&[asset_id]);

    print_test_header(
        "test_delete_log_is_soft",
        &["Verify deleted logs vanish from reads but rows remain."],
    );

    let log = ctx
        .service
        .record_log(new_log(asset_id, None, Utc::now()))
        .await
        .expect("record");

    ctx.service.delete_log(log.id).await.expect("delete");

    let missing = ctx.service.get_log(log.id).await;
    assert!(matches!(
        missing.unwrap_err(),
        MaintenanceError::NotFound { .. }
    ));
    assert_eq!(ctx.logs.count_total(), 1);

    let history = ctx
        .service
        .asset_history(asset_id, 10)
        .await
        .expect("history");
    assert!(history.is_empty());
}
