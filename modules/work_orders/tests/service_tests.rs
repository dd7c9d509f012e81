//! Integration tests for the work orders service

use chrono::{DateTime, Duration, Utc};
use sha2::{Digest, Sha256};
use std::sync::Arc;
use uuid::Uuid;
use work_orders::contract::*;
use work_orders::domain::repository::{
    AttachmentRepository, CommentRepository, WorkOrderRepository, WorkOrderSearch,
};
use work_orders::domain::store::AttachmentStore;
use work_orders::domain::{NoOpEventPublisher, Service};

const TEST_UPLOAD_LIMIT: u64 = 64 * 1024;

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
    use accounts::{AccountsApi, AccountsError, User};
    use assets::{Asset, AssetCategory, AssetListFilter, AssetsApi, AssetsError};
    use async_trait::async_trait;
    use facilities::{
        Building, FacilitiesApi, FacilitiesError, FacilityCounts, Floor, Space,
    };
    use parking_lot::RwLock;
    use std::collections::{HashMap, HashSet};

    #[derive(Clone, Default)]
    pub struct MockWorkOrderRepo {
        data: Arc<RwLock<HashMap<Uuid, WorkOrder>>>,
    }

    impl MockWorkOrderRepo {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn count_total(&self) -> usize {
            self.data.read().len()
        }
    }

    #[async_trait]
    impl WorkOrderRepository for MockWorkOrderRepo {
        async fn insert(&self, order: &WorkOrder) -> anyhow::Result<WorkOrder> {
            let mut data = self.data.write();
            // Soft-deleted rows keep their codes, so the scan covers them too
            let next = data
                .values()
                .filter_map(|o| o.code.strip_prefix("WO-"))
                .filter_map(|digits| digits.parse::<u64>().ok())
                .max()
                .unwrap_or(0)
                + 1;
            let mut stored = order.clone();
            stored.code = format!("WO-{next:06}");
            data.insert(stored.id, stored.clone());
            Ok(stored)
        }

        async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<WorkOrder>> {
            Ok(self
                .data
                .read()
                .get(&id)
                .filter(|o| o.deleted_at.is_none())
                .cloned())
        }

        async fn list(
            &self,
            search: &WorkOrderSearch,
            limit: u64,
            offset: u64,
        ) -> anyhow::Result<(Vec<WorkOrder>, u64)> {
            let mut matches: Vec<WorkOrder> = self
                .data
                .read()
                .values()
                .filter(|o| o.deleted_at.is_none())
                .filter(|o| match &search.statuses {
                    Some(statuses) => statuses.contains(&o.status),
                    None => true,
                })
                .filter(|o| match search.priority {
                    Some(priority) => o.priority == priority,
                    None => true,
                })
                .filter(|o| match search.assigned_to {
                    Some(assigned_to) => o.assigned_to == Some(assigned_to),
                    None => true,
                })
                .filter(|o| match search.asset_id {
                    Some(asset_id) => o.asset_id == Some(asset_id),
                    None => true,
                })
                .filter(|o| match search.space_id {
                    Some(space_id) => o.space_id == Some(space_id),
                    None => true,
                })
                .filter(|o| match search.overdue_as_of {
                    Some(as_of) => o.is_overdue(as_of),
                    None => true,
                })
                .cloned()
                .collect();
            matches.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            let total = matches.len() as u64;
            let items = matches
                .into_iter()
                .skip(offset as usize)
                .take(limit as usize)
                .collect();
            Ok((items, total))
        }

        async fn update(&self, order: &WorkOrder) -> anyhow::Result<WorkOrder> {
            self.data.write().insert(order.id, order.clone());
            Ok(order.clone())
        }

        async fn soft_delete(&self, id: Uuid) -> anyhow::Result<()> {
            if let Some(order) = self.data.write().get_mut(&id) {
                order.deleted_at = Some(Utc::now());
            }
            Ok(())
        }
    }

    #[derive(Clone, Default)]
    pub struct MockCommentRepo {
        data: Arc<RwLock<HashMap<Uuid, WorkOrderComment>>>,
    }

    impl MockCommentRepo {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn count_total(&self) -> usize {
            self.data.read().len()
        }
    }

    #[async_trait]
    impl CommentRepository for MockCommentRepo {
        async fn insert(&self, comment: &WorkOrderComment) -> anyhow::Result<WorkOrderComment> {
            self.data.write().insert(comment.id, comment.clone());
            Ok(comment.clone())
        }

        async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<WorkOrderComment>> {
            Ok(self.data.read().get(&id).cloned())
        }

        async fn list_for(&self, work_order_id: Uuid) -> anyhow::Result<Vec<WorkOrderComment>> {
            let mut matches: Vec<WorkOrderComment> = self
                .data
                .read()
                .values()
                .filter(|c| c.work_order_id == work_order_id)
                .cloned()
                .collect();
            matches.sort_by_key(|c| c.created_at);
            Ok(matches)
        }

        async fn delete(&self, id: Uuid) -> anyhow::Result<()> {
            self.data.write().remove(&id);
            Ok(())
        }
    }

    #[derive(Clone, Default)]
    pub struct MockAttachmentRepo {
        data: Arc<RwLock<HashMap<Uuid, WorkOrderAttachment>>>,
        fail_inserts: Arc<RwLock<bool>>,
    }

    impl MockAttachmentRepo {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn count_total(&self) -> usize {
            self.data.read().len()
        }

        /// Make every subsequent insert fail, for rollback tests
        pub fn fail_inserts(&self, fail: bool) {
            *self.fail_inserts.write() = fail;
        }
    }

    #[async_trait]
    impl AttachmentRepository for MockAttachmentRepo {
        async fn insert(
            &self,
            attachment: &WorkOrderAttachment,
        ) -> anyhow::Result<WorkOrderAttachment> {
            if *self.fail_inserts.read() {
                anyhow::bail!("injected insert failure");
            }
            self.data.write().insert(attachment.id, attachment.clone());
            Ok(attachment.clone())
        }

        async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<WorkOrderAttachment>> {
            Ok(self.data.read().get(&id).cloned())
        }

        async fn list_for(
            &self,
            work_order_id: Uuid,
        ) -> anyhow::Result<Vec<WorkOrderAttachment>> {
            let mut matches: Vec<WorkOrderAttachment> = self
                .data
                .read()
                .values()
                .filter(|a| a.work_order_id == work_order_id)
                .cloned()
                .collect();
            matches.sort_by_key(|a| a.created_at);
            Ok(matches)
        }

        async fn delete(&self, id: Uuid) -> anyhow::Result<()> {
            self.data.write().remove(&id);
            Ok(())
        }
    }

    /// In-memory byte store standing in for the uploads directory
    #[derive(Default)]
    pub struct MockAttachmentStore {
        files: RwLock<HashMap<String, Vec<u8>>>,
    }

    impl MockAttachmentStore {
        pub fn file_count(&self) -> usize {
            self.files.read().len()
        }

        pub fn has(&self, stored_path: &str) -> bool {
            self.files.read().contains_key(stored_path)
        }
    }

    #[async_trait]
    impl AttachmentStore for MockAttachmentStore {
        async fn save(&self, relative_name: &str, bytes: &[u8]) -> anyhow::Result<String> {
            self.files
                .write()
                .insert(relative_name.to_string(), bytes.to_vec());
            Ok(relative_name.to_string())
        }

        async fn load(&self, stored_path: &str) -> anyhow::Result<Vec<u8>> {
            self.files
                .read()
                .get(stored_path)
                .cloned()
                .ok_or_else(|| anyhow::anyhow!("no file at {stored_path}"))
        }

        async fn remove(&self, stored_path: &str) -> anyhow::Result<()> {
            self.files
                .write()
                .remove(stored_path)
                .map(|_| ())
                .ok_or_else(|| anyhow::anyhow!("no file at {stored_path}"))
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

    /// Facilities stub that knows a fixed set of space ids
    #[derive(Default)]
    pub struct MockFacilities {
        spaces: RwLock<HashSet<Uuid>>,
    }

    impl MockFacilities {
        pub fn with_spaces(ids: &[Uuid]) -> Self {
            Self {
                spaces: RwLock::new(ids.iter().copied().collect()),
            }
        }
    }

    #[async_trait]
    impl FacilitiesApi for MockFacilities {
        async fn get_building(&self, id: Uuid) -> Result<Building, FacilitiesError> {
            Err(FacilitiesError::not_found("building", id))
        }

        async fn list_buildings(
            &self,
            _limit: u64,
            _offset: u64,
        ) -> Result<(Vec<Building>, u64), FacilitiesError> {
            Ok((Vec::new(), 0))
        }

        async fn building_floors(
            &self,
            _building_id: Uuid,
        ) -> Result<Vec<Floor>, FacilitiesError> {
            Ok(Vec::new())
        }

        async fn building_spaces(
            &self,
            _building_id: Uuid,
        ) -> Result<Vec<Space>, FacilitiesError> {
            Ok(Vec::new())
        }

        async fn get_space(&self, id: Uuid) -> Result<Space, FacilitiesError> {
            Err(FacilitiesError::not_found("space", id))
        }

        async fn space_exists(&self, id: Uuid) -> Result<bool, FacilitiesError> {
            Ok(self.spaces.read().contains(&id))
        }

        async fn counts(&self) -> Result<FacilityCounts, FacilitiesError> {
            Ok(FacilityCounts {
                buildings: 0,
                floors: 0,
                spaces: self.spaces.read().len() as u64,
            })
        }
    }

    /// Accounts stub that knows a fixed set of user ids
    #[derive(Default)]
    pub struct MockAccounts {
        users: RwLock<HashSet<Uuid>>,
    }

    impl MockAccounts {
        pub fn with_users(ids: &[Uuid]) -> Self {
            Self {
                users: RwLock::new(ids.iter().copied().collect()),
            }
        }
    }

    #[async_trait]
    impl AccountsApi for MockAccounts {
        async fn get_user(&self, id: Uuid) -> Result<User, AccountsError> {
            Err(AccountsError::not_found("user", id))
        }

        async fn user_exists(&self, id: Uuid) -> Result<bool, AccountsError> {
            Ok(self.users.read().contains(&id))
        }
    }
}

struct TestContext {
    service: Service,
    comments: Arc<mocks::MockCommentRepo>,
    attachments: Arc<mocks::MockAttachmentRepo>,
    store: Arc<mocks::MockAttachmentStore>,
    assets: Arc<mocks::MockAssets>,
}

fn create_test_context(assets: &[Uuid], spaces: &[Uuid], users: &[Uuid]) -> TestContext {
    let orders = Arc::new(mocks::MockWorkOrderRepo::new());
    let comments = Arc::new(mocks::MockCommentRepo::new());
    let attachments = Arc::new(mocks::MockAttachmentRepo::new());
    let store = Arc::new(mocks::MockAttachmentStore::default());
    let asset_client = Arc::new(mocks::MockAssets::with_assets(assets));
    let service = Service::new(
        orders,
        comments.clone(),
        attachments.clone(),
        store.clone(),
        asset_client.clone(),
        Arc::new(mocks::MockFacilities::with_spaces(spaces)),
        Arc::new(mocks::MockAccounts::with_users(users)),
        Arc::new(NoOpEventPublisher),
        TEST_UPLOAD_LIMIT,
    );
    TestContext {
        service,
        comments,
        attachments,
        store,
        assets: asset_client,
    }
}

fn new_order(title: &str) -> NewWorkOrder {
    NewWorkOrder {
        title: title.to_string(),
        description: None,
        asset_id: None,
        space_id: None,
        priority: Priority::Medium,
        requested_by: None,
        assigned_to: None,
        due_at: None,
    }
}

// ===== Creation and codes =====

#[tokio::test]
async fn test_create_assigns_sequential_codes() {
    print_test_header(
        "test_create_assigns_sequential_codes",
        &[
            "Codes run WO-000001 onward in creation order",
            "and a deleted order's code is never handed out again",
        ],
    );

    let ctx = create_test_context(&[], &[], &[]);

    println!("📝 Stage 1: Create three orders");
    let first = ctx
        .service
        .create_work_order(new_order("Fix door closer"))
        .await
        .expect("create");
    let second = ctx
        .service
        .create_work_order(new_order("Replace ceiling tile"))
        .await
        .expect("create");
    let third = ctx
        .service
        .create_work_order(new_order("Patch drywall"))
        .await
        .expect("create");
    assert_eq!(first.code, "WO-000001");
    assert_eq!(second.code, "WO-000002");
    assert_eq!(third.code, "WO-000003");
    assert_eq!(first.status, WorkOrderStatus::Open);

    println!("📝 Stage 2: Delete the latest order and create another");
    ctx.service
        .delete_work_order(third.id)
        .await
        .expect("delete");
    let fourth = ctx
        .service
        .create_work_order(new_order("Re-lamp stairwell"))
        .await
        .expect("create");
    assert_eq!(fourth.code, "WO-000004");
    println!("✅ Code sequence skips the retired code");
}

#[tokio::test]
async fn test_create_with_assignee_starts_assigned() {
    print_test_header(
        "test_create_with_assignee_starts_assigned",
        &["An order created with an assignee skips the open state"],
    );

    let technician = Uuid::new_v4();
    let ctx = create_test_context(&[], &[], &[technician]);

    let unassigned = ctx
        .service
        .create_work_order(new_order("Inspect roof drain"))
        .await
        .expect("create");
    assert_eq!(unassigned.status, WorkOrderStatus::Open);
    assert_eq!(unassigned.assigned_to, None);

    let assigned = ctx
        .service
        .create_work_order(NewWorkOrder {
            assigned_to: Some(technician),
            ..new_order("Swap defective ballast")
        })
        .await
        .expect("create");
    assert_eq!(assigned.status, WorkOrderStatus::Assigned);
    assert_eq!(assigned.assigned_to, Some(technician));
}

#[tokio::test]
async fn test_create_validates_references() {
    print_test_header(
        "test_create_validates_references",
        &["Asset, space and user references must resolve before anything is written"],
    );

    let asset_id = Uuid::new_v4();
    let space_id = Uuid::new_v4();
    let user_id = Uuid::new_v4();
    let ctx = create_test_context(&[asset_id], &[space_id], &[user_id]);

    println!("📝 Stage 1: Unknown asset is refused");
    let err = ctx
        .service
        .create_work_order(NewWorkOrder {
            asset_id: Some(Uuid::new_v4()),
            ..new_order("Service AHU")
        })
        .await
        .unwrap_err();
    match err {
        WorkOrdersError::Validation { field, .. } => assert_eq!(field, "asset_id"),
        e => panic!("Expected Validation error, got: {e:?}"),
    }

    println!("📝 Stage 2: Unknown space is refused");
    let err = ctx
        .service
        .create_work_order(NewWorkOrder {
            space_id: Some(Uuid::new_v4()),
            ..new_order("Deep-clean kitchen")
        })
        .await
        .unwrap_err();
    match err {
        WorkOrdersError::Validation { field, .. } => assert_eq!(field, "space_id"),
        e => panic!("Expected Validation error, got: {e:?}"),
    }

    println!("📝 Stage 3: Unknown requester and assignee are refused");
    let err = ctx
        .service
        .create_work_order(NewWorkOrder {
            requested_by: Some(Uuid::new_v4()),
            ..new_order("Check fire panel")
        })
        .await
        .unwrap_err();
    match err {
        WorkOrdersError::Validation { field, .. } => assert_eq!(field, "requested_by"),
        e => panic!("Expected Validation error, got: {e:?}"),
    }
    let err = ctx
        .service
        .create_work_order(NewWorkOrder {
            assigned_to: Some(Uuid::new_v4()),
            ..new_order("Check fire panel")
        })
        .await
        .unwrap_err();
    match err {
        WorkOrdersError::Validation { field, .. } => assert_eq!(field, "assigned_to"),
        e => panic!("Expected Validation error, got: {e:?}"),
    }

    println!("📝 Stage 4: Known references pass");
    let order = ctx
        .service
        .create_work_order(NewWorkOrder {
            asset_id: Some(asset_id),
            space_id: Some(space_id),
            requested_by: Some(user_id),
            ..new_order("Service AHU")
        })
        .await
        .expect("create");
    assert_eq!(order.asset_id, Some(asset_id));
    assert_eq!(order.requested_by, Some(user_id));
}

// ===== Status lifecycle =====

#[tokio::test]
async fn test_status_transitions_follow_table() {
    print_test_header(
        "test_status_transitions_follow_table",
        &[
            "Moves outside the allowed-transition table are conflicts,",
            "and allowed moves stamp the right timestamps",
        ],
    );

    let ctx = create_test_context(&[], &[], &[]);
    let order = ctx
        .service
        .create_work_order(new_order("Rebuild pump seal"))
        .await
        .expect("create");

    println!("📝 Stage 1: Open cannot jump straight to completed");
    let err = ctx
        .service
        .change_status(order.id, WorkOrderStatus::Completed)
        .await
        .unwrap_err();
    match err {
        WorkOrdersError::Conflict { .. } => {}
        e => panic!("Expected Conflict error, got: {e:?}"),
    }

    println!("📝 Stage 2: Open -> in_progress stamps started_at");
    let started = ctx
        .service
        .change_status(order.id, WorkOrderStatus::InProgress)
        .await
        .expect("start");
    assert_eq!(started.status, WorkOrderStatus::InProgress);
    assert!(started.started_at.is_some());
    assert!(started.completed_at.is_none());

    println!("📝 Stage 3: in_progress -> completed stamps completed_at");
    let completed = ctx
        .service
        .change_status(order.id, WorkOrderStatus::Completed)
        .await
        .expect("complete");
    assert_eq!(completed.status, WorkOrderStatus::Completed);
    assert!(completed.completed_at.is_some());

    println!("📝 Stage 4: Completed only moves to closed");
    let err = ctx
        .service
        .change_status(order.id, WorkOrderStatus::Open)
        .await
        .unwrap_err();
    match err {
        WorkOrdersError::Conflict { .. } => {}
        e => panic!("Expected Conflict error, got: {e:?}"),
    }
    let closed = ctx
        .service
        .change_status(order.id, WorkOrderStatus::Closed)
        .await
        .expect("close");
    assert_eq!(closed.status, WorkOrderStatus::Closed);

    println!("📝 Stage 5: Closed is terminal");
    let err = ctx
        .service
        .change_status(order.id, WorkOrderStatus::InProgress)
        .await
        .unwrap_err();
    match err {
        WorkOrdersError::Conflict { .. } => {}
        e => panic!("Expected Conflict error, got: {e:?}"),
    }
}

#[tokio::test]
async fn test_status_repeat_is_noop() {
    print_test_header(
        "test_status_repeat_is_noop",
        &["Re-posting the current status changes nothing, not even updated_at"],
    );

    let ctx = create_test_context(&[], &[], &[]);
    let order = ctx
        .service
        .create_work_order(new_order("Grease garage door track"))
        .await
        .expect("create");

    let repeated = ctx
        .service
        .change_status(order.id, WorkOrderStatus::Open)
        .await
        .expect("no-op");
    assert_eq!(repeated.updated_at, order.updated_at);
    assert_eq!(repeated.status, WorkOrderStatus::Open);
}

#[tokio::test]
async fn test_started_at_stamped_once() {
    print_test_header(
        "test_started_at_stamped_once",
        &["Returning to in_progress after a hold keeps the original start time"],
    );

    let ctx = create_test_context(&[], &[], &[]);
    let order = ctx
        .service
        .create_work_order(new_order("Descale boiler"))
        .await
        .expect("create");

    let started = ctx
        .service
        .change_status(order.id, WorkOrderStatus::InProgress)
        .await
        .expect("start");
    let first_start = started.started_at.expect("stamp");

    ctx.service
        .change_status(order.id, WorkOrderStatus::OnHold)
        .await
        .expect("hold");
    let resumed = ctx
        .service
        .change_status(order.id, WorkOrderStatus::InProgress)
        .await
        .expect("resume");

    assert_eq!(resumed.started_at, Some(first_start));
}

#[tokio::test]
async fn test_completion_cascades_to_asset() {
    print_test_header(
        "test_completion_cascades_to_asset",
        &[
            "Completing an order against an asset records the work on that asset;",
            "orders without an asset complete quietly",
        ],
    );

    let asset_id = Uuid::new_v4();
    let ctx = create_test_context(&[asset_id], &[], &[]);

    println!("📝 Stage 1: Complete an asset-linked order");
    let order = ctx
        .service
        .create_work_order(NewWorkOrder {
            asset_id: Some(asset_id),
            ..new_order("Replace compressor belt")
        })
        .await
        .expect("create");
    ctx.service
        .change_status(order.id, WorkOrderStatus::InProgress)
        .await
        .expect("start");
    let completed = ctx
        .service
        .change_status(order.id, WorkOrderStatus::Completed)
        .await
        .expect("complete");

    let calls = ctx.assets.recorded_calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, asset_id);
    assert_eq!(Some(calls[0].1), completed.completed_at);

    println!("📝 Stage 2: Complete an order with no asset link");
    let unlinked = ctx
        .service
        .create_work_order(new_order("Restripe parking lot"))
        .await
        .expect("create");
    ctx.service
        .change_status(unlinked.id, WorkOrderStatus::InProgress)
        .await
        .expect("start");
    ctx.service
        .change_status(unlinked.id, WorkOrderStatus::Completed)
        .await
        .expect("complete");
    assert_eq!(ctx.assets.recorded_calls().len(), 1);
    println!("✅ No extra cascade for the unlinked order");
}

// ===== Assignment =====

#[tokio::test]
async fn test_assign_moves_open_to_assigned() {
    print_test_header(
        "test_assign_moves_open_to_assigned",
        &[
            "Assignment and status stay in step: assigning an open order",
            "moves it to assigned, clearing the assignee moves it back",
        ],
    );

    let technician = Uuid::new_v4();
    let ctx = create_test_context(&[], &[], &[technician]);
    let order = ctx
        .service
        .create_work_order(new_order("Reset door access reader"))
        .await
        .expect("create");

    println!("📝 Stage 1: Assign");
    let assigned = ctx
        .service
        .assign(order.id, Some(technician))
        .await
        .expect("assign");
    assert_eq!(assigned.assigned_to, Some(technician));
    assert_eq!(assigned.status, WorkOrderStatus::Assigned);

    println!("📝 Stage 2: Assigning the same person again is a no-op");
    let repeated = ctx
        .service
        .assign(order.id, Some(technician))
        .await
        .expect("no-op");
    assert_eq!(repeated.updated_at, assigned.updated_at);

    println!("📝 Stage 3: Clear the assignment");
    let cleared = ctx.service.assign(order.id, None).await.expect("unassign");
    assert_eq!(cleared.assigned_to, None);
    assert_eq!(cleared.status, WorkOrderStatus::Open);

    println!("📝 Stage 4: Unknown assignee is refused");
    let err = ctx.service.assign(order.id, Some(Uuid::new_v4())).await.unwrap_err();
    match err {
        WorkOrdersError::Validation { field, .. } => assert_eq!(field, "assigned_to"),
        e => panic!("Expected Validation error, got: {e:?}"),
    }
}

#[tokio::test]
async fn test_assign_in_progress_keeps_status() {
    print_test_header(
        "test_assign_in_progress_keeps_status",
        &["Handing running work to someone else does not reset its status"],
    );

    let first = Uuid::new_v4();
    let second = Uuid::new_v4();
    let ctx = create_test_context(&[], &[], &[first, second]);

    let order = ctx
        .service
        .create_work_order(NewWorkOrder {
            assigned_to: Some(first),
            ..new_order("Unblock roof drain")
        })
        .await
        .expect("create");
    ctx.service
        .change_status(order.id, WorkOrderStatus::InProgress)
        .await
        .expect("start");

    let handed_over = ctx
        .service
        .assign(order.id, Some(second))
        .await
        .expect("reassign");
    assert_eq!(handed_over.assigned_to, Some(second));
    assert_eq!(handed_over.status, WorkOrderStatus::InProgress);
}

#[tokio::test]
async fn test_assign_refuses_finished_orders() {
    print_test_header(
        "test_assign_refuses_finished_orders",
        &["Completed and cancelled orders cannot be reassigned"],
    );

    let technician = Uuid::new_v4();
    let ctx = create_test_context(&[], &[], &[technician]);

    let order = ctx
        .service
        .create_work_order(new_order("Paint stairwell"))
        .await
        .expect("create");
    ctx.service
        .change_status(order.id, WorkOrderStatus::Cancelled)
        .await
        .expect("cancel");

    let err = ctx
        .service
        .assign(order.id, Some(technician))
        .await
        .unwrap_err();
    match err {
        WorkOrdersError::Conflict { reason } => {
            assert!(reason.contains("cancelled"), "unexpected reason: {reason}")
        }
        e => panic!("Expected Conflict error, got: {e:?}"),
    }
}

#[tokio::test]
async fn test_assigned_status_requires_assignee() {
    print_test_header(
        "test_assigned_status_requires_assignee",
        &["The assigned status cannot be set while nobody is assigned"],
    );

    let ctx = create_test_context(&[], &[], &[]);
    let order = ctx
        .service
        .create_work_order(new_order("Calibrate thermostat"))
        .await
        .expect("create");

    let err = ctx
        .service
        .change_status(order.id, WorkOrderStatus::Assigned)
        .await
        .unwrap_err();
    match err {
        WorkOrdersError::Conflict { reason } => {
            assert!(reason.contains("unassigned"), "unexpected reason: {reason}")
        }
        e => panic!("Expected Conflict error, got: {e:?}"),
    }
}

// ===== Updates =====

#[tokio::test]
async fn test_update_locks_finished_orders() {
    print_test_header(
        "test_update_locks_finished_orders",
        &[
            "Descriptive edits work while the order is active",
            "and are refused once it is finished",
        ],
    );

    let ctx = create_test_context(&[], &[], &[]);
    let order = ctx
        .service
        .create_work_order(new_order("Tighten handrail"))
        .await
        .expect("create");

    println!("📝 Stage 1: Edit while open");
    let updated = ctx
        .service
        .update_work_order(
            order.id,
            UpdateWorkOrder {
                title: "Tighten loose handrail".to_string(),
                description: Some("Third floor east stair".to_string()),
                asset_id: None,
                space_id: None,
                priority: Priority::High,
                due_at: Some(Utc::now() + Duration::days(3)),
            },
        )
        .await
        .expect("update");
    assert_eq!(updated.title, "Tighten loose handrail");
    assert_eq!(updated.priority, Priority::High);
    assert_eq!(updated.status, WorkOrderStatus::Open);
    assert_eq!(updated.code, order.code);

    println!("📝 Stage 2: Edits after cancellation are refused");
    ctx.service
        .change_status(order.id, WorkOrderStatus::Cancelled)
        .await
        .expect("cancel");
    let err = ctx
        .service
        .update_work_order(
            order.id,
            UpdateWorkOrder {
                title: "Too late".to_string(),
                description: None,
                asset_id: None,
                space_id: None,
                priority: Priority::Low,
                due_at: None,
            },
        )
        .await
        .unwrap_err();
    match err {
        WorkOrdersError::Conflict { .. } => {}
        e => panic!("Expected Conflict error, got: {e:?}"),
    }
}

// ===== Listing and summaries =====

#[tokio::test]
async fn test_list_filters() {
    print_test_header(
        "test_list_filters",
        &[
            "Status, priority, assignee, asset and overdue filters",
            "each narrow the list; summary reads count only active orders",
        ],
    );

    let asset_id = Uuid::new_v4();
    let technician = Uuid::new_v4();
    let ctx = create_test_context(&[asset_id], &[], &[technician]);
    let yesterday = Utc::now() - Duration::days(1);

    let urgent = ctx
        .service
        .create_work_order(NewWorkOrder {
            priority: Priority::Urgent,
            asset_id: Some(asset_id),
            due_at: Some(yesterday),
            ..new_order("Burst pipe in riser")
        })
        .await
        .expect("create");
    let routine = ctx
        .service
        .create_work_order(NewWorkOrder {
            assigned_to: Some(technician),
            ..new_order("Monthly generator run")
        })
        .await
        .expect("create");
    let finished = ctx
        .service
        .create_work_order(NewWorkOrder {
            due_at: Some(yesterday),
            ..new_order("Clean gutters")
        })
        .await
        .expect("create");
    ctx.service
        .change_status(finished.id, WorkOrderStatus::InProgress)
        .await
        .expect("start");
    ctx.service
        .change_status(finished.id, WorkOrderStatus::Completed)
        .await
        .expect("complete");

    println!("📝 Stage 1: Filter by status");
    let (open_only, total) = ctx
        .service
        .list_work_orders(
            WorkOrderListFilter {
                status: Some(WorkOrderStatus::Open),
                ..Default::default()
            },
            50,
            0,
        )
        .await
        .expect("list");
    assert_eq!(total, 1);
    assert_eq!(open_only[0].id, urgent.id);

    println!("📝 Stage 2: Filter by priority and assignee");
    let (urgent_only, _) = ctx
        .service
        .list_work_orders(
            WorkOrderListFilter {
                priority: Some(Priority::Urgent),
                ..Default::default()
            },
            50,
            0,
        )
        .await
        .expect("list");
    assert_eq!(urgent_only.len(), 1);
    assert_eq!(urgent_only[0].id, urgent.id);

    let (mine, _) = ctx
        .service
        .list_work_orders(
            WorkOrderListFilter {
                assigned_to: Some(technician),
                ..Default::default()
            },
            50,
            0,
        )
        .await
        .expect("list");
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].id, routine.id);

    println!("📝 Stage 3: Overdue ignores finished orders");
    let (overdue, total) = ctx
        .service
        .list_work_orders(
            WorkOrderListFilter {
                overdue: true,
                ..Default::default()
            },
            50,
            0,
        )
        .await
        .expect("list");
    assert_eq!(total, 1, "the completed order is past due but not overdue");
    assert_eq!(overdue[0].id, urgent.id);

    println!("📝 Stage 4: Summary reads");
    assert_eq!(ctx.service.open_count().await.expect("count"), 2);
    let for_asset = ctx
        .service
        .open_for_asset(asset_id, 10)
        .await
        .expect("open_for_asset");
    assert_eq!(for_asset.len(), 1);
    assert_eq!(for_asset[0].id, urgent.id);
    let recent = ctx.service.recent(2).await.expect("recent");
    assert_eq!(recent.len(), 2);
    assert_eq!(recent[0].id, finished.id, "newest first");
}

// ===== Comments =====

#[tokio::test]
async fn test_comments_belong_to_their_order() {
    print_test_header(
        "test_comments_belong_to_their_order",
        &[
            "Comments list oldest first and can only be deleted",
            "through the order they were written on",
        ],
    );

    let author = Uuid::new_v4();
    let ctx = create_test_context(&[], &[], &[author]);
    let order = ctx
        .service
        .create_work_order(new_order("Flickering lobby light"))
        .await
        .expect("create");
    let other = ctx
        .service
        .create_work_order(new_order("Jammed mail slot"))
        .await
        .expect("create");

    println!("📝 Stage 1: Add two comments");
    let first = ctx
        .service
        .add_comment(
            order.id,
            NewComment {
                author_id: Some(author),
                body: "Ballast looks burnt".to_string(),
            },
        )
        .await
        .expect("comment");
    let second = ctx
        .service
        .add_comment(
            order.id,
            NewComment {
                author_id: Some(author),
                body: "Parts ordered, ETA Friday".to_string(),
            },
        )
        .await
        .expect("comment");

    let listed = ctx.service.comments_for(order.id).await.expect("list");
    assert_eq!(
        listed.iter().map(|c| c.id).collect::<Vec<_>>(),
        vec![first.id, second.id],
        "oldest first"
    );

    println!("📝 Stage 2: Blank comments and unknown orders are refused");
    let err = ctx
        .service
        .add_comment(
            order.id,
            NewComment {
                author_id: None,
                body: "   ".to_string(),
            },
        )
        .await
        .unwrap_err();
    match err {
        WorkOrdersError::Validation { field, .. } => assert_eq!(field, "body"),
        e => panic!("Expected Validation error, got: {e:?}"),
    }
    let err = ctx
        .service
        .add_comment(
            Uuid::new_v4(),
            NewComment {
                author_id: None,
                body: "Orphan".to_string(),
            },
        )
        .await
        .unwrap_err();
    match err {
        WorkOrdersError::NotFound { resource, .. } => assert_eq!(resource, "work order"),
        e => panic!("Expected NotFound error, got: {e:?}"),
    }

    println!("📝 Stage 3: Deleting through the wrong order fails");
    let err = ctx
        .service
        .delete_comment(other.id, first.id)
        .await
        .unwrap_err();
    match err {
        WorkOrdersError::NotFound { resource, .. } => assert_eq!(resource, "comment"),
        e => panic!("Expected NotFound error, got: {e:?}"),
    }
    assert_eq!(ctx.comments.count_total(), 2);

    println!("📝 Stage 4: Deleting through the right order removes the row");
    ctx.service
        .delete_comment(order.id, first.id)
        .await
        .expect("delete");
    assert_eq!(ctx.comments.count_total(), 1);
}

// ===== Attachments =====

#[tokio::test]
async fn test_attachment_upload_checksum_and_size_cap() {
    print_test_header(
        "test_attachment_upload_checksum_and_size_cap",
        &[
            "Uploads are checksummed and stored under the order's directory;",
            "oversize and path-escaping uploads are refused",
        ],
    );

    let ctx = create_test_context(&[], &[], &[]);
    let order = ctx
        .service
        .create_work_order(new_order("Leaking radiator valve"))
        .await
        .expect("create");

    println!("📝 Stage 1: A normal upload lands with its checksum");
    let bytes = b"before photo bytes".to_vec();
    let expected_checksum = hex::encode(Sha256::digest(&bytes));
    let attachment = ctx
        .service
        .add_attachment(
            order.id,
            NewAttachment {
                file_name: "before.jpg".to_string(),
                content_type: "image/jpeg".to_string(),
                bytes: bytes.clone(),
                uploaded_by: None,
            },
        )
        .await
        .expect("upload");
    assert_eq!(attachment.checksum_sha256, expected_checksum);
    assert_eq!(attachment.size_bytes, bytes.len() as i64);
    assert_eq!(
        attachment.stored_path,
        format!("{}/{}", order.id, attachment.id)
    );
    assert!(ctx.store.has(&attachment.stored_path));

    println!("📝 Stage 2: A blank content type defaults to octet-stream");
    let fallback = ctx
        .service
        .add_attachment(
            order.id,
            NewAttachment {
                file_name: "notes.txt".to_string(),
                content_type: "".to_string(),
                bytes: b"handwritten notes".to_vec(),
                uploaded_by: None,
            },
        )
        .await
        .expect("upload");
    assert_eq!(fallback.content_type, "application/octet-stream");

    println!("📝 Stage 3: Oversize uploads are refused with the limit");
    let err = ctx
        .service
        .add_attachment(
            order.id,
            NewAttachment {
                file_name: "huge.bin".to_string(),
                content_type: "application/octet-stream".to_string(),
                bytes: vec![0u8; TEST_UPLOAD_LIMIT as usize + 1],
                uploaded_by: None,
            },
        )
        .await
        .unwrap_err();
    match err {
        WorkOrdersError::TooLarge { limit } => assert_eq!(limit, TEST_UPLOAD_LIMIT),
        e => panic!("Expected TooLarge error, got: {e:?}"),
    }

    println!("📝 Stage 4: Path separators in the name are refused");
    let err = ctx
        .service
        .add_attachment(
            order.id,
            NewAttachment {
                file_name: "../escape.txt".to_string(),
                content_type: "text/plain".to_string(),
                bytes: b"nope".to_vec(),
                uploaded_by: None,
            },
        )
        .await
        .unwrap_err();
    match err {
        WorkOrdersError::Validation { field, .. } => assert_eq!(field, "file_name"),
        e => panic!("Expected Validation error, got: {e:?}"),
    }
    assert_eq!(ctx.store.file_count(), 2);
}

#[tokio::test]
async fn test_attachment_download_and_delete() {
    print_test_header(
        "test_attachment_download_and_delete",
        &[
            "Downloads return the stored bytes; deletion removes the row",
            "and the file, and attachments answer only to their own order",
        ],
    );

    let ctx = create_test_context(&[], &[], &[]);
    let order = ctx
        .service
        .create_work_order(new_order("Cracked window pane"))
        .await
        .expect("create");
    let other = ctx
        .service
        .create_work_order(new_order("Squeaky hinge"))
        .await
        .expect("create");

    let attachment = ctx
        .service
        .add_attachment(
            order.id,
            NewAttachment {
                file_name: "measurements.pdf".to_string(),
                content_type: "application/pdf".to_string(),
                bytes: b"pane dimensions".to_vec(),
                uploaded_by: None,
            },
        )
        .await
        .expect("upload");

    println!("📝 Stage 1: Download through the owning order");
    let (row, bytes) = ctx
        .service
        .open_attachment(order.id, attachment.id)
        .await
        .expect("download");
    assert_eq!(row.file_name, "measurements.pdf");
    assert_eq!(bytes, b"pane dimensions");

    println!("📝 Stage 2: The wrong order cannot reach it");
    let err = ctx
        .service
        .open_attachment(other.id, attachment.id)
        .await
        .unwrap_err();
    match err {
        WorkOrdersError::NotFound { resource, .. } => assert_eq!(resource, "attachment"),
        e => panic!("Expected NotFound error, got: {e:?}"),
    }

    println!("📝 Stage 3: Deletion removes the row and the bytes");
    ctx.service
        .delete_attachment(order.id, attachment.id)
        .await
        .expect("delete");
    assert_eq!(ctx.attachments.count_total(), 0);
    assert_eq!(ctx.store.file_count(), 0);

    let err = ctx
        .service
        .open_attachment(order.id, attachment.id)
        .await
        .unwrap_err();
    match err {
        WorkOrdersError::NotFound { .. } => {}
        e => panic!("Expected NotFound error, got: {e:?}"),
    }
}

#[tokio::test]
async fn test_attachment_insert_failure_removes_bytes() {
    print_test_header(
        "test_attachment_insert_failure_removes_bytes",
        &["A failed row insert rolls the stored bytes back out of the store"],
    );

    let ctx = create_test_context(&[], &[], &[]);
    let order = ctx
        .service
        .create_work_order(new_order("Damaged kickplate"))
        .await
        .expect("create");

    ctx.attachments.fail_inserts(true);
    let err = ctx
        .service
        .add_attachment(
            order.id,
            NewAttachment {
                file_name: "photo.jpg".to_string(),
                content_type: "image/jpeg".to_string(),
                bytes: b"kickplate photo".to_vec(),
                uploaded_by: None,
            },
        )
        .await
        .unwrap_err();
    match err {
        WorkOrdersError::Internal(_) => {}
        e => panic!("Expected Internal error, got: {e:?}"),
    }

    assert_eq!(ctx.attachments.count_total(), 0);
    assert_eq!(ctx.store.file_count(), 0, "no orphaned bytes remain");
}
