//! Domain service - business logic orchestration

use super::events::{EventPublisher, WorkOrderEvent};
use super::repository::{
    AttachmentRepository, CommentRepository, WorkOrderRepository, WorkOrderSearch,
};
use super::store::AttachmentStore;
use super::validation;
use crate::contract::{
    NewAttachment, NewComment, NewWorkOrder, UpdateWorkOrder, WorkOrder, WorkOrderAttachment,
    WorkOrderComment, WorkOrderListFilter, WorkOrderStatus, WorkOrdersError,
};
use accounts::AccountsApi;
use assets::AssetsApi;
use chrono::Utc;
use facilities::FacilitiesApi;
use sha2::{Digest, Sha256};
use std::sync::Arc;
use uuid::Uuid;

/// Domain service for work orders, their comments and their attachments
pub struct Service {
    orders: Arc<dyn WorkOrderRepository>,
    comments: Arc<dyn CommentRepository>,
    attachments: Arc<dyn AttachmentRepository>,
    store: Arc<dyn AttachmentStore>,
    assets: Arc<dyn AssetsApi>,
    facilities: Arc<dyn FacilitiesApi>,
    accounts: Arc<dyn AccountsApi>,
    events: Arc<dyn EventPublisher>,
    max_upload_bytes: u64,
}

impl Service {
    /// Create a new service instance
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        orders: Arc<dyn WorkOrderRepository>,
        comments: Arc<dyn CommentRepository>,
        attachments: Arc<dyn AttachmentRepository>,
        store: Arc<dyn AttachmentStore>,
        assets: Arc<dyn AssetsApi>,
        facilities: Arc<dyn FacilitiesApi>,
        accounts: Arc<dyn AccountsApi>,
        events: Arc<dyn EventPublisher>,
        max_upload_bytes: u64,
    ) -> Self {
        Self {
            orders,
            comments,
            attachments,
            store,
            assets,
            facilities,
            accounts,
            events,
            max_upload_bytes,
        }
    }

    // ===== Work order operations =====

    /// Open a new work order. Orders created with an assignee start out
    /// `assigned` rather than `open`.
    pub async fn create_work_order(
        &self,
        input: NewWorkOrder,
    ) -> Result<WorkOrder, WorkOrdersError> {
        validation::validate_title(&input.title)?;
        self.ensure_references_known(
            input.asset_id,
            input.space_id,
            input.requested_by,
            input.assigned_to,
        )
        .await?;

        let status = if input.assigned_to.is_some() {
            WorkOrderStatus::Assigned
        } else {
            WorkOrderStatus::Open
        };

        let now = Utc::now();
        let order = WorkOrder {
            id: Uuid::new_v4(),
            // Assigned by the repository inside the insert transaction
            code: String::new(),
            title: input.title,
            description: input.description,
            asset_id: input.asset_id,
            space_id: input.space_id,
            status,
            priority: input.priority,
            requested_by: input.requested_by,
            assigned_to: input.assigned_to,
            due_at: input.due_at,
            started_at: None,
            completed_at: None,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };

        let created = self
            .orders
            .insert(&order)
            .await
            .map_err(|e| self.internal("insert work order", e))?;

        self.publish(WorkOrderEvent::Created {
            id: created.id,
            code: created.code.clone(),
            timestamp: Utc::now(),
        })
        .await;

        Ok(created)
    }

    pub async fn get_work_order(&self, id: Uuid) -> Result<WorkOrder, WorkOrdersError> {
        self.orders
            .find_by_id(id)
            .await
            .map_err(|e| self.internal("find work order", e))?
            .ok_or_else(|| WorkOrdersError::not_found("work order", id))
    }

    pub async fn list_work_orders(
        &self,
        filter: WorkOrderListFilter,
        limit: u64,
        offset: u64,
    ) -> Result<(Vec<WorkOrder>, u64), WorkOrdersError> {
        self.orders
            .list(&search_from(filter), limit, offset)
            .await
            .map_err(|e| self.internal("list work orders", e))
    }

    /// Edit the descriptive fields. Status, assignment and the requester
    /// go through their own operations, and finished orders are locked.
    pub async fn update_work_order(
        &self,
        id: Uuid,
        input: UpdateWorkOrder,
    ) -> Result<WorkOrder, WorkOrdersError> {
        validation::validate_title(&input.title)?;

        let mut order = self.get_work_order(id).await?;
        if !order.status.is_active() {
            return Err(WorkOrdersError::conflict(format!(
                "cannot edit a {} work order",
                order.status
            )));
        }
        self.ensure_references_known(input.asset_id, input.space_id, None, None)
            .await?;

        order.title = input.title;
        order.description = input.description;
        order.asset_id = input.asset_id;
        order.space_id = input.space_id;
        order.priority = input.priority;
        order.due_at = input.due_at;
        order.updated_at = Utc::now();

        let updated = self
            .orders
            .update(&order)
            .await
            .map_err(|e| self.internal("update work order", e))?;

        self.publish(WorkOrderEvent::Updated {
            id,
            timestamp: Utc::now(),
        })
        .await;

        Ok(updated)
    }

    pub async fn delete_work_order(&self, id: Uuid) -> Result<(), WorkOrdersError> {
        self.get_work_order(id).await?;

        self.orders
            .soft_delete(id)
            .await
            .map_err(|e| self.internal("delete work order", e))?;

        self.publish(WorkOrderEvent::Deleted {
            id,
            timestamp: Utc::now(),
        })
        .await;

        Ok(())
    }

    /// Move the order through its lifecycle.
    ///
    /// Repeating the current status is a no-op; anything outside the
    /// transition table is a conflict. The first move into `in_progress`
    /// stamps `started_at`; completing stamps `completed_at` and, when the
    /// order targets an asset, records the work on that asset.
    pub async fn change_status(
        &self,
        id: Uuid,
        next: WorkOrderStatus,
    ) -> Result<WorkOrder, WorkOrdersError> {
        let mut order = self.get_work_order(id).await?;
        if order.status == next {
            return Ok(order);
        }
        if !order.status.can_transition_to(next) {
            return Err(WorkOrdersError::conflict(format!(
                "status cannot change from {} to {}",
                order.status, next
            )));
        }
        if next == WorkOrderStatus::Assigned && order.assigned_to.is_none() {
            return Err(WorkOrdersError::conflict(
                "cannot mark an unassigned work order as assigned",
            ));
        }

        let now = Utc::now();
        let previous = order.status;
        if next == WorkOrderStatus::InProgress && order.started_at.is_none() {
            order.started_at = Some(now);
        }
        if next == WorkOrderStatus::Completed {
            order.completed_at = Some(now);
        }
        order.status = next;
        order.updated_at = now;

        let updated = self
            .orders
            .update(&order)
            .await
            .map_err(|e| self.internal("update work order status", e))?;

        if next == WorkOrderStatus::Completed {
            if let Some(asset_id) = updated.asset_id {
                self.assets
                    .record_maintenance(asset_id, now)
                    .await
                    .map_err(|e| self.upstream("record asset maintenance", e))?;
            }
        }

        self.publish(WorkOrderEvent::StatusChanged {
            id,
            from: previous,
            to: next,
            timestamp: Utc::now(),
        })
        .await;

        Ok(updated)
    }

    /// Hand the order to a technician, or take it back with `None`.
    ///
    /// Assignment keeps the status honest: assigning an `open` order moves
    /// it to `assigned`, clearing the assignee of an `assigned` order moves
    /// it back to `open`. Finished orders refuse reassignment.
    pub async fn assign(
        &self,
        id: Uuid,
        assigned_to: Option<Uuid>,
    ) -> Result<WorkOrder, WorkOrdersError> {
        let mut order = self.get_work_order(id).await?;
        if !order.status.is_active() {
            return Err(WorkOrdersError::conflict(format!(
                "cannot reassign a {} work order",
                order.status
            )));
        }
        if order.assigned_to == assigned_to {
            return Ok(order);
        }
        if let Some(user_id) = assigned_to {
            self.ensure_user_known("assigned_to", user_id).await?;
        }

        order.assigned_to = assigned_to;
        match (assigned_to, order.status) {
            (Some(_), WorkOrderStatus::Open) => order.status = WorkOrderStatus::Assigned,
            (None, WorkOrderStatus::Assigned) => order.status = WorkOrderStatus::Open,
            _ => {}
        }
        order.updated_at = Utc::now();

        let updated = self
            .orders
            .update(&order)
            .await
            .map_err(|e| self.internal("update work order assignment", e))?;

        self.publish(WorkOrderEvent::AssignmentChanged {
            id,
            assigned_to,
            timestamp: Utc::now(),
        })
        .await;

        Ok(updated)
    }

    // ===== Comment operations =====

    pub async fn add_comment(
        &self,
        work_order_id: Uuid,
        input: NewComment,
    ) -> Result<WorkOrderComment, WorkOrdersError> {
        validation::validate_comment_body(&input.body)?;
        self.get_work_order(work_order_id).await?;

        let now = Utc::now();
        let comment = WorkOrderComment {
            id: Uuid::new_v4(),
            work_order_id,
            author_id: input.author_id,
            body: input.body,
            created_at: now,
            updated_at: now,
        };

        let created = self
            .comments
            .insert(&comment)
            .await
            .map_err(|e| self.internal("insert comment", e))?;

        self.publish(WorkOrderEvent::CommentAdded {
            id: created.id,
            work_order_id,
            timestamp: Utc::now(),
        })
        .await;

        Ok(created)
    }

    /// All comments on one order, oldest first
    pub async fn comments_for(
        &self,
        work_order_id: Uuid,
    ) -> Result<Vec<WorkOrderComment>, WorkOrdersError> {
        self.get_work_order(work_order_id).await?;
        self.comments
            .list_for(work_order_id)
            .await
            .map_err(|e| self.internal("list comments", e))
    }

    pub async fn delete_comment(
        &self,
        work_order_id: Uuid,
        comment_id: Uuid,
    ) -> Result<(), WorkOrdersError> {
        // A comment is only addressable through its own work order
        let comment = self
            .comments
            .find_by_id(comment_id)
            .await
            .map_err(|e| self.internal("find comment", e))?
            .filter(|comment| comment.work_order_id == work_order_id)
            .ok_or_else(|| WorkOrdersError::not_found("comment", comment_id))?;

        self.comments
            .delete(comment.id)
            .await
            .map_err(|e| self.internal("delete comment", e))?;

        self.publish(WorkOrderEvent::CommentDeleted {
            id: comment_id,
            work_order_id,
            timestamp: Utc::now(),
        })
        .await;

        Ok(())
    }

    // ===== Attachment operations =====

    /// Store an uploaded file against the order.
    ///
    /// The bytes land in the attachment store first; the row is inserted
    /// after, and a failed insert removes the stored bytes again so the two
    /// never disagree for long.
    pub async fn add_attachment(
        &self,
        work_order_id: Uuid,
        input: NewAttachment,
    ) -> Result<WorkOrderAttachment, WorkOrdersError> {
        validation::validate_file_name(&input.file_name)?;
        if input.bytes.len() as u64 > self.max_upload_bytes {
            return Err(WorkOrdersError::TooLarge {
                limit: self.max_upload_bytes,
            });
        }
        self.get_work_order(work_order_id).await?;

        let id = Uuid::new_v4();
        let checksum = hex::encode(Sha256::digest(&input.bytes));
        let content_type = if input.content_type.trim().is_empty() {
            "application/octet-stream".to_string()
        } else {
            input.content_type
        };

        let stored_path = self
            .store
            .save(&format!("{work_order_id}/{id}"), &input.bytes)
            .await
            .map_err(|e| self.internal("store attachment bytes", e))?;

        let now = Utc::now();
        let attachment = WorkOrderAttachment {
            id,
            work_order_id,
            file_name: input.file_name,
            content_type,
            size_bytes: input.bytes.len() as i64,
            checksum_sha256: checksum,
            stored_path: stored_path.clone(),
            uploaded_by: input.uploaded_by,
            created_at: now,
            updated_at: now,
        };

        let created = match self.attachments.insert(&attachment).await {
            Ok(created) => created,
            Err(e) => {
                // Roll the bytes back so a failed insert leaves no orphan file
                if let Err(remove_err) = self.store.remove(&stored_path).await {
                    tracing::warn!(error = %remove_err, stored_path, "failed to remove orphaned attachment file");
                }
                return Err(self.internal("insert attachment", e));
            }
        };

        self.publish(WorkOrderEvent::AttachmentAdded {
            id: created.id,
            work_order_id,
            timestamp: Utc::now(),
        })
        .await;

        Ok(created)
    }

    /// All attachments on one order, oldest first
    pub async fn attachments_for(
        &self,
        work_order_id: Uuid,
    ) -> Result<Vec<WorkOrderAttachment>, WorkOrdersError> {
        self.get_work_order(work_order_id).await?;
        self.attachments
            .list_for(work_order_id)
            .await
            .map_err(|e| self.internal("list attachments", e))
    }

    /// Fetch one attachment's row and bytes for download
    pub async fn open_attachment(
        &self,
        work_order_id: Uuid,
        attachment_id: Uuid,
    ) -> Result<(WorkOrderAttachment, Vec<u8>), WorkOrdersError> {
        let attachment = self.find_attachment(work_order_id, attachment_id).await?;
        let bytes = self
            .store
            .load(&attachment.stored_path)
            .await
            .map_err(|e| self.internal("load attachment bytes", e))?;
        Ok((attachment, bytes))
    }

    pub async fn delete_attachment(
        &self,
        work_order_id: Uuid,
        attachment_id: Uuid,
    ) -> Result<(), WorkOrdersError> {
        let attachment = self.find_attachment(work_order_id, attachment_id).await?;

        self.attachments
            .delete(attachment.id)
            .await
            .map_err(|e| self.internal("delete attachment", e))?;

        // The row is authoritative; a file that outlives it is only noise
        if let Err(error) = self.store.remove(&attachment.stored_path).await {
            tracing::warn!(error = %error, stored_path = attachment.stored_path, "failed to remove attachment file");
        }

        self.publish(WorkOrderEvent::AttachmentDeleted {
            id: attachment_id,
            work_order_id,
            timestamp: Utc::now(),
        })
        .await;

        Ok(())
    }

    // ===== Summary reads for other modules =====

    pub async fn open_count(&self) -> Result<u64, WorkOrdersError> {
        let (_, total) = self
            .orders
            .list(&active_search(), 1, 0)
            .await
            .map_err(|e| self.internal("count open work orders", e))?;
        Ok(total)
    }

    pub async fn open_for_asset(
        &self,
        asset_id: Uuid,
        limit: u64,
    ) -> Result<Vec<WorkOrder>, WorkOrdersError> {
        let search = WorkOrderSearch {
            asset_id: Some(asset_id),
            ..active_search()
        };
        let (items, _) = self
            .orders
            .list(&search, limit, 0)
            .await
            .map_err(|e| self.internal("list open work orders", e))?;
        Ok(items)
    }

    pub async fn recent(&self, limit: u64) -> Result<Vec<WorkOrder>, WorkOrdersError> {
        let (items, _) = self
            .orders
            .list(&WorkOrderSearch::default(), limit, 0)
            .await
            .map_err(|e| self.internal("list recent work orders", e))?;
        Ok(items)
    }

    // ===== Helpers =====

    async fn ensure_references_known(
        &self,
        asset_id: Option<Uuid>,
        space_id: Option<Uuid>,
        requested_by: Option<Uuid>,
        assigned_to: Option<Uuid>,
    ) -> Result<(), WorkOrdersError> {
        if let Some(asset_id) = asset_id {
            let exists = self
                .assets
                .asset_exists(asset_id)
                .await
                .map_err(|e| self.upstream("asset lookup", e))?;
            if !exists {
                return Err(WorkOrdersError::validation(
                    "asset_id",
                    "references an unknown asset",
                ));
            }
        }
        if let Some(space_id) = space_id {
            let exists = self
                .facilities
                .space_exists(space_id)
                .await
                .map_err(|e| self.upstream("space lookup", e))?;
            if !exists {
                return Err(WorkOrdersError::validation(
                    "space_id",
                    "references an unknown space",
                ));
            }
        }
        if let Some(user_id) = requested_by {
            self.ensure_user_known("requested_by", user_id).await?;
        }
        if let Some(user_id) = assigned_to {
            self.ensure_user_known("assigned_to", user_id).await?;
        }
        Ok(())
    }

    async fn ensure_user_known(
        &self,
        field: &'static str,
        user_id: Uuid,
    ) -> Result<(), WorkOrdersError> {
        let exists = self
            .accounts
            .user_exists(user_id)
            .await
            .map_err(|e| self.upstream("user lookup", e))?;
        if !exists {
            return Err(WorkOrdersError::validation(
                field,
                "references an unknown user",
            ));
        }
        Ok(())
    }

    async fn find_attachment(
        &self,
        work_order_id: Uuid,
        attachment_id: Uuid,
    ) -> Result<WorkOrderAttachment, WorkOrdersError> {
        // An attachment is only addressable through its own work order
        self.attachments
            .find_by_id(attachment_id)
            .await
            .map_err(|e| self.internal("find attachment", e))?
            .filter(|attachment| attachment.work_order_id == work_order_id)
            .ok_or_else(|| WorkOrdersError::not_found("attachment", attachment_id))
    }

    fn internal(&self, context: &'static str, error: anyhow::Error) -> WorkOrdersError {
        tracing::error!(context, error = %error, "work orders storage failure");
        WorkOrdersError::internal(format!("{context} failed"))
    }

    fn upstream(&self, context: &'static str, error: impl std::fmt::Display) -> WorkOrdersError {
        tracing::error!(context, error = %error, "upstream lookup failure");
        WorkOrdersError::internal(format!("{context} failed"))
    }

    async fn publish(&self, event: WorkOrderEvent) {
        // Event failures must not fail the write that produced them
        if let Err(error) = self.events.publish(event).await {
            tracing::warn!(error = %error, "failed to publish work order event");
        }
    }
}

fn search_from(filter: WorkOrderListFilter) -> WorkOrderSearch {
    WorkOrderSearch {
        statuses: filter.status.map(|status| vec![status]),
        priority: filter.priority,
        assigned_to: filter.assigned_to,
        asset_id: filter.asset_id,
        space_id: filter.space_id,
        overdue_as_of: filter.overdue.then(Utc::now),
    }
}

fn active_search() -> WorkOrderSearch {
    WorkOrderSearch {
        statuses: Some(vec![
            WorkOrderStatus::Open,
            WorkOrderStatus::Assigned,
            WorkOrderStatus::InProgress,
            WorkOrderStatus::OnHold,
        ]),
        ..Default::default()
    }
}
