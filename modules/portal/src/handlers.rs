//! Page handlers
//!
//! Every page is a plain GET that pulls from the contract clients and
//! renders a template. Optional cross-references are resolved tolerantly:
//! a reference that no longer resolves renders as absent rather than
//! failing the page.

use std::collections::HashMap;

use axum::extract::{Path, Query, State};
use axum::response::Html;
use chrono::Utc;
use serde::Deserialize;
use sitekit::PageQuery;
use tera::Context;
use uuid::Uuid;

use assets::AssetListFilter;
use work_orders::WorkOrderListFilter;

use crate::error::PortalError;
use crate::views;
use crate::PortalState;

fn render(state: &PortalState, name: &str, context: &Context) -> Result<Html<String>, PortalError> {
    Ok(Html(state.tera.render(name, context)?))
}

pub async fn dashboard(State(state): State<PortalState>) -> Result<Html<String>, PortalError> {
    let now = Utc::now();
    let facility_counts = state.facilities.counts().await?;
    let counts = views::CountsView {
        buildings: facility_counts.buildings,
        floors: facility_counts.floors,
        spaces: facility_counts.spaces,
        assets: state.assets.count_active().await?,
        open_work_orders: state.work_orders.open_count().await?,
        overdue_maintenance: state.maintenance.overdue_count(now).await?,
    };

    let recent: Vec<views::WorkOrderRow> = state
        .work_orders
        .recent(8)
        .await?
        .into_iter()
        .map(|order| views::WorkOrderRow::from_order(order, now))
        .collect();
    let due: Vec<views::ScheduleRow> = state
        .maintenance
        .overdue_schedules(now, 8)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();

    let mut context = Context::new();
    context.insert("counts", &counts);
    context.insert("recent_work_orders", &recent);
    context.insert("due_maintenance", &due);
    render(&state, "dashboard.html", &context)
}

pub async fn buildings(
    State(state): State<PortalState>,
    Query(page): Query<PageQuery>,
) -> Result<Html<String>, PortalError> {
    let (limit, offset) = page.clamp();
    let (buildings, total) = state.facilities.list_buildings(limit, offset).await?;
    let rows: Vec<views::BuildingRow> = buildings.into_iter().map(Into::into).collect();

    let mut context = Context::new();
    context.insert("buildings", &rows);
    context.insert("total", &total);
    render(&state, "buildings.html", &context)
}

pub async fn building(
    State(state): State<PortalState>,
    Path(id): Path<Uuid>,
) -> Result<Html<String>, PortalError> {
    let building = state.facilities.get_building(id).await?;
    let floors = state.facilities.building_floors(id).await?;
    let spaces = state.facilities.building_spaces(id).await?;

    let floor_names: HashMap<Uuid, String> =
        floors.iter().map(|f| (f.id, f.name.clone())).collect();
    let space_rows: Vec<views::SpaceRow> = spaces
        .into_iter()
        .map(|space| {
            let floor = floor_names.get(&space.floor_id).cloned().unwrap_or_default();
            views::SpaceRow::from_space(space, floor)
        })
        .collect();
    let floor_rows: Vec<views::FloorRow> = floors.into_iter().map(Into::into).collect();

    let mut context = Context::new();
    context.insert("building", &views::BuildingRow::from(building));
    context.insert("floors", &floor_rows);
    context.insert("spaces", &space_rows);
    render(&state, "building.html", &context)
}

/// Filter query for the asset list page. Values that fail to parse fall
/// back to an unfiltered page rather than erroring.
#[derive(Debug, Default, Deserialize)]
pub struct AssetPageQuery {
    pub status: Option<String>,
    pub search: Option<String>,
}

pub async fn assets_list(
    State(state): State<PortalState>,
    Query(filter): Query<AssetPageQuery>,
    Query(page): Query<PageQuery>,
) -> Result<Html<String>, PortalError> {
    let (limit, offset) = page.clamp();
    let list_filter = AssetListFilter {
        status: filter.status.as_deref().and_then(|s| s.parse().ok()),
        search: filter.search.clone().filter(|s| !s.trim().is_empty()),
        ..Default::default()
    };
    let (assets, total) = state.assets.list_assets(list_filter, limit, offset).await?;
    let rows: Vec<views::AssetRow> = assets.into_iter().map(Into::into).collect();

    let mut context = Context::new();
    context.insert("assets", &rows);
    context.insert("total", &total);
    context.insert("status", &filter.status.unwrap_or_default());
    context.insert("search", &filter.search.unwrap_or_default());
    render(&state, "assets.html", &context)
}

pub async fn asset(
    State(state): State<PortalState>,
    Path(id): Path<Uuid>,
) -> Result<Html<String>, PortalError> {
    let asset = state.assets.get_asset(id).await?;
    let now = Utc::now();

    let category = state
        .assets
        .get_category(asset.category_id)
        .await
        .map(|c| c.name)
        .unwrap_or_default();
    let space = match asset.space_id {
        Some(space_id) => state
            .facilities
            .get_space(space_id)
            .await
            .map(|s| format!("{} ({})", s.name, s.code))
            .unwrap_or_default(),
        None => String::new(),
    };

    let history: Vec<views::LogRow> = state
        .maintenance
        .asset_history(id, 10)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    let open_orders: Vec<views::WorkOrderRow> = state
        .work_orders
        .open_for_asset(id, 10)
        .await?
        .into_iter()
        .map(|order| views::WorkOrderRow::from_order(order, now))
        .collect();

    let mut context = Context::new();
    context.insert("asset", &views::AssetView::from_asset(asset, category, space));
    context.insert("history", &history);
    context.insert("open_work_orders", &open_orders);
    render(&state, "asset.html", &context)
}

/// Filter query for the work order list page
#[derive(Debug, Default, Deserialize)]
pub struct WorkOrderPageQuery {
    pub status: Option<String>,
    pub overdue: Option<bool>,
}

pub async fn work_orders_list(
    State(state): State<PortalState>,
    Query(filter): Query<WorkOrderPageQuery>,
    Query(page): Query<PageQuery>,
) -> Result<Html<String>, PortalError> {
    let (limit, offset) = page.clamp();
    let list_filter = WorkOrderListFilter {
        status: filter.status.as_deref().and_then(|s| s.parse().ok()),
        overdue: filter.overdue.unwrap_or(false),
        ..Default::default()
    };
    let (orders, total) = state
        .work_orders
        .list_work_orders(list_filter, limit, offset)
        .await?;
    let now = Utc::now();
    let rows: Vec<views::WorkOrderRow> = orders
        .into_iter()
        .map(|order| views::WorkOrderRow::from_order(order, now))
        .collect();

    let mut context = Context::new();
    context.insert("work_orders", &rows);
    context.insert("total", &total);
    context.insert("status", &filter.status.unwrap_or_default());
    render(&state, "work_orders.html", &context)
}

pub async fn work_order(
    State(state): State<PortalState>,
    Path(id): Path<Uuid>,
) -> Result<Html<String>, PortalError> {
    let order = state.work_orders.get_work_order(id).await?;
    let comments = state.work_orders.comments(id).await?;
    let now = Utc::now();

    let asset = match order.asset_id {
        Some(asset_id) => state
            .assets
            .get_asset(asset_id)
            .await
            .map(|a| format!("{} ({})", a.name, a.code))
            .unwrap_or_default(),
        None => String::new(),
    };
    let space = match order.space_id {
        Some(space_id) => state
            .facilities
            .get_space(space_id)
            .await
            .map(|s| format!("{} ({})", s.name, s.code))
            .unwrap_or_default(),
        None => String::new(),
    };

    // One lookup per distinct user across the order and its comments
    let mut names: HashMap<Uuid, String> = HashMap::new();
    let referenced = order
        .requested_by
        .into_iter()
        .chain(order.assigned_to)
        .chain(comments.iter().filter_map(|c| c.author_id));
    for user_id in referenced {
        if names.contains_key(&user_id) {
            continue;
        }
        let name = state
            .accounts
            .get_user(user_id)
            .await
            .map(|u| u.name)
            .unwrap_or_default();
        names.insert(user_id, name);
    }
    let display =
        |id: Option<Uuid>| id.and_then(|id| names.get(&id).cloned()).unwrap_or_default();

    let requested_by = display(order.requested_by);
    let assigned_to = display(order.assigned_to);
    let comment_rows: Vec<views::CommentRow> = comments
        .into_iter()
        .map(|comment| {
            let author = display(comment.author_id);
            views::CommentRow::from_comment(comment, author)
        })
        .collect();
    let view = views::WorkOrderView::from_order(order, now, asset, space, requested_by, assigned_to);

    let mut context = Context::new();
    context.insert("order", &view);
    context.insert("comments", &comment_rows);
    render(&state, "work_order.html", &context)
}
