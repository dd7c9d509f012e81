//! OpenAPI document served at `/api/openapi.json`
//!
//! The modules annotate their DTOs with `ToSchema`; the server gathers
//! them into a single components document.

use axum::Json;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Siteworks API",
        description = "Facilities, assets, maintenance and work order management"
    ),
    components(schemas(
        // Facilities
        facilities::api::rest::dto::BuildingDto,
        facilities::api::rest::dto::CreateBuildingRequest,
        facilities::api::rest::dto::UpdateBuildingRequest,
        facilities::api::rest::dto::FloorDto,
        facilities::api::rest::dto::CreateFloorRequest,
        facilities::api::rest::dto::UpdateFloorRequest,
        facilities::api::rest::dto::SpaceDto,
        facilities::api::rest::dto::CreateSpaceRequest,
        facilities::api::rest::dto::UpdateSpaceRequest,
        facilities::api::rest::dto::BuildingsListResponse,
        facilities::api::rest::dto::FloorsListResponse,
        facilities::api::rest::dto::SpacesListResponse,
        // Assets
        assets::api::rest::dto::CategoryDto,
        assets::api::rest::dto::CategoryTreeNodeDto,
        assets::api::rest::dto::CreateCategoryRequest,
        assets::api::rest::dto::UpdateCategoryRequest,
        assets::api::rest::dto::MoveCategoryRequest,
        assets::api::rest::dto::AssetDto,
        assets::api::rest::dto::CreateAssetRequest,
        assets::api::rest::dto::UpdateAssetRequest,
        assets::api::rest::dto::ChangeAssetStatusRequest,
        assets::api::rest::dto::CategoriesListResponse,
        assets::api::rest::dto::CategoryTreeResponse,
        assets::api::rest::dto::CategoryChildrenResponse,
        assets::api::rest::dto::AssetsListResponse,
        // Maintenance
        maintenance::api::rest::dto::ScheduleDto,
        maintenance::api::rest::dto::CreateScheduleRequest,
        maintenance::api::rest::dto::UpdateScheduleRequest,
        maintenance::api::rest::dto::LogDto,
        maintenance::api::rest::dto::CreateLogRequest,
        maintenance::api::rest::dto::UpdateLogRequest,
        maintenance::api::rest::dto::SchedulesListResponse,
        maintenance::api::rest::dto::LogsListResponse,
        // Work orders
        work_orders::api::rest::dto::WorkOrderDto,
        work_orders::api::rest::dto::CreateWorkOrderRequest,
        work_orders::api::rest::dto::UpdateWorkOrderRequest,
        work_orders::api::rest::dto::ChangeStatusRequest,
        work_orders::api::rest::dto::AssignRequest,
        work_orders::api::rest::dto::CommentDto,
        work_orders::api::rest::dto::CreateCommentRequest,
        work_orders::api::rest::dto::AttachmentDto,
        work_orders::api::rest::dto::WorkOrdersListResponse,
        work_orders::api::rest::dto::CommentsListResponse,
        work_orders::api::rest::dto::AttachmentsListResponse,
        // Accounts
        accounts::api::rest::dto::UserDto,
        accounts::api::rest::dto::CreateUserRequest,
        accounts::api::rest::dto::UpdateUserRequest,
        accounts::api::rest::dto::ChangePasswordRequest,
        accounts::api::rest::dto::LoginRequest,
        accounts::api::rest::dto::LoginResponse,
        accounts::api::rest::dto::UsersListResponse,
    ))
)]
pub struct ApiDoc;

/// Handler behind `/api/openapi.json`
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_carries_the_module_schemas() {
        let doc = ApiDoc::openapi();
        let components = doc.components.unwrap();
        for name in [
            "BuildingDto",
            "AssetDto",
            "ScheduleDto",
            "WorkOrderDto",
            "UserDto",
            "LoginRequest",
            "WorkOrdersListResponse",
        ] {
            assert!(components.schemas.contains_key(name), "missing schema {name}");
        }
    }
}
