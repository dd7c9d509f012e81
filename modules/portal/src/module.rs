//! Module declaration and router assembly

use crate::templates;
use accounts::AccountsApi;
use anyhow::Result;
use assets::AssetsApi;
use axum::Router;
use facilities::FacilitiesApi;
use maintenance::MaintenanceApi;
use std::sync::Arc;
use tera::Tera;
use work_orders::WorkOrdersApi;

/// Shared state for the portal handlers: the compiled template set plus
/// the contract clients of every module the pages read from.
#[derive(Clone)]
pub struct PortalState {
    pub tera: Arc<Tera>,
    pub facilities: Arc<dyn FacilitiesApi>,
    pub assets: Arc<dyn AssetsApi>,
    pub maintenance: Arc<dyn MaintenanceApi>,
    pub work_orders: Arc<dyn WorkOrdersApi>,
    pub accounts: Arc<dyn AccountsApi>,
}

/// Portal module: read-only server-rendered HTML over the other modules'
/// native clients. No database of its own and no write endpoints.
pub struct PortalModule {
    state: PortalState,
}

impl PortalModule {
    /// Compile the embedded templates and wire the contract clients.
    pub fn new(
        facilities: Arc<dyn FacilitiesApi>,
        assets: Arc<dyn AssetsApi>,
        maintenance: Arc<dyn MaintenanceApi>,
        work_orders: Arc<dyn WorkOrdersApi>,
        accounts: Arc<dyn AccountsApi>,
    ) -> Result<Self> {
        let tera = Arc::new(templates::build()?);
        Ok(Self {
            state: PortalState {
                tera,
                facilities,
                assets,
                maintenance,
                work_orders,
                accounts,
            },
        })
    }

    /// The portal router; mount it at the site root, outside the API
    /// auth middleware.
    pub fn routes(&self) -> Router {
        crate::routes::router(self.state.clone())
    }
}
