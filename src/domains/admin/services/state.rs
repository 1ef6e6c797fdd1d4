// Admin domain state
use std::sync::Arc;

use crate::domains::admin::services::AdminService;
use crate::shared::database::UserStore;

#[derive(Clone)]
pub struct AdminState {
    pub admin_service: AdminService,
}

impl AdminState {
    pub fn new(users: Arc<dyn UserStore>, platform: String, polka_key: String) -> Self {
        Self {
            admin_service: AdminService::new(users, platform, polka_key),
        }
    }
}
