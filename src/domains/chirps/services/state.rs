// Chirps domain state
use std::sync::Arc;

use crate::domains::chirps::services::ChirpService;
use crate::shared::database::ChirpStore;

#[derive(Clone)]
pub struct ChirpState {
    pub chirp_service: ChirpService,
}

impl ChirpState {
    pub fn new(chirps: Arc<dyn ChirpStore>) -> Self {
        Self {
            chirp_service: ChirpService::new(chirps),
        }
    }
}
