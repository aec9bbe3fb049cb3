use crate::config::GatewayConfig;
use crate::directory::StaticDirectory;
use crate::rate_limit::RateLimiter;
use matchmaking::Matchmaker;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<Matchmaker>,
    pub rate_limiter: Arc<RateLimiter>,
    pub directory: Arc<StaticDirectory>,
    pub config: Arc<GatewayConfig>,
}

impl AppState {
    pub fn new(config: GatewayConfig) -> Self {
        let directory = Arc::new(StaticDirectory::new(config.seed_identities.clone()));
        Self {
            engine: Arc::new(Matchmaker::new()),
            rate_limiter: Arc::new(RateLimiter::new()),
            directory,
            config: Arc::new(config),
        }
    }
}
