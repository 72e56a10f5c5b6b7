// src/presentation/http/middleware/rate_limit.rs
use ::governor::middleware::NoOpMiddleware;
use axum::body::Body;
use std::sync::OnceLock;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor,
};

pub type RateLimitLayer = GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware, Body>;

const REQUESTS_PER_SECOND: u64 = 10;
const BURST_SIZE: u32 = 20;

/// Per-client-IP limiter shared by every router built in this process.
///
/// Returns `None` if the governor rejects the quota, in which case the router is
/// served without limiting and a warning is logged once.
pub fn rate_limit_layer() -> Option<RateLimitLayer> {
    static RATE_LIMITER: OnceLock<Option<RateLimitLayer>> = OnceLock::new();

    RATE_LIMITER
        .get_or_init(|| {
            let mut builder = GovernorConfigBuilder::default();
            builder.per_second(REQUESTS_PER_SECOND);
            builder.burst_size(BURST_SIZE);
            let config = builder.key_extractor(SmartIpKeyExtractor).finish();

            if config.is_none() {
                tracing::warn!(
                    per_second = REQUESTS_PER_SECOND,
                    burst = BURST_SIZE,
                    "invalid rate limit quota; limiter disabled"
                );
            }
            config.map(GovernorLayer::new)
        })
        .clone()
}
