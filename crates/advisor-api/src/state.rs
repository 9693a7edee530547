//! Application state management

use advisor_core::{AnswerEngine, AppConfig, RecommendationSource};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Application state shared across handlers.
///
/// Everything here is read-only after startup, so handlers share it through
/// an `Arc` without locking.
pub struct AppState {
    /// Application configuration
    pub config: AppConfig,
    /// Server start time
    pub start_time: Instant,
    /// Request counter
    pub request_count: AtomicU64,
    /// Retrieval-plus-generation engine
    pub engine: Arc<dyn AnswerEngine>,
    /// Downstream recommendation lookup
    pub recommendations: Arc<dyn RecommendationSource>,
}

impl AppState {
    /// Create new application state
    pub fn new(
        config: AppConfig,
        engine: Arc<dyn AnswerEngine>,
        recommendations: Arc<dyn RecommendationSource>,
    ) -> Self {
        Self {
            config,
            start_time: Instant::now(),
            request_count: AtomicU64::new(0),
            engine,
            recommendations,
        }
    }

    /// Increment request counter
    pub fn increment_requests(&self) -> u64 {
        self.request_count.fetch_add(1, Ordering::SeqCst)
    }

    /// Get total request count
    pub fn get_request_count(&self) -> u64 {
        self.request_count.load(Ordering::SeqCst)
    }

    /// Get uptime in seconds
    pub fn uptime_secs(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
