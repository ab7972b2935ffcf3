use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    time::Duration,
};

use tokio::time::Instant;

use crate::errors::AppError;

/// Per-request cancellation flag and deadline, shared by every layer a request
/// passes through.
#[derive(Clone, Debug, Default)]
pub struct RequestContext {
    cancelled: Arc<AtomicBool>,
    deadline: Option<Instant>,
}

impl RequestContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        RequestContext {
            cancelled: Arc::new(AtomicBool::new(false)),
            deadline: Some(Instant::now() + timeout),
        }
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    pub fn remaining(&self) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
    }

    /// Single non-blocking poll.
    pub fn check(&self) -> Result<(), AppError> {
        if self.is_cancelled() {
            return Err(AppError::Cancelled);
        }
        match self.remaining() {
            Some(remaining) if remaining.is_zero() => Err(AppError::Timeout),
            _ => Ok(()),
        }
    }

    /// The tighter of `limit` and whatever is left until the deadline.
    pub fn timeout(&self, limit: Duration) -> Duration {
        match self.remaining() {
            Some(remaining) => remaining.min(limit),
            None => limit,
        }
    }
}
