use crate::error::ApiError;
use std::future::{pending, Future};
use tokio::sync::watch;
use tracing::debug;

/// Last-request-wins guard for a view's primary fetch.
///
/// Every [`run`](LatestRequest::run) supersedes the one before it. A
/// superseded future is dropped, which aborts its HTTP request, and resolves
/// to [`ApiError::Cancelled`] so a stale response can never overwrite newer
/// state.
#[derive(Debug)]
pub struct LatestRequest {
    generation: watch::Sender<u64>,
}

impl Default for LatestRequest {
    fn default() -> Self {
        Self::new()
    }
}

impl LatestRequest {
    pub fn new() -> Self {
        let (generation, _) = watch::channel(0);
        Self { generation }
    }

    pub async fn run<F, T>(&self, request: F) -> Result<T, ApiError>
    where
        F: Future<Output = Result<T, ApiError>>,
    {
        let mut mine = 0;
        self.generation.send_modify(|g| {
            *g += 1;
            mine = *g;
        });
        let mut rx = self.generation.subscribe();

        tokio::select! {
            biased;
            _ = superseded(&mut rx, mine) => {
                debug!("Request #{} superseded, dropping it", mine);
                Err(ApiError::Cancelled)
            }
            result = request => result,
        }
    }

    /// Supersede whatever is in flight without starting anything new
    pub fn cancel(&self) {
        self.generation.send_modify(|g| *g += 1);
    }
}

async fn superseded(rx: &mut watch::Receiver<u64>, mine: u64) {
    loop {
        if *rx.borrow_and_update() != mine {
            return;
        }
        if rx.changed().await.is_err() {
            pending::<()>().await;
        }
    }
}
