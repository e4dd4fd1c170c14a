use std::sync::atomic::{AtomicU64, Ordering};

use tokio::task::AbortHandle;

/// Monotonic id of a fire-and-forget request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(u64);

static NEXT_REQUEST_ID: AtomicU64 = AtomicU64::new(1);

impl RequestId {
    pub fn next() -> Self {
        RequestId(NEXT_REQUEST_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

/// Handle to an in-flight request task.
///
/// Dropping the handle does not cancel the request; call [`cancel`](Self::cancel).
#[derive(Debug, Clone)]
pub struct RequestHandle {
    id: RequestId,
    abort: AbortHandle,
}

impl RequestHandle {
    pub fn new(id: RequestId, abort: AbortHandle) -> Self {
        Self { id, abort }
    }

    pub fn id(&self) -> RequestId {
        self.id
    }

    /// Abort the request task. A request that already delivered its
    /// response is unaffected.
    pub fn cancel(&self) {
        self.abort.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.abort.is_finished()
    }
}
