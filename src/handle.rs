use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_POOL_ID: AtomicU64 = AtomicU64::new(0);

/// Hands out a process-unique id for every constructed pool.
pub(crate) fn next_pool_id() -> u64 {
  NEXT_POOL_ID.fetch_add(1, Ordering::Relaxed)
}

/// Opaque reference to one allocation, returned by [`Pool::allocate`](crate::Pool::allocate).
///
/// A handle remembers which pool issued it, so presenting it to another pool never matches
/// anything there. Handles cannot be built by callers; the only way to get one is to
/// allocate.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Handle {
  pool_id: u64,
  offset: usize,
}

impl Handle {
  pub(crate) fn new(
    pool_id: u64,
    offset: usize,
  ) -> Self {
    Self { pool_id, offset }
  }

  /// Offset of the allocation from the start of the pool buffer.
  pub fn offset(&self) -> usize {
    self.offset
  }

  pub(crate) fn pool_id(&self) -> u64 {
    self.pool_id
  }
}
