/// Bookkeeping record for one live reservation inside a pool.
///
/// `start` is an offset from the beginning of the pool buffer. A record never
/// describes an empty range.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Allocation {
  start: usize,
  size: usize,
}

impl Allocation {
  pub(crate) fn new(
    start: usize,
    size: usize,
  ) -> Self {
    debug_assert!(size > 0, "allocation records are never empty");
    Self { start, size }
  }

  pub fn start(&self) -> usize {
    self.start
  }

  pub fn size(&self) -> usize {
    self.size
  }

  /// One past the last byte covered by this allocation.
  pub fn end(&self) -> usize {
    self.start + self.size
  }
}
