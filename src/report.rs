//! Human-readable views of a pool, for drivers and diagnostics.
//!
//! Everything here only reads pool state, so it can be printed at any point without
//! affecting later placements.

use std::fmt;

use crate::pool::Pool;

/// Block-by-block listing of a pool's live allocations, in address order.
///
/// Returned by [`Pool::listing`]; format it with `{}`.
#[derive(Clone, Copy, Debug)]
pub struct Listing<'a> {
  pool: &'a Pool,
}

impl<'a> Listing<'a> {
  pub(crate) fn new(pool: &'a Pool) -> Self {
    Self { pool }
  }
}

impl fmt::Display for Listing<'_> {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>,
  ) -> fmt::Result {
    if self.pool.is_empty() {
      return write!(f, "no blocks allocated");
    }

    write!(f, "allocated blocks:")?;

    for allocation in self.pool.allocations() {
      write!(
        f,
        "\n - start: {} | size: {} bytes",
        allocation.start(),
        allocation.size()
      )?;
    }

    Ok(())
  }
}
