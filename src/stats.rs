use std::{fmt, iter::FusedIterator};

use crate::allocation::Allocation;

/// A run of free bytes between live allocations (or the pool boundaries).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Gap {
  start: usize,
  size: usize,
}

impl Gap {
  pub fn start(&self) -> usize {
    self.start
  }

  pub fn size(&self) -> usize {
    self.size
  }

  /// One past the last free byte of the run.
  pub fn end(&self) -> usize {
    self.start + self.size
  }
}

/// Non-empty free runs of a pool in address order, derived from the allocation list.
#[derive(Clone, Debug)]
pub struct FreeRuns<'a> {
  allocations: &'a [Allocation],
  cursor: usize,
  capacity: usize,
  tail_done: bool,
}

impl<'a> FreeRuns<'a> {
  pub(crate) fn new(
    allocations: &'a [Allocation],
    capacity: usize,
  ) -> Self {
    Self {
      allocations,
      cursor: 0,
      capacity,
      tail_done: false,
    }
  }
}

impl Iterator for FreeRuns<'_> {
  type Item = Gap;

  fn next(&mut self) -> Option<Gap> {
    while let Some((current, rest)) = self.allocations.split_first() {
      let gap = Gap {
        start: self.cursor,
        size: current.start() - self.cursor,
      };

      self.cursor = current.end();
      self.allocations = rest;

      if gap.size > 0 {
        return Some(gap);
      }
    }

    if self.tail_done {
      return None;
    }
    self.tail_done = true;

    (self.cursor < self.capacity).then(|| Gap {
      start: self.cursor,
      size: self.capacity - self.cursor,
    })
  }
}

impl FusedIterator for FreeRuns<'_> {}

/// Summary of a pool's occupancy, derived in a single pass over its allocations.
///
/// `total_allocated + total_free` always equals the pool capacity.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Stats {
  pub count: usize,
  pub total_allocated: usize,
  pub total_free: usize,
  /// The largest request that can currently succeed.
  pub largest_free_run: usize,
  pub free_fragment_count: usize,
}

impl Stats {
  pub(crate) fn collect(
    allocations: &[Allocation],
    capacity: usize,
  ) -> Self {
    let mut stats = Stats {
      count: allocations.len(),
      total_allocated: allocations.iter().map(|allocation| allocation.size()).sum(),
      ..Stats::default()
    };

    for gap in FreeRuns::new(allocations, capacity) {
      stats.total_free += gap.size;
      stats.free_fragment_count += 1;
      stats.largest_free_run = stats.largest_free_run.max(gap.size);
    }

    stats
  }

  /// Share of free space outside the largest free run: 0.0 when contiguous (or full).
  pub fn fragmentation(&self) -> f64 {
    if self.total_free == 0 {
      return 0.0;
    }

    1.0 - self.largest_free_run as f64 / self.total_free as f64
  }
}

impl fmt::Display for Stats {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>,
  ) -> fmt::Result {
    writeln!(f, "=== pool statistics ===")?;
    writeln!(f, "total allocations: {}", self.count)?;
    writeln!(f, "total allocated: {} bytes", self.total_allocated)?;
    writeln!(f, "total free: {} bytes", self.total_free)?;
    writeln!(f, "largest contiguous free run: {} bytes", self.largest_free_run)?;
    write!(f, "free fragments: {}", self.free_fragment_count)
  }
}
