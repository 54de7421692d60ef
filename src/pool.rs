use std::{fmt, iter::FusedIterator, slice};

use tracing::{debug, trace};

use crate::{
  allocation::Allocation,
  buffer::Buffer,
  error::{Error, Result},
  handle::{Handle, next_pool_id},
  report::Listing,
  stats::{FreeRuns, Stats},
};

/// A fixed-size buffer carved into allocations with a first-fit strategy.
///
/// The pool keeps exactly one piece of bookkeeping: the list of live allocations, ordered by
/// ascending start offset. Both placement and statistics are derived from that list; there
/// is no separate free-list to keep in sync.
pub struct Pool {
  id: u64,
  buffer: Buffer,
  allocations: Vec<Allocation>,
}

impl Pool {
  /// Creates a pool backed by a freshly acquired buffer of exactly `capacity` bytes.
  ///
  /// Fails with [`Error::OutOfMemory`] if the buffer cannot be acquired. A capacity of zero is
  /// accepted, but such a pool can never satisfy an allocation.
  pub fn new(capacity: usize) -> Result<Self> {
    let buffer = Buffer::acquire(capacity)?;
    let id = next_pool_id();

    debug!(pool_id = id, capacity, "pool created");

    Ok(Self {
      id,
      buffer,
      allocations: Vec::new(),
    })
  }

  pub fn capacity(&self) -> usize {
    self.buffer.len()
  }

  pub fn len(&self) -> usize {
    self.allocations.len()
  }

  pub fn is_empty(&self) -> bool {
    self.allocations.is_empty()
  }

  /// Reserves `size` bytes at the lowest-addressed gap that can hold them.
  ///
  /// The gaps are scanned in address order starting at offset 0; the request is carved from
  /// the start of the first gap that fits and any leftover stays free. The bytes are handed
  /// out as they are, whatever a previous owner wrote there.
  pub fn allocate(
    &mut self,
    size: usize,
  ) -> Result<Handle> {
    if size == 0 {
      debug!(pool_id = self.id, "rejected zero-size allocation");
      return Err(Error::InvalidArgument {
        reason: "allocation size must be greater than zero",
      });
    }

    let (index, start) = self.find_gap(size);

    let fits = start
      .checked_add(size)
      .is_some_and(|end| end <= self.capacity());

    if !fits {
      debug!(pool_id = self.id, size, "no gap large enough");
      return Err(Error::OutOfMemory { requested: size });
    }

    self.allocations.insert(index, Allocation::new(start, size));

    trace!(pool_id = self.id, offset = start, size, "allocated");

    Ok(Handle::new(self.id, start))
  }

  // Falls back to the tail after the last allocation; the caller checks that it fits.
  fn find_gap(
    &self,
    size: usize,
  ) -> (usize, usize) {
    let mut cursor = 0;

    for (index, current) in self.allocations.iter().enumerate() {
      if current.start() - cursor >= size {
        return (index, cursor);
      }

      cursor = current.end();
    }

    (self.allocations.len(), cursor)
  }

  /// Removes the allocation identified by `handle`.
  ///
  /// Unknown handles (already released, issued by another pool) are ignored, so releasing
  /// twice is harmless. Use [`Pool::try_release`] to be told about them instead. The released
  /// bytes are left untouched.
  pub fn release(
    &mut self,
    handle: Handle,
  ) {
    if self.try_release(handle).is_err() {
      debug!(
        pool_id = self.id,
        offset = handle.offset(),
        "ignored release of unknown handle"
      );
    }
  }

  /// Like [`Pool::release`] but fails with [`Error::NotFound`] if `handle` does not name a
  /// live allocation of this pool. The pool is unchanged in that case.
  pub fn try_release(
    &mut self,
    handle: Handle,
  ) -> Result<()> {
    let index = self.position(handle).ok_or(Error::NotFound {
      offset: handle.offset(),
    })?;

    let removed = self.allocations.remove(index);

    trace!(
      pool_id = self.id,
      offset = removed.start(),
      size = removed.size(),
      "released"
    );

    Ok(())
  }

  pub fn contains(
    &self,
    handle: Handle,
  ) -> bool {
    self.position(handle).is_some()
  }

  fn position(
    &self,
    handle: Handle,
  ) -> Option<usize> {
    if handle.pool_id() != self.id {
      return None;
    }

    self
      .allocations
      .binary_search_by_key(&handle.offset(), |allocation| allocation.start())
      .ok()
  }

  /// The bytes of a live allocation, or `None` if `handle` is stale or foreign.
  pub fn bytes(
    &self,
    handle: Handle,
  ) -> Option<&[u8]> {
    let allocation = self.allocations[self.position(handle)?];

    self.buffer.as_slice().get(allocation.start()..allocation.end())
  }

  /// Mutable access to the bytes of a live allocation, or `None` if `handle` is stale or
  /// foreign.
  pub fn bytes_mut(
    &mut self,
    handle: Handle,
  ) -> Option<&mut [u8]> {
    let allocation = self.allocations[self.position(handle)?];

    self
      .buffer
      .as_mut_slice()
      .get_mut(allocation.start()..allocation.end())
  }

  /// The live allocations in ascending address order.
  ///
  /// Each call reflects the current state of the pool.
  pub fn allocations(&self) -> Allocations<'_> {
    Allocations {
      inner: self.allocations.iter(),
    }
  }

  pub fn free_runs(&self) -> FreeRuns<'_> {
    FreeRuns::new(&self.allocations, self.capacity())
  }

  pub fn stats(&self) -> Stats {
    Stats::collect(&self.allocations, self.capacity())
  }

  pub fn listing(&self) -> Listing<'_> {
    Listing::new(self)
  }

  /// Equivalent to dropping the pool; handles issued by it are meaningless afterwards.
  pub fn teardown(self) {}
}

impl Drop for Pool {
  fn drop(&mut self) {
    debug!(
      pool_id = self.id,
      remaining = self.allocations.len(),
      "pool torn down"
    );
  }
}

impl fmt::Debug for Pool {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>,
  ) -> fmt::Result {
    f.debug_struct("Pool")
      .field("id", &self.id)
      .field("capacity", &self.capacity())
      .field("allocations", &self.allocations)
      .finish()
  }
}

/// Iterator over the live allocations of a [`Pool`], returned by [`Pool::allocations`].
#[derive(Clone, Debug)]
pub struct Allocations<'a> {
  inner: slice::Iter<'a, Allocation>,
}

impl Iterator for Allocations<'_> {
  type Item = Allocation;

  fn next(&mut self) -> Option<Allocation> {
    self.inner.next().copied()
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    self.inner.size_hint()
  }
}

impl DoubleEndedIterator for Allocations<'_> {
  fn next_back(&mut self) -> Option<Allocation> {
    self.inner.next_back().copied()
  }
}

impl ExactSizeIterator for Allocations<'_> {}

impl FusedIterator for Allocations<'_> {}
