//! # first_fit_pool - A First-Fit Pool Allocator
//!
//! This crate manages a single fixed-size buffer (the **pool**) and hands out sub-ranges of
//! it using a **first-fit** strategy. Only the buffer itself is requested from the system;
//! every allocation afterwards is pure bookkeeping over that one region.
//!
//! ## Overview
//!
//! ```text
//!   First-Fit Placement:
//!
//!   offset 0                                                     capacity
//!   ┌──────┬───────┬──────────┬────────┬────────────────────────────────┐
//!   │  A1  │  gap  │    A2    │  gap   │             tail               │
//!   └──────┴───────┴──────────┴────────┴────────────────────────────────┘
//!          ▲                  ▲        ▲
//!          │                  │        └── last resort: after the last block
//!          │                  └── checked second
//!          └── checked first: the lowest gap that fits wins
//! ```
//!
//! The pool stores only the list of **live** allocations, ordered by start offset. Free
//! space is never tracked separately; it is whatever lies between neighbouring
//! allocations. Placement and statistics both walk that one list, so they can never
//! disagree.
//!
//! ## Crate Structure
//!
//! ```text
//!   first_fit_pool
//!   ├── allocation - Allocation record (start, size)
//!   ├── buffer     - libc-backed backing region (internal)
//!   ├── error      - Error and Result
//!   ├── handle     - Opaque, pool-tagged allocation handles
//!   ├── pool       - Pool engine
//!   ├── report     - Printable listing of live blocks
//!   └── stats      - Free runs and occupancy statistics
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use first_fit_pool::Pool;
//!
//! let mut pool = Pool::new(1024)?;
//!
//! let first = pool.allocate(100)?;
//! let second = pool.allocate(200)?;
//! assert_eq!(first.offset(), 0);
//! assert_eq!(second.offset(), 100);
//!
//! pool.bytes_mut(second).unwrap().fill(0xAB);
//!
//! pool.release(first);
//!
//! // The freed space at the front is found again before the tail is considered.
//! let third = pool.allocate(50)?;
//! assert_eq!(third.offset(), 0);
//!
//! let stats = pool.stats();
//! assert_eq!(stats.total_allocated + stats.total_free, pool.capacity());
//! # Ok::<(), first_fit_pool::Error>(())
//! ```
//!
//! ## How It Works
//!
//! Allocation walks the list from the lowest offset with a cursor that starts at 0:
//!
//! ```text
//!   for each allocation `current`:
//!       gap = current.start - cursor
//!       gap >= size?  -> place at cursor, insert before `current`
//!       otherwise     -> cursor = current.end
//!   list exhausted    -> place at cursor if cursor + size <= capacity
//! ```
//!
//! Release finds the record with the matching start and removes it. The bytes are not
//! touched, and neighbouring free space is not merged eagerly; the next scan simply sees a
//! bigger gap.
//!
//! ## Limitations
//!
//! - **Single-threaded only**: a pool can move between threads but is not `Sync`
//! - **No alignment**: allocations start wherever the first fitting gap starts
//! - **Linear scans**: allocation is O(n) in the number of live allocations
//! - **Permissive release**: [`Pool::release`] ignores unknown handles; use
//!   [`Pool::try_release`] to detect double releases
//! - **Fixed capacity**: the pool never grows, shrinks or compacts

mod allocation;
mod buffer;
mod error;
mod handle;
mod pool;
mod report;
mod stats;

pub use allocation::Allocation;
pub use error::{Error, Result};
pub use handle::Handle;
pub use pool::{Allocations, Pool};
pub use report::Listing;
pub use stats::{FreeRuns, Gap, Stats};
