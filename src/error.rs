use thiserror::Error;

/// Errors reported by pool operations.
#[derive(Debug, Error, Eq, PartialEq)]
#[non_exhaustive]
pub enum Error {
  /// Either the backing buffer could not be acquired, or no free gap in the pool is large
  /// enough for the request. Nothing is retried and no state changes.
  #[error("out of memory: no room for {requested} bytes")]
  OutOfMemory {
    /// The number of bytes that could not be provided.
    requested: usize,
  },

  /// The request itself was malformed, e.g. a zero-size allocation.
  #[error("invalid argument: {reason}")]
  InvalidArgument {
    /// A human-readable description of the problem.
    reason: &'static str,
  },

  /// A strict release named an offset that has no live allocation in this pool.
  #[error("no live allocation at offset {offset}")]
  NotFound {
    /// The offset carried by the rejected handle.
    offset: usize,
  },
}

/// A specialized `Result` type for pool operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
  use std::fmt::Debug;

  use static_assertions::assert_impl_all;

  use super::*;

  assert_impl_all!(Error: Send, Sync, Debug);

  #[test]
  fn test_messages() {
    assert_eq!(
      Error::OutOfMemory { requested: 1000 }.to_string(),
      "out of memory: no room for 1000 bytes"
    );
    assert_eq!(
      Error::NotFound { offset: 64 }.to_string(),
      "no live allocation at offset 64"
    );
    assert_eq!(
      Error::InvalidArgument {
        reason: "allocation size must be greater than zero"
      }
      .to_string(),
      "invalid argument: allocation size must be greater than zero"
    );
  }
}
