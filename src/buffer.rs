use std::{ptr::NonNull, slice};

use crate::error::{Error, Result};

/// The contiguous region a pool hands out sub-ranges of.
///
/// Memory comes from the C allocator and is zero-filled on acquisition, so every byte is
/// initialized and can be viewed through ordinary slices.
pub(crate) struct Buffer {
  ptr: NonNull<u8>,
  len: usize,
}

// The region is owned exclusively by one `Buffer` and never aliased elsewhere.
unsafe impl Send for Buffer {}

impl Buffer {
  pub(crate) fn acquire(len: usize) -> Result<Self> {
    if len == 0 {
      return Ok(Self {
        ptr: NonNull::dangling(),
        len,
      });
    }

    // Slices cannot span more than isize::MAX bytes.
    if isize::try_from(len).is_err() {
      return Err(Error::OutOfMemory { requested: len });
    }

    let raw = unsafe { libc::calloc(len, 1) }.cast::<u8>();

    let ptr = NonNull::new(raw).ok_or(Error::OutOfMemory { requested: len })?;

    Ok(Self { ptr, len })
  }

  pub(crate) fn len(&self) -> usize {
    self.len
  }

  pub(crate) fn as_slice(&self) -> &[u8] {
    // Either a live calloc region of `len` bytes or a dangling pointer with `len == 0`.
    unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
  }

  pub(crate) fn as_mut_slice(&mut self) -> &mut [u8] {
    unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
  }
}

impl Drop for Buffer {
  fn drop(&mut self) {
    if self.len == 0 {
      return;
    }

    unsafe { libc::free(self.ptr.as_ptr().cast()) };
  }
}
