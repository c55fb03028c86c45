//! Raw sequence indexing.
//!
//! This module is the single home for unchecked memory access in the
//! runtime. The sequence is caller-owned and the runtime tracks no length;
//! `index_arr` reads exactly where it is told to. Code generators that want
//! bounds enforcement emit calls to the checked variants instead.

use derive_more::{Display, Error};

/// Read the element at `i` from a contiguous sequence of integers.
///
/// Zero-overhead by design: no bounds check, no null check. An offset
/// outside the caller's allocation is undefined behavior, not a reported
/// error.
///
/// Signature: `(arr: ptr, i: i32) -> i32`
///
/// # Safety
///
/// `arr` must point into an allocation of `i32`s and `i` must index within
/// that allocation, as known to the caller.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn index_arr(arr: *const i32, i: i32) -> i32 {
    unsafe { *arr.offset(i as isize) }
}

/// Out-of-range access reported by the checked indexing variants.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("index {index} out of range for sequence of length {len}")]
pub struct IndexError {
    pub index: i64,
    pub len: usize,
}

/// Bounds-checked read from a sequence.
///
/// Contract extension over [`index_arr`]: negative and past-the-end indices
/// yield an [`IndexError`] instead of undefined behavior.
pub fn index_checked(seq: &[i32], index: i64) -> Result<i32, IndexError> {
    usize::try_from(index)
        .ok()
        .and_then(|i| seq.get(i).copied())
        .ok_or(IndexError {
            index,
            len: seq.len(),
        })
}

/// C-ABI bounds-checked read, for code generators emitting checked loads.
///
/// On success writes the element through `out` and returns true. On an
/// out-of-range `index` returns false and leaves `out` untouched.
///
/// Signature: `(arr: ptr, len: i64, index: i64, out: ptr) -> i1`
///
/// # Safety
///
/// `arr` must point to at least `len` readable `i32`s and `out` must be
/// valid for a single `i32` write.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn laurel_index_checked(
    arr: *const i32,
    len: u64,
    index: i64,
    out: *mut i32,
) -> bool {
    let Ok(len) = usize::try_from(len) else {
        return false;
    };
    let seq = unsafe { std::slice::from_raw_parts(arr, len) };
    match index_checked(seq, index) {
        Ok(value) => {
            unsafe { out.write(value) };
            true
        }
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_arr_read_through() {
        let seq = [10, 20, 30];
        unsafe {
            assert_eq!(index_arr(seq.as_ptr(), 0), 10);
            assert_eq!(index_arr(seq.as_ptr(), 1), 20);
            assert_eq!(index_arr(seq.as_ptr(), 2), 30);
        }
    }

    #[test]
    fn test_index_checked_in_range() {
        let seq = [10, 20, 30];
        assert_eq!(index_checked(&seq, 1), Ok(20));
    }

    #[test]
    fn test_index_checked_out_of_range() {
        let seq = [10, 20, 30];
        let err = index_checked(&seq, 3).unwrap_err();
        assert_eq!(err.index, 3);
        assert_eq!(err.len, 3);
        assert_eq!(
            err.to_string(),
            "index 3 out of range for sequence of length 3"
        );
    }

    #[test]
    fn test_index_checked_negative() {
        let seq = [10, 20, 30];
        assert!(index_checked(&seq, -1).is_err());
    }

    #[test]
    fn test_index_checked_empty() {
        assert!(index_checked(&[], 0).is_err());
    }

    #[test]
    fn test_ffi_checked_success() {
        let seq = [10, 20, 30];
        let mut out = 0;
        let ok = unsafe { laurel_index_checked(seq.as_ptr(), 3, 1, &mut out) };
        assert!(ok);
        assert_eq!(out, 20);
    }

    #[test]
    fn test_ffi_checked_failure_leaves_out_untouched() {
        let seq = [10, 20, 30];
        let mut out = -99;
        let ok = unsafe { laurel_index_checked(seq.as_ptr(), 3, 7, &mut out) };
        assert!(!ok);
        assert_eq!(out, -99);

        let ok = unsafe { laurel_index_checked(seq.as_ptr(), 3, -1, &mut out) };
        assert!(!ok);
        assert_eq!(out, -99);
    }
}
