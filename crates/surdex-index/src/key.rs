//! Surname key comparison.
//!
//! Keys compare by ASCII case folding only: bytes `A`..`Z` fold to `a`..`z`
//! and every other byte, including the bytes of multi-byte UTF-8 sequences,
//! compares as-is. The ordering is locale-independent.

use std::cmp::Ordering;

/// Case-insensitive lexicographic comparison of two surnames.
#[inline]
pub fn compare_names(a: &str, b: &str) -> Ordering {
    let a = a.bytes().map(|c| c.to_ascii_lowercase());
    let b = b.bytes().map(|c| c.to_ascii_lowercase());
    a.cmp(b)
}

/// Case-insensitive surname equality.
#[inline]
pub fn names_equal(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
}
