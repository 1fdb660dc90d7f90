//! Counting inversions of a sequence.
//!
//! An inversion of `a` is a pair of indices `(i, j)` with `i < j` and
//! `a[i] > a[j]`.
//!
//! - [`seq`]: merge-based counting in $O(n\log(n))$ time.
//! - [`naive`]: insertion-based counting in $O(n^2)$ time, kept as an oracle.
//! - [`io`]: reading a sequence of integers from a line of text.
//! - [`random`]: seeded generators for tests and benchmarks.
//!
//! ```
//! use invcount::{naive::count_inversions_slow, seq::count_inversions_fast};
//!
//! let a = [2, 4, 1, 3, 5];
//! assert_eq!(count_inversions_fast(&a), 3);
//! assert_eq!(count_inversions_slow(&a), 3);
//! ```

inner::doc_inline_reexport! {
    seq,
    naive,
    io,
    random,
}
