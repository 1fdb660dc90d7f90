//! Inversion number by merge sort.
//!
//! An inversion of $a = (a_0, a_1, \dots, a_{n-1})$ is a pair $(i, j)$ with
//! $i < j$ and $a_i > a_j$. Equal elements never form an inversion.
//!
//! While merging two sorted runs $L$ and $R$, each time the head of $R$ is
//! taken before the rest of $L$, it is smaller than every element left in
//! $L$, so all of them form an inversion with it. Summing these over all
//! merges counts every inversion exactly once.
//!
//! # Examples
//! ```
//! use inversion::{count_inversions_bottom_up, count_inversions_fast, Inversion};
//!
//! let a = [2, 4, 1, 3, 5];
//! assert_eq!(count_inversions_fast(&a), 3);
//! assert_eq!(count_inversions_bottom_up(&a), 3);
//! assert_eq!(a.inversion(), 3);
//! assert_eq!(a, [2, 4, 1, 3, 5]);
//! ```

/// Number of inversions. $n(n-1)/2$ exceeds `u32` already for
/// $n > 65536$.
pub type InversionCount = u64;

pub trait Inversion {
    fn inversion(&self) -> InversionCount;
}

impl<T: Ord + Clone> Inversion for [T] {
    fn inversion(&self) -> InversionCount { count_inversions_fast(self) }
}

/// Counts inversions by top-down merge sort.
///
/// Works on a private copy of `a`, together with one scratch buffer of the
/// same length which is split alongside the copy, so that every merge uses
/// its own disjoint part of it.
///
/// # Complexity
/// $O(n\log(n))$ time, $O(n)$ auxiliary space, recursion depth
/// $O(\log(n))$.
///
/// # Examples
/// ```
/// use inversion::count_inversions_fast;
///
/// assert_eq!(count_inversions_fast::<i32>(&[]), 0);
/// assert_eq!(count_inversions_fast(&[5, 4, 3, 2, 1]), 10);
/// assert_eq!(count_inversions_fast(&[2, 2, 2]), 0);
/// ```
pub fn count_inversions_fast<T: Ord + Clone>(a: &[T]) -> InversionCount {
    let mut work = a.to_vec();
    let mut buf = a.to_vec();
    sort_count(&mut work, &mut buf)
}

/// Counts inversions by bottom-up merge sort.
///
/// Same as [`count_inversions_fast`], but merges windows of width
/// $1, 2, 4, \dots$ in a loop instead of recursing.
///
/// # Complexity
/// $O(n\log(n))$ time, $O(n)$ auxiliary space.
pub fn count_inversions_bottom_up<T: Ord + Clone>(a: &[T]) -> InversionCount {
    let n = a.len();
    let mut work = a.to_vec();
    let mut buf = a.to_vec();
    let mut res = 0;
    let mut width = 1;
    while width < n {
        for lo in (0..n).step_by(2 * width) {
            let mid = lo + width;
            if mid >= n {
                break;
            }
            let hi = n.min(mid + width);
            res += merge_count(&mut work[lo..hi], width, &mut buf[lo..hi]);
        }
        width *= 2;
    }
    res
}

/// Sorts `a` stably and returns it with its inversion number.
///
/// ```
/// use inversion::sort_and_count;
///
/// assert_eq!(sort_and_count(vec![3, 1, 2]), (vec![1, 2, 3], 2));
/// ```
pub fn sort_and_count<T: Ord + Clone>(
    mut a: Vec<T>,
) -> (Vec<T>, InversionCount) {
    let mut buf = a.clone();
    let count = sort_count(&mut a, &mut buf);
    (a, count)
}

fn sort_count<T: Ord + Clone>(a: &mut [T], buf: &mut [T]) -> InversionCount {
    debug_assert_eq!(a.len(), buf.len());

    let n = a.len();
    if n <= 1 {
        return 0;
    }

    // the left half gets the extra element if `n` is odd
    let mid = n - n / 2;
    let within = {
        let (al, ar) = a.split_at_mut(mid);
        let (bl, br) = buf.split_at_mut(mid);
        sort_count(al, bl) + sort_count(ar, br)
    };
    within + merge_count(a, mid, buf)
}

/// Merges sorted `a[..mid]` and `a[mid..]` through `buf`, and returns the
/// number of pairs $(i, j)$ with $i < \mathrm{mid} \le j$ and $a_i > a_j$.
fn merge_count<T: Ord + Clone>(
    a: &mut [T],
    mid: usize,
    buf: &mut [T],
) -> InversionCount {
    let n = a.len();
    let (mut i, mut j) = (0, mid);
    let mut res = 0;
    for dst in buf.iter_mut() {
        if i < mid && (j == n || a[i] <= a[j]) {
            *dst = a[i].clone();
            i += 1;
        } else {
            *dst = a[j].clone();
            j += 1;
            // `a[i..mid]` are all greater than `a[j]`
            res += (mid - i) as InversionCount;
        }
    }
    a.clone_from_slice(buf);
    res
}

#[cfg(test)]
use std::collections::BTreeMap;

#[cfg(test)]
use naive_inversion::count_inversions_slow;
#[cfg(test)]
use rand::SeedableRng;
#[cfg(test)]
use rand_chacha::ChaCha20Rng;
#[cfg(test)]
use randgen::{Gen, Permutation, Values};

#[test]
fn sanity_check() {
    let empty: [i64; 0] = [];
    assert_eq!(count_inversions_fast(&empty), 0);
    assert_eq!(count_inversions_fast(&[42]), 0);
    assert_eq!(count_inversions_fast(&[-7]), 0);

    assert_eq!(count_inversions_fast(&[2, 4, 1, 3, 5]), 3);
    assert_eq!(count_inversions_fast(&[1, 5, 4, 2, 3]), 5);
    assert_eq!(count_inversions_fast(&[1, 2, 3, 4, 5]), 0);
    assert_eq!(count_inversions_fast(&[5, 4, 3, 2, 1]), 10);
    assert_eq!(count_inversions_fast(&[1, 1, 1, 1, 1]), 0);
    assert_eq!(count_inversions_fast(&[2, 2, 2]), 0);
    assert_eq!(count_inversions_fast(&[2, 1, 2, 1]), 3);
    assert_eq!(count_inversions_fast(&[i64::MAX, i64::MIN]), 1);

    assert_eq!(count_inversions_bottom_up(&empty), 0);
    assert_eq!(count_inversions_bottom_up(&[2, 4, 1, 3, 5]), 3);
    assert_eq!(count_inversions_bottom_up(&[5, 4, 3, 2, 1]), 10);
    assert_eq!(count_inversions_bottom_up(&[2, 1, 2, 1]), 3);

    assert_eq!([2, 4, 1, 3, 5].inversion(), 3);
    assert_eq!(["b", "a", "c"].inversion(), 1);
}

#[test]
fn same_as_slow() {
    // every sequence over {0, 1, 2, 3} of length up to 7
    for len in 0..=7 {
        for a in (0..4_u32.pow(len)).map(|x| {
            std::iter::successors(Some(x), |x| Some(x / 4))
                .map(|x| x % 4)
                .take(len as usize)
                .collect::<Vec<_>>()
        }) {
            let expected = count_inversions_slow(&a);
            assert_eq!(count_inversions_fast(&a), expected, "{a:?}");
            assert_eq!(count_inversions_bottom_up(&a), expected, "{a:?}");
        }
    }
}

#[test]
fn same_as_slow_random() {
    let mut rng = ChaCha20Rng::from_seed([0; 32]);
    for len in (0..300).step_by(7) {
        for bound in [-3..3, -1_000_000_000..1_000_000_000] {
            let a = Values { bound, len }.generate(&mut rng);
            let expected = count_inversions_slow(&a);
            assert_eq!(count_inversions_fast(&a), expected);
            assert_eq!(count_inversions_bottom_up(&a), expected);
        }
    }
}

#[test]
fn monotone() {
    for n in [2_u64, 3, 10, 1000, 1025] {
        let asc: Vec<_> = (1..=n as i64).collect();
        let desc: Vec<_> = asc.iter().rev().copied().collect();
        assert_eq!(count_inversions_fast(&asc), 0);
        assert_eq!(count_inversions_bottom_up(&asc), 0);
        assert_eq!(count_inversions_fast(&desc), n * (n - 1) / 2);
        assert_eq!(count_inversions_bottom_up(&desc), n * (n - 1) / 2);
    }
}

#[test]
fn wide_count() {
    let n = 100_000_u64;
    let desc: Vec<_> = (0..n as i64).rev().collect();
    let expected = n * (n - 1) / 2;
    assert!(expected > u32::MAX as u64);
    assert_eq!(count_inversions_fast(&desc), expected);
    assert_eq!(count_inversions_bottom_up(&desc), expected);
}

#[test]
fn input_untouched() {
    let mut rng = ChaCha20Rng::from_seed([1; 32]);
    let a = Values { bound: -50..50, len: 500 }.generate(&mut rng);
    let copy = a.clone();
    count_inversions_fast(&a);
    assert_eq!(a, copy);
    count_inversions_bottom_up(&a);
    assert_eq!(a, copy);
    let _ = a.inversion();
    assert_eq!(a, copy);
}

#[test]
fn reversal() {
    let mut rng = ChaCha20Rng::from_seed([2; 32]);
    for len in [0, 1, 2, 17, 256, 1000] {
        let n = len as u64;
        let pairs = n * n.saturating_sub(1) / 2;

        let a = Permutation { len }.generate(&mut rng);
        let rev: Vec<_> = a.iter().rev().copied().collect();
        assert_eq!(count_inversions_fast(&a) + count_inversions_fast(&rev), pairs);

        // pairs of equal elements are inversions in neither direction
        let a = Values { bound: 0..10, len }.generate(&mut rng);
        let rev: Vec<_> = a.iter().rev().copied().collect();
        let mut occ = BTreeMap::new();
        for &x in &a {
            *occ.entry(x).or_insert(0_u64) += 1;
        }
        let ties: u64 = occ.values().map(|&c| c * (c - 1) / 2).sum();
        assert_eq!(
            count_inversions_fast(&a) + count_inversions_fast(&rev),
            pairs - ties
        );
    }
}

#[test]
fn sorted_output() {
    let mut rng = ChaCha20Rng::from_seed([3; 32]);
    let a = Values { bound: -20..20, len: 333 }.generate(&mut rng);
    let expected = count_inversions_slow(&a);
    let (sorted, count) = sort_and_count(a.clone());
    let mut std_sorted = a;
    std_sorted.sort();
    assert_eq!(sorted, std_sorted);
    assert_eq!(count, expected);
}

#[test]
fn stable() {
    use std::cmp::Ordering;

    // ordered by `key` only
    #[derive(Clone, Debug)]
    struct Keyed {
        key: u8,
        tag: usize,
    }
    impl PartialEq for Keyed {
        fn eq(&self, other: &Self) -> bool { self.key == other.key }
    }
    impl Eq for Keyed {}
    impl PartialOrd for Keyed {
        fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
            Some(self.cmp(other))
        }
    }
    impl Ord for Keyed {
        fn cmp(&self, other: &Self) -> Ordering { self.key.cmp(&other.key) }
    }

    let a: Vec<_> = [3, 1, 3, 2, 1, 3, 2]
        .into_iter()
        .enumerate()
        .map(|(tag, key)| Keyed { key, tag })
        .collect();
    let (sorted, count) = sort_and_count(a);
    let tags: Vec<_> = sorted.iter().map(|x| x.tag).collect();
    assert_eq!(tags, [1, 4, 3, 6, 0, 2, 5]);
    assert_eq!(count, 9);
}

#[test]
fn large_random() {
    use std::time::{Duration, Instant};

    let mut rng = ChaCha20Rng::from_seed([
        0x55, 0xEF, 0xE0, 0x3C, 0x71, 0xDA, 0xFC, 0xAB, 0x5C, 0x1A, 0x9F, 0xEB,
        0xA4, 0x9E, 0x61, 0xE6, 0x1E, 0x7E, 0x29, 0x77, 0x38, 0x9A, 0xF5, 0x67,
        0xF5, 0xDD, 0x07, 0x06, 0xAE, 0xE4, 0x5A, 0xDC,
    ]);
    let a = Permutation { len: 10_000 }.generate(&mut rng);

    let start = Instant::now();
    let fast = count_inversions_fast(&a);
    assert!(start.elapsed() < Duration::from_secs(5));

    assert_eq!(fast, count_inversions_slow(&a));
    assert_eq!(fast, count_inversions_bottom_up(&a));
}
