/// Counts inversions by insertion sort.
///
/// Keeps a sorted copy of the prefix `a[..i]`. Inserting `a[i]` shifts
/// exactly the elements greater than it one to the right, and each of those
/// forms an inversion with `a[i]`. Equal elements are not shifted past each
/// other.
///
/// # Complexity
/// $O(n^2)$ time, $O(n)$ auxiliary space.
///
/// # Examples
/// ```
/// use naive_inversion::count_inversions_slow;
///
/// let a = [2, 4, 1, 3, 5];
/// assert_eq!(count_inversions_slow(&a), 3);
/// assert_eq!(a, [2, 4, 1, 3, 5]);
/// ```
pub fn count_inversions_slow<T: Ord + Clone>(a: &[T]) -> u64 {
    let mut sorted = a.to_vec();
    let mut res = 0;
    for i in 1..a.len() {
        let mut count = 0;
        while count < i && sorted[i - 1 - count] > a[i] {
            sorted[i - count] = sorted[i - 1 - count].clone();
            count += 1;
        }
        sorted[i - count] = a[i].clone();
        res += count as u64;
    }
    res
}

#[cfg(test)]
use rand::SeedableRng;
#[cfg(test)]
use rand_chacha::ChaCha20Rng;
#[cfg(test)]
use randgen::{Gen, Values};

#[test]
fn sanity_check() {
    let empty: [i64; 0] = [];
    assert_eq!(count_inversions_slow(&empty), 0);
    assert_eq!(count_inversions_slow(&[0]), 0);

    assert_eq!(count_inversions_slow(&[2, 4, 1, 3, 5]), 3);
    assert_eq!(count_inversions_slow(&[1, 5, 4, 2, 3]), 5);
    assert_eq!(count_inversions_slow(&[1, 2, 3, 4, 5]), 0);
    assert_eq!(count_inversions_slow(&[5, 4, 3, 2, 1]), 10);
    assert_eq!(count_inversions_slow(&[2, 2, 2]), 0);
    assert_eq!(count_inversions_slow(&[3, 1, 3, 1]), 3);
    assert_eq!(count_inversions_slow(&[-1, -3, -2]), 2);
}

#[test]
fn by_definition() {
    let mut rng = ChaCha20Rng::from_seed([0; 32]);
    for len in 0..60 {
        let a = Values { bound: -5..5, len }.generate(&mut rng);
        let expected = (0..len)
            .flat_map(|i| (i + 1..len).map(move |j| (i, j)))
            .filter(|&(i, j)| a[i] > a[j])
            .count() as u64;
        assert_eq!(count_inversions_slow(&a), expected, "{a:?}");
    }
}
