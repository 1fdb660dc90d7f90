//! Random sequences for testing and benchmarking.
//!
//! # Examples
//! ```
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha20Rng;
//! use randgen::{Gen, Permutation, Values};
//!
//! let mut rng = ChaCha20Rng::from_seed([0; 32]);
//! let p = Permutation { len: 5 }.generate(&mut rng);
//! let v = Values { bound: -3..3, len: 8 }.generate(&mut rng);
//! assert_eq!(p.len(), 5);
//! assert!(v.iter().all(|x| (-3..3).contains(x)));
//! ```

use std::ops::Range;

use rand::{
    distributions::{Distribution, Uniform},
    seq::SliceRandom,
    Rng,
};

pub trait Gen {
    type Output;
    fn generate<R: Rng>(&self, rng: &mut R) -> Self::Output;
}

/// Uniformly shuffled `0..len`; all elements distinct.
pub struct Permutation {
    pub len: usize,
}

/// `len` elements drawn independently and uniformly from `bound`.
pub struct Values {
    pub bound: Range<i64>,
    pub len: usize,
}

impl Gen for Range<i64> {
    type Output = i64;
    fn generate<R: Rng>(&self, rng: &mut R) -> i64 {
        let between = Uniform::from(self.clone());
        between.sample(rng)
    }
}

impl Gen for Permutation {
    type Output = Vec<i64>;
    fn generate<R: Rng>(&self, rng: &mut R) -> Vec<i64> {
        let mut res: Vec<_> = (0..self.len as i64).collect();
        res.shuffle(rng);
        res
    }
}

impl Gen for Values {
    type Output = Vec<i64>;
    fn generate<R: Rng>(&self, rng: &mut R) -> Vec<i64> {
        let Self { bound, len } = self;
        let between = Uniform::from(bound.clone());
        (0..*len).map(|_| between.sample(rng)).collect()
    }
}

#[test]
fn permutation() {
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    let mut rng = ChaCha20Rng::from_seed([0; 32]);
    for len in [0, 1, 2, 100] {
        let mut p = Permutation { len }.generate(&mut rng);
        p.sort_unstable();
        assert!(p.into_iter().eq(0..len as i64));
    }
}

#[test]
fn uniformity() {
    use std::collections::BTreeMap;

    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    let mut rng = ChaCha20Rng::from_seed([0; 32]);
    let n = 10_usize.pow(6);

    let mut map = BTreeMap::new();
    for x in (Values { bound: -2..2, len: n }).generate(&mut rng) {
        *map.entry(x).or_insert(0) += 1;
    }
    let k = 4;
    assert_eq!(map.len(), k);
    for &v in map.values() {
        assert!(v >= (n / k) * 99 / 100);
        assert!(v <= (n / k) * 101 / 100);
    }

    let mut map = BTreeMap::new();
    for _ in 0..n {
        let p = Permutation { len: 3 }.generate(&mut rng);
        *map.entry(p).or_insert(0) += 1;
    }
    let k = 6;
    assert_eq!(map.len(), k);
    for &v in map.values() {
        assert!(v >= (n / k) * 98 / 100);
        assert!(v <= (n / k) * 102 / 100);
    }

    for _ in 0..1000 {
        let x = (10_i64..13).generate(&mut rng);
        assert!((10..13).contains(&x));
    }
}
