use std::ops::{Index, IndexMut};

use rand::{
    Rng,
    distr::{Distribution, StandardUniform},
};
use serde::{Deserialize, Serialize};

use crate::{RegressionErr, Result};

/// A fixed-length vector of reals.
///
/// The length is set on construction and never changes. Every binary operation checks that both
/// operands have the same length and fails with `RegressionErr::DimensionMismatch` otherwise.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vector {
    points: Vec<f64>,
}

impl Vector {
    /// Creates a new `Vector` filled with zeros.
    ///
    /// # Arguments
    /// * `size` - The amount of components, zero is allowed.
    pub fn zeros(size: usize) -> Self {
        Self {
            points: vec![0.; size],
        }
    }

    /// Returns the amount of components in the vector.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.points
    }

    pub fn iter(&self) -> impl Iterator<Item = &f64> {
        self.points.iter()
    }

    /// Replaces every component with a value drawn uniformly from `[0, 1)`.
    ///
    /// # Arguments
    /// * `rng` - The random source to draw from.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.sample_from(rng, &StandardUniform);
    }

    /// Replaces every component with an independent sample of `distribution`.
    ///
    /// # Arguments
    /// * `rng` - The random source to draw from.
    /// * `distribution` - The distribution each component follows.
    pub fn sample_from<R, D>(&mut self, rng: &mut R, distribution: &D)
    where
        R: Rng + ?Sized,
        D: Distribution<f64>,
    {
        for p in self.points.iter_mut() {
            *p = distribution.sample(rng);
        }
    }

    /// Multiplies every component by `factor` in place.
    pub fn scale_by(&mut self, factor: f64) {
        for p in self.points.iter_mut() {
            *p *= factor;
        }
    }

    /// Subtracts `other` elementwise in place.
    ///
    /// # Errors
    /// `DimensionMismatch` if the lengths differ, in which case `self` is left untouched.
    pub fn subtract(&mut self, other: &Vector) -> Result<()> {
        self.check_len("subtract", other)?;

        for (p, o) in self.points.iter_mut().zip(&other.points) {
            *p -= o;
        }

        Ok(())
    }

    /// Adds `other` elementwise in place.
    ///
    /// # Errors
    /// `DimensionMismatch` if the lengths differ, in which case `self` is left untouched.
    pub fn add(&mut self, other: &Vector) -> Result<()> {
        self.check_len("add", other)?;

        for (p, o) in self.points.iter_mut().zip(&other.points) {
            *p += o;
        }

        Ok(())
    }

    /// Computes the dot product between `self` and `other`.
    ///
    /// # Errors
    /// `DimensionMismatch` if the lengths differ, truncation is never applied.
    pub fn dot(&self, other: &Vector) -> Result<f64> {
        self.check_len("dot product", other)?;

        let mut total = 0.;
        for (a, b) in self.points.iter().zip(&other.points) {
            total += a * b;
        }

        Ok(total)
    }

    /// Returns the component at `index`.
    ///
    /// # Errors
    /// `IndexOutOfRange` if `index >= self.len()`.
    pub fn get(&self, index: usize) -> Result<f64> {
        self.points
            .get(index)
            .copied()
            .ok_or(RegressionErr::IndexOutOfRange {
                index,
                len: self.len(),
            })
    }

    /// Overwrites the component at `index`.
    ///
    /// # Errors
    /// `IndexOutOfRange` if `index >= self.len()`.
    pub fn set(&mut self, index: usize, value: f64) -> Result<()> {
        let len = self.len();
        let p = self
            .points
            .get_mut(index)
            .ok_or(RegressionErr::IndexOutOfRange { index, len })?;

        *p = value;
        Ok(())
    }

    fn check_len(&self, what: &'static str, other: &Vector) -> Result<()> {
        if self.len() != other.len() {
            return Err(RegressionErr::DimensionMismatch {
                what,
                got: other.len(),
                expected: self.len(),
            });
        }

        Ok(())
    }
}

impl From<Vec<f64>> for Vector {
    fn from(points: Vec<f64>) -> Self {
        Self { points }
    }
}

impl<const N: usize> From<[f64; N]> for Vector {
    fn from(points: [f64; N]) -> Self {
        Self {
            points: points.to_vec(),
        }
    }
}

impl FromIterator<f64> for Vector {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

/// Panics when out of range, use `Vector::get` for a checked access.
impl Index<usize> for Vector {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.points[index]
    }
}

impl IndexMut<usize> for Vector {
    fn index_mut(&mut self, index: usize) -> &mut f64 {
        &mut self.points[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    const EPS: f64 = 1e-12;

    fn random_vectors(n: usize, size: usize) -> Vec<Vector> {
        let mut rng = StdRng::seed_from_u64(42);

        (0..n)
            .map(|_| {
                let mut v = Vector::zeros(size);
                v.randomize(&mut rng);
                v.scale_by(rng.random_range(-10.0..10.0));
                v
            })
            .collect()
    }

    #[test]
    fn zeros() {
        let v = Vector::zeros(3);
        assert_eq!(v.len(), 3);
        assert_eq!(v.as_slice(), [0., 0., 0.]);
        assert!(Vector::zeros(0).is_empty());
    }

    #[test]
    fn randomize_stays_in_unit_interval() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut v = Vector::zeros(1000);
        v.randomize(&mut rng);

        assert!(v.iter().all(|&p| (0.0..1.0).contains(&p)));
    }

    #[test]
    fn randomize_is_reproducible_with_a_seed() {
        let mut a = Vector::zeros(5);
        let mut b = Vector::zeros(5);
        a.randomize(&mut StdRng::seed_from_u64(3));
        b.randomize(&mut StdRng::seed_from_u64(3));

        assert_eq!(a, b);
    }

    #[test]
    fn self_dot_is_non_negative() {
        for v in random_vectors(50, 8) {
            assert!(v.dot(&v).unwrap() >= 0.);
        }
    }

    #[test]
    fn dot_is_commutative() {
        let vs = random_vectors(20, 6);

        for pair in vs.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            assert_eq!(a.dot(b).unwrap(), b.dot(a).unwrap());
        }
    }

    #[test]
    fn dot_of_empty_vectors_is_zero() {
        assert_eq!(Vector::zeros(0).dot(&Vector::zeros(0)).unwrap(), 0.);
    }

    #[test]
    fn dot_rejects_mismatched_sizes() {
        let a = Vector::from([1., 2., 3.]);
        let b = Vector::from([1., 2.]);

        assert!(matches!(
            a.dot(&b),
            Err(RegressionErr::DimensionMismatch {
                got: 2,
                expected: 3,
                ..
            })
        ));
        assert!(matches!(
            b.dot(&a),
            Err(RegressionErr::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn scale_by_one_and_zero() {
        for v in random_vectors(10, 4) {
            let mut same = v.clone();
            same.scale_by(1.);
            assert_eq!(same, v);

            let mut zero = v.clone();
            zero.scale_by(0.);
            assert_eq!(zero, Vector::zeros(4));
        }
    }

    #[test]
    fn subtract_then_add_round_trips() {
        let vs = random_vectors(10, 5);

        for pair in vs.windows(2) {
            let mut v = pair[0].clone();
            v.subtract(&pair[1]).unwrap();
            v.add(&pair[1]).unwrap();

            for (a, b) in v.iter().zip(pair[0].iter()) {
                assert!((a - b).abs() < EPS);
            }
        }
    }

    #[test]
    fn subtract_rejects_mismatched_sizes_without_mutating() {
        let mut a = Vector::from([1., 2.]);
        let err = a.subtract(&Vector::from([1.])).unwrap_err();

        assert!(matches!(err, RegressionErr::DimensionMismatch { .. }));
        assert_eq!(a.as_slice(), [1., 2.]);
    }

    #[test]
    fn checked_access() {
        let mut v = Vector::zeros(2);
        v.set(1, 4.).unwrap();

        assert_eq!(v.get(1).unwrap(), 4.);
        assert!(matches!(
            v.get(2),
            Err(RegressionErr::IndexOutOfRange { index: 2, len: 2 })
        ));
        assert!(matches!(
            v.set(5, 1.),
            Err(RegressionErr::IndexOutOfRange { index: 5, len: 2 })
        ));
    }

    #[test]
    fn serializes_as_a_plain_list() {
        let v = Vector::from([1., 2.5]);
        let json = serde_json::to_string(&v).unwrap();

        assert_eq!(json, "[1.0,2.5]");
        assert_eq!(serde_json::from_str::<Vector>(&json).unwrap(), v);
    }
}
