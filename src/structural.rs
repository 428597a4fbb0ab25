//! Equality and hashing helpers shared by the model types.
//!
//! Floats are compared by canonical bit pattern: every NaN is the same
//! value and `0.0` differs from `-0.0`. That keeps `Eq` reflexive and
//! consistent with `Hash`.

use std::{
    collections::{hash_map::DefaultHasher, BTreeMap},
    hash::{Hash, Hasher},
};

const PRIME: u64 = 31;

pub(crate) fn canonical_bits(value: f64) -> u64 {
    if value.is_nan() {
        f64::NAN.to_bits()
    } else {
        value.to_bits()
    }
}

pub(crate) fn opt_bits(value: Option<f64>) -> Option<u64> {
    value.map(canonical_bits)
}

/// Borrowed view of a float-valued map with bitwise equality and hashing.
pub(crate) struct FloatMap<'a>(pub &'a BTreeMap<String, f64>);

impl PartialEq for FloatMap<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.0.len() == other.0.len()
            && self
                .0
                .iter()
                .zip(other.0.iter())
                .all(|((lk, lv), (rk, rv))| lk == rk && canonical_bits(*lv) == canonical_bits(*rv))
    }
}

impl Hash for FloatMap<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.0.len());
        for (key, value) in self.0 {
            key.hash(state);
            canonical_bits(*value).hash(state);
        }
    }
}

pub(crate) fn float_map_eq(
    left: Option<&BTreeMap<String, f64>>,
    right: Option<&BTreeMap<String, f64>>,
) -> bool {
    left.map(FloatMap) == right.map(FloatMap)
}

/// Polynomial accumulator over per-field hashes, in declaration order.
/// Absent fields contribute `0`.
pub(crate) struct StructuralHash(u64);

impl StructuralHash {
    pub fn new() -> Self {
        Self(1)
    }

    pub fn field<T: Hash + ?Sized>(self, value: Option<&T>) -> Self {
        let contribution = value.map_or(0, hash_one);
        Self(self.0.wrapping_mul(PRIME).wrapping_add(contribution))
    }

    pub fn finish(self) -> u64 {
        self.0
    }
}

fn hash_one<T: Hash + ?Sized>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nan_is_equal_to_itself() {
        let left = BTreeMap::from([("score".to_string(), f64::NAN)]);
        let right = BTreeMap::from([("score".to_string(), -f64::NAN)]);

        assert!(float_map_eq(Some(&left), Some(&right)));
        assert_eq!(hash_one(&FloatMap(&left)), hash_one(&FloatMap(&right)));
    }

    #[test]
    fn signed_zeroes_differ() {
        let left = BTreeMap::from([("score".to_string(), 0.0)]);
        let right = BTreeMap::from([("score".to_string(), -0.0)]);

        assert!(!float_map_eq(Some(&left), Some(&right)));
    }

    #[test]
    fn absent_differs_from_empty() {
        let empty = BTreeMap::new();

        assert!(!float_map_eq(None, Some(&empty)));
        assert!(float_map_eq(None, None));
    }

    #[test]
    fn absent_fields_contribute_zero() {
        let hash = StructuralHash::new()
            .field::<str>(None)
            .field::<str>(None)
            .finish();

        assert_eq!(hash, 31 * 31);
    }
}
