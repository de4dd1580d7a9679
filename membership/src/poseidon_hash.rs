//! Poseidon over BN254, parameterized like circomlib's `Poseidon(2)`.

use curve::BaseField;
use ecdsa::VerifyingKey;
use light_poseidon::{Poseidon, PoseidonHasher};

use crate::errors::{MembershipError, Result};

/// Arity-2 Poseidon hasher used for Merkle nodes and public-key leaves.
///
/// The hasher keeps its round constants between calls, so build one and reuse it for a
/// whole tree.
pub struct PairHasher {
    inner: Poseidon<BaseField>,
}

impl PairHasher {
    pub fn new() -> Result<Self> {
        let inner =
            Poseidon::<BaseField>::new_circom(2).map_err(|e| MembershipError::Hash(e.to_string()))?;
        Ok(Self { inner })
    }

    pub fn hash(&mut self, left: &BaseField, right: &BaseField) -> Result<BaseField> {
        self.inner
            .hash(&[*left, *right])
            .map_err(|e| MembershipError::Hash(e.to_string()))
    }
}

/// Merkle leaf of a public key: `Poseidon(E.x, E.y)` over the key's twisted Edwards form.
pub fn hash_public_key(hasher: &mut PairHasher, key: &VerifyingKey) -> Result<BaseField> {
    let edwards = key.as_point().to_edwards()?;
    hasher.hash(&edwards.x(), &edwards.y())
}

#[cfg(test)]
mod tests {
    use super::*;
    use curve::{from_decimal_str, EdwardsPoint, WeierstrassPoint};

    #[test]
    fn test_matches_circomlib_vector() {
        let mut hasher = PairHasher::new().unwrap();
        let out = hasher
            .hash(&BaseField::from(1u64), &BaseField::from(2u64))
            .unwrap();
        let expected = from_decimal_str(
            "7853200120776062878684798364095072458815029376092732009249414926327459813530",
        )
        .unwrap();
        assert_eq!(out, expected);
    }

    #[test]
    fn test_hasher_is_reusable() {
        let mut hasher = PairHasher::new().unwrap();
        let a = hasher.hash(&BaseField::from(3u64), &BaseField::from(4u64)).unwrap();
        let b = hasher.hash(&BaseField::from(3u64), &BaseField::from(4u64)).unwrap();
        let swapped = hasher.hash(&BaseField::from(4u64), &BaseField::from(3u64)).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, swapped);
    }

    #[test]
    fn test_public_key_leaf_uses_edwards_coordinates() {
        let mut hasher = PairHasher::new().unwrap();
        let key = VerifyingKey::from_point(WeierstrassPoint::generator());
        let g = EdwardsPoint::generator();

        let leaf = hash_public_key(&mut hasher, &key).unwrap();
        assert_eq!(leaf, hasher.hash(&g.x(), &g.y()).unwrap());
    }
}
