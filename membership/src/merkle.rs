//! Fixed-depth binary Merkle tree over Poseidon, committing to a list of public keys.
//!
//! The leaf list is right-padded with the zero leaf up to `2^depth` entries. Padding is never
//! materialized: every level stores only the nodes that cover real leaves, and missing nodes are
//! read from a per-level table of empty-subtree hashes.

use ark_ff::Field;
use curve::{serde_decimal, BaseField};
use ecdsa::VerifyingKey;
use serde::{Deserialize, Serialize};
use tracing::{debug, info_span};

use crate::errors::{MembershipError, Result};
use crate::poseidon_hash::{hash_public_key, PairHasher};

/// Depth shared with the published membership circuit.
pub const DEFAULT_TREE_DEPTH: usize = 8;

/// Largest supported depth.
pub const MAX_TREE_DEPTH: usize = 32;

/// Value of an unused leaf slot.
pub const DEFAULT_LEAF: BaseField = BaseField::ZERO;

/// Number of leaves a tree of `depth` levels holds.
pub fn tree_capacity(depth: usize) -> Result<usize> {
    if depth > MAX_TREE_DEPTH {
        return Err(MembershipError::InvalidDepth(depth));
    }
    1usize
        .checked_shl(depth as u32)
        .ok_or(MembershipError::InvalidDepth(depth))
}

/// Inclusion proof for one leaf.
///
/// `path_indices[i]` is `0` when the node at level `i` is a left child (its sibling is on the
/// right) and `1` otherwise. Both vectors run from the leaf level to just below the root.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MerkleProof {
    #[serde(with = "serde_decimal")]
    pub root: BaseField,
    pub path_indices: Vec<u8>,
    #[serde(with = "serde_decimal::vec")]
    pub siblings: Vec<BaseField>,
}

impl MerkleProof {
    /// Recomputes the root from `leaf` along the path and compares it with `root`.
    pub fn verify(&self, leaf: &BaseField) -> Result<bool> {
        if self.path_indices.len() != self.siblings.len() {
            return Ok(false);
        }

        let mut hasher = PairHasher::new()?;
        let mut node = *leaf;
        for (bit, sibling) in self.path_indices.iter().zip(&self.siblings) {
            node = match bit {
                0 => hasher.hash(&node, sibling)?,
                1 => hasher.hash(sibling, &node)?,
                _ => return Ok(false),
            };
        }

        Ok(node == self.root)
    }

    pub fn depth(&self) -> usize {
        self.siblings.len()
    }
}

#[derive(Clone, Debug)]
pub struct MerkleTree {
    depth: usize,
    /// `levels[0]` are the leaves; `levels[depth]` holds at most the root.
    levels: Vec<Vec<BaseField>>,
    /// `empty[i]` is the root of an all-default subtree of height `i`.
    empty: Vec<BaseField>,
}

impl MerkleTree {
    pub fn new(leaves: Vec<BaseField>, depth: usize) -> Result<Self> {
        let capacity = tree_capacity(depth)?;
        if leaves.len() > capacity {
            return Err(MembershipError::TooManyLeaves {
                leaves: leaves.len(),
                capacity,
            });
        }

        let mut hasher = PairHasher::new()?;

        let mut empty = Vec::with_capacity(depth + 1);
        empty.push(DEFAULT_LEAF);
        for level in 0..depth {
            let below = empty[level];
            empty.push(hasher.hash(&below, &below)?);
        }

        let mut levels = Vec::with_capacity(depth + 1);
        levels.push(leaves);
        for level in 0..depth {
            let next = levels[level]
                .chunks(2)
                .map(|pair| {
                    let right = pair.get(1).copied().unwrap_or(empty[level]);
                    hasher.hash(&pair[0], &right)
                })
                .collect::<Result<Vec<_>>>()?;
            levels.push(next);
        }

        debug!(leaves = levels[0].len(), depth, "built merkle tree");
        Ok(Self {
            depth,
            levels,
            empty,
        })
    }

    pub fn from_public_keys(public_keys: &[VerifyingKey], depth: usize) -> Result<Self> {
        let mut hasher = PairHasher::new()?;
        let leaves = public_keys
            .iter()
            .map(|key| hash_public_key(&mut hasher, key))
            .collect::<Result<Vec<_>>>()?;
        Self::new(leaves, depth)
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Leaves actually supplied, without padding.
    pub fn leaves(&self) -> &[BaseField] {
        &self.levels[0]
    }

    pub fn root(&self) -> BaseField {
        self.node(self.depth, 0)
    }

    pub fn proof(&self, index: usize) -> Result<MerkleProof> {
        let len = self.leaves().len();
        if index >= len {
            return Err(MembershipError::IndexOutOfRange { index, len });
        }

        let mut path_indices = Vec::with_capacity(self.depth);
        let mut siblings = Vec::with_capacity(self.depth);
        let mut position = index;
        for level in 0..self.depth {
            path_indices.push((position & 1) as u8);
            siblings.push(self.node(level, position ^ 1));
            position >>= 1;
        }

        Ok(MerkleProof {
            root: self.root(),
            path_indices,
            siblings,
        })
    }

    fn node(&self, level: usize, position: usize) -> BaseField {
        self.levels[level]
            .get(position)
            .copied()
            .unwrap_or(self.empty[level])
    }
}

/// Hashes `public_keys` into a tree of `depth` levels and returns the inclusion proof of the
/// key at `index`.
pub fn build_proof(
    public_keys: &[VerifyingKey],
    index: usize,
    depth: usize,
) -> Result<MerkleProof> {
    let _span = info_span!("merkle_proof", leaves = public_keys.len(), depth).entered();

    let capacity = tree_capacity(depth)?;
    if public_keys.len() > capacity {
        return Err(MembershipError::TooManyLeaves {
            leaves: public_keys.len(),
            capacity,
        });
    }
    if index >= public_keys.len() {
        return Err(MembershipError::IndexOutOfRange {
            index,
            len: public_keys.len(),
        });
    }

    MerkleTree::from_public_keys(public_keys, depth)?.proof(index)
}
