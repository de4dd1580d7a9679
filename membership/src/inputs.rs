//! Assembly of the membership circuit's input bundle.

use curve::{serde_decimal, BaseField, ScalarField};
use ecdsa::{Signature, VerifyingKey};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::MembershipConfig;
use crate::errors::{MembershipError, Result};
use crate::merkle::build_proof;
use crate::transform::compute_tu;

/// Inputs of the `pubkey_membership` circuit.
///
/// Serializes to the JSON object the witness generator reads, fields in circuit order:
/// `s, Tx, Ty, Ux, Uy, root, pathIndices, siblings`. Field elements are decimal strings and
/// path indices are numbers. `T` and `U` are in twisted Edwards coordinates.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MembershipProofInputs {
    /// The signature's `s`, not its inverse.
    pub s: ScalarField,
    #[serde(rename = "Tx", with = "serde_decimal")]
    pub tx: BaseField,
    #[serde(rename = "Ty", with = "serde_decimal")]
    pub ty: BaseField,
    #[serde(rename = "Ux", with = "serde_decimal")]
    pub ux: BaseField,
    #[serde(rename = "Uy", with = "serde_decimal")]
    pub uy: BaseField,
    #[serde(with = "serde_decimal")]
    pub root: BaseField,
    #[serde(rename = "pathIndices")]
    pub path_indices: Vec<u8>,
    #[serde(with = "serde_decimal::vec")]
    pub siblings: Vec<BaseField>,
}

impl MembershipProofInputs {
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Flattened field elements in circuit order.
    pub fn to_field_vector(&self) -> Vec<BaseField> {
        let mut out = Vec::with_capacity(6 + self.path_indices.len() + self.siblings.len());
        out.push(BaseField::from(self.s.to_biguint()));
        out.extend([self.tx, self.ty, self.ux, self.uy, self.root]);
        out.extend(self.path_indices.iter().map(|&bit| BaseField::from(bit as u64)));
        out.extend(self.siblings.iter().copied());
        out
    }
}

/// Builds the circuit inputs proving that `signature` comes from one of `public_keys`.
///
/// The signer is `public_keys[index]`. A signature that does not verify under that key is
/// rejected with [`MembershipError::InvalidSignature`].
pub fn build_membership_inputs(
    signature: &Signature,
    public_keys: &[VerifyingKey],
    index: usize,
    msg_hash: &ScalarField,
    config: &MembershipConfig,
) -> Result<MembershipProofInputs> {
    let signer = public_keys
        .get(index)
        .ok_or(MembershipError::IndexOutOfRange {
            index,
            len: public_keys.len(),
        })?;

    if !signer.verify(msg_hash, signature)? {
        return Err(MembershipError::InvalidSignature { index });
    }

    let (_, s) = signature.to_scalars()?;
    let (t, u) = compute_tu(signature, msg_hash, signer)?.to_edwards()?;
    let merkle_proof = build_proof(public_keys, index, config.tree_depth)?;

    debug!(index, keys = public_keys.len(), "assembled membership inputs");
    Ok(MembershipProofInputs {
        s,
        tx: t.x(),
        ty: t.y(),
        ux: u.x(),
        uy: u.y(),
        root: merkle_proof.root,
        path_indices: merkle_proof.path_indices,
        siblings: merkle_proof.siblings,
    })
}
