//! Seam to the external Groth16 toolchain that proves and verifies membership.
//!
//! The crate never generates proofs itself. A [`ProvingBackend`] implementation (a snarkjs
//! bridge, a native prover, a remote service) consumes the circuit artifacts and the input
//! bundle assembled by [`build_membership_inputs`].

use curve::ScalarField;
use ecdsa::{Signature, VerifyingKey};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, info_span};

use crate::config::{ArtifactSource, MembershipConfig};
use crate::errors::Result;
use crate::inputs::{build_membership_inputs, MembershipProofInputs};

pub const WASM_FILE: &str = "pubkey_membership.wasm";
pub const ZKEY_FILE: &str = "pubkey_membership.zkey";
pub const VKEY_FILE: &str = "pubkey_membership_vkey.json";

/// A proof and the public signals it was generated against, both as the backend emits them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Zkp {
    pub proof: serde_json::Value,
    pub public_signals: Vec<String>,
}

/// Location of a single artifact file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArtifactLocation {
    Path(PathBuf),
    Url(String),
}

impl ArtifactLocation {
    fn resolve(source: &ArtifactSource, file: &str) -> Self {
        match source {
            ArtifactSource::Local(dir) => ArtifactLocation::Path(dir.join(file)),
            ArtifactSource::Remote(base) => {
                let base = base.trim_end_matches('/');
                ArtifactLocation::Url(format!("{base}/{file}"))
            }
        }
    }
}

impl std::fmt::Display for ArtifactLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArtifactLocation::Path(path) => write!(f, "{}", path.display()),
            ArtifactLocation::Url(url) => f.write_str(url),
        }
    }
}

/// The three files of the compiled membership circuit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CircuitArtifacts {
    /// Witness generator.
    pub wasm: ArtifactLocation,
    /// Proving key.
    pub zkey: ArtifactLocation,
    /// Verification key.
    pub vkey: ArtifactLocation,
}

impl CircuitArtifacts {
    pub fn from_source(source: &ArtifactSource) -> Self {
        Self {
            wasm: ArtifactLocation::resolve(source, WASM_FILE),
            zkey: ArtifactLocation::resolve(source, ZKEY_FILE),
            vkey: ArtifactLocation::resolve(source, VKEY_FILE),
        }
    }
}

/// Proof generation and verification for the membership circuit.
///
/// Both calls may run for seconds; callers that need cancellation or async execution wrap
/// them on their side.
pub trait ProvingBackend {
    fn prove(&self, artifacts: &CircuitArtifacts, inputs: &MembershipProofInputs) -> Result<Zkp>;

    fn verify(&self, artifacts: &CircuitArtifacts, zkp: &Zkp) -> Result<bool>;
}

/// Assembles the circuit inputs for `public_keys[index]` and hands them to `backend`.
pub fn prove_membership<B: ProvingBackend + ?Sized>(
    backend: &B,
    config: &MembershipConfig,
    signature: &Signature,
    public_keys: &[VerifyingKey],
    index: usize,
    msg_hash: &ScalarField,
) -> Result<Zkp> {
    let inputs = build_membership_inputs(signature, public_keys, index, msg_hash, config)?;
    let artifacts = CircuitArtifacts::from_source(&config.artifacts);

    let _span = info_span!("proving", wasm = %artifacts.wasm, zkey = %artifacts.zkey).entered();
    let zkp = backend.prove(&artifacts, &inputs)?;
    debug!(public_signals = zkp.public_signals.len(), "proof generated");
    Ok(zkp)
}

pub fn verify_membership<B: ProvingBackend + ?Sized>(
    backend: &B,
    config: &MembershipConfig,
    zkp: &Zkp,
) -> Result<bool> {
    let artifacts = CircuitArtifacts::from_source(&config.artifacts);

    let _span = info_span!("verification", vkey = %artifacts.vkey).entered();
    let verified = backend.verify(&artifacts, zkp)?;
    debug!(verified, "proof checked");
    Ok(verified)
}
