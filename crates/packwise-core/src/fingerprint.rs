//! # List Fingerprints
//!
//! A [`ListFingerprint`] is a SHA-256 digest over the serialized form of a
//! [`PackingList`]. Because generation always starts from scratch and
//! discards completion state, hosts compare fingerprints of successive
//! regenerations to decide whether their stored list needs reconciling at all.
//!
//! The serialized form is deterministic: `BTreeMap` keys serialize in sorted
//! order and the list holds no floating-point values.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::PackwiseResult;
use crate::list::PackingList;

/// SHA-256 digest of a packing list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListFingerprint {
    /// The raw 32-byte digest value.
    pub bytes: [u8; 32],
}

impl ListFingerprint {
    /// Compute the fingerprint of `list`.
    pub fn of(list: &PackingList) -> PackwiseResult<Self> {
        let encoded = serde_json::to_vec(list)?;
        let hash = Sha256::digest(&encoded);
        let mut bytes = [0u8; 32];
        bytes.copy_from_slice(&hash);
        Ok(Self { bytes })
    }

    /// Render the digest as a lowercase hex string.
    pub fn to_hex(&self) -> String {
        self.bytes.iter().map(|b| format!("{b:02x}")).collect()
    }
}

impl std::fmt::Display for ListFingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "sha256:{}", self.to_hex())
    }
}

impl PackingList {
    /// Fingerprint of this list.
    pub fn fingerprint(&self) -> PackwiseResult<ListFingerprint> {
        ListFingerprint::of(self)
    }
}
