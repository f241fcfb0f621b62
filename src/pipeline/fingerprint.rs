//! Content fingerprints for submissions and their attachments.
//!
//! The root fingerprint is a SHA-512 digest over the canonical JSON of
//! `{ decision, transcript }`; it doubles as the submission receipt.
//! Attachments without a client-supplied hash get a SHA-256 digest derived
//! from the attachment name, the root fingerprint and the attachment's
//! position, so repeated runs over the same submission reproduce the same
//! identifiers and same-named attachments never collide.

use serde::Serialize;
use sha2::{Digest, Sha256, Sha512};

use crate::models::verdict::AccidentDecision;

#[derive(Serialize)]
struct RootPreimage<'a> {
    decision: &'a AccidentDecision,
    transcript: &'a str,
}

/// Hex-encoded SHA-512 digest over the submission.
pub fn root_fingerprint(decision: &AccidentDecision, transcript: &str) -> String {
    let preimage = RootPreimage {
        decision,
        transcript,
    };
    // Struct serialization order is fixed, so the digest is deterministic.
    let json = serde_json::to_string(&preimage).unwrap_or_default();
    format!("{:x}", Sha512::digest(json.as_bytes()))
}

/// Hex-encoded SHA-256 digest derived for an attachment without a
/// client-supplied hash.
pub fn attachment_fingerprint(name: &str, root: &str, index: usize) -> String {
    let preimage = format!("{name}-{root}-{index}");
    format!("{:x}", Sha256::digest(preimage.as_bytes()))
}
