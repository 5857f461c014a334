//! 3D scanner/beacon network reconstruction.
//!
//! Given multiple scanners, each reporting beacon positions as exact integer
//! coordinates in its own unknown-orientation, unknown-position local frame,
//! this crate determines every scanner's orientation (one of the 24
//! axis-aligned cube rotations) and position relative to a reference scanner
//! by detecting ≥12-beacon overlap between scanner pairs:
//!
//! - [`RotationSet`] - The 24 distinct cube rotation matrices
//! - [`DirectionFingerprint`] - Rotation-indexed pairwise displacement tables
//! - [`find_overlap`] / [`resolve_transform`] - Pairwise overlap detection
//!   and exact rotation/translation recovery
//! - [`reconstruct_network`] - The incremental positioning loop
//! - [`count_distinct_beacons`] - Final dedup over the unified global frame
//!
//! All arithmetic is integral: rotations are sign/permutation matrices, so
//! transforms are exact and equality needs no tolerance threshold.
//!
//! # Quick Start
//!
//! ```
//! use scan_registration::{reconstruct_network, ReconstructionParams};
//! use scan_types::parse_report;
//!
//! let report = "\
//! --- scanner 0 ---
//! 0,2,0
//! 4,1,0
//! 3,3,0
//! ";
//! let scanners = parse_report(report).unwrap();
//! let network = reconstruct_network(scanners, &ReconstructionParams::default()).unwrap();
//!
//! assert_eq!(network.distinct_beacons(), 3);
//! ```
//!
//! # Algorithm
//!
//! Fingerprints are built once per scanner: every ordered pair of beacon
//! offsets yields a displacement vector precomputed under all 24 rotations.
//! The reconstructor seeds the first scanner at the origin, then repeatedly
//! matches an unpositioned scanner's rotated displacements against a
//! positioned scanner's — a translation-free pre-filter — and, on a hit,
//! recovers the exact rigid motion from a single matched beacon pair. Each
//! success commits the candidate's offsets to the global frame, so the
//! unpositioned set strictly shrinks until the network is reconstructed or
//! proven disconnected.

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]

mod align;
mod error;
mod fingerprint;
mod reconstruct;
mod rotation;
mod transform;

pub use align::{find_overlap, resolve_transform, OverlapMatch, DEFAULT_OVERLAP_THRESHOLD};
pub use error::{RegistrationError, RegistrationResult};
pub use fingerprint::DirectionFingerprint;
pub use reconstruct::{
    count_distinct_beacons, reconstruct_network, Reconstruction, ReconstructionParams,
};
pub use rotation::{RotationSet, CUBE_ROTATION_COUNT};
pub use transform::RigidMotion;
