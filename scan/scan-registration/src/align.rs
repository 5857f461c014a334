//! Pairwise overlap detection and exact transform recovery.

use hashbrown::{HashMap, HashSet};
use nalgebra::Vector3;
use scan_types::Scanner;

use crate::error::{RegistrationError, RegistrationResult};
use crate::fingerprint::DirectionFingerprint;
use crate::rotation::RotationSet;
use crate::transform::RigidMotion;

/// Minimum number of shared beacons for two scanners to be considered
/// mutually visible.
pub const DEFAULT_OVERLAP_THRESHOLD: usize = 12;

/// A successful fingerprint comparison between two scanners.
///
/// `pairs` holds the distinct `(origin_offset_index, candidate_offset_index)`
/// correspondences found under `rotation`, sorted for determinism. Two
/// offsets that co-occur in that many equal-displacement relationships are
/// almost certainly the same physical beacon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlapMatch {
    /// Index of the first rotation that cleared the threshold.
    ///
    /// Only a hint: the origin fingerprint is expressed in the origin's
    /// *original* local frame, so this is not in general the candidate's
    /// global rotation. [`resolve_transform`] re-enumerates from scratch.
    pub rotation: usize,
    /// Matched offset-index pairs, `(origin, candidate)`.
    pub pairs: Vec<(usize, usize)>,
}

/// Compares two scanner fingerprints and reports sufficient overlap, if any.
///
/// For each rotation index k, the origin's identity-frame displacements are
/// matched against the candidate's k-rotated displacements; wherever a
/// displacement coincides exactly, the corresponding offset-index pair is
/// recorded. The first rotation whose distinct pair count reaches
/// `threshold` wins and no further rotations are tried.
///
/// Returns `None` when no rotation clears the threshold; the caller may
/// retry the candidate against a different positioned scanner later.
#[must_use]
pub fn find_overlap(
    origin: &DirectionFingerprint,
    candidate: &DirectionFingerprint,
    threshold: usize,
) -> Option<OverlapMatch> {
    let mut by_displacement: HashMap<Vector3<i32>, Vec<usize>> = HashMap::new();
    for entry in &origin.entries {
        by_displacement
            .entry(entry.images[0])
            .or_default()
            .push(entry.from);
    }

    let rotation_count = RotationSet::cube_group().len();
    for rotation in 0..rotation_count {
        let mut pairs: HashSet<(usize, usize)> = HashSet::new();
        for entry in &candidate.entries {
            if let Some(origin_froms) = by_displacement.get(&entry.images[rotation]) {
                for &origin_from in origin_froms {
                    pairs.insert((origin_from, entry.from));
                }
            }
        }

        if pairs.len() >= threshold {
            let mut pairs: Vec<_> = pairs.into_iter().collect();
            pairs.sort_unstable();
            return Some(OverlapMatch { rotation, pairs });
        }
    }

    None
}

/// Recovers the exact rigid motion mapping `candidate` offsets onto `origin`
/// offsets, anchored on one matched pair from a prior [`find_overlap`].
///
/// Every rotation index is tried in fixed order, independent of the
/// fingerprint-stage winner: translation = origin offset − R·candidate
/// offset, then the number of candidate offsets landing exactly on origin
/// offsets is counted. The first rotation reaching `threshold` wins; ties
/// cannot occur against exact-integer lattice data.
///
/// # Errors
///
/// Returns [`RegistrationError::AlignmentFailed`] when no rotation clears the
/// threshold — the fingerprint stage over-promised, which indicates corrupt
/// input rather than a retryable condition.
///
/// # Panics
///
/// Panics if `overlap` holds offset indices out of range for either scanner,
/// which cannot happen for a match produced from these scanners'
/// fingerprints.
pub fn resolve_transform(
    origin: &Scanner,
    candidate: &Scanner,
    overlap: &OverlapMatch,
    threshold: usize,
) -> RegistrationResult<RigidMotion> {
    let failed = || RegistrationError::AlignmentFailed {
        origin: origin.id(),
        candidate: candidate.id(),
    };
    let &(anchor_origin, anchor_candidate) = overlap.pairs.first().ok_or_else(failed)?;
    let anchor_origin = origin.offsets()[anchor_origin];
    let anchor_candidate = candidate.offsets()[anchor_candidate];

    let origin_offsets: HashSet<&Vector3<i32>> = origin.offsets().iter().collect();

    for rotation in RotationSet::cube_group().iter() {
        let translation = anchor_origin - rotation * anchor_candidate;
        let aligned = candidate
            .offsets()
            .iter()
            .filter(|&&offset| origin_offsets.contains(&(rotation * offset + translation)))
            .count();

        if aligned >= threshold {
            return Ok(RigidMotion::new(*rotation, translation));
        }
    }

    Err(failed())
}
