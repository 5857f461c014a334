//! Incremental frame alignment over a set of scanners.

use hashbrown::HashSet;
use nalgebra::Vector3;
use rayon::prelude::*;
use scan_types::Scanner;
use tracing::debug;

use crate::align::{find_overlap, resolve_transform, DEFAULT_OVERLAP_THRESHOLD};
use crate::error::{RegistrationError, RegistrationResult};
use crate::fingerprint::DirectionFingerprint;
use crate::rotation::RotationSet;

/// Parameters for network reconstruction.
///
/// # Example
///
/// ```
/// use scan_registration::ReconstructionParams;
///
/// let params = ReconstructionParams::new().with_overlap_threshold(6);
/// assert_eq!(params.overlap_threshold, 6);
/// assert_eq!(ReconstructionParams::default().overlap_threshold, 12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReconstructionParams {
    /// Minimum shared-beacon count for two scanners to align.
    pub overlap_threshold: usize,
}

impl Default for ReconstructionParams {
    fn default() -> Self {
        Self {
            overlap_threshold: DEFAULT_OVERLAP_THRESHOLD,
        }
    }
}

impl ReconstructionParams {
    /// Creates default parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the overlap threshold.
    #[must_use]
    pub const fn with_overlap_threshold(mut self, threshold: usize) -> Self {
        self.overlap_threshold = threshold;
        self
    }
}

/// A fully reconstructed scanner network.
///
/// Every scanner is positioned and its offsets are expressed in the global
/// frame of the reference scanner (the first scanner of the input, placed at
/// the origin with identity rotation).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconstruction {
    scanners: Vec<Scanner>,
}

impl Reconstruction {
    /// The positioned scanners, in input order.
    #[must_use]
    pub fn scanners(&self) -> &[Scanner] {
        &self.scanners
    }

    /// The resolved scanner positions, in input order.
    #[must_use]
    pub fn scanner_positions(&self) -> Vec<Vector3<i32>> {
        self.scanners.iter().filter_map(Scanner::position).collect()
    }

    /// Number of distinct beacons seen across the whole network.
    #[must_use]
    pub fn distinct_beacons(&self) -> usize {
        count_distinct_beacons(&self.scanners)
    }

    /// The largest pairwise Manhattan distance between scanner positions, or
    /// `None` for networks of fewer than two scanners.
    #[must_use]
    pub fn max_scanner_separation(&self) -> Option<i32> {
        let positions = self.scanner_positions();
        let mut max = None;
        for (i, a) in positions.iter().enumerate() {
            for b in &positions[i + 1..] {
                let distance = (a - b).map(i32::abs).sum();
                max = Some(max.map_or(distance, |m: i32| m.max(distance)));
            }
        }
        max
    }
}

/// Counts distinct beacon positions across positioned scanners.
///
/// Offsets are compared by exact coordinate equality, so this is only
/// meaningful once every scanner's offsets are in the global frame.
#[must_use]
pub fn count_distinct_beacons(scanners: &[Scanner]) -> usize {
    let beacons: HashSet<&Vector3<i32>> = scanners
        .iter()
        .flat_map(|scanner| scanner.offsets())
        .collect();
    beacons.len()
}

/// Resolves every scanner's rotation and position relative to the first
/// scanner, committing each to the global frame.
///
/// The first scanner seeds the global frame at the origin with identity
/// rotation. Each round scans all (positioned, unpositioned) pairs in a fixed
/// order and commits the first pair whose fingerprints overlap: the candidate
/// offsets are rewritten into the global frame and the candidate becomes
/// positioned. The unpositioned set strictly shrinks, bounding the loop to at
/// most N − 1 rounds.
///
/// Candidate pairs within a round are evaluated on the rayon thread pool;
/// `find_map_first` preserves the fixed pair order, so the result is
/// identical to the sequential scan.
///
/// # Errors
///
/// Returns [`RegistrationError::DisconnectedNetwork`] when a full round finds
/// no alignable pair while scanners remain unpositioned, and
/// [`RegistrationError::AlignmentFailed`] when a fingerprint match cannot be
/// resolved into an exact transform (corrupt input).
///
/// # Example
///
/// ```
/// use nalgebra::Vector3;
/// use scan_registration::{reconstruct_network, ReconstructionParams};
/// use scan_types::Scanner;
///
/// let scanner = Scanner::new(0, vec![Vector3::new(1, 2, 3), Vector3::new(4, 5, 6)]);
/// let network = reconstruct_network(vec![scanner], &ReconstructionParams::default()).unwrap();
///
/// assert_eq!(network.scanner_positions(), vec![Vector3::zeros()]);
/// assert_eq!(network.distinct_beacons(), 2);
/// ```
pub fn reconstruct_network(
    mut scanners: Vec<Scanner>,
    params: &ReconstructionParams,
) -> RegistrationResult<Reconstruction> {
    if scanners.is_empty() {
        return Ok(Reconstruction { scanners });
    }

    let rotations = RotationSet::cube_group();
    let fingerprints: Vec<DirectionFingerprint> = scanners
        .iter()
        .map(|scanner| DirectionFingerprint::new(scanner.offsets(), rotations))
        .collect();

    let seed_offsets = scanners[0].offsets().to_vec();
    scanners[0].commit_global(seed_offsets, Vector3::zeros());

    let mut positioned: Vec<usize> = vec![0];
    let mut unpositioned: Vec<usize> = (1..scanners.len()).collect();

    while !unpositioned.is_empty() {
        debug!(remaining = unpositioned.len(), "alignment round");

        let pairs: Vec<(usize, usize)> = positioned
            .iter()
            .flat_map(|&origin| unpositioned.iter().map(move |&candidate| (origin, candidate)))
            .collect();

        let hit = pairs.par_iter().copied().find_map_first(|(origin, candidate)| {
            find_overlap(
                &fingerprints[origin],
                &fingerprints[candidate],
                params.overlap_threshold,
            )
            .map(|overlap| (origin, candidate, overlap))
        });

        let Some((origin, candidate, overlap)) = hit else {
            return Err(RegistrationError::DisconnectedNetwork {
                unpositioned: unpositioned.len(),
                total: scanners.len(),
            });
        };

        let motion = resolve_transform(
            &scanners[origin],
            &scanners[candidate],
            &overlap,
            params.overlap_threshold,
        )?;
        let global_offsets: Vec<Vector3<i32>> = scanners[candidate]
            .offsets()
            .iter()
            .map(|offset| motion.transform_point(*offset))
            .collect();
        scanners[candidate].commit_global(global_offsets, motion.translation);
        debug!(
            scanner = scanners[candidate].id(),
            via = scanners[origin].id(),
            position = ?motion.translation,
            "scanner positioned"
        );

        positioned.push(candidate);
        unpositioned.retain(|&index| index != candidate);
    }

    Ok(Reconstruction { scanners })
}
