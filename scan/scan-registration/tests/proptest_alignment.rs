//! Property-based tests for rotation handling and pairwise reconstruction.
//!
//! These tests generate random beacon fields viewed by two scanners under
//! arbitrary cube rotations and translations, and verify that reconstruction
//! recovers the exact transform and beacon union.
//!
//! Run with: cargo test -p scan-registration -- proptest

use nalgebra::Vector3;
use proptest::prelude::*;
use scan_registration::{
    reconstruct_network, ReconstructionParams, RotationSet, CUBE_ROTATION_COUNT,
};
use scan_types::Scanner;

// =============================================================================
// Strategies
// =============================================================================

/// Total beacons in the generated field. The two scanners see 26 each with
/// exactly 12 in common (26 + 26 - 40).
const FIELD_SIZE: usize = 40;
const VIEW_SIZE: usize = 26;

/// A random integer coordinate. The range is wide so that pairwise
/// displacements essentially never collide by accident.
fn arb_coordinate() -> impl Strategy<Value = i32> {
    -100_000..=100_000i32
}

/// A field of distinct beacon positions, in a deterministic order.
fn arb_beacon_field() -> impl Strategy<Value = Vec<Vector3<i32>>> {
    prop::collection::hash_set(
        (arb_coordinate(), arb_coordinate(), arb_coordinate()),
        FIELD_SIZE,
    )
    .prop_map(|set| {
        let mut points: Vec<(i32, i32, i32)> = set.into_iter().collect();
        points.sort_unstable();
        points
            .into_iter()
            .map(|(x, y, z)| Vector3::new(x, y, z))
            .collect()
    })
}

/// A scanner position well away from the beacon field.
fn arb_translation() -> impl Strategy<Value = Vector3<i32>> {
    (arb_coordinate(), arb_coordinate(), arb_coordinate())
        .prop_map(|(x, y, z)| Vector3::new(x, y, z))
}

/// Views global beacons from a scanner rotated by `rotation` at `position`.
fn local_view(
    beacons: &[Vector3<i32>],
    rotation: usize,
    position: Vector3<i32>,
) -> Vec<Vector3<i32>> {
    let inverse = RotationSet::cube_group()[rotation].transpose();
    beacons.iter().map(|b| inverse * (b - position)).collect()
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    /// Rotating then inverse-rotating recovers the original vector, for
    /// every rotation in the set.
    #[test]
    fn rotation_round_trip(
        x in arb_coordinate(),
        y in arb_coordinate(),
        z in arb_coordinate(),
        k in 0..CUBE_ROTATION_COUNT,
    ) {
        let rotations = RotationSet::cube_group();
        let v = Vector3::new(x, y, z);
        let rotated = rotations[k] * v;
        prop_assert_eq!(rotations[k].transpose() * rotated, v);
    }

    /// Two scanners sharing exactly 12 of 40 beacons reconstruct to the
    /// exact union cardinality and the exact candidate position, under every
    /// rotation index and arbitrary translation.
    #[test]
    fn pairwise_reconstruction_recovers_union_and_position(
        beacons in arb_beacon_field(),
        k in 0..CUBE_ROTATION_COUNT,
        position in arb_translation(),
    ) {
        let scanners = vec![
            Scanner::new(0, beacons[..VIEW_SIZE].to_vec()),
            Scanner::new(1, local_view(&beacons[FIELD_SIZE - VIEW_SIZE..], k, position)),
        ];

        let network = reconstruct_network(scanners, &ReconstructionParams::default())
            .expect("pairwise network reconstructs");

        prop_assert_eq!(network.distinct_beacons(), FIELD_SIZE);
        prop_assert_eq!(
            network.scanner_positions(),
            vec![Vector3::zeros(), position]
        );

        // Every committed offset is one of the original global beacons.
        for scanner in network.scanners() {
            for offset in scanner.offsets() {
                prop_assert!(beacons.contains(offset));
            }
        }
    }
}
