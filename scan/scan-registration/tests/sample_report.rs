//! End-to-end reconstruction of the canonical five-scanner sample report.

use nalgebra::Vector3;
use scan_registration::{reconstruct_network, Reconstruction, ReconstructionParams};
use scan_types::parse_report;

const SAMPLE_REPORT: &str = include_str!("data/sample_report.txt");

fn reconstruct_sample() -> Reconstruction {
    let scanners = parse_report(SAMPLE_REPORT).expect("sample report parses");
    reconstruct_network(scanners, &ReconstructionParams::default())
        .expect("sample network reconstructs")
}

#[test]
fn sample_network_has_79_distinct_beacons() {
    let network = reconstruct_sample();
    assert_eq!(network.distinct_beacons(), 79);
}

#[test]
fn sample_scanner_positions_are_resolved_relative_to_scanner_0() {
    let network = reconstruct_sample();

    let positions = network.scanner_positions();
    assert_eq!(positions.len(), 5);
    assert_eq!(positions[0], Vector3::zeros());
    assert_eq!(positions[1], Vector3::new(68, -1246, -43));
    assert_eq!(positions[2], Vector3::new(1105, -1205, 1229));
    assert_eq!(positions[3], Vector3::new(-92, -2380, -20));
    assert_eq!(positions[4], Vector3::new(-20, -1133, 1061));

    for scanner in network.scanners() {
        assert!(scanner.is_positioned());
    }
}

#[test]
fn sample_max_scanner_separation_is_3621() {
    // Scanners 2 and 3 are the farthest apart in Manhattan distance.
    let network = reconstruct_sample();
    assert_eq!(network.max_scanner_separation(), Some(3621));
}

#[test]
fn sample_count_is_independent_of_scanner_order() {
    let mut scanners = parse_report(SAMPLE_REPORT).expect("sample report parses");
    scanners.reverse();

    // Seeding from scanner 4 instead of scanner 0 changes the global frame
    // but not the distinct-beacon count.
    let network = reconstruct_network(scanners, &ReconstructionParams::default())
        .expect("reversed network reconstructs");
    assert_eq!(network.distinct_beacons(), 79);
}
