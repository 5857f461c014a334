//! Rotation-indexed displacement fingerprints.
//!
//! The fingerprint of a scanner is the set of displacement vectors between
//! every ordered pair of its beacon offsets, each precomputed under all 24
//! cube rotations. Two scanners that see ≥ 12 common beacons share many
//! pairwise displacements under exactly one relative rotation, so comparing
//! fingerprints is a cheap rotation-invariant, translation-free overlap
//! filter that avoids trying full transforms against every scanner pair.

use nalgebra::Vector3;

use crate::rotation::RotationSet;

/// One ordered beacon pair: the index of the pair's from-offset and the
/// displacement's image under every rotation, indexed to match the
/// [`RotationSet`].
///
/// The from-offset is kept as an index rather than a value so that matches
/// remain valid after a positioned scanner's offsets are rewritten into the
/// global frame. Displacement images are never recomputed: they stay in the
/// scanner's original local frame, which is why the rotation index that wins
/// the fingerprint comparison is only a hint (see `resolve_transform`).
#[derive(Debug, Clone)]
pub(crate) struct DirectionEntry {
    /// Index of the from-offset in the scanner's offset list.
    pub(crate) from: usize,
    /// `images[k]` is `RotationSet[k] * (to_offset - from_offset)`.
    pub(crate) images: Vec<Vector3<i32>>,
}

/// Per-scanner table of pairwise beacon displacements under all 24 rotations.
///
/// Building a fingerprint costs O(n² · 24) vectors for n beacon offsets,
/// acceptable for scanner beacon counts in the tens to low hundreds. It is
/// computed once per scanner, immediately after construction, and never
/// recomputed.
///
/// # Example
///
/// ```
/// use nalgebra::Vector3;
/// use scan_registration::{DirectionFingerprint, RotationSet};
///
/// let offsets = [Vector3::new(0, 0, 0), Vector3::new(1, 2, 3)];
/// let fingerprint = DirectionFingerprint::new(&offsets, RotationSet::cube_group());
///
/// // Every ordered pair of distinct offsets contributes one entry.
/// assert_eq!(fingerprint.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct DirectionFingerprint {
    pub(crate) entries: Vec<DirectionEntry>,
}

impl DirectionFingerprint {
    /// Builds the fingerprint of a scanner's offset list.
    #[must_use]
    pub fn new(offsets: &[Vector3<i32>], rotations: &RotationSet) -> Self {
        let mut entries = Vec::with_capacity(offsets.len().saturating_sub(1) * offsets.len());
        for (from, from_offset) in offsets.iter().enumerate() {
            for (to, to_offset) in offsets.iter().enumerate() {
                if from == to {
                    continue;
                }
                let displacement = to_offset - from_offset;
                let images = rotations.iter().map(|r| r * displacement).collect();
                entries.push(DirectionEntry { from, images });
            }
        }
        Self { entries }
    }

    /// Number of ordered-pair entries (`n · (n − 1)` for n offsets).
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the fingerprint has no entries (fewer than two offsets).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offsets() -> Vec<Vector3<i32>> {
        vec![
            Vector3::new(0, 2, 0),
            Vector3::new(4, 1, 0),
            Vector3::new(3, 3, 0),
        ]
    }

    #[test]
    fn entry_count_is_ordered_pairs() {
        let fingerprint = DirectionFingerprint::new(&offsets(), RotationSet::cube_group());
        assert_eq!(fingerprint.len(), 3 * 2);
        assert!(!fingerprint.is_empty());
    }

    #[test]
    fn identity_image_is_raw_displacement() {
        let offsets = offsets();
        let fingerprint = DirectionFingerprint::new(&offsets, RotationSet::cube_group());

        // First entry is the ordered pair (0, 1).
        let entry = &fingerprint.entries[0];
        assert_eq!(entry.from, 0);
        assert_eq!(entry.images[0], offsets[1] - offsets[0]);
    }

    #[test]
    fn images_match_rotation_indices() {
        let offsets = offsets();
        let rotations = RotationSet::cube_group();
        let fingerprint = DirectionFingerprint::new(&offsets, rotations);

        for entry in &fingerprint.entries {
            assert_eq!(entry.images.len(), rotations.len());
            let displacement = entry.images[0];
            for (k, image) in entry.images.iter().enumerate() {
                assert_eq!(*image, rotations[k] * displacement);
            }
        }
    }

    #[test]
    fn single_offset_has_empty_fingerprint() {
        let fingerprint =
            DirectionFingerprint::new(&[Vector3::new(1, 1, 1)], RotationSet::cube_group());
        assert!(fingerprint.is_empty());
    }
}
