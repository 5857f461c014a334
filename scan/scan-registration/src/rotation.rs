//! The 24 axis-aligned cube rotations.

use std::ops::Index;
use std::sync::LazyLock;

use nalgebra::{Matrix3, Vector3};

/// Number of distinct axis-aligned rotations of a cube.
pub const CUBE_ROTATION_COUNT: usize = 24;

static CUBE_GROUP: LazyLock<RotationSet> = LazyLock::new(RotationSet::build);

/// The 24 distinct proper rotations that map the integer lattice onto itself.
///
/// Every matrix has entries in {-1, 0, 1} and determinant +1, so applying one
/// to an integer vector is exact and its inverse is its transpose. Element 0
/// is always the identity.
///
/// The set is computed once per process and shared read-only.
///
/// # Example
///
/// ```
/// use nalgebra::Vector3;
/// use scan_registration::RotationSet;
///
/// let rotations = RotationSet::cube_group();
/// assert_eq!(rotations.len(), 24);
///
/// let v = Vector3::new(1, 2, 3);
/// assert_eq!(rotations[0] * v, v); // identity first
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotationSet {
    matrices: Vec<Matrix3<i32>>,
}

impl RotationSet {
    /// The shared, lazily-built rotation set.
    #[must_use]
    pub fn cube_group() -> &'static Self {
        &CUBE_GROUP
    }

    /// Builds the set from scratch: all 64 compositions of quarter-turns
    /// about the three axes, deduplicated to the canonical 24.
    fn build() -> Self {
        let x_turns = quarter_turns(Matrix3::new(1, 0, 0, 0, 0, -1, 0, 1, 0));
        let y_turns = quarter_turns(Matrix3::new(0, 0, 1, 0, 1, 0, -1, 0, 0));
        let z_turns = quarter_turns(Matrix3::new(0, -1, 0, 1, 0, 0, 0, 0, 1));

        let mut matrices: Vec<Matrix3<i32>> = Vec::with_capacity(CUBE_ROTATION_COUNT);
        for x in &x_turns {
            for y in &y_turns {
                for z in &z_turns {
                    let composed = x * y * z;
                    if !matrices.contains(&composed) {
                        matrices.push(composed);
                    }
                }
            }
        }

        debug_assert_eq!(matrices.len(), CUBE_ROTATION_COUNT);
        debug_assert_eq!(matrices[0], Matrix3::identity());
        Self { matrices }
    }

    /// Number of rotations in the set (always 24).
    #[must_use]
    pub fn len(&self) -> usize {
        self.matrices.len()
    }

    /// Whether the set is empty (never, for the cube group).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matrices.is_empty()
    }

    /// The rotation at `index`, if in range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Matrix3<i32>> {
        self.matrices.get(index)
    }

    /// Iterates over the rotations in index order.
    pub fn iter(&self) -> impl Iterator<Item = &Matrix3<i32>> {
        self.matrices.iter()
    }

    /// Applies the rotation at `index` to a vector.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    #[must_use]
    pub fn apply(&self, index: usize, v: Vector3<i32>) -> Vector3<i32> {
        self.matrices[index] * v
    }
}

impl Index<usize> for RotationSet {
    type Output = Matrix3<i32>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.matrices[index]
    }
}

/// The four powers of a quarter-turn generator: identity, 90, 180, 270.
fn quarter_turns(generator: Matrix3<i32>) -> [Matrix3<i32>; 4] {
    let quarter = generator;
    let half = quarter * quarter;
    let three_quarter = half * quarter;
    [Matrix3::identity(), quarter, half, three_quarter]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn det(m: &Matrix3<i32>) -> i32 {
        m[(0, 0)] * (m[(1, 1)] * m[(2, 2)] - m[(1, 2)] * m[(2, 1)])
            - m[(0, 1)] * (m[(1, 0)] * m[(2, 2)] - m[(1, 2)] * m[(2, 0)])
            + m[(0, 2)] * (m[(1, 0)] * m[(2, 1)] - m[(1, 1)] * m[(2, 0)])
    }

    #[test]
    fn has_exactly_24_distinct_rotations() {
        let rotations = RotationSet::cube_group();
        assert_eq!(rotations.len(), CUBE_ROTATION_COUNT);

        for (i, a) in rotations.iter().enumerate() {
            for (j, b) in rotations.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "rotations {i} and {j} are equal");
                }
            }
        }
    }

    #[test]
    fn first_rotation_is_identity() {
        assert_eq!(RotationSet::cube_group()[0], Matrix3::identity());
    }

    #[test]
    fn all_entries_are_sign_values() {
        for rotation in RotationSet::cube_group().iter() {
            assert!(rotation.iter().all(|&entry| (-1..=1).contains(&entry)));
        }
    }

    #[test]
    fn all_rotations_are_proper() {
        for rotation in RotationSet::cube_group().iter() {
            assert_eq!(det(rotation), 1);
        }
    }

    #[test]
    fn transpose_round_trips_vectors() {
        let v = Vector3::new(3, -7, 11);
        for rotation in RotationSet::cube_group().iter() {
            assert_eq!(rotation.transpose() * (rotation * v), v);
        }
    }

    #[test]
    fn set_is_closed_under_composition() {
        let rotations = RotationSet::cube_group();
        for a in rotations.iter() {
            for b in rotations.iter() {
                let product = a * b;
                assert!(rotations.iter().any(|r| *r == product));
            }
        }
    }
}
