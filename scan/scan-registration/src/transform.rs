//! Integer rigid motion recovered by alignment.

use nalgebra::{Matrix3, Vector3};

/// An exact lattice rigid motion: one of the 24 cube rotations followed by an
/// integer translation.
///
/// Applying a motion maps a candidate scanner's local offsets into the frame
/// of an origin scanner. All arithmetic is integral; there is no tolerance.
///
/// # Example
///
/// ```
/// use nalgebra::Vector3;
/// use scan_registration::RigidMotion;
///
/// let motion = RigidMotion::from_translation(Vector3::new(5, 0, -2));
/// assert_eq!(
///     motion.transform_point(Vector3::new(1, 1, 1)),
///     Vector3::new(6, 1, -1)
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RigidMotion {
    /// Rotation component; entries in {-1, 0, 1}, determinant +1.
    pub rotation: Matrix3<i32>,
    /// Translation component, applied after the rotation.
    pub translation: Vector3<i32>,
}

impl Default for RigidMotion {
    fn default() -> Self {
        Self::identity()
    }
}

impl RigidMotion {
    /// Creates a motion from rotation and translation parts.
    #[must_use]
    pub const fn new(rotation: Matrix3<i32>, translation: Vector3<i32>) -> Self {
        Self {
            rotation,
            translation,
        }
    }

    /// The identity motion.
    #[must_use]
    pub fn identity() -> Self {
        Self::new(Matrix3::identity(), Vector3::zeros())
    }

    /// A motion with only translation.
    #[must_use]
    pub fn from_translation(translation: Vector3<i32>) -> Self {
        Self::new(Matrix3::identity(), translation)
    }

    /// Rotates then translates a point.
    #[must_use]
    pub fn transform_point(&self, point: Vector3<i32>) -> Vector3<i32> {
        self.rotation * point + self.translation
    }

    /// Rotates a displacement (translation does not apply).
    #[must_use]
    pub fn transform_vector(&self, vector: Vector3<i32>) -> Vector3<i32> {
        self.rotation * vector
    }

    /// The inverse motion.
    ///
    /// Rotation inverses are transposes, so the inverse is exact as well.
    #[must_use]
    pub fn inverse(&self) -> Self {
        let inverse_rotation = self.rotation.transpose();
        Self::new(inverse_rotation, -(inverse_rotation * self.translation))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rotation::RotationSet;

    #[test]
    fn identity_leaves_points_unchanged() {
        let p = Vector3::new(-3, 8, 2);
        assert_eq!(RigidMotion::identity().transform_point(p), p);
    }

    #[test]
    fn transform_vector_ignores_translation() {
        let motion = RigidMotion::from_translation(Vector3::new(100, 200, 300));
        let v = Vector3::new(1, -2, 3);
        assert_eq!(motion.transform_vector(v), v);
    }

    #[test]
    fn inverse_round_trips_every_cube_rotation() {
        let p = Vector3::new(17, -5, 42);
        let translation = Vector3::new(-9, 31, 4);
        for rotation in RotationSet::cube_group().iter() {
            let motion = RigidMotion::new(*rotation, translation);
            assert_eq!(motion.inverse().transform_point(motion.transform_point(p)), p);
        }
    }
}
