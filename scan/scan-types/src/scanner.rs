//! Scanner data type and reference frames.

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Reference frame a scanner's beacon offsets are expressed in.
///
/// Scanners start in their own [`Local`](ReferenceFrame::Local) frame with
/// unknown orientation and position. Once reconstruction resolves a scanner,
/// its offsets are rewritten into the shared
/// [`Global`](ReferenceFrame::Global) frame and never revert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ReferenceFrame {
    /// The scanner's own frame; orientation and position unknown.
    #[default]
    Local,
    /// The shared frame of the reference scanner.
    Global,
}

/// A scanner and the beacon offsets it reports.
///
/// Offsets are beacon coordinates relative to the scanner's own origin, in
/// whatever orientation the scanner happens to have. A scanner is *positioned*
/// once reconstruction has resolved its global position; at that point its
/// offsets are replaced wholesale with their global-frame images and the
/// scanner is permanently tagged [`ReferenceFrame::Global`].
///
/// # Example
///
/// ```
/// use nalgebra::Vector3;
/// use scan_types::{ReferenceFrame, Scanner};
///
/// let scanner = Scanner::new(0, vec![Vector3::new(1, 2, 3)]);
/// assert_eq!(scanner.frame(), ReferenceFrame::Local);
/// assert_eq!(scanner.position(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scanner {
    id: u32,
    offsets: Vec<Vector3<i32>>,
    position: Option<Vector3<i32>>,
    frame: ReferenceFrame,
}

impl Scanner {
    /// Creates a scanner from its reported beacon offsets, in its local frame.
    #[must_use]
    pub fn new(id: u32, offsets: Vec<Vector3<i32>>) -> Self {
        Self {
            id,
            offsets,
            position: None,
            frame: ReferenceFrame::Local,
        }
    }

    /// The scanner's id.
    #[must_use]
    pub const fn id(&self) -> u32 {
        self.id
    }

    /// The beacon offsets, in the frame reported by [`Self::frame`].
    ///
    /// Order is stable across positioning: `commit_global` replaces each
    /// offset with its global image at the same index.
    #[must_use]
    pub fn offsets(&self) -> &[Vector3<i32>] {
        &self.offsets
    }

    /// The scanner's position in the global frame, if resolved.
    #[must_use]
    pub const fn position(&self) -> Option<Vector3<i32>> {
        self.position
    }

    /// The frame the offsets are currently expressed in.
    #[must_use]
    pub const fn frame(&self) -> ReferenceFrame {
        self.frame
    }

    /// Whether the scanner's global position has been resolved.
    #[must_use]
    pub const fn is_positioned(&self) -> bool {
        self.position.is_some()
    }

    /// Commits the scanner to the global frame.
    ///
    /// Atomically swaps in the globally-transformed offset list and records
    /// the resolved position. Positioned status is monotonic: a scanner is
    /// committed exactly once and never reverts to its local frame.
    ///
    /// # Panics
    ///
    /// Panics if the scanner is already positioned, or if `offsets` does not
    /// have the same length as the local offset list it replaces.
    pub fn commit_global(&mut self, offsets: Vec<Vector3<i32>>, position: Vector3<i32>) {
        assert!(
            !self.is_positioned(),
            "scanner {} is already positioned",
            self.id
        );
        assert_eq!(
            offsets.len(),
            self.offsets.len(),
            "global offset list must match local offset count"
        );
        self.offsets = offsets;
        self.position = Some(position);
        self.frame = ReferenceFrame::Global;
    }
}
