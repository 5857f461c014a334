//! Data types for 3D scanner/beacon network reconstruction.
//!
//! A *scanner* is a sensor that reports *beacon* positions as exact integer
//! coordinates in its own local frame, with unknown orientation and unknown
//! position. This crate provides:
//!
//! - [`Scanner`] - A scanner's id, beacon offsets, and resolved position
//! - [`ReferenceFrame`] - Whether a scanner's offsets are local or global
//! - [`parse_report`] - Parser for the plain-text scanner report format
//!
//! The geometric search that resolves scanner orientations and positions
//! lives in the `scan-registration` crate; this crate is pure data.
//!
//! # Coordinates
//!
//! All coordinates are exact `i32` triples (`nalgebra::Vector3<i32>`).
//! Equality is exact component-wise comparison; there is no floating point
//! and no tolerance threshold anywhere in the subsystem.
//!
//! # Example
//!
//! ```
//! use scan_types::parse_report;
//!
//! let report = "--- scanner 0 ---\n0,2,0\n4,1,0\n3,3,0\n";
//! let scanners = parse_report(report).unwrap();
//!
//! assert_eq!(scanners.len(), 1);
//! assert_eq!(scanners[0].id(), 0);
//! assert_eq!(scanners[0].offsets().len(), 3);
//! assert!(!scanners[0].is_positioned());
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]

mod error;
mod parse;
mod scanner;

pub use error::{ParseError, ParseResult};
pub use parse::parse_report;
pub use scanner::{ReferenceFrame, Scanner};
