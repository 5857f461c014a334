//! Parser for the plain-text scanner report format.
//!
//! A report is a sequence of blank-line-separated blocks. Each block starts
//! with a `--- scanner N ---` header followed by one `x,y,z` integer triple
//! per line:
//!
//! ```text
//! --- scanner 0 ---
//! 404,-588,-901
//! 528,-643,409
//!
//! --- scanner 1 ---
//! 686,422,578
//! ```

use nalgebra::Vector3;

use crate::error::{ParseError, ParseResult};
use crate::scanner::Scanner;

/// Parses a scanner report into a list of local-frame [`Scanner`]s.
///
/// # Errors
///
/// Returns [`ParseError::EmptyReport`] if the input contains no scanner
/// blocks, [`ParseError::InvalidHeader`] if a block is not headed by a
/// `--- scanner N ---` line, and [`ParseError::InvalidCoordinate`] if a
/// beacon line is not three comma-separated integers.
///
/// # Example
///
/// ```
/// use scan_types::parse_report;
///
/// let scanners = parse_report("--- scanner 4 ---\n-1,2,-3\n").unwrap();
/// assert_eq!(scanners[0].id(), 4);
/// ```
pub fn parse_report(input: &str) -> ParseResult<Vec<Scanner>> {
    let mut scanners = Vec::new();

    for block in input.split("\n\n") {
        let mut lines = block.lines().filter(|line| !line.trim().is_empty());
        let Some(header) = lines.next() else {
            continue;
        };
        let id = parse_header(header)?;
        let offsets = lines.map(parse_offset).collect::<ParseResult<Vec<_>>>()?;
        scanners.push(Scanner::new(id, offsets));
    }

    if scanners.is_empty() {
        return Err(ParseError::EmptyReport);
    }
    Ok(scanners)
}

fn parse_header(line: &str) -> ParseResult<u32> {
    line.trim()
        .strip_prefix("--- scanner ")
        .and_then(|rest| rest.strip_suffix(" ---"))
        .and_then(|id| id.parse().ok())
        .ok_or_else(|| ParseError::InvalidHeader(line.to_owned()))
}

fn parse_offset(line: &str) -> ParseResult<Vector3<i32>> {
    let components = line
        .trim()
        .split(',')
        .map(|part| part.parse::<i32>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| ParseError::InvalidCoordinate(line.to_owned()))?;
    match components.as_slice() {
        [x, y, z] => Ok(Vector3::new(*x, *y, *z)),
        _ => Err(ParseError::InvalidCoordinate(line.to_owned())),
    }
}
