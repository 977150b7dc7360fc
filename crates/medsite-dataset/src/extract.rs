//! Locating the data literal inside the host document.

use crate::error::DatasetError;

const OPEN: u8 = b'[';
const CLOSE: u8 = b']';

/// Return the full array literal that follows `marker` in `text`.
///
/// Starts at the first `[` after the marker and scans forward, counting
/// bracket depth, until the bracket that brings depth back to zero. The scan
/// is purely character based: a `[` or `]` inside a quoted string value is
/// counted like any other, so such values shift the detected end.
///
/// # Errors
///
/// - [`DatasetError::MissingMarker`] if `marker` is absent
/// - [`DatasetError::MissingLiteral`] if no `[` follows the marker
/// - [`DatasetError::UnbalancedLiteral`] if the text ends at nonzero depth
///
/// # Examples
///
/// ```
/// use medsite_dataset::locate_literal;
///
/// let host = "/* data */ const xs = [[1, 2], [3]]; run(xs);";
/// assert_eq!(locate_literal(host, "/* data */").unwrap(), "[[1, 2], [3]]");
/// ```
pub fn locate_literal<'a>(text: &'a str, marker: &str) -> Result<&'a str, DatasetError> {
    let marker_at = text
        .find(marker)
        .ok_or_else(|| DatasetError::MissingMarker {
            marker: marker.to_owned(),
        })?;
    let after_marker = marker_at + marker.len();

    let start = text.as_bytes()[after_marker..]
        .iter()
        .position(|&b| b == OPEN)
        .map(|offset| after_marker + offset)
        .ok_or_else(|| DatasetError::MissingLiteral {
            marker: marker.to_owned(),
        })?;

    let mut depth = 0usize;
    for (offset, &byte) in text.as_bytes()[start..].iter().enumerate() {
        match byte {
            OPEN => depth += 1,
            CLOSE => {
                depth -= 1;
                if depth == 0 {
                    // Both ends are ASCII brackets, so these are char boundaries.
                    return Ok(&text[start..=start + offset]);
                }
            }
            _ => {}
        }
    }

    Err(DatasetError::UnbalancedLiteral { start })
}
