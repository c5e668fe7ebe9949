// src/splice.rs
//
// Locates the two generated regions of the page.
//
//     ...                      prefix
//     <!--armor begin-->       prefix (kept)
//     ...generated...          dropped, regenerated
//     <!--armor stop-->        middle
//     ...                      middle
//     <!--armor begin2-->      middle (kept)
//     ...generated...          dropped, regenerated
//     <!--armor stop2-->       suffix
//     ...                      suffix

use thiserror::Error;

use crate::config::consts::{MARK_BEGIN, MARK_BEGIN2, MARK_STOP, MARK_STOP2};
use crate::core::text::lines_keep_ends;

const MARKERS: [&str; 4] = [MARK_BEGIN, MARK_STOP, MARK_BEGIN2, MARK_STOP2];

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MarkerError {
    #[error("marker {0} not found")]
    Missing(&'static str),

    #[error("marker {marker} found {count} times")]
    Repeated { marker: &'static str, count: usize },

    #[error("markers are not in begin, stop, begin2, stop2 order")]
    OutOfOrder,
}

/// The page minus its generated regions. Lines keep their terminators.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Splice<'a> {
    pub prefix: Vec<&'a str>,
    pub middle: Vec<&'a str>,
    pub suffix: Vec<&'a str>,
    /// Line numbers (0-based) of the four markers in the source page.
    pub marker_lines: [usize; 4],
}

/// Scan once, keeping lines outside the generated regions.
///
/// Begin markers are kept because a line is copied before it is checked;
/// stop markers are copied explicitly as they re-enable copying.
pub fn locate(html: &str) -> Result<Splice<'_>, MarkerError> {
    let mut kept: Vec<&str> = Vec::new();
    let mut seen: [Vec<usize>; 4] = Default::default();
    let mut copying = true;

    for (i, line) in lines_keep_ends(html).enumerate() {
        if copying {
            kept.push(line);
        }
        if line.contains(MARK_BEGIN) {
            seen[0].push(i);
            copying = false;
        }
        if line.contains(MARK_STOP) {
            seen[1].push(i);
            kept.push(line);
            copying = true;
        }
        if line.contains(MARK_BEGIN2) {
            seen[2].push(i);
            copying = false;
        }
        if line.contains(MARK_STOP2) {
            seen[3].push(i);
            kept.push(line);
            copying = true;
        }
    }

    let mut at = [0usize; 4];
    for (k, hits) in seen.iter().enumerate() {
        match hits.as_slice() {
            [] => return Err(MarkerError::Missing(MARKERS[k])),
            [only] => at[k] = *only,
            many => return Err(MarkerError::Repeated { marker: MARKERS[k], count: many.len() }),
        }
    }
    if !at.windows(2).all(|w| w[0] < w[1]) {
        return Err(MarkerError::OutOfOrder);
    }
    logd!("markers at lines {:?}", at);

    let [begin, stop, begin2, _] = at;

    // Offsets are in source lines; map them onto the filtered buffer.
    let middle_end = begin + (begin2 - stop) + 2;
    let suffix = kept.split_off(middle_end);
    let middle = kept.split_off(begin + 1);

    Ok(Splice { prefix: kept, middle, suffix, marker_lines: at })
}
