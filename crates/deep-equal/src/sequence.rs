//! Array comparison: same length, and deep-equal elements at every index.

use crate::compare::{Comparator, Outcome};
use crate::mismatch::{MismatchKind, PathSegment};
use crate::value::Array;

pub(crate) fn compare(cmp: &mut Comparator<'_>, x: &Array, y: &Array) -> Outcome {
    let left = x.items();
    let right = y.items();
    if left.len() != right.len() {
        return Ok(Some(cmp.mismatch(MismatchKind::Length {
            left: left.len(),
            right: right.len(),
        })));
    }
    for (index, (a, b)) in left.iter().zip(right.iter()).enumerate() {
        if let Some(mismatch) = cmp.compare_at(PathSegment::Index(index), a, b)? {
            return Ok(Some(mismatch));
        }
    }
    Ok(None)
}
