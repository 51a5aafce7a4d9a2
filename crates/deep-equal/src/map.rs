//! Object comparison.
//!
//! Two objects are equal when they have the same own keys and every pair of
//! values under the same key is deep-equal. Insertion order is irrelevant:
//! keys are sorted on both sides and walked in that order, so the first
//! mismatch reported is the one under the smallest key.

use crate::compare::{Comparator, Outcome};
use crate::mismatch::{MismatchKind, PathSegment, Side};
use crate::value::Object;

pub(crate) fn compare(cmp: &mut Comparator<'_>, x: &Object, y: &Object) -> Outcome {
    let left = x.entries();
    let right = y.entries();
    if left.len() != right.len() {
        return Ok(Some(cmp.mismatch(MismatchKind::Length {
            left: left.len(),
            right: right.len(),
        })));
    }

    let mut left_keys: Vec<&String> = left.keys().collect();
    let mut right_keys: Vec<&String> = right.keys().collect();
    left_keys.sort_unstable();
    right_keys.sort_unstable();

    // Same count and unique keys, so the first differing position exposes a
    // key that the other side lacks: the smaller of the two.
    for (l, r) in left_keys.iter().zip(&right_keys) {
        if l != r {
            let (key, missing_from) = if l < r {
                (l, Side::Right)
            } else {
                (r, Side::Left)
            };
            return Ok(Some(cmp.mismatch(MismatchKind::MissingKey {
                key: (*key).clone(),
                missing_from,
            })));
        }
    }

    for key in left_keys {
        let (Some(a), Some(b)) = (left.get(key), right.get(key)) else {
            continue;
        };
        if let Some(mismatch) = cmp.compare_at(PathSegment::Key(key.clone()), a, b)? {
            return Ok(Some(mismatch));
        }
    }
    Ok(None)
}
