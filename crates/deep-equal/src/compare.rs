//! Top-level comparison.
//!
//! Dispatch order for two values `a` and `b`:
//!
//! 1. strictly identical (same primitive, same handle) → equal;
//! 2. both primitive → unequal, since step 1 already failed;
//! 3. one primitive, one compound → unequal;
//! 4. two compounds → unequal if one is an array and the other is not,
//!    otherwise the object or array comparator decides;
//! 5. distinct functions → error or unequal, depending on
//!    [`FunctionPolicy`].

use std::collections::HashSet;

use crate::classify::{classify, type_label, Class, Compound};
use crate::error::{DeepEqualError, Unsupported};
use crate::mismatch::{format_pointer, Mismatch, MismatchKind, PathSegment};
use crate::options::{FunctionPolicy, Options};
use crate::value::Value;
use crate::{map, sequence};

pub(crate) type Outcome = Result<Option<Mismatch>, DeepEqualError>;

/// State for one top-level comparison: where we are and which compound
/// pairs are still being compared further up the stack.
pub(crate) struct Comparator<'o> {
    options: &'o Options,
    path: Vec<PathSegment>,
    in_progress: HashSet<(usize, usize)>,
    depth: usize,
}

impl<'o> Comparator<'o> {
    pub(crate) fn new(options: &'o Options) -> Self {
        Self {
            options,
            path: Vec::new(),
            in_progress: HashSet::new(),
            depth: 0,
        }
    }

    pub(crate) fn compare(&mut self, a: &Value, b: &Value) -> Outcome {
        if a.strict_equals(b) {
            return Ok(None);
        }
        match (classify(a), classify(b)) {
            (Class::Null | Class::Primitive, Class::Null | Class::Primitive) => {
                if a.type_of() == b.type_of() {
                    Ok(Some(self.mismatch(MismatchKind::Value)))
                } else {
                    Ok(Some(self.type_mismatch(a, b)))
                }
            }
            (Class::Compound(x), Class::Compound(y)) => self.compounds(x, y),
            (Class::Function(_), Class::Function(_)) => match self.options.function_policy() {
                FunctionPolicy::Reject => {
                    tracing::debug!(path = %format_pointer(&self.path), "distinct function values");
                    Err(Unsupported::Function.into())
                }
                FunctionPolicy::Identity => Ok(Some(self.mismatch(MismatchKind::Value))),
            },
            (Class::Null | Class::Primitive, Class::Compound(_))
            | (Class::Compound(_), Class::Null | Class::Primitive)
            | (Class::Function(_), Class::Null | Class::Primitive | Class::Compound(_))
            | (Class::Null | Class::Primitive | Class::Compound(_), Class::Function(_)) => {
                Ok(Some(self.type_mismatch(a, b)))
            }
        }
    }

    /// Compares one entry of the compounds currently on top of the stack.
    pub(crate) fn compare_at(&mut self, segment: PathSegment, a: &Value, b: &Value) -> Outcome {
        self.path.push(segment);
        let outcome = self.compare(a, b);
        self.path.pop();
        outcome
    }

    pub(crate) fn mismatch(&self, kind: MismatchKind) -> Mismatch {
        let mismatch = Mismatch {
            path: self.path.clone(),
            kind,
        };
        tracing::trace!(path = %mismatch.pointer(), kind = %mismatch.kind, "mismatch");
        mismatch
    }

    fn type_mismatch(&self, a: &Value, b: &Value) -> Mismatch {
        self.mismatch(MismatchKind::Type {
            left: type_label(a),
            right: type_label(b),
        })
    }

    fn compounds(&mut self, x: Compound<'_>, y: Compound<'_>) -> Outcome {
        match (x, y) {
            (Compound::Array(xs), Compound::Array(ys)) => {
                self.descend((x.addr(), y.addr()), |cmp| sequence::compare(cmp, xs, ys))
            }
            (Compound::Object(xo), Compound::Object(yo)) => {
                self.descend((x.addr(), y.addr()), |cmp| map::compare(cmp, xo, yo))
            }
            (Compound::Array(_), Compound::Object(_)) => Ok(Some(self.mismatch(MismatchKind::Type {
                left: "array",
                right: "object",
            }))),
            (Compound::Object(_), Compound::Array(_)) => Ok(Some(self.mismatch(MismatchKind::Type {
                left: "object",
                right: "array",
            }))),
        }
    }

    /// Runs `f` one compound level deeper, enforcing the depth limit and
    /// refusing to re-enter a pair that is still being compared.
    fn descend<F>(&mut self, pair: (usize, usize), f: F) -> Outcome
    where
        F: FnOnce(&mut Self) -> Outcome,
    {
        if let Some(limit) = self.options.max_depth() {
            if self.depth >= limit {
                tracing::debug!(path = %format_pointer(&self.path), limit, "depth limit reached");
                return Err(DeepEqualError::DepthExceeded { limit });
            }
        }
        let track = self.options.cycle_detection();
        if track && !self.in_progress.insert(pair) {
            tracing::debug!(path = %format_pointer(&self.path), "cycle detected");
            return Err(Unsupported::CyclicStructure.into());
        }
        self.depth += 1;
        let outcome = f(self);
        self.depth -= 1;
        if track {
            self.in_progress.remove(&pair);
        }
        outcome
    }
}

/// Deep structural equality with default [`Options`].
///
/// Primitives compare strictly (no coercion between kinds), arrays compare
/// element by element in order, objects compare by key set and then value by
/// value regardless of key order. Never fails: inputs that cannot be compared
/// (distinct functions, cycles) are reported as unequal.
///
/// ```
/// use deep_equal::{deep_equal, Value};
/// use serde_json::json;
///
/// let a = Value::from(json!({"a": 1, "b": [1, 2]}));
/// let b = Value::from(json!({"b": [1, 2], "a": 1}));
/// assert!(deep_equal(&a, &b));
/// assert!(!deep_equal(&Value::from(5), &Value::from("5")));
/// ```
pub fn deep_equal(a: &Value, b: &Value) -> bool {
    Options::default().equal(a, b)
}

/// Like [`deep_equal`], but surfaces inputs it cannot decide on.
pub fn try_deep_equal(a: &Value, b: &Value) -> Result<bool, DeepEqualError> {
    Options::default().try_equal(a, b)
}

/// The first [`Mismatch`] between `a` and `b`, in comparison order.
pub fn diff(a: &Value, b: &Value) -> Result<Option<Mismatch>, DeepEqualError> {
    Options::default().diff(a, b)
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        deep_equal(self, other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mismatch::Side;
    use crate::value::{Array, Function, Object, Symbol};
    use serde_json::json;

    fn v(json: serde_json::Value) -> Value {
        Value::from(json)
    }

    #[test]
    fn identical_handles_short_circuit() {
        let shared = v(json!({"a": [1, {"b": null}]}));
        assert!(deep_equal(&shared, &shared.clone()));
        let f = Value::from(Function::new("f"));
        assert_eq!(try_deep_equal(&f, &f.clone()), Ok(true));
    }

    #[test]
    fn primitives_compare_strictly() {
        assert!(deep_equal(&Value::Undefined, &Value::Undefined));
        assert!(!deep_equal(&Value::Undefined, &Value::Null));
        assert!(!deep_equal(&Value::from(1), &Value::from(true)));
        assert!(!deep_equal(&Value::from(1), &Value::BigInt(1)));
        assert!(!deep_equal(&Value::from(f64::NAN), &Value::from(f64::NAN)));
        assert!(deep_equal(&Value::from(0.0), &Value::from(-0.0)));
        assert!(!deep_equal(
            &Value::from(Symbol::new("a")),
            &Value::from(Symbol::new("a"))
        ));
    }

    #[test]
    fn primitive_mismatch_kinds() {
        assert_eq!(
            diff(&Value::from(1), &Value::from(2)).unwrap().unwrap().kind,
            MismatchKind::Value
        );
        assert_eq!(
            diff(&Value::Null, &Value::Undefined).unwrap().unwrap().kind,
            MismatchKind::Type {
                left: "null",
                right: "undefined"
            }
        );
        assert_eq!(
            diff(&Value::Null, &v(json!({}))).unwrap().unwrap().kind,
            MismatchKind::Type {
                left: "null",
                right: "object"
            }
        );
    }

    #[test]
    fn array_never_equals_object() {
        let arr = v(json!([]));
        let obj = v(json!({}));
        assert!(!deep_equal(&arr, &obj));
        assert!(!deep_equal(&obj, &arr));
        // Same keys, different array tag.
        let arr = v(json!(["x"]));
        let obj = v(json!({"0": "x"}));
        assert_eq!(
            diff(&arr, &obj).unwrap().unwrap().kind,
            MismatchKind::Type {
                left: "array",
                right: "object"
            }
        );
    }

    #[test]
    fn functions_under_each_policy() {
        let f = Value::from(Function::new("f"));
        let g = Value::from(Function::new("f"));
        assert_eq!(
            try_deep_equal(&f, &g),
            Err(DeepEqualError::Unsupported(Unsupported::Function))
        );
        assert!(!deep_equal(&f, &g));

        let identity = Options::new().with_function_policy(FunctionPolicy::Identity);
        assert_eq!(identity.try_equal(&f, &g), Ok(false));
        assert_eq!(identity.try_equal(&f, &f), Ok(true));

        // A function against anything else is a plain type mismatch.
        assert_eq!(try_deep_equal(&f, &Value::from(1)), Ok(false));
        assert_eq!(try_deep_equal(&v(json!({})), &f), Ok(false));
    }

    #[test]
    fn nested_mismatch_path() {
        let a = v(json!({"a": {"b": [1, 2, {"c": 3}]}}));
        let b = v(json!({"a": {"b": [1, 2, {"c": 4}]}}));
        let mismatch = diff(&a, &b).unwrap().unwrap();
        assert_eq!(mismatch.pointer(), "/a/b/2/c");
        assert_eq!(mismatch.kind, MismatchKind::Value);
    }

    #[test]
    fn missing_key_side() {
        let a = v(json!({"a": 1, "b": 2}));
        let b = v(json!({"a": 1, "c": 2}));
        assert_eq!(
            diff(&a, &b).unwrap().unwrap().kind,
            MismatchKind::MissingKey {
                key: "b".into(),
                missing_from: Side::Right
            }
        );
        assert_eq!(
            diff(&b, &a).unwrap().unwrap().kind,
            MismatchKind::MissingKey {
                key: "b".into(),
                missing_from: Side::Left
            }
        );
    }

    #[test]
    fn cycles_are_reported() {
        let a = Array::new();
        a.push(a.clone());
        let b = Array::new();
        b.push(b.clone());
        let (a, b) = (Value::from(a), Value::from(b));
        assert_eq!(
            try_deep_equal(&a, &b),
            Err(DeepEqualError::Unsupported(Unsupported::CyclicStructure))
        );
        assert!(!deep_equal(&a, &b));
        // The very same cyclic value is still equal to itself.
        assert!(deep_equal(&a, &a));
    }

    #[test]
    fn cycle_against_finite_value_terminates() {
        let obj = Object::new();
        obj.insert("next", obj.clone());
        let cyclic = Value::from(obj);
        let finite = v(json!({"next": {"next": {"next": null}}}));
        assert_eq!(try_deep_equal(&cyclic, &finite), Ok(false));
        assert_eq!(try_deep_equal(&finite, &cyclic), Ok(false));
    }

    #[test]
    fn shared_subtrees_are_not_cycles() {
        let shared = v(json!([1, 2]));
        let a = Value::array([shared.clone(), shared.clone()]);
        let b = Value::array([v(json!([1, 2])), v(json!([1, 2]))]);
        assert_eq!(try_deep_equal(&a, &b), Ok(true));
    }

    #[test]
    fn depth_limit() {
        let a = v(json!([[[1]]]));
        let b = v(json!([[[1]]]));
        assert_eq!(Options::new().with_max_depth(3).try_equal(&a, &b), Ok(true));
        assert_eq!(
            Options::new().with_max_depth(2).try_equal(&a, &b),
            Err(DeepEqualError::DepthExceeded { limit: 2 })
        );
        // Scalars never count towards the limit.
        assert_eq!(
            Options::new()
                .with_max_depth(0)
                .try_equal(&Value::from(1), &Value::from(1)),
            Ok(true)
        );
    }

    #[test]
    fn depth_limit_stops_untracked_cycles() {
        let a = Array::new();
        a.push(a.clone());
        let b = Array::new();
        b.push(b.clone());
        let options = Options::new().without_cycle_detection().with_max_depth(64);
        assert_eq!(
            options.try_equal(&Value::from(a), &Value::from(b)),
            Err(DeepEqualError::DepthExceeded { limit: 64 })
        );
    }

    #[test]
    fn partial_eq_uses_deep_equality() {
        assert_eq!(v(json!({"a": [1, 2]})), v(json!({"a": [1, 2]})));
        assert_ne!(v(json!({"a": [1, 2]})), v(json!({"a": [2, 1]})));
    }
}
