//! Comparison settings.

use crate::compare::Comparator;
use crate::error::DeepEqualError;
use crate::mismatch::Mismatch;
use crate::value::Value;

/// What to do when two distinct function values meet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FunctionPolicy {
    /// Fail with [`Unsupported::Function`](crate::Unsupported::Function).
    #[default]
    Reject,
    /// Functions are equal only to themselves.
    Identity,
}

/// Settings for one or more comparisons.
///
/// ```
/// use deep_equal::{FunctionPolicy, Options, Value};
///
/// let options = Options::new()
///     .with_max_depth(32)
///     .with_function_policy(FunctionPolicy::Identity);
/// assert!(options.equal(&Value::array([1, 2]), &Value::array([1, 2])));
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    cycle_detection: bool,
    max_depth: Option<usize>,
    functions: FunctionPolicy,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            cycle_detection: true,
            max_depth: None,
            functions: FunctionPolicy::default(),
        }
    }
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stop tracking in-progress compound pairs.
    ///
    /// Saves a hash set per comparison, but the caller then has to guarantee
    /// acyclic inputs: a cycle on both sides recurses until the stack runs
    /// out unless [`with_max_depth`](Self::with_max_depth) is also set.
    pub fn without_cycle_detection(mut self) -> Self {
        self.cycle_detection = false;
        self
    }

    /// Limit how many compounds may be nested inside each other. The root
    /// compound counts as depth 1; a limit of 0 rejects any two distinct
    /// arrays, or two distinct objects.
    pub fn with_max_depth(mut self, limit: usize) -> Self {
        self.max_depth = Some(limit);
        self
    }

    pub fn with_function_policy(mut self, policy: FunctionPolicy) -> Self {
        self.functions = policy;
        self
    }

    pub fn cycle_detection(&self) -> bool {
        self.cycle_detection
    }

    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    pub fn function_policy(&self) -> FunctionPolicy {
        self.functions
    }

    /// Deep equality that always answers. A comparison that fails with an
    /// error counts as unequal.
    pub fn equal(&self, a: &Value, b: &Value) -> bool {
        match self.try_equal(a, b) {
            Ok(equal) => equal,
            Err(err) => {
                tracing::debug!(%err, "comparison aborted, treating values as unequal");
                false
            }
        }
    }

    pub fn try_equal(&self, a: &Value, b: &Value) -> Result<bool, DeepEqualError> {
        Ok(self.diff(a, b)?.is_none())
    }

    /// The first mismatch between `a` and `b`, or `None` when they are equal.
    pub fn diff(&self, a: &Value, b: &Value) -> Result<Option<Mismatch>, DeepEqualError> {
        Comparator::new(self).compare(a, b)
    }
}
