//! deep-equal - Deep structural equality for dynamically typed values.
//!
//! [`deep_equal`] compares two [`Value`]s: primitives strictly, arrays element
//! by element in order, objects key by key regardless of insertion order.
//! A number never equals a string, an array never equals an object, and
//! `null` never equals `undefined`.
//!
//! Compounds are shared handles, so inputs may contain cycles. Cycles are
//! detected per comparison and reported as
//! [`Unsupported::CyclicStructure`] by [`try_deep_equal`]; [`deep_equal`]
//! answers `false` for them instead. [`diff`] tells where two values part
//! ways, and [`Options`] tunes cycle tracking, depth limits and how function
//! values are treated.

mod assert;
pub mod classify;
mod compare;
mod error;
mod map;
mod mismatch;
mod options;
mod sequence;
pub mod value;

pub use classify::{classify, is_object, is_primitive, Class, Compound, RuntimeKind};
pub use compare::{deep_equal, diff, try_deep_equal};
pub use error::{DeepEqualError, Unsupported};
pub use mismatch::{Mismatch, MismatchKind, PathSegment, Side};
pub use options::{FunctionPolicy, Options};
pub use value::{Array, Function, Object, Symbol, Value};
