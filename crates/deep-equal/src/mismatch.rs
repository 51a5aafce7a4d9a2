//! Reporting where two values stop being equal.
//!
//! Paths render as RFC 6901 JSON Pointers: `""` is the root, `/a/0` is the
//! first element under key `a`, and `~`/`/` inside keys are escaped.

use std::fmt;

/// One step from a compound into one of its entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    Key(String),
    Index(usize),
}

/// Which operand of a comparison something refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Side::Left => "left",
            Side::Right => "right",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MismatchKind {
    /// Different types: `number` vs `string`, `array` vs `object`, `null` vs
    /// anything else.
    Type {
        left: &'static str,
        right: &'static str,
    },
    /// Same type, different value. Distinct symbols and functions land here.
    Value,
    /// Arrays of different length or objects with a different key count.
    Length { left: usize, right: usize },
    /// `key` exists on one side only; `missing_from` names the other side.
    MissingKey { key: String, missing_from: Side },
}

impl fmt::Display for MismatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MismatchKind::Type { left, right } => write!(f, "type {left} != {right}"),
            MismatchKind::Value => f.write_str("values differ"),
            MismatchKind::Length { left, right } => write!(f, "length {left} != {right}"),
            MismatchKind::MissingKey { key, missing_from } => {
                write!(f, "key `{key}` missing from {missing_from}")
            }
        }
    }
}

/// The first disagreement found between two values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    pub path: Vec<PathSegment>,
    pub kind: MismatchKind,
}

impl Mismatch {
    /// The mismatch location as a JSON Pointer.
    pub fn pointer(&self) -> String {
        format_pointer(&self.path)
    }
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "at root: {}", self.kind)
        } else {
            write!(f, "at `{}`: {}", self.pointer(), self.kind)
        }
    }
}

fn escape_component(component: &str) -> std::borrow::Cow<'_, str> {
    if !component.contains(|c: char| c == '~' || c == '/') {
        return component.into();
    }
    component.replace('~', "~0").replace('/', "~1").into()
}

pub(crate) fn format_pointer(path: &[PathSegment]) -> String {
    let mut out = String::new();
    for segment in path {
        out.push('/');
        match segment {
            PathSegment::Key(key) => out.push_str(&escape_component(key)),
            PathSegment::Index(index) => out.push_str(&index.to_string()),
        }
    }
    out
}
