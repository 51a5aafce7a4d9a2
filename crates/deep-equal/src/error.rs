use thiserror::Error;

/// Inputs the comparator refuses to reason about.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Unsupported {
    #[error("distinct function values cannot be compared structurally")]
    Function,
    #[error("cyclic structure")]
    CyclicStructure,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DeepEqualError {
    #[error("unsupported input: {0}")]
    Unsupported(#[from] Unsupported),
    #[error("nesting exceeds the maximum depth of {limit}")]
    DepthExceeded { limit: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let err = DeepEqualError::from(Unsupported::CyclicStructure);
        assert_eq!(err.to_string(), "unsupported input: cyclic structure");
        assert_eq!(
            DeepEqualError::DepthExceeded { limit: 3 }.to_string(),
            "nesting exceeds the maximum depth of 3"
        );
    }
}
