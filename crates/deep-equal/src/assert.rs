//! Test assertions built on [`diff`](crate::diff).

/// Asserts that two [`Value`](crate::Value)s are deep-equal, reporting the
/// first mismatch on failure.
///
/// ```
/// use deep_equal::{assert_deep_eq, Value};
/// use serde_json::json;
///
/// assert_deep_eq!(Value::from(json!({"a": [1]})), Value::from(json!({"a": [1]})));
/// ```
#[macro_export]
macro_rules! assert_deep_eq {
    ($left:expr, $right:expr $(,)?) => {
        match $crate::diff(&$left, &$right) {
            ::core::result::Result::Ok(::core::option::Option::None) => {}
            ::core::result::Result::Ok(::core::option::Option::Some(mismatch)) => {
                panic!("assertion `assert_deep_eq!(left, right)` failed\n\n{mismatch}\n");
            }
            ::core::result::Result::Err(err) => {
                panic!("assertion `assert_deep_eq!(left, right)` failed: {err}");
            }
        }
    };
    ($left:expr, $right:expr, $($arg:tt)+) => {
        match $crate::diff(&$left, &$right) {
            ::core::result::Result::Ok(::core::option::Option::None) => {}
            ::core::result::Result::Ok(::core::option::Option::Some(mismatch)) => {
                panic!(
                    "assertion `assert_deep_eq!(left, right)` failed: {}\n\n{mismatch}\n",
                    format_args!($($arg)+)
                );
            }
            ::core::result::Result::Err(err) => {
                panic!(
                    "assertion `assert_deep_eq!(left, right)` failed: {}: {err}",
                    format_args!($($arg)+)
                );
            }
        }
    };
}

/// Asserts that two [`Value`](crate::Value)s are not deep-equal. Inputs that
/// cannot be compared fail the assertion.
#[macro_export]
macro_rules! assert_deep_ne {
    ($left:expr, $right:expr $(,)?) => {
        match $crate::diff(&$left, &$right) {
            ::core::result::Result::Ok(::core::option::Option::Some(_)) => {}
            ::core::result::Result::Ok(::core::option::Option::None) => {
                panic!("assertion `assert_deep_ne!(left, right)` failed: values are deep-equal");
            }
            ::core::result::Result::Err(err) => {
                panic!("assertion `assert_deep_ne!(left, right)` failed: {err}");
            }
        }
    };
}
