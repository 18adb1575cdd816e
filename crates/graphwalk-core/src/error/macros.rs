//! Error macros for graphwalk

/// Macro for creating usage errors
#[macro_export]
macro_rules! bail_usage {
    ($msg:expr) => {
        return Err($crate::error::GraphwalkError::UsageError($msg.to_string()))
    };
}
