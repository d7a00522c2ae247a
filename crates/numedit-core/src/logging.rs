//! Logging facilities for numedit.
//!
//! numedit uses the `tracing` crate for instrumentation. To see logs, install
//! a tracing subscriber in your application:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt::init();
//!
//!     // Your application code...
//! }
//! ```
//!
//! Filter by the target names in [`targets`], e.g.
//! `RUST_LOG=numedit::field=debug`.

/// Target names for log filtering.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "numedit_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "numedit_core::signal";
    /// Parameter system target.
    pub const PARAMETER: &str = "numedit_core::parameter";
    /// Numeric field interaction target.
    pub const FIELD: &str = "numedit::field";
    /// Input subscription target.
    pub const INPUT: &str = "numedit::input";
}

/// Macros for common tracing patterns.
///
/// These are thin wrappers around the `tracing` macros with the core target.
#[macro_export]
macro_rules! numedit_trace {
    ($($arg:tt)*) => {
        tracing::trace!(target: "numedit_core", $($arg)*)
    };
}

#[macro_export]
macro_rules! numedit_warn {
    ($($arg:tt)*) => {
        tracing::warn!(target: "numedit_core", $($arg)*)
    };
}

#[cfg(test)]
mod tests {
    use super::targets;

    #[test]
    fn test_targets_are_namespaced() {
        assert!(targets::SIGNAL.starts_with(targets::CORE));
        assert!(targets::PARAMETER.starts_with(targets::CORE));
        assert!(targets::FIELD.starts_with("numedit::"));
    }

    #[test]
    fn test_macros_expand() {
        numedit_trace!("trace {}", 1);
        numedit_trace!(value = 2, "structured");
        numedit_warn!("warn");
    }
}
