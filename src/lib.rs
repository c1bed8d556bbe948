// ============================================================================
// sqlcase Library
// ============================================================================

pub mod convention;
pub mod core;

// Re-export main types for convenience
pub use convention::{
    CachedConvention, CamelConvention, ConventionKind, LowerConvention, NamingConvention,
    NoopConvention, SnakeConvention, UpperConvention,
};
pub use core::{NamingError, Result};

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_reexported_surface() {
        let conv = CachedConvention::wrap(Some(Arc::new(SnakeConvention)));
        assert_eq!(conv.name("UserID"), "user_id");
        conv.reset().unwrap();
    }

    #[test]
    fn test_kind_selects_rule() {
        let kind: ConventionKind = "camel".parse().unwrap();
        assert_eq!(kind.convention().name("http_server"), "httpServer");
    }
}
