use super::{NamingConvention, NoopConvention};
use crate::core::Result;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::{debug, trace};

/// Memoizing decorator over any [`NamingConvention`]
///
/// Caches every transformation keyed by the original identifier, so a rule is
/// invoked at most once per distinct name between resets. The cache itself
/// implements [`NamingConvention`], so it composes transparently wherever a
/// plain rule is accepted.
///
/// Safe for concurrent use: cache hits take only a shared lock, and the
/// underlying rule runs without any lock held. Two callers racing on the same
/// uncached name may both invoke the rule; both writes store the same value
/// since rules are pure, so the map stays consistent.
///
/// # Examples
///
/// ```
/// use sqlcase::{CachedConvention, SnakeConvention};
/// use std::sync::Arc;
///
/// let conv = CachedConvention::wrap(Some(Arc::new(SnakeConvention)));
///
/// assert_eq!(conv.name("UserID"), "user_id");
/// // Second lookup is served from the cache
/// assert_eq!(conv.name("UserID"), "user_id");
/// ```
pub struct CachedConvention {
    orig: Arc<dyn NamingConvention>,
    names: RwLock<HashMap<String, String>>,
}

impl CachedConvention {
    /// Create a cache over the given rule
    ///
    /// Prefer [`CachedConvention::wrap`], which also handles the absent-rule
    /// and already-cached cases.
    pub fn new(orig: Arc<dyn NamingConvention>) -> Self {
        Self {
            orig,
            names: RwLock::new(HashMap::new()),
        }
    }

    /// Wrap a convention in a memoizing cache
    ///
    /// With `None`, the identity rule is used, so `name` returns its input.
    /// If `orig` is already a `CachedConvention`, the same instance is
    /// returned unchanged rather than stacking a second cache on top.
    ///
    /// # Examples
    ///
    /// ```
    /// use sqlcase::{CachedConvention, UpperConvention};
    /// use std::sync::Arc;
    ///
    /// let cached = CachedConvention::wrap(Some(Arc::new(UpperConvention)));
    /// let rewrapped = CachedConvention::wrap(Some(Arc::clone(&cached)));
    /// assert!(Arc::ptr_eq(&cached, &rewrapped));
    /// ```
    pub fn wrap(orig: Option<Arc<dyn NamingConvention>>) -> Arc<dyn NamingConvention> {
        match orig {
            None => Arc::new(Self::new(Arc::new(NoopConvention))),
            Some(conv) if conv.is_cached() => conv,
            Some(conv) => Arc::new(Self::new(conv)),
        }
    }

    /// Number of memoized names
    pub fn len(&self) -> usize {
        self.names
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl NamingConvention for CachedConvention {
    fn name(&self, original: &str) -> String {
        // Empty names are never cached and never delegated
        if original.is_empty() {
            return String::new();
        }

        {
            let names = self.names.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(resolved) = names.get(original) {
                return resolved.clone();
            }
        }

        // Compute outside the lock so concurrent readers are not blocked on
        // the rule. Racing writers store the same value (rules are pure).
        let resolved = self.orig.name(original);
        trace!(original, resolved = resolved.as_str(), "naming cache miss");

        let mut names = self.names.write().unwrap_or_else(PoisonError::into_inner);
        names.insert(original.to_string(), resolved.clone());
        resolved
    }

    fn reset(&self) -> Result<()> {
        // The cache is cleared first and stays cleared even if the
        // underlying reset fails afterwards.
        {
            let mut names = self.names.write().unwrap_or_else(PoisonError::into_inner);
            names.clear();
        }
        debug!("naming cache cleared");
        self.orig.reset()
    }

    fn is_cached(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convention::SnakeConvention;

    #[test]
    fn test_hit_returns_same_value() {
        let conv = CachedConvention::new(Arc::new(SnakeConvention));
        assert_eq!(conv.name("UserID"), "user_id");
        assert_eq!(conv.name("UserID"), "user_id");
        assert_eq!(conv.len(), 1);
    }

    #[test]
    fn test_empty_name_not_cached() {
        let conv = CachedConvention::new(Arc::new(SnakeConvention));
        assert_eq!(conv.name(""), "");
        assert!(conv.is_empty());
    }

    #[test]
    fn test_reset_clears_map() {
        let conv = CachedConvention::new(Arc::new(SnakeConvention));
        conv.name("UserID");
        conv.name("CreatedAt");
        assert_eq!(conv.len(), 2);

        conv.reset().unwrap();
        assert!(conv.is_empty());
    }

    #[test]
    fn test_wrap_none_is_identity() {
        let conv = CachedConvention::wrap(None);
        assert_eq!(conv.name("AnyName"), "AnyName");
    }
}
