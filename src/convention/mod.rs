pub mod cached;
pub mod strcase;

pub use cached::CachedConvention;

use crate::core::{NamingError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// A naming convention for SQL identifiers
///
/// Maps a column or table name into a target naming style. Implementations
/// must be pure: `name` returns the same output for the same input, with no
/// side effects. `reset` clears any state a rule may hold; the built-in rules
/// are stateless, so for them it is a no-op.
pub trait NamingConvention: Send + Sync {
    /// Transform an identifier into this convention's naming style
    fn name(&self, original: &str) -> String;

    /// Clear any internal state held by the rule
    fn reset(&self) -> Result<()>;

    /// Rename a set of result-set column identifiers
    ///
    /// This is the entry point used by a statement/result layer to rename
    /// columns before exposing rows to a caller.
    fn rename_all(&self, columns: &[String]) -> Vec<String> {
        columns.iter().map(|column| self.name(column)).collect()
    }

    /// Whether this convention already memoizes its results
    ///
    /// Overridden by [`CachedConvention`] so that wrapping an already-cached
    /// convention does not stack a second cache on top.
    fn is_cached(&self) -> bool {
        false
    }
}

/// Identity convention: returns identifiers unchanged
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopConvention;

impl NamingConvention for NoopConvention {
    fn name(&self, original: &str) -> String {
        original.to_string()
    }

    fn reset(&self) -> Result<()> {
        Ok(())
    }
}

/// Lower-cases the whole identifier
#[derive(Debug, Default, Clone, Copy)]
pub struct LowerConvention;

impl NamingConvention for LowerConvention {
    fn name(&self, original: &str) -> String {
        original.to_lowercase()
    }

    fn reset(&self) -> Result<()> {
        Ok(())
    }
}

/// Upper-cases the whole identifier
#[derive(Debug, Default, Clone, Copy)]
pub struct UpperConvention;

impl NamingConvention for UpperConvention {
    fn name(&self, original: &str) -> String {
        original.to_uppercase()
    }

    fn reset(&self) -> Result<()> {
        Ok(())
    }
}

/// Rewrites identifiers as snake_case (`UserID` -> `user_id`)
#[derive(Debug, Default, Clone, Copy)]
pub struct SnakeConvention;

impl NamingConvention for SnakeConvention {
    fn name(&self, original: &str) -> String {
        strcase::to_snake(original)
    }

    fn reset(&self) -> Result<()> {
        Ok(())
    }
}

/// Rewrites identifiers as camelCase (`http_server` -> `httpServer`)
#[derive(Debug, Default, Clone, Copy)]
pub struct CamelConvention;

impl NamingConvention for CamelConvention {
    fn name(&self, original: &str) -> String {
        strcase::to_camel(original)
    }

    fn reset(&self) -> Result<()> {
        Ok(())
    }
}

/// Built-in convention selector, for configuration
///
/// Parses from the names `none`, `lower`, `upper`, `snake` and `camel`
/// (case-insensitive), so a convention can be picked from a config file or
/// connection option.
///
/// # Examples
///
/// ```
/// use sqlcase::ConventionKind;
///
/// let kind: ConventionKind = "snake".parse()?;
/// let conv = kind.convention();
/// assert_eq!(conv.name("CreatedAt"), "created_at");
/// # Ok::<(), sqlcase::NamingError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConventionKind {
    None,
    Lower,
    Upper,
    Snake,
    Camel,
}

impl ConventionKind {
    /// Construct the rule this kind names
    pub fn convention(self) -> Arc<dyn NamingConvention> {
        match self {
            ConventionKind::None => Arc::new(NoopConvention),
            ConventionKind::Lower => Arc::new(LowerConvention),
            ConventionKind::Upper => Arc::new(UpperConvention),
            ConventionKind::Snake => Arc::new(SnakeConvention),
            ConventionKind::Camel => Arc::new(CamelConvention),
        }
    }

    /// Construct the rule wrapped in a memoizing cache
    pub fn cached_convention(self) -> Arc<dyn NamingConvention> {
        CachedConvention::wrap(Some(self.convention()))
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ConventionKind::None => "none",
            ConventionKind::Lower => "lower",
            ConventionKind::Upper => "upper",
            ConventionKind::Snake => "snake",
            ConventionKind::Camel => "camel",
        }
    }
}

impl fmt::Display for ConventionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConventionKind {
    type Err = NamingError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(ConventionKind::None),
            "lower" => Ok(ConventionKind::Lower),
            "upper" => Ok(ConventionKind::Upper),
            "snake" => Ok(ConventionKind::Snake),
            "camel" => Ok(ConventionKind::Camel),
            _ => Err(NamingError::UnknownConvention(s.to_string())),
        }
    }
}
