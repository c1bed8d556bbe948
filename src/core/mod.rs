pub mod error;

pub use error::{NamingError, Result};
