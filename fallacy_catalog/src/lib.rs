//! # Fallacy Catalog
//!
//! The content crate for the fallacy trainer: fallacy definitions, quiz questions,
//! daily challenges, and badges. The catalog is read-only reference data and
//! contains no scoring or progress logic.

pub mod catalog;
pub mod entities;
pub mod error;
pub mod taxonomy;

pub use catalog::*;
pub use entities::*;
pub use error::*;
pub use taxonomy::*;
