//! # Snipvault Repository
//!
//! The persistent snippet store. Services depend on the [`SnippetRepository`]
//! trait; [`MySqlSnippetRepository`] is the SQLx/MySQL implementation.
//!
//! ```text
//! SnippetService
//!   ↓  Arc<dyn SnippetRepository>
//! MySqlSnippetRepository
//!   ↓  Arc<dyn DatabasePoolInterface>
//! MySQL
//! ```

pub mod mysql;
pub mod pool;
pub mod traits;

pub use mysql::*;
pub use pool::*;
pub use traits::*;
