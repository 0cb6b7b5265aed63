//! Bill-of-Materials domain: the hierarchical part store and its tree algorithms.
//!
//! ## Architecture
//!
//! - `part.rs` - The part entity and field validation
//! - `store.rs` - The flat store contract (`PartStore`)
//! - `sqlite.rs` - SQLite implementation of the store
//! - `materializer.rs` - Breadth-first subtree loading into a `PartTree`
//! - `counter.rs` - Descendant counting (recursive query or level expansion)
//! - `mutator.rs` - Add sub part, copy, cascade delete
//! - `renderer.rs` - Indented text rendering of a subtree
//! - `service.rs` - `BomService`, the cancellable facade used by tools

pub mod counter;
mod error;
pub mod materializer;
pub mod mutator;
mod part;
pub mod renderer;
mod service;
mod sqlite;
mod store;

pub use error::{BomError, BomResult};
pub use materializer::{PartTree, TreeLimits, TreeNode, materialize};
pub use part::{MAX_FIELD_LENGTH, NewPart, Part, PartId};
pub use renderer::render;
pub use service::BomService;
pub use sqlite::SqlitePartStore;
pub use store::PartStore;
