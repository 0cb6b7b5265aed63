//! The flat store contract.
//!
//! A [`PartStore`] performs single-node CRUD and knows nothing about trees beyond
//! the parent foreign key. Tree algorithms receive the store handle explicitly.

use async_trait::async_trait;
use std::collections::HashMap;

use super::counter;
use super::error::BomResult;
use super::part::{NewPart, Part, PartId};

/// Backing store for parts.
///
/// Every call acquires and releases its own connection or transaction; no
/// state is held between calls.
#[async_trait]
pub trait PartStore: Send + Sync {
    /// Look up a single part. Absence is `Ok(None)`.
    async fn find_by_id(&self, id: PartId) -> BomResult<Option<Part>>;

    /// All parts, ordered by id.
    async fn find_all(&self) -> BomResult<Vec<Part>>;

    /// Look up a set of parts. The result has one entry per distinct requested id.
    async fn find_by_ids(&self, ids: &[PartId]) -> BomResult<HashMap<PartId, Option<Part>>>;

    /// Immediate children of every given parent, ordered by id.
    async fn find_children(&self, parent_ids: &[PartId]) -> BomResult<Vec<Part>>;

    /// Insert a part under `parent_id` (or as a root) and return its new id.
    ///
    /// Fails with `NotFound` when the parent does not exist; the check and the
    /// insert are one atomic unit.
    async fn insert(&self, parent_id: Option<PartId>, part: &NewPart) -> BomResult<PartId>;

    /// Insert a root part and return its new id.
    async fn create(&self, part: &NewPart) -> BomResult<PartId> {
        self.insert(None, part).await
    }

    /// Overwrite name and number of an existing part. Id and parent are kept.
    async fn update(&self, id: PartId, part: &NewPart) -> BomResult<()>;

    /// Delete a part and, transitively, all its descendants.
    ///
    /// Returns whether a part existed.
    async fn delete(&self, id: PartId) -> BomResult<bool>;

    /// Number of descendants of `id`, excluding `id` itself. Zero for unknown ids.
    ///
    /// The default expands level by level in-process; stores that can evaluate a
    /// recursive query server-side should override it.
    async fn count_descendants(&self, id: PartId) -> BomResult<u64> {
        counter::count_by_levels(self, id).await
    }
}
