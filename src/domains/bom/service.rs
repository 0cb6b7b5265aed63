//! BOM service - the entry point used by tools and transports.
//!
//! Every operation takes a [`CancellationToken`]. The operation future is raced
//! against the token; when the token fires first the future is dropped, which
//! aborts the in-flight store call and rolls back any open transaction.
//! A statement or commit already handed to the SQLite worker may still apply,
//! so `Cancelled` after a mutation means "outcome unknown", never "partial".

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{info, instrument, warn};

use super::error::{BomError, BomResult};
use super::materializer::{PartTree, TreeLimits, materialize};
use super::mutator;
use super::part::{NewPart, Part, PartId};
use super::renderer::render;
use super::sqlite::SqlitePartStore;
use super::store::PartStore;

/// Run `operation` unless `cancel` fires first.
async fn cancellable<T, F>(cancel: &CancellationToken, operation: F) -> BomResult<T>
where
    F: Future<Output = BomResult<T>>,
{
    tokio::select! {
        biased;
        _ = cancel.cancelled() => {
            warn!("Operation cancelled");
            Err(BomError::Cancelled)
        }
        result = operation => result,
    }
}

/// Service wrapping a part store with the tree algorithms.
#[derive(Clone)]
pub struct BomService {
    store: Arc<dyn PartStore>,
    limits: TreeLimits,
}

impl BomService {
    /// Create a service over an explicit store handle.
    pub fn new(store: Arc<dyn PartStore>, limits: TreeLimits) -> Self {
        info!("Initializing BomService");
        Self { store, limits }
    }

    /// A service over a fresh in-memory SQLite store.
    pub async fn in_memory() -> BomResult<Self> {
        let store = SqlitePartStore::in_memory().await?;
        Ok(Self::new(Arc::new(store), TreeLimits::default()))
    }

    /// The materialization limits in effect.
    pub fn limits(&self) -> &TreeLimits {
        &self.limits
    }

    // ========================================================================
    // Single-node operations
    // ========================================================================

    #[instrument(skip(self, cancel))]
    pub async fn get_part(&self, id: PartId, cancel: &CancellationToken) -> BomResult<Option<Part>> {
        cancellable(cancel, self.store.find_by_id(id)).await
    }

    #[instrument(skip(self, cancel))]
    pub async fn list_parts(&self, cancel: &CancellationToken) -> BomResult<Vec<Part>> {
        cancellable(cancel, self.store.find_all()).await
    }

    #[instrument(skip(self, cancel))]
    pub async fn get_parts(
        &self,
        ids: &[PartId],
        cancel: &CancellationToken,
    ) -> BomResult<HashMap<PartId, Option<Part>>> {
        cancellable(cancel, self.store.find_by_ids(ids)).await
    }

    #[instrument(skip(self, cancel))]
    pub async fn create_part(&self, part: &NewPart, cancel: &CancellationToken) -> BomResult<PartId> {
        part.validate()?;
        cancellable(cancel, self.store.create(part)).await
    }

    #[instrument(skip(self, cancel))]
    pub async fn update_part(
        &self,
        id: PartId,
        part: &NewPart,
        cancel: &CancellationToken,
    ) -> BomResult<()> {
        part.validate()?;
        cancellable(cancel, self.store.update(id, part)).await
    }

    // ========================================================================
    // Tree operations
    // ========================================================================

    #[instrument(skip(self, cancel))]
    pub async fn delete_part(&self, id: PartId, cancel: &CancellationToken) -> BomResult<bool> {
        cancellable(cancel, mutator::delete(self.store.as_ref(), id)).await
    }

    #[instrument(skip(self, cancel))]
    pub async fn add_sub_part(
        &self,
        parent_id: PartId,
        part: &NewPart,
        cancel: &CancellationToken,
    ) -> BomResult<PartId> {
        part.validate()?;
        cancellable(cancel, mutator::add_sub_part(self.store.as_ref(), parent_id, part)).await
    }

    /// Copy the part with id `source_id` as a new sibling.
    #[instrument(skip(self, cancel))]
    pub async fn copy_part(&self, source_id: PartId, cancel: &CancellationToken) -> BomResult<Part> {
        cancellable(cancel, async {
            let source = self
                .store
                .find_by_id(source_id)
                .await?
                .ok_or_else(|| BomError::not_found(source_id))?;
            mutator::copy(self.store.as_ref(), &source).await
        })
        .await
    }

    #[instrument(skip(self, cancel))]
    pub async fn materialize(
        &self,
        root_id: PartId,
        cancel: &CancellationToken,
    ) -> BomResult<Option<PartTree>> {
        cancellable(cancel, materialize(self.store.as_ref(), root_id, &self.limits)).await
    }

    /// Rendered subtree of `root_id`, `None` when the root does not exist.
    #[instrument(skip(self, cancel))]
    pub async fn show_subtree(
        &self,
        root_id: PartId,
        cancel: &CancellationToken,
    ) -> BomResult<Option<String>> {
        let tree = self.materialize(root_id, cancel).await?;
        Ok(tree.as_ref().map(render))
    }

    #[instrument(skip(self, cancel))]
    pub async fn count_descendants(&self, root_id: PartId, cancel: &CancellationToken) -> BomResult<u64> {
        cancellable(cancel, self.store.count_descendants(root_id)).await
    }
}
