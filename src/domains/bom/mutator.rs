//! Structural operations on the tree.
//!
//! These compose flat store calls so that parent/child bookkeeping stays
//! consistent. Re-parenting an existing part is not offered, which keeps the
//! parent relation acyclic by construction.

use tracing::{info, instrument, warn};

use super::error::BomResult;
use super::part::{NewPart, Part, PartId};
use super::store::PartStore;

/// Create a part below `parent_id` and return its id.
///
/// The store validates `attributes` before touching the table. A missing parent
/// fails with `NotFound` and leaves the store unchanged.
#[instrument(skip(store, attributes), fields(name = %attributes.name))]
pub async fn add_sub_part<S>(store: &S, parent_id: PartId, attributes: &NewPart) -> BomResult<PartId>
where
    S: PartStore + ?Sized,
{
    match store.insert(Some(parent_id), attributes).await {
        Ok(id) => {
            info!("Added sub part {} below {}", id, parent_id);
            Ok(id)
        }
        Err(e) => {
            warn!("Failed to add sub part below {}: {}", parent_id, e);
            Err(e)
        }
    }
}

/// Create a sibling of `source` with the same name, number and parent.
///
/// Children of `source` are not copied.
#[instrument(skip(store, source), fields(source = source.id))]
pub async fn copy<S>(store: &S, source: &Part) -> BomResult<Part>
where
    S: PartStore + ?Sized,
{
    let attributes = source.attributes();
    let id = store.insert(source.parent_id, &attributes).await?;
    info!("Copied part {} to {}", source.id, id);

    Ok(Part {
        id,
        name: attributes.name,
        number: attributes.number,
        parent_id: source.parent_id,
    })
}

/// Remove `id` together with its whole subtree. Returns whether it existed.
#[instrument(skip(store))]
pub async fn delete<S>(store: &S, id: PartId) -> BomResult<bool>
where
    S: PartStore + ?Sized,
{
    let deleted = store.delete(id).await?;
    if deleted {
        info!("Deleted part {} and its subtree", id);
    } else {
        warn!("Nothing to delete for part {}", id);
    }
    Ok(deleted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::bom::{BomError, SqlitePartStore};

    #[tokio::test]
    async fn test_add_sub_part_links_parent() {
        let store = SqlitePartStore::in_memory().await.unwrap();
        let car = store.create(&NewPart::new("Car", "C-100")).await.unwrap();

        let engine = add_sub_part(&store, car, &NewPart::new("Engine", "E-10"))
            .await
            .unwrap();

        let part = store.find_by_id(engine).await.unwrap().unwrap();
        assert_eq!(part.parent_id, Some(car));
        assert_eq!(store.find_children(&[car]).await.unwrap(), vec![part]);
    }

    #[tokio::test]
    async fn test_add_sub_part_missing_parent_changes_nothing() {
        let store = SqlitePartStore::in_memory().await.unwrap();
        store.create(&NewPart::new("Car", "C-100")).await.unwrap();
        let before = store.find_all().await.unwrap().len();

        let err = add_sub_part(&store, 404, &NewPart::new("Ghost", "G-1"))
            .await
            .unwrap_err();

        assert!(matches!(err, BomError::NotFound { id: 404 }));
        assert_eq!(store.find_all().await.unwrap().len(), before);
    }

    #[tokio::test]
    async fn test_add_sub_part_validates_first() {
        let store = SqlitePartStore::in_memory().await.unwrap();
        // Parent is missing too, but validation must win.
        let err = add_sub_part(&store, 404, &NewPart::new("Ghost", ""))
            .await
            .unwrap_err();
        assert!(matches!(err, BomError::Validation { field: "number", .. }));
    }

    #[tokio::test]
    async fn test_copy_creates_sibling_without_children() {
        let store = SqlitePartStore::in_memory().await.unwrap();
        let car = store.create(&NewPart::new("Car", "C-100")).await.unwrap();
        let engine = store.insert(Some(car), &NewPart::new("Engine", "E-10")).await.unwrap();
        store.insert(Some(engine), &NewPart::new("Piston", "P-1")).await.unwrap();

        let source = store.find_by_id(engine).await.unwrap().unwrap();
        let copy = copy(&store, &source).await.unwrap();

        assert_ne!(copy.id, engine);
        assert_eq!(copy.name, "Engine");
        assert_eq!(copy.number, "E-10");
        assert_eq!(copy.parent_id, Some(car));
        assert_eq!(store.find_by_id(copy.id).await.unwrap(), Some(copy.clone()));
        assert_eq!(store.count_descendants(copy.id).await.unwrap(), 0);
        assert_eq!(store.count_descendants(car).await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_copy_root_is_root() {
        let store = SqlitePartStore::in_memory().await.unwrap();
        let car = store.create(&NewPart::new("Car", "C-100")).await.unwrap();
        let source = store.find_by_id(car).await.unwrap().unwrap();

        let copy = copy(&store, &source).await.unwrap();
        assert!(copy.is_root());
    }

    #[tokio::test]
    async fn test_copy_under_deleted_parent_is_not_found() {
        let store = SqlitePartStore::in_memory().await.unwrap();
        let car = store.create(&NewPart::new("Car", "C-100")).await.unwrap();
        let engine = store.insert(Some(car), &NewPart::new("Engine", "E-10")).await.unwrap();
        let stale = store.find_by_id(engine).await.unwrap().unwrap();
        store.delete(car).await.unwrap();

        let err = copy(&store, &stale).await.unwrap_err();
        assert!(err.is_not_found());
        assert!(store.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_copy_rejects_invalid_source() {
        let store = SqlitePartStore::in_memory().await.unwrap();
        let source = Part {
            id: 1,
            name: String::new(),
            number: "X".into(),
            parent_id: None,
        };
        assert!(matches!(
            copy(&store, &source).await,
            Err(BomError::Validation { .. })
        ));
    }

    #[tokio::test]
    async fn test_delete_reduces_count_by_subtree_size() {
        let store = SqlitePartStore::in_memory().await.unwrap();
        let car = store.create(&NewPart::new("Car", "C-100")).await.unwrap();
        let engine = store.insert(Some(car), &NewPart::new("Engine", "E-10")).await.unwrap();
        store.insert(Some(car), &NewPart::new("Wheel", "W-20")).await.unwrap();
        store.insert(Some(engine), &NewPart::new("Piston", "P-1")).await.unwrap();
        store.create(&NewPart::new("Bike", "B-1")).await.unwrap();

        let descendants = store.count_descendants(car).await.unwrap() as usize;
        let before = store.find_all().await.unwrap().len();

        assert!(delete(&store, car).await.unwrap());
        assert_eq!(store.find_all().await.unwrap().len(), before - (descendants + 1));
        assert!(!delete(&store, car).await.unwrap());
    }
}
