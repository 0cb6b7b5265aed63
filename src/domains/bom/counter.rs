//! Descendant counting without materializing the subtree.
//!
//! Two strategies exist. [`count_recursive`] asks SQLite to walk the subtree in a
//! single recursive query and is what [`SqlitePartStore`](super::SqlitePartStore)
//! uses. [`count_by_levels`] expands one level per round-trip and is the fallback
//! for stores without recursive query support.

use sqlx::SqlitePool;
use std::collections::HashSet;

use super::error::{BomError, BomResult};
use super::part::PartId;
use super::store::PartStore;

/// `UNION` (not `UNION ALL`) keeps the query finite even on cyclic data.
const DESCENDANT_COUNT_SQL: &str = r#"
WITH RECURSIVE descendants(id) AS (
    SELECT id FROM parts WHERE parent_id = ?1
    UNION
    SELECT p.id FROM parts p JOIN descendants d ON p.parent_id = d.id
)
SELECT COUNT(*) FROM descendants
"#;

/// Count all descendants of `id` in one server-side recursive query.
pub async fn count_recursive(pool: &SqlitePool, id: PartId) -> BomResult<u64> {
    let count: i64 = sqlx::query_scalar(DESCENDANT_COUNT_SQL)
        .bind(id)
        .fetch_one(pool)
        .await?;

    Ok(count.max(0) as u64)
}

/// Count all descendants of `id` by expanding the tree level by level.
///
/// One store round-trip per level. Ids seen twice indicate a cycle and fail
/// with [`BomError::CorruptTree`].
pub async fn count_by_levels<S>(store: &S, id: PartId) -> BomResult<u64>
where
    S: PartStore + ?Sized,
{
    let mut seen: HashSet<PartId> = HashSet::from([id]);
    let mut frontier = vec![id];
    let mut count = 0u64;

    while !frontier.is_empty() {
        let children = store.find_children(&frontier).await?;
        frontier = Vec::with_capacity(children.len());

        for child in children {
            if !seen.insert(child.id) {
                return Err(BomError::CorruptTree { id: child.id });
            }
            frontier.push(child.id);
        }

        count += frontier.len() as u64;
    }

    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::bom::{NewPart, SqlitePartStore};

    /// Build a chain of `depth` parts below a fresh root, each with one extra leaf.
    async fn chain_with_leaves(store: &SqlitePartStore, depth: usize) -> PartId {
        let root = store.create(&NewPart::new("root", "R")).await.unwrap();
        let mut current = root;
        for level in 0..depth {
            store
                .insert(Some(current), &NewPart::new(format!("leaf-{level}"), "L"))
                .await
                .unwrap();
            current = store
                .insert(Some(current), &NewPart::new(format!("node-{level}"), "N"))
                .await
                .unwrap();
        }
        root
    }

    #[tokio::test]
    async fn test_unknown_id_counts_zero() {
        let store = SqlitePartStore::in_memory().await.unwrap();
        assert_eq!(count_recursive(store.pool(), 123).await.unwrap(), 0);
        assert_eq!(count_by_levels(&store, 123).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_leaf_counts_zero() {
        let store = SqlitePartStore::in_memory().await.unwrap();
        let leaf = store.create(&NewPart::new("Bolt", "B-1")).await.unwrap();
        assert_eq!(store.count_descendants(leaf).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_strategies_agree_across_depths() {
        let store = SqlitePartStore::in_memory().await.unwrap();
        for depth in 0..=10 {
            let root = chain_with_leaves(&store, depth).await;
            let expected = (depth * 2) as u64;
            assert_eq!(count_recursive(store.pool(), root).await.unwrap(), expected);
            assert_eq!(count_by_levels(&store, root).await.unwrap(), expected);
        }
    }

    #[tokio::test]
    async fn test_count_excludes_sibling_trees() {
        let store = SqlitePartStore::in_memory().await.unwrap();
        let car = store.create(&NewPart::new("Car", "C-100")).await.unwrap();
        let bike = store.create(&NewPart::new("Bike", "B-1")).await.unwrap();
        store.insert(Some(car), &NewPart::new("Engine", "E-10")).await.unwrap();
        store.insert(Some(bike), &NewPart::new("Frame", "F-1")).await.unwrap();
        store.insert(Some(bike), &NewPart::new("Bell", "B-2")).await.unwrap();

        assert_eq!(store.count_descendants(car).await.unwrap(), 1);
        assert_eq!(store.count_descendants(bike).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_cycle_terminates() {
        let store = SqlitePartStore::in_memory().await.unwrap();
        let a = store.create(&NewPart::new("A", "1")).await.unwrap();
        let b = store.insert(Some(a), &NewPart::new("B", "2")).await.unwrap();
        sqlx::query("UPDATE parts SET parent_id = ? WHERE id = ?")
            .bind(b)
            .bind(a)
            .execute(store.pool())
            .await
            .unwrap();

        assert_eq!(count_recursive(store.pool(), a).await.unwrap(), 2);
        assert!(matches!(
            count_by_levels(&store, a).await,
            Err(BomError::CorruptTree { .. })
        ));
    }
}
