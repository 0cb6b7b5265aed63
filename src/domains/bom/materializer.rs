//! Breadth-first loading of a whole subtree into memory.
//!
//! The result is a [`PartTree`]: parts stored in a flat map keyed by id, with
//! children held as id lists (arena pattern). No node owns another, so the
//! snapshot has no reference cycles and can be walked without recursion.

use std::collections::HashMap;
use tracing::{debug, instrument};

use super::error::{BomError, BomResult};
use super::part::{Part, PartId};
use super::store::PartStore;
use crate::core::config::TreeConfig;

// =============================================================================
// Limits
// =============================================================================

/// Guards against pathological trees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeLimits {
    /// Deepest level allowed below the root (the root is depth 0).
    pub max_depth: usize,

    /// Largest number of nodes, root included.
    pub max_nodes: usize,
}

impl TreeLimits {
    /// No effective limit.
    pub const UNBOUNDED: Self = Self {
        max_depth: usize::MAX,
        max_nodes: usize::MAX,
    };
}

impl Default for TreeLimits {
    fn default() -> Self {
        Self::from(&TreeConfig::default())
    }
}

impl From<&TreeConfig> for TreeLimits {
    fn from(config: &TreeConfig) -> Self {
        Self {
            max_depth: config.max_depth,
            max_nodes: config.max_nodes,
        }
    }
}

// =============================================================================
// Tree
// =============================================================================

/// A materialized node: the part plus its position in the snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    pub part: Part,
    pub depth: usize,
    pub children: Vec<PartId>,
}

/// Read-only, caller-owned snapshot of a subtree.
#[derive(Debug, Clone)]
pub struct PartTree {
    root: PartId,
    nodes: HashMap<PartId, TreeNode>,
}

impl PartTree {
    fn new(root: Part) -> Self {
        let root_id = root.id;
        let mut nodes = HashMap::new();
        nodes.insert(
            root_id,
            TreeNode {
                part: root,
                depth: 0,
                children: Vec::new(),
            },
        );
        Self {
            root: root_id,
            nodes,
        }
    }

    /// The part the snapshot was loaded from.
    pub fn root(&self) -> &Part {
        &self.nodes[&self.root].part
    }

    pub fn get(&self, id: PartId) -> Option<&TreeNode> {
        self.nodes.get(&id)
    }

    /// Children of `id` in the order they were loaded.
    pub fn children(&self, id: PartId) -> impl Iterator<Item = &Part> {
        self.nodes
            .get(&id)
            .map(|node| node.children.as_slice())
            .unwrap_or_default()
            .iter()
            .map(|child| &self.nodes[child].part)
    }

    /// Number of nodes, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: a tree holds at least its root.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of nodes below the root.
    pub fn descendant_count(&self) -> usize {
        self.nodes.len() - 1
    }

    /// Depth of the deepest node.
    pub fn height(&self) -> usize {
        self.nodes.values().map(|n| n.depth).max().unwrap_or(0)
    }

    /// Pre-order walk yielding `(depth, part)`.
    pub fn preorder(&self) -> Preorder<'_> {
        Preorder {
            tree: self,
            stack: vec![self.root],
        }
    }
}

/// Iterator for [`PartTree::preorder`], driven by an explicit stack.
pub struct Preorder<'a> {
    tree: &'a PartTree,
    stack: Vec<PartId>,
}

impl<'a> Iterator for Preorder<'a> {
    type Item = (usize, &'a Part);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let node = &self.tree.nodes[&id];
        self.stack.extend(node.children.iter().rev());
        Some((node.depth, &node.part))
    }
}

// =============================================================================
// Materialization
// =============================================================================

/// Load `root_id` and all its descendants. `Ok(None)` when the root does not exist.
///
/// Each level costs one batched child lookup; the frontier is the list of ids
/// loaded on the previous level.
#[instrument(skip(store, limits))]
pub async fn materialize<S>(
    store: &S,
    root_id: PartId,
    limits: &TreeLimits,
) -> BomResult<Option<PartTree>>
where
    S: PartStore + ?Sized,
{
    let Some(root) = store.find_by_id(root_id).await? else {
        return Ok(None);
    };

    let mut tree = PartTree::new(root);
    let mut frontier = vec![root_id];
    let mut depth = 0usize;

    while !frontier.is_empty() {
        let children = store.find_children(&frontier).await?;
        if children.is_empty() {
            break;
        }

        depth += 1;
        if depth > limits.max_depth {
            return Err(BomError::limit_exceeded(
                root_id,
                format!("maximum depth of {}", limits.max_depth),
            ));
        }

        frontier = Vec::with_capacity(children.len());
        for child in children {
            let child_id = child.id;
            if tree.nodes.contains_key(&child_id) {
                return Err(BomError::CorruptTree { id: child_id });
            }
            if tree.nodes.len() >= limits.max_nodes {
                return Err(BomError::limit_exceeded(
                    root_id,
                    format!("maximum of {} nodes", limits.max_nodes),
                ));
            }

            let Some(parent) = child.parent_id.and_then(|p| tree.nodes.get_mut(&p)) else {
                // Only possible if the store returned a child of an id we did not ask for.
                return Err(BomError::CorruptTree { id: child_id });
            };
            parent.children.push(child_id);

            tree.nodes.insert(
                child_id,
                TreeNode {
                    part: child,
                    depth,
                    children: Vec::new(),
                },
            );
            frontier.push(child_id);
        }

        debug!("Level {} loaded with {} part(s)", depth, frontier.len());
    }

    Ok(Some(tree))
}
