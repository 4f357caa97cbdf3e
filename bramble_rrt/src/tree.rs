// Copyright 2025 the Bramble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arena-backed search tree with write-once parent links.

use bramble_index::backends::Grid;
use bramble_index::{Backend, IndexGeneric, Key};
use kurbo::Point;

use crate::error::TreeError;

/// Identifier for a node in the tree.
///
/// Ids are dense and assigned in insertion order. The root is always the
/// first id issued.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(u32);

impl NodeId {
    /// Id of the root node.
    pub const ROOT: Self = Self(0);

    /// Largest number of nodes a tree can hold.
    pub const LIMIT: usize = Key::LIMIT;

    #[allow(
        clippy::cast_possible_truncation,
        reason = "Callers only pass indices below `NodeId::LIMIT`."
    )]
    pub(crate) const fn new(idx: usize) -> Self {
        Self(idx as u32)
    }

    /// Position of this node in insertion order.
    pub const fn idx(self) -> usize {
        self.0 as usize
    }
}

/// A tree node: its position, its parent, and its distance from the root in edges.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TreeNode {
    /// Position in the plane.
    pub position: Point,
    /// Parent node, `None` for the root.
    pub parent: Option<NodeId>,
    /// Number of parent links between this node and the root.
    pub depth: u32,
}

/// Search tree rooted at the start point.
///
/// Nodes live in an arena and are mirrored into a spatial index for
/// nearest-neighbor queries. The type parameter `B` picks the index backend;
/// it defaults to the uniform [`Grid`].
///
/// Every non-root node's parent was already present when the node was
/// inserted, so parent links always form a tree and never change afterwards.
///
/// ## Example
///
/// ```rust
/// use bramble_index::backends::FlatVec;
/// use bramble_rrt::Tree;
/// use kurbo::Point;
///
/// let mut tree = Tree::with_backend(FlatVec::default());
/// let root = tree.insert(Point::new(0.0, 0.0), None);
/// let a = tree.insert(Point::new(10.0, 0.0), Some(root));
/// let b = tree.insert(Point::new(10.0, 10.0), Some(a));
///
/// assert_eq!(tree.depth(b), Some(2));
/// assert_eq!(tree.nearest(Point::new(9.0, 8.0)), Some(b));
/// assert_eq!(tree.ancestors(b).collect::<Vec<_>>(), vec![b, a, root]);
/// ```
pub struct Tree<B: Backend = Grid> {
    nodes: Vec<TreeNode>,
    index: IndexGeneric<NodeId, B>,
}

impl<B: Backend + core::fmt::Debug> core::fmt::Debug for Tree<B> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let max_depth = self.nodes.iter().map(|n| n.depth).max();
        f.debug_struct("Tree")
            .field("nodes", &self.nodes.len())
            .field("max_depth", &max_depth)
            .field("index", &self.index)
            .finish_non_exhaustive()
    }
}

impl<B> Default for Tree<B>
where
    B: Backend + Default,
{
    fn default() -> Self {
        Self::with_backend(B::default())
    }
}

impl<B: Backend> Tree<B> {
    /// Create an empty tree over the given index backend.
    pub fn with_backend(backend: B) -> Self {
        Self {
            nodes: Vec::new(),
            index: IndexGeneric::with_backend(backend),
        }
    }

    /// Reserve space for at least `n` additional nodes.
    pub fn reserve(&mut self, n: usize) {
        self.nodes.reserve(n);
        self.index.reserve(n);
    }

    /// Insert a node, checking that the parent link is valid.
    ///
    /// `parent: None` inserts the root, which is only allowed while the tree
    /// is empty. Any other node needs a parent that is already in the tree.
    /// A tree holding [`NodeId::LIMIT`] nodes accepts no more.
    pub fn try_insert(
        &mut self,
        position: Point,
        parent: Option<NodeId>,
    ) -> Result<NodeId, TreeError> {
        if self.nodes.len() >= NodeId::LIMIT {
            return Err(TreeError::Full);
        }
        let depth = match parent {
            None if self.nodes.is_empty() => 0,
            None => return Err(TreeError::RootExists),
            Some(_) if self.nodes.is_empty() => return Err(TreeError::MissingRoot),
            Some(p) => {
                self.nodes
                    .get(p.idx())
                    .ok_or(TreeError::UnknownParent(p))?
                    .depth
                    + 1
            }
        };
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(TreeNode {
            position,
            parent,
            depth,
        });
        let key = self.index.insert(position.x, position.y, id);
        debug_assert_eq!(key.idx(), id.idx(), "index slots mirror the arena");
        Ok(id)
    }

    /// Insert a node.
    ///
    /// Panics if the parent link is invalid; see [`Tree::try_insert`].
    pub fn insert(&mut self, position: Point, parent: Option<NodeId>) -> NodeId {
        match self.try_insert(position, parent) {
            Ok(id) => id,
            Err(e) => panic!("tree invariant violated: {e}"),
        }
    }

    /// Remove every node. Previously issued ids become invalid.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.index.clear();
    }

    /// Number of nodes, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree has no root yet.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The root node, once inserted.
    pub fn root(&self) -> Option<NodeId> {
        (!self.nodes.is_empty()).then_some(NodeId::ROOT)
    }

    /// The node closest to `point`; the earliest inserted wins ties.
    ///
    /// Returns `None` only when the tree is empty.
    pub fn nearest(&self, point: Point) -> Option<NodeId> {
        self.index.nearest(point.x, point.y).map(|(_, id)| id)
    }

    /// Node data for `id`.
    pub fn node(&self, id: NodeId) -> Option<&TreeNode> {
        self.nodes.get(id.idx())
    }

    /// Position of `id`.
    pub fn position(&self, id: NodeId) -> Option<Point> {
        self.node(id).map(|n| n.position)
    }

    /// Parent of `id`; `None` for the root or an unknown id.
    pub fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).and_then(|n| n.parent)
    }

    /// Number of parent links between `id` and the root.
    pub fn depth(&self, id: NodeId) -> Option<u32> {
        self.node(id).map(|n| n.depth)
    }

    /// Walk from `id` up to the root, yielding `id` first and the root last.
    ///
    /// Yields nothing for an unknown id.
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_, B> {
        Ancestors {
            tree: self,
            next: self.node(id).map(|_| id),
        }
    }

    /// Iterate over `(id, node)` in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &TreeNode)> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (NodeId::new(i), n))
    }

    /// Every `(parent position, child position)` edge, in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.nodes.iter().filter_map(|n| {
            let parent = n.parent?;
            Some((self.nodes[parent.idx()].position, n.position))
        })
    }

    pub(crate) fn expect_position(&self, id: NodeId) -> Point {
        self.position(id)
            .expect("tree invariant violated: id was not issued by this tree")
    }

    /// Borrow the spatial index backend.
    pub fn backend(&self) -> &B {
        self.index.backend()
    }
}

/// Iterator returned by [`Tree::ancestors`].
#[derive(Debug)]
pub struct Ancestors<'a, B: Backend> {
    tree: &'a Tree<B>,
    next: Option<NodeId>,
}

impl<B: Backend> Iterator for Ancestors<'_, B> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next?;
        self.next = self.tree.parent_of(current);
        Some(current)
    }
}
