//! Binary space partition of the dungeon rectangle.
//!
//! Nodes are stored in an arena and refer to each other by [`NodeId`]. Every
//! split pass turns each leaf of the current frontier into an internal node
//! with two halves, so after `k` passes the frontier holds `2^k` leaves.

use crate::area::Area;
use rand::Rng;

/// Index of a node in a [`PartitionTree`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Direction of the cut through a partition
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SplitAxis {
    /// Cut along x, producing left and right halves
    Vertical,
    /// Cut along y, producing top and bottom halves
    Horizontal,
}

impl SplitAxis {
    /// Fair coin between the two axes
    pub fn random(rng: &mut impl Rng) -> Self {
        if rng.gen_bool(0.5) {
            SplitAxis::Vertical
        } else {
            SplitAxis::Horizontal
        }
    }

    /// Halve `area` at its integer midpoint. The second half takes the odd
    /// row or column so the two always tile the original.
    pub fn halve(&self, area: &Area) -> (Area, Area) {
        match self {
            SplitAxis::Vertical => {
                let half = area.w / 2;
                (
                    Area::new(area.x, area.y, half, area.h),
                    Area::new(area.x + half, area.y, area.w - half, area.h),
                )
            }
            SplitAxis::Horizontal => {
                let half = area.h / 2;
                (
                    Area::new(area.x, area.y, area.w, half),
                    Area::new(area.x, area.y + half, area.w, area.h - half),
                )
            }
        }
    }
}

#[derive(Clone, Debug)]
pub struct PartitionNode {
    /// Navigation only, never used for ownership
    pub parent: Option<NodeId>,
    pub left: Option<NodeId>,
    pub right: Option<NodeId>,
    pub area: Area,
}

impl PartitionNode {
    fn new(parent: Option<NodeId>, area: Area) -> Self {
        Self {
            parent,
            left: None,
            right: None,
            area,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

#[derive(Clone, Debug)]
pub struct PartitionTree {
    nodes: Vec<PartitionNode>,
    /// Current frontier, rebuilt on every pass
    leaves: Vec<NodeId>,
}

impl PartitionTree {
    pub fn new(area: Area) -> Self {
        Self {
            nodes: vec![PartitionNode::new(None, area)],
            leaves: vec![NodeId(0)],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn node(&self, id: NodeId) -> &PartitionNode {
        &self.nodes[id.0]
    }

    /// Node count. Never zero, the root exists from construction.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn leaves(&self) -> &[NodeId] {
        &self.leaves
    }

    pub fn leaf_areas(&self) -> Vec<Area> {
        self.leaves.iter().map(|&id| self.nodes[id.0].area).collect()
    }

    pub fn is_leaf(&self, id: NodeId) -> bool {
        self.nodes[id.0].is_leaf()
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    pub fn children(&self, id: NodeId) -> Option<(NodeId, NodeId)> {
        let node = &self.nodes[id.0];
        node.left.zip(node.right)
    }

    /// Number of splits between the root and `id`
    pub fn depth(&self, id: NodeId) -> usize {
        let mut depth = 0;
        let mut current = id;
        while let Some(parent) = self.parent(current) {
            depth += 1;
            current = parent;
        }
        depth
    }

    /// Halve a leaf along `axis`. Returns false if the node was already split.
    /// Does not touch the frontier; [`PartitionTree::split_all`] owns that.
    pub fn split(&mut self, id: NodeId, axis: SplitAxis) -> bool {
        if !self.is_leaf(id) {
            return false;
        }

        let (first, second) = axis.halve(&self.nodes[id.0].area);

        let left = NodeId(self.nodes.len());
        self.nodes.push(PartitionNode::new(Some(id), first));
        let right = NodeId(self.nodes.len());
        self.nodes.push(PartitionNode::new(Some(id), second));

        let node = &mut self.nodes[id.0];
        node.left = Some(left);
        node.right = Some(right);
        true
    }

    pub fn split_random(&mut self, id: NodeId, rng: &mut impl Rng) -> bool {
        let axis = SplitAxis::random(rng);
        self.split(id, axis)
    }

    /// Split every leaf once and replace the frontier with the new children,
    /// in parent order.
    pub fn split_all(&mut self, rng: &mut impl Rng) {
        let old_leaves = std::mem::take(&mut self.leaves);
        let mut new_leaves = Vec::with_capacity(old_leaves.len() * 2);

        for &leaf in &old_leaves {
            self.split_random(leaf, rng);
        }

        for &leaf in &old_leaves {
            if let Some((left, right)) = self.children(leaf) {
                new_leaves.push(left);
                new_leaves.push(right);
            }
        }

        self.leaves = new_leaves;
    }
}
