//! Screen coordinates for drawing a [`Tree`].
//!
//! The root sits at the origin. Every child is placed one `level_step` below
//! its parent and `spread` to the left or right of it, and each level down the
//! spread shrinks by `spread_decay`, so subtrees fan out less the deeper they
//! are. Nodes are visited in pre-order with an explicit stack, so a degenerate
//! tree can be laid out no matter how deep it is.

use crate::tree::{Node, Tree};

/// A position in layout space. `y` decreases as the tree goes down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };
}

/// Controls how far apart nodes are placed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutParams {
    /// Horizontal distance between the root and each of its children.
    pub initial_spread: f64,
    /// Factor applied to the spread at every level below the root.
    pub spread_decay: f64,
    /// Vertical distance between a parent and its children.
    pub level_step: f64,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            initial_spread: 5.0,
            spread_decay: 0.7,
            level_step: 2.0,
        }
    }
}

/// A node's value together with where it was placed.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedNode<'a, T> {
    pub value: &'a T,
    pub at: Point,
    /// Number of edges between this node and the root.
    pub depth: usize,
}

/// A line from a parent to one of its children.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub from: Point,
    pub to: Point,
    /// Depth of the parent end.
    pub depth: usize,
}

/// The smallest box holding every placed node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Point,
    pub max: Point,
}

impl Bounds {
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }
}

/// Every node of a tree with its position, plus the edges joining them.
#[derive(Debug, Clone)]
pub struct Layout<'a, T> {
    /// Placed nodes in pre-order.
    pub nodes: Vec<PlacedNode<'a, T>>,
    pub edges: Vec<Edge>,
}

impl<'a, T> Layout<'a, T> {
    /// Lays out `tree` without modifying it.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::layout::{Layout, LayoutParams, Point};
    /// use bstree::Tree;
    ///
    /// let tree: Tree<_> = [2, 1, 3].into_iter().collect();
    /// let layout = Layout::new(&tree, &LayoutParams::default());
    ///
    /// assert_eq!(layout.nodes[0].at, Point::ORIGIN);
    /// assert_eq!(layout.nodes[1].at, Point { x: -5.0, y: -2.0 });
    /// assert_eq!(layout.edges.len(), 2);
    /// ```
    pub fn new(tree: &'a Tree<T>, params: &LayoutParams) -> Self {
        let mut nodes = Vec::with_capacity(tree.len());
        let mut edges = Vec::with_capacity(tree.len().saturating_sub(1));

        let mut pending: Vec<(&'a Node<T>, Point, f64, usize)> = tree
            .root()
            .map(|root| (root, Point::ORIGIN, params.initial_spread, 0))
            .into_iter()
            .collect();
        while let Some((node, at, spread, depth)) = pending.pop() {
            nodes.push(PlacedNode {
                value: node.value(),
                at,
                depth,
            });

            let y = at.y - params.level_step;
            // Right goes on the stack first so the left subtree comes out first.
            for (child, x) in [(node.right(), at.x + spread), (node.left(), at.x - spread)] {
                if let Some(child) = child {
                    let to = Point { x, y };
                    edges.push(Edge {
                        from: at,
                        to,
                        depth,
                    });
                    pending.push((child, to, spread * params.spread_decay, depth + 1));
                }
            }
        }

        Self { nodes, edges }
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The depth of the deepest node, `None` for an empty layout.
    pub fn max_depth(&self) -> Option<usize> {
        self.nodes.iter().map(|n| n.depth).max()
    }

    pub fn bounds(&self) -> Option<Bounds> {
        let first = self.nodes.first()?.at;
        let bounds = self.nodes.iter().fold(
            Bounds {
                min: first,
                max: first,
            },
            |b, n| Bounds {
                min: Point {
                    x: b.min.x.min(n.at.x),
                    y: b.min.y.min(n.at.y),
                },
                max: Point {
                    x: b.max.x.max(n.at.x),
                    y: b.max.y.max(n.at.y),
                },
            },
        );

        Some(bounds)
    }
}
