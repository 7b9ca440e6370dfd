//! Vertex classification
//!
//! Sweeping a horizontal line past a vertex, the boundary either passes
//! through it or turns back. A vertex that turns back is a local extremum
//! in y and is crossed twice, once by each incident edge; a vertex the
//! boundary passes through is crossed once.
//!
//! Neighbours are found by position in the closed vertex list, so repeated
//! coordinates do not confuse the lookup.
//!
//! Emission rule for a non-horizontal edge:
//!
//! | end  | emitted when            |
//! |------|-------------------------|
//! | `Lo` | always                  |
//! | `Hi` | vertex is a `LocalMax`  |
//!
//! Per vertex this gives 2 for minima and maxima, 1 for pass-through
//! vertices (the edge below stays silent), and 1 or 0 for a vertex on a
//! horizontal run depending on whether its other edge rises or falls.

use crate::edge::{Edge, End};
use crate::polygon::Vertex;

/// How the boundary behaves at a vertex, in y
#[derive(Debug,Copy,Clone,PartialEq)]
pub enum VertexKind {
    /// Both neighbours strictly above
    LocalMin,
    /// Both neighbours strictly below
    LocalMax,
    /// One neighbour strictly above, one strictly below
    PassThrough,
    /// At least one neighbour at the same height
    Flat,
}

/// `y` is strictly above or strictly below both `y1` and `y2`
pub fn is_extremum(y: f64, y1: f64, y2: f64) -> bool {
    (y > y1 && y > y2) || (y < y1 && y < y2)
}

/// Classify vertex `i` from its cyclic neighbours
pub fn classify(vertices: &[Vertex], i: usize) -> VertexKind {
    let n = vertices.len();
    let y  = vertices[i].y;
    let y1 = vertices[(i + n - 1) % n].y;
    let y2 = vertices[(i + 1) % n].y;
    if y1 == y || y2 == y {
        VertexKind::Flat
    } else if is_extremum(y, y1, y2) {
        if y > y1 {
            VertexKind::LocalMax
        } else {
            VertexKind::LocalMin
        }
    } else {
        VertexKind::PassThrough
    }
}

/// Kinds of every vertex of a polygon
#[derive(Debug,Clone,PartialEq)]
pub struct Extrema {
    pub kinds: Vec<VertexKind>,
}

impl Extrema {
    pub fn classify(vertices: &[Vertex]) -> Self {
        let kinds = (0 .. vertices.len())
            .map(|i| classify(vertices, i))
            .collect();
        Extrema { kinds }
    }
    pub fn kind(&self, vertex: usize) -> VertexKind {
        self.kinds[vertex]
    }
    /// Vertex is counted twice
    pub fn is_turning_point(&self, vertex: usize) -> bool {
        match self.kinds[vertex] {
            VertexKind::LocalMin | VertexKind::LocalMax => true,
            _ => false,
        }
    }
    /// Does this edge emit the given endpoint into the table
    pub fn emits(&self, edge: &Edge, end: End) -> bool {
        if edge.is_horizontal() {
            return false;
        }
        match end {
            End::Lo => true,
            End::Hi => self.kind(edge.hi_id) == VertexKind::LocalMax,
        }
    }
    /// Times a vertex is emitted over all edges of the polygon
    pub fn count(&self, edges: &[Edge], vertex: usize) -> usize {
        let mut n = 0;
        for e in edges {
            if e.lo_id == vertex && self.emits(e, End::Lo) {
                n += 1;
            }
            if e.hi_id == vertex && self.emits(e, End::Hi) {
                n += 1;
            }
        }
        n
    }
}
