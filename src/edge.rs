//! Polygon edges
//!
//! A closed vertex list of length N becomes N edges, edge `i` joining
//! vertex `i` and vertex `(i+1) % N`. Each edge stores its lower end first.

use crate::polygon::Vertex;
use crate::error::RasterError;

/// Which end of an edge
#[derive(Debug,Copy,Clone,PartialEq)]
pub enum End {
    /// Smaller y
    Lo,
    /// Larger y
    Hi,
}

/// Boundary edge oriented by increasing y
#[derive(Debug,Copy,Clone,PartialEq)]
pub struct Edge {
    /// Position in the boundary traversal
    pub index: usize,
    /// Endpoint with the smaller y
    pub lo: Vertex,
    /// Endpoint with the larger y
    pub hi: Vertex,
    /// Polygon index of `lo`
    pub lo_id: usize,
    /// Polygon index of `hi`
    pub hi_id: usize,
}

impl Edge {
    /// Edge from vertex `ia` to vertex `ib`
    ///
    /// Equal y keeps the traversal order
    pub fn new(index: usize, ia: usize, a: Vertex, ib: usize, b: Vertex) -> Self {
        if b.y < a.y {
            Edge { index, lo: b, hi: a, lo_id: ib, hi_id: ia }
        } else {
            Edge { index, lo: a, hi: b, lo_id: ia, hi_id: ib }
        }
    }
    pub fn dx(&self) -> f64 {
        self.hi.x - self.lo.x
    }
    /// Never negative for finite edges
    pub fn dy(&self) -> f64 {
        self.hi.y - self.lo.y
    }
    pub fn is_horizontal(&self) -> bool {
        self.dy() == 0.0
    }
    pub fn is_finite(&self) -> bool {
        self.lo.is_finite() && self.hi.is_finite()
    }
    /// Change in x per unit of y; 0 for horizontal edges
    pub fn inv_slope(&self) -> f64 {
        if self.is_horizontal() {
            0.0
        } else {
            self.dx() / self.dy()
        }
    }
    pub fn vertex(&self, end: End) -> Vertex {
        match end {
            End::Lo => self.lo,
            End::Hi => self.hi,
        }
    }
    pub fn vertex_id(&self, end: End) -> usize {
        match end {
            End::Lo => self.lo_id,
            End::Hi => self.hi_id,
        }
    }
}

/// Build the closed edge list of a polygon
pub fn build_edges(vertices: &[Vertex]) -> Result<Vec<Edge>, RasterError> {
    let n = vertices.len();
    if n < 3 {
        return Err(RasterError::InsufficientVertices { found: n });
    }
    let edges = (0 .. n)
        .map(|i| {
            let j = (i + 1) % n;
            Edge::new(i, i, vertices[i], j, vertices[j])
        })
        .collect();
    Ok(edges)
}
