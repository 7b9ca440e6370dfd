//! Scanline rasterizer
//!
//! Walks every edge of a polygon and records, for each scanline row
//! `y = r` it crosses, the x position of the crossing.
//!
//! An edge `lo -> hi` owns the rows `lo.y <= r < hi.y`: the rows strictly
//! between its ends come from the DDA walk, and the ends that sit exactly
//! on a scanline are added or left out by the [`Extrema`] rule.

use crate::edge::{build_edges, Edge, End};
use crate::error::{Diagnostic, RasterError};
use crate::extrema::Extrema;
use crate::polygon::VertexSource;
use crate::table::{Insert, IntersectionTable};

/// DDA walk over the rows strictly inside an edge
///
/// One step per scanline, so no row is skipped or visited twice. Rows are
/// clipped to `0 .. height` before walking.
#[derive(Debug,Clone)]
pub struct EdgeDda {
    first: i64,
    steps: u64,
    step: u64,
    x0: f64,
    inc: f64,
}

impl EdgeDda {
    pub fn new(edge: &Edge, height: usize) -> Self {
        let first = (edge.lo.y.floor() + 1.0).max(0.0);
        let last = (edge.hi.y.ceil() - 1.0).min(height as f64 - 1.0);
        let steps = if last >= first { (last - first) as u64 + 1 } else { 0 };
        let inc = edge.inv_slope();
        let x0 = edge.lo.x + (first - edge.lo.y) * inc;
        EdgeDda { first: first as i64, steps, step: 0, x0, inc }
    }
    /// Rows left to walk
    pub fn remaining(&self) -> u64 {
        self.steps - self.step
    }
}

impl Iterator for EdgeDda {
    /// (row, x)
    type Item = (i64, f64);
    fn next(&mut self) -> Option<Self::Item> {
        if self.step >= self.steps {
            return None;
        }
        let row = self.first + self.step as i64;
        let x = self.x0 + self.step as f64 * self.inc;
        self.step += 1;
        Some((row, x))
    }
}

/// Builds the intersection table of a polygon
#[derive(Debug,Clone)]
pub struct ScanlineRasterizer {
    table: IntersectionTable,
    diagnostics: Vec<Diagnostic>,
    verbose: bool,
}

impl ScanlineRasterizer {
    pub fn new(width: usize, height: usize) -> Self {
        Self { table: IntersectionTable::new(width, height),
               diagnostics: vec![],
               verbose: false,
        }
    }
    /// Trace edges and walks on stderr
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
    pub fn reset(&mut self) {
        self.table.reset();
        self.diagnostics.clear();
    }
    pub fn table(&self) -> &IntersectionTable {
        &self.table
    }
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
    pub fn into_parts(self) -> (IntersectionTable, Vec<Diagnostic>) {
        (self.table, self.diagnostics)
    }
    /// Add a closed polygon
    ///
    /// Fails without touching the table if there are fewer than 3 vertices
    pub fn add_polygon<VS: VertexSource + ?Sized>(&mut self, path: &VS) -> Result<(), RasterError> {
        let v = path.vertices();
        let edges = build_edges(v)?;
        let extrema = Extrema::classify(v);
        for (index, p) in v.iter().enumerate() {
            if ! p.is_finite() {
                self.diagnostics.push(Diagnostic::NonFiniteVertex { index });
            }
        }
        if self.verbose {
            let flat = edges.iter().filter(|e| e.is_horizontal()).count();
            eprintln!("EDGES: {} edges, {} horizontal", edges.len(), flat);
        }
        self.add_edges(&edges, &extrema);
        Ok(())
    }
    pub fn add_edges(&mut self, edges: &[Edge], extrema: &Extrema) {
        for edge in edges {
            self.add_edge(edge, extrema);
        }
    }
    /// Record the crossings of a single edge
    ///
    /// Horizontal edges and edges with a non-finite end add nothing
    pub fn add_edge(&mut self, edge: &Edge, extrema: &Extrema) {
        if ! edge.is_finite() || edge.is_horizontal() {
            return;
        }
        let mut clipped = self.outside(edge);
        for &end in [End::Lo, End::Hi].iter() {
            let v = edge.vertex(end);
            if v.y.fract() == 0.0 && extrema.emits(edge, end) {
                clipped |= self.table.insert(v.x, v.y as i64) != Insert::Stored;
            }
        }
        let dda = EdgeDda::new(edge, self.table.height());
        if self.verbose {
            eprintln!("DDA: edge {} ({:.2},{:.2}) -> ({:.2},{:.2}) rows {}",
                      edge.index, edge.lo.x, edge.lo.y, edge.hi.x, edge.hi.y, dda.remaining());
        }
        for (row, x) in dda {
            clipped |= self.table.insert(x, row) != Insert::Stored;
        }
        if clipped {
            self.diagnostics.push(Diagnostic::OutOfBounds { edge: edge.index });
        }
    }
    fn outside(&self, edge: &Edge) -> bool {
        let w = self.table.width() as f64;
        let h = self.table.height() as f64;
        edge.lo.y < 0.0 || edge.hi.y > h ||
            edge.lo.x.min(edge.hi.x) < 0.0 || edge.lo.x.max(edge.hi.x) > w
    }
}

/// Intersection table of a polygon on a width x height raster
pub fn rasterize<VS: VertexSource + ?Sized>(path: &VS, width: usize, height: usize)
                                            -> Result<(IntersectionTable, Vec<Diagnostic>), RasterError> {
    let mut ras = ScanlineRasterizer::new(width, height);
    ras.add_polygon(path)?;
    Ok(ras.into_parts())
}
