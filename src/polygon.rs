//! Polygon vertex storage

/// Source of an ordered, implicitly closed vertex list
pub trait VertexSource {
    fn vertices(&self) -> &[Vertex];
}

/// Point in raster coordinates, y increasing upward
#[derive(Debug,Default,Copy,Clone,PartialEq)]
pub struct Vertex {
    pub x: f64,
    pub y: f64,
}

impl Vertex {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
    /// Both coordinates are finite numbers
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64,f64)> for Vertex {
    fn from((x,y): (f64,f64)) -> Self {
        Vertex::new(x,y)
    }
}

impl VertexSource for [Vertex] {
    fn vertices(&self) -> &[Vertex] {
        self
    }
}
impl VertexSource for Vec<Vertex> {
    fn vertices(&self) -> &[Vertex] {
        self
    }
}

/// Signed area of a closed vertex list (shoelace formula)
///
/// Positive for counter-clockwise order with y pointing up
pub fn signed_area(v: &[Vertex]) -> f64 {
    let n = v.len();
    if n < 3 {
        return 0.0;
    }
    let twice : f64 = (0 .. n)
        .map(|i| (v[i], v[(i+1) % n]))
        .map(|(a,b)| a.x * b.y - b.x * a.y)
        .sum();
    twice / 2.0
}

/// Polygon under construction
///
/// Points are appended in drawing order and may be removed from the end,
/// the way an interactive editor adds and undoes clicks.
#[derive(Debug,Default,Clone)]
pub struct Polygon {
    vertices: Vec<Vertex>,
}

impl VertexSource for Polygon {
    fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }
}

impl Polygon {
    pub fn new() -> Self {
        Self { vertices: vec![] }
    }
    pub fn from_points(pts: &[(f64,f64)]) -> Self {
        Self { vertices: pts.iter().map(|&p| Vertex::from(p)).collect() }
    }
    pub fn len(&self) -> usize {
        self.vertices.len()
    }
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
    /// Append a point
    pub fn add_point(&mut self, x: f64, y: f64) {
        self.vertices.push( Vertex::new(x,y) );
    }
    /// Remove the most recently added point
    pub fn delete_point(&mut self) -> Option<Vertex> {
        self.vertices.pop()
    }
    pub fn remove_all(&mut self) {
        self.vertices.clear();
    }
    /// Enough points to enclose an area
    pub fn is_closable(&self) -> bool {
        self.vertices.len() >= 3
    }
    pub fn area(&self) -> f64 {
        signed_area(&self.vertices).abs()
    }
}
