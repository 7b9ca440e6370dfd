//! Intersection table
//!
//! One list of x crossings per scanline row, indexed directly by row.

/// Where a sample ended up
#[derive(Debug,Copy,Clone,PartialEq)]
pub enum Insert {
    /// Stored as given
    Stored,
    /// Stored with x clamped to the raster
    Clamped,
    /// Row outside the raster, not stored
    Discarded,
}

#[derive(Debug,Default,Clone,PartialEq)]
pub struct IntersectionTable {
    rows: Vec<Vec<i64>>,
    width: usize,
    pub min_y: i64,
    pub max_y: i64,
}

impl IntersectionTable {
    /// Empty table for a raster of width x height
    pub fn new(width: usize, height: usize) -> Self {
        Self { rows: vec![vec![]; height],
               width,
               min_y: std::i64::MAX,
               max_y: std::i64::MIN,
        }
    }
    pub fn reset(&mut self) {
        self.rows.iter_mut().for_each(|r| r.clear());
        self.min_y = std::i64::MAX;
        self.max_y = std::i64::MIN;
    }
    pub fn height(&self) -> usize {
        self.rows.len()
    }
    pub fn width(&self) -> usize {
        self.width
    }
    /// Record a crossing at `x` on scanline `y`
    ///
    /// `x` is floored and clamped into `0 ..= width`; a row outside the
    /// raster is discarded.
    pub fn insert(&mut self, x: f64, y: i64) -> Insert {
        if y < 0 || y >= self.rows.len() as i64 {
            return Insert::Discarded;
        }
        let w = self.width as f64;
        let xf = x.floor();
        let (xc, status) = if xf < 0.0 {
            (0.0, Insert::Clamped)
        } else if xf > w {
            (w, Insert::Clamped)
        } else {
            (xf, Insert::Stored)
        };
        self.rows[y as usize].push(xc as i64);
        self.min_y = self.min_y.min(y);
        self.max_y = self.max_y.max(y);
        status
    }
    /// Crossings of row `y` in insertion order
    pub fn row(&self, y: usize) -> &[i64] {
        &self.rows[y]
    }
    /// Non-empty rows with their crossings
    pub fn rows(&self) -> impl Iterator<Item=(usize, &[i64])> + '_ {
        self.rows.iter()
            .enumerate()
            .filter(|(_, r)| ! r.is_empty())
            .map(|(y, r)| (y, r.as_slice()))
    }
    pub fn total_crossings(&self) -> usize {
        self.rows.iter().map(|r| r.len()).sum()
    }
    pub fn is_empty(&self) -> bool {
        self.total_crossings() == 0
    }
    /// Rows holding an odd number of crossings
    pub fn odd_rows(&self) -> Vec<usize> {
        self.rows()
            .filter(|(_, r)| r.len() % 2 == 1)
            .map(|(y, _)| y)
            .collect()
    }
}
