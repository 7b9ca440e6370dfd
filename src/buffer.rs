//! Pixel buffer

use std::cmp::min;
use std::cmp::max;
use std::ops::Index;
use std::ops::IndexMut;

/// Single channel 8-bit image
///
/// Data is stored as row-major order (C-format), row 0 at the top
#[derive(Debug,Default,Clone,PartialEq)]
pub struct PixelBuffer {
    /// Intensity of each pixel
    pub data: Vec<u8>,
    /// Image Width in pixels
    pub width: usize,
    /// Image Height in pixels
    pub height: usize,
}

impl PixelBuffer {
    /// Create a new buffer of width and height, all pixels 0
    pub fn new(width: usize, height: usize) -> Self {
        Self::filled(width, height, 0)
    }
    /// Create a new buffer with every pixel set to `v`
    pub fn filled(width: usize, height: usize, v: u8) -> Self {
        PixelBuffer { width, height, data: vec![v; width * height] }
    }
    /// Wrap existing row-major data
    ///
    /// Returns None if the length does not match the dimensions
    pub fn from_raw(width: usize, height: usize, data: Vec<u8>) -> Option<Self> {
        if data.len() != width * height {
            return None;
        }
        Some(PixelBuffer { width, height, data })
    }
    /// Number of pixels
    pub fn len(&self) -> usize {
        self.data.len()
    }
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
    /// Pixels of row `y`
    pub fn row(&self, y: usize) -> &[u8] {
        debug_assert!(y < self.height);
        let i = y * self.width;
        &self.data[i .. i + self.width]
    }
    /// Pixel value, None outside the image
    pub fn get(&self, x: usize, y: usize) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[y * self.width + x])
    }
    /// Set a pixel, ignored outside the image
    pub fn set(&mut self, x: usize, y: usize, v: u8) {
        if x < self.width && y < self.height {
            self.data[y * self.width + x] = v;
        }
    }
    /// Inclusive bounds (xmin, xmax, ymin, ymax)
    pub fn limits(&self) -> (i64,i64,i64,i64) {
        let w = self.width as i64;
        let h = self.height as i64;
        (0, w-1, 0, h-1)
    }
    /// Set pixels x1 ..= x2 of row y, clipped to the image
    pub fn copy_hline(&mut self, x1: i64, y: i64, x2: i64, v: u8) {
        let (xmin,xmax,ymin,ymax) = self.limits();
        let (x1,x2) = if x2 > x1 { (x1,x2) } else { (x2,x1) };
        if y > ymax || y < ymin || x1 > xmax || x2 < xmin {
            return;
        }
        let x1 = max(x1, xmin) as usize;
        let x2 = min(x2, xmax) as usize;
        let row = y as usize * self.width;
        self.data[row + x1 ..= row + x2].iter_mut().for_each(|p| *p = v);
    }
    /// Number of pixels equal to `v`
    pub fn count(&self, v: u8) -> usize {
        self.data.iter().filter(|&&p| p == v).count()
    }
    /// Set every pixel to `v`
    pub fn clear(&mut self, v: u8) {
        self.data.iter_mut().for_each(|p| *p = v);
    }
}

impl Index<(usize,usize)> for PixelBuffer {
    type Output = u8;
    fn index(&self, index: (usize, usize)) -> &u8 {
        assert!(index.0 < self.width, "request {} >= {} width :: index", index.0, self.width);
        assert!(index.1 < self.height, "request {} >= {} height :: index", index.1, self.height);
        &self.data[index.1 * self.width + index.0]
    }
}
impl IndexMut<(usize,usize)> for PixelBuffer {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut u8 {
        assert!(index.0 < self.width, "request {} >= {} width :: index_mut", index.0, self.width);
        assert!(index.1 < self.height, "request {} >= {} height :: index_mut", index.1, self.height);
        &mut self.data[index.1 * self.width + index.0]
    }
}
