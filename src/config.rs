//! Rasterization settings

/// Settings shared by every stage of a commit
#[derive(Debug,Copy,Clone,PartialEq)]
pub struct RasterConfig {
    /// Intensity written inside the polygon
    pub foreground: u8,
    /// Intensity of a fresh buffer
    pub background: u8,
    /// Write geometry row `r` to buffer row `height - 1 - r`
    pub flip_y: bool,
    /// Trace each stage on stderr
    pub verbose: bool,
}

impl Default for RasterConfig {
    fn default() -> RasterConfig {
        RasterConfig { foreground: 255, background: 0, flip_y: true, verbose: false }
    }
}

impl RasterConfig {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn foreground(mut self, v: u8) -> Self {
        self.foreground = v;
        self
    }
    pub fn background(mut self, v: u8) -> Self {
        self.background = v;
        self
    }
    pub fn flip_y(mut self, flip: bool) -> Self {
        self.flip_y = flip;
        self
    }
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}
