//! Commit lifecycle
//!
//! Headless model of an editing session: points are placed while
//! `Building`, and each `advance` moves one stage further, running the
//! fill or the smoothing pass on entry.
//!
//! ```text
//! Building -> Built -> Rasterized -> Filtered -> Building
//! ```

use crate::buffer::PixelBuffer;
use crate::config::RasterConfig;
use crate::error::{raster_size, Diagnostic, RasterError};
use crate::filter::smooth;
use crate::polygon::{Polygon, Vertex};
use crate::fill_polygon;

#[derive(Debug,PartialEq,Copy,Clone)]
pub enum Stage {
    /// Points may be added and removed
    Building,
    /// Polygon closed, nothing rendered
    Built,
    /// Pixel buffer holds the fill
    Rasterized,
    /// Pixel buffer holds the smoothed fill
    Filtered,
}
impl Default for Stage {
    fn default() -> Stage {
        Stage::Building
    }
}

#[derive(Debug,Clone)]
pub struct Session {
    polygon: Polygon,
    width: usize,
    height: usize,
    stage: Stage,
    pixels: Option<PixelBuffer>,
    diagnostics: Vec<Diagnostic>,
    config: RasterConfig,
}

impl Session {
    pub fn new(width: i32, height: i32) -> Result<Self, RasterError> {
        Self::with_config(width, height, RasterConfig::default())
    }
    pub fn with_config(width: i32, height: i32, config: RasterConfig) -> Result<Self, RasterError> {
        let (width, height) = raster_size(width, height)?;
        Ok(Self { polygon: Polygon::new(), width, height,
                  stage: Stage::Building, pixels: None,
                  diagnostics: vec![], config })
    }
    pub fn stage(&self) -> Stage {
        self.stage
    }
    pub fn polygon(&self) -> &Polygon {
        &self.polygon
    }
    /// Buffer of the last fill, if the session is past `Built`
    pub fn pixels(&self) -> Option<&PixelBuffer> {
        self.pixels.as_ref()
    }
    /// Diagnostics of the last fill
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
    pub fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }
    /// New raster size; the polygon and any buffer are discarded
    pub fn resize(&mut self, width: i32, height: i32) -> Result<(), RasterError> {
        let (width, height) = raster_size(width, height)?;
        self.width = width;
        self.height = height;
        self.restart();
        self.polygon.remove_all();
        Ok(())
    }
    pub fn add_point(&mut self, x: f64, y: f64) -> Result<(), RasterError> {
        self.editable()?;
        self.polygon.add_point(x, y);
        Ok(())
    }
    /// Undo the last point
    pub fn delete_point(&mut self) -> Result<Option<Vertex>, RasterError> {
        self.editable()?;
        Ok(self.polygon.delete_point())
    }
    /// Remove every point and start over
    pub fn clear(&mut self) {
        self.polygon.remove_all();
        self.restart();
    }
    /// Move to the next stage
    ///
    /// Needs a closable polygon; otherwise the stage is left unchanged.
    pub fn advance(&mut self) -> Result<Stage, RasterError> {
        if ! self.polygon.is_closable() {
            return Err(RasterError::InsufficientVertices { found: self.polygon.len() });
        }
        self.stage = match self.stage {
            Stage::Building => Stage::Built,
            Stage::Built => {
                let (pixels, diagnostics) = fill_polygon(&self.polygon, self.width, self.height, &self.config)?;
                self.pixels = Some(pixels);
                self.diagnostics = diagnostics;
                Stage::Rasterized
            }
            Stage::Rasterized => {
                if self.config.verbose {
                    eprintln!("SMOOTH: {}x{}", self.width, self.height);
                }
                self.pixels = self.pixels.as_ref().map(smooth);
                Stage::Filtered
            }
            Stage::Filtered => {
                self.pixels = None;
                self.diagnostics.clear();
                Stage::Building
            }
        };
        if self.config.verbose {
            eprintln!("SESSION: stage {:?} points {}", self.stage, self.polygon.len());
        }
        Ok(self.stage)
    }
    fn editable(&self) -> Result<(), RasterError> {
        if self.stage != Stage::Building {
            return Err(RasterError::WrongStage { stage: self.stage });
        }
        Ok(())
    }
    fn restart(&mut self) {
        self.stage = Stage::Building;
        self.pixels = None;
        self.diagnostics.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edits_only_while_building() {
        let mut s = Session::new(20, 20).unwrap();
        for &(x,y) in [(2.,2.), (12.,2.), (2.,12.)].iter() {
            s.add_point(x, y).unwrap();
        }
        assert_eq!(s.advance(), Ok(Stage::Built));
        assert_eq!(s.add_point(5., 5.), Err(RasterError::WrongStage { stage: Stage::Built }));
        assert_eq!(s.delete_point(), Err(RasterError::WrongStage { stage: Stage::Built }));
        s.clear();
        assert_eq!(s.stage(), Stage::Building);
        assert!(s.polygon().is_empty());
        assert_eq!(s.delete_point(), Ok(None));
    }

    #[test]
    fn resize_discards() {
        let mut s = Session::new(20, 20).unwrap();
        s.add_point(1., 1.).unwrap();
        assert_eq!(s.resize(0, 5), Err(RasterError::InvalidSize { width: 0, height: 5 }));
        assert_eq!(s.polygon().len(), 1);
        s.resize(40, 10).unwrap();
        assert_eq!(s.size(), (40, 10));
        assert!(s.polygon().is_empty());
    }
}
