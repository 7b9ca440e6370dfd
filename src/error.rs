//! Errors and non-fatal diagnostics

use std::fmt;

use crate::session::Stage;

/// Conditions that stop a commit before anything is rasterized
#[derive(Debug,Clone,Copy,PartialEq)]
pub enum RasterError {
    /// Fewer than three vertices cannot enclose an area
    InsufficientVertices { found: usize },
    /// Raster dimensions must both be positive
    InvalidSize { width: i32, height: i32 },
    /// Polygon edits are only accepted while building
    WrongStage { stage: Stage },
}

impl fmt::Display for RasterError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            RasterError::InsufficientVertices { found } =>
                write!(f, "polygon needs at least 3 vertices, found {}", found),
            RasterError::InvalidSize { width, height } =>
                write!(f, "invalid raster size {}x{}", width, height),
            RasterError::WrongStage { stage } =>
                write!(f, "polygon cannot be edited in stage {:?}", stage),
        }
    }
}

impl std::error::Error for RasterError {}

/// Something odd about the input that did not prevent a fill
#[derive(Debug,Clone,Copy,PartialEq)]
pub enum Diagnostic {
    /// Row had an odd number of crossings; the last one was dropped
    OddCrossings { row: usize, count: usize },
    /// Vertex with a NaN or infinite coordinate; its edges were skipped
    NonFiniteVertex { index: usize },
    /// Edge reaches outside the raster; its samples were clipped
    OutOfBounds { edge: usize },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Diagnostic::OddCrossings { row, count } =>
                write!(f, "row {} has {} crossings, dropped the last", row, count),
            Diagnostic::NonFiniteVertex { index } =>
                write!(f, "vertex {} is not finite", index),
            Diagnostic::OutOfBounds { edge } =>
                write!(f, "edge {} clipped to the raster", edge),
        }
    }
}

/// Convert caller supplied dimensions into buffer dimensions
pub fn raster_size(width: i32, height: i32) -> Result<(usize,usize), RasterError> {
    if width <= 0 || height <= 0 {
        return Err(RasterError::InvalidSize { width, height });
    }
    Ok((width as usize, height as usize))
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn sizes() {
        assert_eq!(raster_size(30, 20), Ok((30,20)));
        assert_eq!(raster_size(0, 20), Err(RasterError::InvalidSize { width: 0, height: 20 }));
        assert_eq!(raster_size(5, -1), Err(RasterError::InvalidSize { width: 5, height: -1 }));
    }
    #[test]
    fn messages() {
        let e = RasterError::InsufficientVertices { found: 2 };
        assert_eq!(e.to_string(), "polygon needs at least 3 vertices, found 2");
        let d = Diagnostic::OddCrossings { row: 4, count: 3 };
        assert_eq!(d.to_string(), "row 4 has 3 crossings, dropped the last");
    }
}
