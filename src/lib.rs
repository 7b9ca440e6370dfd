//! Polygon scan conversion
//!
//! How does this work
//!
//! ```text
//!    vertices                       -- Polygon / &[Vertex]
//!      build_edges()                -- closed edge list, lower end first
//!      Extrema::classify()          -- min / max / pass-through per vertex
//!    ScanlineRasterizer
//!      add_polygon()
//!        add_edge()                 -- 'DDA'
//!          endpoints by Extrema::emits()
//!          EdgeDda rows strictly inside the edge
//!     Output: IntersectionTable, x crossings per row
//!    SpanFiller
//!      fill()                       -- 'FILL'
//!        Scanline::new()            -- sort, pair, drop last of an odd row
//!        render()
//!          copy_hline()
//!     Output: PixelBuffer
//!    smooth()                       -- 'SMOOTH', 3x3 box mean
//!     Output: filtered PixelBuffer
//! ```
//!
//! ```
//! use scanfill::{commit_polygon, Vertex};
//!
//! let square = [Vertex::new(10.0, 10.0), Vertex::new(10.0, 20.0),
//!               Vertex::new(20.0, 20.0), Vertex::new(20.0, 10.0)];
//! let pix = commit_polygon(&square, 30, 30).unwrap();
//! assert_eq!(pix.count(255), 100);
//! assert_eq!(pix[(10,10)], 255);
//! assert_eq!(pix[(20,20)], 0);
//!
//! let soft = scanfill::smooth(&pix);
//! assert_eq!(soft[(15,15)], 255);
//! assert_eq!(soft[(10,10)], 113);
//! ```

pub mod polygon;
pub mod edge;
pub mod extrema;
pub mod table;
pub mod raster;
pub mod scan;
pub mod buffer;
pub mod filter;
pub mod file;
pub mod config;
pub mod error;
pub mod session;

pub use polygon::*;
pub use edge::*;
pub use extrema::*;
pub use table::*;
pub use raster::*;
pub use scan::*;
pub use buffer::*;
pub use filter::*;
pub use file::*;
pub use config::*;
pub use error::*;
pub use session::*;

/// Result of one commit
#[derive(Debug,Clone,PartialEq)]
pub struct Commit {
    /// Filled polygon
    pub pixels: PixelBuffer,
    /// `pixels` after one smoothing pass
    pub filtered: PixelBuffer,
    /// Non-fatal problems met along the way
    pub diagnostics: Vec<Diagnostic>,
}

fn validate(n: usize, width: i32, height: i32) -> Result<(usize,usize), RasterError> {
    if n < 3 {
        return Err(RasterError::InsufficientVertices { found: n });
    }
    raster_size(width, height)
}

/// Rasterize and fill a polygon into a fresh buffer
pub fn fill_polygon<VS: VertexSource + ?Sized>(path: &VS, width: usize, height: usize,
                                               config: &RasterConfig)
                                               -> Result<(PixelBuffer, Vec<Diagnostic>), RasterError> {
    let mut ras = ScanlineRasterizer::new(width, height).verbose(config.verbose);
    ras.add_polygon(path)?;
    let (table, mut diagnostics) = ras.into_parts();

    let mut pixels = PixelBuffer::filled(width, height, config.background);
    let filler = SpanFiller::new(config.foreground)
        .flip_y(config.flip_y)
        .verbose(config.verbose);
    diagnostics.extend(filler.fill(&table, &mut pixels));
    Ok((pixels, diagnostics))
}

/// Fill a polygon on a width x height raster
///
/// Fails with `InsufficientVertices` for fewer than 3 vertices; nothing is
/// rasterized in that case.
pub fn commit_polygon(vertices: &[Vertex], width: i32, height: i32) -> Result<PixelBuffer, RasterError> {
    let (w, h) = validate(vertices.len(), width, height)?;
    let (pixels, _) = fill_polygon(vertices, w, h, &RasterConfig::default())?;
    Ok(pixels)
}

/// Run the whole pipeline: fill, then smooth
pub fn commit<VS: VertexSource + ?Sized>(path: &VS, width: i32, height: i32,
                                         config: &RasterConfig) -> Result<Commit, RasterError> {
    let (w, h) = validate(path.vertices().len(), width, height)?;
    let (pixels, diagnostics) = fill_polygon(path, w, h, config)?;
    if config.verbose {
        eprintln!("SMOOTH: {}x{}", w, h);
    }
    let filtered = smooth(&pixels);
    Ok(Commit { pixels, filtered, diagnostics })
}
