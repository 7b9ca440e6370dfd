//! Span filling
//!
//! Crossings of a row are sorted and taken in pairs; each pair `(a, b)`
//! covers the pixels `a .. b` (even-odd rule). A row with an odd number of
//! crossings drops its last (largest) crossing before pairing.

use crate::buffer::PixelBuffer;
use crate::error::Diagnostic;
use crate::table::IntersectionTable;

/// Run of `len` pixels starting at `x`
#[derive(Debug,Default,Copy,Clone,PartialEq)]
pub struct Span {
    pub x: i64,
    pub len: i64,
}

impl Span {
    /// Half-open run `x0 .. x1`
    pub fn between(x0: i64, x1: i64) -> Self {
        Span { x: x0, len: x1 - x0 }
    }
    /// Last pixel covered, None for an empty span
    pub fn end(&self) -> Option<i64> {
        if self.len > 0 {
            Some(self.x + self.len - 1)
        } else {
            None
        }
    }
}

/// Spans of a single geometry row
#[derive(Debug,Default,Clone,PartialEq)]
pub struct Scanline {
    pub y: i64,
    pub spans: Vec<Span>,
    /// Unmatched crossing left out of an odd row
    pub dropped: Option<i64>,
}

impl Scanline {
    /// Pair up the crossings of row `y`
    ///
    /// Equal crossings produce an empty span, kept so degenerate pairs
    /// (a lone apex) stay visible.
    pub fn new(y: i64, crossings: &[i64]) -> Self {
        let mut xs = crossings.to_vec();
        xs.sort_unstable();
        let dropped = if xs.len() % 2 == 1 { xs.pop() } else { None };
        let spans = xs.chunks(2)
            .map(|p| Span::between(p[0], p[1]))
            .collect();
        Scanline { y, spans, dropped }
    }
    /// Pixels covered by the row
    pub fn coverage(&self) -> i64 {
        self.spans.iter().map(|s| s.len).sum()
    }
}

/// Writes the rows of an intersection table into a pixel buffer
#[derive(Debug,Copy,Clone)]
pub struct SpanFiller {
    value: u8,
    flip_y: bool,
    verbose: bool,
}

impl Default for SpanFiller {
    fn default() -> SpanFiller {
        SpanFiller::new(255)
    }
}

impl SpanFiller {
    /// Filler writing `value`, geometry rows flipped
    pub fn new(value: u8) -> Self {
        SpanFiller { value, flip_y: true, verbose: false }
    }
    /// Write geometry row `r` to buffer row `height - 1 - r`
    pub fn flip_y(mut self, flip: bool) -> Self {
        self.flip_y = flip;
        self
    }
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
    /// Buffer row of geometry row `y`
    pub fn buffer_row(&self, y: i64, height: usize) -> i64 {
        if self.flip_y {
            height as i64 - 1 - y
        } else {
            y
        }
    }
    /// Render one row of spans
    pub fn render(&self, sl: &Scanline, buf: &mut PixelBuffer) {
        let y = self.buffer_row(sl.y, buf.height);
        for span in &sl.spans {
            if let Some(end) = span.end() {
                buf.copy_hline(span.x, y, end, self.value);
            }
        }
    }
    /// Fill every row of the table, returning rows that needed the odd policy
    pub fn fill(&self, table: &IntersectionTable, buf: &mut PixelBuffer) -> Vec<Diagnostic> {
        let mut diagnostics = vec![];
        for (y, xs) in table.rows() {
            let sl = Scanline::new(y as i64, xs);
            if self.verbose {
                eprintln!("FILL: row {} crossings {} spans {} pixels {}",
                          y, xs.len(), sl.spans.len(), sl.coverage());
            }
            if sl.dropped.is_some() {
                diagnostics.push(Diagnostic::OddCrossings { row: y, count: xs.len() });
            }
            self.render(&sl, buf);
        }
        diagnostics
    }
}
