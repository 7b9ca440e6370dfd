//! Box smoothing
//!
//! Each output pixel is the truncated mean of the 3x3 block around it,
//! counting only the pixels that fall inside the image: 9 in the interior,
//! 6 along a border, 4 in a corner. Reads come from the untouched source.

use crate::buffer::PixelBuffer;

/// Sum and count of the in-bounds 3x3 block centred on (x, y)
pub fn neighborhood(src: &PixelBuffer, x: usize, y: usize) -> (u32, u32) {
    let x0 = x.saturating_sub(1);
    let y0 = y.saturating_sub(1);
    let x1 = (x + 1).min(src.width - 1);
    let y1 = (y + 1).min(src.height - 1);
    let mut sum = 0;
    let mut count = 0;
    for j in y0 ..= y1 {
        let row = src.row(j);
        for &p in &row[x0 ..= x1] {
            sum += u32::from(p);
            count += 1;
        }
    }
    (sum, count)
}

/// Smooth a buffer into a new one of the same size
pub fn smooth(src: &PixelBuffer) -> PixelBuffer {
    let mut out = PixelBuffer::new(src.width, src.height);
    for y in 0 .. src.height {
        for x in 0 .. src.width {
            let (sum, count) = neighborhood(src, x, y);
            out[(x,y)] = (sum / count) as u8;
        }
    }
    out
}

/// Apply the filter `passes` times
pub fn smooth_passes(src: &PixelBuffer, passes: usize) -> PixelBuffer {
    let mut out = src.clone();
    for _ in 0 .. passes {
        out = smooth(&out);
    }
    out
}
