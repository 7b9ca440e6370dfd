//! Reading and writing grayscale image files
//!
//! Format is chosen from the file extension (png, pgm, bmp)
use std::path::Path;

use crate::buffer::PixelBuffer;

pub fn read_file<P: AsRef<Path>>(filename: P) -> Result<PixelBuffer,image::ImageError> {
    let img = image::open(filename)?.to_luma();
    let (w, h) = img.dimensions();
    let buf = img.into_raw();
    Ok(PixelBuffer { data: buf, width: w as usize, height: h as usize })
}

pub fn write_file<P: AsRef<Path>>(buf: &PixelBuffer, filename: P) -> Result<(), std::io::Error> {
    image::save_buffer(filename, &buf.data, buf.width as u32, buf.height as u32, image::Gray(8))
}

/// Compare two image files pixel by pixel, listing the differences
pub fn img_diff<P: AsRef<Path>>(f1: P, f2: P) -> Result<bool,image::ImageError> {
    let b1 = read_file(f1)?;
    let b2 = read_file(f2)?;
    if b1.width != b2.width || b1.height != b2.height {
        println!("image sizes differ {}x{} {}x{}", b1.width, b1.height, b2.width, b2.height);
        return Ok(false);
    }
    let mut flag = true;
    for (i,(v1,v2)) in b1.data.iter().zip(b2.data.iter()).enumerate() {
        if v1 != v2 {
            println!("{} [{},{}]: {} {}", i, i % b1.width, i / b1.width, v1, v2);
            flag = false;
        }
    }
    Ok(flag)
}

impl PixelBuffer {
    /// Save as a grayscale image
    pub fn to_file<P: AsRef<Path>>(&self, filename: P) -> Result<(), std::io::Error> {
        write_file(self, filename)
    }
}
