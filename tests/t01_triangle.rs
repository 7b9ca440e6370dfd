
extern crate scanfill;

use scanfill::{Scanline, Span, Vertex};

fn triangle() -> Vec<Vertex> {
    [(0.,0.), (10.,0.), (5.,10.)].iter()
        .map(|&p| Vertex::from(p))
        .collect()
}

#[test]
fn t01_triangle_rows() {
    let (table, diag) = scanfill::rasterize(&triangle(), 20, 20).unwrap();
    assert!(diag.is_empty());

    // Shared horizontal base: from x = 0 up to x = 10
    let base = Scanline::new(0, table.row(0));
    assert_eq!(base.spans, vec![Span { x: 0, len: 10 }]);

    let mid = Scanline::new(5, table.row(5));
    assert_eq!(mid.spans, vec![Span::between(2, 7)]);

    // Apex is a degenerate pair, not an odd row
    let apex = Scanline::new(10, table.row(10));
    assert_eq!(table.row(10), &[5, 5]);
    assert_eq!(apex.spans, vec![Span { x: 5, len: 0 }]);
    assert_eq!(apex.dropped, None);
    assert!(table.odd_rows().is_empty());
}

#[test]
fn t01_triangle_pixels() {
    let pix = scanfill::commit_polygon(&triangle(), 20, 20).unwrap();
    // Geometry row r lands in buffer row 19 - r
    let base = pix.row(19);
    assert!(base[..10].iter().all(|&p| p == 255));
    assert!(base[10..].iter().all(|&p| p == 0));
    assert_eq!(&pix.row(14)[..8], &[0,0,255,255,255,255,255,0]);
    assert!(pix.row(9).iter().all(|&p| p == 0));
    // 10 + 9 + ... + 1
    assert_eq!(pix.count(255), 55);
}

#[test]
fn t01_triangle_unflipped() {
    let cfg = scanfill::RasterConfig::new().foreground(200).background(10).flip_y(false);
    let c = scanfill::commit(&triangle(), 20, 20, &cfg).unwrap();
    assert!(c.diagnostics.is_empty());
    assert!(c.pixels.row(0)[..10].iter().all(|&p| p == 200));
    assert_eq!(c.pixels.row(0)[10], 10);
    assert_eq!(c.pixels.count(200), 55);
    assert_eq!(c.pixels.count(10), 400 - 55);
}
