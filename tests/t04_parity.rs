
extern crate scanfill;

use scanfill::{Polygon, VertexSource};

fn star(cx: f64, cy: f64, r: f64) -> Polygon {
    let mut p = Polygon::new();
    for k in 0 .. 5 {
        let a = (90.0 + 144.0 * k as f64).to_radians();
        p.add_point(cx + r * a.cos(), cy + r * a.sin());
    }
    p
}

fn assert_even(p: &Polygon, w: usize, h: usize) {
    let (table, diag) = scanfill::rasterize(p.vertices(), w, h).unwrap();
    assert!(diag.is_empty(), "{:?}", diag);
    assert!(table.odd_rows().is_empty(), "odd rows {:?}", table.odd_rows());
    for (y, xs) in table.rows() {
        assert_eq!(xs.len() % 2, 0, "row {}", y);
    }
}

#[test]
fn t04_simple_polygons() {
    assert_even(&Polygon::from_points(&[(5.,0.), (10.,5.), (5.,10.), (0.,5.)]), 20, 20);
    assert_even(&Polygon::from_points(&[(50.,5.), (90.,40.), (60.,95.), (10.,60.)]), 100, 100);
    // Staircase with horizontal runs that pass through
    assert_even(&Polygon::from_points(&[(0.,0.), (10.,0.), (10.,5.), (20.,5.),
                                        (20.,10.), (0.,10.)]), 30, 30);
    // Zig-zag bottom: several minima and maxima on the same rows
    assert_even(&Polygon::from_points(&[(0.,40.), (0.,10.), (10.,20.), (20.,10.),
                                        (30.,20.), (40.,10.), (40.,40.)]), 50, 50);
    // Repeated vertices
    assert_even(&Polygon::from_points(&[(0.,0.), (10.,5.), (10.,5.), (0.,10.), (0.,10.)]), 20, 20);
}

#[test]
fn t04_fractional_vertices() {
    let mut p = Polygon::new();
    for k in 0 .. 24 {
        let a = 0.1 + k as f64 * std::f64::consts::PI * 2.0 / 24.0;
        p.add_point(50.3 + 30.7 * a.cos(), 49.6 + 30.7 * a.sin());
    }
    assert_even(&p, 100, 100);
}

#[test]
fn t04_self_intersecting() {
    let p = star(50.0, 50.0, 40.0);
    assert_even(&p, 100, 100);

    let pix = scanfill::commit_polygon(p.vertices(), 100, 100).unwrap();
    // Even-odd leaves the centre pentagon empty: geometry (50,50) -> buffer row 49
    assert_eq!(pix[(50,49)], 0);
    // Top point of the star, geometry (50,85)
    assert_eq!(pix[(50,14)], 255);
}

#[test]
fn t04_spikes() {
    // Two nearly coincident points
    assert_even(&Polygon::from_points(&[(5.,5.), (45.,25.), (5.,5.3)]), 50, 50);

    // Thin spike whose tip sits exactly on a scanline
    let p = Polygon::from_points(&[(10.,5.), (12.,40.), (10.5,5.)]);
    assert_even(&p, 50, 50);
    let (table, _) = scanfill::rasterize(p.vertices(), 50, 50).unwrap();
    assert_eq!(table.row(40), &[12, 12]);
}
