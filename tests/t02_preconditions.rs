
extern crate scanfill;

use scanfill::{Diagnostic, RasterError, Vertex};

fn verts(pts: &[(f64,f64)]) -> Vec<Vertex> {
    pts.iter().map(|&p| Vertex::from(p)).collect()
}

#[test]
fn t02_insufficient_vertices() {
    let two = verts(&[(1.,1.), (8.,8.)]);
    let err = RasterError::InsufficientVertices { found: 2 };
    assert_eq!(scanfill::commit_polygon(&two, 30, 30), Err(err));
    assert_eq!(scanfill::commit(&two, 30, 30, &Default::default()), Err(err));
    // Reported ahead of a bad size
    assert_eq!(scanfill::commit_polygon(&two, 0, 0), Err(err));
    assert_eq!(scanfill::commit_polygon(&[], 30, 30),
               Err(RasterError::InsufficientVertices { found: 0 }));
}

#[test]
fn t02_invalid_size() {
    let tri = verts(&[(1.,1.), (8.,1.), (4.,8.)]);
    assert_eq!(scanfill::commit_polygon(&tri, 0, 30),
               Err(RasterError::InvalidSize { width: 0, height: 30 }));
    assert_eq!(scanfill::commit_polygon(&tri, 30, -2),
               Err(RasterError::InvalidSize { width: 30, height: -2 }));
}

#[test]
fn t02_non_finite_vertex() {
    let v = verts(&[(10.,10.), (10.,20.), (std::f64::NAN, std::f64::NAN), (20.,20.), (20.,10.)]);
    let c = scanfill::commit(&v, 30, 30, &Default::default()).unwrap();
    assert_eq!(c.diagnostics, vec![Diagnostic::NonFiniteVertex { index: 2 }]);
    // Edges through the bad vertex drop out; what is left still closes
    assert_eq!(c.pixels.count(255), 100);
    assert_eq!(c.pixels[(10,10)], 255);
    assert_eq!(c.pixels[(19,19)], 255);

    let v = verts(&[(2.,2.), (std::f64::INFINITY, 5.), (2.,9.)]);
    let c = scanfill::commit(&v, 10, 10, &Default::default()).unwrap();
    assert!(c.diagnostics.contains(&Diagnostic::NonFiniteVertex { index: 1 }));
}

#[test]
fn t02_partly_outside() {
    let v = verts(&[(-10.,-10.), (-10.,10.), (10.,10.), (10.,-10.)]);
    let c = scanfill::commit(&v, 20, 20, &Default::default()).unwrap();
    assert_eq!(c.diagnostics, vec![Diagnostic::OutOfBounds { edge: 0 },
                                   Diagnostic::OutOfBounds { edge: 2 }]);
    assert_eq!(c.pixels.count(255), 100);
    for y in 10 .. 20 {
        assert!(c.pixels.row(y)[..10].iter().all(|&p| p == 255));
        assert!(c.pixels.row(y)[10..].iter().all(|&p| p == 0));
    }
}

#[test]
fn t02_huge_coordinates() {
    let v = verts(&[(0.,-1e9), (1e9,1e9), (-1e9,1e9)]);
    let pix = scanfill::commit_polygon(&v, 50, 50).unwrap();
    assert_eq!(pix.count(255), 2500);

    // Entirely off the raster
    let v = verts(&[(100.,100.), (140.,100.), (120.,130.)]);
    let c = scanfill::commit(&v, 50, 50, &Default::default()).unwrap();
    assert_eq!(c.pixels.count(0), 2500);
    assert_eq!(c.filtered.count(0), 2500);
}
