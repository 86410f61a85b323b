//! Sampled density curves for graph rendering (numbers-first).

use serde::Serialize;

use crate::Family;

/// A sampled PDF polyline for the rendering layer.
#[derive(Debug, Clone, Serialize)]
pub struct Curve {
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
}

/// Default plot window for a family.
///
/// Chi-square spans `[0, df + 6·√(2·df)]`, at least `[0, 10]`; the
/// symmetric families use `[−4, 4]`.
pub fn support_window(family: Family) -> (f64, f64) {
    match family {
        Family::ChiSquared { df } => (0.0, (df + 6.0 * (2.0 * df).sqrt()).max(10.0)),
        Family::StudentT { .. } | Family::Normal => (-4.0, 4.0),
    }
}

/// Sample `points` evenly spaced PDF values over `[lo, hi]`.
///
/// At least two points are produced regardless of the request.
pub fn sample(family: Family, lo: f64, hi: f64, points: usize) -> Curve {
    let points = points.max(2);
    let step = (hi - lo) / (points - 1) as f64;
    let mut xs = Vec::with_capacity(points);
    let mut ys = Vec::with_capacity(points);
    for i in 0..points {
        let x = lo + i as f64 * step;
        xs.push(x);
        ys.push(family.pdf(x));
    }
    Curve { xs, ys }
}
