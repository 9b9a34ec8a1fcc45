use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn midpoint(&self, other: &Self) -> Self {
        Self::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }
}

/// A detected text region's quadrilateral, corners ordered
/// `[top-left, top-right, bottom-right, bottom-left]` in image pixels
/// (y grows downwards).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quad(pub [Point; 4]);

impl Quad {
    pub fn from_corners(corners: [[f64; 2]; 4]) -> Self {
        Quad(corners.map(|[x, y]| Point::new(x, y)))
    }

    /// Axis-aligned rectangle helper, mostly for tests and synthetic input.
    pub fn axis_aligned(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self::from_corners([[x0, y0], [x1, y0], [x1, y1], [x0, y1]])
    }

    pub fn top_left(&self) -> Point {
        self.0[0]
    }

    pub fn top_right(&self) -> Point {
        self.0[1]
    }

    pub fn top_midpoint(&self) -> Point {
        self.top_left().midpoint(&self.top_right())
    }

    /// Line through the two top corners.
    ///
    /// A vertical top edge has no finite slope; it is flattened to a
    /// horizontal line through the mean y of the two corners.
    pub fn top_edge(&self) -> TopEdge {
        let (tl, tr) = (self.top_left(), self.top_right());
        let dx = tr.x - tl.x;
        if dx == 0.0 {
            return TopEdge { slope: 0.0, intercept: (tl.y + tr.y) / 2.0 };
        }
        let slope = (tr.y - tl.y) / dx;
        TopEdge { slope, intercept: tl.y - slope * tl.x }
    }
}

/// `y = slope * x + intercept`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TopEdge {
    pub slope: f64,
    pub intercept: f64,
}

impl TopEdge {
    pub fn y_at(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}
