//! Geometric primitives shared by the StandKit views.
//!
//! All coordinates follow the SVG convention: X grows to the right, Y grows
//! downward, and lengths are millimeters. Shapes are plain `Copy` values so
//! view solvers can pass them around freely.

use serde::{Deserialize, Serialize};

/// Represents a 2D point with X and Y coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// X coordinate in millimeters
    pub x: f64,
    /// Y coordinate in millimeters, positive downward
    pub y: f64,
}

impl Point {
    /// Creates a new point with the given coordinates
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Calculates the distance to another point
    pub fn distance_to(&self, other: &Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// Rotates `point` around `center` by `angle_rad` radians.
///
/// Positive angles turn clockwise in the y-down plane. Angles below the
/// noise floor return the point unchanged.
pub fn rotate_point(point: Point, center: Point, angle_rad: f64) -> Point {
    if angle_rad.abs() < 1e-12 {
        return point;
    }
    let cos_a = angle_rad.cos();
    let sin_a = angle_rad.sin();
    let dx = point.x - center.x;
    let dy = point.y - center.y;
    Point {
        x: center.x + dx * cos_a - dy * sin_a,
        y: center.y + dx * sin_a + dy * cos_a,
    }
}

/// An axis-aligned rectangle: top-left corner plus size
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// X of the left edge
    pub x: f64,
    /// Y of the top edge
    pub y: f64,
    /// Width in millimeters
    pub width: f64,
    /// Height in millimeters
    pub height: f64,
}

impl Rect {
    /// Creates a new rectangle from its top-left corner and size
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// X coordinate of the right edge
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Y coordinate of the bottom edge (largest Y in the y-down plane)
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Center of the rectangle
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Tests whether `circle` lies entirely within this rectangle.
    ///
    /// Edge contact counts as contained.
    pub fn contains_circle(&self, circle: &Circle) -> bool {
        self.x <= circle.center.x - circle.radius
            && circle.center.x + circle.radius <= self.right()
            && self.y <= circle.center.y - circle.radius
            && circle.center.y + circle.radius <= self.bottom()
    }
}

/// A quadrilateral as four corner points in drawing order
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quad {
    /// The four corners
    pub points: [Point; 4],
}

impl Quad {
    /// Creates a quadrilateral from four corners in drawing order
    pub fn new(points: [Point; 4]) -> Self {
        Self { points }
    }

    /// Axis-aligned bounding box of the four corners
    pub fn bounding_box(&self) -> Rect {
        let mut min_x = self.points[0].x;
        let mut min_y = self.points[0].y;
        let mut max_x = self.points[0].x;
        let mut max_y = self.points[0].y;
        for p in &self.points[1..] {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }
        Rect::new(min_x, min_y, max_x - min_x, max_y - min_y)
    }
}

/// A circle defined by center and radius
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Circle {
    /// Center of the circle
    pub center: Point,
    /// Radius in millimeters
    pub radius: f64,
}

impl Circle {
    /// Creates a new circle
    pub fn new(center: Point, radius: f64) -> Self {
        Self { center, radius }
    }
}

/// One of the five physical parts of the stand assembly
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Part {
    /// Floor plate the whole assembly rests on
    Base,
    /// Load-bearing column rising from the base
    Stand,
    /// Bracket joining the column to the display
    VesaNeck,
    /// Electronics housing on the back of the panel
    Backpack,
    /// The display panel itself
    Panel,
}

impl Part {
    /// All parts ordered back to front
    pub const ALL: [Part; 5] = [
        Part::Base,
        Part::Stand,
        Part::VesaNeck,
        Part::Backpack,
        Part::Panel,
    ];
}

/// Outline of a part within a single view.
///
/// Most parts project to axis-aligned rectangles; the stand column and the
/// VESA neck shear into quadrilaterals when the column leans.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PartShape {
    /// Axis-aligned rectangle
    Rectangle(Rect),
    /// Free quadrilateral
    Quadrilateral(Quad),
}

impl PartShape {
    /// Axis-aligned bounding box regardless of variant
    pub fn bounding_box(&self) -> Rect {
        match self {
            PartShape::Rectangle(rect) => *rect,
            PartShape::Quadrilateral(quad) => quad.bounding_box(),
        }
    }
}
