//! Geometry data types
//!
//! These types sit between the layout planner and the content stream
//! assembler. All coordinates are in points.

use crate::types::Point;

/// A rectangular area in points
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// X position (left edge)
    pub x: f64,
    /// Y position (bottom edge)
    pub y: f64,
    /// Width
    pub width: f64,
    /// Height
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge x coordinate
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Top edge y coordinate
    pub fn top(&self) -> f64 {
        self.y + self.height
    }

    /// Center point
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Check that a disk of `radius` around `center` fits inside the rectangle
    pub fn contains_disk(&self, center: Point, radius: f64) -> bool {
        center.x - radius >= self.x
            && center.x + radius <= self.right()
            && center.y - radius >= self.y
            && center.y + radius <= self.top()
    }
}

/// One cubic Bezier segment. The start point is the end of the previous
/// segment (or the move-to point for the first one).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicSegment {
    /// Control point pulling the curve as it leaves the start point
    pub control1: Point,
    /// Control point pulling the curve as it approaches the end point
    pub control2: Point,
    /// End point of the curve
    pub end: Point,
}

impl CubicSegment {
    /// Evaluate the curve at `t` in `0.0..=1.0`, given its start point.
    pub fn point_at(&self, start: Point, t: f64) -> Point {
        let mt = 1.0 - t;
        let a = mt * mt * mt;
        let b = 3.0 * mt * mt * t;
        let c = 3.0 * mt * t * t;
        let d = t * t * t;
        Point::new(
            a * start.x + b * self.control1.x + c * self.control2.x + d * self.end.x,
            a * start.y + b * self.control1.y + c * self.control2.y + d * self.end.y,
        )
    }
}

/// Final layout of the diagram on its page
///
/// Contains everything the content stream assembler needs to draw the
/// background and both disks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageLayout {
    /// Page width in points
    pub page_width: f64,
    /// Page height in points
    pub page_height: f64,
    /// Center of the first (left) disk
    pub disk_a_center: Point,
    /// Center of the second (right) disk
    pub disk_b_center: Point,
    /// Radius shared by both disks
    pub radius: f64,
    /// Signed horizontal distance of each center from the page center
    pub offset: f64,
}

impl PageLayout {
    /// Full-page rectangle painted white before the disks
    pub fn background(&self) -> Rect {
        Rect::new(0.0, 0.0, self.page_width, self.page_height)
    }

    /// Page center point
    pub fn page_center(&self) -> Point {
        self.background().center()
    }

    /// Distance between the two disk centers
    pub fn center_distance(&self) -> f64 {
        self.disk_a_center.distance_to(self.disk_b_center)
    }

    /// Whether both disks lie fully inside the page
    pub fn disks_within_page(&self) -> bool {
        let page = self.background();
        page.contains_disk(self.disk_a_center, self.radius)
            && page.contains_disk(self.disk_b_center, self.radius)
    }
}
