use std::fmt;

use crate::geometry::Vec2;

/// One of the four sub-regions produced by splitting a [`Rect`] at its midpoint.
///
/// ```text
///   nw(x,y)
///   x────────────┬────────────┐
///   │     nw     │     ne     │
///   ├────────────x────────────┤
///   │     sw     │ c   se     │
///   └────────────┴────────────x
///                        se(x,y)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    NorthWest = 0,
    NorthEast = 1,
    SouthWest = 2,
    SouthEast = 3,
}

impl Quadrant {
    /// All quadrants in the order children are stored and searched.
    pub const ALL: [Quadrant; 4] = [
        Quadrant::NorthWest,
        Quadrant::NorthEast,
        Quadrant::SouthWest,
        Quadrant::SouthEast,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        match self {
            Quadrant::NorthWest => "nw",
            Quadrant::NorthEast => "ne",
            Quadrant::SouthWest => "sw",
            Quadrant::SouthEast => "se",
        }
    }
}

/// An axis-aligned rectangle given by its northwest (minimum) and southeast (maximum) corners.
///
/// Both edges are inclusive: a point lying exactly on the boundary is inside.
///
/// # Examples
///
/// ```
/// use rs_barnes_hut::geometry::{Rect, Vec2};
///
/// let rect = Rect::new(Vec2::new(1.0, 1.0), Vec2::new(10.0, 10.0));
/// assert!(rect.contains(Vec2::new(10.0, 1.0)));
/// assert!(!rect.contains(Vec2::new(0.0, 0.0)));
/// assert_eq!(rect.center(), Vec2::new(5.5, 5.5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub nw: Vec2,
    pub se: Vec2,
}

impl Rect {
    pub const fn new(nw: Vec2, se: Vec2) -> Self {
        Rect { nw, se }
    }

    /// The square window `center ± radius` on both axes.
    pub fn around(center: Vec2, radius: f64) -> Self {
        Rect {
            nw: Vec2::new(center.x - radius, center.y - radius),
            se: Vec2::new(center.x + radius, center.y + radius),
        }
    }

    pub fn width(&self) -> f64 {
        self.se.x - self.nw.x
    }

    pub fn height(&self) -> f64 {
        self.se.y - self.nw.y
    }

    /// The split point shared by all four quadrants.
    pub fn center(&self) -> Vec2 {
        Vec2::new(
            self.nw.x + self.width() / 2.0,
            self.nw.y + self.height() / 2.0,
        )
    }

    /// Returns false for inverted rectangles or ones with non-finite corners.
    pub fn is_valid(&self) -> bool {
        self.nw.is_finite() && self.se.is_finite() && self.nw.x <= self.se.x && self.nw.y <= self.se.y
    }

    /// Inclusive point containment on both edges.
    ///
    /// NaN coordinates are never contained.
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.nw.x && point.y >= self.nw.y && point.x <= self.se.x && point.y <= self.se.y
    }

    /// Returns true if all four edges of `inner` lie within this rectangle.
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_barnes_hut::geometry::{Rect, Vec2};
    ///
    /// let outer = Rect::new(Vec2::new(1.0, 1.0), Vec2::new(6.0, 6.0));
    /// let node = Rect::new(Vec2::new(2.0, 2.0), Vec2::new(5.0, 5.0));
    /// assert!(outer.encloses(&node));
    /// assert!(node.encloses(&node));
    /// assert!(!node.encloses(&outer));
    /// ```
    pub fn encloses(&self, inner: &Rect) -> bool {
        inner.nw.x >= self.nw.x
            && inner.nw.y >= self.nw.y
            && inner.se.x <= self.se.x
            && inner.se.y <= self.se.y
    }

    /// Strict overlap test: each rectangle starts before the other one ends, on both axes.
    ///
    /// Rectangles that only share an edge do not overlap.
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_barnes_hut::geometry::{Rect, Vec2};
    ///
    /// let a = Rect::new(Vec2::new(2.0, 2.0), Vec2::new(5.0, 5.0));
    /// let b = Rect::new(Vec2::new(0.0, 0.0), Vec2::new(3.0, 3.0));
    /// let touching = Rect::new(Vec2::new(5.0, 2.0), Vec2::new(8.0, 5.0));
    /// assert!(a.overlaps(&b) && b.overlaps(&a));
    /// assert!(!a.overlaps(&touching));
    /// ```
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.nw.x < other.se.x
            && other.nw.x < self.se.x
            && self.nw.y < other.se.y
            && other.nw.y < self.se.y
    }

    /// Closed overlap test: rectangles sharing only an edge or a corner intersect.
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_barnes_hut::geometry::{Rect, Vec2};
    ///
    /// let a = Rect::new(Vec2::new(2.0, 2.0), Vec2::new(5.0, 5.0));
    /// let touching = Rect::new(Vec2::new(5.0, 2.0), Vec2::new(8.0, 5.0));
    /// assert!(a.intersects(&touching) && touching.intersects(&a));
    /// assert!(!a.overlaps(&touching));
    /// ```
    pub fn intersects(&self, other: &Rect) -> bool {
        self.nw.x <= other.se.x
            && other.nw.x <= self.se.x
            && self.nw.y <= other.se.y
            && other.nw.y <= self.se.y
    }

    /// Splits the rectangle at its midpoint, in the order nw, ne, sw, se.
    pub fn quadrants(&self) -> [Rect; 4] {
        let c = self.center();
        [
            Rect::new(self.nw, c),
            Rect::new(Vec2::new(c.x, self.nw.y), Vec2::new(self.se.x, c.y)),
            Rect::new(Vec2::new(self.nw.x, c.y), Vec2::new(c.x, self.se.y)),
            Rect::new(c, self.se),
        ]
    }

    pub fn quadrant(&self, quadrant: Quadrant) -> Rect {
        self.quadrants()[quadrant.index()]
    }

    /// The first quadrant (nw, ne, sw, se) containing `point`.
    ///
    /// Points on a shared edge resolve to the earlier quadrant in that order.
    pub fn quadrant_of(&self, point: Vec2) -> Option<Quadrant> {
        let quadrants = self.quadrants();
        Quadrant::ALL
            .into_iter()
            .find(|q| quadrants[q.index()].contains(point))
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "nw: {}, se: {}", self.nw, self.se)
    }
}
