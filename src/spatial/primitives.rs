/// A particle position carrying a scalar mass.
///
/// Mass defaults to `1.0` and accumulates when near-coincident points merge.
///
/// # Examples
///
/// ```
/// use rs_layout::spatial::Point;
///
/// let p = Point::new(1.0, 2.0);
/// assert_eq!(p.mass, 1.0);
///
/// let heavy = Point::with_mass(1.0, 2.0, 3.0);
/// assert_eq!(heavy.mass, 3.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub mass: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, mass: 1.0 }
    }

    pub fn with_mass(x: f64, y: f64, mass: f64) -> Self {
        Self { x, y, mass }
    }

    /// Euclidean distance to `other`, ignoring mass.
    pub fn distance_to(&self, other: &Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

/// One of the four equal sub-rectangles of a `Boundary`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Quadrant {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Quadrant {
    /// All quadrants in child-slot order.
    pub const ALL: [Quadrant; 4] = [
        Quadrant::TopLeft,
        Quadrant::TopRight,
        Quadrant::BottomLeft,
        Quadrant::BottomRight,
    ];

    /// Slot of this quadrant in a node's child array.
    pub fn index(self) -> usize {
        match self {
            Quadrant::TopLeft => 0,
            Quadrant::TopRight => 1,
            Quadrant::BottomLeft => 2,
            Quadrant::BottomRight => 3,
        }
    }

    /// Short label used when printing a tree.
    pub fn label(self) -> &'static str {
        match self {
            Quadrant::TopLeft => "TL",
            Quadrant::TopRight => "TR",
            Quadrant::BottomLeft => "BL",
            Quadrant::BottomRight => "BR",
        }
    }
}

/// An axis-aligned rectangle with a top-left origin.
///
/// Containment is inclusive on all four edges, so a point on a shared edge is
/// contained by both neighbours. `quadrant_of` breaks that tie.
///
/// # Examples
///
/// ```
/// use rs_layout::spatial::{Boundary, Point};
///
/// let b = Boundary::new(0.0, 0.0, 100.0, 100.0);
/// assert!(b.contains(&Point::new(0.0, 0.0)));
/// assert!(b.contains(&Point::new(100.0, 100.0)));
/// assert!(!b.contains(&Point::new(101.0, 50.0)));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Boundary {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Boundary {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// True when every field is finite and both extents are non-negative.
    pub fn is_valid(&self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.width >= 0.0
            && self.height >= 0.0
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    pub fn contains(&self, point: &Point) -> bool {
        self.contains_xy(point.x, point.y)
    }

    pub fn contains_xy(&self, x: f64, y: f64) -> bool {
        self.x <= x && x <= self.right() && self.y <= y && y <= self.bottom()
    }

    /// Picks the quadrant a point belongs to.
    ///
    /// Points on the horizontal mid-line count as upper and points on the
    /// vertical mid-line count as left, so every point maps to exactly one
    /// quadrant.
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_layout::spatial::{Boundary, Quadrant};
    ///
    /// let b = Boundary::new(0.0, 0.0, 4.0, 4.0);
    /// assert_eq!(b.quadrant_of(1.0, 1.0), Quadrant::TopLeft);
    /// assert_eq!(b.quadrant_of(2.0, 2.0), Quadrant::TopLeft);
    /// assert_eq!(b.quadrant_of(3.0, 1.0), Quadrant::TopRight);
    /// assert_eq!(b.quadrant_of(2.0, 3.0), Quadrant::BottomLeft);
    /// assert_eq!(b.quadrant_of(3.0, 3.0), Quadrant::BottomRight);
    /// ```
    pub fn quadrant_of(&self, x: f64, y: f64) -> Quadrant {
        let (cx, cy) = self.center();
        match (y <= cy, x <= cx) {
            (true, true) => Quadrant::TopLeft,
            (true, false) => Quadrant::TopRight,
            (false, true) => Quadrant::BottomLeft,
            (false, false) => Quadrant::BottomRight,
        }
    }

    /// Splits the rectangle into four equal quadrants, in `Quadrant::ALL` order.
    pub fn subdivide(&self) -> [Boundary; 4] {
        let hw = self.width / 2.0;
        let hh = self.height / 2.0;
        [
            Boundary::new(self.x, self.y, hw, hh),
            Boundary::new(self.x + hw, self.y, hw, hh),
            Boundary::new(self.x, self.y + hh, hw, hh),
            Boundary::new(self.x + hw, self.y + hh, hw, hh),
        ]
    }

    /// The sub-rectangle for `quadrant`.
    pub fn quadrant(&self, quadrant: Quadrant) -> Boundary {
        self.subdivide()[quadrant.index()]
    }

    /// Moves `(x, y)` to the nearest position inside the rectangle.
    pub fn clamp(&self, x: f64, y: f64) -> (f64, f64) {
        (x.max(self.x).min(self.right()), y.max(self.y).min(self.bottom()))
    }
}
