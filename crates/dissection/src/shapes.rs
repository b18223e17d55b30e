//! Face symbols, composite solids, and sides.
//!
//! - `Shape2`: the three face symbols (`C`, `S`, `T`).
//! - `Shape3`: the six solids, each an unordered pair of `Shape2`.
//! - `Side`: the three positions, indexed Left=0, Mid=1, Right=2.
//!
//! The `Shape3` ↔ pair table is the only piece of domain knowledge the solver
//! uses. `Shape3::components` and `Shape3::from_components` are its two
//! directions and are written as exhaustive matches so the compiler checks
//! coverage.

use std::fmt;

/// Face symbol shown to the inside players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Shape2 {
    Circle,
    Square,
    Triangle,
}

impl Shape2 {
    pub const ALL: [Shape2; 3] = [Shape2::Circle, Shape2::Square, Shape2::Triangle];

    #[inline]
    pub fn code(self) -> char {
        match self {
            Shape2::Circle => 'C',
            Shape2::Square => 'S',
            Shape2::Triangle => 'T',
        }
    }

    /// Case-insensitive inverse of [`Shape2::code`].
    pub fn from_code(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'C' => Some(Shape2::Circle),
            'S' => Some(Shape2::Square),
            'T' => Some(Shape2::Triangle),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Shape2::Circle => "Circle",
            Shape2::Square => "Square",
            Shape2::Triangle => "Triangle",
        }
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Shape2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Composite solid shown to the outside team.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Shape3 {
    Sphere,
    Cube,
    Tetrahedron,
    Cylinder,
    Cone,
    TriangularPrism,
}

impl Shape3 {
    pub const ALL: [Shape3; 6] = [
        Shape3::Sphere,
        Shape3::Cube,
        Shape3::Tetrahedron,
        Shape3::Cylinder,
        Shape3::Cone,
        Shape3::TriangularPrism,
    ];

    /// Decomposition into two face symbols. For doubles both entries agree.
    pub fn components(self) -> [Shape2; 2] {
        use Shape2::*;
        match self {
            Shape3::Sphere => [Circle, Circle],
            Shape3::Cube => [Square, Square],
            Shape3::Tetrahedron => [Triangle, Triangle],
            Shape3::Cylinder => [Circle, Square],
            Shape3::Cone => [Circle, Triangle],
            Shape3::TriangularPrism => [Triangle, Square],
        }
    }

    /// Solid made of `a` and `b`; argument order is irrelevant.
    pub fn from_components(a: Shape2, b: Shape2) -> Self {
        use Shape2::*;
        match (a, b) {
            (Circle, Circle) => Shape3::Sphere,
            (Square, Square) => Shape3::Cube,
            (Triangle, Triangle) => Shape3::Tetrahedron,
            (Circle, Square) | (Square, Circle) => Shape3::Cylinder,
            (Circle, Triangle) | (Triangle, Circle) => Shape3::Cone,
            (Triangle, Square) | (Square, Triangle) => Shape3::TriangularPrism,
        }
    }

    /// Both components identical (Sphere, Cube, Tetrahedron).
    #[inline]
    pub fn is_double(self) -> bool {
        matches!(self, Shape3::Sphere | Shape3::Cube | Shape3::Tetrahedron)
    }

    #[inline]
    pub fn contains(self, shape: Shape2) -> bool {
        self.components().contains(&shape)
    }

    /// Give up one `give` and receive one `take`.
    ///
    /// Returns `None` when `give` is not a component of `self`.
    pub fn exchange(self, give: Shape2, take: Shape2) -> Option<Shape3> {
        let [a, b] = self.components();
        let kept = if a == give {
            b
        } else if b == give {
            a
        } else {
            return None;
        };
        Some(Shape3::from_components(kept, take))
    }

    /// The non-double solid that does not contain `shape`.
    pub fn without(shape: Shape2) -> Shape3 {
        match shape {
            Shape2::Circle => Shape3::TriangularPrism,
            Shape2::Square => Shape3::Cone,
            Shape2::Triangle => Shape3::Cylinder,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Shape3::Sphere => "CC",
            Shape3::Cube => "SS",
            Shape3::Tetrahedron => "TT",
            Shape3::Cylinder => "CS",
            Shape3::Cone => "CT",
            Shape3::TriangularPrism => "TS",
        }
    }

    /// Parse a two-letter code. Components may come in either order (`SC` is a Cylinder).
    pub fn from_code(code: &str) -> Option<Self> {
        let mut chars = code.trim().chars();
        let a = Shape2::from_code(chars.next()?)?;
        let b = Shape2::from_code(chars.next()?)?;
        if chars.next().is_some() {
            return None;
        }
        Some(Shape3::from_components(a, b))
    }

    pub fn name(self) -> &'static str {
        match self {
            Shape3::Sphere => "Sphere",
            Shape3::Cube => "Cube",
            Shape3::Tetrahedron => "Tetrahedron",
            Shape3::Cylinder => "Cylinder",
            Shape3::Cone => "Cone",
            Shape3::TriangularPrism => "Triangular Prism",
        }
    }
}

impl fmt::Display for Shape3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Statue position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Side {
    Left,
    Mid,
    Right,
}

impl Side {
    pub const ALL: [Side; 3] = [Side::Left, Side::Mid, Side::Right];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Side::ALL.get(index).copied()
    }

    #[inline]
    pub fn code(self) -> char {
        match self {
            Side::Left => 'L',
            Side::Mid => 'M',
            Side::Right => 'R',
        }
    }

    pub fn from_code(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'L' => Some(Side::Left),
            'M' => Some(Side::Mid),
            'R' => Some(Side::Right),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Side::Left => "Left",
            Side::Mid => "Middle",
            Side::Right => "Right",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
