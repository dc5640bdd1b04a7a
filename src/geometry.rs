//! Axes, faces and grid coordinates.
//!
//! Grid coordinates are `(left, top, depth)` triples. Each component grows
//! away from the *near* face of its axis (Left, Up, Front) toward the *far*
//! face (Right, Down, Back).
//!
//! In model space the grid is centered at the origin with Right = +x,
//! Up = +y and Front = +z, so the top and depth components are
//! sign-inverted relative to the left one.

use std::fmt;

/// One of the three principal directions of the cube grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Axis {
    /// Runs from the Left face to the Right face.
    LeftRight,
    /// Runs from the Up face to the Down face.
    TopBottom,
    /// Runs from the Front face to the Back face.
    FrontBack,
}

impl Axis {
    /// All axes, in grid-dimension order.
    pub const ALL: [Axis; 3] = [Axis::LeftRight, Axis::TopBottom, Axis::FrontBack];

    /// Grid dimension of this axis within a [`Coord`].
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Axis::LeftRight => 0,
            Axis::TopBottom => 1,
            Axis::FrontBack => 2,
        }
    }

    /// Axis of grid dimension `index`, wrapping modulo 3.
    #[inline]
    pub const fn from_index(index: usize) -> Axis {
        Self::ALL[index % 3]
    }

    /// Face at component 0 of this axis.
    pub const fn near_face(self) -> Face {
        match self {
            Axis::LeftRight => Face::Left,
            Axis::TopBottom => Face::Up,
            Axis::FrontBack => Face::Front,
        }
    }

    /// Face at component `size - 1` of this axis.
    pub const fn far_face(self) -> Face {
        match self {
            Axis::LeftRight => Face::Right,
            Axis::TopBottom => Face::Down,
            Axis::FrontBack => Face::Back,
        }
    }

    /// The axis that is neither `self` nor `other`, or `None` if they are
    /// the same axis.
    pub fn remaining(self, other: Axis) -> Option<Axis> {
        if self == other {
            return None;
        }
        // indices sum to 0 + 1 + 2
        Some(Axis::from_index(3 - self.index() - other.index()))
    }

    /// Faces around this axis in the order a clockwise quarter turn moves
    /// stickers: the sticker on `cycle[k]` ends up on `cycle[k + 1]`.
    ///
    /// Clockwise is as seen looking at the far face of the axis.
    pub const fn clockwise_cycle(self) -> [Face; 4] {
        match self {
            Axis::LeftRight => [Face::Up, Face::Back, Face::Down, Face::Front],
            Axis::TopBottom => [Face::Left, Face::Front, Face::Right, Face::Back],
            Axis::FrontBack => [Face::Up, Face::Left, Face::Down, Face::Right],
        }
    }

    /// Sign of a clockwise quarter turn as a right-handed rotation about the
    /// spatial axis (+x, +y or +z).
    pub const fn clockwise_sign(self) -> f32 {
        match self {
            Axis::LeftRight => -1.0,
            Axis::TopBottom => 1.0,
            Axis::FrontBack => 1.0,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Axis::LeftRight => "left-right",
            Axis::TopBottom => "top-bottom",
            Axis::FrontBack => "front-back",
        };
        f.write_str(name)
    }
}

/// Whether moving a sticker from `from` to `to` is one clockwise step around
/// `axis`.
///
/// Returns `Some(false)` for a counter-clockwise step and `None` if the two
/// faces are not adjacent around `axis`.
pub fn clockwise_step(axis: Axis, from: Face, to: Face) -> Option<bool> {
    let cycle = axis.clockwise_cycle();
    let position = cycle.iter().position(|&face| face == from)?;
    if cycle[(position + 1) % 4] == to {
        Some(true)
    } else if cycle[(position + 3) % 4] == to {
        Some(false)
    } else {
        None
    }
}

/// One of the six faces of the cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Face {
    Left,
    Right,
    Up,
    Down,
    Front,
    Back,
}

impl Face {
    /// All faces, in storage order.
    pub const ALL: [Face; 6] = [
        Face::Left,
        Face::Right,
        Face::Up,
        Face::Down,
        Face::Front,
        Face::Back,
    ];

    /// Storage slot of this face within a piece.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The axis this face is perpendicular to.
    pub const fn axis(self) -> Axis {
        match self {
            Face::Left | Face::Right => Axis::LeftRight,
            Face::Up | Face::Down => Axis::TopBottom,
            Face::Front | Face::Back => Axis::FrontBack,
        }
    }

    /// Whether this face sits at component `size - 1` of its axis.
    pub const fn is_far(self) -> bool {
        matches!(self, Face::Right | Face::Down | Face::Back)
    }

    /// The face on the other side of the cube.
    pub const fn opposite(self) -> Face {
        match self {
            Face::Left => Face::Right,
            Face::Right => Face::Left,
            Face::Up => Face::Down,
            Face::Down => Face::Up,
            Face::Front => Face::Back,
            Face::Back => Face::Front,
        }
    }

    /// Single-letter name used in text output.
    pub const fn letter(self) -> char {
        match self {
            Face::Left => 'L',
            Face::Right => 'R',
            Face::Up => 'U',
            Face::Down => 'D',
            Face::Front => 'F',
            Face::Back => 'B',
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Position of a piece in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Coord {
    pub left: usize,
    pub top: usize,
    pub depth: usize,
}

impl Coord {
    pub const fn new(left: usize, top: usize, depth: usize) -> Self {
        Self { left, top, depth }
    }

    /// Component of this coordinate along `axis`.
    #[inline]
    pub const fn along(self, axis: Axis) -> usize {
        match axis {
            Axis::LeftRight => self.left,
            Axis::TopBottom => self.top,
            Axis::FrontBack => self.depth,
        }
    }

    /// Copy of this coordinate with the component along `axis` replaced.
    #[inline]
    pub fn with(mut self, axis: Axis, value: usize) -> Self {
        match axis {
            Axis::LeftRight => self.left = value,
            Axis::TopBottom => self.top = value,
            Axis::FrontBack => self.depth = value,
        }
        self
    }

    /// Whether every component is in `[0, size)`.
    #[inline]
    pub const fn is_within(self, size: usize) -> bool {
        self.left < size && self.top < size && self.depth < size
    }

    /// Whether the piece at this coordinate touches no outer face.
    pub fn is_interior(self, size: usize) -> bool {
        Axis::ALL.iter().all(|&axis| {
            let component = self.along(axis);
            component != 0 && component + 1 != size
        })
    }

    /// Whether the piece at this coordinate lies on `face` of the cube.
    pub fn is_on(self, face: Face, size: usize) -> bool {
        let component = self.along(face.axis());
        if face.is_far() {
            component + 1 == size
        } else {
            component == 0
        }
    }

    /// Every coordinate of a cube of `size`, in linear-index order.
    pub fn all(size: usize) -> impl Iterator<Item = Coord> {
        (0..size).flat_map(move |left| {
            (0..size).flat_map(move |top| (0..size).map(move |depth| Coord::new(left, top, depth)))
        })
    }
}

impl From<[usize; 3]> for Coord {
    fn from([left, top, depth]: [usize; 3]) -> Self {
        Self { left, top, depth }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}; {}; {}", self.left, self.top, self.depth)
    }
}

/// Center of the piece at `coord` in model space.
///
/// The whole cube spans `[-1, 1]` on every axis, so each piece is `2 / size`
/// wide. Callers are expected to pass `size > 0`.
pub fn position_in_space(coord: Coord, size: usize) -> [f32; 3] {
    let shift = (size as f32 - 1.0) / 2.0;
    let scale = 2.0 / size as f32;
    [
        (coord.left as f32 - shift) * scale,
        (shift - coord.top as f32) * scale,
        (shift - coord.depth as f32) * scale,
    ]
}

/// Rotates `point` by `angle` radians (right-handed) about the spatial axis
/// corresponding to `axis`.
pub fn rotate_point(point: [f32; 3], axis: Axis, angle: f32) -> [f32; 3] {
    let (sin, cos) = angle.sin_cos();
    let [x, y, z] = point;
    match axis {
        Axis::LeftRight => [x, y * cos - z * sin, y * sin + z * cos],
        Axis::TopBottom => [x * cos + z * sin, y, -x * sin + z * cos],
        Axis::FrontBack => [x * cos - y * sin, x * sin + y * cos, z],
    }
}
