use std::ops::{Add, Mul, Sub};

/// Generate a trait impl for an operation involving two [Vec2D]s, like [Add] or [Sub]
macro_rules! impl_bin_op {
    ($trait: ident, $fn: ident, $op: tt) => {
        impl<T: $trait<T, Output = T>> $trait for Vec2D<T> {
            type Output = Vec2D<T>;

            #[must_use]
            fn $fn(self, rhs: Self) -> Self::Output {
                Self {
                    x: self.x $op rhs.x,
                    y: self.y $op rhs.y,
                }
            }
        }
    };
}

/// Generate a trait impl for an operation involving a [Vec2D] and a scalar value of unknown type
macro_rules! impl_scalar_op {
    ($trait: ident, $fn: ident, $op: tt, $rhs: ident) => {
        impl<T: $trait<$rhs, Output = T>> $trait<$rhs> for Vec2D<T> {
            type Output = Vec2D<T>;

            #[must_use]
            fn $fn(self, rhs: $rhs) -> Self::Output {
                Self {
                    x: self.x $op rhs,
                    y: self.y $op rhs,
                }
            }
        }
    };
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Vec2D<T = i32> {
    pub x: T,
    pub y: T,
}

/// A position on the pixel grid
pub type Point = Vec2D<i32>;

impl<T> Vec2D<T> {
    #[inline]
    #[must_use]
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl Vec2D<i32> {
    /// The four edge-sharing neighbours of a pixel: right, left, down, up
    pub const EDGE_NEIGHBOURS: [Self; 4] = [
        Self::new(1, 0),
        Self::new(-1, 0),
        Self::new(0, 1),
        Self::new(0, -1),
    ];

    /// The squared euclidean distance between two pixels
    #[inline]
    #[must_use]
    pub fn distance_squared(&self, other: Self) -> i64 {
        let dx = i64::from(other.x) - i64::from(self.x);
        let dy = i64::from(other.y) - i64::from(self.y);
        dx * dx + dy * dy
    }

    /// Offset the point, or return `None` if the result doesn't fit into an `i32`
    #[inline]
    #[must_use]
    pub fn checked_add(&self, offset: Self) -> Option<Self> {
        Some(Self::new(
            self.x.checked_add(offset.x)?,
            self.y.checked_add(offset.y)?,
        ))
    }

    /// Return `true` if the two pixels share an edge or a corner
    #[inline]
    #[must_use]
    pub fn touches(&self, other: Self) -> bool {
        *self != other && (other.x - self.x).abs() <= 1 && (other.y - self.y).abs() <= 1
    }

    #[inline]
    #[must_use]
    pub fn magnitude(&self) -> f32 {
        (self.x as f32).hypot(self.y as f32)
    }
}

impl_bin_op!(Add, add, +);
impl_bin_op!(Sub, sub, -);

impl_scalar_op!(Mul, mul, *, i32);
