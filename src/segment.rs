use std::fmt;
use std::ops::{AddAssign, DivAssign, MulAssign, SubAssign};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use num_traits::AsPrimitive;

use crate::{vec2, Vec2};

/// A 2D line segment with [`f32`] endpoints.
pub type Segment2f = Segment2<f32>;
/// A 2D line segment with [`f64`] endpoints.
pub type Segment2d = Segment2<f64>;
/// A 2D line segment with [`i32`] endpoints.
pub type Segment2i = Segment2<i32>;

/// An oriented 2D line segment from endpoint `a` to endpoint `b`.
///
/// Degenerate segments (`a == b`) are legal; derived values that need a direction follow the
/// zero-vector policy of [`Vector::normalize`][crate::Vector::normalize] and return a zero
/// vector instead of NaN.
///
/// # Examples
///
/// ```
/// # use smallmath::*;
/// let s = Segment2::from_coords(0, 0, 4, 0);
/// assert_eq!(s.length(), 4.0);
/// assert_eq!(s.center(), vec2(2.0, 0.0));
/// assert_eq!(s.delta(), vec2(4.0, 0.0));
/// ```
#[derive(Clone, Copy, Hash, PartialEq, Eq)]
#[repr(C)]
pub struct Segment2<T> {
    /// The start endpoint.
    pub a: Vec2<T>,
    /// The end endpoint.
    pub b: Vec2<T>,
}

unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for Segment2<T> {}
unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Segment2<T> {}

impl<T> Segment2<T> {
    /// Creates a segment from its two endpoints.
    #[inline]
    pub const fn new(a: Vec2<T>, b: Vec2<T>) -> Self {
        Self { a, b }
    }

    /// Creates a segment from the coordinates of its endpoints.
    #[inline]
    pub const fn from_coords(ax: T, ay: T, bx: T, by: T) -> Self {
        Self {
            a: vec2(ax, ay),
            b: vec2(bx, by),
        }
    }

    /// Converts both endpoints to element type `U` with a truncating `as` cast.
    pub fn cast<U>(self) -> Segment2<U>
    where
        T: AsPrimitive<U>,
        U: Copy + 'static,
    {
        Segment2 {
            a: self.a.cast(),
            b: self.b.cast(),
        }
    }
}

impl<T: AsPrimitive<f64>> Segment2<T> {
    /// Returns the squared distance between the two endpoints.
    pub fn length2(&self) -> f64 {
        self.a.distance2(self.b)
    }

    /// Returns the distance between the two endpoints.
    pub fn length(&self) -> f64 {
        self.a.distance(self.b)
    }

    /// Returns the X coordinate of the segment's midpoint.
    pub fn center_x(&self) -> f64 {
        (self.a.x.as_() + self.b.x.as_()) / 2.0
    }

    /// Returns the Y coordinate of the segment's midpoint.
    pub fn center_y(&self) -> f64 {
        (self.a.y.as_() + self.b.y.as_()) / 2.0
    }

    /// Returns the midpoint of the segment.
    pub fn center(&self) -> Vec2<f64> {
        self.a.midpoint(self.b)
    }

    /// Returns the difference `b - a`, computed in [`f64`].
    pub fn delta(&self) -> Vec2<f64> {
        self.b.cast::<f64>() - self.a.cast::<f64>()
    }

    /// Returns the X component of [`delta`][Self::delta].
    pub fn delta_x(&self) -> f64 {
        self.b.x.as_() - self.a.x.as_()
    }

    /// Returns the Y component of [`delta`][Self::delta].
    pub fn delta_y(&self) -> f64 {
        self.b.y.as_() - self.a.y.as_()
    }

    /// Returns the unit vector pointing from `b` towards `a`.
    ///
    /// For a degenerate segment the delta has no direction and the zero vector is returned.
    pub fn direction(&self) -> Vec2<f64> {
        -self.delta().normalize()
    }

    /// Returns the distance from `point` to the *infinite line* through `a` and `b`.
    ///
    /// Uses the implicit line form: for the line `a·x + b·y + c = 0` through the endpoints, the
    /// distance is `|a·px + b·py + c| / sqrt(a² + b²)`.
    ///
    /// Note that the projection of `point` onto the line is *not* clamped to the segment: a point
    /// far beyond an endpoint reports its distance to the line's extension, not to the endpoint.
    ///
    /// Returns NaN for a degenerate segment, which defines no line.
    ///
    /// # Examples
    ///
    /// ```
    /// # use smallmath::*;
    /// let s = Segment2::from_coords(0, 0, 10, 0);
    /// assert_eq!(s.distance_to_point(vec2(0, 5)), 5.0);
    /// ```
    pub fn distance_to_point(&self, point: Vec2<T>) -> f64 {
        let (ax, ay) = (self.a.x.as_(), self.a.y.as_());
        let (bx, by) = (self.b.x.as_(), self.b.y.as_());

        let a = ay - by;
        let b = bx - ax;
        let c = ax * by - bx * ay;
        (a * point.x.as_() + b * point.y.as_() + c).abs() / (a * a + b * b).sqrt()
    }
}

/// Adds a scalar to every coordinate of both endpoints.
impl<T: AddAssign + Copy> AddAssign<T> for Segment2<T> {
    fn add_assign(&mut self, rhs: T) {
        self.a += rhs;
        self.b += rhs;
    }
}

/// Subtracts a scalar from every coordinate of both endpoints.
impl<T: SubAssign + Copy> SubAssign<T> for Segment2<T> {
    fn sub_assign(&mut self, rhs: T) {
        self.a -= rhs;
        self.b -= rhs;
    }
}

/// Multiplies every coordinate of both endpoints by a scalar.
impl<T: MulAssign + Copy> MulAssign<T> for Segment2<T> {
    fn mul_assign(&mut self, rhs: T) {
        self.a *= rhs;
        self.b *= rhs;
    }
}

/// Divides every coordinate of both endpoints by a scalar.
impl<T: DivAssign + Copy> DivAssign<T> for Segment2<T> {
    fn div_assign(&mut self, rhs: T) {
        self.a /= rhs;
        self.b /= rhs;
    }
}

/// Endpoint-wise addition of another segment.
impl<T: AddAssign> AddAssign for Segment2<T> {
    fn add_assign(&mut self, rhs: Self) {
        self.a += rhs.a;
        self.b += rhs.b;
    }
}

/// Endpoint-wise subtraction of another segment.
impl<T: SubAssign> SubAssign for Segment2<T> {
    fn sub_assign(&mut self, rhs: Self) {
        self.a -= rhs.a;
        self.b -= rhs.b;
    }
}

/// Endpoint-wise multiplication by another segment.
impl<T: MulAssign + Copy> MulAssign for Segment2<T> {
    fn mul_assign(&mut self, rhs: Self) {
        self.a *= rhs.a;
        self.b *= rhs.b;
    }
}

/// Endpoint-wise division by another segment.
impl<T: DivAssign + Copy> DivAssign for Segment2<T> {
    fn div_assign(&mut self, rhs: Self) {
        self.a /= rhs.a;
        self.b /= rhs.b;
    }
}

impl<T: fmt::Debug> fmt::Debug for Segment2<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} {:?}", self.a, self.b)
    }
}

impl<T: fmt::Display> fmt::Display for Segment2<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.a, self.b)
    }
}

impl<T> AbsDiffEq for Segment2<T>
where
    T: AbsDiffEq,
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.a.abs_diff_eq(&other.a, epsilon) && self.b.abs_diff_eq(&other.b, epsilon)
    }
}

impl<T> RelativeEq for Segment2<T>
where
    T: RelativeEq,
    T::Epsilon: Copy,
{
    fn default_max_relative() -> Self::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: Self::Epsilon, max_relative: Self::Epsilon) -> bool {
        self.a.relative_eq(&other.a, epsilon, max_relative)
            && self.b.relative_eq(&other.b, epsilon, max_relative)
    }
}

impl<T> UlpsEq for Segment2<T>
where
    T: UlpsEq,
    T::Epsilon: Copy,
{
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.a.ulps_eq(&other.a, epsilon, max_ulps) && self.b.ulps_eq(&other.b, epsilon, max_ulps)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use crate::vec2;

    use super::*;

    #[test]
    fn lengths_and_centers() {
        let s = Segment2::from_coords(0, 0, 4, 0);
        assert_eq!(s.length(), 4.0);
        assert_eq!(s.length2(), 16.0);
        assert_eq!(s.center(), vec2(2.0, 0.0));
        assert_eq!(s.center_x(), 2.0);
        assert_eq!(s.center_y(), 0.0);

        let s = Segment2::from_coords(1.0, 2.0, 3.0, 6.0);
        assert_eq!(s.center(), vec2(2.0, 4.0));
        assert_abs_diff_eq!(s.length2(), 20.0);
    }

    #[test]
    fn delta_and_direction() {
        let s = Segment2::from_coords(0, 0, 4, 0);
        assert_eq!(s.delta(), vec2(4.0, 0.0));
        assert_eq!(s.delta_x(), 4.0);
        assert_eq!(s.delta_y(), 0.0);
        // the direction points from `b` back towards `a`
        assert_eq!(s.direction(), vec2(-1.0, 0.0));

        let s = Segment2::from_coords(3, 4, 3, -1);
        assert_eq!(s.delta(), vec2(0.0, -5.0));
        assert_eq!(s.direction(), vec2(0.0, 1.0));
    }

    #[test]
    fn degenerate_segment_has_no_direction() {
        let s = Segment2::from_coords(2, 2, 2, 2);
        assert_eq!(s.length(), 0.0);
        assert_eq!(s.direction(), vec2(0.0, 0.0));
    }

    #[test]
    fn distance_to_point_measures_the_infinite_line() {
        let s = Segment2::from_coords(0, 0, 10, 0);
        assert_eq!(s.distance_to_point(vec2(0, 5)), 5.0);
        assert_eq!(s.distance_to_point(vec2(7, -3)), 3.0);
        // the projection is not clamped to the segment
        assert_eq!(s.distance_to_point(vec2(100, 5)), 5.0);

        let diagonal = Segment2::from_coords(0.0, 0.0, 1.0, 1.0);
        assert_abs_diff_eq!(
            diagonal.distance_to_point(vec2(1.0, 0.0)),
            std::f64::consts::FRAC_1_SQRT_2,
            epsilon = 1e-12
        );
    }

    #[test]
    fn assign_ops() {
        let mut s = Segment2::from_coords(0, 0, 4, 0);
        s += 1;
        assert_eq!(s, Segment2::from_coords(1, 1, 5, 1));
        s *= 2;
        assert_eq!(s, Segment2::from_coords(2, 2, 10, 2));
        s -= Segment2::from_coords(1, 1, 1, 1);
        assert_eq!(s, Segment2::from_coords(1, 1, 9, 1));
        s /= Segment2::from_coords(1, 1, 3, 1);
        assert_eq!(s, Segment2::from_coords(1, 1, 3, 1));
    }

    #[test]
    fn cast() {
        let s = Segment2::from_coords(0.9, 1.9, 2.9, 3.9).cast::<i32>();
        assert_eq!(s, Segment2::from_coords(0, 1, 2, 3));
    }

    #[test]
    fn fmt() {
        let s = Segment2::from_coords(0, 0, 4, 1);
        assert_eq!(format!("{s}"), "(0, 0) (4, 1)");
    }
}
