use std::{array, fmt};

use num_traits::AsPrimitive;

use crate::{
    promote::Promote,
    traits::{MinMax, Number, Trig, Zero},
    Mat2, One,
};

mod ops;
mod view;

/// A 2-dimensional vector.
pub type Vec2<T> = Vector<T, 2>;
/// A 2-dimensional vector with [`f32`] elements.
pub type Vec2f = Vec2<f32>;
/// A 2-dimensional vector with [`f64`] elements.
pub type Vec2d = Vec2<f64>;
/// A 2-dimensional vector with [`i32`] elements.
pub type Vec2i = Vec2<i32>;
/// A 3-dimensional vector.
pub type Vec3<T> = Vector<T, 3>;
/// A 3-dimensional vector with [`f32`] elements.
pub type Vec3f = Vec3<f32>;
/// A 3-dimensional vector with [`f64`] elements.
pub type Vec3d = Vec3<f64>;
/// A 3-dimensional vector with [`i32`] elements.
pub type Vec3i = Vec3<i32>;
/// A 4-dimensional vector.
pub type Vec4<T> = Vector<T, 4>;
/// A 4-dimensional vector with [`f32`] elements.
pub type Vec4f = Vec4<f32>;
/// A 4-dimensional vector with [`f64`] elements.
pub type Vec4d = Vec4<f64>;
/// A 4-dimensional vector with [`i32`] elements.
pub type Vec4i = Vec4<i32>;

/// An `N`-element vector storing elements of type `T`.
///
/// # Construction
///
/// There is a variety of ways to create a [`Vector`]:
///
/// - The freestanding [`vec2`], [`vec3`] and [`vec4`] functions directly create vectors from
///   provided values.
/// - [`Vector::splat`] creates a vector by copying the given value into each element.
/// - [`Vector::from_fn`] creates a vector by invoking a closure with the index of each element.
/// - Vectors can be created from arrays using their [`From`] implementation.
/// - The [`Default`] implementation of [`Vector`] initializes each element with its default value.
/// - [`Vector::ZERO`] is a vector containing all-zeroes.
/// - For vectors with up to 4 dimensions, `Vector::X`, `Vector::Y`, `Vector::Z` and `Vector::W`
///   can be used to obtain unit vectors pointing in the given direction.
///
/// # Element Access
///
/// - For vectors with 2 to 4 dimensions, elements can be accessed as fields `x`, `y`, `z`, or
///   `w`.
/// - The [`Index`] and [`IndexMut`] impls can be used just like on arrays; an out-of-range index
///   causes a panic that names the valid range. [`Vector::get`] and [`Vector::get_mut`] are the
///   checked, non-panicking equivalents.
/// - The [`AsRef`] and [`AsMut`] impls, as well as [`Vector::as_array`], [`Vector::as_slice`] and
///   [`Vector::into_array`], expose the underlying elements.
/// - [`bytemuck::Zeroable`] and [`bytemuck::Pod`] are implemented to allow safe transmutation
///   when the element type `T` also allows this.
///
/// # Mixed element types and lengths
///
/// The binary operators `+`, `-`, `*` and `/` accept operands whose element types differ; the
/// result's element type is selected by [`Promote`][crate::Promote]. Operands of different
/// *lengths* (2 to 4) may also be combined: see the [crate documentation][crate] for the
/// broadcasting rule.
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Vector<T, const N: usize>([T; N]);

unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Vector<T, N> {}
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Vector<T, N> {}

impl<T: Zero, const N: usize> Vector<T, N> {
    /// A vector with each element initialized to 0.
    ///
    /// This uses [`T::ZERO`][Zero::ZERO] as the value for all elements.
    pub const ZERO: Self = Self([T::ZERO; N]);
}

impl<T: Zero + One> Vector<T, 2> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 3> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 4> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE, T::ZERO]);
    /// A unit vector pointing in the W direction.
    pub const W: Self = Self([T::ZERO, T::ZERO, T::ZERO, T::ONE]);
}

impl<T, const N: usize> Vector<T, N> {
    /// Creates a vector with each element initialized to `elem`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use smallmath::*;
    /// let v = Vector::splat(2);
    /// assert_eq!(v, vec3(2, 2, 2));
    /// ```
    #[inline]
    pub fn splat(elem: T) -> Self
    where
        T: Copy,
    {
        Self(array::from_fn(|_| elem))
    }

    /// Creates a vector where each element is initialized by invoking a closure with its index.
    ///
    /// Analogous to [`array::from_fn`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use smallmath::*;
    /// let v = Vector::from_fn(|i| i + 100);
    /// assert_eq!(v, vec3(100, 101, 102));
    /// ```
    pub fn from_fn<F>(cb: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self(array::from_fn(cb))
    }

    /// Applies a closure to each element, returning a new vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use smallmath::*;
    /// let v = vec3(1, 2, 3).map(|i| i * 10);
    /// assert_eq!(v, vec3(10, 20, 30));
    /// ```
    pub fn map<F, U>(self, f: F) -> Vector<U, N>
    where
        F: FnMut(T) -> U,
    {
        Vector(self.0.map(f))
    }

    /// Merges two [`Vector`]s into one that contains tuples of the original elements.
    pub fn zip<U>(self, other: Vector<U, N>) -> Vector<(T, U), N> {
        let mut iter = self.0.into_iter().zip(other.0);
        Vector::from_fn(|_| iter.next().unwrap())
    }

    /// Converts every element to `U` with a truncating `as` cast.
    ///
    /// This is the only way elements change their type; there are no implicit conversions
    /// anywhere in this library. Narrowing behaves exactly like the `as` operator (a float cast
    /// to an integer type drops its fractional part).
    ///
    /// # Examples
    ///
    /// ```
    /// # use smallmath::*;
    /// assert_eq!(vec2(1.9_f64, -1.9).cast::<i32>(), vec2(1, -1));
    /// ```
    #[inline]
    pub fn cast<U>(self) -> Vector<U, N>
    where
        T: AsPrimitive<U>,
        U: Copy + 'static,
    {
        self.map(AsPrimitive::as_)
    }

    /// Returns a reference to the underlying elements as an array of length `N`.
    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.0
    }

    /// Returns a mutable reference to the underlying elements as an array of length `N`.
    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [T; N] {
        &mut self.0
    }

    /// Returns a reference to the underlying elements as a slice.
    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Returns a mutable reference to the underlying elements as a slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.0
    }

    /// Converts this [`Vector`] into an `N`-element array.
    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.0
    }

    /// Returns a reference to the element at `index`, or [`None`] if `index` is out of range.
    ///
    /// # Examples
    ///
    /// ```
    /// # use smallmath::*;
    /// let v = vec2(1, 2);
    /// assert_eq!(v.get(1), Some(&2));
    /// assert_eq!(v.get(2), None);
    /// ```
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.0.get(index)
    }

    /// Returns a mutable reference to the element at `index`, or [`None`] if out of range.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.0.get_mut(index)
    }

    /// Returns the sum of all elements.
    pub fn sum(self) -> T
    where
        T: Number,
    {
        self.0.into_iter().fold(T::ZERO, |acc, e| acc + e)
    }

    /// Returns the product of all elements.
    pub fn product(self) -> T
    where
        T: Number,
    {
        self.0.into_iter().fold(T::ONE, |acc, e| acc * e)
    }

    /// Returns the average of all elements, computed in `T`.
    ///
    /// For integer element types the division truncates, like integer division does everywhere
    /// else.
    ///
    /// # Examples
    ///
    /// ```
    /// # use smallmath::*;
    /// assert_eq!(vec2(4.0, 5.0).average(), 4.5);
    /// assert_eq!(vec2(4, 5).average(), 4);
    /// ```
    pub fn average(self) -> T
    where
        T: Number,
        usize: AsPrimitive<T>,
    {
        self.sum() / N.as_()
    }

    /// Returns the smallest element.
    ///
    /// # Panics
    ///
    /// Panics if `N` is 0.
    pub fn min_element(self) -> T
    where
        T: MinMax + Copy,
    {
        match self.as_slice().split_first() {
            Some((&first, rest)) => rest.iter().fold(first, |acc, &e| acc.min(e)),
            None => panic!("cannot reduce a 0-element vector"),
        }
    }

    /// Returns the largest element.
    ///
    /// # Panics
    ///
    /// Panics if `N` is 0.
    pub fn max_element(self) -> T
    where
        T: MinMax + Copy,
    {
        match self.as_slice().split_first() {
            Some((&first, rest)) => rest.iter().fold(first, |acc, &e| acc.max(e)),
            None => panic!("cannot reduce a 0-element vector"),
        }
    }

    /// Returns the squared length of this [`Vector`].
    ///
    /// Magnitudes are always computed in [`f64`], for every element type.
    ///
    /// # Examples
    ///
    /// ```
    /// # use smallmath::*;
    /// assert_eq!(vec2(4, 0).length2(), 16.0);
    /// ```
    pub fn length2(&self) -> f64
    where
        T: AsPrimitive<f64>,
    {
        self.0.iter().fold(0.0, |acc, e| {
            let e = e.as_();
            acc + e * e
        })
    }

    /// Returns the length of this [`Vector`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use smallmath::*;
    /// assert_eq!(vec2(3, 4).length(), 5.0);
    /// ```
    pub fn length(&self) -> f64
    where
        T: AsPrimitive<f64>,
    {
        self.length2().sqrt()
    }

    /// Returns the squared Euclidean distance between `self` and `other`, interpreted as points.
    pub fn distance2(self, other: Self) -> f64
    where
        T: AsPrimitive<f64>,
    {
        self.0
            .into_iter()
            .zip(other.0)
            .fold(0.0, |acc, (a, b)| {
                let d = a.as_() - b.as_();
                acc + d * d
            })
    }

    /// Returns the Euclidean distance between `self` and `other`, interpreted as points.
    ///
    /// # Examples
    ///
    /// ```
    /// # use smallmath::*;
    /// assert_eq!(vec2(1, 0).distance(vec2(4, 4)), 5.0);
    /// ```
    pub fn distance(self, other: Self) -> f64
    where
        T: AsPrimitive<f64>,
    {
        self.distance2(other).sqrt()
    }

    /// Returns the point halfway between `self` and `other`.
    pub fn midpoint(self, other: Self) -> Vector<f64, N>
    where
        T: AsPrimitive<f64>,
    {
        (self.cast::<f64>() + other.cast::<f64>()) * 0.5
    }

    /// Divides this vector by its length, yielding a unit vector with [`f64`] elements.
    ///
    /// A vector with zero magnitude has no direction to preserve; instead of dividing by zero
    /// (and producing NaN), the vector is returned converted to [`f64`] but otherwise unchanged.
    /// Callers that need a true unit vector must treat a zero result as "no defined direction".
    ///
    /// # Examples
    ///
    /// ```
    /// # use smallmath::*;
    /// assert_eq!(vec3(0, 0, 4).normalize(), vec3(0.0, 0.0, 1.0));
    /// assert_eq!(vec3(0, 0, 0).normalize(), vec3(0.0, 0.0, 0.0));
    /// ```
    pub fn normalize(self) -> Vector<f64, N>
    where
        T: AsPrimitive<f64>,
    {
        let length = self.length();
        let out = self.cast::<f64>();
        if length == 0.0 {
            out
        } else {
            out / length
        }
    }

    /// Computes the dot product between `self` and `other`.
    ///
    /// Geometrically, the dot product provides information about the relative angle of the two
    /// vectors:
    /// - If the dot product is greater than zero, the angle between the vectors is less than 90°.
    /// - If the dot product is equal to zero, their angle is exactly 90°.
    /// - If the dot product is negative, the angle is greater than 90°.
    ///
    /// # Examples
    ///
    /// ```
    /// # use smallmath::*;
    /// let a = vec3(1, 3, -5);
    /// let b = vec3(4, -2, -1);
    /// assert_eq!(a.dot(b), 3);
    /// ```
    pub fn dot(self, other: Self) -> T
    where
        T: Number,
    {
        self.0
            .into_iter()
            .zip(other.0)
            .fold(T::ZERO, |acc, (a, b)| acc + a * b)
    }
}

impl<T> Vector<T, 2> {
    /// Appends another value to the vector, yielding a vector with 3 dimensions.
    pub fn extend(self, value: T) -> Vector<T, 3> {
        let [x, y] = self.into_array();
        [x, y, value].into()
    }

    /// Rotates `self` clockwise in the 2D plane.
    ///
    /// This operation assumes that the Y axis points up, and the X axis points to the right.
    ///
    /// # Examples
    ///
    /// ```
    /// # use smallmath::*;
    /// # use approx::assert_abs_diff_eq;
    /// use std::f32::consts::TAU;
    ///
    /// assert_abs_diff_eq!(Vec2f::Y.rotate_clockwise(TAU / 4.0), Vec2f::X, epsilon = 1e-6);
    /// assert_abs_diff_eq!(Vec2f::Y.rotate_clockwise(TAU / 2.0), -Vec2f::Y, epsilon = 1e-6);
    /// ```
    pub fn rotate_clockwise(self, radians: T) -> Self
    where
        T: Number + Trig + std::ops::Neg<Output = T> + Promote<T, Output = T> + AsPrimitive<T>,
    {
        Mat2::rotation_clockwise(radians) * self
    }

    /// Rotates `self` counterclockwise in the 2D plane.
    ///
    /// This operation assumes that the Y axis points up, and the X axis points to the right.
    pub fn rotate_counterclockwise(self, radians: T) -> Self
    where
        T: Number + Trig + std::ops::Neg<Output = T> + Promote<T, Output = T> + AsPrimitive<T>,
    {
        Mat2::rotation_counterclockwise(radians) * self
    }

    /// Rotates `self` clockwise by exactly a quarter turn.
    ///
    /// Unlike [`rotate_clockwise`][Self::rotate_clockwise], this works for any element type that
    /// can be negated, and introduces no floating-point rounding.
    ///
    /// # Examples
    ///
    /// ```
    /// # use smallmath::*;
    /// assert_eq!(vec2(0, 5).rotate_90_clockwise(), vec2(5, 0));
    /// ```
    pub fn rotate_90_clockwise(self) -> Self
    where
        T: std::ops::Neg<Output = T>,
    {
        let [x, y] = self.into_array();
        [y, -x].into()
    }

    /// Rotates `self` counterclockwise by exactly a quarter turn.
    pub fn rotate_90_counterclockwise(self) -> Self
    where
        T: std::ops::Neg<Output = T>,
    {
        let [x, y] = self.into_array();
        [-y, x].into()
    }
}

impl<T> Vector<T, 3> {
    /// Removes the last element of this vector, yielding a vector with 2 elements.
    pub fn truncate(self) -> Vector<T, 2> {
        let [x, y, ..] = self.into_array();
        [x, y].into()
    }

    /// Appends another value to the vector, yielding a vector with 4 dimensions.
    pub fn extend(self, value: T) -> Vector<T, 4> {
        let [x, y, z] = self.into_array();
        [x, y, z, value].into()
    }
}

impl<T> Vector<T, 4> {
    /// Removes the last element of this vector, yielding a vector with 3 elements.
    pub fn truncate(self) -> Vector<T, 3> {
        let [x, y, z, ..] = self.into_array();
        [x, y, z].into()
    }
}

impl<T, const N: usize> Default for Vector<T, N>
where
    T: Default,
{
    #[inline]
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(value: [T; N]) -> Self {
        Self(value)
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(value: Vector<T, N>) -> Self {
        value.0
    }
}

impl<T, const N: usize> fmt::Debug for Vector<T, N>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tup = f.debug_tuple("");
        for elem in &self.0 {
            tup.field(elem);
        }
        tup.finish()
    }
}

impl<T, const N: usize> fmt::Display for Vector<T, N>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct DebugViaDisplay<D>(D);
        impl<D: fmt::Display> fmt::Debug for DebugViaDisplay<D> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        let mut tup = f.debug_tuple("");
        for elem in &self.0 {
            tup.field(&DebugViaDisplay(elem));
        }
        tup.finish()
    }
}

impl<T, const N: usize> AsRef<[T]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

impl<T, const N: usize> AsRef<[T; N]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T; N] {
        &self.0
    }
}

impl<T, const N: usize> AsMut<[T]> for Vector<T, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.0
    }
}

impl<T, const N: usize> AsMut<[T; N]> for Vector<T, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T; N] {
        &mut self.0
    }
}

/// Constructs a [`Vec2`] from its two elements.
#[inline]
pub const fn vec2<T>(x: T, y: T) -> Vec2<T> {
    Vector([x, y])
}

/// Constructs a [`Vec3`] from its three elements.
#[inline]
pub const fn vec3<T>(x: T, y: T, z: T) -> Vec3<T> {
    Vector([x, y, z])
}

/// Constructs a [`Vec4`] from its four elements.
#[inline]
pub const fn vec4<T>(x: T, y: T, z: T, w: T) -> Vec4<T> {
    Vector([x, y, z, w])
}

#[cfg(test)]
mod tests {
    use std::f32::consts::TAU;

    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn access() {
        assert_eq!(Vec3f::X.x, 1.0);
        assert_eq!(Vec3f::X[0], 1.0);
        assert_eq!(Vec3f::X[1], 0.0);
        assert_eq!(Vec3f::X[2], 0.0);
        assert_eq!(Vec3f::X.y, 0.0);
        assert_eq!(Vec3f::Y.y, 1.0);
        assert_eq!(Vec3f::Y.z, 0.0);
        assert_eq!(Vec4f::W.w, 1.0);

        let mut v = vec2(0, 1);
        v.x = 777;
        assert_eq!(v.x, 777);
        assert_eq!(v[0], 777);
        assert_eq!(v[1], 1);
    }

    #[test]
    fn fmt() {
        assert_eq!(format!("{}", Vec4f::W), "(0, 0, 0, 1)");
        assert_eq!(format!("{:?}", Vec4f::W), "(0.0, 0.0, 0.0, 1.0)");
    }

    #[test]
    fn reductions() {
        let v = vec4(1, 2, 3, 4);
        assert_eq!(v.sum(), 10);
        assert_eq!(v.product(), 24);
        assert_eq!(v.average(), 2); // 10 / 4, truncating
        assert_eq!(v.min_element(), 1);
        assert_eq!(v.max_element(), 4);

        assert_eq!(vec2(1.0, 2.0).average(), 1.5);
        assert_eq!(vec3(-3, 9, 5).min_element(), -3);
    }

    #[test]
    fn magnitude() {
        assert_eq!(vec2(4, 0).length2(), 16.0);
        assert_eq!(vec2(3, 4).length(), 5.0);
        assert_eq!(vec2(3u8, 4).length(), 5.0);
        assert_eq!(Vec3f::Z.length(), 1.0);
    }

    #[test]
    fn distance() {
        assert_eq!(vec2(0, 0).distance(vec2(4, 0)), 4.0);
        assert_eq!(vec2(1, 1).distance2(vec2(4, 5)), 25.0);
        // unsigned points must not wrap when the second point is larger
        assert_eq!(vec2(0u8, 0).distance(vec2(0u8, 200)), 200.0);
    }

    #[test]
    fn midpoint() {
        assert_eq!(vec2(0, 0).midpoint(vec2(4, 2)), vec2(2.0, 1.0));
        assert_eq!(vec2(1, 0).midpoint(vec2(2, 0)), vec2(1.5, 0.0));
    }

    #[test]
    fn normalize() {
        assert_eq!(vec3(0, 0, 4).normalize(), vec3(0.0, 0.0, 1.0));
        assert_abs_diff_eq!(vec2(10.0, 10.0).normalize().length(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn normalize_zero_vector_has_no_direction() {
        let normalized = vec3(0, 0, 0).normalize();
        assert_eq!(normalized, vec3(0.0, 0.0, 0.0));
        assert!(normalized.as_slice().iter().all(|e| !e.is_nan()));
    }

    #[test]
    fn dot() {
        assert_eq!(vec3(1, 3, -5).dot(vec3(4, -2, -1)), 3);
        assert_eq!(vec3(1, 3, -5).dot(vec3(1, 3, -5)), 35);

        assert_eq!(Vec2f::X.dot(Vec2f::X), 1.0);
        assert_eq!(Vec2f::X.dot(Vec2f::Y), 0.0);
        assert_eq!(vec2(1u32, 2).dot(vec2(3u32, 4)), 11);
    }

    #[test]
    fn rotate() {
        assert_abs_diff_eq!(Vec2f::Y.rotate_clockwise(TAU / 4.0), Vec2f::X, epsilon = 1e-6);
        assert_abs_diff_eq!(Vec2f::Y.rotate_clockwise(TAU / 2.0), -Vec2f::Y, epsilon = 1e-6);
        assert_abs_diff_eq!(Vec2f::X.rotate_clockwise(TAU / 2.0), -Vec2f::X, epsilon = 1e-6);
        assert_abs_diff_eq!(
            Vec2f::X.rotate_counterclockwise(TAU / 4.0),
            Vec2f::Y,
            epsilon = 1e-6
        );
    }

    #[test]
    fn rotate_quarter_turns_are_exact() {
        assert_eq!(vec2(3, 7).rotate_90_clockwise(), vec2(7, -3));
        assert_eq!(vec2(3, 7).rotate_90_counterclockwise(), vec2(-7, 3));
        assert_eq!(
            vec2(3, 7).rotate_90_clockwise().rotate_90_counterclockwise(),
            vec2(3, 7)
        );
    }

    #[test]
    fn cast_truncates() {
        assert_eq!(vec2(1.9_f64, -1.9).cast::<i32>(), vec2(1, -1));
        assert_eq!(vec3(300_i32, -1, 7).cast::<u8>(), vec3(44, 255, 7));
    }

    #[test]
    fn extend_truncate() {
        assert_eq!(vec2(1, 2).extend(3), vec3(1, 2, 3));
        assert_eq!(vec3(1, 2, 3).extend(4), vec4(1, 2, 3, 4));
        assert_eq!(vec4(1, 2, 3, 4).truncate(), vec3(1, 2, 3));
        assert_eq!(vec3(1, 2, 3).truncate(), vec2(1, 2));
    }
}
