use std::{array, fmt, ops::Neg};

use crate::{
    traits::{Number, One, Trig, Zero},
    Vector,
};

mod ops;

/// A 2x2 matrix.
pub type Mat2<T> = Matrix<T, 2, 2>;
/// A 2x2 matrix with [`f32`] elements.
pub type Mat2f = Mat2<f32>;
/// A 2x2 matrix with [`f64`] elements.
pub type Mat2d = Mat2<f64>;
/// A 3x3 matrix.
pub type Mat3<T> = Matrix<T, 3, 3>;
/// A 3x3 matrix with [`f32`] elements.
pub type Mat3f = Mat3<f32>;
/// A 3x3 matrix with [`f64`] elements.
pub type Mat3d = Mat3<f64>;
/// A 4x4 matrix.
pub type Mat4<T> = Matrix<T, 4, 4>;
/// A 4x4 matrix with [`f32`] elements.
pub type Mat4f = Mat4<f32>;
/// A 4x4 matrix with [`f64`] elements.
pub type Mat4d = Mat4<f64>;

/// A row-major matrix with `R` rows and `C` columns, and element type `T`.
///
/// # Construction
///
/// - [`Matrix::from_rows`] fills a matrix from an array of row vectors (or raw element arrays).
/// - [`Matrix::from_fn`] creates each element by invoking a closure with its row and column.
/// - For square matrices, [`Matrix::from_diagonal`] builds a matrix with the given diagonal and
///   zeroes elsewhere, and [`Matrix::scale`] is the uniform-diagonal special case.
/// - [`Matrix::rotation_clockwise`] and [`Matrix::rotation_counterclockwise`] create 2D rotation
///   matrices from an angle in radians, and [`Matrix::flip_vertical`] creates the 2x2 matrix
///   that mirrors the Y axis.
/// - [`Matrix::ZERO`] and [`Matrix::IDENTITY`] are constants for the two most common matrices.
///
/// # Element Access
///
/// [`Matrix`] implements the [`Index`] and [`IndexMut`] traits for tuples of `(usize, usize)`.
/// The first element of the tuple is the *row* (Y coordinate), the second is the *column* (X
/// coordinate), matching common mathematical notation. Indices are 0-based.
///
/// ```
/// # use smallmath::*;
/// let mut mat = Matrix::from_rows([
///     [0, 1]
/// ]);
/// mat[(0, 0)] = 4;
/// assert_eq!(mat[(0, 0)], 4);
/// assert_eq!(mat[(0, 1)], 1);
/// ```
///
/// Indexing out of bounds will result in a panic, just like it does for slices. [`Matrix::get`]
/// and [`Matrix::get_mut`] return [`Option`]s instead and can be used for checked indexing.
///
/// # Multiplication
///
/// The only product defined on [`Matrix`] is the matrix-vector product, which requires the
/// vector's length to equal the matrix's column count — a mismatched shape fails to compile.
/// Element types may differ; the result's element type is chosen by
/// [`Promote`][crate::Promote].
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Matrix<T, const R: usize, const C: usize>([[T; C]; R]);

#[rustfmt::skip]
unsafe impl<T: bytemuck::Zeroable, const R: usize, const C: usize> bytemuck::Zeroable for Matrix<T, R, C> {}
unsafe impl<T: bytemuck::Pod, const R: usize, const C: usize> bytemuck::Pod for Matrix<T, R, C> {}

impl<T, const R: usize, const C: usize> Matrix<T, R, C> {
    /// The smallest dimension of the matrix (`R` or `C`).
    const MIN_DIMENSION: usize = if R > C { C } else { R };

    /// Creates a [`Matrix`] from an array of row vectors.
    ///
    /// # Examples
    ///
    /// ```
    /// # use smallmath::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1],
    ///     [2, 3],
    /// ]);
    /// assert_eq!(mat[(1, 0)], 2);
    /// ```
    pub fn from_rows<U: Into<Vector<T, C>>>(rows: [U; R]) -> Self {
        Self(rows.map(|row| row.into().into_array()))
    }

    /// Creates a [`Matrix`] by invoking a closure with the position (row and column) of each
    /// element.
    ///
    /// # Examples
    ///
    /// ```
    /// # use smallmath::*;
    /// let mat = Matrix::from_fn(|row, col| row * 10 + col);
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [ 0,  1,  2],
    ///     [10, 11, 12],
    /// ]));
    /// ```
    pub fn from_fn<F>(mut cb: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        Self(array::from_fn(|row| array::from_fn(|col| cb(row, col))))
    }

    /// Applies a closure to each element, returning a new matrix.
    pub fn map<F, U>(self, mut f: F) -> Matrix<U, R, C>
    where
        F: FnMut(T) -> U,
    {
        Matrix(self.0.map(|row| row.map(|v| f(v))))
    }

    /// Returns a reference to the element at `(row, col)`, or [`None`] if out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use smallmath::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    /// ]);
    /// assert_eq!(mat.get(1, 0), Some(&3));
    /// assert_eq!(mat.get(2, 0), None);
    /// ```
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.0.get(row).and_then(|row| row.get(col))
    }

    /// Returns a mutable reference to the element at `(row, col)`, or [`None`] if out of bounds.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        self.0.get_mut(row).and_then(|row| row.get_mut(col))
    }

    /// Returns row `row` of the matrix as a [`Vector`].
    ///
    /// # Panics
    ///
    /// Panics if `row >= R`.
    pub fn row(&self, row: usize) -> Vector<T, C>
    where
        T: Copy,
    {
        Vector::from(self.0[row])
    }
}

impl<T: Zero, const R: usize, const C: usize> Matrix<T, R, C> {
    const ZERO_ROW: [T; C] = [T::ZERO; C];

    /// A matrix with every element set to 0.
    pub const ZERO: Self = Self([Self::ZERO_ROW; R]);
}

impl<T: Zero + One + Copy, const R: usize, const C: usize> Matrix<T, R, C> {
    /// The identity matrix.
    ///
    /// The matrix has the value 1 on its diagonal and 0 everywhere else.
    ///
    /// Multiplying any vector with this matrix returns the vector unchanged.
    pub const IDENTITY: Self = {
        let mut mat = Self::ZERO;
        let mut i = 0;
        while i < Self::MIN_DIMENSION {
            mat.0[i][i] = T::ONE;
            i += 1;
        }
        mat
    };
}

impl<T, const N: usize> Matrix<T, N, N> {
    /// Creates a square matrix from its diagonal.
    ///
    /// Elements outside the diagonal will be initialized with zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use smallmath::*;
    /// let diag = Matrix::from_diagonal([1, 2, 3]);
    /// assert_eq!(diag, Matrix::from_rows([
    ///     [1, 0, 0],
    ///     [0, 2, 0],
    ///     [0, 0, 3],
    /// ]));
    /// ```
    pub fn from_diagonal<D: Into<Vector<T, N>>>(diag: D) -> Self
    where
        T: Zero,
    {
        let mut this = Self::ZERO;
        for (i, elem) in diag.into().into_array().into_iter().enumerate() {
            this.0[i][i] = elem;
        }
        this
    }

    /// Creates a uniform scaling matrix: `factor` on the diagonal, 0 everywhere else.
    ///
    /// `Matrix::scale(T::ONE)` is the identity matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use smallmath::*;
    /// assert_eq!(Matrix::<_, 2, 2>::scale(3) * vec2(1, 2), vec2(3, 6));
    /// ```
    pub fn scale(factor: T) -> Self
    where
        T: Zero + Copy,
    {
        Self::from_diagonal(Vector::splat(factor))
    }
}

impl<T: Zero + One + Neg<Output = T>> Matrix<T, 2, 2> {
    /// Creates the 2x2 matrix that mirrors the Y axis (a vertical flip).
    ///
    /// # Examples
    ///
    /// ```
    /// # use smallmath::*;
    /// assert_eq!(Mat2::<i32>::flip_vertical() * vec2(3, 4), vec2(3, -4));
    /// ```
    pub fn flip_vertical() -> Self {
        Self::from_rows([[T::ONE, T::ZERO], [T::ZERO, -T::ONE]])
    }
}

impl<T: Number + Trig + Neg<Output = T>> Matrix<T, 2, 2> {
    /// Creates a 2x2 rotation matrix for a clockwise rotation in the XY plane.
    ///
    /// This assumes that the Y axis points up, and the X axis points to the right.
    pub fn rotation_clockwise(radians: T) -> Self {
        Self::rotation_counterclockwise(-radians)
    }

    /// Creates a 2x2 rotation matrix for a counterclockwise rotation in the XY plane.
    ///
    /// This assumes that the Y axis points up, and the X axis points to the right.
    pub fn rotation_counterclockwise(radians: T) -> Self {
        Self::from_rows([
            [radians.cos(), -radians.sin()],
            [radians.sin(), radians.cos()],
        ])
    }
}

impl<T, const R: usize, const C: usize> Default for Matrix<T, R, C>
where
    T: Default,
{
    fn default() -> Self {
        Self::from_fn(|_, _| T::default())
    }
}

impl<T: fmt::Debug, const R: usize, const C: usize> fmt::Debug for Matrix<T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct FormatRow<'a, T>(&'a [T]);
        impl<'a, T: fmt::Debug> fmt::Debug for FormatRow<'a, T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "[")?;
                for (col, elem) in self.0.iter().enumerate() {
                    if col != 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{:?}", elem)?;
                }
                write!(f, "]")?;
                Ok(())
            }
        }

        let mut list = f.debug_list();
        for row in &self.0 {
            list.entry(&FormatRow(row));
        }
        list.finish()
    }
}

/// Renders the matrix with one bracketed row per line.
impl<T: fmt::Display, const R: usize, const C: usize> fmt::Display for Matrix<T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.0.iter().enumerate() {
            if r != 0 {
                writeln!(f)?;
            }
            write!(f, "[")?;
            for (col, elem) in row.iter().enumerate() {
                if col != 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{elem}")?;
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::PI;

    use approx::assert_abs_diff_eq;

    use crate::{vec2, vec3, Vec2f};

    use super::*;

    #[test]
    fn from_rows() {
        let mat = Matrix::from_rows([[1, 2, 3], [4, 5, 6]]);
        assert_eq!(mat[(0, 0)], 1);
        assert_eq!(mat[(0, 2)], 3);
        assert_eq!(mat[(1, 0)], 4);
        assert_eq!(mat.row(1), vec3(4, 5, 6));
    }

    #[test]
    fn diagonal() {
        let mat = Matrix::from_diagonal([1, 2]);

        #[rustfmt::skip]
        assert_eq!(mat, Matrix::from_rows([
            [1, 0],
            [0, 2],
        ]));
    }

    #[test]
    fn constants() {
        assert_eq!(format!("{:?}", Mat2f::ZERO), "[[0.0, 0.0], [0.0, 0.0]]");
        assert_eq!(format!("{:?}", Mat2f::IDENTITY), "[[1.0, 0.0], [0.0, 1.0]]");
        assert_eq!(Mat3::<i32>::IDENTITY, Matrix::from_diagonal([1, 1, 1]));
    }

    #[test]
    fn fmt() {
        let mat = Matrix::from_rows([[0, 1], [2, 3]]);

        // Natural writing order (row-wise) for debug output.
        assert_eq!(format!("{:?}", mat), "[[0, 1], [2, 3]]");

        // `Display` puts each bracketed row on its own line.
        assert_eq!(format!("{}", mat), "[0, 1]\n[2, 3]");
    }

    #[test]
    fn scale_and_flip() {
        assert_eq!(Matrix::<_, 3, 3>::scale(2) * vec3(1, 2, 3), vec3(2, 4, 6));
        assert_eq!(Mat2::<i32>::scale(1), Mat2::<i32>::IDENTITY);
        assert_eq!(Mat2::<i32>::flip_vertical() * vec2(3, 4), vec2(3, -4));
    }

    #[test]
    fn rotation() {
        let ccw = Mat2f::rotation_counterclockwise(PI / 2.0);
        assert_abs_diff_eq!(ccw * Vec2f::X, Vec2f::Y, epsilon = 1e-6);

        let cw = Mat2f::rotation_clockwise(PI / 2.0);
        assert_abs_diff_eq!(cw * Vec2f::Y, Vec2f::X, epsilon = 1e-6);

        // a full turn is (approximately) the identity
        let full = Mat2f::rotation_clockwise(2.0 * PI);
        assert_abs_diff_eq!(full * vec2(3.0f32, -4.0), vec2(3.0f32, -4.0), epsilon = 1e-5);
    }

    #[test]
    fn checked_access() {
        let mut mat = Matrix::from_rows([[0, 1, 2], [3, 4, 5]]);
        assert_eq!(mat.get(0, 0), Some(&0));
        assert_eq!(mat.get(1, 2), Some(&5));
        assert_eq!(mat.get(2, 0), None);
        assert_eq!(mat.get(0, 3), None);

        if let Some(elem) = mat.get_mut(1, 0) {
            *elem = 999;
        }
        assert_eq!(mat[(1, 0)], 999);
    }
}
