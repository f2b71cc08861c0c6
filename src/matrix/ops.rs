use std::ops::{Index, IndexMut, Mul};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use num_traits::AsPrimitive;

use crate::{
    promote::{Promote, Promoted},
    traits::Number,
    Matrix, Vector,
};

impl<T, const R: usize, const C: usize> Index<(usize, usize)> for Matrix<T, R, C> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.0[row][col]
    }
}

impl<T, const R: usize, const C: usize> IndexMut<(usize, usize)> for Matrix<T, R, C> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.0[row][col]
    }
}

// More general `PartialEq` impl than what the derive generates.
impl<T, U, const R: usize, const C: usize> PartialEq<Matrix<U, R, C>> for Matrix<T, R, C>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Matrix<U, R, C>) -> bool {
        self.0.eq(&other.0)
    }
}

impl<T, const R: usize, const C: usize> Eq for Matrix<T, R, C> where T: Eq {}

impl<T, const R: usize, const C: usize> AbsDiffEq for Matrix<T, R, C>
where
    T: AbsDiffEq,
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.0
            .iter()
            .zip(&other.0)
            .all(|(a, b)| a.iter().zip(b).all(|(a, b)| T::abs_diff_eq(a, b, epsilon)))
    }
}

impl<T, const R: usize, const C: usize> RelativeEq for Matrix<T, R, C>
where
    T: RelativeEq,
    T::Epsilon: Copy,
{
    fn default_max_relative() -> Self::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: Self::Epsilon, max_relative: Self::Epsilon) -> bool {
        self.0.iter().zip(&other.0).all(|(a, b)| {
            a.iter()
                .zip(b)
                .all(|(a, b)| T::relative_eq(a, b, epsilon, max_relative))
        })
    }
}

impl<T, const R: usize, const C: usize> UlpsEq for Matrix<T, R, C>
where
    T: UlpsEq,
    T::Epsilon: Copy,
{
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.0.iter().zip(&other.0).all(|(a, b)| {
            a.iter()
                .zip(b)
                .all(|(a, b)| T::ulps_eq(a, b, epsilon, max_ulps))
        })
    }
}

/// Matrix * Column Vector.
///
/// Element `i` of the result is the dot product of matrix row `i` with `rhs`, computed in the
/// promoted element type. The vector's length must equal the matrix's column count; there is no
/// impl for any other shape, so a mismatch is rejected by the compiler.
impl<T, U, const R: usize, const C: usize> Mul<Vector<U, C>> for Matrix<T, R, C>
where
    T: Promote<U> + AsPrimitive<Promoted<T, U>>,
    U: AsPrimitive<Promoted<T, U>>,
    Promoted<T, U>: Number,
{
    type Output = Vector<Promoted<T, U>, R>;

    fn mul(self, rhs: Vector<U, C>) -> Self::Output {
        let rhs = rhs.cast::<Promoted<T, U>>();
        Vector::from_fn(|row| self.row(row).cast::<Promoted<T, U>>().dot(rhs))
    }
}

#[cfg(test)]
mod tests {
    use crate::{vec2, vec4, Mat2, Matrix, Vec4d, Vector};

    #[test]
    fn mat_vec_mul() {
        let mat = Matrix::from_rows([[0, 1], [2, 3]]);
        let vec = vec2(4, 5);
        let out = mat * vec;
        assert_eq!(out, [4 * 0 + 5 * 1, 4 * 2 + 5 * 3]);
    }

    #[test]
    fn mat_vec_mul_non_square() {
        let mat = Matrix::from_rows([[1, 0, 0, 0], [0, 0, 0, 2]]);
        assert_eq!(mat * vec4(1, 2, 3, 4), vec2(1, 8));
    }

    #[test]
    fn identity_leaves_vectors_unchanged() {
        assert_eq!(Mat2::<i32>::IDENTITY * vec2(4, 5), vec2(4, 5));
        assert_eq!(Matrix::<f64, 4, 4>::IDENTITY * Vec4d::W, Vec4d::W);
    }

    #[test]
    fn mat_vec_mul_promotes_element_type() {
        // an i32 identity matrix applied to an f64 vector yields f64
        let out: Vector<f64, 2> = Mat2::<i32>::IDENTITY * vec2(3.5, -4.25);
        assert_eq!(out, vec2(3.5, -4.25));

        // i32 matrix x i64 vector promotes to the wider integer type
        let out: Vector<i64, 2> = Matrix::from_rows([[2i32, 0], [0, 2]]) * vec2(10i64, 20);
        assert_eq!(out, vec2(20i64, 40));
    }

    #[test]
    fn equality() {
        let a = Matrix::from_rows([[1, 2], [3, 4]]);
        let b = Matrix::from_rows([[1u8, 2], [3, 4]]);
        assert_eq!(a, a);
        assert_ne!(a, Matrix::from_rows([[0, 2], [3, 4]]));
        // equality is allowed across element types
        assert!(a == b.map(i32::from));
    }
}
