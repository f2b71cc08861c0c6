use std::ops;

/// Types that support the trigonometric functions needed for rotations.
pub trait Trig {
    /// Computes the sine of the angle `self` (in radians).
    fn sin(self) -> Self;
    /// Computes the cosine of the angle `self` (in radians).
    fn cos(self) -> Self;
}

/// Types that support a `min` and `max` operation.
///
/// [`f32`] and [`f64`] implement this trait in terms of the [`f32::min`] and [`f32::max`]
/// functions ([`f64::min`] and [`f64::max`] respectively). Built-in integer types implement it
/// in terms of [`Ord::min`] and [`Ord::max`].
pub trait MinMax: Sized {
    fn min(self, other: Self) -> Self;
    fn max(self, other: Self) -> Self;
}

macro_rules! ord_min_max {
    ($($types:ty),+) => {
        $(
            impl MinMax for $types {
                fn min(self, other: Self) -> Self {
                    Ord::min(self, other)
                }

                fn max(self, other: Self) -> Self {
                    Ord::max(self, other)
                }
            }
        )+
    };
}
ord_min_max!(u8, u16, u32, u64, i8, i16, i32, i64);

impl MinMax for f32 {
    fn min(self, other: Self) -> Self {
        self.min(other)
    }

    fn max(self, other: Self) -> Self {
        self.max(other)
    }
}
impl MinMax for f64 {
    fn min(self, other: Self) -> Self {
        self.min(other)
    }

    fn max(self, other: Self) -> Self {
        self.max(other)
    }
}

/// Types that have a "zero" value (an additive identity).
///
/// Unlike the equivalent trait in `num-traits`, the value is an associated *constant*, so it can
/// be used to build constants like [`Vector::ZERO`][crate::Vector::ZERO] and
/// [`Matrix::IDENTITY`][crate::Matrix::IDENTITY].
pub trait Zero {
    /// The *0* value of this type.
    const ZERO: Self;
}

/// Types that have a "one" value (a multiplicative identity).
pub trait One {
    /// The *1* value of this type.
    const ONE: Self;
}

macro_rules! zero_one {
    ($zero:literal, $one:literal; $($types:ty),+) => {
        $(
            impl Zero for $types {
                const ZERO: Self = $zero;
            }

            impl One for $types {
                const ONE: Self = $one;
            }
        )+
    };
}
zero_one!(0, 1; u8, u16, u32, u64, i8, i16, i32, i64);
zero_one!(0.0, 1.0; f32, f64);

/// A trait for numeric types that support basic arithmetic operations.
///
/// Note that `Number` does not require [`ops::Neg`]: unsigned element types take part in dot
/// products, reductions, and the matrix-vector product just fine. Operations that actually negate
/// values demand `Neg` separately.
pub trait Number:
    Zero
    + One
    + ops::Add<Output = Self>
    + ops::Sub<Output = Self>
    + ops::Mul<Output = Self>
    + ops::Div<Output = Self>
    + PartialEq
    + Copy
    + 'static
{
}
impl<T> Number for T where
    T: Zero
        + One
        + ops::Add<Output = Self>
        + ops::Sub<Output = Self>
        + ops::Mul<Output = Self>
        + ops::Div<Output = Self>
        + PartialEq
        + Copy
        + 'static
{
}

impl Trig for f32 {
    fn sin(self) -> Self {
        self.sin()
    }

    fn cos(self) -> Self {
        self.cos()
    }
}

impl Trig for f64 {
    fn sin(self) -> Self {
        self.sin()
    }

    fn cos(self) -> Self {
        self.cos()
    }
}
