//! Element-type promotion.
//!
//! When two containers with different element types (or a container and a scalar) are combined,
//! one of the two types has to be chosen as the element type of the result. That choice is made
//! here, by the [`Promote`] trait, and is resolved entirely through trait resolution: the result
//! type of every mixed-type expression is known at compile time and no value is ever inspected at
//! runtime.
//!
//! The promotion rule, applied in order with the first match winning:
//!
//! 1. If both types are identical, the result is that type.
//! 2. If exactly one of the two types is floating-point, the floating-point type wins, regardless
//!    of width (so `i64` combined with `f32` produces `f32`).
//! 3. Otherwise (both integer, or both floating-point), the wider type wins.
//! 4. If the widths are equal too (e.g. `u32` and `i32`), the left-hand type is kept. This is a
//!    deterministic tie-break, not a claim that the left type is numerically better.
//!
//! The rule is spelled out as an explicit table over the ten supported element types rather than
//! computed from type properties, so every pairing can be audited at a glance.
//!
//! Element values are converted to the promoted type with truncating `as`-semantics casts
//! ([`num_traits::AsPrimitive`]); a narrowing conversion drops information exactly like `as` does.

/// Selects the element type produced when `Self` is combined with `Rhs`.
///
/// See the [module documentation][self] for the decision procedure. Implementations exist for
/// every pair of the supported element types: `i8`, `i16`, `i32`, `i64`, `u8`, `u16`, `u32`,
/// `u64`, `f32` and `f64`.
pub trait Promote<Rhs = Self> {
    /// The element type of the combined result.
    type Output: Copy + 'static;
}

/// Shorthand for the element type chosen when `L` and `R` are combined.
pub type Promoted<L, R> = <L as Promote<R>>::Output;

macro_rules! promote {
    ($($lhs:ty, $rhs:ty => $out:ty);+ $(;)?) => {
        $(
            impl Promote<$rhs> for $lhs {
                type Output = $out;
            }
        )+
    };
}

promote! {
    // lhs `i8`
    i8, i8 => i8;      i8, i16 => i16;    i8, i32 => i32;    i8, i64 => i64;
    i8, u8 => i8;      i8, u16 => u16;    i8, u32 => u32;    i8, u64 => u64;
    i8, f32 => f32;    i8, f64 => f64;
    // lhs `i16`
    i16, i8 => i16;    i16, i16 => i16;   i16, i32 => i32;   i16, i64 => i64;
    i16, u8 => i16;    i16, u16 => i16;   i16, u32 => u32;   i16, u64 => u64;
    i16, f32 => f32;   i16, f64 => f64;
    // lhs `i32`
    i32, i8 => i32;    i32, i16 => i32;   i32, i32 => i32;   i32, i64 => i64;
    i32, u8 => i32;    i32, u16 => i32;   i32, u32 => i32;   i32, u64 => u64;
    i32, f32 => f32;   i32, f64 => f64;
    // lhs `i64`
    i64, i8 => i64;    i64, i16 => i64;   i64, i32 => i64;   i64, i64 => i64;
    i64, u8 => i64;    i64, u16 => i64;   i64, u32 => i64;   i64, u64 => i64;
    i64, f32 => f32;   i64, f64 => f64;
    // lhs `u8`
    u8, i8 => u8;      u8, i16 => i16;    u8, i32 => i32;    u8, i64 => i64;
    u8, u8 => u8;      u8, u16 => u16;    u8, u32 => u32;    u8, u64 => u64;
    u8, f32 => f32;    u8, f64 => f64;
    // lhs `u16`
    u16, i8 => u16;    u16, i16 => u16;   u16, i32 => i32;   u16, i64 => i64;
    u16, u8 => u16;    u16, u16 => u16;   u16, u32 => u32;   u16, u64 => u64;
    u16, f32 => f32;   u16, f64 => f64;
    // lhs `u32`
    u32, i8 => u32;    u32, i16 => u32;   u32, i32 => u32;   u32, i64 => i64;
    u32, u8 => u32;    u32, u16 => u32;   u32, u32 => u32;   u32, u64 => u64;
    u32, f32 => f32;   u32, f64 => f64;
    // lhs `u64`
    u64, i8 => u64;    u64, i16 => u64;   u64, i32 => u64;   u64, i64 => u64;
    u64, u8 => u64;    u64, u16 => u64;   u64, u32 => u64;   u64, u64 => u64;
    u64, f32 => f32;   u64, f64 => f64;
    // lhs `f32`
    f32, i8 => f32;    f32, i16 => f32;   f32, i32 => f32;   f32, i64 => f32;
    f32, u8 => f32;    f32, u16 => f32;   f32, u32 => f32;   f32, u64 => f32;
    f32, f32 => f32;   f32, f64 => f64;
    // lhs `f64`
    f64, i8 => f64;    f64, i16 => f64;   f64, i32 => f64;   f64, i64 => f64;
    f64, u8 => f64;    f64, u16 => f64;   f64, u32 => f64;   f64, u64 => f64;
    f64, f32 => f64;   f64, f64 => f64;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn promotes_to<L, R, P>()
    where
        L: Promote<R, Output = P>,
    {
    }

    #[test]
    fn identical_types_keep_their_type() {
        promotes_to::<i32, i32, i32>();
        promotes_to::<u8, u8, u8>();
        promotes_to::<f64, f64, f64>();
    }

    #[test]
    fn float_beats_integer_regardless_of_width() {
        promotes_to::<i32, f64, f64>();
        promotes_to::<f64, i32, f64>();
        promotes_to::<i64, f32, f32>();
        promotes_to::<f32, i64, f32>();
        promotes_to::<u64, f32, f32>();
    }

    #[test]
    fn wider_type_wins_within_a_kind() {
        promotes_to::<i32, i64, i64>();
        promotes_to::<i64, i32, i64>();
        promotes_to::<u8, u32, u32>();
        promotes_to::<f32, f64, f64>();
        promotes_to::<i16, u64, u64>();
    }

    #[test]
    fn equal_width_ties_keep_the_left_type() {
        promotes_to::<u32, i32, u32>();
        promotes_to::<i32, u32, i32>();
        promotes_to::<u64, i64, u64>();
        promotes_to::<i8, u8, i8>();
    }
}
