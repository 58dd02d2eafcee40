//! Common-numeric-type promotion for mixed-element arithmetic.

use crate::scalar::Scalar;

/// Resolves the common numeric type of two element types.
///
/// `Output` is a type that can represent every value of both `Self` and `R`;
/// both conversions go through [`From`], so no impl can lose precision.
/// Pairs without a lossless common type among the built-ins (for example
/// `i64` and `f64`) have no impl and fail to compile when mixed, making the
/// mismatch a construction-time constraint rather than a runtime error.
pub trait Promote<R: Scalar>: Scalar {
    /// The common numeric type.
    type Output: Scalar;

    /// Widen a left-hand-side element to the common type.
    fn promote_lhs(lhs: Self) -> <Self as Promote<R>>::Output;

    /// Widen a right-hand-side element to the common type.
    fn promote_rhs(rhs: R) -> <Self as Promote<R>>::Output;
}

/// Every element type is its own common type.
impl<T: Scalar> Promote<T> for T {
    type Output = T;

    #[inline]
    fn promote_lhs(lhs: T) -> T {
        lhs
    }

    #[inline]
    fn promote_rhs(rhs: T) -> T {
        rhs
    }
}

/// Generates both directions of a cross-type promotion.
macro_rules! impl_promote {
    ($($l:ty, $r:ty => $out:ty;)*) => {$(
        impl Promote<$r> for $l {
            type Output = $out;

            #[inline]
            fn promote_lhs(lhs: $l) -> $out {
                <$out>::from(lhs)
            }

            #[inline]
            fn promote_rhs(rhs: $r) -> $out {
                <$out>::from(rhs)
            }
        }

        impl Promote<$l> for $r {
            type Output = $out;

            #[inline]
            fn promote_lhs(lhs: $r) -> $out {
                <$out>::from(lhs)
            }

            #[inline]
            fn promote_rhs(rhs: $l) -> $out {
                <$out>::from(rhs)
            }
        }
    )*};
}

impl_promote! {
    i8, i16 => i16;
    i8, i32 => i32;
    i8, i64 => i64;
    i16, i32 => i32;
    i16, i64 => i64;
    i32, i64 => i64;
    u8, u16 => u16;
    u8, u32 => u32;
    u8, u64 => u64;
    u16, u32 => u32;
    u16, u64 => u64;
    u32, u64 => u64;
    u8, i16 => i16;
    u8, i32 => i32;
    u8, i64 => i64;
    u16, i32 => i32;
    u16, i64 => i64;
    u32, i64 => i64;
    i8, f32 => f32;
    i16, f32 => f32;
    u8, f32 => f32;
    u16, f32 => f32;
    i8, f64 => f64;
    i16, f64 => f64;
    i32, f64 => f64;
    u8, f64 => f64;
    u16, f64 => f64;
    u32, f64 => f64;
    f32, f64 => f64;
}
