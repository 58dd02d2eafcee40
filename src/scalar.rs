//! Scalar type bounds for matrix elements.

/// Shared trait bounds for all element types storable in a matrix.
///
/// Covers the built-in integer and floating-point types; any custom type
/// satisfying the arithmetic bounds works too. The blanket impl means there
/// is nothing to implement by hand.
pub trait Scalar:
    Copy
    + Send
    + Sync
    + std::ops::Add<Output = Self>
    + std::ops::Sub<Output = Self>
    + std::ops::Mul<Output = Self>
    + num_traits::Zero
    + num_traits::One
    + PartialEq
{
}

impl<T> Scalar for T where
    T: Copy
        + Send
        + Sync
        + std::ops::Add<Output = T>
        + std::ops::Sub<Output = T>
        + std::ops::Mul<Output = T>
        + num_traits::Zero
        + num_traits::One
        + PartialEq
{
}
