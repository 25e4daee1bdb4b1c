use core::fmt::{Debug, Display};
use core::iter::Sum;
use core::ops::{Add, AddAssign, Neg, Sub, SubAssign};
use core::str::FromStr;

use num_traits::{Bounded, CheckedAdd, CheckedSub, Zero};

/// A trait representing an edge capacity, which is a signed integer.
///
/// Residual entries go negative when flow is cancelled along a reverse edge, so only signed types
/// qualify. Capacities themselves are checked to be non-negative when a
/// [`CapacityMatrix`](crate::CapacityMatrix) is built.
pub trait Capacity:
    Copy
    + Sum<Self>
    + Add<Output = Self>
    + Sub<Output = Self>
    + Neg<Output = Self>
    + Ord
    + AddAssign
    + SubAssign
    + Zero
    + Bounded
    + CheckedAdd
    + CheckedSub
    + FromStr
    + Debug
    + Display
    + Default
{
}

impl Capacity for i32 {}

impl Capacity for i64 {}

impl Capacity for i128 {}

impl Capacity for isize {}
