//! Utilities functions which do not linked to domain

use std::ops::{Div, Rem};

/// Division and remainder in one step
pub(crate) fn div_mod<T>(divider: T, divisor: T) -> (T, T)
where
    T: Copy + Div<Output = T> + Rem<Output = T>,
{
    (divider / divisor, divider % divisor)
}

const POW_10: [u64; 11] = [
    1_u64,
    10,
    100,
    1_000,
    10_000,
    100_000,
    1_000_000,
    10_000_000,
    100_000_000,
    1_000_000_000,
    10_000_000_000,
];

/// The powers of 10 up to the point width (10^10)
pub(crate) const fn pow_10(pow: usize) -> u64 {
    POW_10[pow]
}
