//! The intermediate integer every code transcodes from.

use crate::{
    consts::{FRACTION_DIGITS, MAX_POINT},
    coord::DecomposedAxis,
    errors::GpcError,
    table::LAT_LONG_TABLE,
    utils::{div_mod, pow_10},
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single non-negative integer carrying both axes of a coordinate:
/// the table index of the sign-folded whole degrees in the upper decimal
/// places, the interleaved fractional digits in the lower ten.
///
/// Valid points live in `[10^10, MAX_POINT]`; the `+ 1` applied to the
/// table index keeps the leading segment non-zero.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub(crate) struct Point {
    units: u64,
}

impl Point {
    /// Combine two decomposed axes, latitude first.
    pub(crate) fn pack(latitude: DecomposedAxis, longitude: DecomposedAxis) -> Self {
        let index = LAT_LONG_TABLE.index_of_pair(latitude.folded(), longitude.folded());
        let mut units = (u64::from(index) + 1) * pow_10(2 * FRACTION_DIGITS);

        // interleave the fractional digits, a latitude digit leading each pair
        for (i, (lat_digit, long_digit)) in latitude
            .fraction
            .into_iter()
            .zip(longitude.fraction)
            .enumerate()
        {
            units += u64::from(lat_digit) * pow_10(9 - 2 * i);
            units += u64::from(long_digit) * pow_10(8 - 2 * i);
        }

        Self { units }
    }

    /// Split the point back into its two decomposed axes.
    pub(crate) fn unpack(self) -> (DecomposedAxis, DecomposedAxis) {
        let (leading, tail) = div_mod(self.units, pow_10(2 * FRACTION_DIGITS));
        let index = u32::try_from(leading).expect("a valid point has a small leading segment") - 1;
        let (folded_lat, folded_long) = LAT_LONG_TABLE.pair_at_index(index);

        let mut lat_fraction = [0_u8; FRACTION_DIGITS];
        let mut long_fraction = [0_u8; FRACTION_DIGITS];
        for i in 0..FRACTION_DIGITS {
            lat_fraction[i] = ((tail / pow_10(9 - 2 * i)) % 10) as u8;
            long_fraction[i] = ((tail / pow_10(8 - 2 * i)) % 10) as u8;
        }

        (
            DecomposedAxis::from_folded(folded_lat, lat_fraction),
            DecomposedAxis::from_folded(folded_long, long_fraction),
        )
    }

    /// Accept a decoded (offset-free) value as a point.
    ///
    /// # Errors
    /// [`GpcError::GpcRange`] when the value lies outside `[10^10, MAX_POINT]`:
    /// no coordinate ever packs to such a point, so a code carrying one
    /// is not decodable.
    pub(crate) fn with_units(units: u64) -> Result<Self, GpcError> {
        if (pow_10(2 * FRACTION_DIGITS)..=MAX_POINT).contains(&units) {
            Ok(Self { units })
        } else {
            Err(GpcError::GpcRange)
        }
    }

    pub(crate) fn units(self) -> u64 {
        self.units
    }
}
