pub(crate) const MIN_LATITUDE: f64 = -90.0;
pub(crate) const MAX_LATITUDE: f64 = 90.0;
pub(crate) const MIN_LONGITUDE: f64 = -180.0;
pub(crate) const MAX_LONGITUDE: f64 = 180.0;

/// The greatest point an in-range coordinate pair can pack into.
pub(crate) const MAX_POINT: u64 = 648_009_999_999_999;

/// Fixed offset added to every point before transcoding,
/// keeping all codes exactly [`GPC_LENGTH`] characters long.
pub(crate) const ELEVEN: u64 = 205_881_132_094_649;

/// The 27 symbols of a code, in transcoding order.
/// A, B, E, I, O, Q, S, U and Z are left out as visually ambiguous.
pub(crate) const ALPHABET: &str = "CDFGHJKLMNPRTVWXY0123456789";
pub(crate) const BASE: u64 = 27;
pub(crate) const GPC_LENGTH: usize = 11;

/// Fractional degree digits kept per axis.
pub(crate) const FRACTION_DIGITS: usize = 5;
/// Units of one whole degree: 10^[`FRACTION_DIGITS`].
pub(crate) const AXIS_UNITS: u32 = 100_000;

// Folded (sign-carrying) integer-degree ranges: twice the 90/180 magnitudes.
pub(crate) const FOLDED_LAT_RANGE: u16 = 180;
pub(crate) const FOLDED_LONG_RANGE: u16 = 360;
