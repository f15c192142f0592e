//! Grid Point Code: a reversible mapping of geographic coordinates
//! (five fractional degree digits per axis) onto fixed-length,
//! human-typeable base-27 codes.
//!
//! ```
//! use gpc_algo::{decode, encode};
//!
//! # fn main() -> Result<(), gpc_algo::GpcError> {
//! let code = encode(53.481, -2.248, true)?;
//! assert_eq!(code, "#DML6-H8D7-0L5");
//! assert_eq!(decode(&code)?, (53.481, -2.248));
//! # Ok(())
//! # }
//! ```

// do not warn on older Rust versions
#![allow(unknown_lints)]
//
// The following list was generated with the command
//   $ rustc -W help | grep ' allow ' | awk '{print $1}' | tr - _ | sort | xargs -I{} echo '#![warn({})]'
//
#![warn(absolute_paths_not_starting_with_crate)]
#![warn(anonymous_parameters)]
#![warn(deprecated_in_future)]
#![warn(elided_lifetimes_in_paths)]
#![warn(explicit_outlives_requirements)]
#![warn(keyword_idents)]
#![warn(macro_use_extern_crate)]
#![warn(meta_variable_misuse)]
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(non_ascii_idents)]
#![warn(single_use_lifetimes)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
// conflicts with the `clippy::redundant_pub_crate`
#![allow(unreachable_pub)]
// !!! NO UNSAFE
#![forbid(unsafe_code)]
#![warn(unstable_features)]
#![warn(unused_extern_crates)]
#![warn(unused_import_braces)]
#![warn(unused_labels)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]
#![warn(variant_size_differences)]
//
// additional recommendations
#![deny(clippy::mem_forget)]
// suppress some pedantic warnings
#![allow(clippy::must_use_candidate)]
// `use super::*` in tests
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub use code::GridPointCode;
pub use coord::Coordinates;
pub use errors::GpcError;

mod code;
mod consts;
mod coord;
mod errors;
mod point;
mod table;
mod utils;

/// Encode a coordinate pair into its Grid Point Code.
///
/// Fractional degrees beyond the fifth digit are truncated, not rounded.
/// With `formatted` the code is rendered as `#XXXX-XXXX-XXX`,
/// otherwise as the bare 11 characters.
///
/// # Errors
/// [`GpcError::Latitude`] / [`GpcError::Longitude`] when the respective
/// axis falls outside its open range (±90 and ±180 are already invalid).
pub fn encode(latitude: f64, longitude: f64, formatted: bool) -> Result<String, GpcError> {
    let coordinates = Coordinates::new(latitude, longitude)?;
    let code = GridPointCode::from_coordinates(coordinates);

    Ok(if formatted {
        format!("{:#}", code)
    } else {
        code.to_string()
    })
}

/// Decode a Grid Point Code back into `(latitude, longitude)`.
///
/// Formatted and unformatted presentations are accepted equally,
/// in any case, with embedded whitespace.
///
/// # Errors
/// One of [`GpcError::GpcNull`], [`GpcError::GpcLength`],
/// [`GpcError::GpcChar`] or [`GpcError::GpcRange`], checked in that order.
pub fn decode(grid_point_code: &str) -> Result<(f64, f64), GpcError> {
    let code: GridPointCode = grid_point_code.parse()?;
    let coordinates = code.coordinates();
    Ok((coordinates.latitude(), coordinates.longitude()))
}

/// Check a coordinate pair without constructing anything.
///
/// Returns `(true, "")` for encodable coordinates, otherwise
/// `(false, reason)` with the bare failure tag (`"LATITUDE"` or
/// `"LONGITUDE"`).
pub fn is_valid_coordinates(latitude: f64, longitude: f64) -> (bool, &'static str) {
    match Coordinates::new(latitude, longitude) {
        Ok(_) => (true, ""),
        Err(err) => (false, err.reason()),
    }
}

/// Check a code string without decoding it.
///
/// Returns `(true, "")` for decodable codes, otherwise `(false, reason)`
/// with the bare failure tag (`"GPC_NULL"`, `"GPC_LENGTH"`, `"GPC_CHAR"`
/// or `"GPC_RANGE"`).
pub fn is_valid_gpc(grid_point_code: &str) -> (bool, &'static str) {
    match grid_point_code.parse::<GridPointCode>() {
        Ok(_) => (true, ""),
        Err(err) => (false, err.reason()),
    }
}
