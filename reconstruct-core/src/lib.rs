#![warn(missing_docs)]
//! This crate implements the reconstruction step of a threshold secret
//! sharing: given at least `k` evaluation points of a hidden polynomial of
//! degree `k - 1`, it recovers the constant term `P(0)` via Lagrange
//! interpolation at `x = 0`. All arithmetic is exact; share values arrive as
//! digit strings in an arbitrary base and are decoded into big integers
//! before any interpolation happens.

pub mod decode;
pub mod interpolate;
pub mod shares;

pub use decode::{DecodeError, decode_value};
pub use interpolate::{InterpolateError, SharePoint, interpolate_at_zero};
pub use shares::{Keys, ShareFile, ShareRecord, SharesError};
