//! Typed model of the JSON share-file document.

use std::collections::BTreeMap;
use std::fmt;

use num_bigint::BigInt;
use serde::Deserialize;

use crate::decode::{DecodeError, decode_value};
use crate::interpolate::SharePoint;

/// Threshold metadata of a share file.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Keys {
    /// Total number of shares the dealer claims the file holds.
    pub n: usize,
    /// Number of shares required to reconstruct the secret.
    pub k: usize,
}

/// The `base` field may be written as a JSON string or number.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum BaseRepr {
    /// A plain JSON number.
    Number(u32),
    /// A JSON string holding a decimal number.
    Text(String),
}

impl BaseRepr {
    fn as_u32(&self) -> Option<u32> {
        match self {
            BaseRepr::Number(value) => Some(*value),
            BaseRepr::Text(text) => text.parse().ok(),
        }
    }
}

impl fmt::Display for BaseRepr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BaseRepr::Number(value) => write!(f, "{value}"),
            BaseRepr::Text(text) => write!(f, "{text}"),
        }
    }
}

/// A single encoded share as it appears in the document.
#[derive(Debug, Clone, Deserialize)]
pub struct ShareRecord {
    /// The base the value digits are written in.
    pub base: BaseRepr,
    /// The y-value digits in that base.
    pub value: String,
}

/// A full share-file document: the `keys` metadata entry plus the encoded
/// shares keyed by their decimal x-coordinate.
///
/// Deserializing into this type resolves the heterogeneous JSON object once
/// at the boundary; everything downstream works on typed data.
#[derive(Debug, Deserialize)]
pub struct ShareFile {
    /// The threshold metadata.
    pub keys: Keys,
    /// All remaining entries, x-coordinate string to encoded share.
    #[serde(flatten)]
    pub shares: BTreeMap<String, ShareRecord>,
}

/// The error type for [`ShareFile::select_points`].
#[derive(Debug, thiserror::Error)]
pub enum SharesError {
    /// A share key could not be parsed as a decimal x-coordinate.
    #[error("share key \"{0}\" is not a decimal x-coordinate")]
    InvalidX(String),
    /// A share carries a base that is not a number.
    #[error("share at x = {x} has invalid base \"{base}\"")]
    InvalidBase {
        /// The x-coordinate the share sits under.
        x: String,
        /// The unparsable base field.
        base: String,
    },
    /// A share value failed to decode in its stated base.
    #[error("could not decode share at x = {x}")]
    Decode {
        /// The x-coordinate the share sits under.
        x: String,
        /// The underlying decode failure.
        #[source]
        source: DecodeError,
    },
    /// The file holds fewer shares than the threshold requires.
    #[error("need {k} shares for reconstruction but only {available} are present")]
    NotEnoughShares {
        /// The threshold from the `keys` entry.
        k: usize,
        /// The number of shares actually present.
        available: usize,
    },
}

impl ShareFile {
    /// Decodes all shares and returns the `k` points used for reconstruction.
    ///
    /// The selected points are the `k` shares with the smallest x-coordinates,
    /// matching the ascending enumeration order of the original share files.
    /// Shares beyond the threshold are decoded but dropped.
    pub fn select_points(&self) -> Result<Vec<SharePoint>, SharesError> {
        if self.shares.len() < self.keys.k {
            return Err(SharesError::NotEnoughShares {
                k: self.keys.k,
                available: self.shares.len(),
            });
        }
        if self.shares.len() != self.keys.n {
            tracing::warn!(
                "share file claims {} shares but holds {}",
                self.keys.n,
                self.shares.len()
            );
        }
        let mut points = Vec::with_capacity(self.shares.len());
        for (key, record) in &self.shares {
            let x: BigInt = key
                .parse()
                .map_err(|_| SharesError::InvalidX(key.clone()))?;
            let base = record.base.as_u32().ok_or_else(|| SharesError::InvalidBase {
                x: key.clone(),
                base: record.base.to_string(),
            })?;
            let y = decode_value(&record.value, base).map_err(|source| SharesError::Decode {
                x: key.clone(),
                source,
            })?;
            tracing::debug!("decoded share at x = {x} from base {base}");
            points.push(SharePoint { x, y });
        }
        points.sort_by(|a, b| a.x.cmp(&b.x));
        points.truncate(self.keys.k);
        Ok(points)
    }
}
