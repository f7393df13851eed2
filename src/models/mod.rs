//! Data models shared between the stats store and the web layer

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::{StatsError, StatsResult};
use crate::utils::validation::parse_positive_integer;

/// Requested image dimensions
///
/// Serializes as `{"w": .., "h": ..}`, the shape returned by
/// `/stats/sizes/recent`. Only constructed through [`SizePair::new`] and
/// [`SizePair::parse`], so it never holds a zero component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SizePair {
    #[serde(rename = "w")]
    width: u32,
    #[serde(rename = "h")]
    height: u32,
}

impl SizePair {
    /// Create a size, rejecting zero components
    pub fn new(width: u32, height: u32) -> StatsResult<Self> {
        if width == 0 || height == 0 {
            return Err(StatsError::InvalidSize { width, height });
        }
        Ok(Self { width, height })
    }

    /// Parse raw width and height strings
    ///
    /// Returns `None` when either value is not a positive integer.
    pub fn parse(width: &str, height: &str) -> Option<Self> {
        let width = parse_positive_integer(width)?;
        let height = parse_positive_integer(height)?;
        Some(Self { width, height })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

impl fmt::Display for SizePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// A validated image request, as fed into the stats store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRequest {
    /// Raw request path, e.g. `/img/200/100`
    pub path: String,
    pub size: SizePair,
    /// `square` exactly as supplied in the query string
    pub square: Option<String>,
    pub text: Option<String>,
    /// Value of the `Referer` header
    pub referrer: Option<String>,
}

/// Entry of `/stats/sizes/top`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopularSize {
    pub w: u32,
    pub h: u32,
    pub n: u64,
}

/// Entry of `/stats/referrers/top`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferrerCount {
    #[serde(rename = "ref")]
    pub referrer: String,
    pub n: u64,
}

/// One bucket of `/stats/hits`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HitCount {
    pub title: String,
    pub count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_pair_rejects_zero() {
        assert_eq!(
            SizePair::new(0, 10),
            Err(StatsError::InvalidSize {
                width: 0,
                height: 10
            })
        );
        assert!(SizePair::new(10, 0).is_err());
        assert!(SizePair::new(1, 1).is_ok());
    }

    #[test]
    fn test_size_pair_parse() {
        assert_eq!(SizePair::parse("200", "100"), SizePair::new(200, 100).ok());
        assert_eq!(SizePair::parse("10.0", "20"), SizePair::new(10, 20).ok());
        assert_eq!(SizePair::parse("0", "50"), None);
        assert_eq!(SizePair::parse("50", "abc"), None);
    }

    #[test]
    fn test_serialization_shapes() {
        let size = SizePair::new(100, 50).unwrap();
        assert_eq!(
            serde_json::to_value(size).unwrap(),
            serde_json::json!({"w": 100, "h": 50})
        );

        let referrer = ReferrerCount {
            referrer: "a.com".to_string(),
            n: 3,
        };
        assert_eq!(
            serde_json::to_value(referrer).unwrap(),
            serde_json::json!({"ref": "a.com", "n": 3})
        );
    }
}
