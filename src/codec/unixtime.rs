// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Unix timestamp codec.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use super::{input_text, Codec};
use crate::core::{CodecError, Result};

/// Date/time output and primary input format.
///
/// Pinned to UTC so encode output is reproducible across environments.
const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

/// Unixtime codec: decimal seconds since epoch <-> UTC date text.
///
/// Encode reads the input as a decimal number of seconds (fractional values
/// allowed) and formats it as `2023-11-14 22:13:20 UTC`. Decode parses a
/// date/time string and emits the floor of its epoch seconds; sub-second
/// precision is lost, so the two directions are not exact inverses.
pub struct UnixTimeCodec;

impl UnixTimeCodec {
    /// Parse a date/time string.
    ///
    /// Accepts, in order:
    /// - ISO 8601 / RFC 3339: "2023-11-14T22:13:20Z"
    /// - The encode format: "2023-11-14 22:13:20 UTC"
    /// - Date and time without zone (treated as UTC): "2023-11-14 22:13:20"
    /// - Date only (midnight UTC): "2023-11-14"
    fn parse_date(&self, text: &str) -> Option<i64> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
            return Some(dt.timestamp());
        }
        if let Ok(dt) = NaiveDateTime::parse_from_str(text, DATE_FORMAT) {
            return Some(dt.and_utc().timestamp());
        }
        if let Ok(dt) = NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S") {
            return Some(dt.and_utc().timestamp());
        }
        if let Ok(d) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
            return d.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc().timestamp());
        }
        None
    }
}

impl Codec for UnixTimeCodec {
    fn name(&self) -> &'static str {
        "unixtime"
    }

    fn encode(&self, input: &[u8]) -> Result<String> {
        let text = input_text(self.name(), input)?;
        let secs: f64 = text
            .trim()
            .parse()
            .map_err(|_| CodecError::malformed(self.name(), "not a number"))?;
        if !secs.is_finite() {
            return Err(CodecError::malformed(self.name(), "not a number"));
        }
        let date = DateTime::<Utc>::from_timestamp_millis((secs * 1000.0) as i64)
            .ok_or_else(|| CodecError::malformed(self.name(), "invalid date"))?;
        Ok(date.format(DATE_FORMAT).to_string())
    }

    fn decode(&self, input: &[u8]) -> Result<Vec<u8>> {
        let text = input_text(self.name(), input)?;
        let secs = self
            .parse_date(text.trim())
            .ok_or_else(|| CodecError::malformed(self.name(), "invalid date"))?;
        Ok(secs.to_string().into_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode() {
        assert_eq!(
            UnixTimeCodec.encode(b"1700000000").unwrap(),
            "2023-11-14 22:13:20 UTC"
        );
        assert_eq!(UnixTimeCodec.encode(b"0").unwrap(), "1970-01-01 00:00:00 UTC");
    }

    #[test]
    fn test_encode_fractional_seconds() {
        assert_eq!(
            UnixTimeCodec.encode(b"1700000000.75").unwrap(),
            "2023-11-14 22:13:20 UTC"
        );
    }

    #[test]
    fn test_encode_rejects_non_numeric() {
        let err = UnixTimeCodec.encode(b"not a number").unwrap_err();
        assert!(matches!(err, CodecError::Malformed { .. }));
        assert!(UnixTimeCodec.encode(b"nan").is_err());
    }

    #[test]
    fn test_encode_rejects_out_of_range() {
        assert!(UnixTimeCodec.encode(b"1e30").is_err());
    }

    #[test]
    fn test_decode_rfc3339() {
        assert_eq!(
            UnixTimeCodec.decode(b"2023-11-14T22:13:20Z").unwrap(),
            b"1700000000"
        );
        assert_eq!(
            UnixTimeCodec.decode(b"2023-11-14T23:13:20+01:00").unwrap(),
            b"1700000000"
        );
    }

    #[test]
    fn test_decode_encode_format() {
        assert_eq!(
            UnixTimeCodec.decode(b"2023-11-14 22:13:20 UTC").unwrap(),
            b"1700000000"
        );
    }

    #[test]
    fn test_decode_date_only() {
        assert_eq!(UnixTimeCodec.decode(b"1970-01-02").unwrap(), b"86400");
    }

    #[test]
    fn test_decode_rejects_unparseable() {
        assert!(UnixTimeCodec.decode(b"last tuesday").is_err());
        assert!(UnixTimeCodec.decode(b"2023-13-99").is_err());
    }

    #[test]
    fn test_lossy_round_trip_floors_to_whole_seconds() {
        let encoded = UnixTimeCodec.encode(b"1700000000.9").unwrap();
        assert_eq!(
            UnixTimeCodec.decode(encoded.as_bytes()).unwrap(),
            b"1700000000"
        );
    }
}
