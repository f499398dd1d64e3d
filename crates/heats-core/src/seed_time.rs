//! Seed times and their ordering.
//!
//! Entry sources encode "no time" (NT) as a seed time of `0` ms. That sentinel
//! is converted to [`SeedTime::NoTime`] at the boundary, and from then on every
//! comparison goes through the [`Ord`] impl of [`SeedTime`], where `NoTime` is
//! slower than any recorded time.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::types::ValidationError;

/// Accepts `SS`, `SS.f`, `SS.ff`, `SS.fff` and `M:SS` with the same fractions.
static SEED_TIME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:(\d+):([0-5]\d)|(\d+))(?:\.(\d{1,3}))?$").unwrap()
});

/// A pre-race seed time.
///
/// Variant order defines the ordering: `NoTime` sorts after every timed value,
/// so ascending order is fastest first with NT entrants last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum SeedTime {
    /// A recorded time in milliseconds. Always positive.
    Timed(u64),
    /// No time on record.
    #[default]
    NoTime,
}

impl SeedTime {
    /// Converts a raw millisecond value, treating `0` as NT.
    ///
    /// Negative values are not meaningful seed times and are treated as NT too.
    #[must_use]
    pub fn from_millis(ms: i64) -> Self {
        u64::try_from(ms)
            .ok()
            .filter(|&ms| ms > 0)
            .map_or(Self::NoTime, Self::Timed)
    }

    /// Returns the time in milliseconds, with NT encoded as `0`.
    #[must_use]
    pub const fn as_millis(self) -> u64 {
        match self {
            Self::Timed(ms) => ms,
            Self::NoTime => 0,
        }
    }

    /// Returns true if no time is on record.
    #[must_use]
    pub const fn is_no_time(self) -> bool {
        matches!(self, Self::NoTime)
    }
}

impl From<u64> for SeedTime {
    fn from(ms: u64) -> Self {
        if ms == 0 { Self::NoTime } else { Self::Timed(ms) }
    }
}

/// Truncates to hundredths. Times under 10 ms show as `0.01` so a recorded
/// time never renders as `0.00`, which would read back as NT.
impl fmt::Display for SeedTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ms = match self {
            Self::NoTime => return write!(f, "NT"),
            Self::Timed(ms) => (*ms).max(10),
        };
        let total_secs = ms / 1000;
        let minutes = total_secs / 60;
        let secs = total_secs % 60;
        let hundredths = (ms % 1000) / 10;

        if minutes > 0 {
            write!(f, "{minutes}:{secs:02}.{hundredths:02}")
        } else {
            write!(f, "{secs}.{hundredths:02}")
        }
    }
}

impl FromStr for SeedTime {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("nt") {
            return Ok(Self::NoTime);
        }

        let Some(caps) = SEED_TIME_RE.captures(trimmed) else {
            return Err(ValidationError::InvalidSeedTime {
                value: s.to_string(),
            });
        };
        let overflow = || ValidationError::SeedTimeOverflow {
            value: trimmed.to_string(),
        };
        let number = |idx: usize| -> Result<u64, ValidationError> {
            caps.get(idx)
                .map_or(Ok(0), |m| m.as_str().parse::<u64>().map_err(|_| overflow()))
        };

        let minutes = number(1)?;
        let seconds = if caps.get(2).is_some() {
            number(2)?
        } else {
            number(3)?
        };
        let fraction_ms = caps.get(4).map_or(0, |m| {
            let digits = m.as_str();
            let value: u64 = digits.parse().unwrap_or(0);
            match digits.len() {
                1 => value * 100,
                2 => value * 10,
                _ => value,
            }
        });

        let ms = minutes
            .checked_mul(60)
            .and_then(|secs| secs.checked_add(seconds))
            .and_then(|secs| secs.checked_mul(1000))
            .and_then(|ms| ms.checked_add(fraction_ms))
            .ok_or_else(overflow)?;

        Ok(Self::from(ms))
    }
}

impl Serialize for SeedTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u64(self.as_millis())
    }
}

impl<'de> Deserialize<'de> for SeedTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_any(SeedTimeVisitor)
    }
}

/// Accepts integer milliseconds, whole-number float milliseconds, or text.
struct SeedTimeVisitor;

/// 2^64, the first float past `u64::MAX`.
const U64_LIMIT: f64 = 18_446_744_073_709_551_616.0;

impl serde::de::Visitor<'_> for SeedTimeVisitor {
    type Value = SeedTime;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("seed time in milliseconds (0 for NT) or a time string such as \"1:02.35\"")
    }

    fn visit_i64<E: serde::de::Error>(self, ms: i64) -> Result<SeedTime, E> {
        Ok(SeedTime::from_millis(ms))
    }

    fn visit_u64<E: serde::de::Error>(self, ms: u64) -> Result<SeedTime, E> {
        Ok(SeedTime::from(ms))
    }

    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "value is checked to be a whole number within u64 range"
    )]
    fn visit_f64<E: serde::de::Error>(self, ms: f64) -> Result<SeedTime, E> {
        if ms.is_nan() || ms.fract() != 0.0 {
            return Err(E::custom(format!(
                "seed time must be whole milliseconds, got {ms}"
            )));
        }
        if ms <= 0.0 {
            return Ok(SeedTime::NoTime);
        }
        if ms >= U64_LIMIT {
            return Err(E::custom(format!("seed time out of range: {ms}")));
        }
        Ok(SeedTime::from(ms as u64))
    }

    fn visit_str<E: serde::de::Error>(self, text: &str) -> Result<SeedTime, E> {
        text.parse().map_err(E::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_and_negative_millis_are_no_time() {
        assert_eq!(SeedTime::from_millis(0), SeedTime::NoTime);
        assert_eq!(SeedTime::from_millis(-250), SeedTime::NoTime);
        assert_eq!(SeedTime::from_millis(61_230), SeedTime::Timed(61_230));
        assert_eq!(SeedTime::from(0), SeedTime::NoTime);
    }

    #[test]
    fn no_time_sorts_after_any_timed_value() {
        assert!(SeedTime::Timed(u64::MAX) < SeedTime::NoTime);
        assert!(SeedTime::Timed(1) < SeedTime::Timed(2));

        let mut times = vec![
            SeedTime::NoTime,
            SeedTime::Timed(65_000),
            SeedTime::Timed(60_000),
            SeedTime::NoTime,
            SeedTime::Timed(62_500),
        ];
        times.sort();
        assert_eq!(
            times,
            vec![
                SeedTime::Timed(60_000),
                SeedTime::Timed(62_500),
                SeedTime::Timed(65_000),
                SeedTime::NoTime,
                SeedTime::NoTime,
            ]
        );
    }

    #[test]
    fn as_millis_encodes_no_time_as_zero() {
        assert_eq!(SeedTime::NoTime.as_millis(), 0);
        assert_eq!(SeedTime::Timed(28_140).as_millis(), 28_140);
        assert!(SeedTime::NoTime.is_no_time());
        assert!(!SeedTime::Timed(1).is_no_time());
    }

    #[test]
    fn display_formats() {
        assert_eq!(SeedTime::NoTime.to_string(), "NT");
        assert_eq!(SeedTime::Timed(500).to_string(), "0.50");
        assert_eq!(SeedTime::Timed(59_999).to_string(), "59.99");
        assert_eq!(SeedTime::Timed(60_000).to_string(), "1:00.00");
        assert_eq!(SeedTime::Timed(65_430).to_string(), "1:05.43");
        assert_eq!(SeedTime::Timed(1_125_678).to_string(), "18:45.67");
    }

    #[test]
    fn parse_accepts_common_formats() {
        assert_eq!("NT".parse::<SeedTime>().unwrap(), SeedTime::NoTime);
        assert_eq!("nt".parse::<SeedTime>().unwrap(), SeedTime::NoTime);
        assert_eq!("30".parse::<SeedTime>().unwrap(), SeedTime::Timed(30_000));
        assert_eq!("59.9".parse::<SeedTime>().unwrap(), SeedTime::Timed(59_900));
        assert_eq!("28.14".parse::<SeedTime>().unwrap(), SeedTime::Timed(28_140));
        assert_eq!("28.123".parse::<SeedTime>().unwrap(), SeedTime::Timed(28_123));
        assert_eq!(
            " 1:05.43 ".parse::<SeedTime>().unwrap(),
            SeedTime::Timed(65_430)
        );
        assert_eq!("2:00".parse::<SeedTime>().unwrap(), SeedTime::Timed(120_000));
    }

    #[test]
    fn parse_zero_is_no_time() {
        assert_eq!("0.00".parse::<SeedTime>().unwrap(), SeedTime::NoTime);
        assert_eq!("0:00.00".parse::<SeedTime>().unwrap(), SeedTime::NoTime);
    }

    #[test]
    fn parse_rejects_malformed() {
        for input in ["", "abc", "1:60.00", "1:5.00", "1.2345", "-3.00", "1::00"] {
            let result = input.parse::<SeedTime>();
            assert!(
                matches!(result, Err(ValidationError::InvalidSeedTime { .. })),
                "expected {input:?} to be rejected, got {result:?}"
            );
        }
    }

    #[test]
    fn parse_reports_overflow() {
        let result = "99999999999999999999999.00".parse::<SeedTime>();
        assert!(matches!(
            result,
            Err(ValidationError::SeedTimeOverflow { .. })
        ));
    }

    #[test]
    fn display_parse_roundtrip_at_hundredths() {
        for ms in [10, 990, 28_140, 60_000, 65_430, 754_120] {
            let time = SeedTime::Timed(ms);
            assert_eq!(time.to_string().parse::<SeedTime>().unwrap(), time);
        }
    }

    #[test]
    fn sub_hundredth_times_never_display_as_zero() {
        for ms in 1..10 {
            let shown = SeedTime::Timed(ms).to_string();
            assert_eq!(shown, "0.01");
            assert!(!shown.parse::<SeedTime>().unwrap().is_no_time());
        }
    }

    #[test]
    fn serializes_as_millis_with_zero_for_no_time() {
        assert_eq!(
            serde_json::to_string(&SeedTime::Timed(61_230)).unwrap(),
            "61230"
        );
        assert_eq!(serde_json::to_string(&SeedTime::NoTime).unwrap(), "0");
    }

    #[test]
    fn deserializes_from_millis_or_text() {
        let parsed: SeedTime = serde_json::from_str("61230").unwrap();
        assert_eq!(parsed, SeedTime::Timed(61_230));

        let parsed: SeedTime = serde_json::from_str("0").unwrap();
        assert_eq!(parsed, SeedTime::NoTime);

        let parsed: SeedTime = serde_json::from_str("\"1:01.23\"").unwrap();
        assert_eq!(parsed, SeedTime::Timed(61_230));

        let parsed: SeedTime = serde_json::from_str("\"NT\"").unwrap();
        assert_eq!(parsed, SeedTime::NoTime);

        let result: Result<SeedTime, _> = serde_json::from_str("\"fast\"");
        assert!(result.is_err());
    }

    #[test]
    fn deserializes_large_and_float_millis() {
        let parsed: SeedTime = serde_json::from_str("18446744073709551615").unwrap();
        assert_eq!(parsed, SeedTime::Timed(u64::MAX));

        let parsed: SeedTime = serde_json::from_str("61230.0").unwrap();
        assert_eq!(parsed, SeedTime::Timed(61_230));

        let parsed: SeedTime = serde_json::from_str("-5").unwrap();
        assert_eq!(parsed, SeedTime::NoTime);
    }

    #[test]
    fn deserialize_errors_say_what_was_expected() {
        let err = serde_json::from_str::<SeedTime>("61230.5").unwrap_err();
        assert!(err.to_string().contains("whole milliseconds"), "{err}");

        let err = serde_json::from_str::<SeedTime>("1e30").unwrap_err();
        assert!(err.to_string().contains("out of range"), "{err}");

        let err = serde_json::from_str::<SeedTime>("true").unwrap_err();
        assert!(err.to_string().contains("seed time in milliseconds"), "{err}");
    }
}
