//! # Temporal Types — Offset-Bearing Capture Timestamps
//!
//! Defines [`Timestamp`], the annotation capture time: ISO 8601 / RFC 3339
//! with an explicit UTC offset. The offset is part of the record — it keeps
//! the originating node's local zone visible on the wire and is preserved
//! verbatim through parse/format, never normalized to `Z`.
//!
//! The [`Clock`] trait abstracts "now" so construction is deterministic
//! under test; [`SystemClock`] is the production implementation.

use chrono::{DateTime, FixedOffset, Local};
use serde::{Deserialize, Serialize};

use crate::error::ContractError;

/// An annotation capture time: an RFC 3339 instant with explicit offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(DateTime<FixedOffset>);

impl Timestamp {
    /// Current time in the node's local zone, with its fixed offset.
    pub fn now() -> Self {
        Self(Local::now().fixed_offset())
    }

    /// Wrap an existing offset-bearing datetime.
    pub fn from_datetime(dt: DateTime<FixedOffset>) -> Self {
        Self(dt)
    }

    /// Parse an RFC 3339 string, keeping its offset verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::InvalidTimestamp`] if the text is not valid
    /// RFC 3339 (including date-only strings and missing offsets).
    pub fn parse(s: &str) -> Result<Self, ContractError> {
        DateTime::parse_from_rfc3339(s)
            .map(Self)
            .map_err(|e| ContractError::InvalidTimestamp(format!("{s:?}: {e}")))
    }

    /// Access the inner datetime.
    pub fn as_datetime(&self) -> &DateTime<FixedOffset> {
        &self.0
    }

    /// Render as RFC 3339 with the stored offset (e.g.
    /// `2026-08-06T09:15:00+02:00`).
    pub fn to_rfc3339(&self) -> String {
        self.0.to_rfc3339()
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_rfc3339())
    }
}

/// Capability trait supplying annotation capture times.
pub trait Clock: Send + Sync {
    /// Returns the current time.
    fn now(&self) -> Timestamp;
}

/// Production clock backed by the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::now()
    }
}

/// Test double that returns a preset instant on every call.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    /// The instant to hand out.
    pub timestamp: Timestamp,
}

impl FixedClock {
    /// Creates a fixed clock that always yields `timestamp`.
    pub const fn new(timestamp: Timestamp) -> Self {
        Self { timestamp }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        self.timestamp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_now_renders_with_offset() {
        let text = Timestamp::now().to_rfc3339();
        // RFC 3339 offset tail: +HH:MM or -HH:MM (chrono never emits Z here).
        let tail = &text[text.len() - 6..];
        assert!(tail.starts_with('+') || tail.starts_with('-'), "no offset in {text}");
        assert_eq!(&tail[3..4], ":");
    }

    #[test]
    fn test_parse_format_roundtrip() {
        let ts = Timestamp::parse("2026-01-15T17:00:00+05:00").unwrap();
        assert_eq!(ts.to_rfc3339(), "2026-01-15T17:00:00+05:00");
    }

    #[test]
    fn test_offset_preserved_not_normalized() {
        let utc = Timestamp::parse("2026-01-15T12:00:00+00:00").unwrap();
        let karachi = Timestamp::parse("2026-01-15T17:00:00+05:00").unwrap();
        // Same instant, different wire text.
        assert_eq!(utc, karachi);
        assert_ne!(utc.to_rfc3339(), karachi.to_rfc3339());
    }

    #[test]
    fn test_parse_accepts_z() {
        let ts = Timestamp::parse("2026-01-15T12:00:00Z").unwrap();
        assert_eq!(ts.to_rfc3339(), "2026-01-15T12:00:00+00:00");
    }

    #[test]
    fn test_parse_keeps_subseconds() {
        let ts = Timestamp::parse("2026-01-15T12:00:00.250+01:00").unwrap();
        assert_eq!(ts.to_rfc3339(), "2026-01-15T12:00:00.250+01:00");
    }

    #[test]
    fn test_parse_invalid() {
        assert!(Timestamp::parse("not-a-date").is_err());
        assert!(Timestamp::parse("2026-01-15").is_err());
        assert!(Timestamp::parse("2026-01-15T12:00:00").is_err()); // offset required
        assert!(Timestamp::parse("").is_err());
    }

    #[test]
    fn test_parse_error_variant() {
        let err = Timestamp::parse("garbage").unwrap_err();
        assert!(matches!(err, ContractError::InvalidTimestamp(_)));
    }

    #[test]
    fn test_display_matches_rfc3339() {
        let ts = Timestamp::parse("2026-06-30T23:59:59-04:00").unwrap();
        assert_eq!(format!("{ts}"), ts.to_rfc3339());
    }

    #[test]
    fn test_fixed_clock_repeats() {
        let ts = Timestamp::parse("2026-01-15T12:00:00+00:00").unwrap();
        let clock = FixedClock::new(ts);
        assert_eq!(clock.now(), ts);
        assert_eq!(clock.now(), ts);
    }

    #[test]
    fn test_serde_roundtrip() {
        let ts = Timestamp::parse("2026-01-15T17:00:00+05:00").unwrap();
        let json = serde_json::to_string(&ts).unwrap();
        let parsed: Timestamp = serde_json::from_str(&json).unwrap();
        assert_eq!(ts, parsed);
    }

    #[test]
    fn test_ordering_across_offsets() {
        let earlier = Timestamp::parse("2026-01-15T11:59:00+00:00").unwrap();
        let later = Timestamp::parse("2026-01-15T17:00:00+05:00").unwrap();
        assert!(earlier < later);
    }
}
