//! Wall-clock and randomness source for the non-deterministic fields.
//!
//! Only two things in a generated calendar vary from run to run: the event
//! UID (timestamp plus random suffix) and DTSTAMP. Both go through a [`Clock`]
//! so callers can swap in a [`FixedClock`] for reproducible output.

use std::cell::Cell;

use chrono::{Local, NaiveDateTime, Utc};
use uuid::Uuid;

/// Length of the random suffix appended to event UIDs.
pub const SUFFIX_LEN: usize = 6;

/// Source of "now" and of UID suffixes. Must be read fresh on every call.
pub trait Clock {
    /// Current local wall-clock time (no timezone).
    fn now(&self) -> NaiveDateTime;

    /// Milliseconds since the Unix epoch.
    fn unix_millis(&self) -> i64;

    /// A short random token of [`SUFFIX_LEN`] characters.
    fn random_suffix(&self) -> String;
}

/// The real system clock with a v4-UUID-derived suffix.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }

    fn unix_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }

    fn random_suffix(&self) -> String {
        let mut token = Uuid::new_v4().simple().to_string();
        token.truncate(SUFFIX_LEN);
        token
    }
}

/// A clock frozen at one instant.
///
/// Suffixes count upwards (`000001`, `000002`, ...) so UIDs stay distinct
/// while the whole document remains byte-for-byte reproducible.
#[derive(Debug, Clone)]
pub struct FixedClock {
    instant: NaiveDateTime,
    counter: Cell<u32>,
}

impl FixedClock {
    pub fn new(instant: NaiveDateTime) -> Self {
        FixedClock {
            instant,
            counter: Cell::new(0),
        }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.instant
    }

    fn unix_millis(&self) -> i64 {
        self.instant.and_utc().timestamp_millis()
    }

    fn random_suffix(&self) -> String {
        let next = self.counter.get().wrapping_add(1);
        self.counter.set(next);
        format!("{:0width$}", next % 1_000_000, width = SUFFIX_LEN)
    }
}
