//! Identifier and booking reference derivation.
//!
//! Both values come from the epoch-millisecond timestamp of the moment a
//! booking is created. Two bookings created in the same millisecond get the
//! same id and the same reference; nothing checks against existing records.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::error::{HabError, HabResult};

pub const REFERENCE_PREFIX: &str = "HAB-";

const BASE36_DIGITS: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Everything derived from a single clock reading at creation time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingStamp {
    pub id: i64,
    pub booking_reference: String,
    pub created_at: String,
}

impl BookingStamp {
    pub fn at(now: DateTime<Utc>) -> HabResult<Self> {
        let millis = now.timestamp_millis();
        let unsigned = u64::try_from(millis).map_err(|_| {
            HabError::Internal(format!("Clock reading {now} is before the Unix epoch"))
        })?;

        Ok(BookingStamp {
            id: millis,
            booking_reference: booking_reference(unsigned),
            created_at: iso_timestamp(now),
        })
    }
}

/// `HAB-` followed by the millisecond timestamp in upper-case base 36.
pub fn booking_reference(epoch_millis: u64) -> String {
    format!("{}{}", REFERENCE_PREFIX, to_base36(epoch_millis))
}

/// Millisecond-precision UTC timestamp ending in `Z`, e.g. `2024-01-01T10:00:00.000Z`.
pub fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn to_base36(mut n: u64) -> String {
    if n == 0 {
        return "0".to_string();
    }

    let mut digits = Vec::new();
    while n > 0 {
        digits.push(BASE36_DIGITS[(n % 36) as usize]);
        n /= 36;
    }

    digits.iter().rev().map(|&d| d as char).collect()
}
