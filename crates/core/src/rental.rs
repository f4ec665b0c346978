//! Rental-period and fee calculation.
//!
//! The billed period is elapsed wall-clock time divided into whole days,
//! rounded up: any fraction of a day counts as a full day. The division is
//! calendar-independent (plain milliseconds, no timezone arithmetic). A
//! return at the exact instant of checkout yields zero billed days and a
//! zero fee; there is deliberately no one-day minimum.

use crate::types::Timestamp;

/// Milliseconds in one billing day.
pub const MS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Number of billed days between checkout and return.
///
/// Elapsed milliseconds rounded up to the next whole day. A negative
/// elapsed time (clock skew) clamps to zero rather than producing a
/// negative day count.
pub fn rental_days(date_out: Timestamp, date_returned: Timestamp) -> i64 {
    let elapsed_ms = (date_returned - date_out).num_milliseconds();
    if elapsed_ms <= 0 {
        return 0;
    }
    // `i64::div_ceil` is still unstable (int_roundings); here `elapsed_ms > 0`
    // and `MS_PER_DAY > 0`, so computing on the stable unsigned type is exact.
    (elapsed_ms as u64).div_ceil(MS_PER_DAY as u64) as i64
}

/// Fee for a closed rental: billed days times the daily rate captured in
/// the rental's movie snapshot.
pub fn rental_fee(days: i64, daily_rental_rate: i16) -> i64 {
    days * i64::from(daily_rental_rate)
}
