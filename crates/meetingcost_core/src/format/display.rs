//! Locale-independent display strings for raw cost and time values.
//!
//! # Invariants
//! - Formatting never feeds back into calculations; inputs are read-only.
//! - Currency is USD with two decimals and `,` thousands separators.

/// Hours/minutes/seconds breakdown of an elapsed duration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DurationBreakdown {
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
    /// Whole seconds; fractional input is floored.
    pub total_seconds: u64,
    /// Long form, e.g. `1 hour 1 minute 5 seconds`.
    pub readable: String,
    /// Compact form, e.g. `1h 1m 5s`, `2m 5s` or `45 sec`.
    pub detail: String,
}

/// Formats an amount as USD, e.g. `$1,234.50`.
///
/// Half cents round away from zero on the shortest decimal form, so
/// `0.125` is `$0.13`. NaN renders as `$NaN` and infinities as `$∞`.
pub fn format_currency(amount: f64) -> String {
    if amount.is_nan() {
        return "$NaN".to_string();
    }
    if amount.is_infinite() {
        let sign = if amount < 0.0 { "-" } else { "" };
        return format!("{sign}$∞");
    }

    let (whole, cents) = round_to_cents(amount.abs());
    let is_zero = whole == "0" && cents == "00";
    let sign = if amount < 0.0 && !is_zero { "-" } else { "" };
    format!("{sign}${}.{cents}", group_thousands(&whole))
}

/// Formats an hourly rate, e.g. `$50.00/hr`.
pub fn format_hourly_rate(rate: f64) -> String {
    format!("{}/hr", format_currency(rate))
}

/// Splits elapsed seconds into hours, minutes and seconds.
///
/// Negative and NaN input is treated as zero.
pub fn format_duration(seconds: f64) -> DurationBreakdown {
    let total_seconds = whole_seconds(seconds);
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let secs = total_seconds % 60;

    let mut readable_parts = Vec::new();
    if hours > 0 {
        readable_parts.push(pluralize(hours, "hour"));
    }
    if minutes > 0 {
        readable_parts.push(pluralize(minutes, "minute"));
    }
    if secs > 0 || readable_parts.is_empty() {
        readable_parts.push(pluralize(secs, "second"));
    }

    let detail = if hours > 0 {
        format!("{hours}h {minutes}m {secs}s")
    } else if minutes > 0 {
        format!("{minutes}m {secs}s")
    } else {
        format!("{secs} sec")
    };

    DurationBreakdown {
        hours,
        minutes,
        seconds: secs,
        total_seconds,
        readable: readable_parts.join(" "),
        detail,
    }
}

/// Formats timer text: `M:SS` below one hour, `H:MM:SS` otherwise.
pub fn format_elapsed_time(seconds: f64) -> String {
    let total_seconds = whole_seconds(seconds);
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let secs = total_seconds % 60;

    if hours > 0 {
        format!("{hours}:{minutes:02}:{secs:02}")
    } else {
        format!("{minutes}:{secs:02}")
    }
}

fn whole_seconds(seconds: f64) -> u64 {
    if seconds.is_nan() || seconds <= 0.0 {
        return 0;
    }
    seconds.floor() as u64
}

fn pluralize(value: u64, unit: &str) -> String {
    if value == 1 {
        format!("{value} {unit}")
    } else {
        format!("{value} {unit}s")
    }
}

/// Splits a finite non-negative value into whole dollars and two cent digits.
///
/// Rounds the shortest round-trip decimal text, not the binary value:
/// `2.675` must become `2.68`.
fn round_to_cents(value: f64) -> (String, String) {
    let decimal = value.to_string();
    let (whole, fraction) = decimal.split_once('.').unwrap_or((decimal.as_str(), ""));

    let mut digits = whole
        .bytes()
        .chain(fraction.bytes().chain(std::iter::repeat(b'0')).take(2))
        .collect::<Vec<u8>>();
    if fraction.as_bytes().get(2).is_some_and(|digit| *digit >= b'5') {
        increment_digits(&mut digits);
    }

    let split = digits.len() - 2;
    let to_string = |bytes: &[u8]| bytes.iter().map(|byte| *byte as char).collect::<String>();
    (to_string(&digits[..split]), to_string(&digits[split..]))
}

fn increment_digits(digits: &mut Vec<u8>) {
    for digit in digits.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            return;
        }
    }
    digits.insert(0, b'1');
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::{format_currency, format_duration, group_thousands, round_to_cents};

    #[test]
    fn groups_thousands() {
        assert_eq!(group_thousands("1"), "1");
        assert_eq!(group_thousands("1000"), "1,000");
        assert_eq!(group_thousands("1234567"), "1,234,567");
    }

    #[test]
    fn negative_amounts_keep_sign() {
        assert_eq!(format_currency(-1234.5), "-$1,234.50");
    }

    #[test]
    fn rounding_carries_into_whole_dollars() {
        assert_eq!(
            round_to_cents(999.995),
            ("1000".to_string(), "00".to_string())
        );
        assert_eq!(format_currency(999.995), "$1,000.00");
    }

    #[test]
    fn tiny_negative_amounts_drop_the_sign() {
        assert_eq!(format_currency(-0.001), "$0.00");
        assert_eq!(format_currency(-0.005), "-$0.01");
    }

    #[test]
    fn non_finite_amounts_use_placeholders() {
        assert_eq!(format_currency(f64::NAN), "$NaN");
        assert_eq!(format_currency(f64::INFINITY), "$∞");
        assert_eq!(format_currency(f64::NEG_INFINITY), "-$∞");
    }

    #[test]
    fn zero_duration_reads_as_zero_seconds() {
        let breakdown = format_duration(0.0);
        assert_eq!(breakdown.readable, "0 seconds");
        assert_eq!(breakdown.detail, "0 sec");
    }
}
