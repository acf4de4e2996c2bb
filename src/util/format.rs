//! Display helpers. Rounding happens here only; stored values keep full precision.

use time::{format_description, OffsetDateTime};

pub fn money(value: f64) -> String {
    let cents = round_cents(value);
    let sign = if cents < 0.0 { "-" } else { "" };
    format!("{sign}${:.2}", cents.abs())
}

/// Money with thousands separators, e.g. `$12,345.60`.
pub fn money_grouped(value: f64) -> String {
    let cents = round_cents(value);
    let plain = format!("{:.2}", cents.abs());
    let (whole, fraction) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (idx, digit) in whole.chars().enumerate() {
        if idx > 0 && (whole.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if cents < 0.0 { "-" } else { "" };
    format!("{sign}${grouped}.{fraction}")
}

/// Rounds to whole cents; the sign is taken from this value, never the raw one.
fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Percent with the given number of decimals; whole numbers drop the fraction.
pub fn percent(value: f64, decimals: usize) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}%")
    } else {
        format!("{value:.decimals$}%")
    }
}

pub fn date_label(timestamp_ms: i64) -> String {
    render_timestamp(timestamp_ms, "[year]-[month]-[day]")
}

pub fn datetime_label(timestamp_ms: i64) -> String {
    render_timestamp(timestamp_ms, "[year]-[month]-[day] [hour]:[minute] UTC")
}

fn render_timestamp(timestamp_ms: i64, pattern: &str) -> String {
    let nanos = i128::from(timestamp_ms) * 1_000_000;
    let Ok(moment) = OffsetDateTime::from_unix_timestamp_nanos(nanos) else {
        return timestamp_ms.to_string();
    };
    format_description::parse(pattern)
        .ok()
        .and_then(|description| moment.format(&description).ok())
        .unwrap_or_else(|| timestamp_ms.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn money_rounds_to_cents() {
        assert_eq!(money(26.0), "$26.00");
        assert_eq!(money(6.004), "$6.00");
        assert_eq!(money(0.126), "$0.13");
        assert_eq!(money(-2.5), "-$2.50");
    }

    #[test]
    fn amounts_rounding_to_zero_have_no_sign() {
        assert_eq!(money(-0.001), "$0.00");
        assert_eq!(money(-0.0), "$0.00");
        assert_eq!(money(-0.006), "-$0.01");
        assert_eq!(money_grouped(-0.004), "$0.00");
        assert_eq!(money_grouped(-1234.5), "-$1,234.50");
    }

    #[test]
    fn grouped_money_inserts_separators() {
        assert_eq!(money_grouped(0.0), "$0.00");
        assert_eq!(money_grouped(999.5), "$999.50");
        assert_eq!(money_grouped(1234.5), "$1,234.50");
        assert_eq!(money_grouped(1234567.891), "$1,234,567.89");
    }

    #[test]
    fn percent_trims_whole_numbers() {
        assert_eq!(percent(30.0, 1), "30%");
        assert_eq!(percent(7.5, 2), "7.50%");
        assert_eq!(percent(12.345, 1), "12.3%");
    }

    #[test]
    fn timestamps_render_in_utc() {
        // 2023-11-14T22:13:20Z
        assert_eq!(date_label(1_700_000_000_000), "2023-11-14");
        assert_eq!(datetime_label(1_700_000_000_000), "2023-11-14 22:13 UTC");
    }
}
