//! Brazilian real formatting used by the narrative templates and the CLI.
//!
//! Output follows the pt-BR conventions (dot thousands separator, comma
//! decimal separator, `R$` prefix) with plain ASCII spaces.

const COMPACT_UNITS: [(f64, &str); 4] = [(1e3, "mil"), (1e6, "mi"), (1e9, "bi"), (1e12, "tri")];

/// Formats with cents, e.g. `R$ 1.234,56`.
pub fn format_brl(value: f64) -> String {
    let cents = (value * 100.0).round() as i64;
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.unsigned_abs();
    format!(
        "{sign}R$ {},{:02}",
        group_thousands(cents / 100),
        cents % 100
    )
}

/// Formats rounded to whole reais, e.g. `R$ 1.235`.
pub fn format_brl_whole(value: f64) -> String {
    let units = value.round() as i64;
    let sign = if units < 0 { "-" } else { "" };
    format!("{sign}R$ {}", group_thousands(units.unsigned_abs()))
}

/// Compact notation, e.g. `R$ 1,2 mi` or `R$ 250 mil`.
pub fn format_brl_compact(value: f64) -> String {
    let magnitude = value.abs();
    let mut unit_index = COMPACT_UNITS
        .iter()
        .rposition(|(threshold, _)| magnitude >= *threshold);
    let mut scaled = round_compact(scale(magnitude, unit_index));

    // 999.999 rounds to "1000 mil"; promote to the next unit instead.
    if scaled >= 1000.0 {
        let next = unit_index.map_or(0, |index| index + 1);
        if next < COMPACT_UNITS.len() {
            unit_index = Some(next);
            scaled = round_compact(scale(magnitude, unit_index));
        }
    }

    let tenths = (scaled * 10.0).round() as u64;
    let sign = if value < 0.0 && tenths > 0 { "-" } else { "" };
    let number = if tenths % 10 == 0 {
        group_thousands(tenths / 10)
    } else {
        format!("{},{}", group_thousands(tenths / 10), tenths % 10)
    };

    match unit_index {
        Some(index) => format!("{sign}R$ {number} {}", COMPACT_UNITS[index].1),
        None => format!("{sign}R$ {number}"),
    }
}

fn scale(magnitude: f64, unit_index: Option<usize>) -> f64 {
    match unit_index {
        Some(index) => magnitude / COMPACT_UNITS[index].0,
        None => magnitude,
    }
}

fn round_compact(value: f64) -> f64 {
    if value < 10.0 {
        (value * 10.0).round() / 10.0
    } else {
        value.round()
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_cents_with_brazilian_separators() {
        assert_eq!(format_brl(32_500.0), "R$ 32.500,00");
        assert_eq!(format_brl(1_234_567.891), "R$ 1.234.567,89");
        assert_eq!(format_brl(0.0), "R$ 0,00");
        assert_eq!(format_brl(-45.5), "-R$ 45,50");
    }

    #[test]
    fn absorbs_floating_point_noise() {
        let savings = 50_000.0 - 50_000.0 * (1.0 - 65.0 / 100.0);
        assert_eq!(format_brl(savings), "R$ 32.500,00");
    }

    #[test]
    fn whole_format_drops_cents() {
        assert_eq!(format_brl_whole(22_500.4), "R$ 22.500");
        assert_eq!(format_brl_whole(-10_000.0), "-R$ 10.000");
    }

    #[test]
    fn compact_format_picks_unit_and_precision() {
        assert_eq!(format_brl_compact(1_000_000.0), "R$ 1 mi");
        assert_eq!(format_brl_compact(1_250_000.0), "R$ 1,3 mi");
        assert_eq!(format_brl_compact(250_000.0), "R$ 250 mil");
        assert_eq!(format_brl_compact(12_345_678.0), "R$ 12 mi");
        assert_eq!(format_brl_compact(3_000_000_000.0), "R$ 3 bi");
        assert_eq!(format_brl_compact(850.0), "R$ 850");
    }

    #[test]
    fn compact_format_promotes_rounded_overflow() {
        assert_eq!(format_brl_compact(999_999.0), "R$ 1 mi");
        assert_eq!(format_brl_compact(999.9), "R$ 1 mil");
    }
}
