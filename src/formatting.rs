//! Display formatting shared by the output writers.

use std::env;
use std::io::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Auto,   // Detect based on terminal
    Always, // Force colors on
    Never,  // Force colors off
}

impl ColorMode {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "auto" => Some(Self::Auto),
            "always" => Some(Self::Always),
            "never" => Some(Self::Never),
            _ => None,
        }
    }

    pub fn should_use_color(&self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => detect_color_support(),
        }
    }
}

fn detect_color_support() -> bool {
    if env::var_os("NO_COLOR").is_some() {
        return false;
    }
    std::io::stdout().is_terminal()
}

/// Compact currency for headlines: `$38.5M`, `$1.2B`, `$950K`, `-$3.0M`.
pub fn format_currency_compact(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let magnitude = value.abs();
    if magnitude >= 1e9 {
        format!("{sign}${:.1}B", magnitude / 1e9)
    } else if magnitude >= 1e6 {
        format!("{sign}${:.1}M", magnitude / 1e6)
    } else if magnitude >= 1e3 {
        format!("{sign}${:.0}K", magnitude / 1e3)
    } else {
        format!("{sign}${magnitude:.0}")
    }
}

/// Full currency with thousands separators: `$38,500,000`.
pub fn format_currency_full(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let whole = value.abs().round() as i64;
    let mut digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 2);
    while digits.len() > 3 {
        let split = digits.len() - 3;
        grouped.insert_str(0, &format!(",{}", &digits[split..]));
        digits.truncate(split);
    }
    grouped.insert_str(0, &digits);
    format!("{sign}${grouped}")
}

/// Percent with one decimal: `7.7%`.
pub fn format_pct(value: f64) -> String {
    format!("{value:.1}%")
}

/// Months with one decimal, or a dash for beyond-horizon.
pub fn format_months(value: Option<f64>) -> String {
    match value {
        Some(m) => format!("{m:.1} mo"),
        None => "beyond horizon".to_string(),
    }
}

/// ROAS multiple: `3.2x`.
pub fn format_multiple(value: f64) -> String {
    format!("{value:.1}x")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_currency_scales_units() {
        assert_eq!(format_currency_compact(38_500_000.0), "$38.5M");
        assert_eq!(format_currency_compact(1_200_000_000.0), "$1.2B");
        assert_eq!(format_currency_compact(950_000.0), "$950K");
        assert_eq!(format_currency_compact(12.0), "$12");
        assert_eq!(format_currency_compact(-3_000_000.0), "-$3.0M");
    }

    #[test]
    fn full_currency_groups_thousands() {
        assert_eq!(format_currency_full(38_500_000.0), "$38,500,000");
        assert_eq!(format_currency_full(999.0), "$999");
        assert_eq!(format_currency_full(1_000.0), "$1,000");
        assert_eq!(format_currency_full(-1_234_567.0), "-$1,234,567");
    }

    #[test]
    fn months_formatting_handles_beyond_horizon() {
        assert_eq!(format_months(Some(11.25)), "11.2 mo");
        assert_eq!(format_months(None), "beyond horizon");
    }

    #[test]
    fn color_mode_parses_known_values() {
        assert_eq!(ColorMode::parse("always"), Some(ColorMode::Always));
        assert_eq!(ColorMode::parse("NEVER"), Some(ColorMode::Never));
        assert_eq!(ColorMode::parse("rainbow"), None);
    }
}
