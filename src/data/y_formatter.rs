//! Y-axis tick-label formatters: adaptive numbers and currency amounts.

use num_format::{Locale, ToFormattedString};

/// Selects how y tick labels are formatted.
#[derive(Debug, Clone, PartialEq)]
pub enum YFormatter {
    /// Decimal places derived from the tick step, unit-less.
    Auto,
    /// Fixed decimal places with an optional unit suffix (e.g. `"txn"`).
    Fixed {
        decimal_places: usize,
        unit: Option<String>,
    },
    /// Currency amounts with a symbol prefix and grouped thousands,
    /// e.g. `$1,250,000`.
    Currency {
        symbol: String,
        decimal_places: usize,
    },
}

impl Default for YFormatter {
    fn default() -> Self {
        YFormatter::Auto
    }
}

impl YFormatter {
    /// Convenience constructor for whole-unit currency labels.
    pub fn currency(symbol: impl Into<String>) -> Self {
        YFormatter::Currency {
            symbol: symbol.into(),
            decimal_places: 0,
        }
    }

    /// Format a tick value. `step` is the tick spacing, used by `Auto` to pick
    /// just enough decimal places to tell neighboring ticks apart.
    pub fn format(&self, value: f64, step: f64) -> String {
        match self {
            YFormatter::Auto => format!("{:.*}", decimals_for_step(step), value),
            YFormatter::Fixed {
                decimal_places,
                unit,
            } => {
                let s = format!("{:.*}", decimal_places, value);
                match unit {
                    Some(u) => format!("{} {}", s, u),
                    None => s,
                }
            }
            YFormatter::Currency {
                symbol,
                decimal_places,
            } => format_currency(value, symbol, *decimal_places),
        }
    }
}

/// Smallest number of decimal places that renders the tick step exactly,
/// so neighboring tick labels never collapse to the same string.
fn decimals_for_step(step: f64) -> usize {
    if !step.is_finite() || step <= 0.0 {
        return 0;
    }
    let mut places = 0;
    let mut scaled = step;
    while places < 6 && (scaled - scaled.round()).abs() > 1e-9 {
        scaled *= 10.0;
        places += 1;
    }
    places
}

fn format_currency(value: f64, symbol: &str, decimal_places: usize) -> String {
    if !value.is_finite() {
        return format!("{}", value);
    }
    let sign = if value < 0.0 { "-" } else { "" };
    // Scale to an integer first so rounding carries into the integer part.
    let pow = 10i64.pow(decimal_places.min(9) as u32);
    let scaled = (value.abs() * pow as f64).round() as i64;
    let int_part = (scaled / pow).to_formatted_string(&Locale::en);
    if decimal_places == 0 {
        format!("{}{}{}", sign, symbol, int_part)
    } else {
        format!(
            "{}{}{}.{:0width$}",
            sign,
            symbol,
            int_part,
            scaled % pow,
            width = decimal_places
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auto_precision_follows_step() {
        assert_eq!(YFormatter::Auto.format(4.0, 2.0), "4");
        assert_eq!(YFormatter::Auto.format(0.5, 0.25), "0.50");
    }

    #[test]
    fn currency_groups_thousands() {
        let f = YFormatter::currency("$");
        assert_eq!(f.format(1_250_000.0, 100.0), "$1,250,000");
        assert_eq!(f.format(-930.0, 100.0), "-$930");
    }

    #[test]
    fn currency_with_decimals() {
        let f = YFormatter::Currency {
            symbol: "€".into(),
            decimal_places: 2,
        };
        assert_eq!(f.format(1_042.5, 1.0), "€1,042.50");
    }
}
