//! Currency formatting and bill-amount parsing.

/// Format an amount as en-US currency: `$1,234.56`.
pub fn format_currency(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let dollars = cents / 100;
    let cents = cents % 100;

    // Insert thousands separators right-to-left.
    let digits = dollars.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if negative && (dollars > 0 || cents > 0) {
        "-"
    } else {
        ""
    };
    format!("{sign}${grouped}.{cents:02}")
}

/// Parse a bill amount from field text. Currency symbols, separators and
/// surrounding whitespace are tolerated; anything unparseable, negative
/// or non-finite degrades to 0.0, keeping bill amounts non-negative by
/// construction.
pub fn parse_bill(text: &str) -> f64 {
    let cleaned: String = text
        .trim()
        .chars()
        .filter(|c| !matches!(c, '$' | ','))
        .collect();
    match cleaned.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => value,
        _ => 0.0,
    }
}

// ── Tests ───────────────────────────────────────────────────────
