//! USD currency text and numeric coercion of text.

/// Format an amount in cents as en-US dollars.
///
/// Always a leading `$`, comma thousands separators and exactly two decimals.
/// Negative amounts put the sign before the symbol.
///
/// ```rust
/// use prodtablelib::format_currency;
///
/// assert_eq!(format_currency(1999), "$19.99");
/// assert_eq!(format_currency(150000), "$1,500.00");
/// assert_eq!(format_currency(-5), "-$0.05");
/// ```
pub fn format_currency(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!(
        "{}${}.{:02}",
        sign,
        group_thousands(abs / 100),
        abs % 100
    )
}

/// Insert a comma between every group of three digits.
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Read text as a number the way a loosely typed script would.
///
/// Surrounding whitespace is ignored, empty text is zero, `Infinity` is
/// accepted with an optional sign, and anything else that is not a plain
/// decimal literal is NaN. Currency text such as `"$1.00"` is therefore NaN.
pub fn coerce_number(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    let is_decimal_literal = trimmed
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'))
        && trimmed.chars().any(|c| c.is_ascii_digit());
    if !is_decimal_literal {
        return f64::NAN;
    }

    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

/// Print a number the way a script engine prints it.
///
/// NaN is `NaN`, infinities are `Infinity`/`-Infinity`, integral values have
/// no fraction and negative zero prints as `0`.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        let label = if value > 0.0 { "Infinity" } else { "-Infinity" };
        label.to_string()
    } else if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}
