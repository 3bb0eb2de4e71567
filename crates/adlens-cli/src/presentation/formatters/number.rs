/// Placeholder for a per-campaign ratio that cannot be computed
pub const MISSING_RATIO: &str = "—";
/// Placeholder for an aggregate ratio over an empty denominator
pub const NOT_AVAILABLE: &str = "N/A";

/// 16450 -> "16,450"
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// 1234.5 -> "$1,234.50"
pub fn format_currency(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}${}.{:02}", sign, format_thousands(cents / 100), cents % 100)
}

/// 12.9179 -> "12.92%"
pub fn format_percent(value: f64) -> String {
    format!("{:.2}%", value)
}

pub fn format_optional_percent(value: Option<f64>, placeholder: &str) -> String {
    value
        .map(format_percent)
        .unwrap_or_else(|| placeholder.to_string())
}

pub fn format_optional_currency(value: Option<f64>, placeholder: &str) -> String {
    value
        .map(format_currency)
        .unwrap_or_else(|| placeholder.to_string())
}
