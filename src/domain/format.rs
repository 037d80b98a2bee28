/// Shown wherever a metric has nothing to summarise.
pub const PLACEHOLDER: &str = "N/A";

/// `$` followed by the whole-dollar amount with comma separators.
/// Cents are truncated, not rounded.
pub fn format_currency(value: f64) -> String {
    format!("${}", group_thousands(value.trunc() as i64))
}

pub fn format_optional_currency(value: Option<f64>) -> String {
    value
        .map(format_currency)
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

/// Blank for missing values, shortest form otherwise (`120`, `120.5`).
pub fn format_optional_number(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

pub fn group_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if n < 0 {
        out.push('-');
    }

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}
