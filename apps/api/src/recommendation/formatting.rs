/// Formats whole dollars as en-US currency, e.g. `65000` → `"$65,000"`.
pub fn format_usd(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 2);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if amount < 0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

/// `"$65,000 - $75,000"`
pub fn format_usd_range(low: i64, high: i64) -> String {
    format!("{} - {}", format_usd(low), format_usd(high))
}

/// Extracts the lower bound from a range produced by `format_usd_range`.
#[cfg(test)]
pub fn parse_range_low(range: &str) -> Option<i64> {
    let low = range.split(" - ").next()?;
    low.trim()
        .trim_start_matches('$')
        .replace(',', "")
        .parse()
        .ok()
}
