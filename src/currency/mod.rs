//! Currency display helpers. Amounts are never converted, only formatted.

pub fn symbol_for(code: &str) -> String {
    match code {
        "USD" => "$".into(),
        "EUR" => "€".into(),
        "GBP" => "£".into(),
        "JPY" => "¥".into(),
        "AUD" => "A$".into(),
        "CAD" => "CA$".into(),
        _ => format!("{} ", code),
    }
}

pub fn minor_units_for(code: &str) -> u8 {
    match code {
        "JPY" => 0,
        "KWD" | "BHD" => 3,
        _ => 2,
    }
}

/// Formats `amount` in `code`, e.g. `$1,234.50` or `-€3.00`.
pub fn format_currency(amount: f64, code: &str) -> String {
    let code = code.trim().to_ascii_uppercase();
    let precision = minor_units_for(&code);
    let body = format_number(amount.abs(), precision);
    let sign = if amount < 0.0 && body.chars().any(|c| c.is_ascii_digit() && c != '0') {
        "-"
    } else {
        ""
    };
    format!("{}{}{}", sign, symbol_for(&code), body)
}

fn format_number(value: f64, precision: u8) -> String {
    let body = format!("{:.*}", precision as usize, value);
    match body.split_once('.') {
        Some((int_part, fraction)) => format!("{}.{}", group_digits(int_part), fraction),
        None => group_digits(&body),
    }
}

fn group_digits(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (count, ch) in digits.chars().rev().enumerate() {
        if count != 0 && count % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped.chars().rev().collect()
}
