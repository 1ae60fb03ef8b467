// Value formatting and markdown utilities for the overview page

use crate::alphavantage::NOT_AVAILABLE;

/// Format an integer count with B/M magnitude suffixes
///
/// Examples:
/// - "1500000000" -> "1.50 Billion"
/// - "2500000" -> "2.50 Million"
/// - "999999" -> "999,999"
/// - "abc" -> "N/A"
///
/// Digit separators such as "1_000" are not accepted and give "N/A".
pub fn format_large_number(raw: &str) -> String {
    let number: i64 = match raw.trim().parse() {
        Ok(n) => n,
        Err(_) => return NOT_AVAILABLE.to_string(),
    };

    if number >= 1_000_000_000 {
        // Billions
        format!("{:.2} Billion", number as f64 / 1_000_000_000.0)
    } else if number >= 1_000_000 {
        // Millions
        format!("{:.2} Million", number as f64 / 1_000_000.0)
    } else {
        group_thousands(&number.to_string(), ',')
    }
}

/// Format a fraction as a percentage with two decimals
///
/// "0.0325" -> "3.25%"
pub fn format_percentage(raw: &str) -> String {
    match parse_finite(raw) {
        Some(value) => format!("{:.2}%", value * 100.0),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Format a price as dollars with thousand separators and two decimals
///
/// "1234.5" -> "$1,234.50"
pub fn add_dollar_sign(raw: &str) -> String {
    match parse_finite(raw) {
        Some(value) => format!("${}", format_decimal(value, 2, ',')),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Parse a float, rejecting NaN and infinities
///
/// "nan" and "inf" deliberately render as "N/A" rather than "nan%" or "$inf",
/// and "1_000" style digit separators are rejected.
fn parse_finite(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Format a float with fixed decimals and a thousand separator in the integer part
///
/// format_decimal(-1234.5, 2, ',') -> "-1,234.50"
pub fn format_decimal(value: f64, decimals: usize, separator: char) -> String {
    let formatted = format!("{:.prec$}", value, prec = decimals);

    match formatted.split_once('.') {
        Some((integer_part, fractional_part)) => {
            format!("{}.{}", group_thousands(integer_part, separator), fractional_part)
        }
        None => group_thousands(&formatted, separator),
    }
}

/// Insert `separator` every three digits from the right
///
/// A leading minus sign is kept in front of the grouped digits.
pub fn group_thousands(integer_part: &str, separator: char) -> String {
    let (sign, digits) = match integer_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer_part),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    grouped.push_str(sign);

    let len = digits.len();
    for (i, ch) in digits.chars().enumerate() {
        grouped.push(ch);
        // Separator every 3 digits from the right (but not at the end)
        if (len - i - 1) % 3 == 0 && i < len - 1 {
            grouped.push(separator);
        }
    }

    grouped
}

/// Build a markdown section header
pub fn build_section_header(title: &str, level: u8) -> String {
    let hashes = "#".repeat(level as usize);
    format!("{} {}\n\n", hashes, title)
}

/// Build a bold-labelled markdown line: `**Label:** value`
pub fn build_labeled_line(label: &str, value: &str) -> String {
    format!("**{}:** {}\n", label, value)
}

/// Build a markdown list from items
pub fn build_list(items: &[String], ordered: bool) -> String {
    let mut list = String::new();

    for (i, item) in items.iter().enumerate() {
        if ordered {
            list.push_str(&format!("{}. {}\n", i + 1, item));
        } else {
            list.push_str(&format!("- {}\n", item));
        }
    }

    list
}

/// Format a DateTime<Utc> as human-readable string
pub fn format_datetime(dt: chrono::DateTime<chrono::Utc>) -> String {
    dt.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}
