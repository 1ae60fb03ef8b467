// Unit tests for value formatters

use stock_insights::report::formatter::*;

#[cfg(test)]
mod tests {
    use super::*;

    // formatter.rs covers the documented examples; these cover edge cases

    #[test]
    fn test_large_number_thresholds() {
        assert_eq!(format_large_number("1000000000"), "1.00 Billion");
        assert_eq!(format_large_number("999999999"), "1000.00 Million");
        assert_eq!(format_large_number("1000000"), "1.00 Million");
        assert_eq!(format_large_number("999999"), "999,999");
        assert_eq!(format_large_number("1000"), "1,000");
        assert_eq!(format_large_number("0"), "0");
    }

    #[test]
    fn test_large_number_input_forms() {
        // Surrounding whitespace and an explicit sign are accepted
        assert_eq!(format_large_number(" 2500000 "), "2.50 Million");
        assert_eq!(format_large_number("+999"), "999");
        assert_eq!(format_large_number("-1234567"), "-1,234,567");

        // Anything that is not a plain integer degrades
        assert_eq!(format_large_number("3000000000.0"), "N/A");
        assert_eq!(format_large_number("1e9"), "N/A");
        assert_eq!(format_large_number("None"), "N/A");
        assert_eq!(format_large_number("N/A"), "N/A");
        assert_eq!(format_large_number(""), "N/A");
        assert_eq!(format_large_number("99999999999999999999999"), "N/A");
    }

    #[test]
    fn test_large_number_trillions_stay_in_billions() {
        assert_eq!(format_large_number("3000000000000"), "3000.00 Billion");
    }

    #[test]
    fn test_percentage_edge_cases() {
        assert_eq!(format_percentage("0"), "0.00%");
        assert_eq!(format_percentage("0.005"), "0.50%");
        assert_eq!(format_percentage("1"), "100.00%");
        assert_eq!(format_percentage("-0.0125"), "-1.25%");
        assert_eq!(format_percentage("2.5e-2"), "2.50%");
        assert_eq!(format_percentage(" 0.0268 "), "2.68%");

        assert_eq!(format_percentage("None"), "N/A");
        assert_eq!(format_percentage("NaN"), "N/A");
        assert_eq!(format_percentage("inf"), "N/A");
        assert_eq!(format_percentage("0.1%"), "N/A");
    }

    #[test]
    fn test_dollar_sign_edge_cases() {
        assert_eq!(add_dollar_sign("0"), "$0.00");
        assert_eq!(add_dollar_sign("199.62"), "$199.62");
        assert_eq!(add_dollar_sign("1234.567"), "$1,234.57");
        assert_eq!(add_dollar_sign("1234567.891"), "$1,234,567.89");
        assert_eq!(add_dollar_sign("-1234.5"), "$-1,234.50");
        assert_eq!(add_dollar_sign("999.999"), "$1,000.00");

        assert_eq!(add_dollar_sign("$12"), "N/A");
        assert_eq!(add_dollar_sign("1,234"), "N/A");
        assert_eq!(add_dollar_sign("-"), "N/A");
    }

    #[test]
    fn test_non_finite_and_underscored_input_is_not_available() {
        assert_eq!(add_dollar_sign("inf"), "N/A");
        assert_eq!(add_dollar_sign("-Infinity"), "N/A");
        assert_eq!(format_percentage("nan"), "N/A");
        assert_eq!(format_large_number("1_000"), "N/A");
        assert_eq!(add_dollar_sign("1_000.5"), "N/A");
    }

    #[test]
    fn test_format_decimal() {
        assert_eq!(format_decimal(0.0, 2, ','), "0.00");
        assert_eq!(format_decimal(113516.985, 3, ' '), "113 516.985");
        assert_eq!(format_decimal(1234.0, 0, ','), "1,234");
    }
}
