pub struct StringUtils {}

impl StringUtils {
    /// Fixed-precision number with `,` thousands separators, e.g. `7,215.3`.
    pub fn group_thousands(value: f64, decimals: usize) -> String {
        let formatted = format!("{:.*}", decimals, value.abs());
        let (int_part, frac_part) = match formatted.split_once('.') {
            Some((int_part, frac_part)) => (int_part, Some(frac_part)),
            None => (formatted.as_str(), None),
        };

        let mut grouped = String::with_capacity(formatted.len() + int_part.len() / 3);
        for (i, ch) in int_part.chars().enumerate() {
            if i > 0 && (int_part.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }

        if let Some(frac) = frac_part {
            grouped.push('.');
            grouped.push_str(frac);
        }

        if value.is_sign_negative() && value != 0.0 {
            format!("-{}", grouped)
        } else {
            grouped
        }
    }

    /// Rounded to `decimals` places with trailing fractional zeros dropped,
    /// e.g. `13.5`, `0.9`, `104321`.
    pub fn bare_number(value: f64, decimals: usize) -> String {
        Self::trim_fraction(format!("{:.*}", decimals, value))
    }

    /// [`StringUtils::group_thousands`] without trailing fractional zeros,
    /// e.g. `7,215` and `7,215.3`.
    pub fn group_thousands_bare(value: f64, decimals: usize) -> String {
        Self::trim_fraction(Self::group_thousands(value, decimals))
    }

    fn trim_fraction(formatted: String) -> String {
        if !formatted.contains('.') {
            return formatted;
        }
        let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
        if trimmed == "-0" {
            "0".to_string()
        } else {
            trimmed.to_string()
        }
    }

    pub fn maybe_pluralize((singular, plural): (&str, &str), qty: usize) -> String {
        (if qty == 1 { singular } else { plural }).to_string()
    }

    pub fn maybe_pluralize_count(count: usize, (singular, plural): (&str, &str)) -> String {
        format!("{} {}", count, Self::maybe_pluralize((singular, plural), count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(StringUtils::group_thousands(11042.0, 0), "11,042");
        assert_eq!(StringUtils::group_thousands(7215.34, 1), "7,215.3");
        assert_eq!(StringUtils::group_thousands(999.0, 0), "999");
        assert_eq!(StringUtils::group_thousands(1_234_567.0, 0), "1,234,567");
        assert_eq!(StringUtils::group_thousands(-4500.5, 1), "-4,500.5");
    }

    #[test]
    fn test_bare_number_drops_trailing_zeros() {
        assert_eq!(StringUtils::bare_number(13.5, 2), "13.5");
        assert_eq!(StringUtils::bare_number(13.0, 2), "13");
        assert_eq!(StringUtils::bare_number(0.9, 3), "0.9");
        assert_eq!(StringUtils::bare_number(104_321.0, 0), "104321");
        assert_eq!(StringUtils::bare_number(12.345, 2), "12.35");
        assert_eq!(StringUtils::bare_number(-0.001, 2), "0");
    }

    #[test]
    fn test_group_thousands_bare() {
        assert_eq!(StringUtils::group_thousands_bare(7215.0, 1), "7,215");
        assert_eq!(StringUtils::group_thousands_bare(7215.3, 1), "7,215.3");
        assert_eq!(StringUtils::group_thousands_bare(11_000.0, 0), "11,000");
    }

    #[test]
    fn test_pluralize() {
        assert_eq!(StringUtils::maybe_pluralize_count(1, ("row", "rows")), "1 row");
        assert_eq!(StringUtils::maybe_pluralize_count(20, ("row", "rows")), "20 rows");
    }
}
