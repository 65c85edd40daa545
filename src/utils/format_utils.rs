/// `31842967` -> `31,842,967`
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

/// One decimal, like the health gauge: `98.94` -> `98.9%`
pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_separators() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1_000), "1,000");
        assert_eq!(format_thousands(4_298), "4,298");
        assert_eq!(format_thousands(31_842_967), "31,842,967");
        assert_eq!(format_thousands(100_000_000), "100,000,000");
    }

    #[test]
    fn percent_has_one_decimal() {
        assert_eq!(format_percent(98.94), "98.9%");
        assert_eq!(format_percent(97.5), "97.5%");
    }
}
