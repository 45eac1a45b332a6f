/// Formats a currency amount with space-separated thousands ("1 250 000").
/// `None` (an unbounded cap) renders as `unbounded`.
pub fn format_balance(amount: Option<u64>, unbounded: &str) -> String {
    let Some(amount) = amount else {
        return unbounded.to_string();
    };
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(' ');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_balance_grouping() {
        assert_eq!(format_balance(Some(0), "∞"), "0");
        assert_eq!(format_balance(Some(500), "∞"), "500");
        assert_eq!(format_balance(Some(7_500), "∞"), "7 500");
        assert_eq!(format_balance(Some(25_000_000), "∞"), "25 000 000");
    }

    #[test]
    fn test_format_balance_unbounded() {
        assert_eq!(format_balance(None, "∞"), "∞");
    }
}
