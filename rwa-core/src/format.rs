//! Number and string formatting shared by every page.

/// `1234567.891` -> `1,234,567.891`. At most three fraction digits, trailing
/// zeros dropped.
pub fn grouped(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    let fixed = format!("{:.3}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut out = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
    if value < 0.0 && (int_part != "0" || !frac_part.is_empty()) {
        out.push('-');
    }
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

/// Short dollar amount for cards: `$2.50M`, `$450K`, `$980`.
pub fn compact_usd(value: f64) -> String {
    // Tiers compare the rounded figure so 999,999 never prints as `$1000K`.
    let magnitude = value.abs();
    if (magnitude / 1_000.0).round() >= 1_000.0 {
        format!("${:.2}M", value / 1_000_000.0)
    } else if (magnitude * 1_000.0).round() / 1_000.0 >= 1_000.0 {
        format!("${:.0}K", value / 1_000.0)
    } else {
        format!("${}", grouped(value))
    }
}

/// `value` in millions with `digits` decimals and an `M` suffix.
pub fn millions(value: f64, digits: usize) -> String {
    format!("{:.*}M", digits, value / 1_000_000.0)
}

pub fn percent_fixed(value: f64, digits: usize) -> String {
    format!("{:.*}%", digits, value)
}

/// `+1,250 cUSD` / `-500 cUSD`.
pub fn signed_amount(amount: f64, currency: &str) -> String {
    let sign = if amount > 0.0 {
        "+"
    } else if amount < 0.0 {
        "-"
    } else {
        ""
    };
    format!("{sign}{} {currency}", grouped(amount.abs()))
}

/// `0x1234ab...9f8e7d`. Hashes too short to shorten come back unchanged.
pub fn truncate_hash(hash: &str) -> String {
    let chars: Vec<char> = hash.chars().collect();
    if chars.len() <= 14 {
        return hash.to_string();
    }
    let head: String = chars[..8].iter().collect();
    let tail: String = chars[chars.len() - 6..].iter().collect();
    format!("{head}...{tail}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grouping() {
        assert_eq!(grouped(0.0), "0");
        assert_eq!(grouped(999.0), "999");
        assert_eq!(grouped(1000.0), "1,000");
        assert_eq!(grouped(1234567.891), "1,234,567.891");
        assert_eq!(grouped(2500.5), "2,500.5");
        assert_eq!(grouped(-1250.0), "-1,250");
        assert_eq!(grouped(0.00001), "0");
    }

    #[test]
    fn compact() {
        assert_eq!(compact_usd(2_500_000.0), "$2.50M");
        assert_eq!(compact_usd(450_000.0), "$450K");
        assert_eq!(compact_usd(980.0), "$980");
        assert_eq!(millions(12_500_000.0, 1), "12.5M");
    }

    #[test]
    fn compact_promotes_values_that_round_up() {
        assert_eq!(compact_usd(999_999.0), "$1.00M");
        assert_eq!(compact_usd(999_500.0), "$1.00M");
        assert_eq!(compact_usd(999_499.0), "$999K");
        assert_eq!(compact_usd(999.9999), "$1K");
        assert_eq!(compact_usd(-999_999.0), "$-1.00M");
    }

    #[test]
    fn signs_and_hashes() {
        assert_eq!(signed_amount(1250.0, "cUSD"), "+1,250 cUSD");
        assert_eq!(signed_amount(-500.0, "cUSD"), "-500 cUSD");
        assert_eq!(signed_amount(0.0, "cUSD"), "0 cUSD");
        assert_eq!(
            truncate_hash("0x1a2b3c4d5e6f7890abcdef1234567890"),
            "0x1a2b3c...567890"
        );
        assert_eq!(truncate_hash("0xabc"), "0xabc");
        assert_eq!(percent_fixed(79.3651, 2), "79.37%");
    }
}
