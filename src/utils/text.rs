use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Compact human form for monetary totals: 12_345_678.0 -> "12.35M".
pub fn format_amount(value: f64) -> String {
    let magnitude = value.abs();
    if magnitude >= 1e9 {
        format!("{:.2}B", value / 1e9)
    } else if magnitude >= 1e6 {
        format!("{:.2}M", value / 1e6)
    } else if magnitude >= 1e3 {
        format!("{:.2}K", value / 1e3)
    } else {
        format!("{value:.2}")
    }
}

/// Thousands-separated integer counts: 1234567 -> "1,234,567".
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Clip a label to a display-cell budget, appending an ellipsis when it was
/// shortened. Width-aware so wide characters do not overflow chart columns.
pub fn truncate_label(label: &str, max_width: usize) -> String {
    if UnicodeWidthStr::width(label) <= max_width {
        return label.to_string();
    }

    let mut out = String::new();
    let mut used = 0usize;
    for ch in label.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > max_width.saturating_sub(1) {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amounts_scale_with_magnitude() {
        assert_eq!(format_amount(950.0), "950.00");
        assert_eq!(format_amount(12_500.0), "12.50K");
        assert_eq!(format_amount(3_400_000.0), "3.40M");
        assert_eq!(format_amount(2_100_000_000.0), "2.10B");
    }

    #[test]
    fn counts_get_thousands_separators() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1_234_567), "1,234,567");
    }

    #[test]
    fn long_labels_are_clipped_with_ellipsis() {
        assert_eq!(truncate_label("Karnataka", 20), "Karnataka");
        assert_eq!(truncate_label("Andaman & Nicobar Islands", 10), "Andaman &…");
    }
}
