//! Three-column page header layout (left, center, right) within a fixed width.
//!
//! All lengths are measured in chars. When the three parts don't fit, the
//! sides are dropped in turn and finally the center is truncated.

/// Lay out `left`, `center` and `right` on one line of `cols` columns.
#[must_use]
pub fn top_title(left: &str, center: &str, right: &str, cols: usize) -> String {
    let left_len = left.chars().count();
    let center_len = center.chars().count();
    let right_len = right.chars().count();

    if left_len + center_len + right_len <= cols {
        let side = (cols - center_len) / 2;
        let left_pad = side.saturating_sub(left_len);
        let right_pad = side.saturating_sub(right_len);
        return format!(
            "{left}{}{center}{}{right}",
            " ".repeat(left_pad),
            " ".repeat(right_pad)
        );
    }

    if center_len + right_len <= cols {
        let gap = cols - center_len - right_len;
        return format!("{center}{}{right}", " ".repeat(gap));
    }

    if center_len <= cols {
        let side = " ".repeat((cols - center_len) / 2);
        return format!("{side}{center}{side}");
    }

    center.chars().take(cols).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_all_three_fit() {
        assert_eq!(
            top_title("left", "center", "right", 20),
            "left   center  right"
        );
    }

    #[test]
    fn test_drops_left_when_crowded() {
        assert_eq!(top_title("left", "center", "right", 14), "center   right");
    }

    #[test]
    fn test_center_only() {
        assert_eq!(top_title("left", "center", "right", 8), " center ");
    }

    #[test]
    fn test_truncates_center() {
        assert_eq!(top_title("left", "center", "right", 4), "cent");
    }

    #[test]
    fn test_long_left_clamps_padding() {
        assert_eq!(top_title("leftside", "c", "r", 12), "leftsidec    r");
    }

    #[test]
    fn test_counts_chars() {
        assert_eq!(top_title("ü", "ñ", "é", 5), "ü ñ é");
    }
}
