//! Tests for the dashboard module.

#[cfg(test)]
mod tests {
    use stockpile::Verdict;

    use crate::dashboard::types::{
        format_count, format_quantity, format_yen, rgb, verdict_color, BAD_COLOR, OK_COLOR,
        WARN_COLOR,
    };

    #[test]
    fn test_format_count_separators() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1_000), "1,000");
        assert_eq!(format_count(3_858), "3,858");
        assert_eq!(format_count(1_836_000), "1,836,000");
    }

    #[test]
    fn test_format_quantity_rounds_and_clamps() {
        assert_eq!(format_quantity(428.6), "429");
        assert_eq!(format_quantity(-3.0), "0");
        assert_eq!(format_quantity(12_345.4), "12,345");
    }

    #[test]
    fn test_format_yen() {
        assert_eq!(format_yen(1_836_000), "¥1,836,000");
    }

    #[test]
    fn test_verdict_colors_are_distinct() {
        assert_eq!(verdict_color(Verdict::Satisfied), OK_COLOR);
        assert_eq!(verdict_color(Verdict::Partial), WARN_COLOR);
        assert_eq!(verdict_color(Verdict::Unsatisfied), BAD_COLOR);
    }

    #[test]
    fn test_rgb_conversion() {
        let c = rgb((0x3b, 0x82, 0xf6));
        assert_eq!((c.r(), c.g(), c.b()), (0x3b, 0x82, 0xf6));
    }
}
