//! Drops boilerplate lines (section labels, notices, rules, footer) from the
//! extractor output so only the date header and menu rows remain.

/// Substrings that mark a line as template boilerplate rather than menu content.
pub const EXCLUDED_SUBSTRINGS: &[&str] = &[
    "조식",
    "중식",
    "석식",
    "조 식",
    "중 식",
    "석 식",
    "코너",
    "Take Out",
    "~",
    "※",
    "--",
    "식단",
    "주간메뉴",
    "판교세븐",
];

pub fn is_boilerplate_line(trimmed: &str) -> bool {
    if trimmed.is_empty() {
        return true;
    }
    EXCLUDED_SUBSTRINGS
        .iter()
        .any(|needle| trimmed.contains(needle))
}

/// Returns the trimmed content lines, in their original order.
pub fn filter_lines<S: AsRef<str>>(raw_lines: &[S]) -> Vec<&str> {
    raw_lines
        .iter()
        .map(|line| line.as_ref().trim())
        .filter(|trimmed| !is_boilerplate_line(trimmed))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_rules_and_labels() {
        let raw = [
            "11월 1일(월)  11월 2일(화)",
            "-------------------",
            "조식 Take Out 가능",
            "07:30~09:00",
            "※ 식단은 사정에 따라 변경될 수 있습니다",
            "A코너",
            "판교세븐 주간메뉴",
            "쌀밥  잡곡밥",
        ];
        assert_eq!(
            filter_lines(&raw),
            vec!["11월 1일(월)  11월 2일(화)", "쌀밥  잡곡밥"]
        );
    }

    #[test]
    fn drops_blank_lines_and_trims() {
        let raw = vec![
            String::new(),
            "   ".to_string(),
            "\t김치  김치 ".to_string(),
        ];
        assert_eq!(filter_lines(&raw), vec!["김치  김치"]);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let raw: [&str; 0] = [];
        assert!(filter_lines(&raw).is_empty());
    }

    #[test]
    fn output_never_contains_excluded_text() {
        let raw = [
            "중 식",
            "석식  11:30",
            "셀프코너 라면",
            "된장국  미역국",
            "-- end --",
            "Take Out Box",
        ];
        let filtered = filter_lines(&raw);
        assert!(filtered.len() <= raw.len());
        for line in &filtered {
            assert!(EXCLUDED_SUBSTRINGS.iter().all(|needle| !line.contains(needle)));
        }
        assert_eq!(filtered, vec!["된장국  미역국"]);
    }
}
