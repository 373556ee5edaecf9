pub const DEFAULT_WORDS_PER_MINUTE: u32 = 200;

/// 以空白切詞估算閱讀分鐘數，無條件進位，最少 1 分鐘
pub fn reading_time(text: &str, words_per_minute: u32) -> u32 {
    let words = text.split_whitespace().count() as u32;
    let wpm = words_per_minute.max(1);
    words.div_ceil(wpm).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_is_one_minute() {
        assert_eq!(reading_time("", DEFAULT_WORDS_PER_MINUTE), 1);
        assert_eq!(reading_time("   \n\t ", DEFAULT_WORDS_PER_MINUTE), 1);
    }

    #[test]
    fn test_rounds_up() {
        let text = vec!["word"; 201].join(" ");
        assert_eq!(reading_time(&text, DEFAULT_WORDS_PER_MINUTE), 2);

        let text = vec!["word"; 200].join("\n");
        assert_eq!(reading_time(&text, DEFAULT_WORDS_PER_MINUTE), 1);
    }

    #[test]
    fn test_custom_speed() {
        let text = vec!["word"; 500].join(" ");
        assert_eq!(reading_time(&text, 100), 5);
        // 0 wpm 視為 1
        assert_eq!(reading_time("a b c", 0), 3);
    }
}
