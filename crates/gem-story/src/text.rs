//! Fixed-width text layout.

/// Greedily fill `text` into lines of at most `width` characters.
///
/// Runs of whitespace collapse to a single space. Words longer than `width`
/// are split across lines.
pub fn wrap(text: &str, width: usize) -> String {
    let width = width.max(1);
    let mut lines: Vec<String> = Vec::new();
    let mut line = String::new();
    let mut line_len = 0;

    for word in text.split_whitespace() {
        let mut chars: Vec<char> = word.chars().collect();

        // Overlong words get chopped, filling the current line first.
        while chars.len() > width {
            let room = if line_len == 0 { width } else { width.saturating_sub(line_len + 1) };
            if room == 0 {
                lines.push(std::mem::take(&mut line));
                line_len = 0;
                continue;
            }
            if line_len > 0 {
                line.push(' ');
            }
            line.extend(chars.drain(..room));
            lines.push(std::mem::take(&mut line));
            line_len = 0;
        }

        let word_len = chars.len();
        if line_len > 0 && line_len + 1 + word_len > width {
            lines.push(std::mem::take(&mut line));
            line_len = 0;
        }
        if line_len > 0 {
            line.push(' ');
            line_len += 1;
        }
        line.extend(chars);
        line_len += word_len;
    }

    if !line.is_empty() {
        lines.push(line);
    }
    lines.join("\n")
}

/// A title centered between two rules of `=`.
pub fn banner(title: &str, width: usize) -> String {
    let rule = "=".repeat(width);
    format!("{rule}\n{title:^width$}\n{rule}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_unchanged() {
        assert_eq!(wrap("Hello there.", 88), "Hello there.");
    }

    #[test]
    fn breaks_at_word_boundaries() {
        let wrapped = wrap("the quick brown fox jumps over the lazy dog", 15);
        assert_eq!(wrapped, "the quick brown\nfox jumps over\nthe lazy dog");
        assert!(wrapped.lines().all(|l| l.chars().count() <= 15));
    }

    #[test]
    fn collapses_whitespace() {
        assert_eq!(wrap("  a \n b\t\tc  ", 88), "a b c");
    }

    #[test]
    fn splits_overlong_words() {
        assert_eq!(wrap("abcdefghij", 4), "abcd\nefgh\nij");
        assert_eq!(wrap("xy abcdefgh", 4), "xy a\nbcde\nfgh");
    }

    #[test]
    fn empty_text() {
        assert_eq!(wrap("", 10), "");
        assert_eq!(wrap("   ", 10), "");
    }

    #[test]
    fn banner_centers_title() {
        let b = banner("GEM", 9);
        assert_eq!(b, "=========\n   GEM   \n=========");
    }
}
