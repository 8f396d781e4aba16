/// Returns the byte offset of the start of the line containing `offset`.
#[must_use]
pub fn find_line_start(content: &str, offset: usize) -> usize {
    content[..offset].rfind('\n').map_or(0, |i| i + 1)
}

/// Returns the byte offset of the next newline after `offset`, or the end
/// of `content` if there is no trailing newline.
#[must_use]
pub fn find_line_end(content: &str, offset: usize) -> usize {
    content[offset..].find('\n').map_or(content.len(), |i| offset + i)
}

/// Returns the 1-based line number of the byte at `offset`.
///
/// Only `\n` counts as a separator; a `\r` before it belongs to the
/// preceding line's content.
#[must_use]
pub fn line_number_at(content: &str, offset: usize) -> usize {
    content.as_bytes()[..offset].iter().filter(|&&b| b == b'\n').count() + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_line_start_at_beginning_returns_zero() {
        assert_eq!(find_line_start("hello", 0), 0);
        assert_eq!(find_line_start("hello", 3), 0);
    }

    #[test]
    fn find_line_start_on_second_line_returns_position_after_newline() {
        let content = "line1\nline2";
        assert_eq!(find_line_start(content, 6), 6);
        assert_eq!(find_line_start(content, 8), 6);
    }

    #[test]
    fn find_line_start_at_newline_returns_start_of_current_line() {
        let content = "line1\nline2";
        assert_eq!(find_line_start(content, 5), 0);
    }

    #[test]
    fn find_line_start_handles_crlf() {
        let content = "line1\r\nline2";
        assert_eq!(find_line_start(content, 7), 7);
    }

    #[test]
    fn find_line_end_on_single_line_returns_content_length() {
        let content = "hello";
        assert_eq!(find_line_end(content, 0), 5);
        assert_eq!(find_line_end(content, 3), 5);
    }

    #[test]
    fn find_line_end_on_first_line_stops_at_newline() {
        let content = "line1\nline2";
        assert_eq!(find_line_end(content, 0), 5);
    }

    #[test]
    fn find_line_end_handles_empty_line() {
        let content = "line1\n\nline3";
        assert_eq!(find_line_end(content, 6), 6);
    }

    #[test]
    fn line_number_at_start_is_one() {
        assert_eq!(line_number_at("hello", 0), 1);
        assert_eq!(line_number_at("hello", 4), 1);
    }

    #[test]
    fn line_number_counts_newlines_before_offset() {
        let content = "one\ntwo\nthree";
        assert_eq!(line_number_at(content, 0), 1);
        assert_eq!(line_number_at(content, 4), 2);
        assert_eq!(line_number_at(content, 8), 3);
    }

    #[test]
    fn line_number_ignores_carriage_returns() {
        let content = "one\r\ntwo\r\nthree";
        assert_eq!(line_number_at(content, 5), 2);
        assert_eq!(line_number_at(content, 10), 3);
    }

    #[test]
    fn helpers_handle_empty_content() {
        assert_eq!(find_line_start("", 0), 0);
        assert_eq!(find_line_end("", 0), 0);
        assert_eq!(line_number_at("", 0), 1);
    }
}
