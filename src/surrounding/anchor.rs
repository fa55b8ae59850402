//! Recovers the anchor of a selection from the text surrounding the cursor.
//!
//! Input methods are told the cursor position and the selected text, but not on which
//! side of the cursor the selection lies. The anchor is found by checking whether the
//! selected text starts at the cursor (the selection extends forward) and, failing
//! that, whether it ends at the cursor (the selection extends backward).

use crate::text::TextTool;
use log::debug;

/// Succeeds when `surrounding_text` holds `selected_text` from `cursor_pos` onwards,
/// returning the position just past the selection.
pub(crate) fn search_anchor_pos_forward(
    surrounding_text: &str,
    selected_text: &str,
    selected_chars_len: u32,
    cursor_pos: u32,
) -> Option<u32> {
    let text = TextTool::new(surrounding_text);
    if text.char_len() < cursor_pos as usize {
        return None;
    }
    let tail = text.tail(cursor_pos as usize)?;
    if !tail.starts_with(selected_text) {
        return None;
    }
    cursor_pos.checked_add(selected_chars_len)
}

/// Succeeds when `surrounding_text` holds `selected_text` right before `cursor_pos`,
/// returning the position where the selection starts.
pub(crate) fn search_anchor_pos_backward(
    surrounding_text: &str,
    selected_text: &str,
    selected_chars_len: u32,
    cursor_pos: u32,
) -> Option<u32> {
    let skip_count = cursor_pos.checked_sub(selected_chars_len)?;
    let tail = TextTool::new(surrounding_text).tail(skip_count as usize)?;
    if !tail.starts_with(selected_text) {
        return None;
    }
    Some(skip_count)
}

/// Character offset of the selection end opposite to `cursor_pos`.
///
/// Only the start of the text following the candidate anchor is compared, so trailing
/// context after the selection is ignored. When both directions match, the forward
/// one wins.
pub fn resolve_anchor(surrounding_text: &str, selected_text: &str, cursor_pos: u32) -> Option<u32> {
    if surrounding_text.is_empty() || selected_text.is_empty() {
        return None;
    }
    let selected_chars_len = u32::try_from(TextTool::new(selected_text).char_len()).ok()?;

    let anchor = search_anchor_pos_forward(
        surrounding_text,
        selected_text,
        selected_chars_len,
        cursor_pos,
    )
    .or_else(|| {
        search_anchor_pos_backward(
            surrounding_text,
            selected_text,
            selected_chars_len,
            cursor_pos,
        )
    });
    debug!("anchor for cursor {cursor_pos} and {selected_chars_len} selected chars: {anchor:?}");
    anchor
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", "x", 0)]
    #[case("hello", "", 2)]
    #[case("", "", 0)]
    fn test_empty_inputs(#[case] surrounding: &str, #[case] selected: &str, #[case] cursor: u32) {
        assert_eq!(resolve_anchor(surrounding, selected, cursor), None);
    }

    #[test]
    fn test_forward() {
        assert_eq!(resolve_anchor("helloworld", "world", 5), Some(10));
    }

    #[test]
    fn test_backward() {
        assert_eq!(resolve_anchor("helloworld", "hello", 5), Some(0));
    }

    #[test]
    fn test_not_found() {
        assert_eq!(resolve_anchor("helloworld", "xyz", 5), None);
    }

    #[test]
    fn test_forward_takes_precedence() {
        // "ab" both precedes and follows the cursor
        assert_eq!(resolve_anchor("abab", "ab", 2), Some(4));
        assert_eq!(
            search_anchor_pos_backward("abab", "ab", 2, 2),
            Some(0),
            "the backward hypothesis matches too"
        );
    }

    #[test]
    fn test_trailing_context_is_ignored() {
        assert_eq!(resolve_anchor("hello world, again", "world", 6), Some(11));
        assert_eq!(resolve_anchor("say hello world", "hello", 9), Some(4));
    }

    #[rstest]
    #[case("こんにちは世界", "世界", 5, Some(7))]
    #[case("こんにちは世界", "こんにちは", 5, Some(0))]
    #[case("漢字かなカナ", "かな", 2, Some(4))]
    #[case("漢字かなカナ", "かな", 4, Some(2))]
    #[case("aあbいc", "bい", 2, Some(4))]
    #[case("こんにちは世界", "世界", 6, None)]
    fn test_multibyte_offsets_count_characters(
        #[case] surrounding: &str,
        #[case] selected: &str,
        #[case] cursor: u32,
        #[case] expected: Option<u32>,
    ) {
        assert_eq!(resolve_anchor(surrounding, selected, cursor), expected);
    }

    #[rstest]
    #[case("hello", "lo", 5, Some(3))]
    #[case("hello", "he", 0, Some(2))]
    #[case("hello", "hello", 6, None)]
    #[case("hello", "o", 100, None)]
    #[case("hi", "hello", 0, None)]
    #[case("hi", "hello", 2, None)]
    fn test_cursor_at_and_beyond_bounds(
        #[case] surrounding: &str,
        #[case] selected: &str,
        #[case] cursor: u32,
        #[case] expected: Option<u32>,
    ) {
        assert_eq!(resolve_anchor(surrounding, selected, cursor), expected);
    }

    #[test]
    fn test_forward_rejects_cursor_outside_text() {
        assert_eq!(search_anchor_pos_forward("abc", "c", 1, 4), None);
        assert_eq!(search_anchor_pos_forward("abc", "c", 1, 2), Some(3));
    }

    #[test]
    fn test_forward_overflow_is_not_found() {
        assert_eq!(search_anchor_pos_forward("ab", "b", u32::MAX, 1), None);
    }

    #[test]
    fn test_backward_selection_longer_than_cursor() {
        assert_eq!(search_anchor_pos_backward("hello", "hel", 3, 2), None);
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let first = resolve_anchor("かなかな", "かな", 2);
        for _ in 0..10 {
            assert_eq!(resolve_anchor("かなかな", "かな", 2), first);
        }
        assert_eq!(first, Some(4));
    }
}
