/// Character-offset view over a UTF-8 string.
///
/// Every position accepted or returned here counts Unicode scalar values,
/// byte offsets only appear as the result of [`TextTool::byte_offset`].
#[derive(Debug, Clone, Copy)]
pub struct TextTool<'a> {
    text: &'a str,
}

impl<'a> TextTool<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }

    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Byte offset of the character at index `n`.
    ///
    /// `n == char_len()` is the one-past-the-end position and returns the byte length.
    pub fn byte_offset(&self, n: usize) -> Option<usize> {
        self.text
            .char_indices()
            .map(|(i, _)| i)
            .chain(std::iter::once(self.text.len()))
            .nth(n)
    }

    /// The suffix starting at character `n`.
    pub fn tail(&self, n: usize) -> Option<&'a str> {
        self.byte_offset(n).map(|offset| &self.text[offset..])
    }

    /// Characters `[start, start + len)`, clamped to the text.
    pub fn substr(&self, start: usize, len: usize) -> &'a str {
        let Some(tail) = self.tail(start) else {
            return "";
        };
        let end = TextTool::new(tail).byte_offset(len).unwrap_or(tail.len());
        &tail[..end]
    }
}

pub fn utf8_string_length(s: &str) -> usize {
    TextTool::new(s).char_len()
}

pub fn utf8_string_substr(s: &str, start: usize, len: usize) -> String {
    TextTool::new(s).substr(start, len).to_string()
}
