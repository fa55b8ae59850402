const SEPARATOR: &str = "..";

/// A character range written as `start..end`, `..end` or `start..`.
///
/// Only built through parsing, so `start <= end` always holds.
#[derive(Debug, Clone, PartialEq)]
pub struct CharRange {
    start: usize,
    end: Option<usize>,
}

impl TryFrom<&str> for CharRange {
    type Error = ();

    fn try_from(command: &str) -> Result<Self, Self::Error> {
        if let Some(stripped) = command.strip_prefix(SEPARATOR) {
            let end = stripped.parse::<usize>().map_err(|_| ())?;
            return Ok(CharRange {
                start: 0,
                end: Some(end),
            });
        }
        if let Some(stripped) = command.strip_suffix(SEPARATOR) {
            let start = stripped.parse::<usize>().map_err(|_| ())?;
            return Ok(CharRange { start, end: None });
        }
        match command.split_once(SEPARATOR) {
            Some((start, end)) => {
                let start = start.parse::<usize>().map_err(|_| ())?;
                let end = end.parse::<usize>().map_err(|_| ())?;
                CharRange::new(start, end)
            }
            None => Err(()),
        }
    }
}

impl CharRange {
    fn new(start: usize, end: usize) -> Result<CharRange, ()> {
        if start > end {
            return Err(());
        }
        Ok(CharRange {
            start,
            end: Some(end),
        })
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> Option<usize> {
        self.end
    }

    /// Number of characters covered, `None` when the range is open-ended.
    pub fn len(&self) -> Option<usize> {
        self.end.map(|end| end.saturating_sub(self.start))
    }

    pub fn is_empty(&self) -> bool {
        self.len() == Some(0)
    }
}
