/// Splits `s` at each occurrence of `delim`.
///
/// With `num` set to `Some(n)` (`n > 0`) exactly `n` fields are returned: the last one
/// keeps the unsplit remainder and missing fields are empty strings. Otherwise every
/// delimiter splits, and nothing is emitted once the input is exhausted, so a trailing
/// delimiter does not produce an empty last field.
pub fn split_string(s: &str, delim: &str, num: Option<usize>) -> Vec<String> {
    let limit = num.filter(|n| *n > 0);
    let mut fields = Vec::with_capacity(limit.unwrap_or_default());
    let mut start = 0;
    let mut i = 0;

    while limit.is_some_and(|n| i < n) || start < s.len() {
        if start < s.len() {
            let last_field = limit.is_some_and(|n| i + 1 == n);
            let end = if last_field || delim.is_empty() {
                s.len()
            } else {
                s[start..].find(delim).map_or(s.len(), |pos| start + pos)
            };
            fields.push(s[start..end].to_string());
            start = end + delim.len();
        } else {
            fields.push(String::new());
        }
        i += 1;
    }
    fields
}
