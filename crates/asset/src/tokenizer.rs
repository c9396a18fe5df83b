//! Delimiter-based field splitting for single OBJ records.

/// What happens to the cursor when the delimiter does not occur in the
/// remainder. The returned field is the whole remainder in both modes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MissingDelimiter {
    /// The remainder is consumed; the next call yields an empty field.
    #[default]
    Consume,
    /// The remainder is left in place, so the next call yields the same
    /// field again. Older loaders behaved this way because advancing past a
    /// not-found position wrapped back to the start of the remainder.
    KeepRemainder,
}

/// Split off the next field using [`MissingDelimiter::Consume`].
pub fn next_field<'a>(remainder: &'a str, delimiter: &str) -> (&'a str, &'a str) {
    next_field_with(remainder, delimiter, MissingDelimiter::Consume)
}

/// Split `remainder` at the first `delimiter`, returning `(field, rest)`.
/// `rest` starts strictly after the delimiter. `delimiter` must be non-empty.
pub fn next_field_with<'a>(
    remainder: &'a str,
    delimiter: &str,
    mode: MissingDelimiter,
) -> (&'a str, &'a str) {
    debug_assert!(!delimiter.is_empty(), "delimiter must be non-empty");
    match remainder.find(delimiter) {
        Some(at) => (&remainder[..at], &remainder[at + delimiter.len()..]),
        None => match mode {
            MissingDelimiter::Consume => (remainder, ""),
            MissingDelimiter::KeepRemainder => (remainder, remainder),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_at_first_delimiter() {
        assert_eq!(
            next_field("0.877342 0.081279 -0.329742", " "),
            ("0.877342", "0.081279 -0.329742")
        );
        assert_eq!(next_field("14/25/9 60/19/9", "/"), ("14", "25/9 60/19/9"));
    }

    #[test]
    fn multi_char_delimiter_is_skipped_entirely() {
        assert_eq!(next_field("a, b, c", ", "), ("a", "b, c"));
    }

    #[test]
    fn missing_delimiter_consumes_remainder() {
        assert_eq!(next_field("-0.329742", " "), ("-0.329742", ""));
        assert_eq!(next_field("", " "), ("", ""));
    }

    #[test]
    fn missing_delimiter_keeps_remainder() {
        let mode = MissingDelimiter::KeepRemainder;
        assert_eq!(next_field_with("3.75", " ", mode), ("3.75", "3.75"));
        assert_eq!(next_field_with("", " ", mode), ("", ""));
        // Found delimiters behave the same in both modes.
        assert_eq!(next_field_with("1 2", " ", mode), ("1", "2"));
    }

    #[test]
    fn field_value_does_not_depend_on_mode() {
        for input in ["0.25 0.5 3.75", "1/1/1", "7", "x y"] {
            for delimiter in [" ", "/"] {
                let consumed = next_field_with(input, delimiter, MissingDelimiter::Consume);
                let kept = next_field_with(input, delimiter, MissingDelimiter::KeepRemainder);
                assert_eq!(consumed.0, kept.0);
            }
        }
    }

    #[test]
    fn walking_a_record_reads_each_field() {
        let (x, rest) = next_field("0.25 0.5 3.75", " ");
        let (y, rest) = next_field(rest, " ");
        let (z, rest) = next_field(rest, " ");
        assert_eq!((x, y, z, rest), ("0.25", "0.5", "3.75", ""));
    }

    #[test]
    fn adjacent_delimiters_yield_empty_field() {
        assert_eq!(next_field("5//1", "/"), ("5", "/1"));
        assert_eq!(next_field("/1", "/"), ("", "1"));
    }
}
