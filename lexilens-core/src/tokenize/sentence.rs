//! Rule-based English sentence splitting
//!
//! A sentence ends at a run of terminators (`.`, `!`, `?`) optionally
//! followed by closing quotes or brackets, when the run is followed by
//! whitespace or the end of the text. Periods after known abbreviations and
//! single-letter initials are not boundaries, and no boundary is placed when
//! the next word starts with a lower-case letter.

use std::collections::HashSet;
use std::ops::Range;

/// Characters that may trail a terminator and still belong to the sentence
const CLOSING: &[char] = &['"', '\'', '\u{201D}', '\u{2019}', ')', ']', '}', '\u{00BB}'];

/// Characters that may open a word before an abbreviation
const OPENING: &[char] = &['"', '\'', '\u{201C}', '\u{2018}', '(', '[', '{', '\u{00AB}'];

fn is_terminator(ch: char) -> bool {
    matches!(ch, '.' | '!' | '?')
}

/// Default English abbreviations (lower-case, without the final period)
fn default_abbreviations() -> HashSet<String> {
    [
        // Academic and personal titles
        "dr", "prof", "jr", "sr", "mr", "mrs", "ms", "rev", "fr", "ph.d", "m.d", "b.a", "m.a",
        "b.s", "m.s", // Geographic
        "st", "ave", "blvd", "rd", "ln", "apt", "bldg", "fl", "mt", "ft",
        // Business
        "corp", "inc", "ltd", "llc", "co", "assn", "org", "dept",
        // Common
        "etc", "vs", "e.g", "i.e", "cf", "viz", "approx", "est", "al", "no", "vol", "pp", "ch",
        // Months and days
        "jan", "feb", "mar", "apr", "jun", "jul", "aug", "sep", "sept", "oct", "nov", "dec",
        "mon", "tue", "wed", "thu", "fri", "sat", "sun",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// English sentence splitter
#[derive(Debug, Clone)]
pub struct SentenceSplitter {
    abbreviations: HashSet<String>,
}

impl Default for SentenceSplitter {
    fn default() -> Self {
        Self::new()
    }
}

impl SentenceSplitter {
    /// Create a splitter with the built-in English abbreviation list
    pub fn new() -> Self {
        Self {
            abbreviations: default_abbreviations(),
        }
    }

    /// Create a splitter with a custom abbreviation list
    ///
    /// Entries are matched case-insensitively and without their final period.
    pub fn with_abbreviations<I, S>(abbreviations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            abbreviations: abbreviations
                .into_iter()
                .map(|a| a.as_ref().trim_end_matches('.').to_lowercase())
                .collect(),
        }
    }

    /// Add abbreviations to the splitter
    pub fn add_abbreviations(&mut self, abbreviations: &[&str]) {
        for abbr in abbreviations {
            self.abbreviations
                .insert(abbr.trim_end_matches('.').to_lowercase());
        }
    }

    /// Split text into trimmed, non-empty sentences
    pub fn split<'a>(&self, text: &'a str) -> Vec<&'a str> {
        self.spans(text)
            .into_iter()
            .map(|range| &text[range])
            .collect()
    }

    /// Byte ranges of the trimmed sentences in `text`
    pub fn spans(&self, text: &str) -> Vec<Range<usize>> {
        let chars: Vec<(usize, char)> = text.char_indices().collect();
        let mut spans = Vec::new();
        let mut start = 0;
        let mut i = 0;

        while i < chars.len() {
            let (_, ch) = chars[i];
            if !is_terminator(ch) {
                i += 1;
                continue;
            }

            let run_start = i;
            let mut end = i;
            while end + 1 < chars.len() && is_terminator(chars[end + 1].1) {
                end += 1;
            }
            let run_end = end;
            while end + 1 < chars.len() && CLOSING.contains(&chars[end + 1].1) {
                end += 1;
            }

            let followed_by_space = end + 1 == chars.len() || chars[end + 1].1.is_whitespace();
            if followed_by_space && self.is_boundary(text, &chars, run_start, run_end, end) {
                let byte_end = chars[end].0 + chars[end].1.len_utf8();
                push_trimmed(text, start..byte_end, &mut spans);
                start = byte_end;
            }

            i = end + 1;
        }

        push_trimmed(text, start..text.len(), &mut spans);
        spans
    }

    fn is_boundary(
        &self,
        text: &str,
        chars: &[(usize, char)],
        run_start: usize,
        run_end: usize,
        end: usize,
    ) -> bool {
        if let Some(next) = chars[end + 1..]
            .iter()
            .map(|&(_, c)| c)
            .find(|c| !c.is_whitespace())
        {
            if next.is_lowercase() {
                return false;
            }
        }

        // Only a lone period can close an abbreviation
        if run_start != run_end || chars[run_start].1 != '.' {
            return true;
        }

        let period_pos = chars[run_start].0;
        let word = preceding_word(text, period_pos);
        !self.is_abbreviation(word)
    }

    fn is_abbreviation(&self, word: &str) -> bool {
        if word.is_empty() {
            return false;
        }

        // Single-letter initials: "J. R. R. Tolkien"
        let mut letters = word.chars();
        if let (Some(first), None) = (letters.next(), letters.next()) {
            return first.is_alphabetic();
        }

        let lower = word.to_lowercase();
        if self.abbreviations.contains(&lower) {
            return true;
        }

        // Dotted acronyms: "U.S", "a.m"
        lower.contains('.')
            && lower
                .split('.')
                .all(|part| part.chars().count() == 1 && part.chars().all(char::is_alphabetic))
    }
}

/// Word immediately before byte position `pos`, stripped of opening punctuation
fn preceding_word(text: &str, pos: usize) -> &str {
    let before = &text[..pos];
    let start = before
        .rfind(|c: char| c.is_whitespace())
        .map(|p| p + before[p..].chars().next().map_or(1, char::len_utf8))
        .unwrap_or(0);
    before[start..].trim_start_matches(OPENING)
}

fn push_trimmed(text: &str, range: Range<usize>, spans: &mut Vec<Range<usize>>) {
    let slice = &text[range.clone()];
    let trimmed_start = slice.len() - slice.trim_start().len();
    let trimmed = slice.trim();
    if !trimmed.is_empty() {
        let begin = range.start + trimmed_start;
        spans.push(begin..begin + trimmed.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_sentences() {
        let splitter = SentenceSplitter::new();
        let sentences = splitter.split("Hello world. This is a test.");
        assert_eq!(sentences, vec!["Hello world.", "This is a test."]);
    }

    #[test]
    fn test_question_and_exclamation() {
        let splitter = SentenceSplitter::new();
        let sentences = splitter.split("Is it raining? Yes! Bring an umbrella.");
        assert_eq!(sentences, vec!["Is it raining?", "Yes!", "Bring an umbrella."]);
    }

    #[test]
    fn test_abbreviation_is_not_boundary() {
        let splitter = SentenceSplitter::new();
        let sentences = splitter.split("Dr. Smith went to the store. He bought some milk.");
        assert_eq!(
            sentences,
            vec!["Dr. Smith went to the store.", "He bought some milk."]
        );
    }

    #[test]
    fn test_initials_and_acronyms() {
        let splitter = SentenceSplitter::new();
        let sentences = splitter.split("J. R. R. Tolkien lived in the U.S. for a while. Not really.");
        assert_eq!(
            sentences,
            vec!["J. R. R. Tolkien lived in the U.S. for a while.", "Not really."]
        );
    }

    #[test]
    fn test_closing_quote_stays_with_sentence() {
        let splitter = SentenceSplitter::new();
        let sentences = splitter.split("She said \"Stop.\" Then she left.");
        assert_eq!(sentences, vec!["She said \"Stop.\"", "Then she left."]);
    }

    #[test]
    fn test_lowercase_continuation() {
        let splitter = SentenceSplitter::new();
        let sentences = splitter.split("\"Wow!\" she said. It was late.");
        assert_eq!(sentences, vec!["\"Wow!\" she said.", "It was late."]);
    }

    #[test]
    fn test_decimal_numbers() {
        let splitter = SentenceSplitter::new();
        let sentences = splitter.split("Pi is 3.14 roughly. Right?");
        assert_eq!(sentences, vec!["Pi is 3.14 roughly.", "Right?"]);
    }

    #[test]
    fn test_no_terminator() {
        let splitter = SentenceSplitter::new();
        assert_eq!(splitter.split("  no ending here  "), vec!["no ending here"]);
    }

    #[test]
    fn test_empty_and_whitespace() {
        let splitter = SentenceSplitter::new();
        assert!(splitter.split("").is_empty());
        assert!(splitter.split(" \n\t ").is_empty());
    }

    #[test]
    fn test_spans_point_into_text() {
        let splitter = SentenceSplitter::new();
        let text = "  First one.   Second one!  ";
        let spans = splitter.spans(text);
        assert_eq!(spans.len(), 2);
        assert_eq!(&text[spans[0].clone()], "First one.");
        assert_eq!(&text[spans[1].clone()], "Second one!");
    }

    #[test]
    fn test_custom_abbreviations() {
        let mut splitter = SentenceSplitter::with_abbreviations(["Approx."]);
        assert_eq!(splitter.split("Approx. Ten people came.").len(), 1);
        assert_eq!(splitter.split("Mr. Brown came.").len(), 2);

        splitter.add_abbreviations(&["Mr"]);
        assert_eq!(splitter.split("Mr. Brown came.").len(), 1);
    }

    #[test]
    fn test_multibyte_text() {
        let splitter = SentenceSplitter::new();
        let sentences = splitter.split("Café au lait… Très bon! Ça va.");
        assert_eq!(sentences, vec!["Café au lait… Très bon!", "Ça va."]);
    }
}
