//! Treebank-style word tokenization
//!
//! Text is first split into sentences, then each sentence is rewritten by an
//! ordered list of regex substitutions that pad punctuation, quotes and
//! clitics with spaces before splitting on whitespace. The rule order follows
//! the Penn Treebank conventions: only the final period of a sentence is
//! split off, `,` and `:` are split unless followed by a digit, and
//! contractions such as `don't` become `do` + `n't`.

use super::sentence::SentenceSplitter;
use regex::Regex;
use std::sync::OnceLock;

struct Rule {
    pattern: Regex,
    replacement: &'static str,
}

struct RuleSet {
    starting_quotes: Vec<Rule>,
    punctuation: Vec<Rule>,
    parens_brackets: Rule,
    double_dashes: Rule,
    ending_quotes: Vec<Rule>,
    contractions: Vec<Rule>,
}

static RULES: OnceLock<RuleSet> = OnceLock::new();

fn rule(pattern: &str, replacement: &'static str) -> Rule {
    Rule {
        // Patterns are compile-time constants covered by the tests below
        pattern: Regex::new(pattern).unwrap_or_else(|e| panic!("invalid rule {pattern}: {e}")),
        replacement,
    }
}

fn rules() -> &'static RuleSet {
    RULES.get_or_init(|| RuleSet {
        starting_quotes: vec![
            rule(r"([«“‘„]|`+)", " ${1} "),
            rule(r#"^""#, "``"),
            rule(r"(``)", " ${1} "),
            rule(r#"([ (\[{<])("|'')"#, "${1} `` "),
        ],
        punctuation: vec![
            rule(r#"([^.])(\.)([\])}>"']*)\s*$"#, "${1} ${2} ${3} "),
            rule(r"([:,])([^\d])", " ${1} ${2}"),
            rule(r"([:,])$", " ${1} "),
            rule(r"\.{2,}", " ${0} "),
            rule(r"[;@#$%&]", " ${0} "),
            rule(r#"([^.])(\.)([\])}>"']*)\s*$"#, "${1} ${2}${3} "),
            rule(r"[?!]", " ${0} "),
            rule(r"([^'])' ", "${1} ' "),
            rule(r"\*", " ${0} "),
        ],
        parens_brackets: rule(r"[\]\[(){}<>]", " ${0} "),
        double_dashes: rule(r"--", " -- "),
        ending_quotes: vec![
            rule(r"([»”’])", " ${1} "),
            rule(r"''", " '' "),
            rule(r#"""#, " '' "),
            rule(r"([^' ])('[sS]|'[mM]|'[dD]|') ", "${1} ${2} "),
            rule(r"([^' ])('ll|'LL|'re|'RE|'ve|'VE|n't|N'T) ", "${1} ${2} "),
        ],
        contractions: vec![
            rule(r"(?i)\b(can)(not)\b", " ${1} ${2} "),
            rule(r"(?i)\b(d)('ye)\b", " ${1} ${2} "),
            rule(r"(?i)\b(gim)(me)\b", " ${1} ${2} "),
            rule(r"(?i)\b(gon)(na)\b", " ${1} ${2} "),
            rule(r"(?i)\b(got)(ta)\b", " ${1} ${2} "),
            rule(r"(?i)\b(lem)(me)\b", " ${1} ${2} "),
            rule(r"(?i)\b(more)('n)\b", " ${1} ${2} "),
            rule(r"(?i)\b(wan)(na)(\s)", " ${1} ${2} ${3}"),
            rule(r"(?i) ('t)(is)\b", " ${1} ${2} "),
            rule(r"(?i) ('t)(was)\b", " ${1} ${2} "),
        ],
    })
}

fn apply(rule: &Rule, text: String) -> String {
    rule.pattern
        .replace_all(&text, rule.replacement)
        .into_owned()
}

/// Word tokenizer with Treebank conventions
#[derive(Debug, Clone, Default)]
pub struct WordTokenizer {
    splitter: SentenceSplitter,
}

impl WordTokenizer {
    /// Create a tokenizer with the default sentence splitter
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tokenizer that splits sentences with `splitter`
    pub fn with_splitter(splitter: SentenceSplitter) -> Self {
        Self { splitter }
    }

    /// Sentence splitter used before word tokenization
    pub fn splitter(&self) -> &SentenceSplitter {
        &self.splitter
    }

    /// Tokenize a whole passage
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        self.splitter
            .split(text)
            .into_iter()
            .flat_map(tokenize_sentence)
            .collect()
    }
}

/// Tokenize a single sentence
pub fn tokenize_sentence(sentence: &str) -> Vec<String> {
    let rules = rules();
    let mut text = sentence.to_string();

    for rule in &rules.starting_quotes {
        text = apply(rule, text);
    }
    for rule in &rules.punctuation {
        text = apply(rule, text);
    }
    text = apply(&rules.parens_brackets, text);
    text = apply(&rules.double_dashes, text);

    text = format!(" {text} ");
    for rule in &rules.ending_quotes {
        text = apply(rule, text);
    }
    for rule in &rules.contractions {
        text = apply(rule, text);
    }

    text.split_whitespace().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(text: &str) -> Vec<String> {
        WordTokenizer::new().tokenize(text)
    }

    #[test]
    fn test_hello_world() {
        assert_eq!(tokens("Hello, world!"), vec!["Hello", ",", "world", "!"]);
    }

    #[test]
    fn test_final_period_split_only_at_sentence_end() {
        assert_eq!(
            tokens("Dr. Smith arrived. He sat."),
            vec!["Dr.", "Smith", "arrived", ".", "He", "sat", "."]
        );
    }

    #[test]
    fn test_contractions() {
        assert_eq!(
            tokens("I don't think they'll come."),
            vec!["I", "do", "n't", "think", "they", "'ll", "come", "."]
        );
        assert_eq!(tokens("You cannot go"), vec!["You", "can", "not", "go"]);
        assert_eq!(tokens("It's mine"), vec!["It", "'s", "mine"]);
    }

    #[test]
    fn test_quotes() {
        assert_eq!(
            tokens("\"Stop,\" he said."),
            vec!["``", "Stop", ",", "''", "he", "said", "."]
        );
    }

    #[test]
    fn test_comma_before_digit_is_kept() {
        assert_eq!(tokens("It cost 1,000 dollars"), vec!["It", "cost", "1,000", "dollars"]);
    }

    #[test]
    fn test_brackets_and_symbols() {
        assert_eq!(
            tokens("Pay (now) $5 & go; fast"),
            vec!["Pay", "(", "now", ")", "$", "5", "&", "go", ";", "fast"]
        );
    }

    #[test]
    fn test_ellipsis_and_dashes() {
        assert_eq!(
            tokens("Wait... what -- really"),
            vec!["Wait", "...", "what", "--", "really"]
        );
    }

    #[test]
    fn test_empty() {
        assert!(tokens("").is_empty());
        assert!(tokens("   ").is_empty());
    }

    #[test]
    fn test_rules_compile() {
        let rules = rules();
        assert_eq!(rules.starting_quotes.len(), 4);
        assert_eq!(rules.punctuation.len(), 9);
        assert_eq!(rules.ending_quotes.len(), 5);
        assert_eq!(rules.contractions.len(), 10);
    }
}
