//! VADER rule-based sentiment scoring
//!
//! Implements the valence rules of Hutto & Gilbert's VADER on top of a
//! [`Lexicon`]: booster words, ALL-CAPS emphasis, negation, "but" shifts,
//! "least" handling, idioms and punctuation amplification.

use super::lexicon::Lexicon;
use super::SentimentScore;
use crate::count::ASCII_PUNCTUATION;
use std::sync::Arc;

/// Increment for booster words
const B_INCR: f64 = 0.293;
/// Decrement for dampener words
const B_DECR: f64 = -0.293;
/// Increment for ALL-CAPS emphasis
const C_INCR: f64 = 0.733;
/// Scalar applied to negated valence
const N_SCALAR: f64 = -0.74;
/// Normalization constant for the compound score
const ALPHA: f64 = 15.0;

const NEGATE: &[&str] = &[
    "aint", "arent", "cannot", "cant", "couldnt", "darent", "didnt", "doesnt", "ain't", "aren't",
    "can't", "couldn't", "daren't", "didn't", "doesn't", "dont", "hadnt", "hasnt", "havent",
    "isnt", "mightnt", "mustnt", "neither", "don't", "hadn't", "hasn't", "haven't", "isn't",
    "mightn't", "mustn't", "neednt", "needn't", "never", "none", "nope", "nor", "not", "nothing",
    "nowhere", "oughtnt", "shant", "shouldnt", "uhuh", "wasnt", "werent", "oughtn't", "shan't",
    "shouldn't", "uh-uh", "wasn't", "weren't", "without", "wont", "wouldnt", "won't", "wouldn't",
    "rarely", "seldom", "despite",
];

fn booster(word: &str) -> Option<f64> {
    match word {
        "absolutely" | "amazingly" | "awfully" | "completely" | "considerable" | "considerably"
        | "decidedly" | "deeply" | "effing" | "enormous" | "enormously" | "entirely"
        | "especially" | "exceptional" | "exceptionally" | "extreme" | "extremely"
        | "fabulously" | "flipping" | "flippin" | "frackin" | "fracking" | "fricking"
        | "frickin" | "frigging" | "friggin" | "fully" | "fuckin" | "fucking" | "fuggin"
        | "fugging" | "greatly" | "hella" | "highly" | "hugely" | "incredible" | "incredibly"
        | "intensely" | "major" | "majorly" | "more" | "most" | "particularly" | "purely"
        | "quite" | "really" | "remarkably" | "so" | "substantially" | "thoroughly" | "total"
        | "totally" | "tremendous" | "tremendously" | "uber" | "unbelievably" | "unusually"
        | "utter" | "utterly" | "very" => Some(B_INCR),
        "almost" | "barely" | "hardly" | "just enough" | "kind of" | "kinda" | "kindof"
        | "kind-of" | "less" | "little" | "marginal" | "marginally" | "occasional"
        | "occasionally" | "partly" | "scarce" | "scarcely" | "slight" | "slightly" | "somewhat"
        | "sort of" | "sorta" | "sortof" | "sort-of" => Some(B_DECR),
        _ => None,
    }
}

fn special_idiom(sequence: &str) -> Option<f64> {
    match sequence {
        "the shit" | "the bomb" => Some(3.0),
        "bad ass" | "badass" => Some(1.5),
        "bus stop" => Some(0.0),
        "yeah right" => Some(-2.0),
        "kiss of death" => Some(-1.5),
        "to die for" => Some(3.0),
        "beating heart" => Some(3.1),
        "broken heart" => Some(-2.9),
        "cut the mustard" => Some(2.0),
        "hand to mouth" => Some(-2.0),
        _ => None,
    }
}

fn negated(word: &str) -> bool {
    NEGATE.contains(&word) || word.contains("n't")
}

/// `str.isupper` semantics: at least one cased character and no lower-case ones
fn is_upper(word: &str) -> bool {
    let mut cased = false;
    for ch in word.chars() {
        if ch.is_lowercase() {
            return false;
        }
        if ch.is_uppercase() {
            cased = true;
        }
    }
    cased
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// Strip surrounding punctuation unless that leaves two characters or fewer,
/// which keeps emoticons such as `:)` intact
fn strip_punc_if_word(token: &str) -> &str {
    let stripped = token.trim_matches(|c: char| ASCII_PUNCTUATION.contains(c));
    if stripped.chars().count() <= 2 {
        token
    } else {
        stripped
    }
}

/// Tokens of a passage as VADER sees them
struct SentiText<'a> {
    words: Vec<&'a str>,
    lower: Vec<String>,
    is_cap_diff: bool,
}

impl<'a> SentiText<'a> {
    fn new(text: &'a str) -> Self {
        let words: Vec<&str> = text
            .split_whitespace()
            .filter(|token| token.chars().count() > 1)
            .map(strip_punc_if_word)
            .collect();
        let lower = words.iter().map(|w| w.to_lowercase()).collect();

        let all_caps = words.iter().filter(|w| is_upper(w)).count();
        let differential = words.len() - all_caps;
        let is_cap_diff = differential > 0 && differential < words.len();

        Self {
            words,
            lower,
            is_cap_diff,
        }
    }

    fn len(&self) -> usize {
        self.words.len()
    }
}

/// Lexicon-based sentiment analyzer
#[derive(Debug, Clone)]
pub struct SentimentAnalyzer {
    lexicon: Arc<Lexicon>,
}

impl SentimentAnalyzer {
    /// Create an analyzer over a shared lexicon
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }

    /// The lexicon in use
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Score a passage
    ///
    /// Returns all-zero scores when no token carries sentiment information
    /// (for example, empty input).
    pub fn polarity_scores(&self, text: &str) -> SentimentScore {
        let senti = SentiText::new(text);
        let mut sentiments = Vec::with_capacity(senti.len());

        for i in 0..senti.len() {
            let lower = senti.lower[i].as_str();
            if booster(lower).is_some() {
                sentiments.push(0.0);
                continue;
            }
            if i + 1 < senti.len() && lower == "kind" && senti.lower[i + 1] == "of" {
                sentiments.push(0.0);
                continue;
            }
            sentiments.push(self.sentiment_valence(&senti, i));
        }

        but_check(&senti.lower, &mut sentiments);
        score_valence(&sentiments, text)
    }

    fn sentiment_valence(&self, senti: &SentiText<'_>, i: usize) -> f64 {
        let lower = &senti.lower;
        let item = lower[i].as_str();
        let Some(base) = self.lexicon.get(item) else {
            return 0.0;
        };
        let mut valence = base;

        // "no" as a negation of the next lexicon word rather than a sentiment word
        if item == "no" && i + 1 < senti.len() && self.lexicon.contains(&lower[i + 1]) {
            valence = 0.0;
        }
        if (i > 0 && lower[i - 1] == "no")
            || (i > 1 && lower[i - 2] == "no")
            || (i > 2 && lower[i - 3] == "no" && matches!(lower[i - 1].as_str(), "or" | "nor"))
        {
            valence = base * N_SCALAR;
        }

        if is_upper(senti.words[i]) && senti.is_cap_diff {
            if valence > 0.0 {
                valence += C_INCR;
            } else {
                valence -= C_INCR;
            }
        }

        for start_i in 0..3 {
            if i > start_i && !self.lexicon.contains(&lower[i - (start_i + 1)]) {
                let mut scalar =
                    scalar_inc_dec(senti.words[i - (start_i + 1)], valence, senti.is_cap_diff);
                if start_i == 1 && scalar != 0.0 {
                    scalar *= 0.95;
                }
                if start_i == 2 && scalar != 0.0 {
                    scalar *= 0.9;
                }
                valence += scalar;
                valence = negation_check(valence, lower, start_i, i);
                if start_i == 2 {
                    valence = special_idioms_check(valence, lower, i);
                }
            }
        }

        self.least_check(valence, lower, i)
    }

    fn least_check(&self, valence: f64, lower: &[String], i: usize) -> f64 {
        if i > 1 && !self.lexicon.contains(&lower[i - 1]) && lower[i - 1] == "least" {
            if lower[i - 2] != "at" && lower[i - 2] != "very" {
                return valence * N_SCALAR;
            }
        } else if i > 0 && !self.lexicon.contains(&lower[i - 1]) && lower[i - 1] == "least" {
            return valence * N_SCALAR;
        }
        valence
    }
}

fn scalar_inc_dec(word: &str, valence: f64, is_cap_diff: bool) -> f64 {
    let Some(mut scalar) = booster(&word.to_lowercase()) else {
        return 0.0;
    };
    if valence < 0.0 {
        scalar = -scalar;
    }
    if is_upper(word) && is_cap_diff {
        if valence > 0.0 {
            scalar += C_INCR;
        } else {
            scalar -= C_INCR;
        }
    }
    scalar
}

fn negation_check(valence: f64, lower: &[String], start_i: usize, i: usize) -> f64 {
    let word = |offset: usize| lower[i - offset].as_str();
    match start_i {
        0 => {
            if negated(word(1)) {
                return valence * N_SCALAR;
            }
        }
        1 => {
            if word(2) == "never" && matches!(word(1), "so" | "this") {
                return valence * 1.25;
            } else if word(2) == "without" && word(1) == "doubt" {
                return valence;
            } else if negated(word(2)) {
                return valence * N_SCALAR;
            }
        }
        _ => {
            if (word(3) == "never" && matches!(word(2), "so" | "this"))
                || matches!(word(1), "so" | "this")
            {
                return valence * 1.25;
            } else if word(3) == "without" && (word(2) == "doubt" || word(1) == "doubt") {
                return valence;
            } else if negated(word(3)) {
                return valence * N_SCALAR;
            }
        }
    }
    valence
}

fn special_idioms_check(mut valence: f64, lower: &[String], i: usize) -> f64 {
    let one_zero = format!("{} {}", lower[i - 1], lower[i]);
    let two_one_zero = format!("{} {} {}", lower[i - 2], lower[i - 1], lower[i]);
    let two_one = format!("{} {}", lower[i - 2], lower[i - 1]);
    let three_two_one = format!("{} {} {}", lower[i - 3], lower[i - 2], lower[i - 1]);
    let three_two = format!("{} {}", lower[i - 3], lower[i - 2]);

    for sequence in [&one_zero, &two_one_zero, &two_one, &three_two_one, &three_two] {
        if let Some(idiom) = special_idiom(sequence) {
            valence = idiom;
            break;
        }
    }

    if lower.len() > i + 1 {
        let zero_one = format!("{} {}", lower[i], lower[i + 1]);
        if let Some(idiom) = special_idiom(&zero_one) {
            valence = idiom;
        }
    }
    if lower.len() > i + 2 {
        let zero_one_two = format!("{} {} {}", lower[i], lower[i + 1], lower[i + 2]);
        if let Some(idiom) = special_idiom(&zero_one_two) {
            valence = idiom;
        }
    }

    for n_gram in [&three_two_one, &three_two, &two_one] {
        if let Some(scalar) = booster(n_gram) {
            valence += scalar;
        }
    }
    valence
}

/// Sentiment before "but" is halved, sentiment after it is boosted
fn but_check(lower: &[String], sentiments: &mut [f64]) {
    let Some(but_index) = lower.iter().position(|w| w == "but") else {
        return;
    };
    for (idx, sentiment) in sentiments.iter_mut().enumerate() {
        if idx < but_index {
            *sentiment *= 0.5;
        } else if idx > but_index {
            *sentiment *= 1.5;
        }
    }
}

fn punctuation_emphasis(text: &str) -> f64 {
    let exclamations = text.matches('!').count().min(4) as f64 * 0.292;
    let questions = text.matches('?').count();
    let question_amplifier = match questions {
        0 | 1 => 0.0,
        2..=3 => questions as f64 * 0.18,
        _ => 0.96,
    };
    exclamations + question_amplifier
}

fn normalize(score: f64) -> f64 {
    (score / (score * score + ALPHA).sqrt()).clamp(-1.0, 1.0)
}

fn score_valence(sentiments: &[f64], text: &str) -> SentimentScore {
    if sentiments.is_empty() {
        return SentimentScore::default();
    }

    let amplifier = punctuation_emphasis(text);
    let mut sum: f64 = sentiments.iter().sum();
    if sum > 0.0 {
        sum += amplifier;
    } else if sum < 0.0 {
        sum -= amplifier;
    }
    let compound = normalize(sum);

    let mut pos_sum = 0.0;
    let mut neg_sum = 0.0;
    let mut neu_count = 0.0;
    for &s in sentiments {
        if s > 0.0 {
            pos_sum += s + 1.0;
        } else if s < 0.0 {
            neg_sum += s - 1.0;
        } else {
            neu_count += 1.0;
        }
    }

    if pos_sum > neg_sum.abs() {
        pos_sum += amplifier;
    } else if pos_sum < neg_sum.abs() {
        neg_sum -= amplifier;
    }

    let total = pos_sum + neg_sum.abs() + neu_count;
    SentimentScore {
        pos: round_to((pos_sum / total).abs(), 3),
        neg: round_to((neg_sum / total).abs(), 3),
        neu: round_to((neu_count / total).abs(), 3),
        compound: round_to(compound, 4),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyzer() -> SentimentAnalyzer {
        let lexicon = Lexicon::from_entries([
            ("good", 1.9),
            ("bad", -2.5),
            ("happy", 2.7),
            ("sad", -2.1),
            ("no", -1.2),
        ]);
        SentimentAnalyzer::new(Arc::new(lexicon))
    }

    #[test]
    fn test_single_positive_word() {
        let score = analyzer().polarity_scores("good");
        assert_eq!(score.compound, 0.4404);
        assert_eq!(score.pos, 1.0);
        assert_eq!(score.neg, 0.0);
        assert_eq!(score.neu, 0.0);
    }

    #[test]
    fn test_neutral_words_dilute_ratios() {
        let score = analyzer().polarity_scores("The movie is good");
        assert_eq!(score.compound, 0.4404);
        assert_eq!(score.pos, 0.492);
        assert_eq!(score.neu, 0.508);
    }

    #[test]
    fn test_negation() {
        let score = analyzer().polarity_scores("The movie is not good");
        assert_eq!(score.compound, -0.3412);
        assert_eq!(score.neg, 0.376);
        assert_eq!(score.pos, 0.0);
    }

    #[test]
    fn test_booster() {
        let score = analyzer().polarity_scores("very good");
        assert_eq!(score.compound, 0.4927);
    }

    #[test]
    fn test_caps_emphasis() {
        let score = analyzer().polarity_scores("GOOD movie");
        assert_eq!(score.compound, 0.5622);
    }

    #[test]
    fn test_exclamation_amplifies() {
        let plain = analyzer().polarity_scores("good");
        let loud = analyzer().polarity_scores("good!!!");
        assert_eq!(loud.compound, 0.5826);
        assert!(loud.compound > plain.compound);
    }

    #[test]
    fn test_but_shifts_weight() {
        let score = analyzer().polarity_scores("good but bad");
        assert_eq!(score.compound, -0.5859);
        assert_eq!(score.pos, 0.253);
        assert_eq!(score.neg, 0.617);
        assert_eq!(score.neu, 0.13);
    }

    #[test]
    fn test_no_before_lexicon_word() {
        // "no" is neutralised and negates "good"
        let score = analyzer().polarity_scores("no good");
        assert!(score.compound < 0.0);
    }

    #[test]
    fn test_empty_text_scores_zero() {
        assert_eq!(analyzer().polarity_scores(""), SentimentScore::default());
        assert_eq!(analyzer().polarity_scores("   "), SentimentScore::default());
    }

    #[test]
    fn test_unknown_words_are_neutral() {
        let score = analyzer().polarity_scores("The table stands there");
        assert_eq!(score.compound, 0.0);
        assert_eq!(score.neu, 1.0);
    }

    #[test]
    fn test_strip_punctuation_keeps_emoticons() {
        assert_eq!(strip_punc_if_word("good!!!"), "good");
        assert_eq!(strip_punc_if_word(":)"), ":)");
        assert_eq!(strip_punc_if_word("(ok)"), "(ok)");
    }

    #[test]
    fn test_single_character_tokens_dropped() {
        let with_article = analyzer().polarity_scores("a good day");
        let without = analyzer().polarity_scores("good day");
        assert_eq!(with_article, without);
        assert_eq!(with_article.pos, 0.744);

        let text = SentiText::new("I am a happy man");
        assert_eq!(text.words, vec!["am", "happy", "man"]);
    }

    #[test]
    fn test_is_upper() {
        assert!(is_upper("GOOD"));
        assert!(is_upper("A1"));
        assert!(!is_upper("Good"));
        assert!(!is_upper("123"));
    }

    #[test]
    fn test_punctuation_emphasis() {
        assert_eq!(punctuation_emphasis("no marks"), 0.0);
        assert!((punctuation_emphasis("a?b?") - 0.36).abs() < 1e-9);
        assert!((punctuation_emphasis("!!!!!!") - 4.0 * 0.292).abs() < 1e-9);
        assert!((punctuation_emphasis("????") - 0.96).abs() < 1e-9);
    }
}
