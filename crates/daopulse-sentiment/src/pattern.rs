//! General-purpose polarity + subjectivity model.
//!
//! Averages `(polarity, subjectivity)` lexicon entries over matched words,
//! pattern-library style: polarity in [-1, 1], subjectivity in [0, 1], and a
//! preceding negator flips polarity at half strength.

/// `(word, polarity, subjectivity)` entries. Subjectivity marks how
/// opinionated the word is, independent of its polarity.
const LEXICON: &[(&str, f64, f64)] = &[
    ("amazing", 0.6, 0.9),
    ("awesome", 1.0, 1.0),
    ("awful", -1.0, 1.0),
    ("bad", -0.7, 0.67),
    ("best", 1.0, 0.3),
    ("better", 0.5, 0.5),
    ("broken", -0.4, 0.6),
    ("careful", 0.1, 0.6),
    ("cheap", -0.4, 0.7),
    ("clear", 0.1, 0.4),
    ("complex", -0.2, 0.4),
    ("concerning", -0.4, 0.7),
    ("dangerous", -0.6, 0.9),
    ("detailed", 0.2, 0.4),
    ("excellent", 1.0, 1.0),
    ("expensive", -0.3, 0.6),
    ("fair", 0.7, 0.9),
    ("flawed", -0.5, 0.7),
    ("good", 0.7, 0.6),
    ("great", 0.8, 0.75),
    ("happy", 0.8, 1.0),
    ("harmful", -0.6, 0.8),
    ("helpful", 0.6, 0.7),
    ("important", 0.4, 0.7),
    ("interesting", 0.5, 0.5),
    ("love", 0.5, 0.6),
    ("necessary", 0.3, 0.6),
    ("new", 0.1, 0.4),
    ("perfect", 1.0, 1.0),
    ("poor", -0.4, 0.6),
    ("promising", 0.5, 0.7),
    ("questionable", -0.3, 0.7),
    ("reasonable", 0.4, 0.6),
    ("reckless", -0.7, 0.9),
    ("risky", -0.5, 0.7),
    ("simple", 0.2, 0.4),
    ("solid", 0.4, 0.5),
    ("strong", 0.4, 0.5),
    ("terrible", -1.0, 1.0),
    ("transparent", 0.3, 0.5),
    ("unclear", -0.3, 0.6),
    ("unfair", -0.7, 0.9),
    ("useful", 0.3, 0.3),
    ("useless", -0.5, 0.6),
    ("valuable", 0.5, 0.6),
    ("vague", -0.4, 0.6),
    ("weak", -0.4, 0.6),
    ("wise", 0.6, 0.8),
    ("wrong", -0.5, 0.6),
];

const NEGATORS: &[&str] = &["not", "no", "never", "isnt", "dont", "wont", "cant", "hardly"];

/// Negation flips polarity at half strength rather than fully inverting
/// ("not great" is mildly negative, not the mirror of "great").
const NEGATION_SCALAR: f64 = -0.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct PatternScores {
    pub polarity: f64,
    pub subjectivity: f64,
}

impl PatternScores {
    pub(crate) const ZERO: PatternScores = PatternScores {
        polarity: 0.0,
        subjectivity: 0.0,
    };
}

fn clean(word: &str) -> String {
    word.trim_matches(|c: char| !c.is_alphanumeric())
        .to_lowercase()
}

/// Score a text with the general-purpose model.
///
/// Returns the mean polarity and subjectivity over matched words, or zeros
/// when nothing matches.
#[must_use]
pub(crate) fn sentiment(text: &str) -> PatternScores {
    let words: Vec<String> = text.split_whitespace().map(clean).collect();

    let mut polarity_sum = 0.0_f64;
    let mut subjectivity_sum = 0.0_f64;
    let mut matches = 0.0_f64;

    for (i, word) in words.iter().enumerate() {
        let Some(&(_, polarity, subjectivity)) =
            LEXICON.iter().find(|&&(w, _, _)| w == word.as_str())
        else {
            continue;
        };
        let negated = i
            .checked_sub(1)
            .is_some_and(|j| NEGATORS.contains(&words[j].as_str()));
        let polarity = if negated {
            polarity * NEGATION_SCALAR
        } else {
            polarity
        };
        polarity_sum += polarity;
        subjectivity_sum += subjectivity;
        matches += 1.0;
    }

    if matches == 0.0 {
        return PatternScores::ZERO;
    }
    PatternScores {
        polarity: (polarity_sum / matches).clamp(-1.0, 1.0),
        subjectivity: (subjectivity_sum / matches).clamp(0.0, 1.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_text_is_zero() {
        assert_eq!(sentiment(""), PatternScores::ZERO);
        assert_eq!(sentiment("  "), PatternScores::ZERO);
    }

    #[test]
    fn unmatched_text_is_zero() {
        assert_eq!(sentiment("the vote closes on friday"), PatternScores::ZERO);
    }

    #[test]
    fn positive_word_yields_positive_polarity() {
        let s = sentiment("a great proposal");
        assert!(s.polarity > 0.0);
        assert!(s.subjectivity > 0.0);
    }

    #[test]
    fn negative_word_yields_negative_polarity() {
        let s = sentiment("this plan is reckless");
        assert!(s.polarity < 0.0);
    }

    #[test]
    fn negation_flips_at_half_strength() {
        let plain = sentiment("great");
        let negated = sentiment("not great");
        assert!((negated.polarity - plain.polarity * NEGATION_SCALAR).abs() < 1e-12);
        // Subjectivity is unaffected by negation.
        assert!((negated.subjectivity - plain.subjectivity).abs() < 1e-12);
    }

    #[test]
    fn mixed_words_average() {
        let s = sentiment("good but risky");
        // (0.7 + -0.5) / 2
        assert!((s.polarity - 0.1).abs() < 1e-12, "got {}", s.polarity);
    }

    #[test]
    fn outputs_stay_in_bounds() {
        let s = sentiment("awesome perfect excellent best");
        assert!(s.polarity <= 1.0);
        assert!(s.subjectivity <= 1.0);
    }
}
