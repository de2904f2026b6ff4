//! Rule-based polarity model tuned for short, informal, punctuation-heavy
//! discussion text (VADER-style heuristics over a governance lexicon).

/// Word valences on the VADER scale (roughly -4..4).
///
/// General sentiment carriers plus the vocabulary that dominates DAO
/// governance chatter. Keys are lowercase single words.
const LEXICON: &[(&str, f64)] = &[
    // Positive signals
    ("good", 1.9),
    ("great", 3.1),
    ("excellent", 2.7),
    ("amazing", 2.8),
    ("awesome", 3.1),
    ("love", 3.2),
    ("like", 1.5),
    ("support", 1.7),
    ("supports", 1.7),
    ("supported", 1.7),
    ("approve", 1.9),
    ("approved", 2.0),
    ("agree", 1.5),
    ("benefit", 1.9),
    ("benefits", 1.9),
    ("best", 3.2),
    ("better", 1.9),
    ("bullish", 2.4),
    ("clear", 1.1),
    ("fair", 1.7),
    ("helpful", 1.9),
    ("improve", 1.6),
    ("improves", 1.6),
    ("improvement", 1.7),
    ("promising", 1.9),
    ("reasonable", 1.4),
    ("robust", 1.6),
    ("solid", 1.5),
    ("strong", 1.8),
    ("sound", 1.3),
    ("thanks", 1.9),
    ("transparent", 1.5),
    ("useful", 1.8),
    ("valuable", 2.1),
    ("win", 2.8),
    ("yes", 1.7),
    // Negative signals
    ("against", -1.4),
    ("awful", -2.8),
    ("bad", -2.5),
    ("bearish", -2.2),
    ("broken", -1.9),
    ("concern", -1.1),
    ("concerns", -1.1),
    ("concerned", -1.3),
    ("costly", -1.3),
    ("dangerous", -2.3),
    ("disagree", -1.5),
    ("doubt", -1.5),
    ("dump", -2.1),
    ("exploit", -2.2),
    ("fail", -2.5),
    ("failed", -2.3),
    ("failure", -2.4),
    ("flawed", -2.0),
    ("fraud", -3.0),
    ("hate", -2.7),
    ("harmful", -2.4),
    ("no", -1.2),
    ("oppose", -1.8),
    ("problem", -1.7),
    ("problems", -1.7),
    ("reject", -1.9),
    ("rejected", -1.9),
    ("risk", -1.1),
    ("risky", -1.6),
    ("rug", -2.6),
    ("scam", -3.2),
    ("terrible", -3.1),
    ("unfair", -2.0),
    ("unclear", -1.2),
    ("waste", -2.2),
    ("wasteful", -2.1),
    ("worst", -3.1),
    ("worthless", -2.7),
    ("wrong", -2.1),
];

/// Words that flip and dampen the valence of what follows.
const NEGATORS: &[&str] = &[
    "not", "no", "never", "none", "neither", "nor", "nothing", "without", "isnt", "arent", "dont",
    "doesnt", "didnt", "wont", "cant", "couldnt", "shouldnt", "wouldnt",
];

/// Intensity modifiers and their scalar adjustment.
const BOOSTERS: &[(&str, f64)] = &[
    ("very", 0.293),
    ("really", 0.293),
    ("extremely", 0.293),
    ("absolutely", 0.293),
    ("incredibly", 0.293),
    ("hugely", 0.293),
    ("totally", 0.293),
    ("strongly", 0.293),
    ("so", 0.293),
    ("slightly", -0.293),
    ("somewhat", -0.293),
    ("kinda", -0.293),
    ("barely", -0.293),
    ("hardly", -0.293),
    ("marginally", -0.293),
];

/// Valence bump for an ALL-CAPS word when the text mixes cases.
const CAPS_INCR: f64 = 0.733;
/// Damping factor applied when a negator precedes a lexicon word.
const NEGATION_SCALAR: f64 = -0.74;
/// Per-`!` emphasis added to the summed valence (capped at four marks).
const EXCLAIM_INCR: f64 = 0.292;

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct VaderScores {
    pub compound: f64,
    pub pos: f64,
    pub neu: f64,
    pub neg: f64,
}

impl VaderScores {
    pub(crate) const ZERO: VaderScores = VaderScores {
        compound: 0.0,
        pos: 0.0,
        neu: 0.0,
        neg: 0.0,
    };
}

fn clean(word: &str) -> String {
    word.trim_matches(|c: char| !c.is_alphanumeric())
        .to_lowercase()
}

fn lexicon_valence(word: &str) -> f64 {
    LEXICON
        .iter()
        .find(|&&(w, _)| w == word)
        .map_or(0.0, |&(_, v)| v)
}

fn booster_scalar(word: &str) -> f64 {
    BOOSTERS
        .iter()
        .find(|&&(w, _)| w == word)
        .map_or(0.0, |&(_, s)| s)
}

fn is_all_caps(word: &str) -> bool {
    word.len() > 1
        && word.chars().any(|c| c.is_alphabetic())
        && word.chars().all(|c| !c.is_alphabetic() || c.is_uppercase())
}

/// `x / sqrt(x^2 + 15)`, the VADER compound normalization.
fn normalize(sum: f64) -> f64 {
    (sum / (sum * sum + 15.0).sqrt()).clamp(-1.0, 1.0)
}

/// Score a text with the rule-based model.
///
/// Returns a compound scalar in [-1, 1] plus pos/neu/neg proportions that sum
/// to ~1 over sentiment-bearing tokens. Text with no lexicon hits scores
/// `compound = 0` with `neu = 1`; fully blank text returns all zeros (callers
/// handle blank input before scoring).
#[must_use]
pub(crate) fn polarity_scores(text: &str) -> VaderScores {
    let raw: Vec<&str> = text.split_whitespace().collect();
    if raw.is_empty() {
        return VaderScores::ZERO;
    }
    let words: Vec<String> = raw.iter().map(|w| clean(w)).collect();
    // Caps only carry emphasis when the writer mixes cases.
    let caps_differential = {
        let caps = raw.iter().filter(|w| is_all_caps(w)).count();
        caps > 0 && caps < raw.len()
    };

    let mut valences: Vec<f64> = Vec::with_capacity(words.len());
    for (i, word) in words.iter().enumerate() {
        let mut valence = lexicon_valence(word);
        if valence != 0.0 {
            if caps_differential && is_all_caps(raw[i]) {
                valence += CAPS_INCR * valence.signum();
            }
            // Look back up to three tokens for boosters and negators,
            // decaying booster effect with distance.
            for (dist, decay) in [(1_usize, 1.0), (2, 0.95), (3, 0.9)] {
                let Some(j) = i.checked_sub(dist) else { break };
                let prior = words[j].as_str();
                let boost = booster_scalar(prior);
                if boost != 0.0 {
                    valence += boost * decay * valence.signum();
                }
                if NEGATORS.contains(&prior) {
                    valence *= NEGATION_SCALAR;
                }
            }
        }
        valences.push(valence);
    }

    let mut sum: f64 = valences.iter().sum();
    if sum != 0.0 {
        let marks = text.matches('!').count().min(4);
        #[allow(clippy::cast_precision_loss)]
        let emphasis = marks as f64 * EXCLAIM_INCR;
        sum += emphasis * sum.signum();
    }
    let compound = normalize(sum);

    let mut pos_sum = 0.0_f64;
    let mut neg_sum = 0.0_f64;
    let mut neu_count = 0.0_f64;
    for &v in &valences {
        if v > 0.0 {
            pos_sum += v + 1.0;
        } else if v < 0.0 {
            neg_sum += v.abs() + 1.0;
        } else {
            neu_count += 1.0;
        }
    }
    let total = pos_sum + neg_sum + neu_count;
    if total == 0.0 {
        return VaderScores::ZERO;
    }

    VaderScores {
        compound,
        pos: pos_sum / total,
        neu: neu_count / total,
        neg: neg_sum / total,
    }
}
