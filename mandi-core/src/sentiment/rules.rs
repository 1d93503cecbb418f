//! Word lists and constants for the polarity rules.

/// Boost applied by an intensifier ("very good").
pub const B_INCR: f64 = 0.293;
/// Damping applied by a downtoner ("slightly good").
pub const B_DECR: f64 = -0.293;
/// Emphasis for an ALL-CAPS word in mixed-case text.
pub const C_INCR: f64 = 0.733;
/// Multiplier applied to a negated word.
pub const N_SCALAR: f64 = -0.74;
/// Normalisation constant of the compound score.
pub const ALPHA: f64 = 15.0;

/// Per-mark emphasis for exclamation points, counted up to [`MAX_EXCLAMATIONS`].
pub const EXCLAMATION_INCR: f64 = 0.292;
pub const MAX_EXCLAMATIONS: usize = 4;
/// Per-mark emphasis for question marks when more than one is present.
pub const QUESTION_INCR: f64 = 0.18;
/// Emphasis used once more than three question marks are present.
pub const QUESTION_CAP: f64 = 0.96;

/// Window of preceding words inspected for boosters and negations.
pub const LOOKBACK: usize = 3;

const NEGATE: &[&str] = &[
    "aint", "arent", "cannot", "cant", "couldnt", "darent", "didnt", "doesnt", "ain't", "aren't",
    "can't", "couldn't", "daren't", "didn't", "doesn't", "dont", "hadnt", "hasnt", "havent",
    "isnt", "mightnt", "mustnt", "neither", "don't", "hadn't", "hasn't", "haven't", "isn't",
    "mightn't", "mustn't", "neednt", "needn't", "never", "none", "nope", "nor", "not", "nothing",
    "nowhere", "oughtnt", "shant", "shouldnt", "uhuh", "wasnt", "werent", "oughtn't", "shan't",
    "shouldn't", "uh-uh", "wasn't", "weren't", "without", "wont", "wouldnt", "won't", "wouldn't",
    "rarely", "seldom", "despite",
];

const BOOST_UP: &[&str] = &[
    "absolutely",
    "amazingly",
    "awfully",
    "completely",
    "considerable",
    "considerably",
    "decidedly",
    "deeply",
    "enormous",
    "enormously",
    "entirely",
    "especially",
    "exceptional",
    "exceptionally",
    "extreme",
    "extremely",
    "fully",
    "greatly",
    "highly",
    "hugely",
    "incredible",
    "incredibly",
    "intensely",
    "major",
    "majorly",
    "more",
    "most",
    "particularly",
    "purely",
    "quite",
    "really",
    "remarkably",
    "so",
    "substantially",
    "thoroughly",
    "total",
    "totally",
    "tremendous",
    "tremendously",
    "unbelievably",
    "unusually",
    "utter",
    "utterly",
    "very",
];

const BOOST_DOWN: &[&str] = &[
    "almost",
    "barely",
    "hardly",
    "kinda",
    "kindof",
    "less",
    "little",
    "marginal",
    "marginally",
    "occasional",
    "occasionally",
    "partly",
    "scarce",
    "scarcely",
    "slight",
    "slightly",
    "somewhat",
    "sorta",
    "sortof",
];

/// True for explicit negations and any contraction ending in "n't".
pub fn is_negation(lower: &str) -> bool {
    NEGATE.contains(&lower) || lower.contains("n't")
}

/// Booster weight of a lower-cased word, if it is a booster or dampener.
pub fn booster(lower: &str) -> Option<f64> {
    if BOOST_UP.contains(&lower) {
        Some(B_INCR)
    } else if BOOST_DOWN.contains(&lower) {
        Some(B_DECR)
    } else {
        None
    }
}

/// Python-style `isupper`: at least one cased character and no lower-case ones.
pub fn is_all_caps(word: &str) -> bool {
    word.chars().any(char::is_alphabetic) && !word.chars().any(char::is_lowercase)
}

/// Map an unbounded valence sum into [-1, 1].
pub fn normalize(score: f64) -> f64 {
    (score / (score * score + ALPHA).sqrt()).clamp(-1.0, 1.0)
}

/// Emphasis contributed by `!` and `?` marks in the raw text.
pub fn punctuation_emphasis(text: &str) -> f64 {
    let bangs = text.matches('!').count().min(MAX_EXCLAMATIONS);
    let questions = text.matches('?').count();
    let qm = match questions {
        0 | 1 => 0.0,
        2 | 3 => questions as f64 * QUESTION_INCR,
        _ => QUESTION_CAP,
    };
    bangs as f64 * EXCLAMATION_INCR + qm
}

/// Round half away from zero to `places` decimals.
pub fn round_to(value: f64, places: i32) -> f64 {
    let f = 10f64.powi(places);
    (value * f).round() / f
}
