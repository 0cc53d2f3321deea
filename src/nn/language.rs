use lazy_static::lazy_static;
use ndarray::{arr2, Array1};
use serde::Serialize;

use super::features::LanguageFeatures;
use super::layers::{argmax, round_to, softmax, Linear};

/// Hand-picked weights, one row per class in [`Language::ALL`] order, one
/// column per [`LanguageFeatures`] slot.
const WEIGHTS: [[f32; LanguageFeatures::LEN]; Language::COUNT] = [
    // en: latin, no devanagari
    [2.0, -2.0, 0.2, 0.3, 0.1, -0.2],
    // hi: devanagari
    [-2.0, 3.0, 0.0, 0.0, 0.1, -0.5],
    // es: latin plus tildes
    [1.5, -2.0, 1.2, 0.0, 0.1, -0.2],
    // hinglish: latin plus romanized hindi keywords
    [1.5, -1.5, 0.0, 0.1, 0.1, 2.5],
];

lazy_static! {
    static ref CLASSIFIER: Linear = Linear::new(
        arr2(&WEIGHTS),
        Array1::zeros(Language::COUNT),
    );
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Hi,
    Es,
    Hinglish,
}

impl Language {
    pub const COUNT: usize = 4;
    pub const ALL: [Language; Language::COUNT] =
        [Language::En, Language::Hi, Language::Es, Language::Hinglish];

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Hi => "hi",
            Language::Es => "es",
            Language::Hinglish => "hinglish",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-class probabilities, rounded to three decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LanguageScores {
    pub en: f64,
    pub hi: f64,
    pub es: f64,
    pub hinglish: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LanguageDetection {
    pub language: Language,
    pub scores: LanguageScores,
}

fn probabilities(features: &LanguageFeatures) -> Array1<f32> {
    let logits = CLASSIFIER.forward(&features.to_array().view());
    softmax(&logits.view())
}

/// Classify `text` as English, Hindi, Spanish or Hinglish.
pub fn detect_language(text: &str) -> LanguageDetection {
    let probs = probabilities(&LanguageFeatures::from_text(text));
    let score = |i: usize| round_to(f64::from(probs[i]), 3);

    LanguageDetection {
        // Picked from the unrounded probabilities.
        language: Language::ALL[argmax(&probs.view())],
        scores: LanguageScores {
            en: score(0),
            hi: score(1),
            es: score(2),
            hinglish: score(3),
        },
    }
}
