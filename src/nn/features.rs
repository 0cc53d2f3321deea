use ndarray::{array, Array1};
use unicode_general_category::{get_general_category, GeneralCategory};

/// Characters counted as punctuation for the pitch/rate features.
const PUNCTUATION: &[char] = &[',', '.', ';', '!', '?'];

/// Accented letters counted as Latin script alongside ASCII letters.
const ACCENTED_LATIN: &[char] = &['á', 'é', 'í', 'ó', 'ú', 'ü', 'ñ'];

/// Devanagari Unicode block.
const DEVANAGARI: std::ops::RangeInclusive<char> = '\u{0900}'..='\u{097F}';

/// Texts this long (in characters) or longer saturate `length_norm`.
const LENGTH_SCALE: f32 = 200.0;

/// Romanized Hindi / code-mix tokens.
pub const HINGLISH_LEXICON: &[&str] = &[
    "hai", "hain", "nahi", "haan", "kyu", "kyun", "kya", "kaise", "kab", "kal", "bhai", "dost",
    "bhen", "acha", "achha", "accha", "theek", "thik", "haanji", "yaar", "sab", "bahut", "thoda",
    "zyada",
];

/// Inputs of the pitch/rate network.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PitchRateFeatures {
    pub length_norm: f32,
    pub vowel_ratio: f32,
    pub punct_ratio: f32,
}

impl PitchRateFeatures {
    pub const LEN: usize = 3;

    pub fn from_text(text: &str) -> Self {
        let n = text.chars().count();
        if n == 0 {
            return Self::default();
        }

        let vowels = text
            .chars()
            .filter(|c| matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u'))
            .count();
        let punct = text.chars().filter(|c| PUNCTUATION.contains(c)).count();

        let n = n as f32;
        Self {
            length_norm: (n / LENGTH_SCALE).min(1.0),
            vowel_ratio: vowels as f32 / n,
            punct_ratio: punct as f32 / n,
        }
    }

    pub fn to_array(&self) -> Array1<f32> {
        array![self.length_norm, self.vowel_ratio, self.punct_ratio]
    }
}

/// Inputs of the language classifier.
///
/// `tilde_count` and `exclaim_count` are raw counts rather than ratios, so
/// they are unbounded for long inputs.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LanguageFeatures {
    pub latin_ratio: f32,
    pub devanagari_ratio: f32,
    pub tilde_count: f32,
    pub exclaim_count: f32,
    pub length_norm: f32,
    pub hinglish_kw_ratio: f32,
}

impl LanguageFeatures {
    pub const LEN: usize = 6;

    pub fn from_text(text: &str) -> Self {
        if text.is_empty() {
            return Self::default();
        }
        let n = text.chars().count() as f32;

        let mut latin = 0usize;
        let mut devanagari = 0usize;
        let mut tilde = 0usize;
        let mut exclaim = 0usize;

        for ch in text.chars() {
            if is_latin(ch) {
                latin += 1;
            }
            if DEVANAGARI.contains(&ch) {
                devanagari += 1;
            }
            match ch {
                'ñ' | 'Ñ' => tilde += 1,
                '!' => exclaim += 1,
                _ => {}
            }
        }

        Self {
            latin_ratio: latin as f32 / n,
            devanagari_ratio: devanagari as f32 / n,
            tilde_count: tilde as f32,
            exclaim_count: exclaim as f32,
            length_norm: (n / LENGTH_SCALE).min(1.0),
            hinglish_kw_ratio: hinglish_keyword_ratio(text),
        }
    }

    pub fn to_array(&self) -> Array1<f32> {
        array![
            self.latin_ratio,
            self.devanagari_ratio,
            self.tilde_count,
            self.exclaim_count,
            self.length_norm,
            self.hinglish_kw_ratio,
        ]
    }
}

fn is_latin(ch: char) -> bool {
    if ch.is_ascii_alphabetic() {
        return true;
    }
    let mut lower = ch.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(c), None) => ACCENTED_LATIN.contains(&c),
        _ => false,
    }
}

/// Letters and numbers by general category. Combining marks such as
/// Devanagari vowel signs are not word characters.
fn is_word_char(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
            | GeneralCategory::DecimalNumber
            | GeneralCategory::LetterNumber
            | GeneralCategory::OtherNumber
    )
}

/// Lower-case, turn every character that is not a letter or number into a
/// separator and split into words.
pub fn tokenize(text: &str) -> Vec<String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .map(|c| if is_word_char(c) { c } else { ' ' })
        .collect();

    cleaned.split_whitespace().map(str::to_string).collect()
}

fn hinglish_keyword_ratio(text: &str) -> f32 {
    let tokens = tokenize(text);
    if tokens.is_empty() {
        return 0.0;
    }

    let matches = tokens
        .iter()
        .filter(|t| HINGLISH_LEXICON.contains(&t.as_str()))
        .count();

    matches as f32 / tokens.len() as f32
}
