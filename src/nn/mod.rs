//! Text feature extraction and the two small fixed-weight networks behind the
//! HTTP endpoints. Nothing here fails: every string maps to a result.

pub mod features;
pub mod language;
pub mod layers;
pub mod pitch_rate;

pub use language::{detect_language, LanguageDetection};
pub use pitch_rate::{predict_params, SpeechParams};

/// Build process-wide model state ahead of the first request.
pub fn init() {
    pitch_rate::init();
}
