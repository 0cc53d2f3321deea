use axum::{body::Bytes, Json};

use super::{HealthResponse, TextRequest};
use crate::nn::{self, LanguageDetection, SpeechParams};

pub async fn nn_params(body: Bytes) -> Json<SpeechParams> {
    let request = TextRequest::from_body(&body);
    let params = nn::predict_params(&request.text);

    tracing::debug!(
        "Speech params for {} chars: pitch={} rate={}",
        request.text.chars().count(),
        params.pitch,
        params.rate
    );

    Json(params)
}

pub async fn nn_language(body: Bytes) -> Json<LanguageDetection> {
    let request = TextRequest::from_body(&body);
    let detection = nn::detect_language(&request.text);

    tracing::debug!(
        "Language for {} chars: {} ({:?})",
        request.text.chars().count(),
        detection.language,
        detection.scores
    );

    Json(detection)
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
