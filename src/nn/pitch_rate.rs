use lazy_static::lazy_static;
use ndarray::Array1;
use rand::Rng;
use serde::Serialize;

use super::features::PitchRateFeatures;
use super::layers::{relu, round_to, sigmoid, Linear};

const HIDDEN_UNITS: usize = 16;
const OUTPUTS: usize = 2;

/// Browser speech synthesis accepts pitch and rate in `[0.5, 2.0]`.
const PARAM_MIN: f64 = 0.5;
const PARAM_SPAN: f64 = 1.5;

lazy_static! {
    /// Drawn once per process and never retrained, so results are stable
    /// within a run but not across restarts.
    static ref PITCH_RATE_NET: PitchRateNet = PitchRateNet::random(&mut rand::thread_rng());
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SpeechParams {
    pub pitch: f64,
    pub rate: f64,
}

/// 3 -> 16 -> 2 feed-forward network with a sigmoid head.
#[derive(Debug, Clone)]
pub struct PitchRateNet {
    hidden: Linear,
    output: Linear,
}

impl PitchRateNet {
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self {
            hidden: Linear::uniform(PitchRateFeatures::LEN, HIDDEN_UNITS, rng),
            output: Linear::uniform(HIDDEN_UNITS, OUTPUTS, rng),
        }
    }

    /// Both outputs lie in `(0, 1)`.
    pub fn forward(&self, features: &PitchRateFeatures) -> [f32; 2] {
        let x: Array1<f32> = features.to_array();
        let h = relu(self.hidden.forward(&x.view()));
        let y = sigmoid(self.output.forward(&h.view()));
        [y[0], y[1]]
    }

    pub fn predict(&self, text: &str) -> SpeechParams {
        let [y0, y1] = self.forward(&PitchRateFeatures::from_text(text));
        SpeechParams {
            pitch: to_param(y0),
            rate: to_param(y1),
        }
    }
}

fn to_param(y: f32) -> f64 {
    round_to(PARAM_MIN + f64::from(y) * PARAM_SPAN, 2)
}

/// Draw the process-wide network now instead of on the first request.
pub fn init() {
    lazy_static::initialize(&PITCH_RATE_NET);
}

/// Predict speech pitch and rate for `text` with the process-wide network.
pub fn predict_params(text: &str) -> SpeechParams {
    PITCH_RATE_NET.predict(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn in_range(p: &SpeechParams) -> bool {
        (0.5..=2.0).contains(&p.pitch) && (0.5..=2.0).contains(&p.rate)
    }

    #[test]
    fn test_predict_params_in_range() {
        let long = "long text. ".repeat(100);
        for text in ["", "Hello, world!", "नमस्ते", "😀😀😀", long.as_str()] {
            let params = predict_params(text);
            assert!(in_range(&params), "{text:?} -> {params:?}");
        }
    }

    #[test]
    fn test_predict_params_is_stable_within_process() {
        let a = predict_params("Same text, same answer?");
        let b = predict_params("Same text, same answer?");
        assert_eq!(a.pitch.to_bits(), b.pitch.to_bits());
        assert_eq!(a.rate.to_bits(), b.rate.to_bits());
    }

    #[test]
    fn test_values_are_rounded_to_two_decimals() {
        let params = predict_params("How are you today?");
        for v in [params.pitch, params.rate] {
            assert!(((v * 100.0).round() - v * 100.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_same_seed_same_network() {
        let a = PitchRateNet::random(&mut StdRng::seed_from_u64(42));
        let b = PitchRateNet::random(&mut StdRng::seed_from_u64(42));
        assert_eq!(a.predict("abc"), b.predict("abc"));
    }

    #[test]
    fn test_forward_outputs_in_open_interval() {
        let net = PitchRateNet::random(&mut StdRng::seed_from_u64(1));
        let [y0, y1] = net.forward(&PitchRateFeatures::from_text("Is this bounded?"));
        assert!(y0 > 0.0 && y0 < 1.0);
        assert!(y1 > 0.0 && y1 < 1.0);
    }

    #[test]
    fn test_empty_text_uses_biases_only() {
        let net = PitchRateNet::random(&mut StdRng::seed_from_u64(3));
        let h = relu(net.hidden.bias.clone());
        let y = sigmoid(net.output.forward(&h.view()));
        let expected = SpeechParams {
            pitch: to_param(y[0]),
            rate: to_param(y[1]),
        };
        assert_eq!(net.predict(""), expected);
    }

    #[test]
    fn test_to_param_bounds() {
        assert_eq!(to_param(0.0), 0.5);
        assert_eq!(to_param(1.0), 2.0);
        assert_eq!(to_param(0.5), 1.25);
    }
}
