use ndarray::{Array1, Array2, ArrayView1};
use rand::Rng;

/// Dense layer: `y = W x + b`, with `W` laid out as `[out, in]`.
#[derive(Debug, Clone)]
pub struct Linear {
    pub weight: Array2<f32>,
    pub bias: Array1<f32>,
}

impl Linear {
    pub fn new(weight: Array2<f32>, bias: Array1<f32>) -> Self {
        debug_assert_eq!(weight.nrows(), bias.len());
        Self { weight, bias }
    }

    /// Fan-in uniform initialization, `U(-1/sqrt(in), 1/sqrt(in))` for both
    /// weights and bias.
    pub fn uniform<R: Rng>(inputs: usize, outputs: usize, rng: &mut R) -> Self {
        let bound = 1.0 / (inputs as f32).sqrt();
        let weight = Array2::from_shape_fn((outputs, inputs), |_| rng.gen_range(-bound..bound));
        let bias = Array1::from_shape_fn(outputs, |_| rng.gen_range(-bound..bound));
        Self { weight, bias }
    }

    pub fn forward(&self, x: &ArrayView1<f32>) -> Array1<f32> {
        self.weight.dot(x) + &self.bias
    }
}

pub fn relu(x: Array1<f32>) -> Array1<f32> {
    x.mapv_into(|v| v.max(0.0))
}

pub fn sigmoid(x: Array1<f32>) -> Array1<f32> {
    x.mapv_into(|v| 1.0 / (1.0 + (-v).exp()))
}

/// Exponential normalization. Logits are shifted by their maximum first so
/// large inputs cannot overflow; the result is unchanged.
pub fn softmax(logits: &ArrayView1<f32>) -> Array1<f32> {
    let max = logits.fold(f32::NEG_INFINITY, |m, &v| m.max(v));
    let exps = logits.mapv(|v| (v - max).exp());
    let sum = exps.sum();
    exps / sum
}

/// Index of the largest value; the first one wins on ties.
pub fn argmax(values: &ArrayView1<f32>) -> usize {
    let mut best = 0;
    for (i, &v) in values.iter().enumerate() {
        if v > values[best] {
            best = i;
        }
    }
    best
}

/// Round to `digits` decimal places, halves away from zero.
pub fn round_to(value: f64, digits: i32) -> f64 {
    let scale = 10f64.powi(digits);
    (value * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_linear_forward() {
        let layer = Linear::new(array![[1.0, 2.0], [-1.0, 0.5]], array![0.5, -0.5]);
        let y = layer.forward(&array![2.0, 4.0].view());
        assert_eq!(y, array![10.5, 0.5]);
    }

    #[test]
    fn test_uniform_shape_and_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let layer = Linear::uniform(3, 16, &mut rng);
        assert_eq!(layer.weight.dim(), (16, 3));
        assert_eq!(layer.bias.len(), 16);

        let bound = 1.0 / 3f32.sqrt();
        assert!(layer.weight.iter().all(|w| w.abs() <= bound));
        assert!(layer.bias.iter().all(|b| b.abs() <= bound));
    }

    #[test]
    fn test_relu_clamps_negatives() {
        assert_eq!(relu(array![-1.0, 0.0, 2.5]), array![0.0, 0.0, 2.5]);
    }

    #[test]
    fn test_sigmoid_midpoint_and_bounds() {
        let y = sigmoid(array![0.0, 50.0, -50.0, 3.0]);
        assert_eq!(y[0], 0.5);
        assert!(y.iter().all(|&v| (0.0..=1.0).contains(&v)));
        assert!(y[3] > 0.9 && y[3] < 1.0);
    }

    #[test]
    fn test_softmax_uniform_on_equal_logits() {
        let p = softmax(&array![0.0, 0.0, 0.0, 0.0].view());
        assert!(p.iter().all(|&v| (v - 0.25).abs() < 1e-6));
    }

    #[test]
    fn test_softmax_large_logits() {
        let p = softmax(&array![1000.0, 0.0].view());
        assert!(p.iter().all(|v| v.is_finite()));
        assert!((p.sum() - 1.0).abs() < 1e-6);
        assert!(p[0] > 0.999);
    }

    #[test]
    fn test_argmax_first_on_ties() {
        assert_eq!(argmax(&array![0.25, 0.25, 0.25, 0.25].view()), 0);
        assert_eq!(argmax(&array![0.1, 0.4, 0.4, 0.1].view()), 1);
        assert_eq!(argmax(&array![0.1, 0.2, 0.3, 0.9].view()), 3);
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(1.23456, 2), 1.23);
        assert_eq!(round_to(0.2496, 3), 0.25);
        assert_eq!(round_to(2.0, 2), 2.0);
    }
}
