//! Multi-layer perceptron with one sigmoid hidden layer, trained by
//! per-sample gradient descent.

use crate::config::MlpConfig;
use crate::core::error::{Result, SnugError};
use crate::core::traits::Estimator;
use crate::dataset::check_row_widths;
use crate::{ensure, invalid_input};
use ndarray::{Array1, Array2, ArrayView1, Axis};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const MODEL_NAME: &str = "MlpClassifier";

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Derivative of the sigmoid expressed through its output.
fn sigmoid_derivative(y: f64) -> f64 {
    y * (1.0 - y)
}

/// Weights and biases of a trained network.
#[derive(Debug, Clone, PartialEq)]
struct Network {
    /// hidden x input
    weights_ih: Array2<f64>,
    bias_h: Array1<f64>,
    /// output x hidden
    weights_ho: Array2<f64>,
    bias_o: Array1<f64>,
}

impl Network {
    fn random(inputs: usize, hidden: usize, outputs: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut uniform = |shape: (usize, usize)| -> Array2<f64> {
            Array2::from_shape_fn(shape, |_| rng.gen_range(-1.0..1.0))
        };
        let weights_ih = uniform((hidden, inputs));
        let bias_h = uniform((hidden, 1)).remove_axis(Axis(1));
        let weights_ho = uniform((outputs, hidden));
        let bias_o = uniform((outputs, 1)).remove_axis(Axis(1));
        Network {
            weights_ih,
            bias_h,
            weights_ho,
            bias_o,
        }
    }

    fn num_inputs(&self) -> usize {
        self.weights_ih.ncols()
    }

    fn num_outputs(&self) -> usize {
        self.weights_ho.nrows()
    }

    fn forward(&self, input: ArrayView1<'_, f64>) -> (Array1<f64>, Array1<f64>) {
        let hidden = (self.weights_ih.dot(&input) + &self.bias_h).mapv(sigmoid);
        let output = (self.weights_ho.dot(&hidden) + &self.bias_o).mapv(sigmoid);
        (hidden, output)
    }

    /// One gradient step on a single example. Both layers' deltas are
    /// computed from the weights as they were before the step, so the hidden
    /// errors are backpropagated through the old output weights rather than
    /// the freshly updated ones.
    fn train_sample(&mut self, input: ArrayView1<'_, f64>, target: ArrayView1<'_, f64>, rate: f64) {
        let (hidden, output) = self.forward(input);

        let output_errors = &target - &output;
        let output_gradient = output.mapv(sigmoid_derivative) * &output_errors * rate;
        let hidden_errors = self.weights_ho.t().dot(&output_errors);
        let hidden_gradient = hidden.mapv(sigmoid_derivative) * &hidden_errors * rate;

        self.weights_ho += &outer(&output_gradient.view(), &hidden.view());
        self.bias_o += &output_gradient;
        self.weights_ih += &outer(&hidden_gradient.view(), &input);
        self.bias_h += &hidden_gradient;
    }
}

fn outer(column: &ArrayView1<'_, f64>, row: &ArrayView1<'_, f64>) -> Array2<f64> {
    column
        .view()
        .insert_axis(Axis(1))
        .dot(&row.view().insert_axis(Axis(0)))
}

/// Feed-forward classifier with one hidden layer.
///
/// Targets are real-valued vectors (typically one-hot); input and output
/// sizes are taken from the training data.
#[derive(Debug, Clone)]
pub struct MlpClassifier {
    config: MlpConfig,
    network: Option<Network>,
}

impl MlpClassifier {
    /// Unfitted network.
    pub fn new(config: MlpConfig) -> Self {
        MlpClassifier {
            config,
            network: None,
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &MlpConfig {
        &self.config
    }

    /// Initialise fresh weights from the configured seed and train for the
    /// configured number of epochs.
    pub fn fit(&mut self, rows: &[Vec<f64>], targets: &[Vec<f64>]) -> Result<()> {
        ensure!(
            rows.len() == targets.len(),
            invalid_input!(
                "X and y have different lengths: {} rows, {} targets",
                rows.len(),
                targets.len()
            )
        );
        ensure!(!rows.is_empty(), invalid_input!("X or y are empty"));
        ensure!(
            self.config.hidden_nodes > 0,
            SnugError::invalid_parameter("mlp.hidden_nodes", "0", "must be at least 1")
        );

        let num_inputs = rows[0].len();
        let num_outputs = targets[0].len();
        check_row_widths(rows, num_inputs)?;
        check_row_widths(targets, num_outputs)?;
        ensure!(num_outputs > 0, invalid_input!("targets have no columns"));

        let mut network = Network::random(
            num_inputs,
            self.config.hidden_nodes,
            num_outputs,
            self.config.seed,
        );
        for epoch in 0..self.config.epochs {
            for (row, target) in rows.iter().zip(targets) {
                network.train_sample(
                    ArrayView1::from(row.as_slice()),
                    ArrayView1::from(target.as_slice()),
                    self.config.learning_rate,
                );
            }
            if log::log_enabled!(log::Level::Trace) && (epoch + 1) % 100 == 0 {
                log::trace!("epoch {}: loss {:.6}", epoch + 1, mean_loss(&network, rows, targets));
            }
        }

        log::info!(
            "{} trained {}-{}-{} network for {} epochs on {} rows",
            MODEL_NAME,
            num_inputs,
            self.config.hidden_nodes,
            num_outputs,
            self.config.epochs,
            rows.len()
        );
        self.network = Some(network);
        Ok(())
    }

    /// Output activations for every row.
    pub fn predict(&self, rows: &[Vec<f64>]) -> Result<Vec<Vec<f64>>> {
        let network = self.trained_network()?;
        check_row_widths(rows, network.num_inputs())?;
        Ok(rows
            .iter()
            .map(|row| network.forward(ArrayView1::from(row.as_slice())).1.to_vec())
            .collect())
    }

    /// Index of the strongest output for every row.
    pub fn predict_classes(&self, rows: &[Vec<f64>]) -> Result<Vec<usize>> {
        Ok(self.predict(rows)?.iter().map(|out| argmax(out)).collect())
    }

    /// Mean squared error of the outputs against `targets`.
    pub fn loss(&self, rows: &[Vec<f64>], targets: &[Vec<f64>]) -> Result<f64> {
        let network = self.trained_network()?;
        ensure!(
            rows.len() == targets.len() && !rows.is_empty(),
            invalid_input!("X and y must be non-empty and of equal length")
        );
        check_row_widths(rows, network.num_inputs())?;
        check_row_widths(targets, network.num_outputs())?;
        Ok(mean_loss(network, rows, targets))
    }

    /// Whether the model has been fitted.
    pub fn is_fitted(&self) -> bool {
        self.network.is_some()
    }

    fn trained_network(&self) -> Result<&Network> {
        self.network
            .as_ref()
            .ok_or_else(|| SnugError::not_trained(MODEL_NAME))
    }
}

fn mean_loss(network: &Network, rows: &[Vec<f64>], targets: &[Vec<f64>]) -> f64 {
    let total: f64 = rows
        .iter()
        .zip(targets)
        .map(|(row, target)| {
            let (_, output) = network.forward(ArrayView1::from(row.as_slice()));
            output
                .iter()
                .zip(target)
                .map(|(o, t)| (t - o).powi(2))
                .sum::<f64>()
                / output.len() as f64
        })
        .sum();
    total / rows.len() as f64
}

/// First index of the largest value.
fn argmax(values: &[f64]) -> usize {
    let mut best = 0;
    for (i, &v) in values.iter().enumerate() {
        if v > values[best] {
            best = i;
        }
    }
    best
}

impl Default for MlpClassifier {
    fn default() -> Self {
        Self::new(MlpConfig::default())
    }
}

impl Estimator for MlpClassifier {
    type Features = [Vec<f64>];
    type Targets = [Vec<f64>];
    type Output = Vec<Vec<f64>>;

    fn fit(&mut self, features: &[Vec<f64>], targets: &[Vec<f64>]) -> Result<()> {
        MlpClassifier::fit(self, features, targets)
    }

    fn predict(&self, features: &[Vec<f64>]) -> Result<Vec<Vec<f64>>> {
        MlpClassifier::predict(self, features)
    }

    fn is_fitted(&self) -> bool {
        MlpClassifier::is_fitted(self)
    }

    fn name(&self) -> &'static str {
        MODEL_NAME
    }
}
