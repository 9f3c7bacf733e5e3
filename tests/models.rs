//! Integration tests for the regression, Naive Bayes and perceptron models.

use approx::assert_relative_eq;
use snugml::*;

mod common;
use common::*;

/// Fit any regressor through the shared contract and report its R².
fn fit_and_score<R: Regressor<Features = [f64]>>(model: &mut R, x: &[f64], y: &[f64]) -> f64 {
    model.fit(x, y).unwrap();
    assert!(model.is_fitted());
    model.evaluate(x, y).unwrap().r2
}

#[test]
fn test_linear_regression_recovers_line() {
    let x: Vec<f64> = (0..20).map(f64::from).collect();
    let y: Vec<f64> = x.iter().map(|v| -0.5 * v + 4.0).collect();

    let mut model = LinearRegression::new();
    assert_relative_eq!(fit_and_score(&mut model, &x, &y), 1.0, epsilon = 1e-9);
    assert_relative_eq!(model.slope().unwrap(), -0.5, epsilon = 1e-9);
    assert_relative_eq!(model.intercept().unwrap(), 4.0, epsilon = 1e-9);
}

#[test]
fn test_polynomial_regression_recovers_cubic() {
    let x: Vec<f64> = (-5..=5).map(|v| f64::from(v) * 0.5).collect();
    let y: Vec<f64> = x.iter().map(|v| v * v * v - 2.0 * v + 0.5).collect();

    let mut model = PolynomialRegression::new(3);
    assert_relative_eq!(fit_and_score(&mut model, &x, &y), 1.0, epsilon = 1e-9);

    let c = model.coefficients().unwrap();
    let expected = [0.5, -2.0, 0.0, 1.0];
    for (got, want) in c.iter().zip(expected.iter()) {
        assert_relative_eq!(*got, *want, epsilon = 1e-6);
    }
}

#[test]
fn test_polynomial_beats_line_on_curved_data() {
    let x: Vec<f64> = (0..15).map(f64::from).collect();
    let y: Vec<f64> = x.iter().map(|v| v * v).collect();

    let line_r2 = fit_and_score(&mut LinearRegression::new(), &x, &y);
    let poly_r2 = fit_and_score(&mut PolynomialRegression::default(), &x, &y);
    assert!(poly_r2 > line_r2);
}

#[test]
fn test_regression_errors() {
    let mut line = LinearRegression::new();
    assert_eq!(line.fit(&[], &[]).unwrap_err().category(), "invalid_input");
    assert_eq!(
        line.fit(&[3.0, 3.0, 3.0], &[1.0, 2.0, 3.0]).unwrap_err().category(),
        "numerical"
    );

    let poly = PolynomialRegression::from_config(&PolynomialConfig { degree: 4 });
    assert_eq!(poly.degree(), 4);
    assert_eq!(poly.predict(&[0.0]).unwrap_err().category(), "model_not_trained");
}

#[test]
fn test_naive_bayes_on_clusters() {
    let (rows, labels) = create_test_data!(clusters, 30);
    let mut model: GaussianNB = GaussianNB::default();
    model.fit(&rows, &labels).unwrap();

    assert!(model.score(&rows, &labels).unwrap() > 0.95);
    assert_eq!(
        model.predict(&[vec![0.2, -0.3], vec![5.1, 4.8]]).unwrap(),
        owned_labels(&["left", "right"])
    );
    assert_relative_eq!(model.prior(&"left".to_string()).unwrap(), 0.5);
}

#[test]
fn test_naive_bayes_scores_are_log_posteriors() {
    let (rows, labels) = create_test_data!(clusters, 20);
    let mut model: GaussianNB = GaussianNB::default();
    model.fit(&rows, &labels).unwrap();

    let scores = model.log_scores(&[0.0, 0.0]).unwrap();
    assert_eq!(scores.len(), 2);
    assert_eq!(scores[0].0, "left");
    assert!(scores[0].1 > scores[1].1);
}

#[test]
fn test_naive_bayes_with_configured_floor() {
    let config = NaiveBayesConfig { min_std: 0.5 };
    let mut model = GaussianNB::new(config);
    model
        .fit(&[vec![1.0], vec![1.0], vec![3.0], vec![3.0]], &[0u8, 0, 1, 1])
        .unwrap();
    assert_eq!(model.feature_stats(&0).unwrap()[0].std_dev, 0.5);
    assert_eq!(model.predict(&[vec![1.4], vec![2.6]]).unwrap(), vec![0, 1]);
}

#[test]
fn test_mlp_learns_cluster_membership() {
    let (rows, labels) = create_test_data!(clusters, 20);
    // scale to the unit square and one-hot encode
    let inputs: Vec<Vec<f64>> = rows
        .iter()
        .map(|r| r.iter().map(|v| (v + 1.0) / 7.0).collect())
        .collect();
    let mut encoder = LabelEncoder::new();
    let classes = encoder.fit_transform(&labels).unwrap();
    let targets: Vec<Vec<f64>> = classes
        .iter()
        .map(|&c| {
            let mut one_hot = vec![0.0; encoder.num_classes()];
            one_hot[c] = 1.0;
            one_hot
        })
        .collect();

    let config = ConfigBuilder::new()
        .hidden_nodes(3)
        .learning_rate(0.5)
        .epochs(500)
        .seed(11)
        .build()
        .unwrap();
    let mut model = MlpClassifier::new(config.mlp);
    model.fit(&inputs, &targets).unwrap();

    let predicted = model.predict_classes(&inputs).unwrap();
    assert_eq!(accuracy_score(&classes, &predicted), 1.0);
    assert_eq!(
        encoder.inverse_transform(&predicted).unwrap(),
        labels
    );
}

#[test]
fn test_mlp_through_estimator_trait() {
    fn train<E: Estimator<Features = [Vec<f64>], Targets = [Vec<f64>]>>(
        model: &mut E,
    ) -> Result<E::Output> {
        let rows = vec![vec![0.0], vec![1.0]];
        let targets = vec![vec![1.0], vec![0.0]];
        model.fit(&rows, &targets)?;
        model.predict(&rows)
    }

    let mut model = MlpClassifier::default();
    let outputs = train(&mut model).unwrap();
    assert_eq!(outputs.len(), 2);
    assert!(outputs[0][0] > outputs[1][0]);
    assert_eq!(model.name(), "MlpClassifier");
}
