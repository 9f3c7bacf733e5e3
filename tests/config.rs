//! Configuration integration tests.

use snugml::*;
use tempfile::TempDir;

mod common;
use common::*;

#[test]
fn test_models_built_from_config_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(snugml::config::DEFAULT_CONFIG_FILE);
    std::fs::write(
        &path,
        "[tree]\nmax_depth = 1\n\n[polynomial]\ndegree = 3\n\n[mlp]\nhidden_nodes = 2\nepochs = 5\n",
    )
    .unwrap();

    let config = Config::load_from_file(&path).unwrap();

    let (rows, labels) = play_tennis();
    let mut tree = DecisionTreeClassifier::new(config.tree);
    tree.fit(&rows, &labels).unwrap();
    assert_eq!(tree.depth().unwrap(), 1);

    let poly = PolynomialRegression::from_config(&config.polynomial);
    assert_eq!(poly.degree(), 3);

    let mlp = MlpClassifier::new(config.mlp);
    assert_eq!(mlp.config().hidden_nodes, 2);
    assert_eq!(mlp.config().learning_rate, DEFAULT_LEARNING_RATE);
}

#[test]
fn test_json_round_trip_preserves_every_section() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("snugml.json");
    let config = ConfigBuilder::new()
        .max_depth(-1)
        .degree(5)
        .min_std(1e-6)
        .hidden_nodes(4)
        .learning_rate(0.25)
        .epochs(42)
        .seed(99)
        .build()
        .unwrap();

    config.save_to_file(&path).unwrap();
    let loaded = Config::load_from_file(&path).unwrap();
    assert_eq!(loaded, config);
    assert_eq!(loaded.tree.effective_max_depth(), DEFAULT_MAX_DEPTH);
}

#[test]
fn test_invalid_file_contents_are_rejected() {
    let dir = TempDir::new().unwrap();

    let bad_json = dir.path().join("bad.json");
    std::fs::write(&bad_json, "{ not json").unwrap();
    assert_eq!(Config::load_from_file(&bad_json).unwrap_err().category(), "json");

    let bad_values = dir.path().join("bad.toml");
    std::fs::write(&bad_values, "[mlp]\nlearning_rate = 0.0\n").unwrap();
    assert!(matches!(
        Config::load_from_file(&bad_values),
        Err(SnugError::InvalidParameter { .. })
    ));

    let missing = dir.path().join("missing.toml");
    assert_eq!(Config::load_from_file(&missing).unwrap_err().category(), "io");
}
