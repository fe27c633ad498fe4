//! End-to-end convergence on the reference clusters.

use approx::assert_abs_diff_eq;
use rstest::rstest;

use online_logit::testing::{reference_samples, synthetic_samples};
use online_logit::training::{evaluate, Accuracy, LogLoss};
use online_logit::{predict, Decision, ModelState, SgdConfig, SgdTrainer};

fn fit_reference(learning_rate: f64, n_epochs: u32) -> ModelState {
    let config = SgdConfig::builder()
        .learning_rate(learning_rate)
        .n_epochs(n_epochs)
        .build()
        .unwrap();
    SgdTrainer::new(config)
        .fit(Some(ModelState::zeros(2)), &reference_samples(), None)
        .unwrap()
        .unwrap()
}

#[test]
fn hundred_passes_reach_published_parameters() {
    let model = fit_reference(0.3, 100);

    assert_abs_diff_eq!(model.intercept(), -0.86, epsilon = 0.05);
    assert_abs_diff_eq!(model.weight(0), 1.52, epsilon = 0.05);
    assert_abs_diff_eq!(model.weight(1), -2.22, epsilon = 0.05);
}

#[test]
fn hundred_passes_at_learning_rate_one_tenth() {
    let model = fit_reference(0.1, 100);

    assert_abs_diff_eq!(model.intercept(), -0.64, epsilon = 0.05);
    assert_abs_diff_eq!(model.weight(0), 1.18, epsilon = 0.05);
    assert_abs_diff_eq!(model.weight(1), -1.71, epsilon = 0.05);
}

#[rstest]
#[case(0.1)]
#[case(0.3)]
fn converged_model_separates_clusters(#[case] learning_rate: f64) {
    let model = fit_reference(learning_rate, 100);

    let positive = predict(&model, &[7.673756466, 3.508563011]).unwrap();
    let negative = predict(&model, &[1.38807019, 1.850220317]).unwrap();

    assert!(positive > 0.5, "positive = {positive}");
    assert!(negative < 0.5, "negative = {negative}");
    assert_eq!(Decision::from_probability(positive), Decision::Positive);
    assert_eq!(Decision::from_probability(negative), Decision::Negative);

    let accuracy = evaluate(&Accuracy, &model, &reference_samples()).unwrap();
    assert_eq!(accuracy, 1.0);
}

#[test]
fn more_passes_lower_training_loss() {
    let samples = reference_samples();
    let short = fit_reference(0.1, 5);
    let long = fit_reference(0.1, 100);

    let short_loss = evaluate(&LogLoss, &short, &samples).unwrap();
    let long_loss = evaluate(&LogLoss, &long, &samples).unwrap();
    assert!(long_loss < short_loss, "{long_loss} >= {short_loss}");
}

#[test]
fn learns_synthetic_separable_data() {
    let train = synthetic_samples(500, 4, 11);
    let test = synthetic_samples(200, 4, 12);

    let config = SgdConfig::builder()
        .learning_rate(0.5)
        .n_epochs(20)
        .shuffle(true)
        .build()
        .unwrap();
    let trainer = SgdTrainer::new(config);
    let model = trainer.fit(None, &train, None).unwrap().unwrap();

    let accuracy = evaluate(&Accuracy, &model, &test).unwrap();
    assert!(accuracy > 0.9, "accuracy = {accuracy}");

    // Sign pattern of the generating rule.
    assert!(model.weight(0) > 0.0 && model.weight(2) > 0.0);
    assert!(model.weight(1) < 0.0 && model.weight(3) < 0.0);
}

#[test]
fn early_stopping_with_held_out_set() {
    let train = synthetic_samples(300, 3, 21);
    let eval = synthetic_samples(100, 3, 22);

    let config = SgdConfig::builder()
        .learning_rate(0.5)
        .n_epochs(200)
        .early_stopping_rounds(3)
        .build()
        .unwrap();
    let trainer = SgdTrainer::new(config);
    let model = trainer.fit(None, &train, Some(&eval)).unwrap().unwrap();

    assert!(model.is_finite());
    assert!(evaluate(&Accuracy, &model, &eval).unwrap() > 0.85);
}
