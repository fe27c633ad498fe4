//! Online binary classification example.
//!
//! Trains a logistic model one sample at a time, then fits the same data for
//! several epochs with a held-out set and early stopping, and finally saves
//! and reloads the model as JSON.
//!
//! ## Features Shown
//!
//! - Streaming training with `TrainExt::train_sgd`
//! - Multi-epoch fitting with `SgdTrainer`
//! - Prediction and persistence
//!
//! Run with:
//! ```bash
//! RUST_LOG=info cargo run --example train_classification
//! ```

use online_logit::inference::Decision;
use online_logit::persist::{from_json_str, to_json_string, JsonWriteOptions};
use online_logit::testing::{reference_samples, synthetic_samples};
use online_logit::training::{evaluate, Accuracy, LogLoss};
use online_logit::{predict, SgdConfig, SgdTrainer, TrainExt, Verbosity};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::builder().format_timestamp(None).init();

    // Two clusters: class 0 on the left, class 1 on the right.
    let samples = reference_samples();

    println!("=== Streaming (one pass) ===\n");
    for (i, state) in samples.iter().train_sgd(0.3).enumerate() {
        let state = state?;
        println!(
            "sample {:>2}: intercept={:+.4} weights={:+.4?}",
            i,
            state.intercept(),
            state.weights_slice()
        );
    }

    println!("\n=== Fitting (100 epochs) ===\n");
    let config = SgdConfig::builder()
        .learning_rate(0.3)
        .n_epochs(100)
        .verbosity(Verbosity::Info)
        .build()?;
    let model = SgdTrainer::new(config)
        .fit(None, &samples, None)?
        .ok_or("no samples")?;

    println!(
        "intercept={:.4} weights={:.4?}",
        model.intercept(),
        model.weights_slice()
    );
    let log_loss = evaluate(&LogLoss, &model, &samples)?;
    let accuracy = evaluate(&Accuracy, &model, &samples)?;
    println!("Log loss: {log_loss:.4}");
    println!("Accuracy: {:.2}%", accuracy * 100.0);

    for features in [[7.673756466, 3.508563011], [1.38807019, 1.850220317]] {
        let p = predict(&model, &features)?;
        let decision = Decision::from_probability(p);
        println!("{features:?} -> p={p:.4} ({decision:?})");
    }

    println!("\n=== Early stopping on synthetic data ===\n");
    let train = synthetic_samples(1_000, 6, 1);
    let eval = synthetic_samples(250, 6, 2);
    let config = SgdConfig::builder()
        .learning_rate(0.5)
        .n_epochs(200)
        .shuffle(true)
        .early_stopping_rounds(5)
        .verbosity(Verbosity::Info)
        .build()?;
    let synthetic = SgdTrainer::new(config)
        .fit(None, &train, Some(&eval))?
        .ok_or("no samples")?;
    let held_out = evaluate(&Accuracy, &synthetic, &eval)?;
    println!("Held-out accuracy: {:.2}%", held_out * 100.0);

    println!("\n=== Persistence ===\n");
    let json = to_json_string(&model, JsonWriteOptions::pretty())?;
    println!("{json}");
    let restored = from_json_str(&json)?;
    assert_eq!(restored, model);
    println!("\nRestored model matches.");

    Ok(())
}
