//! Streaming transform behavior: ordering, determinism and failure handling.

use online_logit::testing::{assert_model_approx_eq, reference_samples};
use online_logit::{step, LabeledSample, ModelState, SgdError, TrainExt};

#[test]
fn one_state_per_sample_in_order() {
    let samples = reference_samples();
    let states: Vec<ModelState> = samples
        .iter()
        .train_sgd(0.1)
        .collect::<Result<_, _>>()
        .unwrap();

    assert_eq!(states.len(), samples.len());

    // Each emitted state is the step of the previous one.
    let mut previous: Option<&ModelState> = None;
    for (sample, state) in samples.iter().zip(&states) {
        let expected = step(previous, sample, 0.1).unwrap();
        assert_eq!(&expected, state);
        previous = Some(state);
    }
}

#[test]
fn identical_sequences_are_bit_identical() {
    let samples = reference_samples();
    let run = || -> Vec<ModelState> {
        samples.iter().train_sgd(0.1).map(Result::unwrap).collect()
    };
    assert_eq!(run(), run());
}

#[test]
fn order_matters() {
    let samples = reference_samples();
    let mut reversed = samples.clone();
    reversed.reverse();

    let forward = samples.iter().train_sgd(0.1).last().unwrap().unwrap();
    let backward = reversed.iter().train_sgd(0.1).last().unwrap().unwrap();
    assert_ne!(forward, backward);
}

#[test]
fn step_only_moves_weights_with_nonzero_features() {
    let state = ModelState::new(0.2, vec![0.5, -0.25, 1.0]);
    let sample = LabeledSample::positive([0.0, 3.0, 0.0]);

    let next = step(Some(&state), &sample, 0.5).unwrap();

    assert_eq!(next.weight(0), state.weight(0));
    assert_eq!(next.weight(2), state.weight(2));
    assert_ne!(next.weight(1), state.weight(1));
    assert_ne!(next.intercept(), state.intercept());
}

#[test]
fn independent_lineages_do_not_interact() {
    let samples = reference_samples();
    let (a, b) = samples.split_at(5);

    let mut left = a.iter().train_sgd(0.1);
    let mut right = b.iter().train_sgd(0.1);
    // Interleave pulls across the two lineages.
    let mut last_left = None;
    let mut last_right = None;
    for _ in 0..5 {
        last_left = left.next();
        last_right = right.next();
    }

    let solo_left = a.iter().train_sgd(0.1).last();
    let solo_right = b.iter().train_sgd(0.1).last();
    assert_eq!(last_left, solo_left);
    assert_eq!(last_right, solo_right);
}

#[test]
fn failure_keeps_earlier_states_usable() {
    let mut samples = reference_samples();
    samples.insert(3, LabeledSample::new([1.0, 1.0], 2.0));

    let results: Vec<_> = samples.iter().train_sgd(0.1).collect();
    assert_eq!(results.len(), 4);
    assert_eq!(results[3], Err(SgdError::InvalidLabel(2.0)));

    // Skip the bad sample and resume from the last good state.
    let checkpoint = results[2].clone().unwrap();
    let resumed = samples[4..]
        .iter()
        .train_sgd_from(checkpoint, 0.1)
        .last()
        .unwrap()
        .unwrap();

    let reference = reference_samples();
    let clean = reference.iter().train_sgd(0.1).last().unwrap().unwrap();
    assert_model_approx_eq(&resumed, &clean, 0.0);
}

#[test]
fn dimension_is_fixed_by_first_sample() {
    let samples = [
        LabeledSample::positive([1.0, 2.0, 3.0]),
        LabeledSample::negative([1.0, 2.0]),
    ];
    let results: Vec<_> = samples.iter().train_sgd(0.1).collect();

    assert_eq!(results[0].as_ref().unwrap().n_features(), 3);
    assert_eq!(
        results[1],
        Err(SgdError::DimensionMismatch {
            expected: 3,
            actual: 2
        })
    );
}
