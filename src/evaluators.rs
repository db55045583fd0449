use phf::phf_map;

/// Scores a model prediction against a reference answer, in `0.0..=1.0`.
pub type EvaluatorFn = fn(&str, &str) -> f64;

pub static BUILTIN_EVALUATORS: phf::Map<&'static str, EvaluatorFn> = phf_map! {
    "exact_match" => exact_match as EvaluatorFn,
    "contains_match" => contains_match as EvaluatorFn,
    "length_ratio" => length_ratio as EvaluatorFn,
};

pub fn exact_match(prediction: &str, reference: &str) -> f64 {
    if prediction.trim() == reference.trim() {
        1.0
    } else {
        0.0
    }
}

pub fn contains_match(prediction: &str, reference: &str) -> f64 {
    let prediction = prediction.trim().to_lowercase();
    let reference = reference.trim().to_lowercase();
    if prediction.contains(&reference) {
        1.0
    } else {
        0.0
    }
}

pub fn length_ratio(prediction: &str, reference: &str) -> f64 {
    let len_pred = prediction.chars().count() as f64;
    let len_ref = reference.chars().count() as f64;
    if len_ref == 0.0 || len_pred == 0.0 {
        return 0.0;
    }
    (len_pred / len_ref).min(len_ref / len_pred)
}

/// Names of the built-in evaluators, sorted.
pub fn builtin_names() -> Vec<&'static str> {
    let mut names: Vec<_> = BUILTIN_EVALUATORS.keys().copied().collect();
    names.sort_unstable();
    names
}
