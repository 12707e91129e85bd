use crate::artifacts::diff::diff_op::DiffOp;
use crate::artifacts::diff::granularity::Granularity;
use crate::artifacts::diff::sequence_diff::compute_diff;
use anyhow::Context;
use serde_json::{Map, Number, Value};
use std::collections::BTreeMap;

/// Recursively orders object keys and writes integral floats as integers, so
/// that neither key order nor `1` vs `1.0` shows up as a change.
pub fn normalize(value: &mut Value) {
    match value {
        Value::Number(number) => {
            let integral = number
                .is_f64()
                .then(|| number.as_f64())
                .flatten()
                .and_then(integral_value);
            if let Some(integral) = integral {
                *number = Number::from(integral);
            }
        }
        Value::Object(map) => {
            let sorted = std::mem::take(map)
                .into_iter()
                .map(|(key, mut child)| {
                    normalize(&mut child);
                    (key, child)
                })
                .collect::<BTreeMap<_, _>>();
            *map = sorted.into_iter().collect::<Map<_, _>>();
        }
        Value::Array(items) => items.iter_mut().for_each(normalize),
        _ => {}
    }
}

fn integral_value(float: f64) -> Option<i64> {
    let in_range = float >= i64::MIN as f64 && float < i64::MAX as f64;
    (float.fract() == 0.0 && in_range).then_some(float as i64)
}

/// Parses `input` and prints it with sorted keys and 2-space indentation.
pub fn canonicalize(input: &str, side: &str) -> anyhow::Result<String> {
    if input.trim().is_empty() {
        anyhow::bail!("{side} JSON is empty");
    }

    let mut value: Value =
        serde_json::from_str(input).with_context(|| format!("invalid {side} JSON"))?;
    normalize(&mut value);

    Ok(serde_json::to_string_pretty(&value)?)
}

/// Line diff of two JSON documents after canonicalization.
pub fn json_diff(old: &str, new: &str) -> anyhow::Result<Vec<DiffOp<String>>> {
    let old = canonicalize(old, "old")?;
    let new = canonicalize(new, "new")?;

    Ok(compute_diff(&old, &new, Granularity::Line)
        .into_iter()
        .map(DiffOp::into_owned)
        .collect())
}
