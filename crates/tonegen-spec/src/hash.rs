//! Canonical hashing of render specs.
//!
//! Two specs that describe the same render hash identically, regardless of
//! key order or whitespace in the source JSON.

use crate::error::SpecError;
use crate::spec::RenderSpec;

/// Computes the canonical BLAKE3 hash of a render spec.
///
/// ```text
/// spec_hash = hex(BLAKE3(canonical_json(spec)))
/// ```
///
/// # Example
/// ```
/// use tonegen_spec::{Layer, RenderSpec};
/// use tonegen_spec::hash::canonical_spec_hash;
///
/// let spec = RenderSpec::builder().layer(Layer::sine(440.0, 0.5)).build();
/// let hash = canonical_spec_hash(&spec).unwrap();
/// assert_eq!(hash.len(), 64);
/// ```
pub fn canonical_spec_hash(spec: &RenderSpec) -> Result<String, SpecError> {
    let value = spec.to_value()?;
    let canonical = canonicalize_json(&value);
    Ok(blake3::hash(canonical.as_bytes()).to_hex().to_string())
}

/// Canonicalizes a JSON value: sorted object keys, no whitespace,
/// integer-valued floats written without a fractional part.
pub fn canonicalize_json(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Null => "null".to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Number(n) => format_number(n),
        serde_json::Value::String(s) => serde_json::Value::String(s.clone()).to_string(),
        serde_json::Value::Array(arr) => {
            let items: Vec<String> = arr.iter().map(canonicalize_json).collect();
            format!("[{}]", items.join(","))
        }
        serde_json::Value::Object(obj) => {
            let mut entries: Vec<(&String, &serde_json::Value)> = obj.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));

            let pairs: Vec<String> = entries
                .into_iter()
                .map(|(k, v)| {
                    format!(
                        "{}:{}",
                        serde_json::Value::String(k.clone()),
                        canonicalize_json(v)
                    )
                })
                .collect();
            format!("{{{}}}", pairs.join(","))
        }
    }
}

fn format_number(n: &serde_json::Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    match n.as_f64() {
        Some(f) if !f.is_finite() => "null".to_string(),
        Some(f) if f == 0.0 => "0".to_string(),
        Some(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
        Some(f) => format!("{}", f),
        None => "null".to_string(),
    }
}
