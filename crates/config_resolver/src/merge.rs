//! Option tree merge primitives.
//!
//! The resolver represents every configuration layer as an untyped
//! `serde_json` object so that sources of unknown shape (CLI arguments,
//! config files, remote fragments) can be combined without a schema. This
//! module implements the two merge directions the resolver needs, with the
//! per-type rules spelled out here rather than delegated to a utility crate,
//! because "which source wins" is a core invariant of the whole tool:
//!
//! - [`merge_defaults`] is precedence layering: the *first* layer that
//!   defines a key wins; mappings union recursively; arrays and scalars
//!   replace wholesale.
//! - [`merge_into`] is an overlay: the *incoming* value wins; mappings merge
//!   recursively; arrays and scalars replace wholesale.
//!
//! "Defined" means the key is present in the mapping. An explicit `null`,
//! `false`, `0`, or `""` is present and therefore wins over lower-precedence
//! layers; absence of the key is the only form of "undefined".

use serde_json::{Map, Value};

#[cfg(test)]
#[path = "merge_tests.rs"]
mod tests;

/// Merges configuration layers by precedence, highest first.
///
/// Produces a new mapping in which, for every key, the value comes from the
/// highest-precedence layer that defines that key. When the winning value and
/// one or more lower-precedence values are all mappings, they are unioned
/// key-by-key with the same rule applied recursively. A non-mapping value at
/// a key shadows the entire subtree below it in lower layers.
///
/// The function is pure: calling it twice with identical inputs yields
/// structurally identical output.
///
/// # Arguments
///
/// * `layers` - Configuration layers ordered from highest to lowest
///   precedence.
///
/// # Examples
///
/// ```rust
/// use config_resolver::merge::merge_defaults;
/// use serde_json::json;
///
/// let high = json!({ "git": { "push": false } });
/// let low = json!({ "git": { "push": true, "tag": true }, "verbose": false });
///
/// let merged = merge_defaults(&[
///     high.as_object().unwrap(),
///     low.as_object().unwrap(),
/// ]);
///
/// assert_eq!(merged["git"]["push"], json!(false));
/// assert_eq!(merged["git"]["tag"], json!(true));
/// assert_eq!(merged["verbose"], json!(false));
/// ```
pub fn merge_defaults(layers: &[&Map<String, Value>]) -> Map<String, Value> {
    let mut resolved = Map::new();
    for layer in layers {
        fill_missing(&mut resolved, layer);
    }
    resolved
}

/// Copies keys from `layer` into `target` without displacing anything the
/// higher-precedence layers already defined.
fn fill_missing(target: &mut Map<String, Value>, layer: &Map<String, Value>) {
    for (key, incoming) in layer {
        match target.get_mut(key) {
            None => {
                target.insert(key.clone(), incoming.clone());
            }
            Some(Value::Object(existing)) => {
                if let Value::Object(incoming) = incoming {
                    fill_missing(existing, incoming);
                }
                // A non-mapping below a mapping is shadowed entirely.
            }
            // A defined non-mapping value in a higher layer wins wholesale.
            Some(_) => {}
        }
    }
}

/// Deep-merges `overlay` into `target`, with `overlay` winning on conflict.
///
/// Mappings merge key-by-key recursively; arrays and scalars from the overlay
/// replace the target value wholesale. Used for the context overlay and for
/// folding a fetched remote fragment over the canonical options.
///
/// # Examples
///
/// ```rust
/// use config_resolver::merge::merge_into;
/// use serde_json::json;
///
/// let mut base = json!({ "git": { "push": true, "tag": true } });
/// let overlay = json!({ "git": { "push": false } });
///
/// merge_into(base.as_object_mut().unwrap(), overlay.as_object().unwrap());
///
/// assert_eq!(base["git"]["push"], json!(false));
/// assert_eq!(base["git"]["tag"], json!(true));
/// ```
pub fn merge_into(target: &mut Map<String, Value>, overlay: &Map<String, Value>) {
    for (key, incoming) in overlay {
        match (target.get_mut(key), incoming) {
            (Some(Value::Object(existing)), Value::Object(incoming)) => {
                merge_into(existing, incoming);
            }
            _ => {
                target.insert(key.clone(), incoming.clone());
            }
        }
    }
}

/// Looks up a value by dotted key path, e.g. `"git.tagName"`.
///
/// Returns `None` when any segment is absent or a non-mapping value is
/// reached before the final segment.
///
/// # Examples
///
/// ```rust
/// use config_resolver::merge::get_path;
/// use serde_json::json;
///
/// let options = json!({ "git": { "tagName": "v${version}" } });
/// let map = options.as_object().unwrap();
///
/// assert_eq!(get_path(map, "git.tagName"), Some(&json!("v${version}")));
/// assert_eq!(get_path(map, "git.missing"), None);
/// ```
pub fn get_path<'a>(root: &'a Map<String, Value>, path: &str) -> Option<&'a Value> {
    let mut segments = path.split('.');
    let mut current = root.get(segments.next()?)?;
    for segment in segments {
        current = current.as_object()?.get(segment)?;
    }
    Some(current)
}

/// JavaScript-style truthiness over option values.
///
/// `false`, `null`, `0`, and `""` are falsy; every other defined value,
/// including empty mappings and arrays, is truthy. Option keys that are
/// absent are handled by the callers (absent means falsy).
pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
