use std::fs;
use std::path::Path;

use serde::de::Error as _;
use serde_json::{Map, Value};
use tracing::warn;

use crate::sidecar::format::json_dumps_pretty;
use crate::utils::error::{ConvError, Result};

/// Reads and parses the JSON document at `path`.
///
/// A missing file fails immediately with [`ConvError::NotFound`] and is never
/// retried. When `retry > 0`, a parse failure triggers up to `retry`
/// additional read attempts to tolerate a writer that was mid-write when the
/// content was first observed; the last parse failure is the one surfaced.
pub fn load_json<P: AsRef<Path>>(path: P, retry: u32) -> Result<Value> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(ConvError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let mut remaining = retry;
    loop {
        let content = fs::read_to_string(path)?;
        match serde_json::from_str(&content) {
            Ok(value) => return Ok(value),
            Err(err) => {
                warn!("Failed to parse JSON from {}: {err}", path.display());
                if remaining == 0 {
                    return Err(ConvError::MalformedData {
                        path: path.to_path_buf(),
                        source: err,
                    });
                }
                remaining -= 1;
            }
        }
    }
}

/// Serializes `value` to `path`, overwriting any existing content.
///
/// With `pretty` the canonical sidecar rendering is used; otherwise the
/// document is written compactly.
pub fn save_json<P: AsRef<Path>>(path: P, value: &Value, pretty: bool) -> Result<()> {
    let rendered = if pretty {
        json_dumps_pretty(value)
    } else {
        value.to_string()
    };
    fs::write(path, rendered)?;
    Ok(())
}

/// Loads the document at `path`, shallow-merges `patch` into it (patch keys
/// overwrite same-named keys, all others are preserved in place) and writes
/// the result back in pretty form.
///
/// This is a plain read-modify-write with no cross-process locking: two
/// concurrent updates to the same path race and the last writer wins. Callers
/// needing atomicity across processes must serialize externally.
pub fn update_json<P: AsRef<Path>>(path: P, patch: &Map<String, Value>) -> Result<()> {
    let path = path.as_ref();
    let mut document = match load_json(path, 0)? {
        Value::Object(map) => map,
        _ => {
            return Err(ConvError::MalformedData {
                path: path.to_path_buf(),
                source: serde_json::Error::custom("top-level JSON value is not an object"),
            })
        }
    };
    for (key, value) in patch {
        document.insert(key.clone(), value.clone());
    }
    save_json(path, &Value::Object(document), true)
}
