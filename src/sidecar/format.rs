use serde_json::Value;

const INDENT: &str = "  ";

/// Renders `value` in the canonical sidecar form: braces on their own lines,
/// entries indented two spaces, and array values kept compact on a single
/// line so the files stay short and diff-stable.
///
/// An empty mapping renders as `{}` on one line.
pub fn json_dumps_pretty(value: &Value) -> String {
    let mut out = String::new();
    write_pretty(&mut out, value, 0);
    out
}

fn write_pretty(out: &mut String, value: &Value, depth: usize) {
    match value {
        Value::Object(map) if map.is_empty() => out.push_str("{}"),
        Value::Object(map) => {
            out.push_str("{\n");
            let pad = INDENT.repeat(depth + 1);
            for (i, (key, val)) in map.iter().enumerate() {
                if i > 0 {
                    out.push_str(",\n");
                }
                out.push_str(&pad);
                out.push_str(&Value::String(key.clone()).to_string());
                out.push_str(": ");
                write_pretty(out, val, depth + 1);
            }
            out.push('\n');
            out.push_str(&INDENT.repeat(depth));
            out.push('}');
        }
        Value::Array(_) => write_compact(out, value),
        other => out.push_str(&other.to_string()),
    }
}

// One-line rendering with ", " and ": " separators, used for every value
// nested inside an array.
fn write_compact(out: &mut String, value: &Value) {
    match value {
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_compact(out, item);
            }
            out.push(']');
        }
        Value::Object(map) => {
            out.push('{');
            for (i, (key, val)) in map.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                out.push_str(&Value::String(key.clone()).to_string());
                out.push_str(": ");
                write_compact(out, val);
            }
            out.push('}');
        }
        other => out.push_str(&other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_document() {
        assert_eq!(json_dumps_pretty(&json!({})), "{}");
    }

    #[test]
    fn test_single_entry() {
        assert_eq!(
            json_dumps_pretty(&json!({"SeriesDescription": "Trace:Nov 13 2017 14-36-14 EST"})),
            "{\n  \"SeriesDescription\": \"Trace:Nov 13 2017 14-36-14 EST\"\n}"
        );
    }

    #[test]
    fn test_arrays_stay_on_one_line() {
        assert_eq!(
            json_dumps_pretty(&json!({"a": -1, "b": "123", "c": [1, 2, 3], "d": ["1.0", "2.0"]})),
            "{\n  \"a\": -1,\n  \"b\": \"123\",\n  \"c\": [1, 2, 3],\n  \"d\": [\"1.0\", \"2.0\"]\n}"
        );
        assert_eq!(
            json_dumps_pretty(&json!({"a": ["0.3", "-1.9128906358217845e-12", "0.2"]})),
            "{\n  \"a\": [\"0.3\", \"-1.9128906358217845e-12\", \"0.2\"]\n}"
        );
    }

    #[test]
    fn test_string_with_separators_untouched() {
        let tstr = "f9a7d4be-a7d7-47d2-9de0-b21e9cd10755||\
                    Sequence: ve11b/master r/50434d5; \
                    Mar  3 2017 10:46:13 by eja";
        assert_eq!(
            json_dumps_pretty(&json!({ "WipMemBlock": tstr })),
            format!("{{\n  \"WipMemBlock\": \"{tstr}\"\n}}")
        );
    }

    #[test]
    fn test_nested_mapping_indents() {
        assert_eq!(
            json_dumps_pretty(&json!({"outer": {"inner": [1, 2]}})),
            "{\n  \"outer\": {\n    \"inner\": [1, 2]\n  }\n}"
        );
    }

    #[test]
    fn test_key_order_preserved() {
        let doc = json!({"z": 1, "a": 2, "m": 3});
        assert_eq!(
            json_dumps_pretty(&doc),
            "{\n  \"z\": 1,\n  \"a\": 2,\n  \"m\": 3\n}"
        );
    }
}
