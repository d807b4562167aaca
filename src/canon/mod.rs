//! Canonical JSON serialization (RFC 8785, JSON Canonicalization Scheme)
//!
//! Every tree has exactly one canonical form:
//! - no insignificant whitespace
//! - object keys sorted by UTF-16 code units
//! - numbers in their shortest round-trip form (see [`format_number`])
//! - strings escaped minimally (see [`write_string`])

mod number;
mod string;

pub use number::format_number;
pub use string::{quote, write_string};

use crate::model::Tree;
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Serialize a tree into its canonical JSON text
pub fn canonicalize(tree: &Tree) -> String {
    let mut out = String::new();
    write_tree(&mut out, tree);
    out
}

/// Canonical JSON text as UTF-8 bytes
pub fn canonicalize_bytes(tree: &Tree) -> Vec<u8> {
    canonicalize(tree).into_bytes()
}

fn write_tree(out: &mut String, tree: &Tree) {
    match tree {
        Tree::Null => out.push_str("null"),
        Tree::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Tree::Number(n) => out.push_str(&format_number(*n)),
        Tree::String(s) => write_string(out, s),
        Tree::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_tree(out, item);
            }
            out.push(']');
        }
        Tree::Object(map) => {
            out.push('{');
            for (i, (key, value)) in sorted_entries(map).into_iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_string(out, key);
                out.push(':');
                write_tree(out, value);
            }
            out.push('}');
        }
    }
}

/// Compare keys by UTF-16 code units, as JCS requires
///
/// This differs from `str` ordering only when a character outside the BMP is
/// compared with one in U+E000..=U+FFFF.
pub fn compare_keys(a: &str, b: &str) -> Ordering {
    a.encode_utf16().cmp(b.encode_utf16())
}

/// Object entries in canonical key order
pub(crate) fn sorted_entries<V>(map: &BTreeMap<String, V>) -> Vec<(&str, &V)> {
    let mut entries: Vec<(&str, &V)> = map.iter().map(|(k, v)| (k.as_str(), v)).collect();
    entries.sort_by(|a, b| compare_keys(a.0, b.0));
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null() {
        assert_eq!(canonicalize(&Tree::Null), "null");
    }

    #[test]
    fn test_boolean() {
        assert_eq!(canonicalize(&Tree::Bool(true)), "true");
        assert_eq!(canonicalize(&Tree::Bool(false)), "false");
    }

    #[test]
    fn test_number() {
        let from_bits = |bits: u64| Tree::Number(f64::from_bits(bits));
        assert_eq!(canonicalize(&from_bits(0x4340000000000001)), "9007199254740994");
        assert_eq!(canonicalize(&from_bits(0x444b1ae4d6e2ef50)), "1e+21");
        assert_eq!(canonicalize(&from_bits(0x8000000000000000)), "0");
        assert_eq!(canonicalize(&from_bits(0x7fffffffffffffff)), "null");
        assert_eq!(
            canonicalize(&Tree::array([from_bits(0x43143ff3c1cb0959)])),
            "[1424953923781206.2]"
        );
    }

    #[test]
    fn test_array() {
        assert_eq!(canonicalize(&Tree::Array(vec![])), "[]");
        assert_eq!(canonicalize(&Tree::array([1, 2, 3])), "[1,2,3]");
        assert_eq!(
            canonicalize(&Tree::array([Tree::from(1), 2.into(), 3.into(), Tree::Null])),
            "[1,2,3,null]"
        );
        assert_eq!(
            canonicalize(&Tree::array([Tree::from("asdf"), true.into(), false.into()])),
            r#"["asdf",true,false]"#
        );
    }

    #[test]
    fn test_object() {
        assert_eq!(canonicalize(&Tree::Object(BTreeMap::new())), "{}");
        assert_eq!(
            canonicalize(&Tree::object([("a", 1), ("b", 2), ("c", 3)])),
            r#"{"a":1,"b":2,"c":3}"#
        );
    }

    #[test]
    fn test_object_escaped_keys() {
        let tree = Tree::object([
            ("가나다", Tree::Null),
            ("\r\n", Tree::Bool(true)),
            ("", Tree::Object(BTreeMap::new())),
            ("\"\\", Tree::array([Tree::object([("a", 1), ("b", 2)])])),
        ]);
        assert_eq!(
            canonicalize(&tree),
            r#"{"":{},"\r\n":true,"\"\\":[{"a":1,"b":2}],"가나다":null}"#
        );
    }

    #[test]
    fn test_key_order_is_utf16() {
        // U+1F600 is a surrogate pair (0xD83D..) and sorts before U+FB01 in
        // UTF-16 even though its code point is larger.
        let tree = Tree::object([("\u{fb01}", 1), ("\u{1f600}", 2)]);
        assert_eq!(canonicalize(&tree), "{\"\u{1f600}\":2,\"\u{fb01}\":1}");
    }

    #[test]
    fn test_key_order_invariance() {
        let a: Tree = [("foo", Tree::from(1)), ("bar", Tree::object([("x", 1), ("y", 2)]))]
            .into_iter()
            .collect();
        let b: Tree = [("bar", Tree::object([("y", 2), ("x", 1)])), ("foo", Tree::from(1))]
            .into_iter()
            .collect();
        assert_eq!(canonicalize(&a), canonicalize(&b));
        assert_eq!(canonicalize(&a), r#"{"bar":{"x":1,"y":2},"foo":1}"#);
    }

    #[test]
    fn test_from_json_value_matches_jcs() {
        let tree = Tree::from(serde_json::json!({
            "numbers": [333333333.33333329, 1E30, 4.50, 2e-3, 0.000000000000000000000000001],
            "string": "\u{20ac}$\u{000F}\u{000a}A'\u{0042}\u{0022}\u{005c}\\\"/",
            "literals": [null, true, false]
        }));
        assert_eq!(
            canonicalize(&tree),
            "{\"literals\":[null,true,false],\"numbers\":[333333333.3333333,1e+30,4.5,0.002,1e-27],\"string\":\"\u{20ac}$\\u000f\\nA'B\\\"\\\\\\\\\\\"/\"}"
        );
    }
}
