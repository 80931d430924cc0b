//! Delimited-string parsing for `SomeArray`.
//!
//! A delimited string is a list of items separated by the list delimiter.
//! Each item is either `key<key delimiter>value` or a bare value; bare
//! values are stored under consecutive indices starting at `0`. Keys may
//! use bracket notation to address nested arrays:
//!
//! | item          | effect                                    |
//! |---------------|-------------------------------------------|
//! | `foo=bar`     | `foo` is set to `"bar"`                   |
//! | `foo[]=bar`   | `"bar"` is appended to the array at `foo` |
//! | `foo[x]=bar`  | `x` of the array at `foo` is set          |
//! | `foo[x][]=bar`| appends to the array at `foo` then `x`    |
//!
//! Items, keys and values are trimmed of whitespace and of single and
//! double quotes. Parsed values are always strings.

use crate::value::{Array, Key, Value};

const TRIMMED: &[char] = &[' ', '\t', '\n', '\r', '\0', '\x0B', '"', '\''];

#[derive(Debug, Clone, PartialEq)]
enum Segment {
    Key(Key),
    Push,
}

/// Parses `text` into an array.
///
/// An empty `key_delimiter` treats every item as a bare value.
pub(crate) fn parse(text: &str, list_delimiter: &str, key_delimiter: &str) -> Array {
    let mut array = Array::new();
    let mut index = -1;

    for item in text.split(list_delimiter).map(trim) {
        let pair = (!key_delimiter.is_empty())
            .then(|| item.split_once(key_delimiter))
            .flatten();

        match pair {
            Some((key, value)) => {
                let path = key_path(trim(key));
                assign(&mut array, &path, Value::from(trim(value)));
            }
            None => {
                index += 1;
                array.insert(index, Value::from(item));
            }
        }
    }

    array
}

fn trim(text: &str) -> &str {
    text.trim_matches(TRIMMED)
}

/// Splits `foo[bar][]` into `[Key(foo), Key(bar), Push]`.
///
/// Keys with malformed brackets are taken literally.
fn key_path(key: &str) -> Vec<Segment> {
    let literal = || vec![Segment::Key(Key::normalize(key))];

    let Some(open) = key.find('[') else {
        return literal();
    };
    if open == 0 || !key.ends_with(']') {
        return literal();
    }

    let mut path = vec![Segment::Key(Key::normalize(&key[..open]))];
    let mut rest = &key[open..];

    while !rest.is_empty() {
        let Some(inner) = rest.strip_prefix('[') else {
            return literal();
        };
        let Some(close) = inner.find(']') else {
            return literal();
        };
        let name = &inner[..close];
        if name.contains('[') {
            return literal();
        }
        path.push(if name.is_empty() {
            Segment::Push
        } else {
            Segment::Key(Key::normalize(name))
        });
        rest = &inner[close + 1..];
    }

    path
}

fn assign(array: &mut Array, path: &[Segment], value: Value) {
    let Some((first, rest)) = path.split_first() else {
        return;
    };

    if rest.is_empty() {
        match first {
            Segment::Key(key) => {
                array.insert(key.clone(), value);
            }
            Segment::Push => {
                array.push(value);
            }
        }
        return;
    }

    let key = match first {
        Segment::Key(key) => key.clone(),
        Segment::Push => match array.next_index() {
            Some(index) => Key::Index(index),
            None => return,
        },
    };
    let slot = array.get_or_insert_with(key, || Value::Array(Array::new()));
    if !matches!(slot, Value::Array(_)) {
        *slot = Value::Array(Array::new());
    }
    if let Value::Array(nested) = slot {
        assign(nested, rest, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn strings<const N: usize>(pairs: [(&str, &str); N]) -> Array {
        pairs
            .into_iter()
            .map(|(key, value)| (Key::normalize(key), Value::from(value)))
            .collect()
    }

    #[rstest]
    #[case("foo", vec![Segment::Key(Key::from("foo"))])]
    #[case("foo[]", vec![Segment::Key(Key::from("foo")), Segment::Push])]
    #[case("foo[bar]", vec![Segment::Key(Key::from("foo")), Segment::Key(Key::from("bar"))])]
    #[case("foo[1][]", vec![Segment::Key(Key::from("foo")), Segment::Key(Key::Index(1)), Segment::Push])]
    #[case("foo[bar", vec![Segment::Key(Key::from("foo[bar"))])]
    #[case("foo[bar]x", vec![Segment::Key(Key::from("foo[bar]x"))])]
    #[case("[bar]", vec![Segment::Key(Key::from("[bar]"))])]
    #[case("foo[a[b]]", vec![Segment::Key(Key::from("foo[a[b]]"))])]
    fn test_key_path(#[case] key: &str, #[case] expected: Vec<Segment>) {
        assert_eq!(key_path(key), expected);
    }

    #[rstest]
    fn test_bare_items_are_indexed() {
        assert_eq!(
            parse(" foo  bar , baz ", ",", "="),
            strings([("0", "foo  bar"), ("1", "baz")])
        );
    }

    #[rstest]
    fn test_mixed_items_share_one_index_counter() {
        assert_eq!(
            parse("foo = bar , baz, quz", ",", "="),
            strings([("foo", "bar"), ("0", "baz"), ("1", "quz")])
        );
    }

    #[rstest]
    fn test_key_delimiter_splits_once() {
        assert_eq!(parse("a=b=c,d", ",", "="), strings([("a", "b=c"), ("0", "d")]));
    }

    #[rstest]
    fn test_empty_key_delimiter_disables_keys() {
        assert_eq!(parse("a=b,c", ",", ""), strings([("0", "a=b"), ("1", "c")]));
    }

    #[rstest]
    fn test_quotes_are_trimmed() {
        assert_eq!(
            parse("'foo'=\"bar\", 'baz'=\"quz\"", ",", "="),
            strings([("foo", "bar"), ("baz", "quz")])
        );
    }

    #[rstest]
    fn test_nested_push_after_scalar_replaces_it() {
        let mut expected_inner = Array::new();
        expected_inner.push(Value::from("b"));
        let mut expected = Array::new();
        expected.insert("foo", Value::Array(expected_inner));

        assert_eq!(parse("foo=a,foo[]=b", ",", "="), expected);
    }

    #[rstest]
    #[case("foo[9223372036854775807]=a,foo[]=b")]
    #[case("foo[9223372036854775807]=a,foo[][x]=b")]
    fn test_push_past_max_index_is_skipped(#[case] raw: &str) {
        let mut inner = Array::new();
        inner.insert(i64::MAX, Value::from("a"));
        let mut expected = Array::new();
        expected.insert("foo", Value::Array(inner));

        assert_eq!(parse(raw, ",", "="), expected);
    }

    #[rstest]
    fn test_multi_level_brackets() {
        let mut leaf = Array::new();
        leaf.push(Value::from("d"));
        let mut middle = Array::new();
        middle.insert("b", Value::Array(leaf));
        let mut expected = Array::new();
        expected.insert("a", Value::Array(middle));

        assert_eq!(parse("a[b][]=d", ",", "="), expected);
    }
}
