mod writer;

use crate::arena::{Node, Ref};
use crate::SerializeOptions;

use writer::Writer;

/// Serialize a tree to JSON text.
///
/// Object members come out in insertion order. With default options the
/// output is compact.
///
/// # Examples
/// ```
/// use rjson::{encode, Document, SerializeOptions};
///
/// let mut doc = Document::new();
/// doc.field("a").append(1);
/// assert_eq!(encode::to_string(doc.as_ref(), &SerializeOptions::default()), r#"{"a":[1]}"#);
/// ```
pub fn to_string(value: Ref<'_>, options: &SerializeOptions) -> String {
    let mut writer = Writer::new(options.indent);
    write_value(&mut writer, value);
    writer.finish()
}

pub fn to_vec(value: Ref<'_>, options: &SerializeOptions) -> Vec<u8> {
    let mut writer = Writer::new(options.indent);
    write_value(&mut writer, value);
    writer.finish_bytes()
}

enum Task<'a> {
    Value(Ref<'a>, usize),
    /// Comma (unless first), line break and optional key before a child.
    Separator {
        first: bool,
        key: Option<&'a str>,
        depth: usize,
    },
    Close(char, usize),
}

// Explicit work stack: trees built through views can nest arbitrarily deep.
fn write_value(writer: &mut Writer, root: Ref<'_>) {
    let mut stack = vec![Task::Value(root, 0)];
    while let Some(task) = stack.pop() {
        match task {
            Task::Separator { first, key, depth } => {
                if !first {
                    writer.write_char(',');
                }
                writer.write_break(depth);
                if let Some(key) = key {
                    writer.write_key(key);
                }
            }
            Task::Close(ch, depth) => {
                writer.write_break(depth);
                writer.write_char(ch);
            }
            Task::Value(value, depth) => match value.node() {
                Node::Null => writer.write_str("null"),
                Node::Bool(true) => writer.write_str("true"),
                Node::Bool(false) => writer.write_str("false"),
                Node::Int32(v) => writer.write_integer(*v),
                Node::UInt32(v) => writer.write_integer(*v),
                Node::Int64(v) => writer.write_integer(*v),
                Node::UInt64(v) => writer.write_integer(*v),
                Node::Double(v) => writer.write_f64(*v),
                Node::String(text) => writer.write_quoted_string(text),
                Node::Array(items) if items.is_empty() => writer.write_str("[]"),
                Node::Object(members) if members.is_empty() => writer.write_str("{}"),
                Node::Array(_) => {
                    writer.write_char('[');
                    stack.push(Task::Close(']', depth));
                    let items: Vec<Ref<'_>> = value.elements().collect();
                    for (i, item) in items.into_iter().enumerate().rev() {
                        stack.push(Task::Value(item, depth + 1));
                        stack.push(Task::Separator {
                            first: i == 0,
                            key: None,
                            depth: depth + 1,
                        });
                    }
                }
                Node::Object(_) => {
                    writer.write_char('{');
                    stack.push(Task::Close('}', depth));
                    let members: Vec<(&str, Ref<'_>)> = value.members().collect();
                    for (i, (key, child)) in members.into_iter().enumerate().rev() {
                        stack.push(Task::Value(child, depth + 1));
                        stack.push(Task::Separator {
                            first: i == 0,
                            key: Some(key),
                            depth: depth + 1,
                        });
                    }
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Document, Indent};
    use rstest::rstest;

    #[rstest]
    #[case(r#"{"a":1,"b":[true,null,"x"],"c":{}}"#)]
    #[case(r#"[1,-2,3.5,[],{"k":[]}]"#)]
    #[case(r#""only a string""#)]
    #[case("null")]
    fn test_compact_output_matches_input(#[case] input: &str) {
        let doc = Document::parse(input).unwrap();
        assert_eq!(to_string(doc.as_ref(), &SerializeOptions::default()), input);
    }

    #[rstest]
    fn test_pretty_output() {
        let doc = Document::parse(r#"{"a":[1,2],"b":{},"c":{"d":null}}"#).unwrap();
        let options = SerializeOptions::new().with_indent(Indent::Spaces(2));
        let expected = "{\n  \"a\": [\n    1,\n    2\n  ],\n  \"b\": {},\n  \"c\": {\n    \"d\": null\n  }\n}";
        assert_eq!(to_string(doc.as_ref(), &options), expected);
    }

    #[rstest]
    fn test_deep_nesting_is_written_without_recursion() {
        let depth = 100_000;
        let mut doc = Document::new();
        let mut view = doc.view();
        for _ in 0..depth {
            view = view.into_field("a");
        }
        view.append(1);
        let text = to_string(doc.as_ref(), &SerializeOptions::default());
        assert_eq!(text.len(), depth * 6 + 3);
        assert!(text.starts_with(r#"{"a":{"a":"#));
        assert!(text.ends_with("[1]}}"));
    }

    #[rstest]
    fn test_to_vec_is_utf8_bytes() {
        let doc = Document::parse(r#"["北京"]"#).unwrap();
        assert_eq!(to_vec(doc.as_ref(), &SerializeOptions::default()), "[\"北京\"]".as_bytes());
    }
}
