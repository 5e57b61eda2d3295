use rjson::{
    Document, DuplicateKeys, ErrorKind, Inspect, ParseErrorKind, ParseOptions, Tag, Value,
};
use rstest::rstest;

#[rstest]
#[case::unterminated_string(r#"{"a":"abc"#, ParseErrorKind::UnterminatedString)]
#[case::empty_input("", ParseErrorKind::UnexpectedEnd)]
#[case::open_array("[1,2", ParseErrorKind::UnexpectedEnd)]
#[case::open_object(r#"{"a":1"#, ParseErrorKind::UnexpectedEnd)]
#[case::trailing_text("[1] [2]", ParseErrorKind::TrailingData)]
#[case::bad_fraction("[1.]", ParseErrorKind::InvalidNumber)]
#[case::bad_exponent("[1e]", ParseErrorKind::InvalidNumber)]
#[case::missing_comma("[1 2]", ParseErrorKind::UnexpectedToken)]
#[case::bare_word("[nope]", ParseErrorKind::UnexpectedToken)]
#[case::trailing_comma("[1,]", ParseErrorKind::UnexpectedToken)]
#[case::unquoted_key("{a:1}", ParseErrorKind::UnexpectedToken)]
fn parse_errors_are_classified(#[case] input: &str, #[case] expected: ParseErrorKind) {
    let err = Document::parse(input).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Parse(expected), "{input:?}: {err}");
    assert!(err.is_parse());
}

#[rstest]
fn parse_error_carries_location() {
    let err = Document::parse("{\n  \"a\": tru }\n").unwrap_err();
    let location = err.location.unwrap();
    assert_eq!(location.line, 2);
    assert!(location.column > 0);
}

#[rstest]
#[case(r#"{"count":2,"names":["zhangsan","wangwu"]}"#)]
#[case(r#"[null,true,false,0,-1,2147483648,-2147483649,18446744073709551615]"#)]
#[case(r#"[0.5,-1.25,1e300,1.0e-7,123456.789]"#)]
#[case(r#"{"":"","nested":{"deeper":{"deepest":[[],[{}]]}}}"#)]
#[case(r#"["tab\tnew\nline","quote\"back\\slash","\u0001\u001f","北京市天安门"]"#)]
#[case(r#""just text""#)]
#[case("42")]
fn parse_of_serialize_is_identical(#[case] input: &str) {
    let doc = Document::parse(input).unwrap();
    let again = Document::parse(&doc.serialize()).unwrap();
    assert!(doc.as_ref().identical(&again.as_ref()), "{input}");
    assert_eq!(again.serialize(), doc.serialize());
}

#[rstest]
fn insignificant_whitespace_is_dropped() {
    let doc = Document::parse(" {\n\t\"a\" : [ 1 , 2 ] ,\r\n \"b\" : { } } ").unwrap();
    assert_eq!(doc.serialize(), r#"{"a":[1,2],"b":{}}"#);
}

#[rstest]
fn escapes_decode_and_reencode() {
    let doc = Document::parse(r#"["é\/\b\f😀"]"#).unwrap();
    assert_eq!(doc.at(0).unwrap().to_str(""), "é/\u{8}\u{c}😀");
    assert_eq!(doc.serialize(), "[\"é/\\b\\f😀\"]");
}

#[rstest]
fn doubles_always_serialize_as_doubles() {
    let doc = Document::parse("[1.0,2.50,1E2]").unwrap();
    assert!(doc.as_ref().elements().all(|item| item.tag() == Tag::Double));
    assert_eq!(doc.serialize(), "[1.0,2.5,100.0]");
}

#[rstest]
fn non_finite_doubles_serialize_as_null() {
    let mut doc = Document::new();
    doc.append(f64::NAN);
    doc.append(f64::INFINITY);
    doc.append(f64::NEG_INFINITY);
    assert_eq!(doc.serialize(), "[null,null,null]");
}

#[rstest]
#[case(DuplicateKeys::KeepFirst, r#"{"k":1,"j":true}"#)]
#[case(DuplicateKeys::KeepLast, r#"{"k":3,"j":true}"#)]
fn duplicate_keys_collapse_to_one_member(#[case] policy: DuplicateKeys, #[case] expected: &str) {
    let options = ParseOptions::new().with_duplicate_keys(policy);
    let doc = Document::parse_with_options(r#"{"k":1,"j":true,"k":3}"#, &options).unwrap();
    assert_eq!(doc.serialize(), expected);
}

#[rstest]
fn failed_parse_leaves_target_untouched() {
    let mut doc = Document::parse(r#"{"keep":1}"#).unwrap();
    if let Ok(parsed) = Document::parse(r#"{"keep":"#) {
        doc = parsed;
    }
    assert_eq!(doc.serialize(), r#"{"keep":1}"#);
}

#[rstest]
fn json_value_interop() {
    let value = serde_json::json!({"b": [1, 2.5, null], "a": "x"});
    let doc = Document::from_json_value(&value).unwrap();
    assert_eq!(doc.serialize(), r#"{"b":[1,2.5,null],"a":"x"}"#);
    assert_eq!(doc.to_json_value(), value);
}

#[rstest]
fn top_level_helpers() {
    let doc = rjson::parse(r#"{"a":1}"#).unwrap();
    assert_eq!(rjson::to_string(doc.as_ref()), r#"{"a":1}"#);
    let doc = rjson::parse_slice(b"[true]").unwrap();
    assert!(doc.at(0).unwrap().to_bool(false));
    let doc: Document = "null".parse().unwrap();
    assert!(doc.is_null());
}

#[rstest]
#[case(129)]
#[case(200)]
#[case(20_000)]
fn deeply_nested_built_tree_round_trips(#[case] depth: usize) {
    let mut tree = Document::new();
    let mut view = tree.view();
    for level in 0..depth {
        view = if level % 2 == 0 {
            view.into_field("a")
        } else {
            view.append(Value::null());
            view.into_last()
        };
    }
    view.set_value("leaf");

    let text = tree.serialize();
    let parsed = Document::parse(&text).unwrap();
    assert!(parsed.as_ref().identical(&tree.as_ref()));
    assert_eq!(parsed.serialize(), text);
    assert_eq!(parsed.detach(), tree);
}
