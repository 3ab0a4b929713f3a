#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]

/// Query parser tests
///
/// This test suite covers:
/// - Splitting on `&` and the first `=`
/// - Single-value (last wins) and array-value views
/// - Decoding with and without a charset
use qparam::{Charset, ParsedQuery, to_array_value_map, to_single_value_map};

fn utf8() -> Option<Charset> {
    Some(Charset::utf_8())
}

#[test]
fn test_parse_missing_and_empty() {
    assert!(ParsedQuery::parse(None::<&str>, utf8()).is_empty());
    assert!(ParsedQuery::parse("", utf8()).is_empty());
    assert!(to_single_value_map("", None).is_empty());
    assert!(to_array_value_map(None::<&str>, None).is_empty());
}

#[test]
fn test_single_value_last_wins() {
    let single = to_single_value_map("a=1&b=2&a=3", utf8());
    assert_eq!(single.len(), 2);
    assert_eq!(single["a"], "3");
    assert_eq!(single["b"], "2");
    // Key order stays first-seen even though a's value came last
    assert_eq!(single.keys().collect::<Vec<_>>(), vec!["a", "b"]);
}

#[test]
fn test_array_value_keeps_every_value() {
    let array = to_array_value_map("a=1&b=2&a=3", utf8());
    assert_eq!(array["a"], vec!["1", "3"]);
    assert_eq!(array["b"], vec!["2"]);
}

#[test]
fn test_only_first_equals_splits() {
    let array = to_array_value_map("a=1=2&b=2&a=5", utf8());
    assert_eq!(array["a"], vec!["1=2", "5"]);
    assert_eq!(array["b"], vec!["2"]);
}

#[test]
fn test_bare_key_has_empty_value() {
    let array = to_array_value_map("a=1&b=2&a", utf8());
    assert_eq!(array["a"], vec!["1", ""]);

    let array = to_array_value_map("a=&b=2&a", utf8());
    assert_eq!(array["a"], vec!["", ""]);

    let single = to_single_value_map("a=", utf8());
    assert_eq!(single["a"], "");
}

#[test]
fn test_trailing_separator_is_ignored() {
    let single = to_single_value_map("a=1&", utf8());
    assert_eq!(single.len(), 1);
    assert_eq!(single["a"], "1");
}

#[test]
fn test_whitespace_pairs_are_keys() {
    // Only truly empty pairs are skipped
    let array = to_array_value_map(" a& &", utf8());
    assert_eq!(array.len(), 2);
    assert_eq!(array[" a"], vec![""]);
    assert_eq!(array[" "], vec![""]);
}

#[test]
fn test_empty_key_is_tracked() {
    let array = to_array_value_map("a=1&=2", None);
    assert_eq!(array["a"], vec!["1"]);
    assert_eq!(array[""], vec!["2"]);
}

#[test]
fn test_decoding_depends_on_charset() {
    let query = "province=%E6%B1%9F%E8%8B%8F%E7%9C%81&name=Allan+Chen";

    let decoded = ParsedQuery::parse(query, utf8());
    assert_eq!(decoded.get("province"), Some("江苏省"));
    assert_eq!(decoded.get("name"), Some("Allan Chen"));

    let verbatim = ParsedQuery::parse(query, None);
    assert_eq!(verbatim.get("province"), Some("%E6%B1%9F%E8%8B%8F%E7%9C%81"));
    assert_eq!(verbatim.get("name"), Some("Allan+Chen"));
}

#[test]
fn test_gbk_decoding() {
    let parsed = ParsedQuery::parse("city=%C4%CF%CD%A8%CA%D0", Some(Charset::gbk()));
    assert_eq!(parsed.get("city"), Some("南通市"));
}

#[test]
fn test_gbk_keeps_literal_text() {
    let parsed = ParsedQuery::parse("receiver=中文&city=南通市", Some(Charset::gbk()));
    assert_eq!(parsed.get("receiver"), Some("中文"));
    assert_eq!(parsed.get("city"), Some("南通市"));
}

#[test]
fn test_gbk_mixed_literal_and_escapes() {
    let parsed = ParsedQuery::parse("city=南通%CA%D0&%CA%A1=江苏+省", Some(Charset::gbk()));
    assert_eq!(parsed.get("city"), Some("南通市"));
    assert_eq!(parsed.get("省"), Some("江苏 省"));
}

#[test]
fn test_utf8_mixed_literal_and_escapes() {
    let parsed = ParsedQuery::parse("province=江%E8%8B%8F省", utf8());
    assert_eq!(parsed.get("province"), Some("江苏省"));
}

#[test]
fn test_question_mark_is_ordinary_text() {
    let parsed = ParsedQuery::parse("?a=1", utf8());
    assert_eq!(parsed.get("?a"), Some("1"));
    assert_eq!(parsed.get("a"), None);
}

#[test]
fn test_malformed_escape_does_not_abort() {
    let parsed = ParsedQuery::parse("rate=100%&name=a%2&ok=%41", utf8());
    assert_eq!(parsed.get("rate"), Some("100%"));
    assert_eq!(parsed.get("name"), Some("a%2"));
    assert_eq!(parsed.get("ok"), Some("A"));
}

#[test]
fn test_output_does_not_alias_input() {
    let parsed = {
        let owned = String::from("k=v&k=w");
        ParsedQuery::parse(owned.as_str(), None)
    };
    assert_eq!(parsed.get_all("k"), ["v", "w"]);
}

#[test]
fn test_charset_label_resolution() {
    assert_eq!(Charset::for_label("utf-8").unwrap(), Charset::utf_8());
    let err = Charset::for_label("x-unknown").unwrap_err();
    assert!(err.to_string().contains("x-unknown"));
}
