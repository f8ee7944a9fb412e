use super::*;

#[test]
fn test_alphabet_index_titles_are_uppercase() {
    let titles = Alphabet::new("abz").index_titles();
    assert_eq!(titles, vec!["A", "B", "Z"]);
}

#[test]
fn test_alphabet_serializes_as_string() {
    let json = serde_json::to_string(&Alphabet::new("xyz")).unwrap();
    assert_eq!(json, "\"xyz\"");

    let alphabet: Alphabet = serde_json::from_str("\"qa\"").unwrap();
    assert_eq!(alphabet.letters(), ['q', 'a']);
}

#[test]
fn test_section_title() {
    assert_eq!(Section::new('q').title(), Some("Q".to_string()));
    assert_eq!(Section::search_results(Vec::new()).title(), None);
}

#[test]
fn test_capitalize() {
    assert_eq!(capitalize("aardvark"), "Aardvark");
    assert_eq!(capitalize("mIXED"), "Mixed");
    assert_eq!(capitalize(""), "");
}

#[test]
fn test_snapshot_serializes_camel_case() {
    let snapshot = DictionarySnapshot::new(vec![Section::search_results(vec!["ox".into()])]);
    let json = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "sections": [{ "header": null, "words": ["ox"] }] })
    );
}

#[test]
fn test_sectioned_snapshot_is_not_search_result() {
    let snapshot = section(&[], &Alphabet::new("a"), HeaderMatch::Exact);
    assert!(!snapshot.is_search_result());

    let results = search(&[], "a");
    assert!(results.is_search_result());
}
