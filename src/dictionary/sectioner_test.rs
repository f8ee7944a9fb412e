use super::*;

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|w| w.to_string()).collect()
}

fn headers(snapshot: &DictionarySnapshot) -> Vec<char> {
    snapshot.sections.iter().filter_map(|s| s.header).collect()
}

#[test]
fn test_scenario_keeps_only_lowercase_multi_char_words() {
    let input = words(&["apple", "Banana", "a", "Zebra"]);

    let snapshot = section(&input, &Alphabet::default(), HeaderMatch::Exact);

    assert_eq!(snapshot.section('a').unwrap().words, vec!["apple"]);
    assert!(snapshot.section('b').unwrap().words.is_empty());
    assert!(snapshot.section('z').unwrap().words.is_empty());
    assert_eq!(snapshot.word_count(), 1);
}

#[test]
fn test_one_section_per_letter_in_alphabet_order() {
    let alphabet = Alphabet::default();

    for input in [words(&[]), words(&["zoo", "ant", "moth"]), words(&["x"; 50])] {
        let snapshot = section(&input, &alphabet, HeaderMatch::Exact);
        assert_eq!(headers(&snapshot), alphabet.letters().to_vec());
    }
}

#[test]
fn test_default_alphabet_omits_w() {
    let alphabet = Alphabet::default();
    let omitted: Vec<char> = ('a'..='z').filter(|c| !alphabet.contains(*c)).collect();
    assert_eq!(omitted, vec!['w']);
    assert_eq!(alphabet.len(), 25);

    let snapshot = section(&words(&["wolf", "walrus"]), &alphabet, HeaderMatch::Exact);
    assert!(snapshot.section('w').is_none());
    assert_eq!(snapshot.word_count(), 0);
}

#[test]
fn test_words_keep_input_order_within_a_section() {
    let input = words(&["cherry", "apple", "cabbage", "avocado", "carrot"]);

    let snapshot = section(&input, &Alphabet::default(), HeaderMatch::Exact);

    assert_eq!(snapshot.section('a').unwrap().words, vec!["apple", "avocado"]);
    assert_eq!(
        snapshot.section('c').unwrap().words,
        vec!["cherry", "cabbage", "carrot"]
    );
}

#[test]
fn test_short_words_and_empty_records_are_skipped() {
    let input = words(&["", "b", "é", "be"]);

    let snapshot = section(&input, &Alphabet::default(), HeaderMatch::Exact);

    assert_eq!(snapshot.section('b').unwrap().words, vec!["be"]);
    assert_eq!(snapshot.word_count(), 1);
}

#[test]
fn test_length_counts_characters_not_bytes() {
    // 'é' is two bytes but a single character
    let alphabet = Alphabet::new("é");
    let snapshot = section(&words(&["é", "éa"]), &alphabet, HeaderMatch::Exact);
    assert_eq!(snapshot.sections[0].words, vec!["éa"]);
}

#[test]
fn test_lowercase_matching_sections_capitalized_words() {
    let input = words(&["apple", "Banana", "a", "Zebra"]);

    let snapshot = section(&input, &Alphabet::default(), HeaderMatch::Lowercase);

    assert_eq!(snapshot.section('a').unwrap().words, vec!["apple"]);
    assert_eq!(snapshot.section('b').unwrap().words, vec!["Banana"]);
    assert_eq!(snapshot.section('z').unwrap().words, vec!["Zebra"]);
}

#[test]
fn test_sectioning_is_deterministic() {
    let input = words(&["delta", "alpha", "Delta", "dune", "x", "apex", "delta"]);
    let alphabet = Alphabet::default();

    let first = section(&input, &alphabet, HeaderMatch::Exact);
    let second = section(&input, &alphabet, HeaderMatch::Exact);

    assert_eq!(first, second);
    // Source duplicates are preserved
    assert_eq!(
        first.section('d').unwrap().words,
        vec!["delta", "dune", "delta"]
    );
}

#[test]
fn test_repeated_letter_fills_first_bucket_only() {
    let alphabet = Alphabet::new("aba");
    let snapshot = section(&words(&["ant", "bee"]), &alphabet, HeaderMatch::Exact);

    assert_eq!(headers(&snapshot), vec!['a', 'b', 'a']);
    assert_eq!(snapshot.sections[0].words, vec!["ant"]);
    assert!(snapshot.sections[2].words.is_empty());
}

#[test]
fn test_every_sectioned_word_starts_with_its_header() {
    let input: Vec<String> = (0..2_000u32)
        .map(|i| {
            let first = char::from(b'A' + (i % 58) as u8);
            let second = char::from(b'a' + (i % 26) as u8);
            let mut word = String::new();
            word.push(first);
            if i % 7 != 0 {
                word.push(second);
            }
            word
        })
        .collect();
    let alphabet = Alphabet::default();

    let snapshot = section(&input, &alphabet, HeaderMatch::Exact);

    let mut seen = std::collections::HashSet::new();
    for section in &snapshot.sections {
        let header = section.header.unwrap();
        for word in &section.words {
            assert_eq!(word.chars().next(), Some(header));
            assert!(word.chars().count() > 1);
        }
        assert!(seen.insert(header));
    }

    let expected = input
        .iter()
        .filter(|w| w.chars().count() > 1)
        .filter(|w| alphabet.contains(w.chars().next().unwrap()))
        .count();
    assert_eq!(snapshot.word_count(), expected);
}

#[test]
fn test_length_and_header_count_chars_not_graphemes() {
    // Decomposed "é" is two chars: long enough, and headed by its base letter
    let input = words(&["e\u{301}", "\u{e9}", "\u{e9}t\u{e9}"]);

    let snapshot = section(&input, &Alphabet::default(), HeaderMatch::Exact);

    assert_eq!(snapshot.section('e').unwrap().words, vec!["e\u{301}"]);
    assert_eq!(snapshot.word_count(), 1);
}
