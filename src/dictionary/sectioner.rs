// Sectioner - partitions words into fixed alphabet buckets
//
// One bucket per alphabet letter, always in alphabet order, even when empty.
// Words keep their input order inside a bucket. Words of one character or
// less are skipped here but stay in the WordStore.

use super::types::{Alphabet, DictionarySnapshot, HeaderMatch, Section};
use std::collections::HashMap;

/// Bucket index of a word, or `None` if it belongs in no section
fn bucket_for(word: &str, lookup: &HashMap<char, usize>, header_match: HeaderMatch) -> Option<usize> {
    let mut chars = word.chars();
    let first = chars.next()?;
    chars.next()?;

    match header_match {
        HeaderMatch::Exact => lookup.get(&first).copied(),
        HeaderMatch::Lowercase => {
            // Only single-char lowercase forms can equal a header
            let mut lower = first.to_lowercase();
            match (lower.next(), lower.next()) {
                (Some(c), None) => lookup.get(&c).copied(),
                _ => None,
            }
        }
    }
}

/// Partition `words` into one section per letter of `alphabet`
pub fn section(words: &[String], alphabet: &Alphabet, header_match: HeaderMatch) -> DictionarySnapshot {
    let mut sections: Vec<Section> = alphabet.letters().iter().map(|&c| Section::new(c)).collect();

    // First occurrence wins so a repeated letter behaves like a linear scan
    let mut lookup = HashMap::with_capacity(sections.len());
    for (index, &letter) in alphabet.letters().iter().enumerate() {
        lookup.entry(letter).or_insert(index);
    }

    let mut skipped = 0usize;
    for word in words {
        match bucket_for(word, &lookup, header_match) {
            Some(index) => sections[index].words.push(word.clone()),
            None => skipped += 1,
        }
    }

    crate::debug!(
        "Sectioned {} words into {} sections ({} not shown)",
        words.len() - skipped,
        sections.len(),
        skipped
    );
    DictionarySnapshot::new(sections)
}

#[cfg(test)]
#[path = "sectioner_test.rs"]
mod tests;
