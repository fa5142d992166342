// Query and key normalization for the reverse index.

/// Normalize a lookup query or index key: trim and lowercase.
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Strip macrons and other diacritics from Latin text so that macronized
/// spellings from student editions match the unaccented index keys.
pub fn strip_macrons(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            'ā' | 'ă' | 'â' | 'ä' => 'a',
            'ē' | 'ĕ' | 'ê' | 'ë' => 'e',
            'ī' | 'ĭ' | 'î' | 'ï' => 'i',
            'ō' | 'ŏ' | 'ô' | 'ö' => 'o',
            'ū' | 'ŭ' | 'û' | 'ü' => 'u',
            'ȳ' | 'ŷ' | 'ÿ' => 'y',
            other => other,
        })
        .collect()
}
