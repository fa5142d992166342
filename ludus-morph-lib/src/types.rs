use serde::{Deserialize, Serialize};

/// Stem placeholders used by Whitaker's Words for unattested principal parts.
/// A sentinel stem must never appear inside a generated form.
const SENTINELS: &[&str] = &["zzz", "xxx"];

/// True if this stem is a "not attested" placeholder.
pub fn is_sentinel(stem: &str) -> bool {
    SENTINELS.iter().any(|s| stem.eq_ignore_ascii_case(s))
}

/// Part of speech of a dictionary entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartOfSpeech {
    Noun,
    Verb,
    Adjective,
    Adverb,
    Pronoun,
    Preposition,
    Conjunction,
    Interjection,
    Numeral,
    Particle,
}

impl PartOfSpeech {
    /// Map a DICTLINE POS tag. Unrecognized tags (PACK, TACKON, ...) fold
    /// into Particle; their entries still index their stems.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "N" => Self::Noun,
            "V" => Self::Verb,
            "ADJ" => Self::Adjective,
            "ADV" => Self::Adverb,
            "PRON" => Self::Pronoun,
            "PREP" => Self::Preposition,
            "CONJ" => Self::Conjunction,
            "INTERJ" => Self::Interjection,
            "NUM" => Self::Numeral,
            _ => Self::Particle,
        }
    }

    /// Human-readable name for display and artifact metadata.
    pub fn display(&self) -> &'static str {
        match self {
            Self::Noun => "Noun",
            Self::Verb => "Verb",
            Self::Adjective => "Adjective",
            Self::Adverb => "Adverb",
            Self::Pronoun => "Pronoun",
            Self::Preposition => "Preposition",
            Self::Conjunction => "Conjunction",
            Self::Interjection => "Interjection",
            Self::Numeral => "Numeral",
            Self::Particle => "Particle",
        }
    }
}

/// Grammatical gender, meaningful for nouns and adjectives only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Masculine,
    Feminine,
    Neuter,
    Common,
}

impl Gender {
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "M" => Some(Self::Masculine),
            "F" => Some(Self::Feminine),
            "N" => Some(Self::Neuter),
            "C" => Some(Self::Common),
            _ => None,
        }
    }
}

/// Declension/conjugation classifier, e.g. "1 1", "3 1 DEP", "6 2 X".
///
/// The raw string is kept verbatim; the first whitespace token carries the
/// paradigm-group number and later tokens carry flags (DEP, PERFDEF, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MorphClass {
    pub raw: String,
}

impl MorphClass {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    /// Paradigm-group number: the leading digits of the first token.
    pub fn group(&self) -> Option<u32> {
        let first = self.raw.split_whitespace().next()?;
        let digits: String = first.chars().take_while(|c| c.is_ascii_digit()).collect();
        digits.parse().ok()
    }

    /// True if any token after the first equals `flag`.
    pub fn has_flag(&self, flag: &str) -> bool {
        self.raw.split_whitespace().skip(1).any(|t| t == flag)
    }

    /// The "9 9" class marks indeclinable adjectives: the stem is the form.
    pub fn is_indeclinable(&self) -> bool {
        self.raw == "9 9"
    }
}

/// One dictionary entry, parsed from a DICTLINE record. Immutable after
/// parsing; `id` is the position in the kept-entry sequence and the join
/// key into the reverse index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LexicalEntry {
    pub id: u32,
    /// 1-4 principal-part stems in source order. May contain sentinels.
    pub stems: Vec<String>,
    pub part_of_speech: PartOfSpeech,
    pub morph_class: MorphClass,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    pub gloss: String,
}

impl LexicalEntry {
    /// First stem, attested or not. Parsing guarantees at least one stem.
    pub fn main_stem(&self) -> &str {
        &self.stems[0]
    }

    /// Stem at `idx` if present and not a sentinel.
    pub fn attested_stem(&self, idx: usize) -> Option<&str> {
        self.stems
            .get(idx)
            .map(String::as_str)
            .filter(|s| !is_sentinel(s))
    }

    /// Oblique stem for third-declension paradigms: stem 2 when attested,
    /// else stem 1.
    pub fn oblique_stem(&self) -> &str {
        self.attested_stem(1).unwrap_or_else(|| self.main_stem())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_detection() {
        assert!(is_sentinel("zzz"));
        assert!(is_sentinel("XXX"));
        assert!(!is_sentinel("aqu"));
        assert!(!is_sentinel("zzza"));
    }

    #[test]
    fn morph_class_group_and_flags() {
        let c = MorphClass::new("3 1 DEP");
        assert_eq!(c.group(), Some(3));
        assert!(c.has_flag("DEP"));
        assert!(!c.has_flag("PERFDEF"));

        let empty = MorphClass::default();
        assert_eq!(empty.group(), None);

        assert!(MorphClass::new("9 9").is_indeclinable());
    }

    #[test]
    fn oblique_stem_falls_back_to_main() {
        let entry = LexicalEntry {
            id: 0,
            stems: vec!["pati".into(), "pat".into(), "zzz".into()],
            part_of_speech: PartOfSpeech::Verb,
            morph_class: MorphClass::new("3 1 DEP"),
            gender: None,
            gloss: "suffer".into(),
        };
        assert_eq!(entry.oblique_stem(), "pat");
        assert_eq!(entry.attested_stem(2), None);
    }
}
