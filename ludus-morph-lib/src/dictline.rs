// Fixed-width DICTLINE record parser.
//
// Each record is one line of at least 110 characters:
//   [0,75)    stems, whitespace-separated, 1-4 principal parts
//   [76,100)  part of speech, declension/conjugation class, flags, gender
//   [100,110) age/area/frequency codes (ignored here)
//   [110,..)  gloss
//
// Short or empty lines are expected noise in the flat file and yield None
// rather than an error.

use std::io::{self, BufRead};

use crate::types::{is_sentinel, Gender, LexicalEntry, MorphClass, PartOfSpeech};

/// Minimum record width; anything shorter is a truncated or blank line.
const MIN_LINE_LEN: usize = 110;

const STEMS_REGION: (usize, usize) = (0, 75);
const POS_REGION: (usize, usize) = (76, 100);
const GLOSS_START: usize = 110;

/// Longest stem we accept as real Latin; anything longer is fixture data.
const MAX_STEM_LEN: usize = 20;

/// Verb class flags carried into the morph class, matching the set the
/// generator dispatches on.
const VERB_FLAGS: &[&str] = &[
    "DEP", "TO_BEING", "SEMIDEP", "PERFDEF", "IMPERS", "INTRANS", "TRANS",
];

/// Gloss substrings that mark a record as editorial/test data rather than
/// a real lexical entry.
const GLOSS_MARKERS: &[&str] = &[
    "zzz",
    "xxx",
    "(error for",
    "unknown meaning",
    "misspelling of",
    "test entry",
];

/// Aggregate counts from a bulk parse, reported so coverage regressions
/// are visible between dictionary revisions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseStats {
    /// Total input lines seen.
    pub lines: usize,
    /// Lines too short or with empty stems/gloss regions.
    pub malformed: usize,
    /// Well-formed records rejected by the fixture filter.
    pub filtered: usize,
    /// Entries kept.
    pub kept: usize,
}

/// Parse one fixed-width record into an entry with the given id.
/// Returns None for malformed records (too short, empty stems or gloss).
pub fn parse_line(line: &str, id: u32) -> Option<LexicalEntry> {
    if line.len() < MIN_LINE_LEN {
        return None;
    }
    // Offsets are byte-based; a record with multibyte text straddling a
    // boundary is malformed by the format's own definition.
    let stems_region = line.get(STEMS_REGION.0..STEMS_REGION.1)?.trim();
    let pos_region = line.get(POS_REGION.0..POS_REGION.1)?.trim();
    let gloss = clean_gloss(line.get(GLOSS_START..)?);

    if stems_region.is_empty() || gloss.is_empty() {
        return None;
    }

    let stems: Vec<String> = stems_region
        .split_whitespace()
        .map(str::to_string)
        .collect();

    let pos_tokens: Vec<&str> = pos_region.split_whitespace().collect();
    let tag = pos_tokens.first().copied().unwrap_or("");
    let part_of_speech = PartOfSpeech::from_tag(tag);

    let (morph_class, gender) = parse_class(part_of_speech, &pos_tokens);

    Some(LexicalEntry {
        id,
        stems,
        part_of_speech,
        morph_class,
        gender,
        gloss,
    })
}

/// Extract the declension/conjugation class and gender from the POS tokens.
///
/// Nouns: tokens 1-2 are the class, token 3 the gender. Verbs: tokens 1-2
/// plus any recognized flag tokens. Adjectives: tokens 1-2. Everything
/// else carries no class data.
fn parse_class(pos: PartOfSpeech, tokens: &[&str]) -> (MorphClass, Option<Gender>) {
    let base = |n: usize| -> String {
        tokens
            .iter()
            .skip(1)
            .take(n)
            .copied()
            .collect::<Vec<_>>()
            .join(" ")
    };

    match pos {
        PartOfSpeech::Noun => {
            let gender = tokens.get(3).and_then(|t| Gender::from_tag(t));
            (MorphClass::new(base(2)), gender)
        }
        PartOfSpeech::Verb => {
            let mut class = base(2);
            for flag in tokens.iter().skip(3) {
                if VERB_FLAGS.contains(flag) {
                    class.push(' ');
                    class.push_str(flag);
                }
            }
            (MorphClass::new(class), None)
        }
        PartOfSpeech::Adjective => (MorphClass::new(base(2)), None),
        _ => (MorphClass::default(), None),
    }
}

/// Tidy the gloss text: pipe separators become semicolons, whitespace runs
/// collapse, and stray leading/trailing separators are dropped.
fn clean_gloss(raw: &str) -> String {
    let replaced = raw.replace('|', "; ");
    let collapsed = replaced.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed
        .trim_matches(|c: char| c == ';' || c.is_whitespace())
        .to_string()
}

/// Policy filter: true if the entry looks like a real lexical record.
///
/// Rejects entries whose stems are ALL sentinels, entries with non-Latin
/// characters or oversized stems, and glosses carrying test-data markers.
/// Entries mixing sentinel and attested stems (defective verbs) are kept.
pub fn is_lexical(entry: &LexicalEntry) -> bool {
    if GLOSS_MARKERS.iter().any(|m| entry.gloss.contains(m)) {
        return false;
    }

    let mut attested = 0usize;
    for stem in &entry.stems {
        if is_sentinel(stem) {
            continue;
        }
        if stem.len() > MAX_STEM_LEN || !stem.chars().all(|c| c.is_ascii_alphabetic()) {
            return false;
        }
        attested += 1;
    }
    attested > 0
}

/// Bulk driver: parse every line of a DICTLINE source, apply the fixture
/// filter, and assign ids in kept order.
pub fn read_entries<R: BufRead>(reader: R) -> io::Result<(Vec<LexicalEntry>, ParseStats)> {
    let mut entries = Vec::new();
    let mut stats = ParseStats::default();

    for line in reader.lines() {
        let line = line?;
        stats.lines += 1;

        let Some(entry) = parse_line(&line, entries.len() as u32) else {
            stats.malformed += 1;
            continue;
        };
        if !is_lexical(&entry) {
            stats.filtered += 1;
            continue;
        }
        stats.kept += 1;
        entries.push(entry);
    }

    tracing::info!(
        lines = stats.lines,
        malformed = stats.malformed,
        filtered = stats.filtered,
        kept = stats.kept,
        "parsed dictionary source"
    );
    Ok((entries, stats))
}
