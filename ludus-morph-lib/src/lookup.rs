// Query-side wrapper around a loaded artifact.
//
// A secondary accent-stripped map is computed at load time and never
// serialized; it is rebuilt identically on every load because form buckets
// are id-sorted.

use std::collections::BTreeMap;
use std::path::Path;

use tracing::debug;

use crate::error::ArtifactError;
use crate::index::Artifact;
use crate::normalize::{normalize, strip_macrons};
use crate::types::LexicalEntry;

pub struct Lexicon {
    artifact: Artifact,
    /// Macron-stripped form to union of ids, built from the primary map.
    stripped: BTreeMap<String, Vec<u32>>,
}

impl Lexicon {
    pub fn new(artifact: Artifact) -> Self {
        let mut stripped: BTreeMap<String, Vec<u32>> = BTreeMap::new();
        for (form, ids) in &artifact.morph_index {
            let bare = strip_macrons(form);
            let bucket = stripped.entry(bare).or_default();
            for id in ids {
                if !bucket.contains(id) {
                    bucket.push(*id);
                }
            }
        }
        for bucket in stripped.values_mut() {
            bucket.sort_unstable();
        }
        Self { artifact, stripped }
    }

    pub fn load(path: &Path) -> Result<Self, ArtifactError> {
        Ok(Self::new(Artifact::load(path)?))
    }

    pub fn artifact(&self) -> &Artifact {
        &self.artifact
    }

    /// Resolve a surface form to matching entries. An exact normalized hit
    /// wins; otherwise the macron-stripped map is consulted. Unknown forms
    /// return an empty list, never an error.
    pub fn lookup(&self, query: &str) -> Vec<&LexicalEntry> {
        let key = normalize(query);
        if key.is_empty() {
            return Vec::new();
        }
        if let Some(ids) = self.artifact.morph_index.get(&key) {
            return self.resolve(ids);
        }
        let bare = strip_macrons(&key);
        if let Some(ids) = self.stripped.get(&bare) {
            debug!(query, "matched via accent-stripped fallback");
            return self.resolve(ids);
        }
        Vec::new()
    }

    fn resolve(&self, ids: &[u32]) -> Vec<&LexicalEntry> {
        ids.iter()
            .filter_map(|&id| self.artifact.entries.get(id as usize))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Gender, MorphClass, PartOfSpeech};

    fn lexicon() -> Lexicon {
        let entries = vec![LexicalEntry {
            id: 0,
            stems: vec!["aqu".into(), "aqu".into()],
            part_of_speech: PartOfSpeech::Noun,
            morph_class: MorphClass::new("1 1"),
            gender: Some(Gender::Feminine),
            gloss: "water".into(),
        }];
        let (artifact, _) = Artifact::build(entries, "test", "2026-01-01T00:00:00Z");
        Lexicon::new(artifact)
    }

    #[test]
    fn exact_lookup() {
        let lex = lexicon();
        let hits = lex.lookup("aquam");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].gloss, "water");
    }

    #[test]
    fn lookup_normalizes_case_and_whitespace() {
        let lex = lexicon();
        assert_eq!(lex.lookup("  AQUAM ").len(), 1);
    }

    #[test]
    fn macron_fallback() {
        let lex = lexicon();
        assert_eq!(lex.lookup("aquā").len(), 1);
        assert_eq!(lex.lookup("aquārum").len(), 1);
    }

    #[test]
    fn unknown_form_is_empty_not_error() {
        let lex = lexicon();
        assert!(lex.lookup("gladius").is_empty());
        assert!(lex.lookup("").is_empty());
        assert!(lex.lookup("   ").is_empty());
    }
}
