// Index construction and artifact serialization.
//
// The build folds entries in id order into a BTreeMap keyed by normalized
// form, so bucket contents come out in ascending id order and the JSON
// artifact is byte-identical across runs with the same inputs.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::citation;
use crate::error::ArtifactError;
use crate::inflect;
use crate::normalize::normalize;
use crate::types::LexicalEntry;

/// Artifact schema understood by this crate.
pub const SCHEMA_VERSION: &str = "2.1.0";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    pub version: String,
    pub source: String,
    pub processed: String,
    pub total_entries: usize,
    pub total_forms: usize,
}

/// The serialized index: metadata, the entry table, and the form map.
/// Bucket ids are ascending, which doubles as insertion order.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artifact {
    pub metadata: Metadata,
    pub entries: Vec<LexicalEntry>,
    pub morph_index: BTreeMap<String, Vec<u32>>,
}

/// Counters reported after a build.
#[derive(Debug, Default, Clone, Copy)]
pub struct BuildStats {
    pub entries: usize,
    pub forms: usize,
    /// Entries whose class had no paradigm rule and indexed stems only.
    pub stem_fallbacks: usize,
}

impl Artifact {
    /// Build an artifact from parsed entries. `source` and `processed` are
    /// caller-supplied so that builds from the same input are reproducible.
    pub fn build(entries: Vec<LexicalEntry>, source: &str, processed: &str) -> (Self, BuildStats) {
        let mut morph_index: BTreeMap<String, Vec<u32>> = BTreeMap::new();
        let mut stats = BuildStats {
            entries: entries.len(),
            ..BuildStats::default()
        };

        for entry in &entries {
            let (forms, handled) = inflect::generate_tracked(entry);
            if !handled {
                stats.stem_fallbacks += 1;
            }
            for form in forms {
                let key = normalize(&form);
                if key.is_empty() {
                    continue;
                }
                let bucket = morph_index.entry(key).or_default();
                // Entries fold in id order, so a duplicate can only be the
                // bucket's own tail.
                if bucket.last() != Some(&entry.id) {
                    bucket.push(entry.id);
                }
            }
        }
        stats.forms = morph_index.len();

        info!(
            entries = stats.entries,
            forms = stats.forms,
            stem_fallbacks = stats.stem_fallbacks,
            "index built"
        );

        let artifact = Artifact {
            metadata: Metadata {
                version: SCHEMA_VERSION.to_string(),
                source: source.to_string(),
                processed: processed.to_string(),
                total_entries: stats.entries,
                total_forms: stats.forms,
            },
            entries,
            morph_index,
        };
        (artifact, stats)
    }

    /// Headword line for an entry id, if the id is in range.
    pub fn citation(&self, id: u32) -> Option<String> {
        self.entries.get(id as usize).map(citation::citation)
    }

    pub fn save(&self, path: &Path) -> Result<(), ArtifactError> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, self)?;
        writer.flush()?;
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self, ArtifactError> {
        let file = File::open(path)?;
        let artifact: Artifact = serde_json::from_reader(BufReader::new(file))?;
        if artifact.metadata.version != SCHEMA_VERSION {
            return Err(ArtifactError::SchemaVersion {
                found: artifact.metadata.version.clone(),
                expected: SCHEMA_VERSION.to_string(),
            });
        }
        Ok(artifact)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Gender, MorphClass, PartOfSpeech};

    fn noun(id: u32, stems: &[&str], class: &str) -> LexicalEntry {
        LexicalEntry {
            id,
            stems: stems.iter().map(|s| s.to_string()).collect(),
            part_of_speech: PartOfSpeech::Noun,
            morph_class: MorphClass::new(class),
            gender: Some(Gender::Feminine),
            gloss: "water".into(),
        }
    }

    #[test]
    fn buckets_are_ascending_and_deduplicated() {
        let entries = vec![noun(0, &["aqu", "aqu"], "1 1"), noun(1, &["aqu", "aqu"], "1 1")];
        let (artifact, stats) = Artifact::build(entries, "test", "2026-01-01T00:00:00Z");
        assert_eq!(stats.entries, 2);
        assert_eq!(artifact.morph_index["aqua"], vec![0, 1]);
        assert_eq!(artifact.morph_index["aquarum"], vec![0, 1]);
    }

    #[test]
    fn keys_are_normalized() {
        let entries = vec![noun(0, &["Aqu", "Aqu"], "1 1")];
        let (artifact, _) = Artifact::build(entries, "test", "2026-01-01T00:00:00Z");
        assert!(artifact.morph_index.contains_key("aqua"));
        assert!(!artifact.morph_index.keys().any(|k| k.chars().any(char::is_uppercase)));
    }

    #[test]
    fn builds_are_byte_identical() {
        let entries = || vec![noun(0, &["aqu", "aqu"], "1 1"), noun(1, &["terr", "terr"], "1 1")];
        let (a, _) = Artifact::build(entries(), "test", "2026-01-01T00:00:00Z");
        let (b, _) = Artifact::build(entries(), "test", "2026-01-01T00:00:00Z");
        let ja = serde_json::to_vec(&a).unwrap();
        let jb = serde_json::to_vec(&b).unwrap();
        assert_eq!(ja, jb);
    }

    #[test]
    fn fallback_entries_are_counted() {
        let entries = vec![noun(0, &["qu"], "8 1")];
        let (artifact, stats) = Artifact::build(entries, "test", "2026-01-01T00:00:00Z");
        assert_eq!(stats.stem_fallbacks, 1);
        assert!(artifact.morph_index.contains_key("qu"));
    }

    #[test]
    fn version_mismatch_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.json");
        let (mut artifact, _) = Artifact::build(vec![noun(0, &["aqu", "aqu"], "1 1")], "t", "now");
        artifact.metadata.version = "9.0.0".into();
        artifact.save(&path).unwrap();
        match Artifact::load(&path) {
            Err(ArtifactError::SchemaVersion { found, .. }) => assert_eq!(found, "9.0.0"),
            other => panic!("expected schema version error, got {other:?}"),
        }
    }

    #[test]
    fn save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.json");
        let (artifact, _) = Artifact::build(
            vec![noun(0, &["aqu", "aqu"], "1 1")],
            "dictline",
            "2026-01-01T00:00:00Z",
        );
        artifact.save(&path).unwrap();
        let loaded = Artifact::load(&path).unwrap();
        assert_eq!(loaded.entries.len(), 1);
        assert_eq!(loaded.morph_index, artifact.morph_index);
        assert_eq!(loaded.citation(0).as_deref(), Some("aqua, aquae"));
    }
}
