// Coverage checks for forms that earlier index revisions missed: irregular
// third persons (mavult), deponent finite forms (patitur, moritur), and the
// perfect-defective imperatives (memento, mementote).

use std::io::Cursor;

use ludus_morph_lib::{citation, read_entries, Artifact, Lexicon};

fn record(stems: &str, pos: &str, gloss: &str) -> String {
    format!("{stems:<76}{pos:<24}{:<10}{gloss}", "X X X A O")
}

fn fixture() -> String {
    [
        record("aqu                aqu", "N      1 1 F", "water; sea, lake"),
        record("am                 am                 amav               amat", "V      1 1", "love, like; be fond of"),
        record("pati               pat                zzz                pass", "V      3 1 DEP", "suffer; allow; undergo, endure; permit"),
        record("mori               mor                zzz                mortu", "V      3 1 DEP", "die, expire; pass away"),
        record("mal                mal                malu               zzz", "V      6 2 X", "prefer; incline toward, wish rather"),
        record("zzz                zzz                memin              zzz", "V      3 1 PERFDEF", "remember; keep in mind, pay heed to"),
    ]
    .join("\n")
}

fn build() -> Artifact {
    let (entries, stats) = read_entries(Cursor::new(fixture())).unwrap();
    assert_eq!(stats.kept, 6, "every fixture line must survive the filter");
    Artifact::build(entries, "fixture", "2026-01-01T00:00:00Z").0
}

#[test]
fn irregular_and_deponent_forms_are_indexed() {
    let artifact = build();
    for form in ["mavult", "mavis", "malle", "patitur", "patiuntur", "moritur", "memento", "mementote", "memini"] {
        assert!(
            artifact.morph_index.contains_key(form),
            "form {form:?} missing from index"
        );
    }
}

#[test]
fn deponents_generate_no_active_forms() {
    let artifact = build();
    assert!(artifact.morph_index.contains_key("patitur"));
    assert!(
        !artifact.morph_index.contains_key("patit"),
        "a deponent must not inflect in the active voice"
    );
    assert!(!artifact.morph_index.contains_key("morit"));
}

#[test]
fn sentinel_stems_never_reach_the_index() {
    let artifact = build();
    assert!(artifact
        .morph_index
        .keys()
        .all(|k| !k.contains("zzz") && !k.contains("xxx")));
}

#[test]
fn partial_sentinel_entries_are_kept() {
    // memini attests only its perfect stem; the entry must still be present.
    let artifact = build();
    let ids = &artifact.morph_index["memini"];
    assert_eq!(ids.len(), 1);
    let entry = &artifact.entries[ids[0] as usize];
    assert!(entry.gloss.starts_with("remember"));
}

#[test]
fn every_entry_has_a_citation() {
    let artifact = build();
    for entry in &artifact.entries {
        let head = citation(entry);
        assert!(!head.is_empty(), "entry {} has an empty citation", entry.id);
        assert!(!head.contains("zzz"), "citation leaks a sentinel: {head:?}");
    }
}

#[test]
fn macron_queries_fall_back_to_bare_forms() {
    let lexicon = Lexicon::new(build());
    let bare = lexicon.lookup("ametur");
    let accented = lexicon.lookup("amētur");
    assert_eq!(bare.len(), 1);
    assert_eq!(accented.len(), 1);
    assert_eq!(bare[0].id, accented[0].id);
}
