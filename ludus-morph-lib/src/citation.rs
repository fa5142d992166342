// Dictionary-style citation forms ("aqua, aquae"; "patior, pati, passus sum").
//
// The citation is display text only; it is never indexed. Sentinel stems are
// dropped from the rendered parts, and an entry always yields something
// non-empty because at least one real stem survives the import filter.

use crate::types::{is_sentinel, Gender, LexicalEntry, PartOfSpeech};

/// Render the headword line for an entry.
pub fn citation(entry: &LexicalEntry) -> String {
    let rendered = match entry.part_of_speech {
        PartOfSpeech::Noun => noun_citation(entry),
        PartOfSpeech::Verb => verb_citation(entry),
        PartOfSpeech::Adjective => adjective_citation(entry),
        PartOfSpeech::Pronoun => Some(join_stems(entry)),
        _ => None,
    };
    match rendered {
        Some(text) if !text.is_empty() => text,
        _ => fallback_citation(entry),
    }
}

/// Join parts with ", ", dropping any part built on a sentinel stem.
fn join(parts: &[String]) -> String {
    let kept: Vec<&str> = parts
        .iter()
        .filter(|p| !p.is_empty() && !is_sentinel(p))
        .map(String::as_str)
        .collect();
    kept.join(", ")
}

fn join_stems(entry: &LexicalEntry) -> String {
    let kept: Vec<&str> = entry
        .stems
        .iter()
        .filter(|s| !is_sentinel(s))
        .map(String::as_str)
        .collect();
    kept.join(", ")
}

fn fallback_citation(entry: &LexicalEntry) -> String {
    let joined = join_stems(entry);
    if joined.is_empty() {
        entry.main_stem().to_string()
    } else {
        joined
    }
}

// ---------------------------------------------------------------------------

fn noun_citation(entry: &LexicalEntry) -> Option<String> {
    let stem = entry.main_stem();
    if is_sentinel(stem) {
        return None;
    }
    let text = match entry.morph_class.group() {
        Some(1) => format!("{stem}a, {stem}ae"),
        Some(2) => {
            if entry.gender == Some(Gender::Neuter) {
                format!("{stem}um, {stem}i")
            } else {
                format!("{stem}us, {stem}i")
            }
        }
        Some(3) => {
            // First stem is the nominative itself; genitive rides the
            // oblique stem.
            let oblique = entry.oblique_stem();
            format!("{stem}, {oblique}is")
        }
        Some(4) => {
            if entry.gender == Some(Gender::Neuter) {
                format!("{stem}u, {stem}us")
            } else {
                format!("{stem}us, {stem}us")
            }
        }
        Some(5) => format!("{stem}es, {stem}ei"),
        _ => join_stems(entry),
    };
    Some(text)
}

fn verb_citation(entry: &LexicalEntry) -> Option<String> {
    let class = &entry.morph_class;
    let stem = entry.main_stem();

    // Perfect-only defectives cite the perfect first person: memini, odi.
    if class.has_flag("PERFDEF") {
        return entry.attested_stem(2).map(|p| format!("{p}i"));
    }

    let perfect = entry.attested_stem(2);
    let supine = entry.attested_stem(3);

    if class.has_flag("DEP") {
        let (first, infinitive) = match class.group()? {
            1 => (format!("{stem}or"), format!("{stem}ari")),
            2 => (format!("{stem}eor"), format!("{stem}eri")),
            3 => (format!("{stem}or"), format!("{}i", entry.oblique_stem())),
            4 => (format!("{stem}ior"), format!("{stem}iri")),
            _ => return None,
        };
        let mut parts = vec![first, infinitive];
        if let Some(s) = supine {
            parts.push(format!("{s}us sum"));
        }
        return Some(join(&parts));
    }

    let text = match class.group()? {
        1 => principal_parts(stem, "o", "are", perfect, supine),
        2 => principal_parts(stem, "eo", "ere", perfect, supine),
        3 => principal_parts(stem, "o", "ere", perfect, supine),
        4 => principal_parts(stem, "io", "ire", perfect, supine),
        5 => {
            // sum and possum cite their suppletive parts.
            if stem == "su" {
                "sum, esse, fui, futurus".to_string()
            } else if class.has_flag("TO_BEING") {
                let mut parts = vec![format!("{stem}um"), format!("{stem}e")];
                if let Some(p) = perfect {
                    parts.push(format!("{p}i"));
                }
                join(&parts)
            } else {
                principal_parts(stem, "o", "ere", perfect, supine)
            }
        }
        6 => {
            if matches!(stem, "vol" | "nol" | "mal") {
                let mut parts = vec![format!("{stem}o"), format!("{stem}le")];
                if let Some(p) = perfect {
                    parts.push(format!("{p}i"));
                }
                join(&parts)
            } else {
                // eo cites its infinitive off the second stem: eo, ire.
                let inf_stem = entry.attested_stem(1).unwrap_or(stem);
                let mut parts = vec![format!("{stem}o"), format!("{inf_stem}re")];
                if let Some(p) = perfect {
                    parts.push(format!("{p}i"));
                }
                if let Some(s) = supine {
                    parts.push(format!("{s}um"));
                }
                join(&parts)
            }
        }
        7 => format!("{stem}o"),
        _ => return None,
    };
    Some(text)
}

fn principal_parts(
    stem: &str,
    first: &str,
    infinitive: &str,
    perfect: Option<&str>,
    supine: Option<&str>,
) -> String {
    let mut parts = vec![format!("{stem}{first}"), format!("{stem}{infinitive}")];
    if let Some(p) = perfect {
        parts.push(format!("{p}i"));
    }
    if let Some(s) = supine {
        parts.push(format!("{s}um"));
    }
    join(&parts)
}

fn adjective_citation(entry: &LexicalEntry) -> Option<String> {
    let class = &entry.morph_class;
    let stem = entry.main_stem();
    if class.is_indeclinable() {
        return Some(stem.to_string());
    }
    let tokens: Vec<&str> = class.raw.split_whitespace().collect();
    if class.raw.starts_with("1 1") || (tokens.contains(&"1") && tokens.contains(&"2")) {
        return Some(format!("{stem}us, {stem}a, {stem}um"));
    }
    if class.group() == Some(3) {
        // Third declension: nominative then genitive.
        let nominative = entry.attested_stem(1).unwrap_or(stem);
        return Some(format!("{nominative}, {stem}is"));
    }
    Some(join_stems(entry))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MorphClass;

    fn entry(stems: &[&str], pos: PartOfSpeech, class: &str, gender: Option<Gender>) -> LexicalEntry {
        LexicalEntry {
            id: 0,
            stems: stems.iter().map(|s| s.to_string()).collect(),
            part_of_speech: pos,
            morph_class: MorphClass::new(class),
            gender,
            gloss: "test gloss".into(),
        }
    }

    #[test]
    fn noun_citations() {
        let aqua = entry(&["aqu", "aqu"], PartOfSpeech::Noun, "1 1", Some(Gender::Feminine));
        assert_eq!(citation(&aqua), "aqua, aquae");

        let rex = entry(&["rex", "reg"], PartOfSpeech::Noun, "3 1", Some(Gender::Masculine));
        assert_eq!(citation(&rex), "rex, regis");

        let bellum = entry(&["bell", "bell"], PartOfSpeech::Noun, "2 2", Some(Gender::Neuter));
        assert_eq!(citation(&bellum), "bellum, belli");

        let res = entry(&["r", "r"], PartOfSpeech::Noun, "5 1", Some(Gender::Feminine));
        assert_eq!(citation(&res), "res, rei");
    }

    #[test]
    fn regular_verb_citation() {
        let amo = entry(&["am", "am", "amav", "amat"], PartOfSpeech::Verb, "1 1", None);
        assert_eq!(citation(&amo), "amo, amare, amavi, amatum");
    }

    #[test]
    fn deponent_citation_ends_in_sum() {
        let patior = entry(&["pati", "pat", "zzz", "pass"], PartOfSpeech::Verb, "3 1 DEP", None);
        assert_eq!(citation(&patior), "patior, pati, passus sum");
    }

    #[test]
    fn perfdef_cites_perfect_first_person() {
        let memini = entry(
            &["zzz", "zzz", "memin", "zzz"],
            PartOfSpeech::Verb,
            "3 1 PERFDEF",
            None,
        );
        assert_eq!(citation(&memini), "memini");
    }

    #[test]
    fn irregular_sixth_conjugation_citations() {
        let malo = entry(&["mal", "mal", "malu", "zzz"], PartOfSpeech::Verb, "6 2 X", None);
        assert_eq!(citation(&malo), "malo, malle, malui");

        let eo = entry(&["e", "i", "iv", "it"], PartOfSpeech::Verb, "6 1 X", None);
        assert_eq!(citation(&eo), "eo, ire, ivi, itum");
    }

    #[test]
    fn sum_and_possum() {
        let sum = entry(&["su", "zzz", "fu", "fut"], PartOfSpeech::Verb, "5 1 TO_BEING", None);
        assert_eq!(citation(&sum), "sum, esse, fui, futurus");

        let possum = entry(&["poss", "pot", "potu", "zzz"], PartOfSpeech::Verb, "5 2 TO_BEING", None);
        assert_eq!(citation(&possum), "possum, posse, potui");
    }

    #[test]
    fn sentinel_parts_are_dropped() {
        let verb = entry(&["clam", "clam", "zzz", "zzz"], PartOfSpeech::Verb, "1 1", None);
        assert_eq!(citation(&verb), "clamo, clamare");
    }

    #[test]
    fn adjective_citations() {
        let bonus = entry(&["bon", "bon"], PartOfSpeech::Adjective, "1 1", None);
        assert_eq!(citation(&bonus), "bonus, bona, bonum");

        let fortis = entry(&["fort", "fortis"], PartOfSpeech::Adjective, "3 2", None);
        assert_eq!(citation(&fortis), "fortis, fortis");

        let satis = entry(&["satis"], PartOfSpeech::Adjective, "9 9", None);
        assert_eq!(citation(&satis), "satis");
    }

    #[test]
    fn citation_is_never_empty() {
        let odd = entry(&["qu"], PartOfSpeech::Noun, "8 1", None);
        assert!(!citation(&odd).is_empty());

        let adverb = entry(&["semper"], PartOfSpeech::Adverb, "", None);
        assert_eq!(citation(&adverb), "semper");
    }
}
