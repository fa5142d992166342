// Rule-table inflection generator.
//
// For each entry we emit every surface form its paradigm can produce:
//   A. The attested stems themselves (always searchable).
//   B. Table-driven endings keyed by (part of speech, class group, flags).
//   C. Hand-specified paradigms for a short list of irregular verbs,
//      checked before the generic dispatch.
//
// Generation is pure and best-effort: an unhandled class degrades to the
// stem set, and a sentinel stem silently aborts any form built on it.

use crate::types::{is_sentinel, Gender, LexicalEntry, PartOfSpeech};
use std::collections::HashSet;

// ---------------------------------------------------------------------------
// Noun and adjective ending tables
// ---------------------------------------------------------------------------

const NOUN_1: &[&str] = &["a", "ae", "am", "as", "arum", "is"];
const NOUN_2: &[&str] = &["us", "um", "i", "o", "os", "orum", "is"];
const NOUN_2_NEUTER: &[&str] = &["um", "i", "o", "a", "orum", "is"];
const NOUN_3: &[&str] = &["is", "i", "em", "e", "es", "um", "ibus"];
// Neuter third declension: nominative/accusative plural in -a, never -es.
const NOUN_3_NEUTER: &[&str] = &["is", "i", "e", "a", "um", "ibus"];
const NOUN_4: &[&str] = &["us", "ui", "u", "um", "uum", "ibus"];
const NOUN_5: &[&str] = &["es", "ei", "em", "e", "erum", "ebus"];

const ADJ_1_2: &[&str] = &[
    "us", "a", "um", "i", "ae", "o", "am", "as", "os", "orum", "arum", "is",
];
const ADJ_3: &[&str] = &["is", "i", "em", "e", "es", "ium", "ibus", "ia"];

// ---------------------------------------------------------------------------
// Verb paradigm tables, one per regular conjugation
// ---------------------------------------------------------------------------

/// Ending tables for one regular conjugation's present and perfect systems.
struct Conjugation {
    present: &'static [&'static str; 6],
    imperfect: &'static [&'static str; 6],
    future: &'static [&'static str; 6],
    subjunctive: &'static [&'static str; 6],
    infinitive: &'static str,
    imperative: [&'static str; 2],
    passive_present: &'static [&'static str; 6],
    passive_imperfect: &'static [&'static str; 6],
    passive_subjunctive: &'static [&'static str; 6],
    passive_infinitive: &'static str,
    participle: &'static [&'static str],
}

const CONJ_1: Conjugation = Conjugation {
    present: &["o", "as", "at", "amus", "atis", "ant"],
    imperfect: &["abam", "abas", "abat", "abamus", "abatis", "abant"],
    future: &["abo", "abis", "abit", "abimus", "abitis", "abunt"],
    subjunctive: &["em", "es", "et", "emus", "etis", "ent"],
    infinitive: "are",
    imperative: ["a", "ate"],
    passive_present: &["or", "aris", "atur", "amur", "amini", "antur"],
    passive_imperfect: &["abar", "abaris", "abatur", "abamur", "abamini", "abantur"],
    passive_subjunctive: &["er", "eris", "etur", "emur", "emini", "entur"],
    passive_infinitive: "ari",
    participle: &["ans", "antis", "antem", "antes", "antibus"],
};

const CONJ_2: Conjugation = Conjugation {
    present: &["eo", "es", "et", "emus", "etis", "ent"],
    imperfect: &["ebam", "ebas", "ebat", "ebamus", "ebatis", "ebant"],
    future: &["ebo", "ebis", "ebit", "ebimus", "ebitis", "ebunt"],
    subjunctive: &["eam", "eas", "eat", "eamus", "eatis", "eant"],
    infinitive: "ere",
    imperative: ["e", "ete"],
    passive_present: &["eor", "eris", "etur", "emur", "emini", "entur"],
    passive_imperfect: &["ebar", "ebaris", "ebatur", "ebamur", "ebamini", "ebantur"],
    passive_subjunctive: &["ear", "earis", "eatur", "eamur", "eamini", "eantur"],
    passive_infinitive: "eri",
    participle: &["ens", "entis", "entem", "entes", "entibus"],
};

const CONJ_3: Conjugation = Conjugation {
    present: &["o", "is", "it", "imus", "itis", "unt"],
    imperfect: &["ebam", "ebas", "ebat", "ebamus", "ebatis", "ebant"],
    future: &["am", "es", "et", "emus", "etis", "ent"],
    subjunctive: &["am", "as", "at", "amus", "atis", "ant"],
    infinitive: "ere",
    imperative: ["e", "ite"],
    passive_present: &["or", "eris", "itur", "imur", "imini", "untur"],
    passive_imperfect: &["ebar", "ebaris", "ebatur", "ebamur", "ebamini", "ebantur"],
    passive_subjunctive: &["ar", "aris", "atur", "amur", "amini", "antur"],
    passive_infinitive: "i",
    participle: &["ens", "entis", "entem", "entes", "entibus"],
};

const CONJ_4: Conjugation = Conjugation {
    present: &["io", "is", "it", "imus", "itis", "iunt"],
    imperfect: &["iebam", "iebas", "iebat", "iebamus", "iebatis", "iebant"],
    future: &["iam", "ies", "iet", "iemus", "ietis", "ient"],
    subjunctive: &["iam", "ias", "iat", "iamus", "iatis", "iant"],
    infinitive: "ire",
    imperative: ["i", "ite"],
    passive_present: &["ior", "iris", "itur", "imur", "imini", "iuntur"],
    passive_imperfect: &["iebar", "iebaris", "iebatur", "iebamur", "iebamini", "iebantur"],
    passive_subjunctive: &["iar", "iaris", "iatur", "iamur", "iamini", "iantur"],
    passive_infinitive: "iri",
    participle: &["iens", "ientis", "ientem", "ientes", "ientibus"],
};

fn conjugation(group: u32) -> Option<&'static Conjugation> {
    match group {
        1 => Some(&CONJ_1),
        2 => Some(&CONJ_2),
        3 => Some(&CONJ_3),
        4 => Some(&CONJ_4),
        _ => None,
    }
}

// Perfect-system endings are shared by all conjugations.
const PERFECT: &[&str] = &["i", "isti", "it", "imus", "istis", "erunt", "ere"];
const PLUPERFECT: &[&str] = &["eram", "eras", "erat", "eramus", "eratis", "erant"];
const FUTURE_PERFECT: &[&str] = &["ero", "eris", "erit", "erimus", "eritis", "erint"];
const PERFECT_SUBJUNCTIVE: &[&str] = &["erim", "eris", "erit", "erimus", "eritis", "erint"];
const PERFECT_INFINITIVE: &str = "isse";

// Perfect passive participle declined on the supine stem (stem 4).
const PARTICIPLE: &[&str] = &["us", "a", "um", "i", "ae", "o", "am", "is", "os", "as", "u"];
// Deponent perfect participle: nominative triple only, active meaning.
const PARTICIPLE_NOM: &[&str] = &["us", "a", "um"];

// Generic sixth-conjugation ("eo"-pattern) present endings for irregular
// class 6 verbs without a hand-specified paradigm.
const EO_PATTERN: &[&str] = &["o", "is", "it", "imus", "itis", "unt"];
// Defective class 7 verbs attest only a thin present set.
const DEFECTIVE_PRESENT: &[&str] = &["o", "s", "t", "unt"];

// ---------------------------------------------------------------------------
// Irregular verb overrides
// ---------------------------------------------------------------------------

/// One hand-specified present-system paradigm, matched on the first stem
/// and class group before generic dispatch. The perfect system and the
/// participle (stems 3 and 4) still attach generically afterwards, so
/// `fero` gets `tuli`/`latus` from its own stems.
struct Irregular {
    stem: &'static str,
    group: u32,
    forms: &'static [&'static str],
}

#[rustfmt::skip]
const IRREGULARS: &[Irregular] = &[
    Irregular { stem: "su", group: 5, forms: &[
        "sum", "es", "est", "sumus", "estis", "sunt",
        "eram", "eras", "erat", "eramus", "eratis", "erant",
        "ero", "eris", "erit", "erimus", "eritis", "erunt",
        "sim", "sis", "sit", "simus", "sitis", "sint",
        "esse", "fore", "futurus", "futura", "futurum", "ens", "entis",
    ]},
    Irregular { stem: "poss", group: 5, forms: &[
        "possum", "potes", "potest", "possumus", "potestis", "possunt",
        "poteram", "poterat", "poterant", "potero", "poterit",
        "possim", "possit", "possint", "posse",
    ]},
    Irregular { stem: "e", group: 6, forms: &[
        "eo", "is", "it", "imus", "itis", "eunt",
        "ibam", "ibas", "ibat", "ibamus", "ibatis", "ibant",
        "ibo", "ibis", "ibit", "ibimus", "ibitis", "ibunt",
        "eam", "eas", "eat", "eamus", "eatis", "eant",
        "ire", "i", "ite", "iens", "euntis",
    ]},
    Irregular { stem: "fer", group: 3, forms: &[
        "fero", "fers", "fert", "ferimus", "fertis", "ferunt",
        "ferebam", "ferebas", "ferebat", "ferebamus", "ferebatis", "ferebant",
        "feram", "feres", "feret", "feremus", "feretis", "ferent",
        "ferre", "ferri", "fer", "ferte",
    ]},
    Irregular { stem: "vol", group: 6, forms: &[
        "volo", "vis", "vult", "volumus", "vultis", "volunt",
        "volebam", "volebas", "volebat", "volebamus", "volebatis", "volebant",
        "velim", "velis", "velit", "velimus", "velitis", "velint",
        "velle", "volens",
    ]},
    Irregular { stem: "nol", group: 6, forms: &[
        "nolo", "nolumus", "nolunt",
        "nolebam", "nolebat", "nolebant",
        "nolim", "nolis", "nolit", "nolimus", "nolitis", "nolint",
        "nolle", "noli", "nolite",
    ]},
    Irregular { stem: "mal", group: 6, forms: &[
        "malo", "mavis", "mavult", "malumus", "mavultis", "malunt",
        "malebam", "malebas", "malebat", "malebamus", "malebatis", "malebant",
        "malim", "malis", "malit", "malimus", "malitis", "malint",
        "malle",
    ]},
    Irregular { stem: "inqu", group: 7, forms: &[
        "inquam", "inquis", "inquit", "inquimus", "inquiunt", "inquii", "inquisti",
    ]},
    Irregular { stem: "ai", group: 7, forms: &[
        "aio", "ais", "ait", "aiunt", "aiebam", "aiebat", "aiebant",
    ]},
];

// ---------------------------------------------------------------------------
// Ordered, duplicate-free form accumulator
// ---------------------------------------------------------------------------

/// Collects forms preserving first-insertion order, so index buckets come
/// out identical on every run.
struct Forms {
    seen: HashSet<String>,
    out: Vec<String>,
}

impl Forms {
    fn new() -> Self {
        Self {
            seen: HashSet::new(),
            out: Vec::new(),
        }
    }

    fn push(&mut self, form: String) {
        if form.is_empty() {
            return;
        }
        if self.seen.insert(form.clone()) {
            self.out.push(form);
        }
    }

    /// Append endings to a stem. A sentinel stem aborts the whole batch:
    /// no placeholder text may leak into the index.
    fn attach(&mut self, stem: &str, endings: &[&str]) {
        if is_sentinel(stem) {
            return;
        }
        for ending in endings {
            self.push(format!("{stem}{ending}"));
        }
    }

    fn attach_one(&mut self, stem: &str, ending: &str) {
        self.attach(stem, &[ending]);
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Generate every surface form of an entry, in deterministic order.
///
/// The result always contains the attested stems. Unhandled part-of-speech
/// or class combinations degrade to the stem set alone.
pub fn generate(entry: &LexicalEntry) -> Vec<String> {
    generate_tracked(entry).0
}

/// Like [`generate`], but also reports whether a paradigm rule applied.
/// The index builder counts stems-only fallbacks for coverage visibility.
pub(crate) fn generate_tracked(entry: &LexicalEntry) -> (Vec<String>, bool) {
    let mut forms = Forms::new();
    for stem in &entry.stems {
        if !is_sentinel(stem) {
            forms.push(stem.clone());
        }
    }

    let handled = match entry.part_of_speech {
        PartOfSpeech::Noun => noun_forms(entry, &mut forms),
        PartOfSpeech::Adjective => adjective_forms(entry, &mut forms),
        PartOfSpeech::Verb => verb_forms(entry, &mut forms),
        // Uninflected or pronoun-class entries index their stems as-is.
        _ => true,
    };

    (forms.out, handled)
}

// ---------------------------------------------------------------------------
// Nouns
// ---------------------------------------------------------------------------

fn noun_forms(entry: &LexicalEntry, forms: &mut Forms) -> bool {
    let stem = entry.main_stem();
    let neuter = entry.gender == Some(Gender::Neuter);

    match entry.morph_class.group() {
        Some(1) => forms.attach(stem, NOUN_1),
        Some(2) => forms.attach(stem, if neuter { NOUN_2_NEUTER } else { NOUN_2 }),
        Some(3) => {
            // The nominative is the first stem itself; every ending rides
            // the oblique stem.
            let oblique = entry.oblique_stem();
            forms.attach(oblique, if neuter { NOUN_3_NEUTER } else { NOUN_3 });
        }
        Some(4) => forms.attach(stem, NOUN_4),
        Some(5) => forms.attach(stem, NOUN_5),
        _ => return false,
    }
    true
}

// ---------------------------------------------------------------------------
// Adjectives
// ---------------------------------------------------------------------------

fn adjective_forms(entry: &LexicalEntry, forms: &mut Forms) -> bool {
    let class = &entry.morph_class;
    if class.is_indeclinable() {
        // "9 9": the stem is the only form.
        return true;
    }
    let tokens: Vec<&str> = class.raw.split_whitespace().collect();
    if tokens.contains(&"1") && tokens.contains(&"2") || class.raw == "1 1" {
        forms.attach(entry.main_stem(), ADJ_1_2);
        true
    } else if class.group() == Some(3) {
        forms.attach(entry.oblique_stem(), ADJ_3);
        true
    } else {
        false
    }
}

// ---------------------------------------------------------------------------
// Verbs
// ---------------------------------------------------------------------------

fn verb_forms(entry: &LexicalEntry, forms: &mut Forms) -> bool {
    let class = &entry.morph_class;
    let stem = entry.main_stem();

    if class.has_flag("PERFDEF") {
        return perfdef_forms(entry, forms);
    }

    if let Some(irregular) = IRREGULARS
        .iter()
        .find(|ir| ir.stem == stem && Some(ir.group) == class.group())
    {
        for form in irregular.forms {
            forms.push((*form).to_string());
        }
        attach_perfect_system(entry, forms);
        attach_participle(entry, forms, PARTICIPLE);
        return true;
    }

    if class.has_flag("DEP") {
        return deponent_forms(entry, forms);
    }

    match class.group() {
        Some(g @ 1..=4) => {
            regular_verb_forms(entry, conjugation(g).unwrap_or(&CONJ_1), g, forms);
            true
        }
        Some(6) => {
            // Non-irregular class 6 follows the generic "eo" pattern.
            forms.attach(stem, EO_PATTERN);
            match entry.attested_stem(1) {
                Some(inf_stem) => forms.attach_one(inf_stem, "re"),
                None => forms.attach_one(stem, "ire"),
            }
            attach_perfect_system(entry, forms);
            attach_participle(entry, forms, PARTICIPLE);
            true
        }
        Some(7) => {
            forms.attach(stem, DEFECTIVE_PRESENT);
            attach_perfect_system(entry, forms);
            true
        }
        _ => false,
    }
}

/// Present, imperfect, future, subjunctive, infinitive, imperative,
/// passive present system, and present participle of a regular verb, plus
/// the perfect system and participle when those stems are attested.
fn regular_verb_forms(entry: &LexicalEntry, conj: &Conjugation, group: u32, forms: &mut Forms) {
    let stem = entry.main_stem();

    // Third-conjugation -io verbs (capio, facio) keep the full stem for
    // 1sg/3pl and drop the i before the short endings.
    if group == 3 && stem.ends_with('i') {
        let short = &stem[..stem.len() - 1];
        forms.attach_one(stem, "o");
        forms.attach(short, &["is", "it", "imus", "itis"]);
        forms.attach_one(stem, "unt");
    } else {
        forms.attach(stem, conj.present);
    }

    forms.attach(stem, conj.imperfect);
    forms.attach(stem, conj.future);
    forms.attach(stem, conj.subjunctive);
    forms.attach_one(stem, conj.infinitive);
    forms.attach(stem, &conj.imperative);
    forms.attach(stem, conj.participle);

    forms.attach(stem, conj.passive_present);
    forms.attach(stem, conj.passive_subjunctive);
    forms.attach_one(passive_infinitive_stem(entry, group), conj.passive_infinitive);

    attach_perfect_system(entry, forms);
    attach_participle(entry, forms, PARTICIPLE);
}

/// Deponents carry passive morphology with active meaning and generate no
/// active-voice forms at all.
fn deponent_forms(entry: &LexicalEntry, forms: &mut Forms) -> bool {
    let Some(group) = entry.morph_class.group() else {
        return false;
    };
    let Some(conj) = conjugation(group) else {
        return false;
    };

    let stem = entry.main_stem();
    // Third conjugation splits the paradigm across stems: patior from
    // "pati", patitur from the oblique "pat".
    let oblique = entry.oblique_stem();

    forms.attach_one(stem, conj.passive_present[0]);
    forms.attach(oblique, &conj.passive_present[1..]);
    // -io deponents (patior, morior) also take the -iuntur 3pl.
    if group == 3 && stem.ends_with('i') {
        forms.attach_one(stem, "untur");
    }

    forms.attach(stem, conj.passive_imperfect);
    forms.attach(stem, conj.passive_subjunctive);
    forms.attach_one(passive_infinitive_stem(entry, group), conj.passive_infinitive);

    // The perfect participle of a deponent reads actively ("having
    // suffered"); the finite perfect is periphrastic and not indexed.
    attach_participle(entry, forms, PARTICIPLE_NOM);
    true
}

/// Perfect-only defectives (memini, odi) build everything from the perfect
/// stem, with the perfect endings reading as present tense, plus the
/// irregular future imperative (memento, mementote).
fn perfdef_forms(entry: &LexicalEntry, forms: &mut Forms) -> bool {
    let Some(perfect) = entry.attested_stem(2) else {
        return false;
    };
    forms.attach(perfect, PERFECT);
    forms.attach(perfect, PLUPERFECT);
    forms.attach_one(perfect, PERFECT_INFINITIVE);

    // memin + ento would mis-derive "meminento"; the imperative drops the
    // final -in: memento, mementote.
    let imperative = perfect.strip_suffix("in").unwrap_or(perfect);
    forms.attach(imperative, &["ento", "entote"]);
    true
}

fn attach_perfect_system(entry: &LexicalEntry, forms: &mut Forms) {
    let Some(perfect) = entry.attested_stem(2) else {
        return;
    };
    forms.attach(perfect, PERFECT);
    forms.attach(perfect, PLUPERFECT);
    forms.attach(perfect, FUTURE_PERFECT);
    forms.attach(perfect, PERFECT_SUBJUNCTIVE);
    forms.attach_one(perfect, PERFECT_INFINITIVE);
}

fn attach_participle(entry: &LexicalEntry, forms: &mut Forms, endings: &[&str]) {
    if let Some(supine) = entry.attested_stem(3) {
        forms.attach(supine, endings);
    }
}

/// The present passive infinitive hangs off the oblique stem in the third
/// conjugation (duc-i, pat-i) and the main stem elsewhere (am-ari).
fn passive_infinitive_stem(entry: &LexicalEntry, group: u32) -> &str {
    if group == 3 {
        entry.oblique_stem()
    } else {
        entry.main_stem()
    }
}
