//! Latin morphological generator and reverse index over Whitaker's Words
//! DICTLINE records.
//!
//! The pipeline runs in three stages: [`dictline`] parses the fixed-width
//! source file into [`types::LexicalEntry`] records, [`inflect`] expands each
//! entry into its surface forms, and [`index`] folds the forms into a
//! deterministic form-to-ids map serialized as JSON. [`lookup::Lexicon`]
//! answers queries against a loaded artifact, with a macron-stripped
//! fallback for accented input.

pub mod citation;
pub mod dictline;
pub mod error;
pub mod index;
pub mod inflect;
pub mod lookup;
pub mod normalize;
pub mod types;

pub use citation::citation;
pub use dictline::{parse_line, read_entries, ParseStats};
pub use error::ArtifactError;
pub use index::{Artifact, BuildStats, Metadata, SCHEMA_VERSION};
pub use inflect::generate;
pub use lookup::Lexicon;
pub use types::{Gender, LexicalEntry, MorphClass, PartOfSpeech};
