//! Core of the phonotax toolkit.
//!
//! This crate models speech sounds for constructed-language work. The
//! layers build on each other roughly as:
//!
//!   description text ("voiced bilabial plosive")
//!     -> features    (bitfield codec)
//!     -> table       (built-in IPA / X-SAMPA inventory)
//!     -> sonority    (bands and scores)
//!     -> syllable + phonotactics (analysis and combining rules)
//!     -> generator   (lazy enumeration of legal syllables)
//!
//! Higher-level tools (the CLI in particular) should depend on this crate
//! rather than reimplementing the rules.

// ---------------------------------------------------------------------
// Error handling
// ---------------------------------------------------------------------

pub mod error;

// ---------------------------------------------------------------------
// Sounds: feature codec, phoneme type and the built-in table
// ---------------------------------------------------------------------

pub mod features;
pub mod phoneme;
pub mod table;

// ---------------------------------------------------------------------
// Analysis: sonority, syllable structure, combining rules
// ---------------------------------------------------------------------

pub mod sonority;
pub mod syllable;
pub mod phonotactics;

// ---------------------------------------------------------------------
// Generation: shapes, inventories, candidate enumeration
// ---------------------------------------------------------------------

pub mod pattern;
pub mod inventory;
pub mod generator;

// ---------------------------------------------------------------------
// Public API re-exports
// ---------------------------------------------------------------------

pub use error::CoreError;
pub use generator::{Candidates, candidates};
pub use inventory::Inventory;
pub use pattern::{Pattern, Slot};
pub use phoneme::Phoneme;
pub use phonotactics::{Violation, check, why_not_next};
pub use sonority::{Band, can_be_vocalic, sonority};
pub use syllable::Syllable;
pub use table::{Notation, PhonemeTable, lookup, lookup_alt, parse_ipa, parse_xsampa, spell};
