//! Resolves `:emoji:` aliases embedded in text into Unicode emoji.
//!
//! ```
//! assert_eq!(emojify::scan("Lunch is :pizza:!"), "Lunch is \u{1F355}!");
//! ```
//!
//! The free functions in this crate operate on the process-wide [`AliasTable::global()`],
//! which is seeded with the gemoji alias set, every Unicode emoji under its snake_cased
//! CLDR name (`:grinning_face:`), the skin-toned variants of those names
//! (`:thumbs_up_dark_skin_tone:`) and a few custom aliases. Build an [`AliasTable`] directly for an isolated table.

#![warn(clippy::perf, clippy::style, warnings)]

pub mod error;
pub mod flag;
#[doc(hidden)]
pub mod prelude;
pub mod scan;
pub mod table;
pub mod tone;

use std::sync::Arc;

pub use error::Error;
pub use scan::Scanner;
pub use table::{AliasTable, Aliases, Seed};
pub use tone::{Tone, ToneTemplate};

/// Replaces every alias in `text` using the global table. Safe to call concurrently.
pub fn scan(text: &str) -> String {
    AliasTable::global().scan(text)
}

/// A reusable scanner over the global table.
pub fn new_scanner() -> Scanner<'static> {
    AliasTable::global().scanner()
}

/// Looks up `alias` (e.g. `:pizza:`) in the global table, falling back to `:flag-XY:`.
pub fn lookup(alias: &str) -> Option<String> {
    AliasTable::global().lookup(alias)
}

pub fn exists(alias: &str) -> bool {
    AliasTable::global().exists(alias)
}

/// Adds an alias to the global table. Existing aliases are never overwritten.
pub fn register_alias(alias: impl Into<String>, code: impl Into<String>) -> Result<(), Error> {
    AliasTable::global().insert(alias, code)
}

/// A read-only snapshot of the global table.
pub fn list_aliases() -> Arc<Aliases> {
    AliasTable::global().list()
}

/// Builds a flag emoji from a two-letter country code.
pub fn encode_country_flag(code: &str) -> Result<String, Error> {
    flag::encode(code)
}

/// Renders a tone-parameterized emoji with explicit tones.
pub fn compose_tone(template: &ToneTemplate, tones: &[Tone]) -> String {
    tone::compose(template, tones)
}

/// The catalog template behind a tone-parameterized alias such as `:thumbs_up:`.
pub fn toned(alias: &str) -> Option<&'static ToneTemplate> {
    tone::toned(alias)
}
