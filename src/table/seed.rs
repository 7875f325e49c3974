use gh_emoji as emoji;
use serde::{Deserialize, Serialize};

use super::{unicode, AliasTable};
use crate::prelude::*;
use crate::tone::{catalog, Tone};

/// Aliases that neither gemoji nor the Unicode names carry.
pub const CUSTOM_ALIASES: &[(&str, &str)] = &[
    // Slack
    (":robot_face:", "\u{1F916}"),
    // Renamed to "Türkiye" in CLDR
    (":flag_for_turkey:", "\u{1F1F9}\u{1F1F7}"),
];

/// Which compiled-in sources populate a seeded [`AliasTable`].
///
/// Sources are registered in declaration order; when two of them produce the same alias
/// the first registration wins.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct Seed {
    /// The gemoji alias set shipped by `gh-emoji`.
    pub gemoji: bool,
    /// Every Unicode emoji under its snake_cased CLDR name, such as `:grinning_face:`.
    pub unicode: bool,
    /// The tone catalog, expanded into `:name_<tone>_skin_tone:` entries.
    pub tones: bool,
    /// [`CUSTOM_ALIASES`].
    pub custom: bool,
}

impl Default for Seed {
    fn default() -> Self {
        Seed {
            gemoji: true,
            unicode: true,
            tones: true,
            custom: true,
        }
    }
}

impl Seed {
    /// Every `(alias, code)` pair this seed registers, in registration order.
    pub fn entries(&self) -> Vec<(String, String)> {
        let mut entries = Vec::new();

        if self.gemoji {
            entries.extend(
                emoji::all().map(|(name, code)| (format!(":{name}:"), code.to_owned()))
            );
        }

        if self.unicode {
            entries.extend(unicode::entries());
        }

        if self.tones {
            entries.extend(toned_entries());
        }

        if self.custom {
            entries.extend(
                CUSTOM_ALIASES
                    .iter()
                    .map(|(alias, code)| (alias.to_string(), code.to_string()))
            );
        }

        entries
    }

    /// Builds a new table holding this seed.
    pub fn build(&self) -> AliasTable {
        let table = AliasTable::new();
        self.populate(&table);
        table
    }

    /// Registers this seed into an existing table, returning how many entries were accepted.
    pub fn populate(&self, table: &AliasTable) -> usize {
        let entries = self.entries();
        let total = entries.len();

        let rejected = table.insert_all(entries);
        for e in &rejected {
            debug!("Seed entry skipped: {e}");
        }

        let accepted = total - rejected.len();
        debug!("Seeded alias table with {accepted} entries ({} skipped).", rejected.len());
        accepted
    }
}

/// Composes every skin tone of the tone catalog into ready-made aliases.
fn toned_entries() -> impl Iterator<Item = (String, String)> {
    catalog().iter().flat_map(|emoji| {
        Tone::MODIFIERS.into_iter().filter_map(move |tone| {
            let suffix = tone.alias_suffix()?;
            let alias = format!(":{}_{suffix}:", emoji.name);
            Some((alias, emoji.template.compose(&[tone])))
        })
    })
}
