use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use emojify::prelude::*;
use emojify::{AliasTable, Seed};

/// Represents the contents of `emojify.toml`.
#[derive(Serialize, Deserialize, Default, Debug, PartialEq)]
#[serde(default)]
pub struct Config {
    pub seed: Seed,
    /// Extra `":alias:" = "code"` pairs, registered after the seed.
    pub aliases: BTreeMap<String, String>,
}

impl Config {
    pub fn from_path(path: &Path) -> Result<Self> {
        let toml_raw = match path.exists() {
            true => {
                std::fs::read_to_string(path)
                    .wrap_err("Could not read in configuration file.")
                    .suggestion("The configuration file was found, but couldn't be read - try checking your file permissions.")?
            },
            false => bail!("Configuration file not found: {}", path.display())
        };

        Self::parse(&toml_raw)
    }

    pub fn parse(toml_raw: &str) -> Result<Self> {
        toml::from_str(toml_raw)
            .wrap_err("Could not parse configuration file.")
            .suggestion("Alias tables are written as `\":alias:\" = \"code\"` pairs under `[aliases]`.")
    }

    /// Builds the alias table described by this configuration.
    ///
    /// Configured aliases that the table rejects (duplicates or whitespace) are skipped
    /// with a warning.
    pub fn build_table(&self) -> AliasTable {
        let table = self.seed.build();

        for e in table.insert_all(&self.aliases) {
            warn!("Ignoring configured alias: {e}");
        }

        table
    }
}

#[cfg(test)]
mod tests {
    use indoc::indoc;

    use super::*;

    #[test]
    fn empty() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
    }

    #[test]
    fn full() {
        let config = Config::parse(indoc! {r#"
            [seed]
            gemoji = false

            [aliases]
            ":shipit:" = "🐿️"
            ":ferris:" = "🦀"
        "#}).unwrap();

        assert!(!config.seed.gemoji);
        assert!(config.seed.tones);
        assert_eq!(config.aliases.len(), 2);
        assert_eq!(config.aliases[":ferris:"], "\u{1F980}");
    }

    #[test]
    fn malformed() {
        assert!(Config::parse("[aliases]\n\":a:\" = 5").is_err());
    }

    #[test]
    fn table() {
        let config = Config::parse(indoc! {r#"
            [seed]
            gemoji = false
            tones = false
            custom = false

            [aliases]
            ":ferris:" = "🦀"
            ":two words:" = "x"
        "#}).unwrap();

        let table = config.build_table();

        assert_eq!(table.lookup(":ferris:").as_deref(), Some("\u{1F980}"));
        assert!(!table.exists(":two words:"));
        assert_eq!(table.list().len(), 1);
    }

    #[test]
    fn configured_aliases_never_clobber_the_seed() {
        let config = Config::parse("[aliases]\n\":robot_face:\" = \"x\"").unwrap();

        let table = config.build_table();

        assert_eq!(table.lookup(":robot_face:").as_deref(), Some("\u{1F916}"));
    }
}
