use std::path::PathBuf;

use clap::{Parser, Subcommand};

use emojify::Tone;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Configuration file to use instead of the nearest `emojify.toml`.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Replace emoji aliases in files and print the result.
    Scan {
        /// Files to scan. Reads standard input when empty or `-`.
        files: Vec<PathBuf>,
    },
    /// Print the emoji for a single alias (e.g. `:pizza:`).
    Lookup {
        alias: String,
    },
    /// List known aliases.
    List {
        /// Only show aliases containing this substring.
        #[arg(short, long)]
        filter: Option<String>,
    },
    /// Print the flag for a two-letter country code.
    Flag {
        /// ISO 3166-1 alpha-2 code, case-insensitive (e.g. `tr`).
        code: String,
    },
    /// Render a skin-toned emoji with explicit tones.
    Tone {
        /// A tone-parameterized alias (e.g. `:people_holding_hands:`).
        alias: String,
        /// Tones to apply left to right: default, light, medium-light, medium, medium-dark, dark.
        /// The last tone fills any remaining people.
        tones: Vec<Tone>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tone_arguments() {
        let args = Arguments::try_parse_from(["emojify", "tone", ":handshake:", "light", "medium-dark"]).unwrap();

        let Command::Tone { alias, tones } = args.command else {
            panic!("Expected the tone subcommand.")
        };
        assert_eq!(alias, ":handshake:");
        assert_eq!(tones, vec![Tone::Light, Tone::MediumDark]);
    }

    #[test]
    fn bad_tone() {
        assert!(Arguments::try_parse_from(["emojify", "tone", ":handshake:", "beige"]).is_err());
    }

    #[test]
    fn global_config() {
        let args = Arguments::try_parse_from(["emojify", "scan", "--config", "other.toml", "a.md"]).unwrap();

        assert_eq!(args.config, Some(PathBuf::from("other.toml")));
        assert!(matches!(args.command, Command::Scan { files } if files == [PathBuf::from("a.md")]));
    }
}
