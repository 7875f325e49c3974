//! Country flags built from regional indicator symbols.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::Error;

/// `0x1F1E6` (REGIONAL INDICATOR SYMBOL LETTER A) minus `'A'`.
pub const REGIONAL_INDICATOR_BASE: u32 = 127397;

static FLAG_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^:flag-([a-zA-Z]{2}):$").unwrap());

/// Encodes a two-character ISO 3166-1 alpha-2 code (case-insensitive) as a flag emoji.
///
/// Only the length is validated; callers wanting strict A-Z codes should check beforehand.
pub fn encode(code: &str) -> Result<String, Error> {
    let invalid = || Error::InvalidCountryCode(code.to_owned());

    let mut letters = code.chars();
    let (Some(first), Some(second), None) = (letters.next(), letters.next(), letters.next()) else {
        return Err(invalid());
    };

    [first, second]
        .into_iter()
        .map(|letter| {
            let shifted = REGIONAL_INDICATOR_BASE + letter.to_ascii_uppercase() as u32;
            char::from_u32(shifted).ok_or_else(invalid)
        })
        .collect()
}

/// Resolves the implicit `:flag-XY:` alias. Anything else, including codes that
/// fail to encode, is a miss.
pub fn resolve(alias: &str) -> Option<String> {
    let captures = FLAG_REGEX.captures(alias)?;
    encode(&captures[1]).ok()
}

/// Whether `alias` has the `:flag-XY:` shape.
pub fn is_flag_alias(alias: &str) -> bool {
    FLAG_REGEX.is_match(alias)
}
