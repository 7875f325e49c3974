use ahash::AHashSet;
use itertools::Itertools;
use once_cell::sync::Lazy;

use super::{Tone, ToneTemplate};
use crate::table::alias_name;

/// A tone-parameterized emoji shipped with the seed table.
#[derive(Debug, Clone)]
pub struct TonedEmoji {
    /// The alias name, without colons.
    pub name: String,
    pub template: ToneTemplate,
}

impl TonedEmoji {
    /// Builds the template from the light-tone variant and, when there is one,
    /// the first variant whose people have different tones.
    fn from_emoji(emoji: &emojis::Emoji) -> Option<Self> {
        let variants: Vec<&str> = emoji.skin_tones()?.map(emojis::Emoji::as_str).collect();

        let light = variants.iter().find(|variant| {
            let tones = modifiers(variant);
            !tones.is_empty() && tones.iter().all(|tone| *tone == Tone::Light)
        })?;

        let mut template = ToneTemplate::build(emoji.as_str(), light);

        if let Some(mixed) = variants.iter().find(|variant| !modifiers(variant).iter().all_equal()) {
            template = template.with_two_toned(mixed);
        }

        Some(Self {
            name: alias_name(emoji.name()),
            template,
        })
    }

    /// The `:name:` alias.
    pub fn alias(&self) -> String {
        format!(":{}:", self.name)
    }
}

fn modifiers(sequence: &str) -> Vec<Tone> {
    sequence.chars().filter_map(Tone::from_modifier).collect()
}

static CATALOG: Lazy<Vec<TonedEmoji>> = Lazy::new(|| {
    let mut names = AHashSet::new();

    emojis::iter()
        .filter_map(TonedEmoji::from_emoji)
        .filter(|emoji| names.insert(emoji.name.clone()))
        .collect()
});

/// Every tone-parameterized emoji in the seed.
pub fn catalog() -> &'static [TonedEmoji] {
    &CATALOG
}

/// Looks up the template for a tone-parameterized alias such as `:thumbs_up:`.
pub fn toned(alias: &str) -> Option<&'static ToneTemplate> {
    let name = alias.strip_prefix(':')?.strip_suffix(':')?;

    CATALOG
        .iter()
        .find(|emoji| emoji.name == name)
        .map(|emoji| &emoji.template)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_alias() {
        let template = toned(":thumbs_up:").unwrap();

        assert_eq!(template.compose(&[]), "\u{1F44D}");
        assert_eq!(template.compose(&[Tone::Dark]), "\u{1F44D}\u{1F3FF}");
        assert!(toned("thumbs_up").is_none());
        assert!(toned(":pizza:").is_none());
    }

    #[test]
    fn untoned_forms_match_bases() {
        let golfing = toned(":woman_golfing:").unwrap();
        assert_eq!(golfing.compose(&[]), "\u{1F3CC}\u{FE0F}\u{200D}\u{2640}\u{FE0F}");

        let technologist = toned(":man_technologist:").unwrap();
        assert_eq!(technologist.compose(&[]), "\u{1F468}\u{200D}\u{1F4BB}");

        let victory = toned(":victory_hand:").unwrap();
        assert_eq!(victory.compose(&[]), "\u{270C}\u{FE0F}");
    }

    #[test]
    fn professions() {
        let teacher = toned(":man_teacher:").unwrap();

        assert_eq!(
            teacher.compose(&[Tone::Dark]),
            "\u{1F468}\u{1F3FF}\u{200D}\u{1F3EB}"
        );
    }

    #[test]
    fn multi_person_tones() {
        let hands = toned(":people_holding_hands:").unwrap();

        assert_eq!(hands.slots(), 2);
        assert_eq!(
            hands.compose(&[Tone::Light, Tone::Dark]),
            "\u{1F9D1}\u{1F3FB}\u{200D}\u{1F91D}\u{200D}\u{1F9D1}\u{1F3FF}"
        );
    }

    #[test]
    fn two_toned_variants() {
        let women = toned(":women_holding_hands:").unwrap();

        assert_eq!(women.slots(), 1);
        assert_eq!(women.compose(&[Tone::Medium]), "\u{1F46D}\u{1F3FD}");
        assert_eq!(
            women.compose(&[Tone::Light, Tone::Dark]),
            "\u{1F469}\u{1F3FB}\u{200D}\u{1F91D}\u{200D}\u{1F469}\u{1F3FF}"
        );
    }

    #[test]
    fn names_are_unique() {
        let mut names: Vec<_> = catalog().iter().map(|emoji| emoji.name.as_str()).collect();
        names.sort_unstable();
        names.dedup();

        assert_eq!(names.len(), catalog().len());
    }
}
