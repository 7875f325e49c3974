//! Skin tone modifiers and tone-parameterized emoji templates.

mod catalog;

pub use catalog::{catalog, toned, TonedEmoji};

use std::fmt::{self, Display};
use std::str::FromStr;

use crate::Error;

/// Marker used when writing a template by hand; each occurrence becomes a tone slot.
pub const PLACEHOLDER: char = '@';

/// Emoji presentation selector (VS16).
pub const PRESENTATION_SELECTOR: &str = "\u{FE0F}";

/// A skin tone selection. [`Tone::Default`] inserts nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tone {
    #[default]
    Default,
    Light,
    MediumLight,
    Medium,
    MediumDark,
    Dark,
}

impl Tone {
    /// The five Fitzpatrick modifiers, lightest first.
    pub const MODIFIERS: [Tone; 5] = [
        Tone::Light,
        Tone::MediumLight,
        Tone::Medium,
        Tone::MediumDark,
        Tone::Dark,
    ];

    /// The modifier codepoint(s) this tone inserts into a slot.
    pub const fn as_str(self) -> &'static str {
        match self {
            Tone::Default => "",
            Tone::Light => "\u{1F3FB}",
            Tone::MediumLight => "\u{1F3FC}",
            Tone::Medium => "\u{1F3FD}",
            Tone::MediumDark => "\u{1F3FE}",
            Tone::Dark => "\u{1F3FF}",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Tone::Default => "default",
            Tone::Light => "light",
            Tone::MediumLight => "medium-light",
            Tone::Medium => "medium",
            Tone::MediumDark => "medium-dark",
            Tone::Dark => "dark",
        }
    }

    /// Suffix appended to a base alias name for the single-toned variant,
    /// e.g. `thumbs_up` + `_` + `medium_dark_skin_tone`.
    pub const fn alias_suffix(self) -> Option<&'static str> {
        match self {
            Tone::Default => None,
            Tone::Light => Some("light_skin_tone"),
            Tone::MediumLight => Some("medium_light_skin_tone"),
            Tone::Medium => Some("medium_skin_tone"),
            Tone::MediumDark => Some("medium_dark_skin_tone"),
            Tone::Dark => Some("dark_skin_tone"),
        }
    }

    /// Maps a modifier codepoint back to its tone.
    pub fn from_modifier(c: char) -> Option<Tone> {
        Self::MODIFIERS
            .into_iter()
            .find(|tone| tone.as_str().starts_with(c))
    }
}

impl Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tone {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase().replace('_', "-");

        [Tone::Default]
            .into_iter()
            .chain(Self::MODIFIERS)
            .find(|tone| tone.name() == name)
            .ok_or_else(|| Error::UnknownTone(s.to_owned()))
    }
}

/// One concrete layout of a template: literal segments separated by tone slots.
///
/// Always holds `slots + 1` segments, so literal text is never scanned for markers
/// once parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Slotted {
    segments: Vec<String>,
}

impl Slotted {
    fn parse(source: &str) -> Self {
        Self {
            segments: source.split(PLACEHOLDER).map(str::to_owned).collect(),
        }
    }

    fn from_toned(sequence: &str) -> Self {
        let mut segments = vec![String::new()];

        for c in sequence.chars() {
            match Tone::from_modifier(c) {
                Some(_) => segments.push(String::new()),
                None => {
                    if let Some(segment) = segments.last_mut() {
                        segment.push(c)
                    }
                }
            }
        }

        Self { segments }
    }

    fn slots(&self) -> usize {
        self.segments.len() - 1
    }

    fn fill(&self, tone: impl Fn(usize) -> &'static str) -> String {
        let capacity = self.segments.iter().map(String::len).sum::<usize>() + self.slots() * 4;
        let mut buffer = String::with_capacity(capacity);

        for (slot, segment) in self.segments.iter().enumerate() {
            if slot > 0 {
                buffer.push_str(tone(slot - 1));
            }
            buffer.push_str(segment);
        }

        buffer
    }
}

/// A tone-parameterized emoji.
///
/// The single-toned layout is used when zero tones are requested or every requested tone
/// is the same; an optional two-toned layout takes over when people in the emoji are given
/// different tones (e.g. "women holding hands" is one codepoint when everyone shares a tone,
/// but a ZWJ sequence of two women otherwise).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToneTemplate {
    single: Slotted,
    multi: Option<Slotted>,
    default_selector: bool,
}

impl ToneTemplate {
    /// Parses a template written with [`PLACEHOLDER`] markers.
    pub fn parse(source: &str) -> Self {
        Self {
            single: Slotted::parse(source),
            multi: None,
            default_selector: false,
        }
    }

    /// Derives a template from a concrete toned sequence; every modifier codepoint becomes a slot.
    pub fn from_toned(sequence: &str) -> Self {
        Self {
            single: Slotted::from_toned(sequence),
            multi: None,
            default_selector: false,
        }
    }

    /// Derives a template from an untoned base sequence and one of its toned variants.
    ///
    /// If the base carries a presentation selector exactly where the toned variant carries
    /// its first modifier, that selector becomes the default tone of every slot.
    pub fn build(base: &str, toned: &str) -> Self {
        let template = Self::from_toned(toned);

        let selector = toned
            .char_indices()
            .find(|(_, c)| Tone::from_modifier(*c).is_some())
            .and_then(|(idx, _)| base.get(idx..))
            .map_or(false, |rest| rest.starts_with(PRESENTATION_SELECTOR));

        match selector {
            true => template.with_default_selector(),
            false => template,
        }
    }

    /// Adds a two-toned layout derived from a concrete mixed-tone sequence.
    pub fn with_two_toned(mut self, sequence: &str) -> Self {
        self.multi = Some(Slotted::from_toned(sequence));
        self
    }

    pub fn with_default_selector(mut self) -> Self {
        self.default_selector = true;
        self
    }

    /// Number of independently toneable slots in the single-toned layout.
    pub fn slots(&self) -> usize {
        self.single.slots()
    }

    /// What an empty tone list resolves every slot to.
    pub fn default_tone(&self) -> &'static str {
        match self.default_selector {
            true => PRESENTATION_SELECTOR,
            false => Tone::Default.as_str(),
        }
    }

    /// Renders the template with the given tones.
    ///
    /// - No tones: every slot takes [`ToneTemplate::default_tone`].
    /// - Slots are filled left to right; when tones run out the last one fills the rest.
    /// - Surplus tones are ignored.
    pub fn compose(&self, tones: &[Tone]) -> String {
        let Some(&last) = tones.last() else {
            let default = self.default_tone();
            return self.single.fill(|_| default);
        };

        let layout = match &self.multi {
            Some(multi) if !uniform(tones, multi.slots()) => multi,
            _ => &self.single,
        };

        layout.fill(|slot| tones.get(slot).copied().unwrap_or(last).as_str())
    }
}

impl Display for ToneTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.compose(&[]))
    }
}

/// Whether every slot of a `slots`-wide layout would receive the same tone.
fn uniform(tones: &[Tone], slots: usize) -> bool {
    let used = &tones[..tones.len().min(slots.max(1))];
    used.iter().all(|tone| *tone == used[0])
}

/// Renders `template` with explicit tones. See [`ToneTemplate::compose`].
pub fn compose(template: &ToneTemplate, tones: &[Tone]) -> String {
    template.compose(tones)
}
