//! Single-pass alias scanner.
//!
//! Text outside a candidate token is copied through untouched. A `:` opens a candidate;
//! the next `:` closes it, and the whole `:name:` token is looked up. On a miss the token is
//! emitted as-is *except* for its closing colon, which opens the next candidate instead -
//! this is what lets `:unknown:pizza:` still resolve `:pizza:`. Whitespace can never appear
//! inside an alias, so it flushes the open candidate verbatim.

use crate::prelude::*;
use crate::AliasTable;

const DELIMITER: char = ':';

/// Reusable scanner bound to an [`AliasTable`].
///
/// The candidate buffer is kept between calls to save allocations; `scan` takes
/// `&mut self`, so an instance serves one call at a time. For concurrent use, call
/// [`AliasTable::scan`] (or [`crate::scan`]) instead.
#[derive(Debug)]
pub struct Scanner<'t> {
    table: &'t AliasTable,
    /// The open candidate, including its leading colon. Empty when outside a candidate.
    candidate: String,
}

impl<'t> Scanner<'t> {
    pub fn new(table: &'t AliasTable) -> Self {
        Self {
            table,
            candidate: String::new(),
        }
    }

    /// Replaces every resolvable alias in `text`. Never fails; anything unresolved is
    /// left in place as literal text.
    pub fn scan(&mut self, text: &str) -> String {
        let aliases = self.table.snapshot();
        let candidate = &mut self.candidate;
        candidate.clear();

        let mut output = String::with_capacity(text.len());

        for c in text.chars() {
            if c != DELIMITER {
                if candidate.is_empty() {
                    output.push(c);
                    continue;
                }

                candidate.push(c);

                if c.is_whitespace() {
                    output.push_str(candidate);
                    candidate.clear();
                }
                continue;
            }

            if candidate.is_empty() {
                candidate.push(DELIMITER);
                continue;
            }

            candidate.push(DELIMITER);

            match aliases.resolve(candidate) {
                Some(code) => {
                    output.push_str(&code);
                    candidate.clear();
                }
                None => {
                    trace!("No emoji for candidate {candidate:?}.");
                    // Emit everything but the closing colon, which opens the next candidate.
                    output.push_str(&candidate[..candidate.len() - DELIMITER.len_utf8()]);
                    candidate.clear();
                    candidate.push(DELIMITER);
                }
            }
        }

        output.push_str(candidate);
        candidate.clear();

        output
    }
}

#[cfg(test)]
mod isolated {
    use indoc::indoc;
    use once_cell::sync::Lazy;

    use super::*;

    const MAN_TECHNOLOGIST: &str = "\u{1F468}\u{200D}\u{1F4BB}";
    const TURKEY: &str = "\u{1F1F9}\u{1F1F7}";
    const THUMBS_UP: &str = "\u{1F44D}";
    const PIZZA: &str = "\u{1F355}";
    const SUSHI: &str = "\u{1F363}";
    const SWEAT: &str = "\u{1F613}";
    const ACCORDION: &str = "\u{1FA97}";
    const ANGUISHED: &str = "\u{1F627}";
    const WOMAN_GOLFING: &str = "\u{1F3CC}\u{FE0F}\u{200D}\u{2640}\u{FE0F}";
    const ANGRY_FACE_WITH_HORNS: &str = "\u{1F47F}";
    const DRAGON: &str = "\u{1F409}";
    const ANCHOR: &str = "\u{2693}";

    static TABLE: Lazy<AliasTable> = Lazy::new(|| {
        AliasTable::from_iter([
            (":man_technologist:", MAN_TECHNOLOGIST),
            (":flag_for_turkey:", TURKEY),
            (":thumbs_up:", THUMBS_UP),
            (":+1:", THUMBS_UP),
            (":pizza:", PIZZA),
            (":sushi:", SUSHI),
            (":sweat:", SWEAT),
            (":accordion:", ACCORDION),
            (":anguished_face:", ANGUISHED),
            (":anguished:", ANGUISHED),
            (":woman_golfing:", WOMAN_GOLFING),
            (":angry_face_with_horns:", ANGRY_FACE_WITH_HORNS),
            (":dragon:", DRAGON),
            (":anchor:", ANCHOR),
        ])
    });

    fn scan(text: &str) -> String {
        TABLE.scan(text)
    }

    #[test]
    fn sentence() {
        assert_eq!(
            scan("I am :man_technologist: from :flag_for_turkey:. Tests are :thumbs_up:"),
            format!("I am {MAN_TECHNOLOGIST} from {TURKEY}. Tests are {THUMBS_UP}")
        );
    }

    #[test]
    fn consecutive() {
        assert_eq!(
            scan("consecutive emojis :pizza::sushi::sweat:"),
            format!("consecutive emojis {PIZZA}{SUSHI}{SWEAT}")
        );
    }

    #[test]
    fn whitespace_between() {
        assert_eq!(
            scan(":accordion::anguished_face: \n woman :woman_golfing:"),
            format!("{ACCORDION}{ANGUISHED} \n woman {WOMAN_GOLFING}")
        );
    }

    #[test]
    fn shared_colon() {
        assert_eq!(
            scan("shared colon :angry_face_with_horns:anger_symbol:"),
            format!("shared colon {ANGRY_FACE_WITH_HORNS}anger_symbol:")
        );
        assert_eq!(scan(":unknown:pizza:"), format!(":unknown{PIZZA}"));
    }

    #[test]
    fn unknown_alias() {
        assert_eq!(
            scan(":not_exist_emoji: not exist emoji"),
            ":not_exist_emoji: not exist emoji"
        );
    }

    #[test]
    fn stray_colons() {
        assert_eq!(scan(":dragon::"), format!("{DRAGON}:"));
        assert_eq!(scan("::+1:"), format!(":{THUMBS_UP}"));
        assert_eq!(scan("::anchor::"), format!(":{ANCHOR}:"));
        assert_eq!(scan(":anguished:::"), format!("{ANGUISHED}::"));
        assert_eq!(scan(":::::"), ":::::");
    }

    #[test]
    fn broken_by_whitespace() {
        assert_eq!(scan(":pizza :sushi:"), format!(":pizza {SUSHI}"));
        assert_eq!(scan("a :b c: d"), "a :b c: d");
        assert_eq!(scan(":\tpizza:"), ":\tpizza:");
    }

    #[test]
    fn unterminated() {
        assert_eq!(scan("half :piz"), "half :piz");
        assert_eq!(scan(":"), ":");
        assert_eq!(scan("ends with :"), "ends with :");
    }

    #[test]
    fn case_sensitive() {
        assert_eq!(scan(":Pizza:"), ":Pizza:");
        assert_eq!(scan(":PIZZA::pizza:"), format!(":PIZZA:{PIZZA}"));
    }

    #[test]
    fn flags() {
        assert_eq!(scan(":flag-tr: done"), format!("{TURKEY} done"));
        assert_eq!(scan(":flag-TR:"), TURKEY);
        assert_eq!(scan(":flag-tra:"), ":flag-tra:");
        assert_eq!(scan(":flag-t:"), ":flag-t:");
    }

    #[test]
    fn no_colons() {
        for text in ["dummytext", "", "emoji-free text, with punctuation!", "\u{1F355} already"] {
            assert_eq!(scan(text), text);
        }
    }

    #[test]
    fn multiline() {
        let input = indoc! {"
            :pizza: for lunch,
            :sushi: for dinner:
            and :dragon: fruit
        "};

        let expected = format!("{PIZZA} for lunch,\n{SUSHI} for dinner:\nand {DRAGON} fruit\n");
        assert_eq!(scan(input), expected);
    }

    #[test]
    fn every_entry() {
        for (alias, code) in TABLE.list().iter() {
            assert_eq!(scan(alias), code, "alias {alias}");
        }
    }

    #[test]
    fn reusable_scanner() {
        let mut scanner = TABLE.scanner();

        assert_eq!(scanner.scan("unterminated :piz"), "unterminated :piz");
        assert_eq!(scanner.scan("za: :pizza:"), format!("za: {PIZZA}"));
        assert_eq!(scanner.scan(":sushi:"), SUSHI);
    }

    #[test]
    fn sees_new_registrations() {
        let table = AliasTable::from_iter([(":pizza:", PIZZA)]);
        let mut scanner = table.scanner();

        assert_eq!(scanner.scan(":ramen:"), ":ramen:");
        table.insert(":ramen:", "\u{1F35C}").unwrap();
        assert_eq!(scanner.scan(":ramen:"), "\u{1F35C}");
    }
}
