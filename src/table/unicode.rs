//! Aliases derived from Unicode CLDR emoji names.

const REPLACEMENTS: &[(&str, &str)] = &[
    ("*", "asterisk"),
    ("#", "hash"),
    ("1st", "first"),
    ("2nd", "second"),
    ("3rd", "third"),
    ("&", "and"),
    ("U.S.", "US"),
];

/// Every Unicode emoji as a `(:alias:, code)` pair, in CLDR order.
pub fn entries() -> impl Iterator<Item = (String, String)> {
    emojis::iter().map(|emoji| {
        let alias = format!(":{}:", alias_name(emoji.name()));
        (alias, emoji.as_str().to_owned())
    })
}

/// Derives a snake_case alias name from a CLDR name such as `flag: Côte d’Ivoire`.
///
/// Skin tone attributes are dropped, so every toned variant shares the name of its base.
pub fn alias_name(name: &str) -> String {
    let (base, attributes) = name.split_once(':').unwrap_or((name, ""));
    let base = base.trim();

    let mut phrase = base.to_owned();

    for attribute in attributes.split(',').map(str::trim) {
        if attribute.is_empty() || attribute.contains("tone") {
            continue;
        }

        if attribute.contains("beard") || attribute.contains("hair") {
            phrase.push_str(" with ");
        } else if base.starts_with("flag") {
            phrase.push_str(" for ");
        } else {
            phrase.push(' ');
        }

        phrase.push_str(attribute);
    }

    snake_case(&clean(&phrase))
}

fn clean(phrase: &str) -> String {
    let replaced = REPLACEMENTS
        .iter()
        .fold(phrase.to_owned(), |acc, (from, to)| acc.replace(from, to));

    let mut folded = String::with_capacity(replaced.len());
    for c in replaced.chars() {
        match fold(c) {
            Some(ascii) => folded.push_str(ascii),
            None => folded.push(c),
        }
    }

    folded
}

/// ASCII spelling of the Latin letters that show up in flag and person names.
fn fold(c: char) -> Option<&'static str> {
    let ascii = match c {
        'À'..='Å' | 'Æ' => "A",
        'à'..='å' | 'æ' => "a",
        'Ç' | 'Č' | 'Ć' => "C",
        'ç' | 'č' | 'ć' => "c",
        'È'..='Ë' => "E",
        'è'..='ë' => "e",
        'Ì'..='Ï' => "I",
        'ì'..='ï' => "i",
        'Ð' => "D",
        'ð' => "d",
        'Đ' => "Dj",
        'đ' => "dj",
        'Ñ' => "N",
        'ñ' => "n",
        'Ò'..='Ö' | 'Ø' => "O",
        'ò'..='ö' | 'ø' => "o",
        'Ù'..='Ü' => "U",
        'ù'..='ü' => "u",
        'Ý' => "Y",
        'ý' | 'ÿ' => "y",
        'Þ' => "B",
        'þ' => "b",
        'ß' => "Ss",
        'Š' => "S",
        'š' => "s",
        'Ž' => "Z",
        'ž' => "z",
        'Ŕ' => "R",
        'ŕ' => "r",
        _ => return None,
    };

    Some(ascii)
}

/// Lowercases the words of `phrase` and joins them with `_`.
///
/// A digit that directly follows a letter also starts a new segment (`keycap10` → `keycap_10`).
fn snake_case(phrase: &str) -> String {
    let mut alias = String::with_capacity(phrase.len() + 8);

    for word in phrase
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|word| !word.is_empty())
    {
        if !alias.is_empty() {
            alias.push('_');
        }

        let mut previous: Option<char> = None;
        for c in word.chars() {
            if c.is_ascii_digit() && previous.map_or(false, |p| p.is_ascii_alphabetic()) {
                alias.push('_');
            }

            alias.push(c.to_ascii_lowercase());
            previous = Some(c);
        }
    }

    alias
}
