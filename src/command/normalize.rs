//! Folding raw chat text into parser tokens.
//!
//! Chat platforms deliver commands as free text, often typed with a
//! Chinese input method. These helpers fold full-width punctuation to
//! ASCII, drop platform markup such as `[CQ:at,qq=1]`, and split the result
//! into the flat token list consumed by
//! [`Schema::parse`](crate::command::domain::Schema::parse).

const PUNCTUATION_FOLDS: [(char, char); 16] = [
    ('，', ','),
    ('。', '.'),
    ('！', '!'),
    ('？', '?'),
    ('；', ';'),
    ('：', ':'),
    ('“', '"'),
    ('”', '"'),
    ('‘', '\''),
    ('’', '\''),
    ('（', '('),
    ('）', ')'),
    ('【', '['),
    ('】', ']'),
    ('《', '<'),
    ('》', '>'),
];

/// Replaces full-width punctuation with its ASCII counterpart.
///
/// # Examples
///
/// ```
/// use diceutils::command::normalize::translate_punctuation;
///
/// assert_eq!(translate_punctuation("。r（1d100）"), ".r(1d100)");
/// ```
#[must_use]
pub fn translate_punctuation(text: &str) -> String {
    text.chars()
        .map(|character| {
            PUNCTUATION_FOLDS
                .iter()
                .find(|(full_width, _)| *full_width == character)
                .map_or(character, |(_, ascii)| *ascii)
        })
        .collect()
}

/// Normalises a chat message before tokenisation.
///
/// Markup segments delimited by `[...]` or `<...>` are removed, whitespace
/// runs collapse to one space, text is lowercased and punctuation folded.
/// A leading `/` becomes `.`, and the first matching entry of `prefixes`
/// (longest first) is stripped together with the spaces after it.
#[must_use]
pub fn normalize_message(message: &str, prefixes: &[&str]) -> String {
    let without_markup = strip_markup(&message.to_lowercase());
    let collapsed = without_markup.split_whitespace().collect::<Vec<_>>().join(" ");
    let folded = translate_punctuation(&collapsed);

    let mut normalized = match folded.strip_prefix('/') {
        Some(rest) => format!(".{rest}"),
        None => folded,
    };

    let mut ordered: Vec<&str> = prefixes.to_vec();
    ordered.sort_by(|left, right| right.len().cmp(&left.len()).then(right.cmp(left)));
    for prefix in ordered {
        if prefix.is_empty() {
            continue;
        }
        if let Some(rest) = normalized.strip_prefix(prefix) {
            normalized = rest.trim_start_matches(' ').to_owned();
            break;
        }
    }

    normalized
}

/// Normalises `message` and splits it into parser tokens.
///
/// Tokens are runs of one character class: signed integers, ASCII
/// letters, CJK ideographs, or any other non-space characters. A
/// double-quoted section is kept whole with its quotes removed.
///
/// # Examples
///
/// ```
/// use diceutils::command::normalize::tokenize;
///
/// let tokens = tokenize("。st 力量60 “老 王”", &[".st"]);
/// assert_eq!(tokens, ["力量", "60", "老 王"]);
/// ```
#[must_use]
pub fn tokenize(message: &str, prefixes: &[&str]) -> Vec<String> {
    let normalized = normalize_message(message, prefixes);
    let characters: Vec<char> = normalized.chars().collect();
    let mut tokens = Vec::new();
    let mut cursor = 0;

    while let Some(&character) = characters.get(cursor) {
        if character.is_whitespace() {
            cursor += 1;
            continue;
        }

        let end = if character == '"' {
            quoted_end(&characters, cursor)
        } else {
            run_end(&characters, cursor)
        };
        let raw: String = characters
            .get(cursor..end)
            .unwrap_or_default()
            .iter()
            .collect();
        let token = raw.trim_matches('"').trim();
        if !token.is_empty() {
            tokens.push(token.to_owned());
        }
        cursor = end.max(cursor + 1);
    }

    tokens
}

fn strip_markup(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    let mut characters = text.char_indices();

    while let Some((index, character)) = characters.next() {
        if matches!(character, '[' | '<') {
            let rest = text.get(index + character.len_utf8()..).unwrap_or_default();
            if let Some(close) = rest.find([']', '>']) {
                let skip = rest.get(..close).unwrap_or_default().chars().count() + 1;
                characters.nth(skip - 1);
                continue;
            }
        }
        output.push(character);
    }

    output
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Digit,
    Alpha,
    Cjk,
    Other,
}

fn classify(character: char) -> CharClass {
    if character.is_ascii_digit() {
        CharClass::Digit
    } else if character.is_ascii_alphabetic() {
        CharClass::Alpha
    } else if ('\u{4e00}'..='\u{9fa5}').contains(&character) {
        CharClass::Cjk
    } else {
        CharClass::Other
    }
}

fn quoted_end(characters: &[char], start: usize) -> usize {
    characters
        .iter()
        .skip(start + 1)
        .position(|character| *character == '"')
        .map_or_else(|| run_end(characters, start), |offset| start + offset + 2)
}

fn run_end(characters: &[char], start: usize) -> usize {
    let Some(&first) = characters.get(start) else {
        return start;
    };

    let signed_number = matches!(first, '+' | '-')
        && characters
            .get(start + 1)
            .is_some_and(char::is_ascii_digit);
    let (class, body_start) = if signed_number {
        (CharClass::Digit, start + 1)
    } else {
        (classify(first), start)
    };

    let run_length = characters
        .iter()
        .skip(body_start)
        .take_while(|character| {
            !character.is_whitespace() && **character != '"' && classify(**character) == class
        })
        .count();

    (body_start + run_length).max(start + 1)
}
