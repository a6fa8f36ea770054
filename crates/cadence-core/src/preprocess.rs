use unicode_normalization::UnicodeNormalization;
use unicode_segmentation::UnicodeSegmentation;

/// Canonical composition plus apostrophe folding.
///
/// Lyrics arrive from several providers; some ship decomposed accents
/// (`e` + U+0301) and typographic apostrophes, which would otherwise miss
/// every table lookup.
pub fn normalize(text: &str) -> String {
    text.nfc()
        .map(|c| match c {
            '\u{2019}' | '\u{2018}' | '\u{02BC}' => '\'',
            other => other,
        })
        .collect()
}

/// Split a line into word surfaces.
///
/// Uses UAX #29 word boundaries, drops segments without a letter and
/// detaches elided clitics (`l'amour` -> `l'`, `amour`) when the pack
/// declares them.
pub fn tokenize(text: &str, elisions: &[String]) -> Vec<String> {
    let normalized = normalize(text);
    let mut words = Vec::new();

    for word in normalized.unicode_words() {
        if !word.chars().any(char::is_alphabetic) {
            continue;
        }
        split_elision(word, elisions, &mut words);
    }

    words
}

fn split_elision(word: &str, elisions: &[String], out: &mut Vec<String>) {
    for prefix in elisions {
        match word.get(..prefix.len()) {
            Some(head) if head.eq_ignore_ascii_case(prefix) && word.len() > prefix.len() => {
                out.push(head.to_string());
                split_elision(&word[prefix.len()..], elisions, out);
                return;
            }
            _ => {}
        }
    }
    out.push(word.to_string());
}

/// Letter-bearing words of a line, without elision handling
pub fn plain_words(text: &str) -> impl Iterator<Item = &str> {
    text.unicode_words()
        .filter(|w| w.chars().any(char::is_alphabetic))
}
