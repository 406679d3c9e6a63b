use unicode_normalization::UnicodeNormalization;
use unicode_segmentation::UnicodeSegmentation;

const PUNCTUATION: &[char] = &['.', ',', '(', ')', '|'];

const SUBSTITUTIONS: &[(char, &str)] = &[('-', " "), ('ł', "l")];

const TRAILING_SUFFIXES: &[&str] = &["esq", "jd", "mba", "pa", "phd", "jr", "ii", "iii"];

/// Canonical form of a raw first or last name.
///
/// Lowercases, folds Latin diacritics, drops `. , ( ) |`, applies the substitution table,
/// collapses whitespace and strips trailing titles such as `esq` or `jr`. Word boundaries
/// are kept as single spaces.
pub fn normalize_name(raw: &str) -> String {
    let mut simple = fold_diacritics(&raw.to_lowercase());

    for (from, to) in SUBSTITUTIONS {
        if simple.contains(*from) {
            simple = simple.replace(*from, to);
        }
    }

    let collapsed = simple.split_whitespace().collect::<Vec<_>>().join(" ");
    strip_trailing_suffixes(collapsed)
}

/// Full-name lookup key: both normalized names concatenated with every space removed.
pub fn full_name_key(normalized_first: &str, normalized_last: &str) -> String {
    normalized_first
        .chars()
        .chain(normalized_last.chars())
        .filter(|ch| *ch != ' ')
        .collect()
}

/// Whether a normalized name holds more than one word.
pub fn is_compound(normalized: &str) -> bool {
    normalized.contains(' ')
}

/// Alternative spellings of a normalized name used by compound-name matching.
///
/// A single word yields itself. A compound name yields the words joined together,
/// followed by each word longer than one grapheme, in order.
pub fn name_variations(normalized: &str) -> Vec<String> {
    if !is_compound(normalized) {
        return vec![normalized.to_string()];
    }

    let mut variations = vec![normalized.replace(' ', "")];
    variations.extend(
        normalized
            .split(' ')
            .filter(|word| word.graphemes(true).count() > 1)
            .map(str::to_string),
    );
    variations
}

/// Drops punctuation and any combining mark attached to a Latin base letter. Punctuation
/// between a letter and its mark does not detach the mark.
fn fold_diacritics(value: &str) -> String {
    let mut after_latin = false;
    value
        .nfd()
        .filter(|ch| {
            if PUNCTUATION.contains(ch) {
                false
            } else if is_combining_mark(*ch) {
                !after_latin
            } else {
                after_latin = is_latin(*ch);
                true
            }
        })
        .nfc()
        .collect()
}

fn is_combining_mark(ch: char) -> bool {
    matches!(ch,
        '\u{0300}'..='\u{036F}'
        | '\u{1AB0}'..='\u{1AFF}'
        | '\u{1DC0}'..='\u{1DFF}'
        | '\u{20D0}'..='\u{20FF}'
        | '\u{FE20}'..='\u{FE2F}'
    )
}

fn is_latin(ch: char) -> bool {
    ch.is_ascii_alphabetic()
        || matches!(ch,
            '\u{00C0}'..='\u{024F}'
            | '\u{1E00}'..='\u{1EFF}'
            | '\u{2C60}'..='\u{2C7F}'
            | '\u{A720}'..='\u{A7FF}'
            | '\u{AB30}'..='\u{AB6F}'
            | '\u{FF21}'..='\u{FF3A}'
            | '\u{FF41}'..='\u{FF5A}'
        )
}

fn strip_trailing_suffixes(mut name: String) -> String {
    loop {
        let keep = match name.rsplit_once(' ') {
            Some((head, last)) if TRAILING_SUFFIXES.contains(&last) => head.len(),
            _ => break,
        };
        name.truncate(keep);
    }
    name
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_keeps_word_boundaries() {
        assert_eq!(normalize_name("Saurabh"), "saurabh");
        assert_eq!(normalize_name("YVONNE"), "yvonne");
        assert_eq!(normalize_name("Kwan Chan"), "kwan chan");
    }

    #[test]
    fn hyphen_becomes_space() {
        assert_eq!(normalize_name("Zamler-Carhart"), "zamler carhart");
        assert_eq!(normalize_name("Smith - Jones"), "smith jones");
    }

    #[test]
    fn folds_latin_diacritics() {
        assert_eq!(normalize_name("Peña"), "pena");
        assert_eq!(normalize_name("Renée"), "renee");
        assert_eq!(normalize_name("Müller"), "muller");
        assert_eq!(normalize_name("BARTŁOMIEJ"), "bartlomiej");
    }

    #[test]
    fn preserves_non_latin_scripts() {
        assert_eq!(normalize_name("Alice (미선)"), "alice 미선");
        assert_eq!(normalize_name("Yao (丁尧)"), "yao 丁尧");
        assert_eq!(normalize_name("Йосиф"), "йосиф");
    }

    #[test]
    fn drops_punctuation() {
        assert_eq!(normalize_name("E. Warren"), "e warren");
        assert_eq!(normalize_name("Evan B."), "evan b");
        assert_eq!(normalize_name("Lee|Kim"), "leekim");
    }

    #[test]
    fn strips_trailing_titles_and_suffixes() {
        assert_eq!(normalize_name("Grone, Esq."), "grone");
        assert_eq!(normalize_name("Malygina, PhD"), "malygina");
        assert_eq!(normalize_name("Carter Jr."), "carter");
        assert_eq!(normalize_name("Howell III"), "howell");
        assert_eq!(normalize_name("Howell, Jr., MBA"), "howell");
    }

    #[test]
    fn suffix_tokens_survive_when_not_trailing_or_alone() {
        assert_eq!(normalize_name("Pa Vang"), "pa vang");
        assert_eq!(normalize_name("Jr"), "jr");
        assert_eq!(normalize_name("Esquivel"), "esquivel");
        assert_eq!(normalize_name("Papa"), "papa");
    }

    #[test]
    fn normalization_is_idempotent_on_canonical_forms() {
        for raw in [
            "Zamler-Carhart",
            "Grone, Esq.",
            "Alice (미선)",
            "Bartłomiej",
            "  Angel   Anibal ",
            "Howell, Jr., MBA",
            "Rene.\u{301}",
            "Ｒｅｎｅ\u{301}",
        ] {
            let once = normalize_name(raw);
            assert_eq!(normalize_name(&once), once, "re-normalizing {raw:?}");
            assert_eq!(normalize_name(raw), once, "normalizing {raw:?} twice");
        }
    }

    #[test]
    fn punctuation_between_letter_and_mark_still_folds() {
        assert_eq!(normalize_name("Rene.\u{301}"), "rene");
        assert_eq!(
            full_name_key(&normalize_name("Rene.\u{301}"), "roy"),
            full_name_key(&normalize_name("René"), "roy")
        );
        assert_eq!(normalize_name("丁.\u{301}"), "丁\u{301}");
    }

    #[test]
    fn folds_marks_after_extended_and_fullwidth_latin() {
        assert_eq!(normalize_name("Ｒｅｎｅ\u{301}"), "ｒｅｎｅ");
        assert_eq!(normalize_name("\u{A77A}\u{301}"), "\u{A77A}");
        assert_eq!(normalize_name("\u{2C65}\u{301}"), "\u{2C65}");
    }

    #[test]
    fn full_name_key_removes_all_spaces() {
        assert_eq!(full_name_key("cheuk kwan", "chan"), "cheukkwanchan");
        assert_eq!(full_name_key("yao 丁尧", "ding"), "yao丁尧ding");
    }

    #[test]
    fn variations_of_compound_names() {
        assert_eq!(name_variations("rose"), vec!["rose"]);
        assert_eq!(
            name_variations("cheuk kwan"),
            vec!["cheukkwan", "cheuk", "kwan"]
        );
        assert_eq!(name_variations("evan b"), vec!["evanb", "evan"]);
        assert_eq!(name_variations("yao 丁尧"), vec!["yao丁尧", "yao", "丁尧"]);
    }

    #[test]
    fn single_grapheme_words_are_not_variations() {
        assert_eq!(name_variations("कि राम"), vec!["किराम", "राम"]);
    }
}
