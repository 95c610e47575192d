//! Whitespace and character normalization for Persian text, and URL slugs.

/// ARABIC LETTER YEH, commonly typed on Arabic keyboard layouts
const ARABIC_YEH: char = '\u{064A}';
/// ARABIC LETTER FARSI YEH
const FARSI_YEH: char = '\u{06CC}';
/// ARABIC LETTER KAF
const ARABIC_KAF: char = '\u{0643}';
/// ARABIC LETTER KEHEH, the Persian kaf
const KEHEH: char = '\u{06A9}';

/// Trim `input`, collapse every run of whitespace to a single space and replace the
/// Arabic yeh and kaf with their Persian forms.
///
/// Returns an empty string for empty or whitespace-only input. Never fails, and
/// `normalize(&normalize(s)) == normalize(s)` for every `s`.
pub fn normalize(input: &str) -> String {
    let mut out = String::with_capacity(input.len());

    for word in input.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.extend(word.chars().map(canonical_char));
    }

    out
}

/// Convert `input` into a lowercase, hyphen separated slug containing only `[a-z0-9-]`.
///
/// The text is normalized and lowercased, every character that is not an ASCII
/// letter, digit or whitespace is dropped, then each remaining whitespace run
/// becomes a single `-`.
pub fn slugify(input: &str) -> String {
    let lowered = normalize(input).to_lowercase();
    let mut slug = String::with_capacity(lowered.len());
    let mut in_gap = false;

    for ch in lowered.chars() {
        if ch.is_whitespace() {
            in_gap = true;
        } else if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if in_gap {
                slug.push('-');
                in_gap = false;
            }
            slug.push(ch);
        }
    }

    // a gap that was never followed by a kept character still yields a hyphen
    if in_gap {
        slug.push('-');
    }

    slug
}

fn canonical_char(ch: char) -> char {
    match ch {
        ARABIC_YEH => FARSI_YEH,
        ARABIC_KAF => KEHEH,
        other => other,
    }
}
