//! Name normalization
//!
//! Every lookup in the engine goes through [`normalize`] so that case,
//! whitespace, and typographic punctuation differences never separate two
//! spellings of the same name.

/// Reduce a raw name string to its canonical comparison form.
///
/// - surrounding whitespace is removed
/// - all characters are lowercased
/// - internal whitespace runs collapse to a single ASCII space
/// - typographic quotes and dashes map to their ASCII equivalents
/// - zero-width characters are dropped
///
/// The function is idempotent: `normalize(normalize(s)) == normalize(s)`.
pub fn normalize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut pending_space = false;

    for c in raw.trim().chars() {
        let c = match c {
            '\u{2018}' | '\u{2019}' | '\u{02BC}' => '\'',
            '\u{201C}' | '\u{201D}' => '"',
            '\u{2010}'..='\u{2015}' | '\u{2212}' => '-',
            '\u{200B}' | '\u{200C}' | '\u{200D}' | '\u{FEFF}' => continue,
            c => c,
        };

        if c.is_whitespace() {
            pending_space = true;
            continue;
        }

        if pending_space && !out.is_empty() {
            out.push(' ');
        }
        pending_space = false;

        for lower in c.to_lowercase() {
            out.push(lower);
        }
    }

    out
}
