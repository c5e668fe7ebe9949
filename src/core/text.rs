// src/core/text.rs
use std::borrow::Cow;

/// Space-separated tokens of a raw line, blanks dropped.
/// Only ' ' separates; tabs and the line terminator stay on their token.
pub fn tokens(line: &str) -> impl Iterator<Item = &str> {
    line.split(' ').filter(|t| !t.is_empty())
}

/// First character upper-cased, the rest lower-cased.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(s.len());
            out.extend(first.to_uppercase());
            out.push_str(&chars.as_str().to_lowercase());
            out
        }
        None => s!(),
    }
}

/// Display label for an item identifier.
///
/// `"iron_chestplate"` → `"Iron chestplate"`. Only the first segment is
/// capitalized; the others are joined as-is.
pub fn label(id: &str) -> String {
    let mut parts = id.split('_');
    let mut out = capitalize(parts.next().unwrap_or(""));
    for part in parts {
        out.push(' ');
        out.push_str(part);
    }
    out
}

/// Split text into lines that keep their `\n` terminator.
pub fn lines_keep_ends(text: &str) -> impl Iterator<Item = &str> {
    text.split_inclusive('\n')
}

/// `\r\n` and lone `\r` become `\n`, as a text-mode read would give.
/// Borrows when there is nothing to rewrite.
pub fn unify_newlines(text: &str) -> Cow<'_, str> {
    if text.contains('\r') {
        Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_skip_runs_of_spaces() {
        let t: Vec<_> = tokens("    std::vector<Armor>  helmet_t\n").collect();
        assert_eq!(t, vec!["std::vector<Armor>", "helmet_t\n"]);
        assert_eq!(tokens("   ").count(), 0);
    }

    #[test]
    fn tabs_are_not_separators() {
        let t: Vec<_> = tokens("\t{ x").collect();
        assert_eq!(t, vec!["\t{", "x"]);
    }

    #[test]
    fn capitalize_lowers_the_tail() {
        assert_eq!(capitalize("ring"), "Ring");
        assert_eq!(capitalize("hEAD"), "Head");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn label_variants() {
        assert_eq!(label("iron_chestplate"), "Iron chestplate");
        assert_eq!(label("cloth_hood"), "Cloth hood");
        assert_eq!(label("band_of_Accuria"), "Band of Accuria");
        assert_eq!(label("thunderfury"), "Thunderfury");
        assert_eq!(label("a__b"), "A  b");
    }

    #[test]
    fn lines_keep_their_terminators() {
        let l: Vec<_> = lines_keep_ends("a\nb\n\nc").collect();
        assert_eq!(l, vec!["a\n", "b\n", "\n", "c"]);
    }

    #[test]
    fn newlines_are_unified() {
        assert_eq!(unify_newlines("a\r\nb\rc\n"), "a\nb\nc\n");
        assert!(matches!(unify_newlines("a\nb\n"), Cow::Borrowed(_)));
    }
}
