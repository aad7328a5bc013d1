//! Text normalization used before every comparison.

/// Characters replaced by a space during full normalization.
const STRIPPED_PUNCTUATION: &[char] = &[
    '(', ')', '[', ']', '{', '}', '.', ',', ';', ':', '؟', '?', '!', '-', '_', '/', '\\', '"',
    '\'',
];

/// Fold Arabic letter-shape variants to their canonical forms.
pub fn normalize_script(text: &str) -> String {
    text.chars().map(fold_arabic).collect()
}

/// Script normalization, then punctuation stripping and whitespace collapsing.
pub fn normalize(text: &str) -> String {
    let folded: String = text
        .chars()
        .map(fold_arabic)
        .map(|c| if STRIPPED_PUNCTUATION.contains(&c) { ' ' } else { c })
        .collect();
    normalize_whitespace(&folded)
}

/// Compare two strings after full normalization.
pub fn normalized_eq(a: &str, b: &str) -> bool {
    normalize(a) == normalize(b)
}

fn fold_arabic(c: char) -> char {
    match c {
        'أ' | 'إ' | 'آ' => 'ا',
        'ى' => 'ي',
        'ؤ' => 'و',
        'ة' => 'ه',
        'ئ' => 'ي',
        other => other,
    }
}

/// Trim and collapse runs of whitespace into a single space.
fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
