//! Normalization applied to candidates and accepted literals.
//!
//! Subscript and superscript digit equivalence is an explicit substitution
//! table, not heuristic Unicode normalization, so the matcher's behavior
//! stays auditable: `CH₂O` and `CH2O` normalize to the same string.

/// Folds a Unicode subscript or superscript digit to its ASCII form.
fn fold_digit(c: char) -> Option<char> {
    let folded = match c {
        '₀' => '0',
        '₁' => '1',
        '₂' => '2',
        '₃' => '3',
        '₄' => '4',
        '₅' => '5',
        '₆' => '6',
        '₇' => '7',
        '₈' => '8',
        '₉' => '9',
        '⁰' => '0',
        '¹' => '1',
        '²' => '2',
        '³' => '3',
        '⁴' => '4',
        '⁵' => '5',
        '⁶' => '6',
        '⁷' => '7',
        '⁸' => '8',
        '⁹' => '9',
        _ => return None,
    };
    Some(folded)
}

/// Normalizes a string for answer comparison: surrounding whitespace is
/// trimmed, subscript/superscript digits fold to ASCII digits, and
/// alphabetic content is lowercased.
pub fn normalize(input: &str) -> String {
    input
        .trim()
        .chars()
        .map(|c| fold_digit(c).unwrap_or(c))
        .flat_map(char::to_lowercase)
        .collect()
}
