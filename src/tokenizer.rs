//! src/tokenizer.rs
use unicode_general_category::{GeneralCategory, get_general_category};

/// Letters are the five `L*` general categories. Combining marks, digits and
/// letter-like numbers are separators.
pub fn is_letter(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

/// Maximal runs of letters in `s`, in order of appearance.
///
/// The returned iterator borrows `s` and can be cloned to restart it.
pub fn split_on_non_letters(s: &str) -> impl Iterator<Item = &str> + Clone {
    s.split(|c: char| !is_letter(c))
        .filter(|word| !word.is_empty())
}
