use super::{fold, find_control_character};

#[test]
fn test_fold_lowercases_ascii_text() {
    assert_eq!(fold("Dining Out"), "dining out");
    assert_eq!(fold("GROCERY"), "grocery");
}

#[test]
fn test_fold_strips_diacritics() {
    let test_cases = vec![
        ("Café", "cafe"),
        ("CAFÉ", "cafe"),
        ("Crème Brûlée", "creme brulee"),
        ("Ångström", "angstrom"),
        ("naïve", "naive"),
    ];

    for (input, expected) in test_cases {
        assert_eq!(fold(input), expected);
    }
}

#[test]
fn test_fold_handles_precomposed_and_decomposed_forms_alike() {
    let precomposed = "caf\u{e9}";
    let decomposed = "cafe\u{301}";

    assert_eq!(fold(precomposed), fold(decomposed));
}

#[test]
fn test_fold_keeps_empty_text_empty() {
    assert_eq!(fold(""), "");
}

#[test]
fn test_control_characters_are_detected() {
    assert_eq!(find_control_character("Rent"), None);
    assert_eq!(find_control_character("50% off_sale"), None);
    assert_eq!(find_control_character("bad\0text"), Some('\0'));
    assert_eq!(find_control_character("line\nbreak"), Some('\n'));
}
