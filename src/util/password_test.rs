use super::*;

// =============================================================
// Strength gate
// =============================================================

#[test]
fn all_lowercase_fails_three_requirements() {
    let missing = strength_errors("abcdefgh");
    assert_eq!(missing, vec!["an uppercase letter", "a digit", "a symbol"]);
    assert!(!is_strong("abcdefgh"));
}

#[test]
fn strong_candidate_passes() {
    assert!(is_strong("Abcdef1!"));
    assert!(strength_errors("Abcdef1!").is_empty());
}

#[test]
fn short_candidate_fails_length() {
    assert!(strength_errors("Ab1!").contains(&"at least 8 characters"));
}

#[test]
fn missing_lowercase_is_reported() {
    assert!(strength_errors("ABCDEF1!").contains(&"a lowercase letter"));
}

#[test]
fn missing_uppercase_is_reported() {
    assert!(strength_errors("abcdef1!").contains(&"an uppercase letter"));
}

#[test]
fn missing_digit_is_reported() {
    assert!(strength_errors("Abcdefg!").contains(&"a digit"));
}

#[test]
fn missing_symbol_is_reported() {
    assert!(strength_errors("Abcdefg1").contains(&"a symbol"));
}

#[test]
fn empty_candidate_fails_everything() {
    assert_eq!(strength_errors("").len(), 5);
}

// =============================================================
// Confirmation
// =============================================================

#[test]
fn matching_confirmation_passes() {
    assert!(confirmation_matches("Abcdef1!", "Abcdef1!"));
}

#[test]
fn mismatched_confirmation_fails() {
    assert!(!confirmation_matches("Abcdef1!", "Abcdef1?"));
}

#[test]
fn empty_passwords_never_match() {
    assert!(!confirmation_matches("", ""));
}
