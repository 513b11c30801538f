#[cfg(test)]
#[path = "password_test.rs"]
mod password_test;

// The strength gate applies to registration only; the forced
// password-change flow checks confirmation equality and nothing else.

/// Punctuation accepted as the required symbol character.
const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:'\",.<>/?";

/// Every strength requirement `candidate` fails, as user-facing fragments.
/// Empty means the password may be submitted.
pub fn strength_errors(candidate: &str) -> Vec<&'static str> {
    let mut missing = Vec::new();
    if candidate.chars().count() < 8 {
        missing.push("at least 8 characters");
    }
    if !candidate.chars().any(|c| c.is_ascii_uppercase()) {
        missing.push("an uppercase letter");
    }
    if !candidate.chars().any(|c| c.is_ascii_lowercase()) {
        missing.push("a lowercase letter");
    }
    if !candidate.chars().any(|c| c.is_ascii_digit()) {
        missing.push("a digit");
    }
    if !candidate.chars().any(|c| SYMBOLS.contains(c)) {
        missing.push("a symbol");
    }
    missing
}

pub fn is_strong(candidate: &str) -> bool {
    strength_errors(candidate).is_empty()
}

/// Confirmation equality check shared by registration and the forced
/// password-change flow.
pub fn confirmation_matches(password: &str, confirmation: &str) -> bool {
    !password.is_empty() && password == confirmation
}
