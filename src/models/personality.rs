/// The 16 canonical four-letter personality type codes, in the order the
/// quick-select grid shows them.
pub const ALL_PERSONALITY_TYPES: [&str; 16] = [
    "INTJ", "INTP", "ENTJ", "ENTP",
    "INFJ", "INFP", "ENFJ", "ENFP",
    "ISTJ", "ISFJ", "ESTJ", "ESFJ",
    "ISTP", "ISFP", "ESTP", "ESFP",
];

/// Whether `code` (any case) is one of the 16 canonical types
pub fn is_canonical(code: &str) -> bool {
    let upper = code.to_ascii_uppercase();
    ALL_PERSONALITY_TYPES.contains(&upper.as_str())
}

/// Normalize a personality code for storage and lookup
pub fn normalize(code: &str) -> String {
    code.trim().to_uppercase()
}
