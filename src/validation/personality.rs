use crate::core::error::WizardError;
use crate::models::personality;

pub const PERSONALITY_CODE_LEN: usize = 4;

/// Validate the personality entry before the wizard leaves its step.
///
/// Accepts exactly four ASCII letters in any case and returns the
/// uppercased code. With `strict` set the code must also be one of the 16
/// canonical types.
pub fn validate_personality_input(input: &str, strict: bool) -> Result<String, WizardError> {
    let code = personality::normalize(input);

    if code.chars().count() != PERSONALITY_CODE_LEN || !code.chars().all(|c| c.is_ascii_uppercase()) {
        return Err(WizardError::PersonalityRequired);
    }

    if strict && !personality::is_canonical(&code) {
        return Err(WizardError::UnknownPersonalityType(code));
    }

    Ok(code)
}
