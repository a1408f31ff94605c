/// Validate an email: must contain '@' and '.', max 254 chars.
pub fn validate_email(email: &str) -> Option<String> {
    let trimmed = email.trim();
    if trimmed.is_empty() {
        return Some("Email is required".to_string());
    }
    if trimmed.len() > 254 {
        return Some("Email must be at most 254 characters".to_string());
    }
    if !trimmed.contains('@') || !trimmed.contains('.') {
        return Some("Email must be a valid address (contain '@' and '.')".to_string());
    }
    None
}

/// Validate a password: min 8 chars on create.
pub fn validate_password(password: &str) -> Option<String> {
    if password.is_empty() {
        return Some("Password is required".to_string());
    }
    if password.len() < 8 {
        return Some("Password must be at least 8 characters".to_string());
    }
    None
}

/// Validate a display name: 2-100 chars, any characters.
pub fn validate_display_name(name: &str) -> Option<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Some("Name is required".to_string());
    }
    if trimmed.chars().count() < 2 {
        return Some("Name must be at least 2 characters".to_string());
    }
    if trimmed.chars().count() > 100 {
        return Some("Name must be at most 100 characters".to_string());
    }
    None
}

/// Validate a required text field with a max length.
pub fn validate_required(value: &str, field_name: &str, max_len: usize) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Some(format!("{field_name} is required"));
    }
    if trimmed.len() > max_len {
        return Some(format!("{field_name} must be at most {max_len} characters"));
    }
    None
}

/// Validate an optional text field with a max length (empty is OK).
pub fn validate_optional(value: &str, field_name: &str, max_len: usize) -> Option<String> {
    let trimmed = value.trim();
    if !trimmed.is_empty() && trimmed.len() > max_len {
        return Some(format!("{field_name} must be at most {max_len} characters"));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_rules() {
        assert!(validate_email("writer@example.com").is_none());
        assert!(validate_email("").is_some());
        assert!(validate_email("no-at-sign.com").is_some());
        assert!(validate_email("no-dot@example").is_some());
    }

    #[test]
    fn password_rules() {
        assert!(validate_password("longenough").is_none());
        assert!(validate_password("").is_some());
        assert!(validate_password("short").is_some());
    }

    #[test]
    fn display_name_rules() {
        assert!(validate_display_name("Ana Costa").is_none());
        assert!(validate_display_name("").is_some());
        assert!(validate_display_name("A").is_some());
        assert!(validate_display_name(&"x".repeat(101)).is_some());
    }

    #[test]
    fn required_and_optional_fields() {
        assert!(validate_required("Launch VSL", "Project name", 100).is_none());
        assert!(validate_required("   ", "Project name", 100).is_some());
        assert!(validate_required(&"x".repeat(101), "Project name", 100).is_some());
        assert!(validate_optional("", "Description", 500).is_none());
        assert!(validate_optional(&"x".repeat(501), "Description", 500).is_some());
    }
}
