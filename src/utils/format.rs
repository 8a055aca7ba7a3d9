// src/utils/format.rs

// Safe stand-in for a password in log lines
pub fn redact(password: &str) -> String {
    format!("<{} chars>", password.chars().count())
}

// Mask a password for display, one bullet per character
pub fn mask_password(password: &str) -> String {
    "•".repeat(password.chars().count())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redact_hides_content() {
        assert_eq!(redact("hunter2"), "<7 chars>");
        assert_eq!(redact("pässwörd"), "<8 chars>");
    }

    #[test]
    fn test_mask_password() {
        assert_eq!(mask_password("abc"), "•••");
        assert_eq!(mask_password(""), "");
    }
}
