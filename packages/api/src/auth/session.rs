//! Browser-session credential.

/// `sessionStorage` key holding the identity provider's ID token.
pub const SESSION_TOKEN_KEY: &str = "id_token";

/// Normalize a value read from session storage into a bearer token.
///
/// Missing, blank and the literal strings `"undefined"` / `"null"` (left
/// behind by scripts that store unset values) all mean "no token".
pub fn token_from_session(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty() && v != "undefined" && v != "null")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_from_session() {
        assert_eq!(token_from_session(Some("abc".into())), Some("abc".into()));
        assert_eq!(token_from_session(Some(" abc \n".into())), Some("abc".into()));
        assert_eq!(token_from_session(None), None);
        assert_eq!(token_from_session(Some("".into())), None);
        assert_eq!(token_from_session(Some("undefined".into())), None);
        assert_eq!(token_from_session(Some("null".into())), None);
    }
}
