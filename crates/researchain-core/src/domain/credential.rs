//! Hosting-provider access token.

use std::fmt;

/// Environment variable the access token is read from.
pub const TOKEN_ENV_VAR: &str = "GITHUB_TOKEN";

/// An access token for the hosting provider.
///
/// The value never shows up in `Debug` output. It is only reachable through
/// [`Credential::expose`], which callers use when building the request header
/// and the push URL.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Wrap a token. Blank tokens are treated as absent.
    pub fn new(token: impl Into<String>) -> Option<Self> {
        let token = token.into();
        if token.trim().is_empty() {
            None
        } else {
            Some(Self(token))
        }
    }

    /// Read the token from [`TOKEN_ENV_VAR`].
    pub fn from_env() -> Option<Self> {
        std::env::var(TOKEN_ENV_VAR).ok().and_then(Self::new)
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_token_is_absent() {
        assert!(Credential::new("").is_none());
        assert!(Credential::new("  ").is_none());
    }

    #[test]
    fn test_debug_is_redacted() {
        let credential = Credential::new("ghp_secret").unwrap();
        let debug = format!("{credential:?}");
        assert!(!debug.contains("ghp_secret"));
        assert_eq!(credential.expose(), "ghp_secret");
    }
}
