//! Target-audience tag carried by every parfum.

use serde::{Deserialize, Serialize};

/// The three recognized audience tokens, stored verbatim in `parfums.audience`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Audience {
    Pria,
    Wanita,
    Unisex,
}

impl Audience {
    pub const ALL: [Audience; 3] = [Audience::Pria, Audience::Wanita, Audience::Unisex];

    /// The token as stored in the database and exposed over the API.
    pub fn as_str(self) -> &'static str {
        match self {
            Audience::Pria => "Pria",
            Audience::Wanita => "Wanita",
            Audience::Unisex => "Unisex",
        }
    }

    /// Parse a client-supplied audience token.
    ///
    /// Returns `None` for anything other than an exact recognized token
    /// (surrounding whitespace is ignored). Callers treat `None` as "no
    /// audience filter" rather than as an error.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL.into_iter().find(|a| a.as_str() == value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_recognized_token() {
        for audience in Audience::ALL {
            assert_eq!(Audience::parse(audience.as_str()), Some(audience));
        }
    }

    #[test]
    fn ignores_surrounding_whitespace() {
        assert_eq!(Audience::parse("  Wanita "), Some(Audience::Wanita));
    }

    #[test]
    fn unknown_token_is_none() {
        assert_eq!(Audience::parse("Anak"), None);
        assert_eq!(Audience::parse(""), None);
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert_eq!(Audience::parse("pria"), None);
    }

    #[test]
    fn serializes_as_stored_token() {
        let json = serde_json::to_string(&Audience::Unisex).unwrap();
        assert_eq!(json, "\"Unisex\"");
    }
}
