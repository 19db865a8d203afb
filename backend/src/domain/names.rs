//! Naming rules shared by user names and personal names.
//!
//! A name is valid when it is present, at least [`NAME_MIN_LENGTH`]
//! characters long and free of space characters.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Minimum number of characters in a valid name.
pub const NAME_MIN_LENGTH: usize = 2;

/// Return whether `name` satisfies the naming rules.
///
/// # Examples
/// ```
/// use gratitude_journal::domain::is_valid_name;
///
/// assert!(is_valid_name(Some("alice1")));
/// assert!(!is_valid_name(Some("a")));
/// assert!(!is_valid_name(Some("alice smith")));
/// assert!(!is_valid_name(None));
/// ```
#[must_use]
pub fn is_valid_name(name: Option<&str>) -> bool {
    name.is_some_and(|value| value.chars().count() >= NAME_MIN_LENGTH && !value.contains(' '))
}

/// Raised when a value breaks the naming rules.
///
/// Carries the rejected value so callers can echo it back.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("The name \"{name}\" does not follow the naming rules.")]
pub struct InvalidName {
    name: String,
}

impl InvalidName {
    /// The rejected value; empty when the name was absent.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

fn validated(raw: String) -> Result<String, InvalidName> {
    if is_valid_name(Some(raw.as_str())) {
        Ok(raw)
    } else {
        Err(InvalidName { name: raw })
    }
}

macro_rules! validated_name {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Validate and construct the name from owned input.
            ///
            /// # Errors
            /// Returns [`InvalidName`] when the naming rules are not met.
            pub fn new(value: impl Into<String>) -> Result<Self, InvalidName> {
                validated(value.into()).map(Self)
            }

            /// Validate an optional value, treating absence as invalid.
            ///
            /// # Errors
            /// Returns [`InvalidName`] with an empty name when `value` is `None`.
            pub fn from_optional(value: Option<String>) -> Result<Self, InvalidName> {
                Self::new(value.unwrap_or_default())
            }

            /// Borrow the validated name.
            #[must_use]
            pub fn as_str(&self) -> &str {
                self.0.as_str()
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = InvalidName;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }
    };
}

validated_name! {
    /// Unique, client-assigned login handle. Immutable once a user exists.
    UserName
}

validated_name! {
    /// First or last name on a user profile.
    PersonName
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(None, false)]
    #[case(Some(""), false)]
    #[case(Some("a"), false)]
    #[case(Some(" a"), false)]
    #[case(Some("al ice"), false)]
    #[case(Some("alice "), false)]
    #[case(Some("  "), false)]
    #[case(Some("al"), true)]
    #[case(Some("alice1"), true)]
    #[case(Some("O'Brien-Smith"), true)]
    #[case(Some("tab\tseparated"), true)]
    #[case(Some("éa"), true)]
    fn naming_rules(#[case] name: Option<&str>, #[case] expected: bool) {
        assert_eq!(is_valid_name(name), expected);
    }

    #[rstest]
    fn invalid_name_message_quotes_value() {
        let err = UserName::new("a b").expect_err("space is rejected");
        assert_eq!(
            err.to_string(),
            "The name \"a b\" does not follow the naming rules."
        );
        assert_eq!(err.name(), "a b");
    }

    #[rstest]
    fn absent_names_are_rejected() {
        let err = PersonName::from_optional(None).expect_err("absent is rejected");
        assert_eq!(err.name(), "");
    }

    #[rstest]
    fn deserialisation_applies_rules() {
        let ok: UserName = serde_json::from_str("\"alice1\"").expect("valid name");
        assert_eq!(ok.as_str(), "alice1");
        assert!(serde_json::from_str::<UserName>("\"x\"").is_err());
    }
}
