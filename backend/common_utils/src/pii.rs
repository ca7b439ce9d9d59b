//! Personal Identifiable Information protection.

use std::{convert::AsRef, fmt, ops, str::FromStr};

use error_stack::ResultExt;
use hyperswitch_masking::{ExposeInterface, Secret, Strategy, WithType};
use serde::Deserialize;

use crate::{
    consts::REDACTED,
    errors::{self, ValidationError},
};

/// Strategy for masking Email
#[derive(Debug, Copy, Clone, Deserialize)]
pub enum EmailStrategy {}

impl<T> Strategy<T> for EmailStrategy
where
    T: AsRef<str> + fmt::Debug,
{
    fn fmt(val: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let val_str: &str = val.as_ref();
        match val_str.split_once('@') {
            Some((a, b)) => write!(f, "{}@{}", "*".repeat(a.len()), b),
            None => WithType::fmt(val, f),
        }
    }
}

/// Email address
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(try_from = "String")]
pub struct Email(Secret<String, EmailStrategy>);

impl ExposeInterface<Secret<String, EmailStrategy>> for Email {
    fn expose(self) -> Secret<String, EmailStrategy> {
        self.0
    }
}

impl TryFrom<String> for Email {
    type Error = error_stack::Report<errors::ParsingError>;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_str(&value).change_context(errors::ParsingError::EmailParsingError)
    }
}

impl ops::Deref for Email {
    type Target = Secret<String, EmailStrategy>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromStr for Email {
    type Err = error_stack::Report<ValidationError>;
    fn from_str(email: &str) -> Result<Self, Self::Err> {
        if email.eq(REDACTED) {
            return Ok(Self(Secret::new(email.to_string())));
        }
        match email.split_once('@') {
            Some((local, domain)) if !local.is_empty() && domain.contains('.') => {
                Ok(Self(Secret::new(email.to_string())))
            }
            _ => Err(ValidationError::InvalidValue {
                message: "Invalid email address format".into(),
            }
            .into()),
        }
    }
}

/// Strategy for masking bank account numbers, keeping the country prefix and the last four
/// characters
#[derive(Debug)]
pub enum IbanStrategy {}

impl<T> Strategy<T> for IbanStrategy
where
    T: AsRef<str>,
{
    fn fmt(val: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let iban: &str = val.as_ref();
        let chars: Vec<char> = iban.chars().collect();
        if chars.len() < 8 {
            return WithType::fmt(val, f);
        }
        let prefix: String = chars.iter().take(2).collect();
        let suffix: String = chars.iter().skip(chars.len() - 4).collect();
        write!(f, "{prefix}{}{suffix}", "*".repeat(chars.len() - 6))
    }
}

#[cfg(test)]
mod pii_masking_strategy_tests {
    use hyperswitch_masking::Secret;

    use super::*;

    #[test]
    fn test_valid_email_masking() {
        let secret: Secret<String, EmailStrategy> = Secret::new("example@test.com".to_string());
        assert_eq!("*******@test.com", format!("{secret:?}"));
    }

    #[test]
    fn test_invalid_email_is_rejected() {
        assert!(Email::from_str("no-at-sign").is_err());
        assert!(Email::from_str("@test.com").is_err());
        assert!(Email::from_str("max@example.de").is_ok());
    }

    #[test]
    fn test_iban_masking() {
        let secret: Secret<String, IbanStrategy> =
            Secret::new("DE89370400440532013000".to_string());
        assert_eq!("DE****************3000", format!("{secret:?}"));
    }
}
