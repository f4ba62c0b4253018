use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// Input names of the login form.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LoginField {
    /// The `email` input.
    Email,
    /// The `password` input.
    Password,
}

/// Pending login form input.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginFields {
    /// E-mail address typed so far.
    pub email: String,
    /// Password typed so far.
    pub password: String,
}

impl LoginFields {
    /// Current value of `field`.
    #[must_use]
    pub fn get(&self, field: LoginField) -> &str {
        match field {
            LoginField::Email => &self.email,
            LoginField::Password => &self.password,
        }
    }

    /// Replace the value of `field`.
    pub fn set(&mut self, field: LoginField, value: impl Into<String>) {
        let value = value.into();
        match field {
            LoginField::Email => self.email = value,
            LoginField::Password => self.password = value,
        }
    }
}

/// Body of `POST /session`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    /// Account e-mail address.
    pub email: String,
    /// Account password.
    pub password: String,
}

impl From<&LoginFields> for LoginRequest {
    fn from(fields: &LoginFields) -> Self {
        Self {
            email: fields.email.clone(),
            password: fields.password.clone(),
        }
    }
}

/// Response of `POST /session`. A rejected login carries no token.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    /// Issued token, empty when none was issued.
    #[serde(default)]
    pub access_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_login_field_round_trips_through_name() {
        assert_eq!(LoginField::from_str("email"), Ok(LoginField::Email));
        assert_eq!(LoginField::Password.to_string(), "password");
        assert_eq!(LoginField::Password.as_ref(), "password");
    }

    #[test]
    fn test_login_fields_update_one_field_at_a_time() {
        let mut fields = LoginFields::default();
        fields.set(LoginField::Email, "tester@example.com");

        assert_eq!(fields.get(LoginField::Email), "tester@example.com");
        assert!(fields.get(LoginField::Password).is_empty());
    }

    #[test]
    fn test_login_response_without_token_is_empty() {
        let response: LoginResponse =
            serde_json::from_str(r#"{"message":"invalid"}"#).expect("valid response");
        assert!(response.access_token.is_empty());

        let response: LoginResponse =
            serde_json::from_str(r#"{"accessToken":"ACCESS_TOKEN"}"#).expect("valid response");
        assert_eq!(response.access_token, "ACCESS_TOKEN");
    }
}
