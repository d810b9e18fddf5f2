use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Shop customer profile
///
/// Not exposed over HTTP yet; defined so that stored user documents
/// validate the same way everywhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct User {
    #[validate(length(min = 1, max = 200))]
    #[schema(example = "Ada Lovelace")]
    pub name: String,
    #[validate(email)]
    #[schema(example = "ada@example.com")]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[validate(range(max = 150))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u8>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl User {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            address: None,
            age: None,
            is_active: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_minimal_user_defaults() {
        let user: User = serde_json::from_value(json!({
            "name": "Ada Lovelace",
            "email": "ada@example.com"
        }))
        .unwrap();

        assert_eq!(user, User::new("Ada Lovelace", "ada@example.com"));
        assert!(user.is_active);
        assert!(user.validate().is_ok());
    }

    #[test]
    fn test_invalid_email_and_age() {
        let mut user = User::new("Ada", "not-an-email");
        assert!(user.validate().is_err());

        user.email = "ada@example.com".to_string();
        user.age = Some(151);
        let errors = user.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("age"));
    }

    #[test]
    fn test_name_required() {
        let user = User::new("", "ada@example.com");
        let errors = user.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
    }

    #[test]
    fn test_negative_age_is_a_type_error() {
        let parsed = serde_json::from_value::<User>(json!({
            "name": "Ada",
            "email": "ada@example.com",
            "age": -1
        }));
        assert!(parsed.is_err());
    }

    #[test]
    fn test_optional_fields_are_omitted() {
        let value = serde_json::to_value(User::new("Ada", "ada@example.com")).unwrap();
        assert!(value.get("address").is_none());
        assert!(value.get("age").is_none());
        assert_eq!(value["is_active"], true);
    }
}
