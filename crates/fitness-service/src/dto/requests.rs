//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use serde::Deserialize;
use validator::Validate;

/// Register a client (by phone) and attach a new membership
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterClientRequest {
    #[validate(length(min = 1, max = 120, message = "Name must be 1-120 characters"))]
    pub name: String,

    #[validate(length(min = 1, max = 32, message = "Phone must be 1-32 characters"))]
    pub phone: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    /// Plan name: monthly, yearly or single
    #[validate(length(min = 1, max = 32, message = "Plan must not be empty"))]
    pub plan: String,
}

/// Record a check-in for a client
#[derive(Debug, Clone, Deserialize)]
pub struct CheckInRequest {
    pub client_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_requires_fields() {
        let request = RegisterClientRequest {
            name: String::new(),
            phone: "+7000".to_string(),
            email: None,
            plan: "monthly".to_string(),
        };
        assert!(request.validate().is_err());

        let request = RegisterClientRequest {
            name: "Test".to_string(),
            phone: "+7000".to_string(),
            email: None,
            plan: "monthly".to_string(),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_register_request_validates_email_when_present() {
        let request = RegisterClientRequest {
            name: "Test".to_string(),
            phone: "+7000".to_string(),
            email: Some("not-an-email".to_string()),
            plan: "monthly".to_string(),
        };
        assert!(request.validate().is_err());
    }
}
