//! Form state for the account pages (Login, Create Profile, Edit Profile).
//!
//! Each form follows the same cycle: `submit` validates and either records a
//! notice (no request) or returns the request body and marks the form busy;
//! the page then reports the outcome through `succeed` or `fail`.

use crate::error::ApiError;
use crate::model::profile::Profile;
use crate::notice::Notice;
use crate::requests::{LoginRequest, RegisterRequest, UpdateProfileRequest};
use crate::validation::{validate_login, validate_profile_update, validate_registration};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub notice: Option<Notice>,
    pub loading: bool,
}

impl LoginForm {
    pub fn submit(&mut self) -> Option<LoginRequest> {
        if self.loading {
            return None;
        }
        match validate_login(&self.email, &self.password) {
            Ok(request) => {
                self.notice = None;
                self.loading = true;
                Some(request)
            }
            Err(err) => {
                self.notice = Some(Notice::error(err.to_string()));
                None
            }
        }
    }

    pub fn succeed(&mut self) {
        self.loading = false;
        self.password.clear();
        self.notice = Some(Notice::success("Login successful. Redirecting..."));
    }

    pub fn fail(&mut self, err: &ApiError) {
        self.loading = false;
        let text = err
            .server_message()
            .unwrap_or("Invalid email or password.")
            .to_string();
        self.notice = Some(Notice::error(text));
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub notice: Option<Notice>,
    pub loading: bool,
}

impl RegisterForm {
    pub fn submit(&mut self) -> Option<RegisterRequest> {
        if self.loading {
            return None;
        }
        match validate_registration(&self.name, &self.email, &self.password) {
            Ok(request) => {
                self.notice = None;
                self.loading = true;
                Some(request)
            }
            Err(err) => {
                self.notice = Some(Notice::error(err.to_string()));
                None
            }
        }
    }

    pub fn succeed(&mut self) {
        self.loading = false;
        self.name.clear();
        self.email.clear();
        self.password.clear();
        self.notice = Some(Notice::success(
            "Profile created successfully! Redirecting to login...",
        ));
    }

    pub fn fail(&mut self, err: &ApiError) {
        self.loading = false;
        let text = err
            .server_message()
            .unwrap_or("Failed to create profile.")
            .to_string();
        self.notice = Some(Notice::error(text));
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileForm {
    pub name: String,
    pub email: String,
    pub notice: Option<Notice>,
    pub saving: bool,
}

impl ProfileForm {
    pub fn fill(&mut self, profile: &Profile) {
        self.name = profile.name.clone();
        self.email = profile.email.clone();
    }

    pub fn load_failed(&mut self) {
        self.notice = Some(Notice::error("Failed to load profile."));
    }

    pub fn submit(&mut self) -> Option<UpdateProfileRequest> {
        if self.saving {
            return None;
        }
        self.notice = None;
        match validate_profile_update(&self.name, &self.email) {
            Ok(request) => {
                self.saving = true;
                Some(request)
            }
            Err(err) => {
                self.notice = Some(Notice::error(err.to_string()));
                None
            }
        }
    }

    pub fn succeed(&mut self) {
        self.saving = false;
        self.notice = Some(Notice::success("Profile updated successfully!"));
    }

    pub fn fail(&mut self) {
        self.saving = false;
        self.notice = Some(Notice::error("Failed to update profile."));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notice::NoticeLevel;

    #[test]
    fn empty_login_never_yields_request() {
        let mut form = LoginForm {
            email: "citizen@urbanfix.in".to_string(),
            ..Default::default()
        };
        assert!(form.submit().is_none());
        assert!(!form.loading);
        assert_eq!(
            form.notice,
            Some(Notice::error("Please fill in all fields."))
        );
    }

    #[test]
    fn login_failure_shows_server_message_or_default() {
        let mut form = LoginForm {
            email: "a@b.co".to_string(),
            password: "pw".to_string(),
            ..Default::default()
        };
        assert!(form.submit().is_some());
        assert!(form.loading);
        assert!(form.submit().is_none(), "busy form must not resubmit");

        form.fail(&ApiError::from_status(401, r#"{"message": "Invalid username or password"}"#));
        assert!(!form.loading);
        assert_eq!(form.notice.unwrap().text, "Invalid username or password");

        let mut form = LoginForm {
            email: "a@b.co".to_string(),
            password: "pw".to_string(),
            ..Default::default()
        };
        form.submit();
        form.fail(&ApiError::no_response("offline"));
        assert_eq!(form.notice.unwrap().text, "Invalid email or password.");
    }

    #[test]
    fn register_success_clears_fields() {
        let mut form = RegisterForm {
            name: "Asha".to_string(),
            email: "asha@x.org".to_string(),
            password: "longenough".to_string(),
            ..Default::default()
        };
        assert!(form.submit().is_some());
        form.succeed();
        assert!(form.name.is_empty() && form.email.is_empty() && form.password.is_empty());
        assert_eq!(form.notice.unwrap().level, NoticeLevel::Success);
    }

    #[test]
    fn register_duplicate_email_shows_server_message() {
        let mut form = RegisterForm {
            name: "Asha".to_string(),
            email: "asha@x.org".to_string(),
            password: "longenough".to_string(),
            ..Default::default()
        };
        form.submit();
        form.fail(&ApiError::from_status(409, r#"{"message": "Email already registered"}"#));
        assert_eq!(form.notice.unwrap().text, "Email already registered");
    }

    #[test]
    fn profile_form_round() {
        let mut form = ProfileForm::default();
        form.fill(&Profile {
            user_id: "u1".to_string(),
            name: "Asha".to_string(),
            email: "asha@x.org".to_string(),
            role: "user".to_string(),
        });
        form.email = "broken".to_string();
        assert!(form.submit().is_none());
        assert_eq!(
            form.notice.as_ref().unwrap().text,
            "Please enter a valid email address."
        );

        form.email = "asha@y.org".to_string();
        let request = form.submit().unwrap();
        assert_eq!(request.email, "asha@y.org");
        form.fail();
        assert!(!form.saving);
        assert_eq!(form.notice.unwrap().text, "Failed to update profile.");
    }
}
