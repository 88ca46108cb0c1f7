use thiserror::Error;

use super::text_input_state::TextInputState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Email,
    Password,
    RememberMe,
}

impl LoginField {
    fn next(self) -> Self {
        match self {
            Self::Email => Self::Password,
            Self::Password => Self::RememberMe,
            Self::RememberMe => Self::Email,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LoginError {
    #[error("Please fill in all fields")]
    MissingFields,
    #[error("Please enter a valid email address")]
    InvalidEmail,
}

/// Signed-in agent. There is no backend: any well-formed credentials pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentSession {
    pub email: String,
    pub remember_me: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginForm {
    email: TextInputState,
    password: TextInputState,
    remember_me: bool,
    focus: LoginField,
    password_visible: bool,
    error: Option<LoginError>,
}

impl Default for LoginForm {
    fn default() -> Self {
        Self {
            email: TextInputState::with_max_length(254),
            password: TextInputState::with_max_length(128),
            remember_me: false,
            focus: LoginField::Email,
            password_visible: false,
            error: None,
        }
    }
}

impl LoginForm {
    pub fn email(&self) -> &TextInputState {
        &self.email
    }

    pub fn password(&self) -> &TextInputState {
        &self.password
    }

    pub fn remember_me(&self) -> bool {
        self.remember_me
    }

    pub fn focus(&self) -> LoginField {
        self.focus
    }

    pub fn error(&self) -> Option<LoginError> {
        self.error
    }

    pub fn password_visible(&self) -> bool {
        self.password_visible
    }

    pub fn toggle_password_visible(&mut self) {
        self.password_visible = !self.password_visible;
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    /// The text field under focus, `None` on the checkbox.
    pub fn focused_input_mut(&mut self) -> Option<&mut TextInputState> {
        // Editing clears a shown error.
        self.error = None;
        match self.focus {
            LoginField::Email => Some(&mut self.email),
            LoginField::Password => Some(&mut self.password),
            LoginField::RememberMe => None,
        }
    }

    pub fn toggle_remember_me(&mut self) {
        self.remember_me = !self.remember_me;
    }

    /// Masked or plain password text for display.
    pub fn password_display(&self) -> String {
        if self.password_visible {
            self.password.text().to_owned()
        } else {
            "•".repeat(self.password.text().chars().count())
        }
    }

    pub fn validate(&self) -> Result<AgentSession, LoginError> {
        let email = self.email.text().trim();
        if email.is_empty() || self.password.is_empty() {
            return Err(LoginError::MissingFields);
        }
        if !email.contains('@') {
            return Err(LoginError::InvalidEmail);
        }

        Ok(AgentSession {
            email: email.to_owned(),
            remember_me: self.remember_me,
        })
    }

    /// Validates and records the outcome for display. The password is
    /// cleared either way.
    pub fn submit(&mut self) -> Result<AgentSession, LoginError> {
        let result = self.validate();
        self.error = result.as_ref().err().copied();
        self.password.clear();
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(email: &str, password: &str) -> LoginForm {
        let mut form = LoginForm::default();
        if let Some(input) = form.focused_input_mut() {
            input.set_text(email);
        }
        form.focus_next();
        if let Some(input) = form.focused_input_mut() {
            input.set_text(password);
        }
        form
    }

    #[test]
    fn empty_fields_are_rejected_first() {
        assert_eq!(form("", "").validate(), Err(LoginError::MissingFields));
        assert_eq!(
            form("agent", "").validate(),
            Err(LoginError::MissingFields)
        );
    }

    #[test]
    fn email_without_at_sign_is_rejected() {
        let err = form("agent.example.com", "pw").validate().expect_err("invalid");

        assert_eq!(err, LoginError::InvalidEmail);
        assert_eq!(err.to_string(), "Please enter a valid email address");
    }

    #[test]
    fn well_formed_credentials_open_a_session() {
        let mut form = form("agent@everly.com", "hunter2");
        form.focus_next();
        form.toggle_remember_me();

        let session = form.submit().expect("login should pass");

        assert_eq!(session.email, "agent@everly.com");
        assert!(session.remember_me);
        assert!(form.password().is_empty());
        assert_eq!(form.error(), None);
    }

    #[test]
    fn failed_submit_keeps_error_until_next_edit() {
        let mut form = form("", "");

        assert!(form.submit().is_err());
        assert_eq!(form.error(), Some(LoginError::MissingFields));

        let _ = form.focused_input_mut();
        assert_eq!(form.error(), None);
    }

    #[test]
    fn password_is_masked_unless_revealed() {
        let mut form = form("a@b.c", "abc");

        assert_eq!(form.password_display(), "•••");
        form.toggle_password_visible();
        assert_eq!(form.password_display(), "abc");
    }

    #[test]
    fn focus_cycles_through_all_fields() {
        let mut form = LoginForm::default();
        form.focus_next();
        form.focus_next();
        assert_eq!(form.focus(), LoginField::RememberMe);
        assert!(form.focused_input_mut().is_none());
        form.focus_next();
        assert_eq!(form.focus(), LoginField::Email);
    }
}
