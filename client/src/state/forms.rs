//! Per-field form state for the site's forms.
//!
//! DESIGN
//! ======
//! Forms hold raw field strings only. Required-field checks are left to the
//! browser (`required` attributes); submission always succeeds, so there is no
//! cross-field validation here.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

pub const CONTACT_SENT_MESSAGE: &str = "Your message has been sent successfully!";
pub const RESET_LINK_SENT_MESSAGE: &str = "Password reset link has been sent to your email.";
pub const REGISTRATION_RECEIVED_MESSAGE: &str = "Registration received. Please log in.";

/// Fields of the contact form, keyed by their element id.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Message => "message",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Message => self.message = value,
        }
    }

    #[must_use]
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    /// Cosmetic; the session flag persists regardless.
    pub remember_me: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
    Unspecified,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Unspecified];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Unspecified => "Prefer not to say",
        }
    }

    /// Radio input id.
    #[must_use]
    pub const fn input_id(self) -> &'static str {
        match self {
            Gender::Male => "dot-1",
            Gender::Female => "dot-2",
            Gender::Unspecified => "dot-3",
        }
    }
}

/// Text fields of the registration form, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegisterField {
    FullName,
    Username,
    Email,
    Phone,
    Password,
    ConfirmPassword,
}

impl RegisterField {
    pub const ALL: [RegisterField; 6] = [
        RegisterField::FullName,
        RegisterField::Username,
        RegisterField::Email,
        RegisterField::Phone,
        RegisterField::Password,
        RegisterField::ConfirmPassword,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            RegisterField::FullName => "Full Name",
            RegisterField::Username => "Username",
            RegisterField::Email => "Email",
            RegisterField::Phone => "Phone Number",
            RegisterField::Password => "Password",
            RegisterField::ConfirmPassword => "Confirm Password",
        }
    }

    #[must_use]
    pub const fn placeholder(self) -> &'static str {
        match self {
            RegisterField::FullName => "Enter your name",
            RegisterField::Username => "Enter your username",
            RegisterField::Email => "Enter your email",
            RegisterField::Phone => "Enter your number",
            RegisterField::Password => "Enter your password",
            RegisterField::ConfirmPassword => "Confirm your password",
        }
    }

    /// HTML `type` attribute for the input.
    #[must_use]
    pub const fn input_type(self) -> &'static str {
        match self {
            RegisterField::Email => "email",
            RegisterField::Password | RegisterField::ConfirmPassword => "password",
            RegisterField::FullName | RegisterField::Username | RegisterField::Phone => "text",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub full_name: String,
    pub username: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
    pub accepted_terms: bool,
    pub gender: Option<Gender>,
}

impl RegisterForm {
    pub fn set(&mut self, field: RegisterField, value: String) {
        *self.slot(field) = value;
    }

    #[must_use]
    pub fn get(&self, field: RegisterField) -> &str {
        match field {
            RegisterField::FullName => &self.full_name,
            RegisterField::Username => &self.username,
            RegisterField::Email => &self.email,
            RegisterField::Phone => &self.phone,
            RegisterField::Password => &self.password,
            RegisterField::ConfirmPassword => &self.confirm_password,
        }
    }

    fn slot(&mut self, field: RegisterField) -> &mut String {
        match field {
            RegisterField::FullName => &mut self.full_name,
            RegisterField::Username => &mut self.username,
            RegisterField::Email => &mut self.email,
            RegisterField::Phone => &mut self.phone,
            RegisterField::Password => &mut self.password,
            RegisterField::ConfirmPassword => &mut self.confirm_password,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ForgotPasswordForm {
    pub email: String,
}
