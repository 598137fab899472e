//! Click-to-reveal email address

use serde::Serialize;

/// Placeholder shown until the visitor asks for the address
pub const HIDDEN_LABEL: &str = "Email";

/// Display state of the contact email
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EmailReveal {
    #[default]
    Hidden,
    Revealed,
}

impl EmailReveal {
    /// The single transition, triggered by a click
    pub fn reveal(self) -> Self {
        EmailReveal::Revealed
    }

    /// Text shown in this state
    pub fn label<'a>(&self, email: &'a str) -> &'a str {
        match self {
            EmailReveal::Hidden => HIDDEN_LABEL,
            EmailReveal::Revealed => email,
        }
    }
}

/// Contact control data handed to the presentation layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailControl {
    pub initial: String,
    pub revealed: String,
}

impl EmailControl {
    /// Labels for both states; `None` when no address is configured
    pub fn new(email: &str) -> Option<Self> {
        if email.is_empty() {
            return None;
        }
        let state = EmailReveal::default();
        Some(Self {
            initial: state.label(email).to_string(),
            revealed: state.reveal().label(email).to_string(),
        })
    }
}
