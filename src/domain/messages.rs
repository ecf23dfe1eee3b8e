//! Localized user-facing text.
//!
//! The error taxonomy is the contract; wording lives here so it can change per
//! locale without touching the controller.

use crate::domain::form::ErrorKind;
use std::fmt;
use std::str::FromStr;

/// Display language for form messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    English,
    Nepali,
}

impl Locale {
    /// Short configuration code (`en` / `ne`).
    pub fn code(self) -> &'static str {
        match self {
            Locale::English => "en",
            Locale::Nepali => "ne",
        }
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Locale::English),
            "ne" | "nepali" => Ok(Locale::Nepali),
            other => Err(format!("unsupported locale '{other}'")),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Message table for one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Messages {
    locale: Locale,
}

impl Messages {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Text for an error kind.
    pub fn error(&self, kind: ErrorKind) -> &'static str {
        match (self.locale, kind) {
            (Locale::English, ErrorKind::SelectFiscalYear) => "Please select a fiscal year.",
            (Locale::English, ErrorKind::EnterUsername) => "Please enter your username.",
            (Locale::English, ErrorKind::EnterPassword) => "Please enter your password.",
            (Locale::English, ErrorKind::IncorrectCredentials) => {
                "Username or password did not match."
            }
            (Locale::English, ErrorKind::SystemProblem) => {
                "A system problem occurred. Please try again."
            }
            (Locale::Nepali, ErrorKind::SelectFiscalYear) => "कृपया आर्थिक वर्ष छान्नुहोस्।",
            (Locale::Nepali, ErrorKind::EnterUsername) => "कृपया प्रयोगकर्ता नाम लेख्नुहोस्।",
            (Locale::Nepali, ErrorKind::EnterPassword) => "कृपया पासवर्ड लेख्नुहोस्।",
            (Locale::Nepali, ErrorKind::IncorrectCredentials) => "प्रयोगकर्ता नाम वा पासवर्ड मिलेन।",
            (Locale::Nepali, ErrorKind::SystemProblem) => {
                "प्रणालीमा समस्या देखियो। फेरि प्रयास गर्नुहोस्।"
            }
        }
    }

    /// Text of the forgot-password notice. There is no self-service reset.
    pub fn forgot_password_notice(&self) -> &'static str {
        match self.locale {
            Locale::English => "Contact the system administrator to reset your password.",
            Locale::Nepali => "पासवर्ड परिवर्तन गर्न प्रणाली प्रशासकलाई सम्पर्क गर्नुहोस्।",
        }
    }
}
