//! Title sanitizing and validation.
//!
//! Input is sanitized while the user types (illegal characters are dropped silently),
//! then validated. Both scripts share one `ScriptValidator`; only the character set
//! and the messages differ.

use std::fmt;

/// Writing system a title is restricted to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Script {
    Latin,
    Arabic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleErrorKind {
    Required,
    Charset,
    MinLength,
}

/// Field-level validation error with a user-facing message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleError {
    pub kind: TitleErrorKind,
    pub message: String,
}

impl fmt::Display for TitleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for TitleError {}

/// Validator for a title written in a single script
#[derive(Debug, Clone, Copy)]
pub struct ScriptValidator {
    pub script: Script,
    allows: fn(char) -> bool,
    required_message: &'static str,
    charset_message: &'static str,
    min_length_message: fn(usize) -> String,
    hint: fn(usize) -> String,
    min_letters: usize,
}

pub const ENGLISH: ScriptValidator = ScriptValidator {
    script: Script::Latin,
    allows: is_latin_letter,
    required_message: "Required",
    charset_message: "English letters only",
    min_length_message: english_min_length,
    hint: english_hint,
    min_letters: 2,
};

pub const ARABIC: ScriptValidator = ScriptValidator {
    script: Script::Arabic,
    allows: is_arabic_char,
    required_message: "مطلوب",
    charset_message: "أحرف عربية فقط",
    min_length_message: arabic_min_length,
    hint: arabic_hint,
    min_letters: 2,
};

impl ScriptValidator {
    pub fn with_min_letters(mut self, min_letters: usize) -> Self {
        self.min_letters = min_letters.max(1);
        self
    }

    pub fn min_letters(&self) -> usize {
        self.min_letters
    }

    /// Text shown under the input while the field has no error
    pub fn hint(&self) -> String {
        (self.hint)(self.min_letters)
    }

    fn accepts(&self, c: char) -> bool {
        (self.allows)(c) || c.is_whitespace()
    }

    /// Drop every character outside the script and whitespace
    pub fn sanitize(&self, input: &str) -> String {
        input.chars().filter(|c| self.accepts(*c)).collect()
    }

    pub fn validate(&self, input: &str) -> Option<TitleError> {
        let raw = input.trim();
        if raw.is_empty() {
            return Some(self.error(TitleErrorKind::Required, self.required_message.to_string()));
        }
        if !raw.chars().all(|c| self.accepts(c)) {
            return Some(self.error(TitleErrorKind::Charset, self.charset_message.to_string()));
        }
        let letters = raw.chars().filter(|c| !c.is_whitespace()).count();
        if letters < self.min_letters {
            return Some(self.error(
                TitleErrorKind::MinLength,
                (self.min_length_message)(self.min_letters),
            ));
        }
        None
    }

    fn error(&self, kind: TitleErrorKind, message: String) -> TitleError {
        TitleError { kind, message }
    }
}

fn is_latin_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}

fn is_arabic_char(c: char) -> bool {
    ('\u{0600}'..='\u{06FF}').contains(&c)
}

fn english_min_length(n: usize) -> String {
    format!("Minimum {} letters", n)
}

fn english_hint(n: usize) -> String {
    format!("English letters only. Minimum {} letters.", n)
}

fn arabic_min_length(n: usize) -> String {
    match n {
        2 => "الحد الأدنى حرفان".to_string(),
        _ => format!("الحد الأدنى {} أحرف", n),
    }
}

fn arabic_hint(n: usize) -> String {
    format!("أحرف عربية فقط. {}.", arabic_min_length(n))
}

pub fn sanitize_english(input: &str) -> String {
    ENGLISH.sanitize(input)
}

pub fn sanitize_arabic(input: &str) -> String {
    ARABIC.sanitize(input)
}

pub fn validate_english(input: &str) -> Option<TitleError> {
    ENGLISH.validate(input)
}

pub fn validate_arabic(input: &str) -> Option<TitleError> {
    ARABIC.validate(input)
}
