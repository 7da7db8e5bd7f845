//! Uniform validation errors and results.
//!
//! A [`ValidationError`] pairs the members it concerns with a message
//! formatter; the formatter receives the member's display name so hosts can
//! localise or rename members. A [`ValidationResult`] is an ordered list of
//! errors: empty means valid.

use smallvec::SmallVec;
use std::fmt;
use std::sync::Arc;

/// Produces an error message for a member display name.
pub type MessageFormatter = Arc<dyn Fn(&str) -> String + Send + Sync>;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// One failed rule on a validated instance.
#[derive(Clone)]
pub struct ValidationError {
    member_names: SmallVec<[String; 1]>,
    formatter: MessageFormatter,
}

impl ValidationError {
    /// Creates an error whose message is rendered by `formatter`.
    pub fn new<I, S, F>(member_names: I, formatter: F) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        Self {
            member_names: member_names.into_iter().map(Into::into).collect(),
            formatter: Arc::new(formatter),
        }
    }

    /// Creates an error with a pre-computed message.
    ///
    /// The formatter ignores the display name and always returns `message`.
    pub fn fixed<I, S>(member_names: I, message: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let message = message.into();
        Self::new(member_names, move |_: &str| message.clone())
    }

    /// Members the error concerns.
    #[must_use]
    pub fn member_names(&self) -> &[String] {
        &self.member_names
    }

    /// Returns `true` if the error concerns `member`.
    #[must_use]
    pub fn concerns(&self, member: &str) -> bool {
        self.member_names.iter().any(|m| m == member)
    }

    /// Renders the message for `display_name`.
    #[must_use]
    pub fn message(&self, display_name: &str) -> String {
        (self.formatter)(display_name)
    }

    /// Renders the message for the first member name.
    #[must_use]
    pub fn default_message(&self) -> String {
        self.message(self.member_names.first().map_or("", String::as_str))
    }
}

impl fmt::Debug for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidationError")
            .field("member_names", &self.member_names)
            .field("message", &self.default_message())
            .finish()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}",
            self.member_names.join(", "),
            self.default_message()
        )
    }
}

impl std::error::Error for ValidationError {}

#[cfg(feature = "serde")]
impl serde::Serialize for ValidationError {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("ValidationError", 2)?;
        state.serialize_field("member_names", &self.member_names)?;
        state.serialize_field("message", &self.default_message())?;
        state.end()
    }
}

// ============================================================================
// VALIDATION RESULT
// ============================================================================

/// Ordered errors produced by one validation call.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ValidationResult {
    errors: Vec<ValidationError>,
}

impl ValidationResult {
    /// Creates a result holding `errors`, in order.
    pub fn new(errors: impl IntoIterator<Item = ValidationError>) -> Self {
        Self {
            errors: errors.into_iter().collect(),
        }
    }

    /// A result with no errors.
    #[must_use]
    pub fn valid() -> Self {
        Self::default()
    }

    /// Returns `true` when there are no errors.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// All errors, in order.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Errors concerning `member`.
    pub fn errors_for<'a>(&'a self, member: &'a str) -> impl Iterator<Item = &'a ValidationError> {
        self.errors.iter().filter(move |e| e.concerns(member))
    }

    /// Number of errors.
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// Consumes the result, returning its errors.
    #[must_use]
    pub fn into_errors(self) -> Vec<ValidationError> {
        self.errors
    }

    /// Converts to `Ok(())` when valid, `Err(self)` otherwise.
    #[must_use = "result must be used"]
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_valid() { Ok(()) } else { Err(self) }
    }

    /// Converts the result to a JSON value.
    #[cfg(feature = "serde")]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "is_valid": self.is_valid(),
            "errors": self.errors.iter().map(|e| serde_json::json!({
                "member_names": e.member_names(),
                "message": e.default_message(),
            })).collect::<Vec<_>>(),
        })
    }
}

impl FromIterator<ValidationError> for ValidationResult {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl IntoIterator for ValidationResult {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationResult {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            return write!(f, "Validation succeeded");
        }
        writeln!(f, "Validation failed with {} error(s):", self.errors.len())?;
        for (i, error) in self.errors.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, error)?;
        }
        Ok(())
    }
}
