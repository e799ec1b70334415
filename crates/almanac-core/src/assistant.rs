//! Seam for the optional generative-text assistant.
//!
//! The crate ships no network client. Callers that have one implement
//! [`TextGenerator`] and hand an [`Assistant`] to the planner operations that
//! need it; signing out is simply passing [`Assistant::Unauthenticated`].

use std::fmt;

use crate::error::{AlmanacError, Result};

/// Anything that turns a prompt into text.
pub trait TextGenerator {
    /// Generate a response to `prompt`.
    ///
    /// # Errors
    ///
    /// Implementations report failures as `AlmanacError::Assistant`.
    fn generate(&self, prompt: &str) -> Result<String>;
}

/// An assistant session: signed in with a generator, or not.
#[derive(Default)]
pub enum Assistant {
    #[default]
    Unauthenticated,
    Authenticated(Box<dyn TextGenerator>),
}

impl Assistant {
    pub fn signed_in(generator: impl TextGenerator + 'static) -> Self {
        Self::Authenticated(Box::new(generator))
    }

    pub fn is_signed_in(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    /// Run `prompt` through the generator.
    ///
    /// # Errors
    ///
    /// * `AlmanacError::Unauthenticated` - no generator is configured
    /// * `AlmanacError::Assistant` - the generator failed or returned nothing
    pub fn generate(&self, prompt: &str) -> Result<String> {
        let Self::Authenticated(generator) = self else {
            return Err(AlmanacError::Unauthenticated);
        };
        let response = generator.generate(prompt)?;
        if response.trim().is_empty() {
            return Err(AlmanacError::assistant("empty response"));
        }
        Ok(response)
    }
}

impl fmt::Debug for Assistant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unauthenticated => f.write_str("Unauthenticated"),
            Self::Authenticated(_) => f.write_str("Authenticated"),
        }
    }
}

/// Pull the JSON object out of a model response that may wrap it in prose
/// or a fenced code block.
pub(crate) fn extract_json(response: &str) -> Option<&str> {
    let start = response.find('{')?;
    let end = response.rfind('}')?;
    (start < end).then(|| &response[start..=end])
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Echo;

    impl TextGenerator for Echo {
        fn generate(&self, prompt: &str) -> Result<String> {
            Ok(format!("echo: {prompt}"))
        }
    }

    struct Silent;

    impl TextGenerator for Silent {
        fn generate(&self, _prompt: &str) -> Result<String> {
            Ok("   ".to_string())
        }
    }

    #[test]
    fn test_unauthenticated_refuses() {
        let err = Assistant::Unauthenticated.generate("hi").unwrap_err();
        assert!(matches!(err, AlmanacError::Unauthenticated));
    }

    #[test]
    fn test_signed_in_generates() {
        let assistant = Assistant::signed_in(Echo);
        assert!(assistant.is_signed_in());
        assert_eq!(assistant.generate("hi").unwrap(), "echo: hi");
    }

    #[test]
    fn test_blank_response_is_an_error() {
        let err = Assistant::signed_in(Silent).generate("hi").unwrap_err();
        assert!(matches!(err, AlmanacError::Assistant { .. }));
    }

    #[test]
    fn test_extract_json_from_fenced_block() {
        let response = "Here you go:\n```json\n{\"periods\": []}\n```";
        assert_eq!(extract_json(response), Some("{\"periods\": []}"));
        assert_eq!(extract_json("no json here"), None);
    }
}
