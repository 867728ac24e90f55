//! # Folio Types
//!
//! Small validated value types shared by the Folio crates.
//!
//! - [`NonEmptyText`]: text that is guaranteed to contain a non-whitespace character
//! - [`GridColumns`]: a strictly positive column count for the project grid

use std::num::NonZeroUsize;

/// Errors that can occur when creating validated text types.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TextError {
    /// The input text was empty or contained only whitespace
    #[error("text cannot be empty")]
    Empty,
}

/// Errors that can occur when creating a grid column count.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ColumnsError {
    #[error("grid column count must be greater than zero")]
    Zero,
    #[error("invalid grid column count: {0}")]
    NotANumber(String),
}

/// A string type that guarantees non-empty content.
///
/// The input is trimmed of leading and trailing whitespace during construction. If nothing is
/// left, construction fails with [`TextError::Empty`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NonEmptyText(String);

impl NonEmptyText {
    /// Creates a new `NonEmptyText` from the given input.
    ///
    /// # Errors
    ///
    /// Returns `TextError::Empty` if the trimmed input is empty.
    pub fn new(input: impl AsRef<str>) -> Result<Self, TextError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TextError::Empty);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Converts an optional string into an optional `NonEmptyText`, treating blank text as absent.
    pub fn from_optional(input: Option<impl AsRef<str>>) -> Option<Self> {
        input.and_then(|s| Self::new(s).ok())
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NonEmptyText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for NonEmptyText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::str::FromStr for NonEmptyText {
    type Err = TextError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl serde::Serialize for NonEmptyText {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

/// Number of columns in the project grid. Always at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridColumns(NonZeroUsize);

impl GridColumns {
    /// Three cards per row.
    pub const DEFAULT: GridColumns = GridColumns(match NonZeroUsize::new(3) {
        Some(n) => n,
        None => unreachable!(),
    });

    /// # Errors
    ///
    /// Returns `ColumnsError::Zero` when `columns` is zero.
    pub fn new(columns: usize) -> Result<Self, ColumnsError> {
        NonZeroUsize::new(columns).map(Self).ok_or(ColumnsError::Zero)
    }

    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for GridColumns {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl std::fmt::Display for GridColumns {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for GridColumns {
    type Err = ColumnsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let n = s
            .trim()
            .parse::<usize>()
            .map_err(|_| ColumnsError::NotANumber(s.to_string()))?;
        Self::new(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_empty_text_trims_input() {
        let text = NonEmptyText::new("  Data pipeline  ").unwrap();
        assert_eq!(text.as_str(), "Data pipeline");
    }

    #[test]
    fn non_empty_text_rejects_blank() {
        assert_eq!(NonEmptyText::new(""), Err(TextError::Empty));
        assert_eq!(NonEmptyText::new(" \n\t "), Err(TextError::Empty));
    }

    #[test]
    fn from_optional_treats_blank_as_absent() {
        assert_eq!(NonEmptyText::from_optional(None::<&str>), None);
        assert_eq!(NonEmptyText::from_optional(Some("   ")), None);
        assert_eq!(
            NonEmptyText::from_optional(Some("https://example.com")),
            Some(NonEmptyText::new("https://example.com").unwrap())
        );
    }

    #[test]
    fn non_empty_text_serializes_as_trimmed_string() {
        let text = NonEmptyText::new(" ETL ").unwrap();
        assert_eq!(serde_json::to_string(&text).unwrap(), "\"ETL\"");
    }

    #[test]
    fn grid_columns_default_is_three() {
        assert_eq!(GridColumns::default().get(), 3);
    }

    #[test]
    fn grid_columns_rejects_zero() {
        assert_eq!(GridColumns::new(0), Err(ColumnsError::Zero));
        assert_eq!("0".parse::<GridColumns>(), Err(ColumnsError::Zero));
    }

    #[test]
    fn grid_columns_parses_from_str() {
        assert_eq!(" 4 ".parse::<GridColumns>().unwrap().get(), 4);
        assert!(matches!(
            "three".parse::<GridColumns>(),
            Err(ColumnsError::NotANumber(_))
        ));
    }
}
