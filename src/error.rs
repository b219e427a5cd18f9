use std::ops::Range;

use crate::model::Section;

/// The extracted lines did not match the weekly-menu template.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StructureError {
    #[error("no dates found in header line {header:?}")]
    NoDatesFound { header: Option<String> },
    #[error("{section} expects lines {range:?} but only {available} filtered lines are present")]
    RangeOutOfBounds {
        section: Section,
        range: Range<usize>,
        available: usize,
    },
}

impl StructureError {
    pub fn code(&self) -> &'static str {
        match self {
            StructureError::NoDatesFound { .. } => "no-dates-found",
            StructureError::RangeOutOfBounds { .. } => "range-out-of-bounds",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum MenuError {
    #[error("failed to fetch menu pdf: {0}")]
    Fetch(#[from] reqwest::Error),
    #[error("failed to extract text from menu pdf: {0}")]
    Extraction(String),
    #[error(transparent)]
    Structure(#[from] StructureError),
}

impl MenuError {
    pub fn code(&self) -> &'static str {
        match self {
            MenuError::Fetch(_) => "fetch-error",
            MenuError::Extraction(_) => "extraction-error",
            MenuError::Structure(err) => err.code(),
        }
    }
}

impl From<pdf_extract::OutputError> for MenuError {
    fn from(err: pdf_extract::OutputError) -> Self {
        MenuError::Extraction(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_bounds_message_names_the_section() {
        let err = StructureError::RangeOutOfBounds {
            section: Section::Dinner,
            range: 18..24,
            available: 20,
        };
        assert_eq!(err.code(), "range-out-of-bounds");
        assert_eq!(
            err.to_string(),
            "dinner expects lines 18..24 but only 20 filtered lines are present"
        );
    }

    #[test]
    fn structure_code_passes_through() {
        let err = MenuError::from(StructureError::NoDatesFound { header: None });
        assert_eq!(err.code(), "no-dates-found");
    }
}
