use super::errors::{Error, ErrorCategory};

/// Append-only, emission-ordered collection of errors found during a parse.
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    errors: Vec<Error>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Diagnostics { errors: vec![] }
    }

    pub fn append(&mut self, error: Error) {
        self.errors.push(error);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Error> {
        self.errors.iter()
    }

    pub fn count(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of errors with the given kind name.
    pub fn count_named(&self, name: &str) -> usize {
        self.errors
            .iter()
            .filter(|error| error.get_error_name() == name)
            .count()
    }

    pub fn count_category(&self, category: ErrorCategory) -> usize {
        self.errors
            .iter()
            .filter(|error| error.get_category() == category)
            .count()
    }

    pub fn into_vec(self) -> Vec<Error> {
        self.errors
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Error;
    type IntoIter = std::slice::Iter<'a, Error>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}
