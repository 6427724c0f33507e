//! System color-scheme preference.
//!
//! The host is asked at call time whether the platform prefers a dark scheme,
//! and the answer is a plain `bool`. Implementations resolve any live query
//! handle themselves; a handle never leaks to callers.

#[cfg(test)]
#[path = "system_test.rs"]
mod system_test;

use std::cell::Cell;

/// Media query for the platform dark-scheme preference.
pub const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// Answers "does the platform currently prefer a dark color scheme?".
pub trait ColorSchemeQuery {
    fn is_dark_preferred(&self) -> bool;
}

impl<F: Fn() -> bool> ColorSchemeQuery for F {
    fn is_dark_preferred(&self) -> bool {
        self()
    }
}

/// Collapse a media query lookup to its `matches` answer.
///
/// `lookup` is the outcome of asking the host for the query and reading
/// `matches` off the returned list. A failed lookup or a host without the
/// query list counts as "not dark"; only an explicit match is dark.
#[must_use]
pub fn media_match<E>(lookup: Result<Option<bool>, E>) -> bool {
    matches!(lookup, Ok(Some(true)))
}

/// A fixed system preference that counts how often it was consulted.
#[derive(Debug, Default)]
pub struct FixedScheme {
    dark: bool,
    queries: Cell<usize>,
}

impl FixedScheme {
    #[must_use]
    pub fn new(dark: bool) -> Self {
        Self { dark, queries: Cell::new(0) }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self::new(true)
    }

    #[must_use]
    pub fn light() -> Self {
        Self::new(false)
    }

    /// How many times the preference has been read.
    #[must_use]
    pub fn queries(&self) -> usize {
        self.queries.get()
    }
}

impl ColorSchemeQuery for FixedScheme {
    fn is_dark_preferred(&self) -> bool {
        self.queries.set(self.queries.get() + 1);
        self.dark
    }
}
