use std::fmt::Display;

/// Lifecycle of the single artifact fetch.
///
/// Starts in `Loading` and resolves exactly once. There is no transition out
/// of `Success` or `Error`; reloading starts a fresh lifecycle.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    Loading,
    Success(T),
    Error(String),
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self::Loading
    }
}

impl<T> FetchState<T> {
    /// Settles the fetch from its outcome.
    pub fn resolve<E: Display>(result: Result<T, E>) -> Self {
        match result {
            Ok(data) => Self::Success(data),
            Err(err) => Self::Error(err.to_string()),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&String> {
        match self {
            Self::Error(err) => Some(err),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::load::{decode_artifact, LoadError};

    const FIXTURE: &str = include_str!("../../../fixtures/analysis_data.json");

    #[test]
    fn test_starts_loading() {
        let state: FetchState<u32> = FetchState::default();
        assert!(state.is_loading());
        assert_eq!(state.data(), None);
        assert_eq!(state.error(), None);
    }

    #[test]
    fn test_not_found_resolves_to_error_only() {
        let state = FetchState::resolve(decode_artifact(404, ""));
        assert!(state.is_error());
        assert!(!state.is_success());
        assert!(state.data().is_none());
        assert_eq!(
            state.error().map(String::as_str),
            Some("analysis data not available (HTTP 404)")
        );
    }

    #[test]
    fn test_valid_body_goes_straight_to_success() {
        let state = FetchState::resolve(decode_artifact(200, FIXTURE));
        assert!(state.is_success());
        assert!(state.error().is_none());
        assert_eq!(state.data().map(|d| d.hotspots.len()), Some(5));
    }

    #[test]
    fn test_resolve_uses_error_display() {
        let state: FetchState<()> = FetchState::resolve(Err(LoadError::Decode("eof".into())));
        assert_eq!(state, FetchState::Error("analysis data is malformed: eof".to_string()));
    }
}
