//! Request/response state machine shared by the list and details views

use std::fmt::Display;

/// `Idle -> Loading -> (Loaded | Errored)`
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    Idle,
    Loading,
    Loaded(T),
    /// Display-ready message, already prefixed by the owning view
    Errored(String),
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        FetchState::Idle
    }
}

impl<T> FetchState<T> {
    pub fn begin(&mut self) {
        *self = FetchState::Loading;
    }

    /// Settle a request; `context` prefixes the error text
    pub fn finish<E: Display>(&mut self, result: Result<T, E>, context: &str) {
        *self = match result {
            Ok(value) => FetchState::Loaded(value),
            Err(e) => FetchState::Errored(format!("{context}: {e}")),
        };
    }

    pub fn reset(&mut self) {
        *self = FetchState::Idle;
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            FetchState::Loaded(v) => Some(v),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FetchState::Errored(e) => Some(e),
            _ => None,
        }
    }
}
