// xbind/xbind-testkit
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

/// Validation failure raised by a compiled reader or writer. Carries the
/// individual problems the binder reported while processing one payload.
#[derive(Debug, Clone, Default, thiserror::Error)]
#[error("{}", join_messages(.exceptions))]
pub struct BindFailure {
    pub exceptions: Vec<BindException>,
}

impl BindFailure {
    pub fn new(message: impl Into<String>) -> Self {
        BindFailure {
            exceptions: vec![BindException::new(message)],
        }
    }

    pub fn with_messages<I>(messages: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        BindFailure {
            exceptions: messages.into_iter().map(BindException::new).collect(),
        }
    }

    /// All messages joined with a newline.
    pub fn message_text(&self) -> String {
        join_messages(&self.exceptions)
    }
}

/// One human-readable problem within a [`BindFailure`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct BindException {
    pub message: String,
}

impl BindException {
    pub fn new(message: impl Into<String>) -> Self {
        BindException {
            message: message.into(),
        }
    }
}

fn join_messages(exceptions: &[BindException]) -> String {
    exceptions
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Runs a codec invocation and captures its failure instead of propagating
/// it, so expected-error helpers can interrogate what went wrong.
pub fn catch<T>(f: impl FnOnce() -> Result<T, BindFailure>) -> Caught<T> {
    match f() {
        Ok(value) => Caught {
            value: Some(value),
            failure: None,
        },
        Err(failure) => Caught {
            value: None,
            failure: Some(failure),
        },
    }
}

/// Outcome of a [`catch`] scope.
#[derive(Debug)]
pub struct Caught<T> {
    pub value: Option<T>,
    pub failure: Option<BindFailure>,
}

impl<T> Caught<T> {
    /// Concatenated messages of the captured failure, empty when the scope
    /// completed cleanly.
    pub fn error_text(&self) -> String {
        self.failure
            .as_ref()
            .map(BindFailure::message_text)
            .unwrap_or_default()
    }
}
