// xbind/xbind-testkit
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::schema::{BindFailure, CompileError};

/// Errors the helpers hand back to the caller instead of routing through the
/// reporter. Compile and bind failures have been recorded as failed
/// assertions by the time they surface here.
#[derive(Debug, thiserror::Error)]
pub enum TesterError {
    #[error("No default namespace configured. Cannot qualify type '{type_name}'.")]
    MissingDefaultNamespace { type_name: String },
    #[error(transparent)]
    Compile(#[from] CompileError),
    #[error(transparent)]
    Bind(#[from] BindFailure),
    #[error("Tester error: {msg}")]
    Generic { msg: String },
}
