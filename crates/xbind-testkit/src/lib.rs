// xbind/xbind-testkit
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use compare::{canonicalize, canonicalize_opt, XmlInput};
pub use context::{TestContext, TestContextBuilder};
pub use document::Document;
pub use error::TesterError;
pub use qname::AbsoluteType;
pub use report::{Assertion, AssertionKind, PanicReporter, RecordingReporter, TestReporter};
pub use schema::{
    catch, BindException, BindFailure, Caught, CompileError, CompileOptions, CompiledCodec,
    Direction, SchemaCompiler, SchemaReader, SchemaWriter, Template, TemplateForm,
    TemplateOptions,
};

mod compare;
mod context;
mod document;
mod error;
mod qname;
mod report;
mod schema;
pub mod stub;
