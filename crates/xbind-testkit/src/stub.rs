// xbind/xbind-testkit
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

//! Scriptable stand-in for the schema compiler. Used by this crate's own
//! integration tests and by consumers that test code built on the helpers.

use std::collections::HashMap;
use std::sync::Arc;

use minidom::Element;
use parking_lot::RwLock;
use serde_json::Value;

use crate::document::Document;
use crate::qname::AbsoluteType;
use crate::schema::{
    BindFailure, CompileError, CompileOptions, CompiledCodec, Direction, SchemaCompiler,
    Template, TemplateForm, TemplateOptions,
};

type StubReader = Arc<dyn Fn(&str) -> Result<Value, BindFailure>>;
type StubWriter = Arc<dyn Fn(&mut Document, &Value) -> Result<Element, BindFailure>>;

/// One recorded `compile` call.
#[derive(Debug, Clone, PartialEq)]
pub struct CompileRequest {
    pub direction: Direction,
    pub type_name: AbsoluteType,
    pub options: CompileOptions,
}

/// One recorded `template` call.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateRequest {
    pub form: TemplateForm,
    pub type_name: AbsoluteType,
    pub options: TemplateOptions,
}

/// In-memory schema compiler. Behavior is registered per qualified type and
/// every call is recorded for later inspection.
#[derive(Default)]
pub struct StubSchema {
    readers: RwLock<HashMap<String, StubReader>>,
    writers: RwLock<HashMap<String, StubWriter>>,
    templates: RwLock<HashMap<(TemplateForm, String), Template>>,
    compile_failures: RwLock<HashMap<String, CompileError>>,
    compile_requests: RwLock<Vec<CompileRequest>>,
    template_requests: RwLock<Vec<TemplateRequest>>,
}

impl StubSchema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_reader(
        &self,
        type_name: impl Into<String>,
        reader: impl Fn(&str) -> Result<Value, BindFailure> + 'static,
    ) {
        self.readers.write().insert(type_name.into(), Arc::new(reader));
    }

    /// Registers a reader that returns `value` for any input.
    pub fn add_value_reader(&self, type_name: impl Into<String>, value: Value) {
        self.add_reader(type_name, move |_| Ok(value.clone()));
    }

    /// Registers a reader that fails with `failure` for any input.
    pub fn add_failing_reader(&self, type_name: impl Into<String>, failure: BindFailure) {
        self.add_reader(type_name, move |_| Err(failure.clone()));
    }

    pub fn add_writer(
        &self,
        type_name: impl Into<String>,
        writer: impl Fn(&mut Document, &Value) -> Result<Element, BindFailure> + 'static,
    ) {
        self.writers.write().insert(type_name.into(), Arc::new(writer));
    }

    /// Registers a writer that fails with `failure` for any input.
    pub fn add_failing_writer(&self, type_name: impl Into<String>, failure: BindFailure) {
        self.add_writer(type_name, move |_, _| Err(failure.clone()));
    }

    /// Registers `template` under its own form, so one type can carry an
    /// XML, a structure and a tree template at the same time.
    pub fn add_template(&self, type_name: impl Into<String>, template: Template) {
        self.templates
            .write()
            .insert((template.form(), type_name.into()), template);
    }

    /// Makes `compile` fail for `type_name` regardless of direction.
    pub fn fail_compile(&self, type_name: impl Into<String>, error: CompileError) {
        self.compile_failures.write().insert(type_name.into(), error);
    }

    pub fn compile_requests(&self) -> Vec<CompileRequest> {
        self.compile_requests.read().clone()
    }

    pub fn template_requests(&self) -> Vec<TemplateRequest> {
        self.template_requests.read().clone()
    }
}

impl SchemaCompiler for StubSchema {
    fn compile(
        &self,
        direction: Direction,
        type_name: &AbsoluteType,
        options: &CompileOptions,
    ) -> Result<CompiledCodec, CompileError> {
        self.compile_requests.write().push(CompileRequest {
            direction,
            type_name: type_name.clone(),
            options: options.clone(),
        });

        if let Some(error) = self.compile_failures.read().get(type_name.as_str()) {
            return Err(error.clone());
        }

        match direction {
            Direction::Reader => {
                let reader = self
                    .readers
                    .read()
                    .get(type_name.as_str())
                    .cloned()
                    .ok_or_else(|| CompileError::UnknownType {
                        type_name: type_name.to_string(),
                    })?;
                Ok(CompiledCodec::Reader(Box::new(move |xml| reader(xml))))
            }
            Direction::Writer => {
                let writer = self
                    .writers
                    .read()
                    .get(type_name.as_str())
                    .cloned()
                    .ok_or_else(|| CompileError::UnknownType {
                        type_name: type_name.to_string(),
                    })?;
                Ok(CompiledCodec::Writer(Box::new(move |doc, value| {
                    writer(doc, value)
                })))
            }
        }
    }

    fn template(
        &self,
        form: TemplateForm,
        type_name: &AbsoluteType,
        options: &TemplateOptions,
    ) -> Result<Template, CompileError> {
        self.template_requests.write().push(TemplateRequest {
            form,
            type_name: type_name.clone(),
            options: options.clone(),
        });

        self.templates
            .read()
            .get(&(form, type_name.as_str().to_string()))
            .cloned()
            .ok_or_else(|| CompileError::UnknownType {
                type_name: type_name.to_string(),
            })
    }
}
