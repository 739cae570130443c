// xbind/xbind-testkit
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use minidom::Element;
use serde_json::Value;
use tracing::debug;

use crate::context::TestContext;
use crate::document::Document;
use crate::error::TesterError;
use crate::report::AssertionKind;
use crate::schema::{
    catch, CompileOptions, CompiledCodec, Direction, SchemaCompiler, SchemaWriter,
};

impl TestContext {
    /// Compiles a writer for `type_name` and records one creation assertion
    /// under `label`. Base defaults are `check_values: true`,
    /// `include_namespaces: false` and `use_default_prefix_or_namespace:
    /// true`, layered under the suite-wide defaults and the call-site
    /// `options`.
    pub fn create_writer<S>(
        &self,
        schema: &S,
        label: &str,
        type_name: &str,
        options: CompileOptions,
    ) -> Result<SchemaWriter, TesterError>
    where
        S: SchemaCompiler + ?Sized,
    {
        let abs_type = self.absolute_type(type_name)?;
        let merged = options
            .layered_over(self.compile_defaults())
            .layered_over(&CompileOptions::writer_base());

        debug!("Compiling writer for {}", abs_type);
        match schema.compile(Direction::Writer, &abs_type, &merged) {
            Ok(CompiledCodec::Writer(writer)) => {
                self.record(AssertionKind::Creation, label, true, None);
                Ok(writer)
            }
            Ok(CompiledCodec::Reader(_)) => {
                let msg = format!(
                    "Compiler returned a reader for {} where a writer was requested",
                    abs_type
                );
                self.record(AssertionKind::Creation, label, false, Some(msg.clone()));
                Err(TesterError::Generic { msg })
            }
            Err(err) => {
                self.record(AssertionKind::Creation, label, false, Some(err.to_string()));
                Err(err.into())
            }
        }
    }

    /// Invokes `writer` on `data`, creating a default document when the
    /// caller supplies none, and records one run assertion.
    pub fn run_writer(
        &self,
        writer: &SchemaWriter,
        data: &Value,
        doc: Option<&mut Document>,
    ) -> Result<Element, TesterError> {
        let mut fresh_doc = Document::default();
        let doc = doc.unwrap_or(&mut fresh_doc);

        match writer(doc, data) {
            Ok(node) => {
                self.record(AssertionKind::Run, "run writer", true, None);
                Ok(node)
            }
            Err(failure) => {
                self.record(
                    AssertionKind::Run,
                    "run writer",
                    false,
                    Some(failure.message_text()),
                );
                Err(failure.into())
            }
        }
    }

    /// Writes `data` with a freshly compiled writer for `type_name` and
    /// expects the write to fail. Returns the captured messages joined with
    /// newlines, or an empty string when nothing was captured.
    pub fn writer_expecting_error<S>(
        &self,
        schema: &S,
        type_name: &str,
        data: &Value,
    ) -> Result<String, TesterError>
    where
        S: SchemaCompiler + ?Sized,
    {
        let writer = self.create_writer(
            schema,
            &format!("writer for {}", type_name),
            type_name,
            CompileOptions::default(),
        )?;

        let label = format!("write error for {}", type_name);
        let mut doc = Document::default();
        let caught = catch(|| writer(&mut doc, data));

        if caught.value.is_some() {
            let msg = format!(
                "Writer for {} produced a node where an error was expected",
                type_name
            );
            self.reporter().warn(&msg);
            self.record(AssertionKind::ExpectedError, &label, false, Some(msg));
            return Ok(String::new());
        }

        let error_text = caught.error_text();
        let passed = !error_text.is_empty();
        let detail = (!passed).then(|| "the write captured no error".to_string());
        self.record(AssertionKind::ExpectedError, &label, passed, detail);
        Ok(error_text)
    }
}
