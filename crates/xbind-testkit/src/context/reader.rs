// xbind/xbind-testkit
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use tracing::debug;

use crate::context::TestContext;
use crate::error::TesterError;
use crate::report::AssertionKind;
use crate::schema::{
    catch, CompileOptions, CompiledCodec, Direction, SchemaCompiler, SchemaReader,
};

impl TestContext {
    /// Compiles a reader for `type_name` and records one creation assertion
    /// under `label`. Base defaults are `check_values: true` and
    /// `include_namespaces: false`, layered under the suite-wide defaults
    /// and the call-site `options`.
    pub fn create_reader<S>(
        &self,
        schema: &S,
        label: &str,
        type_name: &str,
        options: CompileOptions,
    ) -> Result<SchemaReader, TesterError>
    where
        S: SchemaCompiler + ?Sized,
    {
        let abs_type = self.absolute_type(type_name)?;
        let merged = options
            .layered_over(self.compile_defaults())
            .layered_over(&CompileOptions::reader_base());

        debug!("Compiling reader for {}", abs_type);
        match schema.compile(Direction::Reader, &abs_type, &merged) {
            Ok(CompiledCodec::Reader(reader)) => {
                self.record(AssertionKind::Creation, label, true, None);
                Ok(reader)
            }
            Ok(CompiledCodec::Writer(_)) => {
                let msg = format!(
                    "Compiler returned a writer for {} where a reader was requested",
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

    /// Reads `xml` with a freshly compiled reader for `type_name` and
    /// expects the read to fail. Returns the captured messages joined with
    /// newlines, or an empty string when nothing was captured.
    pub fn reader_expecting_error<S>(
        &self,
        schema: &S,
        type_name: &str,
        xml: &str,
    ) -> Result<String, TesterError>
    where
        S: SchemaCompiler + ?Sized,
    {
        let reader = self.create_reader(
            schema,
            &format!("reader for {}", type_name),
            type_name,
            CompileOptions::default(),
        )?;

        let label = format!("read error for {}", type_name);
        let caught = catch(|| reader(xml));

        if caught.value.is_some() {
            let msg = format!(
                "Reader for {} produced a value where an error was expected",
                type_name
            );
            self.reporter().warn(&msg);
            self.record(AssertionKind::ExpectedError, &label, false, Some(msg));
            return Ok(String::new());
        }

        let error_text = caught.error_text();
        let passed = !error_text.is_empty();
        let detail = (!passed).then(|| "the read captured no error".to_string());
        self.record(AssertionKind::ExpectedError, &label, passed, detail);
        Ok(error_text)
    }
}
