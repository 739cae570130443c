// xbind/xbind-testkit
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use crate::error::TesterError;
use crate::qname::AbsoluteType;
use crate::report::{Assertion, AssertionKind, PanicReporter, TestReporter};
use crate::schema::CompileOptions;

mod reader;
mod template;
mod writer;

/// Per-test-file configuration and reporting handle. Replaces process-wide
/// defaults so concurrent test runs stay isolated from each other.
pub struct TestContext {
    default_namespace: Option<String>,
    compile_defaults: CompileOptions,
    template_include_namespaces: bool,
    reporter: Arc<dyn TestReporter>,
}

impl Default for TestContext {
    fn default() -> Self {
        TestContext::builder().build()
    }
}

impl TestContext {
    pub fn builder() -> TestContextBuilder {
        TestContextBuilder::new()
    }

    pub fn default_namespace(&self) -> Option<&str> {
        self.default_namespace.as_deref()
    }

    pub fn compile_defaults(&self) -> &CompileOptions {
        &self.compile_defaults
    }

    pub fn template_include_namespaces(&self) -> bool {
        self.template_include_namespaces
    }

    pub fn reporter(&self) -> &Arc<dyn TestReporter> {
        &self.reporter
    }

    pub fn set_default_namespace(&mut self, namespace: impl Into<String>) {
        self.default_namespace = Some(namespace.into());
    }

    /// Replaces the suite-wide compiler option overrides wholesale. Passing
    /// `CompileOptions::default()` resets them.
    pub fn set_compile_defaults(&mut self, defaults: CompileOptions) {
        self.compile_defaults = defaults;
    }

    pub fn set_template_include_namespaces(&mut self, include_namespaces: bool) {
        self.template_include_namespaces = include_namespaces;
    }

    /// Qualifies `name` against the configured default namespace. Names
    /// already in Clark notation pass through unchanged.
    pub fn absolute_type(&self, name: &str) -> Result<AbsoluteType, TesterError> {
        if AbsoluteType::is_qualified(name) {
            return name.parse();
        }
        let Some(namespace) = &self.default_namespace else {
            return Err(TesterError::MissingDefaultNamespace {
                type_name: name.to_string(),
            });
        };
        Ok(AbsoluteType::new(namespace, name))
    }

    pub(crate) fn record(
        &self,
        kind: AssertionKind,
        label: &str,
        passed: bool,
        detail: Option<String>,
    ) {
        self.reporter.record(Assertion {
            label: label.to_string(),
            kind,
            passed,
            detail,
        });
    }
}

pub struct TestContextBuilder {
    default_namespace: Option<String>,
    compile_defaults: CompileOptions,
    template_include_namespaces: bool,
    reporter: Arc<dyn TestReporter>,
}

impl TestContextBuilder {
    fn new() -> Self {
        TestContextBuilder {
            default_namespace: None,
            compile_defaults: CompileOptions::default(),
            template_include_namespaces: true,
            reporter: Arc::new(PanicReporter),
        }
    }

    pub fn set_default_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.default_namespace = Some(namespace.into());
        self
    }

    pub fn set_compile_defaults(mut self, defaults: CompileOptions) -> Self {
        self.compile_defaults = defaults;
        self
    }

    pub fn set_template_include_namespaces(mut self, include_namespaces: bool) -> Self {
        self.template_include_namespaces = include_namespaces;
        self
    }

    pub fn set_reporter(mut self, reporter: Arc<dyn TestReporter>) -> Self {
        self.reporter = reporter;
        self
    }

    pub fn build(self) -> TestContext {
        TestContext {
            default_namespace: self.default_namespace,
            compile_defaults: self.compile_defaults,
            template_include_namespaces: self.template_include_namespaces,
            reporter: self.reporter,
        }
    }
}
