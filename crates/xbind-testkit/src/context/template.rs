// xbind/xbind-testkit
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use minidom::Element;
use serde_json::Value;
use tracing::debug;

use crate::context::TestContext;
use crate::error::TesterError;
use crate::schema::{SchemaCompiler, Template, TemplateForm, TemplateOptions};

impl TestContext {
    /// Example instance of `type_name` as XML text.
    pub fn template_as_xml<S>(
        &self,
        schema: &S,
        type_name: &str,
        options: TemplateOptions,
    ) -> Result<String, TesterError>
    where
        S: SchemaCompiler + ?Sized,
    {
        match self.template(schema, TemplateForm::Xml, type_name, options)? {
            Template::Xml(text) => Ok(text),
            other => Err(wrong_form(TemplateForm::Xml, &other)),
        }
    }

    /// Example instance of `type_name` as a native structured value.
    pub fn template_as_value<S>(
        &self,
        schema: &S,
        type_name: &str,
        options: TemplateOptions,
    ) -> Result<Value, TesterError>
    where
        S: SchemaCompiler + ?Sized,
    {
        match self.template(schema, TemplateForm::Structure, type_name, options)? {
            Template::Structure(value) => Ok(value),
            other => Err(wrong_form(TemplateForm::Structure, &other)),
        }
    }

    /// Example instance of `type_name` as an element tree.
    pub fn template_as_tree<S>(
        &self,
        schema: &S,
        type_name: &str,
        options: TemplateOptions,
    ) -> Result<Element, TesterError>
    where
        S: SchemaCompiler + ?Sized,
    {
        match self.template(schema, TemplateForm::Tree, type_name, options)? {
            Template::Tree(element) => Ok(element),
            other => Err(wrong_form(TemplateForm::Tree, &other)),
        }
    }

    fn template<S>(
        &self,
        schema: &S,
        form: TemplateForm,
        type_name: &str,
        options: TemplateOptions,
    ) -> Result<Template, TesterError>
    where
        S: SchemaCompiler + ?Sized,
    {
        let abs_type = self.absolute_type(type_name)?;
        let options = options.with_namespace_default(self.template_include_namespaces());
        debug!("Requesting {} template for {}", form, abs_type);
        Ok(schema.template(form, &abs_type, &options)?)
    }
}

fn wrong_form(requested: TemplateForm, received: &Template) -> TesterError {
    TesterError::Generic {
        msg: format!(
            "Schema produced a {} template where {} was requested",
            received.form(),
            requested
        ),
    }
}
