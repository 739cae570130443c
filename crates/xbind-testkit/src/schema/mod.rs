// xbind/xbind-testkit
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use minidom::Element;
use serde_json::Value;
use strum_macros::{Display, EnumString};

use crate::document::Document;
use crate::qname::AbsoluteType;

pub use failure::{catch, BindException, BindFailure, Caught};
pub use options::{CompileOptions, TemplateOptions};

mod failure;
mod options;

/// Compiled reader. Serialized XML in, structured value out.
pub type SchemaReader = Box<dyn Fn(&str) -> Result<Value, BindFailure>>;

/// Compiled writer. Structured value in, XML element out, emitted into the
/// given target document.
pub type SchemaWriter = Box<dyn Fn(&mut Document, &Value) -> Result<Element, BindFailure>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum Direction {
    Reader,
    Writer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum TemplateForm {
    Xml,
    Structure,
    Tree,
}

/// What a compile call hands back. The creation helpers check that the
/// variant matches the requested direction.
pub enum CompiledCodec {
    Reader(SchemaReader),
    Writer(SchemaWriter),
}

/// Example instance of a schema type.
#[derive(Debug, Clone, PartialEq)]
pub enum Template {
    Xml(String),
    Structure(Value),
    Tree(Element),
}

impl Template {
    pub fn form(&self) -> TemplateForm {
        match self {
            Template::Xml(_) => TemplateForm::Xml,
            Template::Structure(_) => TemplateForm::Structure,
            Template::Tree(_) => TemplateForm::Tree,
        }
    }

    pub fn into_xml(self) -> Option<String> {
        match self {
            Template::Xml(text) => Some(text),
            _ => None,
        }
    }

    pub fn into_structure(self) -> Option<Value> {
        match self {
            Template::Structure(value) => Some(value),
            _ => None,
        }
    }

    pub fn into_tree(self) -> Option<Element> {
        match self {
            Template::Tree(element) => Some(element),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CompileError {
    #[error("Schema has no type {type_name}")]
    UnknownType { type_name: String },
    #[error("Compile error: {msg}")]
    Generic { msg: String },
}

/// The schema-driven binding compiler under test.
pub trait SchemaCompiler {
    fn compile(
        &self,
        direction: Direction,
        type_name: &AbsoluteType,
        options: &CompileOptions,
    ) -> Result<CompiledCodec, CompileError>;

    fn template(
        &self,
        form: TemplateForm,
        type_name: &AbsoluteType,
        options: &TemplateOptions,
    ) -> Result<Template, CompileError>;
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_direction_wire_names() {
        assert_eq!(Direction::Reader.to_string(), "reader");
        assert_eq!(Direction::from_str("writer").unwrap(), Direction::Writer);
    }

    #[test]
    fn test_template_form_accessors() {
        let template = Template::Xml("<a xmlns='urn:x'/>".to_string());
        assert_eq!(template.form(), TemplateForm::Xml);
        assert_eq!(template.clone().into_structure(), None);
        assert_eq!(template.into_xml().as_deref(), Some("<a xmlns='urn:x'/>"));
    }
}
