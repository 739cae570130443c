// xbind/xbind-testkit
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use serde_json::{Map, Value};

/// Options handed to the schema compiler. Unset fields fall through to the
/// next layer. Merge order is built-in base defaults, then suite-wide
/// defaults from the context, then call-site options, with later layers
/// winning field by field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompileOptions {
    pub check_values: Option<bool>,
    pub include_namespaces: Option<bool>,
    pub use_default_prefix_or_namespace: Option<bool>,
    /// Forwarded to the compiler untouched.
    pub extra: Map<String, Value>,
}

impl CompileOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn reader_base() -> Self {
        CompileOptions {
            check_values: Some(true),
            include_namespaces: Some(false),
            ..Default::default()
        }
    }

    pub(crate) fn writer_base() -> Self {
        CompileOptions {
            use_default_prefix_or_namespace: Some(true),
            ..Self::reader_base()
        }
    }

    pub fn set_check_values(mut self, check_values: bool) -> Self {
        self.check_values = Some(check_values);
        self
    }

    pub fn set_include_namespaces(mut self, include_namespaces: bool) -> Self {
        self.include_namespaces = Some(include_namespaces);
        self
    }

    pub fn set_use_default_prefix_or_namespace(mut self, use_default: bool) -> Self {
        self.use_default_prefix_or_namespace = Some(use_default);
        self
    }

    pub fn set_extra(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    /// Layers `self` over `base`. Fields set here win, everything else is
    /// taken from `base`.
    pub fn layered_over(self, base: &CompileOptions) -> CompileOptions {
        let mut extra = base.extra.clone();
        extra.extend(self.extra);
        CompileOptions {
            check_values: self.check_values.or(base.check_values),
            include_namespaces: self.include_namespaces.or(base.include_namespaces),
            use_default_prefix_or_namespace: self
                .use_default_prefix_or_namespace
                .or(base.use_default_prefix_or_namespace),
            extra,
        }
    }
}

/// Options for template generation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TemplateOptions {
    pub include_namespaces: Option<bool>,
    /// Forwarded to the compiler untouched.
    pub extra: Map<String, Value>,
}

impl TemplateOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_include_namespaces(mut self, include_namespaces: bool) -> Self {
        self.include_namespaces = Some(include_namespaces);
        self
    }

    pub fn set_extra(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    pub(crate) fn with_namespace_default(mut self, default: bool) -> Self {
        self.include_namespaces = self.include_namespaces.or(Some(default));
        self
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_call_site_options_win_over_all_layers() {
        let suite = CompileOptions::new()
            .set_include_namespaces(true)
            .set_extra("sloppy_integers", json!(true));
        let call_site = CompileOptions::new()
            .set_check_values(false)
            .set_extra("sloppy_integers", json!(false));

        let merged = call_site
            .layered_over(&suite)
            .layered_over(&CompileOptions::reader_base());

        assert_eq!(merged.check_values, Some(false));
        assert_eq!(merged.include_namespaces, Some(true));
        assert_eq!(merged.use_default_prefix_or_namespace, None);
        assert_eq!(merged.extra.get("sloppy_integers"), Some(&json!(false)));
    }

    #[test]
    fn test_suite_defaults_win_over_base_defaults() {
        let suite = CompileOptions::new().set_check_values(false);
        let merged = CompileOptions::new()
            .layered_over(&suite)
            .layered_over(&CompileOptions::writer_base());

        assert_eq!(merged.check_values, Some(false));
        assert_eq!(merged.include_namespaces, Some(false));
        assert_eq!(merged.use_default_prefix_or_namespace, Some(true));
    }

    #[test]
    fn test_extra_keys_from_all_layers_survive() {
        let suite = CompileOptions::new().set_extra("a", json!(1));
        let call_site = CompileOptions::new().set_extra("b", json!(2));
        let merged = call_site.layered_over(&suite);

        assert_eq!(merged.extra.get("a"), Some(&json!(1)));
        assert_eq!(merged.extra.get("b"), Some(&json!(2)));
    }

    #[test]
    fn test_template_options_fall_back_to_context_default() {
        let options = TemplateOptions::new().with_namespace_default(true);
        assert_eq!(options.include_namespaces, Some(true));

        let pinned = TemplateOptions::new()
            .set_include_namespaces(false)
            .with_namespace_default(true);
        assert_eq!(pinned.include_namespaces, Some(false));
    }
}
