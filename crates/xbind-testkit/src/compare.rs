// xbind/xbind-testkit
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use minidom::Element;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::context::TestContext;
use crate::error::TesterError;
use crate::report::AssertionKind;

static WS_AFTER_GT: Lazy<Regex> = Lazy::new(|| Regex::new(r">\s+").unwrap());
static WS_BEFORE_LT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+<").unwrap());
static WS_RUN_WITH_NEWLINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*\n\s*").unwrap());
static WS_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s{2,}").unwrap());

/// Normalizes the whitespace of an XML-bearing string for tolerant textual
/// comparison. Whitespace next to tag boundaries is dropped entirely, so
/// anything strictly between `>` and `<` vanishes. Remaining runs collapse
/// to a single space and trailing whitespace is stripped.
///
/// This is a purely textual normalization and idempotent. Attribute order or
/// namespace prefix differences are not evened out, that would take a real
/// tree comparison.
pub fn canonicalize(text: &str) -> String {
    let text = WS_AFTER_GT.replace_all(text, ">");
    let text = WS_BEFORE_LT.replace_all(&text, "<");
    let text = WS_RUN_WITH_NEWLINE.replace_all(&text, " ");
    let text = WS_RUN.replace_all(&text, " ");
    text.trim_end().to_string()
}

/// `None`-preserving variant of [`canonicalize`].
pub fn canonicalize_opt(text: Option<&str>) -> Option<String> {
    text.map(canonicalize)
}

/// Input to [`TestContext::compare_xml`]. Either raw text or an element that
/// is serialized first.
pub enum XmlInput {
    Text(String),
    Node(Element),
}

impl XmlInput {
    pub(crate) fn into_text(self) -> Result<String, TesterError> {
        match self {
            XmlInput::Text(text) => Ok(text),
            XmlInput::Node(element) => {
                let mut buf = Vec::new();
                element.write_to(&mut buf).map_err(|e| TesterError::Generic {
                    msg: format!("Failed to serialize element: {}", e),
                })?;
                String::from_utf8(buf).map_err(|e| TesterError::Generic {
                    msg: format!("Element serialized to invalid UTF-8: {}", e),
                })
            }
        }
    }
}

impl From<&str> for XmlInput {
    fn from(text: &str) -> Self {
        XmlInput::Text(text.to_string())
    }
}

impl From<String> for XmlInput {
    fn from(text: String) -> Self {
        XmlInput::Text(text)
    }
}

impl From<Element> for XmlInput {
    fn from(element: Element) -> Self {
        XmlInput::Node(element)
    }
}

impl From<&Element> for XmlInput {
    fn from(element: &Element) -> Self {
        XmlInput::Node(element.clone())
    }
}

impl TestContext {
    /// Compares two XML representations after whitespace normalization and
    /// records exactly one comparison assertion under `label`. The returned
    /// outcome is informational.
    pub fn compare_xml(
        &self,
        actual: impl Into<XmlInput>,
        expected: &str,
        label: &str,
    ) -> bool {
        let actual = match actual.into().into_text() {
            Ok(text) => text,
            Err(err) => {
                self.record(
                    AssertionKind::Comparison,
                    label,
                    false,
                    Some(err.to_string()),
                );
                return false;
            }
        };

        let actual = canonicalize(&actual);
        let expected = canonicalize(expected);
        let passed = actual == expected;
        let detail =
            (!passed).then(|| format!("expected: {}\n  actual: {}", expected, actual));
        self.record(AssertionKind::Comparison, label, passed, detail);
        passed
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::report::RecordingReporter;

    use super::*;

    #[test]
    fn test_drops_whitespace_between_tags() {
        assert_eq!(canonicalize("<a>  \n  <b/>  </a>"), "<a><b/></a>");
        assert_eq!(canonicalize("  <a/>"), "<a/>");
        assert_eq!(canonicalize("<a/>\n"), "<a/>");
    }

    #[test]
    fn test_collapses_inner_runs() {
        assert_eq!(canonicalize("<p> hello   world </p>"), "<p>hello world</p>");
        assert_eq!(canonicalize("<p>one\n   two</p>"), "<p>one two</p>");
    }

    #[test]
    fn test_is_idempotent() {
        let samples = [
            "<a>  \n  <b/>  </a>",
            "<p> hello   world </p>",
            "plain  text\nwith breaks  ",
            "",
        ];
        for sample in samples {
            let once = canonicalize(sample);
            assert_eq!(canonicalize(&once), once, "not idempotent for {sample:?}");
        }
    }

    #[test]
    fn test_output_has_no_whitespace_at_tag_boundaries() {
        let canonical = canonicalize("<a>\n  <b>  x  </b>\n  <c/>\n</a>  ");
        assert!(!canonical.contains("> "));
        assert!(!canonical.contains(" <"));
        let has_double_ws = canonical
            .chars()
            .zip(canonical.chars().skip(1))
            .any(|(a, b)| a.is_whitespace() && b.is_whitespace());
        assert!(!has_double_ws);
        assert!(!canonical.ends_with(char::is_whitespace));
    }

    #[test]
    fn test_none_passes_through() {
        assert_eq!(canonicalize_opt(None), None);
        assert_eq!(
            canonicalize_opt(Some("<a/>  ")),
            Some("<a/>".to_string())
        );
    }

    #[test]
    fn test_compare_ignores_whitespace_only_differences() {
        let reporter = Arc::new(RecordingReporter::new());
        let ctx = TestContext::builder()
            .set_reporter(reporter.clone())
            .build();

        assert!(ctx.compare_xml("<a>  \n  <b/>  </a>", "<a><b/></a>", "x"));

        let assertions = reporter.assertions();
        assert_eq!(assertions.len(), 1);
        assert_eq!(assertions[0].kind, AssertionKind::Comparison);
        assert_eq!(assertions[0].label, "x");
        assert!(assertions[0].passed);
    }

    #[test]
    fn test_compare_flags_content_differences() {
        let reporter = Arc::new(RecordingReporter::new());
        let ctx = TestContext::builder()
            .set_reporter(reporter.clone())
            .build();

        assert!(!ctx.compare_xml("<a>1</a>", "<a>2</a>", "x"));

        let failures = reporter.failures();
        assert_eq!(failures.len(), 1);
        let detail = failures[0].detail.as_deref().unwrap_or_default();
        assert!(detail.contains("<a>2</a>"));
        assert!(detail.contains("<a>1</a>"));
    }

    #[test]
    fn test_compare_serializes_node_input() {
        let reporter = Arc::new(RecordingReporter::new());
        let ctx = TestContext::builder()
            .set_reporter(reporter.clone())
            .build();

        let element = Element::builder("a", "urn:x")
            .append(Element::builder("b", "urn:x").build())
            .build();
        let serialized = XmlInput::Node(element.clone()).into_text().unwrap();
        let spread_out = serialized.replace("><", ">\n    <");

        assert!(ctx.compare_xml(element, &spread_out, "node against text"));
        assert_eq!(reporter.failures().len(), 0);
    }
}
