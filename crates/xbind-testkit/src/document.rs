// xbind/xbind-testkit
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

/// Target document a writer emits into. minidom has no document type of its
/// own, so the version and encoding pair travels separately from the element
/// tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    version: String,
    encoding: String,
}

impl Document {
    pub fn new(version: impl Into<String>, encoding: impl Into<String>) -> Self {
        Document {
            version: version.into(),
            encoding: encoding.into(),
        }
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn encoding(&self) -> &str {
        &self.encoding
    }

    pub fn declaration(&self) -> String {
        format!(
            "<?xml version=\"{}\" encoding=\"{}\"?>",
            self.version, self.encoding
        )
    }
}

impl Default for Document {
    fn default() -> Self {
        Document::new("1.0", "UTF-8")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_document() {
        let doc = Document::default();
        assert_eq!(doc.version(), "1.0");
        assert_eq!(doc.encoding(), "UTF-8");
        assert_eq!(
            doc.declaration(),
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>"
        );
    }
}
