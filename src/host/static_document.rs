use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

use super::{Document, MountPoint, id_from_selector};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    Container,
    Input,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostElement {
    pub kind: ElementKind,
    #[serde(default)]
    pub value: Option<String>,
}

/// In-memory document keyed by element id, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticDocument {
    elements: IndexMap<String, HostElement>,
}

impl StaticDocument {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) a container element.
    #[must_use]
    pub fn with_container(mut self, id: impl Into<String>) -> Self {
        self.elements.insert(
            id.into(),
            HostElement {
                kind: ElementKind::Container,
                value: None,
            },
        );
        self
    }

    /// Adds (or replaces) an input element carrying `value`.
    #[must_use]
    pub fn with_input(mut self, id: impl Into<String>, value: impl Into<String>) -> Self {
        self.elements.insert(
            id.into(),
            HostElement {
                kind: ElementKind::Input,
                value: Some(value.into()),
            },
        );
        self
    }

    /// Builds the document shape the default bootstrap config expects.
    #[must_use]
    pub fn for_chart(labels_text: impl Into<String>, values_text: impl Into<String>) -> Self {
        Self::new()
            .with_container("myChart")
            .with_input("labels", labels_text)
            .with_input("data", values_text)
    }

    /// Overwrites the value of an existing input element.
    pub fn set_value(&mut self, id: &str, value: impl Into<String>) -> ChartResult<()> {
        match self.elements.get_mut(id) {
            Some(element) if element.kind == ElementKind::Input => {
                element.value = Some(value.into());
                Ok(())
            }
            Some(_) => Err(ChartError::InvalidData(format!(
                "element `{id}` is not an input"
            ))),
            None => Err(ChartError::MissingElement {
                selector: format!("#{id}"),
            }),
        }
    }

    pub fn remove(&mut self, id: &str) -> Option<HostElement> {
        self.elements.shift_remove(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl Document for StaticDocument {
    fn element_by_id(&self, id: &str) -> Option<MountPoint> {
        self.elements.get(id).map(|_| MountPoint::new(id))
    }

    fn input_value(&self, selector: &str) -> Option<&str> {
        let id = id_from_selector(selector)?;
        self.elements.get(id)?.value.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn container_has_no_value() {
        let doc = StaticDocument::new().with_container("myChart");
        assert!(doc.element_by_id("myChart").is_some());
        assert_eq!(doc.input_value("#myChart"), None);
    }

    #[test]
    fn set_value_rejects_containers_and_unknown_ids() {
        let mut doc = StaticDocument::for_chart("[]", "[]");
        doc.set_value("data", "[1]").expect("update input");
        assert_eq!(doc.input_value("#data"), Some("[1]"));

        assert!(matches!(
            doc.set_value("myChart", "[]"),
            Err(ChartError::InvalidData(_))
        ));
        assert!(matches!(
            doc.set_value("missing", "[]"),
            Err(ChartError::MissingElement { .. })
        ));
    }

    #[test]
    fn remove_drops_element() {
        let mut doc = StaticDocument::for_chart("[]", "[]");
        assert_eq!(doc.len(), 3);
        assert!(doc.remove("labels").is_some());
        assert_eq!(doc.input_value("#labels"), None);
        assert_eq!(doc.len(), 2);
    }
}
