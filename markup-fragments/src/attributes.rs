use serde::{Deserialize, Serialize};

use crate::escape::escape_html;

/// Identity shared by every element: the `id` and `class` attributes.
///
/// Built up front and moved into an element's constructor; elements never
/// change their identity afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BaseAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    class: Option<String>,
}

impl BaseAttributes {
    /// Create an empty identity (no id, no class)
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = non_empty(id.into());
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = non_empty(class.into());
        self
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn class(&self) -> Option<&str> {
        self.class.as_deref()
    }

    /// Render ` id="..."` and ` class="..."`, skipping whichever is unset.
    pub fn render(&self) -> String {
        let id_part = self
            .id
            .as_deref()
            .map(|s| format!(" id=\"{}\"", escape_html(s)))
            .unwrap_or_default();
        let class_part = self
            .class
            .as_deref()
            .map(|c| format!(" class=\"{}\"", escape_html(c)))
            .unwrap_or_default();
        format!("{}{}", id_part, class_part)
    }
}

fn non_empty(s: String) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

/// Capability for anything carrying [`BaseAttributes`].
pub trait HasBaseAttributes {
    fn base_attributes(&self) -> &BaseAttributes;

    fn render_base_attributes(&self) -> String {
        self.base_attributes().render()
    }
}

impl HasBaseAttributes for BaseAttributes {
    fn base_attributes(&self) -> &BaseAttributes {
        self
    }
}
