//! Declarative fragment descriptions.
//!
//! A description document lists fragments in YAML; each entry builds into a
//! boxed [`Element`] ready to render.

use serde::{Deserialize, Serialize};

use crate::attributes::BaseAttributes;
use crate::components::{Link, NumberInput, StaticNumber, StaticText, TextInput};
use crate::editable::{FieldValue, HasEditableFields};
use crate::element::Element;
use crate::error::{FragmentError, FragmentResult};
use crate::numeric::{HasNumericFormat, MAX_EXACT_DECIMALS};

/// A list of fragment descriptions with an optional default precision
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FragmentDocument {
    /// Default decimal places for numeric fragments that set none
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decimals: Option<u32>,
    pub fragments: Vec<FragmentDescription>,
}

/// One fragment, tagged by `type`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FragmentDescription {
    TextInput(InputDescription),
    NumberInput(InputDescription),
    StaticText(StaticTextDescription),
    StaticNumber(StaticNumberDescription),
    Link(LinkDescription),
}

/// Fields shared by text and number inputs
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InputDescription {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decimals: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StaticTextDescription {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decimals: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StaticNumberDescription {
    pub value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decimals: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinkDescription {
    pub href: String,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
}

impl FragmentDescription {
    /// The `type` tag of this description
    pub fn kind(&self) -> &'static str {
        match self {
            FragmentDescription::TextInput(_) => "text_input",
            FragmentDescription::NumberInput(_) => "number_input",
            FragmentDescription::StaticText(_) => "static_text",
            FragmentDescription::StaticNumber(_) => "static_number",
            FragmentDescription::Link(_) => "link",
        }
    }

    /// Build the element with the default precision for numeric fragments.
    pub fn build(&self) -> FragmentResult<Box<dyn Element>> {
        self.build_with_decimals(None)
    }

    /// Build the element; `default_decimals` applies to numeric fragments
    /// that carry no `decimals` of their own. Precision above
    /// [`MAX_EXACT_DECIMALS`] is rejected.
    pub fn build_with_decimals(
        &self,
        default_decimals: Option<u32>,
    ) -> FragmentResult<Box<dyn Element>> {
        let element: Box<dyn Element> = match self {
            FragmentDescription::TextInput(desc) => {
                self.reject_decimals(desc.decimals)?;
                let mut input = TextInput::new(attributes(&desc.id, &desc.class));
                apply_input_fields(&mut input, desc)?;
                Box::new(input)
            }
            FragmentDescription::NumberInput(desc) => {
                let mut input = NumberInput::new(attributes(&desc.id, &desc.class));
                if let Some(decimals) = desc.decimals.or(default_decimals) {
                    self.check_decimals(decimals)?;
                    input.set_decimals(decimals);
                }
                apply_input_fields(&mut input, desc)?;
                Box::new(input)
            }
            FragmentDescription::StaticText(desc) => {
                self.reject_decimals(desc.decimals)?;
                Box::new(StaticText::new(
                    desc.content.clone(),
                    attributes(&desc.id, &desc.class),
                ))
            }
            FragmentDescription::StaticNumber(desc) => {
                let mut number = StaticNumber::new(desc.value, attributes(&desc.id, &desc.class));
                if let Some(decimals) = desc.decimals.or(default_decimals) {
                    self.check_decimals(decimals)?;
                    number.set_decimals(decimals);
                }
                Box::new(number)
            }
            FragmentDescription::Link(desc) => Box::new(Link::new(
                desc.href.clone(),
                desc.text.clone(),
                attributes(&desc.id, &desc.class),
            )),
        };
        tracing::debug!(kind = self.kind(), "Built fragment");
        Ok(element)
    }

    fn check_decimals(&self, decimals: u32) -> FragmentResult<()> {
        if decimals > MAX_EXACT_DECIMALS {
            return Err(FragmentError::InvalidDescription {
                kind: self.kind().to_string(),
                reason: format!(
                    "'decimals' must be at most {}, got {}",
                    MAX_EXACT_DECIMALS, decimals
                ),
            });
        }
        Ok(())
    }

    fn reject_decimals(&self, decimals: Option<u32>) -> FragmentResult<()> {
        if decimals.is_some() {
            return Err(FragmentError::InvalidDescription {
                kind: self.kind().to_string(),
                reason: "'decimals' only applies to numeric fragments".to_string(),
            });
        }
        Ok(())
    }
}

impl FragmentDocument {
    /// Build every fragment in document order.
    pub fn build(&self) -> FragmentResult<Vec<Box<dyn Element>>> {
        if self.fragments.is_empty() {
            return Err(FragmentError::EmptyDocument);
        }
        self.fragments
            .iter()
            .map(|f| f.build_with_decimals(self.decimals))
            .collect()
    }

    /// Build and render every fragment in document order.
    pub fn render(&self) -> FragmentResult<Vec<String>> {
        Ok(self.build()?.iter().map(|e| e.render()).collect())
    }
}

fn attributes(id: &Option<String>, class: &Option<String>) -> BaseAttributes {
    let mut attrs = BaseAttributes::new();
    if let Some(id) = id {
        attrs = attrs.with_id(id.clone());
    }
    if let Some(class) = class {
        attrs = attrs.with_class(class.clone());
    }
    attrs
}

fn apply_input_fields<I: HasEditableFields>(
    input: &mut I,
    desc: &InputDescription,
) -> FragmentResult<()> {
    if let Some(name) = &desc.name {
        input.set_name(name.clone());
    }
    if let Some(value) = &desc.value {
        input.set_value(value.clone())?;
    }
    if let Some(placeholder) = &desc.placeholder {
        input.set_placeholder(placeholder.clone());
    }
    if let Some(required) = desc.required {
        input.set_required(required);
    }
    Ok(())
}

/// Parse a YAML fragment document.
pub fn parse_document(yaml: &str) -> FragmentResult<FragmentDocument> {
    let document: FragmentDocument = serde_yaml::from_str(yaml)?;
    tracing::debug!(
        fragments = document.fragments.len(),
        decimals = ?document.decimals,
        "Parsed fragment document"
    );
    Ok(document)
}

/// Parse a YAML fragment document and render each fragment.
pub fn render_document(yaml: &str) -> FragmentResult<Vec<String>> {
    parse_document(yaml)?.render()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_input_value_types() {
        let yaml = "fragments:\n  - type: number_input\n    value: 4.5\n  - type: number_input\n    value: \"7\"\n  - type: number_input\n    value: 9";
        let doc = parse_document(yaml).unwrap();
        let values: Vec<_> = doc
            .fragments
            .iter()
            .map(|f| match f {
                FragmentDescription::NumberInput(d) => d.value.clone(),
                _ => None,
            })
            .collect();
        assert_eq!(
            values,
            vec![
                Some(FieldValue::Number(4.5)),
                Some(FieldValue::Text("7".to_string())),
                Some(FieldValue::Number(9.0)),
            ]
        );
    }

    #[test]
    fn test_kind_matches_tag() {
        let yaml = "fragments:\n  - type: link\n    href: /\n    text: Home";
        let doc = parse_document(yaml).unwrap();
        assert_eq!(doc.fragments[0].kind(), "link");
    }

    #[test]
    fn test_fragment_decimals_override_document_default() {
        let yaml = "decimals: 3\nfragments:\n  - type: static_number\n    value: 1.5\n  - type: static_number\n    value: 1.5\n    decimals: 0";
        let rendered = render_document(yaml).unwrap();
        assert_eq!(rendered, vec!["<span>1.500</span>", "<span>2</span>"]);
    }

    #[test]
    fn test_oversized_fragment_decimals_rejected() {
        let yaml = "fragments:\n  - type: number_input\n    value: 1\n    decimals: 1075";
        let err = render_document(yaml).unwrap_err();
        assert!(matches!(err, FragmentError::InvalidDescription { ref kind, .. } if kind == "number_input"));
    }

    #[test]
    fn test_exact_decimals_limit_accepted() {
        let yaml = "fragments:\n  - type: static_number\n    value: 1\n    decimals: 1074";
        let rendered = render_document(yaml).unwrap();
        assert_eq!(rendered[0].len(), "<span>1.</span>".len() + 1074);
    }

    #[test]
    fn test_decimals_rejected_on_text_fragments() {
        let yaml = "fragments:\n  - type: static_text\n    content: hi\n    decimals: 2";
        let err = render_document(yaml).unwrap_err();
        assert!(matches!(err, FragmentError::InvalidDescription { ref kind, .. } if kind == "static_text"));
    }

    #[test]
    fn test_build_single_description() {
        let desc = FragmentDescription::StaticText(StaticTextDescription {
            content: "a < b".to_string(),
            ..Default::default()
        });
        assert_eq!(desc.build().unwrap().render(), "<span>a &lt; b</span>");
    }
}
