use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::FragmentResult;
use crate::escape::escape_html;

/// Value held by a form field: either a number or free text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Text(String),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Number(n) => write!(f, "{}", n),
            FieldValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<f32> for FieldValue {
    fn from(value: f32) -> Self {
        FieldValue::Number(f64::from(value))
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Number(f64::from(value))
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        FieldValue::Number(f64::from(value))
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

/// Form-field state: name, value, placeholder and the required flag.
///
/// Only the [`HasEditableFields`] setters write these, so a field's
/// `accept_value` hook always sees every assigned value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EditableFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    placeholder: Option<String>,
    #[serde(default)]
    required: bool,
}

impl EditableFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn value(&self) -> Option<&FieldValue> {
        self.value.as_ref()
    }

    pub fn placeholder(&self) -> Option<&str> {
        self.placeholder.as_deref()
    }

    pub fn required(&self) -> bool {
        self.required
    }

    /// Render the field attributes using the stored value as-is.
    pub fn render(&self) -> String {
        let value = self.value.as_ref().map(|v| v.to_string());
        self.render_with_value(value.as_deref())
    }

    /// Render the field attributes with `value` standing in for the stored
    /// value. Order is fixed: name, value, placeholder, required.
    pub fn render_with_value(&self, value: Option<&str>) -> String {
        let mut out = String::new();
        if let Some(name) = self.name.as_deref().filter(|s| !s.is_empty()) {
            out.push_str(&format!(" name=\"{}\"", escape_html(name)));
        }
        if let Some(value) = value {
            out.push_str(&format!(" value=\"{}\"", escape_html(value)));
        }
        if let Some(placeholder) = self.placeholder.as_deref().filter(|s| !s.is_empty()) {
            out.push_str(&format!(" placeholder=\"{}\"", escape_html(placeholder)));
        }
        if self.required {
            out.push_str(" required");
        }
        out
    }
}

/// Capability for elements with form-field semantics.
///
/// Implementors hand out their [`EditableFields`]; the setters and the
/// attribute renderer come for free. Elements that constrain their value
/// override [`HasEditableFields::accept_value`].
pub trait HasEditableFields {
    fn editable_fields(&self) -> &EditableFields;

    fn editable_fields_mut(&mut self) -> &mut EditableFields;

    /// Hook run by `set_value` before storing. Accepts anything by default.
    fn accept_value(&self, value: FieldValue) -> FragmentResult<FieldValue> {
        Ok(value)
    }

    fn set_name(&mut self, name: impl Into<String>) -> &mut Self
    where
        Self: Sized,
    {
        self.editable_fields_mut().name = Some(name.into());
        self
    }

    fn set_value(&mut self, value: impl Into<FieldValue>) -> FragmentResult<&mut Self>
    where
        Self: Sized,
    {
        let value = self.accept_value(value.into())?;
        self.editable_fields_mut().value = Some(value);
        Ok(self)
    }

    fn set_placeholder(&mut self, placeholder: impl Into<String>) -> &mut Self
    where
        Self: Sized,
    {
        self.editable_fields_mut().placeholder = Some(placeholder.into());
        self
    }

    fn set_required(&mut self, required: bool) -> &mut Self
    where
        Self: Sized,
    {
        self.editable_fields_mut().required = required;
        self
    }

    fn render_editable_attributes(&self) -> String {
        self.editable_fields().render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Field(EditableFields);

    impl HasEditableFields for Field {
        fn editable_fields(&self) -> &EditableFields {
            &self.0
        }

        fn editable_fields_mut(&mut self) -> &mut EditableFields {
            &mut self.0
        }
    }

    #[test]
    fn test_field_value_display() {
        assert_eq!(FieldValue::from(4.5).to_string(), "4.5");
        assert_eq!(FieldValue::from(9).to_string(), "9");
        assert_eq!(FieldValue::from(u32::MAX).to_string(), "4294967295");
        assert_eq!(FieldValue::from(i32::MIN).to_string(), "-2147483648");
        assert_eq!(FieldValue::from(-12.0).to_string(), "-12");
        assert_eq!(FieldValue::from("abc").to_string(), "abc");
    }

    #[test]
    fn test_empty_fields_render_nothing() {
        assert_eq!(EditableFields::new().render(), "");
    }

    #[test]
    fn test_attribute_order_is_fixed() {
        let mut fields = Field::default();
        fields
            .set_required(true)
            .set_placeholder("Enter name")
            .set_name("full_name");
        fields.set_value("Ivan Ivanov").unwrap();

        assert_eq!(
            fields.render_editable_attributes(),
            r#" name="full_name" value="Ivan Ivanov" placeholder="Enter name" required"#
        );
    }

    #[test]
    fn test_required_false_omits_token() {
        let mut fields = Field::default();
        fields.set_name("a").set_required(true).set_required(false);
        assert_eq!(fields.render_editable_attributes(), r#" name="a""#);
    }

    #[test]
    fn test_empty_value_still_emitted() {
        let mut fields = Field::default();
        fields.set_value("").unwrap();
        assert_eq!(fields.render_editable_attributes(), r#" value="""#);
    }

    #[test]
    fn test_empty_name_and_placeholder_omitted() {
        let mut fields = Field::default();
        fields.set_name("").set_placeholder("");
        assert_eq!(fields.render_editable_attributes(), "");
    }

    #[test]
    fn test_value_is_escaped() {
        let mut fields = Field::default();
        fields.set_value(r#"" onfocus="alert(1)"#).unwrap();
        assert_eq!(
            fields.render_editable_attributes(),
            r#" value="&quot; onfocus=&quot;alert(1)""#
        );
    }

    #[test]
    fn test_render_with_value_overrides_stored() {
        let mut fields = Field::default();
        fields.set_name("n");
        fields.set_value(4.5).unwrap();
        assert_eq!(
            fields.0.render_with_value(Some("4.50")),
            r#" name="n" value="4.50""#
        );
        assert_eq!(fields.0.value(), Some(&FieldValue::Number(4.5)));
    }
}
