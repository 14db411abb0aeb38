use crate::attributes::{BaseAttributes, HasBaseAttributes};
use crate::editable::{EditableFields, FieldValue, HasEditableFields};
use crate::element::Element;
use crate::error::{FragmentError, FragmentResult};
use crate::escape::escape_html;
use crate::numeric::{parse_numeric, HasNumericFormat, NumericFormat};

/// TextInput component - single-line text field
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextInput {
    attrs: BaseAttributes,
    fields: EditableFields,
}

impl TextInput {
    pub fn new(attrs: BaseAttributes) -> Self {
        Self {
            attrs,
            fields: EditableFields::new(),
        }
    }
}

impl HasBaseAttributes for TextInput {
    fn base_attributes(&self) -> &BaseAttributes {
        &self.attrs
    }
}

impl HasEditableFields for TextInput {
    fn editable_fields(&self) -> &EditableFields {
        &self.fields
    }

    fn editable_fields_mut(&mut self) -> &mut EditableFields {
        &mut self.fields
    }
}

impl Element for TextInput {
    fn render(&self) -> String {
        format!(
            "<input type=\"text\"{}{}>",
            self.render_base_attributes(),
            self.render_editable_attributes()
        )
    }
}

/// NumberInput component - text field that only holds numbers.
///
/// Values are checked on assignment and formatted with the configured
/// precision when rendered. The stored value is never rewritten, so
/// rendering is idempotent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NumberInput {
    input: TextInput,
    format: NumericFormat,
}

impl NumberInput {
    pub fn new(attrs: BaseAttributes) -> Self {
        Self {
            input: TextInput::new(attrs),
            format: NumericFormat::default(),
        }
    }

    /// The value as assigned, before formatting
    pub fn value(&self) -> Option<&FieldValue> {
        self.input.fields.value()
    }
}

impl HasBaseAttributes for NumberInput {
    fn base_attributes(&self) -> &BaseAttributes {
        self.input.base_attributes()
    }
}

impl HasEditableFields for NumberInput {
    fn editable_fields(&self) -> &EditableFields {
        self.input.editable_fields()
    }

    fn editable_fields_mut(&mut self) -> &mut EditableFields {
        self.input.editable_fields_mut()
    }

    fn accept_value(&self, value: FieldValue) -> FragmentResult<FieldValue> {
        if parse_numeric(&value).is_none() {
            tracing::debug!(value = %value, "Rejected non-numeric value for number input");
            return Err(FragmentError::ValidationError {
                value: value.to_string(),
                reason: "is not a number".to_string(),
            });
        }
        Ok(value)
    }

    fn render_editable_attributes(&self) -> String {
        let formatted = self.value().map(|v| match parse_numeric(v) {
            Some(n) => self.format_number(n),
            None => v.to_string(),
        });
        self.editable_fields().render_with_value(formatted.as_deref())
    }
}

impl HasNumericFormat for NumberInput {
    fn numeric_format(&self) -> &NumericFormat {
        &self.format
    }

    fn numeric_format_mut(&mut self) -> &mut NumericFormat {
        &mut self.format
    }
}

impl Element for NumberInput {
    fn render(&self) -> String {
        format!(
            "<input type=\"number\"{}{}>",
            self.render_base_attributes(),
            self.render_editable_attributes()
        )
    }
}

/// StaticText component - read-only text wrapped in a span
#[derive(Debug, Clone, PartialEq)]
pub struct StaticText {
    attrs: BaseAttributes,
    content: String,
}

impl StaticText {
    pub fn new(content: impl Into<String>, attrs: BaseAttributes) -> Self {
        Self {
            attrs,
            content: content.into(),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

impl HasBaseAttributes for StaticText {
    fn base_attributes(&self) -> &BaseAttributes {
        &self.attrs
    }
}

impl Element for StaticText {
    fn render(&self) -> String {
        format!(
            "<span{}>{}</span>",
            self.render_base_attributes(),
            escape_html(&self.content)
        )
    }
}

/// StaticNumber component - read-only number wrapped in a span.
///
/// The number is kept in its textual form and re-read on every render.
#[derive(Debug, Clone, PartialEq)]
pub struct StaticNumber {
    text: StaticText,
    format: NumericFormat,
}

impl StaticNumber {
    pub fn new(value: impl Into<f64>, attrs: BaseAttributes) -> Self {
        Self {
            text: StaticText::new(value.into().to_string(), attrs),
            format: NumericFormat::default(),
        }
    }

    pub fn content(&self) -> &str {
        self.text.content()
    }
}

impl HasBaseAttributes for StaticNumber {
    fn base_attributes(&self) -> &BaseAttributes {
        self.text.base_attributes()
    }
}

impl HasNumericFormat for StaticNumber {
    fn numeric_format(&self) -> &NumericFormat {
        &self.format
    }

    fn numeric_format_mut(&mut self) -> &mut NumericFormat {
        &mut self.format
    }
}

impl Element for StaticNumber {
    fn render(&self) -> String {
        match self.text.content().parse::<f64>() {
            // Formatted output is digits, separators and a sign only.
            Ok(n) => format!(
                "<span{}>{}</span>",
                self.render_base_attributes(),
                self.format_number(n)
            ),
            Err(_) => self.text.render(),
        }
    }
}

/// Link component - hyperlink with a text body
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    attrs: BaseAttributes,
    href: String,
    text: String,
}

impl Link {
    pub fn new(href: impl Into<String>, text: impl Into<String>, attrs: BaseAttributes) -> Self {
        Self {
            attrs,
            href: href.into(),
            text: text.into(),
        }
    }

    pub fn href(&self) -> &str {
        &self.href
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl HasBaseAttributes for Link {
    fn base_attributes(&self) -> &BaseAttributes {
        &self.attrs
    }
}

impl Element for Link {
    fn render(&self) -> String {
        format!(
            "<a href=\"{}\"{}>{}</a>",
            escape_html(&self.href),
            self.render_base_attributes(),
            escape_html(&self.text)
        )
    }
}
