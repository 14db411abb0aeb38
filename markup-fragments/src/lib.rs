//! # Markup Fragments
//!
//! Small, escaped HTML fragments built from typed element descriptions.
//!
//! ## Features
//! - Text and number inputs, static text, static numbers and links
//! - Shared `id`/`class` rendering through [`HasBaseAttributes`]
//! - Reusable form-field and numeric-formatting capabilities
//!   ([`HasEditableFields`], [`HasNumericFormat`]) composed into elements
//! - Every user-supplied string is HTML-escaped on render
//! - YAML fragment documents for declarative use
//!
//! ## Example — building elements
//! ```
//! use markup_fragments::{BaseAttributes, Element, HasEditableFields, TextInput};
//!
//! let mut input = TextInput::new(
//!     BaseAttributes::new().with_id("input1").with_class("form-control"),
//! );
//! input.set_name("full_name").set_placeholder("Enter name").set_required(true);
//! input.set_value("Ivan Ivanov")?;
//!
//! assert_eq!(
//!     input.render(),
//!     r#"<input type="text" id="input1" class="form-control" name="full_name" value="Ivan Ivanov" placeholder="Enter name" required>"#
//! );
//! # Ok::<(), markup_fragments::FragmentError>(())
//! ```
//!
//! ## Example — YAML document
//! ```
//! use markup_fragments::render_document;
//!
//! let yaml = r#"
//! fragments:
//!   - type: static_number
//!     value: 1234.5
//!   - type: link
//!     href: https://example.com
//!     text: Example
//!     id: profile_link
//! "#;
//!
//! let rendered = render_document(yaml)?;
//! assert_eq!(rendered[0], "<span>1 234.50</span>");
//! assert_eq!(rendered[1], r#"<a href="https://example.com" id="profile_link">Example</a>"#);
//! # Ok::<(), markup_fragments::FragmentError>(())
//! ```

pub mod attributes;
pub mod components;
pub mod description;
pub mod editable;
pub mod element;
pub mod error;
pub mod escape;
pub mod numeric;

// --- Core types ---
pub use attributes::{BaseAttributes, HasBaseAttributes};
pub use editable::{EditableFields, FieldValue, HasEditableFields};
pub use element::Element;
pub use error::{FragmentError, FragmentResult};
pub use escape::escape_html;
pub use numeric::{
    format_number, parse_numeric, HasNumericFormat, NumericFormat, MAX_EXACT_DECIMALS,
};

// --- Elements ---
pub use components::{Link, NumberInput, StaticNumber, StaticText, TextInput};

// --- Description documents ---
pub use description::{
    parse_document, render_document, FragmentDescription, FragmentDocument, InputDescription,
    LinkDescription, StaticNumberDescription, StaticTextDescription,
};
