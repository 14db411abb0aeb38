use crate::attributes::HasBaseAttributes;

/// Render contract shared by every concrete element.
///
/// Implementations combine their own markup with
/// [`HasBaseAttributes::render_base_attributes`] and, when they carry form
/// fields, the editable attributes. Every user-supplied string is escaped in
/// the returned fragment.
pub trait Element: HasBaseAttributes {
    fn render(&self) -> String;
}
