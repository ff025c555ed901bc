use crate::markup::MarkupOptions;

/// Implemented by every option holder the template layer can render.
///
/// Holders are passive value data: they carry display and behavior
/// settings from a controller to the template layer and are read there
/// once. All markup generation is handled by the rendering side.
pub trait GizmoOptions: std::fmt::Debug {
    /// Template identifier, e.g. `"date_picker"`.
    fn gizmo_name(&self) -> &'static str;

    /// Attributes and classes merged onto the root markup element.
    fn markup(&self) -> &MarkupOptions;
}
