//! Hover ancestry reporting.
//!
//! The host resolves the element under the pointer and reports it as a
//! leaf-to-root chain of [`ElementRole`]s. The engine never sees real DOM
//! nodes; roles are enough to classify the cursor.

/// Interaction category of one element in a hover chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ElementRole {
    /// Button tag or button role.
    Button,
    /// Hyperlink.
    Link,
    /// Video playback element. Posters and thumbnails are [`Image`].
    ///
    /// [`Image`]: ElementRole::Image
    Video,
    /// Image element.
    Image,
    /// Plain text content.
    Text,
    /// Anything else.
    Generic,
}

/// Deepest ancestor considered when classifying a hover chain.
///
/// Bounds the walk so a pathological tree cannot stall the pointer-move
/// handler.
pub const MAX_ANCESTRY_DEPTH: usize = 32;

/// The portion of a leaf-to-root chain the engine inspects.
pub fn bounded_ancestry(path: &[ElementRole]) -> &[ElementRole] {
    &path[..path.len().min(MAX_ANCESTRY_DEPTH)]
}
