//! The drawing document the engine reads centerlines and devices from and
//! writes layouts and annotations to.
//!
//! File formats are out of scope: adapters implement [`DrawingDocument`]
//! over whatever CAD library they use. [`MemoryDocument`] is a complete
//! in-memory implementation.

mod memory;

pub use memory::{EntityData, MemoryDocument, StoredEntity, TextStyle};

use crate::error::Result;
use crate::geometry::CenterlineGeometry;
use crate::math::Point2;

slotmap::new_key_type! {
    /// Unique identifier for an entity in a drawing document.
    pub struct EntityId;
}

/// Entity type filter for document queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Line,
    Polyline,
    Arc,
    Circle,
    Insert,
    MText,
    Other,
}

impl EntityKind {
    /// Drawing type name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Line => "LINE",
            Self::Polyline => "LWPOLYLINE",
            Self::Arc => "ARC",
            Self::Circle => "CIRCLE",
            Self::Insert => "INSERT",
            Self::MText => "MTEXT",
            Self::Other => "OTHER",
        }
    }
}

/// A tagged attribute attached to a block reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub tag: String,
    pub value: String,
}

impl Attribute {
    #[must_use]
    pub fn new(tag: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            value: value.into(),
        }
    }
}

/// A block reference (INSERT).
#[derive(Debug, Clone, PartialEq)]
pub struct BlockInsert {
    /// Name of the referenced block definition.
    pub name: String,
    pub position: Point2,
    /// Rotation in degrees.
    pub rotation: f64,
    pub attributes: Vec<Attribute>,
}

impl BlockInsert {
    #[must_use]
    pub fn new(name: impl Into<String>, position: Point2) -> Self {
        Self {
            name: name.into(),
            position,
            rotation: 0.0,
            attributes: Vec::new(),
        }
    }

    /// Adds an attribute, builder style.
    #[must_use]
    pub fn with_attribute(mut self, tag: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push(Attribute::new(tag, value));
        self
    }

    /// Finds an attribute by tag, ignoring ASCII case.
    #[must_use]
    pub fn attribute(&self, tag: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.tag.eq_ignore_ascii_case(tag))
    }
}

/// A multi-line text entity.
#[derive(Debug, Clone, PartialEq)]
pub struct MText {
    pub text: String,
    /// Bottom-left insertion point.
    pub position: Point2,
    pub char_height: f64,
    /// Rotation in degrees.
    pub rotation: f64,
    pub style: String,
}

/// A paper-space viewport looking into model space.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewportSpec {
    /// Viewport center on paper, millimetres.
    pub paper_center: Point2,
    /// Viewport size on paper, millimetres.
    pub paper_size: (f64, f64),
    /// Model-space point shown at the viewport center.
    pub view_center: Point2,
    /// Model-space height shown by the viewport; fixes the plot scale.
    pub view_height: f64,
    /// View twist in degrees.
    pub twist: f64,
    pub locked: bool,
}

/// A paper layout with one viewport.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutSpec {
    pub name: String,
    /// Paper size in millimetres.
    pub paper_size: (f64, f64),
    /// Equal page margin in millimetres.
    pub margin: f64,
    pub viewport: ViewportSpec,
}

/// Read/write access to a CAD drawing.
///
/// "Ensure" methods are idempotent: they create the named resource only
/// when it does not exist yet.
pub trait DrawingDocument {
    /// Entities of `kind`, optionally restricted to `layer`, in drawing order.
    fn query(&self, kind: EntityKind, layer: Option<&str>) -> Vec<EntityId>;

    /// Geometry of an entity for use as a centerline. Entity types that
    /// cannot be flattened come back as [`CenterlineGeometry::Unsupported`].
    ///
    /// # Errors
    ///
    /// Returns an error if the entity does not exist.
    fn geometry(&self, id: EntityId) -> Result<CenterlineGeometry>;

    /// Number of stored vertices of an entity.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity does not exist.
    fn vertex_count(&self, id: EntityId) -> Result<usize>;

    /// Block reference data of an INSERT entity.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity does not exist or is not an INSERT.
    fn insert(&self, id: EntityId) -> Result<BlockInsert>;

    /// Sets the value of the attribute with `tag` (ASCII case-insensitive).
    /// Returns `false` when the insert has no such attribute.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity does not exist or is not an INSERT.
    fn set_attribute(&mut self, id: EntityId, tag: &str, value: &str) -> Result<bool>;

    fn ensure_layer(&mut self, name: &str, color: i16);

    fn ensure_text_style(&mut self, name: &str, font: &str, width_factor: f64);

    fn has_block(&self, name: &str) -> bool;

    fn has_layout(&self, name: &str) -> bool;

    /// Creates a paper layout.
    ///
    /// # Errors
    ///
    /// Returns `DocumentError::LayoutExists` if the name is taken.
    fn add_layout(&mut self, spec: LayoutSpec) -> Result<()>;

    /// Adds a block reference to model space. `rotation` is in degrees.
    fn add_block_ref(&mut self, layer: &str, name: &str, position: Point2, rotation: f64) -> EntityId;

    fn add_line(&mut self, layer: &str, start: Point2, end: Point2, color: Option<i16>) -> EntityId;

    fn add_circle(&mut self, layer: &str, center: Point2, radius: f64, color: Option<i16>) -> EntityId;

    fn add_mtext(&mut self, layer: &str, text: MText) -> EntityId;
}
