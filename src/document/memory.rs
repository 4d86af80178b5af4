use std::collections::{BTreeMap, BTreeSet};

use slotmap::SlotMap;

use crate::error::{DocumentError, Result};
use crate::geometry::{ArcEntity, CenterlineGeometry, Pline};
use crate::math::Point2;

use super::{BlockInsert, DrawingDocument, EntityId, EntityKind, LayoutSpec, MText};

/// Type-specific payload of a stored entity.
#[derive(Debug, Clone, PartialEq)]
pub enum EntityData {
    Line { start: Point2, end: Point2 },
    Polyline(Pline),
    Arc(ArcEntity),
    Circle { center: Point2, radius: f64 },
    Insert(BlockInsert),
    MText(MText),
    /// Any entity the engine does not interpret, by type name.
    Other(String),
}

impl EntityData {
    /// Query kind of this payload.
    #[must_use]
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::Line { .. } => EntityKind::Line,
            Self::Polyline(_) => EntityKind::Polyline,
            Self::Arc(_) => EntityKind::Arc,
            Self::Circle { .. } => EntityKind::Circle,
            Self::Insert(_) => EntityKind::Insert,
            Self::MText(_) => EntityKind::MText,
            Self::Other(_) => EntityKind::Other,
        }
    }

    fn type_name(&self) -> &str {
        match self {
            Self::Other(name) => name,
            other => other.kind().name(),
        }
    }
}

/// An entity together with its common properties.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredEntity {
    pub layer: String,
    /// Color index; `None` means "by layer".
    pub color: Option<i16>,
    pub data: EntityData,
}

/// A text style definition.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub font: String,
    pub width_factor: f64,
}

/// In-memory drawing.
///
/// Entities live in a generational arena, so ids stay valid while other
/// entities are added. Query results follow insertion order.
#[derive(Debug, Default)]
pub struct MemoryDocument {
    entities: SlotMap<EntityId, StoredEntity>,
    order: Vec<EntityId>,
    layers: BTreeMap<String, i16>,
    text_styles: BTreeMap<String, TextStyle>,
    blocks: BTreeSet<String>,
    layouts: Vec<LayoutSpec>,
}

impl MemoryDocument {
    /// Creates a new, empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an entity on `layer` and returns its ID.
    pub fn add_entity(&mut self, layer: &str, data: EntityData) -> EntityId {
        self.add_colored(layer, data, None)
    }

    /// Registers a block definition name.
    pub fn define_block(&mut self, name: &str) {
        self.blocks.insert(name.to_owned());
    }

    /// Returns the stored entity, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the document.
    pub fn entity(&self, id: EntityId) -> Result<&StoredEntity> {
        self.entities
            .get(id)
            .ok_or_else(|| DocumentError::EntityNotFound(format!("{id:?}")).into())
    }

    /// Entities on `layer`, in insertion order.
    pub fn entities_on<'a>(&'a self, layer: &'a str) -> impl Iterator<Item = &'a StoredEntity> + 'a {
        self.order
            .iter()
            .filter_map(|id| self.entities.get(*id))
            .filter(move |e| e.layer == layer)
    }

    /// Color of a layer, if it exists.
    #[must_use]
    pub fn layer_color(&self, name: &str) -> Option<i16> {
        self.layers.get(name).copied()
    }

    #[must_use]
    pub fn text_style(&self, name: &str) -> Option<&TextStyle> {
        self.text_styles.get(name)
    }

    #[must_use]
    pub fn layouts(&self) -> &[LayoutSpec] {
        &self.layouts
    }

    fn add_colored(&mut self, layer: &str, data: EntityData, color: Option<i16>) -> EntityId {
        let id = self.entities.insert(StoredEntity {
            layer: layer.to_owned(),
            color,
            data,
        });
        self.order.push(id);
        id
    }

    fn insert_mut(&mut self, id: EntityId) -> Result<&mut BlockInsert> {
        let entity = self
            .entities
            .get_mut(id)
            .ok_or_else(|| DocumentError::EntityNotFound(format!("{id:?}")))?;
        match &mut entity.data {
            EntityData::Insert(insert) => Ok(insert),
            other => Err(DocumentError::WrongEntityKind {
                expected: EntityKind::Insert.name(),
                actual: other.kind().name(),
            }
            .into()),
        }
    }
}

impl DrawingDocument for MemoryDocument {
    fn query(&self, kind: EntityKind, layer: Option<&str>) -> Vec<EntityId> {
        self.order
            .iter()
            .copied()
            .filter(|id| {
                self.entities.get(*id).is_some_and(|e| {
                    e.data.kind() == kind && layer.is_none_or(|l| e.layer == l)
                })
            })
            .collect()
    }

    fn geometry(&self, id: EntityId) -> Result<CenterlineGeometry> {
        let entity = self.entity(id)?;
        Ok(match &entity.data {
            EntityData::Line { start, end } => CenterlineGeometry::Line {
                start: *start,
                end: *end,
            },
            EntityData::Polyline(pline) => CenterlineGeometry::Polyline(pline.clone()),
            EntityData::Arc(arc) => CenterlineGeometry::Arc(*arc),
            other => CenterlineGeometry::Unsupported(other.type_name().to_owned()),
        })
    }

    fn vertex_count(&self, id: EntityId) -> Result<usize> {
        let entity = self.entity(id)?;
        Ok(match &entity.data {
            EntityData::Line { .. } | EntityData::Arc(_) => 2,
            EntityData::Polyline(pline) => pline.vertices.len(),
            EntityData::Circle { .. } | EntityData::Insert(_) | EntityData::MText(_) => 1,
            EntityData::Other(_) => 0,
        })
    }

    fn insert(&self, id: EntityId) -> Result<BlockInsert> {
        match &self.entity(id)?.data {
            EntityData::Insert(insert) => Ok(insert.clone()),
            other => Err(DocumentError::WrongEntityKind {
                expected: EntityKind::Insert.name(),
                actual: other.kind().name(),
            }
            .into()),
        }
    }

    fn set_attribute(&mut self, id: EntityId, tag: &str, value: &str) -> Result<bool> {
        let insert = self.insert_mut(id)?;
        match insert
            .attributes
            .iter_mut()
            .find(|a| a.tag.eq_ignore_ascii_case(tag))
        {
            Some(attribute) => {
                value.clone_into(&mut attribute.value);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn ensure_layer(&mut self, name: &str, color: i16) {
        self.layers.entry(name.to_owned()).or_insert(color);
    }

    fn ensure_text_style(&mut self, name: &str, font: &str, width_factor: f64) {
        self.text_styles
            .entry(name.to_owned())
            .or_insert_with(|| TextStyle {
                font: font.to_owned(),
                width_factor,
            });
    }

    fn has_block(&self, name: &str) -> bool {
        self.blocks.contains(name)
    }

    fn has_layout(&self, name: &str) -> bool {
        self.layouts.iter().any(|l| l.name == name)
    }

    fn add_layout(&mut self, spec: LayoutSpec) -> Result<()> {
        if self.has_layout(&spec.name) {
            return Err(DocumentError::LayoutExists(spec.name).into());
        }
        self.layouts.push(spec);
        Ok(())
    }

    fn add_block_ref(&mut self, layer: &str, name: &str, position: Point2, rotation: f64) -> EntityId {
        let insert = BlockInsert {
            rotation,
            ..BlockInsert::new(name, position)
        };
        self.add_entity(layer, EntityData::Insert(insert))
    }

    fn add_line(&mut self, layer: &str, start: Point2, end: Point2, color: Option<i16>) -> EntityId {
        self.add_colored(layer, EntityData::Line { start, end }, color)
    }

    fn add_circle(&mut self, layer: &str, center: Point2, radius: f64, color: Option<i16>) -> EntityId {
        self.add_colored(layer, EntityData::Circle { center, radius }, color)
    }

    fn add_mtext(&mut self, layer: &str, text: MText) -> EntityId {
        self.add_entity(layer, EntityData::MText(text))
    }
}
