use crate::document::{DrawingDocument, EntityId, EntityKind};
use crate::error::Result;

use super::ReadingOrder;

/// Attribute tag holding a title block's sheet number.
pub const SHEET_NUMBER_TAG: &str = "TUNo";

/// Rewrites the sheet numbers of title-block inserts in reading order.
///
/// Every INSERT carrying a [`SHEET_NUMBER_TAG`] attribute (tag compared
/// case-insensitively) is a title block. Numbers start at `1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenumberFrames {
    /// Row tolerance for [`ReadingOrder`].
    pub y_tolerance: f64,
    /// When set, only title blocks with `x > x_restrict` are renumbered.
    pub x_restrict: Option<f64>,
}

impl Default for RenumberFrames {
    fn default() -> Self {
        Self {
            y_tolerance: 1.0,
            x_restrict: None,
        }
    }
}

impl RenumberFrames {
    #[must_use]
    pub fn new(y_tolerance: f64) -> Self {
        Self {
            y_tolerance,
            x_restrict: None,
        }
    }

    #[must_use]
    pub fn with_x_restrict(mut self, x_restrict: f64) -> Self {
        self.x_restrict = Some(x_restrict);
        self
    }

    /// Renumbers the title blocks of `document` and returns how many were
    /// written.
    ///
    /// # Errors
    ///
    /// Returns an error if the row tolerance is invalid or the document
    /// fails to read or update an insert it listed.
    pub fn execute<D: DrawingDocument + ?Sized>(&self, document: &mut D) -> Result<usize> {
        let mut frames = Vec::new();
        for id in document.query(EntityKind::Insert, None) {
            let insert = document.insert(id)?;
            if insert.attribute(SHEET_NUMBER_TAG).is_none() {
                continue;
            }
            if self.x_restrict.is_some_and(|limit| insert.position.x <= limit) {
                continue;
            }
            frames.push((id, insert.position));
        }

        let ordered: Vec<(EntityId, _)> =
            ReadingOrder::new(self.y_tolerance).sort_by_key(frames, |(_, position)| *position)?;

        let mut count = 0;
        for (number, (id, _)) in ordered.into_iter().enumerate() {
            if document.set_attribute(id, SHEET_NUMBER_TAG, &(number + 1).to_string())? {
                count += 1;
            }
        }

        tracing::info!(count, "renumbered title blocks");
        Ok(count)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::document::{BlockInsert, EntityData, MemoryDocument};
    use crate::math::Point2;

    fn title_block(doc: &mut MemoryDocument, x: f64, y: f64, tag: &str) -> EntityId {
        doc.add_entity(
            "TK",
            EntityData::Insert(BlockInsert::new("TK_A3", Point2::new(x, y)).with_attribute(tag, "?")),
        )
    }

    fn number(doc: &MemoryDocument, id: EntityId) -> String {
        doc.insert(id).unwrap().attribute(SHEET_NUMBER_TAG).unwrap().value.clone()
    }

    #[test]
    fn numbers_follow_reading_order() {
        let mut doc = MemoryDocument::new();
        let bottom_left = title_block(&mut doc, 0.0, 0.0, "TUNo");
        let top_right = title_block(&mut doc, 500.0, 400.2, "tuno");
        let top_left = title_block(&mut doc, 0.0, 400.0, "TUNO");
        let bottom_right = title_block(&mut doc, 500.0, -0.5, "TUNo");
        doc.add_entity(
            "TK",
            EntityData::Insert(BlockInsert::new("NOTE", Point2::new(0.0, 900.0))),
        );

        let count = RenumberFrames::default().execute(&mut doc).unwrap();
        assert_eq!(count, 4);
        assert_eq!(number(&doc, top_left), "1");
        assert_eq!(number(&doc, top_right), "2");
        assert_eq!(number(&doc, bottom_left), "3");
        assert_eq!(number(&doc, bottom_right), "4");
    }

    #[test]
    fn x_restrict_leaves_left_blocks_alone() {
        let mut doc = MemoryDocument::new();
        let left = title_block(&mut doc, 100.0, 0.0, "TUNo");
        let right_low = title_block(&mut doc, 800.0, 0.0, "TUNo");
        let right_high = title_block(&mut doc, 700.0, 300.0, "TUNo");

        let count = RenumberFrames::default()
            .with_x_restrict(500.0)
            .execute(&mut doc)
            .unwrap();
        assert_eq!(count, 2);
        assert_eq!(number(&doc, right_high), "1");
        assert_eq!(number(&doc, right_low), "2");
        assert_eq!(number(&doc, left), "?");
    }

    #[test]
    fn no_title_blocks_is_zero() {
        let mut doc = MemoryDocument::new();
        assert_eq!(RenumberFrames::new(2.0).execute(&mut doc).unwrap(), 0);
    }
}
