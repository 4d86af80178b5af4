use crate::document::{DrawingDocument, EntityId, EntityKind};
use crate::error::{Result, RouteError};

/// Locates the road centerline entity on a layer.
///
/// Among the polylines on the layer the one with the most vertices wins,
/// ties going to the earliest in drawing order. Without polylines the
/// first LINE on the layer is used.
#[derive(Debug)]
pub struct FindCenterline<'a, D: DrawingDocument + ?Sized> {
    document: &'a D,
    layer: &'a str,
}

impl<'a, D: DrawingDocument + ?Sized> FindCenterline<'a, D> {
    #[must_use]
    pub fn new(document: &'a D, layer: &'a str) -> Self {
        Self { document, layer }
    }

    /// Executes the lookup.
    ///
    /// # Errors
    ///
    /// Returns `RouteError::CenterlineNotFound` if the layer holds neither
    /// a polyline nor a line.
    pub fn execute(&self) -> Result<EntityId> {
        let mut best: Option<(EntityId, usize)> = None;
        for id in self.document.query(EntityKind::Polyline, Some(self.layer)) {
            let count = self.document.vertex_count(id)?;
            if best.is_none_or(|(_, most)| count > most) {
                best = Some((id, count));
            }
        }

        if let Some((id, vertices)) = best {
            tracing::debug!(layer = self.layer, vertices, "found centerline polyline");
            return Ok(id);
        }

        match self.document.query(EntityKind::Line, Some(self.layer)).first() {
            Some(&id) => {
                tracing::debug!(layer = self.layer, "no centerline polyline; using first line");
                Ok(id)
            }
            None => Err(RouteError::CenterlineNotFound(self.layer.to_owned()).into()),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::document::{EntityData, MemoryDocument};
    use crate::error::RoadplotError;
    use crate::geometry::Pline;
    use crate::math::Point2;

    fn pline(count: u32) -> EntityData {
        let points: Vec<Point2> = (0..count).map(|i| Point2::new(f64::from(i), 0.0)).collect();
        EntityData::Polyline(Pline::from_points(&points))
    }

    #[test]
    fn picks_polyline_with_most_vertices() {
        let mut doc = MemoryDocument::new();
        doc.add_entity("ROAD_CENTER", pline(3));
        let longest = doc.add_entity("ROAD_CENTER", pline(7));
        doc.add_entity("ROAD_CENTER", pline(7));
        doc.add_entity("OTHER", pline(20));

        let id = FindCenterline::new(&doc, "ROAD_CENTER").execute().unwrap();
        assert_eq!(id, longest);
    }

    #[test]
    fn falls_back_to_first_line() {
        let mut doc = MemoryDocument::new();
        let first = doc.add_line("ROAD_CENTER", Point2::origin(), Point2::new(10.0, 0.0), None);
        doc.add_line("ROAD_CENTER", Point2::origin(), Point2::new(50.0, 0.0), None);

        let id = FindCenterline::new(&doc, "ROAD_CENTER").execute().unwrap();
        assert_eq!(id, first);
    }

    #[test]
    fn missing_layer_is_an_error() {
        let mut doc = MemoryDocument::new();
        doc.add_entity("OTHER", pline(4));

        let err = FindCenterline::new(&doc, "ROAD_CENTER").execute().unwrap_err();
        assert!(matches!(
            err,
            RoadplotError::Route(RouteError::CenterlineNotFound(layer)) if layer == "ROAD_CENTER"
        ));
    }
}
