use std::collections::BTreeMap;

use crate::chainage::ChainageFormat;
use crate::document::{DrawingDocument, EntityKind};
use crate::error::Result;
use crate::route::LinearReference;

use super::{Classifier, Device, PointFeature, ProjectDevices};

/// Reads every block insert of a drawing and locates it along the route.
///
/// The block name is the feature id. Filtering, classification and ordering
/// are those of [`ProjectDevices`].
#[derive(Debug)]
pub struct ExtractDevices<'a, D: DrawingDocument + ?Sized> {
    document: &'a D,
    route: &'a LinearReference,
    allow_list: Option<&'a BTreeMap<String, String>>,
    classifier: Option<&'a Classifier>,
    format: ChainageFormat,
}

impl<'a, D: DrawingDocument + ?Sized> ExtractDevices<'a, D> {
    #[must_use]
    pub fn new(document: &'a D, route: &'a LinearReference) -> Self {
        Self {
            document,
            route,
            allow_list: None,
            classifier: None,
            format: ChainageFormat::default(),
        }
    }

    /// Block names to keep, mapped to display names.
    #[must_use]
    pub fn with_allow_list(mut self, allow_list: &'a BTreeMap<String, String>) -> Self {
        self.allow_list = Some(allow_list);
        self
    }

    #[must_use]
    pub fn with_classifier(mut self, classifier: &'a Classifier) -> Self {
        self.classifier = Some(classifier);
        self
    }

    #[must_use]
    pub fn with_format(mut self, format: ChainageFormat) -> Self {
        self.format = format;
        self
    }

    /// Executes the extraction.
    ///
    /// # Errors
    ///
    /// Returns an error if the document fails to return an insert it listed.
    pub fn execute(&self) -> Result<Vec<Device>> {
        let ids = self.document.query(EntityKind::Insert, None);
        let features = ids
            .into_iter()
            .map(|id| {
                let insert = self.document.insert(id)?;
                Ok(PointFeature::new(insert.name, insert.position))
            })
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(inserts = features.len(), "read block inserts");

        let mut projection = ProjectDevices::new(self.route, features).with_format(self.format);
        if let Some(allow_list) = self.allow_list {
            projection = projection.with_allow_list(allow_list);
        }
        if let Some(classifier) = self.classifier {
            projection = projection.with_classifier(classifier);
        }
        Ok(projection.execute())
    }
}
