use std::collections::BTreeMap;

use rayon::prelude::*;

use crate::chainage::ChainageFormat;
use crate::math::vector_2d::is_finite;
use crate::route::LinearReference;

use super::{Classifier, Device, PointFeature};

/// Projects point features onto a route and turns them into ordered
/// [`Device`] records.
///
/// Features that cannot be located are skipped with a warning rather than
/// failing the whole batch. Output is sorted by station (ties keep input
/// order) and indexed from 1 without gaps.
#[derive(Debug)]
pub struct ProjectDevices<'a> {
    route: &'a LinearReference,
    features: Vec<PointFeature>,
    allow_list: Option<&'a BTreeMap<String, String>>,
    classifier: Option<&'a Classifier>,
    format: ChainageFormat,
}

impl<'a> ProjectDevices<'a> {
    #[must_use]
    pub fn new(route: &'a LinearReference, features: Vec<PointFeature>) -> Self {
        Self {
            route,
            features,
            allow_list: None,
            classifier: None,
            format: ChainageFormat::default(),
        }
    }

    /// Keeps only features whose id is a key of `allow_list`; the mapped
    /// value becomes the device's display name.
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

    /// Runs the projection.
    #[must_use]
    pub fn execute(&self) -> Vec<Device> {
        let mut devices: Vec<Device> = self
            .features
            .par_iter()
            .filter_map(|feature| {
                let display_name = match self.allow_list {
                    Some(allowed) => allowed.get(&feature.feature_id)?.clone(),
                    None => feature.feature_id.clone(),
                };
                self.project(feature, display_name)
            })
            .collect();

        devices.sort_by(|a, b| a.station.total_cmp(&b.station));
        for (i, device) in devices.iter_mut().enumerate() {
            device.index = i + 1;
        }

        tracing::info!(
            features = self.features.len(),
            devices = devices.len(),
            "projected devices onto route"
        );
        devices
    }

    fn project(&self, feature: &PointFeature, display_name: String) -> Option<Device> {
        if !is_finite(&feature.position) {
            tracing::warn!(
                feature = %feature.feature_id,
                "skipping feature with non-finite position"
            );
            return None;
        }

        let Some(hit) = self.route.project(&feature.position) else {
            tracing::warn!(
                feature = %feature.feature_id,
                x = feature.position.x,
                y = feature.position.y,
                "skipping feature that does not project onto the route"
            );
            return None;
        };

        let classification = self.classifier.map(|classifier| {
            if classifier.lookup(hit.station).is_none() {
                tracing::debug!(
                    feature = %feature.feature_id,
                    station = hit.station,
                    "station outside every classification range"
                );
            }
            classifier.classify(hit.station).to_owned()
        });

        Some(Device {
            index: 0,
            feature_id: feature.feature_id.clone(),
            display_name,
            station: hit.station,
            station_label: self.format.format(hit.station),
            offset: hit.offset,
            side: hit.side,
            classification,
            position: feature.position,
        })
    }
}
