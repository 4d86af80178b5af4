use crate::chainage::ChainageValue;

/// A tagged, inclusive station interval.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChainageRange {
    pub start: f64,
    pub end: f64,
    pub tag: String,
}

impl ChainageRange {
    /// Creates a range from two bounds given as numbers or `K<km>+<m>`
    /// labels. Bounds are swapped when given in descending order.
    #[must_use]
    pub fn new(
        start: impl Into<ChainageValue>,
        end: impl Into<ChainageValue>,
        tag: impl Into<String>,
    ) -> Self {
        let a = start.into().resolve();
        let b = end.into().resolve();
        Self {
            start: a.min(b),
            end: a.max(b),
            tag: tag.into(),
        }
    }

    #[must_use]
    pub fn contains(&self, station: f64) -> bool {
        self.start <= station && station <= self.end
    }
}

/// Assigns a tag to a station by interval membership.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Classifier {
    ranges: Vec<ChainageRange>,
    default_tag: String,
}

impl Classifier {
    #[must_use]
    pub fn new(ranges: Vec<ChainageRange>, default_tag: impl Into<String>) -> Self {
        Self {
            ranges,
            default_tag: default_tag.into(),
        }
    }

    /// First range containing `station`, in the order given.
    #[must_use]
    pub fn lookup(&self, station: f64) -> Option<&ChainageRange> {
        self.ranges.iter().find(|r| r.contains(station))
    }

    /// Tag of the first containing range, else the default tag.
    #[must_use]
    pub fn classify(&self, station: f64) -> &str {
        self.lookup(station)
            .map_or(self.default_tag.as_str(), |r| r.tag.as_str())
    }

    #[must_use]
    pub fn ranges(&self) -> &[ChainageRange] {
        &self.ranges
    }

    #[must_use]
    pub fn default_tag(&self) -> &str {
        &self.default_tag
    }
}
