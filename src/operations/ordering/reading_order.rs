use crate::error::{OperationError, Result};
use crate::math::Point2;

/// Orders items top-to-bottom, then left-to-right within rows.
///
/// Items are taken in descending Y. A row collects every following item
/// whose Y is within `y_tolerance` of the row's first item; rows are then
/// sorted by ascending X. The tolerance should exceed drafting jitter and
/// stay below the spacing between rows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReadingOrder {
    y_tolerance: f64,
}

impl ReadingOrder {
    #[must_use]
    pub fn new(y_tolerance: f64) -> Self {
        Self { y_tolerance }
    }

    /// Sorts `items` by the position `key` returns for each.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if the tolerance is negative
    /// or not finite.
    pub fn sort_by_key<T, F>(&self, items: Vec<T>, key: F) -> Result<Vec<T>>
    where
        F: Fn(&T) -> Point2,
    {
        if !(self.y_tolerance.is_finite() && self.y_tolerance >= 0.0) {
            return Err(OperationError::InvalidInput(format!(
                "row tolerance must be finite and non-negative, got {}",
                self.y_tolerance
            ))
            .into());
        }

        let mut keyed: Vec<(Point2, T)> = items.into_iter().map(|item| (key(&item), item)).collect();
        keyed.sort_by(|a, b| b.0.y.total_cmp(&a.0.y));

        let mut ordered = Vec::with_capacity(keyed.len());
        let mut row: Vec<(Point2, T)> = Vec::new();
        for entry in keyed {
            if let Some((first, _)) = row.first() {
                if (first.y - entry.0.y).abs() > self.y_tolerance {
                    flush_row(&mut row, &mut ordered);
                }
            }
            row.push(entry);
        }
        flush_row(&mut row, &mut ordered);

        Ok(ordered)
    }
}

fn flush_row<T>(row: &mut Vec<(Point2, T)>, out: &mut Vec<T>) {
    row.sort_by(|a, b| a.0.x.total_cmp(&b.0.x));
    out.extend(row.drain(..).map(|(_, item)| item));
}
