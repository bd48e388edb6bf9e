use crate::table::Table;
use ordered_float::OrderedFloat;
use std::ops::Range;

/// Per-feature value ranges observed in a training table, in declared column
/// order. Predictions outside these ranges are extrapolations.
#[derive(Debug, Clone)]
pub struct FeatureSpace(Vec<Range<f64>>);

impl FeatureSpace {
    pub fn from_table(table: &Table) -> Self {
        let ranges = (0..table.features_len())
            .map(|i| {
                let column = table.column(i);
                let start = column
                    .iter()
                    .copied()
                    .min_by_key(|&v| OrderedFloat(v))
                    .expect("never fails");
                let end = column
                    .iter()
                    .copied()
                    .max_by_key(|&v| OrderedFloat(v))
                    .expect("never fails");
                Range { start, end }
            })
            .collect();
        Self(ranges)
    }

    pub fn ranges(&self) -> &[Range<f64>] {
        &self.0
    }

    pub fn contains(&self, feature_index: usize, value: f64) -> bool {
        let range = &self.0[feature_index];
        range.start <= value && value <= range.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn observed_ranges_work() -> Result<(), anyhow::Error> {
        let table = Table::new(
            vec!["a", "b"],
            vec![&[2.0, 0.5, 1.0], &[-1.0, 3.0, 0.0]],
            &[1.0, 2.0, 3.0],
        )?;
        let space = FeatureSpace::from_table(&table);
        assert_eq!(space.ranges(), &[0.5..2.0, -1.0..3.0]);
        assert!(space.contains(0, 1.5));
        assert!(!space.contains(1, 3.5));
        Ok(())
    }
}
