use thiserror::Error;

/// A borrowed, column-oriented sample of observations: one named column per
/// feature plus one target column, all with the same row count.
#[derive(Debug, Clone)]
pub struct Table<'a> {
    names: Vec<&'a str>,
    features: Vec<&'a [f64]>,
    target: &'a [f64],
}

impl<'a> Table<'a> {
    pub fn new(
        names: Vec<&'a str>,
        features: Vec<&'a [f64]>,
        target: &'a [f64],
    ) -> Result<Self, TableError> {
        if names.len() != features.len() {
            return Err(TableError::SchemaSizeMismatch);
        }

        if features.is_empty() || target.is_empty() {
            return Err(TableError::EmptyTable);
        }

        let rows_len = target.len();
        if features.iter().any(|c| c.len() != rows_len) {
            return Err(TableError::RowSizeMismatch);
        }

        if target.iter().any(|t| !t.is_finite()) {
            return Err(TableError::NonFiniteTarget);
        }

        Ok(Self {
            names,
            features,
            target,
        })
    }

    pub fn names(&self) -> &[&'a str] {
        &self.names
    }

    pub fn target(&self) -> &'a [f64] {
        self.target
    }

    pub fn column(&self, feature_index: usize) -> &'a [f64] {
        self.features[feature_index]
    }

    pub fn features_len(&self) -> usize {
        self.features.len()
    }

    pub fn rows_len(&self) -> usize {
        self.target.len()
    }

    /// Feature values of one observation, in declared column order.
    pub fn row(&self, row_index: usize) -> impl '_ + Iterator<Item = f64> + Clone {
        self.features.iter().map(move |c| c[row_index])
    }
}

#[derive(Debug, Error, Clone)]
pub enum TableError {
    #[error("table must have at least one column and one row")]
    EmptyTable,

    #[error("some of columns have a different row count from others")]
    RowSizeMismatch,

    #[error("feature names and feature columns must have the same count")]
    SchemaSizeMismatch,

    #[error("target column contains non finite numbers")]
    NonFiniteTarget,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_table_works() -> Result<(), anyhow::Error> {
        let table = Table::new(
            vec!["a", "b"],
            vec![&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]],
            &[7.0, 8.0, 9.0],
        )?;
        assert_eq!(table.features_len(), 2);
        assert_eq!(table.rows_len(), 3);
        assert_eq!(table.names(), &["a", "b"]);
        assert_eq!(table.column(1), &[4.0, 5.0, 6.0]);
        assert_eq!(table.row(2).collect::<Vec<_>>(), vec![3.0, 6.0]);
        Ok(())
    }

    #[test]
    fn empty_table_is_rejected() {
        assert!(matches!(
            Table::new(vec![], vec![], &[1.0]),
            Err(TableError::EmptyTable)
        ));
        assert!(matches!(
            Table::new(vec!["a"], vec![&[1.0][..]], &[]),
            Err(TableError::EmptyTable)
        ));
    }

    #[test]
    fn row_size_mismatch_is_rejected() {
        assert!(matches!(
            Table::new(vec!["a"], vec![&[1.0, 2.0][..]], &[1.0, 2.0, 3.0]),
            Err(TableError::RowSizeMismatch)
        ));
    }

    #[test]
    fn schema_size_mismatch_is_rejected() {
        assert!(matches!(
            Table::new(vec!["a", "b"], vec![&[1.0][..]], &[1.0]),
            Err(TableError::SchemaSizeMismatch)
        ));
    }

    #[test]
    fn non_finite_target_is_rejected() {
        assert!(matches!(
            Table::new(vec!["a"], vec![&[1.0, 2.0][..]], &[1.0, f64::NAN]),
            Err(TableError::NonFiniteTarget)
        ));
    }
}
