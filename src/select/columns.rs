/// Column indices given at invocation, immutable for the run.
///
/// Indices keep the order they were requested in, duplicates included, but
/// selection only ever asks [`ColumnSet::contains`]. Negative indices are kept
/// and simply never match a field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnSet {
    requested: Vec<i64>,
}

impl ColumnSet {
    /// Build from the raw indices passed with `-c`.
    #[must_use]
    pub fn new(requested: Vec<i64>) -> Self {
        Self { requested }
    }

    /// Whether the field at `index` was requested.
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        i64::try_from(index).is_ok_and(|i| self.requested.contains(&i))
    }

    /// Whether no column was requested at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.requested.is_empty()
    }

    /// Indices as requested, in request order.
    #[must_use]
    pub fn requested(&self) -> &[i64] {
        &self.requested
    }

    /// Distinct indices that could match a field, ascending.
    ///
    /// This is the column order of every rendered row.
    #[must_use]
    pub fn positions(&self) -> Vec<usize> {
        let mut out: Vec<usize> = self
            .requested
            .iter()
            .filter_map(|&i| usize::try_from(i).ok())
            .collect();
        out.sort_unstable();
        out.dedup();
        out
    }
}

impl From<Option<Vec<i64>>> for ColumnSet {
    fn from(value: Option<Vec<i64>>) -> Self {
        Self::new(value.unwrap_or_default())
    }
}
