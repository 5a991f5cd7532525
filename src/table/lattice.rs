//! Accumulated-cost and parent tables filled by the forward pass.
//!
//! Both tables are stored position-major: column `p` holds one contiguous
//! entry per label, which is the access pattern of both the forward sweep and
//! the traceback.

/// Minimum total cost of any path ending at each `(label, position)` node.
#[derive(Clone, Debug, PartialEq)]
pub struct AccumulatedCosts {
    labels: usize,
    positions: usize,
    data: Vec<f64>,
}

impl AccumulatedCosts {
    pub(crate) fn with_shape(labels: usize, positions: usize) -> Self {
        Self {
            labels,
            positions,
            data: vec![0.0; labels * positions],
        }
    }

    /// Returns the number of labels per position.
    pub fn labels(&self) -> usize {
        self.labels
    }

    /// Returns the number of positions.
    pub fn positions(&self) -> usize {
        self.positions
    }

    /// Returns `cost[label][position]` if it is within bounds.
    pub fn get(&self, label: usize, position: usize) -> Option<f64> {
        if label >= self.labels || position >= self.positions {
            return None;
        }
        self.data.get(position * self.labels + label).copied()
    }

    /// Returns the costs of every label at `position`.
    pub fn column(&self, position: usize) -> Option<&[f64]> {
        if position >= self.positions {
            return None;
        }
        let start = position * self.labels;
        self.data.get(start..start + self.labels)
    }

    pub(crate) fn column_mut(&mut self, position: usize) -> &mut [f64] {
        let start = position * self.labels;
        &mut self.data[start..start + self.labels]
    }

    /// Splits out the finalized column `position - 1` and the column being written.
    pub(crate) fn step_columns_mut(&mut self, position: usize) -> (&[f64], &mut [f64]) {
        debug_assert!(position >= 1 && position < self.positions);
        let (head, tail) = self.data.split_at_mut(position * self.labels);
        (&head[(position - 1) * self.labels..], &mut tail[..self.labels])
    }

    /// Returns the table in `[label][position]` layout.
    pub fn to_label_major(&self) -> Vec<Vec<f64>> {
        (0..self.labels)
            .map(|l| {
                (0..self.positions)
                    .map(|p| self.data[p * self.labels + l])
                    .collect()
            })
            .collect()
    }
}

/// Back-pointers: the label at `position - 1` on the cheapest path into each node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParentTable {
    labels: usize,
    positions: usize,
    data: Vec<usize>,
}

impl ParentTable {
    pub(crate) fn with_shape(labels: usize, positions: usize) -> Self {
        Self {
            labels,
            positions,
            data: vec![0; labels * positions],
        }
    }

    /// Returns the number of labels per position.
    pub fn labels(&self) -> usize {
        self.labels
    }

    /// Returns the number of positions.
    pub fn positions(&self) -> usize {
        self.positions
    }

    /// Returns `parent[label][position]`; position 0 has no predecessor.
    pub fn get(&self, label: usize, position: usize) -> Option<usize> {
        if position == 0 || label >= self.labels || position >= self.positions {
            return None;
        }
        self.data.get(position * self.labels + label).copied()
    }

    /// Returns the parents of every label at `position`.
    pub fn column(&self, position: usize) -> Option<&[usize]> {
        if position == 0 || position >= self.positions {
            return None;
        }
        let start = position * self.labels;
        self.data.get(start..start + self.labels)
    }

    pub(crate) fn column_mut(&mut self, position: usize) -> &mut [usize] {
        let start = position * self.labels;
        &mut self.data[start..start + self.labels]
    }

    /// Returns the table in `[label][position]` layout; column 0 is `None`.
    pub fn to_label_major(&self) -> Vec<Vec<Option<usize>>> {
        (0..self.labels)
            .map(|l| (0..self.positions).map(|p| self.get(l, p)).collect())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{AccumulatedCosts, ParentTable};

    #[test]
    fn step_columns_split_adjacent_positions() {
        let mut costs = AccumulatedCosts::with_shape(2, 3);
        costs.column_mut(0).copy_from_slice(&[1.0, 2.0]);
        {
            let (prev, cur) = costs.step_columns_mut(1);
            assert_eq!(prev, &[1.0, 2.0]);
            cur[0] = prev[1] + 1.0;
            cur[1] = prev[0] + 1.0;
        }
        assert_eq!(costs.get(0, 1), Some(3.0));
        assert_eq!(costs.get(1, 1), Some(2.0));
        assert_eq!(
            costs.to_label_major(),
            vec![vec![1.0, 3.0, 0.0], vec![2.0, 2.0, 0.0]]
        );
    }

    #[test]
    fn first_parent_column_is_undefined() {
        let mut parents = ParentTable::with_shape(2, 2);
        parents.column_mut(1).copy_from_slice(&[1, 0]);
        assert_eq!(parents.get(0, 0), None);
        assert_eq!(parents.get(0, 1), Some(1));
        assert_eq!(parents.column(0), None);
        assert_eq!(parents.to_label_major(), vec![vec![None, Some(1)], vec![None, Some(0)]]);
    }
}
