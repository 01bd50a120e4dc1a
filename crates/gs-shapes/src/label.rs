use gs_grid::BitGrid;

use crate::count::{Connectivity, dirs_for, neighbor};

/// Result of connected-component labeling.
///
/// Background cells are labeled `0`; shapes are numbered from `1` in the
/// order their first cell is reached by the row-major scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelMap {
    width: usize,
    height: usize,
    labels: Vec<u32>,
    num_shapes: usize,
}

impl LabelMap {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn labels(&self) -> &[u32] {
        &self.labels
    }

    pub fn num_shapes(&self) -> usize {
        self.num_shapes
    }

    pub fn get(&self, x: usize, y: usize) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.labels[y * self.width + x])
    }

    /// Cell count per label, indexed by `label - 1`.
    pub fn shape_sizes(&self) -> Vec<usize> {
        let mut sizes = vec![0usize; self.num_shapes];
        for &label in &self.labels {
            if label > 0 {
                sizes[label as usize - 1] += 1;
            }
        }
        sizes
    }
}

/// Labels every shape in the grid. The singleton policy does not apply
/// here: labeling always covers all 1-cells.
pub fn label_shapes(grid: &BitGrid, connectivity: Connectivity) -> LabelMap {
    let width = grid.width();
    let height = grid.height();
    let cells = grid.data();
    let mut labels = vec![0u32; cells.len()];

    if cells.is_empty() || width == 0 {
        return LabelMap {
            width,
            height,
            labels,
            num_shapes: 0,
        };
    }

    let dirs = dirs_for(connectivity);
    let mut stack = Vec::new();
    let mut next = 0u32;

    for p in 0..cells.len() {
        if cells[p] == 0 || labels[p] != 0 {
            continue;
        }

        next += 1;
        labels[p] = next;
        stack.clear();
        stack.push(p);

        while let Some(q) = stack.pop() {
            for &dir in dirs {
                let Some(nb) = neighbor(q, dir, width, height) else {
                    continue;
                };
                if cells[nb] != 0 && labels[nb] == 0 {
                    labels[nb] = next;
                    stack.push(nb);
                }
            }
        }
    }

    LabelMap {
        width,
        height,
        labels,
        num_shapes: next as usize,
    }
}

#[cfg(test)]
mod tests {
    use gs_grid::parse_grid;

    use super::label_shapes;
    use crate::Connectivity;

    #[test]
    fn labels_follow_discovery_order() {
        let g = parse_grid("110\n010\n001\n").expect("valid grid text");
        let map = label_shapes(&g, Connectivity::C4);

        assert_eq!(map.num_shapes(), 2);
        assert_eq!(map.labels(), &[1, 1, 0, 0, 1, 0, 0, 0, 2]);
        assert_eq!(map.get(2, 2), Some(2));
        assert_eq!(map.get(3, 2), None);
    }

    #[test]
    fn label_sizes_partition_the_ones() {
        let g = parse_grid("1101\n0101\n0011\n").expect("valid grid text");
        let map = label_shapes(&g, Connectivity::C4);

        let sizes = map.shape_sizes();
        assert_eq!(sizes.len(), map.num_shapes());
        assert_eq!(sizes.iter().sum::<usize>(), g.count_ones());
    }

    #[test]
    fn empty_grid_has_no_labels() {
        let g = parse_grid("").expect("valid grid text");
        let map = label_shapes(&g, Connectivity::C4);

        assert_eq!(map.num_shapes(), 0);
        assert!(map.labels().is_empty());
    }
}
