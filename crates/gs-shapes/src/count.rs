use gs_grid::BitGrid;

const DX: [isize; 8] = [1, 1, 0, -1, -1, -1, 0, 1];
const DY: [isize; 8] = [0, -1, -1, -1, 0, 1, 1, 1];
const DIRS_C4: [u8; 4] = [0, 2, 4, 6];
const DIRS_C8: [u8; 8] = [0, 1, 2, 3, 4, 5, 6, 7];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connectivity {
    C4,
    C8,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountConfig {
    pub connectivity: Connectivity,
    /// Whether a shape consisting of a single 1-cell counts.
    ///
    /// `true` counts every component; `false` counts only shapes of two or
    /// more cells.
    pub include_singletons: bool,
}

impl Default for CountConfig {
    fn default() -> Self {
        Self {
            connectivity: Connectivity::C4,
            include_singletons: true,
        }
    }
}

/// Outer scan direction. The count is invariant to it; both exist so that
/// invariance is testable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scan {
    RowMajor,
    ColMajor,
}

/// Counts connected shapes of 1-cells without mutating the grid.
///
/// Cells are scanned in row-major order; each unvisited 1-cell seeds an
/// iterative flood fill that marks its whole shape in a visited mask owned
/// by this call.
pub fn count_shapes(grid: &BitGrid, cfg: &CountConfig) -> usize {
    count_shapes_with_scan(grid, cfg, Scan::RowMajor)
}

/// Per-shape cell counts in discovery order.
///
/// Shapes excluded by the singleton policy are omitted. The returned sizes
/// sum to the number of 1-cells when `include_singletons` is set.
pub fn shape_sizes(grid: &BitGrid, cfg: &CountConfig) -> Vec<usize> {
    let mut sizes = Vec::new();
    scan_shapes(grid, cfg.connectivity, Scan::RowMajor, |size| {
        if cfg.include_singletons || size > 1 {
            sizes.push(size);
        }
    });
    sizes
}

/// Destructive variant: the grid doubles as its own visited mask and every
/// visited 1-cell is zeroed. Returns the same count as [`count_shapes`] and
/// leaves the grid all-zero.
pub fn count_shapes_in_place(grid: &mut BitGrid, cfg: &CountConfig) -> usize {
    let width = grid.width();
    let height = grid.height();
    let dirs = dirs_for(cfg.connectivity);
    let cells = grid.data_mut();

    if cells.is_empty() || width == 0 {
        return 0;
    }

    let mut count = 0usize;
    let mut stack = Vec::new();

    for p in 0..cells.len() {
        if cells[p] == 0 {
            continue;
        }

        cells[p] = 0;
        stack.clear();
        stack.push(p);

        let mut size = 0usize;
        while let Some(q) = stack.pop() {
            size += 1;
            for &dir in dirs {
                let Some(nb) = neighbor(q, dir, width, height) else {
                    continue;
                };
                if cells[nb] != 0 {
                    cells[nb] = 0;
                    stack.push(nb);
                }
            }
        }

        if cfg.include_singletons || size > 1 {
            count += 1;
        }
    }

    count
}

fn count_shapes_with_scan(grid: &BitGrid, cfg: &CountConfig, scan: Scan) -> usize {
    let mut count = 0usize;
    scan_shapes(grid, cfg.connectivity, scan, |size| {
        if cfg.include_singletons || size > 1 {
            count += 1;
        }
    });
    count
}

fn scan_shapes(
    grid: &BitGrid,
    connectivity: Connectivity,
    scan: Scan,
    mut on_shape: impl FnMut(usize),
) {
    let width = grid.width();
    let height = grid.height();
    let cells = grid.data();

    if cells.is_empty() || width == 0 {
        return;
    }

    let dirs = dirs_for(connectivity);
    let mut seen = vec![0u8; cells.len()];
    let mut stack = Vec::new();

    match scan {
        Scan::RowMajor => {
            for p in 0..cells.len() {
                if cells[p] != 0 && seen[p] == 0 {
                    on_shape(flood(p, cells, &mut seen, &mut stack, dirs, width, height));
                }
            }
        }
        Scan::ColMajor => {
            for x in 0..width {
                for y in 0..height {
                    let p = y * width + x;
                    if cells[p] != 0 && seen[p] == 0 {
                        on_shape(flood(p, cells, &mut seen, &mut stack, dirs, width, height));
                    }
                }
            }
        }
    }
}

/// Marks the whole shape seeded at `seed` in `seen` and returns its size.
fn flood(
    seed: usize,
    cells: &[u8],
    seen: &mut [u8],
    stack: &mut Vec<usize>,
    dirs: &[u8],
    width: usize,
    height: usize,
) -> usize {
    seen[seed] = 1;
    stack.clear();
    stack.push(seed);

    let mut size = 0usize;
    while let Some(p) = stack.pop() {
        size += 1;
        for &dir in dirs {
            let Some(nb) = neighbor(p, dir, width, height) else {
                continue;
            };
            if cells[nb] != 0 && seen[nb] == 0 {
                seen[nb] = 1;
                stack.push(nb);
            }
        }
    }

    size
}

pub(crate) fn dirs_for(connectivity: Connectivity) -> &'static [u8] {
    match connectivity {
        Connectivity::C4 => &DIRS_C4,
        Connectivity::C8 => &DIRS_C8,
    }
}

pub(crate) fn neighbor(p: usize, dir: u8, width: usize, height: usize) -> Option<usize> {
    let x = (p % width) as isize + DX[dir as usize];
    let y = (p / width) as isize + DY[dir as usize];

    if x < 0 || y < 0 || x >= width as isize || y >= height as isize {
        return None;
    }

    Some(y as usize * width + x as usize)
}

#[cfg(test)]
mod tests {
    use gs_grid::{BitGrid, parse_grid};

    use super::{
        Connectivity, CountConfig, Scan, count_shapes, count_shapes_in_place,
        count_shapes_with_scan, shape_sizes,
    };

    fn grid(rows: &[&str]) -> BitGrid {
        parse_grid(&rows.join("\n")).expect("valid grid text")
    }

    fn skip_singletons() -> CountConfig {
        CountConfig {
            include_singletons: false,
            ..CountConfig::default()
        }
    }

    #[test]
    fn empty_grid_has_no_shapes() {
        let g = BitGrid::from_vec(0, 0, Vec::new()).expect("valid grid");
        assert_eq!(count_shapes(&g, &CountConfig::default()), 0);

        let zero_width = BitGrid::from_vec(0, 3, Vec::new()).expect("valid grid");
        assert_eq!(count_shapes(&zero_width, &CountConfig::default()), 0);
    }

    #[test]
    fn all_zero_grid_has_no_shapes() {
        let g = BitGrid::new_fill(7, 5, 0);
        assert_eq!(count_shapes(&g, &CountConfig::default()), 0);
        assert_eq!(count_shapes(&g, &skip_singletons()), 0);
    }

    #[test]
    fn all_ones_grid_is_one_shape() {
        let g = BitGrid::new_fill(6, 4, 1);
        assert_eq!(count_shapes(&g, &CountConfig::default()), 1);
        assert_eq!(count_shapes(&g, &skip_singletons()), 1);
    }

    #[test]
    fn isolated_cell_policy() {
        let g = grid(&["000", "010", "000"]);
        assert_eq!(count_shapes(&g, &CountConfig::default()), 1);
        assert_eq!(count_shapes(&g, &skip_singletons()), 0);
    }

    #[test]
    fn checkerboard_counts_each_cell() {
        let mut data = vec![0u8; 5 * 4];
        for y in 0..4 {
            for x in 0..5 {
                if (x + y) % 2 == 0 {
                    data[y * 5 + x] = 1;
                }
            }
        }
        let g = BitGrid::from_vec(5, 4, data).expect("valid grid");

        assert_eq!(count_shapes(&g, &CountConfig::default()), g.count_ones());
        assert_eq!(count_shapes(&g, &skip_singletons()), 0);
    }

    #[test]
    fn l_shape_and_corner_cell() {
        let g = grid(&["110", "010", "001"]);
        assert_eq!(count_shapes(&g, &CountConfig::default()), 2);
        assert_eq!(count_shapes(&g, &skip_singletons()), 1);
    }

    #[test]
    fn four_isolated_corners() {
        let g = grid(&["101", "000", "101"]);
        assert_eq!(count_shapes(&g, &CountConfig::default()), 4);
        assert_eq!(count_shapes(&g, &skip_singletons()), 0);
    }

    #[test]
    fn diagonal_contact_depends_on_connectivity() {
        let g = grid(&["10", "01"]);
        assert_eq!(count_shapes(&g, &CountConfig::default()), 2);

        let c8 = CountConfig {
            connectivity: Connectivity::C8,
            include_singletons: true,
        };
        assert_eq!(count_shapes(&g, &c8), 1);
    }

    #[test]
    fn count_is_invariant_to_scan_order() {
        let grids = [
            grid(&["110", "010", "001"]),
            grid(&["101", "000", "101"]),
            grid(&["1101101", "1000101", "1110011", "0000000", "1011011"]),
            BitGrid::new_fill(9, 9, 1),
        ];

        for g in &grids {
            for cfg in [CountConfig::default(), skip_singletons()] {
                assert_eq!(
                    count_shapes_with_scan(g, &cfg, Scan::RowMajor),
                    count_shapes_with_scan(g, &cfg, Scan::ColMajor),
                );
            }
        }
    }

    #[test]
    fn counting_does_not_mutate_the_grid() {
        let g = grid(&["110", "010", "001"]);
        let before = g.clone();

        let first = count_shapes(&g, &CountConfig::default());
        let second = count_shapes(&g, &CountConfig::default());

        assert_eq!(first, second);
        assert_eq!(g, before);
    }

    #[test]
    fn shape_sizes_partition_the_ones() {
        let g = grid(&["110", "010", "001"]);
        let sizes = shape_sizes(&g, &CountConfig::default());

        assert_eq!(sizes, vec![3, 1]);
        assert_eq!(sizes.iter().sum::<usize>(), g.count_ones());

        assert_eq!(shape_sizes(&g, &skip_singletons()), vec![3]);
    }

    #[test]
    fn in_place_variant_matches_and_consumes() {
        let g = grid(&["1101", "0101", "0011"]);
        let expected = count_shapes(&g, &CountConfig::default());

        let mut consumed = g.clone();
        assert_eq!(count_shapes_in_place(&mut consumed, &CountConfig::default()), expected);
        assert!(consumed.data().iter().all(|&v| v == 0));
    }

    #[test]
    fn wide_snake_exceeds_any_recursion_comfort() {
        // One serpentine shape threading a 401x101 grid; a recursive fill
        // would need a traversal depth on the order of the cell count.
        let width = 401;
        let height = 101;
        let mut data = vec![0u8; width * height];
        for y in (0..height).step_by(2) {
            for x in 0..width {
                data[y * width + x] = 1;
            }
        }
        for (i, y) in (1..height).step_by(2).enumerate() {
            let x = if i % 2 == 0 { width - 1 } else { 0 };
            data[y * width + x] = 1;
        }
        let g = BitGrid::from_vec(width, height, data).expect("valid grid");

        assert_eq!(count_shapes(&g, &CountConfig::default()), 1);
    }
}
