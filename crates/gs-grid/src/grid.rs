use crate::Error;

/// Owned rectangular grid of binary cells in row-major order.
///
/// Every cell is `0` or `1`. Constructors validate both the shape and the
/// cell values; code holding a `BitGrid` can rely on the invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitGrid {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl BitGrid {
    pub fn from_vec(width: usize, height: usize, data: Vec<u8>) -> Result<Self, Error> {
        let expected = width.checked_mul(height).ok_or(Error::SizeMismatch {
            expected: usize::MAX,
            actual: data.len(),
        })?;

        if data.len() != expected {
            return Err(Error::SizeMismatch {
                expected,
                actual: data.len(),
            });
        }

        for (i, &value) in data.iter().enumerate() {
            if value > 1 {
                return Err(Error::NonBinaryCell {
                    x: i % width,
                    y: i / width,
                    value,
                });
            }
        }

        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Builds a grid from row slices, rejecting ragged input.
    ///
    /// The width is taken from the first row; an empty slice yields a 0x0
    /// grid.
    pub fn from_rows(rows: &[Vec<u8>]) -> Result<Self, Error> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);

        let mut data = Vec::with_capacity(width.saturating_mul(height));
        for (y, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(Error::RaggedRow {
                    row: y,
                    expected: width,
                    actual: row.len(),
                });
            }

            for (x, &value) in row.iter().enumerate() {
                if value > 1 {
                    return Err(Error::NonBinaryCell { x, y, value });
                }
            }

            data.extend_from_slice(row);
        }

        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn new_fill(width: usize, height: usize, value: u8) -> Self {
        assert!(value <= 1, "cell values must be 0 or 1");
        let len = width.checked_mul(height).expect("grid size overflow");
        Self {
            width,
            height,
            data: vec![value; len],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Mutable access to the raw cells.
    ///
    /// Callers must keep every cell `0` or `1`.
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn row(&self, y: usize) -> &[u8] {
        assert!(y < self.height, "row index out of bounds");
        let start = y * self.width;
        &self.data[start..start + self.width]
    }

    pub fn get(&self, x: usize, y: usize) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[y * self.width + x])
    }

    /// Number of 1-cells in the grid.
    pub fn count_ones(&self) -> usize {
        self.data.iter().filter(|&&v| v == 1).count()
    }
}
