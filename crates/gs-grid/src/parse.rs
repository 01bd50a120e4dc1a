use crate::{BitGrid, Error};

/// Parses the line-per-row text format into a [`BitGrid`].
///
/// Each line is a run of `0`/`1` digits. Whitespace surrounding the whole
/// text and trailing whitespace on each line (including CR from CRLF files)
/// are trimmed. Blank input yields a 0x0 grid; ragged rows and characters
/// other than `0`/`1` are errors.
pub fn parse_grid(text: &str) -> Result<BitGrid, Error> {
    let body = text.trim_matches(|c: char| c.is_ascii_whitespace());
    if body.is_empty() {
        return Ok(BitGrid::new_fill(0, 0, 0));
    }

    let mut width = 0usize;
    let mut height = 0usize;
    let mut data = Vec::new();

    for (row, line) in body.lines().enumerate() {
        let line = line.trim_end();
        if row == 0 {
            width = line.len();
        } else if line.len() != width {
            return Err(Error::RaggedRow {
                row,
                expected: width,
                actual: line.len(),
            });
        }

        for (col, ch) in line.chars().enumerate() {
            match ch {
                '0' => data.push(0),
                '1' => data.push(1),
                _ => return Err(Error::NonBinaryChar { row, col, ch }),
            }
        }

        height += 1;
    }

    Ok(BitGrid::from_vec(width, height, data).expect("parsed rows are rectangular and binary"))
}
