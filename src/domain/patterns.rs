//! Seed patterns - rectangular 0/1 matrices handed to `Field::setup`.
//!
//! A pattern is centred on the origin when loaded, so the matrix only has to
//! describe the shape. Built-in seeds are listed as (row, col) live cells.

use serde::Deserialize;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    name: String,
    width: usize,
    height: usize,
    cells: Vec<u8>,
}

struct BuiltinPattern {
    name: &'static str,
    width: usize,
    height: usize,
    cells: &'static [(usize, usize)],
}

const BUILTINS: &[BuiltinPattern] = &[
    BuiltinPattern {
        name: "block",
        width: 4,
        height: 4,
        cells: &[(1, 1), (1, 2), (2, 1), (2, 2)],
    },
    BuiltinPattern {
        name: "blinker",
        width: 5,
        height: 5,
        cells: &[(2, 1), (2, 2), (2, 3)],
    },
    BuiltinPattern {
        name: "toad",
        width: 4,
        height: 4,
        cells: &[(1, 1), (1, 2), (1, 3), (2, 0), (2, 1), (2, 2)],
    },
    BuiltinPattern {
        name: "beacon",
        width: 4,
        height: 4,
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
    },
    BuiltinPattern {
        name: "glider",
        width: 3,
        height: 3,
        cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
    },
    BuiltinPattern {
        name: "double-glider",
        width: 7,
        height: 10,
        cells: &[(1, 1), (1, 2), (2, 1), (2, 3), (3, 1), (6, 4), (7, 5), (8, 3), (8, 4), (8, 5)],
    },
    BuiltinPattern {
        name: "r-pentomino",
        width: 3,
        height: 3,
        cells: &[(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)],
    },
    BuiltinPattern {
        name: "gosper-glider-gun",
        width: 36,
        height: 9,
        cells: &[
            (4, 0), (4, 1), (5, 0), (5, 1),
            (4, 10), (5, 10), (6, 10), (3, 11), (7, 11), (2, 12), (8, 12),
            (2, 13), (8, 13), (5, 14), (3, 15), (7, 15), (4, 16), (5, 16),
            (6, 16), (5, 17), (2, 20), (3, 20), (4, 20), (2, 21), (3, 21),
            (4, 21), (1, 22), (5, 22), (0, 24), (1, 24), (5, 24), (6, 24),
            (2, 34), (3, 34), (2, 35), (3, 35),
        ],
    },
];

/// JSON shape: `{ "name": "glider", "rows": [[0,1,0],[0,0,1],[1,1,1]] }`.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PatternFile {
    #[serde(default)]
    name: Option<String>,
    rows: Vec<Vec<u8>>,
}

/// Random number generator (xorshift32)
#[inline]
fn xorshift32(state: &mut u32) -> u32 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}

/// Largest pattern accepted, in cells. Keeps every row and column index
/// inside `i32` when the pattern is centred on the plane.
pub const MAX_PATTERN_CELLS: usize = 1 << 24;

/// `width * height`, refused when empty or above [`MAX_PATTERN_CELLS`].
fn checked_area(width: usize, height: usize) -> Result<usize, String> {
    if width == 0 || height == 0 {
        return Err("pattern is empty".to_string());
    }
    width
        .checked_mul(height)
        .filter(|&n| n <= MAX_PATTERN_CELLS)
        .ok_or_else(|| format!("pattern {width}x{height} exceeds {MAX_PATTERN_CELLS} cells"))
}

impl Pattern {
    /// Build from row-major rows. Rows must be non-empty, equally long and
    /// hold only 0 or 1.
    pub fn from_rows(name: impl Into<String>, rows: Vec<Vec<u8>>) -> Result<Self, String> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        let area = checked_area(width, height)?;

        let mut cells = Vec::with_capacity(area);
        for (y, row) in rows.into_iter().enumerate() {
            if row.len() != width {
                return Err(format!(
                    "pattern row {} has {} cells, expected {}",
                    y,
                    row.len(),
                    width
                ));
            }
            if let Some(x) = row.iter().position(|&c| c > 1) {
                return Err(format!("pattern cell ({}, {}) is {}, expected 0 or 1", y, x, row[x]));
            }
            cells.extend(row);
        }

        Ok(Self { name: name.into(), width, height, cells })
    }

    /// Build from (row, col) live cells inside a `width x height` box.
    pub fn from_cells(
        name: impl Into<String>,
        width: usize,
        height: usize,
        live: &[(usize, usize)],
    ) -> Result<Self, String> {
        let mut cells = vec![0u8; checked_area(width, height)?];
        for &(row, col) in live {
            if row >= height || col >= width {
                return Err(format!(
                    "cell ({}, {}) outside {}x{} pattern",
                    row, col, width, height
                ));
            }
            cells[row * width + col] = 1;
        }
        Ok(Self { name: name.into(), width, height, cells })
    }

    pub fn from_json(json: &str) -> Result<Self, String> {
        let file: PatternFile = serde_json::from_str(json).map_err(|e| e.to_string())?;
        Self::from_rows(file.name.unwrap_or_else(|| "custom".to_string()), file.rows)
    }

    pub fn builtin(name: &str) -> Option<Self> {
        let b = BUILTINS.iter().find(|b| b.name == name)?;
        Self::from_cells(b.name, b.width, b.height, b.cells).ok()
    }

    pub fn builtin_names() -> Vec<&'static str> {
        BUILTINS.iter().map(|b| b.name).collect()
    }

    /// Roughly one cell in three alive. Same seed, same pattern.
    pub fn random(width: usize, height: usize, seed: u32) -> Result<Self, String> {
        let area = checked_area(width, height)?;
        let mut state = if seed == 0 { 12345 } else { seed };
        let cells = (0..area)
            .map(|_| (xorshift32(&mut state) % 3 == 0) as u8)
            .collect();
        Ok(Self {
            name: format!("random-{seed}"),
            width,
            height,
            cells,
        })
    }

    pub fn name(&self) -> &str { &self.name }

    pub fn width(&self) -> usize { self.width }

    pub fn height(&self) -> usize { self.height }

    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        if row >= self.height || col >= self.width {
            return None;
        }
        Some(self.cells[row * self.width + col])
    }

    /// (row, col) of every live cell, row by row.
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c != 0)
            .map(move |(i, _)| (i / width, i % width))
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != 0).count()
    }
}
