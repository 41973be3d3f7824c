//! Page layout cursor: places diagrams left to right, top to bottom.

use serde::{Deserialize, Serialize};

/// Running position of the next diagram on a page.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LayoutCursor {
    pub x: f64,
    pub y: f64,
    left: f64,
    /// Tallest diagram placed in the current row.
    row_height: f64,
    /// Height of the last finished row.
    last_row_height: f64,
}

impl LayoutCursor {
    pub fn new(left: f64, top: f64) -> Self {
        Self {
            x: left,
            y: top,
            left,
            row_height: 0.0,
            last_row_height: 0.0,
        }
    }

    /// Reserves a `width` × `height` box at the cursor and returns its origin.
    pub fn place(&mut self, width: f64, height: f64) -> (f64, f64) {
        let origin = (self.x, self.y);
        self.x += width;
        self.row_height = self.row_height.max(height);
        origin
    }

    /// Moves to the left margin below the current row.
    pub fn next_row(&mut self) {
        self.x = self.left;
        self.y += self.row_height;
        self.last_row_height = self.row_height;
        self.row_height = 0.0;
    }

    pub fn row_height(&self) -> f64 {
        self.row_height
    }

    pub fn last_row_height(&self) -> f64 {
        self.last_row_height
    }
}
