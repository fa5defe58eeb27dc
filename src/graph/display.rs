use std::fmt::{self, Display, Write};

use crate::data_structures::SquareMatrix;
use crate::graph::matrix::AdjacencyMatrix;
use crate::graph::weight::EdgeWeight;

/// Width of one rendered cell
const CELL_WIDTH: usize = 3;

/// Rendering used for sentinel cells
pub const INFINITY_SYMBOL: &str = "oo";

/// Renders a weight or distance matrix, one row per line, `oo` for sentinels
pub fn render_weights<W: EdgeWeight>(matrix: &SquareMatrix<W>) -> String {
    render_with(matrix, |cell, out| {
        if cell.is_sentinel() {
            write!(out, "{:<width$}", INFINITY_SYMBOL, width = CELL_WIDTH)
        } else {
            write!(out, "{:<width$}", cell, width = CELL_WIDTH)
        }
    })
}

/// Renders any matrix whose cells implement `Display` (e.g. split points)
pub fn render_cells<T: Display>(matrix: &SquareMatrix<T>) -> String {
    render_with(matrix, |cell, out| {
        write!(out, "{:<width$}", cell, width = CELL_WIDTH)
    })
}

fn render_with<T, F>(matrix: &SquareMatrix<T>, mut cell: F) -> String
where
    F: FnMut(&T, &mut String) -> fmt::Result,
{
    let mut out = String::new();
    for row in matrix.rows() {
        for value in row {
            // Writing into a String cannot fail
            let _ = cell(value, &mut out);
        }
        out.push('\n');
    }
    out
}

impl<W> Display for AdjacencyMatrix<W>
where
    W: EdgeWeight,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_weights(self.as_matrix()))
    }
}
