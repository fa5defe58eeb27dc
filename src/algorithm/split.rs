use std::fmt;

use serde::Serialize;

/// Entry of the path matrix `P`
///
/// `SplitAt(k)` records the last vertex `k` whose relaxation
/// `D[i][k] + D[k][j] < D[i][j]` improved the pair. It is a split point for
/// recursive reconstruction, not the immediate predecessor of `j`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum SplitPoint {
    /// The best known path is the direct edge (or the pair is unreachable)
    #[default]
    NoIntermediate,
    /// The best known path passes through this vertex
    SplitAt(usize),
}

impl SplitPoint {
    /// Returns the split vertex, if any
    pub fn vertex(self) -> Option<usize> {
        match self {
            SplitPoint::NoIntermediate => None,
            SplitPoint::SplitAt(k) => Some(k),
        }
    }
}

/// Renders `-1` for `NoIntermediate`, honouring width and alignment flags
impl fmt::Display for SplitPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SplitPoint::NoIntermediate => fmt::Display::fmt(&-1i64, f),
            SplitPoint::SplitAt(k) => fmt::Display::fmt(k, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_path_matrix_convention() {
        assert_eq!(format!("{:<3}|", SplitPoint::NoIntermediate), "-1 |");
        assert_eq!(format!("{:<3}|", SplitPoint::SplitAt(4)), "4  |");
    }

    #[test]
    fn vertex_unwraps_split() {
        assert_eq!(SplitPoint::SplitAt(2).vertex(), Some(2));
        assert_eq!(SplitPoint::default().vertex(), None);
    }
}
