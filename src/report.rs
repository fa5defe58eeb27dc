//! Serializable summary of a solved graph, consumed by the CLI

use serde::Serialize;

use crate::algorithm::AllPairsResult;
use crate::graph::EdgeWeight;
use crate::Result;

/// One reachable ordered pair and its path
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathEntry<W> {
    #[serde(rename = "source")]
    pub from: usize,
    #[serde(rename = "destination")]
    pub to: usize,
    pub distance: W,
    /// Full vertex sequence, endpoints included
    pub vertices: Vec<usize>,
}

/// Distance table and path list for a whole graph
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathReport<W> {
    pub vertex_count: usize,
    pub directed: bool,
    /// Row-major distances, `None` for unreachable pairs
    pub distances: Vec<Vec<Option<W>>>,
    pub paths: Vec<PathEntry<W>>,
    /// Non-empty when the graph has a negative cycle
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub negative_cycle_vertices: Vec<usize>,
}

impl<W> PathReport<W>
where
    W: EdgeWeight + Serialize,
{
    /// Collects the report from a solved result
    pub fn from_result(result: &AllPairsResult<W>, directed: bool) -> Self {
        let distances = result
            .distances()
            .rows()
            .map(|row| {
                row.iter()
                    .map(|&d| if d.is_sentinel() { None } else { Some(d) })
                    .collect()
            })
            .collect();

        let paths = result
            .all_paths()
            .map(|path| PathEntry {
                from: path.from,
                to: path.to,
                distance: path.distance,
                vertices: path.vertices(),
            })
            .collect();

        PathReport {
            vertex_count: result.vertex_count(),
            directed,
            distances,
            paths,
            negative_cycle_vertices: result.negative_cycle_vertices(),
        }
    }

    /// Pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::FloydWarshall;
    use crate::graph::AdjacencyMatrix;
    use ordered_float::OrderedFloat;

    #[test]
    fn report_lists_reachable_pairs() {
        let g = AdjacencyMatrix::from_edges(3, [(0, 1, 2), (1, 2, 3)]).unwrap();
        let result = FloydWarshall::new().solve(&g).unwrap();
        let report = PathReport::from_result(&result, true);

        assert_eq!(report.distances[0], vec![Some(0), Some(2), Some(5)]);
        assert_eq!(report.distances[2], vec![None, None, Some(0)]);
        assert_eq!(report.paths.len(), 3);
        assert_eq!(report.paths[1].vertices, vec![0, 1, 2]);
    }

    #[test]
    fn json_uses_null_for_unreachable() {
        let g = AdjacencyMatrix::from_edges(2, [(0, 1, 4)]).unwrap();
        let result = FloydWarshall::new().solve(&g).unwrap();
        let json = PathReport::from_result(&result, true).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["distances"][1][0], serde_json::Value::Null);
        assert_eq!(value["paths"][0]["source"], 0);
        assert_eq!(value["paths"][0]["destination"], 1);
        assert_eq!(value["paths"][0]["distance"], 4);
        assert!(value["paths"][0].get("from").is_none());
        assert!(value.get("negative_cycle_vertices").is_none());
    }

    #[test]
    fn float_weights_serialize_as_numbers() {
        let g = AdjacencyMatrix::from_edges(
            3,
            [(0, 1, OrderedFloat(0.5)), (1, 2, OrderedFloat(1.25))],
        )
        .unwrap();
        let result = FloydWarshall::new().solve(&g).unwrap();
        let json = PathReport::from_result(&result, true).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["distances"][0][2], 1.75);
        assert_eq!(value["distances"][2][0], serde_json::Value::Null);
        assert_eq!(value["paths"][1]["distance"], 1.75);
        assert_eq!(value["paths"][1]["vertices"], serde_json::json!([0, 1, 2]));
    }
}
