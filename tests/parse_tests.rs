use std::fs;
use std::path::PathBuf;

use floyd_apsp::graph::display::{render_cells, render_weights};
use floyd_apsp::graph::{read_graph_file, Graph};
use floyd_apsp::report::PathReport;
use floyd_apsp::{Error, ShortestPathEngine};

const SAMPLE: &str = "D
4
from to weight
0 1 5
1 2 3
0 2 100
2 3 1
-1 -1 -1
";

// Test helper: write a graph file under the system temp dir
fn write_temp(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("floyd_apsp_{}_{}", std::process::id(), name));
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_file_round_trip_through_engine() {
    let path = write_temp("sample.txt", SAMPLE);
    let parsed = read_graph_file(&path).unwrap();
    fs::remove_file(&path).ok();

    assert!(parsed.directed);
    assert_eq!(parsed.graph.vertex_count(), 4);

    let mut engine = ShortestPathEngine::new(parsed.graph);
    let result = engine.solve().unwrap();

    assert_eq!(
        render_weights(result.distances()),
        "0  5  8  9  \noo 0  3  4  \noo oo 0  1  \noo oo oo 0  \n"
    );
    assert_eq!(
        render_cells(result.split_points()),
        "-1 -1 1  2  \n-1 -1 -1 2  \n-1 -1 -1 -1 \n-1 -1 -1 -1 \n"
    );

    let lines: Vec<String> = result.all_paths().map(|p| p.to_string()).collect();
    assert_eq!(
        lines,
        vec![
            "V0 --> V1",
            "V0 --> V1 --> V2",
            "V0 --> V1 --> V2 --> V3",
            "V1 --> V2",
            "V1 --> V2 --> V3",
            "V2 --> V3",
        ]
    );
}

#[test]
fn test_missing_file_is_io_error() {
    let path = std::env::temp_dir().join("floyd_apsp_does_not_exist.txt");
    assert!(matches!(read_graph_file(&path), Err(Error::Io(_))));
}

#[test]
fn test_report_json_from_file() {
    let path = write_temp("report.txt", "U\n3\n#\n0 1 2\n1 2 2\n-1 -1 -1\n");
    let parsed = read_graph_file(&path).unwrap();
    fs::remove_file(&path).ok();

    let mut engine = ShortestPathEngine::new(parsed.graph);
    let result = engine.solve().unwrap();
    let report = PathReport::from_result(result, parsed.directed);

    assert!(!report.directed);
    assert_eq!(report.paths.len(), 6);
    let json = report.to_json().unwrap();
    assert!(json.contains("\"directed\": false"));
}
