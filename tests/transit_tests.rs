use std::io::Cursor;

use transit_sssp::benchmark::{render_latex, render_table, run_benchmarks, BenchmarkReport};
use transit_sssp::graph::sampling::{prefix_subgraph, prefix_subgraphs};
use transit_sssp::graph::{DirectedGraph, Graph, MutableGraph};
use transit_sssp::transit::{load_stop_times, parse_stop_times};
use transit_sssp::{dijkstra, Error, QueueKind};

const STOP_TIMES: &str = "\
trip_id,arrival_time,departure_time,stop_id,stop_sequence
T1,08:00:00,08:00:00,S1,1
T1,08:05:00,08:05:30,S2,2
T1,08:12:00,08:12:00,S3,3
T2,09:00:00,09:00:00,S2,1
T2,09:04:00,09:04:00,S4,2
";

#[test]
fn test_parse_builds_undirected_trip_graph() {
    let graph = parse_stop_times(Cursor::new(STOP_TIMES)).unwrap();

    let labels: Vec<&str> = graph.vertices().iter().map(String::as_str).collect();
    assert_eq!(labels, vec!["S1", "S2", "S3", "S4"]);
    assert_eq!(graph.edge_count(), 6);

    let s = |id: &str| id.to_string();
    assert_eq!(graph.get_edge_weight(&s("S1"), &s("S2")), Some(300.0));
    assert_eq!(graph.get_edge_weight(&s("S2"), &s("S1")), Some(300.0));
    assert_eq!(graph.get_edge_weight(&s("S2"), &s("S3")), Some(420.0));
    assert_eq!(graph.get_edge_weight(&s("S4"), &s("S2")), Some(240.0));
    assert!(!graph.has_edge(&s("S1"), &s("S3")));

    let result = dijkstra(&graph, &s("S1"), QueueKind::Fibonacci).unwrap();
    let distances = result.distance_map(&graph);
    assert_eq!(distances["S3"], 720.0);
    assert_eq!(distances["S4"], 540.0);
}

#[test]
fn test_trips_are_ordered_by_stop_sequence() {
    let data = "\
trip_id,stop_id,stop_sequence,arrival_time
T9,C,3,10:20:00
T9,A,1,10:00:00
T9,B,2,10:10:00
";
    let graph = parse_stop_times(Cursor::new(data)).unwrap();
    let labels: Vec<&str> = graph.vertices().iter().map(String::as_str).collect();
    assert_eq!(labels, vec!["A", "B", "C"]);
    assert_eq!(graph.get_edge_weight(&"B".to_string(), &"C".to_string()), Some(600.0));
}

#[test]
fn test_file_order_without_stop_sequence() {
    let data = "\u{feff}\"trip_id\",\"stop_id\",\"arrival_time\"\r\n\
\"T1\",\"Gare, Nord\",23:50:00\r\n\
\r\n\
\"T1\",\"Parc\",24:05:00\r\n";
    let graph = parse_stop_times(Cursor::new(data)).unwrap();
    assert_eq!(
        graph.get_edge_weight(&"Gare, Nord".to_string(), &"Parc".to_string()),
        Some(900.0)
    );
}

#[test]
fn test_missing_arrival_times_are_skipped() {
    let data = "\
trip_id,stop_id,arrival_time
T1,A,08:00:00
T1,B,
T1,C,08:10:00
";
    let graph = parse_stop_times(Cursor::new(data)).unwrap();
    assert!(!graph.has_vertex(&"B".to_string()));
    assert_eq!(graph.get_edge_weight(&"A".to_string(), &"C".to_string()), Some(600.0));
}

#[test]
fn test_parse_errors() {
    let missing = parse_stop_times(Cursor::new("trip_id,stop_id\nT1,A\n"));
    assert!(matches!(missing, Err(Error::MissingColumn("arrival_time"))));

    let empty = parse_stop_times(Cursor::new(""));
    assert!(matches!(empty, Err(Error::MissingColumn(_))));

    let bad_time = parse_stop_times(Cursor::new("trip_id,stop_id,arrival_time\nT1,A,8h00\n"));
    assert!(matches!(bad_time, Err(Error::Parse { line: 2, .. })));

    let short_row = parse_stop_times(Cursor::new("trip_id,stop_id,arrival_time\nT1,A,08:00:00\nT1\n"));
    assert!(matches!(short_row, Err(Error::Parse { line: 3, .. })));

    let missing_file = load_stop_times("/nonexistent/stop_times.txt");
    assert!(matches!(missing_file, Err(Error::Io(_))));
}

#[test]
fn test_prefix_subgraph_keeps_inner_edges() {
    let mut graph: DirectedGraph<char, f64> = DirectedGraph::new();
    graph.add_undirected_edge('a', 'b', 1.0);
    graph.add_undirected_edge('b', 'c', 2.0);
    graph.add_undirected_edge('a', 'c', 5.0);
    graph.add_vertex('d');

    let sub = prefix_subgraph(&graph, 2);
    assert_eq!(sub.vertices(), &['a', 'b']);
    assert_eq!(sub.edge_count(), 2);
    assert_eq!(sub.get_edge_weight(&'a', &'b'), Some(1.0));
    assert!(!sub.has_vertex(&'c'));

    let all = prefix_subgraphs(&graph, &[0, 3, 100]);
    assert_eq!(all.len(), 3);
    assert_eq!(all[0].1.vertex_count(), 0);
    assert_eq!(all[1].1.edge_count(), 6);
    assert_eq!(all[2].0, 4);
    assert_eq!(all[2].1.vertex_count(), 4);
}

#[test]
fn test_prefix_subgraphs_collapse_oversized_requests() {
    let graph = parse_stop_times(Cursor::new(STOP_TIMES)).unwrap();

    let all = prefix_subgraphs(&graph, &[2, 10, 4, 500, 2]);
    let sizes: Vec<usize> = all.iter().map(|(size, _)| *size).collect();
    assert_eq!(sizes, vec![2, 4]);
    assert_eq!(all[1].1.vertex_count(), 4);
}

#[test]
fn test_benchmark_rows_and_rendering() {
    let graph = parse_stop_times(Cursor::new(STOP_TIMES)).unwrap();
    let subgraphs = prefix_subgraphs(&graph, &[0, 2, 4]);

    let rows = run_benchmarks(&subgraphs, true).unwrap();
    // The empty subgraph is skipped
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].size, 2);
    assert_eq!(rows[0].vertices, 2);
    assert_eq!(rows[0].edges, 1);
    assert_eq!(rows[1].edges, 3);
    assert_eq!(rows[1].reachable, 4);
    assert!(rows.iter().all(|row| row.bellman_ford_secs.is_some()));

    let table = render_table(&rows);
    assert_eq!(table.lines().count(), 4);
    assert!(table.contains("Fibonacci"));

    let latex = render_latex(&rows);
    assert!(latex.starts_with("\\begin{table}"));
    assert!(latex.contains("\\end{tabular}"));
    assert_eq!(latex.matches(" \\\\\n\\hline").count(), 3);

    let without_bf = run_benchmarks(&subgraphs, false).unwrap();
    assert!(without_bf.iter().all(|row| row.bellman_ford_secs.is_none()));
    assert!(render_latex(&without_bf).contains("N/A"));

    let json = serde_json::to_value(BenchmarkReport::new(without_bf)).unwrap();
    assert_eq!(json["rows"].as_array().map(Vec::len), Some(2));
    assert!(json["rows"][0].get("bellman_ford_secs").is_none());
    assert!(json["generated_at"].is_string());
}

#[test]
fn test_benchmark_skips_trips_running_back_in_time() {
    let data = "\
trip_id,arrival_time,stop_id
T1,08:05:00,S1
T1,08:00:00,S2
";
    let graph = parse_stop_times(Cursor::new(data)).unwrap();
    assert_eq!(graph.get_edge_weight(&"S1".to_string(), &"S2".to_string()), Some(-300.0));
    assert!(graph.has_negative_weights());

    let subgraphs = prefix_subgraphs(&graph, &[1, 2]);
    let rows = run_benchmarks(&subgraphs, true).unwrap();
    // Only the single-stop prefix has no negative edge
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].size, 1);
    assert_eq!(rows[0].reachable, 1);
}
