use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, info, warn};

use crate::graph::{DirectedGraph, Graph, MutableGraph};
use crate::{Error, Result};

#[derive(Debug, Clone)]
struct StopTime {
    stop_id: String,
    arrival: i64,
    sequence: Option<u32>,
}

/// Loads a GTFS `stop_times.txt` file into an undirected stop graph
pub fn load_stop_times<P: AsRef<Path>>(path: P) -> Result<DirectedGraph<String, f64>> {
    let path = path.as_ref();
    info!("Loading stop times from {}", path.display());
    let file = File::open(path)?;
    parse_stop_times(BufReader::new(file))
}

/// Builds a stop graph from GTFS `stop_times` CSV data
///
/// Rows are grouped by `trip_id` in order of first appearance; each trip is
/// ordered by `stop_sequence` when that column exists, by file order
/// otherwise. Consecutive stops of a trip are joined in both directions with
/// the arrival-time difference in seconds as weight.
pub fn parse_stop_times<R: BufRead>(reader: R) -> Result<DirectedGraph<String, f64>> {
    let mut lines = reader.lines().enumerate();

    let header = loop {
        match lines.next() {
            Some((_, line)) => {
                let line = line?;
                if !line.trim().is_empty() {
                    break line;
                }
            }
            None => return Err(Error::MissingColumn("trip_id")),
        }
    };
    let columns = split_csv_line(header.trim_start_matches('\u{feff}')).map_err(|message| {
        Error::Parse { line: 1, message }
    })?;
    let column = |name: &'static str| {
        columns
            .iter()
            .position(|c| c.trim() == name)
            .ok_or(Error::MissingColumn(name))
    };
    let trip_col = column("trip_id")?;
    let stop_col = column("stop_id")?;
    let arrival_col = column("arrival_time")?;
    let sequence_col = column("stop_sequence").ok();

    let mut trips: Vec<Vec<StopTime>> = Vec::new();
    let mut trip_index: HashMap<String, usize> = HashMap::new();
    let mut skipped = 0usize;

    for (index, line) in lines {
        let line = line?;
        let line_no = index + 1;
        if line.trim().is_empty() {
            continue;
        }

        let fields = split_csv_line(&line).map_err(|message| Error::Parse {
            line: line_no,
            message,
        })?;

        let arrival = field(&fields, arrival_col, line_no)?;
        if arrival.is_empty() {
            // Non-timepoint stops carry no arrival time
            skipped += 1;
            continue;
        }
        let arrival = parse_time(arrival).ok_or_else(|| Error::Parse {
            line: line_no,
            message: format!("invalid arrival_time {:?}", arrival),
        })?;

        let sequence = match sequence_col {
            Some(col) => {
                let raw = field(&fields, col, line_no)?;
                Some(raw.parse::<u32>().map_err(|_| Error::Parse {
                    line: line_no,
                    message: format!("invalid stop_sequence {:?}", raw),
                })?)
            }
            None => None,
        };

        let trip_id = field(&fields, trip_col, line_no)?;
        let stop_id = field(&fields, stop_col, line_no)?.to_string();

        let slot = match trip_index.get(trip_id) {
            Some(&slot) => slot,
            None => {
                trip_index.insert(trip_id.to_string(), trips.len());
                trips.push(Vec::new());
                trips.len() - 1
            }
        };
        trips[slot].push(StopTime {
            stop_id,
            arrival,
            sequence,
        });
    }

    if skipped > 0 {
        warn!("Skipped {} stop times without an arrival time", skipped);
    }

    let mut graph: DirectedGraph<String, f64> = DirectedGraph::new();
    let mut backwards = 0usize;
    for trip in &mut trips {
        if sequence_col.is_some() {
            trip.sort_by_key(|stop| stop.sequence);
        }
        for pair in trip.windows(2) {
            let (current, next) = (&pair[0], &pair[1]);
            let weight = next.arrival - current.arrival;
            if weight < 0 {
                backwards += 1;
            }
            graph.add_undirected_edge(current.stop_id.clone(), next.stop_id.clone(), weight as f64);
        }
    }

    if backwards > 0 {
        debug!("{} consecutive stop pairs go back in time", backwards);
    }
    info!(
        "Loaded {} trips over {} stops ({} directed edges)",
        trips.len(),
        graph.vertex_count(),
        graph.edge_count()
    );

    Ok(graph)
}

/// Parses a GTFS `H:MM:SS` time into seconds since the start of the service day
///
/// Hours may exceed 23 for trips running past midnight.
pub fn parse_time(value: &str) -> Option<i64> {
    let mut parts = value.trim().split(':');
    let hours: i64 = parts.next()?.parse().ok()?;
    let minutes: i64 = parts.next()?.parse().ok()?;
    let seconds: i64 = parts.next()?.parse().ok()?;
    if parts.next().is_some() || hours < 0 || !(0..60).contains(&minutes) || !(0..60).contains(&seconds) {
        return None;
    }
    Some(hours * 3600 + minutes * 60 + seconds)
}

fn field(fields: &[String], col: usize, line: usize) -> Result<&str> {
    fields
        .get(col)
        .map(|f| f.trim())
        .ok_or_else(|| Error::Parse {
            line,
            message: format!("expected at least {} fields, found {}", col + 1, fields.len()),
        })
}

/// Splits one CSV record, honouring double quotes and `""` escapes
fn split_csv_line(line: &str) -> std::result::Result<Vec<String>, String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.trim_end_matches('\r').chars().peekable();

    while let Some(c) = chars.next() {
        match (c, in_quotes) {
            ('"', true) if chars.peek() == Some(&'"') => {
                chars.next();
                current.push('"');
            }
            ('"', true) => in_quotes = false,
            ('"', false) if current.is_empty() => in_quotes = true,
            (',', false) => fields.push(std::mem::take(&mut current)),
            (c, _) => current.push(c),
        }
    }

    if in_quotes {
        return Err("unterminated quoted field".to_string());
    }
    fields.push(current);
    Ok(fields)
}
