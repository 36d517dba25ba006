//! Load
//! ---
//!
//! Reads line based run files into runs registered against a task's collections.
//! Lines are parsed in parallel batches and grouped sequentially: a new run starts
//! whenever the query id changes, so records must be contiguous per query.
extern crate log;
extern crate rayon;

use self::rayon::prelude::*;

use std::fs::File;
use std::io::{BufRead, BufReader};

use ir_core::{Run, ScoredDocument, Task};

use crate::error::LoadError;
use crate::types::{Record, RunFormat};

/// Hard code buffersize for now
static BUFFER_SIZE: usize = 1000;

fn parse_line<F: RunFormat>(fmt: &F, line: &str) -> Result<Option<Record>, String> {
    if line.trim().is_empty() {
        Ok(None)
    } else {
        fmt.parse_line(line).map(Some)
    }
}

fn start_run<F: RunFormat>(fmt: &F, record: &Record, task: &mut Task) -> Run {
    let query = task.query(&record.query);
    let system = match record.system {
        Some(ref system) => task.system(system),
        None => task.system(fmt.default_system()),
    };
    Run::new(query, system)
}

/// Reads every run from `reader`, interning ids through `task`.  The runs are
/// returned in file order and are not registered.
pub fn read_runs<F: RunFormat, R: BufRead>(
    fmt: &F,
    reader: R,
    task: &mut Task,
) -> Result<Vec<Run>, LoadError> {
    let mut runs = Vec::new();
    let mut current: Option<Run> = None;
    let mut buffer = Vec::with_capacity(BUFFER_SIZE);
    let mut tmp_results = Vec::with_capacity(BUFFER_SIZE);
    let mut line_offset = 0;
    let mut it = reader.lines();
    loop {
        buffer.clear();
        for _ in 0..BUFFER_SIZE {
            match it.next() {
                Some(line) => buffer.push(line?),
                None => break,
            }
        }
        if buffer.is_empty() {
            break;
        }

        tmp_results.clear();
        // Parse in parallel
        buffer
            .par_iter()
            .map(|l| parse_line(fmt, l))
            .collect_into_vec(&mut tmp_results);

        for (i, res) in tmp_results.drain(..).enumerate() {
            let record = match res {
                Ok(Some(record)) => record,
                Ok(None) => continue,
                Err(reason) => {
                    return Err(LoadError::Format {
                        line_number: line_offset + i + 1,
                        line: buffer[i].clone(),
                        reason,
                    })
                }
            };

            let same_query = current
                .as_ref()
                .map_or(false, |run| run.query().id() == record.query);

            if !same_query {
                if let Some(run) = current.take() {
                    runs.push(run);
                }
                current = Some(start_run(fmt, &record, task));
            }

            if let Some(run) = current.as_mut() {
                if fmt.accepts(run.len(), &record) {
                    let document = task.document(&record.document);
                    match record.rank {
                        Some(rank) => run.insert(ScoredDocument::new(document, record.score, rank)),
                        None => run.push(document, record.score),
                    }
                }
            }
        }
        line_offset += buffer.len();
    }

    if let Some(run) = current {
        runs.push(run);
    }
    runs.shrink_to_fit();
    Ok(runs)
}

/// Given a file path, reads its runs
pub fn read_runs_from_path<F: RunFormat>(
    fmt: &F,
    fname: &str,
    task: &mut Task,
) -> Result<Vec<Run>, LoadError> {
    log::info!("Loading runs from {}", fname);
    let f = File::open(fname)?;
    let runs = read_runs(fmt, BufReader::new(f), task)?;
    log::info!("Read {} runs from {}", runs.len(), fname);
    for run in runs.iter() {
        log::debug!(
            "System {} query {}: {} results",
            run.system(),
            run.query(),
            run.len()
        );
    }
    Ok(runs)
}
