extern crate ir_core;
extern crate ir_data;
extern crate log;

use self::ir_core::{Evaluator, Task};
use self::ir_data::{read_runs_from_path, EirexRun, LoadError, TrecQrels, TrecRun};

use crate::bin_utils::args::{RunFileFormat, TaskMeta};
use crate::load::{default_evaluators, read_config, ConfigError};

/// Reads the qrels and every run file into a new task
pub fn build_task(meta: &TaskMeta) -> Result<Task, LoadError> {
    let now = std::time::Instant::now();
    let mut task = Task::new(&meta.qrels);

    let qrels = read_runs_from_path(&TrecQrels, &meta.qrels, &mut task)?;
    task.add_ground_truths(qrels);

    for fname in meta.runs.iter() {
        let runs = match meta.format {
            RunFileFormat::Trec => {
                read_runs_from_path(&TrecRun::new(meta.max_results), fname, &mut task)?
            }
            RunFileFormat::Eirex => read_runs_from_path(&EirexRun, fname, &mut task)?,
        };
        task.add_system_runs(runs);
    }

    log::info!(
        "Loaded {} queries, {} systems and {} runs in {:?}",
        task.queries().len(),
        task.systems().len(),
        task.num_runs(),
        now.elapsed()
    );
    Ok(task)
}

/// Loads the evaluators from the config, or the default set without one
pub fn load_evaluators(config: &Option<String>) -> Result<Vec<Box<dyn Evaluator>>, ConfigError> {
    match config {
        Some(ref fname) => {
            log::info!("Reading evaluation config at {}", fname);
            read_config(fname)
        }
        None => Ok(default_evaluators()),
    }
}
