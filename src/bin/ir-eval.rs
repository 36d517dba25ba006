#[macro_use]
extern crate log;
extern crate clap;
extern crate env_logger;
extern crate irkit;

use std::error::Error;
use std::io;
use std::process;

use clap::{App, ArgMatches};

use irkit::bin_utils::args::{ArgAugmenter, OutputArgs, OutputMeta, TaskArgs, TaskMeta};
use irkit::bin_utils::loaders::{build_task, load_evaluators};
use irkit::report::Report;

fn evaluate(tm: TaskMeta, om: OutputMeta) -> Result<(), Box<dyn Error>> {
    let task = build_task(&tm)?;
    let evaluators = load_evaluators(&om.config)?;
    info!("Running {} evaluators", evaluators.len());

    let report = Report::new(&task, &evaluators)?;
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    report.write(&mut handle, om.per_query)?;
    Ok(())
}

fn parse<'a>() -> ArgMatches<'a> {
    let base = App::new("IR-Eval")
        .version("0.1.0")
        .about("Evaluates ranked retrieval runs against relevance judgments");

    let base = TaskArgs.add_args(base);
    let base = OutputArgs.add_args(base);
    base.get_matches()
}

fn main() {
    env_logger::init();
    let args = parse();
    let tm = TaskArgs.load_from_args(&args);
    let om = OutputArgs.load_from_args(&args);

    if let Err(e) = evaluate(tm, om) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
