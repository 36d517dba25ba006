use std::fs::File;
use std::io::{self, BufWriter, Write};

use ir_core::Run;

use crate::types::RunFormat;

/// Writes the runs, one result per line, honoring the format's write limit
pub fn write_runs<'a, F, I, W>(fmt: &F, runs: I, writer: &mut W) -> io::Result<()>
where
    F: RunFormat,
    I: IntoIterator<Item = &'a Run>,
    W: Write,
{
    for run in runs {
        for result in run.top(fmt.write_limit()) {
            fmt.write_result(run, result, writer)?;
        }
    }
    writer.flush()
}

/// Writes the runs to a new file at `fname`
pub fn write_runs_to_path<'a, F, I>(fmt: &F, runs: I, fname: &str) -> io::Result<()>
where
    F: RunFormat,
    I: IntoIterator<Item = &'a Run>,
{
    let f = File::create(fname)?;
    let mut writer = BufWriter::new(f);
    write_runs(fmt, runs, &mut writer)
}
