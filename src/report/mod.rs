//! Report
//! ---
//!
//! Runs every evaluator over all registered runs and writes trec_eval-like lines:
//! `name \t system \t query \t score`.  Each system gets a summary line with the query
//! `all`, holding the arithmetic mean of its per-query scores (MAP for AP, for example).
extern crate ir_core;
extern crate log;

use std::collections::BTreeMap;
use std::io::{self, Write};

use self::ir_core::{Evaluator, Query, System, Task};

use crate::metrics::get_mean;

#[derive(Debug, Clone)]
/// Scores of one evaluator for every (system, query) pair
pub struct MetricScores {
    /// Short name of the evaluator
    pub short_name: String,
    /// Full name of the evaluator
    pub full_name: String,
    /// Scores by system, then query
    pub scores: BTreeMap<System, BTreeMap<Query, f64>>,
}

impl MetricScores {
    /// Evaluates every registered run
    pub fn compute<E: Evaluator + ?Sized>(task: &Task, evaluator: &E) -> ir_core::Result<Self> {
        Ok(MetricScores {
            short_name: evaluator.short_name(),
            full_name: evaluator.full_name(),
            scores: task.evaluate_all_systems_all_queries(evaluator)?,
        })
    }

    /// Mean score of each system over the queries it answered
    pub fn summary(&self) -> BTreeMap<System, f64> {
        self.scores
            .iter()
            .map(|(system, by_query)| {
                let values: Vec<f64> = by_query.values().cloned().collect();
                (system.clone(), get_mean(&values, None))
            })
            .collect()
    }
}

#[derive(Debug, Clone)]
/// Scores of a set of evaluators
pub struct Report {
    metrics: Vec<MetricScores>,
}

impl Report {
    /// Evaluates the task with every evaluator, in order
    pub fn new(task: &Task, evaluators: &[Box<dyn Evaluator>]) -> ir_core::Result<Self> {
        let mut metrics = Vec::with_capacity(evaluators.len());
        for evaluator in evaluators.iter() {
            log::debug!("Computing {}", evaluator.full_name());
            metrics.push(MetricScores::compute(task, evaluator)?);
        }
        Ok(Report { metrics })
    }

    /// Scores of each evaluator
    pub fn metrics(&self) -> &[MetricScores] {
        &self.metrics
    }

    /// Writes the summary lines, preceded by the per-query lines of each system when
    /// `per_query` is set
    pub fn write<W: Write>(&self, writer: &mut W, per_query: bool) -> io::Result<()> {
        for metric in self.metrics.iter() {
            let summary = metric.summary();
            for (system, by_query) in metric.scores.iter() {
                if per_query {
                    for (query, score) in by_query.iter() {
                        write_line(writer, &metric.short_name, system, query.id(), *score)?;
                    }
                }
                if let Some(mean) = summary.get(system) {
                    write_line(writer, &metric.short_name, system, "all", *mean)?;
                }
            }
        }
        writer.flush()
    }
}

fn write_line<W: Write>(
    writer: &mut W,
    name: &str,
    system: &System,
    query: &str,
    score: f64,
) -> io::Result<()> {
    writeln!(writer, "{:<12}\t{}\t{}\t{:.4}", name, system, query, score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluators::average_precision::AveragePrecision;
    use crate::evaluators::precision::Precision;
    use crate::evaluators::test_utils::*;

    fn evaluators() -> Vec<Box<dyn Evaluator>> {
        vec![
            Box::new(AveragePrecision::new(1.0, None)),
            Box::new(Precision::new(1.0, Some(5))),
        ]
    }

    #[test]
    fn test_summary() {
        let task = fixture();
        let report = Report::new(&task, &evaluators()).unwrap();
        assert_eq!(report.metrics().len(), 2);

        let map = report.metrics()[0].summary();
        assert_close(map["STANDARD"], (0.375 + 11.0 / 12.0) / 3.0);
        let p5 = report.metrics()[1].summary();
        assert_close(p5["STANDARD"], (0.4 + 0.6) / 3.0);
    }

    #[test]
    fn test_write() {
        let task = fixture();
        let report = Report::new(&task, &evaluators()).unwrap();

        let mut out = Vec::new();
        report.write(&mut out, false).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "AP          \tSTANDARD\tall\t0.4306\nP@5         \tSTANDARD\tall\t0.3333\n"
        );

        let mut out = Vec::new();
        report.write(&mut out, true).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], "AP          \tSTANDARD\t301\t0.3750");
        assert_eq!(lines[3], "AP          \tSTANDARD\tall\t0.4306");
    }

    #[test]
    fn test_missing_ground_truth() {
        let mut task = fixture();
        let mut run = ir_core::Run::new(task.query("304"), task.system("STANDARD"));
        let doc = task.document("D1");
        run.push(doc, 1.0);
        task.add_system_run(run);
        assert_eq!(
            Report::new(&task, &evaluators()).err(),
            Some(ir_core::Error::MissingGroundTruth(Query::new("304")))
        );
    }
}
