use std::io::{self, Write};

use ir_core::{Run, ScoredDocument};

use crate::types::{parse_field, Record, RunFormat};

/// TREC relevance judgments: `qid iter docid rel`.
///
/// Judgments get their rank from the read order, and negative relevance levels are
/// dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrecQrels;

impl RunFormat for TrecQrels {
    fn parse_line(&self, line: &str) -> Result<Record, String> {
        let pieces: Vec<&str> = line.split_whitespace().collect();
        if pieces.len() != 4 {
            return Err(format!("expected 4 fields, found {}", pieces.len()));
        }

        Ok(Record {
            system: None,
            query: pieces[0].to_string(),
            document: pieces[2].to_string(),
            score: parse_field(pieces[3], "relevance")?,
            rank: None,
        })
    }

    fn accepts(&self, _run_len: usize, record: &Record) -> bool {
        record.score >= 0.0
    }

    fn default_system(&self) -> &str {
        "Qrel"
    }

    fn write_result<W: Write>(
        &self,
        run: &Run,
        result: &ScoredDocument,
        writer: &mut W,
    ) -> io::Result<()> {
        writeln!(writer, "{} 0 {} {}", run.query(), result.document, result.score)
    }
}

/// TREC runs: `qid Q0 docid rank score tag`.
///
/// With `max_results` set, a result is kept only while the run is shorter than the
/// limit and its rank is within it.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrecRun {
    /// Maximum number of results per run
    pub max_results: Option<usize>,
}

impl TrecRun {
    /// Creates a reader limited to `max_results` per run
    pub fn new(max_results: Option<usize>) -> Self {
        TrecRun { max_results }
    }
}

impl RunFormat for TrecRun {
    fn parse_line(&self, line: &str) -> Result<Record, String> {
        let pieces: Vec<&str> = line.split_whitespace().collect();
        if pieces.len() != 6 {
            return Err(format!("expected 6 fields, found {}", pieces.len()));
        }

        Ok(Record {
            system: Some(pieces[5].to_string()),
            query: pieces[0].to_string(),
            document: pieces[2].to_string(),
            score: parse_field(pieces[4], "score")?,
            rank: Some(parse_field(pieces[3], "rank")?),
        })
    }

    fn accepts(&self, run_len: usize, record: &Record) -> bool {
        match self.max_results {
            Some(max) => run_len < max && record.rank.map_or(true, |rank| rank <= max),
            None => true,
        }
    }

    fn write_limit(&self) -> Option<usize> {
        self.max_results
    }

    fn write_result<W: Write>(
        &self,
        run: &Run,
        result: &ScoredDocument,
        writer: &mut W,
    ) -> io::Result<()> {
        writeln!(
            writer,
            "{} Q0 {} {} {} {}",
            run.query(),
            result.document,
            result.rank,
            result.score,
            run.system()
        )
    }
}
