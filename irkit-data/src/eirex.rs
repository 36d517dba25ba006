use std::io::{self, Write};

use ir_core::{Run, ScoredDocument};

use crate::types::{parse_field, Record, RunFormat};

/// EIREX runs: tab separated `system query document score`, ranked by read order
#[derive(Debug, Clone, Copy, Default)]
pub struct EirexRun;

impl RunFormat for EirexRun {
    fn parse_line(&self, line: &str) -> Result<Record, String> {
        let pieces: Vec<&str> = line.split('\t').filter(|p| !p.is_empty()).collect();
        if pieces.len() != 4 {
            return Err(format!("expected 4 tab separated fields, found {}", pieces.len()));
        }

        Ok(Record {
            system: Some(pieces[0].to_string()),
            query: pieces[1].to_string(),
            document: pieces[2].to_string(),
            score: parse_field(pieces[3].trim(), "score")?,
            rank: None,
        })
    }

    fn write_result<W: Write>(
        &self,
        run: &Run,
        result: &ScoredDocument,
        writer: &mut W,
    ) -> io::Result<()> {
        writeln!(
            writer,
            "{}\t{}\t{}\t{}",
            run.system(),
            run.query(),
            result.document,
            result.score
        )
    }
}
