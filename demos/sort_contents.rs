//! Reads several files, sorts their lines, and writes them out.
//!
//! Every file gets its own handler; one boundary reports whatever failed.
//!
//! Run with: cargo run --example sort_contents -- <file>...

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};

use errless::prelude::*;

fn read_lines(file: &str, lines: &mut Vec<String>) -> WrappedResult<(), io::Error> {
    let per_file = message(format!("read {file}"));

    let opened = File::open(file).attempt_optional().err(per_file.clone())?;

    for line in opened.into_iter().map(BufReader::new).flat_map(BufRead::lines) {
        lines.push(line.attempt().err(per_file.clone())?);
    }
    Ok(())
}

fn sort_contents<W: Write>(w: &mut W, files: &[String]) -> Option<()> {
    boundary::catch(
        |err| eprintln!("process: {err}"),
        || {
            let mut lines = Vec::new();
            for file in files {
                read_lines(file, &mut lines)?;
            }
            lines.sort();
            for line in &lines {
                writeln!(w, "{line}").attempt().check()?;
            }
            Ok(())
        },
    )
}

fn main() {
    let files: Vec<String> = std::env::args().skip(1).collect();
    let stdout = io::stdout();
    if sort_contents(&mut stdout.lock(), &files).is_none() {
        std::process::exit(1);
    }
}
