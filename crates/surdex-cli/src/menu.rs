//! Interactive menu over any line-oriented input and output.

use crate::bench::{self, BenchMode, BenchmarkReport};
use log::debug;
use rand::rngs::StdRng;
use std::io::{BufRead, Write};
use surdex_common::{Record, Result};
use surdex_index::{Catalog, SearchReport};

/// A parsed menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Search,
    PerformanceTest,
    Exit,
}

impl Choice {
    /// Parses a menu line. Surrounding whitespace is ignored.
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim() {
            "1" => Some(Choice::Search),
            "2" => Some(Choice::PerformanceTest),
            "3" => Some(Choice::Exit),
            _ => None,
        }
    }
}

/// Menu loop driving a catalog.
pub struct Menu<'a, R, W> {
    catalog: &'a mut Catalog,
    input: R,
    output: W,
    mode: BenchMode,
    samples: usize,
    rng: StdRng,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(
        catalog: &'a mut Catalog,
        input: R,
        output: W,
        mode: BenchMode,
        samples: usize,
        rng: StdRng,
    ) -> Self {
        Self {
            catalog,
            input,
            output,
            mode,
            samples,
            rng,
        }
    }

    /// Runs until the user exits or input ends, then tears down the catalog.
    ///
    /// The catalog is cleared even when writing to the output fails.
    pub fn run(&mut self) -> Result<()> {
        let result = self.run_loop();
        self.catalog.clear();
        result?;
        self.output.flush()?;
        Ok(())
    }

    fn run_loop(&mut self) -> Result<()> {
        writeln!(
            self.output,
            "Customer Database Loaded. Total customers: {}",
            self.catalog.len()
        )?;

        loop {
            self.display_menu()?;
            let Some(line) = self.read_line()? else {
                debug!("Input closed, leaving menu");
                break;
            };

            match Choice::parse(&line) {
                Some(Choice::Search) => {
                    write!(self.output, "Enter last name to search: ")?;
                    self.output.flush()?;
                    let Some(name) = self.read_line()? else {
                        break;
                    };
                    let report = self.catalog.search(&name);
                    print_search_report(&mut self.output, &report)?;
                }
                Some(Choice::PerformanceTest) => self.performance_test()?,
                Some(Choice::Exit) => {
                    writeln!(self.output, "Exiting program. Goodbye!")?;
                    break;
                }
                None => writeln!(self.output, "Invalid choice. Please try again.")?,
            }
        }

        Ok(())
    }

    fn display_menu(&mut self) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "Customer Database System")?;
        writeln!(self.output, "1. Search Customer")?;
        writeln!(self.output, "2. Performance Test")?;
        writeln!(self.output, "3. Exit")?;
        write!(self.output, "Enter your choice: ")?;
        self.output.flush()?;
        Ok(())
    }

    /// Reads one line without its terminator. `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    fn performance_test(&mut self) -> Result<()> {
        let samples = bench::sample_surnames(self.catalog, self.samples, &mut self.rng);
        match bench::run_benchmark(self.catalog, &samples, self.mode) {
            Some(report) => print_benchmark_report(&mut self.output, &report)?,
            None => writeln!(self.output, "No customers in database.")?,
        }
        Ok(())
    }
}

fn print_record<W: Write>(out: &mut W, record: &Record) -> Result<()> {
    writeln!(out, "First Name: {}", record.first_name)?;
    writeln!(out, "Last Name: {}", record.last_name)?;
    writeln!(out, "Customer ID: {}", record.customer_id)?;
    writeln!(out)?;
    Ok(())
}

/// Prints each index's matches, numbered in reporting order.
pub fn print_search_report<W: Write>(out: &mut W, report: &SearchReport<'_>) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "Search Results for '{}':", report.last_name)?;
    for (position, matches) in report.results.iter().enumerate() {
        writeln!(
            out,
            "{}. {} ({} matches):",
            position + 1,
            matches.kind,
            matches.count()
        )?;
        for record in &matches.records {
            print_record(out, record)?;
        }
    }
    Ok(())
}

/// Prints per-index timings, the fastest index and the slowdown of the others.
pub fn print_benchmark_report<W: Write>(out: &mut W, report: &BenchmarkReport) -> Result<()> {
    let mode = match report.mode {
        BenchMode::SearchAll => "searches",
        BenchMode::FirstMatch => "first-match searches",
    };
    writeln!(out)?;
    writeln!(out, "Performance Test - Testing {} {}", report.samples, mode)?;
    for timing in &report.timings {
        writeln!(
            out,
            "{} Search: {:.6} seconds ({} matches)",
            timing.kind,
            timing.elapsed.as_secs_f64(),
            timing.matches
        )?;
    }
    writeln!(out)?;

    let Some(fastest) = report.fastest() else {
        return Ok(());
    };
    writeln!(out, "--> Fastest method: {}", fastest.kind)?;
    writeln!(out)?;
    writeln!(out, "Performance Comparison:")?;
    for timing in report.timings.iter().filter(|t| t.kind != fastest.kind) {
        if let Some(pct) = report.slowdown_pct(timing.kind) {
            writeln!(
                out,
                "- {} is {:.2}% slower than {}",
                timing.kind, pct, fastest.kind
            )?;
        }
    }
    Ok(())
}
