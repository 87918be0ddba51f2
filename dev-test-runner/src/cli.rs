//! Fixture runner CLI: resolve → decode → validate → report
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use indexmap::IndexMap;
use json_shape::{AbsentSpecPolicy, Options, PathStyle, UnknownFieldPolicy};
use rayon::prelude::*;
use regex::Regex;

use crate::fixture::{self, Case, Outcome};

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// run json-shape fixture files and compare each case against its expected message
#[derive(Parser, Debug)]
#[command(name = "dev-test-runner")]
pub struct CommandLineInterface {
    /// One or more fixture files. May be literal paths or quoted glob patterns
    #[arg(long, short, num_args = 1.., required = true)]
    input: Vec<String>,

    /// only run cases whose name matches this regular expression
    #[arg(long)]
    filter: Option<String>,

    /// array index rendering: dotted (items.1) or bracketed (items[1])
    #[arg(long, value_enum, default_value_t = PathStyleArg::Dotted)]
    path_style: PathStyleArg,

    /// undeclared fields: ignore, warn or reject
    #[arg(long, value_enum, default_value_t = UnknownFieldsArg::Ignore)]
    unknown_fields: UnknownFieldsArg,

    /// null spec nodes: accept or reject
    #[arg(long, value_enum, default_value_t = AbsentSpecArg::Accept)]
    absent_spec: AbsentSpecArg,

    /// also print passing cases
    #[arg(long, short)]
    verbose: bool,
}

// flag spellings match the kebab-case names fixture `options` blocks use

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PathStyleArg {
    Dotted,
    Bracketed,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum UnknownFieldsArg {
    Ignore,
    Warn,
    Reject,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum AbsentSpecArg {
    Accept,
    Reject,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub passed: usize,
    pub failed: usize,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl From<PathStyleArg> for PathStyle {
    fn from(arg: PathStyleArg) -> Self {
        match arg {
            PathStyleArg::Dotted => Self::Dotted,
            PathStyleArg::Bracketed => Self::Bracketed,
        }
    }
}

impl From<UnknownFieldsArg> for UnknownFieldPolicy {
    fn from(arg: UnknownFieldsArg) -> Self {
        match arg {
            UnknownFieldsArg::Ignore => Self::Ignore,
            UnknownFieldsArg::Warn => Self::Warn,
            UnknownFieldsArg::Reject => Self::Reject,
        }
    }
}

impl From<AbsentSpecArg> for AbsentSpecPolicy {
    fn from(arg: AbsentSpecArg) -> Self {
        match arg {
            AbsentSpecArg::Accept => Self::Accept,
            AbsentSpecArg::Reject => Self::Reject,
        }
    }
}

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }

    fn base_options(&self) -> Options {
        Options::default()
            .with_path_style(self.path_style.into())
            .with_unknown_fields(self.unknown_fields.into())
            .with_absent_spec(self.absent_spec.into())
    }

    pub fn run(&self) -> Result<Summary> {
        let filter = self.filter.as_deref()
            .map(Regex::new)
            .transpose()
            .context("invalid --filter expression")?;

        // input order is report order; a file named twice runs once
        let mut suites = IndexMap::<PathBuf, Vec<Case>>::new();
        for source_path in resolve_file_path_patterns(&self.input)? {
            if suites.contains_key(&source_path) {
                continue;
            }
            let mut cases = fixture::load_cases(&source_path)?;
            if let Some(filter) = filter.as_ref() {
                cases.retain(|case| filter.is_match(&case.name));
            }
            suites.insert(source_path, cases);
        }

        let base = self.base_options();
        let mut summary = Summary::default();
        for (source_path, cases) in &suites {
            let outcomes: Vec<Outcome> = cases.par_iter().map(|case| case.run(base)).collect();
            tracing::debug!(file = %source_path.display(), cases = cases.len(), "fixture file done");
            println!("{}", source_path.display().to_string().bold());
            for (case, outcome) in cases.iter().zip(&outcomes) {
                self.report(case, outcome, &mut summary);
            }
        }

        let line = format!("{} passed, {} failed", summary.passed, summary.failed);
        if summary.failed == 0 {
            println!("{}", line.green());
        } else {
            println!("{}", line.red());
        }
        Ok(summary)
    }

    fn report(&self, case: &Case, outcome: &Outcome, summary: &mut Summary) {
        if outcome.is_pass() {
            summary.passed += 1;
            if self.verbose {
                println!("  {} {}", "ok".green(), case.name);
            }
            return;
        }
        summary.failed += 1;
        println!("  {} {}", "FAIL".red().bold(), case.name);
        if let Outcome::Failed { expected, actual } = outcome {
            println!("      expected: {}", describe(expected.as_deref()));
            println!("      actual:   {}", describe(actual.as_deref()));
        }
    }
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL HELPERS
// ————————————————————————————————————————————————————————————————————————————

fn describe(message: Option<&str>) -> String {
    match message {
        None => "pass".to_string(),
        Some(message) => format!("{message:?}"),
    }
}

fn resolve_file_path_patterns<I>(patterns: I) -> Result<Vec<PathBuf>>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    fn has_glob_chars(s: &str) -> bool {
        s.bytes().any(|b| matches!(b, b'*' | b'?' | b'[' | b'{'))
    }

    let mut out = Vec::<PathBuf>::new();
    for raw in patterns {
        let pattern = raw.as_ref();
        if !has_glob_chars(pattern) {
            out.push(PathBuf::from(pattern));
            continue;
        }
        let mut matched = glob::glob(pattern)
            .with_context(|| format!("invalid glob pattern: {pattern}"))?
            .collect::<Result<Vec<_>, _>>()?;
        if matched.is_empty() {
            bail!("glob pattern matched no files: {pattern}");
        }
        matched.sort();
        out.extend(matched);
    }
    Ok(out)
}
