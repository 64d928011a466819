use std::path::PathBuf;

use serde::Serialize;

use crate::error::SkipReason;

use super::kind::DocumentKind;

/// Result of processing one source document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Outcome {
    Converted {
        kind: DocumentKind,
        name: String,
        output: PathBuf,
    },
    Skipped {
        kind: DocumentKind,
        name: String,
        reason: SkipReason,
    },
}

impl Outcome {
    pub fn kind(&self) -> DocumentKind {
        match self {
            Outcome::Converted { kind, .. } | Outcome::Skipped { kind, .. } => *kind,
        }
    }

    pub fn is_converted(&self) -> bool {
        matches!(self, Outcome::Converted { .. })
    }
}

/// Per-file outcomes of a run, in processing order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConversionReport {
    pub dry_run: bool,
    pub outcomes: Vec<Outcome>,
}

impl ConversionReport {
    pub fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            outcomes: Vec::new(),
        }
    }

    pub fn push(&mut self, outcome: Outcome) {
        self.outcomes.push(outcome);
    }

    pub fn converted(&self, kind: DocumentKind) -> usize {
        self.outcomes
            .iter()
            .filter(|o| o.is_converted() && o.kind() == kind)
            .count()
    }

    pub fn commands_converted(&self) -> usize {
        self.converted(DocumentKind::Command)
    }

    pub fn agents_converted(&self) -> usize {
        self.converted(DocumentKind::Agent)
    }

    pub fn skipped(&self) -> impl Iterator<Item = &Outcome> {
        self.outcomes.iter().filter(|o| !o.is_converted())
    }

    pub fn summary(&self) -> ReportSummary<'_> {
        ReportSummary {
            dry_run: self.dry_run,
            commands: self.commands_converted(),
            agents: self.agents_converted(),
            skipped: self.skipped().count(),
            outcomes: &self.outcomes,
        }
    }
}

/// Serializable view of a report with the counts precomputed
#[derive(Debug, Serialize)]
pub struct ReportSummary<'a> {
    pub dry_run: bool,
    pub commands: usize,
    pub agents: usize,
    pub skipped: usize,
    pub outcomes: &'a [Outcome],
}
