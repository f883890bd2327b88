//! Per-file transform.
//!
//! `text -> (text, TransformResult)` with no ambient state. Every candidate
//! call is either replaced as a whole or left byte-for-byte untouched and
//! reported; the dependency cleaner then runs over the whole result.

use anyhow::Result;

use super::classify::Replacement;
use super::deps::DependencyCleaner;
use super::fields::extract_fields;
use super::matcher::{CallMatcher, CallSite};
use super::warning::{MigrationWarning, WarningKind};
use crate::config::{Config, Targets};

/// Outcome of transforming one file's text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransformResult {
    pub changed: bool,
    pub replaced_count: usize,
    /// Old-shape calls still present in the output.
    pub unmatched_count: usize,
    /// Untouched call sites, in source order.
    pub warnings: Vec<MigrationWarning>,
}

impl TransformResult {
    pub fn status(&self) -> TransformStatus {
        match (self.changed, self.unmatched_count) {
            (false, _) => TransformStatus::Unchanged,
            (true, 0) => TransformStatus::Migrated,
            (true, _) => TransformStatus::PartiallyMigrated,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformStatus {
    Unchanged,
    /// Changed and no old-shape call remains.
    Migrated,
    /// Changed but some calls need manual review.
    PartiallyMigrated,
}

/// Transformed text together with its result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transformed {
    pub text: String,
    pub result: TransformResult,
}

/// The call-rewriting engine for one callee.
#[derive(Debug, Clone)]
pub struct Rewriter {
    matcher: CallMatcher,
    cleaner: DependencyCleaner,
    targets: Targets,
}

impl Rewriter {
    pub fn new(callee: &str, dependency: &str, targets: Targets) -> Result<Self> {
        Ok(Self {
            matcher: CallMatcher::new(callee)?,
            cleaner: DependencyCleaner::new(dependency)?,
            targets,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(&config.callee, &config.dependency, config.targets.clone())
    }

    pub fn transform(&self, text: &str) -> Transformed {
        let mut output = String::with_capacity(text.len());
        let mut cursor = 0;
        let mut replaced_count = 0;
        let mut warnings = Vec::new();

        for candidate in self.matcher.find_iter(text) {
            let outcome = candidate
                .map_err(|unmatched| (unmatched.start, unmatched.kind))
                .and_then(|site| {
                    self.rewrite(&site)
                        .map(|replacement| (site.start, site.end, replacement))
                        .map_err(|kind| (site.start, kind))
                });

            match outcome {
                Ok((start, end, replacement)) => {
                    output.push_str(&text[cursor..start]);
                    output.push_str(&replacement);
                    cursor = end;
                    replaced_count += 1;
                }
                Err((start, kind)) => warnings.push(MigrationWarning::at(text, start, kind)),
            }
        }
        output.push_str(&text[cursor..]);

        let cleaned = self.cleaner.clean(&output);
        let unmatched_count = self.matcher.count_candidates(&cleaned);

        Transformed {
            result: TransformResult {
                changed: cleaned != text,
                replaced_count,
                unmatched_count,
                warnings,
            },
            text: cleaned,
        }
    }

    fn rewrite(&self, site: &CallSite<'_>) -> Result<String, WarningKind> {
        let fields = extract_fields(site.body)?;
        let replacement = Replacement::classify(fields).ok_or(WarningKind::AmbiguousFields)?;
        Ok(replacement.render(&self.targets))
    }
}
