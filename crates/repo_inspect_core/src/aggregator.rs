//! Runs the collectors for one repository and assembles the report.

use github_client::GovernanceClient;
use tracing::{info, instrument, warn};

use crate::collectors;
use crate::model::GovernanceRecord;
use crate::repository_reference::RepositoryReference;
use crate::sections::{Section, SectionFilter};

#[cfg(test)]
#[path = "aggregator_tests.rs"]
mod tests;

/// What happened to one section during collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectorStatus {
    /// The facet was fetched and written to the record
    Collected,
    /// The section filter excluded the facet
    Skipped,
    /// The facet could not be fetched; the record keeps its zero value
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectorOutcome {
    pub section: Section,
    pub status: CollectorStatus,
}

/// The governance record plus one outcome per section, in collection order.
#[derive(Debug, Clone)]
pub struct CollectionReport {
    pub record: GovernanceRecord,
    pub log: Vec<CollectorOutcome>,
}

impl CollectionReport {
    /// Outcomes of every collector that failed.
    pub fn failures(&self) -> impl Iterator<Item = &CollectorOutcome> {
        self.log
            .iter()
            .filter(|o| matches!(o.status, CollectorStatus::Failed(_)))
    }

    pub fn succeeded(&self, section: Section) -> bool {
        self.log
            .iter()
            .any(|o| o.section == section && o.status == CollectorStatus::Collected)
    }
}

/// Collects every governance facet of `reference` that `filter` allows.
///
/// Settings are always collected. Collectors run one after another in
/// [`Section::ALL`] order; a failing collector is logged and recorded in the
/// report but never stops the others, so this function cannot fail.
#[instrument(skip(client, filter), fields(repository = %reference))]
pub async fn collect<C: GovernanceClient + ?Sized>(
    client: &C,
    reference: &RepositoryReference,
    filter: &SectionFilter,
) -> CollectionReport {
    let mut record = GovernanceRecord::new(reference.identity());
    let mut log = Vec::with_capacity(Section::ALL.len());

    for section in Section::ALL {
        if section != Section::Settings && !filter.includes(section) {
            log.push(CollectorOutcome {
                section,
                status: CollectorStatus::Skipped,
            });
            continue;
        }

        let result = match section {
            Section::Settings => {
                collectors::collect_settings(client, reference, &mut record).await
            }
            Section::Rulesets => {
                collectors::collect_rulesets(client, reference, &mut record).await
            }
            Section::Collaborators => {
                collectors::collect_collaborators(client, reference, &mut record).await
            }
            Section::Teams => collectors::collect_teams(client, reference, &mut record).await,
            Section::Security => {
                collectors::collect_security(client, reference, &mut record).await
            }
            Section::Labels => collectors::collect_labels(client, reference, &mut record).await,
            Section::Milestones => {
                collectors::collect_milestones(client, reference, &mut record).await
            }
        };

        let status = match result {
            Ok(()) => CollectorStatus::Collected,
            Err(e) => {
                warn!(section = %section, error = %e, "failed to get {}", section.description());
                CollectorStatus::Failed(e.to_string())
            }
        };
        log.push(CollectorOutcome { section, status });
    }

    info!(
        failures = log
            .iter()
            .filter(|o| matches!(o.status, CollectorStatus::Failed(_)))
            .count(),
        "Collection finished"
    );

    CollectionReport { record, log }
}
