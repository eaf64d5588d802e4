//! The read-item scenario catalogue
//!
//! Probes the read path the way a client of a managed document store
//! would: exact reads, wrong-partition reads, wrong-type reads, forged
//! session tokens, closed and reconnected clients, and reads across
//! independently connected clients.

use uuid::Uuid;

use crate::observability::{log_event_with_fields, Event};

use super::group::{Expected, ScenarioGroup, ScenarioSummary};
use super::items::{Document, Employee, DOCUMENT_TYPE_TAG, EMPLOYEE_TYPE_TAG};

/// Names of all scenarios in the catalogue, in run order.
pub fn scenario_names() -> &'static [&'static str] {
    &[
        "read_existing_item",
        "read_missing_id",
        "read_missing_partition",
        "read_wrong_partition",
        "read_as_unknown_type",
        "read_as_absent_type",
        "read_as_different_type",
        "read_with_advanced_token",
        "read_with_bogus_token",
        "read_after_close",
        "read_in_reconnected_client",
        "read_from_another_client",
    ]
}

/// Runs the catalogue, optionally filtered by substring match on the
/// scenario name, and returns the collected summary.
pub fn run(filter: Option<&str>) -> ScenarioSummary {
    let selected = |name: &str| filter.map(|needle| name.contains(needle)).unwrap_or(true);
    let mut group = ScenarioGroup::new("container-read-item");

    if selected("read_existing_item") {
        group.run_one_client("read_existing_item", Expected::Found, |_, client| {
            let document = Document::generate();
            prepare("read_existing_item", "write document", &document.id, document.partition_key());
            client.write(&document.id, document.partition_key(), document.payload())?;
            probe("read_existing_item", &document.id, document.partition_key());
            client.read(&document.id, document.partition_key(), DOCUMENT_TYPE_TAG)
        });
    }

    if selected("read_missing_id") {
        group.run_one_client("read_missing_id", Expected::NotFound, |_, client| {
            let document = Document::generate();
            prepare("read_missing_id", "write document", &document.id, document.partition_key());
            client.write(&document.id, document.partition_key(), document.payload())?;

            let missing_id = Uuid::new_v4().to_string();
            probe("read_missing_id", &missing_id, document.partition_key());
            client.read(&missing_id, document.partition_key(), DOCUMENT_TYPE_TAG)
        });
    }

    if selected("read_missing_partition") {
        group.run_one_client("read_missing_partition", Expected::NotFound, |_, client| {
            let document = Document::generate();
            prepare("read_missing_partition", "write document", &document.id, document.partition_key());
            client.write(&document.id, document.partition_key(), document.payload())?;

            let missing_partition = Uuid::new_v4().to_string();
            probe("read_missing_partition", &document.id, &missing_partition);
            client.read(&document.id, &missing_partition, DOCUMENT_TYPE_TAG)
        });
    }

    if selected("read_wrong_partition") {
        group.run_one_client("read_wrong_partition", Expected::NotFound, |_, client| {
            let first = Document::generate();
            let second = Document::generate();
            prepare("read_wrong_partition", "write first document", &first.id, first.partition_key());
            client.write(&first.id, first.partition_key(), first.payload())?;
            prepare("read_wrong_partition", "write second document", &second.id, second.partition_key());
            client.write(&second.id, second.partition_key(), second.payload())?;

            // Correct id, but the other item's partition.
            probe("read_wrong_partition", &first.id, second.partition_key());
            client.read(&first.id, second.partition_key(), DOCUMENT_TYPE_TAG)
        });
    }

    if selected("read_as_unknown_type") {
        group.run_one_client("read_as_unknown_type", Expected::NotFound, |_, client| {
            let document = Document::generate();
            prepare("read_as_unknown_type", "write document", &document.id, document.partition_key());
            client.write(&document.id, document.partition_key(), document.payload())?;

            // Nothing is ever stored under this tag.
            probe("read_as_unknown_type", &document.id, document.partition_key());
            client.read(&document.id, document.partition_key(), "string")
        });
    }

    if selected("read_as_absent_type") {
        group.run_one_client("read_as_absent_type", Expected::NotFound, |_, client| {
            let document = Document::generate();
            prepare("read_as_absent_type", "write document", &document.id, document.partition_key());
            client.write(&document.id, document.partition_key(), document.payload())?;

            // A known tag, but no employee lives at this identity.
            probe("read_as_absent_type", &document.id, document.partition_key());
            client.read(&document.id, document.partition_key(), EMPLOYEE_TYPE_TAG)
        });
    }

    if selected("read_as_different_type") {
        group.run_one_client("read_as_different_type", Expected::NotFound, |_, client| {
            let document = Document::generate();
            let employee = Employee::generate();
            prepare("read_as_different_type", "write document", &document.id, document.partition_key());
            client.write(&document.id, document.partition_key(), document.payload())?;
            prepare("read_as_different_type", "write employee", &employee.id, employee.partition_key());
            client.write(&employee.id, employee.partition_key(), employee.payload())?;

            // The document's identity, the employee's type.
            probe("read_as_different_type", &document.id, document.partition_key());
            client.read(&document.id, document.partition_key(), EMPLOYEE_TYPE_TAG)
        });
    }

    if selected("read_with_advanced_token") {
        group.run_one_client(
            "read_with_advanced_token",
            Expected::ConsistencyNotYetAvailable,
            |_, client| {
                let document = Document::generate();
                prepare("read_with_advanced_token", "write document", &document.id, document.partition_key());
                let result =
                    client.write(&document.id, document.partition_key(), document.payload())?;

                // One past the version the write actually produced.
                client.forge_session_token(
                    document.partition_key(),
                    result.version.value() + 1,
                )?;
                probe("read_with_advanced_token", &document.id, document.partition_key());
                client.read(&document.id, document.partition_key(), DOCUMENT_TYPE_TAG)
            },
        );
    }

    if selected("read_with_bogus_token") {
        group.run_one_client(
            "read_with_bogus_token",
            Expected::ConsistencyNotYetAvailable,
            |_, client| {
                let document = Document::generate();
                prepare("read_with_bogus_token", "write document", &document.id, document.partition_key());
                client.write(&document.id, document.partition_key(), document.payload())?;

                // Stands in for an unparseable random token: a version the
                // partition cannot have reached.
                client.forge_session_token(document.partition_key(), 8_675_309)?;
                probe("read_with_bogus_token", &document.id, document.partition_key());
                client.read(&document.id, document.partition_key(), DOCUMENT_TYPE_TAG)
            },
        );
    }

    if selected("read_after_close") {
        group.run_one_client("read_after_close", Expected::SessionClosed, |_, client| {
            let document = Document::generate();
            prepare("read_after_close", "write document", &document.id, document.partition_key());
            client.write(&document.id, document.partition_key(), document.payload())?;

            client.close();
            probe("read_after_close", &document.id, document.partition_key());
            client.read(&document.id, document.partition_key(), DOCUMENT_TYPE_TAG)
        });
    }

    if selected("read_in_reconnected_client") {
        group.run_one_client(
            "read_in_reconnected_client",
            Expected::Found,
            |account, client| {
                let document = Document::generate();
                prepare("read_in_reconnected_client", "write document", &document.id, document.partition_key());
                client.write(&document.id, document.partition_key(), document.payload())?;
                client.close();

                // The new session starts with no tokens; the read carries
                // no freshness requirement and is served from the store.
                let mut reopened = account.connect();
                probe("read_in_reconnected_client", &document.id, document.partition_key());
                let outcome =
                    reopened.read(&document.id, document.partition_key(), DOCUMENT_TYPE_TAG);
                reopened.close();
                outcome
            },
        );
    }

    if selected("read_from_another_client") {
        group.run_two_client(
            "read_from_another_client",
            Expected::Found,
            |_, first, second| {
                let mine = Document::generate();
                let theirs = Document::generate();
                prepare("read_from_another_client", "write own document", &mine.id, mine.partition_key());
                first.write(&mine.id, mine.partition_key(), mine.payload())?;
                prepare("read_from_another_client", "write other document", &theirs.id, theirs.partition_key());
                let result = second.write(&theirs.id, theirs.partition_key(), theirs.payload())?;

                // Transfer the writer's token, then read the other
                // client's item with that freshness floor.
                first.adopt_session_token(&result.session_token)?;
                probe("read_from_another_client", &theirs.id, theirs.partition_key());
                first.read(&theirs.id, theirs.partition_key(), DOCUMENT_TYPE_TAG)
            },
        );
    }

    group.finish()
}

fn prepare(scenario: &str, action: &str, item_id: &str, partition_key: &str) {
    log_event_with_fields(
        Event::ScenarioPreparationStep,
        &[
            ("scenario", scenario),
            ("action", action),
            ("item_id", item_id),
            ("partition_key", partition_key),
        ],
    );
}

fn probe(scenario: &str, item_id: &str, partition_key: &str) {
    log_event_with_fields(
        Event::ScenarioExecutionStep,
        &[
            ("scenario", scenario),
            ("item_id", item_id),
            ("partition_key", partition_key),
        ],
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogue_runs_green() {
        let summary = run(None);
        assert_eq!(summary.total(), scenario_names().len());
        assert!(summary.is_success(), "failed: {:?}", summary.reports());
    }

    #[test]
    fn test_filter_selects_by_substring() {
        let summary = run(Some("token"));
        assert_eq!(summary.total(), 2);
        assert!(summary.is_success());
    }

    #[test]
    fn test_unmatched_filter_runs_nothing() {
        let summary = run(Some("no-such-scenario"));
        assert_eq!(summary.total(), 0);
    }
}
