//! Scenario orchestration
//!
//! Each scenario runs against a fresh account (its own store and ledger),
//! observes exactly one probed read, and is judged by outcome kind: the
//! scenario passes when the observed kind matches the expected one. A
//! failing scenario never stops the group.

use crate::client::{Account, ClientError, ClientResult, ClientSession};
use crate::observability::{log_event_with_fields, Event};
use crate::read_path::ReadOutcome;

/// The outcome kind a scenario expects from its probed read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    /// The read returns the item.
    Found,
    /// The read misses.
    NotFound,
    /// The read is rejected for demanding an unreached version.
    ConsistencyNotYetAvailable,
    /// The operation is rejected because the session is closed.
    SessionClosed,
}

impl Expected {
    /// Returns the string representation used in logs and summaries.
    pub fn as_str(&self) -> &'static str {
        match self {
            Expected::Found => "FOUND",
            Expected::NotFound => "NOT_FOUND",
            Expected::ConsistencyNotYetAvailable => "CONSISTENCY_NOT_YET_AVAILABLE",
            Expected::SessionClosed => "SESSION_CLOSED",
        }
    }

    /// Returns true if the observation matches this expectation.
    pub fn matches(&self, observation: &ClientResult<ReadOutcome>) -> bool {
        match (self, observation) {
            (Expected::Found, Ok(outcome)) => outcome.is_found(),
            (Expected::NotFound, Ok(outcome)) => matches!(outcome, ReadOutcome::NotFound),
            (Expected::ConsistencyNotYetAvailable, Ok(outcome)) => {
                matches!(outcome, ReadOutcome::ConsistencyNotYetAvailable { .. })
            }
            (Expected::SessionClosed, Err(ClientError::SessionClosed { .. })) => true,
            _ => false,
        }
    }
}

/// Renders an observation for logs and reports.
pub fn describe(observation: &ClientResult<ReadOutcome>) -> String {
    match observation {
        Ok(ReadOutcome::ConsistencyNotYetAvailable {
            required,
            available,
        }) => format!(
            "CONSISTENCY_NOT_YET_AVAILABLE(required={}, available={})",
            required, available
        ),
        Ok(outcome) => outcome.kind().as_str().to_string(),
        Err(err) => format!("error {}", err.code()),
    }
}

/// The judged result of one scenario.
#[derive(Debug, Clone)]
pub struct ScenarioReport {
    pub name: &'static str,
    pub expected: Expected,
    pub observed: String,
    pub passed: bool,
}

/// The results of a finished scenario group.
#[derive(Debug, Clone, Default)]
pub struct ScenarioSummary {
    reports: Vec<ScenarioReport>,
}

impl ScenarioSummary {
    /// All individual reports, in run order.
    pub fn reports(&self) -> &[ScenarioReport] {
        &self.reports
    }

    /// Number of scenarios run.
    pub fn total(&self) -> usize {
        self.reports.len()
    }

    /// Number of scenarios that observed their expected outcome.
    pub fn passed(&self) -> usize {
        self.reports.iter().filter(|report| report.passed).count()
    }

    /// Number of scenarios that observed something else.
    pub fn failed(&self) -> usize {
        self.total() - self.passed()
    }

    /// True when every scenario passed.
    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }
}

/// Runs scenarios and collects their reports.
pub struct ScenarioGroup {
    name: &'static str,
    summary: ScenarioSummary,
}

impl ScenarioGroup {
    /// Starts a group and logs the group marker.
    pub fn new(name: &'static str) -> Self {
        log_event_with_fields(Event::ScenarioGroupStart, &[("group", name)]);
        Self {
            name,
            summary: ScenarioSummary::default(),
        }
    }

    /// Runs a scenario that needs one connected client.
    ///
    /// The client is connected against a fresh account and closed
    /// afterwards; the account is torn down when the scenario ends.
    pub fn run_one_client<F>(&mut self, scenario: &'static str, expected: Expected, body: F)
    where
        F: FnOnce(&Account, &mut ClientSession) -> ClientResult<ReadOutcome>,
    {
        log_event_with_fields(Event::ScenarioStart, &[("scenario", scenario)]);
        let account = Account::new();
        let mut client = account.connect();
        let observation = body(&account, &mut client);
        client.close();
        self.record(scenario, expected, observation);
    }

    /// Runs a scenario that needs two independently connected clients.
    pub fn run_two_client<F>(&mut self, scenario: &'static str, expected: Expected, body: F)
    where
        F: FnOnce(&Account, &mut ClientSession, &mut ClientSession) -> ClientResult<ReadOutcome>,
    {
        log_event_with_fields(Event::ScenarioStart, &[("scenario", scenario)]);
        let account = Account::new();
        let mut first = account.connect();
        let mut second = account.connect();
        let observation = body(&account, &mut first, &mut second);
        first.close();
        second.close();
        self.record(scenario, expected, observation);
    }

    /// Logs the group marker and returns the collected summary.
    pub fn finish(self) -> ScenarioSummary {
        log_event_with_fields(
            Event::ScenarioGroupEnd,
            &[
                ("group", self.name),
                ("passed", &self.summary.passed().to_string()),
                ("failed", &self.summary.failed().to_string()),
            ],
        );
        self.summary
    }

    fn record(
        &mut self,
        scenario: &'static str,
        expected: Expected,
        observation: ClientResult<ReadOutcome>,
    ) {
        let observed = describe(&observation);
        let passed = expected.matches(&observation);
        let event = if passed {
            Event::ScenarioPass
        } else {
            Event::ScenarioFail
        };
        log_event_with_fields(
            event,
            &[
                ("scenario", scenario),
                ("expected", expected.as_str()),
                ("observed", &observed),
            ],
        );
        self.summary.reports.push(ScenarioReport {
            name: scenario,
            expected,
            observed,
            passed,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_expected_matches_outcome_kinds() {
        assert!(Expected::NotFound.matches(&Ok(ReadOutcome::NotFound)));
        assert!(!Expected::Found.matches(&Ok(ReadOutcome::NotFound)));
        assert!(Expected::SessionClosed.matches(&Err(ClientError::SessionClosed {
            session_id: Uuid::nil(),
        })));
        assert!(!Expected::SessionClosed
            .matches(&Err(ClientError::invalid_request("empty id"))));
    }

    #[test]
    fn test_group_judges_by_outcome_kind() {
        let mut group = ScenarioGroup::new("judging");
        group.run_one_client("expected-miss", Expected::NotFound, |_, client| {
            client.read("missing", "nowhere", "document")
        });
        group.run_one_client("mislabelled", Expected::Found, |_, client| {
            client.read("missing", "nowhere", "document")
        });

        let summary = group.finish();
        assert_eq!(summary.total(), 2);
        assert_eq!(summary.passed(), 1);
        assert_eq!(summary.failed(), 1);
        assert!(!summary.is_success());
        assert!(summary.reports()[0].passed);
        assert!(!summary.reports()[1].passed);
    }

    #[test]
    fn test_describe_renders_rejection_detail() {
        use crate::session::PartitionVersion;
        let observation = Ok(ReadOutcome::ConsistencyNotYetAvailable {
            required: PartitionVersion::new(5),
            available: PartitionVersion::new(2),
        });
        assert_eq!(
            describe(&observation),
            "CONSISTENCY_NOT_YET_AVAILABLE(required=5, available=2)"
        );
    }
}
