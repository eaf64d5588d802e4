//! Observability events
//!
//! Per OBSERVABILITY.md, this module defines all observable events that can
//! occur while the simulator runs. Events are explicit and typed.

use std::fmt;

/// Observable events.
///
/// Per OBSERVABILITY.md §2, these cover:
/// - Client session lifecycle
/// - Scenario orchestration
/// - Ledger corruption (the one fatal event)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Client session lifecycle
    /// A client session was opened against the shared account
    SessionOpened,
    /// A client session was closed and its session state discarded
    SessionClosed,

    // Scenario orchestration
    /// A scenario group begins
    ScenarioGroupStart,
    /// One scenario begins
    ScenarioStart,
    /// A preparation step (writes, forged tokens) inside a scenario
    ScenarioPreparationStep,
    /// The probed read itself
    ScenarioExecutionStep,
    /// The scenario observed its expected outcome kind
    ScenarioPass,
    /// The scenario observed a different outcome kind
    ScenarioFail,
    /// The scenario group finished; carries pass/fail counts
    ScenarioGroupEnd,

    // Corruption
    /// The version ledger is corrupt (FATAL)
    LedgerCorruption,
}

impl Event {
    /// Returns the event name as logged.
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::SessionOpened => "SESSION_OPENED",
            Event::SessionClosed => "SESSION_CLOSED",
            Event::ScenarioGroupStart => "SCENARIO_GROUP_START",
            Event::ScenarioStart => "SCENARIO_START",
            Event::ScenarioPreparationStep => "SCENARIO_PREPARATION_STEP",
            Event::ScenarioExecutionStep => "SCENARIO_EXECUTION_STEP",
            Event::ScenarioPass => "SCENARIO_PASS",
            Event::ScenarioFail => "SCENARIO_FAIL",
            Event::ScenarioGroupEnd => "SCENARIO_GROUP_END",
            Event::LedgerCorruption => "LEDGER_CORRUPTION",
        }
    }

    /// Returns true for events that indicate an unrecoverable condition.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Event::LedgerCorruption)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names_are_screaming_snake() {
        assert_eq!(Event::SessionOpened.as_str(), "SESSION_OPENED");
        assert_eq!(Event::ScenarioGroupEnd.as_str(), "SCENARIO_GROUP_END");
        assert_eq!(Event::LedgerCorruption.as_str(), "LEDGER_CORRUPTION");
    }

    #[test]
    fn test_only_corruption_is_fatal() {
        assert!(Event::LedgerCorruption.is_fatal());
        assert!(!Event::SessionOpened.is_fatal());
        assert!(!Event::ScenarioFail.is_fatal());
    }
}
