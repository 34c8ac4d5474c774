//! Table checks and their accumulation into a `Validation`.

use crate::core::State;
use crate::machine::Transition;
use crate::validation::issues::TableIssue;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// A single table check: returns every issue it finds, or nothing.
pub type TableCheck<S> = Box<dyn Fn(&S, &[Transition<S>]) -> Vec<TableIssue> + Send + Sync>;

/// Outcome of running table checks: success, or every issue found.
pub type TableValidation = Validation<(), NonEmptyVec<TableIssue>>;

/// A set of checks run together against one table.
///
/// Every check runs, and every issue from every check is reported; the lint
/// never stops at the first problem.
pub struct TableRules<S: State> {
    checks: Vec<TableCheck<S>>,
}

impl<S: State + 'static> TableRules<S> {
    /// No checks at all.
    pub fn empty() -> Self {
        Self { checks: Vec::new() }
    }

    /// Empty source lists, shadowed rows and unreachable states.
    pub fn standard() -> Self {
        Self::empty()
            .check(|_, table| empty_sources(table))
            .check(|_, table| shadowed_entries(table))
            .check(unreachable_states)
    }

    /// Add a check that may report several issues.
    pub fn check<F>(mut self, check: F) -> Self
    where
        F: Fn(&S, &[Transition<S>]) -> Vec<TableIssue> + Send + Sync + 'static,
    {
        self.checks.push(Box::new(check));
        self
    }

    /// Add a predicate over the table with an error message.
    pub fn require<F>(self, predicate: F, message: impl Into<String>) -> Self
    where
        F: Fn(&S, &[Transition<S>]) -> bool + Send + Sync + 'static,
    {
        let message = message.into();
        self.check(move |initial, table| {
            if predicate(initial, table) {
                Vec::new()
            } else {
                vec![TableIssue::Custom {
                    message: message.clone(),
                }]
            }
        })
    }

    /// Run every check against `table` started from `initial`.
    pub fn validate(&self, initial: &S, table: &[Transition<S>]) -> TableValidation {
        let issues: Vec<TableIssue> = self
            .checks
            .iter()
            .flat_map(|check| check(initial, table))
            .collect();

        match NonEmptyVec::from_vec(issues) {
            Some(issues) => Validation::Failure(issues),
            None => Validation::Success(()),
        }
    }
}

impl<S: State + 'static> Default for TableRules<S> {
    fn default() -> Self {
        Self::standard()
    }
}

/// Rows with no source states.
pub fn empty_sources<S: State>(table: &[Transition<S>]) -> Vec<TableIssue> {
    table
        .iter()
        .enumerate()
        .filter(|(_, t)| t.sources.is_empty())
        .map(|(index, t)| TableIssue::EmptySources {
            index,
            event: t.event.clone(),
        })
        .collect()
}

/// Source states already claimed for the same event by an earlier row.
///
/// First match wins when firing, so such a source can never select the
/// later row.
pub fn shadowed_entries<S: State>(table: &[Transition<S>]) -> Vec<TableIssue> {
    let mut issues = Vec::new();
    for (index, transition) in table.iter().enumerate() {
        for state in &transition.sources {
            let earlier = table[..index]
                .iter()
                .position(|t| t.event == transition.event && t.allows_from(state));
            if let Some(shadowed_by) = earlier {
                issues.push(TableIssue::ShadowedEntry {
                    index,
                    event: transition.event.clone(),
                    state: state.name().to_string(),
                    shadowed_by,
                });
            }
        }
    }
    issues
}

/// States named in the table that no sequence of events reaches from
/// `initial`. Guards are ignored.
pub fn unreachable_states<S: State>(initial: &S, table: &[Transition<S>]) -> Vec<TableIssue> {
    let mut reachable = vec![initial.clone()];
    let mut changed = true;
    while changed {
        changed = false;
        for transition in table {
            let entered = transition.sources.iter().any(|s| reachable.contains(s));
            if entered && !reachable.contains(&transition.to) {
                reachable.push(transition.to.clone());
                changed = true;
            }
        }
    }

    let mut mentioned: Vec<&S> = Vec::new();
    for transition in table {
        for state in transition.sources.iter().chain(std::iter::once(&transition.to)) {
            if !mentioned.contains(&state) {
                mentioned.push(state);
            }
        }
    }

    mentioned
        .into_iter()
        .filter(|state| !reachable.contains(state))
        .map(|state| TableIssue::UnreachableState {
            state: state.name().to_string(),
        })
        .collect()
}
