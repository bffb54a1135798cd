//! Conformance test fixture runner
//!
//! Loads YAML fixtures and runs them against the clause engine. Criteria and
//! subjects use the `kase` config format ([`CriterionConfig`], [`ValueConfig`]).
//!
//! ```yaml
//! name: guarded calculator
//! description: a throwing clause ends the match
//! clauses:
//!   - when: [{ literal: div }, { builtin: non_null }, { literal: 0 }]
//!     throw: divide by zero
//!   - when: [{ literal: div }, { builtin: any }, { builtin: any }]
//!     then: divided
//! cases:
//!   - name: zero divisor
//!     subjects: [div, 3, 0]
//!     expect_error: divide by zero
//!     expect_invoked: 0
//! ```

use kase::{Case, CaseError, Criterion, CriterionConfig, Value, ValueConfig};
use serde::Deserialize;

use crate::Probe;

/// A complete test fixture
#[derive(Debug, Deserialize)]
pub struct Fixture {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub clauses: Vec<ClauseConfig>,
    pub cases: Vec<TestCase>,
}

/// One `when` clause plus its action.
#[derive(Debug, Deserialize)]
pub struct ClauseConfig {
    pub when: Vec<CriterionConfig>,
    #[serde(flatten)]
    pub action: ActionConfig,
}

/// What a matching clause does.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionConfig {
    /// Produce this result.
    Then(String),
    /// Raise this error.
    Throw(String),
}

/// Test case
#[derive(Debug, Deserialize)]
pub struct TestCase {
    pub name: String,
    pub subjects: Vec<ValueConfig>,
    /// Expected result. Absent means no clause matched.
    #[serde(default)]
    pub expect: Option<String>,
    /// Expected error: a thrown message or a `CaseError` display string.
    #[serde(default)]
    pub expect_error: Option<String>,
    /// Index of the clause whose action ran.
    #[serde(default)]
    pub expect_invoked: Option<usize>,
}

/// What evaluating a case produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A `then` action ran and produced this value.
    Matched(String),
    /// No clause matched.
    NoMatch,
    /// A `throw` action ran, or the engine rejected a clause.
    Error(String),
}

impl TestCase {
    /// The outcome this case expects.
    #[must_use]
    pub fn expected(&self) -> Outcome {
        match (&self.expect_error, &self.expect) {
            (Some(error), _) => Outcome::Error(error.clone()),
            (None, Some(value)) => Outcome::Matched(value.clone()),
            (None, None) => Outcome::NoMatch,
        }
    }

    /// Build the subject values.
    ///
    /// # Errors
    ///
    /// Returns [`CaseError::InvalidConfig`] for a subject that is not a valid value.
    pub fn build_subjects(&self) -> Result<Vec<Value>, CaseError> {
        self.subjects
            .iter()
            .cloned()
            .map(ValueConfig::into_value)
            .collect()
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Builder: Convert config to kase types
// ═══════════════════════════════════════════════════════════════════════════════

/// A clause with its criteria built.
#[derive(Debug, Clone)]
pub struct CompiledClause {
    pub criteria: Vec<Criterion>,
    pub action: ActionConfig,
}

impl ClauseConfig {
    /// Build the runtime criteria.
    ///
    /// # Errors
    ///
    /// Returns any error from [`CriterionConfig::into_criterion`].
    pub fn build(&self) -> Result<CompiledClause, CaseError> {
        let criteria = self
            .when
            .iter()
            .cloned()
            .map(CriterionConfig::into_criterion)
            .collect::<Result<_, _>>()?;
        Ok(CompiledClause {
            criteria,
            action: self.action.clone(),
        })
    }
}

/// Run a subject tuple through compiled clauses, recording actions on `probe`.
pub fn evaluate(clauses: &[CompiledClause], subjects: Vec<Value>, probe: &Probe) -> Outcome {
    let mut case: Case<String> = Case::of(subjects);

    for (index, clause) in clauses.iter().enumerate() {
        let handle = match case.when(clause.criteria.iter().cloned()) {
            Ok(handle) => handle,
            Err(e) => return Outcome::Error(e.to_string()),
        };
        case = match &clause.action {
            ActionConfig::Then(value) => handle.apply(|| probe.record(index, value.clone())),
            ActionConfig::Throw(message) => {
                match handle.then_throw(|| probe.record(index, message.clone())) {
                    Ok(case) => case,
                    Err(thrown) => return Outcome::Error(thrown),
                }
            }
        };
    }

    match case.or_no_match() {
        Ok(value) => Outcome::Matched(value),
        Err(CaseError::NoClauseMatched) => Outcome::NoMatch,
        Err(e) => Outcome::Error(e.to_string()),
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Runner
// ═══════════════════════════════════════════════════════════════════════════════

/// Result of running a single test case
#[derive(Debug)]
pub struct CaseResult {
    pub case_name: String,
    pub passed: bool,
    pub expected: Outcome,
    pub actual: Outcome,
    pub invoked: Vec<usize>,
}

impl Fixture {
    /// Parse a fixture from YAML
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    /// Parse multiple fixtures from a YAML file with `---` separators
    pub fn from_yaml_multi(yaml: &str) -> Result<Vec<Self>, serde_yaml::Error> {
        let mut fixtures = Vec::new();
        for doc in serde_yaml::Deserializer::from_str(yaml) {
            fixtures.push(Self::deserialize(doc)?);
        }
        Ok(fixtures)
    }

    /// Run all test cases and return results
    ///
    /// # Errors
    ///
    /// Returns a [`CaseError`] if a criterion or subject in the fixture is invalid.
    pub fn run(&self) -> Result<Vec<CaseResult>, CaseError> {
        let clauses = self
            .clauses
            .iter()
            .map(ClauseConfig::build)
            .collect::<Result<Vec<_>, _>>()?;

        self.cases
            .iter()
            .map(|case| -> Result<CaseResult, CaseError> {
                let probe = Probe::new();
                let actual = evaluate(&clauses, case.build_subjects()?, &probe);
                let invoked = probe.invoked();
                let expected = case.expected();

                let invoked_ok = match case.expect_invoked {
                    Some(index) => invoked == [index],
                    None => invoked.len() <= 1,
                };
                let silent_on_miss = actual != Outcome::NoMatch || invoked.is_empty();

                Ok(CaseResult {
                    case_name: case.name.clone(),
                    passed: actual == expected && invoked_ok && silent_on_miss,
                    expected,
                    actual,
                    invoked,
                })
            })
            .collect()
    }

    /// Run all test cases and panic on first failure
    pub fn run_and_assert(&self) {
        let results = self
            .run()
            .unwrap_or_else(|e| panic!("Fixture '{}' failed to build: {e}", self.name));
        for result in results {
            assert!(
                result.passed,
                "Fixture '{}' case '{}' failed: expected {:?}, got {:?} (invoked {:?})",
                self.name, result.case_name, result.expected, result.actual, result.invoked
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CALCULATOR: &str = r#"
name: calculator
description: throw on zero divisor
clauses:
  - when: [{ literal: div }, { builtin: non_null }, { literal: 0 }]
    throw: divide by zero
  - when: [{ literal: div }, { builtin: any }, { builtin: any }]
    then: divided
cases:
  - name: zero divisor
    subjects: [div, 3, 0]
    expect_error: divide by zero
    expect_invoked: 0
  - name: divisor
    subjects: [div, 6, 3]
    expect: divided
    expect_invoked: 1
  - name: unknown op
    subjects: [mod, 6, 3]
"#;

    #[test]
    fn test_parse_fixture() {
        let fixture = Fixture::from_yaml(CALCULATOR).unwrap();
        assert_eq!(fixture.name, "calculator");
        assert_eq!(fixture.clauses.len(), 2);
        assert!(matches!(fixture.clauses[0].action, ActionConfig::Throw(_)));
        assert_eq!(fixture.cases[2].expected(), Outcome::NoMatch);
    }

    #[test]
    fn test_run_fixture() {
        let fixture = Fixture::from_yaml(CALCULATOR).unwrap();
        let results = fixture.run().unwrap();
        assert_eq!(results.len(), 3);
        assert!(results.iter().all(|r| r.passed), "{results:?}");
        assert_eq!(results[0].invoked, vec![0]);
        assert!(results[2].invoked.is_empty());
    }

    #[test]
    fn test_failing_expectation_is_reported() {
        let yaml = r#"
name: wrong expectation
clauses:
  - when: [{ builtin: any }]
    then: hit
cases:
  - name: expects a miss
    subjects: [1]
"#;
        let results = Fixture::from_yaml(yaml).unwrap().run().unwrap();
        assert!(!results[0].passed);
        assert_eq!(results[0].actual, Outcome::Matched("hit".into()));
    }

    #[test]
    fn test_arity_error_surfaces_as_outcome() {
        let clauses = vec![CompiledClause {
            criteria: vec![kase::ANY],
            action: ActionConfig::Then("x".into()),
        }];
        let probe = Probe::new();
        let outcome = evaluate(&clauses, vec![Value::Int(1), Value::Int(2)], &probe);
        assert_eq!(
            outcome,
            Outcome::Error("clause has 1 criteria, but the match has 2 subjects".into())
        );
        assert_eq!(probe.count(), 0);
    }

    #[test]
    fn test_invalid_regex_fails_build() {
        let yaml = r#"
name: bad regex
clauses:
  - when: [{ regex: "(" }]
    then: never
cases: []
"#;
        let err = Fixture::from_yaml(yaml).unwrap().run().unwrap_err();
        assert!(matches!(err, CaseError::InvalidPattern { .. }));
    }
}
