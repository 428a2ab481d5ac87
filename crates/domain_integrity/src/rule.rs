//! Rule capability abstraction

use domain_crosswalk::ClassifiedClaim;

use crate::finding::{Finding, RuleId};

/// A single integrity rule
///
/// A rule is a pure predicate over a classified claim: it reads the facts
/// computed by the classifier and returns zero or more findings. An empty
/// vec is the normal case and carries no signal beyond "rule did not
/// trigger".
///
/// Rules are stateless across claims and share nothing mutable, so one rule
/// instance may evaluate any number of claims concurrently. New rules are
/// added by implementing this trait and registering the implementation; the
/// evaluation loop never changes.
pub trait IntegrityRule: Send + Sync {
    /// Stable identifier reported on every finding this rule produces
    fn id(&self) -> RuleId;

    /// Evaluates the rule against one classified claim
    fn evaluate(&self, claim: &ClassifiedClaim) -> Vec<Finding>;
}
