//! Rule registry
//!
//! The registry decouples rule logic from the evaluation loop. Registration
//! order is evaluation order and is preserved in every verdict's finding
//! sequence - a deliberate commitment so output is deterministic and
//! diffable across runs regardless of how claims are scheduled.

use crate::rule::IntegrityRule;
use crate::rules::{
    DiagnosisTypeConflictRule, DrugSupportRule, RemissionConflictRule, SpecificityGapRule,
};

/// Ordered collection of integrity rules
#[derive(Default)]
pub struct RuleRegistry {
    rules: Vec<Box<dyn IntegrityRule>>,
}

impl RuleRegistry {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the standard 2026 RxHCC rule set
    ///
    /// Conflict rules run before advisory rules so blocking findings lead
    /// the report.
    pub fn standard() -> Self {
        Self::new()
            .with_rule(DiagnosisTypeConflictRule)
            .with_rule(RemissionConflictRule)
            .with_rule(DrugSupportRule)
            .with_rule(SpecificityGapRule)
    }

    /// Registers a rule at the end of the evaluation order
    pub fn register(&mut self, rule: Box<dyn IntegrityRule>) {
        self.rules.push(rule);
    }

    /// Registers a rule, builder-style
    pub fn with_rule(mut self, rule: impl IntegrityRule + 'static) -> Self {
        self.register(Box::new(rule));
        self
    }

    /// Returns the registered rules in evaluation order
    pub fn rules(&self) -> &[Box<dyn IntegrityRule>] {
        &self.rules
    }

    /// Returns the number of registered rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if no rules are registered
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl std::fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let ids: Vec<&str> = self.rules.iter().map(|r| r.id().as_str()).collect();
        f.debug_struct("RuleRegistry").field("rules", &ids).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{
        DIAGNOSIS_TYPE_CONFLICT, DRUG_SUPPORT, REMISSION_CONFLICT, SPECIFICITY_GAP,
    };

    #[test]
    fn test_standard_registry_order() {
        let registry = RuleRegistry::standard();
        let ids: Vec<_> = registry.rules().iter().map(|r| r.id()).collect();
        assert_eq!(
            ids,
            vec![
                DIAGNOSIS_TYPE_CONFLICT,
                REMISSION_CONFLICT,
                DRUG_SUPPORT,
                SPECIFICITY_GAP,
            ]
        );
    }

    #[test]
    fn test_registration_preserves_order() {
        let registry = RuleRegistry::new()
            .with_rule(SpecificityGapRule)
            .with_rule(DiagnosisTypeConflictRule);

        let ids: Vec<_> = registry.rules().iter().map(|r| r.id()).collect();
        assert_eq!(ids, vec![SPECIFICITY_GAP, DIAGNOSIS_TYPE_CONFLICT]);
    }

    #[test]
    fn test_empty_registry() {
        let registry = RuleRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }
}
