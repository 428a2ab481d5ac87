//! Integrity engine
//!
//! Ties the classifier and the rule registry together: classify once, run
//! every registered rule in order, collect findings into a verdict. The
//! engine is a pure computation over one claim at a time - no I/O, no
//! mutation of inputs, no state shared between claims - so batches may be
//! partitioned across threads or workers freely.

use tracing::{debug, warn};

use core_kernel::BatchId;
use domain_claims::Claim;
use domain_crosswalk::{CodeClassifier, CrosswalkReference};

use crate::error::IntegrityError;
use crate::finding::{Finding, RuleId};
use crate::registry::RuleRegistry;
use crate::verdict::Verdict;

/// Rule id used for the informational finding on claims with no codes
///
/// Empty claims are rejected upstream; when one slips through, the engine
/// reports it rather than failing so a single bad record never aborts a
/// batch.
pub const EMPTY_CLAIM: RuleId = RuleId::new("empty-claim");

/// Evaluates claims against the registered integrity rules
pub struct IntegrityEngine {
    classifier: CodeClassifier,
    registry: RuleRegistry,
}

impl IntegrityEngine {
    /// Creates an engine over a crosswalk reference and a rule registry
    ///
    /// Fails if the reference is missing a required category; this is the
    /// only fatal error in the engine's lifecycle and it surfaces before any
    /// claim is processed.
    pub fn new(
        reference: CrosswalkReference,
        registry: RuleRegistry,
    ) -> Result<Self, IntegrityError> {
        let classifier = CodeClassifier::new(reference)?;
        Ok(Self {
            classifier,
            registry,
        })
    }

    /// Creates an engine with the standard 2026 RxHCC rule set
    pub fn with_standard_rules(reference: CrosswalkReference) -> Result<Self, IntegrityError> {
        Self::new(reference, RuleRegistry::standard())
    }

    /// Returns the rule registry backing this engine
    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    /// Evaluates one claim, producing its verdict
    ///
    /// Never fails: anomalous claims produce findings, unknown codes
    /// classify as inert, and the verdict always comes back.
    pub fn evaluate(&self, claim: &Claim) -> Verdict {
        if claim.has_no_codes() {
            warn!(claim_id = %claim.claim_id, "Claim carries no codes; skipping rules");
            let finding = Finding::info(
                claim.claim_id.clone(),
                EMPTY_CLAIM,
                "Claim has no diagnosis codes and no drug codes; nothing to validate",
            );
            return Verdict::new(claim.claim_id.clone(), vec![finding]);
        }

        let classified = self.classifier.classify(claim);

        let findings: Vec<Finding> = self
            .registry
            .rules()
            .iter()
            .flat_map(|rule| rule.evaluate(&classified))
            .collect();

        debug!(
            claim_id = %claim.claim_id,
            findings = findings.len(),
            "Evaluated claim"
        );

        Verdict::new(claim.claim_id.clone(), findings)
    }

    /// Evaluates a batch of claims, one verdict per claim in input order
    ///
    /// Claims are independent: no shared state, no ordering dependency, and
    /// no fatal path - a batch always yields exactly as many verdicts as it
    /// has claims.
    pub fn evaluate_batch<'a>(
        &self,
        claims: impl IntoIterator<Item = &'a Claim>,
    ) -> Vec<Verdict> {
        let batch_id = BatchId::new();
        let verdicts: Vec<Verdict> = claims
            .into_iter()
            .map(|claim| self.evaluate(claim))
            .collect();

        let blocked = verdicts.iter().filter(|v| v.has_blocking_error).count();
        debug!(
            %batch_id,
            claims = verdicts.len(),
            blocked,
            "Batch evaluation complete"
        );

        verdicts
    }
}

impl std::fmt::Debug for IntegrityEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IntegrityEngine")
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}
