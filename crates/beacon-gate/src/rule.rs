use beacon_types::ParameterSet;

// ---------------------------------------------------------------------------
// RuleOutcome
// ---------------------------------------------------------------------------

/// The outcome of checking a single rule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RuleOutcome {
    /// The parameters satisfy the rule.
    Pass,
    /// The parameters violate the rule.
    Violated { reason: String },
}

impl RuleOutcome {
    /// Violation with the given reason.
    pub fn violated(reason: impl Into<String>) -> Self {
        Self::Violated {
            reason: reason.into(),
        }
    }

    /// Returns `true` if the outcome is `Pass`.
    pub fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }

    /// Returns `true` if the outcome is `Violated`.
    pub fn is_violated(&self) -> bool {
        matches!(self, Self::Violated { .. })
    }
}

// ---------------------------------------------------------------------------
// ValidationRule trait
// ---------------------------------------------------------------------------

/// A single check applied to an inbound hit.
///
/// Rules are independent of one another: the validator runs every rule and
/// collects every violation rather than stopping at the first.
///
/// The trait is object-safe and `Send + Sync` so rules can be stored in a
/// `Vec<Box<dyn ValidationRule>>` and shared across request tasks.
pub trait ValidationRule: Send + Sync {
    /// Short name of this rule (e.g., "version", "site-id").
    fn name(&self) -> &str;

    /// Check the parameters against this rule.
    fn check(&self, params: &ParameterSet) -> RuleOutcome;
}
