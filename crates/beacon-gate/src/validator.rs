use beacon_types::ParameterSet;

use crate::error::ValidationError;
use crate::rule::{RuleOutcome, ValidationRule};
use crate::rules::event::{EventActionRule, EventCategoryRule};
use crate::rules::protocol::{HitTypeRule, SiteIdRule, VersionRule};

// ---------------------------------------------------------------------------
// Validator
// ---------------------------------------------------------------------------

/// An ordered list of rules every inbound hit is checked against.
///
/// Unlike a fail-fast pipeline, the validator runs **every** rule and
/// reports every violation, in rule order.
pub struct Validator {
    rules: Vec<Box<dyn ValidationRule>>,
}

impl Validator {
    /// A validator with no rules. Accepts everything.
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// The measurement-protocol rule set:
    /// Version -> SiteId -> HitType -> EventCategory -> EventAction
    pub fn measurement_protocol() -> Self {
        Self::with_rules(vec![
            Box::new(VersionRule),
            Box::new(SiteIdRule),
            Box::new(HitTypeRule),
            Box::new(EventCategoryRule),
            Box::new(EventActionRule),
        ])
    }

    pub fn with_rules(rules: Vec<Box<dyn ValidationRule>>) -> Self {
        Self { rules }
    }

    /// Append a rule; it is evaluated after all existing rules.
    pub fn add_rule(&mut self, rule: Box<dyn ValidationRule>) {
        self.rules.push(rule);
    }

    /// Number of rules.
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Rule names in evaluation order.
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Check `params` against every rule.
    ///
    /// Returns `Ok(())` only when no rule is violated. Otherwise the error
    /// carries one reason per violated rule.
    pub fn validate(&self, params: &ParameterSet) -> Result<(), ValidationError> {
        let mut reasons = Vec::new();
        for rule in &self.rules {
            if let RuleOutcome::Violated { reason } = rule.check(params) {
                tracing::debug!(rule = rule.name(), %reason, "rule violated");
                reasons.push(reason);
            }
        }
        match ValidationError::new(reasons) {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::measurement_protocol()
    }
}

impl std::fmt::Debug for Validator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Validator")
            .field("rules", &self.rule_names())
            .finish()
    }
}

/// Check `params` against the measurement-protocol rule set.
pub fn validate(params: &ParameterSet) -> Result<(), ValidationError> {
    Validator::measurement_protocol().validate(params)
}
