use beacon_types::{keys, ParameterSet};

use crate::rule::{RuleOutcome, ValidationRule};

pub const VERSION_MESSAGE: &str = "Version v must equal 1";
pub const SITE_ID_MESSAGE: &str = "Site id tid must be supplied";
pub const HIT_TYPE_MESSAGE: &str =
    "Hit type 't' must be set, only type 'event' is currently supported";

/// `v` must be exactly `"1"`.
pub struct VersionRule;

impl ValidationRule for VersionRule {
    fn name(&self) -> &str {
        "version"
    }

    fn check(&self, params: &ParameterSet) -> RuleOutcome {
        if params.get(keys::VERSION) == keys::PROTOCOL_VERSION {
            RuleOutcome::Pass
        } else {
            RuleOutcome::violated(VERSION_MESSAGE)
        }
    }
}

/// `tid` must be present and non-empty.
pub struct SiteIdRule;

impl ValidationRule for SiteIdRule {
    fn name(&self) -> &str {
        "site-id"
    }

    fn check(&self, params: &ParameterSet) -> RuleOutcome {
        if params.get(keys::SITE_ID).is_empty() {
            RuleOutcome::violated(SITE_ID_MESSAGE)
        } else {
            RuleOutcome::Pass
        }
    }
}

/// `t` must be `"event"`, the only supported hit type.
pub struct HitTypeRule;

impl ValidationRule for HitTypeRule {
    fn name(&self) -> &str {
        "hit-type"
    }

    fn check(&self, params: &ParameterSet) -> RuleOutcome {
        if params.get(keys::HIT_TYPE) == keys::HIT_TYPE_EVENT {
            RuleOutcome::Pass
        } else {
            RuleOutcome::violated(HIT_TYPE_MESSAGE)
        }
    }
}
