use beacon_types::{keys, ParameterSet};

use crate::rule::{RuleOutcome, ValidationRule};

pub const CATEGORY_MESSAGE: &str = "Events must have a category";
pub const ACTION_MESSAGE: &str = "Events must have an action";

fn is_event_hit(params: &ParameterSet) -> bool {
    params.get(keys::HIT_TYPE) == keys::HIT_TYPE_EVENT
}

/// Event hits must carry a non-empty `ec`. Other hit types are not checked.
pub struct EventCategoryRule;

impl ValidationRule for EventCategoryRule {
    fn name(&self) -> &str {
        "event-category"
    }

    fn check(&self, params: &ParameterSet) -> RuleOutcome {
        if is_event_hit(params) && params.get(keys::EVENT_CATEGORY).is_empty() {
            RuleOutcome::violated(CATEGORY_MESSAGE)
        } else {
            RuleOutcome::Pass
        }
    }
}

/// Event hits must carry a non-empty `ea`. Other hit types are not checked.
pub struct EventActionRule;

impl ValidationRule for EventActionRule {
    fn name(&self) -> &str {
        "event-action"
    }

    fn check(&self, params: &ParameterSet) -> RuleOutcome {
        if is_event_hit(params) && params.get(keys::EVENT_ACTION).is_empty() {
            RuleOutcome::violated(ACTION_MESSAGE)
        } else {
            RuleOutcome::Pass
        }
    }
}
