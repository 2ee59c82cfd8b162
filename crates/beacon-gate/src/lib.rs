//! Validation rules for beacon.
//!
//! Every inbound hit is checked against the measurement-protocol rule set
//! before an event is built from it. All rules run on every hit, so a
//! rejected hit reports every problem at once.
//!
//! # Quick Start
//!
//! ```rust
//! use beacon_gate::validate;
//! use beacon_types::ParameterSet;
//!
//! let params = ParameterSet::from_query("v=1&tid=site1&t=event&ec=nav&ea=click").unwrap();
//! assert!(validate(&params).is_ok());
//!
//! let err = validate(&ParameterSet::new()).unwrap_err();
//! assert_eq!(err.len(), 3); // version, site id, hit type
//! ```

pub mod error;
pub mod rule;
pub mod rules;
pub mod validator;

// Re-exports for convenience.
pub use error::ValidationError;
pub use rule::{RuleOutcome, ValidationRule};
pub use rules::event::{EventActionRule, EventCategoryRule, ACTION_MESSAGE, CATEGORY_MESSAGE};
pub use rules::protocol::{
    HitTypeRule, SiteIdRule, VersionRule, HIT_TYPE_MESSAGE, SITE_ID_MESSAGE, VERSION_MESSAGE,
};
pub use validator::{validate, Validator};
