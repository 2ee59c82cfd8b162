use crate::event::Event;
use crate::params::{keys, ParameterSet};

/// Turn the parameters of an `event` hit into an [`Event`].
///
/// The input is assumed to have passed validation already; nothing is
/// re-checked here. `client_id` and `value` are not read from the input yet
/// and keep their defaults.
pub fn build_event(params: &ParameterSet) -> Event {
    Event {
        site: params.get(keys::SITE_ID).to_owned(),
        category: params.get(keys::EVENT_CATEGORY).to_owned(),
        action: params.get(keys::EVENT_ACTION).to_owned(),
        label: params.get(keys::EVENT_LABEL).to_owned(),
        ..Event::default()
    }
}
