// src/probe/output.rs
use nagiosplugin::{Resource, ServiceState};

/// Start the plugin result for one check.
///
/// The state comes from our own classifiers, so it is fixed on the
/// resource rather than derived from metric thresholds. Line breaks in the
/// summary are flattened to keep the status on a single line.
pub fn report(name: &str, state: ServiceState, summary: &str) -> Resource {
    Resource::new(name)
        .with_fixed_state(state)
        .with_description(summary.replace(['\r', '\n'], " "))
}

pub fn unknown(name: &str, summary: &str) -> Resource {
    report(name, ServiceState::Unknown, summary)
}
