use super::{Level, Metric};

/// Advisory message shown under every reported item of `metric` at `level`.
#[must_use]
pub const fn insight(metric: Metric, level: Level) -> &'static str {
    match (metric, level) {
        (Metric::Lcom, Level::Ok) => "Cohesion is healthy. Classes are focused.",
        (Metric::Lcom, Level::Warning) => {
            "Cohesion is getting weaker → the class may be mixing multiple responsibilities."
        }
        (Metric::Lcom, Level::Critical) => {
            "Very low cohesion → the class is handling too many concerns. Suggestion: split into smaller classes (SRP)."
        }
        (Metric::Wmc, Level::Ok) => "Complexity is under control.",
        (Metric::Wmc, Level::Warning) => {
            "Complexity is increasing → consider extracting helper methods or simplifying logic."
        }
        (Metric::Wmc, Level::Critical) => {
            "High complexity → difficult to test and maintain. Suggestion: refactor into smaller methods or delegate responsibilities to services."
        }
        (Metric::Cbo, Level::Ok) => "Coupling level is acceptable.",
        (Metric::Cbo, Level::Warning) => {
            "Coupling is getting higher → class depends on many others."
        }
        (Metric::Cbo, Level::Critical) => {
            "High coupling → changes in other classes may easily break this one. Suggestion: apply Dependency Inversion or create interfaces."
        }
        (Metric::Rfc, Level::Ok) => "Response set is small and manageable.",
        (Metric::Rfc, Level::Warning) => {
            "Class exposes too many methods → consider reducing its interface."
        }
        (Metric::Rfc, Level::Critical) => {
            "Very high number of accessible methods → too many responsibilities. Suggestion: encapsulate better and remove unnecessary methods."
        }
    }
}
