//! Keyword predicates shared by the scorer, driver pass and remediation planner.

use crate::profile::domain::present;
use crate::profile::{BreachRecord, Observation, Routine, SocialAccount};

/// Platform or note keywords that mark an account as leaking location traces.
pub const GPS_SIGNAL_KEYWORDS: &[&str] = &["strava", "gps"];

/// Fitness and activity platforms that broadcast GPS tracks by default.
pub const GPS_BROADCAST_PLATFORMS: &[&str] = &["strava", "garmin", "fitbit", "alltrails"];

/// Note keywords suggesting an account shares movement or activity data.
pub const GPS_NOTE_KEYWORDS: &[&str] = &["gps", "fitness", "tracking"];

pub const PASSWORD_KEYWORD: &str = "password";

pub const HIGH_SEVERITY_LEVELS: &[&str] = &["high", "critical"];

pub const VENMO_PLATFORM: &str = "venmo";

fn contains_any(text: Option<&str>, keywords: &[&str]) -> bool {
    match text {
        Some(text) => {
            let lowered = text.to_lowercase();
            keywords.iter().any(|keyword| lowered.contains(keyword))
        }
        None => false,
    }
}

/// True when the account's platform or notes mention a GPS-leaking service.
pub fn mentions_gps_signal(account: &SocialAccount) -> bool {
    contains_any(present(&account.platform), GPS_SIGNAL_KEYWORDS)
        || contains_any(present(&account.notes), GPS_SIGNAL_KEYWORDS)
}

/// Broader check used when recommending GPS hygiene: known fitness platforms, or notes
/// describing GPS/fitness tracking.
pub fn is_gps_broadcaster(account: &SocialAccount) -> bool {
    contains_any(present(&account.platform), GPS_BROADCAST_PLATFORMS)
        || contains_any(present(&account.notes), GPS_NOTE_KEYWORDS)
}

pub fn is_password_exposure(record: &BreachRecord) -> bool {
    record
        .data_types
        .iter()
        .any(|data_type| contains_any(Some(data_type), &[PASSWORD_KEYWORD]))
}

pub fn is_high_severity(record: &BreachRecord) -> bool {
    present(&record.severity)
        .map(|severity| {
            HIGH_SEVERITY_LEVELS
                .iter()
                .any(|level| severity.eq_ignore_ascii_case(level))
        })
        .unwrap_or(false)
}

pub fn is_high_exploitability(observation: &Observation) -> bool {
    present(&observation.exploitability)
        .map(|level| level.eq_ignore_ascii_case("high"))
        .unwrap_or(false)
}

pub fn is_public_venmo(account: &SocialAccount) -> bool {
    account.is_public() && contains_any(present(&account.platform), &[VENMO_PLATFORM])
}

/// Routine consistency as a 0-1 fraction. Importers record either a fraction or a
/// percentage; anything above 1 is read as a percentage.
pub fn consistency_fraction(routine: &Routine) -> f64 {
    let raw = routine.consistency.filter(|value| value.is_finite()).unwrap_or(0.0);
    let fraction = if raw > 1.0 { raw / 100.0 } else { raw };
    fraction.clamp(0.0, 1.0)
}

/// Routine consistency on the 0-100 scale.
pub fn consistency_percent(routine: &Routine) -> f64 {
    consistency_fraction(routine) * 100.0
}
