//! UI state transition logic
//!
//! Pure functions for pane cycling, toast lifetime and the busy indicator.

use crate::Pane;

/// How long a toast stays on screen
pub const TOAST_DURATION_MS: u128 = 2500;

/// Check whether a toast has been visible long enough to dismiss
pub fn should_dismiss_toast(elapsed_ms: u128) -> bool {
    elapsed_ms >= TOAST_DURATION_MS
}

/// Next pane to focus, skipping disabled panes
///
/// Returns `current` unchanged when the other pane is disabled.
///
/// # Examples
/// ```
/// use dcastui::Pane;
/// use dcastui::logic::ui::next_pane;
///
/// assert_eq!(next_pane(Pane::Upload, true, true), Pane::Search);
/// assert_eq!(next_pane(Pane::Search, true, true), Pane::Upload);
/// assert_eq!(next_pane(Pane::Upload, true, false), Pane::Upload);
/// ```
pub fn next_pane(current: Pane, upload_enabled: bool, search_enabled: bool) -> Pane {
    match current {
        Pane::Upload if search_enabled => Pane::Search,
        Pane::Search if upload_enabled => Pane::Upload,
        _ => current,
    }
}

/// Initial focus: the first enabled pane
pub fn initial_pane(upload_enabled: bool, search_enabled: bool) -> Pane {
    if upload_enabled || !search_enabled {
        Pane::Upload
    } else {
        Pane::Search
    }
}

/// Position of the sweeping busy indicator, in [0.0, 1.0]
///
/// The request has no known progress, so the bar sweeps back and forth with
/// a period of `period_ms`.
pub fn busy_sweep_ratio(elapsed_ms: u128, period_ms: u128) -> f64 {
    if period_ms == 0 {
        return 0.0;
    }
    let phase = (elapsed_ms % period_ms) as f64 / period_ms as f64;
    if phase < 0.5 {
        phase * 2.0
    } else {
        (1.0 - phase) * 2.0
    }
}
