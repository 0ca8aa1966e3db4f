//! Actions with automatic category inference

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::state::PrayerTimes;

/// Application actions with automatic category inference
#[derive(tui_dispatch::Action, Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[action(infer_categories)]
pub enum Action {
    // ===== Times category =====
    /// Intent: fetch today's times for the selected city (triggers async task)
    TimesFetch,

    /// Result: fetch completed; `seq` tags the request that produced it
    TimesDidLoad { seq: u64, times: PrayerTimes },

    /// Result: fetch failed
    TimesDidError { seq: u64, message: String },

    // ===== Picker category =====
    /// Open the city picker
    PickerOpen,

    /// Close the picker without changing the selection
    PickerClose,

    /// Move the picker highlight (by index)
    PickerSelect(usize),

    /// Confirm the highlighted city
    PickerConfirm,

    // ===== Uncategorized (global) =====
    /// Periodic tick for the loading animation
    Tick,

    /// Exit the application
    Quit,
}
