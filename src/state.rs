//! Application state - single source of truth

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tui_dispatch::DataResource;

use crate::cities;

/// One day's prayer times from the ezanvakti API
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PrayerTimes {
    pub imsak: String,
    pub gunes: String,
    pub ogle: String,
    pub ikindi: String,
    pub aksam: String,
    pub yatsi: String,
}

impl PrayerTimes {
    /// The six values in canonical order, paired with their display labels
    pub fn rows(&self) -> [(&'static str, &str); 6] {
        [
            ("İmsak", self.imsak.as_str()),
            ("Güneş", self.gunes.as_str()),
            ("Öğle", self.ogle.as_str()),
            ("İkindi", self.ikindi.as_str()),
            ("Akşam", self.aksam.as_str()),
            ("Yatsı", self.yatsi.as_str()),
        ]
    }
}

/// A city known to the prayer times service
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct City {
    pub name: String,
    /// Identifier the remote API keys on, distinct from the display name
    pub external_id: u32,
}

/// Animation timing for the header gradient pulse.
pub const LOADING_ANIM_TICK_MS: u64 = 15;
pub const LOADING_ANIM_CYCLE_TICKS: u32 = 60;

/// Application state - everything the UI needs to render
#[derive(Clone, Debug, tui_dispatch::DebugState, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppState {
    // --- Core data (visible in debug) ---
    /// Currently selected city
    #[debug(section = "City", label = "Selected", debug_fmt)]
    pub city: City,

    /// Today's times: Empty → Loading → Loaded (live or fallback)
    #[debug(section = "Times", label = "Data", debug_fmt)]
    pub times: DataResource<PrayerTimes>,

    /// Set when the shown times came from the static table
    #[debug(section = "Times", label = "Warning", debug_fmt)]
    pub warning: Option<String>,

    /// Underlying failure behind the most recent fallback, if any
    #[debug(section = "Times", label = "Last error", debug_fmt)]
    pub last_error: Option<String>,

    /// Tag of the most recently issued fetch; completions carrying an
    /// older tag are dropped
    #[debug(section = "Times", label = "Seq")]
    pub request_seq: u64,

    /// Startup validation result for the city fixture
    #[debug(section = "City", label = "Fixture", debug_fmt)]
    pub city_list_warning: Option<String>,

    // --- Animation internals (skipped) ---
    /// Animation frame counter (for the header gradient)
    #[debug(skip)]
    pub tick_count: u32,

    /// Remaining ticks to finish the current animation cycle after loading
    #[debug(skip)]
    pub loading_anim_ticks_remaining: u32,

    // --- City picker (skipped) ---
    /// Whether the picker modal is open
    #[debug(skip)]
    pub picker_open: bool,

    /// Highlighted index in the picker list
    #[debug(skip)]
    pub picker_selected: usize,
}

impl AppState {
    /// Create state with the given city selected
    pub fn new(city: City) -> Self {
        Self {
            city,
            times: DataResource::Empty,
            warning: None,
            last_error: None,
            request_seq: 0,
            city_list_warning: cities::duplicate_id_warning(),
            tick_count: 0,
            loading_anim_ticks_remaining: 0,
            picker_open: false,
            picker_selected: 0,
        }
    }

    /// Get the selected city
    pub fn current_city(&self) -> &City {
        &self.city
    }

    pub fn loading_anim_active(&self) -> bool {
        self.times.is_loading() || self.loading_anim_ticks_remaining > 0
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(City {
            name: "İstanbul".into(),
            external_id: 9541,
        })
    }
}
