//! Reducer - pure function: (state, action) -> DispatchResult

use tui_dispatch::{DataResource, DispatchResult};

use crate::action::Action;
use crate::cities;
use crate::effect::Effect;
use crate::fallback;
use crate::state::{AppState, LOADING_ANIM_CYCLE_TICKS};

/// The reducer handles all state transitions
pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        // ===== Times actions =====
        Action::TimesFetch => DispatchResult::changed_with(begin_fetch(state)),

        Action::TimesDidLoad { seq, times } => {
            if seq != state.request_seq {
                // A newer fetch was issued while this one was in flight
                return DispatchResult::unchanged();
            }
            state.times = DataResource::Loaded(times);
            state.warning = None;
            state.last_error = None;
            state.loading_anim_ticks_remaining = ticks_to_phase_zero(state.tick_count);
            DispatchResult::changed()
        }

        Action::TimesDidError { seq, message } => {
            if seq != state.request_seq {
                return DispatchResult::unchanged();
            }
            state.times = DataResource::Loaded(fallback::static_times(&state.city.name));
            state.warning = Some(fallback::FALLBACK_WARNING.to_string());
            state.last_error = Some(message);
            state.loading_anim_ticks_remaining = ticks_to_phase_zero(state.tick_count);
            DispatchResult::changed()
        }

        // ===== Picker actions =====
        Action::PickerOpen => {
            state.picker_open = true;
            state.picker_selected = cities::all()
                .iter()
                .position(|city| city.name == state.city.name)
                .unwrap_or(0);
            DispatchResult::changed()
        }

        Action::PickerClose => {
            state.picker_open = false;
            DispatchResult::changed()
        }

        Action::PickerSelect(index) => {
            if index < cities::all().len() && index != state.picker_selected {
                state.picker_selected = index;
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        Action::PickerConfirm => {
            let Some(city) = cities::all().get(state.picker_selected).cloned() else {
                return DispatchResult::unchanged();
            };
            state.picker_open = false;
            if city.name == state.city.name {
                // Reselecting the current city is not a refresh
                return DispatchResult::changed();
            }
            state.city = city;
            DispatchResult::changed_with(begin_fetch(state))
        }

        // ===== Global actions =====
        Action::Tick => {
            let animating = state.loading_anim_active();
            if animating {
                state.tick_count = state.tick_count.wrapping_add(1);
                if state.loading_anim_ticks_remaining > 0 {
                    state.loading_anim_ticks_remaining -= 1;
                }
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        Action::Quit => DispatchResult::unchanged(),
    }
}

/// Issue a new fetch for the selected city. Shown data is discarded, not
/// kept alongside the spinner; the bumped seq invalidates in-flight
/// responses.
fn begin_fetch(state: &mut AppState) -> Effect {
    state.request_seq += 1;
    state.times = DataResource::Loading;
    state.warning = None;
    state.last_error = None;
    state.tick_count = 0;
    state.loading_anim_ticks_remaining = 0;
    Effect::FetchTimes {
        seq: state.request_seq,
        city_id: state.city.external_id,
    }
}

fn ticks_to_phase_zero(tick_count: u32) -> u32 {
    let cycle = LOADING_ANIM_CYCLE_TICKS.max(1);
    if tick_count == 0 {
        return cycle;
    }
    let remainder = tick_count % cycle;
    if remainder == 0 { 0 } else { cycle - remainder }
}
