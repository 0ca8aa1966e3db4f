//! Render snapshot tests using RenderHarness
//!
//! FRAMEWORK PATTERN: RenderHarness
//! - Create harness with terminal dimensions
//! - Render component to test buffer
//! - Convert to string for snapshot testing

use tui_dispatch::{DataResource, testing::*};
use vakit::{
    cities,
    components::{
        CityPicker, CityPickerProps, Component, PrayerDisplay, PrayerDisplayProps,
    },
    fallback,
    state::{AppState, PrayerTimes},
};

fn istanbul_times() -> PrayerTimes {
    PrayerTimes {
        imsak: "04:34".into(),
        gunes: "06:08".into(),
        ogle: "13:08".into(),
        ikindi: "16:59".into(),
        aksam: "20:00".into(),
        yatsi: "21:27".into(),
    }
}

#[test]
fn test_render_loading_state() {
    // PATTERN: RenderHarness for visual testing
    let mut render = RenderHarness::new(60, 24);
    let mut component = PrayerDisplay;

    let state = AppState {
        times: DataResource::Loading,
        ..Default::default()
    };

    let output = render.render_to_string_plain(|frame| {
        let props = PrayerDisplayProps {
            state: &state,
            is_focused: true,
        };
        component.render(frame, frame.area(), props);
    });

    assert!(
        output.contains("yükleniyor"),
        "Should show loading message:\n{output}"
    );
}

#[test]
fn test_render_six_rows() {
    let mut render = RenderHarness::new(60, 24);
    let mut component = PrayerDisplay;

    let state = AppState {
        times: DataResource::Loaded(istanbul_times()),
        ..Default::default()
    };

    let output = render.render_to_string_plain(|frame| {
        let props = PrayerDisplayProps {
            state: &state,
            is_focused: true,
        };
        component.render(frame, frame.area(), props);
    });

    for label in ["İmsak", "Güneş", "Öğle", "İkindi", "Akşam", "Yatsı"] {
        assert!(output.contains(label), "Missing label {label}:\n{output}");
    }
    for time in ["04:34", "06:08", "13:08", "16:59", "20:00", "21:27"] {
        assert!(output.contains(time), "Missing time {time}:\n{output}");
    }
}

#[test]
fn test_render_warning_banner() {
    let mut render = RenderHarness::new(80, 24);
    let mut component = PrayerDisplay;

    let state = AppState {
        times: DataResource::Loaded(fallback::static_times("İstanbul")),
        warning: Some(fallback::FALLBACK_WARNING.to_string()),
        ..Default::default()
    };

    let output = render.render_to_string_plain(|frame| {
        let props = PrayerDisplayProps {
            state: &state,
            is_focused: true,
        };
        component.render(frame, frame.area(), props);
    });

    assert!(output.contains("Uyarı"), "Should show warning prefix");
    assert!(
        output.contains("Statik veriler"),
        "Should show fallback message:\n{output}"
    );
}

#[test]
fn test_render_initial_state_shows_fetch_hint() {
    let mut render = RenderHarness::new(60, 24);
    let mut component = PrayerDisplay;

    let state = AppState::default();

    let output = render.render_to_string_plain(|frame| {
        let props = PrayerDisplayProps {
            state: &state,
            is_focused: true,
        };
        component.render(frame, frame.area(), props);
    });

    assert!(
        output.contains("tuşuna basın"),
        "Initial state should prompt user to fetch:\n{output}"
    );
}

#[test]
fn test_render_help_bar() {
    let mut render = RenderHarness::new(80, 24);
    let mut component = PrayerDisplay;

    let state = AppState::default();

    let output = render.render_to_string_plain(|frame| {
        let props = PrayerDisplayProps {
            state: &state,
            is_focused: true,
        };
        component.render(frame, frame.area(), props);
    });

    assert!(output.contains("yenile"), "Should show refresh hint");
    assert!(output.contains("şehir"), "Should show city hint");
    assert!(output.contains("çıkış"), "Should show quit hint");
}

#[test]
fn test_render_fixture_warning_line() {
    let mut render = RenderHarness::new(80, 24);
    let mut component = PrayerDisplay;

    let state = AppState {
        times: DataResource::Loaded(istanbul_times()),
        ..Default::default()
    };
    assert!(state.city_list_warning.is_some());

    let output = render.render_to_string_plain(|frame| {
        let props = PrayerDisplayProps {
            state: &state,
            is_focused: true,
        };
        component.render(frame, frame.area(), props);
    });

    assert!(
        output.contains("9541"),
        "Duplicate-id note should be visible:\n{output}"
    );
}

#[test]
fn test_render_city_picker() {
    let mut render = RenderHarness::new(60, 24);
    let mut picker = CityPicker::new();
    picker.set_open(true);

    let city_list = cities::all();

    let output = render.render_to_string_plain(|frame| {
        let props = CityPickerProps {
            cities: &city_list,
            selected: 0,
            is_focused: true,
            on_select: vakit::action::Action::PickerSelect,
        };
        picker.render(frame, frame.area(), props);
    });

    assert!(output.contains("Şehir Seçin"), "Should show picker title");
    for name in ["İstanbul", "Ankara", "İzmir", "Bursa", "Antalya", "Başakşehir"] {
        assert!(output.contains(name), "Missing city {name}:\n{output}");
    }
}
