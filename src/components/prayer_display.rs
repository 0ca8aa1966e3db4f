use crossterm::event::KeyCode;
use ratatui::layout::{Constraint, Layout};
use ratatui::prelude::{Frame, Rect};
use tui_dispatch::EventKind;
use tui_dispatch_components::{
    StatusBar, StatusBarHint, StatusBarProps, StatusBarSection, StatusBarStyle,
};

use super::{Component, TimesTable, TimesTableProps};
use crate::action::Action;
use crate::state::AppState;

pub const WARNING_ICON: &str = "\u{26a0}\u{fe0f}";

/// Props for PrayerDisplay - read-only view of state
pub struct PrayerDisplayProps<'a> {
    pub state: &'a AppState,
    pub is_focused: bool,
}

/// The main prayer times display component
#[derive(Default)]
pub struct PrayerDisplay;

impl Component<Action> for PrayerDisplay {
    type Props<'a> = PrayerDisplayProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return None;
        }

        match event {
            EventKind::Key(key) => match key.code {
                KeyCode::Char('r') | KeyCode::F(5) => Some(Action::TimesFetch),
                KeyCode::Char('s') => Some(Action::PickerOpen),
                KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
                _ => None,
            },
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: PrayerDisplayProps<'_>) {
        let chunks = Layout::vertical([
            Constraint::Min(1),    // Main content
            Constraint::Length(1), // Help bar
        ])
        .split(area);

        let mut table = TimesTable;
        table.render(frame, chunks[0], TimesTableProps { state: props.state });

        let mut status_bar = StatusBar::new();
        <StatusBar as Component<Action>>::render(
            &mut status_bar,
            frame,
            chunks[1],
            StatusBarProps {
                left: StatusBarSection::empty(),
                center: StatusBarSection::hints(&[
                    StatusBarHint::new("r", "yenile"),
                    StatusBarHint::new("s", "şehir"),
                    StatusBarHint::new("q", "çıkış"),
                ]),
                right: StatusBarSection::empty(),
                style: StatusBarStyle::default(),
                is_focused: false,
            },
        );
    }
}
