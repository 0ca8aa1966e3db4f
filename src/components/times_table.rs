use chrono::Local;
use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span, Text},
    widgets::Paragraph,
};
use tui_dispatch::DataResource;

use super::city_header::HEADER_OVERHEAD;
use super::{CityHeader, CityHeaderProps, Component, WARNING_ICON};
use crate::action::Action;
use crate::state::{AppState, PrayerTimes};

pub struct TimesTable;

pub struct TimesTableProps<'a> {
    pub state: &'a AppState,
}

/// One line per prayer.
const ROW_COUNT: u16 = 6;

/// Header gets up to 6 FIGlet rows plus its own overhead.
const HEADER_CAP: u16 = 6 + HEADER_OVERHEAD;

// ============================================================================
// Component
// ============================================================================

impl Component<Action> for TimesTable {
    type Props<'a> = TimesTableProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let chunks = make_layout(area);
        let state = props.state;

        render_header(frame, chunks[0], state);
        render_warning_banner(frame, chunks[2], state);

        match TimesView::from_state(state) {
            TimesView::Ready(times) => {
                frame.render_widget(
                    Paragraph::new(Text::from(time_rows(times))),
                    chunks[4],
                );
                render_fixture_line(frame, chunks[6], state);
            }
            TimesView::Loading => {
                render_message(frame, chunks[6], "Namaz saatleri yükleniyor...");
            }
            TimesView::Empty => {
                render_fetch_hint(frame, chunks[6]);
            }
        }
    }
}

fn make_layout(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::vertical([
        Constraint::Max(HEADER_CAP),   // FIGlet city name + date
        Constraint::Length(1),         // Spacer
        Constraint::Length(1),         // Warning banner
        Constraint::Length(1),         // Spacer
        Constraint::Length(ROW_COUNT), // Label/value rows
        Constraint::Length(1),         // Spacer
        Constraint::Length(1),         // Message / fixture line
    ])
    .flex(Flex::Center)
    .split(area)
}

fn render_header(frame: &mut Frame, area: Rect, state: &AppState) {
    let date = Local::now().format("%d.%m.%Y").to_string();
    let mut header = CityHeader;
    header.render(
        frame,
        area,
        CityHeaderProps {
            city: state.current_city(),
            date: &date,
            has_warning: state.warning.is_some(),
            is_animating: state.loading_anim_active(),
            tick_count: state.tick_count,
        },
    );
}

fn render_warning_banner(frame: &mut Frame, area: Rect, state: &AppState) {
    let Some(warning) = state.warning.as_deref() else {
        return;
    };
    let banner = Line::from(vec![
        Span::raw(WARNING_ICON),
        Span::raw(" "),
        Span::styled("Uyarı: ", Style::default().fg(Color::Yellow).bold()),
        Span::styled(warning.to_string(), Style::default().fg(Color::Yellow)),
    ])
    .centered();
    frame.render_widget(Paragraph::new(banner), area);
}

fn time_rows(times: &PrayerTimes) -> Vec<Line<'static>> {
    times
        .rows()
        .into_iter()
        .map(|(label, value)| {
            Line::from(vec![
                Span::styled(format!("{label:<7}"), Style::default().fg(Color::Gray)),
                Span::raw("  "),
                Span::styled(value.to_string(), Style::default().fg(Color::Cyan).bold()),
            ])
            .centered()
        })
        .collect()
}

fn render_fixture_line(frame: &mut Frame, area: Rect, state: &AppState) {
    let Some(note) = state.city_list_warning.as_deref() else {
        return;
    };
    let line = Line::from(vec![Span::styled(
        note.to_string(),
        Style::default().fg(Color::DarkGray),
    )])
    .centered();
    frame.render_widget(Paragraph::new(line), area);
}

fn render_message(frame: &mut Frame, area: Rect, message: &str) {
    let line = Line::from(vec![Span::styled(
        message.to_string(),
        Style::default().fg(Color::DarkGray),
    )])
    .centered();
    frame.render_widget(Paragraph::new(line), area);
}

fn render_fetch_hint(frame: &mut Frame, area: Rect) {
    let hint = Line::from(vec![
        Span::styled("Vakitler için ", Style::default().fg(Color::DarkGray)),
        Span::styled("r", Style::default().fg(Color::Cyan).bold()),
        Span::styled(" tuşuna basın", Style::default().fg(Color::DarkGray)),
    ])
    .centered();
    frame.render_widget(Paragraph::new(hint), area);
}

// ============================================================================
// Helpers
// ============================================================================

enum TimesView<'a> {
    Ready(&'a PrayerTimes),
    Loading,
    Empty,
}

impl<'a> TimesView<'a> {
    fn from_state(state: &'a AppState) -> Self {
        match &state.times {
            DataResource::Loaded(times) => TimesView::Ready(times),
            DataResource::Loading => TimesView::Loading,
            // Fetch failures resolve to Loaded(fallback) in the reducer,
            // so Failed never persists
            DataResource::Empty | DataResource::Failed(_) => TimesView::Empty,
        }
    }
}
