use artbox::{
    Alignment as ArtAlignment, Color as ArtColor, Fill, LinearGradient, Renderer, fonts,
    integrations::ratatui::ArtBox,
};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::Component;
use crate::action::Action;
use crate::state::{City, LOADING_ANIM_CYCLE_TICKS};

pub struct CityHeader;

pub struct CityHeaderProps<'a> {
    pub city: &'a City,
    pub date: &'a str,
    /// Amber palette while fallback data is on screen
    pub has_warning: bool,
    pub is_animating: bool,
    pub tick_count: u32,
}

/// Overhead inside the header area: 1 spacer + 1 date line.
/// The FIGlet city name gets `area.height - HEADER_OVERHEAD`.
pub const HEADER_OVERHEAD: u16 = 2;

fn header_colors(has_warning: bool) -> (ArtColor, ArtColor) {
    if has_warning {
        (ArtColor::rgb(235, 190, 90), ArtColor::rgb(215, 130, 60))
    } else {
        (ArtColor::rgb(90, 190, 170), ArtColor::rgb(120, 160, 235))
    }
}

fn animated_phase(tick_count: u32) -> f32 {
    let steps = LOADING_ANIM_CYCLE_TICKS.max(1);
    (tick_count % steps) as f32 / steps as f32
}

/// Pulse the gradient endpoints toward each other over one animation cycle.
fn header_fill(colors: (ArtColor, ArtColor), phase: f32) -> Fill {
    let t = (phase * std::f32::consts::TAU).sin() * 0.5 + 0.5;
    let start = colors.0.interpolate(colors.1, 0.3 * t);
    let end = colors.1.interpolate(colors.0, 0.3 * t);
    Fill::Linear(LinearGradient::horizontal(start, end))
}

impl Component<Action> for CityHeader {
    type Props<'a> = CityHeaderProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let chunks = Layout::vertical([
            Constraint::Fill(1),   // FIGlet city name — artbox picks the best font
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Date
        ])
        .split(area);

        let phase = if props.is_animating {
            animated_phase(props.tick_count)
        } else {
            0.0
        };
        let fill = header_fill(header_colors(props.has_warning), phase);

        let renderer = Renderer::new(fonts::stack(&["terminus", "miniwi"]))
            .with_plain_fallback()
            .with_alignment(ArtAlignment::Center)
            .with_fill(fill);

        let name_widget = ArtBox::new(&renderer, &props.city.name);
        frame.render_widget(name_widget, chunks[0]);

        let date_line = Line::from(vec![Span::styled(
            props.date.to_string(),
            Style::default().fg(Color::DarkGray),
        )])
        .centered();
        frame.render_widget(Paragraph::new(date_line), chunks[2]);
    }
}
