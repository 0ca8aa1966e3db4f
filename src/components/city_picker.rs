use crossterm::event::KeyCode;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::Paragraph,
};
use tui_dispatch::EventKind;
use tui_dispatch_components::{
    BaseStyle, Modal, ModalBehavior, ModalProps, ModalStyle, Padding, ScrollbarStyle, SelectList,
    SelectListBehavior, SelectListProps, SelectListStyle, SelectionStyle, centered_rect,
};

use super::Component;
use crate::action::Action;
use crate::state::City;

pub struct CityPicker {
    list: SelectList,
    modal: Modal,
    was_open: bool,
}

pub struct CityPickerProps<'a> {
    pub cities: &'a [City],
    pub selected: usize,
    pub is_focused: bool,
    // Action constructor
    pub on_select: fn(usize) -> Action,
}

impl Default for CityPicker {
    fn default() -> Self {
        Self {
            list: SelectList::new(),
            modal: Modal::new(),
            was_open: false,
        }
    }
}

impl CityPicker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_open(&mut self, is_open: bool) {
        if is_open && !self.was_open {
            self.list = SelectList::new();
        }
        self.was_open = is_open;
    }

    fn city_items(cities: &[City]) -> Vec<Line<'static>> {
        cities
            .iter()
            .map(|city| Line::from(city.name.clone()))
            .collect()
    }

    fn list_style() -> SelectListStyle {
        SelectListStyle {
            base: BaseStyle {
                border: None,
                padding: Padding::xy(1, 1),
                bg: None,
                fg: None,
            },
            selection: SelectionStyle::default(),
            scrollbar: ScrollbarStyle::default(),
        }
    }
}

impl Component<Action> for CityPicker {
    type Props<'a> = CityPickerProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return Vec::new();
        }

        let EventKind::Key(key) = event else {
            return Vec::new();
        };

        match key.code {
            KeyCode::Esc => vec![Action::PickerClose],
            KeyCode::Enter => vec![Action::PickerConfirm],
            // Up/down navigate the fixed list
            KeyCode::Down | KeyCode::Up => {
                let items = Self::city_items(props.cities);
                let list_props = SelectListProps {
                    items: &items,
                    count: items.len(),
                    selected: props.selected,
                    is_focused: true,
                    style: Self::list_style(),
                    behavior: SelectListBehavior::default(),
                    on_select: props.on_select,
                    render_item: &|item| item.clone(),
                };
                self.list
                    .handle_event(event, list_props)
                    .into_iter()
                    .collect()
            }
            _ => Vec::new(),
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        if area.width < 20 || area.height < 8 {
            return;
        }

        let CityPicker { list, modal, .. } = self;
        let modal_area = centered_rect(30, 10, area);
        let mut render_content = |frame: &mut Frame, content_area: Rect| {
            let chunks = Layout::vertical([
                Constraint::Length(2), // Title
                Constraint::Min(1),    // City list
            ])
            .split(content_area);

            let title = Line::styled(
                "Şehir Seçin",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .centered();
            frame.render_widget(Paragraph::new(title), chunks[0]);

            let items = Self::city_items(props.cities);
            let list_props = SelectListProps {
                items: &items,
                count: items.len(),
                selected: props.selected,
                is_focused: props.is_focused,
                style: Self::list_style(),
                behavior: SelectListBehavior::default(),
                on_select: props.on_select,
                render_item: &|item| item.clone(),
            };
            list.render(frame, chunks[1], list_props);
        };

        modal.render(
            frame,
            area,
            ModalProps {
                is_open: true,
                is_focused: props.is_focused,
                area: modal_area,
                style: ModalStyle {
                    base: BaseStyle {
                        bg: Some(Color::Rgb(35, 35, 45)),
                        padding: Padding::default(),
                        border: None,
                        fg: None,
                    },
                    ..Default::default()
                },
                behavior: ModalBehavior::default(),
                on_close: || Action::PickerClose,
                render_content: &mut render_content,
            },
        );
    }
}
