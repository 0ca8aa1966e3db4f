//! Daily prayer times TUI

use std::cell::RefCell;
use std::io;
use std::rc::Rc;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Frame, Terminal, backend::CrosstermBackend, layout::Rect};
use tui_dispatch::{
    EffectContext, EffectStoreLike, EffectStoreWithMiddleware, EventBus, EventContext, EventKind,
    EventRoutingState, HandlerResponse, Keybindings, RenderContext,
};
use tui_dispatch_components::centered_rect;
use tui_dispatch_debug::debug::DebugLayer;
use tui_dispatch_debug::{
    DebugCliArgs, DebugRunOutput, DebugSession, DebugSessionError, ReplayItem,
};
use vakit::action::Action;
use vakit::api;
use vakit::cities;
use vakit::components::{
    CityPicker, CityPickerProps, Component, PrayerDisplay, PrayerDisplayProps,
};
use vakit::effect::Effect;
use vakit::reducer::reducer;
use vakit::state::{AppState, LOADING_ANIM_TICK_MS};

/// Daily prayer times for Turkish cities
#[derive(Parser, Debug)]
#[command(name = "vakit")]
#[command(about = "A TUI showing today's prayer times for a selected city")]
struct Args {
    /// City to show at startup (one of the fixed list)
    #[arg(long, short, default_value = "İstanbul")]
    city: String,

    #[command(flatten)]
    debug: DebugCliArgs,
}

#[derive(tui_dispatch::ComponentId, Clone, Copy, PartialEq, Eq, Hash, Debug)]
enum PrayerComponentId {
    Display,
    Picker,
}

#[derive(tui_dispatch::BindingContext, Clone, Copy, PartialEq, Eq, Hash)]
enum PrayerContext {
    Main,
    Picker,
}

impl EventRoutingState<PrayerComponentId, PrayerContext> for AppState {
    fn focused(&self) -> Option<PrayerComponentId> {
        if self.picker_open {
            Some(PrayerComponentId::Picker)
        } else {
            Some(PrayerComponentId::Display)
        }
    }

    fn modal(&self) -> Option<PrayerComponentId> {
        if self.picker_open {
            Some(PrayerComponentId::Picker)
        } else {
            None
        }
    }

    fn binding_context(&self, id: PrayerComponentId) -> PrayerContext {
        match id {
            PrayerComponentId::Display => PrayerContext::Main,
            PrayerComponentId::Picker => PrayerContext::Picker,
        }
    }

    fn default_context(&self) -> PrayerContext {
        PrayerContext::Main
    }
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let Args {
        city,
        debug: debug_args,
    } = Args::parse();

    let debug = DebugSession::new(debug_args);

    // Export JSON schemas if requested
    debug.save_state_schema::<AppState>().map_err(debug_error)?;
    debug.save_actions_schema::<Action>().map_err(debug_error)?;

    let state = debug
        .load_state_or_else_async(move || async move {
            let Some(selected) = cities::find(&city) else {
                let names: Vec<String> =
                    cities::all().into_iter().map(|c| c.name).collect();
                eprintln!("Error: Unknown city '{}'.", city);
                eprintln!("Valid cities: {}", names.join(", "));
                std::process::exit(1);
            };

            Ok::<AppState, io::Error>(AppState::new(selected))
        })
        .await
        .map_err(debug_error)?;

    let replay_actions = debug.load_replay_items().map_err(debug_error)?;

    let (middleware, action_recorder) = debug.middleware_with_recorder();
    let store = EffectStoreWithMiddleware::new(state, reducer, middleware);

    // ===== Terminal setup =====
    let use_alt_screen = debug.use_alt_screen();
    let mut stdout = io::stdout();
    if use_alt_screen {
        enable_raw_mode()?;
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &debug, store, replay_actions).await;

    // ===== Cleanup =====
    if use_alt_screen {
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
    }
    if use_alt_screen {
        terminal.show_cursor()?;
    }

    let run_output = result?;
    run_output.write_render_output()?;
    debug
        .save_actions(action_recorder.as_ref())
        .map_err(debug_error)?;

    Ok(())
}

struct PrayerUi {
    display: PrayerDisplay,
    picker: CityPicker,
}

impl PrayerUi {
    fn new() -> Self {
        Self {
            display: PrayerDisplay,
            picker: CityPicker::new(),
        }
    }

    fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        state: &AppState,
        render_ctx: RenderContext,
        event_ctx: &mut EventContext<PrayerComponentId>,
    ) {
        event_ctx.set_component_area(PrayerComponentId::Display, area);

        let props = PrayerDisplayProps {
            state,
            is_focused: render_ctx.is_focused() && !state.picker_open,
        };
        self.display.render(frame, area, props);

        self.picker.set_open(state.picker_open);
        if state.picker_open {
            let modal_area = centered_rect(30, 10, area);
            event_ctx.set_component_area(PrayerComponentId::Picker, modal_area);
            let city_list = cities::all();
            let props = CityPickerProps {
                cities: &city_list,
                selected: state.picker_selected,
                is_focused: render_ctx.is_focused(),
                on_select: Action::PickerSelect,
            };
            self.picker.render(frame, area, props);
        } else {
            event_ctx.component_areas.remove(&PrayerComponentId::Picker);
        }
    }

    fn handle_display_event(
        &mut self,
        event: &EventKind,
        state: &AppState,
    ) -> HandlerResponse<Action> {
        let props = PrayerDisplayProps {
            state,
            is_focused: true,
        };
        let actions: Vec<_> = self
            .display
            .handle_event(event, props)
            .into_iter()
            .collect();
        if actions.is_empty() {
            HandlerResponse::ignored()
        } else {
            HandlerResponse {
                actions,
                consumed: true,
                needs_render: false,
            }
        }
    }

    fn handle_picker_event(
        &mut self,
        event: &EventKind,
        state: &AppState,
    ) -> HandlerResponse<Action> {
        self.picker.set_open(state.picker_open);
        let city_list = cities::all();
        let props = CityPickerProps {
            cities: &city_list,
            selected: state.picker_selected,
            is_focused: true,
            on_select: Action::PickerSelect,
        };
        let actions: Vec<_> = self.picker.handle_event(event, props).into_iter().collect();
        HandlerResponse {
            actions,
            consumed: true,
            needs_render: false,
        }
    }
}

fn debug_error(error: DebugSessionError) -> io::Error {
    io::Error::other(format!("debug session error: {error}"))
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    debug: &DebugSession,
    store: impl EffectStoreLike<AppState, Action, Effect>,
    replay_actions: Vec<ReplayItem<Action>>,
) -> io::Result<DebugRunOutput<AppState>> {
    let ui = Rc::new(RefCell::new(PrayerUi::new()));
    let mut bus: EventBus<AppState, Action, PrayerComponentId, PrayerContext> = EventBus::new();
    let keybindings: Keybindings<PrayerContext> = Keybindings::new();

    let ui_display = Rc::clone(&ui);
    bus.register(PrayerComponentId::Display, move |event, state| {
        ui_display
            .borrow_mut()
            .handle_display_event(&event.kind, state)
    });

    let ui_picker = Rc::clone(&ui);
    bus.register(PrayerComponentId::Picker, move |event, state| {
        ui_picker
            .borrow_mut()
            .handle_picker_event(&event.kind, state)
    });

    // Re-render on terminal resize (no action needed, just redraw)
    bus.register_global(|event, _state| match event.kind {
        EventKind::Resize(_, _) => HandlerResponse::ignored().with_render(),
        _ => HandlerResponse::ignored(),
    });

    debug
        .run_effect_app_with_bus(
            terminal,
            store,
            DebugLayer::simple(),
            replay_actions,
            Some(Action::TimesFetch),
            Some(Action::Quit),
            |runtime| {
                if debug.render_once() {
                    return;
                }

                runtime.subscriptions().interval(
                    "tick",
                    Duration::from_millis(LOADING_ANIM_TICK_MS),
                    || Action::Tick,
                );
            },
            &mut bus,
            &keybindings,
            |frame, area, state, render_ctx, event_ctx| {
                ui.borrow_mut()
                    .render(frame, area, state, render_ctx, event_ctx);
            },
            |action| matches!(action, Action::Quit),
            handle_effect,
        )
        .await
}

/// Handle effects by spawning tasks
fn handle_effect(effect: Effect, ctx: &mut EffectContext<Action>) {
    match effect {
        Effect::FetchTimes { seq, city_id } => {
            ctx.tasks().spawn("times", async move {
                let date = api::today();
                match api::fetch_prayer_times(city_id, &date).await {
                    Ok(times) => Action::TimesDidLoad { seq, times },
                    Err(e) => Action::TimesDidError {
                        seq,
                        message: e.to_string(),
                    },
                }
            });
        }
    }
}
