#![allow(dead_code)]

mod app;
mod config;
mod constants;
mod input;
mod logging;
mod messages;
mod monitor;
mod plot;
mod ui;

use std::io;
use std::path::Path;
use std::time::{Duration, Instant};

use crossbeam_channel::{bounded, Receiver, Sender};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::app::{AppMode, AppState};
use crate::config::BrokerConfig;
use crate::constants::{CHANNEL_CAPACITY, CONFIG_FILE, LOG_FILE, UI_FPS};
use crate::messages::{LinkState, MonitorCmd, MonitorMsg, UiEvent};
use crate::monitor::engine::MonitorEngine;
use crate::plot::trace::PARAM_COUNT;
use crate::ui::views::monitor_view::MonitorView;
use crate::ui::views::plot_view::PlotView;
use crate::ui::views::View;
use crate::ui::widgets::hint_bar::HintBarWidget;
use crate::ui::widgets::mode_indicator::ModeIndicatorWidget;

fn main() -> anyhow::Result<()> {
    // The log file is nice to have; a read-only working directory is not a
    // reason to refuse to start.
    if let Err(e) = logging::init(Path::new(LOG_FILE)) {
        eprintln!("Warning: could not open {}: {}", LOG_FILE, e);
    }

    let config = BrokerConfig::load_or_default(Path::new(CONFIG_FILE));

    // --- Setup channels ---
    let (cmd_tx, cmd_rx): (Sender<MonitorCmd>, Receiver<MonitorCmd>) = bounded(CHANNEL_CAPACITY);
    let (msg_tx, msg_rx): (Sender<MonitorMsg>, Receiver<MonitorMsg>) = bounded(CHANNEL_CAPACITY);

    // --- Broker engine setup ---
    MonitorEngine::new(config).start(cmd_rx, msg_tx);

    run_ui_loop(cmd_tx, msg_rx)
}

fn run_ui_loop(cmd_tx: Sender<MonitorCmd>, msg_rx: Receiver<MonitorMsg>) -> anyhow::Result<()> {
    // --- Terminal setup ---
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // --- App state ---
    let mut state = AppState::new();
    let frame_duration = Duration::from_millis(1000 / UI_FPS);

    // --- Main loop ---
    loop {
        let frame_start = Instant::now();

        // --- Process broker messages (non-blocking) ---
        while let Ok(msg) = msg_rx.try_recv() {
            match msg {
                MonitorMsg::Connected => state.link = LinkState::Connected,
                MonitorMsg::ConnectionLost(reason) => state.link = LinkState::Lost(reason),
                MonitorMsg::Reading(reading) => state.record_reading(reading),
                MonitorMsg::LedStatus(on) => state.led_reported = Some(on),
            }
        }

        // --- Process keyboard input ---
        if event::poll(Duration::from_millis(1))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if let Some(evt) = input::handle_key(key, state.mode, state.selected_param) {
                        handle_ui_event(&mut state, evt, &cmd_tx);
                    }
                }
            }
        }

        if state.should_quit {
            break;
        }

        // --- Render ---
        terminal.draw(|frame| {
            let layout = ui::layout::ScreenLayout::new(frame.area());

            frame.render_widget(
                ModeIndicatorWidget {
                    current: state.mode,
                    link: state.link.clone(),
                },
                layout.header,
            );

            match state.mode {
                AppMode::Plot => PlotView.render(&state, frame, layout.main),
                AppMode::Monitor => MonitorView.render(&state, frame, layout.main),
            }

            let hints = input::key_hints(state.mode);
            frame.render_widget(HintBarWidget { hints }, layout.footer);
        })?;

        // --- Frame rate limiting ---
        let elapsed = frame_start.elapsed();
        if elapsed < frame_duration {
            std::thread::sleep(frame_duration - elapsed);
        }
    }

    // --- Cleanup ---
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}

fn handle_ui_event(state: &mut AppState, event: UiEvent, cmd_tx: &Sender<MonitorCmd>) {
    match event {
        UiEvent::Quit => {
            state.should_quit = true;
        }
        UiEvent::CycleMode => {
            state.mode = state.mode.next();
        }
        UiEvent::SelectParam(param) => {
            if param < PARAM_COUNT {
                state.selected_param = param;
            }
        }
        UiEvent::AdjustParam(param, steps) => {
            // One accepted change, one recompute; a slider pinned at its
            // range edge does not rebuild the trace.
            if state.params.nudge(param, steps) {
                state.trace.rebuild(&state.params);
            }
        }
        UiEvent::SelectFunction(dir) => {
            state.params.select_function(dir);
            state.trace.rebuild(&state.params);
        }
        UiEvent::ToggleLed => {
            state.led_requested = !state.led_requested;
            let _ = cmd_tx.try_send(MonitorCmd::PublishLed(state.led_requested));
        }
    }
}
