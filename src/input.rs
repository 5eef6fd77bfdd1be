use crossterm::event::{KeyCode, KeyEvent};

use crate::app::AppMode;
use crate::messages::UiEvent;

/// Map keyboard input to UiEvent based on current mode
pub fn handle_key(key: KeyEvent, mode: AppMode, selected_param: usize) -> Option<UiEvent> {
    // Global keys (both modes)
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => return Some(UiEvent::Quit),
        KeyCode::Tab => return Some(UiEvent::CycleMode),
        _ => {}
    }

    match mode {
        AppMode::Plot => handle_plot_key(key, selected_param),
        AppMode::Monitor => handle_monitor_key(key),
    }
}

fn handle_plot_key(key: KeyEvent, selected_param: usize) -> Option<UiEvent> {
    match key.code {
        KeyCode::Char(c @ '1'..='3') => {
            let param = (c as usize) - ('1' as usize);
            Some(UiEvent::SelectParam(param))
        }
        KeyCode::Up => Some(UiEvent::AdjustParam(selected_param, 1)),
        KeyCode::Down => Some(UiEvent::AdjustParam(selected_param, -1)),
        KeyCode::Left => Some(UiEvent::SelectFunction(0)), // prev
        KeyCode::Right => Some(UiEvent::SelectFunction(1)), // next
        _ => None,
    }
}

fn handle_monitor_key(key: KeyEvent) -> Option<UiEvent> {
    match key.code {
        KeyCode::Char('l') => Some(UiEvent::ToggleLed),
        _ => None,
    }
}

/// Key labels for the hint bar
pub fn key_hints(mode: AppMode) -> Vec<(&'static str, &'static str)> {
    let mut hints = vec![("Tab", "Mode"), ("Esc", "Quit")];

    match mode {
        AppMode::Plot => {
            hints.insert(0, ("1-3", "Slider"));
            hints.insert(1, ("↑/↓", "Adjust"));
            hints.insert(2, ("←/→", "Function"));
        }
        AppMode::Monitor => {
            hints.insert(0, ("L", "LED On/Off"));
        }
    }

    hints
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    #[test]
    fn arrows_adjust_the_selected_slider() {
        let evt = handle_key(press(KeyCode::Up), AppMode::Plot, 2);
        assert!(matches!(evt, Some(UiEvent::AdjustParam(2, 1))));
        let evt = handle_key(press(KeyCode::Down), AppMode::Plot, 0);
        assert!(matches!(evt, Some(UiEvent::AdjustParam(0, -1))));
    }

    #[test]
    fn led_toggle_only_exists_in_monitor_mode() {
        assert!(matches!(
            handle_key(press(KeyCode::Char('l')), AppMode::Monitor, 0),
            Some(UiEvent::ToggleLed)
        ));
        assert!(handle_key(press(KeyCode::Char('l')), AppMode::Plot, 0).is_none());
    }

    #[test]
    fn quit_works_in_both_modes() {
        for mode in [AppMode::Plot, AppMode::Monitor] {
            assert!(matches!(
                handle_key(press(KeyCode::Esc), mode, 0),
                Some(UiEvent::Quit)
            ));
        }
    }
}
