use macroquad::input::utils::{register_input_subscriber, repeat_all_miniquad_input};
use macroquad::miniquad::{EventHandler, KeyMods};
use macroquad::prelude::*;

use crate::application::Action;
use crate::config::Config;

/// Keyboard bindings
pub fn action_for_key(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Q => Some(Action::Quit),
        KeyCode::Space => Some(Action::TogglePause),
        KeyCode::R => Some(Action::Reset),
        KeyCode::C => Some(Action::Clear),
        _ => None,
    }
}

/// Primary-button clicks toggle the cell under the cursor
pub fn action_for_click(button: MouseButton, pos: (f32, f32), config: &Config) -> Option<Action> {
    if button != MouseButton::Left {
        return None;
    }
    config
        .pixel_to_cell(pos.0, pos.1)
        .map(|(x, y)| Action::ToggleCell { x, y })
}

/// Collects actions from raw window events in arrival order.
pub struct ActionCollector<'a> {
    config: &'a Config,
    actions: Vec<Action>,
}

impl<'a> ActionCollector<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config, actions: Vec::new() }
    }

    pub fn into_actions(self) -> Vec<Action> {
        self.actions
    }
}

impl EventHandler for ActionCollector<'_> {
    fn update(&mut self) {}

    fn draw(&mut self) {}

    fn key_down_event(&mut self, keycode: KeyCode, _keymods: KeyMods, repeat: bool) {
        if repeat {
            return;
        }
        self.actions.extend(action_for_key(keycode));
    }

    fn mouse_button_down_event(&mut self, button: MouseButton, x: f32, y: f32) {
        self.actions.extend(action_for_click(button, (x, y), self.config));
    }

    fn quit_requested_event(&mut self) {
        self.actions.push(Action::Quit);
    }
}

/// Ordered event queue fed by macroquad's input subscriber.
/// Create it once the window exists.
pub struct InputQueue {
    subscriber: usize,
}

impl InputQueue {
    /// Also calls `prevent_quit()` so window close requests reach us.
    pub fn new() -> Self {
        prevent_quit();
        Self {
            subscriber: register_input_subscriber(),
        }
    }

    /// Drain every event buffered since the last call into actions.
    pub fn poll_actions(&self, config: &Config) -> Vec<Action> {
        let mut collector = ActionCollector::new(config);
        repeat_all_miniquad_input(&mut collector, self.subscriber);

        // Close requests are a flag, not a queued event
        if is_quit_requested() {
            collector.quit_requested_event();
        }
        collector.into_actions()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::Simulation;
    use crate::domain::Grid;

    #[test]
    fn test_key_bindings() {
        assert_eq!(action_for_key(KeyCode::Q), Some(Action::Quit));
        assert_eq!(action_for_key(KeyCode::Space), Some(Action::TogglePause));
        assert_eq!(action_for_key(KeyCode::R), Some(Action::Reset));
        assert_eq!(action_for_key(KeyCode::C), Some(Action::Clear));
        assert_eq!(action_for_key(KeyCode::Escape), None);
        assert_eq!(action_for_key(KeyCode::H), None);
    }

    #[test]
    fn test_left_click_maps_to_cell() {
        let config = Config::default();
        assert_eq!(
            action_for_click(MouseButton::Left, (52.0, 17.0), &config),
            Some(Action::ToggleCell { x: 10, y: 3 })
        );
    }

    #[test]
    fn test_other_buttons_ignored() {
        let config = Config::default();
        assert_eq!(action_for_click(MouseButton::Right, (52.0, 17.0), &config), None);
        assert_eq!(action_for_click(MouseButton::Middle, (52.0, 17.0), &config), None);
    }

    #[test]
    fn test_click_outside_grid_ignored() {
        let config = Config::default();
        assert_eq!(action_for_click(MouseButton::Left, (1022.0, 10.0), &config), None);
        assert_eq!(action_for_click(MouseButton::Left, (-3.0, 10.0), &config), None);
    }

    #[test]
    fn test_collector_keeps_arrival_order() {
        let config = Config::default();
        let mut collector = ActionCollector::new(&config);

        collector.mouse_button_down_event(MouseButton::Left, 17.0, 17.0);
        collector.key_down_event(KeyCode::C, KeyMods::default(), false);
        collector.key_down_event(KeyCode::R, KeyMods::default(), false);

        assert_eq!(
            collector.into_actions(),
            vec![Action::ToggleCell { x: 3, y: 3 }, Action::Clear, Action::Reset]
        );
    }

    #[test]
    fn test_click_then_clear_leaves_empty_grid() {
        let config = Config::default();
        let mut collector = ActionCollector::new(&config);
        collector.mouse_button_down_event(MouseButton::Left, 17.0, 17.0);
        collector.key_down_event(KeyCode::C, KeyMods::default(), false);

        let mut sim = Simulation::from_grid(Grid::new(20, 20), 0.45, 0);
        sim.apply_all(collector.into_actions());
        assert_eq!(sim.grid().count_alive(), 0);
    }

    #[test]
    fn test_two_clicks_in_one_frame_toggle_twice() {
        let config = Config::default();
        let mut collector = ActionCollector::new(&config);
        collector.mouse_button_down_event(MouseButton::Left, 17.0, 17.0);
        collector.mouse_button_down_event(MouseButton::Left, 18.0, 16.0);

        let actions = collector.into_actions();
        assert_eq!(actions.len(), 2);

        let mut sim = Simulation::from_grid(Grid::new(20, 20), 0.45, 0);
        sim.apply_all(actions);
        assert!(!sim.grid().get(3, 3));
    }

    #[test]
    fn test_key_repeat_ignored() {
        let config = Config::default();
        let mut collector = ActionCollector::new(&config);
        collector.key_down_event(KeyCode::Space, KeyMods::default(), false);
        collector.key_down_event(KeyCode::Space, KeyMods::default(), true);

        assert_eq!(collector.into_actions(), vec![Action::TogglePause]);
    }

    #[test]
    fn test_quit_request_becomes_action() {
        let config = Config::default();
        let mut collector = ActionCollector::new(&config);
        collector.key_down_event(KeyCode::C, KeyMods::default(), false);
        collector.quit_requested_event();

        assert_eq!(collector.into_actions(), vec![Action::Clear, Action::Quit]);
    }
}
