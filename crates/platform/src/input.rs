//! Keyboard mapping to scene commands.

use corelib::input::ANGLE_STEP;
use corelib::{CameraPreset, Command, RenderMode, Throttle};
use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// Command for a key transition, if the key is bound.
///
/// Mode and camera keys fire on press only. Arrow keys drive a throttle while
/// held and release it on key-up.
pub fn command_for_key(key: KeyCode, state: ElementState) -> Option<Command> {
    let pressed = state.is_pressed();
    let held = |throttle: Throttle| if pressed { throttle } else { Throttle::Idle };

    match key {
        KeyCode::ArrowUp => Some(Command::Vertical(held(Throttle::Forward))),
        KeyCode::ArrowDown => Some(Command::Vertical(held(Throttle::Reverse))),
        KeyCode::ArrowLeft => Some(Command::Horizontal(held(Throttle::Forward))),
        KeyCode::ArrowRight => Some(Command::Horizontal(held(Throttle::Reverse))),
        _ if !pressed => None,
        KeyCode::KeyW => Some(Command::SetRenderMode(RenderMode::Wireframe)),
        KeyCode::KeyS => Some(Command::SetRenderMode(RenderMode::Filled)),
        KeyCode::KeyJ => Some(Command::Theta(-ANGLE_STEP)),
        KeyCode::KeyL => Some(Command::Theta(ANGLE_STEP)),
        KeyCode::KeyI => Some(Command::Gamma(ANGLE_STEP)),
        KeyCode::KeyK => Some(Command::Gamma(-ANGLE_STEP)),
        other => preset_for_key(other).map(Command::SelectCamera),
    }
}

fn preset_for_key(key: KeyCode) -> Option<CameraPreset> {
    let n = match key {
        KeyCode::Digit1 | KeyCode::Numpad1 => 1,
        KeyCode::Digit2 | KeyCode::Numpad2 => 2,
        KeyCode::Digit3 | KeyCode::Numpad3 => 3,
        KeyCode::Digit4 | KeyCode::Numpad4 => 4,
        KeyCode::Digit5 | KeyCode::Numpad5 => 5,
        _ => return None,
    };
    CameraPreset::try_from(n).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    use ElementState::{Pressed, Released};

    #[test]
    fn arrows_hold_and_release() {
        assert_eq!(
            command_for_key(KeyCode::ArrowUp, Pressed),
            Some(Command::Vertical(Throttle::Forward))
        );
        assert_eq!(
            command_for_key(KeyCode::ArrowUp, Released),
            Some(Command::Vertical(Throttle::Idle))
        );
        assert_eq!(
            command_for_key(KeyCode::ArrowDown, Pressed),
            Some(Command::Vertical(Throttle::Reverse))
        );
        assert_eq!(
            command_for_key(KeyCode::ArrowRight, Released),
            Some(Command::Horizontal(Throttle::Idle))
        );
        assert_eq!(
            command_for_key(KeyCode::ArrowLeft, Pressed),
            Some(Command::Horizontal(Throttle::Forward))
        );
    }

    #[test]
    fn mode_keys_fire_on_press_only() {
        assert_eq!(
            command_for_key(KeyCode::KeyW, Pressed),
            Some(Command::SetRenderMode(RenderMode::Wireframe))
        );
        assert_eq!(
            command_for_key(KeyCode::KeyS, Pressed),
            Some(Command::SetRenderMode(RenderMode::Filled))
        );
        assert_eq!(command_for_key(KeyCode::KeyW, Released), None);
        assert_eq!(command_for_key(KeyCode::Digit3, Released), None);
    }

    #[test]
    fn number_keys_select_presets() {
        let expected = [
            (KeyCode::Digit1, CameraPreset::Axonometric),
            (KeyCode::Digit2, CameraPreset::Front),
            (KeyCode::Digit3, CameraPreset::Top),
            (KeyCode::Digit4, CameraPreset::Side),
            (KeyCode::Digit5, CameraPreset::Chase),
            (KeyCode::Numpad5, CameraPreset::Chase),
        ];
        for (key, preset) in expected {
            assert_eq!(
                command_for_key(key, Pressed),
                Some(Command::SelectCamera(preset))
            );
        }
        assert_eq!(command_for_key(KeyCode::Digit6, Pressed), None);
    }

    #[test]
    fn slider_keys_step_angles() {
        assert_eq!(command_for_key(KeyCode::KeyJ, Pressed), Some(Command::Theta(-5.0)));
        assert_eq!(command_for_key(KeyCode::KeyL, Pressed), Some(Command::Theta(5.0)));
        assert_eq!(command_for_key(KeyCode::KeyI, Pressed), Some(Command::Gamma(5.0)));
        assert_eq!(command_for_key(KeyCode::KeyK, Pressed), Some(Command::Gamma(-5.0)));
    }

    #[test]
    fn unbound_keys_are_ignored() {
        assert_eq!(command_for_key(KeyCode::KeyQ, Pressed), None);
        assert_eq!(command_for_key(KeyCode::Space, Released), None);
    }
}
