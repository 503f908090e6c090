use crate::state::{Direction, Joint};

/// Discrete user action, independent of the windowing toolkit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    SelectJoint(Joint),
    Adjust(Direction),
    ToggleSpotlight,
    ResetPose,
    Quit,
}

/// Control summary printed at startup.
pub const CONTROLS_HELP: &[&str] = &[
    "Controls:",
    "  1-4: Select joint (Base, Lower Arm, Upper Arm, Lampshade)",
    "  Up/Down: Tilt selected arm or lampshade",
    "  Left/Right: Spin base or lampshade",
    "  F: Toggle spotlight",
    "  R: Reset to default position",
    "  Esc: Exit",
];

/// Map a key identifier (`"1"`, `"f"`, `"ArrowUp"`, `"Escape"`, ...) to a command.
#[inline]
pub fn command_for_key(key: &str) -> Option<Command> {
    if let Some(joint) = joint_for_digit(key) {
        return Some(Command::SelectJoint(joint));
    }
    if let Some(direction) = direction_for_key(key) {
        return Some(Command::Adjust(direction));
    }
    match key {
        "f" | "F" => Some(Command::ToggleSpotlight),
        "r" | "R" => Some(Command::ResetPose),
        "Escape" => Some(Command::Quit),
        _ => None,
    }
}

#[inline]
pub fn joint_for_digit(key: &str) -> Option<Joint> {
    match key {
        "1" => Joint::from_number(1),
        "2" => Joint::from_number(2),
        "3" => Joint::from_number(3),
        "4" => Joint::from_number(4),
        _ => None,
    }
}

#[inline]
pub fn direction_for_key(key: &str) -> Option<Direction> {
    match key {
        "ArrowUp" => Some(Direction::Up),
        "ArrowDown" => Some(Direction::Down),
        "ArrowLeft" => Some(Direction::Left),
        "ArrowRight" => Some(Direction::Right),
        _ => None,
    }
}
