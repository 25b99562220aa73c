use macroquad::input::{KeyCode, get_char_pressed, get_keys_down, get_keys_pressed};

use snake_arcade::input::{InputFrame, Key, KeyPress};

const LETTERS: [(KeyCode, char); 26] = [
    (KeyCode::A, 'a'),
    (KeyCode::B, 'b'),
    (KeyCode::C, 'c'),
    (KeyCode::D, 'd'),
    (KeyCode::E, 'e'),
    (KeyCode::F, 'f'),
    (KeyCode::G, 'g'),
    (KeyCode::H, 'h'),
    (KeyCode::I, 'i'),
    (KeyCode::J, 'j'),
    (KeyCode::K, 'k'),
    (KeyCode::L, 'l'),
    (KeyCode::M, 'm'),
    (KeyCode::N, 'n'),
    (KeyCode::O, 'o'),
    (KeyCode::P, 'p'),
    (KeyCode::Q, 'q'),
    (KeyCode::R, 'r'),
    (KeyCode::S, 's'),
    (KeyCode::T, 't'),
    (KeyCode::U, 'u'),
    (KeyCode::V, 'v'),
    (KeyCode::W, 'w'),
    (KeyCode::X, 'x'),
    (KeyCode::Y, 'y'),
    (KeyCode::Z, 'z'),
];

/// Keys without a printable character.
fn named(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Up => Some(Key::Up),
        KeyCode::Down => Some(Key::Down),
        KeyCode::Left => Some(Key::Left),
        KeyCode::Right => Some(Key::Right),
        KeyCode::Enter | KeyCode::KpEnter => Some(Key::Return),
        KeyCode::Escape => Some(Key::Escape),
        KeyCode::Backspace => Some(Key::Backspace),
        KeyCode::Tab => Some(Key::Tab),
        _ => None,
    }
}

fn held(code: KeyCode) -> Option<Key> {
    if code == KeyCode::Space {
        return Some(Key::Space);
    }
    named(code).or_else(|| {
        LETTERS
            .iter()
            .find_map(|&(letter, c)| (letter == code).then_some(Key::Char(c)))
    })
}

/// Key-down events of this frame. Printable keys arrive through the text
/// channel so they carry the typed character.
pub fn poll() -> InputFrame {
    let mut presses: Vec<KeyPress> = get_keys_pressed()
        .into_iter()
        .filter_map(named)
        .map(KeyPress::key)
        .collect();
    while let Some(c) = get_char_pressed() {
        if !c.is_control() {
            presses.push(KeyPress::typed(c));
        }
    }
    InputFrame {
        presses,
        held: get_keys_down().into_iter().filter_map(held).collect(),
    }
}
