use serde::{Deserialize, Serialize};

use crate::*;

/// Side length of one tile in pixels for pointer-driven front-ends.
pub const TILE_SIZE: u32 = 40;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerButton {
    Left,
    Right,
    Middle,
}

/// Turns a pointer press into an action on the tile under it, `coord = floor(pixel / tile_size)`.
///
/// Left reveals, right toggles a flag. Returns `None` for other buttons, a zero tile size,
/// or positions beyond the coordinate range. Bounds against the actual board are checked
/// by the board itself.
pub fn translate_pointer(
    pixel: (u32, u32),
    button: PointerButton,
    tile_size: u32,
) -> Option<Action> {
    let x = pixel.0.checked_div(tile_size)?;
    let y = pixel.1.checked_div(tile_size)?;
    let coords = (Coord::try_from(x).ok()?, Coord::try_from(y).ok()?);

    match button {
        PointerButton::Left => Some(Action::Reveal(coords)),
        PointerButton::Right => Some(Action::ToggleFlag(coords)),
        PointerButton::Middle => None,
    }
}
