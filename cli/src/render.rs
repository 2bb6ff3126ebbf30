use std::fmt::Write;

use sweeper_core::{Board, FLAG_SYMBOL, HIDDEN_SYMBOL, MINE_SYMBOL, ToNdIndex, Visibility};

/// Terminal glyph for a render symbol.
fn glyph(symbol: char) -> char {
    match symbol {
        HIDDEN_SYMBOL => '#',
        FLAG_SYMBOL => 'F',
        MINE_SYMBOL => '*',
        '0' => '.',
        digit => digit,
    }
}

/// Draws the board with column numbers on top and row numbers on the left.
///
/// With `show_mines` every unflagged mine is drawn too, the triggered one as `X`.
pub fn draw(board: &Board, show_mines: bool) -> String {
    let (width, height) = board.size();
    let symbols = board.symbols();
    let mut out = String::new();

    out.push_str("   ");
    for x in 0..width {
        let _ = write!(out, "{:>3}", x);
    }
    out.push('\n');

    for y in 0..height {
        let _ = write!(out, "{:>3}", y);
        for x in 0..width {
            let coords = (x, y);
            let mut cell = glyph(symbols[coords.to_nd_index()]);
            if show_mines {
                let mine = board.truth_at(coords).is_some_and(|t| t.is_mine());
                if board.triggered_mine() == Some(coords) {
                    cell = 'X';
                } else if mine && board.tile_at(coords) == Some(Visibility::Hidden) {
                    cell = glyph(MINE_SYMBOL);
                }
            }
            let _ = write!(out, "{:>3}", cell);
        }
        out.push('\n');
    }

    let _ = write!(out, "Mines left: {}", board.mines_left());
    out
}
