//! Text rendering of the board.

use tictactoe_core::Board;

/// Board with cell numbers, shown once so players know what to type
pub fn cell_key() -> String {
    grid(|i| char::from_digit(i as u32, 10).unwrap_or('?'))
}

/// Current board, empty cells left blank
pub fn board(board: &Board) -> String {
    grid(|i| {
        board
            .get(i)
            .and_then(|cell| cell.marker())
            .map_or(' ', |marker| marker.symbol())
    })
}

fn grid<F>(symbol_at: F) -> String
where
    F: Fn(usize) -> char,
{
    let mut out = String::new();
    for row in 0..3 {
        if row > 0 {
            out.push_str("---+---+---\n");
        }
        let symbols: Vec<String> = (0..3)
            .map(|col| format!(" {} ", symbol_at(row * 3 + col)))
            .collect();
        out.push_str(&symbols.join("|"));
        out.push('\n');
    }
    out
}
