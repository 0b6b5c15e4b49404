use super::board::Board;
use super::types::{Mark, Outcome, Position, WinningLine};

type Line = [(usize, usize); 3];

/// The eight fixed lines, in scan order: rows, columns, main diagonal, anti-diagonal.
const LINES: [Line; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

fn line_owned_by(board: &Board, line: &Line, mark: Mark) -> bool {
    let rows = board.rows();
    line.iter().all(|&(row, col)| rows[row][col] == mark)
}

pub fn has_won(board: &Board, mark: Mark) -> bool {
    if !mark.is_player() {
        return false;
    }
    LINES.iter().any(|line| line_owned_by(board, line, mark))
}

/// True when no cell is empty. Does not look at lines: check `has_won` for both marks first.
pub fn is_draw(board: &Board) -> bool {
    board.is_full()
}

pub fn outcome(board: &Board, mark_a: Mark, mark_b: Mark) -> Outcome {
    if has_won(board, mark_a) {
        return Outcome::Win(mark_a);
    }
    if has_won(board, mark_b) {
        return Outcome::Win(mark_b);
    }
    if is_draw(board) {
        return Outcome::Draw;
    }
    Outcome::InProgress
}

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|line| line.mark)
}

pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    let rows = board.rows();
    for line in &LINES {
        let (row, col) = line[0];
        let mark = rows[row][col];
        if mark == Mark::Empty {
            continue;
        }
        if line_owned_by(board, line, mark) {
            let (end_row, end_col) = line[2];
            return Some(WinningLine::new(
                mark,
                Position::new(row, col),
                Position::new(end_row, end_col),
            ));
        }
    }
    None
}
