//! Canvas rendering for the queens puzzle.

use crate::game::GameState;
use crate::theme::Theme;
use queens_core::Position;
use web_sys::CanvasRenderingContext2d;

/// Left margin reserved before the board.
const GRID_MARGIN_X: f64 = 40.0;
/// Vertical padding around the board.
const GRID_MARGIN_Y: f64 = 40.0;
/// Share of the canvas width the board may occupy; the rest holds the
/// info panel.
const GRID_WIDTH_SHARE: f64 = 0.6;

/// Where the board sits on the canvas and how big its squares are.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    pub origin_x: f64,
    pub origin_y: f64,
    pub cell: f64,
}

/// Lay the board out for the current canvas and board dimensions.
pub fn grid_geometry(width: u32, height: u32, cols: usize, rows: usize) -> Geometry {
    let max_grid_width = (width as f64 * GRID_WIDTH_SHARE).max(200.0);
    let max_grid_height = (height as f64 - 2.0 * GRID_MARGIN_Y).max(200.0);

    let cell_by_width = max_grid_width / cols as f64;
    let cell_by_height = max_grid_height / rows as f64;
    let cell = cell_by_width.min(cell_by_height).clamp(16.0, 72.0);

    let origin_y = ((height as f64 - cell * rows as f64) / 2.0).max(GRID_MARGIN_Y);
    Geometry {
        origin_x: GRID_MARGIN_X,
        origin_y,
        cell,
    }
}

/// Map a pointer position in logical canvas pixels to a board square.
/// Returns `None` off the board, including on its exact right/bottom edge.
pub fn cell_at(geom: &Geometry, cols: usize, rows: usize, x: f64, y: f64) -> Option<Position> {
    let dx = x - geom.origin_x;
    let dy = y - geom.origin_y;
    if dx < 0.0 || dy < 0.0 {
        return None;
    }
    let col = (dx / geom.cell) as usize;
    let row = (dy / geom.cell) as usize;
    if col < cols && row < rows && dx < geom.cell * cols as f64 && dy < geom.cell * rows as f64 {
        Some(Position::new(col, row))
    } else {
        None
    }
}

/// Render the complete game to canvas.
pub fn render_game(
    ctx: &CanvasRenderingContext2d,
    state: &GameState,
    theme: &Theme,
    width: u32,
    height: u32,
) {
    ctx.set_fill_style_str(&theme.background.as_css());
    ctx.fill_rect(0.0, 0.0, width as f64, height as f64);

    let geom = grid_geometry(width, height, state.cols(), state.rows());
    render_board(ctx, state, theme, &geom);

    let panel_x = geom.origin_x + geom.cell * state.cols() as f64 + 30.0;
    render_info_panel(ctx, state, theme, panel_x, geom.origin_y);
}

/// Render the checkerboard, domination tint, and queens.
fn render_board(ctx: &CanvasRenderingContext2d, state: &GameState, theme: &Theme, geom: &Geometry) {
    let board = state.session().board();
    let glyph_size = geom.cell * 0.7;

    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");

    for pos in board.positions() {
        let x = geom.origin_x + pos.col as f64 * geom.cell;
        let y = geom.origin_y + pos.row as f64 * geom.cell;

        let square = if (pos.row + pos.col) % 2 == 0 {
            &theme.light_square
        } else {
            &theme.dark_square
        };
        ctx.set_fill_style_str(&square.as_css());
        ctx.fill_rect(x, y, geom.cell, geom.cell);

        // `cell` stays in bounds: `positions()` only yields board coordinates
        let cell = match board.cell(pos) {
            Ok(cell) => cell,
            Err(_) => continue,
        };

        if cell.is_dominated() {
            ctx.set_fill_style_str(&theme.dominated_tint.as_css_alpha(0.35));
            ctx.fill_rect(x, y, geom.cell, geom.cell);
        }

        if cell.has_queen() {
            ctx.set_fill_style_str(&theme.queen.as_css());
            ctx.set_font(&format!("{}px serif", glyph_size));
            let _ = ctx.fill_text("\u{265B}", x + geom.cell / 2.0, y + geom.cell / 2.0);
        }
    }

    // Cell borders and board outline
    ctx.set_stroke_style_str(&theme.grid_lines.as_css());
    ctx.set_line_width(1.0);
    let board_w = geom.cell * state.cols() as f64;
    let board_h = geom.cell * state.rows() as f64;
    for col in 0..=state.cols() {
        let x = geom.origin_x + col as f64 * geom.cell;
        ctx.begin_path();
        ctx.move_to(x, geom.origin_y);
        ctx.line_to(x, geom.origin_y + board_h);
        ctx.stroke();
    }
    for row in 0..=state.rows() {
        let y = geom.origin_y + row as f64 * geom.cell;
        ctx.begin_path();
        ctx.move_to(geom.origin_x, y);
        ctx.line_to(geom.origin_x + board_w, y);
        ctx.stroke();
    }
}

/// Render the status panel beside the board.
fn render_info_panel(
    ctx: &CanvasRenderingContext2d,
    state: &GameState,
    theme: &Theme,
    x: f64,
    y: f64,
) {
    ctx.set_text_align("left");
    ctx.set_text_baseline("top");

    ctx.set_font("bold 22px 'JetBrains Mono', 'Fira Code', 'Consolas', monospace");
    ctx.set_fill_style_str(&theme.title_text.as_css());
    let _ = ctx.fill_text("Queens Domination", x, y);

    ctx.set_font("16px 'JetBrains Mono', 'Fira Code', 'Consolas', monospace");
    ctx.set_fill_style_str(&theme.info_text.as_css());
    let _ = ctx.fill_text(&format!("Board: {}", state.session().size()), x, y + 44.0);
    let _ = ctx.fill_text(&state.queens_used_text(), x, y + 70.0);
    let _ = ctx.fill_text(&state.best_text(), x, y + 96.0);
    let _ = ctx.fill_text("Click a square to toggle a queen.", x, y + 140.0);
    let _ = ctx.fill_text("Dominate every square to solve.", x, y + 162.0);

    if state.is_solved() {
        ctx.set_font("bold 20px 'JetBrains Mono', 'Fira Code', 'Consolas', monospace");
        ctx.set_fill_style_str(&theme.solved_color.as_css());
        let _ = ctx.fill_text("Solved!", x, y + 206.0);
    }
}
