//! WebAssembly build of the queens domination puzzle.
//!
//! Binds a [`queens_core::GameSession`] to a `<canvas>` element: clicks
//! toggle queens, the canvas shows the board with dominated squares
//! tinted, and a side panel tracks queens used and the best solved score.

use wasm_bindgen::prelude::*;
use web_sys::{console, CanvasRenderingContext2d, HtmlCanvasElement, HtmlElement, MouseEvent};

mod game;
mod render;
mod theme;


pub use game::GameState;
pub use theme::Theme;

// Initialize panic hook for better error messages
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// The main WASM game controller
#[wasm_bindgen]
pub struct QueensGame {
    state: GameState,
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    theme: Theme,
    width: u32,
    height: u32,
    dpr: f64, // Device pixel ratio for crisp rendering
}

#[wasm_bindgen]
impl QueensGame {
    /// Create a new game attached to a canvas element
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str) -> Result<QueensGame, JsValue> {
        let document = web_sys::window()
            .ok_or("No window")?
            .document()
            .ok_or("No document")?;

        let canvas = document
            .get_element_by_id(canvas_id)
            .ok_or("Canvas not found")?
            .dyn_into::<HtmlCanvasElement>()?;

        let ctx = canvas
            .get_context("2d")?
            .ok_or("Failed to get 2d context")?
            .dyn_into::<CanvasRenderingContext2d>()?;

        let dpr = web_sys::window()
            .map(|w| w.device_pixel_ratio())
            .unwrap_or(1.0);

        let width = 900;
        let height = 640;

        // Actual canvas resolution scaled by dpr, CSS size in logical pixels
        canvas.set_width((width as f64 * dpr) as u32);
        canvas.set_height((height as f64 * dpr) as u32);
        let html_element: &HtmlElement = canvas.as_ref();
        let style = html_element.style();
        let _ = style.set_property("width", &format!("{}px", width));
        let _ = style.set_property("height", &format!("{}px", height));
        let _ = ctx.scale(dpr, dpr);

        let game = QueensGame {
            state: GameState::new(),
            canvas,
            ctx,
            theme: Theme::dark(),
            width,
            height,
            dpr,
        };

        game.render();
        Ok(game)
    }

    /// Handle a pointer click on the canvas. Clicks off the board are
    /// ignored.
    #[wasm_bindgen]
    pub fn handle_click(&mut self, event: &MouseEvent) {
        let geom = render::grid_geometry(
            self.width,
            self.height,
            self.state.cols(),
            self.state.rows(),
        );
        let pos = render::cell_at(
            &geom,
            self.state.cols(),
            self.state.rows(),
            event.offset_x() as f64,
            event.offset_y() as f64,
        );
        let Some(pos) = pos else { return };

        match self.state.toggle(pos) {
            Ok(outcome) => {
                if outcome.solved {
                    console::log_1(
                        &format!("solved with {} queens", self.state.session().queens_placed())
                            .into(),
                    );
                }
            }
            // cell_at only yields board coordinates; report if that breaks
            Err(err) => console::error_1(&err.to_string().into()),
        }
        self.render();
    }

    /// Change the board size from text like `"8x8"`.
    ///
    /// The error carries the user-facing message; on rejection the board
    /// keeps its previous dimensions and scores.
    #[wasm_bindgen]
    pub fn set_board_size(&mut self, input: &str) -> Result<(), JsValue> {
        let size = self
            .state
            .set_board_size(input)
            .map_err(|err| JsValue::from_str(&err.to_string()))?;
        console::log_1(&format!("board resized to {}", size).into());
        self.render();
        Ok(())
    }

    /// Set the color theme
    #[wasm_bindgen]
    pub fn set_theme(&mut self, theme_name: &str) {
        self.theme = match theme_name {
            "light" => Theme::light(),
            "high_contrast" => Theme::high_contrast(),
            _ => Theme::dark(),
        };
        self.render();
    }

    /// Resize the game canvas
    #[wasm_bindgen]
    pub fn resize(&mut self, width: u32, height: u32) {
        let width = width.max(480);
        let height = height.max(360);

        self.width = width;
        self.height = height;

        // dpr can change when the window moves to a different monitor
        self.dpr = web_sys::window()
            .map(|w| w.device_pixel_ratio())
            .unwrap_or(1.0);

        self.canvas.set_width((width as f64 * self.dpr) as u32);
        self.canvas.set_height((height as f64 * self.dpr) as u32);
        let html_element: &HtmlElement = self.canvas.as_ref();
        let style = html_element.style();
        let _ = style.set_property("width", &format!("{}px", width));
        let _ = style.set_property("height", &format!("{}px", height));

        let _ = self.ctx.reset_transform();
        let _ = self.ctx.scale(self.dpr, self.dpr);

        self.render();
    }

    /// Get number of queens currently on the board
    #[wasm_bindgen]
    pub fn queens_used(&self) -> usize {
        self.state.session().queens_placed()
    }

    /// Best solved score, if the board has been solved at this size
    #[wasm_bindgen]
    pub fn best_score(&self) -> Option<usize> {
        self.state.session().best_score()
    }

    /// Status line: "Queens used: N"
    #[wasm_bindgen]
    pub fn queens_used_text(&self) -> String {
        self.state.queens_used_text()
    }

    /// Status line: "Best: N" or "Best: Not solved yet"
    #[wasm_bindgen]
    pub fn best_text(&self) -> String {
        self.state.best_text()
    }

    /// Check if every square is dominated
    #[wasm_bindgen]
    pub fn is_solved(&self) -> bool {
        self.state.is_solved()
    }

    /// Get current session status as JSON
    #[wasm_bindgen]
    pub fn status_json(&self) -> String {
        serde_json::to_string(&self.state.status()).unwrap_or_default()
    }

    /// Get current canvas width
    #[wasm_bindgen]
    pub fn get_width(&self) -> u32 {
        self.width
    }

    /// Get current canvas height
    #[wasm_bindgen]
    pub fn get_height(&self) -> u32 {
        self.height
    }

    /// Render the game to canvas
    fn render(&self) {
        render::render_game(&self.ctx, &self.state, &self.theme, self.width, self.height);
    }
}
