use macroquad::prelude::{
    BLACK, Color, TextParams, clear_background, draw_line, draw_rectangle, draw_text,
    draw_text_ex, measure_text, screen_height, screen_width,
};

use snake_arcade::grid::{Cell, Grid};
use snake_arcade::render::{
    BoardView, Canvas, GameOverView, HighscoresView, MenuView, SettingsRow, SettingsView,
};

// Classic palette
const BGCOLOR: Color = Color::new(0.16, 0.16, 0.16, 1.0);
const WHITE: Color = Color::new(0.78, 0.78, 0.78, 1.0);
const SNAKE_COLOR: Color = Color::new(0.0, 0.78, 0.0, 1.0);
const APPLE_COLOR: Color = Color::new(0.78, 0.0, 0.0, 1.0);

// Glyph palette
const MATRIX_HEAD: Color = Color::new(0.64, 1.0, 0.64, 1.0);
const MATRIX_BODY: Color = Color::new(0.25, 0.9, 0.25, 1.0);
const MATRIX_FOOD: Color = Color::new(0.9, 1.0, 0.9, 1.0);

const MATRIX_GLYPHS: &[u8] = b"01<>[]{}()/\\|-=+*;:.,^~ABCDEFGHIJKLMNOPQRSTUVWXYZ";

const FADE_STEP: f32 = 15.0 / 255.0;
const MAX_SPLATS: usize = 600;

fn glyph_for_cell(c: Cell, salt: usize) -> char {
    let hx = (c.x as i64).wrapping_mul(73_856_093);
    let hy = (c.y as i64).wrapping_mul(19_349_663);
    let h = (hx ^ hy).unsigned_abs() as usize;
    MATRIX_GLYPHS[(h + salt) % MATRIX_GLYPHS.len()] as char
}

fn draw_centered(text: &str, y: f32, size: u16, color: Color) {
    let m = measure_text(text, None, size, 1.0);
    draw_text(text, (screen_width() - m.width) * 0.5, y, size as f32, color);
}

#[derive(Clone, Copy)]
struct Splat {
    x: f32,
    y: f32,
    shade: f32,
}

enum Layer {
    Board {
        cells: Vec<Cell>,
        apple: Option<Cell>,
        show_grid: bool,
        classic: bool,
    },
    Splatter(Vec<Splat>),
    Pause {
        score: u32,
    },
    Fade(f32),
    Menu {
        options: Vec<String>,
        selected: usize,
    },
    GameOver {
        score: u32,
        record: bool,
        initials: String,
        pun: String,
        hint: String,
    },
    Highscores {
        rows: Vec<String>,
        hint: String,
    },
    Settings {
        rows: Vec<(String, bool)>,
        hint: String,
    },
    Credits,
}

/// Retained canvas: draw calls edit a layer stack that is re-presented
/// every frame, so one-shot overlays survive until the next full redraw.
pub struct ScreenCanvas {
    grid: Grid,
    layers: Vec<Layer>,
}

impl ScreenCanvas {
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            layers: Vec::new(),
        }
    }

    fn replace(&mut self, layer: Layer) {
        self.layers.clear();
        self.layers.push(layer);
    }

    fn tile(&self) -> (f32, f32, f32, f32) {
        let sw = screen_width();
        let sh = screen_height();
        let tile_w = sw / self.grid.width as f32;
        let tile_h = sh / self.grid.height as f32;
        let off_x = (sw - tile_w * self.grid.width as f32) * 0.5;
        let off_y = (sh - tile_h * self.grid.height as f32) * 0.5;
        (tile_w, tile_h, off_x, off_y)
    }

    fn draw_cell(&self, cell: Cell, color: Color) {
        let (tile_w, tile_h, off_x, off_y) = self.tile();
        draw_rectangle(
            off_x + cell.x as f32 * tile_w,
            off_y + cell.y as f32 * tile_h,
            tile_w,
            tile_h,
            color,
        );
    }

    fn draw_glyph(&self, ch: char, cell: Cell, color: Color) {
        let (tile_w, tile_h, off_x, off_y) = self.tile();
        let x = off_x + cell.x as f32 * tile_w + 1.0;
        let y = off_y + (cell.y as f32 + 1.0) * tile_h - 1.0; // baseline
        let size = tile_w.min(tile_h).max(6.0);
        let params = TextParams {
            font_size: size as u16,
            font_scale: 1.0,
            font_scale_aspect: 1.0,
            color,
            ..Default::default()
        };
        draw_text_ex(&ch.to_string(), x, y, params);
    }

    fn present_board(&self, cells: &[Cell], apple: Option<Cell>, show_grid: bool, classic: bool) {
        clear_background(if classic { BGCOLOR } else { BLACK });
        for (i, &cell) in cells.iter().enumerate() {
            if classic {
                self.draw_cell(cell, SNAKE_COLOR);
            } else {
                let color = if i == 0 { MATRIX_HEAD } else { MATRIX_BODY };
                self.draw_glyph(glyph_for_cell(cell, i), cell, color);
            }
        }
        if let Some(apple) = apple {
            if classic {
                self.draw_cell(apple, APPLE_COLOR);
            } else {
                self.draw_glyph('@', apple, MATRIX_FOOD);
            }
        }
        if show_grid {
            let (tile_w, tile_h, off_x, off_y) = self.tile();
            let (w, h) = (tile_w * self.grid.width as f32, tile_h * self.grid.height as f32);
            for i in 0..self.grid.width {
                let x = off_x + i as f32 * tile_w;
                draw_line(x, off_y, x, off_y + h, 1.0, WHITE);
            }
            for i in 0..self.grid.height {
                let y = off_y + i as f32 * tile_h;
                draw_line(off_x, y, off_x + w, y, 1.0, WHITE);
            }
        }
    }

    /// Draws the layer stack for this frame.
    pub fn present(&self) {
        clear_background(BGCOLOR);
        let sh = screen_height();
        let sw = screen_width();
        for layer in &self.layers {
            match layer {
                Layer::Board {
                    cells,
                    apple,
                    show_grid,
                    classic,
                } => self.present_board(cells, *apple, *show_grid, *classic),
                Layer::Splatter(splats) => {
                    for s in splats {
                        draw_rectangle(s.x, s.y, 2.0, 2.0, Color::new(s.shade, 0.0, 0.0, 1.0));
                    }
                }
                Layer::Pause { score } => {
                    draw_rectangle(0.0, 0.0, sw, sh, Color::new(0.0, 0.0, 0.0, 160.0 / 255.0));
                    draw_centered("Paused", sh * 0.4, 80, WHITE);
                    draw_centered(&format!("Score: {score}"), sh * 0.4 + 70.0, 30, WHITE);
                }
                Layer::Fade(alpha) => {
                    draw_rectangle(0.0, 0.0, sw, sh, Color::new(0.0, 0.0, 0.0, *alpha));
                }
                Layer::Menu { options, selected } => {
                    draw_rectangle(0.0, 50.0, sw, 140.0, Color::new(0.78, 0.78, 0.78, 0.47));
                    draw_centered("SNAKE", 160.0, 120, BLACK);
                    let mut y = 300.0;
                    for (i, option) in options.iter().enumerate() {
                        // extra room before the last option
                        if i + 1 == options.len() {
                            y += 60.0;
                        }
                        if i == *selected {
                            draw_rectangle(0.0, y - 40.0, sw, 50.0, Color::new(0.0, 0.0, 0.0, 0.6));
                            draw_centered(option, y, 50, APPLE_COLOR);
                        } else {
                            draw_centered(option, y, 40, WHITE);
                        }
                        y += 60.0;
                    }
                }
                Layer::GameOver {
                    score,
                    record,
                    initials,
                    pun,
                    hint,
                } => {
                    draw_centered("YOU LOST", 170.0, 100, WHITE);
                    draw_centered(&format!("Your score was {score}"), 290.0, 30, WHITE);
                    if *record {
                        draw_centered("New record!", 360.0, 30, WHITE);
                        let prompt = format!("Enter your initials: [{initials:<3}]");
                        draw_centered(&prompt, 440.0, 30, WHITE);
                    } else {
                        draw_centered(hint, 345.0, 30, WHITE);
                    }
                    draw_centered(pun, sh - 110.0, 25, WHITE);
                }
                Layer::Highscores { rows, hint } => {
                    draw_centered("Highscores", 90.0, 50, WHITE);
                    for (i, row) in rows.iter().enumerate() {
                        let fade = i as f32 * 0.12;
                        let color = Color::new(0.78 - fade, 0.78 - fade * 0.6, 0.78 - fade, 1.0);
                        draw_text(row, 75.0, 180.0 + i as f32 * 50.0, 30.0, color);
                    }
                    draw_centered(hint, sh - 100.0, 30, WHITE);
                }
                Layer::Settings { rows, hint } => {
                    draw_centered("Settings", 120.0, 60, WHITE);
                    for (i, (row, selected)) in rows.iter().enumerate() {
                        let color = if *selected { APPLE_COLOR } else { WHITE };
                        draw_centered(row, 260.0 + i as f32 * 60.0, 36, color);
                    }
                    draw_centered(hint, sh - 100.0, 26, WHITE);
                }
                Layer::Credits => {
                    draw_centered("Thanks for playing", sh * 0.5 - 20.0, 60, WHITE);
                    draw_text("A game of Snake", 30.0, sh - 30.0, 30.0, WHITE);
                }
            }
        }
    }
}

impl Canvas for ScreenCanvas {
    fn draw_board(&mut self, board: &BoardView<'_>) {
        self.replace(Layer::Board {
            cells: board.snake.cells().collect(),
            apple: board.apple,
            show_grid: board.show_grid,
            classic: board.classic,
        });
    }

    fn draw_crash(&mut self, head: Cell) {
        let (tile_w, tile_h, off_x, off_y) = self.tile();
        let cx = off_x + (head.x as f32 + 0.5) * tile_w;
        let cy = off_y + (head.y as f32 + 0.5) * tile_h;
        let radius = macroquad::rand::gen_range(0.0f32, 1.0).sqrt();
        let angle = macroquad::rand::gen_range(0.0f32, std::f32::consts::TAU);
        let splat = Splat {
            x: cx + tile_w * radius * angle.cos(),
            y: cy + tile_h * radius * angle.sin(),
            shade: macroquad::rand::gen_range(0.2f32, 0.98),
        };
        if let Some(Layer::Splatter(splats)) = self.layers.last_mut() {
            if splats.len() < MAX_SPLATS {
                splats.push(splat);
            }
        } else {
            self.layers.push(Layer::Splatter(vec![splat]));
        }
    }

    fn draw_pause(&mut self, score: u32) {
        self.layers.push(Layer::Pause { score });
    }

    fn draw_fade(&mut self) {
        if let Some(Layer::Fade(alpha)) = self.layers.last_mut() {
            *alpha = (*alpha + FADE_STEP).min(1.0);
        } else {
            self.layers.push(Layer::Fade(FADE_STEP));
        }
    }

    fn draw_menu(&mut self, menu: &MenuView<'_>) {
        self.replace(Layer::Menu {
            options: menu.options.iter().map(|o| o.to_string()).collect(),
            selected: menu.selected,
        });
    }

    fn draw_game_over(&mut self, view: &GameOverView<'_>) {
        self.replace(Layer::GameOver {
            score: view.score,
            record: view.record,
            initials: view.initials.to_owned(),
            pun: view.pun.to_owned(),
            hint: format!(
                "({} to replay, {} to exit menu)",
                view.replay_key.to_string().to_uppercase(),
                view.menu_key.to_string().to_uppercase()
            ),
        });
    }

    fn draw_highscores(&mut self, view: &HighscoresView<'_>) {
        let rows = view
            .table
            .entries()
            .iter()
            .enumerate()
            .map(|(i, e)| {
                format!("{} ___ {:>3} _____ {:3} _____ {}", i + 1, e.name, e.score, e.date)
            })
            .collect();
        self.replace(Layer::Highscores {
            rows,
            hint: format!("({} to exit menu)", view.back_key.to_string().to_uppercase()),
        });
    }

    fn draw_settings(&mut self, view: &SettingsView) {
        let rows = SettingsRow::ALL
            .iter()
            .map(|&row| {
                let value = match row {
                    SettingsRow::Sound => format!("{:>3}%", (view.sound * 100.0).round() as i32),
                    SettingsRow::Music => format!("{:>3}%", (view.music * 100.0).round() as i32),
                    SettingsRow::Classic => (if view.classic { "on" } else { "off" }).to_owned(),
                };
                (format!("{}: {}", row.label(), value), row == view.selected)
            })
            .collect();
        self.replace(Layer::Settings {
            rows,
            hint: format!(
                "UP/DOWN select, LEFT/RIGHT adjust, {} back",
                view.back_key.to_string().to_uppercase()
            ),
        });
    }

    fn draw_credits(&mut self) {
        self.replace(Layer::Credits);
    }
}
