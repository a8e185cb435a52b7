//! GameView: draws a grid snapshot and HUD into a [`Frame`].
//!
//! Pure, no I/O.

use crate::core::GridSnapshot;
use crate::frame::{Frame, Rgb, Style};
use crate::types::{ColorToken, PieceKind};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Nothing started yet.
    Ready,
    Playing,
    Paused,
    GameOver,
}

/// Everything next to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hud {
    pub elapsed_secs: u64,
    pub score: u32,
    pub level: u32,
    pub next: Option<PieceKind>,
    pub status: Status,
}

const BOARD_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_MIN_WIDTH: u16 = 12;

pub struct GameView {
    /// Terminal columns per board cell.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // Two columns per cell keeps cells roughly square.
        Self { cell_w: 2 }
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
        }
    }

    /// Render into an existing frame, resizing it to the viewport.
    pub fn render_into(&self, grid: &GridSnapshot, hud: &Hud, viewport: Viewport, frame: &mut Frame) {
        frame.reset(viewport.width, viewport.height);

        let inner_w = grid.width.saturating_mul(self.cell_w);
        let inner_h = grid.height;
        let outer_w = inner_w.saturating_add(2);
        let outer_h = inner_h.saturating_add(2);
        let x0 = viewport.width.saturating_sub(outer_w + PANEL_MIN_WIDTH + 2) / 2;
        let y0 = viewport.height.saturating_sub(outer_h) / 2;

        draw_border(frame, x0, y0, outer_w, outer_h);

        let empty = Style {
            fg: Rgb::new(90, 90, 100),
            bg: BOARD_BG,
            bold: false,
        };
        for (y, row) in grid.rows().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                let px = x0 + 1 + x as u16 * self.cell_w;
                let py = y0 + 1 + y as u16;
                match cell.color {
                    Some(token) => {
                        let style = Style {
                            fg: token_rgb(token),
                            bg: BOARD_BG,
                            bold: true,
                        };
                        frame.fill(px, py, self.cell_w, 1, '█', style);
                    }
                    None => {
                        frame.fill(px, py, self.cell_w, 1, ' ', empty);
                        frame.put(px, py, '·', empty);
                    }
                }
            }
        }

        self.draw_panel(frame, hud, x0 + outer_w + 2, y0);

        let overlay = match hud.status {
            Status::Ready => Some("PRESS R"),
            Status::Paused => Some("PAUSED"),
            Status::GameOver => Some("GAME OVER"),
            Status::Playing => None,
        };
        if let Some(text) = overlay {
            let w = text.chars().count() as u16;
            let x = x0 + outer_w.saturating_sub(w) / 2;
            frame.put_str(x, y0 + outer_h / 2, text, Style::fg(Rgb::new(255, 255, 255)).bold());
        }
    }

    pub fn render(&self, grid: &GridSnapshot, hud: &Hud, viewport: Viewport) -> Frame {
        let mut frame = Frame::new(viewport.width, viewport.height);
        self.render_into(grid, hud, viewport, &mut frame);
        frame
    }

    fn draw_panel(&self, frame: &mut Frame, hud: &Hud, x: u16, y: u16) {
        if x.saturating_add(PANEL_MIN_WIDTH) > frame.width() {
            return;
        }
        let label = Style::PLAIN.bold();
        let value = Style::fg(Rgb::new(200, 200, 200));

        let rows: [(&str, String); 4] = [
            ("TIME", format_clock(hud.elapsed_secs)),
            ("SCORE", hud.score.to_string()),
            ("LEVEL", hud.level.to_string()),
            ("NEXT", hud.next.map_or("-", |k| k.as_str()).to_string()),
        ];
        for (i, (name, text)) in rows.iter().enumerate() {
            let row = y + i as u16 * 3;
            frame.put_str(x, row, name, label);
            frame.put_str(x, row + 1, text, value);
        }
    }
}

fn draw_border(frame: &mut Frame, x: u16, y: u16, w: u16, h: u16) {
    if w < 2 || h < 2 {
        return;
    }
    let style = Style::fg(Rgb::new(200, 200, 200));
    let (right, bottom) = (x + w - 1, y + h - 1);
    frame.put(x, y, '┌', style);
    frame.put(right, y, '┐', style);
    frame.put(x, bottom, '└', style);
    frame.put(right, bottom, '┘', style);
    for cx in x + 1..right {
        frame.put(cx, y, '─', style);
        frame.put(cx, bottom, '─', style);
    }
    for cy in y + 1..bottom {
        frame.put(x, cy, '│', style);
        frame.put(right, cy, '│', style);
    }
}

/// Terminal color for a cell token.
pub fn token_rgb(token: ColorToken) -> Rgb {
    match token {
        ColorToken::Cyan => Rgb::new(80, 220, 220),
        ColorToken::Yellow => Rgb::new(240, 220, 80),
        ColorToken::Purple => Rgb::new(200, 120, 220),
        ColorToken::Green => Rgb::new(100, 220, 120),
        ColorToken::Red => Rgb::new(220, 80, 80),
        ColorToken::Blue => Rgb::new(80, 120, 220),
        ColorToken::Orange => Rgb::new(255, 165, 0),
    }
}

/// `mm:ss`, minutes growing past 99 if they must.
pub fn format_clock(secs: u64) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}
