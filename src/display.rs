/// Terminal rendering: a `RenderSurface` that rasterises world-space
/// primitives onto character cells.
///
/// Each primitive fills the cells whose centres it covers.  The frame is
/// built in memory and written out in one pass by `present`.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use volley_shooter::entities::Rect;
use volley_shooter::render::RenderSurface;

const FILL: char = '█';

#[derive(Clone, Copy, PartialEq)]
struct Cell {
    ch: char,
    color: Color,
}

const BLANK: Cell = Cell { ch: ' ', color: Color::Reset };

pub struct TerminalSurface<W: Write> {
    out: W,
    cols: u16,
    rows: u16,
    world_w: f32,
    world_h: f32,
    cells: Vec<Cell>,
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(out: W, cols: u16, rows: u16, world_w: f32, world_h: f32) -> Self {
        Self {
            out,
            cols,
            rows,
            world_w,
            world_h,
            cells: vec![BLANK; cols as usize * rows as usize],
        }
    }

    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.cols = cols;
        self.rows = rows;
        self.cells = vec![BLANK; cols as usize * rows as usize];
    }

    /// World position at the centre of terminal cell `(col, row)`.
    pub fn to_world(&self, col: u16, row: u16) -> (f32, f32) {
        (
            (col as f32 + 0.5) * self.world_w / self.cols.max(1) as f32,
            (row as f32 + 0.5) * self.world_h / self.rows.max(1) as f32,
        )
    }

    fn to_cell(&self, x: f32, y: f32) -> (i32, i32) {
        (
            (x * self.cols as f32 / self.world_w).floor() as i32,
            (y * self.rows as f32 / self.world_h).floor() as i32,
        )
    }

    fn put(&mut self, col: i32, row: i32, cell: Cell) {
        if col < 0 || row < 0 || col >= self.cols as i32 || row >= self.rows as i32 {
            return;
        }
        self.cells[row as usize * self.cols as usize + col as usize] = cell;
    }

    /// Fill every cell in the world-space bounding box whose centre passes
    /// `inside`.  Shapes smaller than a cell still light the cell they sit in.
    fn fill_where(&mut self, bounds: Rect, color: Color, inside: impl Fn(f32, f32) -> bool) {
        let (c0, r0) = self.to_cell(bounds.x, bounds.y);
        let (c1, r1) = self.to_cell(bounds.x + bounds.w, bounds.y + bounds.h);
        let cell = Cell { ch: FILL, color };
        let mut hit = false;
        for row in r0.max(0)..=r1.min(self.rows as i32 - 1) {
            for col in c0.max(0)..=c1.min(self.cols as i32 - 1) {
                let (wx, wy) = self.to_world(col as u16, row as u16);
                if inside(wx, wy) {
                    self.put(col, row, cell);
                    hit = true;
                }
            }
        }
        if !hit {
            let (col, row) = self.to_cell(bounds.x + bounds.w / 2.0, bounds.y + bounds.h / 2.0);
            self.put(col, row, cell);
        }
    }
}

impl<W: Write> RenderSurface for TerminalSurface<W> {
    fn clear(&mut self) {
        self.cells.fill(BLANK);
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.fill_where(rect, color, |x, y| rect.contains(x, y));
    }

    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Color) {
        let bounds = Rect::new(cx - radius, cy - radius, radius * 2.0, radius * 2.0);
        self.fill_where(bounds, color, |x, y| (x - cx).hypot(y - cy) <= radius);
    }

    fn fill_polygon(&mut self, points: &[(f32, f32)], color: Color) {
        if points.is_empty() {
            return;
        }
        let min_x = points.iter().map(|p| p.0).fold(f32::INFINITY, f32::min);
        let max_x = points.iter().map(|p| p.0).fold(f32::NEG_INFINITY, f32::max);
        let min_y = points.iter().map(|p| p.1).fold(f32::INFINITY, f32::min);
        let max_y = points.iter().map(|p| p.1).fold(f32::NEG_INFINITY, f32::max);
        let bounds = Rect::new(min_x, min_y, max_x - min_x, max_y - min_y);
        self.fill_where(bounds, color, |x, y| point_in_polygon(points, x, y));
    }

    fn text(&mut self, x: f32, y: f32, text: &str, color: Color) {
        let (col, row) = self.to_cell(x, y);
        for (i, ch) in text.chars().enumerate() {
            self.put(col + i as i32, row, Cell { ch, color });
        }
    }

    fn present(&mut self) -> std::io::Result<()> {
        self.out.queue(terminal::Clear(terminal::ClearType::All))?;
        let cols = self.cols as usize;
        for (row, line) in self.cells.chunks(cols.max(1)).enumerate() {
            let mut col = 0;
            while col < line.len() {
                if line[col] == BLANK {
                    col += 1;
                    continue;
                }
                // One Print per run of same-coloured cells.
                let color = line[col].color;
                let start = col;
                let mut run = String::new();
                while col < line.len() && line[col] != BLANK && line[col].color == color {
                    run.push(line[col].ch);
                    col += 1;
                }
                self.out.queue(cursor::MoveTo(start as u16, row as u16))?;
                self.out.queue(style::SetForegroundColor(color))?;
                self.out.queue(Print(run))?;
            }
        }

        // Park cursor in a harmless spot and flush
        self.out.queue(style::ResetColor)?;
        self.out.queue(cursor::MoveTo(0, self.rows.saturating_sub(1)))?;
        self.out.flush()
    }
}

/// Even-odd ray cast.
fn point_in_polygon(points: &[(f32, f32)], x: f32, y: f32) -> bool {
    let mut inside = false;
    let mut j = points.len() - 1;
    for i in 0..points.len() {
        let (xi, yi) = points[i];
        let (xj, yj) = points[j];
        if (yi > y) != (yj > y) && x < (xj - xi) * (y - yi) / (yj - yi) + xi {
            inside = !inside;
        }
        j = i;
    }
    inside
}
