//! LifeView: maps the simulation field into a terminal framebuffer.
//!
//! This module is pure (no I/O). It owns the cell-to-glyph layout in both
//! directions: `render_into` draws the field, `hit_test` inverts the same
//! layout to turn a mouse position back into a (row, col) cell.

use crate::core::Grid;
use crate::fb::{FrameBuffer, Glyph, GlyphStyle, Rgb};
use crate::types::{CELL_GLYPH_H, CELL_GLYPH_W};

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

/// Terminal renderer for the life field.
pub struct LifeView {
    /// Life cell width in terminal columns.
    cell_w: u16,
    /// Life cell height in terminal rows.
    cell_h: u16,
}

impl Default for LifeView {
    fn default() -> Self {
        Self {
            cell_w: CELL_GLYPH_W,
            cell_h: CELL_GLYPH_H,
        }
    }
}

impl LifeView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        // A zero-sized cell cannot be laid out.
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    pub fn cell_w(&self) -> u16 {
        self.cell_w
    }

    pub fn cell_h(&self) -> u16 {
        self.cell_h
    }

    /// Top-left corner of the bordered frame, centred in the viewport.
    fn frame_origin(&self, grid: &Grid, viewport: Viewport) -> (u16, u16) {
        let (frame_w, frame_h) = self.frame_size(grid);
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;
        (start_x, start_y)
    }

    fn frame_size(&self, grid: &Grid) -> (u16, u16) {
        let field_w = (grid.cols() as u16).saturating_mul(self.cell_w);
        let field_h = (grid.rows() as u16).saturating_mul(self.cell_h);
        (field_w + 2, field_h + 2)
    }

    /// Render the field into an existing framebuffer.
    ///
    /// `draw_grid` selects the classic visualization (live and dead cells
    /// both drawn, with a per-cell gutter) versus plain live-cells-only
    /// rendering. It never touches simulation state.
    pub fn render_into(
        &self,
        grid: &Grid,
        generation: u64,
        draw_grid: bool,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Glyph::default());

        let (start_x, start_y) = self.frame_origin(grid, viewport);
        let (frame_w, frame_h) = self.frame_size(grid);

        let field_bg = Rgb::new(15, 15, 20);
        let border = GlyphStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };
        let bg_style = GlyphStyle {
            fg: field_bg,
            bg: field_bg,
            bold: false,
            dim: false,
        };

        // Field background, then border on top of its edge.
        fb.fill_rect(start_x + 1, start_y + 1, frame_w - 2, frame_h - 2, ' ', bg_style);
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        for row in 0..grid.rows() {
            for col in 0..grid.cols() {
                let alive = grid.get(row, col).unwrap_or(false);
                self.draw_cell(fb, start_x, start_y, row, col, alive, draw_grid, field_bg);
            }
        }

        self.draw_side_panel(fb, grid, generation, draw_grid, viewport, start_x, start_y, frame_w);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        grid: &Grid,
        generation: u64,
        draw_grid: bool,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(grid, generation, draw_grid, viewport, &mut fb);
        fb
    }

    /// Map a terminal position to the cell under it.
    ///
    /// Inverse of the layout used by `render_into`. Returns `None` for
    /// positions on the border, in the side panel, or outside the frame,
    /// so that stray clicks never reach the engine as bogus coordinates.
    pub fn hit_test(
        &self,
        grid: &Grid,
        viewport: Viewport,
        x: u16,
        y: u16,
    ) -> Option<(usize, usize)> {
        let (start_x, start_y) = self.frame_origin(grid, viewport);

        let fx = x.checked_sub(start_x + 1)?;
        let fy = y.checked_sub(start_y + 1)?;

        let col = (fx / self.cell_w) as usize;
        let row = (fy / self.cell_h) as usize;
        if row >= grid.rows() || col >= grid.cols() {
            return None;
        }
        Some((row, col))
    }

    fn draw_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        row: usize,
        col: usize,
        alive: bool,
        draw_grid: bool,
        field_bg: Rgb,
    ) {
        let px = start_x + 1 + (col as u16) * self.cell_w;
        let py = start_y + 1 + (row as u16) * self.cell_h;

        if draw_grid {
            // Classic visualization: every cell gets a block with a one-glyph
            // gutter so the lattice stays visible.
            let fg = if alive {
                Rgb::new(120, 220, 120)
            } else {
                Rgb::new(70, 35, 35)
            };
            let style = GlyphStyle {
                fg,
                bg: field_bg,
                bold: alive,
                dim: !alive,
            };
            let block_w = if self.cell_w > 1 { self.cell_w - 1 } else { 1 };
            fb.fill_rect(px, py, block_w, self.cell_h, '█', style);
        } else if alive {
            let style = GlyphStyle {
                fg: Rgb::new(120, 220, 120),
                bg: field_bg,
                bold: true,
                dim: false,
            };
            fb.fill_rect(px, py, self.cell_w, self.cell_h, '█', style);
        }
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: GlyphStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        grid: &Grid,
        generation: u64,
        draw_grid: bool,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 12 {
            return;
        }

        let label = GlyphStyle {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        let value = GlyphStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };
        let dim = GlyphStyle { dim: true, ..value };

        let mut y = start_y;
        fb.put_str(panel_x, y, "GEN", label);
        y = y.saturating_add(1);
        fb.put_u64(panel_x, y, generation, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "FIELD", label);
        y = y.saturating_add(1);
        fb.put_u64(panel_x, y, grid.rows() as u64, value);
        let digits = |mut n: u64| {
            let mut d = 1u16;
            while n >= 10 {
                n /= 10;
                d += 1;
            }
            d
        };
        let x_pos = panel_x + digits(grid.rows() as u64);
        fb.put_char(x_pos, y, 'x', dim);
        fb.put_u64(x_pos + 1, y, grid.cols() as u64, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "MODE", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, if draw_grid { "grid" } else { "plain" }, value);
        y = y.saturating_add(2);

        for line in [
            "click toggle",
            "space step",
            "g     mode",
            "r     soup",
            "c     clear",
            "q     quit",
        ] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, dim);
            y = y.saturating_add(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_grid() -> Grid {
        Grid::new(4, 6, false).unwrap()
    }

    #[test]
    fn test_hit_test_inverts_layout() {
        let view = LifeView::new(2, 1);
        let grid = small_grid();
        let viewport = Viewport::new(80, 24);

        // Every cell's top-left glyph must hit-test back to that cell.
        let (start_x, start_y) = view.frame_origin(&grid, viewport);
        for row in 0..grid.rows() {
            for col in 0..grid.cols() {
                let x = start_x + 1 + (col as u16) * 2;
                let y = start_y + 1 + (row as u16);
                assert_eq!(view.hit_test(&grid, viewport, x, y), Some((row, col)));
                // Second glyph of the same cell maps to the same cell.
                assert_eq!(view.hit_test(&grid, viewport, x + 1, y), Some((row, col)));
            }
        }
    }

    #[test]
    fn test_hit_test_rejects_border_and_outside() {
        let view = LifeView::new(2, 1);
        let grid = small_grid();
        let viewport = Viewport::new(80, 24);
        let (start_x, start_y) = view.frame_origin(&grid, viewport);

        // Border corner.
        assert_eq!(view.hit_test(&grid, viewport, start_x, start_y), None);
        // One past the right edge of the field.
        let past_x = start_x + 1 + (grid.cols() as u16) * 2;
        assert_eq!(view.hit_test(&grid, viewport, past_x, start_y + 1), None);
        // Way outside.
        assert_eq!(view.hit_test(&grid, viewport, 0, 0), None);
    }

    #[test]
    fn test_render_marks_live_cells() {
        let view = LifeView::new(2, 1);
        let mut grid = small_grid();
        grid.set(1, 2, true).unwrap();
        let viewport = Viewport::new(80, 24);

        let fb = view.render(&grid, 0, false, viewport);
        let (start_x, start_y) = view.frame_origin(&grid, viewport);
        let glyph = fb.get(start_x + 1 + 4, start_y + 2).unwrap();
        assert_eq!(glyph.ch, '█');
    }

    #[test]
    fn test_draw_mode_changes_dead_cell_rendering_only() {
        let view = LifeView::new(2, 1);
        let grid = small_grid();
        let viewport = Viewport::new(80, 24);
        let (start_x, start_y) = view.frame_origin(&grid, viewport);

        let plain = view.render(&grid, 0, false, viewport);
        let classic = view.render(&grid, 0, true, viewport);

        // Dead cell glyph: empty in plain mode, block in classic mode.
        let dead = (start_x + 1, start_y + 1);
        assert_eq!(plain.get(dead.0, dead.1).unwrap().ch, ' ');
        assert_eq!(classic.get(dead.0, dead.1).unwrap().ch, '█');
    }

    #[test]
    fn test_render_fits_tiny_viewport_without_panic() {
        let view = LifeView::default();
        let grid = small_grid();
        let fb = view.render(&grid, 3, true, Viewport::new(5, 3));
        assert_eq!(fb.width(), 5);
        assert_eq!(fb.height(), 3);
    }
}
