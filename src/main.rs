//! Terminal Game of Life runner (default binary).
//!
//! Event-driven: there is no automatic timer. A generation advances only
//! when the user asks for one, and a left click toggles the cell under the
//! pointer. The field is sized once from the initial terminal size; later
//! resizes re-centre the view but keep the field shape.

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};

use tui_life::core::Simulation;
use tui_life::input::{handle_key_event, mouse_toggle_at, should_quit};
use tui_life::term::{FrameBuffer, LifeView, TerminalRenderer, Viewport};
use tui_life::types::{SimAction, DEFAULT_SOUP_SEED};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let view = LifeView::default();

    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    // One border glyph on each side of the field, one cell per
    // cell_w x cell_h glyph block.
    let rows = (h.saturating_sub(2) / view.cell_h()) as usize;
    let cols = (w.saturating_sub(2) / view.cell_w()) as usize;

    let mut sim = Simulation::new();
    sim.initialize(rows, cols)
        .context("terminal too small for a single cell")?;

    let mut draw_grid = true;
    let mut soup_seed = DEFAULT_SOUP_SEED;
    let mut fb = FrameBuffer::new(w, h);

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        view.render_into(sim.grid()?, sim.generation(), draw_grid, viewport, &mut fb);
        term.draw_swap(&mut fb)?;

        match event::read()? {
            Event::Key(key) => {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if should_quit(key) {
                    return Ok(());
                }
                if let Some(action) = handle_key_event(key) {
                    apply_action(&mut sim, action, &mut draw_grid, &mut soup_seed)?;
                }
            }
            Event::Mouse(mouse) => {
                if let Some((x, y)) = mouse_toggle_at(&mouse) {
                    let hit = view.hit_test(sim.grid()?, viewport, x, y);
                    if let Some((row, col)) = hit {
                        sim.toggle_cell(row, col)?;
                    }
                }
            }
            Event::Resize(_, _) => {
                term.invalidate();
            }
            _ => {}
        }
    }
}

fn apply_action(
    sim: &mut Simulation,
    action: SimAction,
    draw_grid: &mut bool,
    soup_seed: &mut u32,
) -> Result<()> {
    match action {
        SimAction::Step => sim.step()?,
        SimAction::ToggleDrawMode => *draw_grid = !*draw_grid,
        SimAction::Clear => sim.clear()?,
        SimAction::Randomize => {
            sim.randomize(*soup_seed)?;
            // Each press seeds a fresh soup.
            *soup_seed = soup_seed.wrapping_add(1);
        }
    }
    Ok(())
}
