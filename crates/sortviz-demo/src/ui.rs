#![forbid(unsafe_code)]

//! Bar-chart layout and drawing.
//!
//! Layout is a pure function from a snapshot and a viewport to per-column
//! bar heights, so it is testable without a terminal; drawing walks that
//! layout and emits crossterm commands.

use std::io::{self, Write};

use crossterm::style::{Color, Print, SetForegroundColor};
use crossterm::{cursor, queue, terminal};
use sortviz_core::{RunState, Snapshot, SortKind};

/// Glyph for a filled bar cell.
const BAR: char = '█';

/// Map a snapshot onto `width` columns of bars up to `height` rows tall.
///
/// Each column shows one element when the array fits the viewport;
/// otherwise columns sample the array evenly (index `col * n / width`),
/// the same effect the original had when bars collapsed to shared pixel
/// columns. Any nonzero value gets at least one cell so small values stay
/// visible.
pub fn bar_heights(values: &[i32], max_value: i32, width: u16, height: u16) -> Vec<u16> {
    let n = values.len();
    let width = width as usize;
    let mut heights = vec![0u16; width];
    if n == 0 || height == 0 || max_value <= 0 {
        return heights;
    }
    for (col, slot) in heights.iter_mut().enumerate() {
        let value = if n <= width {
            if col < n { values[col] } else { continue }
        } else {
            values[col * n / width]
        };
        let clamped = value.clamp(0, max_value) as i64;
        let mut h = (clamped * height as i64 / max_value as i64) as u16;
        if h == 0 && value > 0 {
            h = 1;
        }
        *slot = h.min(height);
    }
    heights
}

/// Status line summarizing the run state and key bindings.
pub fn status_line(state: RunState, kind: Option<SortKind>, width: u16) -> String {
    let state_text = match (state, kind) {
        (RunState::Running, Some(kind)) => format!("running {kind}"),
        (RunState::Running, None) => "running".to_string(),
        (RunState::Idle, _) => "idle".to_string(),
    };
    let mut line =
        format!(" [1] Bubble  [2] Merge  [3] Quick  [r] Reset  [q] Quit | {state_text}");
    line.truncate(width as usize);
    line
}

/// Draw one full frame: bars on top, status line on the bottom row.
pub fn draw_frame(
    out: &mut impl Write,
    snapshot: &Snapshot,
    max_value: i32,
    state: RunState,
    kind: Option<SortKind>,
    size: (u16, u16),
) -> io::Result<()> {
    let (width, rows) = size;
    if rows == 0 {
        return Ok(());
    }
    let chart_height = rows.saturating_sub(1);
    let heights = bar_heights(snapshot, max_value, width, chart_height);

    queue!(out, terminal::Clear(terminal::ClearType::All))?;
    queue!(out, SetForegroundColor(Color::Blue))?;
    for row in 0..chart_height {
        queue!(out, cursor::MoveTo(0, row))?;
        // Row 0 is the top of the chart; a bar of height h fills the
        // bottom h rows.
        let threshold = chart_height - row;
        let line: String = heights
            .iter()
            .map(|&h| if h >= threshold { BAR } else { ' ' })
            .collect();
        queue!(out, Print(line))?;
    }
    queue!(out, SetForegroundColor(Color::White))?;
    queue!(out, cursor::MoveTo(0, rows - 1))?;
    queue!(out, Print(status_line(state, kind, width)))?;
    out.flush()
}
