//! direct-edit: a minimal text editor core, run headlessly.
//!
//! The real collaborators (window creation, the glyph-atlas texture,
//! OS input capture) live outside the core behind the `RenderSink` and
//! input-event boundaries. This shell stands in for them: it seeds the
//! buffer from an optional file argument (falling back to the default
//! title), replays a small editing session through the event path, paces
//! draw attempts the way a vsynced loop would, and prints the final frame
//! as an 80x24 character grid.

use std::env;
use std::path::PathBuf;
use std::time::Instant;

use direct_edit_core::{content, CellMetrics, Editor, EventOutcome, FramePacer, GridCapture};
use direct_edit_input::{ClickPoint, InputEvent, KeyCommand, ScrollDelta};

/// Grid dimensions matching the original 80x24 window.
const GRID_COLS: usize = 80;
const GRID_ROWS: usize = 24;

/// Assumed display refresh rate for the headless pacer.
const REFRESH_RATE_HZ: u32 = 60;

/// A short scripted session exercising every event kind, used when no file
/// was given.
fn demo_session() -> Vec<InputEvent> {
    vec![
        InputEvent::Key(KeyCommand::Enter),
        InputEvent::text("type here, click to move the cursor,"),
        InputEvent::Key(KeyCommand::Enter),
        InputEvent::text("scroll to pan the viewport"),
        // Backspace over the trailing character, then retype it with a period.
        InputEvent::Key(KeyCommand::Backspace),
        InputEvent::text("t."),
        InputEvent::Key(KeyCommand::Home),
        InputEvent::Key(KeyCommand::End),
        // Click back onto the title line.
        InputEvent::Click(ClickPoint::new(0, 0)),
        // One wheel notch each way; net scroll zero.
        InputEvent::Scroll(ScrollDelta::new(1)),
        InputEvent::Scroll(ScrollDelta::new(-1)),
        InputEvent::Quit,
    ]
}

fn main() {
    env_logger::init();

    let metrics = CellMetrics::default();
    let mut editor = Editor::new(metrics);

    let path = env::args_os().nth(1).map(PathBuf::from);
    content::seed(editor.buffer_mut(), path.as_deref());

    let events = if path.is_some() {
        vec![InputEvent::Quit]
    } else {
        demo_session()
    };

    let visible = metrics.grid_rect(GRID_COLS as i32, GRID_ROWS as i32);
    let mut sink = GridCapture::new();
    let mut pacer = FramePacer::new(REFRESH_RATE_HZ);

    // The event loop: handle input first, then attempt a draw only when the
    // pacing interval has elapsed, so events are never blocked behind a
    // present.
    for event in events {
        let outcome = editor.handle_event(event);

        let now = Instant::now();
        if pacer.should_draw(now) {
            editor.render(&mut sink, visible);
            pacer.mark_present(Instant::now());
        }

        if outcome == EventOutcome::Quit {
            break;
        }
    }

    // Final frame, unconditionally, so the printed grid reflects the last
    // state even if pacing skipped the draw above.
    editor.render(&mut sink, visible);

    for row in sink.to_text_grid(&metrics, GRID_COLS, GRID_ROWS) {
        println!("{}", row);
    }

    log::info!(
        "buffer: {} bytes, cursor at {}",
        editor.buffer().len(),
        editor.buffer().cursor()
    );
}
