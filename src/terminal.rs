//! Entering and leaving the game screen.
//!
//! Restoring runs every step even when an earlier one fails, so a broken pipe
//! or a panic never leaves the shell in raw mode.

use crossterm::cursor::Show;
use crossterm::event::{
    DisableFocusChange, EnableFocusChange, KeyboardEnhancementFlags,
    PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use std::io::{self, Write};
use std::panic;

/// Raw mode, alternate screen, focus events and (where supported) key
/// release reporting. Returns whether releases are reported.
pub fn enter<W: Write>(out: &mut W) -> io::Result<bool> {
    enable_raw_mode()?;
    let release_events = supports_keyboard_enhancement().unwrap_or(false);
    out.execute(EnterAlternateScreen)?;
    out.execute(EnableFocusChange)?;
    if release_events {
        out.execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))?;
    }
    Ok(release_events)
}

/// Undo [`enter`]. Every step runs; the first error is returned.
pub fn restore<W: Write>(
    out: &mut W,
    release_events: bool,
    disable_raw: impl FnOnce() -> io::Result<()>,
) -> io::Result<()> {
    let popped = if release_events {
        out.execute(PopKeyboardEnhancementFlags).map(drop)
    } else {
        Ok(())
    };
    let raw = disable_raw();
    let focus = out.execute(DisableFocusChange).map(drop);
    let screen = out.execute(LeaveAlternateScreen).map(drop);
    let cursor = out.execute(Show).map(drop);

    popped.and(raw).and(focus).and(screen).and(cursor)
}

pub fn restore_stdout(release_events: bool) -> io::Result<()> {
    restore(&mut io::stdout(), release_events, disable_raw_mode)
}

/// Put the terminal back before the panic message prints.
pub fn install_panic_hook(release_events: bool) {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let _ = restore_stdout(release_events);
        previous(info);
    }));
}
