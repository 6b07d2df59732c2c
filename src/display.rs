//! Frame placement on the terminal.
//!
//! Each frame overwrites the previous one in place when the terminal
//! supports cursor repositioning, avoiding full-screen flicker; otherwise
//! the screen is cleared before every frame. The strategy is detected once
//! at startup and fixed for the run.

use std::io::{self, Stdout, Write};

use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};

/// Writes frames to a terminal, repositioning or clearing as needed.
pub struct Display<W: Write> {
    out: W,
    reposition: bool,
    first_frame: bool,
}

impl Display<Stdout> {
    /// Detect the hosting terminal's capability and drive stdout.
    pub fn stdout() -> Self {
        let mut out = io::stdout();
        let reposition = execute!(out, MoveTo(0, 0)).is_ok();
        Self::with_capability(out, reposition)
    }
}

impl<W: Write> Display<W> {
    /// Build a display with a known reposition capability.
    pub fn with_capability(out: W, reposition: bool) -> Self {
        Self {
            out,
            reposition,
            first_frame: true,
        }
    }

    /// Write one frame.
    ///
    /// The very first frame is always preceded by a full clear to drop any
    /// pre-existing terminal content. Write failures propagate; there is no
    /// recovery path for a broken terminal.
    pub fn present(&mut self, frame: &str) -> io::Result<()> {
        if self.first_frame || !self.reposition {
            execute!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
            self.first_frame = false;
        } else {
            execute!(self.out, MoveTo(0, 0))?;
        }
        self.out.write_all(frame.as_bytes())?;
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLEAR_ALL: &str = "\x1b[2J";
    const CURSOR_HOME: &str = "\x1b[1;1H";

    fn present_twice(reposition: bool) -> String {
        let mut buf = Vec::new();
        {
            let mut display = Display::with_capability(&mut buf, reposition);
            display.present("frame one\n").unwrap();
            display.present("frame two\n").unwrap();
        }
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_first_frame_always_cleared() {
        for reposition in [true, false] {
            let out = present_twice(reposition);
            let first = out.split("frame one").next().unwrap();
            assert!(first.contains(CLEAR_ALL));
            assert!(first.contains(CURSOR_HOME));
        }
    }

    #[test]
    fn test_reposition_skips_clear_after_first_frame() {
        let out = present_twice(true);
        let after_first = out.split("frame one").nth(1).unwrap();
        assert!(!after_first.contains(CLEAR_ALL));
        assert!(after_first.contains(CURSOR_HOME));
    }

    #[test]
    fn test_fallback_clears_before_every_frame() {
        let out = present_twice(false);
        assert_eq!(out.matches(CLEAR_ALL).count(), 2);
    }

    #[test]
    fn test_frame_bytes_written_verbatim() {
        let mut buf = Vec::new();
        {
            let mut display = Display::with_capability(&mut buf, true);
            display.present("a (  10ms) host\n").unwrap();
        }
        let out = String::from_utf8(buf).unwrap();
        assert!(out.ends_with("a (  10ms) host\n"));
    }
}
