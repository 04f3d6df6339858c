use std::io::{self, Write};

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue,
    style::{Attribute, Print, SetAttribute},
    terminal::{self, Clear, ClearType},
};

#[derive(Debug)]
pub enum MenuError {
    Interrupted,
    EndOfInput,
    Io(io::Error),
}

impl From<io::Error> for MenuError {
    fn from(err: io::Error) -> Self {
        MenuError::Io(err)
    }
}

/// One selectable row. `key` is what the picker reports back; `label` is
/// what it draws.
pub struct PickerItem {
    pub key: String,
    pub label: String,
}

impl PickerItem {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }
}

/// How a picker session ended.
pub enum PickerOutcome {
    /// Enter on the highlighted row; carries that row's key.
    Chosen(String),
    /// ESC, or an empty item list.
    Dismissed,
    /// Enter with text in the command line. Type-ahead pickers only.
    Typed(String),
}

/// Puts the terminal back even when the event loop bails out early.
struct RawModeGuard;

impl RawModeGuard {
    fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(io::stdout(), Hide)?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let mut out = io::stdout();
        let _ = execute!(out, Clear(ClearType::All), MoveTo(0, 0), Show);
        let _ = terminal::disable_raw_mode();
    }
}

/// Full-screen single-pick list used by every interactive menu.
///
/// The plain list variant only navigates; the type-ahead variant also
/// keeps a command-line buffer so any shell command can be typed straight
/// from the menu, with the highlight tracking the typed prefix.
pub struct Picker {
    header: String,
    hint: &'static str,
    items: Vec<PickerItem>,
    cursor: usize,
    type_ahead: bool,
    buffer: String,
    notice: Option<String>,
}

impl Picker {
    pub fn list(header: impl Into<String>, hint: &'static str, items: Vec<PickerItem>) -> Self {
        Self {
            header: header.into(),
            hint,
            items,
            cursor: 0,
            type_ahead: false,
            buffer: String::new(),
            notice: None,
        }
    }

    pub fn with_type_ahead(
        header: impl Into<String>,
        hint: &'static str,
        items: Vec<PickerItem>,
    ) -> Self {
        let mut picker = Self::list(header, hint, items);
        picker.type_ahead = true;
        picker
    }

    /// One-shot message drawn under the command line on the next render.
    pub fn set_notice(&mut self, notice: impl Into<String>) {
        self.notice = Some(notice.into());
    }

    pub fn run(mut self) -> Result<PickerOutcome, MenuError> {
        if self.items.is_empty() {
            return Ok(PickerOutcome::Dismissed);
        }
        let _guard = RawModeGuard::enter()?;
        loop {
            self.draw()?;
            let Event::Key(key) = event::read()? else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if let Some(outcome) = self.on_key(key)? {
                return Ok(outcome);
            }
        }
    }

    fn on_key(&mut self, key: KeyEvent) -> Result<Option<PickerOutcome>, MenuError> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c' | 'C') => Err(MenuError::Interrupted),
                KeyCode::Char('d' | 'D') => Err(MenuError::EndOfInput),
                KeyCode::Char('l' | 'L') => {
                    self.buffer.clear();
                    self.cursor = 0;
                    Ok(None)
                }
                _ => Ok(None),
            };
        }

        let outcome = match key.code {
            KeyCode::Up => {
                self.step(-1);
                None
            }
            KeyCode::Down => {
                self.step(1);
                None
            }
            KeyCode::Home => {
                self.cursor = 0;
                None
            }
            KeyCode::End => {
                self.cursor = self.items.len() - 1;
                None
            }
            KeyCode::Esc => Some(PickerOutcome::Dismissed),
            KeyCode::Enter => Some(self.accept()),
            KeyCode::Backspace if self.type_ahead => {
                self.buffer.pop();
                self.track_buffer();
                None
            }
            KeyCode::Delete if self.type_ahead => {
                self.buffer.clear();
                None
            }
            KeyCode::Char(ch) if self.type_ahead && !key.modifiers.contains(KeyModifiers::ALT) => {
                self.buffer.push(ch);
                self.track_buffer();
                None
            }
            _ => None,
        };
        Ok(outcome)
    }

    fn accept(&self) -> PickerOutcome {
        let typed = self.buffer.trim();
        if typed.is_empty() {
            PickerOutcome::Chosen(self.items[self.cursor].key.clone())
        } else {
            PickerOutcome::Typed(typed.to_string())
        }
    }

    fn step(&mut self, delta: isize) {
        let len = self.items.len() as isize;
        self.cursor = (self.cursor as isize + delta).rem_euclid(len) as usize;
    }

    /// Moves the highlight to the first row whose key starts with the
    /// typed buffer, if the buffer still looks like a single command word.
    fn track_buffer(&mut self) {
        let typed = self.buffer.trim();
        if typed.is_empty() || typed.contains(char::is_whitespace) {
            return;
        }
        let needle = typed.to_ascii_lowercase();
        if let Some(row) = self
            .items
            .iter()
            .position(|item| item.key.starts_with(&needle))
        {
            self.cursor = row;
        }
    }

    fn draw(&mut self) -> Result<(), io::Error> {
        let mut out = io::stdout();
        queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
        queue!(out, Print(&self.header), Print("\r\n"))?;
        queue!(out, Print(self.hint), Print("\r\n\r\n"))?;

        for (row, item) in self.items.iter().enumerate() {
            if row == self.cursor {
                queue!(out, SetAttribute(Attribute::Reverse))?;
            }
            queue!(
                out,
                Print(format!("  {}", item.label)),
                SetAttribute(Attribute::Reset),
                Print("\r\n")
            )?;
        }

        if self.type_ahead {
            queue!(out, Print("\r\n"), Print(format!("> {}", self.buffer)))?;
            queue!(out, Print("\r\n"))?;
            if let Some(text) = self.notice.take() {
                queue!(out, Print(text), Print("\r\n"))?;
            }
        }
        out.flush()
    }
}
