use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::models::{Column, GameRecord, RecordId};

/// Width reserved for the `Label:` prefix so every value starts in the same
/// column.
pub(crate) const LABEL_WIDTH: usize = 14;

/// The "Game Details" form: one text value per column plus the focused field.
#[derive(Clone)]
pub(crate) struct GameForm {
    pub(crate) values: GameRecord,
    pub(crate) active: Column,
}

impl Default for GameForm {
    fn default() -> Self {
        Self {
            values: GameRecord::default(),
            active: Column::Name,
        }
    }
}

impl GameForm {
    /// Fill the form from a table row, keeping the focused field.
    pub(crate) fn load(&mut self, record: &GameRecord) {
        self.values = record.clone();
    }

    /// Empty every field and return focus to the first one.
    pub(crate) fn clear(&mut self) {
        *self = Self::default();
    }

    pub(crate) fn focus_next(&mut self) {
        let next = (self.active.index() + 1) % Column::ALL.len();
        self.active = Column::ALL[next];
    }

    pub(crate) fn focus_previous(&mut self) {
        let len = Column::ALL.len();
        let previous = (self.active.index() + len - 1) % len;
        self.active = Column::ALL[previous];
    }

    /// Append a printable character to the focused field.
    pub(crate) fn push_char(&mut self, ch: char) -> bool {
        if ch.is_control() {
            return false;
        }
        self.values.field_mut(self.active).push(ch);
        true
    }

    pub(crate) fn backspace(&mut self) {
        self.values.field_mut(self.active).pop();
    }

    /// The submitted record, with surrounding whitespace removed.
    pub(crate) fn to_record(&self) -> GameRecord {
        self.values.trimmed()
    }

    /// Render one form line. The active field is highlighted only while the
    /// form has focus.
    pub(crate) fn build_line(&self, column: Column, focused: bool) -> Line<'static> {
        let value = self.values.field(column);
        let is_active = focused && self.active == column;

        let style = if is_active {
            Style::default().fg(Color::Yellow)
        } else if value.is_empty() {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
        };
        let display = if value.is_empty() && !is_active {
            placeholder(column).to_string()
        } else {
            value.to_string()
        };

        let label = format!("{}:", column.label());
        Line::from(vec![
            Span::styled(
                format!("{label:<LABEL_WIDTH$}"),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(display, style),
        ])
    }

    pub(crate) fn value_len(&self, column: Column) -> usize {
        self.values.field(column).chars().count()
    }
}

/// Hint shown in an empty field.
fn placeholder(column: Column) -> &'static str {
    match column {
        Column::ReleaseDate => "DD-MM-YYYY",
        Column::Downloads | Column::MinAge => "<integer>",
        Column::Rating => "<0-10>",
        _ => "<required>",
    }
}

/// Pending delete awaiting a yes/no answer.
#[derive(Clone)]
pub(crate) struct ConfirmGameDelete {
    pub(crate) id: RecordId,
    pub(crate) name: String,
}

/// Modal message box.
#[derive(Clone)]
pub(crate) struct Notice {
    pub(crate) title: String,
    pub(crate) message: String,
    pub(crate) kind: NoticeKind,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum NoticeKind {
    Info,
    Warning,
    Error,
}

impl NoticeKind {
    pub(crate) fn style(self) -> Style {
        match self {
            NoticeKind::Info => Style::default().fg(Color::Green),
            NoticeKind::Warning => Style::default().fg(Color::Yellow),
            NoticeKind::Error => Style::default().fg(Color::Red),
        }
    }
}

impl Notice {
    pub(crate) fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            kind: NoticeKind::Info,
        }
    }

    pub(crate) fn warning(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            kind: NoticeKind::Warning,
        }
    }

    pub(crate) fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            kind: NoticeKind::Error,
        }
    }
}
