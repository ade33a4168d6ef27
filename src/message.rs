//! Text commands and how they become messages.
//!
//! An event script shows text through a sequence of text commands, each a
//! header plus the lines typed in the editor. Two transforms run before the
//! text reaches the layout pipeline:
//!
//! * page flow: with page breaks between commands turned off, consecutive
//!   commands with identical headers merge into one message
//! * same-line joining: with word wrap on, editor line breaks are ignored
//!   and a message's lines are joined with spaces

use crate::placement::VerticalBand;
use crate::text::normalize_line_breaks;
use serde::{Deserialize, Serialize};

/// Window background of a message.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Background {
    #[default]
    Window,
    Dim,
    Transparent,
}

/// Everything about a text command except its text.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageHeader {
    /// Face graphic sheet; empty for no face.
    pub face_name: String,
    pub face_index: u32,
    pub background: Background,
    pub band: VerticalBand,
    pub speaker: String,
}

impl MessageHeader {
    #[must_use]
    pub fn has_face(&self) -> bool {
        !self.face_name.is_empty()
    }
}

/// One "show text" command as written in the editor.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextCommand {
    pub header: MessageHeader,
    pub lines: Vec<String>,
}

impl TextCommand {
    #[must_use]
    pub fn new(header: MessageHeader, lines: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            header,
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

/// Text ready for one message box.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Message {
    pub header: MessageHeader,
    pub lines: Vec<String>,
}

impl Message {
    /// The message's lines joined with `\n`.
    #[must_use]
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

/// Join editor lines into a single line separated by spaces.
///
/// Returns no line at all when every input line is empty.
#[must_use]
pub fn join_editor_lines<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    let mut joined = String::new();
    for line in lines {
        if !joined.is_empty() {
            joined.push(' ');
        }
        joined.push_str(line.as_ref());
    }
    if joined.is_empty() {
        Vec::new()
    } else {
        vec![joined]
    }
}

/// Turn a run of text commands into messages.
///
/// With `page_break` off, a command whose header equals the previous one
/// continues that message. With `word_wrap` on, each message's lines are
/// joined into one line so the wrapper decides every break.
#[must_use]
pub fn flow_commands(commands: &[TextCommand], page_break: bool, word_wrap: bool) -> Vec<Message> {
    let mut messages: Vec<Message> = Vec::new();
    for command in commands {
        match messages.last_mut() {
            Some(last) if !page_break && last.header == command.header => {
                last.lines.extend(command.lines.iter().cloned());
            }
            _ => messages.push(Message {
                header: command.header.clone(),
                lines: command.lines.clone(),
            }),
        }
    }
    if word_wrap {
        for message in &mut messages {
            message.lines = join_editor_lines(&message.lines);
        }
    }
    messages
}

/// Prepare help window text for wrapping.
///
/// With help wrapping on, newlines typed in the editor become spaces so
/// only `<br>` tags and the wrapper break lines.
#[must_use]
pub fn prepare_help_text(text: &str, wrap_enabled: bool) -> String {
    if wrap_enabled {
        normalize_line_breaks(&text.replace('\n', " ")).into_owned()
    } else {
        normalize_line_breaks(text).into_owned()
    }
}
