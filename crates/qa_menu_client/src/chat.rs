//! Chat log and options panel: everything the front-end renders.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Question,
    Answer,
    Error,
}

/// One chat bubble.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub kind: MessageKind,
    pub content: String,
}

impl ChatMessage {
    pub fn new(kind: MessageKind, content: impl Into<String>) -> Self {
        Self {
            kind,
            content: content.into(),
        }
    }
}

impl fmt::Display for ChatMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.content)
    }
}

/// Append-only list of chat messages.
#[derive(Debug, Clone, Default)]
pub struct ChatLog {
    messages: Vec<ChatMessage>,
}

impl ChatLog {
    pub fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChatMessage> {
        self.messages.iter()
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    /// Messages appended after the first `cursor` ones.
    pub fn since(&self, cursor: usize) -> &[ChatMessage] {
        self.messages.get(cursor..).unwrap_or(&[])
    }

    /// Message contents in order; handy for assertions and transcripts.
    pub fn contents(&self) -> Vec<&str> {
        self.messages.iter().map(|m| m.content.as_str()).collect()
    }
}

/// What selecting a choice does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SelectSubject(String),
    AskQuestion(String),
    BackToMainMenu,
}

/// One button of the options panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub label: String,
    pub action: Action,
}

/// The options currently offered to the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionsPanel {
    pub title: String,
    pub choices: Vec<Choice>,
}

impl OptionsPanel {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.choices.is_empty()
    }

    pub fn labels(&self) -> Vec<&str> {
        self.choices.iter().map(|c| c.label.as_str()).collect()
    }

    /// Choice for a 1-based menu number.
    pub fn choice(&self, number: usize) -> Option<&Choice> {
        number.checked_sub(1).and_then(|i| self.choices.get(i))
    }
}

impl fmt::Display for OptionsPanel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.title.is_empty() {
            writeln!(f, "{}", self.title)?;
        }
        for (i, choice) in self.choices.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, choice.label)?;
        }
        Ok(())
    }
}
