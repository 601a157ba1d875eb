//! Menu controller: main menu → questions of a subject → answer → main menu.
//!
//! Every stage awaits one request before touching the panel. Failures never
//! escape: they become chat messages, and the question and answer stages fall
//! back to the main menu.

use tracing::{info, warn};

use crate::chat::{Action, ChatLog, ChatMessage, Choice, MessageKind, OptionsPanel};
use crate::client::Client;

pub const MAIN_MENU_TITLE: &str = "Choose an Option:";
pub const BACK_LABEL: &str = "⬅️ Go Back to Main Menu";
pub const ANSWERED_NOTICE: &str = "✅ Got it! Ready for your next question.";

pub struct MenuController {
    client: Client,
    current_subject: Option<String>,
    chat: ChatLog,
    panel: OptionsPanel,
    menu_failed: bool,
}

impl MenuController {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            current_subject: None,
            chat: ChatLog::default(),
            panel: OptionsPanel::empty(),
            menu_failed: false,
        }
    }

    pub fn current_subject(&self) -> Option<&str> {
        self.current_subject.as_deref()
    }

    pub fn chat(&self) -> &ChatLog {
        &self.chat
    }

    pub fn panel(&self) -> &OptionsPanel {
        &self.panel
    }

    /// Whether the most recent main menu load failed. An empty but valid
    /// subject list is not a failure.
    pub fn menu_failed(&self) -> bool {
        self.menu_failed
    }

    /// Append an informational message.
    pub fn say(&mut self, text: impl Into<String>) {
        self.chat.push(ChatMessage::new(MessageKind::Info, text));
    }

    /// Clear the selection and show the subjects. On failure the panel is left empty.
    pub async fn load_main_menu(&mut self) {
        self.current_subject = None;
        match self.client.menu().await {
            Ok(subjects) => {
                self.menu_failed = false;
                info!(count = subjects.len(), "main menu loaded");
                self.panel = OptionsPanel {
                    title: MAIN_MENU_TITLE.into(),
                    choices: subjects
                        .into_iter()
                        .map(|s| Choice {
                            label: s.clone(),
                            action: Action::SelectSubject(s),
                        })
                        .collect(),
                };
            }
            Err(e) => {
                warn!(error = %e, "failed to load main menu");
                self.error(format!("Error loading menu: {}", e));
                self.panel = OptionsPanel::empty();
                self.menu_failed = true;
            }
        }
    }

    /// Show the questions of `subject` plus a back choice.
    pub async fn load_question_menu(&mut self, subject: &str) {
        self.current_subject = Some(subject.to_string());
        match self.client.questions(subject).await {
            Ok(questions) => {
                info!(subject, count = questions.len(), "question menu loaded");
                let mut choices: Vec<Choice> = questions
                    .into_iter()
                    .map(|q| Choice {
                        label: q.clone(),
                        action: Action::AskQuestion(q),
                    })
                    .collect();
                choices.push(Choice {
                    label: BACK_LABEL.into(),
                    action: Action::BackToMainMenu,
                });
                self.panel = OptionsPanel {
                    title: format!("Questions for: {}", subject),
                    choices,
                };
            }
            Err(e) => {
                warn!(subject, error = %e, "failed to load questions");
                self.error(format!("Error loading questions: {}", e));
                self.load_main_menu().await;
            }
        }
    }

    /// Ask `question`, show the answer (or the error), then return to the main menu.
    pub async fn get_answer(&mut self, question: &str) {
        self.chat.push(ChatMessage::new(
            MessageKind::Question,
            format!("Question: {}", question),
        ));
        match self.client.answer(question).await {
            Ok(answer) => {
                info!(question, "answer received");
                self.chat.push(ChatMessage::new(
                    MessageKind::Answer,
                    format!("Answer: {}", answer),
                ));
                self.say(ANSWERED_NOTICE);
            }
            Err(e) => {
                warn!(question, error = %e, "failed to fetch answer");
                self.error(format!("Error fetching answer: {}", e));
            }
        }
        self.load_main_menu().await;
    }

    /// Run the stage bound to a selected choice.
    pub async fn activate(&mut self, action: Action) {
        match action {
            Action::SelectSubject(subject) => self.load_question_menu(&subject).await,
            Action::AskQuestion(question) => self.get_answer(&question).await,
            Action::BackToMainMenu => self.load_main_menu().await,
        }
    }

    fn error(&mut self, text: String) {
        self.chat.push(ChatMessage::new(MessageKind::Error, text));
    }
}
