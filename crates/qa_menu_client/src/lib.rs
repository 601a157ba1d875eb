//! Menu-driven Q&A chat client: config, HTTP API client, chat model and the
//! menu controller. Used by the `qa-menu` terminal front-end.

pub mod chat;
pub mod client;
pub mod config;
pub mod controller;
pub mod messages;

pub use chat::{Action, ChatLog, ChatMessage, Choice, MessageKind, OptionsPanel};
pub use client::{Client, ClientError};
pub use config::{default_config_path, ApiSection, ChatSection, Config, ConfigError};
pub use controller::MenuController;
