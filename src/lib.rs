//! Mention Input - Elm-style @mention text-input core
//!
//! This crate provides the core types and logic for an editable text input
//! with atomic @mention tokens, implementing the Elm Architecture pattern:
//! the host translates its native key/focus/timer events into [`Msg`]s,
//! applies them with [`update::update`] (or [`input::handle_key`] for raw
//! keystrokes), and executes the returned [`Cmd`]s against its transport
//! and timer facilities. Rendering, network fetch policy, and widget
//! mounting stay on the host side.

pub mod commands;
pub mod config;
pub mod contact;
pub mod dropdown;
pub mod input;
pub mod mention;
pub mod messages;
pub mod model;
pub mod query;
pub mod styles;
pub mod surface;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::MentionConfig;
pub use contact::Contact;
pub use messages::Msg;
pub use model::MentionInput;
pub use surface::{Run, Surface};
