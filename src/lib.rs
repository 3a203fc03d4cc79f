//! Jaword - Japanese-aware word boundaries for text editors

pub mod buffer;
pub mod command;
pub mod constants;
pub mod editor;
pub mod error;
pub mod movement;
pub mod position;
pub mod selection;
pub mod settings;
