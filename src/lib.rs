//! Turning Snake - a grid snake whose turns travel down its body
//!
//! This library provides:
//! - Core game logic (game module): snake motion, turning points, items, scoring
//! - Keyboard mapping (input module)
//! - TUI rendering (render module)
//! - Session statistics (metrics module)
//! - The interactive terminal driver (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
