//! Terminal UI: the form screen, the confirmation screen and the shell
//! that switches between them.

pub mod app;
pub mod confirmation;
pub mod events;
pub mod footer;
pub mod form;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod screen;
pub mod terminal_guard;
pub mod theme;
pub mod widgets;
pub mod worker;

pub use runtime::run;
