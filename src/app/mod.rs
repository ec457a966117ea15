//! Client logic: session state, event handling, and the actions handed to the
//! transport.

pub mod action;
pub mod event;
pub mod handler;
pub mod state;
