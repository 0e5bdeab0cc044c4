//! Oakvale - Text adventure game with an HTTP command interface

pub mod client;
pub mod combat;
pub mod command;
pub mod core;
pub mod game;
pub mod server;
pub mod world;
