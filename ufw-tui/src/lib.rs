pub mod app;

pub mod event;

pub mod ui;

pub mod tui;

pub mod handler;

pub mod help;

pub mod cli;

pub mod config;

pub mod preflight;

pub mod runner;

pub mod snapshot;

pub mod menu;

pub mod view;

pub mod action;

pub mod prompt;

pub mod message;

#[cfg(test)]
pub(crate) mod testing;
