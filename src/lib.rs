// ABOUTME: Library crate for avatar-wizard exposing the step flow and its collaborators for testing and embedding

pub mod app;
pub mod catalog;
pub mod components;
pub mod config;
pub mod flow;
pub mod store;
