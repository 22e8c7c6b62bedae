//! Dioxus views: the dashboard shell, pages and reusable widgets.

pub mod components;
pub mod pages;
pub mod shell;
pub mod theme;
