//! Antigravity Dashboard - Leptos card for the active account and its quotas

pub mod app;
pub mod bridge;
pub mod components;
pub mod formatters;
pub mod i18n;
pub mod pages;
