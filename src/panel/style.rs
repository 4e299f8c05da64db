//! Process-wide style table for panel rendering.
//!
//! The original widget injected a stylesheet into the host document exactly
//! once, however many instances were mounted. The terminal equivalent is a
//! one-time registration of the SGR sequences used by the renderer, keyed by
//! a single process-wide static: every panel instance reads the same table.

use std::sync::OnceLock;

/// SGR sequences used by the panel renderer.
#[derive(Debug)]
pub(crate) struct StyleSheet {
    /// Panel title.
    pub(crate) header: &'static str,
    /// Comment author names.
    pub(crate) author: &'static str,
    /// Timestamps and secondary text.
    pub(crate) dim: &'static str,
    /// Error notices.
    pub(crate) error: &'static str,
    /// Focused form element.
    pub(crate) focus: &'static str,
    /// Disabled affordances.
    pub(crate) disabled: &'static str,
    /// Returns the terminal to its default attributes.
    pub(crate) reset: &'static str,
}

static STYLES: OnceLock<StyleSheet> = OnceLock::new();

/// Returns the registered style table, initialising it on first use.
pub(crate) fn styles() -> &'static StyleSheet {
    STYLES.get_or_init(|| StyleSheet {
        header: "\x1b[1m",
        author: "\x1b[1;36m",
        dim: "\x1b[2m",
        error: "\x1b[31m",
        focus: "\x1b[7m",
        disabled: "\x1b[2m",
        reset: "\x1b[0m",
    })
}
