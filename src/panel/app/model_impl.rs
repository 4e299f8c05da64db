//! `Model` trait implementation for the comments panel.
//!
//! This module contains the `bubbletea_rs::Model` wiring for
//! [`CommentsPanel`]: initialisation from the process-wide panel context,
//! message dispatch, and viewport-normalised view rendering.

use std::any::Any;

use bubbletea_rs::{Cmd, Model};

use crate::panel::components::text_fit::fit_line;
use crate::panel::input::{InputContext, map_key_to_message};

use super::CommentsPanel;
use super::PanelMsg;
use super::rendering::CHROME_HEIGHT;

impl Model for CommentsPanel {
    fn init() -> (Self, Option<Cmd>) {
        // Retrieve the store and paging configuration from module-level
        // storage; `Model::init` is static, so it cannot take arguments.
        let model = crate::panel::panel_from_context();

        // Emit an immediate startup message so the initial page load runs
        // without waiting for user input.
        let cmd = Self::immediate_init_cmd();
        (model, Some(cmd))
    }

    fn update(&mut self, msg: Box<dyn Any + Send>) -> Option<Cmd> {
        if let Some(panel_msg) = msg.downcast_ref::<PanelMsg>() {
            return self.handle_message(panel_msg);
        }

        if let Some(key_msg) = msg.downcast_ref::<bubbletea_rs::event::KeyMsg>() {
            let context = InputContext {
                focus: self.focus(),
            };
            if let Some(mapped) = map_key_to_message(key_msg, context) {
                return self.handle_message(&mapped);
            }
        }

        if let Some(size_msg) = msg.downcast_ref::<bubbletea_rs::event::WindowSizeMsg>() {
            let resize = PanelMsg::WindowResized {
                width: size_msg.width,
                height: size_msg.height,
            };
            return self.handle_message(&resize);
        }

        None
    }

    fn view(&self) -> String {
        let feed_height = (self.height as usize).saturating_sub(CHROME_HEIGHT);

        let mut output = String::new();
        output.push_str(&self.render_header());
        output.push_str(&self.render_form());
        output.push_str(&self.render_feed(feed_height));
        output.push_str(&self.render_load_more());
        output.push_str(&self.render_status_bar());

        self.normalise_viewport(&output)
    }
}

impl CommentsPanel {
    /// Normalises the rendered frame to terminal dimensions.
    ///
    /// Rows are clamped to one column less than terminal width to avoid
    /// autowrap behaviour, padded with spaces to clear stale trailing cells
    /// after resize, and the frame is padded or truncated to the terminal
    /// height.
    fn normalise_viewport(&self, output: &str) -> String {
        let width = (self.width as usize).max(1);
        let safe_width = width.saturating_sub(1).max(1);
        let height = (self.height as usize).max(1);

        let mut lines: Vec<String> = output
            .lines()
            .map(|line| fit_line(line, safe_width))
            .collect();
        lines.truncate(height);

        let missing = height.saturating_sub(lines.len());
        let blank = " ".repeat(safe_width);
        lines.extend(std::iter::repeat_with(|| blank.clone()).take(missing));

        let mut normalised = lines.join("\n");
        normalised.push('\n');
        normalised
    }
}
