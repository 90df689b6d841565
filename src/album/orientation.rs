// SPDX-License-Identifier: MPL-2.0
//! Rotate prompt shown on narrow portrait windows.

use crate::config::DEFAULT_ROTATE_PROMPT_BREAKPOINT;

/// Decides when the "rotate your device" overlay is visible.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotatePrompt {
    breakpoint: f32,
    visible: bool,
}

impl Default for RotatePrompt {
    fn default() -> Self {
        Self::new(DEFAULT_ROTATE_PROMPT_BREAKPOINT)
    }
}

impl RotatePrompt {
    #[must_use]
    pub fn new(breakpoint: f32) -> Self {
        Self {
            breakpoint,
            visible: false,
        }
    }

    /// Recomputes visibility for a new window size.
    pub fn resize(&mut self, width: f32, height: f32) {
        let visible = self.should_prompt(width, height);
        if visible != self.visible {
            tracing::debug!(width, height, visible, "rotate prompt toggled");
        }
        self.visible = visible;
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Narrower than the breakpoint and taller than wide.
    #[must_use]
    pub fn should_prompt(&self, width: f32, height: f32) -> bool {
        width < self.breakpoint && height > width
    }
}

/// [`RotatePrompt::should_prompt`] with the default breakpoint.
#[must_use]
pub fn should_prompt(width: f32, height: f32) -> bool {
    RotatePrompt::default().should_prompt(width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrow_portrait_prompts() {
        assert!(should_prompt(400.0, 800.0));
        assert!(should_prompt(767.0, 768.0));
    }

    #[test]
    fn landscape_never_prompts() {
        assert!(!should_prompt(700.0, 500.0));
        assert!(!should_prompt(1280.0, 720.0));
    }

    #[test]
    fn wide_portrait_does_not_prompt() {
        assert!(!should_prompt(768.0, 1024.0));
        assert!(!should_prompt(900.0, 1600.0));
    }

    #[test]
    fn square_does_not_prompt() {
        assert!(!should_prompt(500.0, 500.0));
    }

    #[test]
    fn resize_updates_visibility() {
        let mut prompt = RotatePrompt::default();
        assert!(!prompt.is_visible());
        prompt.resize(390.0, 844.0);
        assert!(prompt.is_visible());
        prompt.resize(844.0, 390.0);
        assert!(!prompt.is_visible());
    }

    #[test]
    fn custom_breakpoint_is_respected() {
        let prompt = RotatePrompt::new(1000.0);
        assert!(prompt.should_prompt(900.0, 1200.0));
    }
}
