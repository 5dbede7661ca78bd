//! AI text to safe HTML.
//!
//! Rendered markdown is passed through `ammonia` before it reaches
//! `inner_html`.

use winloss_core::markdown::{render_chat, render_insight};

/// Render a narrative insight to sanitized HTML.
pub fn insight_html(text: &str) -> String {
    ammonia::clean(&render_insight(text))
}

/// Render a chat answer to sanitized HTML.
pub fn chat_html(text: &str) -> String {
    ammonia::clean(&render_chat(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_rendered_structure() {
        let html = insight_html("## Wins\n- **Fintech** leads\n\n| A | B |\n|---|---|\n| 1 | 2 |");
        assert!(html.contains("<h2>Wins</h2>"));
        assert!(html.contains("<li><strong>Fintech</strong> leads</li>"));
        assert!(html.contains("<td>1</td>"));
    }

    #[test]
    fn test_strips_scripts() {
        let html = chat_html("hello <script>alert(1)</script>\nworld");
        assert!(!html.contains("<script>"));
        assert!(html.contains("<br>") || html.contains("<br/>") || html.contains("<br />"));
    }
}
