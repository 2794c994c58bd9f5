//! Context pane widget
//!
//! Shows the current match framed by its page number, heading path, and
//! sentence-bounded excerpt, with the match span highlighted.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::search::MatchView;
use crate::theme::Theme;

pub struct ContextPane<'a> {
    view: Option<&'a MatchView>,
    theme: &'a Theme,
    /// Shown instead of a match, e.g. "Ready to search" or "No matches found".
    placeholder: &'a str,
}

impl<'a> ContextPane<'a> {
    pub fn new(view: Option<&'a MatchView>, theme: &'a Theme, placeholder: &'a str) -> Self {
        Self {
            view,
            theme,
            placeholder,
        }
    }

    fn lines(&self) -> Vec<Line<'a>> {
        let ui = &self.theme.ui;
        let heading_style = Style::default()
            .fg(self.theme.get_color(&ui.context_heading))
            .add_modifier(Modifier::BOLD);

        let Some(view) = self.view else {
            return vec![
                Line::from(""),
                Line::from(Span::styled(
                    self.placeholder,
                    Style::default().fg(self.theme.get_color(&ui.help_fg)),
                )),
            ];
        };

        let mut lines = vec![
            Line::from(Span::styled(format!("Page {}", view.page + 1), heading_style)),
            Line::from(""),
        ];

        for heading in &view.headings {
            lines.push(Line::from(Span::styled(
                format!("▶ {heading}"),
                heading_style,
            )));
        }
        lines.push(Line::from(""));

        // Excerpt with the match span in highlight colors
        let excerpt = &view.excerpt;
        let match_style = Style::default()
            .bg(self.theme.get_color(&ui.match_bg))
            .fg(self.theme.get_color(&ui.match_fg));
        lines.push(Line::from(vec![
            Span::raw(excerpt.text[..excerpt.highlight.start].to_string()),
            Span::styled(
                excerpt.text[excerpt.highlight.clone()].to_string(),
                match_style,
            ),
            Span::raw(excerpt.text[excerpt.highlight.end..].to_string()),
        ]));

        lines
    }
}

impl Widget for ContextPane<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.lines())
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
