//! Results list widget
//!
//! Renders the display-contract lines (page headers, indented headings,
//! separators) with the lines of the selected location highlighted. Scroll
//! position and selection come from the app; this widget only paints.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};

use super::truncate_to_width;
use crate::search::LineMap;
use crate::theme::Theme;

pub struct ResultsList<'a> {
    map: &'a LineMap,
    theme: &'a Theme,
    selected: Option<usize>,
    scroll: usize,
}

impl<'a> ResultsList<'a> {
    pub fn new(map: &'a LineMap, theme: &'a Theme) -> Self {
        Self {
            map,
            theme,
            selected: None,
            scroll: 0,
        }
    }

    /// Highlight all lines of this location.
    pub fn selected(mut self, selected: Option<usize>) -> Self {
        self.selected = selected;
        self
    }

    /// Number of display lines to skip from the top.
    pub fn scroll(mut self, scroll: usize) -> Self {
        self.scroll = scroll;
        self
    }
}

impl Widget for ResultsList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 {
            return;
        }

        let ui = &self.theme.ui;
        let visible = self
            .map
            .lines()
            .iter()
            .enumerate()
            .skip(self.scroll)
            .take(area.height as usize);

        for (row, (line_index, line)) in visible.enumerate() {
            let location = self.map.location_at(line_index);
            let is_page_line =
                location.and_then(|l| self.map.first_line_of(l)) == Some(line_index);

            let mut style = if is_page_line {
                Style::default()
                    .fg(self.theme.get_color(&ui.results_page))
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(self.theme.get_color(&ui.results_heading))
            };

            if location.is_some() && location == self.selected {
                style = style
                    .bg(self.theme.get_color(&ui.results_selected_bg))
                    .fg(self.theme.get_color(&ui.results_selected_fg));
            }

            let text = truncate_to_width(line, area.width as usize);
            buf.set_string(area.x, area.y + row as u16, text, style);
        }
    }
}
