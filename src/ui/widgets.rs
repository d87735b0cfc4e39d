//! Custom widgets for the trainer TUI.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{block::BorderType, Block, Borders, Paragraph, Widget, Wrap},
};

use super::theme::{icons, Theme};
use crate::models::{percent, Band, Prompt, Verdict};

// ══════════════════════════════════════════════════════════════════════════
// Logo Widget
// ══════════════════════════════════════════════════════════════════════════

pub struct Logo;

impl Logo {
    const ART: &'static str = r#"
    ╭──────────────────────────────────────╮
    │   ____   ____                        │
    │  | __ ) / ___|   Learn Bulgarian     │
    │  |  _ \| |  _    ────────────────    │
    │  | |_) | |_| |   А Б В Г Д · 1 2 3   │
    │  |____/ \____|   alphabet & numbers  │
    ╰──────────────────────────────────────╯"#;

    pub fn render_to(theme: &Theme, area: Rect, buf: &mut Buffer) {
        let lines: Vec<Line> = Self::ART
            .lines()
            .skip(1)
            .map(|line| Line::from(Span::styled(line, Style::default().fg(theme.colors.primary))))
            .collect();

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}

// ══════════════════════════════════════════════════════════════════════════
// Session Bar Widget
// ══════════════════════════════════════════════════════════════════════════

/// Score on the left, "N of M" in the middle, round settings on the right.
pub struct SessionBar<'a> {
    score: usize,
    progress: Option<(usize, usize)>,
    settings: String,
    theme: &'a Theme,
}

impl<'a> SessionBar<'a> {
    pub fn new(score: usize, progress: Option<(usize, usize)>, settings: String, theme: &'a Theme) -> Self {
        Self {
            score,
            progress,
            settings,
            theme,
        }
    }
}

impl Widget for SessionBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::horizontal([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(50),
        ])
        .split(area);

        Paragraph::new(Line::from(vec![
            Span::styled("Score: ", self.theme.muted()),
            Span::styled(self.score.to_string(), self.theme.highlight()),
        ]))
        .alignment(Alignment::Center)
        .render(chunks[0], buf);

        let progress = match self.progress {
            Some((n, m)) => format!("{} of {}", n, m),
            None => "-".to_string(),
        };
        Paragraph::new(Line::from(Span::styled(progress, self.theme.subtitle())))
            .alignment(Alignment::Center)
            .render(chunks[1], buf);

        Paragraph::new(Line::from(Span::styled(self.settings, self.theme.key_hint())))
            .alignment(Alignment::Center)
            .render(chunks[2], buf);
    }
}

// ══════════════════════════════════════════════════════════════════════════
// Prompt Card Widget
// ══════════════════════════════════════════════════════════════════════════

pub struct PromptCard<'a> {
    prompt: &'a Prompt,
    theme: &'a Theme,
}

impl<'a> PromptCard<'a> {
    pub fn new(prompt: &'a Prompt, theme: &'a Theme) -> Self {
        Self { prompt, theme }
    }
}

impl Widget for PromptCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(self.theme.colors.accent))
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(self.prompt.instruction, self.theme.title()),
                Span::raw(" "),
            ]))
            .title_alignment(Alignment::Center);

        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines = vec![Line::from(Span::styled(
            self.prompt.text.as_str(),
            self.theme.prompt(),
        ))];
        if let Some(hint) = &self.prompt.hint {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(hint.as_str(), self.theme.subtitle())));
        }

        let content_height = lines.len() as u16;
        let vertical_padding = inner.height.saturating_sub(content_height) / 2;
        let content_area = Rect {
            x: inner.x + 1,
            y: inner.y + vertical_padding,
            width: inner.width.saturating_sub(2),
            height: inner.height.saturating_sub(vertical_padding),
        };

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(content_area, buf);
    }
}

// ══════════════════════════════════════════════════════════════════════════
// Feedback Banner Widget
// ══════════════════════════════════════════════════════════════════════════

pub struct FeedbackBanner<'a> {
    verdict: &'a Verdict,
    theme: &'a Theme,
}

impl<'a> FeedbackBanner<'a> {
    pub fn new(verdict: &'a Verdict, theme: &'a Theme) -> Self {
        Self { verdict, theme }
    }
}

impl Widget for FeedbackBanner<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = self.theme.verdict(self.verdict.correct);
        let line = if self.verdict.correct {
            Line::from(vec![
                Span::styled(icons::CHECK, style),
                Span::styled(" Correct!", style),
            ])
        } else {
            Line::from(vec![
                Span::styled(icons::CROSS, style),
                Span::styled(" Not quite. The correct answer is ", style),
                Span::styled(
                    format!("\"{}\"", self.verdict.expected),
                    style.add_modifier(Modifier::UNDERLINED),
                ),
            ])
        };

        Paragraph::new(line)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(style),
            )
            .render(area, buf);
    }
}

// ══════════════════════════════════════════════════════════════════════════
// Tile Buttons Widget
// ══════════════════════════════════════════════════════════════════════════

/// Numbered sound tiles for letter matching.
pub struct TileButtons<'a> {
    tiles: &'a [String],
    enabled: bool,
    theme: &'a Theme,
}

impl<'a> TileButtons<'a> {
    pub fn new(tiles: &'a [String], enabled: bool, theme: &'a Theme) -> Self {
        Self {
            tiles,
            enabled,
            theme,
        }
    }
}

impl Widget for TileButtons<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.tiles.is_empty() {
            return;
        }
        let chunks = Layout::horizontal(vec![Constraint::Ratio(1, self.tiles.len() as u32); self.tiles.len()])
            .split(area);

        let color = if self.enabled {
            self.theme.colors.secondary
        } else {
            self.theme.colors.text_dim
        };

        for (i, tile) in self.tiles.iter().enumerate() {
            let button = Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(color));

            let inner = button.inner(chunks[i]);
            button.render(chunks[i], buf);

            Paragraph::new(Line::from(vec![
                Span::styled(format!("{} ", i + 1), self.theme.key_hint()),
                Span::styled(tile.as_str(), Style::default().fg(color).add_modifier(Modifier::BOLD)),
            ]))
            .alignment(Alignment::Center)
            .render(inner, buf);
        }
    }
}

// ══════════════════════════════════════════════════════════════════════════
// Key Hints Widget
// ══════════════════════════════════════════════════════════════════════════

pub struct KeyHints<'a> {
    hints: &'a [(&'a str, &'a str)],
    theme: &'a Theme,
}

impl<'a> KeyHints<'a> {
    pub fn new(hints: &'a [(&'a str, &'a str)], theme: &'a Theme) -> Self {
        Self { hints, theme }
    }
}

impl Widget for KeyHints<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let spans: Vec<Span> = self
            .hints
            .iter()
            .flat_map(|(key, desc)| {
                vec![
                    Span::styled(*key, self.theme.key_highlight()),
                    Span::styled(format!(" {} ", desc), self.theme.key_hint()),
                    Span::styled("│ ", Style::default().fg(self.theme.colors.text_dim)),
                ]
            })
            .collect();

        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}

// ══════════════════════════════════════════════════════════════════════════
// Results Screen Widget
// ══════════════════════════════════════════════════════════════════════════

pub struct ResultsScreen<'a> {
    title: &'a str,
    score: usize,
    total: usize,
    band: Band,
    theme: &'a Theme,
}

impl<'a> ResultsScreen<'a> {
    pub fn new(title: &'a str, score: usize, total: usize, band: Band, theme: &'a Theme) -> Self {
        Self {
            title,
            score,
            total,
            band,
            theme,
        }
    }
}

impl Widget for ResultsScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let band = self.band;
        let band_color = match band {
            Band::Perfect | Band::Great => self.theme.colors.correct,
            Band::Good => self.theme.colors.warning,
            Band::KeepLearning => self.theme.colors.primary,
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(band_color))
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(self.title, self.theme.title()),
                Span::styled(" COMPLETE ", self.theme.title()),
            ]))
            .title_alignment(Alignment::Center);

        let inner = block.inner(area);
        block.render(area, buf);

        let mut stars = String::new();
        if band == Band::Perfect {
            stars = format!("{0} {0} {0}", icons::STAR);
        }

        let text = vec![
            Line::from(Span::styled(stars, Style::default().fg(self.theme.colors.warning))),
            Line::from(vec![
                Span::styled("Your score: ", self.theme.muted()),
                Span::styled(
                    format!("{} out of {}", self.score, self.total),
                    Style::default().fg(self.theme.colors.primary).add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(Span::styled(
                format!("{}%", percent(self.score, self.total)),
                Style::default().fg(band_color).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                band.message(),
                Style::default().fg(band_color).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(self.theme.colors.text_dim)),
                Span::styled("Enter", self.theme.key_highlight()),
                Span::styled(" to try again, ", Style::default().fg(self.theme.colors.text_dim)),
                Span::styled("Esc", self.theme.key_highlight()),
                Span::styled(" to return", Style::default().fg(self.theme.colors.text_dim)),
            ]),
        ];

        Paragraph::new(text)
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer_text(buf: &Buffer) -> String {
        buf.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn results_show_band_message() {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 60, 12);
        let mut buf = Buffer::empty(area);
        ResultsScreen::new("Test", 8, 10, Band::Great, &theme).render(area, &mut buf);
        let text = buffer_text(&buf);
        assert!(text.contains("8 out of 10"));
        assert!(text.contains("80%"));
        assert!(text.contains("Great job!"));
    }

    #[test]
    fn wrong_answer_banner_names_expected() {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 70, 3);
        let mut buf = Buffer::empty(area);
        let verdict = Verdict {
            correct: false,
            expected: "ya".to_string(),
        };
        FeedbackBanner::new(&verdict, &theme).render(area, &mut buf);
        assert!(buffer_text(&buf).contains("\"ya\""));
    }
}
