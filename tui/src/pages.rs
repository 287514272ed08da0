//! Static informational pages and the calculator's guide article.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap},
};

use buildcost_engine::View;

use crate::theme::{Glyphs, Palette, styles};

use self::PageBlock::{Field, Heading, Paragraph as Para};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageBlock {
    Heading(&'static str),
    Paragraph(&'static str),
    /// A bold label followed by its value on one line.
    Field(&'static str, &'static str),
}

#[derive(Debug, Clone, Copy)]
pub struct Page {
    pub title: &'static str,
    pub blocks: &'static [PageBlock],
}

const PRIVACY: Page = Page {
    title: "Privacy Policy",
    blocks: &[
        Para("Your privacy is important to us. This policy describes how BuildCost collects and uses information."),
        Heading("Data Collection"),
        Para("We do not send your construction inputs anywhere. All calculations are performed locally on your machine. A local log file is kept for troubleshooting."),
        Heading("Advertising"),
        Para("BuildCost may display advertisement placeholders. They can be turned off with `show_ads = false` in the [app] section of the config file."),
    ],
};

const TERMS: Page = Page {
    title: "Terms of Service",
    blocks: &[
        Para("By using BuildCost, you agree to these terms."),
        Heading("Usage"),
        Para("This calculator is for estimation purposes only. Construction costs are highly localized and subject to specific site conditions."),
        Heading("Disclaimer"),
        Para("BuildCost is not liable for any financial decisions made based on these estimates. Always consult a professional architect or contractor."),
    ],
};

const DISCLAIMER: Page = Page {
    title: "Disclaimer",
    blocks: &[
        Para("The information provided by BuildCost is for general guidance only. Prices for steel, sand, aggregate, and labor can change daily."),
        Para("We do not guarantee the accuracy of these projections. Users should verify local market rates before commencing any construction activity."),
    ],
};

const ABOUT: Page = Page {
    title: "About Us",
    blocks: &[
        Para("BuildCost is an independent construction forecasting tool designed for the Indian market. Our goal is to empower homeowners with data-driven budget insights."),
        Para("Our team consists of civil engineering enthusiasts who monitor market trends across Delhi, Mumbai, Bangalore, and rural India to provide the most accurate multipliers possible."),
    ],
};

const CONTACT: Page = Page {
    title: "Contact Us",
    blocks: &[
        Para("For support, feedback, or business inquiries, please contact us:"),
        Field("Email:", "hello@buildcost.example.com"),
        Field("Location:", "Digital-First Platform, India"),
    ],
};

/// Shown below the calculator when there is room for it.
pub const GUIDE: Page = Page {
    title: "Navigating Home Construction in India (2026)",
    blocks: &[
        Para("Building a house is one of the most significant financial commitments a family makes. As we enter 2026, the construction landscape in India continues to evolve with smarter building materials and fluctuating labor costs."),
        Heading("Market Pulse"),
        Para("Cement and Steel prices are projected to rise by 4-6% annually. Planning now ensures you lock in better procurement rates."),
        Heading("Build Smart"),
        Para("Using fly-ash bricks and water-saving plumbing can reduce your subtotal by up to 8% while being eco-friendly."),
    ],
};

/// The static page for `view`; `None` for the calculator.
#[must_use]
pub fn page_for(view: View) -> Option<&'static Page> {
    match view {
        View::Calculator => None,
        View::Privacy => Some(&PRIVACY),
        View::Terms => Some(&TERMS),
        View::Disclaimer => Some(&DISCLAIMER),
        View::About => Some(&ABOUT),
        View::Contact => Some(&CONTACT),
    }
}

pub(crate) fn body_lines(page: &Page, palette: &Palette) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(page.blocks.len() * 2);
    for (idx, block) in page.blocks.iter().enumerate() {
        if idx > 0 {
            lines.push(Line::default());
        }
        match *block {
            Heading(text) => lines.push(Line::from(Span::styled(
                text,
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            ))),
            Para(text) => lines.push(Line::from(Span::styled(text, styles::value(palette)))),
            Field(label, value) => lines.push(Line::from(vec![
                Span::styled(
                    label,
                    Style::default()
                        .fg(palette.text_primary)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(" "),
                Span::styled(value, styles::value(palette)),
            ])),
        }
    }
    lines
}

pub(crate) fn draw_page(
    frame: &mut Frame,
    page: &Page,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                format!("{} Back to Calculator", glyphs.arrow_back),
                styles::key_highlight(palette),
            ),
            Span::styled(" (Esc)", styles::key_hint(palette)),
        ]),
        Line::default(),
    ];
    lines.extend(body_lines(page, palette));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.bg_border))
        .padding(Padding::horizontal(1))
        .title(Span::styled(
            format!(" {} ", page.title),
            styles::brand(palette),
        ));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .style(Style::default().bg(palette.bg_panel));
    frame.render_widget(paragraph, area);
}
