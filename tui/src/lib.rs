//! TUI rendering for BuildCost using ratatui.

mod ad_slot;
mod input;
pub mod pages;
mod theme;

pub use ad_slot::{AD_SLOT_HEIGHT, DEFAULT_SLOT, ad_label};
pub use input::{InputPump, apply_event, apply_key, handle_events};
pub use theme::{Glyphs, Palette, glyphs, palette, styles};

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

use buildcost_core::{format_inr, rate_label};
use buildcost_engine::{App, CalculationResult, FormField, MaterialPercent, NoticeKind, View};

use self::ad_slot::draw_ad_slot;
use self::pages::{GUIDE, body_lines, draw_page, page_for};

const HEADER_HEIGHT: u16 = 2;
const FORM_HEIGHT: u16 = 7;
const RESULTS_HEIGHT: u16 = 11;
const FOOTER_HEIGHT: u16 = 2;
/// Below this the guide article is skipped rather than squeezed.
const GUIDE_MIN_HEIGHT: u16 = 6;
const LABEL_WIDTH: usize = 22;
const CALCULATOR_AD_SLOT: &str = "middle-feed";
const COPYRIGHT_YEAR: u16 = 2026;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let options = app.ui_options();
    let palette = palette(options);
    let glyphs = glyphs(options);
    // Clear with background color
    let bg_block = Block::default().style(Style::default().bg(palette.bg_dark));
    frame.render_widget(bg_block, frame.area());

    let [header, body, footer, status] = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(1),
        Constraint::Length(FOOTER_HEIGHT),
        Constraint::Length(1),
    ])
    .horizontal_margin(1)
    .areas(frame.area());

    draw_header(frame, header, &palette);
    match page_for(app.view()) {
        Some(page) => draw_page(frame, page, body, &palette, &glyphs),
        None => draw_calculator(frame, app, body, &palette, &glyphs),
    }
    draw_footer(frame, footer, &palette, &glyphs);
    draw_status_bar(frame, app, status, &palette);
}

fn draw_header(frame: &mut Frame, area: Rect, palette: &Palette) {
    let lines = vec![
        Line::from(Span::styled("BuildCost", styles::brand(palette))),
        Line::from(Span::styled(
            "2026 Construction Cost Estimator for India",
            styles::label(palette),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn draw_calculator(
    frame: &mut Frame,
    app: &App,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let results_height = if app.result().is_some() {
        RESULTS_HEIGHT
    } else {
        0
    };
    let ad_height = if app.ui_options().show_ads {
        AD_SLOT_HEIGHT
    } else {
        0
    };

    let [form, results, ad, guide] = Layout::vertical([
        Constraint::Length(FORM_HEIGHT),
        Constraint::Length(results_height),
        Constraint::Length(ad_height),
        Constraint::Min(0),
    ])
    .areas(area);

    draw_form(frame, app, form, palette, glyphs);
    if let Some(result) = app.result() {
        draw_results(frame, app, result, results, palette, glyphs);
    }
    if ad_height > 0 {
        draw_ad_slot(frame, ad, Some(CALCULATOR_AD_SLOT), palette);
    }
    if guide.height >= GUIDE_MIN_HEIGHT {
        draw_guide(frame, guide, palette);
    }
}

fn panel(title: &str, palette: &Palette) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.bg_border))
        .padding(Padding::horizontal(1))
        .style(Style::default().bg(palette.bg_panel))
        .title(Span::styled(format!(" {title} "), styles::brand(palette)))
}

fn field_line(
    label: &str,
    focused: bool,
    control: Vec<Span<'static>>,
    palette: &Palette,
    glyphs: &Glyphs,
) -> Line<'static> {
    let (marker, label_style) = if focused {
        (glyphs.selected, styles::focused(palette))
    } else {
        (" ", styles::label(palette))
    };
    let mut spans = vec![
        Span::styled(format!("{marker} "), label_style),
        Span::styled(format!("{label:<LABEL_WIDTH$}"), label_style),
    ];
    spans.extend(control);
    Line::from(spans)
}

fn draw_form(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let form = app.form();
    let focus = app.focus();
    let style = app.currency_style();
    let control_style = |field: FormField| {
        if focus == field {
            styles::focused(palette)
        } else {
            styles::value(palette)
        }
    };

    let mut area_control = vec![Span::styled("[ ", styles::key_hint(palette))];
    if form.area_text.is_empty() && focus != FormField::Area {
        area_control.push(Span::styled("e.g. 1200", styles::key_hint(palette)));
    } else {
        area_control.push(Span::styled(
            form.area_text.clone(),
            control_style(FormField::Area),
        ));
    }
    if focus == FormField::Area {
        area_control.push(Span::styled(glyphs.caret, styles::focused(palette)));
    }
    area_control.push(Span::styled(" ]", styles::key_hint(palette)));

    let kind = form.construction_type;
    let quality_control = vec![Span::styled(
        format!(
            "{} {} ({}) {}",
            glyphs.arrow_left,
            kind.display_name(),
            rate_label(kind, style),
            glyphs.arrow_right
        ),
        control_style(FormField::Quality),
    )];

    let city = form.city_type;
    let city_control = vec![Span::styled(
        format!(
            "{} {} ({}) {}",
            glyphs.arrow_left,
            city.display_name(),
            city.description(),
            glyphs.arrow_right
        ),
        control_style(FormField::City),
    )];

    let material_control = slider_spans(
        form.material_percent,
        focus == FormField::Material,
        palette,
        glyphs,
    );

    let button_style = if focus == FormField::Calculate {
        styles::focused(palette)
    } else {
        styles::brand(palette)
    };
    let button_marker = if focus == FormField::Calculate {
        glyphs.selected
    } else {
        " "
    };

    let lines = vec![
        field_line(
            "Total Area (sq ft)",
            focus == FormField::Area,
            area_control,
            palette,
            glyphs,
        ),
        field_line(
            "Construction Quality",
            focus == FormField::Quality,
            quality_control,
            palette,
            glyphs,
        ),
        field_line(
            "City Tier Location",
            focus == FormField::City,
            city_control,
            palette,
            glyphs,
        ),
        field_line(
            &format!("Material Finish: +{}%", form.material_percent.value()),
            focus == FormField::Material,
            material_control,
            palette,
            glyphs,
        ),
        Line::from(vec![
            Span::styled(format!("{button_marker} "), button_style),
            Span::styled("[ Calculate Estimate ]", button_style),
        ]),
    ];

    frame.render_widget(
        Paragraph::new(lines).block(panel("Estimate Inputs", palette)),
        area,
    );
}

fn slider_spans(
    percent: MaterialPercent,
    focused: bool,
    palette: &Palette,
    glyphs: &Glyphs,
) -> Vec<Span<'static>> {
    let filled = usize::from(percent.value());
    let empty = usize::from(MaterialPercent::MAX) - filled;
    let fill_style = if focused {
        Style::default().fg(palette.accent)
    } else {
        Style::default().fg(palette.primary)
    };
    vec![
        Span::styled("Economy ", styles::key_hint(palette)),
        Span::styled(glyphs.slider_fill.repeat(filled), fill_style),
        Span::styled(glyphs.slider_track.repeat(empty), styles::key_hint(palette)),
        Span::styled(" Ultra Luxury", styles::key_hint(palette)),
    ]
}

/// `label ........ value` padded to `width` display columns.
fn amount_row(
    label: &str,
    value: String,
    width: usize,
    label_style: Style,
    value_style: Style,
) -> Line<'static> {
    let gap = width.saturating_sub(label.width() + value.width()).max(1);
    Line::from(vec![
        Span::styled(label.to_string(), label_style),
        Span::raw(" ".repeat(gap)),
        Span::styled(value, value_style),
    ])
}

fn draw_results(
    frame: &mut Frame,
    app: &App,
    result: &CalculationResult,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let style = app.currency_style();
    // Borders plus horizontal padding.
    let width = usize::from(area.width.saturating_sub(4));
    let label = styles::label(palette);
    let value = styles::value(palette);

    let mut lines: Vec<Line> = [
        ("Cost per sq ft", result.cost_per_sq_ft),
        ("Base Construction Cost", result.base_cost),
        ("City Adjusted Cost", result.city_adjusted_cost),
        ("Material Adjustment Cost", result.material_adjustment),
        ("Subtotal", result.subtotal),
        ("5% Contingency", result.contingency),
    ]
    .into_iter()
    .map(|(name, amount)| amount_row(name, format_inr(amount, style), width, label, value))
    .collect();

    lines.push(Line::from(Span::styled(
        glyphs.rule.repeat(width),
        Style::default().fg(palette.bg_border),
    )));
    lines.push(amount_row(
        "Final Estimated Total",
        format_inr(result.final_total, style),
        width,
        styles::total(palette),
        styles::total(palette),
    ));
    lines.push(
        Line::from(Span::styled(
            format!("for {} sq. ft. build area", app.form().area_text.trim()),
            styles::key_hint(palette),
        ))
        .right_aligned(),
    );

    let actions = Line::from(vec![
        Span::styled(" s", styles::key_highlight(palette)),
        Span::styled(" share ", styles::key_hint(palette)),
        Span::styled("p", styles::key_highlight(palette)),
        Span::styled(" print ", styles::key_hint(palette)),
    ])
    .right_aligned();

    let block = panel("Estimated Budget (2026 Index)", palette).title(actions);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_guide(frame: &mut Frame, area: Rect, palette: &Palette) {
    let paragraph = Paragraph::new(body_lines(&GUIDE, palette))
        .block(panel(GUIDE.title, palette))
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn draw_footer(frame: &mut Frame, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let mut links = Vec::new();
    for (idx, page) in View::PAGES.into_iter().enumerate() {
        if idx > 0 {
            links.push(Span::styled(
                format!(" {} ", glyphs.separator),
                styles::key_hint(palette),
            ));
        }
        if let Some(key) = page.shortcut() {
            links.push(Span::styled(format!("[{key}] "), styles::key_highlight(palette)));
        }
        links.push(Span::styled(page.title(), styles::label(palette)));
    }

    let lines = vec![
        Line::from(links),
        Line::from(Span::styled(
            format!(
                "{} {COPYRIGHT_YEAR} BuildCost India {} Precision Estimating.",
                glyphs.copyright, glyphs.dash
            ),
            styles::key_hint(palette),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let line = if let Some(notice) = app.notice() {
        let (prefix, color) = match notice.kind {
            NoticeKind::Error => ("Error: ", palette.error),
            NoticeKind::Warning => ("Warning: ", palette.warning),
            NoticeKind::Info => ("", palette.success),
        };
        Line::from(Span::styled(
            format!("{prefix}{}", notice.message),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ))
    } else {
        let hints: &[(&str, &str)] = if app.view() == View::Calculator {
            &[
                ("Tab", "next field"),
                ("Left/Right", "adjust"),
                ("Enter", "calculate"),
                ("s", "share"),
                ("p", "print"),
                ("q", "quit"),
            ]
        } else {
            &[("Esc", "back"), ("q", "quit")]
        };
        let mut spans = Vec::with_capacity(hints.len() * 2);
        for (key, action) in hints {
            spans.push(Span::styled(*key, styles::key_highlight(palette)));
            spans.push(Span::styled(format!(" {action}  "), styles::key_hint(palette)));
        }
        Line::from(spans)
    };

    frame.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
mod tests {
    use ratatui::style::Style;
    use unicode_width::UnicodeWidthStr;

    use super::amount_row;

    #[test]
    fn amount_rows_fill_the_width() {
        let line = amount_row(
            "Subtotal",
            "₹25,20,000.00".to_string(),
            40,
            Style::default(),
            Style::default(),
        );
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text.width(), 40);
        assert!(text.ends_with("₹25,20,000.00"));
    }

    #[test]
    fn amount_rows_keep_a_gap_when_too_narrow() {
        let line = amount_row("Subtotal", "123".to_string(), 4, Style::default(), Style::default());
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "Subtotal 123");
    }
}
