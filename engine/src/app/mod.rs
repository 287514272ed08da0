//! The calculator state container.
//!
//! `App` holds the four form inputs, the derived estimate, and the UI state
//! around them. Every input edit recomputes the estimate synchronously, so the
//! result is always a pure function of the current inputs.

use std::time::{Duration, Instant};

use buildcost_core::{CurrencyStyle, estimate_from_text, quote_text, share_text};
use buildcost_types::{
    Area, CalculationResult, CityType, ConstructionType, EstimateInput, MaterialPercent,
    ui::{FormField, UiOptions, View},
};
use tracing::{debug, info, warn};

use crate::config::{AppSettings, FormDefaults};
use crate::print::{PrintTarget, QuoteFilePrinter};
use crate::share::{ClipboardShare, SHARE_UNSUPPORTED_NOTICE, ShareError, SharePayload, ShareTarget};

/// How long a status notice stays on screen.
pub const NOTICE_LIFETIME: Duration = Duration::from_secs(4);

/// Longest area text the form accepts.
pub const MAX_AREA_CHARS: usize = 12;

const SHARE_TITLE: &str = "BuildCost Estimate";

/// Keep digits and the first decimal point, up to [`MAX_AREA_CHARS`].
pub(crate) fn filter_area_text(text: &str) -> String {
    let mut out = String::new();
    for ch in text.chars() {
        let keep = ch.is_ascii_digit() || (ch == '.' && !out.contains('.'));
        if keep && out.chars().count() < MAX_AREA_CHARS {
            out.push(ch);
        }
    }
    out
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Warning,
    Error,
}

/// A transient status line message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
    expires_at: Instant,
}

/// The four editable inputs. Area stays as text so partial edits survive.
#[derive(Debug, Clone, PartialEq)]
pub struct EstimateForm {
    pub area_text: String,
    pub construction_type: ConstructionType,
    pub city_type: CityType,
    pub material_percent: MaterialPercent,
}

impl From<FormDefaults> for EstimateForm {
    fn from(defaults: FormDefaults) -> Self {
        Self {
            area_text: defaults.area_text,
            construction_type: defaults.construction_type,
            city_type: defaults.city_type,
            material_percent: defaults.material_percent,
        }
    }
}

/// Host capabilities used by the share and print actions.
pub struct Collaborators {
    pub share: Box<dyn ShareTarget>,
    pub print: Box<dyn PrintTarget>,
}

impl Collaborators {
    /// Clipboard sharing and quote files under the configured print directory.
    #[must_use]
    pub fn system(settings: &AppSettings) -> Self {
        Self {
            share: Box::new(ClipboardShare::new()),
            print: Box::new(QuoteFilePrinter::new(settings.print_dir.clone())),
        }
    }
}

pub struct App {
    form: EstimateForm,
    result: Option<CalculationResult>,
    view: View,
    focus: FormField,
    notice: Option<Notice>,
    ui_options: UiOptions,
    share_url: String,
    share_target: Box<dyn ShareTarget>,
    print_target: Box<dyn PrintTarget>,
    quit_requested: bool,
}

impl App {
    #[must_use]
    pub fn new(settings: AppSettings, collaborators: Collaborators) -> Self {
        let mut app = Self {
            form: settings.form.into(),
            result: None,
            view: View::Calculator,
            focus: FormField::Area,
            notice: None,
            ui_options: settings.ui_options,
            share_url: settings.share_url,
            share_target: collaborators.share,
            print_target: collaborators.print,
            quit_requested: false,
        };
        app.recalculate();
        app
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    #[must_use]
    pub fn form(&self) -> &EstimateForm {
        &self.form
    }

    #[must_use]
    pub fn result(&self) -> Option<&CalculationResult> {
        self.result.as_ref()
    }

    #[must_use]
    pub fn view(&self) -> View {
        self.view
    }

    #[must_use]
    pub fn focus(&self) -> FormField {
        self.focus
    }

    #[must_use]
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.ui_options
    }

    #[must_use]
    pub fn currency_style(&self) -> CurrencyStyle {
        CurrencyStyle::for_ascii_only(self.ui_options.ascii_only)
    }

    #[must_use]
    pub fn share_url(&self) -> &str {
        &self.share_url
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.quit_requested
    }

    pub fn request_quit(&mut self) {
        self.quit_requested = true;
    }

    /// The validated input snapshot, if the area text is a positive number.
    #[must_use]
    pub fn input_snapshot(&self) -> Option<EstimateInput> {
        let area = Area::parse(&self.form.area_text).ok()?;
        Some(EstimateInput {
            area,
            construction_type: self.form.construction_type,
            city_type: self.form.city_type,
            material_percent: self.form.material_percent,
        })
    }

    // ------------------------------------------------------------------
    // Estimation
    // ------------------------------------------------------------------

    /// Recompute the estimate from the current inputs, replacing the old one.
    pub fn recalculate(&mut self) {
        self.result = estimate_from_text(
            &self.form.area_text,
            self.form.construction_type,
            self.form.city_type,
            self.form.material_percent,
        );
        debug!(
            area = %self.form.area_text,
            construction = self.form.construction_type.as_str(),
            city = self.form.city_type.as_str(),
            material = self.form.material_percent.value(),
            estimated = self.result.is_some(),
            "Recalculated"
        );
    }

    // ------------------------------------------------------------------
    // Input edits (each one recomputes)
    // ------------------------------------------------------------------

    /// Append a character to the area field. Only digits and a single
    /// decimal point are accepted; returns whether the text changed.
    pub fn push_area_char(&mut self, ch: char) -> bool {
        let accepted = match ch {
            '0'..='9' => true,
            '.' => !self.form.area_text.contains('.'),
            _ => false,
        };
        if !accepted || self.form.area_text.chars().count() >= MAX_AREA_CHARS {
            return false;
        }
        self.form.area_text.push(ch);
        self.recalculate();
        true
    }

    pub fn pop_area_char(&mut self) -> bool {
        if self.form.area_text.pop().is_none() {
            return false;
        }
        self.recalculate();
        true
    }

    pub fn clear_area(&mut self) {
        self.form.area_text.clear();
        self.recalculate();
    }

    /// Replace the area text wholesale (e.g. from a paste).
    ///
    /// Like the keyboard path, anything that is not a digit or a first
    /// decimal point is dropped.
    pub fn set_area_text(&mut self, text: &str) {
        self.form.area_text = filter_area_text(text);
        self.recalculate();
    }

    pub fn set_construction_type(&mut self, kind: ConstructionType) {
        self.form.construction_type = kind;
        self.recalculate();
    }

    pub fn cycle_construction_type(&mut self, forward: bool) {
        let current = self.form.construction_type;
        self.set_construction_type(if forward { current.next() } else { current.prev() });
    }

    pub fn set_city_type(&mut self, city: CityType) {
        self.form.city_type = city;
        self.recalculate();
    }

    pub fn cycle_city_type(&mut self, forward: bool) {
        let current = self.form.city_type;
        self.set_city_type(if forward { current.next() } else { current.prev() });
    }

    pub fn set_material_percent(&mut self, percent: MaterialPercent) {
        self.form.material_percent = percent;
        self.recalculate();
    }

    pub fn step_material(&mut self, delta: i8) {
        let stepped = self.form.material_percent.step(delta);
        self.set_material_percent(stepped);
    }

    /// Left/right on the focused control: cycle a selector or move the slider.
    pub fn adjust_focused(&mut self, forward: bool) {
        match self.focus {
            FormField::Quality => self.cycle_construction_type(forward),
            FormField::City => self.cycle_city_type(forward),
            FormField::Material => self.step_material(if forward { 1 } else { -1 }),
            FormField::Area | FormField::Calculate => {}
        }
    }

    // ------------------------------------------------------------------
    // Focus and navigation
    // ------------------------------------------------------------------

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    pub fn set_focus(&mut self, field: FormField) {
        self.focus = field;
    }

    /// Switch views. Entering the calculator recomputes the estimate.
    pub fn navigate(&mut self, view: View) {
        if self.view != view {
            debug!(from = ?self.view, to = ?view, "Navigate");
        }
        self.view = view;
        if view == View::Calculator {
            self.recalculate();
        }
    }

    // ------------------------------------------------------------------
    // Share / print
    // ------------------------------------------------------------------

    /// Hand the estimate summary to the share collaborator.
    ///
    /// No-op without an estimate. An unsupported host gets a notice; any
    /// other failure is logged and otherwise ignored.
    pub fn share(&mut self) {
        let Some(result) = self.result else {
            return;
        };

        let payload = SharePayload {
            title: SHARE_TITLE.to_string(),
            text: share_text(
                &self.form.area_text,
                &result,
                &self.share_url,
                self.currency_style(),
            ),
            url: self.share_url.clone(),
        };

        match self.share_target.share(&payload) {
            Ok(()) => {
                let destination = self.share_target.destination();
                info!(destination, "Estimate shared");
                self.set_notice(NoticeKind::Info, format!("Estimate copied to {destination}."));
            }
            Err(ShareError::Unsupported) => {
                self.set_notice(NoticeKind::Warning, SHARE_UNSUPPORTED_NOTICE);
            }
            Err(err) => {
                warn!("Share failed: {err}");
            }
        }
    }

    /// Render the estimate as a quote and hand it to the print collaborator.
    pub fn print(&mut self) {
        let (Some(result), Some(input)) = (self.result, self.input_snapshot()) else {
            return;
        };

        let quote = quote_text(&input, &result, self.currency_style());
        match self.print_target.print(&quote) {
            Ok(path) => {
                info!(path = %path.display(), "Quote printed");
                self.set_notice(
                    NoticeKind::Info,
                    format!("Quote saved to {}", path.display()),
                );
            }
            Err(err) => {
                warn!("Print failed: {err}");
                self.set_notice(NoticeKind::Error, format!("Print failed: {err}"));
            }
        }
    }

    // ------------------------------------------------------------------
    // Notices
    // ------------------------------------------------------------------

    pub fn set_notice(&mut self, kind: NoticeKind, message: impl Into<String>) {
        self.notice = Some(Notice {
            kind,
            message: message.into(),
            expires_at: Instant::now() + NOTICE_LIFETIME,
        });
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Per-frame housekeeping: expire the status notice.
    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    pub fn tick_at(&mut self, now: Instant) {
        if self
            .notice
            .as_ref()
            .is_some_and(|notice| now >= notice.expires_at)
        {
            self.notice = None;
        }
    }
}
