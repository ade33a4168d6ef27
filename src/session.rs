//! Session context: one game's live message style and box geometry.
//!
//! A [`Session`] owns the [`StyleState`] and every flag that used to be
//! ambient host state (combat, pending size refresh, the tone latched for the
//! current page). Every operation takes `&mut Session` or `&Session`; there
//! are no globals.
//!
//! # Examples
//!
//! ```
//! use textbox_layout::command::Command;
//! use textbox_layout::config::LayoutConfig;
//! use textbox_layout::message::{Message, MessageHeader};
//! use textbox_layout::metrics::MonospaceMeasurer;
//! use textbox_layout::placement::ScreenSize;
//! use textbox_layout::session::Session;
//!
//! let mut session = Session::from_config(LayoutConfig::default(), ScreenSize::new(808.0, 616.0));
//! session.execute(&Command::UsePreset("Book".into()));
//!
//! let message = Message {
//!     header: MessageHeader::default(),
//!     lines: vec!["Once upon a time...".into()],
//! };
//! let layout = session.layout_message(&message, &MonospaceMeasurer::new(12.0), None);
//! assert_eq!(layout.rect.width, 720.0);
//! assert_eq!(layout.pages[0].lines[0].text, "Once upon a time...");
//! ```

use crate::command::Command;
use crate::config::LayoutConfig;
use crate::event::{emit_event, warn};
use crate::message::{Message, prepare_help_text};
use crate::metrics::{IconWidthOverride, TextMeasurer};
use crate::placement::{
    BoxRect, HorizontalAnchor, MESSAGE_BOX_EXTRA_HEIGHT, ScreenSize, ScreenTarget, VerticalBand,
    box_x, box_y, choice_list_y, fitting_height, name_box_width, resolve_vertical_band,
};
use crate::style::{PresetCatalog, RgbTone, StylePreset, StyleState};
use crate::text::{
    FACE_SPACING, LineMetrics, LineWrapper, Page, TextArea, TextLayout, effective_wrap_width,
    normalize_line_breaks,
};
use serde::Serialize;
use std::sync::Arc;

/// Box size and tone fixed when a page starts.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PageStyle {
    pub width: f32,
    pub height: f32,
    pub tone: RgbTone,
}

/// Everything a host needs to draw one message.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MessageLayout {
    pub pages: Vec<Page>,
    pub rect: BoxRect,
    pub band: VerticalBand,
    pub anchor: HorizontalAnchor,
    pub tone: RgbTone,
    /// Show each page's text at once instead of letter by letter.
    pub instant_text: bool,
}

/// Session-scoped layout context.
#[derive(Clone, Debug)]
pub struct Session {
    config: LayoutConfig,
    catalog: Arc<PresetCatalog>,
    style: StyleState,
    screen: ScreenSize,
    in_combat: bool,
    needs_size_refresh: bool,
    page: PageStyle,
}

impl Session {
    /// Create a session sharing an existing catalog.
    #[must_use]
    pub fn new(config: LayoutConfig, catalog: Arc<PresetCatalog>, screen: ScreenSize) -> Self {
        let style = StyleState::new(catalog.default_preset().clone());
        let page = PageStyle {
            width: style.message_width(screen.width),
            height: Self::box_height(&config, style.line_count()),
            tone: style.tone(),
        };
        Self {
            config,
            catalog,
            style,
            screen,
            in_combat: false,
            needs_size_refresh: true,
            page,
        }
    }

    /// Create a session with a catalog built from `config`.
    #[must_use]
    pub fn from_config(config: LayoutConfig, screen: ScreenSize) -> Self {
        let catalog = Arc::new(PresetCatalog::from_config(&config));
        Self::new(config, catalog, screen)
    }

    #[must_use]
    pub const fn config(&self) -> &LayoutConfig {
        &self.config
    }

    #[must_use]
    pub fn catalog(&self) -> &PresetCatalog {
        &self.catalog
    }

    #[must_use]
    pub const fn style(&self) -> &StyleState {
        &self.style
    }

    /// Direct access to the style state, for hosts restoring save data.
    pub fn style_mut(&mut self) -> &mut StyleState {
        &mut self.style
    }

    #[must_use]
    pub const fn screen(&self) -> ScreenSize {
        self.screen
    }

    /// Change the box area, e.g. after the host resizes its UI.
    pub fn set_screen(&mut self, screen: ScreenSize) {
        self.screen = screen;
        self.needs_size_refresh = true;
    }

    #[must_use]
    pub const fn in_combat(&self) -> bool {
        self.in_combat
    }

    #[must_use]
    pub const fn needs_size_refresh(&self) -> bool {
        self.needs_size_refresh
    }

    /// Size and tone of the page being shown.
    #[must_use]
    pub const fn page_style(&self) -> PageStyle {
        self.page
    }

    /// Run a style command.
    pub fn execute(&mut self, command: &Command) {
        tracing::debug!(%command, "executing style command");
        match command {
            Command::ResetToDefault => {
                self.style.reset_to_default();
                self.request_size_refresh();
            }
            Command::UsePreset(name) => {
                self.apply_named_preset(name);
            }
            Command::SavePresetAsDefault(name) => match self.catalog.lookup(name) {
                Ok(preset) => self.style.set_default_preset(preset.clone()),
                Err(err) => warn(&format!("{err}; ignoring save-as-default command")),
            },
            Command::SaveCurrentAsDefault => {
                let preset = self.style.snapshot();
                self.style.set_default_preset(preset);
            }
            Command::WordWrap(on) => self.style.set_word_wrap(Some(*on)),
            Command::Position(anchor) => self.style.set_position(Some(*anchor)),
            Command::AdaptiveTarget(target) => self.style.set_adaptive_target(Some(*target)),
            Command::InstantText(on) => self.style.set_instant_text(Some(*on)),
            Command::PageBreak(on) => self.style.set_page_break(Some(*on)),
        }
    }

    /// Apply the preset called `name`.
    ///
    /// An unknown name logs one warning and changes nothing. Returns whether
    /// a preset was applied.
    pub fn apply_named_preset(&mut self, name: &str) -> bool {
        let catalog = Arc::clone(&self.catalog);
        match catalog.lookup(name) {
            Ok(preset) => {
                self.apply_preset(preset);
                true
            }
            Err(err) => {
                warn(&format!("{err}; ignoring preset command"));
                false
            }
        }
    }

    fn apply_preset(&mut self, preset: &StylePreset) {
        self.style.apply_preset(preset);
        self.request_size_refresh();
        emit_event("style.preset_applied", &preset.name);
    }

    /// Ask for the box to be resized when the next page starts.
    pub fn request_size_refresh(&mut self) {
        self.needs_size_refresh = true;
    }

    /// A message finished; the next one starts with a fresh size.
    pub fn end_message(&mut self) {
        self.request_size_refresh();
    }

    /// An event script finished running.
    ///
    /// With auto-revert on, the style returns to the default preset, or to
    /// the battle preset while in combat.
    pub fn end_event(&mut self) {
        if !self.config.auto_revert {
            return;
        }
        if self.in_combat {
            let name = self.config.battle_preset.clone();
            self.apply_named_preset(&name);
        } else {
            self.style.reset_to_default();
        }
    }

    /// Enter combat and switch to the battle preset.
    pub fn start_battle(&mut self) {
        self.in_combat = true;
        let name = self.config.battle_preset.clone();
        self.apply_named_preset(&name);
    }

    /// Leave combat and return to the default style.
    pub fn end_battle(&mut self) {
        self.style.reset_to_default();
        self.in_combat = false;
    }

    /// Start showing a page.
    ///
    /// The tone is always latched here. A pending size refresh is consumed
    /// here too, so style changes made while a page is up never resize it.
    pub fn start_page(&mut self) -> PageStyle {
        self.page.tone = self.style.tone();
        if self.needs_size_refresh {
            self.page.width = self.style.message_width(self.screen.width);
            self.page.height = Self::box_height(&self.config, self.style.line_count());
            self.needs_size_refresh = false;
        }
        self.page
    }

    fn box_height(config: &LayoutConfig, line_count: u32) -> f32 {
        fitting_height(line_count, config.line_height, config.window_padding)
            + MESSAGE_BOX_EXTRA_HEIGHT
    }

    /// Text area of the current message box.
    #[must_use]
    pub fn text_area(&self, has_face: bool) -> TextArea {
        let area = TextArea::new(self.page.width - self.config.window_padding * 2.0)
            .with_padding(self.config.padding_left, self.config.padding_right);
        if has_face {
            area.with_face(self.config.face_width)
                .with_origin(self.config.face_width + FACE_SPACING)
        } else {
            area
        }
    }

    /// Normalize line breaks, then wrap if word wrap is on.
    #[must_use]
    pub fn prepare_text<M: TextMeasurer + ?Sized>(
        &self,
        text: &str,
        area: &TextArea,
        measurer: &M,
    ) -> String {
        let text = normalize_line_breaks(text);
        if self.style.word_wrap() {
            self.wrap(&text, area, measurer)
        } else {
            text.into_owned()
        }
    }

    fn wrap<M: TextMeasurer + ?Sized>(&self, text: &str, area: &TextArea, measurer: &M) -> String {
        let width = effective_wrap_width(
            Some(area.wrap_width()),
            area.inner_width,
            self.config.wrap_width_percent,
        );
        let measurer = self.measurer(measurer);
        LineWrapper::new(&measurer, width).wrap_to_string(text)
    }

    /// The host measurer with the configured icon width.
    fn measurer<'m, M: TextMeasurer + ?Sized>(&self, measurer: &'m M) -> IconWidthOverride<'m, M> {
        IconWidthOverride::new(measurer, self.config.icon_width)
    }

    /// Prepare help window text for a help box `box_width` pixels wide.
    #[must_use]
    pub fn prepare_help<M: TextMeasurer + ?Sized>(
        &self,
        text: &str,
        box_width: f32,
        measurer: &M,
    ) -> String {
        let wrap = self.config.word_wrap_help_window;
        let text = prepare_help_text(text, wrap);
        if wrap {
            let area = TextArea::new(box_width - self.config.window_padding * 2.0)
                .with_padding(self.config.padding_left, self.config.padding_right);
            self.wrap(&text, &area, measurer)
        } else {
            text
        }
    }

    /// Lay out a whole message: starts a page, wraps, paginates and places
    /// the box.
    ///
    /// `tracked` is the screen position of the character named by the
    /// adaptive target, if the host has one.
    pub fn layout_message<M: TextMeasurer + ?Sized>(
        &mut self,
        message: &Message,
        measurer: &M,
        tracked: Option<ScreenTarget>,
    ) -> MessageLayout {
        let page = self.start_page();
        let area = self.text_area(message.header.has_face());
        let text = self.prepare_text(&message.text(), &area, measurer);

        let metrics = LineMetrics {
            line_height: self.config.line_height,
            x_adjust: self.config.text_x_adjust,
            y_adjust: self.config.text_y_adjust,
        };
        let measurer = self.measurer(measurer);
        let pages = TextLayout::new(&measurer, area)
            .align(self.style.text_align())
            .metrics(metrics)
            .lines_per_page(self.style.line_count() as usize)
            .layout(&text);

        let band = resolve_vertical_band(
            message.header.band,
            page.height,
            self.style.adaptive_target(),
            tracked,
            self.screen.height,
            self.in_combat,
        );
        let anchor = self.style.position();
        let rect = BoxRect {
            x: box_x(anchor, page.width, self.screen.width),
            y: box_y(band, page.height, self.screen.height),
            width: page.width,
            height: page.height,
        };

        MessageLayout {
            pages,
            rect,
            band,
            anchor,
            tone: page.tone,
            instant_text: self.style.instant_text(),
        }
    }

    /// Y for a choice list of `list_height` shown with the message at
    /// `message_rect`.
    #[must_use]
    pub fn choice_list_y(&self, proposed_y: f32, list_height: f32, message_rect: &BoxRect) -> f32 {
        choice_list_y(proposed_y, list_height, message_rect.y, self.screen.height)
    }

    /// Height of a list window showing `rows` selectable items.
    #[must_use]
    pub fn list_height(&self, rows: u32) -> f32 {
        fitting_height(rows, self.config.item_height, self.config.window_padding)
    }

    /// Width of the speaker name box given the host's own width for it.
    #[must_use]
    pub fn name_box_width(&self, base_width: f32) -> f32 {
        name_box_width(
            base_width,
            self.config.padding_left,
            self.config.padding_right,
            self.screen.width,
        )
    }
}
