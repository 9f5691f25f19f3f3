//! The editor controller: command dispatch, change notification and
//! resynchronization around a rich-text engine and its editable surface.
//!
//! Every mutating operation follows the same tail: refocus the surface, hand
//! the serialized HTML to the change callback, then resynchronize the
//! toolbar state from the live selection.

use crate::actions::{Command, EditorAction};
use crate::config::EditorConfig;
use crate::node::{DomNode, find_nearest_block};
use crate::padding::{PaddingBox, PaddingStep, Side, px};
use crate::panels::{Panel, PanelSet};
use crate::platform::{EditableSurface, PromptPlatform, RichTextEngine};
use crate::state::EditorState;
use crate::surface::{
    SENTINEL_FONT_SIZE, apply_default_padding, rewrite_sentinel_font_size, seed_initial_content,
};
use crate::sync::synchronize;

pub const LINK_PROMPT: &str = "Enter URL:";
pub const IMAGE_PROMPT: &str = "Enter image URL:";

/// Host callback receiving the serialized HTML after every mutation.
pub type ChangeCallback = Box<dyn FnMut(&str)>;

pub struct EditorController<E, S> {
    engine: E,
    surface: S,
    state: EditorState,
    panels: PanelSet,
    on_change: Option<ChangeCallback>,
}

impl<E, S> EditorController<E, S>
where
    E: RichTextEngine,
    S: EditableSurface<Node = E::Node>,
{
    pub fn new(engine: E, surface: S) -> Self {
        Self {
            engine,
            surface,
            state: EditorState::default(),
            panels: PanelSet::default(),
            on_change: None,
        }
    }

    pub fn with_change_callback(mut self, callback: impl FnMut(&str) + 'static) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    pub fn set_change_callback(&mut self, callback: Option<ChangeCallback>) {
        self.on_change = callback;
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn panels(&self) -> PanelSet {
        self.panels
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Seed initial content (only into an empty surface) and apply the default padding.
    ///
    /// Safe to call again: existing content is never overwritten.
    pub fn mount(&mut self, config: &EditorConfig) {
        match seed_initial_content(&self.surface, &config.initial_value) {
            Ok(true) => tracing::debug!("seeded editor with initial content"),
            Ok(false) => {}
            Err(e) => tracing::debug!("skipping initial content: {}", e),
        }
        if let Err(e) = apply_default_padding(&self.surface, &config.default_padding) {
            tracing::debug!("skipping default padding: {}", e);
        }
        self.synchronize();
    }

    /// Re-read the selection state.
    pub fn synchronize(&mut self) {
        self.state = synchronize(&self.engine, &self.surface, &self.state);
    }

    /// The surface content changed (typing, paste, native command).
    pub fn handle_input(&mut self) {
        self.notify_change();
        self.synchronize();
    }

    pub fn toggle_panel(&mut self, panel: Panel) {
        self.panels.toggle(panel);
    }

    pub fn close_panel(&mut self, panel: Panel) {
        self.panels.close(panel);
    }

    /// Close open panels whose anchor does not contain a pointer-down target.
    pub fn dismiss_panels(&mut self, anchor_contains: impl FnMut(Panel) -> bool) -> Vec<Panel> {
        self.panels.dismiss_outside(anchor_contains)
    }

    /// Execute a toolbar action.
    ///
    /// `prompt` is only consulted by the link and image-URL actions.
    pub fn execute<P: PromptPlatform>(&mut self, action: &EditorAction, prompt: &P) {
        tracing::debug!(target: "missive::dispatch", ?action, "executing action");
        match action {
            EditorAction::Exec { command, value } => self.exec(*command, value.as_deref()),
            EditorAction::FormatBlock(format) => self.exec(Command::FormatBlock, Some(format.tag())),
            EditorAction::SetFontFamily(family) => self.exec(Command::FontName, Some(family.as_str())),
            EditorAction::SetFontSize(size) => self.set_font_size(size),
            EditorAction::SetColor(color) => {
                self.exec(Command::ForeColor, Some(color.as_str()));
                self.panels.close(Panel::Color);
            }
            EditorAction::AdjustPadding { side, step } => self.adjust_padding(*side, *step),
            EditorAction::InsertVariable(token) => self.insert_variable(token),
            EditorAction::InsertLink => {
                if let Some(url) = prompt_non_empty(prompt, LINK_PROMPT) {
                    self.exec(Command::CreateLink, Some(url.as_str()));
                }
            }
            EditorAction::InsertImageUrl => {
                if let Some(url) = prompt_non_empty(prompt, IMAGE_PROMPT) {
                    self.exec(Command::InsertImage, Some(url.as_str()));
                }
            }
            EditorAction::InsertImage { src } => {
                if !src.is_empty() {
                    self.exec(Command::InsertImage, Some(src.as_str()));
                }
            }
        }
    }

    /// Dispatch a native command unmodified, then run the mutation tail.
    fn exec(&mut self, command: Command, value: Option<&str>) {
        self.run_native(command, value);
        self.after_mutation();
    }

    fn run_native(&self, command: Command, value: Option<&str>) {
        match self.engine.execute(command, value) {
            Ok(true) => {}
            Ok(false) => {
                tracing::trace!(target: "missive::dispatch", %command, "engine declined command")
            }
            Err(e) => tracing::warn!(%command, "command failed: {}", e),
        }
    }

    /// Apply an arbitrary pixel size through the engine's fixed ordinal scale.
    fn set_font_size(&mut self, size: &str) {
        self.run_native(Command::FontSize, Some(SENTINEL_FONT_SIZE));
        let rewritten = rewrite_sentinel_font_size(&self.surface, size);
        tracing::trace!(target: "missive::dispatch", size, rewritten, "applied font size");
        self.after_mutation();
    }

    /// Step one padding side of the block nearest the cursor.
    fn adjust_padding(&mut self, side: Side, step: PaddingStep) {
        let Some(block) = self.selected_block() else {
            tracing::trace!(target: "missive::dispatch", "no block at selection, padding unchanged");
            return;
        };
        // Step from the block's live padding, not the last synchronized one.
        let mut padding = PaddingBox::read(&block);
        let value = padding.stepped(side, step);
        if let Err(e) = block.set_style(side.css_property(), &px(value)) {
            tracing::warn!(side = side.label(), "padding update failed: {}", e);
            return;
        }
        padding.set(side, value);
        self.state.padding = padding;
        self.after_mutation();
    }

    fn insert_variable(&mut self, token: &str) {
        self.run_native(Command::InsertText, Some(token));
        self.panels.close(Panel::Variables);
        self.after_mutation();
    }

    fn selected_block(&self) -> Option<E::Node> {
        let anchor = self.engine.selection_anchor()?;
        let root = self.surface.root()?;
        find_nearest_block(&anchor, &root)
    }

    fn after_mutation(&mut self) {
        self.surface.focus();
        self.handle_input();
    }

    fn notify_change(&mut self) {
        let Some(callback) = self.on_change.as_mut() else {
            return;
        };
        if let Some(html) = self.surface.inner_html() {
            callback(&html);
        }
    }
}

fn prompt_non_empty<P: PromptPlatform>(prompt: &P, message: &str) -> Option<String> {
    prompt.prompt(message).filter(|url| !url.is_empty())
}
