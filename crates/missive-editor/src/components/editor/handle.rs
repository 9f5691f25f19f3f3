//! Shared controller access for the component's event handlers.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use dioxus::prelude::*;
use missive_editor_browser::{BrowserController, BrowserPrompt, EditorAction, EditorState, PanelSet};

/// The controller plus the signals that mirror its state into the view.
#[derive(Clone)]
pub(crate) struct EditorHandle {
    controller: Rc<RefCell<BrowserController>>,
    state: Signal<EditorState>,
    panels: Signal<PanelSet>,
}

impl PartialEq for EditorHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.controller, &other.controller)
    }
}

impl EditorHandle {
    pub(crate) fn new(
        controller: BrowserController,
        state: Signal<EditorState>,
        panels: Signal<PanelSet>,
    ) -> Self {
        Self {
            controller: Rc::new(RefCell::new(controller)),
            state,
            panels,
        }
    }

    /// Run `f` against the controller and publish the resulting state.
    pub(crate) fn run(&self, f: impl FnOnce(&mut BrowserController)) {
        run_and_publish(&self.controller, self.state, self.panels, f);
    }

    pub(crate) fn execute(&self, action: EditorAction) {
        self.run(|controller| controller.execute(&action, &BrowserPrompt));
    }

    /// A handle that does not keep the controller alive.
    pub(crate) fn downgrade(&self) -> WeakEditorHandle {
        WeakEditorHandle {
            controller: Rc::downgrade(&self.controller),
            state: self.state,
            panels: self.panels,
        }
    }
}

/// Handle held by asynchronous work that may outlive the editor.
#[derive(Clone)]
pub(crate) struct WeakEditorHandle {
    controller: Weak<RefCell<BrowserController>>,
    state: Signal<EditorState>,
    panels: Signal<PanelSet>,
}

impl WeakEditorHandle {
    /// Run `f` if the editor still exists. Returns whether it did.
    pub(crate) fn run(&self, f: impl FnOnce(&mut BrowserController)) -> bool {
        let Some(controller) = self.controller.upgrade() else {
            tracing::debug!(target: "missive::ui", "editor torn down, dropping completion");
            return false;
        };
        run_and_publish(&controller, self.state, self.panels, f);
        true
    }
}

/// Calls arriving while the controller is already borrowed are dropped. The
/// engine fires `input` synchronously from inside a command, and the outer
/// dispatch notifies and resynchronizes on its own afterwards.
fn run_and_publish(
    controller: &RefCell<BrowserController>,
    mut state: Signal<EditorState>,
    mut panels: Signal<PanelSet>,
    f: impl FnOnce(&mut BrowserController),
) {
    let (next_state, next_panels) = {
        let Ok(mut controller) = controller.try_borrow_mut() else {
            tracing::trace!(target: "missive::ui", "controller busy, skipping nested call");
            return;
        };
        f(&mut controller);
        (controller.state().clone(), controller.panels())
    };
    if *state.peek() != next_state {
        state.set(next_state);
    }
    if *panels.peek() != next_panels {
        panels.set(next_panels);
    }
}
