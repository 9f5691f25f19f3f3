//! Dropdown panel visibility.
//!
//! Each panel toggles independently. A pointer-down anywhere in the page
//! closes every open panel whose anchor region does not contain the event
//! target; panels never close each other.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Panel {
    Color,
    Padding,
    Variables,
}

impl Panel {
    pub const ALL: [Panel; 3] = [Panel::Color, Panel::Padding, Panel::Variables];
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PanelSet {
    color: bool,
    padding: bool,
    variables: bool,
}

impl PanelSet {
    fn slot(&mut self, panel: Panel) -> &mut bool {
        match panel {
            Panel::Color => &mut self.color,
            Panel::Padding => &mut self.padding,
            Panel::Variables => &mut self.variables,
        }
    }

    pub fn is_open(&self, panel: Panel) -> bool {
        match panel {
            Panel::Color => self.color,
            Panel::Padding => self.padding,
            Panel::Variables => self.variables,
        }
    }

    pub fn toggle(&mut self, panel: Panel) {
        let slot = self.slot(panel);
        *slot = !*slot;
    }

    pub fn close(&mut self, panel: Panel) {
        *self.slot(panel) = false;
    }

    /// Handle a pointer-down somewhere in the page.
    ///
    /// `anchor_contains` answers whether the panel's anchor region contains
    /// the event target. Returns the panels that were closed.
    pub fn dismiss_outside(&mut self, mut anchor_contains: impl FnMut(Panel) -> bool) -> Vec<Panel> {
        let mut closed = Vec::new();
        for panel in Panel::ALL {
            if self.is_open(panel) && !anchor_contains(panel) {
                self.close(panel);
                closed.push(panel);
            }
        }
        if !closed.is_empty() {
            tracing::trace!(target: "missive::panels", ?closed, "dismissed panels on outside pointer-down");
        }
        closed
    }
}
