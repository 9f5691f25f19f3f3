//! Block padding model.
//!
//! Padding is read from the computed style of the nearest block and edited
//! one side at a time. Values are whole pixels and never negative.

use crate::node::DomNode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

impl Side {
    pub const ALL: [Side; 4] = [Side::Top, Side::Right, Side::Bottom, Side::Left];

    /// CSS property for this side, e.g. `padding-top`.
    pub fn css_property(&self) -> &'static str {
        match self {
            Side::Top => "padding-top",
            Side::Right => "padding-right",
            Side::Bottom => "padding-bottom",
            Side::Left => "padding-left",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Side::Top => "top",
            Side::Right => "right",
            Side::Bottom => "bottom",
            Side::Left => "left",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddingStep {
    Increase,
    Decrease,
}

/// Padding of the block nearest the cursor, in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaddingBox {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl PaddingBox {
    pub fn new(top: u32, right: u32, bottom: u32, left: u32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Top => self.top,
            Side::Right => self.right,
            Side::Bottom => self.bottom,
            Side::Left => self.left,
        }
    }

    pub fn set(&mut self, side: Side, value: u32) {
        match side {
            Side::Top => self.top = value,
            Side::Right => self.right = value,
            Side::Bottom => self.bottom = value,
            Side::Left => self.left = value,
        }
    }

    /// The value one side would take after a step. Decrease floors at zero.
    pub fn stepped(&self, side: Side, step: PaddingStep) -> u32 {
        let current = self.get(side);
        match step {
            PaddingStep::Increase => current.saturating_add(1),
            PaddingStep::Decrease => current.saturating_sub(1),
        }
    }

    /// Read the computed padding of an element.
    pub fn read<N: DomNode>(node: &N) -> Self {
        let mut padding = Self::default();
        for side in Side::ALL {
            let value = node
                .computed_style(side.css_property())
                .map(|v| parse_css_int(&v))
                .unwrap_or(0);
            padding.set(side, value);
        }
        padding
    }
}

/// Leading-integer parse of a CSS length, `"12.5px"` -> 12.
///
/// Anything unparsable, and any negative value, reads as zero.
pub fn parse_css_int(value: &str) -> u32 {
    let value = value.trim_start();
    let (negative, digits) = match value.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, value.strip_prefix('+').unwrap_or(value)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if negative || end == 0 {
        return 0;
    }
    digits[..end].parse().unwrap_or(u32::MAX)
}

/// Pixel length string for a padding value.
pub fn px(value: u32) -> String {
    format!("{}px", value)
}
