//! In-memory tree, engine and surface for exercising the editor logic
//! without a browser.

use std::cell::RefCell;
use std::rc::Rc;

use crate::actions::Command;
use crate::error::EditorError;
use crate::node::{DomNode, NodeKind};
use crate::platform::{EditableSurface, RichTextEngine};

struct NodeData {
    kind: NodeKind,
    tag: String,
    parent: Option<usize>,
    attrs: Vec<(String, String)>,
    style: Vec<(String, String)>,
}

#[derive(Default)]
struct Inner {
    nodes: Vec<NodeData>,
    html: String,
    anchor: Option<usize>,
    active: Vec<Command>,
    values: Vec<(Command, String)>,
    executed: Vec<(Command, Option<String>)>,
    focus_count: usize,
}

impl Inner {
    fn push(&mut self, kind: NodeKind, tag: &str, parent: Option<usize>) -> usize {
        self.nodes.push(NodeData {
            kind,
            tag: tag.to_string(),
            parent,
            attrs: Vec::new(),
            style: Vec::new(),
        });
        self.nodes.len() - 1
    }

    fn is_attached(&self, mut id: usize) -> bool {
        loop {
            if id == 0 {
                return true;
            }
            match self.nodes[id].parent {
                Some(parent) => id = parent,
                None => return false,
            }
        }
    }
}

#[derive(Clone)]
pub(crate) struct MemDom(Rc<RefCell<Inner>>);

impl MemDom {
    /// A tree holding only the surface root, a `div`.
    pub fn new() -> Self {
        let mut inner = Inner::default();
        inner.push(NodeKind::Element, "div", None);
        Self(Rc::new(RefCell::new(inner)))
    }

    fn node(&self, id: usize) -> MemNode {
        MemNode {
            dom: self.clone(),
            id,
        }
    }

    pub fn root(&self) -> MemNode {
        self.node(0)
    }

    pub fn element(&self, parent: &MemNode, tag: &str) -> MemNode {
        let id = self.0.borrow_mut().push(NodeKind::Element, tag, Some(parent.id));
        self.node(id)
    }

    pub fn text(&self, parent: &MemNode, content: &str) -> MemNode {
        let id = self.0.borrow_mut().push(NodeKind::Text, "#text", Some(parent.id));
        self.0.borrow_mut().html.push_str(content);
        self.node(id)
    }

    /// An element outside the surface.
    pub fn detached(&self, tag: &str) -> MemNode {
        let id = self.0.borrow_mut().push(NodeKind::Element, tag, None);
        self.node(id)
    }

    pub fn select(&self, node: &MemNode) {
        self.0.borrow_mut().anchor = Some(node.id);
    }

    pub fn set_active(&self, command: Command) {
        self.0.borrow_mut().active.push(command);
    }

    pub fn set_value(&self, command: Command, value: &str) {
        let mut inner = self.0.borrow_mut();
        inner.values.retain(|(c, _)| *c != command);
        inner.values.push((command, value.to_string()));
    }

    pub fn set_html(&self, html: &str) {
        self.0.borrow_mut().html = html.to_string();
    }

    pub fn html(&self) -> String {
        self.0.borrow().html.clone()
    }

    pub fn executed(&self) -> Vec<(Command, Option<String>)> {
        self.0.borrow().executed.clone()
    }

    pub fn focus_count(&self) -> usize {
        self.0.borrow().focus_count
    }

    pub fn engine(&self) -> MemEngine {
        MemEngine { dom: self.clone() }
    }

    pub fn surface(&self) -> MemSurface {
        MemSurface {
            dom: self.clone(),
            mounted: true,
        }
    }

    pub fn unmounted_surface(&self) -> MemSurface {
        MemSurface {
            dom: self.clone(),
            mounted: false,
        }
    }
}

#[derive(Clone)]
pub(crate) struct MemNode {
    dom: MemDom,
    id: usize,
}

impl MemNode {
    pub fn tag(&self) -> String {
        self.dom.0.borrow().nodes[self.id].tag.clone()
    }

    pub fn attribute(&self, name: &str) -> Option<String> {
        let inner = self.dom.0.borrow();
        inner.nodes[self.id]
            .attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.clone())
    }

    pub fn inline_style(&self, property: &str) -> Option<String> {
        let inner = self.dom.0.borrow();
        inner.nodes[self.id]
            .style
            .iter()
            .find(|(k, _)| k == property)
            .map(|(_, v)| v.clone())
    }
}

impl PartialEq for MemNode {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && Rc::ptr_eq(&self.dom.0, &other.dom.0)
    }
}

impl std::fmt::Debug for MemNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "MemNode({}, {})", self.id, self.tag())
    }
}

fn default_display(tag: &str) -> &'static str {
    match tag {
        "li" => "list-item",
        "div" | "p" | "ul" | "ol" | "h1" | "h2" | "blockquote" => "block",
        _ => "inline",
    }
}

impl DomNode for MemNode {
    fn kind(&self) -> NodeKind {
        self.dom.0.borrow().nodes[self.id].kind
    }

    fn parent_node(&self) -> Option<Self> {
        let parent = self.dom.0.borrow().nodes[self.id].parent?;
        Some(self.dom.node(parent))
    }

    fn computed_style(&self, property: &str) -> Option<String> {
        if !self.is_element() {
            return None;
        }
        if let Some(value) = self.inline_style(property) {
            return Some(value);
        }
        match property {
            "display" => Some(default_display(&self.tag()).to_string()),
            "font-size" => Some(
                self.parent_node()
                    .and_then(|p| p.computed_style("font-size"))
                    .unwrap_or_else(|| "16px".to_string()),
            ),
            p if p.starts_with("padding-") => Some("0px".to_string()),
            _ => None,
        }
    }

    fn set_style(&self, property: &str, value: &str) -> Result<(), EditorError> {
        if !self.is_element() {
            return Err(EditorError::NotAnElement);
        }
        let properties: Vec<&str> = if property == "padding" {
            vec!["padding-top", "padding-right", "padding-bottom", "padding-left"]
        } else {
            vec![property]
        };
        let mut inner = self.dom.0.borrow_mut();
        let style = &mut inner.nodes[self.id].style;
        for property in properties {
            style.retain(|(k, _)| k != property);
            style.push((property.to_string(), value.to_string()));
        }
        Ok(())
    }

    fn remove_attribute(&self, name: &str) -> Result<(), EditorError> {
        let mut inner = self.dom.0.borrow_mut();
        inner.nodes[self.id].attrs.retain(|(k, _)| k != name);
        Ok(())
    }
}

pub(crate) struct MemEngine {
    dom: MemDom,
}

impl RichTextEngine for MemEngine {
    type Node = MemNode;

    fn execute(&self, command: Command, value: Option<&str>) -> Result<bool, EditorError> {
        let mut inner = self.dom.0.borrow_mut();
        inner
            .executed
            .push((command, value.map(ToString::to_string)));

        match command {
            Command::InsertText => {
                inner.html.push_str(value.unwrap_or_default());
            }
            Command::FontSize => {
                // Wrap the anchor text in <font size=...> like the browser does.
                let Some(anchor) = inner.anchor else {
                    return Ok(false);
                };
                let parent = inner.nodes[anchor].parent;
                let font = inner.push(NodeKind::Element, "font", parent);
                inner.nodes[font]
                    .attrs
                    .push(("size".to_string(), value.unwrap_or_default().to_string()));
                inner.nodes[anchor].parent = Some(font);
            }
            command if command.tracked_index().is_some() => {
                if let Some(i) = inner.active.iter().position(|c| *c == command) {
                    inner.active.remove(i);
                } else {
                    inner.active.push(command);
                }
            }
            _ => {}
        }
        Ok(true)
    }

    fn query_active(&self, command: Command) -> bool {
        self.dom.0.borrow().active.contains(&command)
    }

    fn query_value(&self, command: Command) -> Option<String> {
        let inner = self.dom.0.borrow();
        inner
            .values
            .iter()
            .find(|(c, _)| *c == command)
            .map(|(_, v)| v.clone())
    }

    fn selection_anchor(&self) -> Option<MemNode> {
        let anchor = self.dom.0.borrow().anchor?;
        Some(self.dom.node(anchor))
    }
}

pub(crate) struct MemSurface {
    dom: MemDom,
    mounted: bool,
}

/// Parse `tag[attr="value"]`, the only selector shape the editor uses.
fn parse_selector(selector: &str) -> Option<(&str, &str, &str)> {
    let (tag, rest) = selector.split_once('[')?;
    let (attr, value) = rest.strip_suffix(']')?.split_once('=')?;
    Some((tag, attr, value.trim_matches('"')))
}

impl EditableSurface for MemSurface {
    type Node = MemNode;

    fn root(&self) -> Option<MemNode> {
        self.mounted.then(|| self.dom.root())
    }

    fn inner_html(&self) -> Option<String> {
        self.mounted.then(|| self.dom.html())
    }

    fn set_inner_html(&self, html: &str) -> Result<(), EditorError> {
        if !self.mounted {
            return Err(EditorError::NotMounted);
        }
        self.dom.set_html(html);
        Ok(())
    }

    fn inner_text(&self) -> Option<String> {
        let html = self.inner_html()?;
        let mut text = String::new();
        let mut in_tag = false;
        for c in html.chars() {
            match c {
                '<' => in_tag = true,
                '>' => in_tag = false,
                c if !in_tag => text.push(c),
                _ => {}
            }
        }
        Some(text)
    }

    fn focus(&self) {
        if self.mounted {
            self.dom.0.borrow_mut().focus_count += 1;
        }
    }

    fn query_all(&self, selector: &str) -> Vec<MemNode> {
        let Some((tag, attr, value)) = parse_selector(selector) else {
            return Vec::new();
        };
        if !self.mounted {
            return Vec::new();
        }
        let inner = self.dom.0.borrow();
        let ids: Vec<usize> = (1..inner.nodes.len())
            .filter(|id| {
                let node = &inner.nodes[*id];
                node.tag == tag
                    && node.attrs.iter().any(|(k, v)| k == attr && v == value)
                    && inner.is_attached(*id)
            })
            .collect();
        drop(inner);
        ids.into_iter().map(|id| self.dom.node(id)).collect()
    }
}
