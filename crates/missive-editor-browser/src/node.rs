//! `DomNode` implementation over `web_sys::Node`.

use missive_editor_core::{DomNode, EditorError, NodeKind};
use wasm_bindgen::JsCast;

/// A live DOM node. Equality is node identity.
#[derive(Debug, Clone)]
pub struct BrowserNode(pub web_sys::Node);

impl BrowserNode {
    pub fn new(node: impl Into<web_sys::Node>) -> Self {
        Self(node.into())
    }

    pub fn as_element(&self) -> Option<&web_sys::Element> {
        self.0.dyn_ref::<web_sys::Element>()
    }

    pub fn as_html_element(&self) -> Option<&web_sys::HtmlElement> {
        self.0.dyn_ref::<web_sys::HtmlElement>()
    }
}

impl PartialEq for BrowserNode {
    fn eq(&self, other: &Self) -> bool {
        self.0.is_same_node(Some(&other.0))
    }
}

impl From<web_sys::Node> for BrowserNode {
    fn from(node: web_sys::Node) -> Self {
        Self(node)
    }
}

impl DomNode for BrowserNode {
    fn kind(&self) -> NodeKind {
        match self.0.node_type() {
            web_sys::Node::ELEMENT_NODE => NodeKind::Element,
            web_sys::Node::TEXT_NODE => NodeKind::Text,
            _ => NodeKind::Other,
        }
    }

    fn parent_node(&self) -> Option<Self> {
        self.0.parent_node().map(BrowserNode)
    }

    fn computed_style(&self, property: &str) -> Option<String> {
        let element = self.as_element()?;
        let window = web_sys::window()?;
        let style = window.get_computed_style(element).ok()??;
        style.get_property_value(property).ok()
    }

    fn set_style(&self, property: &str, value: &str) -> Result<(), EditorError> {
        let element = self.as_html_element().ok_or(EditorError::NotAnElement)?;
        element
            .style()
            .set_property(property, value)
            .map_err(|e| EditorError::Dom(format!("set_property({property}) failed: {:?}", e)))
    }

    fn remove_attribute(&self, name: &str) -> Result<(), EditorError> {
        let element = self.as_element().ok_or(EditorError::NotAnElement)?;
        element
            .remove_attribute(name)
            .map_err(|e| EditorError::Dom(format!("remove_attribute({name}) failed: {:?}", e)))
    }
}
