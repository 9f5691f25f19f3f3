//! WASM browser tests for missive-editor-browser.
//!
//! Run with: `wasm-pack test --headless --firefox` or `--chrome`

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

use missive_editor_browser::{
    BrowserEngine, BrowserNode, BrowserSurface, DomNode, EditableSurface, EditorConfig,
    NodeKind, OutsidePointerListener, Panel, PanelAnchors, SelectionChangeListener, browser_controller, find_nearest_block,
    is_blank, read_file_as_data_url, rewrite_sentinel_font_size,
};

fn mount_fixture(id: &str, html: &str) -> web_sys::HtmlElement {
    let document = gloo_utils::document();
    if let Some(old) = document.get_element_by_id(id) {
        old.remove();
    }
    let element = document
        .create_element("div")
        .unwrap()
        .dyn_into::<web_sys::HtmlElement>()
        .unwrap();
    element.set_id(id);
    element.set_attribute("contenteditable", "true").unwrap();
    element.set_inner_html(html);
    document.body().unwrap().append_child(&element).unwrap();
    element
}

fn first(surface: &BrowserSurface, selector: &str) -> BrowserNode {
    surface.query_all(selector).into_iter().next().unwrap()
}

// === Surface ===

#[wasm_bindgen_test]
fn test_missing_surface_reads_as_unmounted() {
    let surface = BrowserSurface::new("missive-test-nowhere");
    assert!(surface.root().is_none());
    assert!(surface.inner_html().is_none());
    assert!(surface.query_all("p").is_empty());
    assert!(surface.set_inner_html("<p>x</p>").is_err());
}

#[wasm_bindgen_test]
fn test_surface_reads_and_writes_html() {
    mount_fixture("missive-test-surface", "<p>Hello</p>");
    let surface = BrowserSurface::new("missive-test-surface");
    assert_eq!(surface.inner_html().as_deref(), Some("<p>Hello</p>"));
    surface.set_inner_html("<p>Bye</p>").unwrap();
    assert_eq!(surface.inner_html().as_deref(), Some("<p>Bye</p>"));
    assert!(!is_blank(&surface));
}

#[wasm_bindgen_test]
fn test_sentinel_rewrite_on_live_dom() {
    mount_fixture(
        "missive-test-sentinel",
        r#"<p><font size="7">big</font> and <font size="3">normal</font></p>"#,
    );
    let surface = BrowserSurface::new("missive-test-sentinel");
    assert_eq!(rewrite_sentinel_font_size(&surface, "24px"), 1);
    let html = surface.inner_html().unwrap();
    assert!(html.contains(r#"<font style="font-size: 24px;">big</font>"#));
    assert!(html.contains(r#"<font size="3">normal</font>"#));
}

// === Nodes ===

#[wasm_bindgen_test]
fn test_node_kinds_and_identity() {
    mount_fixture("missive-test-nodes", "<p>text</p>");
    let surface = BrowserSurface::new("missive-test-nodes");
    let paragraph = first(&surface, "p");
    let text = BrowserNode(paragraph.0.first_child().unwrap());
    assert_eq!(paragraph.kind(), NodeKind::Element);
    assert_eq!(text.kind(), NodeKind::Text);
    assert_eq!(text.parent_node(), Some(paragraph.clone()));
    assert_ne!(text.parent_node(), surface.root());
}

#[wasm_bindgen_test]
fn test_nearest_block_on_live_dom() {
    mount_fixture(
        "missive-test-block",
        "<ul><li><b>item</b></li></ul><span>loose</span>",
    );
    let surface = BrowserSurface::new("missive-test-block");
    let root = surface.root().unwrap();

    let bold = first(&surface, "b");
    let text = BrowserNode(bold.0.first_child().unwrap());
    assert_eq!(find_nearest_block(&text, &root), Some(first(&surface, "li")));

    let span = first(&surface, "span");
    assert_eq!(find_nearest_block(&span, &root), Some(root));
}

#[wasm_bindgen_test]
fn test_set_style_updates_inline_padding() {
    mount_fixture("missive-test-style", "<p>pad me</p>");
    let surface = BrowserSurface::new("missive-test-style");
    let paragraph = first(&surface, "p");
    paragraph.set_style("padding-left", "8px").unwrap();
    assert_eq!(paragraph.computed_style("padding-left").as_deref(), Some("8px"));
}

// === Controller ===

#[wasm_bindgen_test]
fn test_controller_mount_seeds_and_pads() {
    mount_fixture("missive-test-mount", "");
    let mut controller = browser_controller("missive-test-mount");
    controller.mount(&EditorConfig::default().with_initial_value("<p>Hi {{firstName}}</p>"));

    let element = controller.surface().element().unwrap();
    assert_eq!(element.inner_html(), "<p>Hi {{firstName}}</p>");
    assert_eq!(element.style().get_property_value("padding").unwrap(), "24px");
}

#[wasm_bindgen_test]
fn test_controller_reports_changes() {
    use std::cell::RefCell;
    use std::rc::Rc;

    mount_fixture("missive-test-change", "<p>typed</p>");
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    let mut controller = browser_controller("missive-test-change")
        .with_change_callback(move |html| sink.borrow_mut().push(html.to_string()));
    controller.handle_input();
    assert_eq!(*seen.borrow(), vec!["<p>typed</p>".to_string()]);
}

#[wasm_bindgen_test]
fn test_engine_without_selection_has_no_anchor_in_surface() {
    use missive_editor_browser::RichTextEngine;

    mount_fixture("missive-test-engine", "<p>idle</p>");
    let surface = BrowserSurface::new("missive-test-engine");
    let engine = BrowserEngine::new();
    if let Some(selection) = web_sys::window().unwrap().get_selection().unwrap() {
        selection.remove_all_ranges().unwrap();
    }
    let anchor = engine.selection_anchor();
    assert!(anchor.is_none());
    assert!(surface.root().is_some());
}

// === Panels ===

#[wasm_bindgen_test]
fn test_panel_anchor_containment() {
    let document = gloo_utils::document();
    let anchors = PanelAnchors::for_editor("missive-test-anchor");
    mount_fixture(&anchors.color, "<button>swatch</button>");
    mount_fixture("missive-test-elsewhere", "");

    let button = document
        .query_selector(&format!("#{} button", anchors.color))
        .unwrap()
        .unwrap();
    let elsewhere = document.get_element_by_id("missive-test-elsewhere").unwrap();

    assert!(anchors.contains(Panel::Color, &button));
    assert!(!anchors.contains(Panel::Color, &elsewhere));
    // Padding anchor is not in the document.
    assert!(!anchors.contains(Panel::Padding, &button));
}

#[wasm_bindgen_test]
fn test_outside_listener_stops_after_drop() {
    use std::cell::Cell;
    use std::rc::Rc;

    let target = mount_fixture("missive-test-listener", "");
    let hits = Rc::new(Cell::new(0));
    let counter = hits.clone();
    let listener = OutsidePointerListener::subscribe(move |_| counter.set(counter.get() + 1)).unwrap();

    let init = web_sys::MouseEventInit::new();
    init.set_bubbles(true);
    let event = web_sys::MouseEvent::new_with_mouse_event_init_dict("mousedown", &init).unwrap();
    target.dispatch_event(&event).unwrap();
    assert_eq!(hits.get(), 1);

    drop(listener);
    target.dispatch_event(&event).unwrap();
    assert_eq!(hits.get(), 1);
}

#[wasm_bindgen_test]
fn test_selection_listener_stops_after_drop() {
    use std::cell::Cell;
    use std::rc::Rc;

    let document = gloo_utils::document();
    let hits = Rc::new(Cell::new(0));
    let counter = hits.clone();
    let listener = SelectionChangeListener::subscribe(move || counter.set(counter.get() + 1)).unwrap();

    let event = web_sys::Event::new("selectionchange").unwrap();
    document.dispatch_event(&event).unwrap();
    assert_eq!(hits.get(), 1);

    drop(listener);
    document.dispatch_event(&event).unwrap();
    assert_eq!(hits.get(), 1);
}

// === Files ===

#[wasm_bindgen_test]
async fn test_read_file_as_data_url() {
    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(&b"GIF89a"[..]));
    let file = web_sys::File::new_with_u8_array_sequence(&parts, "pixel.gif").unwrap();
    let url = read_file_as_data_url(&file).await.unwrap();
    assert_eq!(url, "data:image/gif;base64,R0lGODlh");
}
