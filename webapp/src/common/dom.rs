use anyhow::{self, Result};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, NodeList, ScrollBehavior, ScrollToOptions, Window};

// web-sys reports every failure as an opaque JsValue, so we just carry its debug output
pub fn js_err(err: JsValue) -> anyhow::Error {
    anyhow::Error::msg(format!("{err:?}"))
}

// non-html nodes (svg, text) are silently skipped
pub fn html_elements(list: NodeList) -> Vec<HtmlElement> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

pub fn select<T: JsCast>(document: &Document, selector: &str) -> Result<Option<T>> {
    Ok(document
        .query_selector(selector)
        .map_err(js_err)?
        .and_then(|element| element.dyn_into::<T>().ok()))
}

pub fn select_all(document: &Document, selector: &str) -> Result<Vec<HtmlElement>> {
    document
        .query_selector_all(selector)
        .map(html_elements)
        .map_err(js_err)
}

pub fn select_all_within(element: &Element, selector: &str) -> Result<Vec<HtmlElement>> {
    element
        .query_selector_all(selector)
        .map(html_elements)
        .map_err(js_err)
}

pub fn set_marker(element: &Element, class: &str, present: bool) -> Result<()> {
    element
        .class_list()
        .toggle_with_force(class, present)
        .map(|_| ())
        .map_err(js_err)
}

pub fn set_style(element: &HtmlElement, property: &str, value: &str) -> Result<()> {
    element
        .style()
        .set_property(property, value)
        .map_err(js_err)
}

pub fn smooth_scroll_to(window: &Window, top: f64) {
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);

    window.scroll_to_with_scroll_to_options(&options);
}

pub fn create_html(document: &Document, tag: &str) -> Result<HtmlElement> {
    document
        .create_element(tag)
        .map_err(js_err)?
        .dyn_into::<HtmlElement>()
        .map_err(|_| anyhow::Error::msg(format!("<{tag}> is not an html element")))
}

pub fn append_to_body(document: &Document, element: &Element) -> Result<()> {
    let body = document
        .body()
        .ok_or_else(|| anyhow::Error::msg("document has no body"))?;

    body.append_child(element).map(|_| ()).map_err(js_err)
}

// add a <style> block to <head> unless one with this id is already there
pub fn inject_stylesheet(document: &Document, id: &str, css: &str) -> Result<()> {
    if document.get_element_by_id(id).is_some() {
        return Ok(());
    }

    let head = document
        .head()
        .ok_or_else(|| anyhow::Error::msg("document has no head"))?;

    let style = document.create_element("style").map_err(js_err)?;
    style.set_id(id);
    style.set_text_content(Some(css));

    head.append_child(&style).map(|_| ()).map_err(js_err)
}
