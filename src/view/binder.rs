//! Mounting items, empty states and error states into a `View`.

use super::icon::Icon;
use super::{Element, View};

/// Copy shown when a list has nothing to display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyState {
    pub title: &'static str,
    pub hint: &'static str,
}

pub const ERROR_HINT: &str = "Por favor, tente novamente mais tarde";

/// Template every item and mount the result in order, replacing whatever the
/// container held. No items mounts the empty state instead.
pub fn render<'a, T, I, F>(view: &mut View, container: &str, items: I, template: F, empty: &EmptyState)
where
    T: 'a,
    I: IntoIterator<Item = &'a T>,
    F: Fn(&T) -> Element,
{
    let nodes: Vec<Element> = items.into_iter().map(template).collect();
    if nodes.is_empty() {
        render_empty(view, container, empty);
    } else {
        view.mount(container, nodes);
    }
}

pub fn render_empty(view: &mut View, container: &str, empty: &EmptyState) {
    view.mount(container, vec![empty_node(empty)]);
}

pub fn render_error(view: &mut View, container: &str, title: &str) {
    view.mount(container, vec![error_node(title)]);
}

pub fn empty_node(empty: &EmptyState) -> Element {
    Element::new("div")
        .class("col-span-full text-center py-12")
        .attr("data-state", "empty")
        .attr("role", "status")
        .icon(Icon::Search, "w-16 h-16 mx-auto text-gray-300 mb-4")
        .child(Element::new("p").class("text-gray-500 font-medium").text(empty.title))
        .child(Element::new("p").class("text-sm text-gray-400 mt-1").text(empty.hint))
}

pub fn error_node(title: &str) -> Element {
    Element::new("div")
        .class("col-span-full p-6 bg-red-50 border border-red-200 rounded-lg text-center")
        .attr("data-state", "error")
        .attr("role", "alert")
        .child(Element::new("p").class("text-red-600 font-medium").text(title))
        .child(Element::new("p").class("text-sm text-red-500 mt-1").text(ERROR_HINT))
}
