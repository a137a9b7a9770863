//! User interactions and the controllers that turn them into re-renders.
//!
//! Handlers run synchronously against the page's `View` and read their state
//! fresh on every call, so replaying interactions in any order is safe.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::model::ItemId;
use crate::query::{select, Category, Query, Searchable};
use crate::view::binder::{render, EmptyState};
use crate::view::{Element, Node, View};

/// Class that hides a collapsible details node.
pub const HIDDEN: &str = "hidden";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Interaction {
    CategoryClicked(String),
    SearchInput(String),
    ToggleDetails(ItemId),
}

pub trait Controller {
    /// Apply one interaction. Returns false when nothing handled it.
    fn handle(&mut self, interaction: &Interaction, view: &mut View) -> bool;
}

/// Controller for pages without interactive controls.
#[derive(Debug, Clone, Copy, Default)]
pub struct Inert;

impl Controller for Inert {
    fn handle(&mut self, interaction: &Interaction, _view: &mut View) -> bool {
        debug!(?interaction, "page has no interactive controls");
        false
    }
}

// ── Category filter + search ──

/// Per-page wiring for a `FilterController`.
pub struct FilterWiring<T> {
    pub filters_container: &'static str,
    pub items_container: &'static str,
    /// Category control for a label; the flag marks the active one.
    pub control: fn(&str, bool) -> Element,
    pub template: fn(&T) -> Element,
    pub empty: EmptyState,
}

pub struct FilterController<T> {
    items: Vec<T>,
    categories: Vec<String>,
    query: Query,
    wiring: FilterWiring<T>,
}

impl<T: Searchable> FilterController<T> {
    pub fn new(items: Vec<T>, categories: Vec<String>, wiring: FilterWiring<T>) -> Self {
        FilterController {
            items,
            categories,
            query: Query::new(Category::All, ""),
            wiring,
        }
    }

    /// Render the category controls and the items for the current query.
    pub fn refresh(&self, view: &mut View) {
        self.render_controls(view);
        self.render_items(view);
    }

    fn render_controls(&self, view: &mut View) {
        let active = self.query.category.label();
        let controls = self
            .categories
            .iter()
            .map(|label| (self.wiring.control)(label, label == active))
            .collect();
        view.mount(self.wiring.filters_container, controls);
    }

    fn render_items(&self, view: &mut View) {
        let visible = select(&self.items, &self.query);
        debug!(
            category = self.query.category.label(),
            term = self.query.term(),
            matches = visible.len(),
            "filtering"
        );
        render(
            view,
            self.wiring.items_container,
            visible,
            self.wiring.template,
            &self.wiring.empty,
        );
    }
}

impl<T: Searchable> Controller for FilterController<T> {
    fn handle(&mut self, interaction: &Interaction, view: &mut View) -> bool {
        match interaction {
            Interaction::CategoryClicked(label) => {
                if !self.categories.iter().any(|c| c == label) {
                    warn!(category = %label, "no such category control, click ignored");
                    return false;
                }
                self.query.category = Category::from_label(label);
                self.refresh(view);
                true
            }
            Interaction::SearchInput(term) => {
                self.query.set_term(term);
                self.render_items(view);
                true
            }
            Interaction::ToggleDetails(_) => false,
        }
    }
}

// ── Expand / collapse ──

/// The two looks of a details toggle button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleStyle {
    pub collapsed_label: &'static str,
    pub expanded_label: &'static str,
    pub collapsed_classes: &'static [&'static str],
    pub expanded_classes: &'static [&'static str],
}

/// Put `button` into its collapsed or expanded look. Non-text children such
/// as icons are kept; the label text is replaced.
pub fn apply_toggle_state(button: &mut Element, style: &ToggleStyle, expanded: bool) {
    let (label, add, remove) = if expanded {
        (style.expanded_label, style.expanded_classes, style.collapsed_classes)
    } else {
        (style.collapsed_label, style.collapsed_classes, style.expanded_classes)
    };
    for class in remove {
        button.remove_class(class);
    }
    for class in add {
        button.add_class(class);
    }
    button.children.retain(|c| !matches!(c, Node::Text(_)));
    button.children.push(Node::Text(label.to_string()));
    button.set_attr("aria-expanded", expanded.to_string());
}

#[derive(Debug, Clone)]
struct Toggle {
    details: String,
    button: String,
}

/// Expand/collapse handlers keyed by item id. Visibility lives in the view:
/// a details node is collapsed while it carries the `hidden` class.
#[derive(Debug, Clone)]
pub struct ExpansionController {
    toggles: HashMap<ItemId, Toggle>,
    style: ToggleStyle,
}

impl ExpansionController {
    pub fn new(style: ToggleStyle) -> Self {
        ExpansionController {
            toggles: HashMap::new(),
            style,
        }
    }

    /// Register the toggle for `item`. An item already registered keeps its
    /// first toggle and the call returns false.
    pub fn register(&mut self, item: ItemId, details_id: String, button_id: String) -> bool {
        if self.toggles.contains_key(&item) {
            warn!(item = %item, "duplicate item id, toggle not registered");
            return false;
        }
        self.toggles.insert(
            item,
            Toggle {
                details: details_id,
                button: button_id,
            },
        );
        true
    }

    /// Current visibility of an item's details, read from the view.
    pub fn is_expanded(&self, view: &View, item: &ItemId) -> Option<bool> {
        let toggle = self.toggles.get(item)?;
        view.find(&toggle.details).map(|d| !d.has_class(HIDDEN))
    }

    fn toggle(&self, item: &ItemId, view: &mut View) -> bool {
        let Some(toggle) = self.toggles.get(item) else {
            warn!(item = %item, "no toggle registered for item");
            return false;
        };
        let Some(expanded) = self.is_expanded(view, item) else {
            debug!(details = %toggle.details, "details node not mounted");
            return false;
        };

        let expanding = !expanded;
        if let Some(details) = view.find_mut(&toggle.details) {
            if expanding {
                details.remove_class(HIDDEN);
            } else {
                details.add_class(HIDDEN);
            }
        }

        if let Some(button) = view.find_mut(&toggle.button) {
            apply_toggle_state(button, &self.style, expanding);
        }
        debug!(item = %item, expanded = expanding, "toggled details");
        true
    }
}

impl Controller for ExpansionController {
    fn handle(&mut self, interaction: &Interaction, view: &mut View) -> bool {
        match interaction {
            Interaction::ToggleDetails(item) => self.toggle(item, view),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Item(&'static str, &'static str);

    impl Searchable for Item {
        fn category(&self) -> &str {
            self.1
        }
        fn search_fields(&self) -> Vec<&str> {
            vec![self.0]
        }
    }

    fn control(label: &str, active: bool) -> Element {
        Element::new("button")
            .attr("data-category", label)
            .attr("aria-pressed", active.to_string())
            .text(label)
    }

    fn row(item: &Item) -> Element {
        Element::new("li").text(item.0)
    }

    fn filter() -> (FilterController<Item>, View) {
        let items = vec![Item("Bolo", "Doces"), Item("Café", "Bebidas"), Item("Cuca", "Doces")];
        let categories = vec!["Todos".to_string(), "Doces".to_string(), "Bebidas".to_string()];
        let wiring = FilterWiring {
            filters_container: "filters",
            items_container: "items",
            control,
            template: row,
            empty: EmptyState { title: "nada", hint: "" },
        };
        let controller = FilterController::new(items, categories, wiring);
        let mut view = View::new(&["filters", "items"]);
        controller.refresh(&mut view);
        (controller, view)
    }

    fn shown(view: &View) -> Vec<String> {
        view.children("items").unwrap().iter().map(|e| e.text_content()).collect()
    }

    fn active(view: &View) -> Vec<String> {
        view.children("filters")
            .unwrap()
            .iter()
            .filter(|b| b.attr_value("aria-pressed") == Some("true"))
            .map(|b| b.text_content())
            .collect()
    }

    #[test]
    fn initial_refresh_shows_everything_with_all_active() {
        let (_, view) = filter();
        assert_eq!(shown(&view), vec!["Bolo", "Café", "Cuca"]);
        assert_eq!(active(&view), vec!["Todos"]);
    }

    #[test]
    fn category_click_filters_and_moves_active_marker() {
        let (mut c, mut view) = filter();
        assert!(c.handle(&Interaction::CategoryClicked("Doces".into()), &mut view));
        assert_eq!(shown(&view), vec!["Bolo", "Cuca"]);
        assert_eq!(active(&view), vec!["Doces"]);
    }

    #[test]
    fn search_keeps_selected_category() {
        let (mut c, mut view) = filter();
        c.handle(&Interaction::CategoryClicked("Doces".into()), &mut view);
        c.handle(&Interaction::SearchInput("CU".into()), &mut view);
        assert_eq!(c.query.term(), "cu");
        assert_eq!(shown(&view), vec!["Cuca"]);
        assert_eq!(active(&view), vec!["Doces"]);
    }

    #[test]
    fn clearing_search_restores_category_view() {
        let (mut c, mut view) = filter();
        c.handle(&Interaction::SearchInput("caf".into()), &mut view);
        assert_eq!(shown(&view), vec!["Café"]);
        c.handle(&Interaction::SearchInput(String::new()), &mut view);
        assert_eq!(shown(&view), vec!["Bolo", "Café", "Cuca"]);
    }

    #[test]
    fn unknown_category_is_ignored() {
        let (mut c, mut view) = filter();
        let before = view.clone();
        assert!(!c.handle(&Interaction::CategoryClicked("Salgados".into()), &mut view));
        assert_eq!(view, before);
    }

    #[test]
    fn zero_matches_render_empty_state() {
        let (mut c, mut view) = filter();
        c.handle(&Interaction::SearchInput("feijoada".into()), &mut view);
        let items = view.children("items").unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].attr_value("data-state"), Some("empty"));
    }

    const STYLE: ToggleStyle = ToggleStyle {
        collapsed_label: "Abrir",
        expanded_label: "Fechar",
        collapsed_classes: &["bg-white"],
        expanded_classes: &["bg-dark"],
    };

    fn expandable(ids: &[&str]) -> (ExpansionController, View) {
        let mut controller = ExpansionController::new(STYLE);
        let mut cards = Vec::new();
        for id in ids {
            let mut button = Element::new("button").id(format!("btn-{}", id)).class("w-full");
            apply_toggle_state(&mut button, &STYLE, false);
            cards.push(
                Element::new("div")
                    .child(Element::new("div").id(format!("details-{}", id)).class(HIDDEN))
                    .child(button),
            );
            controller.register(ItemId(id.to_string()), format!("details-{}", id), format!("btn-{}", id));
        }
        let mut view = View::new(&["list"]);
        view.mount("list", cards);
        (controller, view)
    }

    #[test]
    fn toggle_flips_details_and_button() {
        let (mut c, mut view) = expandable(&["a"]);
        let id = ItemId("a".into());
        assert_eq!(c.is_expanded(&view, &id), Some(false));
        assert!(c.handle(&Interaction::ToggleDetails(id.clone()), &mut view));
        assert_eq!(c.is_expanded(&view, &id), Some(true));
        let button = view.find("btn-a").unwrap();
        assert_eq!(button.text_content(), "Fechar");
        assert!(button.has_class("bg-dark") && !button.has_class("bg-white"));
        assert_eq!(button.attr_value("aria-expanded"), Some("true"));
    }

    #[test]
    fn double_toggle_restores_initial_look() {
        let (mut c, mut view) = expandable(&["a"]);
        let before = view.clone();
        let toggle = Interaction::ToggleDetails(ItemId("a".into()));
        c.handle(&toggle, &mut view);
        c.handle(&toggle, &mut view);
        assert_eq!(view, before);
    }

    #[test]
    fn toggle_leaves_other_items_alone() {
        let (mut c, mut view) = expandable(&["a", "b"]);
        c.handle(&Interaction::ToggleDetails(ItemId("b".into())), &mut view);
        assert_eq!(c.is_expanded(&view, &ItemId("a".into())), Some(false));
        assert_eq!(c.is_expanded(&view, &ItemId("b".into())), Some(true));
        assert_eq!(view.find("btn-a").unwrap().text_content(), "Abrir");
    }

    #[test]
    fn duplicate_registration_keeps_first_toggle() {
        let (mut c, mut view) = expandable(&["a", "b"]);
        assert!(!c.register(ItemId("a".into()), "details-b".into(), "btn-b".into()));
        c.handle(&Interaction::ToggleDetails(ItemId("a".into())), &mut view);
        assert_eq!(c.is_expanded(&view, &ItemId("a".into())), Some(true));
        assert_eq!(c.is_expanded(&view, &ItemId("b".into())), Some(false));
    }

    #[test]
    fn unknown_item_is_ignored() {
        let (mut c, mut view) = expandable(&["a"]);
        assert!(!c.handle(&Interaction::ToggleDetails(ItemId("z".into())), &mut view));
        assert!(!c.handle(&Interaction::SearchInput("a".into()), &mut view));
    }

    #[test]
    fn inert_handles_nothing() {
        let mut view = View::new(&[]);
        assert!(!Inert.handle(&Interaction::CategoryClicked("Todos".into()), &mut view));
    }
}
