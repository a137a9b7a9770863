//! Cardápio: the searchable food catalog with category filters.

use tracing::warn;

use crate::controller::{FilterController, FilterWiring};
use crate::format::currency;
use crate::model::{CatalogDocument, Dish};
use crate::query::ALL;
use crate::view::binder::EmptyState;
use crate::view::{Element, View};

use super::Page;

pub const FILTERS: &str = "category-filters";
pub const ITEMS: &str = "menu-items";

const MAX_TAGS: usize = 2;

const EMPTY: EmptyState = EmptyState {
    title: "Nenhum item encontrado",
    hint: "Tente outra busca ou categoria",
};

const BUTTON_ACTIVE: &str = "px-4 py-2 rounded-full text-sm font-medium bg-amber-700 text-white shadow-md transition-all";
const BUTTON_IDLE: &str = "px-4 py-2 rounded-full text-sm font-medium bg-white text-gray-700 border-2 border-gray-200 hover:border-amber-700 hover:text-amber-700 transition-all";

pub struct CatalogPage;

impl Page for CatalogPage {
    type Document = CatalogDocument;
    type Controller = FilterController<Dish>;

    const NAME: &'static str = "cardapio";
    const RESOURCE: &'static str = "cardapio.json";
    const REQUIRED_KEYS: &'static [&'static str] = &["items", "categories"];
    const MOUNT_POINTS: &'static [&'static str] = &[FILTERS, ITEMS];
    const ERROR_CONTAINER: &'static str = ITEMS;
    const ERROR_TITLE: &'static str = "Erro ao carregar o cardápio";

    fn ready(document: CatalogDocument, view: &mut View) -> FilterController<Dish> {
        let mut categories = document.categories;
        if !categories.iter().any(|c| c == ALL) {
            warn!(categories = ?categories, "catalog has no '{}' category, adding it", ALL);
            categories.insert(0, ALL.to_string());
        }

        let controller = FilterController::new(
            document.items,
            categories,
            FilterWiring {
                filters_container: FILTERS,
                items_container: ITEMS,
                control: category_button,
                template: dish_card,
                empty: EMPTY,
            },
        );
        controller.refresh(view);
        controller
    }
}

pub fn category_button(label: &str, active: bool) -> Element {
    Element::new("button")
        .class(if active { BUTTON_ACTIVE } else { BUTTON_IDLE })
        .attr("data-category", label)
        .attr("aria-pressed", active.to_string())
        .text(label)
}

pub fn dish_card(dish: &Dish) -> Element {
    let tags = (!dish.tags.is_empty()).then(|| {
        Element::new("div").class("flex gap-1").children(
            dish.tags.iter().take(MAX_TAGS).map(|tag| {
                Element::new("span")
                    .class("text-xs text-amber-700 bg-amber-50 px-2 py-1 rounded")
                    .text(tag)
            }),
        )
    });

    let mut card = Element::new("div")
        .class("bg-white rounded-lg border-2 border-gray-200 p-5 hover:shadow-lg hover:border-amber-700 transition-all duration-200")
        .attr("data-category", &dish.category);
    if let Some(id) = &dish.id {
        card = card.attr("data-id", id.as_str());
    }

    card.child(
        Element::new("div")
            .class("flex justify-between items-start mb-2")
            .child(Element::new("h3").class("text-lg font-semibold text-gray-900 flex-1").text(&dish.name))
            .child(
                Element::new("span")
                    .class("text-xl font-bold text-amber-700 ml-3")
                    .text(currency(dish.price)),
            ),
    )
    .child(
        Element::new("p")
            .class("text-sm text-gray-600 leading-relaxed mb-3")
            .text(&dish.description),
    )
    .child(
        Element::new("div")
            .class("flex items-center justify-between")
            .child(
                Element::new("span")
                    .class("text-xs font-medium text-gray-500 bg-gray-100 px-3 py-1 rounded-full")
                    .text(&dish.category),
            )
            .maybe(tags),
    )
}
