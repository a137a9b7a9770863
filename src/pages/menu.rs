//! Landing menu: one link card per section of the site.

use crate::controller::Inert;
use crate::model::{MenuDocument, MenuLink};
use crate::view::binder::{render, EmptyState};
use crate::view::icon::Icon;
use crate::view::{Element, View};

use super::Page;

pub const ITEMS: &str = "menu-items";

const EMPTY: EmptyState = EmptyState {
    title: "Nenhuma seção disponível",
    hint: "Volte em breve",
};

pub struct MenuPage;

impl Page for MenuPage {
    type Document = MenuDocument;
    type Controller = Inert;

    const NAME: &'static str = "menu";
    const RESOURCE: &'static str = "menu.json";
    const REQUIRED_KEYS: &'static [&'static str] = &["items"];
    const MOUNT_POINTS: &'static [&'static str] = &[ITEMS];
    const ERROR_CONTAINER: &'static str = ITEMS;
    const ERROR_TITLE: &'static str = "Erro ao carregar o menu";

    fn ready(document: MenuDocument, view: &mut View) -> Inert {
        render(view, ITEMS, &document.items, menu_card, &EMPTY);
        Inert
    }
}

pub fn menu_card(link: &MenuLink) -> Element {
    Element::new("a")
        .attr("href", &link.url)
        .class("block rounded-lg border-2 border-gray-200 p-5 bg-white shadow-sm hover:shadow-lg hover:border-amber-700 transition-all duration-200 transform hover:-translate-y-1")
        .child(
            Element::new("div")
                .class("flex items-start gap-4")
                .child(
                    Element::new("div")
                        .class("flex-shrink-0 text-amber-700")
                        .icon(Icon::from_key(link.icon.as_deref()), "w-8 h-8"),
                )
                .child(
                    Element::new("div")
                        .class("flex-1 min-w-0")
                        .child(Element::new("h2").class("text-lg font-semibold text-gray-900 mb-1").text(&link.title))
                        .child(Element::new("p").class("text-sm text-gray-600 leading-relaxed").text(&link.description)),
                )
                .child(
                    Element::new("div")
                        .class("flex-shrink-0 text-gray-400")
                        .icon(Icon::ChevronRight, "w-5 h-5"),
                ),
        )
}
