//! Receitas: recipe cards whose full details expand on demand.

use crate::badge::Difficulty;
use crate::controller::{apply_toggle_state, ExpansionController, ToggleStyle, HIDDEN};
use crate::format::element_id;
use crate::model::{Recipe, RecipesDocument};
use crate::view::binder::{render, EmptyState};
use crate::view::icon::Icon;
use crate::view::{Element, View};

use super::Page;

pub const LIST: &str = "receitas-container";

pub const TOGGLE: ToggleStyle = ToggleStyle {
    collapsed_label: "Ver Receita Completa",
    expanded_label: "Fechar Receita",
    collapsed_classes: &["bg-white", "text-amber-700"],
    expanded_classes: &["bg-amber-700", "text-white"],
};

const EMPTY: EmptyState = EmptyState {
    title: "Nenhuma receita disponível",
    hint: "Novas receitas em breve",
};

pub fn details_id(recipe: &Recipe) -> String {
    element_id("details", recipe.id.as_str())
}

pub fn button_id(recipe: &Recipe) -> String {
    element_id("btn", recipe.id.as_str())
}

pub struct RecipesPage;

impl Page for RecipesPage {
    type Document = RecipesDocument;
    type Controller = ExpansionController;

    const NAME: &'static str = "receitas";
    const RESOURCE: &'static str = "receitas.json";
    const REQUIRED_KEYS: &'static [&'static str] = &["receitas"];
    const MOUNT_POINTS: &'static [&'static str] = &[LIST];
    const ERROR_CONTAINER: &'static str = LIST;
    const ERROR_TITLE: &'static str = "Erro ao carregar as receitas";

    fn ready(document: RecipesDocument, view: &mut View) -> ExpansionController {
        render(view, LIST, &document.receitas, recipe_card, &EMPTY);

        let mut controller = ExpansionController::new(TOGGLE);
        for recipe in &document.receitas {
            controller.register(recipe.id.clone(), details_id(recipe), button_id(recipe));
        }
        controller
    }
}

pub fn recipe_card(recipe: &Recipe) -> Element {
    let badge = Difficulty::badge(&recipe.dificuldade);

    let header = Element::new("div")
        .class("p-6 bg-gradient-to-br from-amber-50 to-orange-50")
        .child(
            Element::new("div")
                .class("flex items-start justify-between gap-3 mb-3")
                .child(Element::new("h2").class("text-xl sm:text-2xl font-bold text-gray-900 flex-1").text(&recipe.nome))
                .child(
                    Element::new("span")
                        .class("text-xs font-medium px-3 py-1 rounded-full")
                        .class(badge.class)
                        .text(badge.label),
                ),
        )
        .child(
            Element::new("div")
                .class("flex flex-wrap gap-4 text-sm text-gray-700")
                .child(meta(Icon::Clock, Element::new("span").text(&recipe.tempo_preparo)))
                .child(meta(Icon::Users, Element::new("span").text(&recipe.rendimento)))
                .child(meta(
                    Icon::Tag,
                    Element::new("span")
                        .class("text-xs bg-gray-100 px-2 py-1 rounded")
                        .text(&recipe.categoria),
                )),
        );

    let story = Element::new("div")
        .class("p-6 border-t-2 border-gray-100")
        .child(section_title(Icon::MenuBook, "História", "mb-2"))
        .child(
            Element::new("p")
                .class("text-sm text-gray-700 leading-relaxed italic")
                .text(&recipe.historia),
        );

    let mut button = Element::new("button")
        .id(button_id(recipe))
        .class("w-full py-3 px-4 font-semibold border-t-2 border-gray-100 flex items-center justify-center gap-2 hover:bg-amber-50 transition-colors")
        .attr("data-recipe", recipe.id.as_str())
        .attr("aria-controls", details_id(recipe))
        .icon(Icon::ChevronDown, "w-5 h-5");
    apply_toggle_state(&mut button, &TOGGLE, false);

    Element::new("div")
        .class("bg-white rounded-xl border-2 border-gray-200 overflow-hidden hover:shadow-lg transition-all")
        .attr("data-id", recipe.id.as_str())
        .child(header)
        .child(story)
        .child(details(recipe))
        .child(button)
}

fn details(recipe: &Recipe) -> Element {
    let ingredients = Element::new("div")
        .class("p-6 bg-gray-50")
        .child(section_title(Icon::Clipboard, "Ingredientes", "mb-3"))
        .child(
            Element::new("ul").class("space-y-2").children(recipe.ingredientes.iter().map(|ing| {
                Element::new("li")
                    .class("flex items-start gap-2 text-sm text-gray-700")
                    .child(Element::new("span").class("text-amber-700 mt-1").text("•"))
                    .child(Element::new("span").text(ing))
            })),
        );

    let steps = Element::new("div")
        .class("p-6")
        .child(section_title(Icon::Steps, "Modo de Preparo", "mb-3"))
        .child(
            Element::new("ol")
                .class("space-y-3")
                .children(recipe.modo_preparo.iter().enumerate().map(|(i, step)| {
                    Element::new("li")
                        .class("flex items-start gap-3 text-sm text-gray-700")
                        .child(
                            Element::new("span")
                                .class("flex-shrink-0 flex items-center justify-center w-6 h-6 rounded-full bg-amber-700 text-white text-xs font-bold")
                                .text((i + 1).to_string()),
                        )
                        .child(Element::new("span").class("flex-1 pt-0.5").text(step))
                })),
        );

    let tips = (!recipe.dicas.is_empty()).then(|| {
        Element::new("div")
            .class("p-6 bg-amber-50 border-t-2 border-amber-100")
            .child(section_title(Icon::LightBulb, "Dicas Especiais", "mb-3"))
            .child(
                Element::new("ul").class("space-y-2").children(recipe.dicas.iter().map(|tip| {
                    Element::new("li")
                        .class("flex items-start gap-2 text-sm text-amber-900")
                        .child(Element::new("span").class("text-amber-600 mt-1").text("✓"))
                        .child(Element::new("span").text(tip))
                })),
            )
    });

    Element::new("div")
        .id(details_id(recipe))
        .class("border-t-2 border-gray-100")
        .class(HIDDEN)
        .child(ingredients)
        .child(steps)
        .maybe(tips)
}

fn meta(icon: Icon, value: Element) -> Element {
    Element::new("div")
        .class("flex items-center gap-2")
        .icon(icon, "w-4 h-4 text-amber-700")
        .child(value)
}

fn section_title(icon: Icon, title: &str, spacing: &str) -> Element {
    Element::new("h3")
        .class("font-semibold text-gray-900 flex items-center gap-2")
        .class(spacing)
        .icon(icon, "w-5 h-5 text-amber-700")
        .text(title)
}
