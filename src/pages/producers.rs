//! Produtores: partner farms and suppliers, featured partners first.

use crate::controller::Inert;
use crate::format::years;
use crate::model::{Producer, ProducersDocument, ProducersInfo};
use crate::query::featured_first;
use crate::view::binder::{render, EmptyState};
use crate::view::icon::Icon;
use crate::view::{Element, View};

use super::Page;

pub const INFO: &str = "info-container";
pub const LIST: &str = "produtores-container";

const EMPTY: EmptyState = EmptyState {
    title: "Nenhum produtor cadastrado",
    hint: "Novas parcerias em breve",
};

pub struct ProducersPage;

impl Page for ProducersPage {
    type Document = ProducersDocument;
    type Controller = Inert;

    const NAME: &'static str = "produtores";
    const RESOURCE: &'static str = "produtores.json";
    const REQUIRED_KEYS: &'static [&'static str] = &["informacoes", "produtores"];
    const MOUNT_POINTS: &'static [&'static str] = &[INFO, LIST];
    const ERROR_CONTAINER: &'static str = LIST;
    const ERROR_TITLE: &'static str = "Erro ao carregar os produtores";

    fn ready(document: ProducersDocument, view: &mut View) -> Inert {
        view.mount(INFO, info_section(&document.informacoes));
        render(view, LIST, featured_first(&document.produtores), producer_card, &EMPTY);
        Inert
    }
}

pub fn info_section(info: &ProducersInfo) -> Vec<Element> {
    let intro = Element::new("div")
        .class("text-center mb-6")
        .child(Element::new("h2").class("text-2xl font-bold text-gray-900 mb-3").text(&info.titulo))
        .child(
            Element::new("p")
                .class("text-gray-700 leading-relaxed max-w-3xl mx-auto")
                .text(&info.descricao),
        );

    let mut nodes = vec![intro];
    if !info.beneficios.is_empty() {
        nodes.push(
            Element::new("div")
                .class("bg-white rounded-lg p-6 border-2 border-gray-200")
                .child(
                    Element::new("h3")
                        .class("font-semibold text-gray-900 mb-4 text-center")
                        .text("Benefícios da Produção Local"),
                )
                .child(
                    Element::new("div")
                        .class("grid grid-cols-1 sm:grid-cols-2 md:grid-cols-3 gap-4")
                        .children(info.beneficios.iter().map(|b| {
                            Element::new("div")
                                .class("flex items-start gap-2")
                                .icon(Icon::CheckCircle, "w-5 h-5 text-green-600 flex-shrink-0 mt-0.5")
                                .child(Element::new("span").class("text-sm text-gray-700").text(b))
                        })),
                ),
        );
    }
    nodes
}

pub fn producer_card(producer: &Producer) -> Element {
    let card_class = if producer.destaque {
        "bg-gradient-to-br from-amber-50 to-orange-50 rounded-xl border-2 border-amber-300 p-6 shadow-lg hover:shadow-xl transition-all relative overflow-hidden"
    } else {
        "bg-white rounded-lg border-2 border-gray-200 p-6 hover:shadow-lg hover:border-amber-700 transition-all"
    };

    let ribbon = producer.destaque.then(|| {
        Element::new("div")
            .class("absolute top-0 right-0 bg-amber-600 text-white text-xs font-bold px-3 py-1 rounded-bl-lg flex items-center gap-1")
            .icon(Icon::Star, "w-3 h-3")
            .text("PARCEIRO DESTAQUE")
    });

    let certifications = (!producer.certificacoes.is_empty()).then(|| {
        Element::new("div")
            .class("pt-4 border-t border-gray-200")
            .child(
                Element::new("h4")
                    .class("text-xs font-semibold text-gray-900 uppercase mb-2 flex items-center gap-1")
                    .icon(Icon::BadgeCheck, "w-4 h-4 text-green-600")
                    .text("Certificações"),
            )
            .child(
                Element::new("div")
                    .class("flex flex-wrap gap-2")
                    .children(producer.certificacoes.iter().map(|cert| {
                        Element::new("span")
                            .class("text-xs bg-green-100 text-green-800 px-2 py-1 rounded flex items-center gap-1")
                            .icon(Icon::CheckCircle, "w-3 h-3")
                            .text(cert)
                    })),
            )
    });

    let mut card = Element::new("div")
        .class(card_class)
        .attr("data-featured", producer.destaque.to_string());
    if let Some(id) = &producer.id {
        card = card.attr("data-id", id.as_str());
    }

    card.maybe(ribbon)
        .child(
            Element::new("div")
                .class("mb-4")
                .child(Element::new("h3").class("text-xl font-bold text-gray-900 mb-1").text(&producer.nome))
                .child(Element::new("p").class("text-sm text-gray-600").text(&producer.responsavel)),
        )
        .child(
            Element::new("div").class("mb-4").child(
                Element::new("span")
                    .class("inline-block bg-amber-100 text-amber-800 text-xs font-medium px-3 py-1 rounded-full")
                    .text(&producer.tipo_produto),
            ),
        )
        .child(
            Element::new("p")
                .class("text-sm text-gray-700 leading-relaxed mb-4")
                .text(&producer.descricao),
        )
        .child(
            Element::new("div")
                .class("mb-4")
                .child(
                    Element::new("h4")
                        .class("text-xs font-semibold text-gray-900 uppercase mb-2")
                        .text("Produtos Fornecidos"),
                )
                .child(
                    Element::new("div").class("flex flex-wrap gap-2").children(
                        producer.produtos.iter().map(|p| {
                            Element::new("span")
                                .class("text-xs bg-gray-100 text-gray-700 px-2 py-1 rounded")
                                .text(p)
                        }),
                    ),
                ),
        )
        .child(
            Element::new("div")
                .class("grid grid-cols-2 gap-4 mb-4 text-sm")
                .child(fact(
                    Icon::MapPin,
                    "Localização",
                    format!("{} - {}", producer.cidade, producer.estado),
                ))
                .child(fact(Icon::Heart, "Parceria", years(producer.anos_parceria))),
        )
        .maybe(certifications)
}

fn fact(icon: Icon, label: &str, value: String) -> Element {
    Element::new("div")
        .child(
            Element::new("div")
                .class("flex items-center gap-1 text-gray-600 mb-1")
                .icon(icon, "w-4 h-4")
                .child(Element::new("span").class("text-xs font-medium").text(label)),
        )
        .child(Element::new("p").class("text-gray-900 font-medium").text(value))
}
