//! Programação: opening hours, events and notices.

use crate::badge::{EventKind, NoticeLevel};
use crate::controller::Inert;
use crate::format::currency;
use crate::model::{DayHours, Notice, OpeningHours, Price, ScheduleDocument, ScheduledEvent};
use crate::query::featured_first;
use crate::view::binder::{render, EmptyState};
use crate::view::icon::Icon;
use crate::view::{Element, View};

use super::Page;

pub const HOURS: &str = "horarios-container";
pub const EVENTS: &str = "eventos-container";
pub const NOTICES: &str = "avisos-container";
/// Page body; failures land here since no single list owns the page.
pub const MAIN: &str = "main";

const NO_EVENTS: EmptyState = EmptyState {
    title: "Nenhum evento programado",
    hint: "Confira novamente em breve",
};

const NO_NOTICES: EmptyState = EmptyState {
    title: "Nenhum aviso no momento",
    hint: "",
};

pub struct SchedulePage;

impl Page for SchedulePage {
    type Document = ScheduleDocument;
    type Controller = Inert;

    const NAME: &'static str = "programacao";
    const RESOURCE: &'static str = "programacao.json";
    const REQUIRED_KEYS: &'static [&'static str] = &["horariosFuncionamento", "eventos", "avisos"];
    const MOUNT_POINTS: &'static [&'static str] = &[HOURS, EVENTS, NOTICES, MAIN];
    const ERROR_CONTAINER: &'static str = MAIN;
    const ERROR_TITLE: &'static str = "Erro ao carregar a programação";

    fn ready(document: ScheduleDocument, view: &mut View) -> Inert {
        view.mount(HOURS, opening_hours(&document.horarios_funcionamento));
        render(view, EVENTS, featured_first(&document.eventos), event_card, &NO_EVENTS);
        render(view, NOTICES, &document.avisos, notice_banner, &NO_NOTICES);
        Inert
    }
}

pub fn opening_hours(hours: &OpeningHours) -> Vec<Element> {
    let grid = Element::new("div")
        .class("grid grid-cols-1 sm:grid-cols-2 gap-4 mb-4")
        .children(hours.dias_semana.iter().map(|(day, info)| day_card(day, info)));

    let note = hours.observacao_geral.as_ref().map(|obs| {
        Element::new("div")
            .class("bg-amber-50 border border-amber-200 rounded-lg p-3 text-sm text-amber-800")
            .child(Element::new("strong").text("Observação:"))
            .text(format!(" {}", obs))
    });

    let mut nodes = vec![grid];
    nodes.extend(note);
    nodes
}

fn day_card(day: &str, info: &DayHours) -> Element {
    let note = info.observacao.as_ref().map(|obs| {
        Element::new("p").class("text-xs text-gray-600 pl-6").text(obs)
    });

    Element::new("div")
        .class("bg-white border-2 border-gray-200 rounded-lg p-4 hover:border-amber-700 transition-colors")
        .attr("data-day", day)
        .child(Element::new("h3").class("font-semibold text-lg text-gray-900 mb-2").text(day))
        .child(
            Element::new("div")
                .class("space-y-2 text-sm")
                .child(detail(
                    Icon::Clock,
                    "Horário:",
                    format!("{} às {}", info.abertura, info.fechamento),
                ))
                .maybe(note),
        )
}

pub fn event_card(event: &ScheduledEvent) -> Element {
    let badge = EventKind::badge(&event.tipo);
    let card_class = if event.destaque {
        "bg-gradient-to-br from-amber-50 to-orange-50 border-2 border-amber-300 rounded-xl p-6 shadow-md relative overflow-hidden"
    } else {
        "bg-white border-2 border-gray-200 rounded-lg p-5 hover:shadow-md hover:border-amber-700 transition-all"
    };

    let ribbon = event.destaque.then(|| {
        Element::new("div")
            .class("absolute top-0 right-0 bg-amber-600 text-white text-xs font-bold px-3 py-1 rounded-bl-lg")
            .text("DESTAQUE")
    });

    let note = event.observacao.as_ref().map(|obs| {
        Element::new("div")
            .class("bg-white bg-opacity-70 border border-gray-300 rounded px-3 py-2 text-xs text-gray-700")
            .child(Element::new("strong").text("Obs:"))
            .text(format!(" {}", obs))
    });

    let mut card = Element::new("div")
        .class(card_class)
        .attr("data-featured", event.destaque.to_string());
    if let Some(id) = &event.id {
        card = card.attr("data-id", id.as_str());
    }

    card.maybe(ribbon)
        .child(
            Element::new("div")
                .class("mb-3")
                .child(
                    Element::new("div")
                        .class("flex items-start justify-between gap-3 mb-2")
                        .child(Element::new("h3").class("text-xl font-bold text-gray-900 flex-1").text(&event.titulo))
                        .child(
                            Element::new("span")
                                .class("text-xs font-medium px-2 py-1 rounded")
                                .class(badge.class)
                                .text(badge.label),
                        ),
                )
                .child(
                    Element::new("p")
                        .class("text-sm text-gray-600 leading-relaxed")
                        .text(&event.descricao),
                ),
        )
        .child(
            Element::new("div")
                .class("space-y-2 text-sm mb-4")
                .child(detail(Icon::Calendar, "Dias:", event.dias.join(", ")))
                .child(detail(
                    Icon::Clock,
                    "Horário:",
                    format!("{} às {}", event.horario_inicio, event.horario_fim),
                ))
                .child(detail(Icon::Currency, "Valor:", price_label(&event.preco))),
        )
        .maybe(note)
}

pub fn price_label(price: &Price) -> String {
    match price {
        Price::Amount(value) => currency(*value),
        Price::Label(text) => text.clone(),
    }
}

pub fn notice_banner(notice: &Notice) -> Element {
    let level = NoticeLevel::parse(&notice.tipo);
    let icon = match level {
        NoticeLevel::Info => Icon::Info,
        NoticeLevel::Warning => Icon::Warning,
        NoticeLevel::Error => Icon::Error,
    };

    Element::new("div")
        .class("flex items-start gap-3 p-4 border-2 rounded-lg")
        .class(level.class())
        .attr("data-level", level.as_str())
        .icon(icon, "w-5 h-5 flex-shrink-0 mt-0.5")
        .child(Element::new("p").class("text-sm leading-relaxed").text(&notice.mensagem))
}

fn detail(icon: Icon, label: &str, value: String) -> Element {
    Element::new("div")
        .class("flex items-center gap-2 text-gray-700")
        .icon(icon, "w-4 h-4 text-amber-700")
        .child(
            Element::new("span")
                .child(Element::new("strong").text(label))
                .text(format!(" {}", value)),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::tests::fixtures;
    use crate::pages::{PageInstance, Status};

    fn event(titulo: &str, tipo: &str, destaque: bool) -> ScheduledEvent {
        ScheduledEvent {
            id: None,
            titulo: titulo.to_string(),
            descricao: "Música ao vivo".into(),
            tipo: tipo.to_string(),
            dias: vec!["Sexta".into(), "Sábado".into()],
            horario_inicio: "19:00".into(),
            horario_fim: "22:00".into(),
            preco: Price::Label("Gratuito".into()),
            observacao: None,
            destaque,
        }
    }

    fn schedule(eventos: Vec<ScheduledEvent>, avisos: Vec<Notice>) -> ScheduleDocument {
        ScheduleDocument {
            horarios_funcionamento: OpeningHours {
                dias_semana: vec![
                    (
                        "Segunda a Sexta".into(),
                        DayHours {
                            abertura: "08:00".into(),
                            fechamento: "18:00".into(),
                            observacao: None,
                        },
                    ),
                    (
                        "Domingo".into(),
                        DayHours {
                            abertura: "09:00".into(),
                            fechamento: "13:00".into(),
                            observacao: Some("Apenas café colonial".into()),
                        },
                    ),
                ],
                observacao_geral: None,
            },
            eventos,
            avisos,
        }
    }

    #[test]
    fn days_render_in_source_order() {
        let mut view = View::new(SchedulePage::MOUNT_POINTS);
        SchedulePage::ready(schedule(Vec::new(), Vec::new()), &mut view);
        let hours = view.children(HOURS).unwrap();
        assert_eq!(hours.len(), 1);
        let days: Vec<&str> = hours[0].elements().filter_map(|d| d.attr_value("data-day")).collect();
        assert_eq!(days, vec!["Segunda a Sexta", "Domingo"]);
        assert!(hours[0].text_content().contains("08:00 às 18:00"));
        assert!(hours[0].text_content().contains("Apenas café colonial"));
    }

    #[test]
    fn featured_events_lead() {
        let mut view = View::new(SchedulePage::MOUNT_POINTS);
        let document = schedule(
            vec![event("Chá da tarde", "regular", false), event("Festa da Colheita", "especial", true)],
            Vec::new(),
        );
        SchedulePage::ready(document, &mut view);
        let cards = view.children(EVENTS).unwrap();
        assert_eq!(cards[0].attr_value("data-featured"), Some("true"));
        assert!(cards[0].text_content().starts_with("DESTAQUE"));
        assert!(cards[1].text_content().contains("Chá da tarde"));
    }

    #[test]
    fn event_details_are_formatted() {
        let mut e = event("Sarau", "workshop", false);
        e.preco = Price::Amount(35.0);
        e.observacao = Some("Vagas limitadas".into());
        let text = event_card(&e).text_content();
        assert!(text.contains("workshop"));
        assert!(text.contains("Sexta, Sábado"));
        assert!(text.contains("19:00 às 22:00"));
        assert!(text.contains("R$ 35,00"));
        assert!(text.contains("Vagas limitadas"));
        assert_eq!(event_card(&e).attr_value("data-id"), None);
    }

    #[tokio::test]
    async fn fixture_events_carry_ids() {
        let page = PageInstance::<SchedulePage>::init(&fixtures()).await;
        let ids: Vec<_> = page
            .view()
            .children(EVENTS)
            .unwrap()
            .iter()
            .filter_map(|card| card.attr_value("data-id"))
            .collect();
        assert_eq!(ids, vec!["2", "1", "3"]);
    }

    #[test]
    fn price_labels_pass_through() {
        assert_eq!(price_label(&Price::Label("Gratuito".into())), "Gratuito");
        assert_eq!(price_label(&Price::Amount(12.5)), "R$ 12,50");
    }

    #[test]
    fn notices_take_severity_style() {
        let warning = notice_banner(&Notice {
            tipo: "warning".into(),
            mensagem: "Fechado no feriado".into(),
        });
        assert!(warning.has_class("bg-yellow-50"));
        let unknown = notice_banner(&Notice {
            tipo: "urgent".into(),
            mensagem: "x".into(),
        });
        assert_eq!(unknown.attr_value("data-level"), Some("info"));
    }

    #[test]
    fn empty_lists_show_empty_states() {
        let mut view = View::new(SchedulePage::MOUNT_POINTS);
        SchedulePage::ready(schedule(Vec::new(), Vec::new()), &mut view);
        for container in [EVENTS, NOTICES] {
            let nodes = view.children(container).unwrap();
            assert_eq!(nodes[0].attr_value("data-state"), Some("empty"));
        }
        assert!(view.children(MAIN).unwrap().is_empty());
    }

    #[tokio::test]
    async fn fixture_page_is_ready() {
        let page = PageInstance::<SchedulePage>::init(&fixtures()).await;
        assert_eq!(page.status(), Status::Ready);
        let first_day = page.view().children(HOURS).unwrap()[0].elements().next().unwrap();
        assert_eq!(first_day.attr_value("data-day"), Some("Segunda a Sexta"));
        assert!(!page.view().children(EVENTS).unwrap().is_empty());
    }
}
