use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

use crate::query::{Featured, Searchable};

/// Item identifier. Sources use both strings and numbers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "RawId")]
pub struct ItemId(pub String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(serde_json::Number),
}

impl From<RawId> for ItemId {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Text(s) => ItemId(s),
            RawId::Number(n) => ItemId(n.to_string()),
        }
    }
}

impl ItemId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ── menu.json ──

#[derive(Debug, Clone, Deserialize)]
pub struct MenuDocument {
    pub items: Vec<MenuLink>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MenuLink {
    pub title: String,
    pub description: String,
    pub url: String,
    #[serde(default)]
    pub icon: Option<String>,
}

// ── cardapio.json ──

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogDocument {
    pub categories: Vec<String>,
    pub items: Vec<Dish>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Dish {
    #[serde(default)]
    pub id: Option<ItemId>,
    pub name: String,
    pub description: String,
    pub category: String,
    pub price: f64,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Searchable for Dish {
    fn category(&self) -> &str {
        &self.category
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.description.as_str()]
    }
}

// ── produtores.json ──

#[derive(Debug, Clone, Deserialize)]
pub struct ProducersDocument {
    pub informacoes: ProducersInfo,
    pub produtores: Vec<Producer>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProducersInfo {
    pub titulo: String,
    pub descricao: String,
    #[serde(default)]
    pub beneficios: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Producer {
    #[serde(default)]
    pub id: Option<ItemId>,
    pub nome: String,
    pub responsavel: String,
    pub tipo_produto: String,
    pub descricao: String,
    #[serde(default)]
    pub produtos: Vec<String>,
    pub cidade: String,
    pub estado: String,
    pub anos_parceria: u32,
    #[serde(default)]
    pub certificacoes: Vec<String>,
    #[serde(default)]
    pub destaque: bool,
}

impl Featured for Producer {
    fn featured(&self) -> bool {
        self.destaque
    }
}

// ── programacao.json ──

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleDocument {
    pub horarios_funcionamento: OpeningHours,
    pub eventos: Vec<ScheduledEvent>,
    pub avisos: Vec<Notice>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpeningHours {
    /// Weekday label to hours, in source order.
    #[serde(deserialize_with = "ordered_entries")]
    pub dias_semana: Vec<(String, DayHours)>,
    #[serde(default)]
    pub observacao_geral: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DayHours {
    pub abertura: String,
    pub fechamento: String,
    #[serde(default)]
    pub observacao: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledEvent {
    #[serde(default)]
    pub id: Option<ItemId>,
    pub titulo: String,
    pub descricao: String,
    pub tipo: String,
    #[serde(default)]
    pub dias: Vec<String>,
    pub horario_inicio: String,
    pub horario_fim: String,
    pub preco: Price,
    #[serde(default)]
    pub observacao: Option<String>,
    #[serde(default)]
    pub destaque: bool,
}

impl Featured for ScheduledEvent {
    fn featured(&self) -> bool {
        self.destaque
    }
}

/// `preco` is either display text ("Gratuito", "R$ 35,00") or a plain amount.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Price {
    Amount(f64),
    Label(String),
}

#[derive(Debug, Clone, Deserialize)]
pub struct Notice {
    #[serde(default)]
    pub tipo: String,
    pub mensagem: String,
}

// ── receitas.json ──

#[derive(Debug, Clone, Deserialize)]
pub struct RecipesDocument {
    pub receitas: Vec<Recipe>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: ItemId,
    pub nome: String,
    pub dificuldade: String,
    pub tempo_preparo: String,
    pub rendimento: String,
    pub categoria: String,
    pub historia: String,
    #[serde(default)]
    pub ingredientes: Vec<String>,
    #[serde(default)]
    pub modo_preparo: Vec<String>,
    #[serde(default)]
    pub dicas: Vec<String>,
}

/// Deserialize a JSON object into key/value pairs without losing key order.
fn ordered_entries<'de, D, V>(deserializer: D) -> Result<Vec<(String, V)>, D::Error>
where
    D: Deserializer<'de>,
    V: Deserialize<'de>,
{
    struct Entries<V>(std::marker::PhantomData<V>);

    impl<'de, V: Deserialize<'de>> Visitor<'de> for Entries<V> {
        type Value = Vec<(String, V)>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("an object")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
            let mut out = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((k, v)) = map.next_entry::<String, V>()? {
                out.push((k, v));
            }
            Ok(out)
        }
    }

    deserializer.deserialize_map(Entries(std::marker::PhantomData))
}
