pub mod catalog;
pub mod menu;
pub mod producers;
pub mod recipes;
pub mod schedule;

use std::fmt;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use tracing::{info, warn};

use crate::controller::{Controller, Interaction};
use crate::loader::{load_document, DataSource};
use crate::view::binder::render_error;
use crate::view::View;

/// One page of the site: which document it loads, where it mounts, and how
/// the initial render is wired to its controller.
pub trait Page {
    type Document: DeserializeOwned;
    type Controller: Controller;

    const NAME: &'static str;
    const RESOURCE: &'static str;
    const REQUIRED_KEYS: &'static [&'static str];
    const MOUNT_POINTS: &'static [&'static str];
    const ERROR_CONTAINER: &'static str;
    const ERROR_TITLE: &'static str;

    /// Initial render with the default query, returning the wired controller.
    fn ready(document: Self::Document, view: &mut View) -> Self::Controller;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Loading,
    Ready,
    Failed,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Status::Loading => "loading",
            Status::Ready => "ready",
            Status::Failed => "failed",
        })
    }
}

/// A page view: its mount points and, once ready, its controller.
pub struct PageInstance<P: Page> {
    status: Status,
    view: View,
    controller: Option<P::Controller>,
}

impl<P: Page> PageInstance<P> {
    /// Load the page document once and settle in `Ready` or `Failed`.
    pub async fn init<S: DataSource>(source: &S) -> Self {
        let mut page = PageInstance {
            status: Status::Loading,
            view: View::new(P::MOUNT_POINTS),
            controller: None,
        };

        info!(page = P::NAME, resource = P::RESOURCE, "loading page");
        match load_document::<P::Document, _>(source, P::RESOURCE, P::REQUIRED_KEYS).await {
            Ok(document) => {
                page.controller = Some(P::ready(document, &mut page.view));
                page.status = Status::Ready;
                info!(page = P::NAME, "page ready");
            }
            Err(e) => {
                warn!(
                    page = P::NAME,
                    location = %source.describe(P::RESOURCE),
                    error = %e,
                    "page document unavailable"
                );
                render_error(&mut page.view, P::ERROR_CONTAINER, P::ERROR_TITLE);
                page.status = Status::Failed;
            }
        }
        page
    }

    /// Route an interaction to the controller. Ignored unless the page is ready.
    pub fn dispatch(&mut self, interaction: &Interaction) -> bool {
        match self.controller.as_mut() {
            Some(controller) => controller.handle(interaction, &mut self.view),
            None => {
                warn!(page = P::NAME, ?interaction, "page not ready, interaction ignored");
                false
            }
        }
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn view(&self) -> &View {
        &self.view
    }
}

/// Page selector for the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    Menu,
    Catalog,
    Producers,
    Schedule,
    Recipes,
}

pub const ALL_PAGES: [PageKind; 5] = [
    PageKind::Menu,
    PageKind::Catalog,
    PageKind::Producers,
    PageKind::Schedule,
    PageKind::Recipes,
];

impl PageKind {
    pub fn name(self) -> &'static str {
        match self {
            PageKind::Menu => menu::MenuPage::NAME,
            PageKind::Catalog => catalog::CatalogPage::NAME,
            PageKind::Producers => producers::ProducersPage::NAME,
            PageKind::Schedule => schedule::SchedulePage::NAME,
            PageKind::Recipes => recipes::RecipesPage::NAME,
        }
    }

    pub fn resource(self) -> &'static str {
        match self {
            PageKind::Menu => menu::MenuPage::RESOURCE,
            PageKind::Catalog => catalog::CatalogPage::RESOURCE,
            PageKind::Producers => producers::ProducersPage::RESOURCE,
            PageKind::Schedule => schedule::SchedulePage::RESOURCE,
            PageKind::Recipes => recipes::RecipesPage::RESOURCE,
        }
    }

    pub fn mount_points(self) -> &'static [&'static str] {
        match self {
            PageKind::Menu => menu::MenuPage::MOUNT_POINTS,
            PageKind::Catalog => catalog::CatalogPage::MOUNT_POINTS,
            PageKind::Producers => producers::ProducersPage::MOUNT_POINTS,
            PageKind::Schedule => schedule::SchedulePage::MOUNT_POINTS,
            PageKind::Recipes => recipes::RecipesPage::MOUNT_POINTS,
        }
    }
}

impl FromStr for PageKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_PAGES
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| {
                let names: Vec<&str> = ALL_PAGES.iter().map(|p| p.name()).collect();
                format!("unknown page '{}' (expected one of: {})", s, names.join(", "))
            })
    }
}

/// Outcome of driving one page from the command line.
pub struct Rendered {
    pub status: Status,
    pub handled: usize,
    pub html: String,
}

/// Load `kind`, replay `interactions` in order and serialize the final view.
pub async fn render_page<S: DataSource>(
    kind: PageKind,
    source: &S,
    interactions: &[Interaction],
) -> Rendered {
    match kind {
        PageKind::Menu => drive::<menu::MenuPage, S>(source, interactions).await,
        PageKind::Catalog => drive::<catalog::CatalogPage, S>(source, interactions).await,
        PageKind::Producers => drive::<producers::ProducersPage, S>(source, interactions).await,
        PageKind::Schedule => drive::<schedule::SchedulePage, S>(source, interactions).await,
        PageKind::Recipes => drive::<recipes::RecipesPage, S>(source, interactions).await,
    }
}

async fn drive<P: Page, S: DataSource>(source: &S, interactions: &[Interaction]) -> Rendered {
    let mut page = PageInstance::<P>::init(source).await;
    let handled = interactions
        .iter()
        .filter(|interaction| page.dispatch(interaction))
        .count();
    Rendered {
        status: page.status(),
        handled,
        html: page.view().to_html(),
    }
}
