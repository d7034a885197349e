use std::sync::Arc;

use iced::widget::{column, container, scrollable, stack, text, Space};
use iced::{Element, Length, Padding, Task, Theme};

mod config;
mod external;
mod state;
mod ui;

use config::Config;
use state::catalog::{self, Catalog, CatalogError};
use state::headroom::Headroom;
use state::route::{Page, Route};
use state::search::FilteredView;
use state::theme::ThemeMode;

/// Gap between the header and the top of the page content
const CONTENT_GAP: f32 = 20.0;

/// Main application state
struct PortfolioSite {
    catalog: Catalog,
    /// Search query and the entries matching it
    portfolio: FilteredView,
    route: Route,
    headroom: Headroom,
    theme_mode: ThemeMode,
    /// Last problem worth telling the user about
    status: Option<String>,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// Catalog file finished loading
    CatalogLoaded(Result<Catalog, Arc<CatalogError>>),
    /// A link to another page was pressed
    Navigate(String),
    /// The page scrolled to this vertical offset
    Scrolled(f32),
    /// Text typed into the portfolio search box
    SearchChanged(String),
    /// A link leaving the app was pressed
    OpenUrl(String),
    ToggleTheme,
}

fn page_scroll_id() -> scrollable::Id {
    scrollable::Id::new("page")
}

impl PortfolioSite {
    fn new(config: Config) -> (Self, Task<Message>) {
        let catalog = match Catalog::bundled() {
            Ok(catalog) => catalog,
            Err(err) => {
                tracing::error!(%err, "bundled catalog is invalid");
                Catalog::empty()
            }
        };

        tracing::info!(
            route = config.initial_route.path(),
            entries = catalog.portfolio.len(),
            "portfolio site started"
        );

        let site = PortfolioSite {
            portfolio: FilteredView::new(catalog.portfolio.clone()),
            catalog,
            route: config.initial_route,
            headroom: Headroom::default(),
            theme_mode: ThemeMode::default(),
            status: None,
        };

        let task = match config.catalog_path {
            Some(path) if path.is_file() => Task::perform(
                async move { catalog::load_catalog(path).await.map_err(Arc::new) },
                Message::CatalogLoaded,
            ),
            Some(path) => {
                tracing::info!(path = %path.display(), "no catalog file, using bundled catalog");
                Task::none()
            }
            None => Task::none(),
        };

        (site, task)
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::CatalogLoaded(Ok(catalog)) => {
                self.portfolio.set_entries(catalog.portfolio.clone());
                self.catalog = catalog;
                Task::none()
            }
            Message::CatalogLoaded(Err(err)) => {
                tracing::warn!(%err, "keeping bundled catalog");
                self.status = Some(format!("Could not load catalog: {err}"));
                Task::none()
            }
            Message::Navigate(path) => {
                let route = Route::new(path);
                if route == self.route {
                    return Task::none();
                }
                tracing::debug!(from = self.route.path(), to = route.path(), "navigate");
                self.route = route;
                self.headroom = Headroom::default();
                scrollable::scroll_to(page_scroll_id(), scrollable::AbsoluteOffset { x: 0.0, y: 0.0 })
            }
            Message::Scrolled(offset) => {
                if let Some(event) = self.headroom.update(offset) {
                    tracing::debug!(?event, offset, "header visibility changed");
                }
                Task::none()
            }
            Message::SearchChanged(query) => {
                self.portfolio.set_query(query);
                Task::none()
            }
            Message::OpenUrl(url) => {
                match external::open_url(&url) {
                    Ok(()) => self.status = None,
                    Err(err) => {
                        tracing::warn!(%url, %err, "could not open link");
                        self.status = Some(err.to_string());
                    }
                }
                Task::none()
            }
            Message::ToggleTheme => {
                self.theme_mode = self.theme_mode.toggled();
                Task::none()
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let page: Element<Message> = match self.route.page() {
            Page::Home => ui::pages::home(&self.catalog),
            Page::Portfolio => ui::portfolio::view(&self.catalog, &self.portfolio),
            Page::BlogIndex => ui::pages::blog_index(&self.catalog),
            Page::BlogPost(slug) => ui::pages::blog_post(&self.catalog, &slug),
            Page::Contacts => ui::pages::contacts(&self.catalog),
            Page::NotFound => ui::pages::not_found(self.route.path()),
        };

        let mut content = column![page].spacing(16);
        if let Some(status) = &self.status {
            content = content.push(text(status).size(14));
        }

        let body = scrollable(
            container(content)
                .padding(Padding {
                    top: ui::shell::HEADER_HEIGHT + CONTENT_GAP,
                    right: 16.0,
                    bottom: 16.0,
                    left: 16.0,
                })
                .center_x(Length::Fill),
        )
        .id(page_scroll_id())
        .on_scroll(|viewport| Message::Scrolled(viewport.absolute_offset().y))
        .width(Length::Fill)
        .height(Length::Fill);

        // The scrollable stays the first layer either way so its offset survives
        // the header collapsing.
        let header: Element<Message> = if self.headroom.is_pinned() {
            ui::shell::header(&self.catalog, &self.route, self.theme_mode)
        } else {
            Space::with_height(Length::Fixed(0.0)).into()
        };

        stack![body, header]
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }
}

fn init_tracing() {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into());
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

fn main() -> iced::Result {
    init_tracing();
    let config = Config::from_env();

    iced::application("Portfolio", PortfolioSite::update, PortfolioSite::view)
        .theme(PortfolioSite::theme)
        .centered()
        .run_with(move || PortfolioSite::new(config))
}
