/// Portfolio page: search bar over a wrapping grid of cards
use iced::widget::{button, column, container, row, text, text_input, Column};
use iced::{Alignment, Background, Border, Element, Length, Pixels, Theme};
use iced_aw::Wrap;

use crate::state::catalog::Catalog;
use crate::state::data::{CardLink, PortfolioEntry};
use crate::state::search::{FilteredView, GridItem};
use crate::Message;

const CARD_WIDTH: f32 = 360.0;
const CARD_PADDING: f32 = 16.0;
const COVER_HEIGHT: f32 = (CARD_WIDTH - 2.0 * CARD_PADDING) * 9.0 / 16.0;
const SEARCH_MAX_WIDTH: f32 = 640.0;

pub const NO_RESULTS: &str = "No portfolio found";

/// Icon shown next to a card's link line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardIcon {
    Link,
    LinkOff,
}

impl CardIcon {
    fn glyph(self) -> &'static str {
        match self {
            CardIcon::Link => "🔗",
            CardIcon::LinkOff => "⊘",
        }
    }
}

/// Bottom line of a card: the URL, the reason it is missing, or nothing
pub fn card_footer(entry: &PortfolioEntry) -> Option<(CardIcon, &str)> {
    match entry.link() {
        CardLink::External(url) => Some((CardIcon::Link, url)),
        CardLink::Unavailable(Some(reason)) => Some((CardIcon::LinkOff, reason)),
        CardLink::Unavailable(None) => None,
    }
}

/// Message sent when a card is pressed; `None` leaves the card disabled
pub fn card_action(entry: &PortfolioEntry) -> Option<Message> {
    match entry.link() {
        CardLink::External(url) => Some(Message::OpenUrl(url.to_string())),
        CardLink::Unavailable(_) => None,
    }
}

pub fn view<'a>(catalog: &'a Catalog, filtered: &'a FilteredView) -> Element<'a, Message> {
    let search = container(
        text_input("Search portfolio", filtered.query())
            .on_input(Message::SearchChanged)
            .padding(10)
            .width(Length::Fill),
    )
    .max_width(SEARCH_MAX_WIDTH);

    let cells = filtered
        .grid_items()
        .into_iter()
        .map(|item| match item {
            GridItem::Card(entry) => card(catalog, entry),
            GridItem::NoResults => text(NO_RESULTS).into(),
        })
        .collect();

    let grid = Wrap::with_elements(cells)
        .spacing(Pixels(16.0))
        .line_spacing(Pixels(24.0));

    column![search, grid].spacing(32).width(Length::Fill).into()
}

fn card<'a>(catalog: &'a Catalog, entry: &'a PortfolioEntry) -> Element<'a, Message> {
    let tags = Wrap::with_elements(entry.tags.iter().map(|tag| pill(tag)).collect())
        .spacing(Pixels(4.0))
        .line_spacing(Pixels(4.0));

    let body: Column<'a, Message> = column![
        super::picture(
            &catalog.image_path(&entry.image),
            format!("image of {}", entry.title),
            Length::Fill,
            COVER_HEIGHT,
        ),
        tags,
        text(&entry.year).size(13),
        text(&entry.title).size(20),
        text(&entry.description).size(14),
    ]
    .spacing(12);

    let body = match card_footer(entry) {
        Some((icon, label)) => body.push(
            row![text(icon.glyph()).size(16), text(label).size(13)]
                .spacing(8)
                .align_y(Alignment::Center),
        ),
        None => body,
    };

    button(body)
        .width(Length::Fixed(CARD_WIDTH))
        .padding(CARD_PADDING)
        .style(card_style)
        .on_press_maybe(card_action(entry))
        .into()
}

fn pill<'a>(tag: &'a str) -> Element<'a, Message> {
    container(text(tag).size(12))
        .padding([2, 10])
        .style(|theme: &Theme| {
            let palette = theme.extended_palette();
            container::Style {
                background: Some(Background::Color(palette.background.weak.color)),
                text_color: Some(palette.background.weak.text),
                border: Border {
                    radius: 12.0.into(),
                    ..Border::default()
                },
                ..container::Style::default()
            }
        })
        .into()
}

/// Cards look the same whether or not they link anywhere; hovering a
/// linked card highlights its border.
fn card_style(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let border_color = match status {
        button::Status::Hovered | button::Status::Pressed => palette.primary.strong.color,
        button::Status::Active | button::Status::Disabled => palette.background.strong.color,
    };

    button::Style {
        background: Some(Background::Color(palette.background.base.color)),
        text_color: palette.background.base.text,
        border: Border {
            color: border_color,
            width: 2.0,
            radius: 8.0.into(),
        },
        ..button::Style::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(url: Option<&str>, reason: Option<&str>) -> PortfolioEntry {
        PortfolioEntry {
            title: "Beta".into(),
            year: "2021".into(),
            description: "y".into(),
            tags: vec!["cli".into()],
            image: "beta.png".into(),
            url: url.map(Into::into),
            url_missing_reason: reason.map(Into::into),
        }
    }

    #[test]
    fn test_missing_url_with_reason_is_inert() {
        let e = entry(None, Some("private repository"));
        assert_eq!(card_footer(&e), Some((CardIcon::LinkOff, "private repository")));
        assert!(card_action(&e).is_none());
    }

    #[test]
    fn test_linked_card_opens_url() {
        let e = entry(Some("https://beta.dev"), None);
        assert_eq!(card_footer(&e), Some((CardIcon::Link, "https://beta.dev")));
        assert!(matches!(
            card_action(&e),
            Some(Message::OpenUrl(url)) if url == "https://beta.dev"
        ));
    }

    #[test]
    fn test_empty_url_shows_reason_and_is_inert() {
        let e: PortfolioEntry = serde_json::from_str(
            r#"{ "title": "Beta", "year": "2021", "description": "y", "image": "beta.png",
                 "url": "", "urlMissingReason": "private repository" }"#,
        )
        .unwrap();
        assert_eq!(card_footer(&e), Some((CardIcon::LinkOff, "private repository")));
        assert!(card_action(&e).is_none());
    }

    #[test]
    fn test_broken_link_icon_is_not_a_chain() {
        assert_ne!(CardIcon::LinkOff.glyph(), CardIcon::Link.glyph());
        assert!(!CardIcon::LinkOff.glyph().contains('⛓'));
    }

    #[test]
    fn test_no_url_no_reason_has_no_footer() {
        let e = entry(None, None);
        assert_eq!(card_footer(&e), None);
        assert!(card_action(&e).is_none());
    }
}
