/// Header of every page: owner badge, navigation links, theme toggle
use iced::widget::{button, container, horizontal_space, row, text, Row};
use iced::{Alignment, Background, Element, Length, Theme};

use crate::state::catalog::Catalog;
use crate::state::route::{LinkVariant, NavDestination, Route};
use crate::state::theme::ThemeMode;
use crate::Message;

/// Height of the header bar
pub const HEADER_HEIGHT: f32 = 80.0;

/// Widest the header content grows before it is centered
const MAX_CONTENT_WIDTH: f32 = 1280.0;

pub fn header<'a>(catalog: &'a Catalog, route: &Route, theme_mode: ThemeMode) -> Element<'a, Message> {
    let profile = &catalog.profile;

    let badge = button(
        row![
            super::picture(
                &catalog.image_path(&profile.photo),
                format!("{}' Profile Picture", first_name(&profile.name)),
                Length::Fixed(32.0),
                32.0,
            ),
            text(&profile.name).size(16),
        ]
        .spacing(12)
        .align_y(Alignment::Center),
    )
    .padding(8)
    .style(button::text)
    .on_press(Message::Navigate(NavDestination::Home.path().to_string()));

    let toggle = button(text(theme_mode.toggle_icon()).size(18))
        .padding([6, 12])
        .style(button::text)
        .on_press(Message::ToggleTheme);

    let content = row![
        badge,
        horizontal_space(),
        nav_links(route),
        horizontal_space(),
        toggle,
    ]
    .align_y(Alignment::Center)
    .padding([0, 8]);

    container(container(content).max_width(MAX_CONTENT_WIDTH))
        .center_x(Length::Fill)
        .center_y(Length::Fixed(HEADER_HEIGHT))
        .style(header_style)
        .into()
}

fn nav_links<'a>(route: &Route) -> Row<'a, Message> {
    Row::with_children(NavDestination::ALL.iter().map(|&destination| {
        let link = button(text(destination.label()).size(13))
            .padding([4, 12])
            .on_press(Message::Navigate(destination.path().to_string()));

        match destination.variant(route) {
            LinkVariant::Filled => link.style(button::primary),
            LinkVariant::Subtle => link.style(button::text),
        }
        .into()
    }))
    .spacing(8)
}

fn header_style(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(palette.background.base.color)),
        text_color: Some(palette.background.base.text),
        ..container::Style::default()
    }
}

fn first_name(name: &str) -> &str {
    name.split_whitespace().next().unwrap_or(name)
}
