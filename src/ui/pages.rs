/// Pages other than the portfolio
use iced::widget::{button, column, text, Column};
use iced::{Element, Length};

use crate::state::catalog::Catalog;
use crate::state::route::NavDestination;
use crate::Message;

pub fn home(catalog: &Catalog) -> Element<'_, Message> {
    let profile = &catalog.profile;
    column![
        super::picture(
            &catalog.image_path(&profile.photo),
            profile.name.clone(),
            Length::Fixed(160.0),
            160.0,
        ),
        text(&profile.name).size(40),
        text(&profile.tagline).size(18),
        button("See my portfolio")
            .padding(10)
            .on_press(Message::Navigate(NavDestination::Portfolio.path().to_string())),
    ]
    .spacing(20)
    .into()
}

pub fn blog_index(catalog: &Catalog) -> Element<'_, Message> {
    let posts = Column::with_children(catalog.posts.iter().map(|post| {
        button(
            column![
                text(&post.date).size(13),
                text(&post.title).size(22),
                text(&post.summary).size(14),
            ]
            .spacing(6),
        )
        .width(Length::Fill)
        .padding(12)
        .style(button::text)
        .on_press(Message::Navigate(format!("/blog/{}", post.slug)))
        .into()
    }))
    .spacing(12);

    column![text("Blog").size(36), posts].spacing(24).into()
}

pub fn blog_post<'a>(catalog: &'a Catalog, slug: &str) -> Element<'a, Message> {
    match catalog.post(slug) {
        Some(post) => column![
            text(&post.date).size(13),
            text(&post.title).size(36),
            text(&post.summary).size(16),
            back_to_blog(),
        ]
        .spacing(16)
        .into(),
        None => column![text(format!("No post named {slug:?}")).size(20), back_to_blog()]
            .spacing(16)
            .into(),
    }
}

fn back_to_blog<'a>() -> Element<'a, Message> {
    button("← All posts")
        .style(button::text)
        .on_press(Message::Navigate(NavDestination::Blog.path().to_string()))
        .into()
}

pub fn contacts(catalog: &Catalog) -> Element<'_, Message> {
    let links = Column::with_children(catalog.profile.contacts.iter().map(|contact| {
        button(text(&contact.label).size(18))
            .padding([6, 12])
            .style(button::secondary)
            .on_press(Message::OpenUrl(contact.url.clone()))
            .into()
    }))
    .spacing(12);

    column![text("Contacts").size(36), links].spacing(24).into()
}

pub fn not_found<'a>(path: &str) -> Element<'a, Message> {
    column![
        text("Page not found").size(36),
        text(path.to_string()).size(14),
        button("Go home")
            .padding(10)
            .on_press(Message::Navigate(NavDestination::Home.path().to_string())),
    ]
    .spacing(16)
    .into()
}
