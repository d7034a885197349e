/// View layer
///
/// - `shell.rs` - header with navigation links and theme toggle
/// - `portfolio.rs` - search bar and card grid
/// - `pages.rs` - home, blog and contacts pages

pub mod pages;
pub mod portfolio;
pub mod shell;

use std::path::Path;

use iced::widget::{container, image, text};
use iced::{ContentFit, Element, Length};

use crate::Message;

/// An image from disk, or a box with its alt text when the file is missing
fn picture<'a>(path: &Path, alt: String, width: Length, height: f32) -> Element<'a, Message> {
    if path.is_file() {
        image(image::Handle::from_path(path))
            .content_fit(ContentFit::Cover)
            .width(width)
            .height(Length::Fixed(height))
            .into()
    } else {
        container(text(alt).size(12))
            .center_x(width)
            .center_y(Length::Fixed(height))
            .style(container::rounded_box)
            .into()
    }
}
