// SPDX-License-Identifier: MPL-2.0
//! Hero banner: a full-width, one-slide-at-a-time carousel with captions.
//!
//! The banner autoplays by default and keeps going after manual navigation;
//! hovering pauses it. Slides come straight from the catalog.

use crate::catalog::Slide;
use crate::i18n::fluent::I18n;
use crate::ui::carousel::{self, Carousel};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::image::{Handle, Image};
use iced::widget::{button, mouse_area, tooltip, Column, Container, Row, Stack, Text};
use iced::{ContentFit, Element, Length};

/// Banner state: the slide list and its carousel.
#[derive(Debug, Clone, PartialEq)]
pub struct State {
    slides: Vec<Slide>,
    carousel: Carousel,
}

/// Messages emitted by the banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Carousel(carousel::Message),
}

impl State {
    pub fn new(slides: Vec<Slide>, options: carousel::Options) -> Self {
        let carousel = Carousel::new(slides.len(), options);
        Self { slides, carousel }
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    pub fn set_viewport_width(&mut self, width: f32) {
        self.carousel.set_viewport_width(width);
    }
}

/// Process a banner message.
pub fn update(state: &mut State, message: Message) {
    match message {
        Message::Carousel(message) => state.carousel.update(message),
    }
}

/// Contextual data needed to render the banner.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

/// Render the current slide with its caption overlay and arrows.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let state = ctx.state;

    let Some(slide) = state.slides.get(state.carousel.index()) else {
        // No slides: the banner degrades to nothing rather than a broken box.
        return Column::new().into();
    };

    let image = Image::new(Handle::from_path(&slide.image))
        .width(Length::Fill)
        .height(Length::Fixed(sizing::HERO_HEIGHT))
        .content_fit(ContentFit::Cover);

    let mut stack = Stack::new().push(image);

    if slide.title.is_some() || slide.description.is_some() {
        stack = stack.push(
            Container::new(caption(slide))
                .width(Length::Fill)
                .height(Length::Fixed(sizing::HERO_HEIGHT))
                .align_y(Vertical::Bottom)
                .padding(spacing::LG),
        );
    }

    if state.slides.len() > 1 {
        stack = stack.push(arrows(ctx.i18n));
    }

    mouse_area(stack)
        .on_enter(Message::Carousel(carousel::Message::PointerEntered))
        .on_exit(Message::Carousel(carousel::Message::PointerExited))
        .into()
}

fn caption(slide: &Slide) -> Element<'_, Message> {
    let mut column = Column::new().spacing(spacing::XS);
    if let Some(title) = &slide.title {
        column = column.push(Text::new(title.as_str()).size(typography::TITLE_LG));
    }
    if let Some(description) = &slide.description {
        column = column.push(Text::new(description.as_str()).size(typography::BODY_LG));
    }

    Container::new(column)
        .padding(spacing::MD)
        .style(styles::overlay::caption)
        .into()
}

fn arrows<'a>(i18n: &I18n) -> Element<'a, Message> {
    let previous = styles::tooltip::styled(
        button(icons::sized(icons::arrow_left(), sizing::ICON_SM))
            .padding(spacing::XS)
            .style(styles::button::carousel_arrow)
            .on_press(Message::Carousel(carousel::Message::Previous)),
        i18n.tr("hero-previous"),
        tooltip::Position::Top,
    );
    let next = styles::tooltip::styled(
        button(icons::sized(icons::arrow_right(), sizing::ICON_SM))
            .padding(spacing::XS)
            .style(styles::button::carousel_arrow)
            .on_press(Message::Carousel(carousel::Message::Next)),
        i18n.tr("hero-next"),
        tooltip::Position::Top,
    );

    Row::new()
        .width(Length::Fill)
        .height(Length::Fixed(sizing::HERO_HEIGHT))
        .align_y(Vertical::Center)
        .padding(spacing::MD)
        .push(Container::new(previous).width(Length::Fill).align_x(Horizontal::Left))
        .push(Container::new(next).align_x(Horizontal::Right))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::time::Duration;

    fn sample_slides(count: usize) -> Vec<Slide> {
        (0..count)
            .map(|i| Slide {
                image: PathBuf::from(format!("images/slide-{i}.jpg")),
                alt: format!("Slide {i}"),
                title: (i == 0).then(|| "Made by hand".to_string()),
                description: None,
            })
            .collect()
    }

    fn banner(count: usize) -> State {
        State::new(
            sample_slides(count),
            carousel::Options {
                loop_around: true,
                autoplay: Some(carousel::Autoplay {
                    interval: Duration::from_secs(5),
                    resume_after_interaction: true,
                }),
                ..carousel::Options::default()
            },
        )
    }

    #[test]
    fn navigation_wraps_across_slides() {
        let mut state = banner(3);
        update(&mut state, Message::Carousel(carousel::Message::Previous));
        assert_eq!(state.carousel().index(), 2);
        update(&mut state, Message::Carousel(carousel::Message::Next));
        assert_eq!(state.carousel().index(), 0);
    }

    #[test]
    fn autoplay_keeps_running_after_manual_navigation() {
        let mut state = banner(3);
        update(&mut state, Message::Carousel(carousel::Message::Next));
        assert!(state.carousel().autoplay_running());
    }

    #[test]
    fn hero_view_renders() {
        let i18n = I18n::default();
        let state = banner(3);
        let _element = view(ViewContext {
            i18n: &i18n,
            state: &state,
        });
    }

    #[test]
    fn empty_hero_view_renders() {
        let i18n = I18n::default();
        let state = banner(0);
        let _element = view(ViewContext {
            i18n: &i18n,
            state: &state,
        });
    }
}
