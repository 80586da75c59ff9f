// SPDX-License-Identifier: MPL-2.0
//! Focused product detail overlay.
//!
//! The modal shows one product at a time over a dimmed backdrop: an image
//! pager on one side, the description, usage recommendation, and quote
//! call-to-action on the other. The pager index lives here and is reborn at
//! zero with every new `State`, so switching products can never leak the
//! previous position.
//!
//! Closing is always the parent's decision: the close button, a press on the
//! dimmed backdrop, and Escape all surface as [`Event::Close`]; presses on
//! the content panel are swallowed by the panel itself.

use crate::catalog::Product;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::image::{Handle, Image};
use iced::widget::{button, mouse_area, opaque, Column, Container, Row, Text};
use iced::{ContentFit, Element, Length};

/// Pager state for one focused product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct State {
    product_index: usize,
    image_index: usize,
}

impl State {
    /// Focuses a product, starting at its first image.
    pub fn new(product_index: usize) -> Self {
        Self {
            product_index,
            image_index: 0,
        }
    }

    pub fn product_index(&self) -> usize {
        self.product_index
    }

    pub fn image_index(&self) -> usize {
        self.image_index
    }

    /// Advances the pager, wrapping modulo `image_count`. No-op without images.
    pub fn next_image(&mut self, image_count: usize) {
        if image_count == 0 {
            return;
        }
        self.image_index = (self.image_index + 1) % image_count;
    }

    /// Steps the pager back, wrapping modulo `image_count`.
    pub fn previous_image(&mut self, image_count: usize) {
        if image_count == 0 {
            return;
        }
        self.image_index = (self.image_index + image_count - 1) % image_count;
    }
}

/// Messages emitted by the modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    NextImage,
    PreviousImage,
    CloseRequested,
    BackdropPressed,
    RequestQuote,
}

/// Events propagated to the owning gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    Close,
    RequestQuote,
}

/// Process a modal message against the pager state.
#[must_use]
pub fn update(state: &mut State, message: Message, image_count: usize) -> Event {
    match message {
        Message::NextImage => {
            state.next_image(image_count);
            Event::None
        }
        Message::PreviousImage => {
            state.previous_image(image_count);
            Event::None
        }
        Message::CloseRequested | Message::BackdropPressed => Event::Close,
        Message::RequestQuote => Event::RequestQuote,
    }
}

/// Contextual data needed to render the modal.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub product: &'a Product,
    pub image_index: usize,
}

/// Render the full-window overlay: dimmed backdrop plus centered panel.
///
/// The outer opaque layer swallows every event aimed at the page below it,
/// which is what suspends background scrolling while the modal is up.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let panel = Container::new(panel_content(&ctx))
        .max_width(sizing::MODAL_MAX_WIDTH)
        .padding(spacing::LG)
        .style(styles::overlay::modal_panel);

    let backdrop = Container::new(opaque(panel))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .padding(spacing::LG)
        .style(styles::overlay::backdrop);

    opaque(mouse_area(backdrop).on_press(Message::BackdropPressed)).into()
}

fn panel_content<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let close_button: Element<'a, Message> = button(icons::sized(icons::close(), sizing::ICON_SM))
        .on_press(Message::CloseRequested)
        .padding(spacing::XXS)
        .style(styles::button::carousel_arrow)
        .into();

    let header = Row::new()
        .width(Length::Fill)
        .push(
            Text::new(ctx.product.name.as_str())
                .size(typography::TITLE_MD)
                .width(Length::Fill),
        )
        .push(close_button);

    let body = Row::new()
        .spacing(spacing::LG)
        .push(image_pager(ctx))
        .push(detail_column(ctx));

    Column::new()
        .spacing(spacing::MD)
        .push(header)
        .push(body)
        .into()
}

/// Image region with previous/next paging and a position counter. A product
/// without images degrades to an empty captioned region.
fn image_pager<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let images = &ctx.product.images;

    if images.is_empty() {
        return Container::new(Text::new(ctx.i18n.tr("modal-no-images")).size(typography::BODY))
            .width(Length::Fixed(sizing::MODAL_IMAGE_SIZE))
            .height(Length::Fixed(sizing::MODAL_IMAGE_SIZE))
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .style(styles::container::inset)
            .into();
    }

    let index = ctx.image_index.min(images.len() - 1);
    let image = Image::new(Handle::from_path(&images[index]))
        .width(Length::Fixed(sizing::MODAL_IMAGE_SIZE))
        .height(Length::Fixed(sizing::MODAL_IMAGE_SIZE))
        .content_fit(ContentFit::Cover);

    let mut column = Column::new().spacing(spacing::XS).push(image);

    if images.len() > 1 {
        let previous = button(icons::sized(icons::chevron_left(), sizing::ICON_SM))
            .on_press(Message::PreviousImage)
            .padding(spacing::XXS)
            .style(styles::button::carousel_arrow);
        let next = button(icons::sized(icons::chevron_right(), sizing::ICON_SM))
            .on_press(Message::NextImage)
            .padding(spacing::XXS)
            .style(styles::button::carousel_arrow);

        let counter = Container::new(
            Text::new(format!("{} / {}", index + 1, images.len())).size(typography::CAPTION),
        )
        .padding([spacing::XXS, spacing::XS])
        .style(styles::overlay::position_counter);

        let controls = Row::new()
            .width(Length::Fixed(sizing::MODAL_IMAGE_SIZE))
            .spacing(spacing::SM)
            .align_y(Vertical::Center)
            .push(previous)
            .push(
                Container::new(counter)
                    .width(Length::Fill)
                    .align_x(Horizontal::Center),
            )
            .push(next);

        column = column.push(controls);
    }

    column.into()
}

fn detail_column<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let description = Text::new(ctx.product.description.as_str()).size(typography::BODY);

    let recommendation = Container::new(
        Column::new()
            .spacing(spacing::XS)
            .push(
                Text::new(ctx.i18n.tr("modal-recommendation-title")).size(typography::BODY_LG),
            )
            .push(Text::new(ctx.product.recommendation.as_str()).size(typography::BODY)),
    )
    .padding(spacing::SM)
    .width(Length::Fill)
    .style(styles::container::inset);

    let quote_button = button(
        Row::new()
            .spacing(spacing::XS)
            .align_y(Vertical::Center)
            .push(Text::new(ctx.i18n.tr("modal-quote-button")).size(typography::BODY_LG))
            .push(icons::sized(icons::external_link(), sizing::ICON_SM)),
    )
    .on_press(Message::RequestQuote)
    .padding([spacing::SM, spacing::LG])
    .style(styles::button::primary);

    Column::new()
        .spacing(spacing::MD)
        .width(Length::Fill)
        .push(description)
        .push(recommendation)
        .push(quote_button)
        .into()
}
