// SPDX-License-Identifier: MPL-2.0
//! Product gallery: a card carousel whose cards open the detail modal.
//!
//! The gallery owns the product list for the lifetime of the page, the
//! carousel over it, and the modal selection. The selection is an index into
//! the owned list, so an open modal always refers to a product that is
//! actually in the gallery. There is never more than one modal: opening is
//! ignored while one is up, and switching products goes through close and
//! reopen.

use crate::catalog::Product;
use crate::i18n::fluent::I18n;
use crate::ui::carousel::{self, Carousel};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::product_modal;
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::image::{Handle, Image};
use iced::widget::{button, mouse_area, tooltip, Column, Container, Row, Stack, Text};
use iced::{ContentFit, Element, Length};

/// Gallery state: the product list, its carousel, and the modal selection.
#[derive(Debug, Clone, PartialEq)]
pub struct State {
    products: Vec<Product>,
    carousel: Carousel,
    modal: Option<product_modal::State>,
}

/// Messages emitted by the gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Carousel(carousel::Message),
    CardActivated(usize),
    Modal(product_modal::Message),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    /// A modal came up; the parent should suspend background scrolling.
    ModalOpened,
    /// The modal went away; the parent should restore scrolling.
    ModalClosed,
    /// The user asked for a quote on the focused product.
    RequestQuote(String),
}

impl State {
    pub fn new(products: Vec<Product>, options: carousel::Options) -> Self {
        let carousel = Carousel::new(products.len(), options);
        Self {
            products,
            carousel,
            modal: None,
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal.is_some()
    }

    /// The product the open modal refers to, if any.
    pub fn selected_product(&self) -> Option<&Product> {
        self.modal
            .as_ref()
            .and_then(|modal| self.products.get(modal.product_index()))
    }

    pub fn modal(&self) -> Option<&product_modal::State> {
        self.modal.as_ref()
    }

    /// Window resized: re-resolve how many cards fit.
    pub fn set_viewport_width(&mut self, width: f32) {
        self.carousel.set_viewport_width(width);
    }
}

/// Process a gallery message and return the corresponding event.
#[must_use]
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::Carousel(message) => {
            state.carousel.update(message);
            Event::None
        }
        Message::CardActivated(index) => {
            // Reopening over an open modal would swap products directly,
            // which the close/reopen flow exists to prevent.
            if state.modal.is_none() && index < state.products.len() {
                state.modal = Some(product_modal::State::new(index));
                Event::ModalOpened
            } else {
                Event::None
            }
        }
        Message::Modal(message) => {
            let Some(modal) = state.modal.as_mut() else {
                return Event::None;
            };
            let image_count = state
                .products
                .get(modal.product_index())
                .map_or(0, |product| product.images.len());

            match product_modal::update(modal, message, image_count) {
                product_modal::Event::None => Event::None,
                product_modal::Event::Close => {
                    state.modal = None;
                    Event::ModalClosed
                }
                product_modal::Event::RequestQuote => state
                    .products
                    .get(modal.product_index())
                    .map_or(Event::None, |product| {
                        Event::RequestQuote(product.quote_url.clone())
                    }),
            }
        }
    }
}

/// Contextual data needed to render the gallery strip.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

/// Render the card strip with its navigation arrows.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let state = ctx.state;

    if state.products.is_empty() {
        return Container::new(Text::new(ctx.i18n.tr("gallery-empty")).size(typography::BODY_LG))
            .width(Length::Fill)
            .padding(spacing::XL)
            .align_x(Horizontal::Center)
            .into();
    }

    let mut strip = Row::new().spacing(spacing::MD);
    for index in state.carousel.visible_range() {
        strip = strip.push(card(&state.products[index], index));
    }

    // Hover pauses the autoplay driver, when one is configured.
    let strip = mouse_area(strip)
        .on_enter(Message::Carousel(carousel::Message::PointerEntered))
        .on_exit(Message::Carousel(carousel::Message::PointerExited));

    let previous = arrow_button(
        icons::arrow_left(),
        state.carousel.can_scroll_previous(),
        Message::Carousel(carousel::Message::Previous),
        ctx.i18n.tr("gallery-previous"),
    );
    let next = arrow_button(
        icons::arrow_right(),
        state.carousel.can_scroll_next(),
        Message::Carousel(carousel::Message::Next),
        ctx.i18n.tr("gallery-next"),
    );

    let strip_alignment = match state.carousel.align() {
        carousel::Align::Start => Horizontal::Left,
        carousel::Align::Center => Horizontal::Center,
    };

    Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(previous)
        .push(
            Container::new(strip)
                .width(Length::Fill)
                .align_x(strip_alignment),
        )
        .push(next)
        .into()
}

fn arrow_button<'a>(
    icon: iced::widget::svg::Svg<'static>,
    enabled: bool,
    message: Message,
    tip: String,
) -> Element<'a, Message> {
    let content = icons::sized(icon, sizing::ICON_SM);
    if enabled {
        styles::tooltip::styled(
            button(content)
                .on_press(message)
                .padding(spacing::XS)
                .style(styles::button::carousel_arrow),
            tip,
            tooltip::Position::Top,
        )
        .into()
    } else {
        button(content)
            .padding(spacing::XS)
            .style(styles::button::disabled())
            .into()
    }
}

/// One product card: image, optional badge, name, and description.
fn card(product: &Product, index: usize) -> Element<'_, Message> {
    let image: Element<'_, Message> = match product.images.first() {
        Some(path) => Image::new(Handle::from_path(path))
            .width(Length::Fill)
            .height(Length::Fixed(sizing::CARD_IMAGE_HEIGHT))
            .content_fit(ContentFit::Cover)
            .into(),
        None => Container::new(Text::new(""))
            .width(Length::Fill)
            .height(Length::Fixed(sizing::CARD_IMAGE_HEIGHT))
            .style(styles::container::inset)
            .into(),
    };

    let mut image_stack = Stack::new().push(image);
    if let Some(badge) = &product.badge {
        image_stack = image_stack.push(
            Container::new(
                Container::new(Text::new(badge.as_str()).size(typography::CAPTION))
                    .padding([spacing::XXS, spacing::XS])
                    .style(styles::container::badge),
            )
            .padding(spacing::SM),
        );
    }

    let details = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(product.name.as_str()).size(typography::TITLE_SM))
        .push(Text::new(product.description.as_str()).size(typography::BODY));

    let content = Column::new()
        .spacing(spacing::SM)
        .push(image_stack)
        .push(details);

    button(content)
        .on_press(Message::CardActivated(index))
        .padding(spacing::XS)
        .width(Length::FillPortion(1))
        .style(styles::button::card)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn sample_products(count: usize) -> Vec<Product> {
        (0..count)
            .map(|i| Product {
                id: format!("product-{i}"),
                name: format!("Product {i}"),
                description: "A product.".into(),
                recommendation: "Use gently.".into(),
                badge: (i == 0).then(|| "New".to_string()),
                images: vec![
                    PathBuf::from(format!("images/p{i}-1.jpg")),
                    PathBuf::from(format!("images/p{i}-2.jpg")),
                    PathBuf::from(format!("images/p{i}-3.jpg")),
                ],
                quote_url: format!("https://example.test/quote/{i}"),
            })
            .collect()
    }

    fn gallery(count: usize) -> State {
        State::new(
            sample_products(count),
            carousel::Options {
                loop_around: true,
                per_view: carousel::PerView::CARDS,
                ..carousel::Options::default()
            },
        )
    }

    #[test]
    fn card_activation_opens_modal_for_that_product() {
        let mut state = gallery(4);
        let event = update(&mut state, Message::CardActivated(2));
        assert_eq!(event, Event::ModalOpened);
        assert!(state.is_modal_open());
        assert_eq!(state.selected_product().map(|p| p.id.as_str()), Some("product-2"));
    }

    #[test]
    fn activation_while_open_is_ignored() {
        let mut state = gallery(4);
        let _ = update(&mut state, Message::CardActivated(2));
        let event = update(&mut state, Message::CardActivated(1));
        assert_eq!(event, Event::None);
        assert_eq!(state.selected_product().map(|p| p.id.as_str()), Some("product-2"));
    }

    #[test]
    fn out_of_bounds_activation_is_ignored() {
        let mut state = gallery(2);
        let event = update(&mut state, Message::CardActivated(7));
        assert_eq!(event, Event::None);
        assert!(!state.is_modal_open());
    }

    #[test]
    fn closing_clears_the_selection() {
        let mut state = gallery(3);
        let _ = update(&mut state, Message::CardActivated(0));
        let event = update(
            &mut state,
            Message::Modal(product_modal::Message::CloseRequested),
        );
        assert_eq!(event, Event::ModalClosed);
        assert!(!state.is_modal_open());
        assert!(state.selected_product().is_none());
    }

    #[test]
    fn backdrop_press_closes_like_the_button() {
        let mut state = gallery(3);
        let _ = update(&mut state, Message::CardActivated(0));
        let event = update(
            &mut state,
            Message::Modal(product_modal::Message::BackdropPressed),
        );
        assert_eq!(event, Event::ModalClosed);
    }

    #[test]
    fn reopening_resets_image_index() {
        let mut state = gallery(3);
        let _ = update(&mut state, Message::CardActivated(0));
        let _ = update(&mut state, Message::Modal(product_modal::Message::NextImage));
        assert_eq!(state.modal().map(product_modal::State::image_index), Some(1));

        let _ = update(
            &mut state,
            Message::Modal(product_modal::Message::CloseRequested),
        );
        let _ = update(&mut state, Message::CardActivated(1));
        assert_eq!(state.modal().map(product_modal::State::image_index), Some(0));
    }

    #[test]
    fn quote_event_carries_the_product_url() {
        let mut state = gallery(3);
        let _ = update(&mut state, Message::CardActivated(1));
        let event = update(
            &mut state,
            Message::Modal(product_modal::Message::RequestQuote),
        );
        assert_eq!(
            event,
            Event::RequestQuote("https://example.test/quote/1".into())
        );
        // Requesting a quote leaves the modal up.
        assert!(state.is_modal_open());
    }

    #[test]
    fn modal_messages_without_modal_are_ignored() {
        let mut state = gallery(3);
        let event = update(&mut state, Message::Modal(product_modal::Message::NextImage));
        assert_eq!(event, Event::None);
    }

    #[test]
    fn empty_gallery_disables_navigation() {
        let mut state = gallery(0);
        assert!(!state.carousel().can_scroll_previous());
        assert!(!state.carousel().can_scroll_next());

        let _ = update(&mut state, Message::Carousel(carousel::Message::Next));
        assert_eq!(state.carousel().index(), 0);
    }

    #[test]
    fn gallery_view_renders() {
        let i18n = I18n::default();
        let state = gallery(4);
        let _element = view(ViewContext {
            i18n: &i18n,
            state: &state,
        });
    }

    #[test]
    fn empty_gallery_view_renders() {
        let i18n = I18n::default();
        let state = gallery(0);
        let _element = view(ViewContext {
            i18n: &i18n,
            state: &state,
        });
    }
}
