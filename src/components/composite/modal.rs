//! Error Modal Component
//!
//! Overlay showing a title, a message and an "Okay" button. It holds no
//! state: whoever owns the notice mounts it and passes the dismiss handler.

use gpui::{
    div, prelude::*, px, App, ClickEvent, InteractiveElement, IntoElement, ParentElement,
    RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window,
};
use std::rc::Rc;

use crate::components::primitives::{Button, Card};
use crate::states::Notice;
use crate::theme::colors::RosterColors;

type DismissHandler = Rc<dyn Fn(&mut Window, &mut App) + 'static>;

/// Error modal component
#[derive(IntoElement)]
pub struct ErrorModal {
    title: SharedString,
    message: SharedString,
    on_dismiss: Option<DismissHandler>,
}

impl ErrorModal {
    /// Create a new error modal
    pub fn new(title: impl Into<SharedString>, message: impl Into<SharedString>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            on_dismiss: None,
        }
    }

    /// Create a modal showing `notice`
    pub fn from_notice(notice: &Notice) -> Self {
        Self::new(notice.title.clone(), notice.message.clone())
    }

    /// Set the dismiss handler, fired by the backdrop and the confirm button
    pub fn on_dismiss(mut self, handler: impl Fn(&mut Window, &mut App) + 'static) -> Self {
        self.on_dismiss = Some(Rc::new(handler));
        self
    }
}

impl RenderOnce for ErrorModal {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let backdrop_dismiss = self.on_dismiss.clone();
        let confirm_dismiss = self.on_dismiss;

        // Backdrop
        div()
            .id("error-modal-backdrop")
            .absolute()
            .inset_0()
            .bg(RosterColors::backdrop())
            // Nothing under the overlay may see the pointer.
            .occlude()
            .flex()
            .items_center()
            .justify_center()
            .when_some(backdrop_dismiss, |el, handler| {
                el.on_click(move |_event: &ClickEvent, window, cx| {
                    handler(window, cx);
                })
            })
            .child(
                Card::new()
                    .min_w(px(360.0))
                    .max_w(px(560.0))
                    .p_0()
                    .overflow_hidden()
                    // Header
                    .child(
                        div()
                            .px_6()
                            .py_4()
                            .bg(RosterColors::button_primary_bg())
                            .text_color(RosterColors::text_light())
                            .text_size(px(18.0))
                            .font_weight(gpui::FontWeight::BOLD)
                            .child(self.title),
                    )
                    // Content
                    .child(
                        div()
                            .px_6()
                            .py_4()
                            .text_color(RosterColors::text_primary())
                            .child(self.message),
                    )
                    // Actions
                    .child(
                        div().px_6().py_3().flex().justify_end().child(
                            Button::primary("error-modal-confirm", "Okay").on_click(
                                move |_event, window, cx| {
                                    // The backdrop must not see this click as well.
                                    cx.stop_propagation();
                                    if let Some(handler) = confirm_dismiss.as_ref() {
                                        handler(window, cx);
                                    }
                                },
                            ),
                        ),
                    ),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gpui::{point, Context, Modifiers, Render, TestAppContext};
    use std::cell::Cell;

    /// A clickable page with the modal mounted over it
    struct Covered {
        page_clicks: Rc<Cell<usize>>,
        dismissals: Rc<Cell<usize>>,
    }

    impl Render for Covered {
        fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
            let page_clicks = self.page_clicks.clone();
            let dismissals = self.dismissals.clone();
            div()
                .relative()
                .size_full()
                .child(div().id("page").size_full().on_click(move |_event, _window, _cx| {
                    page_clicks.set(page_clicks.get() + 1);
                }))
                .child(
                    ErrorModal::new("No Data", "There are no records to display.")
                        .on_dismiss(move |_window, _cx| dismissals.set(dismissals.get() + 1)),
                )
        }
    }

    #[gpui::test]
    fn test_backdrop_click_dismisses_without_reaching_page(cx: &mut TestAppContext) {
        let page_clicks = Rc::new(Cell::new(0));
        let dismissals = Rc::new(Cell::new(0));
        let (_view, cx) = cx.add_window_view(|_window, _cx| Covered {
            page_clicks: page_clicks.clone(),
            dismissals: dismissals.clone(),
        });

        cx.simulate_click(point(px(5.0), px(5.0)), Modifiers::none());

        assert_eq!(dismissals.get(), 1);
        assert_eq!(page_clicks.get(), 0);
    }

    #[test]
    fn test_from_notice_copies_text() {
        let modal = ErrorModal::from_notice(&Notice::no_data());
        assert_eq!(modal.title.as_ref(), "No Data");
        assert_eq!(modal.message.as_ref(), "There are no records to display.");
        assert!(modal.on_dismiss.is_none());
    }
}
