//! Input Field Component
//!
//! Single-line input wrapping gpui-component's editor with a label, a clear
//! button, a password reveal toggle, a submit action and a caption line.

use gpui::{
    div, prelude::*, px, App, ClickEvent, Context, Entity, IntoElement, ParentElement, Render,
    SharedString, Styled, Subscription, Window,
};
use gpui_component::{
    h_flex,
    input::{Input, InputEvent, InputState},
    label::Label,
    v_flex, Icon, IconName,
};
use std::rc::Rc;
use tracing::debug;

use crate::components::primitives::{Button, ButtonSize, ButtonVariant};
use crate::states::{Caption, FieldChange, FieldState, NoticeHost, NoticeState};
use crate::theme::colors::RosterColors;

type ChangeHandler = Rc<dyn Fn(&FieldChange, &mut Window, &mut App) + 'static>;
type SubmitHandler = Rc<dyn Fn(&str, &mut Window, &mut App) + 'static>;

/// Input field view
pub struct InputField {
    id: SharedString,
    state: FieldState,
    input: Entity<InputState>,
    notices: Entity<NoticeState>,
    on_change: Option<ChangeHandler>,
    on_submit: Option<SubmitHandler>,
    _subscriptions: Vec<Subscription>,
}

impl InputField {
    /// Create an input field. The editor is seeded from `state` once.
    pub fn new(
        id: impl Into<SharedString>,
        state: FieldState,
        notices: Entity<NoticeState>,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let placeholder = state.placeholder_text().cloned().unwrap_or_default();
        let initial = state.value().to_string();
        let masked = state.is_masked();
        let kind = state.field_kind();

        let input = cx.new(|cx| {
            InputState::new(window, cx)
                .placeholder(placeholder)
                .default_value(initial)
                .masked(masked)
                .validate(move |text, _cx| kind.accepts(text))
        });

        let subscriptions = vec![cx.subscribe_in(
            &input,
            window,
            |this, input, event: &InputEvent, window, cx| match event {
                InputEvent::Change => {
                    let value = input.read(cx).value().to_string();
                    if let Some(change) = this.state.edit(value) {
                        this.emit_change(&change, window, cx);
                        cx.notify();
                    }
                }
                InputEvent::PressEnter { .. } => this.submit(window, cx),
                _ => {}
            },
        )];

        Self {
            id: id.into(),
            state,
            input,
            notices,
            on_change: None,
            on_submit: None,
            _subscriptions: subscriptions,
        }
    }

    /// Set the change handler
    pub fn on_change(&mut self, handler: impl Fn(&FieldChange, &mut Window, &mut App) + 'static) {
        self.on_change = Some(Rc::new(handler));
    }

    /// Set the submit handler; also shows the "Submit" button
    pub fn on_submit(&mut self, handler: impl Fn(&str, &mut Window, &mut App) + 'static) {
        self.on_submit = Some(Rc::new(handler));
    }

    pub fn set_loading(&mut self, loading: bool, cx: &mut Context<Self>) {
        self.state.set_loading(loading);
        cx.notify();
    }

    /// Mark the field invalid, optionally with a message shown under it
    pub fn set_invalid(&mut self, message: Option<SharedString>, cx: &mut Context<Self>) {
        self.state.set_invalid(message);
        cx.notify();
    }

    pub fn set_valid(&mut self, cx: &mut Context<Self>) {
        self.state.set_valid();
        cx.notify();
    }

    /// Empty the buffer and report the change, as the clear button does
    pub fn reset(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let change = self.state.clear();
        self.input
            .update(cx, |input, cx| input.set_value("", window, cx));
        self.emit_change(&change, window, cx);
        cx.notify();
    }

    /// Validate and hand the buffer to the submit handler
    pub fn submit(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        match self.state.submit() {
            Ok(value) => {
                if let Some(handler) = self.on_submit.clone() {
                    debug!(field = %self.id, "Field submitted");
                    handler(&value, window, cx);
                }
            }
            Err(notice) => {
                self.notices.update(cx, |notices, cx| {
                    notices.raise(notice);
                    cx.notify();
                });
            }
        }
    }

    fn toggle_reveal(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        self.state.toggle_reveal();
        let masked = self.state.is_masked();
        self.input
            .update(cx, |input, cx| input.set_masked(masked, window, cx));
        cx.notify();
    }

    fn emit_change(&self, change: &FieldChange, window: &mut Window, cx: &mut Context<Self>) {
        if let Some(handler) = self.on_change.clone() {
            handler(change, window, cx);
        }
    }

    fn render_label(&self) -> Option<impl IntoElement> {
        let label = self.state.label_text()?.clone();
        Some(
            h_flex()
                .gap_1()
                .child(
                    Label::new(label)
                        .text_sm()
                        .text_color(RosterColors::text_secondary()),
                )
                .when(self.state.is_required(), |el| {
                    el.child(Label::new("*").text_sm().text_color(RosterColors::danger()))
                }),
        )
    }

    fn render_caption(&self) -> Option<impl IntoElement> {
        let (text, color) = match self.state.caption()? {
            Caption::Helper(text) => (text, RosterColors::text_muted()),
            Caption::Error(text) => (text, RosterColors::danger()),
        };
        Some(div().text_xs().text_color(color).child(text))
    }

    fn render_loading() -> impl IntoElement {
        h_flex()
            .gap_1()
            .items_center()
            .text_color(RosterColors::text_muted())
            .child(Icon::new(IconName::Loader).size_4())
            .child(Label::new("Loading").text_xs())
    }
}

impl Render for InputField {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let id = self.id.clone();
        let border = if self.state.is_invalid() {
            RosterColors::danger()
        } else {
            RosterColors::input_border()
        };

        let clear_button = self.state.shows_clear().then(|| {
            Button::empty(SharedString::from(format!("{id}-clear")))
                .variant(ButtonVariant::Ghost)
                .size(ButtonSize::Small)
                .child(Icon::new(IconName::Close).size_4())
                .child("Clear input")
                .on_click(cx.listener(|this, _event: &ClickEvent, window, cx| {
                    this.reset(window, cx);
                }))
        });

        let reveal_button = self.state.shows_reveal_toggle().then(|| {
            let icon = if self.state.is_revealed() {
                IconName::EyeOff
            } else {
                IconName::Eye
            };
            Button::empty(SharedString::from(format!("{id}-reveal")))
                .variant(ButtonVariant::Ghost)
                .size(ButtonSize::Small)
                .child(Icon::new(icon).size_4())
                .child(self.state.reveal_label())
                .on_click(cx.listener(|this, _event: &ClickEvent, window, cx| {
                    this.toggle_reveal(window, cx);
                }))
        });

        let submit_button = self.on_submit.is_some().then(|| {
            Button::primary(SharedString::from(format!("{id}-submit")), "Submit")
                .size(ButtonSize::Small)
                .on_click(cx.listener(|this, _event: &ClickEvent, window, cx| {
                    this.submit(window, cx);
                }))
        });

        v_flex()
            .w_full()
            .gap_1()
            .children(self.render_label())
            .child(
                h_flex()
                    .w_full()
                    .gap_2()
                    .items_center()
                    .child(
                        Input::new(&self.input)
                            .flex_1()
                            .min_w(px(120.0))
                            .bg(RosterColors::input_bg())
                            .border_color(border),
                    )
                    .when(self.state.is_loading(), |el| el.child(Self::render_loading()))
                    .children(clear_button)
                    .children(reveal_button)
                    .children(submit_button),
            )
            .children(self.render_caption())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::states::{FieldKind, Notice};
    use gpui::{TestAppContext, VisualTestContext};
    use std::cell::RefCell;

    fn setup(cx: &mut TestAppContext) -> (&mut VisualTestContext, Entity<NoticeState>) {
        cx.update(gpui_component::init);
        let cx = cx.add_empty_window();
        let notices = cx.update(|_window, cx| cx.new(|_| NoticeState::new()));
        (cx, notices)
    }

    fn new_field(
        cx: &mut VisualTestContext,
        state: FieldState,
        notices: &Entity<NoticeState>,
    ) -> Entity<InputField> {
        let notices = notices.clone();
        cx.update(|window, cx| cx.new(|cx| InputField::new("field", state, notices, window, cx)))
    }

    #[gpui::test]
    fn test_required_blank_submit_raises_and_skips_handler(cx: &mut TestAppContext) {
        let (cx, notices) = setup(cx);
        let field = new_field(cx, FieldState::new("").required(true), &notices);
        let submitted = Rc::new(RefCell::new(Vec::<String>::new()));

        cx.update(|window, cx| {
            field.update(cx, |field, _cx| {
                let submitted = submitted.clone();
                field.on_submit(move |value, _window, _cx| {
                    submitted.borrow_mut().push(value.to_string());
                });
            });
            field.update(cx, |field, cx| field.submit(window, cx));
        });

        assert!(submitted.borrow().is_empty());
        let current = cx.update(|_window, cx| notices.read(cx).current().cloned());
        assert_eq!(current, Some(Notice::empty_input()));
    }

    #[gpui::test]
    fn test_required_filled_submit_calls_handler(cx: &mut TestAppContext) {
        let (cx, notices) = setup(cx);
        let field = new_field(cx, FieldState::new("x").required(true), &notices);
        let submitted = Rc::new(RefCell::new(Vec::<String>::new()));

        cx.update(|window, cx| {
            field.update(cx, |field, _cx| {
                let submitted = submitted.clone();
                field.on_submit(move |value, _window, _cx| {
                    submitted.borrow_mut().push(value.to_string());
                });
            });
            field.update(cx, |field, cx| field.submit(window, cx));
        });

        assert_eq!(*submitted.borrow(), vec!["x".to_string()]);
        assert!(cx.update(|_window, cx| notices.read(cx).current().is_none()));
    }

    #[gpui::test]
    fn test_reset_reports_empty_change(cx: &mut TestAppContext) {
        let (cx, notices) = setup(cx);
        let field = new_field(cx, FieldState::new("Hello").clearable(true), &notices);
        let changes = Rc::new(RefCell::new(Vec::<String>::new()));

        cx.update(|window, cx| {
            field.update(cx, |field, _cx| {
                let changes = changes.clone();
                field.on_change(move |change, _window, _cx| {
                    changes.borrow_mut().push(change.value.clone());
                });
            });
            field.update(cx, |field, cx| field.reset(window, cx));
        });
        cx.run_until_parked();

        assert_eq!(*changes.borrow(), vec![String::new()]);
        let (buffer, editor) = cx.update(|_window, cx| {
            let field = field.read(cx);
            (field.state.value().to_string(), field.input.read(cx).value().to_string())
        });
        assert_eq!(buffer, "");
        assert_eq!(editor, "");
    }

    #[gpui::test]
    fn test_reveal_toggle_unmasks_and_masks(cx: &mut TestAppContext) {
        let (cx, notices) = setup(cx);
        let field = new_field(cx, FieldState::new("secret").kind(FieldKind::Password), &notices);

        let masked =
            |cx: &mut VisualTestContext| cx.update(|_window, cx| field.read(cx).state.is_masked());
        assert!(masked(cx));

        cx.update(|window, cx| field.update(cx, |field, cx| field.toggle_reveal(window, cx)));
        assert!(!masked(cx));

        cx.update(|window, cx| field.update(cx, |field, cx| field.toggle_reveal(window, cx)));
        assert!(masked(cx));
        let value = cx.update(|_window, cx| field.read(cx).input.read(cx).value().to_string());
        assert_eq!(value, "secret");
    }
}
