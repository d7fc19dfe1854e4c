//! Button Component

use gpui::{
    div, prelude::*, px, AnyElement, App, ClickEvent, ElementId, InteractiveElement, IntoElement,
    ParentElement, RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::theme::colors::RosterColors;

type ClickHandler = Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>;

/// Button variant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Primary action button (purple)
    #[default]
    Primary,
    /// Secondary button (gray)
    Secondary,
    /// Danger button (pink)
    Danger,
    /// Ghost button (transparent)
    Ghost,
}

/// Button size
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonSize {
    /// Small button
    Small,
    /// Medium button (default)
    #[default]
    Medium,
    /// Large button
    Large,
}

impl ButtonSize {
    /// Horizontal padding, vertical padding and font size
    fn metrics(self) -> (f32, f32, f32) {
        match self {
            ButtonSize::Small => (8.0, 4.0, 12.0),
            ButtonSize::Medium => (20.0, 8.0, 14.0),
            ButtonSize::Large => (32.0, 12.0, 16.0),
        }
    }
}

/// A styled button component
#[derive(IntoElement)]
pub struct Button {
    id: ElementId,
    label: Option<SharedString>,
    children: Vec<AnyElement>,
    variant: ButtonVariant,
    size: ButtonSize,
    disabled: bool,
    loading: bool,
    on_click: Option<ClickHandler>,
}

impl Button {
    /// Create a new button with a text label
    pub fn new(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::empty(id).label(label)
    }

    /// Create a button whose content is supplied through `child`
    pub fn empty(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            label: None,
            children: Vec::new(),
            variant: ButtonVariant::Primary,
            size: ButtonSize::Medium,
            disabled: false,
            loading: false,
            on_click: None,
        }
    }

    /// Set the text label
    pub fn label(mut self, label: impl Into<SharedString>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the button variant
    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set the button size
    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    /// Set whether the button is disabled
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set whether the button is loading
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Set the click handler
    pub fn on_click(mut self, handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }

    /// Create a primary button
    pub fn primary(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Primary)
    }

    /// Whether clicks reach the handler
    pub fn is_interactive(&self) -> bool {
        !self.disabled && !self.loading
    }
}

impl ParentElement for Button {
    fn extend(&mut self, elements: impl IntoIterator<Item = AnyElement>) {
        self.children.extend(elements);
    }
}

impl RenderOnce for Button {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let interactive = self.is_interactive();

        let (bg_color, text_color, hover_bg) = match self.variant {
            ButtonVariant::Primary => (
                RosterColors::button_primary_bg(),
                RosterColors::button_primary_text(),
                RosterColors::button_primary_hover(),
            ),
            ButtonVariant::Secondary => (
                RosterColors::button_secondary_bg(),
                RosterColors::text_primary(),
                RosterColors::button_secondary_hover(),
            ),
            ButtonVariant::Danger => (
                RosterColors::button_danger_bg(),
                RosterColors::text_light(),
                RosterColors::button_danger_hover(),
            ),
            ButtonVariant::Ghost => (
                gpui::rgba(0x00000000),
                RosterColors::button_ghost_text(),
                RosterColors::button_ghost_hover(),
            ),
        };

        let (padding_x, padding_y, font_size) = self.size.metrics();
        let opacity = if interactive { 1.0 } else { 0.5 };

        let label = if self.loading {
            Some(SharedString::from("Loading..."))
        } else {
            self.label
        };

        let mut element = div()
            .id(self.id)
            .flex()
            .items_center()
            .justify_center()
            .gap_1()
            .px(px(padding_x))
            .py(px(padding_y))
            .bg(bg_color)
            .text_color(text_color)
            .text_size(px(font_size))
            .font_weight(gpui::FontWeight::SEMIBOLD)
            .rounded_lg()
            .opacity(opacity)
            .when_some(label, |el, label| el.child(label))
            .children(self.children);

        if interactive {
            element = element.cursor_pointer().hover(|s| s.bg(hover_bg));

            if let Some(handler) = self.on_click {
                element = element.on_click(handler);
            }
        }

        element
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_builder() {
        let button = Button::new("add-user", "Add User")
            .variant(ButtonVariant::Secondary)
            .size(ButtonSize::Large);

        assert_eq!(button.variant, ButtonVariant::Secondary);
        assert_eq!(button.size, ButtonSize::Large);
        assert_eq!(button.label.as_ref().map(|l| l.as_ref()), Some("Add User"));
        assert!(button.is_interactive());
    }

    #[test]
    fn test_disabled_or_loading_blocks_clicks() {
        assert!(!Button::primary("a", "A").disabled(true).is_interactive());
        assert!(!Button::primary("b", "B").loading(true).is_interactive());
    }

    #[test]
    fn test_empty_button_has_no_label() {
        let button = Button::empty("icon");
        assert!(button.label.is_none());
        assert!(button.children.is_empty());
    }

    #[test]
    fn test_sizes_grow() {
        let (small_x, _, small_font) = ButtonSize::Small.metrics();
        let (large_x, _, large_font) = ButtonSize::Large.metrics();
        assert!(small_x < large_x);
        assert!(small_font < large_font);
    }
}
