//! Card Component
//!
//! A framed surface around arbitrary content. Callers can add their own
//! style refinements on top of the default frame.

use gpui::{
    div, prelude::*, AnyElement, App, IntoElement, ParentElement, RenderOnce, StyleRefinement,
    Styled, Window,
};

use gpui_component::StyledExt;

use crate::theme::colors::RosterColors;

/// Card container
#[derive(IntoElement)]
pub struct Card {
    style: StyleRefinement,
    children: Vec<AnyElement>,
}

impl Card {
    /// Create a new card
    pub fn new() -> Self {
        Self {
            style: StyleRefinement::default(),
            children: Vec::new(),
        }
    }
}

impl Default for Card {
    fn default() -> Self {
        Self::new()
    }
}

impl ParentElement for Card {
    fn extend(&mut self, elements: impl IntoIterator<Item = AnyElement>) {
        self.children.extend(elements);
    }
}

impl Styled for Card {
    fn style(&mut self) -> &mut StyleRefinement {
        &mut self.style
    }
}

impl RenderOnce for Card {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        // Caller refinements win over the default frame.
        div()
            .flex()
            .flex_col()
            .p_4()
            .bg(RosterColors::card_bg())
            .text_color(RosterColors::text_primary())
            .rounded_xl()
            .shadow_lg()
            .border_1()
            .border_color(RosterColors::border())
            .refine_style(&self.style)
            .children(self.children)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_keeps_caller_refinements() {
        let card = Card::new().w_full();
        assert!(card.style.size.width.is_some());
        assert!(card.children.is_empty());
    }
}
