//! DataTable Component
//!
//! Renders a [`TableModel`] and turns row clicks into selection reports.

use gpui::{
    div, prelude::*, px, App, ClickEvent, Context, Entity, IntoElement, ParentElement, Render,
    SharedString, Styled, Window,
};
use std::rc::Rc;
use tracing::debug;

use super::column::{Column, ColumnWidth, TableRow};
use super::model::{TableBody, TableModel};
use crate::components::primitives::{Button, ButtonVariant, Card};
use crate::states::{Notice, NoticeHost, NoticeState};
use crate::theme::colors::RosterColors;

type RowSelectHandler<R> = Rc<dyn Fn(&[R], &mut Window, &mut App) + 'static>;

const ROW_HEIGHT: f32 = 40.0;
const HEADER_HEIGHT: f32 = 44.0;

/// DataTable component
pub struct DataTable<R: TableRow> {
    model: TableModel<R>,
    notices: Entity<NoticeState>,
    on_row_select: Option<RowSelectHandler<R>>,
}

impl<R: TableRow> DataTable<R> {
    /// Create a new data table raising its notices into `notices`
    pub fn new(
        columns: Vec<Column<R>>,
        rows: Vec<R>,
        notices: Entity<NoticeState>,
        _cx: &mut Context<Self>,
    ) -> Self {
        Self {
            model: TableModel::new(columns, rows),
            notices,
            on_row_select: None,
        }
    }

    /// Set the rows
    pub fn set_rows(&mut self, rows: Vec<R>, cx: &mut Context<Self>) {
        self.model.set_rows(rows);
        cx.notify();
    }

    /// Set loading state
    pub fn set_loading(&mut self, loading: bool, cx: &mut Context<Self>) {
        self.model.set_loading(loading);
        cx.notify();
    }

    /// Enable row selection
    pub fn set_selectable(&mut self, selectable: bool, cx: &mut Context<Self>) {
        self.model.set_selectable(selectable);
        cx.notify();
    }

    /// Set the handler told about every selection change
    pub fn on_row_select(&mut self, handler: impl Fn(&[R], &mut Window, &mut App) + 'static) {
        self.on_row_select = Some(Rc::new(handler));
    }

    /// Toggle the row at `index` and report the new selection
    pub fn toggle_row(&mut self, index: usize, window: &mut Window, cx: &mut Context<Self>) {
        if let Some(selected) = self.model.toggle_row(index) {
            debug!(index, selected = selected.len(), "Row toggled");
            self.report_selection(&selected, window, cx);
            cx.notify();
        }
    }

    /// Empty the selection and report it
    pub fn clear_selection(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let selected = self.model.clear_selection();
        debug!("Selection cleared");
        self.report_selection(&selected, window, cx);
        cx.notify();
    }

    fn report_selection(&self, selected: &[R], window: &mut Window, cx: &mut Context<Self>) {
        if let Some(handler) = self.on_row_select.clone() {
            handler(selected, window, cx);
        }
    }

    /// Raise the "No Data" notice offered by the empty state
    pub fn show_empty_error(&mut self, cx: &mut Context<Self>) {
        self.notices.update(cx, |notices, cx| {
            notices.raise(Notice::no_data());
            cx.notify();
        });
    }

    fn widths(&self) -> Vec<ColumnWidth> {
        self.model.columns().iter().map(|col| col.width).collect()
    }

    fn width_cell(width: ColumnWidth) -> gpui::Div {
        match width {
            ColumnWidth::Fixed(w) => div().w(px(w)).flex_none(),
            ColumnWidth::Flex => div().flex_1(),
        }
    }

    /// Render the header row
    fn render_header(&self) -> impl IntoElement {
        div()
            .h(px(HEADER_HEIGHT))
            .w_full()
            .flex()
            .items_center()
            .bg(RosterColors::table_header_bg())
            .border_b_1()
            .border_color(RosterColors::border())
            .children(self.model.header().into_iter().zip(self.widths()).map(
                |(title, width)| {
                    Self::width_cell(width)
                        .px_6()
                        .text_sm()
                        .font_weight(gpui::FontWeight::MEDIUM)
                        .text_color(RosterColors::text_secondary())
                        .child(title.to_uppercase())
                },
            ))
    }

    /// Render a data row
    fn render_row(&self, row: &R, index: usize, cx: &mut Context<Self>) -> impl IntoElement {
        let bg = if self.model.is_selected(row) {
            RosterColors::table_row_selected()
        } else if index % 2 == 0 {
            RosterColors::card_bg()
        } else {
            RosterColors::table_row_alt()
        };

        let cells = self.model.cells(row);
        let widths = self.widths();

        div()
            .id(("data-table-row", index))
            .h(px(ROW_HEIGHT))
            .w_full()
            .flex()
            .items_center()
            .bg(bg)
            .cursor_pointer()
            .hover(|s| s.bg(RosterColors::table_row_hover()))
            .border_b_1()
            .border_color(RosterColors::border())
            .on_click(cx.listener(move |this, _event: &ClickEvent, window, cx| {
                this.toggle_row(index, window, cx);
            }))
            .children(cells.into_iter().zip(widths).map(|(text, width)| {
                Self::width_cell(width)
                    .px_6()
                    .text_sm()
                    .text_color(RosterColors::text_primary())
                    .overflow_hidden()
                    .child(text)
            }))
    }

    /// Render empty state
    fn render_empty(&self, cx: &mut Context<Self>) -> impl IntoElement {
        Card::new()
            .p_6()
            .items_center()
            .gap_4()
            .child(
                div()
                    .text_color(RosterColors::text_muted())
                    .child("No data available"),
            )
            .child(
                Button::new("data-table-show-error", "Show Error")
                    .variant(ButtonVariant::Secondary)
                    .on_click(cx.listener(|this, _event: &ClickEvent, _window, cx| {
                        this.show_empty_error(cx);
                    })),
            )
    }

    /// Render loading state
    fn render_loading(&self) -> impl IntoElement {
        Card::new().p_6().items_center().child(
            div()
                .text_color(RosterColors::text_muted())
                .child("Loading..."),
        )
    }

    fn render_rows(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let rows: Vec<_> = self
            .model
            .rows()
            .iter()
            .enumerate()
            .map(|(i, row)| self.render_row(row, i, cx).into_any_element())
            .collect();

        let clear_label: Option<SharedString> = self
            .model
            .shows_clear_selection()
            .then(|| self.model.clear_selection_label());

        Card::new()
            .w_full()
            .p_0()
            .overflow_hidden()
            .child(self.render_header())
            .child(
                div()
                    .id("data-table-rows")
                    .flex_1()
                    .overflow_y_scroll()
                    .children(rows),
            )
            .when_some(clear_label, |el, label| {
                el.child(
                    div().p_4().flex().justify_end().child(
                        Button::new("data-table-clear-selection", label)
                            .variant(ButtonVariant::Danger)
                            .on_click(cx.listener(|this, _event: &ClickEvent, window, cx| {
                                this.clear_selection(window, cx);
                            })),
                    ),
                )
            })
    }
}

impl<R: TableRow> Render for DataTable<R> {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        match self.model.body() {
            TableBody::Loading => self.render_loading().into_any_element(),
            TableBody::Empty => self.render_empty(cx).into_any_element(),
            TableBody::Rows => self.render_rows(cx).into_any_element(),
        }
    }
}
