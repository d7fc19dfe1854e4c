//! Users Page
//!
//! Username, email and age inputs over a selectable roster table.

use gpui::{
    div, prelude::*, px, ClickEvent, Context, Entity, IntoElement, ParentElement, Render, Styled,
    WeakEntity, Window,
};
use gpui_component::{h_flex, label::Label, v_flex};
use tracing::{info, warn};

use crate::components::composite::{Column, DataTable, InputField};
use crate::components::primitives::{Button, ButtonSize, Card};
use crate::states::{
    FieldKind, FieldState, NoticeHost, NoticeState, RosterGlobalStore, User, UserField,
    UsersState,
};
use crate::theme::colors::RosterColors;

type DraftSetter = fn(&mut UsersState, String);

/// Demo page appending users to an in-memory roster
pub struct UsersPage {
    users: UsersState,
    name_field: Entity<InputField>,
    email_field: Entity<InputField>,
    age_field: Entity<InputField>,
    table: Entity<DataTable<User>>,
    notices: Entity<NoticeState>,
}

impl UsersPage {
    pub fn new(window: &mut Window, cx: &mut Context<Self>) -> Self {
        let store = cx.global::<RosterGlobalStore>().clone();
        let notices = store.notices();
        let (seed, selectable) = {
            let settings = store.read(cx);
            (settings.seed_users().to_vec(), settings.selectable())
        };
        let users = UsersState::new(&seed);
        let page = cx.weak_entity();

        let name_field = Self::new_field(
            "roster-name",
            FieldState::new("")
                .label("Username")
                .placeholder("Enter username")
                .clearable(true),
            |users, value| users.set_name(value),
            &notices,
            &page,
            window,
            cx,
        );
        let email_field = Self::new_field(
            "roster-email",
            FieldState::new("")
                .kind(FieldKind::Email)
                .label("Email")
                .placeholder("Enter email")
                .clearable(true),
            |users, value| users.set_email(value),
            &notices,
            &page,
            window,
            cx,
        );
        let age_field = Self::new_field(
            "roster-age",
            FieldState::new("")
                .kind(FieldKind::Number)
                .label("Age")
                .placeholder("Enter age")
                .helper_text("Whole years, greater than zero"),
            |users, value| users.set_age(value),
            &notices,
            &page,
            window,
            cx,
        );

        let rows = users.users().to_vec();
        let table_notices = notices.clone();
        let table = cx.new(|cx| {
            let mut table = DataTable::new(Self::columns(), rows, table_notices, cx);
            table.set_selectable(selectable, cx);
            table.on_row_select(|selected: &[User], _window, _cx| {
                let names: Vec<&str> = selected.iter().map(|u| u.name.as_str()).collect();
                info!(count = selected.len(), ?names, "Row selection changed");
            });
            table
        });

        info!(users = users.users().len(), selectable, "Users page created");

        Self {
            users,
            name_field,
            email_field,
            age_field,
            table,
            notices,
        }
    }

    fn columns() -> Vec<Column<User>> {
        vec![
            Column::new(UserField::Name, "Username"),
            Column::new(UserField::Email, "Email"),
            Column::new(UserField::Age, "Age").fixed_width(100.0),
        ]
    }

    #[allow(clippy::too_many_arguments)]
    fn new_field(
        id: &'static str,
        state: FieldState,
        apply: DraftSetter,
        notices: &Entity<NoticeState>,
        page: &WeakEntity<Self>,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Entity<InputField> {
        let notices = notices.clone();
        let page = page.clone();
        cx.new(|cx| {
            let mut field = InputField::new(id, state, notices, window, cx);
            field.on_change(move |change, _window, cx| {
                let value = change.value.clone();
                if let Err(e) = page.update(cx, |page, _cx| apply(&mut page.users, value)) {
                    warn!(error = %e, field = id, "Users page is gone");
                }
            });
            field
        })
    }

    /// Validate the draft and append it to the roster
    pub fn add_user(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let invalid = self.users.draft().invalid_fields();
        self.mark_fields(&invalid, cx);

        match self.users.add_from_draft() {
            Ok(_) => {
                let rows = self.users.users().to_vec();
                self.table.update(cx, |table, cx| table.set_rows(rows, cx));

                // Resetting a field reports back into this page, so wait until it is released.
                let fields = [
                    self.name_field.clone(),
                    self.email_field.clone(),
                    self.age_field.clone(),
                ];
                window.defer(cx, move |window, cx| {
                    for field in fields {
                        field.update(cx, |field, cx| field.reset(window, cx));
                    }
                });
            }
            Err(notice) => {
                warn!(draft = ?self.users.draft(), "User draft rejected");
                self.notices.update(cx, |notices, cx| {
                    notices.raise(notice);
                    cx.notify();
                });
            }
        }
        cx.notify();
    }

    /// Flag the fields in `invalid` and clear the flag on the others
    fn mark_fields(&self, invalid: &[UserField], cx: &mut Context<Self>) {
        let fields = [
            (UserField::Name, &self.name_field, "Username is required"),
            (UserField::Email, &self.email_field, "Email is required"),
            (UserField::Age, &self.age_field, "Enter a whole number above zero"),
        ];
        for (key, field, message) in fields {
            field.update(cx, |field, cx| {
                if invalid.contains(&key) {
                    field.set_invalid(Some(message.into()), cx);
                } else {
                    field.set_valid(cx);
                }
            });
        }
    }

    /// Drop the table selection
    pub fn clear_selection(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        self.table
            .update(cx, |table, cx| table.clear_selection(window, cx));
    }

    fn render_form(&self, cx: &mut Context<Self>) -> impl IntoElement {
        Card::new()
            .w_full()
            .gap_4()
            .child(
                h_flex()
                    .w_full()
                    .gap_4()
                    .items_start()
                    .child(div().flex_1().child(self.name_field.clone()))
                    .child(div().flex_1().child(self.email_field.clone()))
                    .child(div().w(px(180.0)).child(self.age_field.clone())),
            )
            .child(
                h_flex().justify_end().child(
                    Button::primary("roster-add-user", "Add User")
                        .size(ButtonSize::Large)
                        .on_click(cx.listener(|this, _event: &ClickEvent, window, cx| {
                            this.add_user(window, cx);
                        })),
                ),
            )
    }
}

impl Render for UsersPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        v_flex()
            .size_full()
            .gap_6()
            .p_8()
            .child(
                Label::new("User Roster")
                    .text_2xl()
                    .font_weight(gpui::FontWeight::BOLD)
                    .text_color(RosterColors::heading()),
            )
            .child(self.render_form(cx))
            .child(self.table.clone())
    }
}
