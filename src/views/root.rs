//! Root View
//!
//! Hosts the users page, dispatches roster actions to it, mounts the error
//! modal for the current notice and persists window bounds.

use gpui::{div, prelude::*, Context, Entity, IntoElement, ParentElement, Render, Styled, Window};
use tracing::debug;

use crate::components::composite::ErrorModal;
use crate::helpers::RosterAction;
use crate::states::{update_settings_and_save, NoticeHost, NoticeState, RosterGlobalStore};
use crate::theme::colors::RosterColors;
use crate::views::UsersPage;

pub struct RosterRoot {
    page: Entity<UsersPage>,
    notices: Entity<NoticeState>,
}

impl RosterRoot {
    pub fn new(window: &mut Window, cx: &mut Context<Self>) -> Self {
        let notices = cx.global::<RosterGlobalStore>().notices();

        cx.observe(&notices, |_this, _notices, cx| cx.notify())
            .detach();

        cx.observe_window_bounds(window, |_this, window, cx| {
            let bounds = window.bounds();
            update_settings_and_save(cx, "save_window_bounds", move |settings, _cx| {
                settings.set_bounds(bounds);
            });
        })
        .detach();

        let page = cx.new(|cx| UsersPage::new(window, cx));

        Self { page, notices }
    }

    fn handle_roster_action(
        &mut self,
        action: &RosterAction,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        debug!(?action, "Roster action");
        match action {
            RosterAction::AddUser => self.page.update(cx, |page, cx| page.add_user(window, cx)),
            RosterAction::ClearSelection => {
                self.page
                    .update(cx, |page, cx| page.clear_selection(window, cx));
            }
        }
    }
}

impl Render for RosterRoot {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let notice = self.notices.read(cx).current().cloned();
        let notices = self.notices.clone();

        div()
            .id("roster-root")
            .relative()
            .size_full()
            .bg(RosterColors::background())
            .text_color(RosterColors::text_primary())
            .on_action(cx.listener(Self::handle_roster_action))
            .child(self.page.clone())
            .when_some(notice, |el, notice| {
                el.child(ErrorModal::from_notice(&notice).on_dismiss(move |_window, cx| {
                    notices.update(cx, |notices, cx| {
                        notices.acknowledge();
                        cx.notify();
                    });
                }))
            })
    }
}
