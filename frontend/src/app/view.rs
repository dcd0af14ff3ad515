use yew::prelude::*;

use crate::components::book_card::book_grid;
use crate::components::dialogs::overview::overview_dialog;
use crate::components::dialogs::settings::settings_dialog;
use crate::components::navbar::navbar;
use crate::components::sidebar::sidebar;
use crate::components::toasts::toast_stack;

use super::messages::Msg;
use super::state::DashboardApp;

pub fn view(app: &DashboardApp, ctx: &Context<DashboardApp>) -> Html {
    let dashboard = &app.dashboard;
    let on_intent = ctx.link().callback(Msg::Intent);

    html! {
        <>
            { navbar(dashboard.theme(), &on_intent) }
            { sidebar(dashboard, &on_intent) }
            <main>
                { book_grid(dashboard.books(), &on_intent) }
            </main>
            <button
                id="return-to-top"
                type="button"
                class="btn btn-secondary position-fixed bottom-0 start-0 m-3"
                title="Return to top"
                onclick={ctx.link().callback(|_: MouseEvent| Msg::ReturnToTop)}
            >
                { "↑" }
            </button>
            { toast_stack(dashboard.toasts(), &on_intent) }
            { settings_dialog(dashboard.settings(), &on_intent) }
            { overview_dialog(dashboard.overview(), &on_intent) }
        </>
    }
}
