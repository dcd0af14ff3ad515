//! Root dashboard component.
//!
//! Responsibilities
//! - Restore the theme preference and apply it before the first paint.
//! - Open the realtime channel and route its events into the dashboard.
//! - Attach the infinite-scroll listeners to the window.
//! - Delegate rendering to `view::view` and state changes to `update::update`.

use common::events::InboundEvent;
use common::wire::websocket_url;
use yew::prelude::*;

mod dom;
mod listeners;
mod messages;
mod state;
mod update;
mod view;

use crate::channel::{Channel, ChannelError, ChannelEvent};
use crate::config::DashboardConfig;
use crate::dashboard::preferences::ThemePreference;
use crate::dashboard::{Dashboard, Intent};
use crate::storage::LocalStorage;

pub use listeners::reached_bottom;
pub use messages::Msg;
pub use state::DashboardApp;

#[derive(Properties, PartialEq, Clone)]
pub struct DashboardAppProps {
    #[prop_or_default]
    pub config: DashboardConfig,
}

impl Component for DashboardApp {
    type Message = Msg;
    type Properties = DashboardAppProps;

    fn create(ctx: &Context<Self>) -> Self {
        let config = &ctx.props().config;

        let store = LocalStorage::open();
        let theme = ThemePreference::load(&store);
        dom::apply_theme(theme.theme);

        let channel = match open_channel(config, ctx.link().callback(Msg::Channel)) {
            Ok(channel) => Some(channel),
            Err(err) => {
                log::error!("realtime channel unavailable: {err}");
                ctx.link()
                    .send_message(Msg::Channel(ChannelEvent::Inbound(InboundEvent::Disconnected)));
                None
            }
        };

        let listeners = listeners::infinite_scroll(
            config.scroll_threshold_px,
            ctx.link().callback(|_| Msg::Intent(Intent::LoadMore)),
        );

        Self {
            dashboard: Dashboard::new(config, theme),
            channel,
            store,
            listeners,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}

fn open_channel(
    config: &DashboardConfig,
    on_event: Callback<ChannelEvent>,
) -> Result<Channel, ChannelError> {
    let (protocol, host) = dom::page_origin()
        .ok_or_else(|| ChannelError::Open("page location unavailable".to_string()))?;
    let url = websocket_url(&protocol, &host, &config.socket_path);
    Channel::connect(&url, on_event)
}
