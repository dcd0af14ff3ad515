//! Overlay container shared by the modals and the sidebar.
//!
//! The sheet stays mounted; `open` only toggles the Bootstrap `show` state, so
//! form inputs keep their DOM nodes across open/close cycles.

use uuid::Uuid;
use yew::events::{KeyboardEvent, MouseEvent};
use yew::{classes, html, AttrValue, Callback, Component, Context, Html, Properties};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetKind {
    /// Centred dialog over a backdrop.
    Modal,
    /// Panel sliding in from the left edge.
    Offcanvas,
}

#[derive(Properties, PartialEq)]
pub struct SheetProps {
    pub open: bool,
    pub kind: SheetKind,
    /// Backdrop click or Escape.
    pub on_dismiss: Callback<()>,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub children: Html,
}

pub struct Sheet {
    fallback_id: String,
}

impl Component for Sheet {
    type Message = ();
    type Properties = SheetProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            fallback_id: format!("sheet-{}", Uuid::new_v4()),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let id = props
            .id
            .clone()
            .unwrap_or_else(|| AttrValue::from(self.fallback_id.clone()));
        let open = props.open;
        let on_keydown = {
            let dismiss = props.on_dismiss.clone();
            Callback::from(move |event: KeyboardEvent| {
                if event.key() == "Escape" {
                    dismiss.emit(());
                }
            })
        };

        match props.kind {
            SheetKind::Modal => {
                // clicks inside the dialog bubble up here too; only the bare
                // backdrop area dismisses
                let on_click = {
                    let dismiss = props.on_dismiss.clone();
                    Callback::from(move |event: MouseEvent| {
                        if event.target() == event.current_target() {
                            dismiss.emit(());
                        }
                    })
                };
                html! {
                    <>
                        <div
                            class={classes!(
                                "modal",
                                "fade",
                                open.then_some("show"),
                                open.then_some("d-block")
                            )}
                            id={id}
                            tabindex="-1"
                            role="dialog"
                            aria-hidden={(!open).to_string()}
                            onclick={on_click}
                            onkeydown={on_keydown}
                        >
                            <div class="modal-dialog modal-dialog-centered modal-dialog-scrollable">
                                <div class="modal-content">
                                    { props.children.clone() }
                                </div>
                            </div>
                        </div>
                        if open {
                            <div class="modal-backdrop fade show"></div>
                        }
                    </>
                }
            }
            SheetKind::Offcanvas => {
                let on_backdrop = props.on_dismiss.reform(|_: MouseEvent| ());
                html! {
                    <>
                        <div
                            class={classes!("offcanvas", "offcanvas-start", open.then_some("show"))}
                            id={id}
                            tabindex="-1"
                            onkeydown={on_keydown}
                        >
                            { props.children.clone() }
                        </div>
                        if open {
                            <div class="offcanvas-backdrop fade show" onclick={on_backdrop}></div>
                        }
                    </>
                }
            }
        }
    }
}
