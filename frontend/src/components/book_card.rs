//! Recommendation card grid.

use yew::prelude::*;

use crate::dashboard::book_list::{BookCard, BookList};
use crate::dashboard::Intent;

pub fn book_grid(books: &BookList, on_intent: &Callback<Intent>) -> Html {
    html! {
        <div class="container-fluid mt-3">
            <div class="row" id="book-row">
                {
                    for books
                        .cards()
                        .iter()
                        .enumerate()
                        .map(|(index, card)| book_card(index, card, on_intent))
                }
            </div>
        </div>
    }
}

/// One card. The body colour and the add button follow the status tone; the
/// button text is the status itself once the server has reported one.
pub fn book_card(index: usize, card: &BookCard, on_intent: &Callback<Intent>) -> Html {
    let book = card.book();
    let tone = card.tone();
    let on_add = on_intent.reform(move |_: MouseEvent| Intent::AddBook(index));
    let on_overview = on_intent.reform(move |_: MouseEvent| Intent::RequestOverview(index));

    html! {
        <div class="col-12 col-sm-6 col-md-4 col-lg-3 mb-3" key={card.key().to_string()}>
            <div class="card h-100">
                <div class="book-img-container">
                    if let Some(src) = &book.image_link {
                        <img class="card-img-top" src={src.clone()} alt={book.name.clone()} />
                    }
                </div>
                <div class={classes!("card-body", "d-flex", "flex-column", tone.body_class())}>
                    <h5 class="card-title">{ &book.name }</h5>
                    <h6 class="card-subtitle mb-2 text-body-secondary">{ &book.author }</h6>
                    <p class="card-text mb-1 votes">{ &book.votes }</p>
                    <p class="card-text rating">{ &book.rating }</p>
                    <div class="mt-auto d-flex gap-2">
                        <button
                            type="button"
                            class={classes!(
                                "btn",
                                "btn-sm",
                                tone.button_class(),
                                "add-to-readarr-btn"
                            )}
                            disabled={!card.action_enabled()}
                            onclick={on_add}
                        >
                            { card.action_label() }
                        </button>
                        <button
                            type="button"
                            class="btn btn-sm btn-info get-overview-btn"
                            disabled={!card.overview_enabled()}
                            onclick={on_overview}
                        >
                            { "Overview" }
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
