use yew::prelude::*;
use gloo_net::http::Request;
use std::rc::Rc;
use shared::{designs::DESIGNS, models::{IncrementRequest, IncrementResponse, LikeCounts}, VoteBoard};
use crate::{config::CONFIG, storage, styles::*};

#[derive(Clone, PartialEq)]
pub struct VotesState {
    board: VoteBoard,
}

impl Default for VotesState {
    fn default() -> Self {
        Self { board: VoteBoard::new(storage::load_liked()) }
    }
}

pub enum Msg {
    CountsLoaded(LikeCounts),
    Like(String),
    Confirmed(String, u64),
    Failed(String),
}

impl Reducible for VotesState {
    type Action = Msg;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            Msg::CountsLoaded(counts) => next.board.load_counts(&counts),
            Msg::Like(id) => {
                if next.board.begin_like(&id) {
                    storage::save_liked(next.board.liked());
                }
            }
            Msg::Confirmed(id, count) => next.board.confirm(&id, count),
            Msg::Failed(id) => next.board.fail(&id),
        }
        Rc::new(next)
    }
}

async fn fetch_counts() -> Result<LikeCounts, gloo_net::Error> {
    Request::get(&CONFIG.catalog_likes_url())
        .send()
        .await?
        .json::<LikeCounts>()
        .await
}

async fn send_like(id: String) -> Msg {
    let request = match Request::post(&CONFIG.likes_url())
        .json(&IncrementRequest { id: id.clone() }) {
        Ok(req) => req,
        Err(_) => return Msg::Failed(id),
    };

    match request.send().await {
        Ok(response) if (200..300).contains(&response.status()) => match response.json::<IncrementResponse>().await {
            Ok(body) => Msg::Confirmed(id, body.count),
            Err(_) => Msg::Failed(id),
        },
        _ => Msg::Failed(id),
    }
}

#[function_component]
pub fn DesignVotes() -> Html {
    let state = use_reducer(VotesState::default);

    use_effect_with_deps({
        let state = state.clone();
        move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                // A failed load leaves every count at zero.
                if let Ok(counts) = fetch_counts().await {
                    state.dispatch(Msg::CountsLoaded(counts));
                }
            });
            || ()
        }
    }, ());

    // Claimed synchronously on click, so a second click before the next render is dropped here.
    let claimed = use_mut_ref(|| state.board.liked().clone());

    let on_like = {
        let state = state.clone();
        move |id: &'static str| {
            let state = state.clone();
            let claimed = claimed.clone();
            Callback::from(move |_: MouseEvent| {
                if !claimed.borrow_mut().claim(id) {
                    return;
                }
                state.dispatch(Msg::Like(id.to_string()));

                let state = state.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    state.dispatch(send_like(id.to_string()).await);
                });
            })
        }
    };

    html! {
        <div class="mt-10">
            <div class={combine_classes(FLEX_BETWEEN, "mb-3")}>
                <h3 class={HEADING_SM}>{"Vote your favorite design"}</h3>
                <p class={TEXT_MUTED}>{"Tap the heart - votes are public."}</p>
            </div>

            <div class="grid grid-cols-2 gap-3 md:grid-cols-4">
                {DESIGNS.iter().map(|design| {
                    let liked = state.board.is_liked(design.id);
                    html! {
                        <div key={design.id} class={DESIGN_CARD}>
                            <div class="relative aspect-[4/3] w-full">
                                <img src={design.image_path()} alt={design.alt}
                                    class="h-full w-full object-cover transition-transform duration-500 group-hover:scale-[1.03]" />
                            </div>
                            <div class={DESIGN_TITLE}>{design.title}</div>
                            <button
                                onclick={on_like(design.id)}
                                aria-pressed={liked.to_string()}
                                title={if liked { "You liked this" } else { "Like this design" }}
                                class={LIKE_BUTTON}
                            >
                                <span class={if liked { "text-yellow-400" } else { "" }}>
                                    {if liked { "♥" } else { "♡" }}
                                </span>
                                <span class="text-xs tabular-nums">{state.board.count(design.id)}</span>
                            </button>
                        </div>
                    }
                }).collect::<Html>()}
            </div>
        </div>
    }
}
