use yew::prelude::*;
use crate::{design_votes::DesignVotes, styles::*};

#[function_component]
pub fn Home() -> Html {
    html! {
        <div class={CONTAINER}>
            <h1 class={combine_classes(HEADING_LG, "text-white")}>{"Eid Palm"}</h1>
            <p class={combine_classes(TEXT_MUTED, "text-center")}>
                {"Pick the design you would like to see on your table this Eid."}
            </p>
            <DesignVotes />
        </div>
    }
}
