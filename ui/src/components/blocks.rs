use blockform_core::blocks::{self as model, BUTTON_CLICKED_MESSAGE};
use blockform_core::Block;
use leptos::prelude::*;

use super::form::FormBlock;

#[component]
pub fn HeadingBlock(block: model::HeadingBlock) -> impl IntoView {
    view! {
        <div style="padding: 64px">
            <h1>{block.title}</h1>
        </div>
    }
}

/// Button block; alerts on click unless the host passes its own action
#[component]
pub fn ButtonBlock(
    block: model::ButtonBlock,
    #[prop(optional)] on_press: Option<Callback<()>>,
) -> impl IntoView {
    let on_click = move |_: leptos::ev::MouseEvent| match on_press {
        Some(callback) => callback.run(()),
        None => {
            if let Err(e) = window().alert_with_message(BUTTON_CLICKED_MESSAGE) {
                log::warn!("Alert failed: {:?}", e);
            }
        }
    };

    view! {
        <button type="button" class="submit-button" on:click=on_click>
            {block.label}
        </button>
    }
}

/// Page content in order
#[component]
pub fn BlockList(blocks: Vec<Block>) -> impl IntoView {
    blocks
        .into_iter()
        .map(|block| match block {
            Block::HeadingBlock(block) => view! { <HeadingBlock block=block /> }.into_any(),
            Block::Form(block) => view! { <FormBlock block=block /> }.into_any(),
            Block::Button(block) => view! { <ButtonBlock block=block /> }.into_any(),
        })
        .collect_view()
}
