//! Ask-AI conversation hook.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;
use winloss_core::ask::Conversation;

use crate::app::AppContext;

/// Conversation state for the ask page.
#[derive(Clone, Copy)]
pub struct AskState {
    pub conversation: RwSignal<Conversation>,
    ctx: AppContext,
}

impl AskState {
    pub fn is_loading(&self) -> bool {
        self.conversation.with(|c| c.is_loading)
    }

    /// Submit `question`. Ignored when blank or while an answer is pending.
    ///
    /// Returns whether the question was accepted.
    pub fn submit(&self, question: &str) -> bool {
        let Some(question) = self
            .conversation
            .try_update(|c| c.begin(question))
            .flatten()
        else {
            return false;
        };

        let client = self.ctx.client();
        let conversation = self.conversation;
        spawn_local(async move {
            let result = client.ask(&question).await;
            conversation.update(|c| c.finish(result));
        });
        true
    }
}

pub fn use_ask() -> AskState {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    AskState {
        conversation: RwSignal::new(Conversation::new()),
        ctx,
    }
}
