use crate::{
    client::StudentApi, config::RuntimeConfiguration, roster::Roster, store::StudentStore,
    ui::ANIMATIONS,
};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use std::sync::Arc;

#[derive(Clone, Debug)]
pub struct RosterState {
    store: Arc<dyn StudentStore>,
    roster: Arc<Roster>,
    config: RuntimeConfiguration,
}

impl RosterState {
    pub fn new(
        store: Arc<dyn StudentStore>,
        api: Arc<dyn StudentApi>,
        config: RuntimeConfiguration,
    ) -> Self {
        Self {
            store,
            roster: Arc::new(Roster::new(api)),
            config,
        }
    }

    #[allow(clippy::unused_self)] //in case self is ever needed :)
    pub fn render(&self, markup: Markup) -> Markup {
        html! {
            (DOCTYPE)
            html {
                head {
                    meta charset="UTF-8" {}
                    meta name="viewport" content="width=device-width, initial-scale=1.0" {}
                    script src="https://unpkg.com/htmx.org@2.0.4" integrity="sha384-HGfztofotfshcF7+8n44JQL2oJmowVChPTg48S+jvZoztPfvwD79OC/LTtG6dMp+" crossorigin="anonymous" {}
                    script src="https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4" {}
                    style { (PreEscaped(ANIMATIONS)) }
                    title { "Student Roster" }
                }
                body class="bg-gray-900 text-white min-h-screen font-sans" {
                    (markup)
                }
            }
        }
    }

    pub fn store(&self) -> &dyn StudentStore {
        self.store.as_ref()
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub const fn config(&self) -> &RuntimeConfiguration {
        &self.config
    }

    pub async fn sensible_shutdown(&self) {
        self.store.close().await;
    }
}
