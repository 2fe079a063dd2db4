use crate::client::ActivityClient;
use crate::model::Activity;
use yew::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    Loading,
    Loaded(Vec<T>),
    Failed(String),
}

/// Fetches the activity list once per distinct `client`.
#[hook]
pub fn use_activities(client: ActivityClient) -> FetchState<Activity> {
    let state = use_state(|| FetchState::Loading);

    {
        let state = state.clone();
        use_effect_with(client, move |client| {
            let client = client.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match client.get_activities().await {
                    Ok(activities) => state.set(FetchState::Loaded(activities)),
                    Err(e) => {
                        log::error!("Failed to fetch activities: {}", e);
                        state.set(FetchState::Failed(e.user_message()));
                    }
                }
            });
            || ()
        });
    }

    (*state).clone()
}
