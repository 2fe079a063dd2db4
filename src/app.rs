use activity_board::prelude::*;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    let state = use_activities(ActivityClient::from_env());
    let filter = use_state(AttrValue::default);
    let filter_ref = use_node_ref();

    {
        let filter_ref = filter_ref.clone();
        use_effect_with((), move |_| {
            if let Some(input) = filter_ref.cast::<HtmlInputElement>() {
                if let Err(err) = input.focus() {
                    log::warn!("Could not focus filter: {:?}", err);
                }
            }
            || ()
        });
    }

    let oninput = {
        let filter = filter.clone();
        Callback::from(move |e: InputEvent| {
            let target = e.target_unchecked_into::<HtmlInputElement>();
            filter.set(target.value().into());
        })
    };

    let content = match state {
        FetchState::Loading => html! {
            <p class="activity-board__loading">{"Yükleniyor..."}</p>
        },
        FetchState::Loaded(activities) => html! {
            <ActivityListComp<Activity> {activities} filter={(*filter).clone()} />
        },
        FetchState::Failed(message) => html! {
            <p class="activity-board__error" role="alert">{message}</p>
        },
    };

    html! {
        <main class="activity-board">
            <h1 class="activity-board__title">{"Aktiviteler"}</h1>
            <Input
                node_ref={filter_ref}
                class={classes!("mb-4")}
                input_type="search"
                name="filter"
                placeholder="Aktivite ara"
                aria_label="Aktivite ara"
                autocomplete="off"
                value={(*filter).clone()}
                {oninput}
            />
            {content}
        </main>
    }
}
