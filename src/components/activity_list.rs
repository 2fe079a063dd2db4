use crate::model::{Identifiable, Named};
use yew::prelude::*;

pub const EMPTY_ACTIVITY_LIST: &str = "Gösterilecek aktivite yok.";

#[derive(Properties, PartialEq, Clone)]
pub struct ActivityListProps<T>
where
    T: Identifiable + Named + PartialEq + Clone + 'static,
{
    pub activities: Vec<T>,
    /// Case-insensitive substring matched against each activity name.
    #[prop_or_default]
    pub filter: AttrValue,
}

/// Activities whose name contains `filter`, ignoring case.
pub fn filter_by_name<'a, T>(activities: &'a [T], filter: &str) -> Vec<&'a T>
where
    T: Named,
{
    let filter = filter.trim().to_lowercase();
    activities
        .iter()
        .filter(|activity| filter.is_empty() || activity.name().to_lowercase().contains(&filter))
        .collect()
}

#[function_component(ActivityListComp)]
pub fn activity_list_comp<T>(props: &ActivityListProps<T>) -> Html
where
    T: Identifiable + Named + PartialEq + Clone + 'static,
{
    let visible = filter_by_name(&props.activities, &props.filter);

    if visible.is_empty() {
        return html! {
            <p class="activity-board-activity-list__empty">{EMPTY_ACTIVITY_LIST}</p>
        };
    }

    html! {
        <ul class="activity-board-activity-list">
            {for visible.into_iter().map(|activity| html! {
                <li
                    key={activity.identifier().to_string()}
                    class="activity-board-activity-list__item"
                >
                    {activity.name().to_string()}
                </li>
            })}
        </ul>
    }
}
