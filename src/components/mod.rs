mod activity_list;
mod input;

pub use activity_list::{
    filter_by_name, ActivityListComp, ActivityListProps, EMPTY_ACTIVITY_LIST,
};
pub use input::{Input, InputProps, INPUT_BASE_CLASSES};
