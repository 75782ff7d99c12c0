//! Client-side building blocks for the web frontend: a fetch state
//! machine, the GraphQL client, and the presentational logic of the
//! heatmap calendar and the scroll-reset navigation hook.

pub mod heatmap;
pub mod query;
pub mod scroll;

/// State of an asynchronous query as the view sees it. Views render a
/// placeholder until the state is `Success` and re-render on every
/// transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryState<T> {
    Loading,
    Error(String),
    Success(T),
}

impl<T> QueryState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, QueryState::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            QueryState::Success(data) => Some(data),
            _ => None,
        }
    }
}
