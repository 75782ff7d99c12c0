use std::collections::HashMap;

use chrono::{Days, NaiveDate};

use crate::client::QueryState;
use crate::client::query::{ApiClient, ClientError};
use crate::db::models::InteractionCount;

/// Days of history shown by the calendar, ending today.
pub const WINDOW_DAYS: u64 = 365;

/// One day cell of the rendered calendar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeatmapCell {
    pub date: NaiveDate,
    pub count: Option<i64>,
    pub color_class: String,
    pub tooltip: Option<String>,
}

/// What the view shows for the current query state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeatmapRender {
    /// Loading and error states both show the preloader.
    Placeholder,
    Calendar(Vec<HeatmapCell>),
}

/// The heatmap calendar view. Holds the fetch state machine; each
/// mount or prop change starts a new fetch whose result supersedes any
/// still in flight.
#[derive(Debug)]
pub struct HeatmapCalendar {
    today: NaiveDate,
    generation: u64,
    state: QueryState<Vec<InteractionCount>>,
}

impl HeatmapCalendar {
    pub fn new(today: NaiveDate) -> Self {
        HeatmapCalendar {
            today,
            generation: 0,
            state: QueryState::Loading,
        }
    }

    pub fn start_date(&self) -> NaiveDate {
        self.today
            .checked_sub_days(Days::new(WINDOW_DAYS))
            .unwrap_or(self.today)
    }

    pub fn end_date(&self) -> NaiveDate {
        self.today
    }

    pub fn state(&self) -> &QueryState<Vec<InteractionCount>> {
        &self.state
    }

    /// Starts a new fetch, superseding any earlier one. Returns the
    /// generation to hand back to [`complete`](Self::complete).
    pub fn begin_fetch(&mut self) -> u64 {
        self.generation += 1;
        self.state = QueryState::Loading;
        self.generation
    }

    /// Applies a fetch result. Results from a superseded fetch are
    /// discarded, not merged; returns whether the state changed.
    pub fn complete(
        &mut self,
        generation: u64,
        result: Result<Vec<InteractionCount>, String>,
    ) -> bool {
        if generation != self.generation {
            return false;
        }
        self.state = match result {
            Ok(counts) => QueryState::Success(counts),
            Err(message) => QueryState::Error(message),
        };
        true
    }

    /// Runs one full fetch cycle against the gateway.
    pub async fn load(&mut self, client: &ApiClient, is_self: bool, contact_id: &str) {
        let generation = self.begin_fetch();
        let result = client
            .interaction_counts(is_self, contact_id)
            .await
            .map_err(|e: ClientError| e.to_string());
        self.complete(generation, result);
    }

    /// Renders the current state; anything short of loaded data is the
    /// placeholder.
    pub fn render(&self) -> HeatmapRender {
        match &self.state {
            QueryState::Success(counts) => {
                HeatmapRender::Calendar(calendar_cells(self.start_date(), self.today, counts))
            }
            QueryState::Loading | QueryState::Error(_) => HeatmapRender::Placeholder,
        }
    }
}

/// CSS class of a day cell; intensity follows the raw count value.
pub fn color_class(count: Option<i64>) -> String {
    match count {
        None => "color-empty".to_string(),
        Some(count) => format!("color-github-{count}"),
    }
}

/// Hover text for a day with data: ISO date plus the count.
pub fn tooltip(date: NaiveDate, count: i64) -> String {
    format!("{} has count: {count}", date.format("%Y-%m-%d"))
}

fn calendar_cells(start: NaiveDate, end: NaiveDate, counts: &[InteractionCount]) -> Vec<HeatmapCell> {
    let by_date: HashMap<NaiveDate, i64> = counts
        .iter()
        .map(|count| (count.date, count.count))
        .collect();

    start
        .iter_days()
        .take_while(|day| *day <= end)
        .map(|day| {
            let count = by_date.get(&day).copied();
            HeatmapCell {
                date: day,
                count,
                color_class: color_class(count),
                tooltip: count.map(|n| tooltip(day, n)),
            }
        })
        .collect()
}
