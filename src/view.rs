use crate::filter::filter_activities;
use crate::models::{ActivitySet, ViewState};

pub const EMPTY_LIST_TEXT: &str = "No activities found.";
pub const LOAD_FAILED_TEXT: &str = "Failed to load activities. Please try again later.";
pub const LOADING_TEXT: &str = "Loading activities...";
pub const NO_PARTICIPANTS_TEXT: &str = "No participants yet";

#[derive(Clone, Debug, PartialEq)]
pub struct ActivityCard {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub spots_left: i64,
    pub participants: Vec<String>,
}

impl ActivityCard {
    pub fn availability(&self) -> String {
        format!("{} spots left", self.spots_left)
    }
}

/// Everything the board renders for one (activities, view state) pair.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BoardView {
    pub cards: Vec<ActivityCard>,
    /// Names offered by the sign-up selector, in card order.
    pub options: Vec<String>,
}

impl BoardView {
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The option the selector shows given the user's last pick. A pick that
    /// is no longer listed falls back to the first option.
    pub fn selected_option<'a>(&'a self, picked: Option<&str>) -> Option<&'a str> {
        picked
            .and_then(|p| self.options.iter().find(|o| *o == p))
            .or_else(|| self.options.first())
            .map(String::as_str)
    }
}

pub fn project_board(activities: &ActivitySet, view: &ViewState) -> BoardView {
    let filtered = filter_activities(activities, view);
    let cards: Vec<ActivityCard> = filtered
        .into_iter()
        .map(|(name, a)| ActivityCard {
            name: name.to_string(),
            description: a.description.clone(),
            schedule: a.schedule.clone(),
            spots_left: a.spots_left(),
            participants: a.participants.clone(),
        })
        .collect();
    let options = cards.iter().map(|c| c.name.clone()).collect();
    BoardView { cards, options }
}
