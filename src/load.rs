use std::cell::Cell;
use std::rc::Rc;

use gloo::console::{error, log};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::{self, FetchError};
use crate::model::{PeopleList, Person};

/// Loading/error flags plus whatever list has been loaded so far.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LoadState {
    pub loading: bool,
    pub error: bool,
    pub people: Option<PeopleList>,
}

#[derive(Debug, PartialEq)]
pub enum LoadAction {
    Started,
    Loaded(Vec<Person>),
    Failed,
}

impl LoadState {
    pub fn started(&self) -> Self {
        Self {
            loading: true,
            error: false,
            people: self.people.clone(),
        }
    }

    pub fn loaded(&self, people: Vec<Person>) -> Self {
        Self {
            loading: false,
            error: false,
            people: Some(Rc::new(people)),
        }
    }

    // Keeps any previously loaded list.
    pub fn failed(&self) -> Self {
        Self {
            loading: false,
            error: true,
            people: self.people.clone(),
        }
    }
}

impl Reducible for LoadState {
    type Action = LoadAction;

    fn reduce(self: Rc<Self>, action: LoadAction) -> Rc<Self> {
        Rc::new(match action {
            LoadAction::Started => self.started(),
            LoadAction::Loaded(people) => self.loaded(people),
            LoadAction::Failed => self.failed(),
        })
    }
}

/// Turns a finished fetch into the action to apply, or `None` when the page
/// is already gone.
pub fn settle(alive: bool, result: Result<Vec<Person>, FetchError>) -> Option<LoadAction> {
    if !alive {
        return None;
    }
    Some(match result {
        Ok(people) => LoadAction::Loaded(people),
        Err(_) => LoadAction::Failed,
    })
}

/// Fetches the people list once on mount.
///
/// A response that lands after the caller unmounted is dropped instead of
/// being applied.
#[hook]
pub fn use_people(api_url: String) -> LoadState {
    let state = use_reducer(LoadState::default);

    {
        let dispatcher = state.dispatcher();
        use_effect_with((), move |_| {
            let alive = Rc::new(Cell::new(true));

            dispatcher.dispatch(LoadAction::Started);
            log!(format!("Fetching people from {api_url}"));

            {
                let alive = alive.clone();
                spawn_local(async move {
                    let result = api::get_people(&api_url).await;

                    match &result {
                        Ok(people) => log!(format!("Loaded {} people", people.len())),
                        Err(e) => error!(format!("Failed to load people: {e}")),
                    }

                    match settle(alive.get(), result) {
                        Some(action) => dispatcher.dispatch(action),
                        None => log!("People page closed before the response arrived; discarding it."),
                    }
                });
            }

            move || alive.set(false)
        });
    }

    (*state).clone()
}
