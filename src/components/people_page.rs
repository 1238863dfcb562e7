use yew::prelude::*;

use super::{Loader, PeopleTable};
use crate::config::PageConfig;
use crate::load::{use_people, LoadState};
use crate::route::use_route_slug;
use crate::selection::{use_selection, Selection};
use crate::view::DisplayFlags;

#[derive(Properties, PartialEq)]
pub struct PeopleViewProps {
    pub state: LoadState,
    pub selection: Selection,
    pub on_select: Callback<String>,
}

/// Page body for a given load state and selection.
#[function_component(PeopleView)]
pub fn people_view(props: &PeopleViewProps) -> Html {
    let flags = DisplayFlags::from_state(&props.state);
    let people = props.state.people.clone().unwrap_or_default();

    html! {
        <>
            <h1 class="title">{ "People Page" }</h1>

            <div class="block">
                <div class="box table-container">
                    if flags.loader {
                        <Loader />
                    }

                    if flags.error_message {
                        <p data-cy="peopleLoadingError" class="has-text-danger">
                            { "Something went wrong" }
                        </p>
                    }

                    if flags.empty_message {
                        <p data-cy="noPeopleMessage">{ "There are no people on the server" }</p>
                    }

                    if flags.table {
                        <PeopleTable
                            {people}
                            selection={props.selection.clone()}
                            on_select={props.on_select.clone()}
                        />
                    }
                </div>
            </div>
        </>
    }
}

#[function_component(PeoplePage)]
pub fn people_page() -> Html {
    let config = use_state(PageConfig::load);
    let route_slug = use_route_slug();
    let (selection, on_select) = use_selection(route_slug);
    let state = use_people(config.api_url.clone());

    html! {
        <PeopleView {state} {selection} {on_select} />
    }
}
