use yew::prelude::*;

use crate::model::Person;
use crate::route::person_href;

#[derive(Properties, PartialEq)]
pub struct PersonLinkProps {
    pub person: Person,
}

/// Name linking to the person's route; women are shown in red.
#[function_component(PersonLink)]
pub fn person_link(props: &PersonLinkProps) -> Html {
    let person = &props.person;
    let class = classes!(person.is_female().then_some("has-text-danger"));

    html! {
        <a href={person_href(&person.slug)} {class}>{ person.name.clone() }</a>
    }
}
