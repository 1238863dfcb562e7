use yew::prelude::*;

use super::PersonLink;
use crate::model::PeopleList;
use crate::parents::{ParentIndex, ParentRef};
use crate::selection::Selection;

#[derive(Properties, PartialEq)]
pub struct PeopleTableProps {
    pub people: PeopleList,
    pub selection: Selection,
    pub on_select: Callback<String>,
}

fn year(y: Option<i32>) -> String {
    y.map(|y| y.to_string()).unwrap_or_default()
}

fn parent_cell(parent: ParentRef<'_>) -> Html {
    match parent {
        ParentRef::Missing => html! { <>{ "-" }</> },
        ParentRef::Known(p) => html! { <PersonLink person={p.clone()} /> },
        ParentRef::Unknown(name) => html! { <>{ name.to_string() }</> },
    }
}

#[function_component(PeopleTable)]
pub fn people_table(props: &PeopleTableProps) -> Html {
    // Rebuilt only when a new list arrives.
    let index = use_memo(props.people.clone(), ParentIndex::build);

    html! {
        <table
            data-cy="peopleTable"
            class="table is-striped is-hoverable is-narrow is-fullwidth"
        >
            <thead>
                <tr>
                    <th>{ "Name" }</th>
                    <th>{ "Sex" }</th>
                    <th>{ "Born" }</th>
                    <th>{ "Died" }</th>
                    <th>{ "Mother" }</th>
                    <th>{ "Father" }</th>
                </tr>
            </thead>

            <tbody>
                { for props.people.iter().map(|human| {
                    let class = classes!(
                        props.selection.is_selected(&human.slug).then_some("has-background-warning")
                    );
                    let onclick = {
                        let slug = human.slug.clone();
                        props.on_select.reform(move |_: MouseEvent| slug.clone())
                    };

                    html! {
                        <tr data-cy="person" key={human.slug.clone()} {class} {onclick}>
                            <td><PersonLink person={human.clone()} /></td>
                            <td>{ human.sex.clone() }</td>
                            <td>{ year(human.born) }</td>
                            <td>{ year(human.died) }</td>
                            <td>{ parent_cell(index.resolve(human.mother_name.as_deref())) }</td>
                            <td>{ parent_cell(index.resolve(human.father_name.as_deref())) }</td>
                        </tr>
                    }
                }) }
            </tbody>
        </table>
    }
}
