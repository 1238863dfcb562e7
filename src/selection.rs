use std::rc::Rc;

use yew::prelude::*;

/// Slug of the highlighted row, if any.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selection(Option<String>);

impl Selection {
    pub fn seeded(route_slug: Option<&str>) -> Self {
        Self(route_slug.map(str::to_string))
    }

    /// Route changes win over local clicks. A route without a slug leaves the
    /// current highlight alone.
    pub fn follow_route(&mut self, route_slug: Option<&str>) {
        if let Some(slug) = route_slug {
            self.0 = Some(slug.to_string());
        }
    }

    pub fn select(&mut self, slug: &str) {
        self.0 = Some(slug.to_string());
    }

    pub fn is_selected(&self, slug: &str) -> bool {
        self.0.as_deref() == Some(slug)
    }
}

pub enum SelectionAction {
    RouteChanged(Option<String>),
    Clicked(String),
}

impl Reducible for Selection {
    type Action = SelectionAction;

    fn reduce(self: Rc<Self>, action: SelectionAction) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            SelectionAction::RouteChanged(route_slug) => next.follow_route(route_slug.as_deref()),
            SelectionAction::Clicked(slug) => next.select(&slug),
        }
        Rc::new(next)
    }
}

/// Tracks the highlighted row. Seeded from and re-synced to `route_slug`;
/// the returned callback overrides it locally without touching the route.
#[hook]
pub fn use_selection(route_slug: Option<String>) -> (Selection, Callback<String>) {
    let selection = {
        let seed = route_slug.clone();
        use_reducer_eq(move || Selection::seeded(seed.as_deref()))
    };

    {
        let dispatcher = selection.dispatcher();
        use_effect_with(route_slug, move |route_slug| {
            dispatcher.dispatch(SelectionAction::RouteChanged(route_slug.clone()));
            || ()
        });
    }

    let on_select = {
        let dispatcher = selection.dispatcher();
        Callback::from(move |slug: String| dispatcher.dispatch(SelectionAction::Clicked(slug)))
    };

    ((*selection).clone(), on_select)
}
