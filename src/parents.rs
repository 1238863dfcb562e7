use std::collections::HashMap;

use crate::model::{PeopleList, Person};

/// What a mother/father cell shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParentRef<'a> {
    /// No parent recorded; rendered as "-".
    Missing,
    /// Parent is in the loaded list; rendered as a link.
    Known(&'a Person),
    /// Parent name with no matching person; rendered as plain text.
    Unknown(&'a str),
}

/// Name -> person lookup over a loaded list.
///
/// Names are not unique; the first person with a given name wins, same as a
/// front-to-back scan would.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParentIndex {
    people: Option<PeopleList>,
    by_name: HashMap<String, usize>,
}

impl ParentIndex {
    pub fn build(people: &PeopleList) -> Self {
        let mut by_name = HashMap::with_capacity(people.len());
        for (i, p) in people.iter().enumerate() {
            by_name.entry(p.name.clone()).or_insert(i);
        }
        Self {
            people: Some(people.clone()),
            by_name,
        }
    }

    pub fn resolve<'a>(&'a self, parent_name: Option<&'a str>) -> ParentRef<'a> {
        let name = match parent_name {
            Some(n) if !n.is_empty() => n,
            _ => return ParentRef::Missing,
        };

        self.by_name
            .get(name)
            .and_then(|&i| self.people.as_ref()?.get(i))
            .map_or(ParentRef::Unknown(name), ParentRef::Known)
    }
}
