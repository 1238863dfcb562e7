use std::rc::Rc;

use serde::{Deserialize, Serialize};

/// One person as served by the people API.
///
/// `mother_name` / `father_name` hold the *name* of another person, not a
/// slug, so they are joined back by name (see `parents`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub sex: String,
    #[serde(default)]
    pub born: Option<i32>,
    #[serde(default)]
    pub died: Option<i32>,
    #[serde(default)]
    pub mother_name: Option<String>,
    #[serde(default)]
    pub father_name: Option<String>,
}

impl Person {
    pub fn is_female(&self) -> bool {
        self.sex == "f"
    }
}

/// People in the order the API returned them.
pub type PeopleList = Rc<Vec<Person>>;
