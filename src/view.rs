use crate::load::LoadState;

/// Which blocks of the people page are on screen for a given load state.
///
/// The error and "no people" messages are independent of each other; both
/// can show at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DisplayFlags {
    pub loader: bool,
    pub error_message: bool,
    pub empty_message: bool,
    pub table: bool,
}

impl DisplayFlags {
    pub fn from_state(state: &LoadState) -> Self {
        let loaded_empty = state.people.as_ref().is_some_and(|p| p.is_empty());
        let empty_message = !state.loading && loaded_empty;

        Self {
            loader: state.loading,
            error_message: state.error,
            empty_message,
            table: !state.loading && !empty_message,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::model::Person;

    fn loaded(people: Vec<Person>) -> LoadState {
        LoadState::default().started().loaded(people)
    }

    #[test]
    fn loading_shows_only_loader() {
        let flags = DisplayFlags::from_state(&LoadState::default().started());
        assert_eq!(
            flags,
            DisplayFlags {
                loader: true,
                ..Default::default()
            }
        );
    }

    #[test]
    fn empty_list_hides_table() {
        let flags = DisplayFlags::from_state(&loaded(vec![]));
        assert!(flags.empty_message);
        assert!(!flags.table);
        assert!(!flags.error_message);
        assert!(!flags.loader);
    }

    #[test]
    fn loaded_list_shows_table() {
        let p = Person {
            slug: "a".into(),
            name: "Alice".into(),
            sex: "f".into(),
            born: Some(1900),
            died: None,
            mother_name: None,
            father_name: None,
        };
        let flags = DisplayFlags::from_state(&loaded(vec![p]));
        assert!(flags.table);
        assert!(!flags.empty_message);
    }

    #[test]
    fn failure_shows_error_and_keeps_table_governed_by_loading() {
        let flags = DisplayFlags::from_state(&LoadState::default().started().failed());
        assert!(flags.error_message);
        assert!(!flags.loader);
        assert!(!flags.empty_message);
        assert!(flags.table);
    }

    #[test]
    fn error_and_empty_messages_can_coexist() {
        let state = LoadState {
            loading: false,
            error: true,
            people: Some(Rc::new(vec![])),
        };
        let flags = DisplayFlags::from_state(&state);
        assert!(flags.error_message);
        assert!(flags.empty_message);
    }
}
