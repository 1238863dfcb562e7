mod loader;
mod people_page;
mod people_table;
mod person_link;

pub use loader::Loader;
pub use people_page::PeoplePage;
pub use people_table::PeopleTable;
pub use person_link::PersonLink;
