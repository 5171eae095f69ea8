//! Screens, one per route.

mod form;
mod list;
mod not_found;

pub use form::FormScreen;
pub use list::ListScreen;
pub use not_found::NotFoundScreen;

use staffdeck_lib::model::EmployeeId;

/// Where the user can be, mirroring the dashboard's routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    List,
    Add,
    Edit(EmployeeId),
    NotFound,
}

/// What a screen wants the app to do after handling a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    None,
    Navigate(Route),
    Quit,
}
