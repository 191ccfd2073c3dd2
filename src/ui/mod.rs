pub mod dashboard;
pub mod dialogs;
pub mod form_field;
pub mod keybindings;
pub mod paginated_list;
mod panels;
pub mod products;
pub mod terminal_guard;
pub mod wizard;

pub use dashboard::{Dashboard, DashboardAction};
pub use panels::MenuItem;
pub use products::{ProductsResult, ProductsScreen};
pub use wizard::{ListingWizardScreen, WizardResult};
