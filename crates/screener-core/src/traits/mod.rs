//! Trait seams between the screening core and its collaborators.

mod data_source;
mod indicator;
mod messenger;
mod state_store;

pub use data_source::DataSource;
pub use indicator::Indicator;
pub use messenger::Messenger;
pub use state_store::StateStore;
