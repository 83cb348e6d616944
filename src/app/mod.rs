mod events;
mod logging;
mod state;
mod step;

pub use state::App;
