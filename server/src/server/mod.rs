pub mod http;
pub mod run;
pub mod state;
pub mod ws;

pub use run::run_server;
pub use state::AppState;
