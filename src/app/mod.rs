mod phases;
mod root;
mod route;
mod state;

pub(crate) use phases::PageView;
pub(crate) use state::{AppState, DocsState, HomeState, TerminalState};

#[cfg(target_arch = "wasm32")]
pub(crate) use route::location;

pub use root::App;
pub use route::Route;
