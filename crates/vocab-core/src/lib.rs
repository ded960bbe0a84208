pub mod navigation;
pub mod photos;
pub mod preprocess;
pub mod session;
pub mod state;

pub use navigation::{NavStatus, Navigator};
pub use photos::PhotoBrowser;
pub use session::Session;
