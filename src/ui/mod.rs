pub mod app;
pub mod wizard;

pub use app::App;
