pub mod app;

pub use app::BoardApp;
