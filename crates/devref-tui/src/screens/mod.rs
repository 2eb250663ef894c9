pub mod browser;

pub use browser::BrowserScreen;
