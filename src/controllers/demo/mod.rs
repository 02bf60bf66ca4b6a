mod headless;
pub mod scene;

pub use headless::HeadlessDemoController;
