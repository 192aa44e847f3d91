pub mod defaults;
pub mod run;
pub mod settings;

pub use run::RunConfig;
pub use settings::Settings;
