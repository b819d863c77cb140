mod settings;

pub use settings::{
    Catalog, Config, ExportSettings, InvalidDatePolicy, ReviewSettings, ServerSettings,
    SessionSettings, EXAMPLE_CONFIG,
};
