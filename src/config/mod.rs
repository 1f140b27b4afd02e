mod loader;
mod model;
mod validation;

pub use loader::{
    ConfigLoader, FileConfigLoader, FileSystem, LOCAL_CONFIG_NAME, LoadResult, RealFileSystem,
};
pub use model::{
    CONFIG_VERSION, Config, DEFAULT_TARGET, DecommissionConfig, ParameterConfig, RetentionConfig,
    SectionRule, StructureConfig,
};
pub use validation::validate_config;
