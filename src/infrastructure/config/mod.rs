mod settings;

pub use settings::{
    ApiConfig, RedditConfig, RedisConfig, ServerConfig, Settings, StoreConfig,
};
