pub mod rewrite_config;
pub mod transform_assets;
