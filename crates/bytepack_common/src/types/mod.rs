pub mod compilation;
pub mod output_asset;
pub mod output_spec;
pub mod prepared_entry;
pub mod processed_options;
