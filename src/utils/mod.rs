mod store_context;

pub use store_context::{ use_store_provider, use_theme_store, use_web_info_store };
