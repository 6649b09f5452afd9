pub mod cart;
pub mod codec;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod models;
pub mod receipt;
pub mod storage;
pub mod validation;

#[cfg(feature = "desktop")]
mod commands;


pub use cart::CartManager;
pub use config::{CartConfig, ServingWindow};
pub use db::Database;
pub use error::{CartError, ConfigError, OrderError, StorageError};
pub use models::{CartView, LineItem, LineView, OrderRequest, OrderStatus, OrderType};
pub use receipt::{OrderDetails, Receipt, ReceiptLine};
pub use storage::{KeyValueStore, MemoryStore};

#[cfg(feature = "desktop")]
#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    use commands::{cart, order};
    use std::sync::Mutex;
    use tauri::Manager;

    logging::init();

    tauri::Builder::default()
        .plugin(tauri_plugin_dialog::init())
        .setup(|app| {
            let config_path = app.path().app_config_dir()?.join("cart.json");
            let config = CartConfig::load(&config_path).unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Invalid cart config, using defaults");
                CartConfig::default()
            });

            // Initialize database
            let db = Database::new(app.handle(), &config.database_file)?;
            db.initialize()?;

            let manager = CartManager::load(db, config);
            tracing::info!(lines = manager.len(), "Cart ready");
            app.manage(Mutex::new(manager));

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // Cart
            cart::get_cart,
            cart::add_to_cart,
            cart::remove_from_cart,
            cart::increase_quantity,
            cart::decrease_quantity,
            // Order
            order::confirm_order,
            order::get_receipt,
            order::reset_order,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
