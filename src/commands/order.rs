use super::CartExt;
use crate::models::{CartView, OrderRequest};
use crate::receipt::Receipt;
use tauri::AppHandle;
use tauri_plugin_dialog::{DialogExt, MessageDialogKind};

#[tauri::command]
pub fn confirm_order(app: AppHandle, request: OrderRequest) -> Result<Receipt, String> {
    let mut manager = app.cart().lock().map_err(|e| e.to_string())?;

    match manager.confirm_order(&request) {
        Ok(receipt) => Ok(receipt),
        Err(e) => {
            let message = e.to_string();
            tracing::debug!(error = %message, "Order rejected");

            app.dialog()
                .message(message.clone())
                .kind(MessageDialogKind::Warning)
                .title("Order")
                .show(|_| {});

            Err(message)
        }
    }
}

#[tauri::command]
pub fn get_receipt(app: AppHandle) -> Result<Option<String>, String> {
    let manager = app.cart().lock().map_err(|e| e.to_string())?;

    let currency = &manager.config().currency_symbol;
    Ok(manager.receipt().map(|receipt| receipt.render(currency)))
}

#[tauri::command]
pub fn reset_order(app: AppHandle) -> Result<CartView, String> {
    let mut manager = app.cart().lock().map_err(|e| e.to_string())?;

    manager.reset_order();

    Ok(manager.view())
}
