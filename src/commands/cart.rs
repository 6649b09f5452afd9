use super::CartExt;
use crate::models::CartView;
use tauri::AppHandle;

#[tauri::command]
pub fn get_cart(app: AppHandle) -> Result<CartView, String> {
    let manager = app.cart().lock().map_err(|e| e.to_string())?;
    Ok(manager.view())
}

#[tauri::command]
pub fn add_to_cart(app: AppHandle, name: String, price: f64) -> Result<CartView, String> {
    let mut manager = app.cart().lock().map_err(|e| e.to_string())?;

    manager.add_item(&name, price).map_err(|e| e.to_string())?;

    Ok(manager.view())
}

#[tauri::command]
pub fn remove_from_cart(app: AppHandle, index: usize) -> Result<CartView, String> {
    let mut manager = app.cart().lock().map_err(|e| e.to_string())?;

    manager.remove_item(index).map_err(|e| e.to_string())?;

    Ok(manager.view())
}

#[tauri::command]
pub fn increase_quantity(app: AppHandle, index: usize) -> Result<CartView, String> {
    let mut manager = app.cart().lock().map_err(|e| e.to_string())?;

    manager.increase_quantity(index).map_err(|e| e.to_string())?;

    Ok(manager.view())
}

/// Decrease quantity by 1. If quantity becomes 0, the line is removed.
#[tauri::command]
pub fn decrease_quantity(app: AppHandle, index: usize) -> Result<CartView, String> {
    let mut manager = app.cart().lock().map_err(|e| e.to_string())?;

    manager.decrease_quantity(index).map_err(|e| e.to_string())?;

    Ok(manager.view())
}
