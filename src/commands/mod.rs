pub mod cart;
pub mod order;

use std::sync::Mutex;

use tauri::{AppHandle, Manager};

use crate::cart::CartManager;
use crate::db::Database;

pub type CartState = Mutex<CartManager<Database>>;

pub trait CartExt {
    fn cart(&self) -> &CartState;
}

impl CartExt for AppHandle {
    fn cart(&self) -> &CartState {
        self.state::<CartState>().inner()
    }
}
