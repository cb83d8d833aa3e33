mod fake_inventory;

pub use fake_inventory::*;
