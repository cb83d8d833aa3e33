//! PVE DNS Infrastructure Layer
pub mod dns;
pub mod proxmox;
