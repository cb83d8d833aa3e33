#![allow(dead_code)]
use pve_dns_domain::{AddressFamily, InterfaceAddress, NetworkInterface};

pub struct InterfaceBuilder {
    name: String,
    addresses: Vec<InterfaceAddress>,
}

impl InterfaceBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            addresses: vec![],
        }
    }

    pub fn v4(self, address: &str, prefix: u8) -> Self {
        self.address(AddressFamily::V4, address, prefix)
    }

    pub fn v6(self, address: &str, prefix: u8) -> Self {
        self.address(AddressFamily::V6, address, prefix)
    }

    pub fn address(mut self, family: AddressFamily, address: &str, prefix: u8) -> Self {
        self.addresses.push(InterfaceAddress {
            family,
            address: address.to_string(),
            prefix,
        });
        self
    }

    pub fn build(self) -> NetworkInterface {
        NetworkInterface {
            name: self.name,
            addresses: self.addresses,
        }
    }
}
