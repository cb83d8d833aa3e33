mod http_mock;

pub use http_mock::*;
