pub mod client {
    pub mod models {
        pub mod common;
    }
    pub mod client;
    pub mod error;
    pub mod form;
    pub mod transport;
}

pub mod logger;
