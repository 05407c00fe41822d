pub mod core {
    pub mod config;
    pub mod error;
    pub mod startup;
    pub mod state;
    pub mod tracing_init;
}

pub mod models {
    pub mod personality;
    pub mod report;
    pub mod session;
    pub mod user;
}

pub mod storage {
    pub mod kv;
}

pub mod stores {
    pub mod account_store;
    pub mod catalog;
}

pub mod validation {
    pub mod password;
    pub mod personality;
}

pub mod wizard {
    pub mod flow;
}

pub mod locale {
    pub mod strings;
}

pub mod report {
    pub mod render;
}

pub mod utils {
    pub mod links;
    pub mod time;
}
