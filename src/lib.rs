pub mod shared {
    pub mod infrastructure {
        pub mod http {
            pub mod json_body;
            pub mod query;
        }
    }
}

pub mod modules {
    pub mod items {
        pub mod core {
            pub mod lookup;
            pub mod ports;
            pub mod record;
        }
        pub mod application {
            pub mod errors;
            pub mod record_body;
        }
        pub mod use_cases {
            pub mod get_item {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod create_item {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod update_item {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod delete_item {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod in_memory_item_store;
            }
        }
    }
}

pub mod shell;
