pub mod shared {
    pub mod core {
        pub mod ordered_map;
    }
    pub mod infrastructure {
        pub mod config;
        pub mod vote_store;
    }
}

pub mod modules {
    pub mod votes {
        pub mod core {
            pub mod award_config;
            pub mod selections;
            pub mod tally;
            pub mod vote_record;
        }
        pub mod use_cases {
            pub mod errors;
            pub mod submit_vote {
                pub mod command;
                pub mod handler;
                pub mod validate;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_votes {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod get_vote {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod delete_vote {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod reports {
                pub mod snapshot;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
    }
}

pub mod shell;
