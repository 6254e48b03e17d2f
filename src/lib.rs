pub mod shared {
    pub mod infrastructure {
        pub mod attendance_store;
    }
}

pub mod modules {
    pub mod attendance {
        pub mod core {
            pub mod attendee_count;
            pub mod attendee_name;
            pub mod snapshot;
        }
        pub mod use_cases {
            pub mod errors;
            pub mod check_in {
                pub mod command;
                pub mod decide;
                pub mod decision;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod list_attendees {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
    }
}

pub mod shell;
