pub mod application {
    pub mod category {
        pub mod get_all;
    }
    pub mod grocery_item {
        pub mod add;
        pub mod get_all;
        pub mod remove;
        pub mod toggle;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod category {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod get_all;
        }
    }
    pub mod grocery_item {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod add;
            pub mod get_all;
            pub mod remove;
            pub mod toggle;
        }
    }
}
