pub mod catalog;
pub mod db;
pub mod category {
    pub mod entity;
    pub mod in_memory;
    pub mod repository;
}
pub mod grocery_item {
    pub mod entity;
    pub mod in_memory;
    pub mod repository;
}
