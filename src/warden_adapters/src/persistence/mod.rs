pub mod hashmap_block_list;
pub mod hashmap_user_store;
pub mod postgres_user_store;
pub mod redis_block_list;
