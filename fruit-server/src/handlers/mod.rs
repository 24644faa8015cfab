//! HTTP handlers for the fruit collection, the JSON response envelope and request extractors.

mod extract;
mod fruit_handlers;
mod response;

pub use extract::{parse_id, JsonObject};
pub use fruit_handlers::{
    create_fruit, delete_fruit, get_fruit, list_fruits, route_not_found, update_fruit,
};
pub use response::{messages, ApiFailure, ApiResponse, ApiResult};
