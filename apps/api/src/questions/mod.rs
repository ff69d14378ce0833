// Interview question bank and the endpoints that serve and grade against it.

pub mod bank;
pub mod handlers;
