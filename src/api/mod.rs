pub mod account;
pub mod cash_flow;
pub mod customer;
pub mod order;
pub mod product;
pub mod service_order;
pub mod user;

pub use account::AccountApi;
pub use cash_flow::CashFlowApi;
pub use customer::CustomerApi;
pub use order::OrderApi;
pub use product::ProductApi;
pub use service_order::ServiceOrderApi;
pub use user::UserApi;
