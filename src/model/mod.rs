pub mod account;
pub mod auth;
pub mod cash_flow;
pub mod customer;
pub mod order;
pub mod page;
pub mod product;
pub mod service_order;
pub mod user;

pub use account::Account;
pub use auth::{AuthResponse, LoginRequest, RefreshRequest, RegisterRequest, UserInfo};
pub use cash_flow::{CashFlow, CashFlowCategory, CashFlowType};
pub use customer::Customer;
pub use order::{Order, OrderItem, OrderStatus};
pub use page::{ListQuery, Page};
pub use product::Product;
pub use service_order::{
    Anilox, InkMix, MachineSetup, Rewinding, ServiceOrder, ServiceOrderStatus, Traceability,
};
pub use user::{User, UserProfile};
