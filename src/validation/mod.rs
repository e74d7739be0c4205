//! Form-level checks run before any network call. A failure here is an
//! `ApiError::Validation` and never reaches the HTTP layer; the backend
//! still re-validates everything it accepts.

use crate::error::ApiError;
use crate::model::{Account, CashFlow, Customer, Order, Product, User};

pub const MIN_PASSWORD_LEN: usize = 6;

fn required(value: Option<&str>, field: &str) -> Result<(), ApiError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(()),
        _ => Err(ApiError::Validation {
            field: format!("{field} is required"),
        }),
    }
}

pub fn validate_login(user_name: &str, password: &str) -> Result<(), ApiError> {
    required(Some(user_name), "user name")?;
    if password.len() < MIN_PASSWORD_LEN {
        return Err(ApiError::Validation {
            field: format!("password must be at least {MIN_PASSWORD_LEN} characters"),
        });
    }
    Ok(())
}

pub fn validate_customer(customer: &Customer) -> Result<(), ApiError> {
    required(customer.corporate_name.as_deref(), "corporate name")
}

pub fn validate_account(account: &Account) -> Result<(), ApiError> {
    required(account.corporate_name.as_deref(), "corporate name")
}

pub fn validate_product(product: &Product) -> Result<(), ApiError> {
    required(product.description.as_deref(), "description")
}

pub fn validate_user(user: &User) -> Result<(), ApiError> {
    required(user.name.as_deref(), "name")?;
    required(user.login.as_deref(), "login")?;
    if let Some(password) = user.password.as_deref() {
        if password.len() < MIN_PASSWORD_LEN {
            return Err(ApiError::Validation {
                field: format!("password must be at least {MIN_PASSWORD_LEN} characters"),
            });
        }
    }
    Ok(())
}

pub fn validate_order(order: &Order) -> Result<(), ApiError> {
    if order.customer_id <= 0 {
        return Err(ApiError::Validation {
            field: "customer is required".to_string(),
        });
    }
    if order.account_id <= 0 {
        return Err(ApiError::Validation {
            field: "account is required".to_string(),
        });
    }
    if order.items.is_empty() {
        return Err(ApiError::Validation {
            field: "order needs at least one item".to_string(),
        });
    }
    for item in &order.items {
        if item.product_id <= 0 {
            return Err(ApiError::Validation {
                field: "order item needs a product".to_string(),
            });
        }
        if item.quantity <= 0.0 {
            return Err(ApiError::Validation {
                field: "order item quantity must be positive".to_string(),
            });
        }
    }
    Ok(())
}

pub fn validate_cash_flow(entry: &CashFlow) -> Result<(), ApiError> {
    required(Some(entry.expected_date.as_str()), "expected date")?;
    if entry.expected_value <= 0.0 {
        return Err(ApiError::Validation {
            field: "expected value must be positive".to_string(),
        });
    }
    if entry.installment_number.is_some() && entry.order_id.is_none() {
        return Err(ApiError::Validation {
            field: "installment number requires an order".to_string(),
        });
    }
    Ok(())
}
