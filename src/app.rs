use std::sync::Arc;

use tokio::sync::broadcast;

use crate::api::{
    AccountApi, CashFlowApi, CustomerApi, OrderApi, ProductApi, ServiceOrderApi, UserApi,
};
use crate::app_config::ApiConfig;
use crate::error::ApiError;
use crate::model::AuthResponse;
use crate::session::{SessionEvent, SessionManager};
use crate::store::TokenStore;
use crate::transport::ApiClient;

/// Everything the UI layer needs, wired once at startup: the session, the
/// shared transport and one facade per backend resource. Passed around
/// explicitly instead of living in ambient globals.
pub struct AppContext {
    pub session: Arc<SessionManager>,
    pub client: Arc<ApiClient>,
    pub accounts: AccountApi,
    pub customers: CustomerApi,
    pub products: ProductApi,
    pub users: UserApi,
    pub orders: OrderApi,
    pub service_orders: ServiceOrderApi,
    pub cash_flows: CashFlowApi,
}

impl AppContext {
    /// Wire the full client stack and attempt a session restore from the
    /// persisted store.
    pub async fn init(config: ApiConfig, store: Arc<dyn TokenStore>) -> Result<Self, ApiError> {
        let session = Arc::new(SessionManager::new(&config, store)?);
        session.restore().await;
        let client = Arc::new(ApiClient::new(&config, Arc::clone(&session))?);
        Ok(Self {
            session,
            accounts: AccountApi::new(Arc::clone(&client)),
            customers: CustomerApi::new(Arc::clone(&client)),
            products: ProductApi::new(Arc::clone(&client)),
            users: UserApi::new(Arc::clone(&client)),
            orders: OrderApi::new(Arc::clone(&client)),
            service_orders: ServiceOrderApi::new(Arc::clone(&client)),
            cash_flows: CashFlowApi::new(Arc::clone(&client)),
            client,
        })
    }

    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.session.subscribe()
    }

    pub async fn login(&self, user_name: &str, password: &str) -> Result<AuthResponse, ApiError> {
        crate::validation::validate_login(user_name, password)?;
        self.session.login(user_name, password).await
    }

    /// Teardown: clears the persisted session and notifies observers.
    pub async fn logout(&self) {
        self.session.logout().await;
    }
}
