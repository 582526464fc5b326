//! Demo admin viewer over persisted orders and job applications.

use tracing::{error, info, instrument};

use crate::application_actor::ApplicationError;
use crate::clients::{ApplicationClient, OrderClient};
use crate::domain::{ApplicationStatus, JobApplication, Order, OrderStatus};
use crate::order_actor::OrderError;

/// One refresh worth of admin data. Both lists are newest first.
#[derive(Debug, Clone, Default)]
pub struct AdminDashboard {
    pub orders: Vec<Order>,
    pub applications: Vec<JobApplication>,
    /// Non-fatal problems hit while loading, for display.
    pub notices: Vec<String>,
}

impl AdminDashboard {
    pub fn order_count(&self) -> usize {
        self.orders.len()
    }

    pub fn application_count(&self) -> usize {
        self.applications.len()
    }

    pub fn orders_with_status(&self, status: OrderStatus) -> impl Iterator<Item = &Order> {
        self.orders.iter().filter(move |order| order.status == status)
    }
}

#[derive(Clone)]
pub struct AdminConsole {
    orders: OrderClient,
    applications: ApplicationClient,
}

impl AdminConsole {
    pub fn new(orders: OrderClient, applications: ApplicationClient) -> Self {
        Self {
            orders,
            applications,
        }
    }

    /// Re-read both collections. A failed read leaves that tab empty and
    /// adds a notice instead of failing the whole refresh.
    #[instrument(skip(self))]
    pub async fn refresh(&self) -> AdminDashboard {
        let mut dashboard = AdminDashboard::default();

        match self.orders.list_orders().await {
            Ok(orders) => dashboard.orders = orders,
            Err(e) => {
                error!(error = %e, "Failed to load orders");
                dashboard.notices.push(format!("Failed to load orders: {}", e));
            }
        }
        match self.applications.list_applications().await {
            Ok(applications) => dashboard.applications = applications,
            Err(e) => {
                error!(error = %e, "Failed to load applications");
                dashboard
                    .notices
                    .push(format!("Failed to load applications: {}", e));
            }
        }

        info!(
            orders = dashboard.order_count(),
            applications = dashboard.application_count(),
            "Admin dashboard refreshed"
        );
        dashboard
    }

    pub async fn update_order_status(
        &self,
        id: String,
        status: OrderStatus,
    ) -> Result<OrderStatus, OrderError> {
        self.orders.update_status(id, status).await
    }

    pub async fn update_application_status(
        &self,
        id: String,
        status: ApplicationStatus,
    ) -> Result<ApplicationStatus, ApplicationError> {
        self.applications.update_status(id, status).await
    }

    /// Remove every stored order. Applications are kept.
    pub async fn clear_all_orders(&self) -> Result<usize, OrderError> {
        self.orders.clear_orders().await
    }
}
