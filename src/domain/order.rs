use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::cart::CartLine;

/// Order lifecycle. Any status may follow any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Preparing,
    OnTheWay,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 6] = [
        OrderStatus::Pending,
        OrderStatus::Confirmed,
        OrderStatus::Preparing,
        OrderStatus::OnTheWay,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Preparing => "preparing",
            OrderStatus::OnTheWay => "on-the-way",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| format!("unknown order status: {}", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaymentMethod {
    /// Cash on delivery.
    Cash,
    Card,
    Paypal,
    Venmo,
    ApplePay,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "cash",
            PaymentMethod::Card => "card",
            PaymentMethod::Paypal => "paypal",
            PaymentMethod::Venmo => "venmo",
            PaymentMethod::ApplePay => "apple-pay",
        }
    }
}

impl FromStr for PaymentMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [
            PaymentMethod::Cash,
            PaymentMethod::Card,
            PaymentMethod::Paypal,
            PaymentMethod::Venmo,
            PaymentMethod::ApplePay,
        ]
        .into_iter()
        .find(|method| method.as_str() == s)
        .ok_or_else(|| format!("unknown payment method: {}", s))
    }
}

/// Contact details entered at checkout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomerInfo {
    pub name: String,
    pub phone: String,
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl CustomerInfo {
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            address: address.into(),
            email: None,
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Names of required fields that are blank after trimming.
    pub fn missing_fields(&self) -> Vec<String> {
        [
            ("name", &self.name),
            ("phone", &self.phone),
            ("address", &self.address),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field.to_string())
        .collect()
    }

    /// Trimmed copy; a blank email becomes `None`.
    pub fn normalized(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            phone: self.phone.trim().to_string(),
            address: self.address.trim().to_string(),
            email: self
                .email
                .as_deref()
                .map(str::trim)
                .filter(|email| !email.is_empty())
                .map(str::to_string),
        }
    }
}

/// Delivery pricing applied at checkout.
#[derive(Debug, Clone, PartialEq)]
pub struct Fees {
    pub delivery_fee: Decimal,
    pub express_fee: Decimal,
}

impl Default for Fees {
    fn default() -> Self {
        Self {
            delivery_fee: Decimal::new(299, 2),
            express_fee: Decimal::new(200, 2),
        }
    }
}

/// What the checkout form submits besides the cart.
#[derive(Debug, Clone, Default)]
pub struct CheckoutRequest {
    pub customer_info: CustomerInfo,
    pub payment_method: Option<PaymentMethod>,
    pub express_delivery: bool,
}

/// Payload for creating a new order.
#[derive(Debug)]
pub struct OrderCreate {
    pub items: Vec<CartLine>,
    pub customer_info: CustomerInfo,
    pub payment_method: PaymentMethod,
    pub express_delivery: bool,
    pub fees: Fees,
}

/// A finalized order as persisted for the admin viewer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub items: Vec<CartLine>,
    pub subtotal: Decimal,
    pub delivery_fee: Decimal,
    pub express_delivery: bool,
    /// Surcharge actually charged; zero without express delivery.
    #[serde(default)]
    pub express_fee: Decimal,
    pub total: Decimal,
    pub customer_info: CustomerInfo,
    pub payment_method: PaymentMethod,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// Build a pending order, deriving every amount from `payload`.
    pub fn price(id: String, payload: OrderCreate, now: DateTime<Utc>) -> Self {
        let subtotal: Decimal = payload.items.iter().map(CartLine::line_total).sum();
        let express_fee = if payload.express_delivery {
            payload.fees.express_fee
        } else {
            Decimal::ZERO
        };
        let total = subtotal + payload.fees.delivery_fee + express_fee;

        Self {
            id,
            items: payload.items,
            subtotal,
            delivery_fee: payload.fees.delivery_fee,
            express_delivery: payload.express_delivery,
            express_fee,
            total,
            customer_info: payload.customer_info,
            payment_method: payload.payment_method,
            status: OrderStatus::Pending,
            created_at: now,
            updated_at: now,
        }
    }

    /// Short number shown in listings: the part after the id prefix.
    pub fn label(&self) -> &str {
        self.id
            .split_once('-')
            .map(|(_, rest)| rest)
            .unwrap_or(&self.id)
    }

    /// Units across all lines. Saturates rather than wrapping on stored data.
    pub fn item_count(&self) -> u32 {
        self.items
            .iter()
            .fold(0u32, |count, line| count.saturating_add(line.quantity))
    }
}
