use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::store::keys;
use crate::table::{FieldValue, TableRecord};

/// A record that can live in a [`crate::collection::Collection`]: integer
/// identity, whole-record validation, a store key, and seed data used when
/// the store holds nothing yet.
pub trait Record: TableRecord + Clone + Serialize + DeserializeOwned {
    const STORE_KEY: &'static str;
    const ENTITY: &'static str;

    fn id(&self) -> u64;
    fn set_id(&mut self, id: u64);

    /// All violated fields, empty when the record is valid.
    fn validate(&self) -> Vec<String>;

    fn seed() -> Vec<Self>;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub purchases: f64,
    pub order_qty: u64,
}

impl Customer {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: u64,
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        address: impl Into<String>,
        purchases: f64,
        order_qty: u64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            address: address.into(),
            purchases,
            order_qty,
        }
    }
}

impl TableRecord for Customer {
    fn searchable_fields() -> &'static [&'static str] {
        &["name", "email", "phone", "address", "id", "purchases", "orderQty"]
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "name" => Some(FieldValue::Text(&self.name)),
            "email" => Some(FieldValue::Text(&self.email)),
            // The customers table sorts its contact column by email.
            "contact" => Some(FieldValue::Text(&self.email)),
            "phone" => Some(FieldValue::Text(&self.phone)),
            "address" => Some(FieldValue::Text(&self.address)),
            "id" => Some(FieldValue::Number(self.id as f64)),
            "purchases" => Some(FieldValue::Number(self.purchases)),
            "orderQty" => Some(FieldValue::Number(self.order_qty as f64)),
            _ => None,
        }
    }
}

impl Record for Customer {
    const STORE_KEY: &'static str = keys::CUSTOMERS;
    const ENTITY: &'static str = "customer";

    fn id(&self) -> u64 {
        self.id
    }

    fn set_id(&mut self, id: u64) {
        self.id = id;
    }

    fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if self.name.trim().is_empty() {
            errors.push("name is required".to_string());
        }
        if self.email.trim().is_empty() {
            errors.push("email is required".to_string());
        }
        if self.phone.trim().is_empty() {
            errors.push("phone is required".to_string());
        }
        if self.address.trim().is_empty() {
            errors.push("address is required".to_string());
        }
        if self.purchases < 0.0 {
            errors.push("purchases cannot be negative".to_string());
        }
        errors
    }

    fn seed() -> Vec<Self> {
        crate::seed::customers()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentStatus {
    Paid,
    Unpaid,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Paid => "Paid",
            PaymentStatus::Unpaid => "Unpaid",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    Shipping,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Shipping => "Shipping",
            OrderStatus::Completed => "Completed",
            OrderStatus::Cancelled => "Cancelled",
        }
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "shipping" => Ok(OrderStatus::Shipping),
            "completed" => Ok(OrderStatus::Completed),
            "cancelled" => Ok(OrderStatus::Cancelled),
            other => Err(format!("unknown order status: {other}")),
        }
    }
}

/// Read-mostly in this system: orders are seeded and listed/exported, never
/// edited through the UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: u64,
    pub product_id: String,
    pub product_name: String,
    pub product_color: String,
    pub product_image: String,
    pub customer_name: String,
    pub price: f64,
    pub order_date: String,
    pub payment_status: PaymentStatus,
    pub status: OrderStatus,
}

impl TableRecord for Order {
    fn searchable_fields() -> &'static [&'static str] {
        &["customerName", "productName", "productId", "status", "id", "price", "orderDate"]
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "productId" => Some(FieldValue::Text(&self.product_id)),
            "productName" => Some(FieldValue::Text(&self.product_name)),
            "productColor" => Some(FieldValue::Text(&self.product_color)),
            "customerName" => Some(FieldValue::Text(&self.customer_name)),
            "status" => Some(FieldValue::Text(self.status.as_str())),
            "paymentStatus" => Some(FieldValue::Text(self.payment_status.as_str())),
            "orderDate" => Some(FieldValue::Text(&self.order_date)),
            "id" => Some(FieldValue::Number(self.id as f64)),
            "price" => Some(FieldValue::Number(self.price)),
            _ => None,
        }
    }
}

impl Record for Order {
    const STORE_KEY: &'static str = keys::ORDERS;
    const ENTITY: &'static str = "order";

    fn id(&self) -> u64 {
        self.id
    }

    fn set_id(&mut self, id: u64) {
        self.id = id;
    }

    fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if self.product_name.trim().is_empty() {
            errors.push("productName is required".to_string());
        }
        if self.customer_name.trim().is_empty() {
            errors.push("customerName is required".to_string());
        }
        if self.price < 0.0 {
            errors.push("price cannot be negative".to_string());
        }
        errors
    }

    fn seed() -> Vec<Self> {
        crate::seed::orders()
    }
}
