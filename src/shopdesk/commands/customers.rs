use std::fs;
use std::path::{Path, PathBuf};

use super::PageInfo;
use crate::collection::Collection;
use crate::error::Result;
use crate::model::{Customer, Record};
use crate::store::{StorageBackend, StoreAdapter};
use crate::table::{self, TableQuery};

pub const ROUTE: &str = "customers";
pub const EXPORT_FILENAME: &str = "customers.json";

/// One visible page of the customers table.
#[derive(Debug)]
pub struct CustomerPage {
    pub rows: Vec<Customer>,
    pub info: PageInfo,
}

/// Pure projection: filter → sort → paginate the owned list.
pub fn list(customers: &Collection<Customer>, query: &TableQuery) -> CustomerPage {
    let view = table::view(customers.records(), query);
    CustomerPage {
        info: PageInfo::from_view(&view, query.page()),
        rows: view.rows.into_iter().cloned().collect(),
    }
}

/// Fields the add/edit forms collect. `None` on edit means "keep current".
#[derive(Debug, Clone, Default)]
pub struct CustomerInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub purchases: Option<f64>,
    pub order_qty: Option<u64>,
}

impl CustomerInput {
    fn apply(self, mut base: Customer) -> Customer {
        if let Some(name) = self.name {
            base.name = name;
        }
        if let Some(email) = self.email {
            base.email = email;
        }
        if let Some(phone) = self.phone {
            base.phone = phone;
        }
        if let Some(address) = self.address {
            base.address = address;
        }
        if let Some(purchases) = self.purchases {
            base.purchases = purchases;
        }
        if let Some(order_qty) = self.order_qty {
            base.order_qty = order_qty;
        }
        base
    }
}

pub fn add<S: StorageBackend>(
    customers: &mut Collection<Customer>,
    store: &mut StoreAdapter<S>,
    input: CustomerInput,
) -> Result<Customer> {
    let draft = input.apply(Customer::new(0, "", "", "", "", 0.0, 0));
    let created = customers.create(store, draft)?;
    Ok(created.clone())
}

pub fn edit<S: StorageBackend>(
    customers: &mut Collection<Customer>,
    store: &mut StoreAdapter<S>,
    id: u64,
    input: CustomerInput,
) -> Result<Customer> {
    let current = customers
        .get(id)
        .cloned()
        .ok_or_else(|| crate::error::ShopdeskError::not_found(Customer::ENTITY, id))?;
    let updated = customers.update(store, input.apply(current))?;
    Ok(updated.clone())
}

pub fn delete<S: StorageBackend>(
    customers: &mut Collection<Customer>,
    store: &mut StoreAdapter<S>,
    id: u64,
) -> Result<Customer> {
    customers.delete(store, id)
}

/// Write the full customer list as pretty-printed JSON (`customers.json`,
/// 2-space indent) into `dir`.
pub fn export(customers: &Collection<Customer>, dir: &Path) -> Result<PathBuf> {
    let path = dir.join(EXPORT_FILENAME);
    let json = serde_json::to_string_pretty(customers.records())?;
    fs::write(&path, json)?;
    Ok(path)
}
