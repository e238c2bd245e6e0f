//! Public facade over the command layer.
//!
//! [`ShopdeskApi`] owns all application state for one session: the store
//! adapter, the event bus, both record collections, and the settings records.
//! The CLI (or any other frontend) holds one instance and calls methods;
//! nothing below this layer touches a terminal.

use std::path::{Path, PathBuf};

use crate::collection::Collection;
use crate::commands::{customers, orders, profile, search};
use crate::error::Result;
use crate::events::{EventBus, Subscription, Topic};
use crate::model::{Customer, Order, OrderStatus};
use crate::settings::{AccountSettings, CompanyData, ProfileData, SecuritySettings};
use crate::store::{StorageBackend, StoreAdapter};
use crate::table::TableQuery;

pub struct ShopdeskApi<S: StorageBackend> {
    store: StoreAdapter<S>,
    bus: EventBus,
    customers: Collection<Customer>,
    orders: Collection<Order>,
    settings: profile::Settings,
}

impl<S: StorageBackend> ShopdeskApi<S> {
    /// Hydrate every collection and settings record from the backend.
    pub fn new(backend: S) -> Self {
        let store = StoreAdapter::new(backend);
        let customers = Collection::load(&store);
        let orders = Collection::load(&store);
        let settings = profile::Settings::load(&store);
        Self {
            store,
            bus: EventBus::new(),
            customers,
            orders,
            settings,
        }
    }

    pub fn subscribe<F>(&self, topic: Topic, handler: F) -> Subscription
    where
        F: Fn(&crate::events::AppEvent) + Send + Sync + 'static,
    {
        self.bus.subscribe(topic, handler)
    }

    // Customers

    pub fn customers_page(&self, query: &TableQuery) -> customers::CustomerPage {
        customers::list(&self.customers, query)
    }

    pub fn customer(&self, id: u64) -> Option<&Customer> {
        self.customers.get(id)
    }

    pub fn customer_add(&mut self, input: customers::CustomerInput) -> Result<Customer> {
        customers::add(&mut self.customers, &mut self.store, input)
    }

    pub fn customer_edit(&mut self, id: u64, input: customers::CustomerInput) -> Result<Customer> {
        customers::edit(&mut self.customers, &mut self.store, id, input)
    }

    pub fn customer_delete(&mut self, id: u64) -> Result<Customer> {
        customers::delete(&mut self.customers, &mut self.store, id)
    }

    pub fn customers_export(&self, dir: &Path) -> Result<PathBuf> {
        customers::export(&self.customers, dir)
    }

    // Orders

    pub fn orders_page(&self, tab: Option<OrderStatus>, query: &TableQuery) -> orders::OrderPage {
        orders::list(&self.orders, tab, query)
    }

    pub fn order_status_counts(&self) -> orders::StatusCounts {
        orders::status_counts(&self.orders)
    }

    pub fn orders_export(&self, dir: &Path) -> Result<PathBuf> {
        orders::export(&self.orders, dir)
    }

    // Search

    pub fn search(&self, route: &str) -> search::SearchState {
        search::get(&self.store, route)
    }

    pub fn search_set(
        &mut self,
        route: &str,
        term: String,
        filters: Vec<String>,
    ) -> Result<search::SearchState> {
        search::set(&mut self.store, &self.bus, route, term, filters)
    }

    pub fn search_clear(&mut self, route: &str) {
        search::clear(&mut self.store, &self.bus, route);
    }

    // Settings

    pub fn settings(&self) -> &profile::Settings {
        &self.settings
    }

    pub fn save_profile(&mut self, profile: ProfileData) -> Result<String> {
        profile::save_profile(&mut self.settings, &mut self.store, profile)
    }

    pub fn set_avatar(&mut self, avatar: impl Into<String>) -> Result<String> {
        profile::set_avatar(&mut self.settings, &mut self.store, avatar)
    }

    pub fn save_account(&mut self, account: AccountSettings) -> Result<()> {
        profile::save_account(&mut self.settings, &mut self.store, account)
    }

    pub fn save_security(&mut self, security: SecuritySettings) -> Result<()> {
        profile::save_security(&mut self.settings, &mut self.store, security)
    }

    pub fn change_password(&self, current: &str, new: &str, confirm: &str) -> Result<String> {
        profile::change_password(&self.settings, current, new, confirm)
    }

    pub fn save_company(&mut self, company: CompanyData) -> Result<String> {
        profile::save_company(&mut self.settings, &mut self.store, &self.bus, company)
    }

    pub fn settings_export(&self, dir: &Path) -> Result<PathBuf> {
        profile::export(&self.settings, dir)
    }

    pub fn settings_import(&mut self, json: &str) -> Result<()> {
        profile::import(&mut self.settings, &mut self.store, json)
    }

    pub fn settings_reset(&mut self, section: profile::Section) {
        profile::reset(&mut self.settings, &mut self.store, section);
    }
}
