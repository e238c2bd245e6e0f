use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;
use colored::Colorize;
use directories::ProjectDirs;
use shopdesk::api::ShopdeskApi;
use shopdesk::commands::customers::CustomerInput;
use shopdesk::commands::profile::Section;
use shopdesk::commands::search::SearchState;
use shopdesk::commands::{customers, orders, profile};
use shopdesk::error::{Result, ShopdeskError};
use shopdesk::model::OrderStatus;
use shopdesk::store::fs::FileBackend;
use shopdesk::table::{SortDirection, TableQuery};
use tracing_subscriber::EnvFilter;

mod args;
mod print;

use args::{
    Cli, Commands, CompanyCommands, CustomerCommands, CustomerFields, ListArgs, OrderCommands,
    ProfileCommands, ProfileFields, SearchCommands,
};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("{} {}", "Error:".red(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let data_dir = resolve_data_dir(cli.data_dir)?;
    let mut api = ShopdeskApi::new(FileBackend::new(data_dir));

    match cli.command {
        Commands::Customers(cmd) => handle_customers(&mut api, cmd),
        Commands::Orders(cmd) => handle_orders(&mut api, cmd),
        Commands::Profile(cmd) => handle_profile(&mut api, cmd),
        Commands::Company(cmd) => handle_company(&mut api, cmd),
        Commands::Search(cmd) => handle_search(&mut api, cmd),
    }
}

fn resolve_data_dir(override_dir: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = override_dir {
        return Ok(dir);
    }
    ProjectDirs::from("com", "shopdesk", "shopdesk")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| ShopdeskError::Store("could not determine the data directory".into()))
}

/// Explicit flags win; without them the list rehydrates the search state
/// stored for its route.
fn query_from(list: &ListArgs, stored: SearchState) -> TableQuery {
    let mut query = TableQuery::default();
    match &list.term {
        Some(term) => {
            query.set_term(term.clone());
            query.set_filters(list.filters.clone());
        }
        None => {
            query.set_term(stored.term);
            query.set_filters(stored.filters);
        }
    }
    if let Some(column) = &list.sort {
        let direction = if list.desc {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        };
        query.set_sort(Some(column.clone()), direction);
    }
    // Last: the term and sort setters snap the page back to 1.
    query.set_page(list.page);
    query
}

fn customer_input(fields: CustomerFields) -> CustomerInput {
    CustomerInput {
        name: fields.name,
        email: fields.email,
        phone: fields.phone,
        address: fields.address,
        purchases: fields.purchases,
        order_qty: fields.order_qty,
    }
}

fn handle_customers(api: &mut ShopdeskApi<FileBackend>, cmd: CustomerCommands) -> Result<()> {
    match cmd {
        CustomerCommands::List(list) => {
            let query = query_from(&list, api.search(customers::ROUTE));
            let page = api.customers_page(&query);
            print::print_customers(&page.rows, &page.info);
            Ok(())
        }
        CustomerCommands::Add(fields) => {
            let created = api.customer_add(customer_input(fields))?;
            println!("{}", format!("Added customer #{} {}", created.id, created.name).green());
            Ok(())
        }
        CustomerCommands::Edit { id, fields } => {
            let updated = api.customer_edit(id, customer_input(fields))?;
            println!("{}", format!("Updated customer #{} {}", updated.id, updated.name).green());
            Ok(())
        }
        CustomerCommands::Delete { id } => {
            let removed = api.customer_delete(id)?;
            println!("{}", format!("Deleted customer #{} {}", removed.id, removed.name).green());
            Ok(())
        }
        CustomerCommands::Export { out } => {
            let path = api.customers_export(&out)?;
            println!("Exported customers to {}", path.display());
            Ok(())
        }
    }
}

fn handle_orders(api: &mut ShopdeskApi<FileBackend>, cmd: OrderCommands) -> Result<()> {
    match cmd {
        OrderCommands::List { status, list } => {
            let tab = status
                .map(|s| OrderStatus::from_str(&s).map_err(ShopdeskError::InvalidInput))
                .transpose()?;
            let query = query_from(&list, api.search(orders::ROUTE));
            let page = api.orders_page(tab, &query);
            print::print_orders(&page.rows, &page.info, &page.counts);
            Ok(())
        }
        OrderCommands::Export { out } => {
            let path = api.orders_export(&out)?;
            println!("Exported orders report to {}", path.display());
            Ok(())
        }
    }
}

fn handle_profile(api: &mut ShopdeskApi<FileBackend>, cmd: ProfileCommands) -> Result<()> {
    match cmd {
        ProfileCommands::Show => {
            print::print_settings(api.settings());
            Ok(())
        }
        ProfileCommands::Set { fields, snapshot } => {
            let profile = apply_profile_fields(api.settings().profile.clone(), fields);
            let contents = api.save_profile(profile)?;
            println!("{}", "Profile updated".green());
            write_snapshot_if_requested(snapshot, &contents)
        }
        ProfileCommands::Account {
            email_notifications,
            sms_notifications,
            marketing_emails,
            two_factor_auth,
            public_profile,
        } => {
            let mut account = api.settings().account.clone();
            if let Some(value) = email_notifications {
                account.email_notifications = value;
            }
            if let Some(value) = sms_notifications {
                account.sms_notifications = value;
            }
            if let Some(value) = marketing_emails {
                account.marketing_emails = value;
            }
            if let Some(value) = two_factor_auth {
                account.two_factor_auth = value;
            }
            if let Some(value) = public_profile {
                account.public_profile = value;
            }
            api.save_account(account)?;
            println!("{}", "Account settings updated".green());
            Ok(())
        }
        ProfileCommands::Security {
            session_timeout,
            password_min_length,
            require_2fa,
        } => {
            let mut security = api.settings().security.clone();
            if let Some(value) = session_timeout {
                security.session_timeout = value;
            }
            if let Some(value) = password_min_length {
                security.password_min_length = value;
            }
            if let Some(value) = require_2fa {
                security.require_2fa = value;
            }
            api.save_security(security)?;
            println!("{}", "Security settings updated".green());
            Ok(())
        }
        ProfileCommands::Password {
            current,
            new,
            confirm,
            snapshot,
        } => {
            let contents = api.change_password(&current, &new, &confirm)?;
            println!("{}", "Password updated".green());
            write_snapshot_if_requested(snapshot, &contents)
        }
        ProfileCommands::Export { out } => {
            let path = api.settings_export(&out)?;
            println!("Exported settings to {}", path.display());
            Ok(())
        }
        ProfileCommands::Import { file } => {
            let json = fs::read_to_string(&file)?;
            api.settings_import(&json)?;
            println!("{}", format!("Imported settings from {}", file.display()).green());
            Ok(())
        }
        ProfileCommands::Reset { section } => {
            let section = parse_section(&section)?;
            api.settings_reset(section);
            println!("{}", "Section reset to defaults".green());
            Ok(())
        }
    }
}

fn apply_profile_fields(
    mut profile: shopdesk::settings::ProfileData,
    fields: ProfileFields,
) -> shopdesk::settings::ProfileData {
    if let Some(first_name) = fields.first_name {
        profile.first_name = first_name;
    }
    if let Some(last_name) = fields.last_name {
        profile.last_name = last_name;
    }
    if let Some(email) = fields.email {
        profile.email = email;
    }
    if let Some(phone) = fields.phone {
        profile.phone = phone;
    }
    if let Some(location) = fields.location {
        profile.location = location;
    }
    if let Some(bio) = fields.bio {
        profile.bio = bio;
    }
    if let Some(avatar) = fields.avatar {
        profile.avatar = avatar;
    }
    profile
}

fn parse_section(name: &str) -> Result<Section> {
    match name.to_lowercase().as_str() {
        "profile" => Ok(Section::Profile),
        "account" => Ok(Section::Account),
        "security" => Ok(Section::Security),
        "company" => Ok(Section::Company),
        other => Err(ShopdeskError::InvalidInput(format!(
            "unknown section '{other}' (expected profile, account, security, or company)"
        ))),
    }
}

fn handle_company(api: &mut ShopdeskApi<FileBackend>, cmd: CompanyCommands) -> Result<()> {
    match cmd {
        CompanyCommands::Set {
            name,
            logo,
            kind,
            snapshot,
        } => {
            let mut company = api.settings().company.clone();
            if let Some(name) = name {
                company.name = name;
            }
            if let Some(logo) = logo {
                company.logo = logo;
            }
            if let Some(kind) = kind {
                company.kind = kind;
            }
            let contents = api.save_company(company)?;
            println!("{}", "Company updated".green());
            write_snapshot_if_requested(snapshot, &contents)
        }
    }
}

fn handle_search(api: &mut ShopdeskApi<FileBackend>, cmd: SearchCommands) -> Result<()> {
    match cmd {
        SearchCommands::Show { route } => {
            let state = api.search(&route);
            if state.term.is_empty() && state.filters.is_empty() {
                println!("No stored search for '{route}'.");
            } else {
                println!("term: {}", state.term);
                println!("filters: {}", state.filters.join(", "));
            }
            Ok(())
        }
        SearchCommands::Set {
            route,
            term,
            filters,
        } => {
            api.search_set(&route, term, filters)?;
            println!("{}", format!("Search stored for '{route}'").green());
            Ok(())
        }
        SearchCommands::Clear { route } => {
            api.search_clear(&route);
            println!("{}", format!("Search cleared for '{route}'").green());
            Ok(())
        }
    }
}

fn write_snapshot_if_requested(dir: Option<PathBuf>, contents: &str) -> Result<()> {
    if let Some(dir) = dir {
        let path = profile::write_snapshot(&dir, contents)?;
        println!("Wrote settings snapshot to {}", path.display());
    }
    Ok(())
}
