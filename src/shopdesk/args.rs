use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "shopdesk")]
#[command(about = "Shop administration from the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Override the data directory (defaults to the platform data dir)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage customers
    #[command(subcommand, alias = "c")]
    Customers(CustomerCommands),

    /// Browse and export orders
    #[command(subcommand, alias = "o")]
    Orders(OrderCommands),

    /// Show and edit the user profile and settings
    #[command(subcommand, alias = "p")]
    Profile(ProfileCommands),

    /// Edit company data
    #[command(subcommand)]
    Company(CompanyCommands),

    /// Inspect or change per-route search state
    #[command(subcommand, alias = "s")]
    Search(SearchCommands),
}

/// Search, sort, and paging flags shared by the list commands.
#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Search term (case-insensitive substring)
    #[arg(short, long)]
    pub term: Option<String>,

    /// Restrict the search to these fields (repeatable)
    #[arg(short, long = "filter", value_name = "FIELD")]
    pub filters: Vec<String>,

    /// Sort by this column
    #[arg(short, long, value_name = "COLUMN")]
    pub sort: Option<String>,

    /// Sort descending instead of ascending
    #[arg(long, requires = "sort")]
    pub desc: bool,

    /// Page to show (1-based)
    #[arg(short, long, default_value_t = 1)]
    pub page: usize,
}

#[derive(Args, Debug, Default)]
pub struct CustomerFields {
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    #[arg(long)]
    pub phone: Option<String>,

    #[arg(long)]
    pub address: Option<String>,

    /// Lifetime purchase total in dollars
    #[arg(long)]
    pub purchases: Option<f64>,

    /// Number of orders placed
    #[arg(long)]
    pub order_qty: Option<u64>,
}

#[derive(Subcommand, Debug)]
pub enum CustomerCommands {
    /// List customers
    #[command(alias = "ls")]
    List(ListArgs),

    /// Add a customer
    Add(CustomerFields),

    /// Edit a customer; omitted fields keep their current value
    Edit {
        id: u64,
        #[command(flatten)]
        fields: CustomerFields,
    },

    /// Delete a customer
    #[command(alias = "rm")]
    Delete { id: u64 },

    /// Write customers.json into a directory
    Export {
        /// Target directory (defaults to the current directory)
        #[arg(long, value_name = "DIR", default_value = ".")]
        out: PathBuf,
    },
}

#[derive(Subcommand, Debug)]
pub enum OrderCommands {
    /// List orders
    #[command(alias = "ls")]
    List {
        /// Status tab: shipping, completed, or cancelled (omit for all)
        #[arg(long)]
        status: Option<String>,

        #[command(flatten)]
        list: ListArgs,
    },

    /// Write the orders.pdf report into a directory
    Export {
        /// Target directory (defaults to the current directory)
        #[arg(long, value_name = "DIR", default_value = ".")]
        out: PathBuf,
    },
}

#[derive(Args, Debug, Default)]
pub struct ProfileFields {
    #[arg(long)]
    pub first_name: Option<String>,

    #[arg(long)]
    pub last_name: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    #[arg(long)]
    pub phone: Option<String>,

    #[arg(long)]
    pub location: Option<String>,

    #[arg(long)]
    pub bio: Option<String>,

    #[arg(long)]
    pub avatar: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum ProfileCommands {
    /// Show the profile and settings
    Show,

    /// Update profile fields; omitted fields keep their current value
    Set {
        #[command(flatten)]
        fields: ProfileFields,

        /// Also write the .env settings snapshot into this directory
        #[arg(long, value_name = "DIR")]
        snapshot: Option<PathBuf>,
    },

    /// Toggle account notification and visibility settings
    Account {
        #[arg(long, value_name = "BOOL")]
        email_notifications: Option<bool>,

        #[arg(long, value_name = "BOOL")]
        sms_notifications: Option<bool>,

        #[arg(long, value_name = "BOOL")]
        marketing_emails: Option<bool>,

        #[arg(long, value_name = "BOOL")]
        two_factor_auth: Option<bool>,

        #[arg(long, value_name = "BOOL")]
        public_profile: Option<bool>,
    },

    /// Adjust security settings
    Security {
        /// Session timeout in minutes
        #[arg(long)]
        session_timeout: Option<u32>,

        #[arg(long)]
        password_min_length: Option<u32>,

        #[arg(long, value_name = "BOOL")]
        require_2fa: Option<bool>,
    },

    /// Change the password
    Password {
        #[arg(long)]
        current: String,

        #[arg(long)]
        new: String,

        #[arg(long)]
        confirm: String,

        /// Also write the .env settings snapshot into this directory
        #[arg(long, value_name = "DIR")]
        snapshot: Option<PathBuf>,
    },

    /// Write settings.json into a directory
    Export {
        /// Target directory (defaults to the current directory)
        #[arg(long, value_name = "DIR", default_value = ".")]
        out: PathBuf,
    },

    /// Apply a previously exported settings.json
    Import { file: PathBuf },

    /// Restore one section to its defaults
    Reset {
        /// Section: profile, account, security, or company
        section: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum CompanyCommands {
    /// Update company data; omitted fields keep their current value
    Set {
        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        logo: Option<String>,

        /// Business type shown under the company name
        #[arg(long = "type")]
        kind: Option<String>,

        /// Also write the .env settings snapshot into this directory
        #[arg(long, value_name = "DIR")]
        snapshot: Option<PathBuf>,
    },
}

#[derive(Subcommand, Debug)]
pub enum SearchCommands {
    /// Show the stored search state for a route
    Show { route: String },

    /// Store a search term (and optional field filters) for a route
    Set {
        route: String,
        term: String,

        #[arg(short, long = "filter", value_name = "FIELD")]
        filters: Vec<String>,
    },

    /// Clear the stored search state for a route
    Clear { route: String },
}
