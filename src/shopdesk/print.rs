use colored::Colorize;
use shopdesk::commands::orders::StatusCounts;
use shopdesk::commands::profile::Settings;
use shopdesk::commands::PageInfo;
use shopdesk::model::{Customer, Order};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub(crate) fn print_customers(rows: &[Customer], info: &PageInfo) {
    if rows.is_empty() {
        println!("No customers found.");
        return;
    }

    let columns = [
        ("ID", 5),
        ("NAME", 18),
        ("EMAIL", 26),
        ("PHONE", 16),
        ("ADDRESS", 24),
        ("PURCHASES", 10),
        ("ORDERS", 6),
    ];
    print_header(&columns);

    for customer in rows {
        let cells = [
            customer.id.to_string(),
            customer.name.clone(),
            customer.email.clone(),
            customer.phone.clone(),
            customer.address.clone(),
            format!("${:.2}", customer.purchases),
            customer.order_qty.to_string(),
        ];
        print_row(&columns, &cells);
    }

    print_footer(info, rows.len());
}

pub(crate) fn print_orders(rows: &[Order], info: &PageInfo, counts: &StatusCounts) {
    println!(
        "{}  {}  {}  {}",
        format!("All {}", counts.all).bold(),
        format!("Shipping {}", counts.shipping).cyan(),
        format!("Completed {}", counts.completed).green(),
        format!("Cancelled {}", counts.cancelled).red(),
    );
    println!();

    if rows.is_empty() {
        println!("No orders found.");
        return;
    }

    let columns = [
        ("ID", 5),
        ("PRODUCT ID", 10),
        ("PRODUCT", 22),
        ("COLOR", 10),
        ("CUSTOMER", 18),
        ("PRICE", 9),
        ("DATE", 10),
        ("PAYMENT", 8),
        ("STATUS", 10),
    ];
    print_header(&columns);

    for order in rows {
        let cells = [
            order.id.to_string(),
            order.product_id.clone(),
            order.product_name.clone(),
            order.product_color.clone(),
            order.customer_name.clone(),
            format!("${:.2}", order.price),
            order.order_date.clone(),
            order.payment_status.as_str().to_string(),
            order.status.as_str().to_string(),
        ];
        print_row(&columns, &cells);
    }

    print_footer(info, rows.len());
}

pub(crate) fn print_settings(settings: &Settings) {
    println!("{}", "Company".bold());
    println!("  Name      {}", settings.company.name);
    println!("  Type      {}", settings.company.kind);
    println!("  Logo      {}", settings.company.logo.dimmed());
    println!();

    println!("{}", "Profile".bold());
    println!(
        "  Name      {} {}",
        settings.profile.first_name, settings.profile.last_name
    );
    println!("  Email     {}", settings.profile.email);
    println!("  Phone     {}", settings.profile.phone);
    println!("  Location  {}", settings.profile.location);
    println!("  Bio       {}", settings.profile.bio);
    println!("  Avatar    {}", settings.profile.avatar.dimmed());
    println!();

    println!("{}", "Account".bold());
    println!("  Email notifications  {}", on_off(settings.account.email_notifications));
    println!("  SMS notifications    {}", on_off(settings.account.sms_notifications));
    println!("  Marketing emails     {}", on_off(settings.account.marketing_emails));
    println!("  Two-factor auth      {}", on_off(settings.account.two_factor_auth));
    println!("  Public profile       {}", on_off(settings.account.public_profile));
    println!();

    println!("{}", "Security".bold());
    println!("  Session timeout      {} min", settings.security.session_timeout);
    println!("  Password min length  {}", settings.security.password_min_length);
    println!("  Require 2FA          {}", on_off(settings.security.require_2fa));
}

fn on_off(value: bool) -> colored::ColoredString {
    if value {
        "on".green()
    } else {
        "off".dimmed()
    }
}

fn print_header<const N: usize>(columns: &[(&str, usize); N]) {
    let mut line = String::new();
    for (label, width) in columns {
        line.push_str(&pad_to_width(label, *width));
        line.push_str("  ");
    }
    println!("{}", line.trim_end().dimmed());
}

fn print_row<const N: usize>(columns: &[(&str, usize); N], cells: &[String; N]) {
    let mut line = String::new();
    for ((_, width), cell) in columns.iter().zip(cells) {
        line.push_str(&pad_to_width(cell, *width));
        line.push_str("  ");
    }
    println!("{}", line.trim_end());
}

fn print_footer(info: &PageInfo, shown: usize) {
    let first = info.page_start + 1;
    let last = info.page_start + shown;
    println!();
    println!(
        "{}",
        format!(
            "{} - {} of {} (page {}/{})",
            first, last, info.total_count, info.page, info.total_pages
        )
        .dimmed()
    );
}

fn pad_to_width(s: &str, width: usize) -> String {
    let truncated = truncate_to_width(s, width);
    let padding = width.saturating_sub(truncated.width());
    format!("{}{}", truncated, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }
    result
}
