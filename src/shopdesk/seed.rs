//! Built-in starter data, used whenever the store has no saved list yet.

use crate::model::{Customer, Order, OrderStatus, PaymentStatus};

pub fn customers() -> Vec<Customer> {
    vec![
        Customer::new(1, "Jane Cooper", "jane.cooper@gmail.com", "+1 (555) 140-2278", "4140 Parker Rd. Allentown, New Mexico 31134", 1429.50, 12),
        Customer::new(2, "Wade Warren", "wade.warren@yahoo.com", "+1 (555) 301-9923", "2715 Ash Dr. San Jose, South Dakota 83475", 980.00, 7),
        Customer::new(3, "Esther Howard", "esther.howard@gmail.com", "+1 (555) 772-4810", "3891 Ranchview Dr. Richardson, California 62639", 2310.25, 19),
        Customer::new(4, "Cameron Williamson", "cameron.w@outlook.com", "+1 (555) 664-0190", "8502 Preston Rd. Inglewood, Maine 98380", 310.75, 3),
        Customer::new(5, "Brooklyn Simmons", "brooklyn.s@gmail.com", "+1 (555) 219-4477", "2118 Thornridge Cir. Syracuse, Connecticut 35624", 1785.00, 14),
        Customer::new(6, "Leslie Alexander", "leslie.alexander@hey.com", "+1 (555) 808-3341", "2972 Westheimer Rd. Santa Ana, Illinois 85486", 640.40, 5),
        Customer::new(7, "Jenny Wilson", "jenny.wilson@gmail.com", "+1 (555) 482-7709", "8080 Railroad St. Brighton, Florida 32708", 3150.90, 26),
        Customer::new(8, "Robert Fox", "robert.fox@proton.me", "+1 (555) 937-5511", "3605 Parker Rd. Allentown, New Mexico 31134", 95.00, 1),
        Customer::new(9, "Jacob Jones", "jacob.jones@yahoo.com", "+1 (555) 125-6608", "6391 Elgin St. Celina, Delaware 10299", 1260.00, 9),
        Customer::new(10, "Kristin Watson", "kristin.watson@gmail.com", "+1 (555) 390-2217", "1901 Thornridge Cir. Shiloh, Hawaii 81063", 2045.60, 17),
    ]
}

pub fn orders() -> Vec<Order> {
    fn order(
        id: u64,
        product_id: &str,
        product_name: &str,
        product_color: &str,
        customer_name: &str,
        price: f64,
        order_date: &str,
        payment_status: PaymentStatus,
        status: OrderStatus,
    ) -> Order {
        Order {
            id,
            product_id: product_id.to_string(),
            product_name: product_name.to_string(),
            product_color: product_color.to_string(),
            product_image: format!("https://cdn.shopdesk.example/products/{product_id}.png"),
            customer_name: customer_name.to_string(),
            price,
            order_date: order_date.to_string(),
            payment_status,
            status,
        }
    }

    vec![
        order(1, "PRD-0017", "Court Classic Sneakers", "White", "Jane Cooper", 129.90, "2024-05-02", PaymentStatus::Paid, OrderStatus::Completed),
        order(2, "PRD-0023", "Trail Runner Jacket", "Forest Green", "Wade Warren", 89.50, "2024-05-04", PaymentStatus::Paid, OrderStatus::Shipping),
        order(3, "PRD-0008", "Canvas Weekend Tote", "Sand", "Esther Howard", 54.00, "2024-05-05", PaymentStatus::Unpaid, OrderStatus::Shipping),
        order(4, "PRD-0031", "Merino Crew Sweater", "Charcoal", "Cameron Williamson", 112.00, "2024-05-08", PaymentStatus::Paid, OrderStatus::Completed),
        order(5, "PRD-0017", "Court Classic Sneakers", "Black", "Brooklyn Simmons", 129.90, "2024-05-11", PaymentStatus::Paid, OrderStatus::Cancelled),
        order(6, "PRD-0042", "Slim Leather Wallet", "Tan", "Leslie Alexander", 39.95, "2024-05-12", PaymentStatus::Unpaid, OrderStatus::Shipping),
        order(7, "PRD-0056", "Aero Sunglasses", "Tortoise", "Jenny Wilson", 75.25, "2024-05-15", PaymentStatus::Paid, OrderStatus::Completed),
        order(8, "PRD-0023", "Trail Runner Jacket", "Navy", "Robert Fox", 89.50, "2024-05-18", PaymentStatus::Paid, OrderStatus::Completed),
        order(9, "PRD-0061", "Everyday Water Bottle", "Steel Blue", "Jacob Jones", 24.00, "2024-05-21", PaymentStatus::Unpaid, OrderStatus::Cancelled),
        order(10, "PRD-0008", "Canvas Weekend Tote", "Olive", "Kristin Watson", 54.00, "2024-05-23", PaymentStatus::Paid, OrderStatus::Shipping),
        order(11, "PRD-0077", "Studio Headphones", "Matte Black", "Jane Cooper", 199.00, "2024-05-26", PaymentStatus::Paid, OrderStatus::Completed),
        order(12, "PRD-0031", "Merino Crew Sweater", "Oatmeal", "Esther Howard", 112.00, "2024-05-28", PaymentStatus::Unpaid, OrderStatus::Shipping),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Record;

    #[test]
    fn seed_ids_are_unique() {
        let customers = customers();
        let mut ids: Vec<u64> = customers.iter().map(|c| c.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), customers.len());

        let orders = orders();
        let mut ids: Vec<u64> = orders.iter().map(|o| o.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), orders.len());
    }

    #[test]
    fn seed_records_are_valid() {
        assert!(customers().iter().all(|c| c.validate().is_empty()));
        assert!(orders().iter().all(|o| o.validate().is_empty()));
    }

    #[test]
    fn seed_covers_every_order_status() {
        let orders = orders();
        for status in [OrderStatus::Shipping, OrderStatus::Completed, OrderStatus::Cancelled] {
            assert!(orders.iter().any(|o| o.status == status));
        }
    }
}
