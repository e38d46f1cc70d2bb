use ticketpool_rs::{EventListing, Marketplace, MarketError, TicketPool};
use ticketpool_rs::worker::WorkerSettings;

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_invalid(err: MarketError, parameter: &str) {
        match err {
            MarketError::InvalidParameter { name, .. } => assert_eq!(name, parameter),
            other => panic!("expected invalid `{parameter}`, got {other:?}"),
        }
    }

    // --- pool construction ---

    #[test]
    fn test_zero_capacity_rejected() {
        assert_invalid(TicketPool::new(10, 0).unwrap_err(), "capacity");
        assert_invalid(Marketplace::new(10, 0).unwrap_err(), "capacity");
    }

    #[test]
    fn test_zero_supply_accepted() {
        let pool = TicketPool::new(0, 1).unwrap();
        assert!(pool.is_sold_out());
    }

    // --- listing metadata ---

    #[test]
    fn test_negative_price_rejected() {
        assert_invalid(
            EventListing::new("Event-1", "Music Concert", -0.01, "VIP").unwrap_err(),
            "price",
        );
    }

    #[test]
    fn test_non_finite_price_rejected() {
        assert!(EventListing::new("Event-1", "Music Concert", f64::NAN, "VIP").is_err());
        assert!(EventListing::new("Event-1", "Music Concert", f64::INFINITY, "VIP").is_err());
    }

    #[test]
    fn test_free_ticket_accepted() {
        let listing = EventListing::new("Event-5", "Art Show", 0.0, "Regular").unwrap();
        assert_eq!(listing.price(), 0.0);
    }

    // --- worker settings ---

    #[test]
    fn test_zero_cadence_rejected() {
        assert_invalid(WorkerSettings::new(0, 1).unwrap_err(), "cadence_ms");
    }

    #[test]
    fn test_zero_batch_rejected() {
        assert_invalid(WorkerSettings::new(10, 0).unwrap_err(), "batch_size");
    }

    #[test]
    fn test_error_message_names_parameter() {
        let msg = format!("{}", WorkerSettings::new(0, 1).unwrap_err());
        assert!(msg.contains("cadence_ms"), "message should name the parameter: {msg}");
    }

    // --- marketplace entry points ---

    #[tokio::test]
    async fn test_add_tickets_bad_price_admits_nothing() {
        let market = Marketplace::new(10, 5).unwrap();
        let err = market
            .add_tickets("Vendor-1", "Event-1", "Music Concert", -5.0, "VIP", 3)
            .await
            .unwrap_err();

        assert_invalid(err, "price");
        assert_eq!(market.status().released, 0);
        assert!(market.logs().is_empty());
    }

    #[tokio::test]
    async fn test_start_workers_rejects_bad_parameters() {
        let market = Marketplace::new(10, 5).unwrap();

        assert_invalid(market.start_vendors(0, 10, 1).await.unwrap_err(), "count");
        assert_invalid(market.start_vendors(1, 0, 1).await.unwrap_err(), "cadence_ms");
        assert_invalid(market.start_customers(1, 10, 0).await.unwrap_err(), "batch_size");
        assert_invalid(market.add_one_vendor(0, 1).await.unwrap_err(), "cadence_ms");
        assert_invalid(market.add_one_customer(10, 0).await.unwrap_err(), "batch_size");

        assert_eq!(market.vendor_count().await, 0);
        assert_eq!(market.customer_count().await, 0);
    }

    #[tokio::test]
    async fn test_invalid_configure_keeps_current_pool() {
        let market = Marketplace::new(10, 5).unwrap();
        market
            .add_tickets("Vendor-1", "Event-1", "Music Concert", 100.0, "VIP", 2)
            .await
            .unwrap();

        let err = market.configure(50, 0).await.unwrap_err();

        assert_invalid(err, "capacity");
        assert_eq!(market.status().remaining_in_pool, 2);
        assert_eq!(market.status().total_supply, 10);
        assert_eq!(market.logs().len(), 1);
    }
}
