use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};
use ticketpool_rs::Marketplace;
use ticketpool_rs::log::{LogEntry, LogSink, WriterSink};

#[cfg(test)]
mod tests {
    use super::*;

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "ticketpool_rs=warn".into()),
            )
            .with_test_writer()
            .try_init();
    }

    async fn wait_until_sold_out(market: &Marketplace) {
        tokio::time::timeout(Duration::from_secs(10), async {
            while !market.status().sold_out {
                tokio::time::sleep(Duration::from_millis(5)).await;
            }
        })
        .await
        .expect("market should sell out");
    }

    #[tokio::test]
    async fn test_configure_add_remove_scenario() {
        init_tracing();
        let market = Marketplace::new(1, 1).unwrap();
        market.configure(10, 3).await.unwrap();

        let added = market
            .add_tickets("Vendor-1", "Event-1", "Music Concert", 100.0, "VIP", 5)
            .await
            .unwrap();
        assert_eq!(added, 3);
        assert_eq!(market.status().remaining_in_pool, 3);
        assert!(market.logs().iter().any(|l| l.contains("Total in pool: 3")));

        let ticket = market.remove_ticket("Customer-1").await.unwrap();
        assert_eq!(ticket.serial(), 1);
        assert_eq!(market.status().remaining_in_pool, 2);
    }

    #[tokio::test]
    async fn test_zero_supply_scenario() {
        init_tracing();
        let market = Marketplace::new(10, 5).unwrap();
        market.configure(0, 5).await.unwrap();

        assert!(market.status().sold_out);
        let ticket = tokio::time::timeout(Duration::from_millis(200), market.remove_ticket("Customer-1"))
            .await
            .expect("sold-out pool must not block");
        assert!(ticket.is_none());
    }

    #[tokio::test]
    async fn test_add_one_then_remove_one_vendor() {
        init_tracing();
        let market = Marketplace::new(100, 10).unwrap();

        let id = market.add_one_vendor(60_000, 1).await.unwrap();
        assert_eq!(market.vendor_count().await, 1);

        let (removed, exit) = market.remove_one_vendor().await.unwrap();
        assert_eq!(removed, id);
        assert!(exit.is_cancelled());
        assert_eq!(market.vendor_count().await, 0);
        assert_eq!(
            market.logs().last().map(String::as_str),
            Some("Vendor-1 stopped (interrupted)")
        );
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_full_run_sells_out() {
        init_tracing();
        let market = Marketplace::new(20, 5).unwrap();
        market.start_vendors(3, 2, 2).await.unwrap();
        market.start_customers(4, 2, 3).await.unwrap();

        wait_until_sold_out(&market).await;

        let status = market.status();
        assert_eq!(status.released, 20);
        assert_eq!(status.sold + status.remaining_in_pool, 20);

        // Workers notice the sell-out at their next loop check.
        tokio::time::timeout(Duration::from_secs(2), async {
            while market.vendor_count().await + market.customer_count().await > 0 {
                tokio::time::sleep(Duration::from_millis(5)).await;
            }
        })
        .await
        .expect("workers should stop after sell-out");

        let logs = market.logs();
        let vendor_stops = logs.iter().filter(|l| l.ends_with("stopped (supply exhausted)")).count();
        let customer_stops = logs.iter().filter(|l| l.ends_with("stopped (all tickets sold)")).count();
        assert_eq!(vendor_stops, 3);
        assert_eq!(customer_stops, 4);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_scale_workers_while_running() {
        init_tracing();
        let market = Marketplace::new(100_000, 5).unwrap();
        market.start_vendors(2, 5, 2).await.unwrap();
        market.start_customers(1, 5, 1).await.unwrap();

        market.add_one_customer(5, 2).await.unwrap();
        market.add_one_vendor(5, 1).await.unwrap();
        assert_eq!(market.vendor_count().await, 3);
        assert_eq!(market.customer_count().await, 2);

        let (vendor, _) = market.remove_one_vendor().await.unwrap();
        assert_eq!(vendor, "Vendor-3");
        let (customer, _) = market.remove_one_customer().await.unwrap();
        assert_eq!(customer, "Customer-2");

        let vendors = market.stop_vendors().await;
        let customers = market.stop_customers().await;
        assert_eq!(vendors.len(), 2);
        assert_eq!(customers.len(), 1);

        let status = market.status();
        assert!(status.remaining_in_pool <= status.capacity);
        assert_eq!(status.released, status.sold + status.remaining_in_pool);
    }

    #[tokio::test]
    async fn test_configure_stops_previous_run() {
        init_tracing();
        let market = Marketplace::new(100, 10).unwrap();
        market.start_vendors(2, 60_000, 1).await.unwrap();
        market.start_customers(1, 60_000, 1).await.unwrap();

        market.configure(30, 3).await.unwrap();

        assert_eq!(market.vendor_count().await, 0);
        assert_eq!(market.customer_count().await, 0);
        assert!(market.logs().is_empty());
        assert_eq!(market.status().total_supply, 30);

        // Identities restart with the new run.
        let id = market.add_one_vendor(60_000, 1).await.unwrap();
        assert_eq!(id, "Vendor-1");
        market.shutdown().await;
    }

    #[tokio::test]
    async fn test_sinks_survive_reconfiguration() {
        init_tracing();
        let sink = Arc::new(WriterSink::new(Vec::new()));
        let sinks: Vec<Arc<dyn LogSink>> = vec![sink.clone()];
        let market = Marketplace::with_sinks(5, 5, sinks).unwrap();

        market
            .add_tickets("Vendor-1", "Event-4", "Tech Expo", 250.0, "VIP", 1)
            .await
            .unwrap();
        market.configure(5, 5).await.unwrap();
        market
            .add_tickets("Vendor-1", "Event-4", "Tech Expo", 250.0, "VIP", 2)
            .await
            .unwrap();

        let mirrored = String::from_utf8(sink.writer_snapshot()).unwrap();
        let lines: Vec<&str> = mirrored.lines().collect();
        assert_eq!(
            lines,
            vec![
                "[1] Vendor-1 added 1 tickets for Tech Expo. Total in pool: 1",
                "[1] Vendor-1 added 2 tickets for Tech Expo. Total in pool: 2",
            ]
        );
    }

    #[tokio::test]
    async fn test_configure_releases_waiting_callers() {
        init_tracing();
        let market = Arc::new(Marketplace::new(10, 1).unwrap());
        market
            .add_tickets("Vendor-1", "Event-1", "Music Concert", 100.0, "VIP", 1)
            .await
            .unwrap();

        let vendor = {
            let market = market.clone();
            tokio::spawn(async move {
                market
                    .add_tickets("Vendor-2", "Event-2", "Sports Event", 150.0, "Regular", 1)
                    .await
            })
        };
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(!vendor.is_finished(), "vendor should be waiting for space");

        market.configure(10, 5).await.unwrap();
        let customer = {
            let market = market.clone();
            tokio::spawn(async move { market.remove_ticket("Customer-1").await })
        };
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(!customer.is_finished(), "customer should be waiting for stock");

        market.configure(0, 5).await.unwrap();

        let added = tokio::time::timeout(Duration::from_secs(2), vendor)
            .await
            .expect("vendor waiting on the replaced pool must return")
            .unwrap()
            .unwrap();
        let ticket = tokio::time::timeout(Duration::from_secs(2), customer)
            .await
            .expect("customer waiting on the replaced pool must return")
            .unwrap();

        assert_eq!(added, 0);
        assert!(ticket.is_none());
        assert!(market.status().sold_out);
        assert!(market.logs().is_empty());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_slow_sink_keeps_pool_responsive() {
        init_tracing();
        let recording = Arc::new(AtomicBool::new(false));
        let flag = recording.clone();
        let slow = move |_: &LogEntry| -> io::Result<()> {
            flag.store(true, Ordering::SeqCst);
            std::thread::sleep(Duration::from_millis(500));
            Ok(())
        };
        let sinks: Vec<Arc<dyn LogSink>> = vec![Arc::new(slow)];
        let market = Arc::new(Marketplace::with_sinks(10, 5, sinks).unwrap());

        let vendor = {
            let market = market.clone();
            tokio::spawn(async move {
                market
                    .add_tickets("Vendor-1", "Event-5", "Art Show", 300.0, "Balcony", 1)
                    .await
            })
        };

        tokio::time::timeout(Duration::from_secs(1), async {
            while !recording.load(Ordering::SeqCst) {
                tokio::time::sleep(Duration::from_millis(1)).await;
            }
        })
        .await
        .expect("sink should be invoked");

        let start = Instant::now();
        let remaining = market.pool().remaining_in_pool();
        let status = market.status();
        assert!(start.elapsed() < Duration::from_millis(100));
        assert_eq!(remaining, 1);
        assert_eq!(status.released, 1);
        assert_eq!(market.logs().len(), 1);

        assert_eq!(vendor.await.unwrap().unwrap(), 1);
    }
}
