use std::io::Write;
use std::time::Duration;
use tempfile::{NamedTempFile, tempdir};
use ticketpool_rs::{MarketError, Marketplace, SimulationConfig};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("simulation.json");
        let config = SimulationConfig {
            total_tickets: 120,
            ticket_release_rate: 500,
            customer_retrieval_rate: 750,
            max_ticket_capacity: 12,
        };

        config.save(&path).unwrap();
        let loaded = SimulationConfig::load(&path).unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_hand_written_document() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"totalTickets":30,"ticketReleaseRate":20,"customerRetrievalRate":25,"maxTicketCapacity":6}}"#
        )
        .unwrap();

        let loaded = SimulationConfig::load(file.path()).unwrap();
        assert_eq!(loaded.total_tickets, 30);
        assert_eq!(loaded.customer_retrieval_rate, 25);
        assert_eq!(loaded.max_ticket_capacity, 6);
    }

    #[test]
    fn test_json_uses_camel_case_keys() {
        let json = SimulationConfig::default().to_json().unwrap();
        assert!(json.contains("\"totalTickets\": 500"));
        assert!(json.contains("\"maxTicketCapacity\": 50"));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("does-not-exist.json");
        let err = SimulationConfig::load(&path).unwrap_err();

        assert!(matches!(err, MarketError::ConfigIo { .. }));
        assert!(err.to_string().contains("does-not-exist"));
    }

    #[test]
    fn test_malformed_json_rejected() {
        let err = SimulationConfig::from_json("{\"totalTickets\": \"many\"}").unwrap_err();
        assert!(matches!(err, MarketError::ConfigFormat(_)));
    }

    #[test]
    fn test_invalid_values_rejected() {
        let json = r#"{"totalTickets":10,"ticketReleaseRate":0,"customerRetrievalRate":5,"maxTicketCapacity":2}"#;
        let err = SimulationConfig::from_json(json).unwrap_err();
        assert!(err.is_invalid_parameter());
        assert!(err.to_string().contains("ticket_release_rate"));

        let bad = SimulationConfig {
            max_ticket_capacity: 0,
            ..SimulationConfig::default()
        };
        let dir = tempdir().unwrap();
        let path = dir.path().join("never-written.json");
        assert!(bad.save(&path).is_err());
        assert!(!path.exists());
    }

    #[test]
    fn test_display_summary() {
        assert_eq!(
            SimulationConfig::default().to_string(),
            "Configuration [totalTickets=500, ticketReleaseRate=1000, customerRetrievalRate=1000, maxTicketCapacity=50]"
        );
    }

    #[test]
    fn test_worker_settings_from_rates() {
        let config = SimulationConfig {
            ticket_release_rate: 40,
            customer_retrieval_rate: 60,
            ..SimulationConfig::default()
        };

        let vendor = config.vendor_settings(4).unwrap();
        let customer = config.customer_settings(2).unwrap();
        assert_eq!(vendor.cadence(), Duration::from_millis(40));
        assert_eq!(vendor.batch_size(), 4);
        assert_eq!(customer.cadence(), Duration::from_millis(60));
        assert!(config.customer_settings(0).is_err());
    }

    #[tokio::test]
    async fn test_marketplace_from_config() {
        let config = SimulationConfig {
            total_tickets: 8,
            ticket_release_rate: 1,
            customer_retrieval_rate: 1,
            max_ticket_capacity: 4,
        };
        let market = Marketplace::from_config(&config).unwrap();

        let status = market.status();
        assert_eq!(status.total_supply, 8);
        assert_eq!(status.capacity, 4);

        market
            .start_vendors(1, config.ticket_release_rate, 3)
            .await
            .unwrap();
        market
            .start_customers(1, config.customer_retrieval_rate, 3)
            .await
            .unwrap();

        tokio::time::timeout(Duration::from_secs(5), async {
            while !market.status().sold_out {
                tokio::time::sleep(Duration::from_millis(2)).await;
            }
        })
        .await
        .expect("small run should sell out");
        market.shutdown().await;
    }
}
