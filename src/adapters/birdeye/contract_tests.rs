//! Birdeye API Contract Tests
//!
//! Golden response fixtures for the price and token overview endpoints.
//! Fixtures are immutable once committed - any changes require explicit justification.

#[cfg(test)]
mod price_contract_tests {
    use approx::assert_relative_eq;
    use serde_json::Value;

    use crate::adapters::birdeye::types::PriceResponse;
    use crate::domain::PriceInfo;

    fn load_price_fixture(name: &str) -> Value {
        let fixture_path = format!(
            "{}/fixtures/birdeye/{}.json",
            env!("CARGO_MANIFEST_DIR"),
            name
        );
        let content = std::fs::read_to_string(&fixture_path).unwrap_or_else(|e| {
            panic!(
                "CONTRACT VIOLATION: Failed to load fixture '{}': {}",
                fixture_path, e
            )
        });
        serde_json::from_str(&content).unwrap_or_else(|e| {
            panic!(
                "CONTRACT VIOLATION: Failed to parse fixture '{}' as JSON: {}",
                fixture_path, e
            )
        })
    }

    fn price_fixture_names() -> Vec<&'static str> {
        vec!["price_sol_v1", "price_bonk_v1"]
    }

    #[test]
    fn test_price_value_present_and_numeric() {
        for fixture_name in price_fixture_names() {
            let fixture = load_price_fixture(fixture_name);
            let value = fixture.get("value").unwrap_or_else(|| {
                panic!(
                    "CONTRACT VIOLATION: Field 'value' is missing from price response in fixture '{}'",
                    fixture_name
                )
            });
            assert!(
                value.is_number(),
                "CONTRACT VIOLATION: Field 'value' must be a number in fixture '{}'",
                fixture_name
            );
        }
    }

    #[test]
    fn test_price_fixtures_deserialize() {
        for fixture_name in price_fixture_names() {
            let fixture = load_price_fixture(fixture_name);
            let expected = fixture["value"].as_f64().unwrap();

            let response: PriceResponse = serde_json::from_value(fixture).unwrap_or_else(|e| {
                panic!(
                    "CONTRACT VIOLATION: fixture '{}' does not deserialize: {}",
                    fixture_name, e
                )
            });
            let info = PriceInfo::from(response);
            assert_relative_eq!(info.price, expected);
            assert!(info.price > 0.0);
        }
    }
}

#[cfg(test)]
mod token_overview_contract_tests {
    use serde_json::Value;

    use crate::adapters::birdeye::types::TokenOverviewResponse;
    use crate::adapters::birdeye::BirdeyeClient;
    use crate::adapters::birdeye::BirdeyeConfig;
    use crate::domain::TokenOverview;
    use crate::ports::MockTransport;

    const REQUIRED_FIELDS: [&str; 10] = [
        "address",
        "decimals",
        "liquidity",
        "logoURI",
        "mc",
        "symbol",
        "v24hChangePercent",
        "v24hUSD",
        "name",
        "lastTradeUnixTime",
    ];

    fn load_fixture_text(name: &str) -> String {
        let fixture_path = format!(
            "{}/fixtures/birdeye/{}.json",
            env!("CARGO_MANIFEST_DIR"),
            name
        );
        std::fs::read_to_string(&fixture_path).unwrap_or_else(|e| {
            panic!(
                "CONTRACT VIOLATION: Failed to load fixture '{}': {}",
                fixture_path, e
            )
        })
    }

    fn load_overview_fixture(name: &str) -> Value {
        serde_json::from_str(&load_fixture_text(name)).unwrap()
    }

    #[test]
    fn test_overview_required_fields_present() {
        let fixture = load_overview_fixture("token_overview_bonk_v1");
        for field in REQUIRED_FIELDS {
            assert!(
                fixture.get(field).is_some(),
                "CONTRACT VIOLATION: Field '{}' is missing from token overview in fixture 'token_overview_bonk_v1'",
                field
            );
        }
    }

    #[test]
    fn test_overview_fields_map_without_transformation() {
        let fixture = load_overview_fixture("token_overview_bonk_v1");
        let response: TokenOverviewResponse = serde_json::from_value(fixture.clone()).unwrap();
        let overview = TokenOverview::from(response);

        assert_eq!(overview.address, fixture["address"].as_str().unwrap());
        assert_eq!(overview.decimals as u64, fixture["decimals"].as_u64().unwrap());
        assert_eq!(overview.liquidity, fixture["liquidity"].as_f64().unwrap());
        assert_eq!(overview.logo_uri, fixture["logoURI"].as_str().unwrap());
        assert_eq!(overview.market_cap, fixture["mc"].as_f64().unwrap());
        assert_eq!(overview.symbol, fixture["symbol"].as_str().unwrap());
        assert_eq!(
            overview.change_24h_percent,
            fixture["v24hChangePercent"].as_f64().unwrap()
        );
        assert_eq!(overview.volume_24h_usd, fixture["v24hUSD"].as_f64().unwrap());
        assert_eq!(overview.name, fixture["name"].as_str().unwrap());
        assert_eq!(
            overview.last_trade_unix_time,
            fixture["lastTradeUnixTime"].as_i64().unwrap()
        );
    }

    #[test]
    fn test_incomplete_fixture_is_missing_fields() {
        let fixture = load_overview_fixture("token_overview_incomplete_v1");
        let missing: Vec<&str> = REQUIRED_FIELDS
            .iter()
            .copied()
            .filter(|f| fixture.get(*f).is_none())
            .collect();
        assert_eq!(missing, vec!["logoURI", "v24hChangePercent", "lastTradeUnixTime"]);
    }

    #[tokio::test]
    async fn test_client_rejects_incomplete_overview() {
        let address = "7GCihgDB8fe6KNjn2MYtkzZcRjQy3t9GHdC8uHYmW2hr";
        let transport = MockTransport::new().with_body(
            "/defi/token_overview",
            address,
            &load_fixture_text("token_overview_incomplete_v1"),
        );
        let client = BirdeyeClient::with_transport(BirdeyeConfig::new("key"), transport);

        let err = client.fetch_token_overview(address).await.unwrap_err();
        assert_eq!(err.address(), Some(address));
    }

    #[tokio::test]
    async fn test_client_accepts_golden_overview() {
        let address = "DezXAZ8z7PnrnRJjz3wXBoRgixCa6xjnB7YaB1pPB263";
        let transport = MockTransport::new().with_body(
            "/defi/token_overview",
            address,
            &load_fixture_text("token_overview_bonk_v1"),
        );
        let client = BirdeyeClient::with_transport(BirdeyeConfig::new("key"), transport);

        let overview = client.fetch_token_overview(address).await.unwrap();
        assert_eq!(overview.symbol, "Bonk");
        assert_eq!(overview.decimals, 5);
        assert_eq!(overview.last_trade_unix_time, 1700000099);
    }
}
