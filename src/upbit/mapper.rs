//! Conversion from Upbit wire shapes to the exchange-neutral model.

use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use time::OffsetDateTime;
use tracing::debug;

use crate::error::ExchangeError;
use crate::types::{Account, Market, MarketWarning, Order, PriceChange, PriceQuote};
use crate::upbit::endpoints::DEPOSIT_CURRENCY;
use crate::upbit::private::{OrderResponse, UpbitAccount};
use crate::upbit::public::{MarketInfo, Ticker};

/// Parse a decimal string into a float.
///
/// Only plain decimal notation (`-?digits(.digits)?`) is accepted; `NaN`, `inf`,
/// exponents, digit separators and a leading `+` fail.
pub fn parse_decimal(field: &'static str, value: &str) -> Result<f64, ExchangeError> {
    let invalid = || ExchangeError::Parse {
        field,
        value: value.to_string(),
    };
    if !is_plain_decimal(value) {
        return Err(invalid());
    }
    Decimal::from_str(value)
        .map_err(|_| invalid())?
        .to_f64()
        .ok_or_else(invalid)
}

fn is_plain_decimal(value: &str) -> bool {
    let unsigned = value.strip_prefix('-').unwrap_or(value);
    let (whole, fraction) = match unsigned.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (unsigned, None),
    };
    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    all_digits(whole) && fraction.is_none_or(all_digits)
}

fn parse_optional_decimal(
    field: &'static str,
    value: Option<&str>,
) -> Result<Option<f64>, ExchangeError> {
    value.map(|v| parse_decimal(field, v)).transpose()
}

/// Convert a millisecond epoch timestamp into a UTC instant.
pub fn millis_to_utc(field: &'static str, millis: i64) -> Result<OffsetDateTime, ExchangeError> {
    OffsetDateTime::from_unix_timestamp_nanos(i128::from(millis) * 1_000_000).map_err(|_| {
        ExchangeError::Parse {
            field,
            value: millis.to_string(),
        }
    })
}

/// Whether a market warning flags the market as risky. Missing warnings are not.
pub fn risk_flag(warning: Option<&str>) -> bool {
    warning.map(MarketWarning::from_wire).is_some_and(|w| w.is_risky())
}

/// Map account balances, dropping the deposit currency.
///
/// Fails on the first malformed quantity; no partial list is returned.
pub fn accounts(accounts: Vec<UpbitAccount>) -> Result<Vec<Account>, ExchangeError> {
    accounts
        .into_iter()
        .filter(|account| {
            let keep = account.currency != DEPOSIT_CURRENCY;
            if !keep {
                debug!(currency = %account.currency, "skipping deposit account");
            }
            keep
        })
        .map(account)
        .collect()
}

fn account(account: UpbitAccount) -> Result<Account, ExchangeError> {
    Ok(Account {
        balance_quantity: parse_decimal("balance", &account.balance)?,
        locked_quantity: parse_decimal("locked", &account.locked)?,
        average_purchase_price: parse_decimal("avg_buy_price", &account.avg_buy_price)?,
        currency: account.currency,
        unit_currency: account.unit_currency,
    })
}

/// Map a market listing.
pub fn market(info: MarketInfo) -> Market {
    Market {
        is_risky: risk_flag(info.market_warning.as_deref()),
        market_code: info.market,
        korean_name: info.korean_name,
        english_name: info.english_name,
    }
}

/// Map a ticker snapshot.
pub fn price_quote(ticker: Ticker) -> Result<PriceQuote, ExchangeError> {
    Ok(PriceQuote {
        traded_at_utc: millis_to_utc("trade_timestamp", ticker.trade_timestamp)?,
        traded_at_milliseconds: ticker.trade_timestamp,
        change: PriceChange::from_wire(&ticker.change),
        market_code: ticker.market,
        opening_price: ticker.opening_price,
        high_price: ticker.high_price,
        low_price: ticker.low_price,
        trade_price: ticker.trade_price,
        previous_closing_price: ticker.prev_closing_price,
        change_price: ticker.change_price,
        change_rate: ticker.change_rate,
        signed_change_price: ticker.signed_change_price,
        signed_change_rate: ticker.signed_change_rate,
        trade_volume: ticker.trade_volume,
        accumulated_trade_price: ticker.acc_trade_price,
        accumulated_trade_price_24h: ticker.acc_trade_price_24h,
        accumulated_trade_volume: ticker.acc_trade_volume,
        accumulated_trade_volume_24h: ticker.acc_trade_volume_24h,
        highest_52_week_price: ticker.highest_52_week_price,
        highest_52_week_date: ticker.highest_52_week_date,
        lowest_52_week_price: ticker.lowest_52_week_price,
        lowest_52_week_date: ticker.lowest_52_week_date,
        timestamp_milliseconds: ticker.timestamp,
    })
}

/// Map an order acknowledgement.
pub fn order(response: OrderResponse) -> Result<Order, ExchangeError> {
    Ok(Order {
        price: parse_optional_decimal("price", response.price.as_deref())?,
        average_price: parse_optional_decimal("avg_price", response.avg_price.as_deref())?,
        volume: parse_optional_decimal("volume", response.volume.as_deref())?,
        remaining_volume: parse_optional_decimal(
            "remaining_volume",
            response.remaining_volume.as_deref(),
        )?,
        executed_volume: parse_decimal("executed_volume", &response.executed_volume)?,
        reserved_fee: parse_decimal("reserved_fee", &response.reserved_fee)?,
        remaining_fee: parse_decimal("remaining_fee", &response.remaining_fee)?,
        paid_fee: parse_decimal("paid_fee", &response.paid_fee)?,
        locked: parse_decimal("locked", &response.locked)?,
        id: response.uuid,
        market_code: response.market,
        side: response.side,
        order_type: response.ord_type,
        state: response.state,
        trades_count: response.trades_count,
        created_at: response.created_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    fn upbit_account(currency: &str, balance: &str) -> UpbitAccount {
        UpbitAccount {
            currency: currency.to_string(),
            balance: balance.to_string(),
            locked: "0.0".to_string(),
            avg_buy_price: "0".to_string(),
            avg_buy_price_modified: false,
            unit_currency: "KRW".to_string(),
        }
    }

    #[test]
    fn test_parse_decimal_values() {
        assert_eq!(parse_decimal("balance", "1.5").unwrap(), 1.5);
        assert_eq!(parse_decimal("balance", "0.00000001").unwrap(), 0.00000001);
        assert_eq!(parse_decimal("balance", "-2").unwrap(), -2.0);
        assert_eq!(parse_decimal("balance", "1000000").unwrap(), 1_000_000.0);
    }

    #[test]
    fn test_parse_decimal_round_trip() {
        for s in ["0.5", "123.456", "1000", "0.00012"] {
            let parsed = parse_decimal("balance", s).unwrap();
            assert_eq!(parsed.to_string(), s);
        }
    }

    #[test]
    fn test_parse_decimal_rejects_garbage() {
        for s in [
            "", "abc", "NaN", "inf", "1.2.3", "1_000", "+5", "1e5", "1E-3", ".5", "5.", "-", " 1",
        ] {
            let err = parse_decimal("balance", s).unwrap_err();
            assert!(
                matches!(err, ExchangeError::Parse { field: "balance", ref value } if value == s),
                "{s:?} should fail to parse"
            );
        }
    }

    #[test]
    fn test_accounts_drop_deposit_currency() {
        let mapped = accounts(vec![
            upbit_account("KRW", "100000"),
            upbit_account("BTC", "0.25"),
            upbit_account("ETH", "3"),
        ])
        .unwrap();

        assert_eq!(mapped.len(), 2);
        assert!(mapped.iter().all(|a| a.currency != "KRW"));
        assert_eq!(mapped[0].balance_quantity, 0.25);
    }

    #[test]
    fn test_accounts_malformed_deposit_is_ignored() {
        let mapped = accounts(vec![upbit_account("KRW", "oops"), upbit_account("BTC", "1")]).unwrap();
        assert_eq!(mapped.len(), 1);
    }

    #[test]
    fn test_accounts_fail_whole_on_malformed_quantity() {
        let result = accounts(vec![upbit_account("BTC", "1"), upbit_account("ETH", "x1")]);
        assert!(matches!(result, Err(ExchangeError::Parse { field: "balance", .. })));
    }

    #[test]
    fn test_risk_flag_lookup() {
        assert!(!risk_flag(Some("NONE")));
        assert!(risk_flag(Some("CAUTION")));
        assert!(!risk_flag(Some("SOMETHING_NEW")));
        assert!(!risk_flag(None));
    }

    #[test]
    fn test_millis_to_utc() {
        let instant = millis_to_utc("trade_timestamp", 1_700_000_000_123).unwrap();
        assert_eq!(instant, datetime!(2023-11-14 22:13:20.123 UTC));
    }

    #[test]
    fn test_millis_to_utc_out_of_range() {
        assert!(millis_to_utc("trade_timestamp", i64::MAX).is_err());
    }
}
