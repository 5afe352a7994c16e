use chrono::DateTime;
use rust_decimal_macros::dec;
use shiprules::application::engine::{FREE_SHIPPING_FRAGMENT, ShippingRuleEngine};
use shiprules::config::RuleConfig;
use shiprules::domain::cart::{CartContext, CartLine, compute_reduced_amount_total};
use shiprules::domain::method::{MethodTable, RateId};
use shiprules::domain::money::Cost;
use shiprules::domain::postal::LocalZipPolicy;
use shiprules::domain::rate::RateQuote;
use shiprules::infrastructure::in_memory::FixedClock;

fn engine() -> ShippingRuleEngine {
    let now = DateTime::parse_from_rfc3339("2026-03-04T09:00:00-05:00").unwrap();
    ShippingRuleEngine::new(RuleConfig::default(), Box::new(FixedClock::new(now)))
}

fn fedex_quotes() -> Vec<RateQuote> {
    MethodTable::fedex()
        .iter()
        .zip([dec!(45.10), dec!(38.00), dec!(9.75), dec!(24.30), dec!(18.40)])
        .map(|(method, cost)| {
            RateQuote::new(RateId::new("fedex", method.name.as_str()), Cost::new(cost), "FedEx")
        })
        .collect()
}

fn carts() -> Vec<Vec<CartLine>> {
    vec![
        vec![],
        vec![CartLine::new(1, 2, false, Cost::new(dec!(1.50)))],
        vec![CartLine::new(1, 1, true, Cost::ZERO)],
        vec![
            CartLine::new(1, 4, true, Cost::new(dec!(12.50))),
            CartLine::new(2, 1, false, Cost::new(dec!(0.99))),
        ],
    ]
}

const POSTCODES: [&str; 6] = ["29950", "34997", "34998", "10001", "abcde", ""];

#[test]
fn test_rules_hold_for_every_cart_and_postcode() {
    let engine = engine();
    let table = MethodTable::fedex();
    let policy = LocalZipPolicy::default();

    for cart in carts() {
        for postcode in POSTCODES {
            let context = CartContext::new(&cart, Some(postcode), &policy);
            let rates = engine.filter_and_price_rates(fedex_quotes(), &context);

            for quote in &rates {
                assert!(quote.cost >= Cost::ZERO, "negative cost for {postcode}");

                let method = table.resolve(&quote.id).unwrap();
                if context.local {
                    assert!(method.local);
                    assert_eq!(quote.cost, Cost::ZERO);
                    assert_eq!(quote.label, "Free Local Shipping &nbsp;");
                } else if context.perishable {
                    assert!(method.perishable);
                }
            }

            if context.local {
                assert_eq!(rates.len(), 1);
            } else if context.perishable {
                assert_eq!(rates.len(), 2);
            } else {
                assert_eq!(rates.len(), 5);
            }
        }
    }
}

#[test]
fn test_local_perishable_cart_keeps_non_perishable_ground() {
    let policy = LocalZipPolicy::default();
    let cart = vec![CartLine::new(1, 1, true, Cost::ZERO)];
    let context = CartContext::new(&cart, Some("29950"), &policy);

    let rates = engine().filter_and_price_rates(fedex_quotes(), &context);
    let method = MethodTable::fedex().resolve(&rates[0].id).cloned().unwrap();
    assert!(!method.perishable);
    assert!(method.local);
}

#[test]
fn test_postal_code_examples() {
    let policy = LocalZipPolicy::default();
    assert!(policy.is_local_postal_code("29950"));
    assert!(policy.is_local_postal_code("34997"));
    assert!(!policy.is_local_postal_code("34998"));
    assert!(!policy.is_local_postal_code("abcde"));
}

#[test]
fn test_reduced_amount_example() {
    let totals = compute_reduced_amount_total(&[
        CartLine::new(1, 2, false, Cost::new(dec!(1.50))),
        CartLine::new(2, 1, false, Cost::ZERO),
    ]);
    assert_eq!(totals.reduced_amount, Cost::new(dec!(3.00)));
}

#[test]
fn test_full_label_is_stable_for_free_quotes() {
    let engine = engine();
    let policy = LocalZipPolicy::default();
    let context = CartContext::new(&[], Some("33101"), &policy);
    let rates = engine.filter_and_price_rates(fedex_quotes(), &context);

    let label = engine.full_label(&rates[0]);
    assert_eq!(engine.relabel_free_shipping(&label, &rates[0]), label);
    assert_eq!(label.matches(FREE_SHIPPING_FRAGMENT).count(), 1);
}
