use crate::config::RuleConfig;
use crate::domain::cart::CartContext;
use crate::domain::money::Cost;
use crate::domain::ports::{CheckoutSession, ClockBox};
use crate::domain::rate::RateQuote;
use crate::error::Result;
use chrono::{DateTime, Days, FixedOffset, Timelike};
use tracing::{debug, info};

const SHIPPING_INFO: &str = "Estimated Shipping Date: ";

/// Appended once to the label of any quote that ends up costing nothing.
pub const FREE_SHIPPING_FRAGMENT: &str = concat!(
    r#" <span class="woocommerce-Price-amount amount">"#,
    r#"<span class="woocommerce-Price-currencySymbol">$</span>0.00</span>"#
);

/// Applies the storefront's shipping rules to carrier quotes and labels.
///
/// The engine holds no per-checkout state. Callers build a [`CartContext`]
/// for each checkout (directly or through [`ShippingRuleEngine::cart_context`])
/// and pass it to the rate filter, so concurrent checkouts never observe
/// each other's cart or postal code.
pub struct ShippingRuleEngine {
    config: RuleConfig,
    clock: ClockBox,
}

impl ShippingRuleEngine {
    /// Creates a new `ShippingRuleEngine`.
    ///
    /// # Arguments
    ///
    /// * `config` - Method table, local postal ranges and label constants.
    /// * `clock` - Source of the current local time for delivery estimates.
    pub fn new(config: RuleConfig, clock: ClockBox) -> Self {
        Self { config, clock }
    }

    pub fn config(&self) -> &RuleConfig {
        &self.config
    }

    /// Reads the session once and derives the context for this checkout.
    pub async fn cart_context(&self, session: &dyn CheckoutSession) -> Result<CartContext> {
        let lines = session.cart_lines().await?;
        let postcode = session.shipping_postcode().await?;

        Ok(CartContext::new(
            &lines,
            postcode.as_deref(),
            &self.config.local_zip_policy,
        ))
    }

    /// Package-rates extension point: builds a fresh context and filters.
    pub async fn package_rates(
        &self,
        session: &dyn CheckoutSession,
        rates: Vec<RateQuote>,
    ) -> Result<Vec<RateQuote>> {
        let context = self.cart_context(session).await?;
        Ok(self.filter_and_price_rates(rates, &context))
    }

    /// Discounts every quote and drops the ones the cart or customer rule out.
    ///
    /// Local customers only keep local services, which become free and get
    /// the local label. The perishable rule is not consulted for them at all.
    /// Quotes for services missing from the method table pass through with
    /// only the discount applied. Survivors keep their relative order.
    pub fn filter_and_price_rates(
        &self,
        rates: Vec<RateQuote>,
        context: &CartContext,
    ) -> Vec<RateQuote> {
        let offered = rates.len();

        let kept: Vec<RateQuote> = rates
            .into_iter()
            .filter_map(|mut quote| {
                quote.cost = quote.cost.saturating_sub(context.reduced_amount);

                let Some(method) = self.config.methods.resolve(&quote.id) else {
                    return Some(quote);
                };

                if context.local {
                    if !method.local {
                        debug!(rate = %quote.id, "Dropping non-local rate for local customer");
                        return None;
                    }
                    quote.label = self.config.local_label.clone();
                    quote.cost = Cost::ZERO;
                } else if context.perishable && !method.perishable {
                    debug!(rate = %quote.id, "Dropping rate unsuitable for perishable cart");
                    return None;
                }

                Some(quote)
            })
            .collect();

        info!(
            offered,
            kept = kept.len(),
            local = context.local,
            perishable = context.perishable,
            reduction = %context.reduced_amount,
            "Evaluated package rates"
        );

        kept
    }

    /// Appends the estimated delivery date, using the engine's clock.
    pub fn annotate_delivery_estimate(&self, label: &str, quote: &RateQuote) -> String {
        self.annotate_delivery_estimate_at(label, quote, self.clock.now())
    }

    /// Appends a tooltip icon carrying the estimated delivery date as of `now`.
    ///
    /// Orders at or after the cutoff hour gain one calendar day. Weekends and
    /// holidays are not skipped.
    pub fn annotate_delivery_estimate_at(
        &self,
        label: &str,
        quote: &RateQuote,
        now: DateTime<FixedOffset>,
    ) -> String {
        let Some(method) = self.config.methods.resolve(&quote.id) else {
            return label.to_string();
        };

        let mut offset = method.delivery_days;
        if now.hour() >= self.config.cutoff_hour {
            offset = offset.saturating_add(1);
        }

        let Some(target) = now
            .date_naive()
            .checked_add_days(Days::new(u64::from(offset)))
        else {
            return label.to_string();
        };

        format!(
            r#"{label}<span title="{SHIPPING_INFO}{date}" data-toggle="tooltip" data-placement="top" data-shipping="{days}" style="display: inline;" class="glyphicon glyphicon-info-sign" aria-hidden="true"></span>"#,
            date = target.format("%m/%d/%Y"),
            days = method.delivery_days,
        )
    }

    /// Marks a free quote's label with a `$0.00` price, at most once.
    pub fn relabel_free_shipping(&self, label: &str, quote: &RateQuote) -> String {
        if !quote.cost.is_free() || label.ends_with(FREE_SHIPPING_FRAGMENT) {
            return label.to_string();
        }
        format!("{label}{FREE_SHIPPING_FRAGMENT}")
    }

    /// Full-label extension point: delivery estimate first, then the free
    /// shipping price.
    pub fn full_label(&self, quote: &RateQuote) -> String {
        let label = self.annotate_delivery_estimate(&quote.label, quote);
        self.relabel_free_shipping(&label, quote)
    }
}
