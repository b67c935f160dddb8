//! Pricing overrides: per-product optional corrections of the exchange rate,
//! margin, VAT and shipping-fee assumptions used when computing a sale price.
//!
//! The validator is a pure function over the raw form text. It never touches
//! the network; the caller decides what to do with the result.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The four override fields of a product's pricing form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PricingField {
    ExchangeRate,
    MarginRate,
    VatRate,
    ShippingFee,
}

/// Raw pricing form state, exactly as typed by the user.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PricingForm {
    pub exchange_rate: String,
    pub margin_rate: String,
    pub vat_rate: String,
    pub shipping_fee: String,
}

impl PricingForm {
    /// Prefill the form from values already stored on the product.
    /// Absent values stay empty so saving them again is a no-op.
    pub fn from_saved(
        exchange_rate: Option<f64>,
        margin_rate: Option<f64>,
        vat_rate: Option<f64>,
        shipping_fee: Option<f64>,
    ) -> Self {
        let text = |v: Option<f64>| v.map(|n| n.to_string()).unwrap_or_default();
        Self {
            exchange_rate: text(exchange_rate),
            margin_rate: text(margin_rate),
            vat_rate: text(vat_rate),
            shipping_fee: text(shipping_fee),
        }
    }

    pub fn set(&mut self, field: PricingField, value: String) {
        match field {
            PricingField::ExchangeRate => self.exchange_rate = value,
            PricingField::MarginRate => self.margin_rate = value,
            PricingField::VatRate => self.vat_rate = value,
            PricingField::ShippingFee => self.shipping_fee = value,
        }
    }

    pub fn get(&self, field: PricingField) -> &str {
        match field {
            PricingField::ExchangeRate => &self.exchange_rate,
            PricingField::MarginRate => &self.margin_rate,
            PricingField::VatRate => &self.vat_rate,
            PricingField::ShippingFee => &self.shipping_fee,
        }
    }
}

/// Validated partial-update payload for `PATCH /api/products/{id}`.
///
/// A field left empty in the form is omitted from the JSON object entirely,
/// which is how the backend tells "no change" apart from "set to zero".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PricingOverride {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exchange_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vat_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_fee: Option<f64>,
}

impl PricingOverride {
    pub fn is_empty(&self) -> bool {
        self.exchange_rate.is_none()
            && self.margin_rate.is_none()
            && self.vat_rate.is_none()
            && self.shipping_fee.is_none()
    }
}

/// Client-side rejection of a pricing form. The `Display` text is the exact
/// message rendered next to the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("환율은 0보다 커야 합니다.")]
    InvalidExchangeRate,
    #[error("배송비는 0 이상이어야 합니다.")]
    InvalidShippingFee,
    #[error("마진율은 숫자여야 합니다.")]
    MarginNotNumeric,
    #[error("VAT는 숫자여야 합니다.")]
    VatNotNumeric,
    #[error("변경할 값이 없습니다.")]
    NoChanges,
}

/// Empty text means "field absent". Anything else must parse to a finite
/// number; `Err(())` marks text that was present but not a usable number.
fn parse_field(raw: &str) -> Option<Result<f64, ()>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => Some(Ok(v)),
        _ => Some(Err(())),
    }
}

/// Validate a pricing form into an update payload.
///
/// Checks run in a fixed order so the user always sees the same first
/// violation: exchange-rate positivity, shipping-fee non-negativity, then
/// margin and VAT numeric-ness. A form with no present fields is rejected
/// rather than sent as an empty update.
pub fn validate(form: &PricingForm) -> Result<PricingOverride, ValidationError> {
    let exchange_rate = parse_field(&form.exchange_rate);
    let margin_rate = parse_field(&form.margin_rate);
    let vat_rate = parse_field(&form.vat_rate);
    let shipping_fee = parse_field(&form.shipping_fee);

    let exchange_rate = match exchange_rate {
        Some(Ok(v)) if v > 0.0 => Some(v),
        Some(_) => return Err(ValidationError::InvalidExchangeRate),
        None => None,
    };
    let shipping_fee = match shipping_fee {
        Some(Ok(v)) if v >= 0.0 => Some(v),
        Some(_) => return Err(ValidationError::InvalidShippingFee),
        None => None,
    };
    let margin_rate = match margin_rate {
        Some(Ok(v)) => Some(v),
        Some(Err(())) => return Err(ValidationError::MarginNotNumeric),
        None => None,
    };
    let vat_rate = match vat_rate {
        Some(Ok(v)) => Some(v),
        Some(Err(())) => return Err(ValidationError::VatNotNumeric),
        None => None,
    };

    let payload = PricingOverride {
        exchange_rate,
        margin_rate,
        vat_rate,
        shipping_fee,
    };
    if payload.is_empty() {
        return Err(ValidationError::NoChanges);
    }
    Ok(payload)
}

/// Default pricing assumptions; every call site can override them per
/// product through a [`PricingOverride`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricingContext {
    /// CNY → KRW conversion rate.
    pub exchange_rate: f64,
    /// Margin percentage applied on top of cost plus delivery.
    pub default_margin: f64,
    /// VAT percentage applied last.
    pub vat_rate: f64,
    /// Domestic delivery fee in KRW.
    pub default_delivery: f64,
}

impl Default for PricingContext {
    fn default() -> Self {
        Self {
            exchange_rate: 190.0,
            default_margin: 30.0,
            vat_rate: 10.0,
            default_delivery: 0.0,
        }
    }
}

impl PricingContext {
    /// Sale price for one product option:
    /// `((raw + diff) * rate + delivery) * (1 + margin/100) * (1 + vat/100)`,
    /// rounded to 2 decimals with ties going to the even digit, matching the
    /// backend's rounding.
    pub fn sale_price(
        &self,
        raw_price: f64,
        option_price_diff: f64,
        overrides: &PricingOverride,
    ) -> f64 {
        let rate = overrides.exchange_rate.unwrap_or(self.exchange_rate);
        let margin = overrides.margin_rate.unwrap_or(self.default_margin);
        let vat = overrides.vat_rate.unwrap_or(self.vat_rate);
        let delivery = overrides.shipping_fee.unwrap_or(self.default_delivery);

        let base_cost = (raw_price + option_price_diff) * rate;
        let subtotal = base_cost + delivery;
        let with_margin = subtotal * (1.0 + margin / 100.0);
        let final_price = with_margin * (1.0 + vat / 100.0);
        (final_price * 100.0).round_ties_even() / 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(exchange: &str, margin: &str, vat: &str, shipping: &str) -> PricingForm {
        PricingForm {
            exchange_rate: exchange.to_string(),
            margin_rate: margin.to_string(),
            vat_rate: vat.to_string(),
            shipping_fee: shipping.to_string(),
        }
    }

    #[test]
    fn present_fields_pass_through_unchanged() {
        let payload = validate(&form("185.5", "-3.5", "10", "2500")).unwrap();
        assert_eq!(payload.exchange_rate, Some(185.5));
        assert_eq!(payload.margin_rate, Some(-3.5));
        assert_eq!(payload.vat_rate, Some(10.0));
        assert_eq!(payload.shipping_fee, Some(2500.0));
    }

    #[test]
    fn absent_fields_are_omitted_from_the_payload() {
        let payload = validate(&form("", "15", "", "")).unwrap();
        assert_eq!(payload.margin_rate, Some(15.0));
        assert_eq!(payload.exchange_rate, None);

        let json = serde_json::to_value(&payload).unwrap();
        let keys: Vec<&String> = json.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["margin_rate"]);
    }

    #[test]
    fn whitespace_only_counts_as_absent() {
        assert_eq!(
            validate(&form("   ", " ", "", "\t")),
            Err(ValidationError::NoChanges)
        );
    }

    #[test]
    fn zero_exchange_rate_is_rejected() {
        assert_eq!(
            validate(&form("0", "", "", "")),
            Err(ValidationError::InvalidExchangeRate)
        );
        assert_eq!(
            validate(&form("-180", "", "", "")),
            Err(ValidationError::InvalidExchangeRate)
        );
    }

    #[test]
    fn non_numeric_text_is_rejected_per_field() {
        assert_eq!(
            validate(&form("abc", "", "", "")),
            Err(ValidationError::InvalidExchangeRate)
        );
        assert_eq!(
            validate(&form("", "abc", "", "")),
            Err(ValidationError::MarginNotNumeric)
        );
        assert_eq!(
            validate(&form("", "", "10%", "")),
            Err(ValidationError::VatNotNumeric)
        );
        assert_eq!(
            validate(&form("", "", "", "2,500")),
            Err(ValidationError::InvalidShippingFee)
        );
    }

    #[test]
    fn infinite_input_is_not_a_number() {
        assert_eq!(
            validate(&form("", "inf", "", "")),
            Err(ValidationError::MarginNotNumeric)
        );
        assert_eq!(
            validate(&form("", "", "", "1e999")),
            Err(ValidationError::InvalidShippingFee)
        );
    }

    #[test]
    fn negative_shipping_fee_is_rejected_but_zero_is_fine() {
        assert_eq!(
            validate(&form("", "", "", "-1")),
            Err(ValidationError::InvalidShippingFee)
        );
        let payload = validate(&form("", "", "", "0")).unwrap();
        assert_eq!(payload.shipping_fee, Some(0.0));
    }

    #[test]
    fn exchange_rate_violation_wins_over_shipping_fee() {
        // Both fields are bad; the exchange-rate check runs first.
        assert_eq!(
            validate(&form("0", "", "", "-1")),
            Err(ValidationError::InvalidExchangeRate)
        );
        // With the exchange rate valid, the shipping fee is reported.
        assert_eq!(
            validate(&form("185", "x", "", "-1")),
            Err(ValidationError::InvalidShippingFee)
        );
    }

    #[test]
    fn error_messages_match_the_console_text() {
        assert_eq!(
            ValidationError::InvalidExchangeRate.to_string(),
            "환율은 0보다 커야 합니다."
        );
        assert_eq!(
            ValidationError::InvalidShippingFee.to_string(),
            "배송비는 0 이상이어야 합니다."
        );
        assert_eq!(ValidationError::NoChanges.to_string(), "변경할 값이 없습니다.");
    }

    #[test]
    fn sale_price_uses_context_defaults() {
        let ctx = PricingContext {
            exchange_rate: 190.0,
            default_margin: 30.0,
            vat_rate: 10.0,
            default_delivery: 0.0,
        };
        // (12.5 * 190) * 1.3 * 1.1 = 3396.25
        assert_eq!(ctx.sale_price(12.5, 0.0, &PricingOverride::default()), 3396.25);
    }

    #[test]
    fn sale_price_honors_overrides_and_rounds() {
        let ctx = PricingContext::default();
        let overrides = PricingOverride {
            exchange_rate: Some(185.0),
            margin_rate: Some(25.0),
            vat_rate: Some(10.0),
            shipping_fee: Some(3000.0),
        };
        // ((10 + 1.5) * 185 + 3000) * 1.25 * 1.1 = 7050.22 (rounded from 7050.21875)
        assert_eq!(ctx.sale_price(10.0, 1.5, &overrides), 7050.22);
    }

    #[test]
    fn sale_price_rounds_ties_to_even() {
        let ctx = PricingContext::default();
        let overrides = PricingOverride {
            exchange_rate: Some(1.0),
            margin_rate: Some(0.0),
            vat_rate: Some(0.0),
            shipping_fee: Some(0.0),
        };
        // 0.125 * 100 = 12.5 exactly; the tie goes down to the even 12.
        assert_eq!(ctx.sale_price(0.125, 0.0, &overrides), 0.12);
        // 0.625 * 100 = 62.5 exactly; the tie again lands on the even 62.
        assert_eq!(ctx.sale_price(0.625, 0.0, &overrides), 0.62);
    }

    #[test]
    fn form_prefill_round_trips_through_validate() {
        let prefilled = PricingForm::from_saved(Some(185.0), None, Some(10.0), None);
        let payload = validate(&prefilled).unwrap();
        assert_eq!(payload.exchange_rate, Some(185.0));
        assert_eq!(payload.margin_rate, None);
        assert_eq!(payload.vat_rate, Some(10.0));
        assert_eq!(payload.shipping_fee, None);
    }
}
