// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Resolution of program pricing into uniform line items.
//!
//! Programs are priced either with the legacy full/half/subscription fields
//! or with a list of named pricing options. Both shapes are resolved here,
//! once, into `LineItem`s; nothing downstream looks at the pricing model.
//!
//! ## Legacy rules
//!
//! - Full registrations are priced at `full_price`
//! - Half registrations are priced at `half_price`, and contribute nothing
//!   when no half price is set
//! - Subscriptions are priced at `subscription_price`, falling back to
//!   `full_price` when no subscription price is set

use club_ledger_domain::{
    DomainError, LegacyPricing, LegacyRegistrationCounts, Money, Pricing, PricingOption,
    RegistrationCounts, RegistrationEntry, validate_amount, validate_quantity,
};
use serde::Serialize;
use tracing::debug;

/// Label of the legacy full-price line item.
pub const LEGACY_FULL_LABEL: &str = "Full Price";
/// Label of the legacy half-price line item.
pub const LEGACY_HALF_LABEL: &str = "Half Price";
/// Label of the legacy subscription line item.
pub const LEGACY_SUBSCRIPTION_LABEL: &str = "Subscription";

/// `quantity` registrants at `unit_price` each.
///
/// Quantity and unit price are validated non-negative at construction, so
/// every subtotal is non-negative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineItem {
    /// The pricing option this item was resolved from. `None` for legacy
    /// pricing.
    pricing_option_id: Option<String>,
    /// The display name of the price tier.
    name: String,
    /// Number of registrants.
    quantity: i64,
    /// Price per registrant.
    unit_price: Money,
}

impl LineItem {
    /// Creates a line item.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidInput` if the quantity or the unit price
    /// is negative, or the subtotal does not fit in `Money`.
    pub fn new(
        name: impl Into<String>,
        quantity: i64,
        unit_price: Money,
    ) -> Result<Self, DomainError> {
        validate_quantity("quantity", quantity)?;
        validate_amount("unit_price", unit_price)?;
        if quantity.checked_mul(unit_price).is_none() {
            return Err(DomainError::invalid_input(
                "quantity",
                format!("{quantity} x {unit_price} overflows the money range"),
            ));
        }

        Ok(Self {
            pricing_option_id: None,
            name: name.into(),
            quantity,
            unit_price,
        })
    }

    fn for_option(option: &PricingOption, quantity: i64) -> Result<Self, DomainError> {
        let mut item: Self = Self::new(option.name.clone(), quantity, option.price)?;
        item.pricing_option_id = Some(option.id.clone());
        Ok(item)
    }

    /// Returns the pricing option id, if resolved from a pricing option.
    #[must_use]
    pub fn pricing_option_id(&self) -> Option<&str> {
        self.pricing_option_id.as_deref()
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the number of registrants.
    #[must_use]
    pub const fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Returns the price per registrant.
    #[must_use]
    pub const fn unit_price(&self) -> Money {
        self.unit_price
    }

    /// Returns `quantity * unit_price`.
    ///
    /// Cannot overflow: the product is checked at construction and the
    /// fields are immutable.
    #[must_use]
    pub const fn subtotal(&self) -> Money {
        self.quantity * self.unit_price
    }
}

/// Resolves registration counts against a program's pricing.
///
/// Only non-zero items are returned.
///
/// # Arguments
///
/// * `pricing` - The program's pricing
/// * `counts` - The registration counts for one period
///
/// # Errors
///
/// Returns an error if:
/// - A quantity or price is negative
/// - An entry references an unknown or inactive pricing option
/// - The counts do not use the same pricing model as the program
pub fn resolve_line_items(
    pricing: &Pricing,
    counts: &RegistrationCounts,
) -> Result<Vec<LineItem>, DomainError> {
    match (pricing, counts) {
        (Pricing::Legacy(legacy), RegistrationCounts::Legacy(legacy_counts)) => {
            resolve_legacy(legacy, legacy_counts)
        }
        (Pricing::Flexible { options }, RegistrationCounts::Flexible { entries }) => {
            resolve_flexible(options, entries)
        }
        (Pricing::Legacy(_), RegistrationCounts::Flexible { .. }) => {
            Err(DomainError::invalid_input(
                "counts",
                "pricing option entries cannot be priced by a legacy-priced program",
            ))
        }
        (Pricing::Flexible { .. }, RegistrationCounts::Legacy(_)) => {
            Err(DomainError::invalid_input(
                "counts",
                "legacy registration counts cannot be priced by pricing options",
            ))
        }
    }
}

/// Resolves pricing option entries.
///
/// Items are ordered by the pricing option's `order`; entries for the same
/// option keep their input order.
///
/// # Errors
///
/// Returns an error if:
/// - Any entry has a negative quantity
/// - A non-zero entry references an unknown or inactive option
/// - A referenced option has a negative price
pub fn resolve_flexible(
    options: &[PricingOption],
    entries: &[RegistrationEntry],
) -> Result<Vec<LineItem>, DomainError> {
    // Reject bad quantities up front so a zero entry after a negative one
    // cannot mask the error.
    for entry in entries {
        validate_quantity("quantity", entry.quantity)?;
    }

    let mut ordered: Vec<(i32, LineItem)> = Vec::with_capacity(entries.len());
    for entry in entries.iter().filter(|entry| entry.quantity > 0) {
        let option: &PricingOption = find_active_option(options, &entry.pricing_option_id)?;
        ordered.push((option.order, LineItem::for_option(option, entry.quantity)?));
    }

    ordered.sort_by_key(|(order, _)| *order);
    Ok(ordered.into_iter().map(|(_, item)| item).collect())
}

fn find_active_option<'a>(
    options: &'a [PricingOption],
    pricing_option_id: &str,
) -> Result<&'a PricingOption, DomainError> {
    let option: &PricingOption = options
        .iter()
        .find(|option| option.id == pricing_option_id)
        .ok_or_else(|| DomainError::UnknownPricingOption {
            pricing_option_id: pricing_option_id.to_string(),
            inactive: false,
        })?;

    if !option.is_active {
        return Err(DomainError::UnknownPricingOption {
            pricing_option_id: pricing_option_id.to_string(),
            inactive: true,
        });
    }

    Ok(option)
}

/// Resolves legacy full/half/subscription counts.
///
/// # Errors
///
/// Returns `DomainError::InvalidInput` if a count or a price is negative.
pub fn resolve_legacy(
    pricing: &LegacyPricing,
    counts: &LegacyRegistrationCounts,
) -> Result<Vec<LineItem>, DomainError> {
    validate_quantity("full_registrations", counts.full_registrations)?;
    validate_quantity("half_registrations", counts.half_registrations)?;
    validate_quantity("subscription_registrations", counts.subscription_registrations)?;
    validate_amount("full_price", pricing.full_price)?;
    if let Some(half_price) = pricing.half_price {
        validate_amount("half_price", half_price)?;
    }
    if let Some(subscription_price) = pricing.subscription_price {
        validate_amount("subscription_price", subscription_price)?;
    }

    let mut items: Vec<LineItem> = Vec::with_capacity(3);

    if counts.full_registrations > 0 {
        items.push(LineItem::new(
            LEGACY_FULL_LABEL,
            counts.full_registrations,
            pricing.full_price,
        )?);
    }

    if counts.half_registrations > 0 {
        match pricing.half_price {
            Some(half_price) => items.push(LineItem::new(
                LEGACY_HALF_LABEL,
                counts.half_registrations,
                half_price,
            )?),
            None => debug!(
                half_registrations = counts.half_registrations,
                "Half registrations without a half price contribute no revenue"
            ),
        }
    }

    if counts.subscription_registrations > 0 {
        items.push(LineItem::new(
            LEGACY_SUBSCRIPTION_LABEL,
            counts.subscription_registrations,
            pricing.subscription_price.unwrap_or(pricing.full_price),
        )?);
    }

    Ok(items)
}
