use super::declaration::{Category, WealthDeclaration};
use super::labels;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

/// Levy rate applied to positive net wealth (2.5%)
pub const ZAKAT_RATE: Decimal = dec!(0.025);

/// Computed totals for one declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ZakatSummary {
    pub cash_subtotal: Decimal,
    pub investment_subtotal: Decimal,
    pub business_subtotal: Decimal,
    pub liability_subtotal: Decimal,
    pub total_assets: Decimal,
    /// Total assets minus liabilities, may be negative
    pub net_amount: Decimal,
    /// Never negative
    pub zakat_payable: Decimal,
}

/// Message shown alongside the result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Advisory {
    /// Zakat is payable; the figure is an estimate
    Estimate,
    /// Net wealth is at or below the exemption threshold
    BelowNisab,
}

impl Advisory {
    pub fn message(self) -> &'static str {
        match self {
            Advisory::Estimate => labels::ESTIMATE_NOTE,
            Advisory::BelowNisab => labels::BELOW_NISAB_NOTE,
        }
    }

    pub fn is_warning(self) -> bool {
        self == Advisory::BelowNisab
    }
}

impl ZakatSummary {
    pub fn subtotal(&self, category: Category) -> Decimal {
        match category {
            Category::Cash => self.cash_subtotal,
            Category::Investments => self.investment_subtotal,
            Category::Business => self.business_subtotal,
            Category::Liabilities => self.liability_subtotal,
        }
    }

    pub fn is_payable(&self) -> bool {
        self.zakat_payable > Decimal::ZERO
    }

    pub fn advisory(&self) -> Advisory {
        if self.is_payable() {
            Advisory::Estimate
        } else {
            Advisory::BelowNisab
        }
    }
}

/// Zakat owed on a net amount: 2.5% when positive, otherwise exactly zero
pub fn zakat_on(net_amount: Decimal) -> Decimal {
    if net_amount > Decimal::ZERO {
        net_amount * ZAKAT_RATE
    } else {
        Decimal::ZERO
    }
}

/// Aggregate a validated declaration into subtotals, net amount and zakat payable
pub fn calculate_zakat(declaration: &WealthDeclaration) -> ZakatSummary {
    let cash_subtotal = declaration.subtotal(Category::Cash);
    let investment_subtotal = declaration.subtotal(Category::Investments);
    let business_subtotal = declaration.subtotal(Category::Business);
    let liability_subtotal = declaration.subtotal(Category::Liabilities);

    let total_assets = cash_subtotal + investment_subtotal + business_subtotal;
    let net_amount = total_assets - liability_subtotal;
    let zakat_payable = zakat_on(net_amount);

    log::debug!(
        "Subtotals: cash {}, investments {}, business {}, liabilities {}",
        cash_subtotal,
        investment_subtotal,
        business_subtotal,
        liability_subtotal
    );
    log::debug!(
        "Total assets {}, net {}, zakat {}",
        total_assets,
        net_amount,
        zakat_payable
    );

    ZakatSummary {
        cash_subtotal,
        investment_subtotal,
        business_subtotal,
        liability_subtotal,
        total_assets,
        net_amount,
        zakat_payable,
    }
}
