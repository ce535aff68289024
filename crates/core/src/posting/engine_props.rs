//! Property-based tests for the posting engine.
//!
//! - Generated sale and purchase line sets are always balanced.
//! - Every generated line is one-sided with non-negative amounts.

use proptest::prelude::*;
use razonete_shared::types::{AccountId, JournalEntryId, ProductId};
use rust_decimal::Decimal;

use super::engine::{PostingEngine, ProductMovement, TransactionInput};
use super::roles::{AccountRole, RoleMap};
use crate::ledger::{is_balanced, EntryLine};
use crate::tax::{OperationKind, TaxRates};

/// Strategy to generate gross amounts (0.00 to 100,000.00).
fn gross_amount() -> impl Strategy<Value = Decimal> {
    (0i64..10_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate a tax rate percentage (0.00 to 30.00).
///
/// Kept below the point where purchase recoverables could exceed the
/// invoice total, so generated purchases always decompose.
fn rate() -> impl Strategy<Value = Decimal> {
    (0i64..=3_000i64).prop_map(|bps| Decimal::new(bps, 2))
}

fn rates_strategy() -> impl Strategy<Value = TaxRates> {
    (rate(), rate(), rate(), rate(), rate()).prop_map(|(icms, ipi, pis, cofins, mva)| TaxRates {
        icms,
        ipi,
        pis,
        cofins,
        mva,
    })
}

fn product_strategy() -> impl Strategy<Value = Option<ProductMovement>> {
    prop::option::of((1i64..1_000i64, 1i64..100_000i64).prop_map(|(qty, cost_cents)| {
        ProductMovement {
            product_id: ProductId::new(),
            quantity: Decimal::from(qty),
            unit_cost: Decimal::new(cost_cents, 2),
        }
    }))
}

fn full_role_map() -> RoleMap {
    let mut roles = RoleMap::new();
    for role in [
        AccountRole::Revenue,
        AccountRole::IcmsPayable,
        AccountRole::IpiPayable,
        AccountRole::IcmsStPayable,
        AccountRole::PisPayable,
        AccountRole::CofinsPayable,
        AccountRole::PisExpense,
        AccountRole::CofinsExpense,
        AccountRole::CostOfGoodsSold,
        AccountRole::FinishedGoodsInventory,
        AccountRole::PurchaseInventory,
        AccountRole::IcmsRecoverable,
        AccountRole::PisRecoverable,
        AccountRole::CofinsRecoverable,
    ] {
        roles.assign(role, AccountId::new());
    }
    roles
}

fn make_input(
    kind: OperationKind,
    gross: Decimal,
    rates: TaxRates,
    product: Option<ProductMovement>,
) -> TransactionInput {
    TransactionInput {
        journal_entry_id: JournalEntryId::new(),
        kind,
        main_account_id: AccountId::new(),
        total_gross: gross,
        rates,
        total_net_override: None,
        product,
        manual_debit: None,
        manual_credit: None,
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// *For any* sale with valid rates and an optional product movement,
    /// the generated line set SHALL be balanced.
    #[test]
    fn prop_sale_lines_balanced(
        gross in gross_amount(),
        rates in rates_strategy(),
        product in product_strategy(),
    ) {
        let engine = PostingEngine::new(full_role_map());
        let lines = engine
            .generate_lines(&make_input(OperationKind::Sale, gross, rates, product))
            .unwrap();
        prop_assert!(is_balanced(&lines));
    }

    /// *For any* purchase with valid rates, the generated line set SHALL
    /// be balanced and the inventory debit SHALL never be negative.
    #[test]
    fn prop_purchase_lines_balanced(
        gross in gross_amount(),
        rates in rates_strategy(),
    ) {
        let engine = PostingEngine::new(full_role_map());
        let lines = engine
            .generate_lines(&make_input(OperationKind::Purchase, gross, rates, None))
            .unwrap();
        prop_assert!(is_balanced(&lines));
        prop_assert!(lines[0].debit >= Decimal::ZERO);
    }

    /// *For any* generated decomposition, every line carries a positive
    /// amount on at most one side.
    #[test]
    fn prop_lines_one_sided_non_negative(
        gross in gross_amount(),
        rates in rates_strategy(),
        product in product_strategy(),
    ) {
        let engine = PostingEngine::new(full_role_map());
        for kind in [OperationKind::Sale, OperationKind::Purchase] {
            let lines = engine
                .generate_lines(&make_input(kind, gross, rates, product))
                .unwrap();
            for line in &lines {
                prop_assert!(line.is_one_sided());
                prop_assert!(line.debit >= Decimal::ZERO);
                prop_assert!(line.credit >= Decimal::ZERO);
            }
        }
    }

    /// *For any* sale, the main line's net equals gross + IPI + ICMS-ST.
    #[test]
    fn prop_sale_net_is_gross_plus_on_top_taxes(
        gross in gross_amount(),
        rates in rates_strategy(),
    ) {
        let engine = PostingEngine::new(full_role_map());
        let lines = engine
            .generate_lines(&make_input(OperationKind::Sale, gross, rates, None))
            .unwrap();
        let snapshot = lines[0].taxes.as_ref().unwrap();
        prop_assert_eq!(
            lines[0].debit,
            gross + snapshot.amounts.ipi + snapshot.amounts.icms_st
        );
    }
}

/// Purchase with a product movement still only moves inventory once; the
/// movement rides on the main line.
#[test]
fn purchase_product_rides_main_line() {
    let engine = PostingEngine::new(full_role_map());
    let product = ProductMovement {
        product_id: ProductId::new(),
        quantity: Decimal::from(5),
        unit_cost: Decimal::new(10_00, 2),
    };
    let lines = engine
        .generate_lines(&make_input(
            OperationKind::Purchase,
            Decimal::from(500),
            TaxRates::default(),
            Some(product),
        ))
        .unwrap();

    assert_eq!(lines[0].product_id, Some(product.product_id));
    assert!(lines[1..].iter().all(|l: &EntryLine| l.product_id.is_none()));
}
