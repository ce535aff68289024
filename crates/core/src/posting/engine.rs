//! Transaction decomposition into balanced entry lines.
//!
//! The engine turns a commercial transaction (a sale or purchase with tax
//! rates, or a manual adjustment) into the set of debit/credit lines that
//! record it. For sales and purchases the generated set is balanced by
//! construction.

use razonete_shared::types::{AccountId, JournalEntryId, ProductId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::PostingError;
use super::roles::{AccountRole, RoleMap};
use crate::ledger::{EntryLine, TaxSnapshot, BALANCE_TOLERANCE};
use crate::tax::{calculate_taxes, OperationKind, TaxBreakdown, TaxRates};

/// Product movement attached to a transaction.
///
/// On a sale this drives the cost-of-goods-sold pair; quantity and unit
/// cost are captured at posting time so later cost changes do not rewrite
/// history.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ProductMovement {
    /// The product being moved.
    pub product_id: ProductId,
    /// Quantity moved.
    pub quantity: Decimal,
    /// Unit cost at posting time.
    pub unit_cost: Decimal,
}

/// A commercial transaction to decompose into entry lines.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionInput {
    /// The journal entry the generated lines belong to.
    pub journal_entry_id: JournalEntryId,
    /// Operation kind; selects the decomposition rules.
    pub kind: OperationKind,
    /// The transaction's counterparty account: debited on a sale
    /// (receivable or cash), credited on a purchase (supplier payable).
    /// Manual entries post their single line here.
    pub main_account_id: AccountId,
    /// Gross transaction amount.
    pub total_gross: Decimal,
    /// Tax rates to apply.
    pub rates: TaxRates,
    /// Invoice net total override; respected verbatim when present.
    pub total_net_override: Option<Decimal>,
    /// Product movement, when the transaction moves inventory.
    pub product: Option<ProductMovement>,
    /// Manual debit amount; only read for [`OperationKind::Manual`].
    pub manual_debit: Option<Decimal>,
    /// Manual credit amount; only read for [`OperationKind::Manual`].
    pub manual_credit: Option<Decimal>,
}

/// Decomposes transactions into entry lines against a fixed role mapping.
#[derive(Debug, Clone)]
pub struct PostingEngine {
    roles: RoleMap,
}

impl PostingEngine {
    /// Creates an engine over the caller's role mapping.
    #[must_use]
    pub fn new(roles: RoleMap) -> Self {
        Self { roles }
    }

    /// Generates the entry lines recording a transaction.
    ///
    /// Sales and purchases yield balanced line sets; a manual entry yields
    /// the single line the caller described, leaving balance to the rest of
    /// its journal entry.
    ///
    /// # Errors
    ///
    /// Returns [`PostingError`] when tax inputs are invalid, required
    /// account roles are unmapped (all missing roles reported at once), a
    /// sale's net override disagrees with the computed invoice net, a
    /// purchase's recoverable taxes exceed its total, or a manual line is
    /// malformed.
    #[tracing::instrument(
        skip(self, input),
        fields(kind = ?input.kind, gross = %input.total_gross)
    )]
    pub fn generate_lines(&self, input: &TransactionInput) -> Result<Vec<EntryLine>, PostingError> {
        let taxes = calculate_taxes(
            input.total_gross,
            &input.rates,
            input.kind,
            input.total_net_override,
        )?;

        match input.kind {
            OperationKind::Sale => self.sale_lines(input, &taxes),
            OperationKind::Purchase => self.purchase_lines(input, &taxes),
            OperationKind::Manual => Self::manual_line(input, &taxes),
        }
    }

    /// Sale decomposition.
    ///
    /// Debits the counterparty for the invoice net, credits gross revenue,
    /// then carves each tax out: taxes billed on top (IPI, ICMS-ST) are
    /// credited to their payable accounts, taxes embedded in gross (ICMS)
    /// are debited back against revenue, and PIS/COFINS are expensed
    /// against the period. A product movement appends the cost pair.
    ///
    /// A net override that disagrees with `gross + IPI + ICMS-ST` is
    /// rejected up front: the main debit would no longer match the credit
    /// side.
    fn sale_lines(
        &self,
        input: &TransactionInput,
        taxes: &TaxBreakdown,
    ) -> Result<Vec<EntryLine>, PostingError> {
        let expected_net = input.total_gross + taxes.ipi + taxes.icms_st;
        if (taxes.final_total_net - expected_net).abs() > BALANCE_TOLERANCE {
            return Err(PostingError::NetOverrideMismatch {
                supplied: taxes.final_total_net,
                expected: expected_net,
            });
        }

        let mut needed = vec![AccountRole::Revenue];
        if taxes.ipi > Decimal::ZERO {
            needed.push(AccountRole::IpiPayable);
        }
        if taxes.icms > Decimal::ZERO {
            needed.push(AccountRole::IcmsPayable);
        }
        if taxes.icms_st > Decimal::ZERO {
            needed.push(AccountRole::IcmsStPayable);
        }
        if taxes.pis > Decimal::ZERO {
            needed.extend([AccountRole::PisExpense, AccountRole::PisPayable]);
        }
        if taxes.cofins > Decimal::ZERO {
            needed.extend([AccountRole::CofinsExpense, AccountRole::CofinsPayable]);
        }
        if input.product.is_some() {
            needed.extend([
                AccountRole::CostOfGoodsSold,
                AccountRole::FinishedGoodsInventory,
            ]);
        }
        self.roles.require(&needed)?;

        let je = input.journal_entry_id;
        let revenue = self.roles.resolved(AccountRole::Revenue)?;

        let mut lines = Vec::new();
        lines.push(Self::main_line(
            input,
            taxes,
            EntryLine::debit(je, input.main_account_id, taxes.final_total_net),
        ));
        lines.push(EntryLine::credit(je, revenue, input.total_gross));

        if taxes.ipi > Decimal::ZERO {
            let ipi_payable = self.roles.resolved(AccountRole::IpiPayable)?;
            lines.push(EntryLine::credit(je, ipi_payable, taxes.ipi));
        }
        if taxes.icms > Decimal::ZERO {
            let icms_payable = self.roles.resolved(AccountRole::IcmsPayable)?;
            lines.push(EntryLine::debit(je, revenue, taxes.icms));
            lines.push(EntryLine::credit(je, icms_payable, taxes.icms));
        }
        if taxes.icms_st > Decimal::ZERO {
            let st_payable = self.roles.resolved(AccountRole::IcmsStPayable)?;
            lines.push(EntryLine::credit(je, st_payable, taxes.icms_st));
        }
        if taxes.pis > Decimal::ZERO {
            let expense = self.roles.resolved(AccountRole::PisExpense)?;
            let payable = self.roles.resolved(AccountRole::PisPayable)?;
            lines.push(EntryLine::debit(je, expense, taxes.pis));
            lines.push(EntryLine::credit(je, payable, taxes.pis));
        }
        if taxes.cofins > Decimal::ZERO {
            let expense = self.roles.resolved(AccountRole::CofinsExpense)?;
            let payable = self.roles.resolved(AccountRole::CofinsPayable)?;
            lines.push(EntryLine::debit(je, expense, taxes.cofins));
            lines.push(EntryLine::credit(je, payable, taxes.cofins));
        }

        if let Some(product) = &input.product {
            let cogs = self.roles.resolved(AccountRole::CostOfGoodsSold)?;
            let inventory = self.roles.resolved(AccountRole::FinishedGoodsInventory)?;
            let cost = product.quantity * product.unit_cost;
            lines.push(Self::with_product(
                product,
                EntryLine::debit(je, cogs, cost),
            ));
            lines.push(Self::with_product(
                product,
                EntryLine::credit(je, inventory, cost),
            ));
        }

        Ok(lines)
    }

    /// Purchase decomposition.
    ///
    /// Recoverable taxes (ICMS, PIS, COFINS) become asset debits and are
    /// carved out of the inventory debit; the supplier is credited the full
    /// invoice net. The carve-out is what keeps the set balanced.
    fn purchase_lines(
        &self,
        input: &TransactionInput,
        taxes: &TaxBreakdown,
    ) -> Result<Vec<EntryLine>, PostingError> {
        let mut needed = vec![AccountRole::PurchaseInventory];
        if taxes.icms > Decimal::ZERO {
            needed.push(AccountRole::IcmsRecoverable);
        }
        if taxes.pis > Decimal::ZERO {
            needed.push(AccountRole::PisRecoverable);
        }
        if taxes.cofins > Decimal::ZERO {
            needed.push(AccountRole::CofinsRecoverable);
        }
        self.roles.require(&needed)?;

        let net = taxes.final_total_net;
        let recoverable = taxes.icms + taxes.pis + taxes.cofins;
        if recoverable > net {
            return Err(PostingError::RecoverableExceedsNet { recoverable, net });
        }

        let je = input.journal_entry_id;
        let inventory = self.roles.resolved(AccountRole::PurchaseInventory)?;

        let mut lines = Vec::new();
        lines.push(Self::main_line(
            input,
            taxes,
            EntryLine::debit(je, inventory, net - recoverable),
        ));

        if taxes.icms > Decimal::ZERO {
            let account = self.roles.resolved(AccountRole::IcmsRecoverable)?;
            lines.push(EntryLine::debit(je, account, taxes.icms));
        }
        if taxes.pis > Decimal::ZERO {
            let account = self.roles.resolved(AccountRole::PisRecoverable)?;
            lines.push(EntryLine::debit(je, account, taxes.pis));
        }
        if taxes.cofins > Decimal::ZERO {
            let account = self.roles.resolved(AccountRole::CofinsRecoverable)?;
            lines.push(EntryLine::debit(je, account, taxes.cofins));
        }

        lines.push(EntryLine::credit(je, input.main_account_id, net));
        Ok(lines)
    }

    /// Manual entry: one line, exactly as the caller described it.
    fn manual_line(
        input: &TransactionInput,
        taxes: &TaxBreakdown,
    ) -> Result<Vec<EntryLine>, PostingError> {
        let debit = input.manual_debit.unwrap_or(Decimal::ZERO);
        let credit = input.manual_credit.unwrap_or(Decimal::ZERO);

        if debit > Decimal::ZERO && credit > Decimal::ZERO {
            return Err(PostingError::DebitAndCreditBothSet);
        }
        let line = if debit > Decimal::ZERO {
            EntryLine::debit(input.journal_entry_id, input.main_account_id, debit)
        } else if credit > Decimal::ZERO {
            EntryLine::credit(input.journal_entry_id, input.main_account_id, credit)
        } else {
            return Err(PostingError::MissingAmount);
        };

        Ok(vec![Self::main_line(input, taxes, line)])
    }

    /// Attaches the transaction snapshot to the main line.
    fn main_line(input: &TransactionInput, taxes: &TaxBreakdown, mut line: EntryLine) -> EntryLine {
        line.total_gross = Some(input.total_gross);
        line.total_net = Some(taxes.final_total_net);
        line.taxes = Some(TaxSnapshot {
            rates: input.rates,
            amounts: *taxes,
        });
        if let Some(product) = &input.product {
            line = Self::with_product(product, line);
        }
        line
    }

    /// Attaches product movement fields to a line.
    fn with_product(product: &ProductMovement, mut line: EntryLine) -> EntryLine {
        line.product_id = Some(product.product_id);
        line.quantity = Some(product.quantity);
        line.unit_cost = Some(product.unit_cost);
        line
    }
}
