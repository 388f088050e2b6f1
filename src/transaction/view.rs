//! HTML rendering for the ledger: balance, transaction list and expense chart.

use maud::{Markup, PreEscaped, html};

use crate::{
    endpoints,
    html::{
        BUTTON_SECONDARY_STYLE, HeadElement, PAGE_CONTAINER_STYLE, base, format_amount,
        format_currency,
    },
    transaction::{
        chart::{ECHARTS_SCRIPT, expense_chart_view},
        core::Transaction,
        form::transaction_form,
        ledger::Ledger,
    },
};

/// The HTML element ID of the ledger fragment that htmx requests replace.
pub const LEDGER_ID: &str = "ledger";

/// The HTML element ID of the balance amount.
pub const BALANCE_AMOUNT_ID: &str = "balance-amount";

/// The HTML element ID of the transaction list.
pub const TRANSACTION_LIST_ID: &str = "transaction-list";

/// Renders the full page: the form and the ledger.
pub fn transactions_page_view(
    ledger: &Ledger,
    currency_symbol: &str,
    alert: Option<Markup>,
) -> Markup {
    let content = html!(
        div class=(PAGE_CONTAINER_STYLE)
        {
            div class="w-full max-w-2xl space-y-8"
            {
                h1 class="text-2xl font-bold" { "Personal Finance Tracker" }

                section
                    class="p-6 bg-white rounded-lg shadow dark:bg-gray-800"
                {
                    h2 class="mb-4 text-xl font-semibold" { "Add Transaction" }

                    (transaction_form())
                }

                (ledger_view(ledger, currency_symbol))
            }
        }
    );

    let head_elements = [
        HeadElement::ScriptLink(ECHARTS_SCRIPT.to_owned()),
        transaction_type_styles(),
    ];

    base("Transactions", &head_elements, &content, alert)
}

/// Renders the balance, transaction list and expense chart.
///
/// This is the fragment that is swapped in after a transaction is added or
/// the transactions are reloaded.
pub fn ledger_view(ledger: &Ledger, currency_symbol: &str) -> Markup {
    let reload_target = format!("#{LEDGER_ID}");

    html!(
        div id=(LEDGER_ID) class="w-full space-y-8"
        {
            section class="p-6 bg-white rounded-lg shadow dark:bg-gray-800"
            {
                div class="flex items-center justify-between"
                {
                    h2 class="text-xl font-semibold"
                    {
                        "Balance: " (currency_symbol)
                        span id=(BALANCE_AMOUNT_ID) { (format_amount(ledger.balance())) }
                    }

                    button
                        type="button"
                        hx-get=(endpoints::ROOT)
                        hx-target=(reload_target)
                        hx-swap="outerHTML"
                        class=(BUTTON_SECONDARY_STYLE)
                    {
                        "Reload"
                    }
                }
            }

            section class="p-6 bg-white rounded-lg shadow dark:bg-gray-800"
            {
                h2 class="mb-4 text-xl font-semibold" { "Transactions" }

                ul id=(TRANSACTION_LIST_ID) class="space-y-2"
                {
                    @for transaction in ledger.transactions() {
                        (transaction_list_item(transaction, currency_symbol))
                    }
                }

                @if ledger.transactions().is_empty() {
                    p class="text-gray-500 dark:text-gray-400" { "No transactions yet." }
                }
            }

            section class="p-6 bg-white rounded-lg shadow dark:bg-gray-800"
            {
                (expense_chart_view(&ledger.expense_totals()))
            }
        }
    )
}

/// A list entry tagged with the transaction type as its class.
fn transaction_list_item(transaction: &Transaction, currency_symbol: &str) -> Markup {
    html!(
        li class=(transaction.type_.as_str())
        {
            (transaction.description) ": " (format_currency(currency_symbol, transaction.amount))
        }
    )
}

fn transaction_type_styles() -> HeadElement {
    HeadElement::Style(PreEscaped(
        r#"
        #transaction-list li {
            padding: 0.5rem 0.75rem;
            border-left: 4px solid #9ca3af;
        }
        #transaction-list li.income {
            border-left-color: #16a34a;
        }
        #transaction-list li.expense {
            border-left-color: #dc2626;
        }
        "#
        .to_owned(),
    ))
}

#[cfg(test)]
mod tests {
    use scraper::Html;

    use crate::{
        test_utils::{assert_valid_html, select_text},
        transaction::{
            core::{Transaction, TransactionType},
            ledger::Ledger,
        },
    };

    use super::{ledger_view, transactions_page_view};

    fn ledger() -> Ledger {
        let mut ledger = Ledger::new();
        ledger.reload(vec![
            Transaction::new("Salary", 1000.0, TransactionType::Income),
            Transaction::new("Rent", 400.5, TransactionType::Expense),
            Transaction::new("Savings", 100.0, TransactionType::Other("transfer".to_owned())),
        ]);
        ledger
    }

    #[test]
    fn renders_balance_with_two_decimals() {
        let html = Html::parse_fragment(&ledger_view(&ledger(), "₹").into_string());

        assert_eq!(select_text(&html, "#balance-amount"), vec!["499.50"]);
    }

    #[test]
    fn renders_list_entries_tagged_by_type() {
        let html = Html::parse_fragment(&ledger_view(&ledger(), "₹").into_string());

        assert_eq!(
            select_text(&html, "#transaction-list li.income"),
            vec!["Salary: ₹1000.00"]
        );
        assert_eq!(
            select_text(&html, "#transaction-list li.expense"),
            vec!["Rent: ₹400.50"]
        );
        assert_eq!(
            select_text(&html, "#transaction-list li.transfer"),
            vec!["Savings: ₹100.00"]
        );
    }

    #[test]
    fn empty_ledger_shows_placeholder() {
        let html = Html::parse_fragment(&ledger_view(&Ledger::new(), "$").into_string());

        assert_eq!(select_text(&html, "#balance-amount"), vec!["0.00"]);
        assert!(select_text(&html, "#transaction-list li").is_empty());
        assert!(html.html().contains("No transactions yet."));
    }

    #[test]
    fn page_is_valid_html() {
        let html =
            Html::parse_document(&transactions_page_view(&ledger(), "₹", None).into_string());

        assert_valid_html(&html);
        assert_eq!(select_text(&html, "#ledger #balance-amount"), vec!["499.50"]);
        assert_eq!(
            select_text(&html, "form#transaction-form button"),
            vec!["Add Transaction"]
        );
    }
}
