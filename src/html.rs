//! Shared page layout, styles and formatting helpers for the HTML views.

use maud::{DOCTYPE, Markup, PreEscaped, html};

use crate::alert::ALERT_CONTAINER_ID;

// Button styles
pub const BUTTON_PRIMARY_STYLE: &str = "w-full px-4 py-2 bg-blue-500
    dark:bg-blue-600 disabled:bg-blue-700 hover:enabled:bg-blue-600 \
    hover:enabled:dark:bg-blue-700 text-white rounded";

pub const BUTTON_SECONDARY_STYLE: &str = "py-2 px-4 text-sm font-medium \
    text-gray-900 bg-white rounded border border-gray-200 hover:bg-gray-100 \
    hover:text-blue-700 dark:bg-gray-800 dark:text-gray-400 \
    dark:border-gray-600 dark:hover:text-white dark:hover:bg-gray-700";

// Form styles
pub const FORM_LABEL_STYLE: &str = "block mb-2 text-sm font-medium text-gray-900 dark:text-white";
pub const FORM_TEXT_INPUT_STYLE: &str = "block w-full p-2.5 rounded text-sm \
    text-gray-900 dark:text-white disabled:text-gray-500 bg-gray-50 \
    dark:bg-gray-700 border border-gray-300 dark:border-gray-600 \
    dark:placeholder-gray-400 focus:ring-blue-600 focus:border-blue-600 \
    focus:dark:border-blue-500 focus:dark:ring-blue-500";

// Page container
pub const PAGE_CONTAINER_STYLE: &str =
    "flex flex-col items-center px-6 py-8 mx-auto lg:py-5 text-gray-900 dark:text-white";

const HTMX_SCRIPT: &str = "https://unpkg.com/htmx.org@2.0.8/dist/htmx.min.js";
const HTMX_RESPONSE_TARGETS_SCRIPT: &str =
    "https://unpkg.com/htmx-ext-response-targets@2.0.4/dist/response-targets.min.js";
const TAILWIND_SCRIPT: &str = "https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4";

pub enum HeadElement {
    /// The file path or URL to a JavaScript script.
    ScriptLink(String),
    /// CSS rules.
    Style(PreEscaped<String>),
}

/// Wrap `content` in the HTML document shared by every page.
///
/// `alert` is rendered into the alert container, for pages that need to
/// report a problem on first load.
pub fn base(
    title: &str,
    head_elements: &[HeadElement],
    content: &Markup,
    alert: Option<Markup>,
) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en"
        {
            head
            {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - Finance Tracker" }

                script src=(TAILWIND_SCRIPT) {}
                script src=(HTMX_SCRIPT) {}
                script src=(HTMX_RESPONSE_TARGETS_SCRIPT) {}

                @for element in head_elements
                {
                    @match element
                    {
                        HeadElement::ScriptLink(path) => script src=(path) {}
                        HeadElement::Style(text) => style { (text) }
                    }
                }
            }

            body
                hx-ext="response-targets"
                class="container max-w-full min-h-screen bg-gray-50 dark:bg-gray-900"
            {
                (content)

                // Alert container for failed requests and out-of-band swaps
                div
                    id=(ALERT_CONTAINER_ID)
                    class="w-full max-w-md px-4"
                    style="position: fixed; bottom: 1rem; left: 50%; transform: translateX(-50%); z-index: 9999;"
                {
                    @if let Some(alert) = alert {
                        (alert)
                    }
                }
            }
        }
    }
}

pub fn error_view(title: &str, header: &str, description: &str, fix: &str) -> Markup {
    // Template adapted from https://flowbite.com/blocks/marketing/404/
    let content = html!(
        section class="bg-white dark:bg-gray-900"
        {
            div class="py-8 px-4 mx-auto max-w-screen-xl lg:py-16 lg:px-6"
            {
                div class="mx-auto max-w-screen-sm text-center"
                {
                    h1
                        class="mb-4 text-7xl tracking-tight font-extrabold
                            lg:text-9xl text-blue-600 dark:text-blue-500"
                    {
                        (header)
                    }

                    p
                        class="mb-4 text-3xl md:text-4xl tracking-tight
                            font-bold text-gray-900 dark:text-white"
                    {
                        (description)
                    }

                    p
                        class="mb-4 text-1xl md:text-2xl tracking-tight
                            text-gray-900 dark:text-white"
                    {
                        (fix)
                    }

                    a
                        href="/"
                        class="inline-flex text-white bg-blue-600
                            hover:bg-blue-800 focus:ring-4 focus:outline-hidden
                            focus:ring-blue-300 font-medium rounded text-sm px-5
                            py-2.5 text-center dark:focus:ring-blue-900 my-4"
                    {
                        "Back to Homepage"
                    }
                }
            }
        }
    );

    base(title, &[], &content, None)
}

/// Formats `amount` with two decimal places, e.g. "-12.30".
pub fn format_amount(amount: f64) -> String {
    let formatted = format!("{amount:.2}");

    // Balances that cancel out, or round to zero, should not carry a sign.
    match formatted.strip_prefix('-') {
        Some(unsigned) if unsigned.chars().all(|c| c == '0' || c == '.') => unsigned.to_owned(),
        _ => formatted,
    }
}

/// Formats `amount` with two decimal places after a currency symbol, e.g. "₹12.30".
pub fn format_currency(currency_symbol: &str, amount: f64) -> String {
    format!("{currency_symbol}{}", format_amount(amount))
}
