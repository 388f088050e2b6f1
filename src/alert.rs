//! Alert system for displaying success and error messages to users.
//!
//! Alerts are rendered into the `#alert-container` element of the base page,
//! either as the target of a failed htmx request or as an out-of-band swap.

use maud::{Markup, html};

/// ID of the element alerts are rendered into.
pub const ALERT_CONTAINER_ID: &str = "alert-container";

/// A dismissable message shown at the bottom of the page.
#[derive(Debug, Clone, PartialEq)]
pub enum Alert {
    /// An operation completed.
    Success {
        /// The headline.
        message: String,
        /// Extra information, may be empty.
        details: String,
    },
    /// An operation failed.
    Error {
        /// The headline.
        message: String,
        /// Extra information, may be empty.
        details: String,
    },
}

impl Alert {
    /// Render the alert.
    pub fn into_html(self) -> Markup {
        let (message, details, style) = match self {
            Alert::Success { message, details } => (
                message,
                details,
                "text-green-800 bg-green-50 border-green-300 \
                dark:bg-gray-800 dark:text-green-400 dark:border-green-800",
            ),
            Alert::Error { message, details } => (
                message,
                details,
                "text-red-800 bg-red-50 border-red-300 \
                dark:bg-gray-800 dark:text-red-400 dark:border-red-800",
            ),
        };

        html! {
            div
                role="alert"
                class={ "alert flex items-start justify-between gap-4 p-4 mb-4 border rounded-lg " (style) }
            {
                div
                {
                    p class="font-medium" { (message) }

                    @if !details.is_empty() {
                        p class="text-sm" { (details) }
                    }
                }

                button
                    type="button"
                    aria-label="Dismiss"
                    onclick="this.closest('.alert').remove()"
                    class="bg-transparent border-none cursor-pointer"
                {
                    "×"
                }
            }
        }
    }

    /// Render the alert wrapped in an out-of-band swap of the alert container.
    ///
    /// Lets a successful htmx response update the alert container in addition
    /// to its main target.
    pub fn into_oob_html(self) -> Markup {
        html! {
            div id=(ALERT_CONTAINER_ID) hx-swap-oob="innerHTML"
            {
                (self.into_html())
            }
        }
    }
}
