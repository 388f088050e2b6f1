#![allow(missing_docs)]

pub(crate) mod form;
pub(crate) mod html;
pub(crate) mod remote_api;

pub(crate) use form::{
    assert_form_input, assert_form_select, assert_form_submit_button_with_text,
    assert_hx_endpoint, must_get_form,
};
pub(crate) use html::{assert_valid_html, parse_html_document, parse_html_fragment, select_text};
pub(crate) use remote_api::{
    spawn_api_with_body, spawn_failing_api, spawn_fake_api, unreachable_api_url,
};
