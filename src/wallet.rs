//! Injected wallet provider bindings (`window.ethereum`)

use leptos::prelude::*;
use nft_market_core::ListingError;
use serde::Serialize;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

#[derive(Serialize)]
struct RpcRequest<'a> {
    method: &'a str,
}

fn provider() -> Result<JsValue, ListingError> {
    let window = web_sys::window().ok_or(ListingError::NoWallet)?;
    let ethereum = js_sys::Reflect::get(&window, &JsValue::from_str("ethereum"))
        .map_err(|_| ListingError::NoWallet)?;
    if ethereum.is_undefined() || ethereum.is_null() {
        return Err(ListingError::NoWallet);
    }
    Ok(ethereum)
}

fn provider_method(ethereum: &JsValue, name: &str) -> Result<js_sys::Function, ListingError> {
    js_sys::Reflect::get(ethereum, &JsValue::from_str(name))
        .ok()
        .and_then(|f| f.dyn_into::<js_sys::Function>().ok())
        .ok_or(ListingError::NoWallet)
}

fn first_account(value: JsValue) -> Option<String> {
    serde_wasm_bindgen::from_value::<Vec<String>>(value)
        .ok()
        .and_then(|accounts| accounts.into_iter().next())
}

async fn request_accounts(method: &str) -> Result<Option<String>, ListingError> {
    let ethereum = provider()?;
    let request = provider_method(&ethereum, "request")?;

    let args = serde_wasm_bindgen::to_value(&RpcRequest { method })
        .map_err(|e| ListingError::Decode(e.to_string()))?;
    let promise: js_sys::Promise = request
        .call1(&ethereum, &args)
        .map_err(|e| ListingError::Wallet(format!("{:?}", e)))?
        .dyn_into()
        .map_err(|e| ListingError::Wallet(format!("{:?}", e)))?;

    let result = wasm_bindgen_futures::JsFuture::from(promise)
        .await
        .map_err(|e| ListingError::Wallet(format!("{} rejected: {:?}", method, e)))?;

    Ok(first_account(result))
}

/// Account the user has already authorised, without prompting
pub async fn current_account() -> Result<Option<String>, ListingError> {
    request_accounts("eth_accounts").await
}

/// Prompt the wallet to connect
pub async fn connect() -> Result<Option<String>, ListingError> {
    request_accounts("eth_requestAccounts").await
}

/// Follow `accountsChanged` for the lifetime of the page
pub fn watch_accounts(set_account: WriteSignal<Option<String>>) -> Result<(), ListingError> {
    let ethereum = provider()?;
    let on = provider_method(&ethereum, "on")?;

    let on_change = Closure::<dyn Fn(JsValue)>::new(move |accounts: JsValue| {
        set_account.set(first_account(accounts));
    });
    on.call2(&ethereum, &JsValue::from_str("accountsChanged"), on_change.as_ref())
        .map_err(|e| ListingError::Wallet(format!("{:?}", e)))?;
    on_change.forget();

    Ok(())
}
