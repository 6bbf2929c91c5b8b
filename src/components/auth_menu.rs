//! Account menu: login/register tab panel or the authenticated profile view.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything shown for a signed-in user is derived from the persisted
//! session token; the server remains the real authentication boundary. The
//! tab panel enforces that exactly one of login/register is visible.

#[cfg(test)]
#[path = "auth_menu_test.rs"]
mod auth_menu_test;

use leptos::prelude::*;

use crate::state::auth::{AuthState, AuthTab, SESSION_TOKEN_KEY};
use crate::util::avatar::avatar_url;

const MISMATCH_MESSAGE: &str = "Passwords do not match.";
const REGISTERED_MESSAGE: &str = "Registration successful! Please sign in.";

/// Validated login form input.
fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// Validated register form input. The confirmation check runs here, before
/// any request exists to send.
fn validate_register_input(
    username: &str,
    email: &str,
    password: &str,
    confirm: &str,
) -> Result<(String, String, String), &'static str> {
    let username = username.trim();
    let email = email.trim();
    if username.is_empty() || email.is_empty() || password.is_empty() {
        return Err("Fill in every field.");
    }
    if password != confirm {
        return Err(MISMATCH_MESSAGE);
    }
    Ok((username.to_owned(), email.to_owned(), password.to_owned()))
}

/// Account menu: profile view when a session user is present, otherwise the
/// login/register tab panel.
#[component]
pub fn AuthMenu() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    view! {
        <div class="account-menu">
            <Show when=move || auth.get().user.is_some() fallback=move || view! { <AuthTabs/> }>
                <ProfileMenu/>
            </Show>
        </div>
    }
}

/// Profile dropdown for the authenticated view.
#[component]
fn ProfileMenu() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let username = move || auth.get().user.map(|u| u.username).unwrap_or_default();
    let email = move || auth.get().user.map(|u| u.email).unwrap_or_default();
    let avatar = move || auth.get().user.map(|u| avatar_url(&u.email)).unwrap_or_default();

    let on_logout = move |_| {
        crate::util::storage::remove(SESSION_TOKEN_KEY);
        auth.update(|a| a.user = None);
    };

    view! {
        <div class="profile-menu">
            <img class="profile-menu__avatar" src=avatar alt="avatar"/>
            <div class="profile-menu__dropdown">
                <p class="profile-menu__welcome">"Welcome, " {username} "!"</p>
                <p class="profile-menu__email">{email}</p>
                <button class="profile-menu__logout" on:click=on_logout>
                    "Log out"
                </button>
            </div>
        </div>
    }
}

/// Unauthenticated view: mutually exclusive login/register tabs.
#[component]
fn AuthTabs() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let tab = move || auth.get().tab;

    view! {
        <div class="auth-tabs">
            <div class="auth-tabs__buttons">
                <button
                    class="auth-tabs__button"
                    class:active=move || tab() == AuthTab::Login
                    on:click=move |_| auth.update(|a| a.tab = AuthTab::Login)
                >
                    "Sign in"
                </button>
                <button
                    class="auth-tabs__button"
                    class:active=move || tab() == AuthTab::Register
                    on:click=move |_| auth.update(|a| a.tab = AuthTab::Register)
                >
                    "Register"
                </button>
            </div>
            <div class="auth-tabs__pane" class:active=move || tab() == AuthTab::Login>
                <LoginForm/>
            </div>
            <div class="auth-tabs__pane" class:active=move || tab() == AuthTab::Register>
                <RegisterForm/>
            </div>
        </div>
    }
}

#[component]
fn LoginForm() -> impl IntoView {
    #[cfg(feature = "csr")]
    let auth = expect_context::<RwSignal<AuthState>>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) =
            match validate_login_input(&email.get(), &password.get()) {
                Ok(values) => values,
                Err(msg) => {
                    message.set(msg.to_owned());
                    return;
                }
            };
        busy.set(true);
        message.set("Signing in...".to_owned());

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::login(&email_value, &password_value).await {
                Ok(token) => {
                    crate::util::storage::save_string(SESSION_TOKEN_KEY, &token);
                    auth.update(|a| {
                        a.user = crate::util::token::decode_session_user(&token);
                    });
                    message.set(String::new());
                    password.set(String::new());
                }
                Err(e) => message.set(e),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (email_value, password_value);
        }
    };

    view! {
        <form class="auth-form" on:submit=on_submit>
            <input
                class="auth-form__input"
                type="email"
                placeholder="you@example.com"
                prop:value=move || email.get()
                on:input=move |ev| email.set(event_target_value(&ev))
            />
            <input
                class="auth-form__input"
                type="password"
                placeholder="Password"
                prop:value=move || password.get()
                on:input=move |ev| password.set(event_target_value(&ev))
            />
            <button class="auth-form__submit" type="submit" disabled=move || busy.get()>
                "Sign in"
            </button>
            <Show when=move || !message.get().is_empty()>
                <p class="auth-form__message">{move || message.get()}</p>
            </Show>
        </form>
    }
}

#[component]
fn RegisterForm() -> impl IntoView {
    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (username_value, email_value, password_value) = match validate_register_input(
            &username.get(),
            &email.get(),
            &password.get(),
            &confirm.get(),
        ) {
            Ok(values) => values,
            Err(msg) => {
                message.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        message.set("Creating account...".to_owned());

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::register(&username_value, &email_value, &password_value).await {
                Ok(()) => {
                    message.set(REGISTERED_MESSAGE.to_owned());
                    username.set(String::new());
                    email.set(String::new());
                    password.set(String::new());
                    confirm.set(String::new());
                }
                Err(e) => message.set(e),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (username_value, email_value, password_value);
        }
    };

    view! {
        <form class="auth-form" on:submit=on_submit>
            <input
                class="auth-form__input"
                type="text"
                placeholder="Username"
                prop:value=move || username.get()
                on:input=move |ev| username.set(event_target_value(&ev))
            />
            <input
                class="auth-form__input"
                type="email"
                placeholder="you@example.com"
                prop:value=move || email.get()
                on:input=move |ev| email.set(event_target_value(&ev))
            />
            <input
                class="auth-form__input"
                type="password"
                placeholder="Password"
                prop:value=move || password.get()
                on:input=move |ev| password.set(event_target_value(&ev))
            />
            <input
                class="auth-form__input"
                type="password"
                placeholder="Confirm password"
                prop:value=move || confirm.get()
                on:input=move |ev| confirm.set(event_target_value(&ev))
            />
            <button class="auth-form__submit" type="submit" disabled=move || busy.get()>
                "Create account"
            </button>
            <Show when=move || !message.get().is_empty()>
                <p class="auth-form__message">{move || message.get()}</p>
            </Show>
        </form>
    }
}
