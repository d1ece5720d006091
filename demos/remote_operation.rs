//! Remote Operation
//!
//! This example wraps a small prompt form in a remote operation that can be
//! cancelled at any time, then embeds it in an application loop.
//!
//! Key concepts:
//! - Sub-machines exit with a value (`Step::exit`)
//! - Parents embed them with `map`, `map_msg` and `on_exit`
//! - Cancellation is just a higher-priority exit merged with `or_else`
//! - The host runs effects against its own environment
//!
//! Run with: cargo run --example remote_operation

use std::convert::Infallible;
use std::sync::Arc;
use stepwise::{as_update_function, Cmd, Step};
use stillwater::prelude::*;

// Host environment the remote operation runs against
#[derive(Clone)]
struct ApiEnv {
    accepted: Arc<Vec<String>>,
}

#[derive(Debug, Clone)]
enum Field {
    Invalid(String),
    Valid(String),
}

#[derive(Debug, Clone)]
enum FormMsg {
    TypeString(String),
    Confirm,
}

#[derive(Debug, Clone)]
enum Remote {
    Prompting(Field),
    Loading,
}

#[derive(Debug, Clone)]
enum Msg {
    Form(FormMsg),
    OpResult(Result<bool, String>),
    Cancel,
}

#[derive(Debug)]
enum App {
    Editing(Remote),
    Done(Option<Result<bool, String>>),
}

// Prompt form: exits with the confirmed text
fn form(msg: FormMsg, field: &Field) -> Step<Field, FormMsg, String, ApiEnv> {
    match (msg, field) {
        (FormMsg::TypeString(text), _) if text.trim().is_empty() => {
            Step::to(Field::Invalid(text))
        }
        (FormMsg::TypeString(text), _) => Step::to(Field::Valid(text)),
        (FormMsg::Confirm, Field::Valid(text)) => Step::exit(text.clone()),
        (FormMsg::Confirm, Field::Invalid(_)) => Step::stay(),
    }
}

// Effectful operation - reads the host environment when run
fn submit(value: String) -> impl Effect<Output = bool, Error = String, Env = ApiEnv> {
    from_fn(move |env: &ApiEnv| {
        if env.accepted.contains(&value) {
            Ok(true)
        } else {
            Err(format!("server rejected '{value}'"))
        }
    })
}

fn remote(msg: Msg, state: &Remote) -> Step<Remote, Msg, Option<Result<bool, String>>, ApiEnv> {
    let cancel = match msg {
        Msg::Cancel => Step::exit(None),
        _ => Step::stay(),
    };

    let progressed = match (msg, state) {
        (Msg::Form(form_msg), Remote::Prompting(field)) => form(form_msg, field)
            .map(Remote::Prompting)
            .map_msg(Msg::Form)
            .on_exit(|value| Step::to(Remote::Loading).with_attempt(Msg::OpResult, submit(value))),
        (Msg::OpResult(result), Remote::Loading) => Step::exit(Some(result)),
        _ => Step::stay(),
    };

    progressed.or_else(cancel)
}

fn app(msg: Msg, state: &App) -> Step<App, Msg, Infallible, ApiEnv> {
    match state {
        App::Editing(inner) => remote(msg, inner)
            .map(App::Editing)
            .on_exit(|outcome| Step::to(App::Done(outcome))),
        App::Done(_) => Step::stay(),
    }
}

// Minimal host loop: apply a message, then run the resulting effects
async fn dispatch(
    update: &impl Fn(Msg, App) -> (App, Cmd<Msg, ApiEnv>),
    env: &ApiEnv,
    state: App,
    msg: Msg,
) -> App {
    println!("  -> {:?}", msg);
    let (mut state, cmd) = update(msg, state);
    println!("     state: {:?} ({} effect(s))", state, cmd.len());

    for effect in cmd.into_effects() {
        let follow_up = match effect.run(env).await {
            Ok(message) => message,
            Err(never) => match never {},
        };
        state = Box::pin(dispatch(update, env, state, follow_up)).await;
    }
    state
}

#[tokio::main]
async fn main() {
    println!("=== Remote Operation Example ===\n");

    let env = ApiEnv {
        accepted: Arc::new(vec!["Set".to_string()]),
    };
    let update = as_update_function(app);

    println!("Session 1: type, confirm, server accepts");
    let mut state = App::Editing(Remote::Prompting(Field::Invalid(String::new())));
    for msg in [
        Msg::Form(FormMsg::Confirm),
        Msg::Form(FormMsg::TypeString("Set".to_string())),
        Msg::Form(FormMsg::Confirm),
    ] {
        state = dispatch(&update, &env, state, msg).await;
    }
    println!("  Final: {:?}\n", state);

    println!("Session 2: server rejects the value");
    let mut state = App::Editing(Remote::Prompting(Field::Invalid(String::new())));
    for msg in [
        Msg::Form(FormMsg::TypeString("Unset".to_string())),
        Msg::Form(FormMsg::Confirm),
    ] {
        state = dispatch(&update, &env, state, msg).await;
    }
    println!("  Final: {:?}\n", state);

    println!("Session 3: cancelled while prompting");
    let state = App::Editing(Remote::Prompting(Field::Valid("draft".to_string())));
    let state = dispatch(&update, &env, state, Msg::Cancel).await;
    println!("  Final: {:?}\n", state);

    println!("Key Takeaways:");
    println!("- The form knows nothing about loading or cancelling");
    println!("- Confirm on an invalid field is a Stay, so nothing changes");
    println!("- Cancel wins because an exit beats any continuation in or_else");
    println!("- Effects are only data until the host runs them");

    println!("\n=== Example Complete ===");
}
