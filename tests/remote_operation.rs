//! End-to-end composition: a prompt form wrapped in a cancellable remote
//! operation, embedded in an application that can never exit.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use stepwise::checkpoint::Checkpoint;
use stepwise::{as_update_function, fold_steps, Cmd, Message, MessageLog, Step};
use stillwater::prelude::*;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
enum Field {
    Invalid(String),
    Valid(String),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
enum FormMsg {
    TypeString(String),
    Confirm,
}

#[derive(Clone, Debug, PartialEq)]
enum Remote {
    Prompting(Field),
    Loading,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
enum RemoteMsg {
    Form(FormMsg),
    OpResult(Result<bool, String>),
    Cancel,
}

impl Message for RemoteMsg {
    fn name(&self) -> &str {
        match self {
            Self::Form(FormMsg::TypeString(_)) => "Form.TypeString",
            Self::Form(FormMsg::Confirm) => "Form.Confirm",
            Self::OpResult(_) => "OpResult",
            Self::Cancel => "Cancel",
        }
    }
}

/// `None` when cancelled, otherwise the operation's result.
type Outcome = Option<Result<bool, String>>;

#[derive(Clone, Debug, PartialEq)]
enum App {
    Editing(Remote),
    Done(Outcome),
}

fn form(msg: FormMsg, field: &Field) -> Step<Field, FormMsg, String> {
    match (msg, field) {
        (FormMsg::TypeString(text), _) if text.is_empty() => Step::to(Field::Invalid(text)),
        (FormMsg::TypeString(text), _) => Step::to(Field::Valid(text)),
        (FormMsg::Confirm, Field::Valid(text)) => Step::exit(text.clone()),
        (FormMsg::Confirm, Field::Invalid(_)) => Step::stay(),
    }
}

fn set_value(value: String) -> impl Effect<Output = bool, Error = String, Env = ()> {
    from_fn(move |_: &()| {
        if value == "Set" {
            Ok(true)
        } else {
            Err(format!("cannot set {value}"))
        }
    })
}

fn remote(msg: RemoteMsg, state: &Remote) -> Step<Remote, RemoteMsg, Outcome> {
    let cancel = match msg {
        RemoteMsg::Cancel => Step::exit(None),
        _ => Step::stay(),
    };

    let progressed = match (msg, state) {
        (RemoteMsg::Form(form_msg), Remote::Prompting(field)) => form(form_msg, field)
            .map(Remote::Prompting)
            .map_msg(RemoteMsg::Form)
            .on_exit(|value| {
                Step::to(Remote::Loading).with_attempt(RemoteMsg::OpResult, set_value(value))
            }),
        (RemoteMsg::OpResult(result), Remote::Loading) => Step::exit(Some(result)),
        _ => Step::stay(),
    };

    progressed.or_else(cancel)
}

fn app(msg: RemoteMsg, state: &App) -> Step<App, RemoteMsg, Infallible> {
    match state {
        App::Editing(inner) => remote(msg, inner)
            .map(App::Editing)
            .on_exit(|outcome| Step::to(App::Done(outcome))),
        App::Done(_) => Step::stay(),
    }
}

fn prompting(text: &str) -> Remote {
    if text.is_empty() {
        Remote::Prompting(Field::Invalid(text.to_string()))
    } else {
        Remote::Prompting(Field::Valid(text.to_string()))
    }
}

fn type_string(text: &str) -> RemoteMsg {
    RemoteMsg::Form(FormMsg::TypeString(text.to_string()))
}

async fn run_single(cmd: Cmd<RemoteMsg>) -> RemoteMsg {
    let mut effects = cmd.into_effects();
    assert_eq!(effects.len(), 1, "expected exactly one scheduled effect");
    match effects.remove(0).run(&()).await {
        Ok(message) => message,
        Err(never) => match never {},
    }
}

#[tokio::test]
async fn prompt_confirm_load_and_exit() {
    let step = remote(type_string("Set"), &prompting(""));
    assert!(!step.is_exit());
    assert_eq!(step.state(), Some(&prompting("Set")));
    assert!(step.cmd().is_some_and(Cmd::is_empty));

    let step = remote(RemoteMsg::Form(FormMsg::Confirm), &prompting("Set"));
    let Step::To(state, cmd) = step else {
        panic!("confirming a valid field should start loading");
    };
    assert_eq!(state, Remote::Loading);

    let result = run_single(cmd).await;
    assert_eq!(result, RemoteMsg::OpResult(Ok(true)));

    let step = remote(result, &Remote::Loading);
    assert_eq!(step.exit_value(), Some(&Some(Ok(true))));
}

#[tokio::test]
async fn failed_operation_exits_with_error() {
    let step = remote(RemoteMsg::Form(FormMsg::Confirm), &prompting("Other"));
    let Step::To(Remote::Loading, cmd) = step else {
        panic!("expected Loading");
    };

    let result = run_single(cmd).await;
    let step = remote(result, &Remote::Loading);
    assert_eq!(
        step.exit_value(),
        Some(&Some(Err("cannot set Other".to_string())))
    );
}

#[test]
fn confirm_on_invalid_field_stays() {
    let step = remote(RemoteMsg::Form(FormMsg::Confirm), &prompting(""));
    assert!(step.is_stay());
}

#[test]
fn cancel_exits_from_any_state() {
    assert_eq!(
        remote(RemoteMsg::Cancel, &prompting("Set")).exit_value(),
        Some(&None)
    );
    assert_eq!(
        remote(RemoteMsg::Cancel, &Remote::Loading).exit_value(),
        Some(&None)
    );
}

#[test]
fn stray_result_while_prompting_stays() {
    let step = remote(RemoteMsg::OpResult(Ok(true)), &prompting("Set"));
    assert!(step.is_stay());
}

#[test]
fn form_input_while_loading_stays() {
    let step = remote(type_string("late"), &Remote::Loading);
    assert!(step.is_stay());
}

#[tokio::test]
async fn host_update_function_drives_app_to_done() {
    let update = as_update_function(app);
    let state = App::Editing(prompting(""));

    let (state, cmd) = update(type_string("Set"), state);
    assert!(cmd.is_empty());
    assert_eq!(state, App::Editing(prompting("Set")));

    let (state, cmd) = update(RemoteMsg::Form(FormMsg::Confirm), state);
    assert_eq!(state, App::Editing(Remote::Loading));

    let result = run_single(cmd).await;
    let (state, cmd) = update(result, state);
    assert!(cmd.is_empty());
    assert_eq!(state, App::Done(Some(Ok(true))));

    // finished apps ignore further input
    let (state, cmd) = update(RemoteMsg::Cancel, state);
    assert!(cmd.is_empty());
    assert_eq!(state, App::Done(Some(Ok(true))));
}

#[test]
fn cancel_finishes_app_without_result() {
    let update = as_update_function(app);
    let (state, _) = update(RemoteMsg::Cancel, App::Editing(prompting("draft")));
    assert_eq!(state, App::Done(None));
}

#[tokio::test]
async fn replaying_a_session_reschedules_the_operation() {
    let step = fold_steps(
        app,
        (App::Editing(prompting("")), Cmd::none()),
        vec![type_string("Se"), type_string("Set"), RemoteMsg::Form(FormMsg::Confirm)],
    );

    let (state, cmd) = step.run().expect("app never stays on valid input");
    assert_eq!(state, App::Editing(Remote::Loading));
    assert_eq!(run_single(cmd).await, RemoteMsg::OpResult(Ok(true)));
}

#[test]
fn checkpointed_session_resumes_to_same_state() {
    let log = MessageLog::new()
        .record(type_string("Set"))
        .record(RemoteMsg::Form(FormMsg::Confirm))
        .record(RemoteMsg::OpResult(Ok(true)));

    let bytes = Checkpoint::new(log).to_binary().unwrap();
    let restored: Checkpoint<RemoteMsg> = Checkpoint::from_binary(&bytes).unwrap();

    let step = restored
        .log
        .replay(app, (App::Editing(prompting("")), Cmd::none()));
    assert_eq!(step.state(), Some(&App::Done(Some(Ok(true)))));
}
