//! Tests for OutcomeFutureExt trait.

use rail_result::prelude_async::*;
use std::sync::atomic::{AtomicU32, Ordering};

async fn ok_after_yield(value: i32) -> Outcome<i32, &'static str> {
    tokio::task::yield_now().await;
    Outcome::ok(value)
}

async fn err_after_yield(error: &'static str) -> Outcome<i32, &'static str> {
    tokio::task::yield_now().await;
    Outcome::err(error)
}

#[test]
fn lift_future_is_send_sync() {
    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}

    type Step = fn(Outcome<i32, ()>) -> Outcome<i32, ()>;

    assert_send::<Lift<std::future::Ready<Outcome<i32, ()>>, Step>>();
    assert_sync::<Lift<std::future::Ready<Outcome<i32, ()>>, Step>>();
}

#[tokio::test]
async fn map_applies_after_resolution() {
    let result = ok_after_yield(20).map(|x| x + 1).await;
    assert_eq!(result, Outcome::Ok(21));
}

#[tokio::test]
async fn map_does_not_evaluate_on_err() {
    let call_count = AtomicU32::new(0);

    let result = err_after_yield("failed")
        .map(|x| {
            call_count.fetch_add(1, Ordering::SeqCst);
            x
        })
        .await;

    assert_eq!(result, Outcome::Err("failed"));
    assert_eq!(call_count.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn map_err_only_touches_errors() {
    let call_count = AtomicU32::new(0);

    let ok = ok_after_yield(1)
        .map_err(|e| {
            call_count.fetch_add(1, Ordering::SeqCst);
            e.len()
        })
        .await;
    assert_eq!(ok, Outcome::Ok(1));
    assert_eq!(call_count.load(Ordering::SeqCst), 0);

    let err = err_after_yield("four").map_err(str::len).await;
    assert_eq!(err, Outcome::Err(4));
}

#[tokio::test]
async fn and_then_flattens_sync_step() {
    let result = ok_after_yield(8)
        .and_then(|x| if x > 5 { Outcome::ok(x * 2) } else { Outcome::err("too small") })
        .await;
    assert_eq!(result, Outcome::Ok(16));
}

#[tokio::test]
async fn and_then_short_circuits() {
    let call_count = AtomicU32::new(0);

    let result = err_after_yield("first")
        .and_then(|x| {
            call_count.fetch_add(1, Ordering::SeqCst);
            Outcome::ok(x)
        })
        .await;

    assert_eq!(result, Outcome::Err("first"));
    assert_eq!(call_count.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn and_then_with_runs_only_on_ok() {
    let result = ok_after_yield(1).and_then_with(|| Outcome::ok("next")).await;
    assert_eq!(result, Outcome::Ok("next"));

    let result = err_after_yield("stop").and_then_with(|| Outcome::ok("next")).await;
    assert_eq!(result, Outcome::Err("stop"));
}

#[tokio::test]
async fn and_replaces_value_or_keeps_error() {
    let replaced = ok_after_yield(1).and(Outcome::ok("other")).await;
    assert_eq!(replaced, Outcome::Ok("other"));

    let kept = err_after_yield("mine").and(Outcome::<&str, &str>::ok("other")).await;
    assert_eq!(kept, Outcome::Err("mine"));
}

#[tokio::test]
async fn map_async_awaits_inner_future() {
    let result = ok_after_yield(3)
        .map_async(|x| async move {
            tokio::task::yield_now().await;
            x.to_string()
        })
        .await;
    assert_eq!(result, Outcome::Ok("3".to_string()));
}

#[tokio::test]
async fn map_err_async_awaits_inner_future() {
    let result = err_after_yield("abc")
        .map_err_async(|e| async move { e.to_uppercase() })
        .await;
    assert_eq!(result, Outcome::Err("ABC".to_string()));
}

#[tokio::test]
async fn and_then_async_short_circuits() {
    let call_count = AtomicU32::new(0);

    let result = err_after_yield("missing")
        .and_then_async(|x| {
            call_count.fetch_add(1, Ordering::SeqCst);
            ok_after_yield(x)
        })
        .await;

    assert_eq!(result, Outcome::Err("missing"));
    assert_eq!(call_count.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn and_then_async_flattens() {
    let result = ok_after_yield(2).and_then_async(|x| ok_after_yield(x * 10)).await;
    assert_eq!(result, Outcome::Ok(20));
}

#[tokio::test]
async fn unwrap_resolves_ok_value() {
    assert_eq!(ok_after_yield(5).unwrap().await, 5);
    assert_eq!(err_after_yield("e").unwrap_err().await, "e");
}

#[tokio::test]
#[should_panic(expected = "called `Outcome::unwrap()` on an `Err` value")]
async fn unwrap_on_err_panics_when_awaited() {
    let _ = err_after_yield("fatal").unwrap().await;
}

#[tokio::test]
#[should_panic(expected = "id must resolve")]
async fn expect_on_err_panics_with_message() {
    let _ = err_after_yield("fatal").expect("id must resolve").await;
}

#[tokio::test]
async fn total_unwraps_never_fail() {
    assert_eq!(err_after_yield("e").unwrap_or(7).await, 7);
    assert_eq!(err_after_yield("e").unwrap_or_else(|e| e.len() as i32).await, 1);
    assert_eq!(err_after_yield("e").unwrap_or_default().await, 0);
    assert_eq!(err_after_yield("e").unwrap_or_none().await, None);
    assert_eq!(ok_after_yield(2).unwrap_or_none().await, Some(2));
    assert_eq!(ok_after_yield(2).unwrap_err_or("none").await, "none");
    assert_eq!(err_after_yield("e").unwrap_err_or_none().await, Some("e"));
}

#[tokio::test]
async fn unwrap_or_else_thunk_not_called_on_ok() {
    let call_count = AtomicU32::new(0);

    let value = ok_after_yield(4)
        .unwrap_or_else(|_| {
            call_count.fetch_add(1, Ordering::SeqCst);
            0
        })
        .await;

    assert_eq!(value, 4);
    assert_eq!(call_count.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn unwrap_or_else_async_awaits_fallback() {
    let value = err_after_yield("e")
        .unwrap_or_else_async(|_| async {
            tokio::task::yield_now().await;
            99
        })
        .await;
    assert_eq!(value, 99);
}

#[tokio::test]
async fn into_result_allows_question_mark() {
    async fn sum() -> Result<i32, &'static str> {
        let a = ok_after_yield(1).into_result().await?;
        let b = err_after_yield("b failed").into_result().await?;
        Ok(a + b)
    }

    assert_eq!(sum().await, Err("b failed"));
}

#[tokio::test]
async fn ready_lifts_an_immediate_outcome() {
    let result = Outcome::<i32, &str>::ok(1).ready().map(|x| x * 3).await;
    assert_eq!(result, Outcome::Ok(3));
}

#[tokio::test]
async fn error_side_unwraps_resolve_without_panicking() {
    let error = ok_after_yield(3)
        .unwrap_err_or_else(|x| if x == 3 { "three" } else { "other" })
        .await;
    assert_eq!(error, "three");
    assert_eq!(err_after_yield("e").unwrap_err_or_else(|_| "unused").await, "e");
    assert_eq!(ok_after_yield(3).unwrap_err_or_default().await, "");
    assert_eq!(err_after_yield("e").unwrap_err_or_default().await, "e");
}

#[tokio::test]
async fn unwrap_err_or_default_on_ok_gives_error_default() {
    let code = async { Outcome::<i32, u8>::ok(1) }.unwrap_err_or_default().await;
    assert_eq!(code, 0);
}

#[tokio::test]
async fn unwrap_err_or_else_thunk_not_called_on_err() {
    let call_count = AtomicU32::new(0);

    let error = err_after_yield("boom")
        .unwrap_err_or_else(|_| {
            call_count.fetch_add(1, Ordering::SeqCst);
            "fallback"
        })
        .await;

    assert_eq!(error, "boom");
    assert_eq!(call_count.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn expect_err_resolves_error_value() {
    assert_eq!(err_after_yield("gone").expect_err("must fail").await, "gone");
}

#[tokio::test]
#[should_panic(expected = "lookup should have failed")]
async fn expect_err_on_ok_panics_with_message() {
    let _ = ok_after_yield(1).expect_err("lookup should have failed").await;
}

#[tokio::test]
async fn and_then_with_async_ignores_value_and_awaits_step() {
    let result = ok_after_yield(1)
        .and_then_with_async(|| async {
            tokio::task::yield_now().await;
            Outcome::<&str, &str>::ok("next")
        })
        .await;
    assert_eq!(result, Outcome::Ok("next"));
}

#[tokio::test]
async fn and_then_with_async_short_circuits() {
    let call_count = AtomicU32::new(0);

    let result = err_after_yield("early")
        .and_then_with_async(|| {
            call_count.fetch_add(1, Ordering::SeqCst);
            async { Outcome::<&str, &str>::ok("never") }
        })
        .await;

    assert_eq!(result, Outcome::Err("early"));
    assert_eq!(call_count.load(Ordering::SeqCst), 0);
}
